//! Transient notification model.
//!
//! # Design
//! - Toasts are plain data; the host component owns timers and rendering.
//! - Each toast gets one timer keyed by id, started when it first appears.
//! - Ids are monotonic per queue so dismissal never hits a newer toast.
//! - The queue is a reducer so timers firing in the same tick never drop updates.

use std::rc::Rc;
use yew::functional::Reducible;

/// How long a toast stays on screen before auto-dismissal.
pub const TOAST_DURATION_MS: u32 = 2_500;
/// Maximum toasts visible at once; older entries are dropped first.
pub const MAX_VISIBLE_TOASTS: usize = 4;

/// Toast variants used across the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    /// Success toast.
    Success,
    /// Error toast.
    Error,
}

impl ToastKind {
    /// CSS modifier class for the variant.
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// A message waiting to be shown, before it has been assigned an id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Severity classification.
    pub kind: ToastKind,
    /// Display message.
    pub message: String,
}

impl Notice {
    /// Success notice.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Success,
            message: message.into(),
        }
    }

    /// Error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ToastKind::Error,
            message: message.into(),
        }
    }
}

/// Toast payload used by the host and app state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Monotonic toast identifier.
    pub id: u64,
    /// Display message for the toast.
    pub message: String,
    /// Severity classification.
    pub kind: ToastKind,
}

/// Ordered list of visible toasts plus the id counter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    items: Vec<Toast>,
}

impl ToastQueue {
    /// Visible toasts, oldest first.
    #[must_use]
    pub fn items(&self) -> &[Toast] {
        &self.items
    }

    /// Return a queue with `notice` appended, trimmed to [`MAX_VISIBLE_TOASTS`].
    #[must_use]
    pub fn pushed(&self, notice: Notice) -> Self {
        let id = self.next_id + 1;
        let mut items = self.items.clone();
        items.push(Toast {
            id,
            message: notice.message,
            kind: notice.kind,
        });
        if items.len() > MAX_VISIBLE_TOASTS {
            let drain = items.len() - MAX_VISIBLE_TOASTS;
            items.drain(0..drain);
        }
        Self { next_id: id, items }
    }

    /// Return a queue without the toast identified by `id`.
    #[must_use]
    pub fn dismissed(&self, id: u64) -> Self {
        Self {
            next_id: self.next_id,
            items: self
                .items
                .iter()
                .filter(|toast| toast.id != id)
                .cloned()
                .collect(),
        }
    }
}

/// Mutations accepted by [`ToastQueue`] as a reducer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToastAction {
    /// Show a new toast.
    Push(Notice),
    /// Remove a toast by id.
    Dismiss(u64),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(match action {
            ToastAction::Push(notice) => self.pushed(notice),
            ToastAction::Dismiss(id) => self.dismissed(id),
        })
    }
}

/// Timer changes needed to match the visible toasts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimerPlan {
    /// Visible toasts that have no timer yet.
    pub start: Vec<u64>,
    /// Running timers whose toast is gone.
    pub cancel: Vec<u64>,
}

/// Diff the ids with a running timer against the visible toasts.
///
/// Toasts that already have a timer keep it, so a push or dismissal never
/// extends how long an older toast stays on screen.
#[must_use]
pub fn plan_timers(running: impl IntoIterator<Item = u64>, visible: &[Toast]) -> TimerPlan {
    let running: Vec<u64> = running.into_iter().collect();
    TimerPlan {
        start: visible
            .iter()
            .map(|toast| toast.id)
            .filter(|id| !running.contains(id))
            .collect(),
        cancel: running
            .into_iter()
            .filter(|id| !visible.iter().any(|toast| toast.id == *id))
            .collect(),
    }
}
