//! Responsive breakpoint definitions for the Web UI.

/// Individual breakpoint with an inclusive minimum width and optional maximum.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoint {
    /// Token name, also used in CSS custom properties.
    pub name: &'static str,
    /// Inclusive lower bound in CSS pixels.
    pub min_width: u16,
    /// Inclusive upper bound in CSS pixels; `None` for the last tier.
    pub max_width: Option<u16>,
}

/// Phones narrower than a medium handset.
pub const BASE: Breakpoint = Breakpoint {
    name: "base",
    min_width: 0,
    max_width: Some(374),
};
/// Medium handsets; the form's secondary buttons show spacer boxes from here.
pub const MOBILE_M: Breakpoint = Breakpoint {
    name: "mobileM",
    min_width: 375,
    max_width: Some(479),
};
/// Large phones.
pub const SM: Breakpoint = Breakpoint {
    name: "sm",
    min_width: 480,
    max_width: Some(767),
};
/// Tablets.
pub const MD: Breakpoint = Breakpoint {
    name: "md",
    min_width: 768,
    max_width: Some(991),
};
/// Laptops.
pub const LG: Breakpoint = Breakpoint {
    name: "lg",
    min_width: 992,
    max_width: Some(1279),
};
/// Desktops.
pub const XL: Breakpoint = Breakpoint {
    name: "xl",
    min_width: 1280,
    max_width: None,
};

/// Ordered breakpoints emitted as CSS variables.
pub const BREAKPOINTS: [Breakpoint; 6] = [BASE, MOBILE_M, SM, MD, LG, XL];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_start_at_zero_and_end_open() {
        assert_eq!(BREAKPOINTS[0].min_width, 0);
        assert_eq!(BREAKPOINTS[5].max_width, None);
        assert_eq!(MOBILE_M.min_width, 375);
    }

    #[test]
    fn breakpoints_are_contiguous() {
        for pair in BREAKPOINTS.windows(2) {
            let upper = pair[0].max_width.map(|max| max + 1);
            assert_eq!(upper, Some(pair[1].min_width));
        }
    }
}
