//! Error types for the app bootstrap.

use thiserror::Error;

/// Failures that abort startup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BootstrapError {
    /// The host page has no element to mount into.
    #[error("mount point #{id} not found in the host document")]
    MountPointMissing {
        /// Element id that was looked up.
        id: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::BootstrapError;

    #[test]
    fn mount_point_error_names_the_element() {
        let err = BootstrapError::MountPointMissing { id: "root" };
        assert_eq!(
            err.to_string(),
            "mount point #root not found in the host document"
        );
    }
}
