//! 用户通知
//!
//! Outcomes of user actions that are surfaced as transient messages. The
//! shell decides how to render them (and may localize the text).

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A user-facing outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    Added,
    AddFailed,
    Updated,
    UpdateFailed,
    Verified,
    VerifyFailed,
    Deleted,
    DeleteFailed,
    MissingIdentifier,
    Copied,
}

impl Notification {
    pub fn level(self) -> NotificationLevel {
        match self {
            Self::Added | Self::Updated | Self::Verified | Self::Deleted | Self::Copied => {
                NotificationLevel::Success
            }
            Self::AddFailed
            | Self::UpdateFailed
            | Self::VerifyFailed
            | Self::DeleteFailed
            | Self::MissingIdentifier => NotificationLevel::Error,
        }
    }

    pub fn is_error(self) -> bool {
        self.level() == NotificationLevel::Error
    }

    /// Default English text.
    pub fn message(self) -> &'static str {
        match self {
            Self::Added => "Domain added successfully",
            Self::AddFailed => "Failed to add domain",
            Self::Updated => "Domain updated successfully",
            Self::UpdateFailed => "Failed to update domain. Please try again.",
            Self::Verified => "Domain verified successfully",
            Self::VerifyFailed => "Failed to verify domain. Please try again.",
            Self::Deleted => "Domain deleted successfully",
            Self::DeleteFailed => "Failed to delete domain. Please try again.",
            Self::MissingIdentifier => "Domain ID is missing",
            Self::Copied => "Domain copied to clipboard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_are_errors() {
        assert!(Notification::DeleteFailed.is_error());
        assert!(Notification::MissingIdentifier.is_error());
        assert!(!Notification::Copied.is_error());
    }

    #[test]
    fn messages() {
        assert_eq!(Notification::Added.message(), "Domain added successfully");
        assert_eq!(
            Notification::VerifyFailed.message(),
            "Failed to verify domain. Please try again."
        );
    }
}
