use domain_console_api::{Domain, VerificationStatus};

/// Color family for a tag or marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Error,
}

impl Tone {
    /// verified → success, pending → warning, anything else → error.
    pub fn for_status(status: VerificationStatus) -> Self {
        match status {
            VerificationStatus::Verified => Self::Success,
            VerificationStatus::Pending => Self::Warning,
            VerificationStatus::Rejected => Self::Error,
        }
    }

    pub fn for_active(is_active: bool) -> Self {
        if is_active { Self::Success } else { Self::Error }
    }
}

/// Per-row menu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Verify,
    Delete,
    CopyDomain,
}

impl RowAction {
    pub const ALL: [Self; 4] = [Self::Edit, Self::Verify, Self::Delete, Self::CopyDomain];
}

/// Presentation data for one table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView<'a> {
    pub record: &'a Domain,
    pub active_label: &'static str,
    pub active_tone: Tone,
    pub status_label: &'static str,
    pub status_tone: Tone,
    pub selected: bool,
    pub deleting: bool,
}

impl<'a> RowView<'a> {
    pub fn new(record: &'a Domain) -> Self {
        Self {
            record,
            active_label: if record.is_active { "Active" } else { "Not Active" },
            active_tone: Tone::for_active(record.is_active),
            status_label: record.status.label(),
            status_tone: Tone::for_status(record.status),
            selected: false,
            deleting: false,
        }
    }
}
