//! 域名表单
//!
//! Collects and validates the two user-editable fields of a record. A form
//! opened on an existing record pre-fills both fields and delegates its
//! submission to the caller; a blank form produces a create request.

use std::sync::LazyLock;

use domain_console_api::{Domain, DomainDraft, DomainPatch};
use regex::Regex;
use thiserror::Error;

/// URL-shaped domain pattern: optional scheme, dotted host ending in a 2–6
/// letter label, optional path. `\w` and `\d` are spelled out as ASCII classes.
const DOMAIN_PATTERN: &str = r"^(https?://)?([0-9a-z.-]+)\.([a-z.]{2,6})([/0-9A-Za-z_ .-]*)*/?$";

static DOMAIN_RE: LazyLock<Option<Regex>> = LazyLock::new(|| match Regex::new(DOMAIN_PATTERN) {
    Ok(re) => Some(re),
    Err(e) => {
        log::error!("Invalid domain pattern: {e}");
        None
    }
});

/// Field-level validation failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please input the domain!")]
    Required,
    #[error("Please enter a valid domain URL!")]
    InvalidPattern,
}

/// Validate a domain string.
pub fn validate_domain(domain: &str) -> Result<(), ValidationError> {
    if domain.is_empty() {
        return Err(ValidationError::Required);
    }
    match DOMAIN_RE.as_ref() {
        Some(re) if re.is_match(domain) => Ok(()),
        _ => Err(ValidationError::InvalidPattern),
    }
}

/// Values handed to the caller when the form delegates its submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainFormValues {
    pub domain: String,
    pub is_active: bool,
}

impl DomainFormValues {
    /// Update body carrying exactly these two fields.
    pub fn to_patch(&self) -> DomainPatch {
        DomainPatch::fields(self.domain.clone(), self.is_active)
    }

    /// Create body; status and timestamp are stamped by the API client.
    pub fn to_draft(&self) -> DomainDraft {
        DomainDraft::new(self.domain.clone(), self.is_active)
    }
}

impl Default for DomainFormValues {
    fn default() -> Self {
        Self {
            domain: String::new(),
            is_active: true,
        }
    }
}

/// What a successful submit asks the caller to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormSubmission {
    /// Standalone form: issue a create request.
    Create(DomainDraft),
    /// Caller-handled form: hand the values to the caller (edit flow).
    Delegate(DomainFormValues),
}

/// Form state.
#[derive(Debug, Clone, Default)]
pub struct DomainForm {
    values: DomainFormValues,
    editing: Option<Domain>,
    delegated: bool,
    error: Option<ValidationError>,
}

impl DomainForm {
    /// Blank standalone form, `is_active` defaulting to true.
    pub fn new() -> Self {
        Self::default()
    }

    /// Form pre-filled from `record` whose submission is delegated to the caller.
    pub fn editing(record: &Domain) -> Self {
        Self {
            values: DomainFormValues {
                domain: record.domain.clone(),
                is_active: record.is_active,
            },
            editing: Some(record.clone()),
            delegated: true,
            error: None,
        }
    }

    pub fn values(&self) -> &DomainFormValues {
        &self.values
    }

    pub fn domain(&self) -> &str {
        &self.values.domain
    }

    pub fn is_active(&self) -> bool {
        self.values.is_active
    }

    /// Record the form was opened on, if any.
    pub fn record(&self) -> Option<&Domain> {
        self.editing.as_ref()
    }

    pub fn is_delegated(&self) -> bool {
        self.delegated
    }

    /// Last validation error, cleared as soon as the field is edited.
    pub fn error(&self) -> Option<ValidationError> {
        self.error
    }

    pub fn set_domain(&mut self, domain: impl Into<String>) {
        self.values.domain = domain.into();
        self.error = None;
    }

    pub fn push_char(&mut self, c: char) {
        self.values.domain.push(c);
        self.error = None;
    }

    pub fn pop_char(&mut self) {
        self.values.domain.pop();
        self.error = None;
    }

    pub fn set_active(&mut self, is_active: bool) {
        self.values.is_active = is_active;
    }

    pub fn toggle_active(&mut self) {
        self.values.is_active = !self.values.is_active;
    }

    /// Run field validation and remember the outcome.
    pub fn validate(&mut self) -> Result<(), ValidationError> {
        let result = validate_domain(&self.values.domain);
        self.error = result.err();
        result
    }

    /// Validate and produce the submission. Entered values are kept on
    /// failure; the caller decides whether to [`reset`](Self::reset).
    pub fn submit(&mut self) -> Result<FormSubmission, ValidationError> {
        self.validate()?;
        if self.delegated {
            Ok(FormSubmission::Delegate(self.values.clone()))
        } else {
            Ok(FormSubmission::Create(self.values.to_draft()))
        }
    }

    /// Restore blank defaults. The delegation mode and edited record stay.
    pub fn reset(&mut self) {
        self.values = DomainFormValues::default();
        self.error = None;
    }
}
