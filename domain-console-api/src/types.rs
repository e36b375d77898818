use std::fmt;

use serde::{Deserialize, Serialize};

// ============ Domain record ============

/// Verification state of a domain record.
///
/// Records are created as [`Pending`](Self::Pending) and only move to
/// [`Verified`](Self::Verified) through the verify action. No client path
/// leads to [`Rejected`](Self::Rejected); the backend may still report it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    #[default]
    Pending,
    Verified,
    Rejected,
}

impl VerificationStatus {
    /// Wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Verified => "verified",
            Self::Rejected => "rejected",
        }
    }

    /// Capitalized label for display.
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Verified => "Verified",
            Self::Rejected => "Rejected",
        }
    }

    pub fn is_verified(self) -> bool {
        matches!(self, Self::Verified)
    }
}

impl fmt::Display for VerificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A domain record as stored by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Domain {
    /// Backend-assigned identifier, unique across the collection.
    pub id: String,
    /// URL-like domain string.
    pub domain: String,
    /// User-toggleable activity flag.
    pub is_active: bool,
    /// Verification state.
    pub status: VerificationStatus,
    /// Creation time in epoch seconds, stamped by the client.
    #[serde(default)]
    pub created_date: i64,
}

/// Create request body.
///
/// `status` and `created_date` are accepted for wire compatibility but the
/// client always overwrites them: see [`DomainDraft::stamped`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainDraft {
    pub domain: String,
    pub is_active: bool,
    #[serde(default)]
    pub status: VerificationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_date: Option<i64>,
}

impl DomainDraft {
    /// New draft with the creation defaults.
    pub fn new(domain: impl Into<String>, is_active: bool) -> Self {
        Self {
            domain: domain.into(),
            is_active,
            status: VerificationStatus::Pending,
            created_date: None,
        }
    }

    /// Copy of this draft as it goes on the wire: status forced to pending,
    /// `createdDate` set to `now` whatever the caller supplied.
    #[must_use]
    pub fn stamped(&self, now: i64) -> Self {
        Self {
            domain: self.domain.clone(),
            is_active: self.is_active,
            status: VerificationStatus::Pending,
            created_date: Some(now),
        }
    }
}

/// Update request body. Absent fields are not serialized; the backend merges
/// what is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<VerificationStatus>,
}

impl DomainPatch {
    /// Patch carrying the two user-editable fields.
    pub fn fields(domain: impl Into<String>, is_active: bool) -> Self {
        Self {
            domain: Some(domain.into()),
            is_active: Some(is_active),
            status: None,
        }
    }

    /// Patch that only marks the record verified.
    pub fn verify() -> Self {
        Self {
            status: Some(VerificationStatus::Verified),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.domain.is_none() && self.is_active.is_none() && self.status.is_none()
    }
}

// ============ Cache tags ============

/// Cache tag attached to query results and mutation outcomes.
///
/// Invalidating [`Collection`](Self::Collection) hits every cached domain query
/// (the list and each item). Invalidating [`Item`](Self::Item) only hits
/// queries that provide that exact item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheTag {
    Collection,
    Item(String),
}

impl CacheTag {
    pub fn item(id: impl Into<String>) -> Self {
        Self::Item(id.into())
    }

    /// Whether invalidating `self` invalidates a query that provides `provided`.
    pub fn invalidates(&self, provided: &CacheTag) -> bool {
        match (self, provided) {
            (Self::Collection, _) => true,
            (Self::Item(a), Self::Item(b)) => a == b,
            (Self::Item(_), Self::Collection) => false,
        }
    }
}

impl fmt::Display for CacheTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collection => f.write_str("Domain"),
            Self::Item(id) => write!(f, "Domain:{id}"),
        }
    }
}

/// Result of a successful mutation: the server's answer plus the cache tags
/// it invalidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mutation<T> {
    pub value: T,
    pub invalidates: Vec<CacheTag>,
}

impl<T> Mutation<T> {
    pub fn new(value: T, invalidates: Vec<CacheTag>) -> Self {
        Self { value, invalidates }
    }
}

// ============ Operations ============

/// How a response body is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// Body is JSON and deserialized into a typed value.
    Json,
    /// Body is kept as opaque text and never parsed.
    Text,
}

/// The five remote operations and their fixed wire behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    GetOne,
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn method(self) -> reqwest::Method {
        match self {
            Self::List | Self::GetOne => reqwest::Method::GET,
            Self::Create => reqwest::Method::POST,
            Self::Update => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }

    /// Decoding strategy for this operation's response body.
    pub fn response_format(self) -> ResponseFormat {
        match self {
            Self::Delete => ResponseFormat::Text,
            _ => ResponseFormat::Json,
        }
    }

    /// Whether the operation targets a single item (`{base}/{id}`).
    pub fn is_item_scoped(self) -> bool {
        matches!(self, Self::GetOne | Self::Update | Self::Delete)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::GetOne => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_uses_camel_case_on_the_wire() {
        let json = r#"{"id":"1","domain":"https://google.com","isActive":true,"status":"verified","createdDate":1738000000}"#;
        let domain: Domain = serde_json::from_str(json).unwrap();
        assert_eq!(domain.id, "1");
        assert!(domain.is_active);
        assert_eq!(domain.status, VerificationStatus::Verified);
        assert_eq!(domain.created_date, 1_738_000_000);
    }

    #[test]
    fn stamped_draft_forces_pending_and_time() {
        let draft = DomainDraft {
            domain: "https://example.com".into(),
            is_active: false,
            status: VerificationStatus::Verified,
            created_date: Some(1),
        };
        let wire = draft.stamped(1_700_000_000);
        assert_eq!(wire.status, VerificationStatus::Pending);
        assert_eq!(wire.created_date, Some(1_700_000_000));
        assert_eq!(wire.domain, "https://example.com");
        assert!(!wire.is_active);
    }

    #[test]
    fn verify_patch_only_serializes_status() {
        let body = serde_json::to_value(DomainPatch::verify()).unwrap();
        assert_eq!(body, serde_json::json!({ "status": "verified" }));
    }

    #[test]
    fn field_patch_omits_status() {
        let body = serde_json::to_value(DomainPatch::fields("https://a.io", false)).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "domain": "https://a.io", "isActive": false })
        );
    }

    #[test]
    fn collection_tag_invalidates_everything() {
        assert!(CacheTag::Collection.invalidates(&CacheTag::Collection));
        assert!(CacheTag::Collection.invalidates(&CacheTag::item("7")));
    }

    #[test]
    fn item_tag_only_invalidates_same_item() {
        let tag = CacheTag::item("42");
        assert!(tag.invalidates(&CacheTag::item("42")));
        assert!(!tag.invalidates(&CacheTag::item("7")));
        assert!(!tag.invalidates(&CacheTag::Collection));
    }

    #[test]
    fn delete_is_the_only_text_operation() {
        for op in [
            Operation::List,
            Operation::GetOne,
            Operation::Create,
            Operation::Update,
        ] {
            assert_eq!(op.response_format(), ResponseFormat::Json, "{op:?}");
        }
        assert_eq!(Operation::Delete.response_format(), ResponseFormat::Text);
    }

    #[test]
    fn status_labels_are_capitalized() {
        assert_eq!(VerificationStatus::Pending.label(), "Pending");
        assert_eq!(VerificationStatus::Rejected.to_string(), "rejected");
    }
}
