//! Domain Console Core Library
//!
//! Platform-independent logic behind the domain list UI:
//! - Query cache with tag-based invalidation ([`QueryCache`])
//! - Domain service: cached reads, mutations, refetch ([`DomainService`])
//! - Form validation and submission ([`DomainForm`])
//! - List state: search, sort, paging, row actions, panel/delete state machine ([`TableState`])
//!
//! The remote API is abstracted behind [`domain_console_api::DomainApi`], so
//! any shell (terminal, web) can drive the same state.

pub mod cache;
pub mod error;
pub mod form;
pub mod notification;
pub mod services;
pub mod table;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use cache::{Invalidation, QueryCache, QueryKey, Subscription};
pub use error::{CoreError, CoreResult};
pub use form::{DomainForm, DomainFormValues, FormSubmission, ValidationError, validate_domain};
pub use notification::{Notification, NotificationLevel};
pub use services::DomainService;
pub use table::{
    DEFAULT_PAGE_SIZE, PanelEvent, PanelMode, Phase, RowAction, RowView, SortOrder, TableState,
    Tone, TransitionError,
};
