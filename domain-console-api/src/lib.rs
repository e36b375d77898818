//! # domain-console-api
//!
//! Typed client for a remote collection of domain records (URL, active flag,
//! verification status) exposed as a plain JSON CRUD resource.
//!
//! ## Operations
//!
//! | Operation | HTTP | Response | Invalidates |
//! |-----------|------|----------|-------------|
//! | [`DomainApi::list_domains`] | `GET {base}` | JSON | - |
//! | [`DomainApi::get_domain`] | `GET {base}/{id}` | JSON | - |
//! | [`DomainApi::add_domain`] | `POST {base}` | JSON | [`CacheTag::Collection`] |
//! | [`DomainApi::update_domain`] | `PUT {base}/{id}` | JSON | [`CacheTag::Item`] |
//! | [`DomainApi::delete_domain`] | `DELETE {base}/{id}` | text | [`CacheTag::Collection`] |
//!
//! Every mutation returns a [`Mutation`] carrying the tags it invalidates, so a
//! cache layer can refetch dependent queries. Nothing is updated optimistically.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use domain_console_api::{DomainApi, DomainDraft, DomainPatch, RestDomainApi, DEFAULT_BASE_URL};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = RestDomainApi::new(DEFAULT_BASE_URL)?;
//!
//!     let created = api
//!         .add_domain(&DomainDraft::new("https://example.com", true))
//!         .await?;
//!     println!("created {} -> {:?}", created.value.id, created.invalidates);
//!
//!     api.update_domain(&created.value.id, &DomainPatch::verify()).await?;
//!
//!     for domain in api.list_domains().await? {
//!         println!("{} {} {}", domain.id, domain.domain, domain.status);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ApiError>`](ApiError). Any non-2xx status
//! becomes [`ApiError::RequestFailed`] with the status and raw body, except a
//! 404 on an item endpoint which becomes [`ApiError::NotFound`]. There are no
//! automatic retries.

mod error;
mod http_client;
mod rest;
mod traits;
mod types;

pub use error::{ApiError, Result};
pub use rest::{DEFAULT_BASE_URL, RestDomainApi};
pub use traits::{Clock, DomainApi, SystemClock};
pub use types::{
    CacheTag, Domain, DomainDraft, DomainPatch, Mutation, Operation, ResponseFormat,
    VerificationStatus,
};
