//! # heshima-client: Studio API and Async Operations
//!
//! Connects the pure state in `heshima-core` to the studio backend.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        heshima-client                                   │
//! │                                                                         │
//! │  ┌────────────────┐  ┌────────────────────┐  ┌──────────────────────┐  │
//! │  │ CatalogLoader  │  │ InquirySubmission  │  │ AdminInquiryList     │  │
//! │  │                │  │                    │  │                      │  │
//! │  │ one fetch,     │  │ begin() guard,     │  │ one Basic-auth       │  │
//! │  │ fallback list  │  │ one POST at a time │  │ fetch, row render    │  │
//! │  └───────┬────────┘  └─────────┬──────────┘  └──────────┬───────────┘  │
//! │          │   Arc<Mutex<state>> │ Weak while in flight   │              │
//! │          └─────────────────────┼────────────────────────┘              │
//! │                                ▼                                        │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 StudioApi (trait)                               │   │
//! │  │     HttpStudioApi (reqwest)      MockStudioApi (test-util)      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`api`] - `StudioApi` trait and the reqwest implementation
//! - [`config`] - Environment-driven client configuration
//! - [`error`] - API and configuration errors
//! - [`catalog_loader`] - Product catalog fetch
//! - [`submission`] - Inquiry post
//! - [`admin_list`] - Authenticated inquiry list
//!
//! ## Usage
//!
//! ```rust,ignore
//! use heshima_client::{CatalogLoader, ClientConfig, HttpStudioApi};
//!
//! let config = ClientConfig::from_env()?;
//! let api = HttpStudioApi::new(&config)?;
//!
//! let catalog = CatalogLoader::new();
//! catalog.load(&api).await;
//! for product in catalog.display_list() {
//!     println!("{} {}", product.name, product.price());
//! }
//! ```

pub mod admin_list;
pub mod api;
pub mod catalog_loader;
pub mod config;
pub mod error;
mod handle;
pub mod submission;

#[cfg(any(test, feature = "test-util"))]
pub mod mocks;

pub use admin_list::AdminInquiryList;
pub use api::{HttpStudioApi, StudioApi};
pub use catalog_loader::CatalogLoader;
pub use config::{AdminCredentials, ClientConfig};
pub use error::{ApiError, ApiResult, ConfigError};
pub use handle::Completion;
pub use submission::InquirySubmission;
