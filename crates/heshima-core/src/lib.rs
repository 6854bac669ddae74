//! # heshima-core: Pure Client Logic for Heshima Studio
//!
//! This crate holds the catalog / cart / inquiry state machine of the studio
//! client as plain data and pure transitions. It performs no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Heshima Studio Client                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │              UI / apps/studio-cli                               │   │
//! │  │    Services ──► Project plan ──► Inquiry form ──► Admin list    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              heshima-client (async I/O)                         │   │
//! │  │    CatalogLoader   InquirySubmission   AdminInquiryList         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Result<T, _> as plain data             │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ heshima-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌────────┐ ┌──────┐ ┌─────────┐ ┌───────┐        │   │
//! │  │   │ catalog │ │  cart  │ │money │ │ inquiry │ │ admin │        │   │
//! │  │   └─────────┘ └────────┘ └──────┘ └─────────┘ └───────┘        │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE TRANSITIONS                        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Wire types (Product, InquiryPayload, InquiryRecord)
//! - [`money`] - Integer-cent money and the USD formatter
//! - [`catalog`] - Catalog load state and the display fallback
//! - [`cart`] - The deduplicated project plan
//! - [`inquiry`] - Draft and submission state machine
//! - [`admin`] - Admin list state and row rendering
//! - [`validation`] - Draft field rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use heshima_core::catalog::{display_list, CatalogState};
//! use heshima_core::Cart;
//!
//! let mut catalog = CatalogState::new();
//! catalog.begin();
//! catalog.apply(Err("connection refused".to_string()));
//!
//! // The fetch failed, so the built-in services are shown.
//! let products = display_list(&catalog);
//! let mut cart = Cart::new();
//! cart.add(&products[0]);
//! cart.add(&products[0]);
//!
//! assert_eq!(cart.len(), 1);
//! assert_eq!(cart.total().to_string(), "$750.00");
//! ```

pub mod admin;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod inquiry;
pub mod money;
pub mod types;
pub mod validation;

// These allow users to do `use heshima_core::Money` instead of
// `use heshima_core::money::Money`
pub use admin::{AdminListState, InquiryRow};
pub use cart::{Cart, CartEntry, CartSummary};
pub use catalog::{display_list, fallback_products, CatalogState};
pub use error::{InquiryError, ValidationError};
pub use inquiry::{InquiryDraft, InquiryForm, SubmissionStatus};
pub use money::{format_usd, Money};
pub use types::*;

/// Locale used for admin timestamps when none is configured.
pub const DEFAULT_LOCALE: chrono::Locale = chrono::Locale::en_US;
