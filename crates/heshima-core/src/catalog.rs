//! # Catalog State
//!
//! Loading / error / data state for the product list, plus the display
//! fallback.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Catalog State Machine                                │
//! │                                                                         │
//! │   Idle ──begin()──► Loading ──apply(Ok(list))──► Loaded  (error: None) │
//! │                        │                                                │
//! │                        └────apply(Err(msg))────► Failed  (data: [])    │
//! │                                                                         │
//! │   display_list(state):                                                 │
//! │       data non-empty  ──► data                                         │
//! │       otherwise       ──► built-in fallback (3 services)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The fallback is chosen on every call from the current state and is never
//! stored in `data`, so a later successful load replaces it immediately.

use std::borrow::Cow;

use tracing::{debug, warn};

use crate::money::Money;
use crate::types::{Product, ProductId};

/// User-facing message shown when the product list cannot be loaded.
pub const CATALOG_ERROR_MESSAGE: &str = "Could not load services right now. Showing our standard offerings.";

/// Built-in placeholder services shown when the live catalog is empty or
/// unreachable.
pub fn fallback_products() -> Vec<Product> {
    vec![
        Product::new(
            1,
            "Branding",
            Money::from_major_minor(750, 0),
            "Visual identity and brand kit.",
        ),
        Product::new(
            2,
            "Web Design",
            Money::from_major_minor(1200, 0),
            "Responsive marketing website.",
        ),
        Product::new(
            3,
            "UX/UI",
            Money::from_major_minor(950, 0),
            "Interface design for dashboards.",
        ),
    ]
}

/// Where the catalog is in its single load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// No fetch issued yet.
    #[default]
    Idle,
    /// Fetch in flight.
    Loading,
    /// Fetch completed (successfully or not).
    Settled,
}

/// Catalog loader state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogState {
    phase: LoadPhase,
    data: Vec<Product>,
    error: Option<String>,
}

impl CatalogState {
    pub fn new() -> Self {
        CatalogState::default()
    }

    /// Marks the fetch as started.
    ///
    /// Returns `false` if a fetch was already issued; the caller must not
    /// fetch again.
    pub fn begin(&mut self) -> bool {
        if self.phase != LoadPhase::Idle {
            debug!(phase = ?self.phase, "Catalog fetch already issued");
            return false;
        }
        self.phase = LoadPhase::Loading;
        self.data.clear();
        self.error = None;
        true
    }

    /// Applies the outcome of the fetch.
    ///
    /// `Err` carries the diagnostic description; the stored error is always
    /// the user-facing [`CATALOG_ERROR_MESSAGE`].
    pub fn apply(&mut self, outcome: Result<Vec<Product>, String>) {
        self.phase = LoadPhase::Settled;
        match outcome {
            Ok(products) => {
                if products.is_empty() {
                    debug!("Catalog is empty, fallback will be displayed");
                } else {
                    debug!(count = products.len(), "Catalog loaded");
                }
                self.data = products;
                self.error = None;
            }
            Err(reason) => {
                warn!(%reason, "Catalog fetch failed, fallback will be displayed");
                self.data.clear();
                self.error = Some(CATALOG_ERROR_MESSAGE.to_string());
            }
        }
    }

    /// Abandons a fetch that will never report back, so `begin` can run again.
    /// No effect unless loading.
    pub fn cancel(&mut self) {
        if self.phase == LoadPhase::Loading {
            debug!("Catalog fetch abandoned");
            self.phase = LoadPhase::Idle;
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// Products exactly as returned by the API.
    pub fn data(&self) -> &[Product] {
        &self.data
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the display list is currently the built-in fallback.
    pub fn is_fallback(&self) -> bool {
        self.data.is_empty()
    }

    /// Looks a product up in the display list.
    pub fn find(&self, id: ProductId) -> Option<Product> {
        display_list(self).iter().find(|p| p.id == id).cloned()
    }
}

/// The list to render: live data when there is any, otherwise the fallback.
pub fn display_list(state: &CatalogState) -> Cow<'_, [Product]> {
    if state.data.is_empty() {
        Cow::Owned(fallback_products())
    } else {
        Cow::Borrowed(&state.data)
    }
}
