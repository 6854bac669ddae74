//! # Catalog Loader
//!
//! Fetches the product list once and exposes the display list.
//!
//! ```text
//! CatalogLoader::new()        state: Idle, display = fallback
//!        │
//!     load(&api) ────────────► state: Loading   (begin runs at call time)
//!        │
//!        ▼  GET /api/products
//!   Ok(list)  ──► Settled, data = list
//!   Err(e)    ──► Settled, data = [], error = CATALOG_ERROR_MESSAGE
//!   dropped   ──► Idle again
//! ```

use std::future::Future;
use std::sync::{Arc, Mutex};

use heshima_core::catalog::{self, CatalogState};
use heshima_core::{Product, ProductId};
use tracing::{debug, info};

use crate::api::StudioApi;
use crate::handle::{lock, shared, Completion, InFlight};

/// Owns the catalog state for one screen.
#[derive(Debug)]
pub struct CatalogLoader {
    state: Arc<Mutex<CatalogState>>,
}

impl Default for CatalogLoader {
    fn default() -> Self {
        CatalogLoader::new()
    }
}

impl CatalogLoader {
    pub fn new() -> Self {
        CatalogLoader {
            state: shared(CatalogState::new()),
        }
    }

    /// Issues the product fetch.
    ///
    /// The state moves to loading before this returns. Only the first call
    /// fetches; later futures resolve to [`Completion::AlreadyIssued`]
    /// without touching the network. Dropping the future before it finishes
    /// returns the state to idle so the next call fetches.
    pub fn load<'a, A>(&self, api: &'a A) -> impl Future<Output = Completion> + Send + 'a
    where
        A: StudioApi,
    {
        let in_flight = lock(&self.state)
            .begin()
            .then(|| InFlight::new(&self.state, "catalog", CatalogState::cancel));

        async move {
            let Some(in_flight) = in_flight else {
                return Completion::AlreadyIssued;
            };

            let outcome = api.fetch_products().await.map_err(|e| e.to_string());
            if let Ok(products) = &outcome {
                info!(count = products.len(), "Product catalog fetched");
            }

            in_flight.complete(|current| current.apply(outcome))
        }
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> CatalogState {
        lock(&self.state).clone()
    }

    pub fn is_loading(&self) -> bool {
        lock(&self.state).is_loading()
    }

    pub fn error(&self) -> Option<String> {
        lock(&self.state).error().map(str::to_string)
    }

    /// Live products if any were loaded, otherwise the built-in services.
    pub fn display_list(&self) -> Vec<Product> {
        let state = lock(&self.state);
        let list = catalog::display_list(&state).into_owned();
        debug!(count = list.len(), fallback = state.is_fallback(), "Display list read");
        list
    }

    pub fn find(&self, id: ProductId) -> Option<Product> {
        lock(&self.state).find(id)
    }
}
