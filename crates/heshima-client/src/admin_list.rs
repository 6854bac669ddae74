//! # Admin Inquiry List
//!
//! One authenticated `GET /api/inquiries` feeding [`AdminListState`].
//!
//! Credentials come from [`ClientConfig`](crate::config::ClientConfig) and
//! are attached by the API implementation; this module never sees them.
//! Auth rejections and connectivity failures are logged differently but
//! collapse to the same user-facing message.

use std::future::Future;
use std::sync::{Arc, Mutex};

use chrono::Locale;
use heshima_core::{AdminListState, InquiryRow};
use tracing::{info, warn};

use crate::api::StudioApi;
use crate::handle::{lock, shared, Completion, InFlight};

/// Owns the admin list state for one screen.
#[derive(Debug)]
pub struct AdminInquiryList {
    state: Arc<Mutex<AdminListState>>,
}

impl Default for AdminInquiryList {
    fn default() -> Self {
        AdminInquiryList::new()
    }
}

impl AdminInquiryList {
    pub fn new() -> Self {
        AdminInquiryList {
            state: shared(AdminListState::new()),
        }
    }

    /// Issues the authenticated fetch. Only the first call fetches, unless its
    /// future was dropped before finishing.
    pub fn load<'a, A>(&self, api: &'a A) -> impl Future<Output = Completion> + Send + 'a
    where
        A: StudioApi,
    {
        let in_flight = lock(&self.state)
            .begin()
            .then(|| InFlight::new(&self.state, "admin_list", AdminListState::cancel));

        async move {
            let Some(in_flight) = in_flight else {
                return Completion::AlreadyIssued;
            };

            let outcome = match api.fetch_inquiries().await {
                Ok(records) => {
                    info!(count = records.len(), "Inquiries fetched");
                    Ok(records)
                }
                Err(err) if err.is_auth_failure() => {
                    warn!(status = ?err.status(), "Admin credentials rejected or missing");
                    Err(err.to_string())
                }
                Err(err) => {
                    warn!(error = %err, "Could not reach inquiry list");
                    Err(err.to_string())
                }
            };

            in_flight.complete(|current| current.apply(outcome))
        }
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> AdminListState {
        lock(&self.state).clone()
    }

    pub fn is_loading(&self) -> bool {
        lock(&self.state).is_loading()
    }

    pub fn error(&self) -> Option<String> {
        lock(&self.state).error().map(str::to_string)
    }

    /// Rows in received order, timestamps rendered for `locale`.
    pub fn rows(&self, locale: Locale) -> Vec<InquiryRow> {
        lock(&self.state).rows(locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::mocks::MockStudioApi;
    use heshima_core::admin::{ADMIN_LIST_ERROR_MESSAGE, MISSING_TIMESTAMP};
    use heshima_core::InquiryRecord;
    use serde_json::json;
    use tokio::sync::Notify;

    fn records() -> Vec<InquiryRecord> {
        serde_json::from_value(json!([
            {
                "id": 12,
                "customerName": "Jaha Knight",
                "customerEmail": "jaha@example.com",
                "createdAt": "2025-02-01T14:05:00",
                "notes": "logo work",
                "items": [{ "productId": 2, "productName": "Web Design", "quantity": 1, "finalPrice": 1200.0 }]
            },
            {
                "id": 9,
                "customerName": "Amani",
                "customerEmail": "amani@example.org"
            }
        ]))
        .unwrap()
    }

    #[tokio::test]
    async fn test_rows_in_received_order() {
        let api = MockStudioApi::new().with_inquiries(Ok(records()));
        let list = AdminInquiryList::new();

        assert_eq!(list.load(&api).await, Completion::Applied);

        let rows = list.rows(Locale::en_US);
        assert_eq!(rows.iter().map(|r| r.id).collect::<Vec<_>>(), vec![12, 9]);
        assert_eq!(rows[0].items_label, "Items in request: 1");
        assert_eq!(rows[1].items_label, "Items in request: 0");
        assert_eq!(rows[1].created_at, MISSING_TIMESTAMP);
        assert!(list.error().is_none());
    }

    #[tokio::test]
    async fn test_unauthorized_shows_generic_message() {
        let api = MockStudioApi::new().with_inquiries(Err(ApiError::Unauthorized { status: 401 }));
        let list = AdminInquiryList::new();

        list.load(&api).await;

        assert_eq!(list.error().as_deref(), Some(ADMIN_LIST_ERROR_MESSAGE));
        assert!(list.rows(Locale::en_US).is_empty());
    }

    #[tokio::test]
    async fn test_network_failure_shows_same_message() {
        let api = MockStudioApi::new().with_inquiries(Err(ApiError::Network("connection refused".into())));
        let list = AdminInquiryList::new();

        list.load(&api).await;

        assert_eq!(list.error().as_deref(), Some(ADMIN_LIST_ERROR_MESSAGE));
    }

    #[tokio::test]
    async fn test_second_load_does_not_fetch() {
        let api = MockStudioApi::new().with_inquiries(Ok(records()));
        let list = AdminInquiryList::new();

        list.load(&api).await;
        assert_eq!(list.load(&api).await, Completion::AlreadyIssued);
        assert_eq!(api.inquiries_calls(), 1);
    }

    #[tokio::test]
    async fn test_dropped_unpolled_load_can_be_reissued() {
        let api = MockStudioApi::new().with_inquiries(Ok(records()));
        let list = AdminInquiryList::new();

        drop(list.load(&api));
        assert!(!list.is_loading());

        assert_eq!(list.load(&api).await, Completion::Applied);
        assert_eq!(api.inquiries_calls(), 1);
        assert_eq!(list.rows(Locale::en_US).len(), 2);
    }

    #[tokio::test]
    async fn test_loading_then_detached() {
        let gate = Arc::new(Notify::new());
        let api = MockStudioApi::new().with_inquiries(Ok(records())).gated(gate.clone());
        let list = AdminInquiryList::new();

        let pending = list.load(&api);
        assert!(list.is_loading());

        drop(list);
        gate.notify_one();
        assert_eq!(pending.await, Completion::Detached);
    }
}
