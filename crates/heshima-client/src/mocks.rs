//! Scripted [`StudioApi`] double.
//!
//! Each endpoint returns a configured result and counts its calls. An
//! optional gate holds every response until the test releases it, which is
//! how tests observe the in-flight state.
//!
//! ```rust,ignore
//! let gate = Arc::new(Notify::new());
//! let api = MockStudioApi::new().gated(gate.clone());
//! // ... start an operation, inspect Loading / Submitting ...
//! gate.notify_one();
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use heshima_core::{InquiryItem, InquiryPayload, InquiryRecord, Product};
use tokio::sync::Notify;

use crate::api::StudioApi;
use crate::error::{ApiError, ApiResult};
use crate::handle::lock;

/// In-memory studio backend.
#[derive(Debug)]
pub struct MockStudioApi {
    products: ApiResult<Vec<Product>>,
    /// `None` echoes the payload back as a record.
    submit: Option<ApiResult<InquiryRecord>>,
    inquiries: ApiResult<Vec<InquiryRecord>>,
    gate: Option<Arc<Notify>>,
    payloads: Mutex<Vec<InquiryPayload>>,
    products_calls: AtomicUsize,
    submit_calls: AtomicUsize,
    inquiries_calls: AtomicUsize,
}

impl Default for MockStudioApi {
    fn default() -> Self {
        MockStudioApi::new()
    }
}

impl MockStudioApi {
    /// Empty catalog, echoing submissions, no inquiries.
    pub fn new() -> Self {
        MockStudioApi {
            products: Ok(Vec::new()),
            submit: None,
            inquiries: Ok(Vec::new()),
            gate: None,
            payloads: Mutex::new(Vec::new()),
            products_calls: AtomicUsize::new(0),
            submit_calls: AtomicUsize::new(0),
            inquiries_calls: AtomicUsize::new(0),
        }
    }

    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = Ok(products);
        self
    }

    pub fn failing_products(mut self, error: ApiError) -> Self {
        self.products = Err(error);
        self
    }

    pub fn with_submit_result(mut self, result: ApiResult<InquiryRecord>) -> Self {
        self.submit = Some(result);
        self
    }

    pub fn with_inquiries(mut self, result: ApiResult<Vec<InquiryRecord>>) -> Self {
        self.inquiries = result;
        self
    }

    /// Holds every response until `gate` is notified once per call.
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    pub fn products_calls(&self) -> usize {
        self.products_calls.load(Ordering::SeqCst)
    }

    pub fn submit_calls(&self) -> usize {
        self.submit_calls.load(Ordering::SeqCst)
    }

    pub fn inquiries_calls(&self) -> usize {
        self.inquiries_calls.load(Ordering::SeqCst)
    }

    /// Every payload posted so far, in order.
    pub fn submitted_payloads(&self) -> Vec<InquiryPayload> {
        lock(&self.payloads).clone()
    }

    async fn wait_for_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
    }
}

/// Builds the record a backend would store for `payload`.
pub fn echo_record(id: i64, payload: &InquiryPayload) -> InquiryRecord {
    InquiryRecord {
        id,
        customer_name: payload.name.clone(),
        customer_email: payload.email.clone(),
        created_at: Some("2025-01-15T09:30:00".to_string()),
        notes: Some(payload.message.clone()),
        items: vec![InquiryItem {
            product_id: Some(payload.product_id),
            quantity: Some(1),
            ..InquiryItem::default()
        }],
    }
}

impl StudioApi for MockStudioApi {
    async fn fetch_products(&self) -> ApiResult<Vec<Product>> {
        self.products_calls.fetch_add(1, Ordering::SeqCst);
        self.wait_for_gate().await;
        self.products.clone()
    }

    async fn submit_inquiry(&self, payload: &InquiryPayload) -> ApiResult<InquiryRecord> {
        let call = self.submit_calls.fetch_add(1, Ordering::SeqCst) + 1;
        lock(&self.payloads).push(payload.clone());
        self.wait_for_gate().await;

        match &self.submit {
            Some(result) => result.clone(),
            None => Ok(echo_record(call as i64, payload)),
        }
    }

    async fn fetch_inquiries(&self) -> ApiResult<Vec<InquiryRecord>> {
        self.inquiries_calls.fetch_add(1, Ordering::SeqCst);
        self.wait_for_gate().await;
        self.inquiries.clone()
    }
}
