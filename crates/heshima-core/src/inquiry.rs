//! # Inquiry Submission State
//!
//! Draft fields and the submit state machine for the public inquiry form.
//!
//! ## State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Inquiry Submission                                   │
//! │                                                                         │
//! │            begin() rejects                                              │
//! │            invalid drafts ──► Idle + inline message (no network)        │
//! │                 │                                                       │
//! │   Idle ─────begin()─────► Submitting ──finish(Ok)──► Success            │
//! │    ▲                         │   ▲                    (draft cleared)   │
//! │    │                         │   └─ begin() ⇒ AlreadySubmitting         │
//! │    │                         └──finish(Err)──► Failed                   │
//! │    │                                            (draft kept)            │
//! │    └──────── Success / Failed are editable: begin() may run again ──────┘
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! `begin` is the single place that lets a submission start, so the
//! one-in-flight rule holds no matter which UI drives the form.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::InquiryError;
use crate::types::{InquiryPayload, InquiryRecord, Product, ProductId};
use crate::validation::{validate_email, validate_name, validate_product_selection};

/// Shown after the studio accepted the inquiry.
pub const INQUIRY_SENT_MESSAGE: &str = "Inquiry sent to the studio.";

/// Shown after the post failed for any reason.
pub const INQUIRY_FAILED_MESSAGE: &str = "Could not send inquiry right now. Please try again.";

/// The fields of the inquiry form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InquiryDraft {
    pub product_id: Option<ProductId>,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl InquiryDraft {
    pub fn new(
        product_id: impl Into<ProductId>,
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        InquiryDraft {
            product_id: Some(product_id.into()),
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == InquiryDraft::default()
    }

    /// Validates against `catalog` and builds the wire payload.
    ///
    /// Name and email are trimmed; the message is sent as typed.
    pub fn to_payload(&self, catalog: &[Product]) -> Result<InquiryPayload, InquiryError> {
        let product = validate_product_selection(self.product_id, catalog)?;
        validate_name(&self.name)?;
        validate_email(&self.email)?;

        Ok(InquiryPayload {
            product_id: product.id,
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.clone(),
        })
    }
}

/// Where the form is in its current attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed,
}

/// Inquiry form state: the draft plus the submission status.
#[derive(Debug, Clone, Default)]
pub struct InquiryForm {
    draft: InquiryDraft,
    status: SubmissionStatus,
    message: Option<String>,
    last_receipt: Option<InquiryRecord>,
}

impl InquiryForm {
    pub fn new() -> Self {
        InquiryForm::default()
    }

    /// Creates a form pre-filled with a draft (e.g. a service the visitor
    /// clicked "Inquire" on).
    pub fn with_draft(draft: InquiryDraft) -> Self {
        InquiryForm {
            draft,
            ..InquiryForm::default()
        }
    }

    pub fn draft(&self) -> &InquiryDraft {
        &self.draft
    }

    /// Mutable access for field edits.
    pub fn draft_mut(&mut self) -> &mut InquiryDraft {
        &mut self.draft
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_submitting(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Confirmation, retry, or inline validation message for the form.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The record echoed back by the last successful submission.
    pub fn last_receipt(&self) -> Option<&InquiryRecord> {
        self.last_receipt.as_ref()
    }

    /// Starts a submission attempt.
    ///
    /// On success the form is `Submitting` and the returned payload must be
    /// posted exactly once, followed by [`InquiryForm::finish`].
    ///
    /// ## Errors
    /// - `AlreadySubmitting` while a previous attempt is in flight (state untouched)
    /// - `Validation` when the draft is incomplete; the form returns to `Idle`
    ///   with the reason as its inline message
    pub fn begin(&mut self, catalog: &[Product]) -> Result<InquiryPayload, InquiryError> {
        if self.is_submitting() {
            debug!("Inquiry submission already in flight, ignoring");
            return Err(InquiryError::AlreadySubmitting);
        }

        match self.draft.to_payload(catalog) {
            Ok(payload) => {
                self.status = SubmissionStatus::Submitting;
                self.message = None;
                debug!(product_id = %payload.product_id, "Inquiry submission started");
                Ok(payload)
            }
            Err(err) => {
                self.status = SubmissionStatus::Idle;
                self.message = Some(err.to_string());
                debug!(error = %err, "Inquiry draft rejected");
                Err(err)
            }
        }
    }

    /// Abandons an attempt whose post was never made or never answered.
    ///
    /// The form returns to `Idle` with the draft intact so it can be sent
    /// again. No effect unless submitting.
    pub fn cancel(&mut self) {
        if self.is_submitting() {
            debug!("Inquiry submission abandoned");
            self.status = SubmissionStatus::Idle;
            self.message = None;
        }
    }

    /// Applies the outcome of the post started by [`InquiryForm::begin`].
    ///
    /// `Err` carries the diagnostic description; the user sees
    /// [`INQUIRY_FAILED_MESSAGE`]. An outcome that arrives when no attempt is
    /// in flight is ignored.
    pub fn finish(&mut self, outcome: Result<InquiryRecord, String>) {
        if !self.is_submitting() {
            debug!(status = ?self.status, "No inquiry in flight, dropping outcome");
            return;
        }

        match outcome {
            Ok(record) => {
                info!(inquiry_id = record.id, "Inquiry sent");
                self.status = SubmissionStatus::Success;
                self.message = Some(INQUIRY_SENT_MESSAGE.to_string());
                self.draft = InquiryDraft::default();
                self.last_receipt = Some(record);
            }
            Err(reason) => {
                warn!(%reason, "Inquiry submission failed");
                self.status = SubmissionStatus::Failed;
                self.message = Some(INQUIRY_FAILED_MESSAGE.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fallback_products;

    fn jaha_draft() -> InquiryDraft {
        InquiryDraft::new(2, "Jaha Knight", "jaha@example.com", "logo work")
    }

    fn receipt() -> InquiryRecord {
        serde_json::from_value(serde_json::json!({
            "id": 41,
            "customerName": "Jaha Knight",
            "customerEmail": "jaha@example.com",
            "notes": "logo work",
            "items": [{ "productId": 2, "productName": "Web Design", "quantity": 1 }]
        }))
        .unwrap()
    }

    #[test]
    fn test_begin_builds_payload() {
        let mut form = InquiryForm::with_draft(jaha_draft());

        let payload = form.begin(&fallback_products()).unwrap();

        assert_eq!(form.status(), SubmissionStatus::Submitting);
        assert_eq!(payload.product_id, ProductId(2));
        assert_eq!(payload.name, "Jaha Knight");
        assert_eq!(payload.message, "logo work");
    }

    #[test]
    fn test_success_clears_draft() {
        let mut form = InquiryForm::with_draft(jaha_draft());
        form.begin(&fallback_products()).unwrap();

        form.finish(Ok(receipt()));

        assert_eq!(form.status(), SubmissionStatus::Success);
        assert_eq!(form.message(), Some(INQUIRY_SENT_MESSAGE));
        assert!(form.draft().is_empty());
        assert_eq!(form.last_receipt().map(|r| r.id), Some(41));
    }

    #[test]
    fn test_failure_keeps_draft() {
        let mut form = InquiryForm::with_draft(jaha_draft());
        form.begin(&fallback_products()).unwrap();

        form.finish(Err("status 500".to_string()));

        assert_eq!(form.status(), SubmissionStatus::Failed);
        assert_eq!(form.message(), Some(INQUIRY_FAILED_MESSAGE));
        assert_eq!(form.draft(), &jaha_draft());
    }

    #[test]
    fn test_retry_after_failure() {
        let mut form = InquiryForm::with_draft(jaha_draft());
        form.begin(&fallback_products()).unwrap();
        form.finish(Err("timeout".to_string()));

        assert!(form.begin(&fallback_products()).is_ok());
        assert!(form.is_submitting());
        assert!(form.message().is_none());
    }

    #[test]
    fn test_reentrant_begin_rejected() {
        let mut form = InquiryForm::with_draft(jaha_draft());
        form.begin(&fallback_products()).unwrap();

        let second = form.begin(&fallback_products());

        assert_eq!(second, Err(InquiryError::AlreadySubmitting));
        assert!(form.is_submitting());
    }

    #[test]
    fn test_validation_failure_stays_idle() {
        let mut form = InquiryForm::with_draft(InquiryDraft {
            email: String::new(),
            ..jaha_draft()
        });

        let err = form.begin(&fallback_products()).unwrap_err();

        assert!(matches!(err, InquiryError::Validation(_)));
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.message(), Some("email is required"));
        assert_eq!(form.draft().name, "Jaha Knight");
    }

    #[test]
    fn test_unknown_product_rejected() {
        let mut form = InquiryForm::with_draft(InquiryDraft::new(
            99,
            "Jaha Knight",
            "jaha@example.com",
            "",
        ));

        assert!(form.begin(&fallback_products()).is_err());
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_empty_message_allowed() {
        let mut form = InquiryForm::with_draft(InquiryDraft {
            message: String::new(),
            ..jaha_draft()
        });
        assert!(form.begin(&fallback_products()).is_ok());
    }

    #[test]
    fn test_cancel_keeps_draft_and_allows_resubmit() {
        let mut form = InquiryForm::with_draft(jaha_draft());
        form.begin(&fallback_products()).unwrap();

        form.cancel();

        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert!(form.message().is_none());
        assert_eq!(form.draft(), &jaha_draft());
        assert!(form.begin(&fallback_products()).is_ok());
    }

    #[test]
    fn test_cancel_after_success_is_noop() {
        let mut form = InquiryForm::with_draft(jaha_draft());
        form.begin(&fallback_products()).unwrap();
        form.finish(Ok(receipt()));

        form.cancel();

        assert_eq!(form.status(), SubmissionStatus::Success);
    }

    #[test]
    fn test_stale_finish_ignored() {
        let mut form = InquiryForm::with_draft(jaha_draft());
        form.finish(Ok(receipt()));

        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.draft(), &jaha_draft());
    }
}
