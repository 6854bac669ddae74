//! # Inquiry Submission
//!
//! Drives [`InquiryForm`] through one `POST /api/inquiries`.
//!
//! ```text
//! submit(&api, catalog)
//!    │
//!    ├─ form.begin(catalog) ── Err(Validation)        returned now, no request
//!    │                     └── Err(AlreadySubmitting) returned now, no request
//!    │
//!    └─ Ok(future) ── POST ── form.finish(outcome)
//! ```
//!
//! `begin` runs synchronously inside `submit`, so a second call made before
//! the first future is even polled is already rejected. Dropping that future
//! before it finishes puts the form back to idle with the draft intact.

use std::future::Future;
use std::sync::{Arc, Mutex};

use heshima_core::{InquiryDraft, InquiryError, InquiryForm, InquiryRecord, Product, SubmissionStatus};
use tracing::{debug, info};

use crate::api::StudioApi;
use crate::handle::{lock, shared, Completion, InFlight};

/// Owns the inquiry form for one screen.
#[derive(Debug)]
pub struct InquirySubmission {
    form: Arc<Mutex<InquiryForm>>,
}

impl Default for InquirySubmission {
    fn default() -> Self {
        InquirySubmission::new()
    }
}

impl InquirySubmission {
    pub fn new() -> Self {
        InquirySubmission::with_draft(InquiryDraft::default())
    }

    pub fn with_draft(draft: InquiryDraft) -> Self {
        InquirySubmission {
            form: shared(InquiryForm::with_draft(draft)),
        }
    }

    /// Edits the draft in place.
    pub fn edit<R>(&self, edit: impl FnOnce(&mut InquiryDraft) -> R) -> R {
        edit(lock(&self.form).draft_mut())
    }

    /// Starts a submission against `catalog` (the list the visitor chose from).
    ///
    /// # Errors
    ///
    /// `InquiryError::Validation` for an incomplete draft and
    /// `InquiryError::AlreadySubmitting` while a post is in flight. Neither
    /// sends a request.
    pub fn submit<'a, A>(
        &self,
        api: &'a A,
        catalog: &[Product],
    ) -> Result<impl Future<Output = Completion> + Send + 'a, InquiryError>
    where
        A: StudioApi,
    {
        let payload = lock(&self.form).begin(catalog)?;

        let product_name = catalog
            .iter()
            .find(|p| p.id == payload.product_id)
            .map(|p| p.name.clone())
            .unwrap_or_default();
        debug!(product_id = %payload.product_id, product = %product_name, "Posting inquiry");

        let in_flight = InFlight::new(&self.form, "inquiry", InquiryForm::cancel);
        Ok(async move {
            let outcome = api.submit_inquiry(&payload).await;
            if let Ok(record) = &outcome {
                info!(
                    inquiry_id = record.id,
                    product = %product_name,
                    "Studio accepted inquiry"
                );
            }

            let outcome = outcome.map_err(|e| e.to_string());
            in_flight.complete(|current| current.finish(outcome))
        })
    }

    /// A copy of the current form.
    pub fn snapshot(&self) -> InquiryForm {
        lock(&self.form).clone()
    }

    pub fn draft(&self) -> InquiryDraft {
        lock(&self.form).draft().clone()
    }

    pub fn status(&self) -> SubmissionStatus {
        lock(&self.form).status()
    }

    pub fn is_submitting(&self) -> bool {
        lock(&self.form).is_submitting()
    }

    pub fn message(&self) -> Option<String> {
        lock(&self.form).message().map(str::to_string)
    }

    pub fn last_receipt(&self) -> Option<InquiryRecord> {
        lock(&self.form).last_receipt().cloned()
    }
}
