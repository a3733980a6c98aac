//! Contact form submission flow.
//!
//! The form arrives inside a fragment, so the widget binds only after the
//! fragment loads and is rebuilt fresh on every reload. Submission posts
//! the field set once to an external endpoint; only generic success or
//! failure is surfaced, no structured response is parsed.

use sitewire_types::error::FormError;
use tracing::warn;

use crate::page::Page;

/// Status line while the request is in flight.
pub const STATUS_SUBMITTING: &str = "Submitting…";
/// Status line on success.
pub const STATUS_SUCCESS: &str = "Submitted successfully ✔";
/// Status line on any failure.
pub const STATUS_FAILURE: &str = "Submission failed. Try again.";

const SUBMITTING_CLASS: &str = "text-sm text-blue-600";
const SUCCESS_CLASS: &str = "text-sm text-green-600";
const FAILURE_CLASS: &str = "text-sm text-red-600";

/// Markup that replaces the form body after a successful submission.
const THANK_YOU_HTML: &str = r#"<div class="text-center py-12">
  <i class="ri-checkbox-circle-line text-5xl text-green-600 mb-4"></i>
  <h3 class="text-xl font-semibold mb-2">Submission Successful</h3>
  <p class="text-gray-600 dark:text-gray-400">
    Thank you. Our team will contact you shortly.
  </p>
</div>"#;

/// Posts the contact form's fields to the external endpoint.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
/// The multipart reqwest implementation lives in sitewire-infra.
pub trait FormEndpoint: Send + Sync {
    /// Submit the fields as one multipart request. One attempt, no retry.
    fn submit(
        &self,
        fields: &[(String, String)],
    ) -> impl std::future::Future<Output = Result<(), FormError>> + Send;
}

/// The contact form widget.
pub struct ContactForm<E: FormEndpoint> {
    endpoint: E,
    form_id: String,
    status_id: String,
}

impl<E: FormEndpoint> ContactForm<E> {
    /// Bind to the form and its status line inside a freshly loaded
    /// fragment. Returns `None` when the form is absent.
    pub fn bind(page: &Page, endpoint: E, form_id: &str, status_id: &str) -> Option<Self> {
        page.by_id(form_id)?;
        Some(Self {
            endpoint,
            form_id: form_id.to_string(),
            status_id: status_id.to_string(),
        })
    }

    /// Submit the given fields and surface the outcome on the status line.
    ///
    /// On success the form body is replaced with a thank-you block; on any
    /// failure the form stays as-is so the user can retry.
    pub async fn submit(&self, page: &mut Page, fields: &[(String, String)]) {
        self.set_status(page, STATUS_SUBMITTING, SUBMITTING_CLASS);

        match self.endpoint.submit(fields).await {
            Ok(()) => {
                self.set_status(page, STATUS_SUCCESS, SUCCESS_CLASS);
                if let Some(form) = page.by_id_mut(&self.form_id) {
                    form.set_inner_html(THANK_YOU_HTML);
                }
            }
            Err(err) => {
                warn!(%err, "contact form submission failed");
                self.set_status(page, STATUS_FAILURE, FAILURE_CLASS);
            }
        }
    }

    fn set_status(&self, page: &mut Page, text: &str, classes: &str) {
        if let Some(status) = page.by_id_mut(&self.status_id) {
            status.set_inner_html(text);
            status.set_classes(classes);
        }
    }
}
