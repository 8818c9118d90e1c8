//! Form relay client.
//!
//! Posts contact form data to the relay endpoint, form-encoded, asking for
//! a JSON response. Submission outcomes are values, not errors: a non-2xx
//! status or a network failure maps to a user-facing notice while the form
//! is kept for correction. Only client construction can actually fail.

use std::time::Duration;

use serde::Deserialize;

use super::form::ContactForm;

/// Fallback endpoint used when a form brings neither an override nor an
/// action of its own.
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://formspree.io/f/YOUR_FORM_ID";

/// Label shown on the submit control while a submission is in flight.
pub const SUBMIT_PENDING_LABEL: &str = "Sending...";

/// Default timeout for relay requests (30 seconds).
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default connection timeout (10 seconds).
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// User-facing outcome of a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The relay accepted the message; the form has been reset.
    Delivered,
    /// The relay answered with a non-success status; the form is kept for
    /// correction.
    Rejected { status: u16 },
    /// The relay could not be reached; the form is kept.
    ConnectionFailed,
}

/// Error payload some relays return alongside a non-2xx status. Parsed for
/// the log line only; the user-facing outcome depends on the status alone.
#[derive(Debug, Deserialize)]
struct RelayErrorBody {
    #[serde(default)]
    errors: Vec<RelayErrorDetail>,
}

#[derive(Debug, Deserialize)]
struct RelayErrorDetail {
    #[serde(default)]
    message: String,
}

/// Errors that can occur while setting up the relay client.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("HTTP client setup failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Resolve the endpoint a form should post to: explicit per-form override,
/// else the form's own action, else the configured default.
pub fn resolve_endpoint(form: &ContactForm, default_endpoint: &str) -> String {
    form.endpoint_override
        .clone()
        .or_else(|| form.action.clone())
        .unwrap_or_else(|| default_endpoint.to_string())
}

/// Client for posting contact forms to the relay.
pub struct RelayClient {
    default_endpoint: String,
    http_client: reqwest::Client,
}

impl RelayClient {
    /// Create a client with the built-in default endpoint.
    pub fn new() -> Result<Self, RelayError> {
        Self::with_endpoint(DEFAULT_RELAY_ENDPOINT.to_string())
    }

    /// Create a client with a custom default endpoint. Useful for testing
    /// against a mock server.
    pub fn with_endpoint(default_endpoint: String) -> Result<Self, RelayError> {
        Self::with_settings(default_endpoint, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom default endpoint and request timeout.
    pub fn with_settings(
        default_endpoint: String,
        timeout: Duration,
    ) -> Result<Self, RelayError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
            .build()?;

        Ok(Self {
            default_endpoint,
            http_client,
        })
    }

    /// Get the default endpoint.
    pub fn default_endpoint(&self) -> &str {
        &self.default_endpoint
    }

    /// Submit a form through the relay.
    ///
    /// Disables and relabels the submit control for the duration of the
    /// request, posts the fields form-encoded with `Accept:
    /// application/json`, resets the fields on success, and restores the
    /// submit control whatever the outcome.
    pub async fn submit(&self, form: &mut ContactForm) -> Notice {
        let endpoint = resolve_endpoint(form, &self.default_endpoint);
        let original_label = form.submit.label.clone();
        form.submit.enabled = false;
        form.submit.label = SUBMIT_PENDING_LABEL.to_string();

        log::debug!("submitting form '{}' to {}", form.name, endpoint);

        let result = self
            .http_client
            .post(&endpoint)
            .header("Accept", "application/json")
            .form(&form.fields)
            .send()
            .await;

        let notice = match result {
            Ok(response) if response.status().is_success() => {
                log::info!("form '{}' delivered", form.name);
                form.reset_fields();
                Notice::Delivered
            }
            Ok(response) => {
                let status = response.status().as_u16();
                let detail = response
                    .json::<RelayErrorBody>()
                    .await
                    .ok()
                    .map(|body| {
                        body.errors
                            .into_iter()
                            .map(|e| e.message)
                            .collect::<Vec<_>>()
                            .join("; ")
                    })
                    .filter(|s| !s.is_empty());
                match detail {
                    Some(detail) => {
                        log::warn!("relay rejected form '{}' ({}): {}", form.name, status, detail)
                    }
                    None => log::warn!("relay rejected form '{}' ({})", form.name, status),
                }
                Notice::Rejected { status }
            }
            Err(e) => {
                log::warn!("relay request for form '{}' failed: {}", form.name, e);
                Notice::ConnectionFailed
            }
        };

        form.submit.enabled = true;
        form.submit.label = original_label;
        notice
    }
}
