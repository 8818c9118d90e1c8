//! Contact form relay adapter.
//!
//! Discovers contact forms by marker attribute, relay-host action URL, or
//! accessible label, and submits them form-encoded to the relay endpoint
//! with status-mapped user notices.

mod discover;
mod form;
mod relay;

pub use discover::{discover, is_contact_label, qualifies, RELAY_HOST};
pub use form::{ContactForm, SubmitControl};
pub use relay::{
    resolve_endpoint, Notice, RelayClient, RelayError, DEFAULT_RELAY_ENDPOINT,
    SUBMIT_PENDING_LABEL,
};
