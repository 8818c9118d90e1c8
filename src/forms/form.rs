//! Contact form model.

/// State of a form's submit control. The adapter disables and relabels it
/// while a submission is in flight, and restores it afterwards whatever
/// the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
    pub label: String,
    pub enabled: bool,
}

impl SubmitControl {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            enabled: true,
        }
    }
}

/// A candidate contact form as the adapter sees it.
#[derive(Debug, Clone)]
pub struct ContactForm {
    /// Identifier used in log lines.
    pub name: String,
    /// Explicit relay marker attribute on the form.
    pub relay_marker: bool,
    /// The form's own action URL, if any. Empty strings are normalized to
    /// `None` at construction.
    pub action: Option<String>,
    /// Explicit per-form endpoint override.
    pub endpoint_override: Option<String>,
    /// Accessible label, if any.
    pub aria_label: Option<String>,
    /// Field name/value pairs in document order.
    pub fields: Vec<(String, String)>,
    pub submit: SubmitControl,
    /// Set once the adapter has taken over this form's submission.
    pub attached: bool,
}

impl ContactForm {
    /// A minimal form carrying the relay marker, as the CLI synthesizes.
    pub fn new(name: &str, fields: Vec<(String, String)>) -> Self {
        Self {
            name: name.to_string(),
            relay_marker: true,
            action: None,
            endpoint_override: None,
            aria_label: None,
            fields,
            submit: SubmitControl::new("Send"),
            attached: false,
        }
    }

    /// Normalize an optional URL-ish attribute: empty means absent.
    pub fn with_action(mut self, action: &str) -> Self {
        self.action = Some(action.to_string()).filter(|s| !s.is_empty());
        self
    }

    pub fn with_aria_label(mut self, label: &str) -> Self {
        self.aria_label = Some(label.to_string()).filter(|s| !s.is_empty());
        self
    }

    pub fn with_endpoint_override(mut self, endpoint: &str) -> Self {
        self.endpoint_override = Some(endpoint.to_string()).filter(|s| !s.is_empty());
        self
    }

    pub fn with_relay_marker(mut self, marker: bool) -> Self {
        self.relay_marker = marker;
        self
    }

    /// Clear every field value, as a successful submission does.
    pub fn reset_fields(&mut self) {
        for (_, value) in &mut self.fields {
            value.clear();
        }
    }
}
