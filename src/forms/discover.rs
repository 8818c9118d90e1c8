//! Contact form discovery.
//!
//! A form qualifies for relay handling through any of three signals: an
//! explicit marker attribute, an action URL pointing at the known relay
//! host, or an accessible label that reads like a contact form. A form
//! matching several rules is still attached only once.

use super::form::ContactForm;

/// Relay host recognized in form action URLs.
pub const RELAY_HOST: &str = "formspree.io";

/// Accessible-label keywords that mark a form as contact-related.
const CONTACT_LABEL_KEYWORDS: &[&str] = &["contact", "contacto", "formulario", "mensaje"];

/// Check whether an accessible label reads like a contact form.
pub fn is_contact_label(label: &str) -> bool {
    let lower = label.to_lowercase();
    CONTACT_LABEL_KEYWORDS
        .iter()
        .any(|keyword| lower.contains(keyword))
}

/// Whether a single form matches any discovery rule.
pub fn qualifies(form: &ContactForm) -> bool {
    if form.relay_marker {
        return true;
    }
    if form
        .action
        .as_deref()
        .map(|a| a.contains(RELAY_HOST))
        .unwrap_or(false)
    {
        return true;
    }
    form.aria_label
        .as_deref()
        .map(is_contact_label)
        .unwrap_or(false)
}

/// Attach the adapter to every qualifying form not yet attached.
///
/// Returns the indices of newly attached forms. Calling this again (e.g.
/// after new forms appear) attaches only the newcomers.
pub fn discover(forms: &mut [ContactForm]) -> Vec<usize> {
    let mut attached = Vec::new();
    for (index, form) in forms.iter_mut().enumerate() {
        if form.attached || !qualifies(form) {
            continue;
        }
        form.attached = true;
        log::debug!("attached relay handling to form '{}'", form.name);
        attached.push(index);
    }
    attached
}
