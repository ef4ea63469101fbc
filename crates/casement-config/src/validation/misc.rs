//! Validation for the events and store sections.

use crate::schema::CasementConfig;

use super::helpers::validate_range;

/// Validate the listener warning threshold.
pub(crate) fn validate_events(errors: &mut Vec<String>, config: &CasementConfig) {
    validate_range(
        errors,
        "events.max_listeners",
        config.events.max_listeners,
        1,
        1000,
    );
}

/// Validate the store namespace. It becomes part of a file name, so it
/// must be non-empty and free of path separators.
pub(crate) fn validate_store(errors: &mut Vec<String>, config: &CasementConfig) {
    let namespace = &config.store.namespace;
    if namespace.trim().is_empty() {
        errors.push("store.namespace must not be empty".into());
    } else if namespace.contains(['/', '\\']) || namespace.contains("..") {
        errors.push(format!(
            "store.namespace = {namespace:?} must not contain path separators"
        ));
    }
}
