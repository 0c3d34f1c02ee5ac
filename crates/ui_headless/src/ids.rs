//! Synthetic DOM ids for label and helper-text association.

use std::cell::Cell;

thread_local! {
    static NEXT_ID: Cell<u64> = const { Cell::new(0) };
}

/// Returns a document-unique id such as `ui-checkbox-3`.
pub fn next_dom_id(prefix: &str) -> String {
    let id = NEXT_ID.with(|next| {
        let id = next.get().wrapping_add(1);
        next.set(id);
        id
    });
    format!("ui-{prefix}-{id}")
}

/// Caller id when supplied and non-blank, else a generated one.
pub fn resolve_dom_id(explicit: Option<&str>, prefix: &str) -> String {
    match explicit.map(str::trim) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => next_dom_id(prefix),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn generated_ids_are_distinct_and_prefixed() {
        let first = next_dom_id("checkbox");
        let second = next_dom_id("checkbox");
        assert_ne!(first, second);
        assert!(first.starts_with("ui-checkbox-"));
    }

    #[test]
    fn explicit_id_wins_unless_blank() {
        assert_eq!(resolve_dom_id(Some("email"), "text-field"), "email");
        assert!(resolve_dom_id(Some("  "), "text-field").starts_with("ui-text-field-"));
    }
}
