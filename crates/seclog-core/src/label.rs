//! Event label construction.

/// Build the label for an event from its positional arguments.
///
/// Arguments that are absent, empty, or whitespace-only are dropped; the
/// survivors keep their relative order and are joined with commas after a
/// colon. With no surviving arguments the event name is returned unchanged,
/// so `authn_login_success` never degrades to `authn_login_success:` or
/// `authn_login_success:,,`.
///
/// Pure and infallible: the event name is passed through unvalidated, and
/// kept arguments are not trimmed or deduplicated.
pub fn build_label(event_name: &str, args: &[Option<&str>]) -> String {
    let kept: Vec<&str> = args
        .iter()
        .flatten()
        .copied()
        .filter(|arg| !arg.trim().is_empty())
        .collect();

    if kept.is_empty() {
        event_name.to_string()
    } else {
        format!("{}:{}", event_name, kept.join(","))
    }
}
