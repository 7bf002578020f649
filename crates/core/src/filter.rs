//! Category filter preview
//!
//! The filter panel only echoes the chosen categories back to the user; no
//! posts are filtered and nothing is sent to the server.

/// Text shown for the selected category values
pub fn describe_selection<S: AsRef<str>>(selected: &[S]) -> String {
    let joined = selected
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ");
    format!("Selected categories: {joined}")
}
