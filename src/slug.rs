//! Slug derivation and validation.

/// Derive a URL-safe slug from free text.
///
/// Lowercases ASCII alphanumerics and collapses every other run of
/// characters into a single dash, with no leading or trailing dash. Titles
/// made entirely of separators produce an empty string, which stores
/// reject.
///
/// # Example
///
/// ```
/// use pagedoc::slugify;
///
/// assert_eq!(slugify("Our Team & Values!"), "our-team-values");
/// ```
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_dash = false;

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            out.push(ch.to_ascii_lowercase());
            prev_dash = false;
        } else if !prev_dash && !out.is_empty() {
            out.push('-');
            prev_dash = true;
        }
    }

    if out.ends_with('-') {
        out.pop();
    }
    out
}

/// Check that a slug is already in canonical form.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty() && slugify(slug) == slug
}
