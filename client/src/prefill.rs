//! Form pre-filling from the page's query string.

/// Query parameters copied into the form field with the same id.
pub const PREFILL_FIELDS: [&str; 2] = ["project_number", "worker_name"];

/// Picks the values to write into the form from already-decoded query pairs.
///
/// The first occurrence of each parameter wins; empty values and unknown
/// parameters are skipped.
pub fn prefill_values<I, K, V>(pairs: I) -> Vec<(&'static str, String)>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    let mut seen: Vec<&'static str> = Vec::with_capacity(PREFILL_FIELDS.len());
    let mut found = Vec::with_capacity(PREFILL_FIELDS.len());
    for (key, value) in pairs {
        let Some(&field) = PREFILL_FIELDS.iter().find(|field| **field == key.as_ref()) else {
            continue;
        };
        if seen.contains(&field) {
            continue;
        }
        seen.push(field);
        let value = value.into();
        if !value.is_empty() {
            found.push((field, value));
        }
    }
    found
}
