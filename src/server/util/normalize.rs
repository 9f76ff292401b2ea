//! Normalization of caller-supplied lookup keys.

/// Normalizes an email address for storage and lookups.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Normalizes a blood group such as `o+` or `AB-` to its canonical uppercase form.
///
/// An unencoded `+` in a query string decodes to a space, so a group that arrives
/// with trailing whitespace and no sign is read as positive.
pub fn normalize_blood_group(value: &str) -> String {
    let value = value.trim_start();
    let trimmed = value.trim_end();
    let mut group = trimmed.to_ascii_uppercase();

    if trimmed.len() < value.len() && !group.is_empty() && !group.ends_with(['+', '-']) {
        group.push('+');
    }

    group
}

/// Checks that an already-normalized email address has a plausible shape.
pub fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !email.contains(' '),
        None => false,
    }
}
