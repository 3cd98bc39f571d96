//! Avatar initials derived from a participant email

/// Characters that split an email local-part into name segments
const SEGMENT_SEPARATORS: [char; 3] = ['.', '-', '_'];

/// Two-letter uppercase avatar text for an email address.
///
/// `jane.doe@x.com` gives `JD` (first letter of the first two segments),
/// `jdoe@x.com` gives `JD` (first two characters). Empty input gives an
/// empty string.
pub fn initials_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();

    let mut segments = local
        .split(SEGMENT_SEPARATORS)
        .filter(|segment| !segment.is_empty());

    let leading: Vec<char> = match (segments.next(), segments.next()) {
        (Some(first), Some(second)) => first
            .chars()
            .take(1)
            .chain(second.chars().take(1))
            .collect(),
        _ => local.chars().take(2).collect(),
    };

    leading.into_iter().flat_map(char::to_uppercase).collect()
}
