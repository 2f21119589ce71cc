//! Pure display helpers for the email table.

use chrono::DateTime;

use crate::constants::AVATAR_PALETTE_SIZE;

/// Avatar initial for an address: first character of the local-part
/// before the `@`, upper-cased. Falls back to `?` for empty input.
pub fn initials(address: &str) -> String {
    address
        .split('@')
        .next()
        .and_then(|local| local.chars().next())
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_else(|| "?".to_string())
}

/// Deterministic palette index for an address: first char code modulo
/// the fixed palette size. Same input, same color, every time.
pub fn avatar_color_index(address: &str) -> usize {
    address
        .chars()
        .next()
        .map(|c| c as usize % AVATAR_PALETTE_SIZE)
        .unwrap_or(0)
}

/// Format an ISO-8601 receive timestamp for display. Timestamps that
/// fail to parse are shown as-is; ordering never depends on parsing.
pub fn format_received_at(iso: &str, format: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(iso) {
        return dt.format(format).to_string();
    }
    // Date-only bounds ("2024-03-01") come through some backends
    if let Ok(date) = chrono::NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        return date.format("%b %d %Y").to_string();
    }
    iso.to_string()
}

/// Subject with the original dashboard's placeholder for empty values.
pub fn display_subject(subject: &str) -> &str {
    if subject.is_empty() {
        "(No subject)"
    } else {
        subject
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials_from_local_part() {
        assert_eq!(initials("alice@example.com"), "A");
        assert_eq!(initials("bob.smith@example.com"), "B");
        assert_eq!(initials("zoe"), "Z");
        assert_eq!(initials(""), "?");
    }

    #[test]
    fn test_avatar_color_is_deterministic() {
        let a = avatar_color_index("alice@example.com");
        assert_eq!(a, avatar_color_index("alice@example.com"));
        assert!(a < AVATAR_PALETTE_SIZE);
        // 'a' is 97, 97 % 8 == 1
        assert_eq!(a, 1);
        assert_eq!(avatar_color_index(""), 0);
    }

    #[test]
    fn test_unparseable_timestamp_shown_verbatim() {
        assert_eq!(format_received_at("yesterday", "%b %d"), "yesterday");
    }

    #[test]
    fn test_rfc3339_timestamp_formatted() {
        let out = format_received_at("2024-03-01T10:30:00Z", "%b %d %H:%M");
        assert_eq!(out, "Mar 01 10:30");
    }

    #[test]
    fn test_empty_subject_placeholder() {
        assert_eq!(display_subject(""), "(No subject)");
        assert_eq!(display_subject("Hi"), "Hi");
    }
}
