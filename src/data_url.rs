//! Data-URL helpers for callers that traffic in `data:<mime>;base64,`
//! strings, plus the byte-count estimator used when reporting compression
//! ratios. Deliberately trivial; none of this participates in the scan or
//! the pipeline.

/// Extract the mime type from a data URL header.
pub fn mime_of(data_url: &str) -> Option<&str> {
    let rest = data_url.strip_prefix("data:")?;
    let end = rest.find([';', ','])?;
    Some(&rest[..end])
}

/// Estimate how many raw bytes a textual image representation stands for.
///
/// For a base64 data URL this is the decoded payload length, computed from
/// the character count minus padding. Anything else is counted at its UTF-8
/// byte length.
pub fn byte_count(data: &str) -> usize {
    let payload = match data.split_once(";base64,") {
        Some((header, payload)) if header.starts_with("data:") => payload,
        _ => return data.len(),
    };
    let padding = payload.chars().rev().take_while(|&c| c == '=').count();
    // Ragged payloads can carry more padding than their length accounts
    // for; the estimate floors at zero rather than underflowing.
    ((payload.len() / 4) * 3).saturating_sub(padding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_is_taken_from_the_header() {
        assert_eq!(mime_of("data:image/jpeg;base64,AAAA"), Some("image/jpeg"));
        assert_eq!(mime_of("data:image/png,rawdata"), Some("image/png"));
        assert_eq!(mime_of("image/jpeg;base64,AAAA"), None);
    }

    #[test]
    fn base64_payload_counts_decoded_bytes() {
        // "Man" encodes to "TWFu", "Ma" to "TWE=", "M" to "TQ==".
        assert_eq!(byte_count("data:image/jpeg;base64,TWFu"), 3);
        assert_eq!(byte_count("data:image/jpeg;base64,TWE="), 2);
        assert_eq!(byte_count("data:image/jpeg;base64,TQ=="), 1);
        assert_eq!(byte_count("data:image/jpeg;base64,"), 0);
    }

    #[test]
    fn non_data_urls_count_utf8_bytes() {
        assert_eq!(byte_count("hello"), 5);
    }

    #[test]
    fn ragged_payloads_floor_at_zero() {
        assert_eq!(byte_count("data:image/jpeg;base64,="), 0);
        assert_eq!(byte_count("data:image/jpeg;base64,==="), 0);
        assert_eq!(byte_count("data:image/jpeg;base64,A="), 0);
    }
}
