//! Compression-type detection from cube labels.

use crate::label::Label;
use ring_common::RingResult;
use serde::{Deserialize, Serialize};

/// Keyword recording the onboard compression type.
const CMPRS_TYPE_KEYWORD: &str = "INST_CMPRS_TYPE";

/// Onboard compression applied to the downlinked image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompressionKind {
    Lossy,
    Lossless,
    Unknown,
}

/// Read the compression type recorded in a label.
///
/// The keyword is looked up anywhere in the label tree since different
/// pipelines nest it under different groups. A recognized value maps to
/// `Lossy`/`Lossless`; anything else, including non-text values, maps to
/// `Unknown`. Only a missing keyword is an error.
pub fn detect_compression(label: &Label) -> RingResult<CompressionKind> {
    let value = label.find_keyword(CMPRS_TYPE_KEYWORD)?;
    let kind = match value.as_text().map(str::trim) {
        Some("LOSSY") => CompressionKind::Lossy,
        Some("LOSSLESS") => CompressionKind::Lossless,
        _ => CompressionKind::Unknown,
    };
    Ok(kind)
}

/// Check whether a label records lossy onboard compression.
///
/// True iff the trimmed keyword value is exactly `LOSSY`. Unrecognized
/// values are reported as not lossy rather than rejected.
pub fn is_lossy(label: &Label) -> RingResult<bool> {
    Ok(detect_compression(label)? == CompressionKind::Lossy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::LabelValue;

    fn label_with_compression(value: &str) -> Label {
        Label::new().with_group(
            "Instrument",
            Label::new().with_value(CMPRS_TYPE_KEYWORD, LabelValue::Text(value.to_string())),
        )
    }

    #[test]
    fn test_is_lossy_exact_match() {
        assert!(is_lossy(&label_with_compression("LOSSY")).unwrap());
    }

    #[test]
    fn test_is_lossy_trims_whitespace() {
        assert!(is_lossy(&label_with_compression("  LOSSY ")).unwrap());
    }

    #[test]
    fn test_is_lossy_rejects_other_values() {
        assert!(!is_lossy(&label_with_compression("LOSSLESS")).unwrap());
        assert!(!is_lossy(&label_with_compression("")).unwrap());
        assert!(!is_lossy(&label_with_compression("lossy")).unwrap());
        assert!(!is_lossy(&label_with_compression("NOTCOMP")).unwrap());
    }

    #[test]
    fn test_detect_compression_kinds() {
        assert_eq!(
            detect_compression(&label_with_compression("LOSSY")).unwrap(),
            CompressionKind::Lossy
        );
        assert_eq!(
            detect_compression(&label_with_compression("LOSSLESS")).unwrap(),
            CompressionKind::Lossless
        );
        assert_eq!(
            detect_compression(&label_with_compression("HUFFMAN")).unwrap(),
            CompressionKind::Unknown
        );
    }

    #[test]
    fn test_missing_keyword_is_an_error() {
        let label = Label::new();
        assert!(is_lossy(&label).is_err());
    }
}
