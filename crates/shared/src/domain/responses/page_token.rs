use serde::{Deserialize, Serialize};
use std::fmt;

pub const ELLIPSIS: &str = "...";

/// One slot of a rendered page control.
///
/// Serialised as a bare JSON integer for pages and as the string `"..."`
/// for the gap marker, so renderers can branch on the JSON type alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPageToken", into = "RawPageToken")]
pub enum PageToken {
    /// A 1-based page number; always `>= 1`. Build from untrusted input
    /// with [`PageToken::new_page`].
    Page(i32),
    Ellipsis,
}

impl PageToken {
    /// Checked constructor for a page slot; `None` for numbers below 1.
    pub fn new_page(n: i32) -> Option<Self> {
        (n >= 1).then_some(PageToken::Page(n))
    }

    pub fn page(&self) -> Option<i32> {
        match self {
            PageToken::Page(n) => Some(*n),
            PageToken::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageToken::Ellipsis)
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageToken::Page(n) => write!(f, "{n}"),
            PageToken::Ellipsis => f.write_str(ELLIPSIS),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawPageToken {
    Page(i32),
    Marker(String),
}

impl TryFrom<RawPageToken> for PageToken {
    type Error = String;

    fn try_from(value: RawPageToken) -> Result<Self, Self::Error> {
        match value {
            RawPageToken::Page(n) => PageToken::new_page(n)
                .ok_or_else(|| format!("page token must be at least 1, got {n}")),
            RawPageToken::Marker(marker) if marker == ELLIPSIS => Ok(PageToken::Ellipsis),
            RawPageToken::Marker(marker) => Err(format!("unknown page token marker: {marker:?}")),
        }
    }
}

impl From<PageToken> for RawPageToken {
    fn from(value: PageToken) -> Self {
        match value {
            PageToken::Page(n) => RawPageToken::Page(n),
            PageToken::Ellipsis => RawPageToken::Marker(ELLIPSIS.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_pages_as_numbers_and_gaps_as_marker() {
        let tokens = vec![PageToken::Page(1), PageToken::Ellipsis, PageToken::Page(20)];

        let value = serde_json::to_value(&tokens).unwrap();

        assert_eq!(value, json!([1, "...", 20]));
    }

    #[test]
    fn rejects_unknown_markers_and_non_positive_pages() {
        assert!(serde_json::from_value::<PageToken>(json!("…")).is_err());
        assert!(serde_json::from_value::<PageToken>(json!(0)).is_err());
        assert_eq!(
            serde_json::from_value::<PageToken>(json!("...")).unwrap(),
            PageToken::Ellipsis
        );
    }

    #[test]
    fn checked_constructor_rejects_non_positive_pages() {
        assert_eq!(PageToken::new_page(1), Some(PageToken::Page(1)));
        assert_eq!(PageToken::new_page(0), None);
        assert_eq!(PageToken::new_page(-3), None);
    }

    #[test]
    fn display_matches_wire_form() {
        assert_eq!(PageToken::Page(7).to_string(), "7");
        assert_eq!(PageToken::Ellipsis.to_string(), "...");
    }
}
