//! Page identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifies a page in a reference sequence.
///
/// Pages are opaque: the simulator and the policies only ever compare them
/// for equality. Both integer and string tokens are accepted so that traces
/// like `[7, 0, 1]` and `["a", "b", "a"]` work alike.
///
/// Integers cover `i64::MIN..=u64::MAX`. Anything in `i64` range is always a
/// `Number`; only values above `i64::MAX` land in `Unsigned`, so equal
/// integers never end up in different variants.
///
/// Serialized untagged, so a page round-trips to the same JSON value it was
/// read from.
///
/// # Example
/// ```
/// use pagesim::Page;
///
/// let page = Page::from(42);
/// assert_eq!(page, Page::Number(42));
/// assert_eq!(page.to_string(), "42");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Page {
    Number(i64),
    Unsigned(u64),
    Token(String),
}

impl From<i64> for Page {
    fn from(n: i64) -> Self {
        Page::Number(n)
    }
}

impl From<&str> for Page {
    fn from(s: &str) -> Self {
        Page::Token(s.to_string())
    }
}

impl From<String> for Page {
    fn from(s: String) -> Self {
        Page::Token(s)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Page::Number(n) => write!(f, "{}", n),
            Page::Unsigned(n) => write!(f, "{}", n),
            Page::Token(s) => write!(f, "{}", s),
        }
    }
}

/// Build a reference sequence from integers.
///
/// Mostly a convenience for tests and benchmarks.
pub fn pages<I>(ids: I) -> Vec<Page>
where
    I: IntoIterator<Item = i64>,
{
    ids.into_iter().map(Page::Number).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_equality() {
        assert_eq!(Page::from(5), Page::from(5));
        assert_ne!(Page::from(5), Page::from(6));
        // Different kinds never compare equal.
        assert_ne!(Page::from(5), Page::from("5"));
    }

    #[test]
    fn test_page_display() {
        assert_eq!(format!("{}", Page::from(42)), "42");
        assert_eq!(format!("{}", Page::from("a")), "a");
    }

    #[test]
    fn test_page_serde_untagged() {
        let parsed: Vec<Page> = serde_json::from_str(r#"[1, "b", -3]"#).unwrap();
        assert_eq!(parsed, vec![Page::from(1), Page::from("b"), Page::from(-3)]);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), r#"[1,"b",-3]"#);
    }

    #[test]
    fn test_page_full_unsigned_range() {
        let parsed: Vec<Page> =
            serde_json::from_str("[18446744073709551615, 9223372036854775807, 1]").unwrap();

        assert_eq!(
            parsed,
            vec![
                Page::Unsigned(u64::MAX),
                Page::Number(i64::MAX),
                Page::Number(1)
            ]
        );
        assert_eq!(
            serde_json::to_string(&parsed).unwrap(),
            "[18446744073709551615,9223372036854775807,1]"
        );
        assert_eq!(parsed[0].to_string(), "18446744073709551615");
    }

    #[test]
    fn test_page_rejects_non_comparable_values() {
        assert!(serde_json::from_str::<Page>("1.5").is_err());
        assert!(serde_json::from_str::<Page>("true").is_err());
        assert!(serde_json::from_str::<Page>("{}").is_err());
    }

    #[test]
    fn test_pages_helper() {
        assert_eq!(pages([1, 2]), vec![Page::Number(1), Page::Number(2)]);
    }
}
