//! Shared wire types: pagination, envelopes and big-number amounts

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Largest page size the API accepts
pub const MAX_PAGE_SIZE: u32 = 250;

/// Page size used when the caller does not ask for one
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Pagination parameters, normalized on construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
}

impl PageRequest {
    /// Create a page request. `page` is at least 1 and `page_size` is
    /// clamped into `1..=MAX_PAGE_SIZE`.
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// 1-based page number
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Page size as sent upstream
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub(crate) fn push_query(&self, query: &mut Vec<(&'static str, String)>) {
        query.push(("page", self.page.to_string()));
        query.push(("page_size", self.page_size.to_string()));
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// One page of a paginated listing
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub item_count: Option<u64>,
    pub page_count: Option<u64>,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Response envelope wrapping every CSPR.cloud payload
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: Option<T>,
    pub item_count: Option<u64>,
    pub page_count: Option<u64>,
}

impl<T> Envelope<Vec<T>> {
    pub fn into_page(self) -> Option<Page<T>> {
        let data = self.data?;
        Some(Page {
            data,
            item_count: self.item_count,
            page_count: self.page_count,
        })
    }
}

/// A mote-denominated (or otherwise big) number.
///
/// The API sends these either as JSON numbers or as decimal strings; the
/// textual form is kept so nothing is lost to float conversion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Amount(String);

impl Amount {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Integer value in motes, if the text is a plain unsigned integer
    pub fn motes(&self) -> Option<u128> {
        self.0.trim().parse().ok()
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => Amount(text),
            Raw::Number(number) => Amount(number.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_is_clamped() {
        assert_eq!(PageRequest::new(1, 500).page_size(), 250);
        assert_eq!(PageRequest::new(1, 0).page_size(), 1);
        assert_eq!(PageRequest::new(0, 10).page(), 1);

        let once = PageRequest::new(3, 999);
        let twice = PageRequest::new(once.page(), once.page_size());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_query_pairs() {
        let mut query = Vec::new();
        PageRequest::new(2, 25).push_query(&mut query);
        assert_eq!(
            query,
            vec![("page", "2".to_string()), ("page_size", "25".to_string())]
        );
    }

    #[test]
    fn test_amount_accepts_numbers_and_strings() {
        let amounts: Vec<Amount> =
            serde_json::from_str(r#"[1500000000000, "98000000000000000000", "abc"]"#).unwrap();

        assert_eq!(amounts[0].motes(), Some(1_500_000_000_000));
        assert_eq!(amounts[1].motes(), Some(98_000_000_000_000_000_000));
        assert_eq!(amounts[2].motes(), None);
        assert_eq!(amounts[2].as_str(), "abc");
    }

    #[test]
    fn test_envelope_with_missing_fields() {
        let envelope: Envelope<Vec<u32>> = serde_json::from_str(r#"{"data":[1,2]}"#).unwrap();
        assert_eq!(envelope.data, Some(vec![1, 2]));
        assert_eq!(envelope.item_count, None);

        let envelope: Envelope<Vec<u32>> = serde_json::from_str(r#"{"data":null}"#).unwrap();
        assert!(envelope.data.is_none());
    }
}
