//! Parameters accepted by every listing operation.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::Serialize;

/// Field a listing can be ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum SortKey {
    Id = 0,
    Name = 1,
    Abbreviation = 2,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Id, SortKey::Name, SortKey::Abbreviation];

    pub const fn as_str(self) -> &'static str {
        match self {
            SortKey::Id => "Id",
            SortKey::Name => "Name",
            SortKey::Abbreviation => "Abbreviation",
        }
    }

    fn from_discriminant(value: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|key| *key as i64 == value)
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no [`SortKey`] variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortKey(pub String);

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}

/// Interprets the raw `sortBy` value received from the HTTP boundary.
///
/// A variant name or a known discriminant selects that key. A comma-separated
/// list of names or integers combines their discriminants with a bitwise OR,
/// so `"Id, Name"` selects [`SortKey::Name`] and `"Name, Abbreviation"` yields
/// the unrecognized value 3. An unrecognized value (`None`) is ordered by name
/// in the listing pipeline. Anything that does not parse, including a missing
/// value, falls back to [`SortKey::Id`].
pub fn sort_key_from_query(raw: Option<&str>) -> Option<SortKey> {
    let Some(raw) = raw.map(str::trim) else {
        return Some(SortKey::Id);
    };

    let mut combined = 0_i64;
    for part in raw.split(',').map(str::trim) {
        match parse_sort_part(part) {
            Some(value) => combined |= value,
            None => return Some(SortKey::Id),
        }
    }

    SortKey::from_discriminant(combined)
}

fn parse_sort_part(part: &str) -> Option<i64> {
    match part.parse::<SortKey>() {
        Ok(key) => Some(key as i64),
        Err(_) => part.parse::<i64>().ok(),
    }
}

/// Immutable bundle of search, ordering and paging options for one listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilteringParams {
    pub search_query: Option<String>,
    /// `None` stands for a key the pipeline does not recognize.
    pub sort_by: Option<SortKey>,
    pub descending: bool,
    /// 1-based. Values below 1 are clamped by the pipeline.
    pub page_number: i32,
    pub page_size: i32,
}

pub const DEFAULT_PAGE_SIZE: i32 = 10;

impl Default for FilteringParams {
    fn default() -> Self {
        Self {
            search_query: None,
            sort_by: Some(SortKey::Name),
            descending: false,
            page_number: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl FilteringParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }

    pub fn sort_by(mut self, sort_by: Option<SortKey>) -> Self {
        self.sort_by = sort_by;
        self
    }

    pub fn descending(mut self, descending: bool) -> Self {
        self.descending = descending;
        self
    }

    pub fn paginate(mut self, page_number: i32, page_size: i32) -> Self {
        self.page_number = page_number;
        self.page_size = page_size;
        self
    }
}
