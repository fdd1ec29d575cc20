use crate::direction::{Direction, ParseDirectionError};
use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

///
/// SortKey
///
/// Field identifier naming which attribute of a record to compare on.
///

#[derive(
    Clone, Debug, Deref, Deserialize, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize,
)]
pub struct SortKey(String);

impl SortKey {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SortKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

impl From<&str> for SortKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

///
/// SortState
///
/// Tri-state sort configuration for one table view. The unsorted state
/// carries no key, so the (no key, explicit direction) combination is
/// unrepresentable rather than merely invalid.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "direction", content = "key", rename_all = "lowercase")]
pub enum SortState {
    #[default]
    Unsorted,
    Ascending(SortKey),
    Descending(SortKey),
}

impl SortState {
    #[must_use]
    pub fn ascending(key: impl Into<SortKey>) -> Self {
        Self::Ascending(key.into())
    }

    #[must_use]
    pub fn descending(key: impl Into<SortKey>) -> Self {
        Self::Descending(key.into())
    }

    /// Advance the cycle for one header activation.
    ///
    /// Repeated activation of the active key walks
    /// ascending → descending → unsorted; activating any other key re-enters
    /// at ascending, never resuming that key's prior direction.
    pub fn toggle(&mut self, key: &str) {
        *self = match std::mem::take(self) {
            Self::Ascending(active) if active.as_str() == key => Self::Descending(active),
            Self::Descending(active) if active.as_str() == key => Self::Unsorted,
            _ => Self::Ascending(SortKey::from(key)),
        };
    }

    /// Active key, `None` iff unsorted.
    #[must_use]
    pub const fn key(&self) -> Option<&SortKey> {
        match self {
            Self::Unsorted => None,
            Self::Ascending(key) | Self::Descending(key) => Some(key),
        }
    }

    /// Active direction, `None` iff unsorted.
    #[must_use]
    pub const fn direction(&self) -> Option<Direction> {
        match self {
            Self::Unsorted => None,
            Self::Ascending(_) => Some(Direction::Asc),
            Self::Descending(_) => Some(Direction::Desc),
        }
    }

    /// Header indicator query: the active direction iff `key` is the active
    /// key, `None` for every other column.
    #[must_use]
    pub fn direction_for(&self, key: &str) -> Option<Direction> {
        match self {
            Self::Ascending(active) if active.as_str() == key => Some(Direction::Asc),
            Self::Descending(active) if active.as_str() == key => Some(Direction::Desc),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_unsorted(&self) -> bool {
        matches!(self, Self::Unsorted)
    }
}

impl fmt::Display for SortState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsorted => f.write_str("none"),
            Self::Ascending(key) => write!(f, "{key}:asc"),
            Self::Descending(key) => write!(f, "{key}:desc"),
        }
    }
}

///
/// ParseSortStateError
///

#[derive(Debug, Eq, Error, PartialEq)]
pub enum ParseSortStateError {
    #[error("empty sort key")]
    EmptyKey,

    #[error("missing direction separator")]
    MissingDirection,

    #[error(transparent)]
    Direction(#[from] ParseDirectionError),
}

impl FromStr for SortState {
    type Err = ParseSortStateError;

    /// Parse the compact `key:asc` / `key:desc` / `none` form used when the
    /// view state is persisted in a query string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "none" {
            return Ok(Self::Unsorted);
        }

        // Keys may themselves contain separators; the direction is always
        // the suffix after the last one.
        let (key, direction) = s
            .rsplit_once(':')
            .ok_or(ParseSortStateError::MissingDirection)?;

        if key.is_empty() {
            return Err(ParseSortStateError::EmptyKey);
        }

        let state = match direction.parse::<Direction>()? {
            Direction::Asc => Self::ascending(key),
            Direction::Desc => Self::descending(key),
        };

        Ok(state)
    }
}

///
/// TESTS
///
