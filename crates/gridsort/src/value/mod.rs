mod compare;


pub use compare::compare;

use std::{borrow::Cow, sync::OnceLock};
use time::{Date, format_description::FormatItem};

static ISO_DATE: OnceLock<Vec<FormatItem<'static>>> = OnceLock::new();

///
/// SortValue
///
/// Comparable projection of one record field. Accessors produce this from
/// whatever shape the row actually holds; [`compare`] defines the ordering
/// policy across variants. Absent or malformed fields map to `Null` and sort
/// last in both directions.
///

#[derive(Clone, Debug, PartialEq)]
pub enum SortValue {
    Null,
    Number(f64),
    Text(String),
    Date(Date),
}

impl SortValue {
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Parse an ISO `YYYY-MM-DD` string into a calendar date.
    #[must_use]
    pub(crate) fn parse_iso_date(s: &str) -> Option<Date> {
        let format =
            ISO_DATE.get_or_init(|| time::format_description::parse("[year]-[month]-[day]").unwrap());

        Date::parse(s, format).ok()
    }

    /// Canonical text rendering used by the mixed-variant comparison rule.
    pub(crate) fn render(&self) -> Cow<'_, str> {
        match self {
            Self::Null => Cow::Borrowed(""),
            Self::Number(n) => Cow::Owned(n.to_string()),
            Self::Text(s) => Cow::Borrowed(s),
            Self::Date(d) => {
                let month = u8::from(d.month());
                Cow::Owned(format!("{:04}-{:02}-{:02}", d.year(), month, d.day()))
            }
        }
    }
}

impl From<f64> for SortValue {
    fn from(n: f64) -> Self {
        // Non-finite numbers have no place in a total ordering; degrade them
        // to the null rule instead of failing.
        if n.is_finite() { Self::Number(n) } else { Self::Null }
    }
}

impl From<f32> for SortValue {
    fn from(n: f32) -> Self {
        f64::from(n).into()
    }
}

impl From<i64> for SortValue {
    #[expect(clippy::cast_precision_loss)]
    fn from(n: i64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<u64> for SortValue {
    #[expect(clippy::cast_precision_loss)]
    fn from(n: u64) -> Self {
        Self::Number(n as f64)
    }
}

impl From<i32> for SortValue {
    fn from(n: i32) -> Self {
        Self::Number(n.into())
    }
}

impl From<u32> for SortValue {
    fn from(n: u32) -> Self {
        Self::Number(n.into())
    }
}

impl From<&str> for SortValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for SortValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Date> for SortValue {
    fn from(d: Date) -> Self {
        Self::Date(d)
    }
}

impl<T: Into<Self>> From<Option<T>> for SortValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}
