use crate::{direction::Direction, value::SortValue};
use std::cmp::Ordering;

/// Compare two field values under the table ordering policy.
///
/// Rules, applied in order:
/// 1. two nulls are equal;
/// 2. one null sorts last under both directions; the direction flips only
///    the non-null/non-null ordering, never the null placement;
/// 3. two numbers order numerically;
/// 4. two dates order by calendar day;
/// 5. two texts that both parse as ISO dates order by the parsed day;
/// 6. anything else orders by caseless comparison of each value's text
///    rendering.
#[must_use]
pub fn compare(left: &SortValue, right: &SortValue, direction: Direction) -> Ordering {
    match (left, right) {
        (SortValue::Null, SortValue::Null) => Ordering::Equal,
        // Null placement is fixed before the direction is applied, so absent
        // values pin to the end of the view whichever way the header points.
        (SortValue::Null, _) => Ordering::Greater,
        (_, SortValue::Null) => Ordering::Less,
        _ => direction.apply(compare_present(left, right)),
    }
}

// Same-variant fast paths first; mixed variants degrade to text.
fn compare_present(left: &SortValue, right: &SortValue) -> Ordering {
    match (left, right) {
        (SortValue::Number(a), SortValue::Number(b)) => {
            a.partial_cmp(b).unwrap_or(Ordering::Equal)
        }
        (SortValue::Date(a), SortValue::Date(b)) => a.cmp(b),
        (SortValue::Text(a), SortValue::Text(b)) => compare_text(a, b),
        (a, b) => compare_caseless(&a.render(), &b.render()),
    }
}

// Date-looking strings order chronologically rather than lexically; a column
// of ISO dates stored as text still sorts by day.
fn compare_text(a: &str, b: &str) -> Ordering {
    match (SortValue::parse_iso_date(a), SortValue::parse_iso_date(b)) {
        (Some(da), Some(db)) => da.cmp(&db),
        _ => compare_caseless(a, b),
    }
}

// Caseless ordering without allocating lowered copies.
fn compare_caseless(a: &str, b: &str) -> Ordering {
    let lowered_a = a.chars().flat_map(char::to_lowercase);
    let lowered_b = b.chars().flat_map(char::to_lowercase);

    lowered_a.cmp(lowered_b)
}
