use crate::{
    direction::Direction,
    state::SortState,
    value::{SortValue, compare},
};

///
/// SortRecord
///
/// Accessor seam between the controller and one concrete row shape. Each row
/// type names its own sortable fields; unknown keys return
/// [`SortValue::Null`] and fall through the nulls-last rule rather than
/// failing.
///

pub trait SortRecord {
    fn sort_value(&self, key: &str) -> SortValue;
}

///
/// SortController
///
/// Owns the tri-state sort configuration for one table view and computes
/// stably ordered projections of its rows on demand. Sorting is a pure
/// function of `(rows, state, accessor)`: no interior caching, and repeated
/// calls with unchanged inputs produce identical output.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SortController {
    state: SortState,
}

impl SortController {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: SortState::Unsorted,
        }
    }

    /// Start from a caller-supplied initial configuration.
    #[must_use]
    pub const fn with_state(state: SortState) -> Self {
        Self { state }
    }

    /// Advance the toggle cycle for one header activation.
    pub fn toggle(&mut self, key: &str) {
        self.state.toggle(key);
    }

    #[must_use]
    pub const fn state(&self) -> &SortState {
        &self.state
    }

    /// Header indicator query, forwarded from the state machine.
    #[must_use]
    pub fn direction_for(&self, key: &str) -> Option<Direction> {
        self.state.direction_for(key)
    }

    /// Stable in-place sort using the row's own accessor.
    pub fn apply<R: SortRecord>(&self, rows: &mut [R]) {
        self.apply_by(rows, R::sort_value);
    }

    /// Stable in-place sort with an explicit accessor override.
    ///
    /// No-op when unsorted: the slice keeps its incoming order.
    pub fn apply_by<R, F>(&self, rows: &mut [R], accessor: F)
    where
        F: Fn(&R, &str) -> SortValue,
    {
        let (key, direction) = match &self.state {
            SortState::Unsorted => return,
            SortState::Ascending(key) => (key.as_str(), Direction::Asc),
            SortState::Descending(key) => (key.as_str(), Direction::Desc),
        };

        // slice::sort_by is stable, so equal-keyed rows keep their relative
        // input order with no positional tie-breaker.
        rows.sort_by(|left, right| compare(&accessor(left, key), &accessor(right, key), direction));
    }

    /// Stably sorted copy; the input sequence is never mutated and passes
    /// through in its original order when unsorted.
    #[must_use]
    pub fn sorted<R: SortRecord + Clone>(&self, rows: &[R]) -> Vec<R> {
        self.sorted_by(rows, R::sort_value)
    }

    /// Sorted copy with an explicit accessor override.
    #[must_use]
    pub fn sorted_by<R: Clone, F>(&self, rows: &[R], accessor: F) -> Vec<R>
    where
        F: Fn(&R, &str) -> SortValue,
    {
        let mut out = rows.to_vec();
        self.apply_by(&mut out, accessor);

        out
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, Eq, PartialEq)]
    struct Ticket {
        id: &'static str,
        priority: Option<i64>,
        opened: Option<&'static str>,
        assignee: Option<&'static str>,
    }

    impl SortRecord for Ticket {
        fn sort_value(&self, key: &str) -> SortValue {
            match key {
                "priority" => self.priority.into(),
                "opened" => self.opened.into(),
                "assignee" => self.assignee.into(),
                _ => SortValue::Null,
            }
        }
    }

    fn ticket(
        id: &'static str,
        priority: Option<i64>,
        opened: Option<&'static str>,
        assignee: Option<&'static str>,
    ) -> Ticket {
        Ticket {
            id,
            priority,
            opened,
            assignee,
        }
    }

    fn rows() -> Vec<Ticket> {
        vec![
            ticket("a", Some(5), Some("2024-01-02"), Some("Rivera")),
            ticket("b", None, Some("2023-12-31"), Some("ames")),
            ticket("c", Some(1), None, Some("Ames")),
            ticket("d", Some(10), Some("2024-02-10"), None),
        ]
    }

    fn ids(rows: &[Ticket]) -> Vec<&'static str> {
        rows.iter().map(|row| row.id).collect()
    }

    fn ids_of_refs(rows: &[&Ticket]) -> Vec<&'static str> {
        rows.iter().map(|row| row.id).collect()
    }

    #[test]
    fn unsorted_controller_passes_rows_through_unchanged() {
        let controller = SortController::new();
        let input = rows();
        assert_eq!(ids(&controller.sorted(&input)), ids(&input));
    }

    #[test]
    fn sorted_never_mutates_the_input() {
        let controller = SortController::with_state(SortState::ascending("priority"));
        let input = rows();
        let before = ids(&input);

        let _sorted = controller.sorted(&input);
        assert_eq!(ids(&input), before);
    }

    #[test]
    fn numeric_column_sorts_numerically_with_nulls_last() {
        let controller = SortController::with_state(SortState::ascending("priority"));
        assert_eq!(ids(&controller.sorted(&rows())), ["c", "a", "d", "b"]);

        let controller = SortController::with_state(SortState::descending("priority"));
        assert_eq!(ids(&controller.sorted(&rows())), ["d", "a", "c", "b"]);
    }

    #[test]
    fn date_string_column_sorts_chronologically() {
        let controller = SortController::with_state(SortState::ascending("opened"));
        assert_eq!(ids(&controller.sorted(&rows())), ["b", "a", "d", "c"]);
    }

    #[test]
    fn text_column_sorts_caselessly_and_stably() {
        // "ames" (b) and "Ames" (c) compare equal; input order b, c survives.
        let controller = SortController::with_state(SortState::ascending("assignee"));
        assert_eq!(ids(&controller.sorted(&rows())), ["b", "c", "a", "d"]);
    }

    #[test]
    fn equal_keys_preserve_input_order() {
        let controller = SortController::with_state(SortState::ascending("priority"));
        let input = vec![
            ticket("a", Some(1), None, None),
            ticket("b", Some(1), None, None),
        ];
        assert_eq!(ids(&controller.sorted(&input)), ["a", "b"]);
    }

    #[test]
    fn unknown_key_sorts_everything_as_null_keeping_order() {
        let controller = SortController::with_state(SortState::ascending("missing"));
        let input = rows();
        assert_eq!(ids(&controller.sorted(&input)), ids(&input));
    }

    #[test]
    fn sorted_is_idempotent_for_a_fixed_state() {
        let controller = SortController::with_state(SortState::ascending("priority"));
        let input = rows();
        assert_eq!(controller.sorted(&input), controller.sorted(&input));
    }

    #[test]
    fn toggling_to_descending_reverses_the_non_null_prefix() {
        let mut controller = SortController::new();
        controller.toggle("priority");

        let ascending = controller.sorted(&rows());
        let (non_null, nulls): (Vec<_>, Vec<_>) = ascending
            .iter()
            .partition(|row| row.priority.is_some());

        controller.toggle("priority");
        let descending = controller.sorted(&rows());

        let mut expected: Vec<_> = non_null.into_iter().rev().collect();
        expected.extend(nulls);
        assert_eq!(ids(&descending), ids_of_refs(&expected));
    }

    #[test]
    fn third_toggle_restores_the_original_order() {
        let mut controller = SortController::new();
        let input = rows();

        controller.toggle("priority");
        controller.toggle("priority");
        controller.toggle("priority");

        assert!(controller.state().is_unsorted());
        assert_eq!(ids(&controller.sorted(&input)), ids(&input));
    }

    #[test]
    fn closure_accessor_overrides_the_record_seam() {
        let controller = SortController::with_state(SortState::ascending("id"));
        let sorted = controller.sorted_by(&rows(), |row, key| match key {
            "id" => SortValue::from(row.id),
            _ => SortValue::Null,
        });
        assert_eq!(ids(&sorted), ["a", "b", "c", "d"]);
    }

    #[test]
    fn apply_sorts_in_place() {
        let controller = SortController::with_state(SortState::descending("priority"));
        let mut input = rows();
        controller.apply(&mut input);
        assert_eq!(ids(&input), ["d", "a", "c", "b"]);
    }
}
