//! Client-side table ordering: a tri-state sort state machine, a comparator
//! over heterogeneous field values, and the controller gluing both to a row
//! sequence. Header widgets drive [`SortController::toggle`] and read
//! [`SortController::direction_for`]; the data layer stays untouched.

pub mod controller;
pub mod direction;
pub mod state;
pub mod value;

pub use controller::{SortController, SortRecord};
pub use direction::Direction;
pub use state::{SortKey, SortState};
pub use value::SortValue;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No errors or internal comparison helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        controller::{SortController, SortRecord},
        direction::Direction,
        state::{SortKey, SortState},
        value::SortValue,
    };
}
