pub mod comparator;
pub mod grid;
pub mod round;
pub mod selector;

pub use round::{GameRound, SubmitOutcome};
