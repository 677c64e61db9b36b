pub mod calculate;
pub mod docs;
pub mod general;

pub use calculate::{handle_calculation, handle_recorded_calculation};
