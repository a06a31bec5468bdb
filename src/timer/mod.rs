pub mod state;

pub use state::{Phase, Snapshot, TimerState, CYCLES_BEFORE_LONG_REST, LONG_REST_MINUTES};
