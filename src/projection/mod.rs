//! Investment projection with monthly compounding and contributions

mod state;
mod engine;
mod yearly;

pub use state::ProjectionState;
pub use engine::{project, ProjectionInput};
pub use yearly::{growth_multiple, write_yearly_csv, ProjectionResult, ProjectionSummary, YearlyDataPoint};
