pub mod cli;
pub mod render;
pub mod run;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use cli::{Cli, Format};
pub use run::{Outcome, RunError, Source, run_solver};
