//! Pipelines module (orchestration)

pub mod execute;
pub mod select;

pub use execute::{launch_game, plan_launch, run_plan, LaunchContext};
pub use select::{rank_executables, select_executable};
