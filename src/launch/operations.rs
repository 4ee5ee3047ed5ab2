//! Operations module (atomic side effects)

pub mod bundle;
pub mod discover;
pub mod sandbox;
pub mod spawn;
pub mod stat;

pub use bundle::resolve_bundle_executable;
pub use discover::discover_executables;
pub use sandbox::write_sandbox_profile;
pub use spawn::{run_captured, spawn};
pub use stat::probe_candidates;
