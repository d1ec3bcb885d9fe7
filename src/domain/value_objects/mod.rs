//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod cancellation;
mod goal;
mod outcome;
mod tags;

pub use cancellation::CancellationToken;
pub use goal::Goal;
pub use outcome::{DeploymentArtifact, ExitOutcome};
pub use tags::TagFilter;
