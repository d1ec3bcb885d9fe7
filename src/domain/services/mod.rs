//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod state_extractor;

pub use state_extractor::{Extraction, SkippedHost, StateExtractor, OUTPUTS_KEY};
