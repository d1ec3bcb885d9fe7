//! Domain Layer
//!
//! The core of Terramena - host discovery and the deployment vocabulary,
//! without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Core domain entities (HostRecord, Workspace)
//! - `value_objects/` - Immutable value types (Goal, TagFilter, ExitOutcome)
//! - `services/` - Domain services (StateExtractor)
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or spawns processes
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
