//! Host Repository Port
//!
//! Source of discovered hosts (a Terraform state file in production).

use crate::domain::entities::HostRecord;
use crate::domain::value_objects::TagFilter;
use crate::error::TerramenaResult;

/// Loads NixOS hosts from provisioning output
pub trait HostRepository {
    /// Load every host matching `tags`, in document order
    fn load_hosts(&self, tags: &TagFilter) -> TerramenaResult<Vec<HostRecord>>;
}
