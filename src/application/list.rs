//! List Use Case
//!
//! Loads the NixOS hosts from the Terraform state and renders the summary
//! printed by `terramena list`.

use crate::domain::entities::HostRecord;
use crate::domain::ports::HostRepository;
use crate::domain::value_objects::TagFilter;
use crate::error::TerramenaResult;

/// List use case - reads hosts, never touches anything else
pub struct ListHostsUseCase<H: HostRepository> {
    hosts: H,
}

impl<H: HostRepository> ListHostsUseCase<H> {
    pub fn new(hosts: H) -> Self {
        Self { hosts }
    }

    pub fn execute(&self, tags: &TagFilter) -> TerramenaResult<Vec<HostRecord>> {
        self.hosts.load_hosts(tags)
    }
}

/// `Found N host(s)` followed by one summary line per host
pub fn render_host_list(hosts: &[HostRecord]) -> String {
    let noun = if hosts.len() == 1 { "host" } else { "hosts" };
    let mut lines = vec![format!("Found {} {}", hosts.len(), noun)];
    lines.extend(hosts.iter().map(HostRecord::short_summary));
    lines.join("\n")
}
