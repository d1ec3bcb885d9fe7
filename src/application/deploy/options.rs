//! Deploy Options
//!
//! Configuration types for deploy operations.

use std::collections::BTreeMap;

use crate::domain::ports::{DeployFlags, WorkspaceSpec};
use crate::domain::value_objects::{Goal, TagFilter};

/// Options for the deploy use case
#[derive(Debug, Clone)]
pub struct DeployOptions {
    /// What goes into the build workspace
    pub workspace: WorkspaceSpec,
    /// Hosts to build for and deploy to (empty = all)
    pub tags: TagFilter,
    /// Colmena goal
    pub goal: Goal,
    /// Variables added to colmena's environment
    pub env: BTreeMap<String, String>,
    /// `--show-trace` / `--no-substitutes`
    pub flags: DeployFlags,
}

impl DeployOptions {
    pub fn new(workspace: WorkspaceSpec) -> Self {
        Self {
            workspace,
            tags: TagFilter::all(),
            goal: Goal::default(),
            env: BTreeMap::new(),
            flags: DeployFlags::default(),
        }
    }

    pub fn with_tags(mut self, tags: TagFilter) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_goal(mut self, goal: Goal) -> Self {
        self.goal = goal;
        self
    }

    pub fn with_env(mut self, env: BTreeMap<String, String>) -> Self {
        self.env = env;
        self
    }

    pub fn with_show_trace(mut self, show_trace: bool) -> Self {
        self.flags.show_trace = show_trace;
        self
    }

    pub fn with_no_substitutes(mut self, no_substitutes: bool) -> Self {
        self.flags.no_substitutes = no_substitutes;
        self
    }
}
