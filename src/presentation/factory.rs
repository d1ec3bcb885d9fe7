//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;
use std::sync::Arc;

use crate::application::{DeployUseCase, ListHostsUseCase, SshUseCase};
use crate::config::Config;
use crate::domain::ports::DeployEventSink;
use crate::infrastructure::{
    ColmenaRunner, JsonEventSink, NixBuilder, TempWorkspaceBuilder, TemplateLocator,
    TerraformStateRepository, TracingEventSink,
};

/// Type alias for the concrete DeployUseCase with all dependencies
pub type ConcreteDeployUseCase =
    DeployUseCase<TerraformStateRepository, TempWorkspaceBuilder, NixBuilder, ColmenaRunner>;

/// Sink matching the requested output mode
pub fn create_event_sink(json: bool) -> Arc<dyn DeployEventSink> {
    if json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(TracingEventSink)
    }
}

/// Create a deploy use case reading hosts from `state`
///
/// Tool programs and the template search come from `config`. In JSON mode
/// colmena's own stdout is moved to stderr so stdout carries only events.
pub fn create_deploy_use_case(
    config: &Config,
    state: &Path,
    sink: Arc<dyn DeployEventSink>,
    json: bool,
) -> ConcreteDeployUseCase {
    let locator = TemplateLocator::from_current_exe(config.deploy.template_search_depth)
        .with_explicit(config.deploy.template.clone());

    DeployUseCase::new(
        TerraformStateRepository::new(state).with_sink(sink.clone()),
        TempWorkspaceBuilder::new(locator, sink.clone()),
        NixBuilder::new(config.tools.nix_build.clone(), sink.clone()),
        ColmenaRunner::new(config.tools.colmena.clone(), sink.clone())
            .with_stdout_to_stderr(json),
        sink,
    )
}

/// Create a list use case reading hosts from `state`
pub fn create_list_use_case(state: &Path) -> ListHostsUseCase<TerraformStateRepository> {
    ListHostsUseCase::new(TerraformStateRepository::new(state))
}

/// Create an ssh use case reading hosts from `state`
pub fn create_ssh_use_case(state: &Path) -> SshUseCase<TerraformStateRepository> {
    SshUseCase::new(TerraformStateRepository::new(state))
}
