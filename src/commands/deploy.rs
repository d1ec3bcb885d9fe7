use std::path::PathBuf;

use anyhow::Result;
use terramena::application::DeployOptions;
use terramena::domain::ports::{DeployEvent, WorkspaceSpec};
use terramena::domain::value_objects::CancellationToken;
use terramena::infrastructure::deployment_env;
use terramena::presentation::{create_deploy_use_case, create_event_sink};
use terramena::{Config, Goal, TagFilter, TerramenaError};

use super::or_configured;

/// Arguments of `terramena deploy`
#[derive(Debug)]
pub struct DeployArgs {
    pub module: PathBuf,
    pub tags: Vec<String>,
    pub state: Option<PathBuf>,
    pub ssh_config: Option<PathBuf>,
    pub channel: Option<PathBuf>,
    pub extra_paths: Vec<PathBuf>,
    pub template: Option<PathBuf>,
    pub goal: Option<Goal>,
    pub no_substitutes: bool,
    pub show_trace: bool,
}

/// Run a deployment, returning the exit code for the process
pub fn cmd_deploy(config: &Config, args: DeployArgs, json: bool) -> Result<i32> {
    let state = or_configured(args.state, &config.state.path);
    let ssh_config = or_configured(args.ssh_config, &config.deploy.ssh_config);
    let channel = or_configured(args.channel, &config.deploy.channel);

    let sink = create_event_sink(json);

    if !ssh_config.is_file() {
        sink.on_event(DeployEvent::Warning {
            message: format!(
                "ssh config file {} not found, SSH_CONFIG_FILE will not be set",
                ssh_config.display()
            ),
        });
    }
    if !state.is_file() {
        return Err(TerramenaError::StateUnreadable {
            path: state,
            cause: "file not found".into(),
        }
        .into());
    }

    let spec = WorkspaceSpec::new(args.module, channel)
        .with_template(args.template)
        .with_extra_paths(args.extra_paths);
    let options = DeployOptions::new(spec)
        .with_tags(TagFilter::new(args.tags))
        .with_goal(args.goal.unwrap_or(config.deploy.goal))
        .with_env(deployment_env(&ssh_config))
        .with_show_trace(args.show_trace)
        .with_no_substitutes(args.no_substitutes);

    let use_case = create_deploy_use_case(config, &state, sink, json);
    let result = use_case.execute(&options, &CancellationToken::new())?;

    Ok(if result.is_success() {
        0
    } else {
        result.exit_code()
    })
}
