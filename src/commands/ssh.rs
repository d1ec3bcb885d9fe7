use std::path::PathBuf;
use std::process::Command;

use anyhow::Result;
use terramena::application::{SshOptions, SshTarget};
use terramena::infrastructure::process::display_command;
use terramena::presentation::create_ssh_use_case;
use terramena::{Config, TerramenaError};

use super::or_configured;

#[allow(clippy::too_many_arguments)]
pub fn cmd_ssh(
    config: &Config,
    target: &str,
    user: Option<String>,
    keyfile: Option<PathBuf>,
    state: Option<PathBuf>,
    ssh_config: Option<PathBuf>,
    verbose: bool,
) -> Result<()> {
    let state = or_configured(state, &config.state.path);
    let ssh_config = or_configured(ssh_config, &config.deploy.ssh_config);

    let target = SshTarget::parse(target, user.as_deref());
    tracing::debug!("hostname: '{}'", target.hostname);

    let options = SshOptions::new(target)
        .with_ssh_config(Some(ssh_config))
        .with_keyfile(keyfile)
        .with_verbose(verbose);
    let invocation = create_ssh_use_case(&state).execute(&options)?;

    let command = display_command(&config.tools.ssh, &invocation.args);
    tracing::debug!("ssh command: {}", command);

    let mut cmd = Command::new(&config.tools.ssh);
    cmd.args(&invocation.args);
    run_replacing_process(cmd, command)
}

/// Replace this process with `cmd`
#[cfg(unix)]
fn run_replacing_process(mut cmd: Command, command: String) -> Result<()> {
    use std::os::unix::process::CommandExt;

    // Only returns on failure.
    let cause = cmd.exec();
    Err(TerramenaError::SpawnFailed { command, cause }.into())
}

#[cfg(not(unix))]
fn run_replacing_process(mut cmd: Command, command: String) -> Result<()> {
    let status = cmd
        .status()
        .map_err(|cause| TerramenaError::SpawnFailed { command, cause })?;
    std::process::exit(status.code().unwrap_or(1));
}
