//! Supervised colmena runner

use std::collections::BTreeMap;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::Arc;

use crate::domain::ports::{DeployEvent, DeployEventSink, DeploymentLauncher, LaunchRequest};
use crate::domain::value_objects::{CancellationToken, ExitOutcome};
use crate::error::{TerramenaError, TerramenaResult};
use crate::infrastructure::process;

use super::command::ColmenaCommand;

/// Environment variable colmena reads its ssh_config from
pub const SSH_CONFIG_ENV: &str = "SSH_CONFIG_FILE";

/// Environment overlay for a deployment
///
/// `SSH_CONFIG_FILE` is set to the absolute ssh_config path only when the
/// file exists.
pub fn deployment_env(ssh_config: &Path) -> BTreeMap<String, String> {
    let mut env = BTreeMap::new();
    if ssh_config.is_file() {
        if let Ok(absolute) = ssh_config.canonicalize() {
            env.insert(SSH_CONFIG_ENV.to_string(), absolute.display().to_string());
        }
    }
    env
}

/// Runs `colmena` as a supervised child sharing terramena's terminal
pub struct ColmenaRunner {
    program: String,
    sink: Arc<dyn DeployEventSink>,
    forward_termination: bool,
    stdout_to_stderr: bool,
}

impl ColmenaRunner {
    pub fn new(program: impl Into<String>, sink: Arc<dyn DeployEventSink>) -> Self {
        Self {
            program: program.into(),
            sink,
            forward_termination: true,
            stdout_to_stderr: false,
        }
    }

    /// Send colmena's stdout to terramena's stderr, leaving stdout to the
    /// event stream.
    pub fn with_stdout_to_stderr(mut self, enabled: bool) -> Self {
        self.stdout_to_stderr = enabled;
        self
    }

    /// Whether to install the process-wide SIGINT/SIGTERM/SIGHUP handler
    /// before spawning. Only the passed cancellation token is watched
    /// when disabled.
    pub fn with_forward_termination(mut self, enabled: bool) -> Self {
        self.forward_termination = enabled;
        self
    }
}

impl DeploymentLauncher for ColmenaRunner {
    fn launch(
        &self,
        request: &LaunchRequest,
        cancel: &CancellationToken,
    ) -> TerramenaResult<ExitOutcome> {
        let command = ColmenaCommand::from_request(&self.program, request);
        let rendered = command.to_string();

        self.sink.on_event(DeployEvent::DeployStarted {
            command: rendered.clone(),
            env: request
                .env
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        });

        let process_token = self
            .forward_termination
            .then(process::termination_token);

        let mut cmd = Command::new(command.program());
        cmd.args(command.args()).envs(&request.env);
        if self.stdout_to_stderr {
            cmd.stdout(Stdio::from(io::stderr()));
        }

        let mut child = cmd.spawn().map_err(|cause| TerramenaError::SpawnFailed {
            command: rendered,
            cause,
        })?;

        let cancelled = || {
            cancel.is_cancelled()
                || process_token
                    .as_ref()
                    .map(|t| t.is_cancelled())
                    .unwrap_or(false)
        };
        let (status, forwarded_signal) = process::supervise(&mut child, cancelled, |pid| {
            self.sink.on_event(DeployEvent::SignalForwarded { pid });
        })?;

        let outcome = ExitOutcome {
            code: status.code(),
            forwarded_signal,
        };
        self.sink.on_event(DeployEvent::DeployFinished {
            code: outcome.code,
            success: outcome.success(),
        });
        Ok(outcome)
    }
}
