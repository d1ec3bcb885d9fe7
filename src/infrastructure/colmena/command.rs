//! Colmena command line

use std::fmt;

use crate::domain::ports::LaunchRequest;
use crate::infrastructure::process::display_command;

/// A fully resolved `colmena` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColmenaCommand {
    program: String,
    args: Vec<String>,
}

impl ColmenaCommand {
    /// `<program> <goal> [--no-substitutes] -f <artifact> [--on @t1,@t2] [--show-trace]`
    pub fn from_request(program: impl Into<String>, request: &LaunchRequest) -> Self {
        let mut args = vec![request.goal.as_str().to_string()];

        if request.flags.no_substitutes {
            args.push("--no-substitutes".to_string());
        }

        args.push("-f".to_string());
        args.push(request.artifact.to_string());

        if let Some(selector) = request.tags.colmena_selector() {
            args.push("--on".to_string());
            args.push(selector);
        }

        if request.flags.show_trace {
            args.push("--show-trace".to_string());
        }

        Self {
            program: program.into(),
            args,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for ColmenaCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&display_command(&self.program, &self.args))
    }
}
