//! SSH Use Case
//!
//! Resolves `[user@]hostname` against the discovered hosts and builds the
//! `ssh` argument list for connecting to it.

use std::path::PathBuf;

use crate::domain::entities::HostRecord;
use crate::domain::ports::HostRepository;
use crate::domain::value_objects::TagFilter;
use crate::error::{TerramenaError, TerramenaResult};

/// Who to connect to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshTarget {
    pub user: Option<String>,
    pub hostname: String,
}

impl SshTarget {
    /// Parse `user@hostname` or `hostname`; a user in the argument wins over
    /// `default_user`.
    pub fn parse(argument: &str, default_user: Option<&str>) -> Self {
        match argument.split_once('@') {
            Some((user, hostname)) if !user.is_empty() => Self {
                user: Some(user.to_string()),
                hostname: hostname.to_string(),
            },
            Some((_, hostname)) => Self {
                user: default_user.map(str::to_string),
                hostname: hostname.to_string(),
            },
            None => Self {
                user: default_user.map(str::to_string),
                hostname: argument.to_string(),
            },
        }
    }
}

/// Options for the ssh use case
#[derive(Debug, Clone)]
pub struct SshOptions {
    pub target: SshTarget,
    /// Passed as `-F` when the file exists
    pub ssh_config: Option<PathBuf>,
    /// Passed as `-i` when the file exists
    pub keyfile: Option<PathBuf>,
    /// Adds `-v`
    pub verbose: bool,
}

impl SshOptions {
    pub fn new(target: SshTarget) -> Self {
        Self {
            target,
            ssh_config: None,
            keyfile: None,
            verbose: false,
        }
    }

    pub fn with_ssh_config(mut self, path: Option<PathBuf>) -> Self {
        self.ssh_config = path;
        self
    }

    pub fn with_keyfile(mut self, path: Option<PathBuf>) -> Self {
        self.keyfile = path;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Resolved connection: the host and the arguments for `ssh`
#[derive(Debug, Clone)]
pub struct SshInvocation {
    pub host: HostRecord,
    pub args: Vec<String>,
}

/// SSH use case - finds the host, does not connect
pub struct SshUseCase<H: HostRepository> {
    hosts: H,
}

impl<H: HostRepository> SshUseCase<H> {
    pub fn new(hosts: H) -> Self {
        Self { hosts }
    }

    pub fn execute(&self, options: &SshOptions) -> TerramenaResult<SshInvocation> {
        let hostname = &options.target.hostname;
        let host = self
            .hosts
            .load_hosts(&TagFilter::all())?
            .into_iter()
            .find(|h| h.hostname() == hostname)
            .ok_or_else(|| TerramenaError::HostNotFound {
                hostname: hostname.clone(),
            })?;

        let ip = host.ip().ok_or_else(|| TerramenaError::HostWithoutAddress {
            hostname: hostname.clone(),
        })?;

        let mut args = Vec::new();
        if let Some(config) = options.ssh_config.as_ref().filter(|p| p.is_file()) {
            args.push("-F".to_string());
            args.push(config.display().to_string());
        }
        if let Some(key) = options.keyfile.as_ref().filter(|p| p.is_file()) {
            args.push("-i".to_string());
            args.push(key.display().to_string());
        }
        if options.verbose {
            args.push("-v".to_string());
        }
        args.push(match &options.target.user {
            Some(user) => format!("{}@{}", user, ip),
            None => ip.to_string(),
        });

        Ok(SshInvocation { host, args })
    }
}
