//! Terramena CLI - deploy NixOS hosts from Terraform output with Colmena
//!
//! Usage: terramena <COMMAND>
//!
//! Commands:
//!   list    List the NixOS hosts found in the Terraform state
//!   ssh     Open an SSH session to a host by its hostname
//!   deploy  Build the colmena deployment and run it

mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use terramena::config::ConfigWarning;
use terramena::presentation::{Cli, Commands};
use terramena::Config;

use commands::deploy::DeployArgs;

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    let json = cli.json;
    match run(cli) {
        Ok(0) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            ui::error::print_error(&e, json);
            std::process::exit(1);
        }
    }
}

fn init_tracing(cli: &Cli) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| cli.log_directive().into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();
}

fn run(cli: Cli) -> Result<i32> {
    let project_root = std::env::current_dir().ok();
    let (config, warnings) = Config::discover(project_root.as_deref())?;
    report_config_warnings(&warnings, cli.json);

    match cli.command {
        Commands::List { tags, state } => {
            commands::list::cmd_list(&config, tags, state, cli.json)?;
            Ok(0)
        }
        Commands::Ssh {
            target,
            user,
            keyfile,
            state,
            ssh_config,
        } => {
            commands::ssh::cmd_ssh(
                &config,
                &target,
                user,
                keyfile,
                state,
                ssh_config,
                cli.verbose > 0,
            )?;
            Ok(0)
        }
        Commands::Deploy {
            module,
            tags,
            state,
            ssh_config,
            channel,
            extra_paths,
            template,
            goal,
            no_substitutes,
            show_trace,
        } => commands::deploy::cmd_deploy(
            &config,
            DeployArgs {
                module,
                tags,
                state,
                ssh_config,
                channel,
                extra_paths,
                template,
                goal,
                no_substitutes,
                show_trace,
            },
            cli.json,
        ),
    }
}

fn report_config_warnings(warnings: &[ConfigWarning], json: bool) {
    for warning in warnings {
        if json {
            let _ = ui::json::emit(serde_json::json!({
                "event": "warning",
                "message": warning.to_string(),
            }));
        } else {
            tracing::warn!("{}", warning);
        }
    }
}
