//! Child process helpers shared by the external tool adapters
//!
//! The deployment child stays in terramena's process group, so it keeps the
//! terminal for interactive prompts and receives terminal-generated signals
//! directly. Termination requests that reach only terramena are relayed to
//! the child by pid.

use std::process::{Child, ExitStatus};
use std::sync::{Once, OnceLock};
use std::thread;
use std::time::Duration;

use crate::domain::value_objects::CancellationToken;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Signal sent to the child for any termination request.
///
/// The handler cannot tell SIGINT, SIGTERM and SIGHUP apart, so all three
/// are relayed as SIGTERM.
pub const FORWARDED_SIGNAL: &str = "SIGTERM";

static HANDLER: Once = Once::new();
static PROCESS_TOKEN: OnceLock<CancellationToken> = OnceLock::new();

/// Render a program and its arguments as a copy-pasteable shell line
pub fn display_command<I, S>(program: &str, args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut line = shell_quote(program);
    for arg in args {
        line.push(' ');
        line.push_str(&shell_quote(arg.as_ref()));
    }
    line
}

fn shell_quote(word: &str) -> String {
    let plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "@%+=:,./-_".contains(c));
    if plain {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}

/// Token flipped by SIGINT, SIGTERM or SIGHUP.
///
/// The handler is installed on first call and stays for the life of the
/// process; later calls return the same token.
pub fn termination_token() -> CancellationToken {
    let token = PROCESS_TOKEN.get_or_init(CancellationToken::new).clone();
    HANDLER.call_once(|| {
        let handler_token = token.clone();
        if let Err(e) = ctrlc::set_handler(move || handler_token.cancel()) {
            tracing::warn!("failed to install termination handler: {}", e);
        }
    });
    token
}

/// Wait for `child`, sending it [`FORWARDED_SIGNAL`] once when `cancelled`
/// turns true. Returns the exit status and whether a signal was sent.
pub fn supervise(
    child: &mut Child,
    cancelled: impl Fn() -> bool,
    mut on_forward: impl FnMut(u32),
) -> std::io::Result<(ExitStatus, bool)> {
    let mut forwarded = false;
    loop {
        if let Some(status) = child.try_wait()? {
            return Ok((status, forwarded));
        }
        if !forwarded && cancelled() {
            terminate(child);
            forwarded = true;
            on_forward(child.id());
        }
        thread::sleep(POLL_INTERVAL);
    }
}

#[cfg(unix)]
fn terminate(child: &mut Child) {
    use nix::sys::signal::{kill, Signal};
    use nix::unistd::Pid;

    let pid = Pid::from_raw(child.id() as i32);
    if let Err(e) = kill(pid, Signal::SIGTERM) {
        tracing::debug!("kill({}) failed: {}", pid, e);
    }
}

#[cfg(not(unix))]
fn terminate(child: &mut Child) {
    let _ = child.kill();
}
