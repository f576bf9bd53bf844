use hwmon_core::TrayCommand;
use std::io;
use tokio::process::{Child, Command};
use tracing::{debug, info, warn};

/// Carry out a command emitted by the monitor.  Errors are logged, never
/// propagated: a broken task-manager setting must not take the tray down.
pub fn execute(command: &TrayCommand) {
    match command {
        TrayCommand::Launch(cmd) => {
            if let Err(e) = launch(cmd) {
                warn!("Failed to launch '{cmd}': {e}");
            }
        }
    }
}

/// Spawn `cmd` without waiting for it.
///
/// The string is split like a shell would and executed directly; if that
/// fails (unbalanced quotes, program not found) it is handed to `sh -c`.
pub fn launch(cmd: &str) -> io::Result<()> {
    let child = match spawn_argv(cmd) {
        Ok(child) => child,
        Err(e) => {
            debug!("direct launch of '{cmd}' failed ({e}); retrying through the shell");
            Command::new("sh").arg("-c").arg(cmd).spawn()?
        }
    };
    info!(pid = child.id(), "launched '{cmd}'");
    // Dropping the handle detaches the child; tokio reaps it once it exits.
    Ok(())
}

fn spawn_argv(cmd: &str) -> io::Result<Child> {
    let argv = split_argv(cmd)?;
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty command"))?;
    Command::new(program).args(args).spawn()
}

/// Split `cmd` into program and arguments with shell quoting rules.
fn split_argv(cmd: &str) -> io::Result<Vec<String>> {
    shell_words::split(cmd).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))
}
