//! External process execution.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::{debug, instrument};

use pyforge_core::{
    application::{
        ApplicationError,
        ports::{CommandOutput, CommandRunner},
    },
    error::ForgeResult,
};

/// Production command runner using `std::process`.
///
/// Commands run without a shell, with stdin closed and output captured.
/// A non-zero exit is reported through [`CommandOutput`], not as an error;
/// only a failure to start the process at all is an `Err`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    /// Create a new system runner.
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    #[instrument(skip_all, fields(program = program))]
    fn run(&self, program: &str, args: &[&str], cwd: &Path) -> ForgeResult<CommandOutput> {
        debug!(args = ?args, cwd = %cwd.display(), "Running external command");

        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|e| ApplicationError::CommandLaunchFailed {
                command: render_command(program, args),
                reason: e.to_string(),
            })?;

        debug!(code = ?output.status.code(), "Command finished");

        Ok(CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

pub(crate) fn render_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{program} {}", args.join(" "))
    }
}
