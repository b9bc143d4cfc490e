use std::io;
use std::process::{Command, Stdio};

use log::{debug, error};

use crate::error::{Result, WebmDrError};
use crate::logging;

/// Exit code and captured diagnostic text of a finished tool invocation.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Process exit code (-1 if the process was killed by a signal)
    pub code: i32,

    /// Combined stdout and stderr text
    pub log: String,
}

impl ToolOutput {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Runs an external tool to completion and captures its output.
///
/// The pipeline depends on this seam instead of `std::process` directly so
/// tests can substitute a runner that never spawns a real encoder.
pub trait CommandRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<ToolOutput>;
}

/// `CommandRunner` backed by `std::process::Command`.
#[derive(Debug, Clone, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<ToolOutput> {
        logging::log_command(program, args);

        let output = Command::new(program).args(args).output().map_err(|e| {
            error!("Failed to execute {}: {}", program, e);
            WebmDrError::Io(e)
        })?;

        let mut log = String::from_utf8_lossy(&output.stdout).into_owned();
        log.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(ToolOutput {
            code: output.status.code().unwrap_or(-1),
            log,
        })
    }
}

/// Checks that a required external command is available and executable.
pub fn check_dependency(cmd_name: &str) -> Result<()> {
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            debug!("Found dependency: {}", cmd_name);
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(WebmDrError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(e) => Err(WebmDrError::Io(e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_runner_captures_output_and_code() {
        let runner = SystemRunner;
        let output = runner
            .run("sh", &["-c".to_string(), "echo hello; exit 3".to_string()])
            .unwrap();
        assert_eq!(output.code, 3);
        assert!(!output.success());
        assert!(output.log.contains("hello"));
    }

    #[test]
    fn test_system_runner_merges_stderr() {
        let runner = SystemRunner;
        let output = runner
            .run("sh", &["-c".to_string(), "echo oops >&2".to_string()])
            .unwrap();
        assert!(output.success());
        assert!(output.log.contains("oops"));
    }

    #[test]
    fn test_check_dependency_missing() {
        assert!(matches!(
            check_dependency("definitely-not-a-real-tool"),
            Err(WebmDrError::DependencyNotFound(_))
        ));
    }
}
