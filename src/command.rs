//! Scoped external command invocation.
//!
//! The resolver shells out exactly once per pass, to expand the robot model
//! template. The invocation is synchronous and captures exit status, stdout,
//! and stderr together; every failure path surfaces as a
//! [`DerivedValueError`] so the pass aborts before any spec is assembled.

use crate::error::DerivedValueError;
use std::ffi::OsStr;
use std::process::Command;

/// Run a command and capture its full output. Non-zero exit is a hard
/// failure carrying the stderr text.
pub fn run_captured<I, S>(program: &str, args: I) -> Result<String, DerivedValueError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    log::debug!("Running command: {}", program);

    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|source| DerivedValueError::CommandSpawn {
            program: program.to_string(),
            source,
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        log::warn!(
            "Command '{}' failed ({}): {}",
            program,
            output.status,
            stderr
        );
        return Err(DerivedValueError::CommandFailed {
            program: program.to_string(),
            status: output.status,
            stderr,
        });
    }

    String::from_utf8(output.stdout).map_err(|_| DerivedValueError::NonUtf8Output {
        program: program.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_stdout() {
        let out = run_captured("sh", ["-c", "echo hello"]).unwrap();
        assert_eq!(out, "hello\n");
    }

    #[test]
    fn test_nonzero_exit_carries_stderr() {
        let err = run_captured("sh", ["-c", "echo boom >&2; exit 3"]).unwrap_err();
        match err {
            DerivedValueError::CommandFailed { stderr, status, .. } => {
                assert_eq!(stderr, "boom");
                assert_eq!(status.code(), Some(3));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_missing_program() {
        let err = run_captured("definitely_not_a_real_program", ["x"]).unwrap_err();
        assert!(matches!(err, DerivedValueError::CommandSpawn { .. }));
    }
}
