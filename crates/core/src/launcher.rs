//! Detached process launching for the external URI opener.

use std::io;
use std::process::{Command, Stdio};

/// Spawn `args` as a detached child with null stdio.
///
/// The child is not waited on; the opener owns its own lifetime.
pub fn run_detached(args: &[String]) -> io::Result<()> {
    let (program, rest) = args
        .split_first()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty command"))?;

    Command::new(program)
        .args(rest)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_command_rejected() {
        let err = run_detached(&[]).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn missing_program_errors() {
        let args = vec!["definitely-not-a-real-binary-xyz".to_string()];
        assert!(run_detached(&args).is_err());
    }
}
