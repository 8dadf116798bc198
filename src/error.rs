use std::fmt;
use thiserror::Error;

/// Error type returned by program hooks (`setup` and `teardown`).
///
/// Boxed so hooks can return anything from a string literal
/// (`Err("bad input".into())`) to a domain error of their own.
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

/// The stage of a run that produced a terminal error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Setup,
    Input,
    Output,
    Teardown,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Setup => "setup",
            Phase::Input => "input",
            Phase::Output => "output",
            Phase::Teardown => "teardown",
        };
        f.write_str(name)
    }
}

/// All error types for recawk
#[derive(Error, Debug)]
pub enum Error {
    #[error("setup failed: {0}")]
    Setup(#[source] HookError),

    #[error("input error: {0}")]
    Input(#[source] std::io::Error),

    #[error("teardown failed: {0}")]
    Teardown(#[source] HookError),

    #[error("output error: {0}")]
    Output(#[source] std::io::Error),

    #[error("run cancelled after record {record}")]
    Cancelled { record: u64 },

    #[error("invalid variable assignment: {0}")]
    InvalidAssignment(String),
}

impl Error {
    pub fn invalid_assignment(assignment: impl Into<String>) -> Self {
        Self::InvalidAssignment(assignment.into())
    }

    /// The run phase this error terminated, if it came from a run.
    ///
    /// Cancellation is reported as an input-phase stop: it is observed while
    /// waiting on the next record.
    pub fn phase(&self) -> Option<Phase> {
        match self {
            Error::Setup(_) => Some(Phase::Setup),
            Error::Input(_) | Error::Cancelled { .. } => Some(Phase::Input),
            Error::Output(_) => Some(Phase::Output),
            Error::Teardown(_) => Some(Phase::Teardown),
            Error::InvalidAssignment(_) => None,
        }
    }
}

/// Result type alias for recawk operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_setup_error() {
        let err = Error::Setup("missing column".into());
        assert_eq!(err.phase(), Some(Phase::Setup));
        let msg = format!("{}", err);
        assert!(msg.contains("setup failed"));
        assert!(msg.contains("missing column"));
    }

    #[test]
    fn test_teardown_error_keeps_source() {
        let err = Error::Teardown("totals mismatch".into());
        assert_eq!(err.phase(), Some(Phase::Teardown));
        let source = err.source().expect("teardown error has a source");
        assert_eq!(source.to_string(), "totals mismatch");
    }

    #[test]
    fn test_input_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stream closed");
        let err = Error::Input(io_err);
        assert_eq!(err.phase(), Some(Phase::Input));
        assert!(format!("{}", err).contains("input error"));
    }

    #[test]
    fn test_cancelled_is_input_phase() {
        let err = Error::Cancelled { record: 7 };
        assert_eq!(err.phase(), Some(Phase::Input));
        assert_eq!(format!("{}", err), "run cancelled after record 7");
    }

    #[test]
    fn test_invalid_assignment_has_no_phase() {
        let err = Error::invalid_assignment("novalue");
        assert_eq!(err.phase(), None);
        assert!(format!("{}", err).contains("novalue"));
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Setup.to_string(), "setup");
        assert_eq!(Phase::Input.to_string(), "input");
        assert_eq!(Phase::Output.to_string(), "output");
        assert_eq!(Phase::Teardown.to_string(), "teardown");
    }
}
