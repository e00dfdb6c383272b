/// Failure categories surfaced to the user.
///
/// Each kind maps to a fixed process exit code:
///
/// - `2`: bad input or usage (missing file, malformed CSV, invalid options)
/// - `3`: input that parses but cannot be analyzed (unknown quarter, no rows)
/// - `4`: failures while writing outputs (directory, summary CSV, charts)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InputNotFound,
    InputParse,
    UnknownQuarterLabel,
    EmptyDataset,
    Output,
    Usage,
}

impl ErrorKind {
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::InputNotFound | ErrorKind::InputParse | ErrorKind::Usage => 2,
            ErrorKind::UnknownQuarterLabel | ErrorKind::EmptyDataset => 3,
            ErrorKind::Output => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::InputNotFound => "InputNotFound",
            ErrorKind::InputParse => "InputParseError",
            ErrorKind::UnknownQuarterLabel => "UnknownQuarterLabel",
            ErrorKind::EmptyDataset => "EmptyDatasetError",
            ErrorKind::Output => "OutputError",
            ErrorKind::Usage => "UsageError",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone)]
pub struct AppError {
    kind: ErrorKind,
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            exit_code: kind.exit_code(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failure_kind() {
        let err = AppError::new(ErrorKind::UnknownQuarterLabel, "'Q5' at line 3");
        assert_eq!(err.to_string(), "UnknownQuarterLabel: 'Q5' at line 3");
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn exit_codes_are_non_zero() {
        for kind in [
            ErrorKind::InputNotFound,
            ErrorKind::InputParse,
            ErrorKind::UnknownQuarterLabel,
            ErrorKind::EmptyDataset,
            ErrorKind::Output,
            ErrorKind::Usage,
        ] {
            assert_ne!(kind.exit_code(), 0, "{kind} must fail the process");
        }
    }
}
