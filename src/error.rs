//! Process-level error type with stable exit codes.
//!
//! Exit-code conventions:
//!
//! - `2` — I/O problems (a data file could not be opened, read, or written)
//! - `3` — invalid input data (bad numeric literal, row-count mismatch)
//! - `4` — numeric failures (singular Gram matrix, non-finite result)

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// A file could not be opened/read/written.
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(2, message)
    }

    /// The input files were readable but their content is invalid.
    pub fn data(message: impl Into<String>) -> Self {
        Self::new(3, message)
    }

    /// The computation itself failed (singular matrix, non-finite values).
    pub fn numeric(message: impl Into<String>) -> Self {
        Self::new(4, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}
