use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScanError>;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("value given to {option}() should be between {range}")]
    InvalidOption {
        option: &'static str,
        range: &'static str,
    },

    #[error("{option}() conflicts with previously applied {previous}()")]
    ConflictingOptions {
        option: &'static str,
        previous: &'static str,
    },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("nmap scan failed: {0}")]
    Execution(String),

    #[error("nmap scan timed out")]
    Timeout,

    /// The diagnostic nmap prints when it was given nothing to scan.
    #[error("{0}")]
    NoTargets(String),

    #[error("Failed to parse nmap output: {0}")]
    Parse(#[from] quick_xml::DeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl ScanError {
    /// True for mistakes made while assembling options, as opposed to
    /// failures of the environment or of nmap itself.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            ScanError::InvalidOption { .. }
                | ScanError::ConflictingOptions { .. }
                | ScanError::InvalidInput(_)
                | ScanError::Config(_)
        )
    }
}
