use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

impl EtlError {
    pub fn config(message: impl Into<String>) -> Self {
        EtlError::ConfigError {
            message: message.into(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            EtlError::CsvError(_) => {
                "Re-export the sheet as UTF-8 CSV and check for broken quoting"
            }
            EtlError::IoError(_) => {
                "Run from the project root so the input file and public/data/ are reachable"
            }
            EtlError::ConfigError { .. } => "Check the configured input and output paths",
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
