use thiserror::Error;

pub type Result<T> = std::result::Result<T, FlowError>;

#[derive(Error, Debug)]
pub enum FlowError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },
    #[error("{action} is not available during the {step} step")]
    StepMismatch {
        action: &'static str,
        step: &'static str,
    },
    #[error("settlement failed: {0}")]
    Settlement(#[from] SettlementError),
}

impl FlowError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum SettlementError {
    #[error("settlement rejected: {0}")]
    Rejected(String),
    #[error("settlement backend unavailable: {0}")]
    Unavailable(String),
}
