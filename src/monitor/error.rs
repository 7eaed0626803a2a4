use std::fmt::{Display, Formatter};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MonitorErrorCode {
    InvalidArgument,
    Internal,
}

impl MonitorErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MonitorErrorCode::InvalidArgument => "monitor/invalid-argument",
            MonitorErrorCode::Internal => "monitor/internal",
        }
    }
}

#[derive(Clone, Debug)]
pub struct MonitorError {
    pub code: MonitorErrorCode,
    message: String,
}

impl MonitorError {
    pub fn new(code: MonitorErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }
}

impl Display for MonitorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code_str())
    }
}

impl std::error::Error for MonitorError {}

pub type MonitorResult<T> = Result<T, MonitorError>;

pub fn invalid_argument(message: impl Into<String>) -> MonitorError {
    MonitorError::new(MonitorErrorCode::InvalidArgument, message)
}

pub fn internal_error(message: impl Into<String>) -> MonitorError {
    MonitorError::new(MonitorErrorCode::Internal, message)
}
