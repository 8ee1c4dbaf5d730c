use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Cannot read input file {path}: {source}")]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Line {line}: missing field '{field}'")]
    MissingField { line: usize, field: &'static str },

    #[error("Line {line}: invalid number for '{field}': {value:?}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("Cannot read config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error in {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Home directory not found")]
    HomeNotFound,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;

impl ReportError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InputRead { .. } => 2,
            Self::MissingField { .. } | Self::InvalidNumber { .. } => 3,
            Self::ConfigRead { .. } | Self::ConfigParse { .. } => 4,
            Self::HomeNotFound => 5,
            _ => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let err = ReportError::InvalidNumber {
            line: 4,
            field: "quantity",
            value: "abc".to_string(),
        };
        assert_eq!(err.exit_code(), 3);
        assert_eq!(ReportError::HomeNotFound.exit_code(), 5);

        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        assert_eq!(ReportError::Io(io).exit_code(), 1);
    }

    #[test]
    fn test_invalid_number_message() {
        let err = ReportError::InvalidNumber {
            line: 7,
            field: "normal price",
            value: "ten".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Line 7: invalid number for 'normal price': \"ten\""
        );
    }
}
