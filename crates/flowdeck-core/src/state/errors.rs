use crate::errors::{ConfigError, FlowdeckError};
use crate::flows::errors::FlowError;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error(transparent)]
    Flow(#[from] FlowError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl FlowdeckError for DispatchError {
    fn error_code(&self) -> &'static str {
        match self {
            DispatchError::Flow(e) => e.error_code(),
            DispatchError::Config(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            DispatchError::Flow(e) => e.is_user_error(),
            DispatchError::Config(e) => e.is_user_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_error_from_flow_error() {
        let flow_err = FlowError::UnknownFlow {
            id: "flow9".to_string(),
        };
        let dispatch_err = DispatchError::from(flow_err);
        assert_eq!(dispatch_err.error_code(), "UNKNOWN_FLOW");
        assert!(dispatch_err.is_user_error());
        assert!(dispatch_err.to_string().contains("flow9"));
    }

    #[test]
    fn test_dispatch_error_from_config_error() {
        let config_err = ConfigError::ConfigParseError {
            message: "invalid TOML".to_string(),
        };
        let dispatch_err = DispatchError::from(config_err);
        assert_eq!(dispatch_err.error_code(), "CONFIG_PARSE_ERROR");
        assert!(dispatch_err.is_user_error());
    }

    #[test]
    fn test_dispatch_error_config_io_is_not_user_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = DispatchError::Config(ConfigError::IoError { source: io_err });
        assert!(!err.is_user_error());
    }
}
