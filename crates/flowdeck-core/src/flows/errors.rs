use crate::errors::FlowdeckError;

#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("Unknown flow '{id}'. Known flows: flow1, flow2, flow3, flow4")]
    UnknownFlow { id: String },
}

impl FlowdeckError for FlowError {
    fn error_code(&self) -> &'static str {
        match self {
            FlowError::UnknownFlow { .. } => "UNKNOWN_FLOW",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, FlowError::UnknownFlow { .. })
    }
}
