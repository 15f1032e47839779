//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from the combat rules, action providers, and configuration
//! so clients can bubble them up with consistent context.
use thiserror::Error;

use gladiator_core::{CombatError, ErrorSeverity, GameError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Combat(#[from] CombatError),

    #[error("player action provider not set")]
    ProviderNotSet,

    #[error("scripted action provider ran out of actions")]
    ProviderExhausted,

    #[error("player input closed")]
    InputClosed,

    #[error("invalid configuration value for {key}: {value:?}")]
    InvalidConfig { key: &'static str, value: String },

    #[error("I/O error")]
    Io(#[from] std::io::Error),
}

impl GameError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::Combat(err) => err.severity(),
            RuntimeError::ProviderNotSet | RuntimeError::InvalidConfig { .. } => {
                ErrorSeverity::Validation
            }
            RuntimeError::ProviderExhausted => ErrorSeverity::Internal,
            RuntimeError::InputClosed | RuntimeError::Io(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::Combat(err) => err.error_code(),
            RuntimeError::ProviderNotSet => "RUNTIME_PROVIDER_NOT_SET",
            RuntimeError::ProviderExhausted => "RUNTIME_PROVIDER_EXHAUSTED",
            RuntimeError::InputClosed => "RUNTIME_INPUT_CLOSED",
            RuntimeError::InvalidConfig { .. } => "RUNTIME_INVALID_CONFIG",
            RuntimeError::Io(_) => "RUNTIME_IO",
        }
    }
}
