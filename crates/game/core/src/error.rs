//! Error infrastructure for gladiator-core.
//!
//! Only programming-contract violations are errors here. Gameplay outcomes
//! that merely waste a turn (an unrecognised player action, for example) are
//! reported through [`crate::ActionOutcome`] instead.
//!
//! # Design Principles
//!
//! - **Type Safety**: one enum, one variant per contract that can be broken
//! - **Severity Classification**: errors are categorized so callers can decide
//!   whether to re-prompt or abort
//! - **Atomicity**: an operation that returns an error has not mutated state

use crate::state::Archetype;

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: unknown archetype name, playing a turn after the battle ended
    Validation,

    /// Unexpected request that indicates a bug in the caller.
    ///
    /// Examples: dispatching a special attack for an archetype that has none
    Internal,

    /// Battle state can no longer be trusted.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all gladiator errors.
///
/// Provides a uniform interface for error classification across the core and
/// the runtime layered on top of it.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for log filtering and for asserting on errors in tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Contract violations raised by combat operations.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatError {
    /// Archetype name or selection outside the closed set.
    #[error("fighter type not recognized: {0:?}")]
    InvalidArchetype(String),

    /// Special attack dispatched for an archetype without one.
    #[error("{archetype} has no special attack")]
    NoSpecialAttack { archetype: Archetype },

    /// Turn requested after one side already fell.
    #[error("battle is already over")]
    BattleOver,
}

impl GameError for CombatError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidArchetype(_) => ErrorSeverity::Validation,
            Self::NoSpecialAttack { .. } => ErrorSeverity::Internal,
            Self::BattleOver => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArchetype(_) => "COMBAT_INVALID_ARCHETYPE",
            Self::NoSpecialAttack { .. } => "COMBAT_NO_SPECIAL_ATTACK",
            Self::BattleOver => "COMBAT_BATTLE_OVER",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_attack_violation_is_internal() {
        let err = CombatError::NoSpecialAttack {
            archetype: Archetype::Dragon,
        };
        assert!(err.severity().is_internal());
        assert_eq!(err.error_code(), "COMBAT_NO_SPECIAL_ATTACK");
        assert_eq!(err.to_string(), "dragon has no special attack");
    }

    #[test]
    fn invalid_archetype_is_validation() {
        let err = CombatError::InvalidArchetype("paladin".into());
        assert_eq!(err.severity(), ErrorSeverity::Validation);
        assert!(!err.severity().is_internal());
    }
}
