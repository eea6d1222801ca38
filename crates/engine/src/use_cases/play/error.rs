//! Play-action errors.

use cardstock_domain::DomainError;

use crate::infrastructure::ports::StoreError;

/// Errors that can occur while acting on the in-play character.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("No character is in play")]
    NoCharacterInPlay,
    #[error("Character not found")]
    CharacterNotFound,
    #[error("Ability source not found")]
    SourceNotFound,
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl PlayError {
    /// True for the one refusal that should reach the user as a blocking
    /// notice rather than as a failure.
    pub fn is_insufficient_resource(&self) -> bool {
        matches!(
            self,
            PlayError::Domain(DomainError::InsufficientResource { .. })
        )
    }
}
