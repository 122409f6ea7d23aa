//! Error types for petpals_core.
//!
//! Every rejected operation leaves the session untouched; callers can retry
//! with corrected input.

use petpals_data::PetId;
use thiserror::Error;

/// Main error type for engine operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// No pet with this id is in the live set
    #[error("no pet with id {0}")]
    UnknownPet(PetId),

    /// Source and target are the same pet
    #[error("pet {0} cannot interact with itself")]
    SamePet(PetId),

    /// A target was chosen before any source pet
    #[error("select an active pet before choosing a target")]
    NoSourceSelected,

    /// An interaction was requested without both pets chosen
    #[error("select an active pet and a target before interacting")]
    NotReady,

    /// Swapping needs at least two pets
    #[error("need at least two pets to swap, have {0}")]
    NotEnoughPets(usize),

    /// Configuration rejected by validation
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, EngineError>;
