//! Core data structures for the PetPals simulation.

pub mod pet;
pub mod traits;
