//! Selection state machine deciding which two pets an interaction applies to.
//!
//! ```text
//!  Idle --select p--> SourceSelected(p)
//!  SourceSelected(s) --select s--> Idle
//!  SourceSelected(s) --select t--> ReadyToInteract(s, t)
//!  ReadyToInteract(s, t) --select s--> Idle
//!  ReadyToInteract(s, t) --select u--> ReadyToInteract(s, u)
//! ```
//!
//! Transitions are pure; the session validates ids before applying them.

use crate::error::{EngineError, Result};
use petpals_data::PetId;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Selection {
    #[default]
    Idle,
    SourceSelected {
        source: PetId,
    },
    ReadyToInteract {
        source: PetId,
        target: PetId,
    },
}

impl Selection {
    /// Applies a click on pet `id`.
    #[must_use]
    pub fn select(self, id: PetId) -> Selection {
        match self {
            Selection::Idle => Selection::SourceSelected { source: id },
            Selection::SourceSelected { source } | Selection::ReadyToInteract { source, .. }
                if source == id =>
            {
                Selection::Idle
            }
            Selection::SourceSelected { source } | Selection::ReadyToInteract { source, .. } => {
                Selection::ReadyToInteract { source, target: id }
            }
        }
    }

    /// Explicitly chooses `id` as the target of the current source.
    pub fn with_target(self, id: PetId) -> Result<Selection> {
        match self {
            Selection::Idle => Err(EngineError::NoSourceSelected),
            Selection::SourceSelected { source } | Selection::ReadyToInteract { source, .. } => {
                if source == id {
                    Err(EngineError::SamePet(id))
                } else {
                    Ok(Selection::ReadyToInteract { source, target: id })
                }
            }
        }
    }

    #[must_use]
    pub fn source(&self) -> Option<PetId> {
        match *self {
            Selection::Idle => None,
            Selection::SourceSelected { source } | Selection::ReadyToInteract { source, .. } => {
                Some(source)
            }
        }
    }

    #[must_use]
    pub fn target(&self) -> Option<PetId> {
        match *self {
            Selection::ReadyToInteract { target, .. } => Some(target),
            _ => None,
        }
    }

    /// `(source, target)` once both are chosen.
    pub fn ready_pair(&self) -> Result<(PetId, PetId)> {
        match *self {
            Selection::ReadyToInteract { source, target } => Ok((source, target)),
            _ => Err(EngineError::NotReady),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Idle => write!(f, "idle"),
            Selection::SourceSelected { source } => write!(f, "source {source} selected"),
            Selection::ReadyToInteract { source, target } => {
                write!(f, "{source} ready to interact with {target}")
            }
        }
    }
}
