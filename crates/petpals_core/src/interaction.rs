//! Interaction resolution between two pets.
//!
//! The target's affection moves by a response magnitude looked up from its
//! personality and the interaction kind. `play` and `feed` also restore the
//! target's energy, and the acting pet always pays a fixed energy cost.

use crate::config::RuleConfig;
use crate::error::{EngineError, Result};
use petpals_data::{InteractionKind, Personality, Pet, PetId};
use serde::Serialize;
use std::fmt;

/// Affection gained by a pet of `personality` receiving `kind`.
///
/// | personality  | play | feed | pet | music | gift |
/// |--------------|------|------|-----|-------|------|
/// | playful      | 15   | 8    | 5   | 10    | 12   |
/// | shy          | 5    | 10   | 15  | 12    | 8    |
/// | grumpy       | 3    | 15   | 5   | 0     | 10   |
/// | affectionate | 10   | 8    | 15  | 8     | 12   |
#[must_use]
pub fn response_magnitude(personality: Personality, kind: InteractionKind) -> u8 {
    use InteractionKind::{Feed, Gift, Music, Pet, Play};
    use Personality::{Affectionate, Grumpy, Playful, Shy};
    match (personality, kind) {
        (Playful, Play) => 15,
        (Playful, Feed) => 8,
        (Playful, Pet) => 5,
        (Playful, Music) => 10,
        (Playful, Gift) => 12,
        (Shy, Play) => 5,
        (Shy, Feed) => 10,
        (Shy, Pet) => 15,
        (Shy, Music) => 12,
        (Shy, Gift) => 8,
        (Grumpy, Play) => 3,
        (Grumpy, Feed) => 15,
        (Grumpy, Pet) => 5,
        (Grumpy, Music) => 0,
        (Grumpy, Gift) => 10,
        (Affectionate, Play) => 10,
        (Affectionate, Feed) => 8,
        (Affectionate, Pet) => 15,
        (Affectionate, Music) => 8,
        (Affectionate, Gift) => 12,
    }
}

/// Extra energy the target gains from `kind`.
#[must_use]
pub fn energy_bonus(kind: InteractionKind, rules: &RuleConfig) -> u8 {
    match kind {
        InteractionKind::Play => rules.play_energy_bonus,
        InteractionKind::Feed => rules.feed_energy_bonus,
        InteractionKind::Pet | InteractionKind::Music | InteractionKind::Gift => 0,
    }
}

/// Qualitative reaction tier for a response magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Reaction {
    Loved,
    Enjoyed,
    Indifferent,
    Disliked,
}

impl Reaction {
    /// `r > 10` loved, `5 < r <= 10` enjoyed, `0 < r <= 5` indifferent,
    /// otherwise disliked.
    #[must_use]
    pub fn from_response(response: u8) -> Self {
        match response {
            11.. => Reaction::Loved,
            6..=10 => Reaction::Enjoyed,
            1..=5 => Reaction::Indifferent,
            0 => Reaction::Disliked,
        }
    }

    #[must_use]
    pub fn phrase(self) -> &'static str {
        match self {
            Reaction::Loved => "loved it!",
            Reaction::Enjoyed => "enjoyed it.",
            Reaction::Indifferent => "seemed indifferent.",
            Reaction::Disliked => "didn't like it.",
        }
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.phrase())
    }
}

/// Result of one resolved interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionOutcome {
    /// Acting pet after paying its energy cost.
    pub source: Pet,
    /// Receiving pet after its stat changes.
    pub target: Pet,
    pub kind: InteractionKind,
    pub response: u8,
    pub reaction: Reaction,
    /// History line, e.g. `"Max fed Luna. Luna loved it!"`.
    pub entry: String,
}

/// Formats the history line for an interaction.
#[must_use]
pub fn describe(source: &Pet, target: &Pet, kind: InteractionKind, reaction: Reaction) -> String {
    format!(
        "{} {} {}. {} {}",
        source.name(),
        kind.verb(),
        target.name(),
        target.name(),
        reaction.phrase()
    )
}

fn index_of(pets: &[Pet], id: PetId) -> Result<usize> {
    pets.iter()
        .position(|p| p.id() == id)
        .ok_or(EngineError::UnknownPet(id))
}

/// Applies `kind` from `source` to `target` inside `pets`.
///
/// Rejects a pet interacting with itself or ids not in `pets`; on error
/// nothing is mutated.
pub fn resolve(
    pets: &mut [Pet],
    source: PetId,
    target: PetId,
    kind: InteractionKind,
    rules: &RuleConfig,
) -> Result<InteractionOutcome> {
    if source == target {
        return Err(EngineError::SamePet(source));
    }
    let source_idx = index_of(pets, source)?;
    let target_idx = index_of(pets, target)?;

    let response = response_magnitude(pets[target_idx].personality(), kind);
    let reaction = Reaction::from_response(response);

    let receiver = &mut pets[target_idx];
    receiver.adjust_affection(i16::from(response));
    receiver.adjust_energy(i16::from(energy_bonus(kind, rules)));

    pets[source_idx].adjust_energy(-i16::from(rules.source_energy_cost));

    let source_pet = pets[source_idx].clone();
    let target_pet = pets[target_idx].clone();
    let entry = describe(&source_pet, &target_pet, kind, reaction);

    tracing::debug!(
        source = %source,
        target = %target,
        kind = %kind,
        response,
        target_mood = %target_pet.mood(),
        "Interaction resolved"
    );

    Ok(InteractionOutcome {
        source: source_pet,
        target: target_pet,
        kind,
        response,
        reaction,
        entry,
    })
}
