use super::traits::{Mood, ParseTraitError, Personality, Species};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower bound for `energy` and `affection`.
pub const STAT_MIN: u8 = 0;
/// Upper bound for `energy` and `affection`.
pub const STAT_MAX: u8 = 100;
/// Value both stats start at when a pet is created.
pub const STARTING_STAT: u8 = 50;

/// Identifier of a pet, unique within the live pet set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PetId(pub u32);

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PetId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

/// Cosmetic coat color. Serialized as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct PetColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PetColor {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(hex: &str) -> Result<Self, ParseTraitError> {
        let err = || ParseTraitError {
            kind: "color",
            value: hex.to_string(),
        };
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(err());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| err());
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for PetColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<PetColor> for String {
    fn from(color: PetColor) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for PetColor {
    type Error = ParseTraitError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

/// A virtual pet.
///
/// Identity fields never change after creation. `energy` and `affection`
/// only move through methods that clamp them to `[0, 100]` and recompute
/// `mood`, so the mood read back is always the one derived from the
/// current stats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PetRecord")]
pub struct Pet {
    id: PetId,
    name: String,
    species: Species,
    personality: Personality,
    mood: Mood,
    energy: u8,
    affection: u8,
    color: PetColor,
}

/// Wire shape accepted on deserialization. `mood` is not trusted from input.
#[derive(Deserialize)]
struct PetRecord {
    id: PetId,
    name: String,
    species: Species,
    personality: Personality,
    energy: u8,
    affection: u8,
    color: PetColor,
}

impl From<PetRecord> for Pet {
    fn from(record: PetRecord) -> Self {
        Pet::new(
            record.id,
            record.name,
            record.species,
            record.personality,
            record.color,
        )
        .with_stats(record.energy, record.affection)
    }
}

impl Pet {
    /// Creates a pet with both stats at [`STARTING_STAT`].
    pub fn new(
        id: PetId,
        name: impl Into<String>,
        species: Species,
        personality: Personality,
        color: PetColor,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            species,
            personality,
            mood: Mood::derive(STARTING_STAT, STARTING_STAT),
            energy: STARTING_STAT,
            affection: STARTING_STAT,
            color,
        }
    }

    /// Replaces both stats (clamped) and rederives mood.
    #[must_use]
    pub fn with_stats(mut self, energy: u8, affection: u8) -> Self {
        self.energy = energy.min(STAT_MAX);
        self.affection = affection.min(STAT_MAX);
        self.refresh_mood();
        self
    }

    pub fn id(&self) -> PetId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn species(&self) -> Species {
        self.species
    }

    pub fn personality(&self) -> Personality {
        self.personality
    }

    pub fn color(&self) -> PetColor {
        self.color
    }

    pub fn energy(&self) -> u8 {
        self.energy
    }

    pub fn affection(&self) -> u8 {
        self.affection
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    /// Adds `delta` to energy, clamping to `[0, 100]`.
    pub fn adjust_energy(&mut self, delta: i16) {
        self.energy = clamp_stat(self.energy, delta);
        self.refresh_mood();
    }

    /// Adds `delta` to affection, clamping to `[0, 100]`.
    pub fn adjust_affection(&mut self, delta: i16) {
        self.affection = clamp_stat(self.affection, delta);
        self.refresh_mood();
    }

    fn refresh_mood(&mut self) {
        self.mood = Mood::derive(self.energy, self.affection);
    }
}

fn clamp_stat(current: u8, delta: i16) -> u8 {
    let raw = i16::from(current).saturating_add(delta);
    raw.clamp(i16::from(STAT_MIN), i16::from(STAT_MAX)) as u8
}
