use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Returned when a trait name typed by a user does not match any variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {value}")]
pub struct ParseTraitError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseTraitError {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Kind of animal. Selects the name pool and color palette at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Cat,
    Dog,
    Rabbit,
    Fox,
}

impl Species {
    pub const ALL: [Species; 4] = [Species::Cat, Species::Dog, Species::Rabbit, Species::Fox];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Species::Cat => "cat",
            Species::Dog => "dog",
            Species::Rabbit => "rabbit",
            Species::Fox => "fox",
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Species::Cat => "🐱",
            Species::Dog => "🐶",
            Species::Rabbit => "🐰",
            Species::Fox => "🦊",
        }
    }
}

/// Fixed temperament of a pet. Decides how strongly it reacts to each
/// interaction kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    Playful,
    Shy,
    Grumpy,
    Affectionate,
}

impl Personality {
    pub const ALL: [Personality; 4] = [
        Personality::Playful,
        Personality::Shy,
        Personality::Grumpy,
        Personality::Affectionate,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Personality::Playful => "playful",
            Personality::Shy => "shy",
            Personality::Grumpy => "grumpy",
            Personality::Affectionate => "affectionate",
        }
    }

    /// One-line blurb shown in help screens.
    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Personality::Playful => {
                "Loves to play and is always full of energy. Responds best to play and music."
            }
            Personality::Shy => {
                "Takes time to warm up to others. Prefers gentle petting and calm activities."
            }
            Personality::Grumpy => {
                "Often in a bad mood. Food is the best way to improve their mood."
            }
            Personality::Affectionate => {
                "Loves attention and physical affection. Responds best to petting and gifts."
            }
        }
    }
}

/// Three-level mood derived from a pet's energy and affection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Happy,
    #[default]
    Neutral,
    Sad,
}

impl Mood {
    pub const ALL: [Mood; 3] = [Mood::Happy, Mood::Neutral, Mood::Sad];

    /// Derives the mood from the mean of `energy` and `affection`.
    ///
    /// A mean above 70 is happy, below 30 is sad, anything else is neutral.
    /// The mean is compared exactly, so `(71, 70)` (mean 70.5) is happy.
    #[must_use]
    pub fn derive(energy: u8, affection: u8) -> Mood {
        let sum = u16::from(energy) + u16::from(affection);
        if sum > 140 {
            Mood::Happy
        } else if sum < 60 {
            Mood::Sad
        } else {
            Mood::Neutral
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Happy => "happy",
            Mood::Neutral => "neutral",
            Mood::Sad => "sad",
        }
    }

    #[must_use]
    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Neutral => "😐",
            Mood::Sad => "☹️",
        }
    }
}

/// User-triggerable action one pet performs on another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Play,
    Feed,
    Pet,
    Music,
    Gift,
}

impl InteractionKind {
    pub const ALL: [InteractionKind; 5] = [
        InteractionKind::Play,
        InteractionKind::Feed,
        InteractionKind::Pet,
        InteractionKind::Music,
        InteractionKind::Gift,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            InteractionKind::Play => "play",
            InteractionKind::Feed => "feed",
            InteractionKind::Pet => "pet",
            InteractionKind::Music => "music",
            InteractionKind::Gift => "gift",
        }
    }

    /// Past-tense phrase used in history lines, e.g. "played music for".
    #[must_use]
    pub fn verb(self) -> &'static str {
        match self {
            InteractionKind::Play => "played with",
            InteractionKind::Feed => "fed",
            InteractionKind::Pet => "petted",
            InteractionKind::Music => "played music for",
            InteractionKind::Gift => "gave a gift to",
        }
    }
}

macro_rules! impl_display_and_parse {
    ($ty:ty, $label:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ParseTraitError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim();
                <$ty>::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(needle))
                    .ok_or_else(|| ParseTraitError::new($label, needle))
            }
        }
    };
}

impl_display_and_parse!(Species, "species");
impl_display_and_parse!(Personality, "personality");
impl_display_and_parse!(Mood, "mood");
impl_display_and_parse!(InteractionKind, "interaction");
