use crossterm::style::{Color, Stylize};
use petpals_core::{InteractionHistory, Selection};
use petpals_data::{Pet, PetColor, STAT_MAX};
use std::fmt::Write;

const BAR_WIDTH: usize = 10;

/// Plain-text renderer for pet cards and the history panel.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    /// Emit 24-bit ANSI color swatches.
    pub ansi_color: bool,
}

impl Renderer {
    #[must_use]
    pub fn new(ansi_color: bool) -> Self {
        Self { ansi_color }
    }

    fn swatch(&self, color: PetColor) -> String {
        if self.ansi_color {
            format!("{} {}", "■".with(term_color(color)), color)
        } else {
            color.to_string()
        }
    }

    /// One pet card, with a marker for its role in the current selection.
    #[must_use]
    pub fn render_pet(&self, pet: &Pet, selection: Selection) -> String {
        let role = if selection.source() == Some(pet.id()) {
            "  <- active pet"
        } else if selection.target() == Some(pet.id()) {
            "  <- interaction target"
        } else {
            ""
        };
        let mut out = String::new();
        let _ = writeln!(
            out,
            "[{}] {} {}  {} {}{}",
            pet.id(),
            pet.species().emoji(),
            pet.name(),
            pet.mood().emoji(),
            pet.mood(),
            role
        );
        let _ = writeln!(
            out,
            "    {} · {} · {}",
            pet.species(),
            pet.personality(),
            self.swatch(pet.color())
        );
        let _ = writeln!(out, "    affection {}", stat_bar(pet.affection()));
        let _ = writeln!(out, "    energy    {}", stat_bar(pet.energy()));
        out
    }

    /// All pets in display order followed by a selection hint.
    #[must_use]
    pub fn render_board(&self, pets: &[Pet], selection: Selection) -> String {
        let mut out = String::new();
        for pet in pets {
            out.push_str(&self.render_pet(pet, selection));
        }
        let hint = match selection {
            Selection::Idle => "Select a pet to make it the active pet.".to_string(),
            Selection::SourceSelected { source } => {
                format!("Pet {source} is active. Choose a target.")
            }
            Selection::ReadyToInteract { .. } => {
                "Choose an interaction: play, feed, pet, music, gift.".to_string()
            }
        };
        out.push_str(&hint);
        out.push('\n');
        out
    }

    #[must_use]
    pub fn render_history(&self, history: &InteractionHistory) -> String {
        if history.is_empty() {
            return String::new();
        }
        let mut out = String::from("Interaction History\n");
        for entry in history.entries() {
            let _ = writeln!(out, "  - {entry}");
        }
        out
    }
}

/// Truecolor terminal color for a pet's coat.
#[must_use]
pub fn term_color(color: PetColor) -> Color {
    Color::Rgb {
        r: color.r,
        g: color.g,
        b: color.b,
    }
}

/// `[#####-----]  50%` style gauge for a stat in `[0, 100]`.
#[must_use]
pub fn stat_bar(value: u8) -> String {
    let value = value.min(STAT_MAX);
    let filled = usize::from(value) * BAR_WIDTH / usize::from(STAT_MAX);
    format!(
        "[{}{}] {:>3}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        value
    )
}
