use anyhow::Result;
use petpals_core::{EngineConfig, EngineError, Selection, Session};
use petpals_data::{InteractionKind, Pet, PetId};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::io::{BufRead, Write};

use crate::app::help::help_text;
use crate::app::input::Command;
use crate::ui::Renderer;

/// Serializable snapshot of a session for display layers.
#[derive(Serialize, Debug)]
pub struct SessionView<'a> {
    pub pets: &'a [Pet],
    pub selection: Selection,
    pub history: Vec<&'a str>,
}

/// Line-oriented front-end: reads commands, drives the session, prints the
/// result.
pub struct App<R: Rng = ChaCha8Rng> {
    pub running: bool,
    pub session: Session<R>,
    pub renderer: Renderer,
}

impl App<ChaCha8Rng> {
    pub fn new(config: EngineConfig) -> Result<Self> {
        Ok(Self::from_session(Session::new(config)?))
    }
}

impl<R: Rng> App<R> {
    pub fn from_session(session: Session<R>) -> Self {
        Self {
            running: true,
            session,
            renderer: Renderer::default(),
        }
    }

    #[must_use]
    pub fn with_renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }

    fn board(&self) -> String {
        self.renderer
            .render_board(self.session.pets(), self.session.selection())
    }

    fn snapshot(&self) -> String {
        let mut out = self.board();
        out.push_str(&self.renderer.render_history(self.session.history()));
        out
    }

    pub fn view(&self) -> SessionView<'_> {
        SessionView {
            pets: self.session.pets(),
            selection: self.session.selection(),
            history: self.session.history().entries().collect(),
        }
    }

    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.view())?)
    }

    /// Executes one command and returns the text to show.
    pub fn handle(&mut self, command: Command) -> String {
        let result: std::result::Result<String, EngineError> = match command {
            Command::Select(id) => self.session.select_pet(id).map(|_| self.board()),
            Command::Target(id) => self.session.select_target(id).map(|_| self.board()),
            Command::Interact(kind) => self
                .session
                .interact(kind)
                .map(|outcome| format!("{}\n{}", outcome.entry, self.board())),
            Command::Swap => self.session.swap().map(|()| self.board()),
            Command::New => {
                self.session.regenerate();
                Ok(self.board())
            }
            Command::Show => Ok(self.snapshot()),
            Command::Export => Ok(self
                .export_json()
                .unwrap_or_else(|err| format!("error: {err}"))),
            Command::Help => Ok(help_text()),
            Command::Quit => {
                self.running = false;
                self.session.stats().log_summary();
                Ok("Bye!".to_string())
            }
        };
        result.unwrap_or_else(|err| format!("error: {err}"))
    }

    /// Parses and executes one input line.
    pub fn handle_line(&mut self, line: &str) -> String {
        match line.parse::<Command>() {
            Ok(command) => self.handle(command),
            Err(err) => format!("error: {err}"),
        }
    }

    /// Interactive loop until `quit` or end of input.
    pub fn run<I: BufRead, O: Write>(&mut self, input: I, out: &mut O) -> Result<()> {
        writeln!(out, "Welcome to PetPals! Type `help` for commands.\n")?;
        write!(out, "{}", self.board())?;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            writeln!(out, "{}", self.handle_line(&line))?;
            if !self.running {
                break;
            }
        }
        Ok(())
    }

    /// Moves the selection to `source -> target` from whatever state it is in.
    fn pair_up(&mut self, source: PetId, target: PetId) -> petpals_core::Result<()> {
        if let Some(current) = self.session.selection().source() {
            if current != source {
                self.session.select_pet(current)?;
            }
        }
        if self.session.selection().source().is_none() {
            self.session.select_pet(source)?;
        }
        self.session.select_target(target)?;
        Ok(())
    }

    /// Runs `rounds` random interactions between the first two pets,
    /// alternating which one acts.
    pub fn run_demo<G: Rng, O: Write>(
        &mut self,
        rounds: usize,
        rng: &mut G,
        out: &mut O,
    ) -> Result<()> {
        let first = self.session.pets()[0].id();
        let second = self.session.pets()[1].id();
        write!(out, "{}", self.board())?;
        for round in 0..rounds {
            let (source, target) = if round % 2 == 0 {
                (first, second)
            } else {
                (second, first)
            };
            self.pair_up(source, target)?;
            let kind = InteractionKind::ALL[rng.gen_range(0..InteractionKind::ALL.len())];
            let outcome = self.session.interact(kind)?;
            writeln!(out, "{}. {}", round + 1, outcome.entry)?;
        }
        write!(out, "{}", self.snapshot())?;
        self.session.stats().log_summary();
        Ok(())
    }
}
