use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::generator;
use crate::history::InteractionHistory;
use crate::interaction::{self, InteractionOutcome};
use crate::metrics::SessionStats;
use crate::selection::Selection;
use petpals_data::{InteractionKind, Pet, PetId};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// One running simulation: the live pet set in display order, the current
/// selection, and the interaction history.
///
/// Failed operations return an [`EngineError`] and leave every field as it
/// was.
pub struct Session<R: Rng = ChaCha8Rng> {
    config: EngineConfig,
    pets: Vec<Pet>,
    selection: Selection,
    history: InteractionHistory,
    stats: SessionStats,
    rng: R,
}

impl Session<ChaCha8Rng> {
    /// Seeds from `config.session.seed`, or OS entropy when unset.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let rng = match config.session.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> Session<R> {
    /// Builds a session around an injected random source and generates the
    /// first pet set.
    pub fn with_rng(config: EngineConfig, rng: R) -> Result<Self> {
        config
            .validate()
            .map_err(|e| EngineError::Config(e.to_string()))?;
        let mut session = Self {
            history: InteractionHistory::with_capacity(config.session.history_capacity),
            config,
            pets: Vec::new(),
            selection: Selection::Idle,
            stats: SessionStats::new(),
            rng,
        };
        session.populate();
        Ok(session)
    }

    fn populate(&mut self) {
        self.pets = generator::generate_set_with_rng(self.config.session.pet_count, &mut self.rng);
        self.selection = Selection::Idle;
        self.history.clear();
        tracing::info!(
            pets = %self
                .pets
                .iter()
                .map(|p| format!("{} the {} {}", p.name(), p.personality(), p.species()))
                .collect::<Vec<_>>()
                .join(", "),
            "New pets generated"
        );
    }

    /// Replaces the whole pet set, clears history and resets the selection.
    pub fn regenerate(&mut self) -> &[Pet] {
        self.populate();
        self.stats.record_regeneration();
        &self.pets
    }

    /// Regenerates and returns the first two pets of the new set.
    pub fn generate_pair(&mut self) -> [Pet; 2] {
        self.regenerate();
        [self.pets[0].clone(), self.pets[1].clone()]
    }

    fn reject<T>(&mut self, err: EngineError) -> Result<T> {
        self.stats.record_rejection();
        tracing::debug!(error = %err, selection = %self.selection, "Operation rejected");
        Err(err)
    }

    fn ensure_present(&mut self, id: PetId) -> Result<()> {
        if self.pets.iter().any(|p| p.id() == id) {
            Ok(())
        } else {
            self.reject(EngineError::UnknownPet(id))
        }
    }

    /// Clicks pet `id`: selects it as source, deselects it, or targets it.
    pub fn select_pet(&mut self, id: PetId) -> Result<Selection> {
        self.ensure_present(id)?;
        let next = self.selection.select(id);
        tracing::debug!(from = %self.selection, to = %next, "Selection changed");
        self.selection = next;
        Ok(next)
    }

    /// Chooses `id` as the target for the current source.
    pub fn select_target(&mut self, id: PetId) -> Result<Selection> {
        self.ensure_present(id)?;
        match self.selection.with_target(id) {
            Ok(next) => {
                tracing::debug!(from = %self.selection, to = %next, "Target selected");
                self.selection = next;
                Ok(next)
            }
            Err(err) => self.reject(err),
        }
    }

    /// Applies `kind` to the selected pair and records the history line.
    /// The selection stays ready so the same pair can interact again.
    pub fn interact(&mut self, kind: InteractionKind) -> Result<InteractionOutcome> {
        let (source, target) = match self.selection.ready_pair() {
            Ok(pair) => pair,
            Err(err) => return self.reject(err),
        };
        let outcome = match interaction::resolve(
            &mut self.pets,
            source,
            target,
            kind,
            &self.config.rules,
        ) {
            Ok(outcome) => outcome,
            Err(err) => return self.reject(err),
        };
        self.history.record(outcome.entry.clone());
        self.stats.record_interaction(kind);
        tracing::info!(entry = %outcome.entry, "Interaction");
        Ok(outcome)
    }

    /// Exchanges the display positions of the first two pets. Ids, stats and
    /// the selection are untouched.
    pub fn swap(&mut self) -> Result<()> {
        if self.pets.len() < 2 {
            let count = self.pets.len();
            return self.reject(EngineError::NotEnoughPets(count));
        }
        self.pets.swap(0, 1);
        tracing::debug!("Pets swapped");
        Ok(())
    }

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn pet(&self, id: PetId) -> Option<&Pet> {
        self.pets.iter().find(|p| p.id() == id)
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn history(&self) -> &InteractionHistory {
        &self.history
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;

    fn seeded(seed: u64) -> Session {
        Session::with_rng(EngineConfig::default(), ChaCha8Rng::seed_from_u64(seed)).unwrap()
    }

    #[test]
    fn test_new_session_has_two_idle_pets() {
        let session = seeded(1);
        assert_eq!(session.pets().len(), 2);
        assert_eq!(session.pets()[0].id(), PetId(1));
        assert_eq!(session.pets()[1].id(), PetId(2));
        assert_eq!(session.selection(), Selection::Idle);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = EngineConfig {
            session: SessionConfig {
                pet_count: 0,
                ..Default::default()
            },
            ..Default::default()
        };
        let err = Session::new(config).err().unwrap();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn test_interact_before_ready_rejected() {
        let mut session = seeded(2);
        assert_eq!(
            session.interact(InteractionKind::Play).unwrap_err(),
            EngineError::NotReady
        );
        session.select_pet(PetId(1)).unwrap();
        assert_eq!(
            session.interact(InteractionKind::Play).unwrap_err(),
            EngineError::NotReady
        );
        assert!(session.history().is_empty());
        assert_eq!(session.stats().rejected(), 2);
    }

    #[test]
    fn test_select_unknown_pet_keeps_selection() {
        let mut session = seeded(3);
        session.select_pet(PetId(1)).unwrap();
        assert_eq!(
            session.select_pet(PetId(42)).unwrap_err(),
            EngineError::UnknownPet(PetId(42))
        );
        assert_eq!(session.selection().source(), Some(PetId(1)));
    }

    #[test]
    fn test_interaction_repeatable_and_recorded() {
        let mut session = seeded(4);
        session.select_pet(PetId(1)).unwrap();
        session.select_target(PetId(2)).unwrap();
        let first = session.interact(InteractionKind::Pet).unwrap();
        let second = session.interact(InteractionKind::Gift).unwrap();
        assert_eq!(session.selection().ready_pair(), Ok((PetId(1), PetId(2))));
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history().latest(), Some(second.entry.as_str()));
        assert_eq!(session.history().get(1), Some(first.entry.as_str()));
        assert_eq!(session.pet(PetId(1)).unwrap().energy(), 40);
    }

    #[test]
    fn test_swap_keeps_ids_and_selection() {
        let mut session = seeded(5);
        session.select_pet(PetId(2)).unwrap();
        let before: Vec<Pet> = session.pets().to_vec();
        session.swap().unwrap();
        assert_eq!(session.pets()[0], before[1]);
        assert_eq!(session.pets()[1], before[0]);
        assert_eq!(session.selection().source(), Some(PetId(2)));
    }

    #[test]
    fn test_regenerate_resets_everything() {
        let mut session = seeded(6);
        session.select_pet(PetId(1)).unwrap();
        session.select_pet(PetId(2)).unwrap();
        session.interact(InteractionKind::Feed).unwrap();
        let pets = session.regenerate().to_vec();
        assert_eq!(pets.len(), 2);
        assert!(pets.iter().all(|p| p.energy() == 50 && p.affection() == 50));
        assert_eq!(session.selection(), Selection::Idle);
        assert!(session.history().is_empty());
        assert_eq!(session.stats().regenerations(), 1);
    }

    #[test]
    fn test_generate_pair_returns_live_pets() {
        let mut session = seeded(7);
        let pair = session.generate_pair();
        assert_eq!(pair[0], session.pets()[0]);
        assert_eq!(pair[1], session.pets()[1]);
    }

    #[test]
    fn test_larger_pet_set() {
        let config = EngineConfig {
            session: SessionConfig {
                pet_count: 4,
                ..Default::default()
            },
            ..Default::default()
        };
        let mut session = Session::with_rng(config, ChaCha8Rng::seed_from_u64(8)).unwrap();
        assert_eq!(session.pets().len(), 4);
        session.select_pet(PetId(4)).unwrap();
        session.select_pet(PetId(3)).unwrap();
        let out = session.interact(InteractionKind::Music).unwrap();
        assert_eq!(out.source.id(), PetId(4));
        assert_eq!(out.target.id(), PetId(3));
    }
}
