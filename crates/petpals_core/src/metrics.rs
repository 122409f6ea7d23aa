//! Session statistics and logging setup.

use petpals_data::InteractionKind;
use serde::Serialize;
use std::collections::HashMap;
use tracing_subscriber::filter::LevelFilter;

/// Counters for one session's lifetime.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionStats {
    interactions: HashMap<InteractionKind, u64>,
    regenerations: u64,
    rejected: u64,
}

impl SessionStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_interaction(&mut self, kind: InteractionKind) {
        let count = self.interactions.entry(kind).or_insert(0);
        *count += 1;
        tracing::trace!(kind = %kind, count = *count, "Interaction counted");
    }

    pub fn record_regeneration(&mut self) {
        self.regenerations += 1;
    }

    pub fn record_rejection(&mut self) {
        self.rejected += 1;
    }

    #[must_use]
    pub fn interactions_of(&self, kind: InteractionKind) -> u64 {
        self.interactions.get(&kind).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn total_interactions(&self) -> u64 {
        self.interactions.values().sum()
    }

    #[must_use]
    pub fn regenerations(&self) -> u64 {
        self.regenerations
    }

    #[must_use]
    pub fn rejected(&self) -> u64 {
        self.rejected
    }

    /// Emits the counters as one structured event.
    pub fn log_summary(&self) {
        tracing::info!(
            interactions = self.total_interactions(),
            play = self.interactions_of(InteractionKind::Play),
            feed = self.interactions_of(InteractionKind::Feed),
            pet = self.interactions_of(InteractionKind::Pet),
            music = self.interactions_of(InteractionKind::Music),
            gift = self.interactions_of(InteractionKind::Gift),
            regenerations = self.regenerations,
            rejected = self.rejected,
            "Session summary"
        );
    }
}

/// Installs a global fmt subscriber. `RUST_LOG` overrides `default_level`.
pub fn init_logging(default_level: tracing::Level) {
    let filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(default_level).into())
        .from_env_lossy();
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .finish(),
    )
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = SessionStats::new();
        assert_eq!(stats.total_interactions(), 0);
        assert_eq!(stats.regenerations(), 0);
    }

    #[test]
    fn test_counts_per_kind() {
        let mut stats = SessionStats::new();
        stats.record_interaction(InteractionKind::Feed);
        stats.record_interaction(InteractionKind::Feed);
        stats.record_interaction(InteractionKind::Gift);
        assert_eq!(stats.interactions_of(InteractionKind::Feed), 2);
        assert_eq!(stats.interactions_of(InteractionKind::Play), 0);
        assert_eq!(stats.total_interactions(), 3);
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        init_logging(tracing::Level::WARN);
        init_logging(tracing::Level::DEBUG);
    }
}
