use petpals_lib::model::config::{EngineConfig, RuleConfig};
use petpals_lib::model::session::Session;
use petpals_lib::model::state::{Personality, Pet, PetColor, PetId, Species};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

#[allow(dead_code)]
pub struct SessionBuilder {
    config: EngineConfig,
    seed: u64,
}

#[allow(dead_code)]
impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            config: EngineConfig::default(),
            seed: 0,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self.config.session.seed = Some(seed);
        self
    }

    pub fn with_pet_count(mut self, count: usize) -> Self {
        self.config.session.pet_count = count;
        self
    }

    pub fn with_rules(mut self, rules: RuleConfig) -> Self {
        self.config.rules = rules;
        self
    }

    pub fn build(self) -> Session {
        Session::with_rng(self.config, ChaCha8Rng::seed_from_u64(self.seed))
            .expect("Failed to create session in test builder")
    }

    /// Builds a session and puts pets 1 and 2 into the ready state.
    pub fn build_ready(self) -> Session {
        let mut session = self.build();
        session.select_pet(PetId(1)).expect("pet 1 exists");
        session.select_target(PetId(2)).expect("pet 2 exists");
        session
    }
}

/// Hand-built pet with a chosen personality and stats.
#[allow(dead_code)]
pub fn make_pet(id: u32, name: &str, personality: Personality, energy: u8, affection: u8) -> Pet {
    Pet::new(
        PetId(id),
        name,
        Species::Fox,
        personality,
        PetColor::new(0xF9, 0x73, 0x16),
    )
    .with_stats(energy, affection)
}
