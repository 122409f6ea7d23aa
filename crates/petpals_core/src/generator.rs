use petpals_data::{Personality, Pet, PetColor, PetId, Species};
use rand::Rng;

const CAT_PALETTE: [PetColor; 4] = [
    PetColor::new(0xF9, 0x73, 0x16),
    PetColor::new(0xFB, 0xBF, 0x24),
    PetColor::new(0xA3, 0xA3, 0xA3),
    PetColor::new(0x00, 0x00, 0x00),
];
const DOG_PALETTE: [PetColor; 4] = [
    PetColor::new(0xA1, 0x62, 0x07),
    PetColor::new(0xFB, 0xBF, 0x24),
    PetColor::new(0xFF, 0xFF, 0xFF),
    PetColor::new(0xA3, 0xA3, 0xA3),
];
const RABBIT_PALETTE: [PetColor; 4] = [
    PetColor::new(0xFF, 0xFF, 0xFF),
    PetColor::new(0xA3, 0xA3, 0xA3),
    PetColor::new(0xFB, 0xBF, 0x24),
    PetColor::new(0xF9, 0x73, 0x16),
];
const FOX_PALETTE: [PetColor; 4] = [
    PetColor::new(0xF9, 0x73, 0x16),
    PetColor::new(0xFF, 0xFF, 0xFF),
    PetColor::new(0xA3, 0xA3, 0xA3),
    PetColor::new(0x00, 0x00, 0x00),
];

const CAT_NAMES: [&str; 6] = ["Whiskers", "Mittens", "Luna", "Oliver", "Bella", "Leo"];
const DOG_NAMES: [&str; 6] = ["Max", "Buddy", "Charlie", "Lucy", "Bailey", "Cooper"];
const RABBIT_NAMES: [&str; 6] = ["Thumper", "Hoppy", "Cotton", "Bun-Bun", "Clover", "Daisy"];
const FOX_NAMES: [&str; 6] = ["Rusty", "Amber", "Sly", "Ginger", "Roxy", "Firefox"];

/// Coat colors a pet of `species` can be generated with.
pub fn palette(species: Species) -> &'static [PetColor] {
    match species {
        Species::Cat => &CAT_PALETTE,
        Species::Dog => &DOG_PALETTE,
        Species::Rabbit => &RABBIT_PALETTE,
        Species::Fox => &FOX_PALETTE,
    }
}

/// Names a pet of `species` can be generated with.
pub fn name_pool(species: Species) -> &'static [&'static str] {
    match species {
        Species::Cat => &CAT_NAMES,
        Species::Dog => &DOG_NAMES,
        Species::Rabbit => &RABBIT_NAMES,
        Species::Fox => &FOX_NAMES,
    }
}

fn pick<T: Copy, R: Rng>(items: &[T], rng: &mut R) -> T {
    items[rng.gen_range(0..items.len())]
}

/// Creates a pet with uniformly drawn species, personality, color and name.
///
/// The caller owns id uniqueness; no check is made here.
pub fn generate_pet_with_rng<R: Rng>(id: PetId, rng: &mut R) -> Pet {
    let species = pick(&Species::ALL, rng);
    let personality = pick(&Personality::ALL, rng);
    let color = pick(palette(species), rng);
    let name = pick(name_pool(species), rng);
    Pet::new(id, name, species, personality, color)
}

/// Creates `count` pets with ids `1..=count`.
pub fn generate_set_with_rng<R: Rng>(count: usize, rng: &mut R) -> Vec<Pet> {
    (1..=count as u32)
        .map(|id| generate_pet_with_rng(PetId(id), rng))
        .collect()
}

/// Two-pet variant of [`generate_set_with_rng`].
pub fn generate_pair_with_rng<R: Rng>(rng: &mut R) -> [Pet; 2] {
    [
        generate_pet_with_rng(PetId(1), rng),
        generate_pet_with_rng(PetId(2), rng),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use petpals_data::Mood;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn test_generated_pet_starts_at_baseline() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let pet = generate_pet_with_rng(PetId(3), &mut rng);
        assert_eq!(pet.id(), PetId(3));
        assert_eq!(pet.energy(), 50);
        assert_eq!(pet.affection(), 50);
        assert_eq!(pet.mood(), Mood::Neutral);
    }

    #[test]
    fn test_generation_stays_inside_closed_sets() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut species_seen = HashSet::new();
        let mut personalities_seen = HashSet::new();
        for i in 0..2000 {
            let pet = generate_pet_with_rng(PetId(i), &mut rng);
            assert!(palette(pet.species()).contains(&pet.color()));
            assert!(name_pool(pet.species()).contains(&pet.name()));
            species_seen.insert(pet.species());
            personalities_seen.insert(pet.personality());
        }
        assert_eq!(species_seen.len(), Species::ALL.len());
        assert_eq!(personalities_seen.len(), Personality::ALL.len());
    }

    #[test]
    fn test_every_species_has_full_pools() {
        for species in Species::ALL {
            assert_eq!(palette(species).len(), 4);
            assert_eq!(name_pool(species).len(), 6);
        }
    }

    #[test]
    fn test_set_ids_are_sequential_from_one() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let pets = generate_set_with_rng(4, &mut rng);
        let ids: Vec<u32> = pets.iter().map(|p| p.id().0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_same_seed_same_pets() {
        let a = generate_pair_with_rng(&mut ChaCha8Rng::seed_from_u64(77));
        let b = generate_pair_with_rng(&mut ChaCha8Rng::seed_from_u64(77));
        assert_eq!(a, b);
    }
}
