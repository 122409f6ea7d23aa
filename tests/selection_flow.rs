mod common;

use common::SessionBuilder;
use petpals_lib::model::selection::Selection;
use petpals_lib::model::state::{InteractionKind, PetId};
use petpals_lib::model::EngineError;

#[test]
fn test_full_click_flow() {
    let mut session = SessionBuilder::new().with_seed(11).build();
    assert_eq!(session.selection(), Selection::Idle);

    assert_eq!(
        session.select_pet(PetId(1)).unwrap(),
        Selection::SourceSelected { source: PetId(1) }
    );
    assert_eq!(session.select_pet(PetId(1)).unwrap(), Selection::Idle);

    session.select_pet(PetId(2)).unwrap();
    assert_eq!(
        session.select_pet(PetId(1)).unwrap(),
        Selection::ReadyToInteract {
            source: PetId(2),
            target: PetId(1)
        }
    );
}

#[test]
fn test_interactions_keep_ready_state() {
    let mut session = SessionBuilder::new().with_seed(12).build_ready();
    for kind in InteractionKind::ALL {
        session.interact(kind).unwrap();
        assert_eq!(
            session.selection(),
            Selection::ReadyToInteract {
                source: PetId(1),
                target: PetId(2)
            }
        );
    }
    assert_eq!(session.history().len(), 5);
    assert_eq!(session.stats().total_interactions(), 5);
}

#[test]
fn test_history_caps_at_five_newest_first() {
    let mut session = SessionBuilder::new().with_seed(13).build_ready();
    let mut entries = Vec::new();
    for i in 0..8 {
        let kind = InteractionKind::ALL[i % InteractionKind::ALL.len()];
        entries.push(session.interact(kind).unwrap().entry);
    }
    let kept: Vec<&str> = session.history().entries().collect();
    assert_eq!(kept.len(), 5);
    let expected: Vec<&str> = entries.iter().rev().take(5).map(String::as_str).collect();
    assert_eq!(kept, expected);
}

#[test]
fn test_target_without_source_rejected() {
    let mut session = SessionBuilder::new().with_seed(14).build();
    assert_eq!(
        session.select_target(PetId(2)).unwrap_err(),
        EngineError::NoSourceSelected
    );
    session.select_pet(PetId(2)).unwrap();
    assert_eq!(
        session.select_target(PetId(2)).unwrap_err(),
        EngineError::SamePet(PetId(2))
    );
    assert_eq!(
        session.selection(),
        Selection::SourceSelected { source: PetId(2) }
    );
}

#[test]
fn test_rejected_interaction_changes_nothing() {
    let mut session = SessionBuilder::new().with_seed(15).build();
    session.select_pet(PetId(1)).unwrap();
    let before = session.pets().to_vec();
    assert_eq!(
        session.interact(InteractionKind::Gift).unwrap_err(),
        EngineError::NotReady
    );
    assert_eq!(session.pets(), before.as_slice());
    assert!(session.history().is_empty());
}

#[test]
fn test_swap_then_interact_uses_ids_not_positions() {
    let mut session = SessionBuilder::new().with_seed(16).build_ready();
    session.swap().unwrap();
    assert_eq!(session.pets()[0].id(), PetId(2));
    let out = session.interact(InteractionKind::Feed).unwrap();
    assert_eq!(out.source.id(), PetId(1));
    assert_eq!(session.pet(PetId(1)).unwrap().energy(), 45);
    session.swap().unwrap();
    assert_eq!(session.pets()[0].id(), PetId(1));
}

#[test]
fn test_regenerate_returns_to_idle_with_empty_history() {
    let mut session = SessionBuilder::new().with_seed(17).build_ready();
    session.interact(InteractionKind::Play).unwrap();
    session.regenerate();
    assert_eq!(session.selection(), Selection::Idle);
    assert!(session.history().is_empty());
    assert_eq!(
        session.interact(InteractionKind::Play).unwrap_err(),
        EngineError::NotReady
    );
}
