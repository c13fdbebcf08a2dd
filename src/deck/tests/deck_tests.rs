use std::fs;
use tempfile::TempDir;

use crate::deck::{load_profiles, Deck, Profile};

/// Helper: Three-card deck
fn create_test_deck() -> Deck {
    Deck::new(vec![
        Profile::new("p-1", "Ada", 31),
        Profile::new("p-2", "Grace", 29),
        Profile::new("p-3", "Linus", 34),
    ])
}

#[test]
fn test_current_and_next() {
    let deck = create_test_deck();

    assert_eq!(deck.current().unwrap().id, "p-1");
    assert_eq!(deck.next().unwrap().id, "p-2");
    assert_eq!(deck.remaining(), 3);
}

#[test]
fn test_advance_until_exhausted() {
    let mut deck = create_test_deck();

    assert_eq!(deck.advance().unwrap().id, "p-1");
    assert_eq!(deck.advance().unwrap().id, "p-2");
    assert!(deck.next().is_none(), "Last card has nothing behind it");
    assert_eq!(deck.advance().unwrap().id, "p-3");

    assert!(deck.is_exhausted());
    assert!(deck.current().is_none());
    assert!(deck.advance().is_none(), "Advancing an empty deck does nothing");
    assert_eq!(deck.remaining(), 0);
}

#[test]
fn test_refresh_restarts() {
    let mut deck = create_test_deck();
    deck.advance();
    deck.advance();

    deck.refresh(vec![Profile::new("p-9", "Margaret", 40)]);

    assert_eq!(deck.current().unwrap().id, "p-9");
    assert_eq!(deck.remaining(), 1);
}

#[test]
fn test_empty_deck_is_exhausted() {
    let deck = Deck::default();
    assert!(deck.is_exhausted());
}

#[test]
fn test_interest_chips() {
    let mut profile = Profile::new("p-1", "Ada", 31);
    profile.interests = ["chess", "climbing", "jazz", "rust", "tea"]
        .iter()
        .map(|s| s.to_string())
        .collect();

    assert_eq!(profile.interest_chips(), vec!["chess", "climbing", "jazz", "+2"]);
}

#[test]
fn test_profile_display() {
    assert_eq!(format!("{}", Profile::new("p-1", "Ada", 31)), "Ada, 31");
}

#[test]
fn test_load_profiles_from_json() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("deck.json");
    fs::write(
        &path,
        r#"[
            {"id": "p-1", "firstName": "Ada", "age": 31, "location": "London",
             "interests": ["chess"], "primaryPhoto": "https://example.invalid/ada.jpg"},
            {"id": "p-2", "firstName": "Grace", "age": 29}
        ]"#,
    )
    .unwrap();

    let profiles = load_profiles(&path).unwrap();
    assert_eq!(profiles.len(), 2);
    assert_eq!(profiles[0].location, "London");
    assert!(profiles[0].primary_photo.is_some());
    assert!(profiles[1].bio.is_empty(), "Missing fields default");
}
