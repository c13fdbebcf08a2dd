use crate::core::Decision;
use crate::deck::{PendingConfirmations, Profile};

/// Helper: Minimal profile with the given id
fn profile(id: &str) -> Profile {
    Profile::new(id, "Test", 30)
}

#[test]
fn test_tickets_increase() {
    let mut queue = PendingConfirmations::new();

    let first = queue.enqueue(profile("p-1"), Decision::Like);
    let second = queue.enqueue(profile("p-2"), Decision::Pass);

    assert!(second > first);
    assert_eq!(queue.len(), 2);
}

#[test]
fn test_drain_is_fifo_and_empties() {
    let mut queue = PendingConfirmations::new();
    queue.enqueue(profile("p-1"), Decision::Like);
    queue.enqueue(profile("p-2"), Decision::SuperLike);

    let drained = queue.drain();
    assert_eq!(drained[0].profile.id, "p-1");
    assert_eq!(drained[1].decision, Decision::SuperLike);
    assert!(queue.is_empty());
}

#[test]
fn test_tickets_not_reused_after_drain() {
    let mut queue = PendingConfirmations::new();
    let first = queue.enqueue(profile("p-1"), Decision::Like);
    queue.drain();

    let second = queue.enqueue(profile("p-2"), Decision::Like);
    assert_ne!(first, second);
}

#[test]
fn test_pending_builds_request() {
    let mut queue = PendingConfirmations::new();
    queue.enqueue(profile("p-5"), Decision::Pass);

    let request = queue.iter().next().unwrap().request();
    assert_eq!(request.profile_id, "p-5");
    assert_eq!(request.endpoint(), "/api/passes");
}

#[test]
fn test_entry_keeps_profile_snapshot() {
    let mut queue = PendingConfirmations::new();
    let mut ada = Profile::new("p-1", "Ada", 31);
    ada.location = "London".to_string();
    queue.enqueue(ada.clone(), Decision::Like);

    ada.location = "Paris".to_string();

    let drained = queue.drain();
    assert_eq!(drained[0].profile.location, "London");
    assert!(drained[0].submitted_at <= chrono::Local::now());
}
