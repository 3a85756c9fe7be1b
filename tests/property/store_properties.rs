use day_planner::models::event::{intervals_overlap, EventDraft};
use day_planner::models::time_of_day::TimeOfDay;
use day_planner::services::event::{persistence, EventStore};
use day_planner::services::storage::MemoryStore;
use proptest::prelude::*;

fn minutes_to_time(minutes: u32) -> TimeOfDay {
    TimeOfDay::from_hm(minutes / 60, minutes % 60).unwrap()
}

/// A `[start, end)` pair within one day, start strictly before end
fn interval() -> impl Strategy<Value = (u32, u32)> {
    (0..1439u32).prop_flat_map(|start| (Just(start), (start + 1)..=1439u32))
}

proptest! {
    /// Property: overlap is symmetric
    #[test]
    fn prop_overlap_is_symmetric(a in interval(), b in interval()) {
        let (s1, e1) = (minutes_to_time(a.0), minutes_to_time(a.1));
        let (s2, e2) = (minutes_to_time(b.0), minutes_to_time(b.1));
        prop_assert_eq!(intervals_overlap(s1, e1, s2, e2), intervals_overlap(s2, e2, s1, e1));
    }

    /// Property: back-to-back intervals never overlap
    #[test]
    fn prop_adjacent_intervals_do_not_overlap(start in 0..1437u32, mid_len in 1..100u32, end_len in 1..100u32) {
        let mid = (start + mid_len).min(1438);
        let end = (mid + end_len).min(1439);
        prop_assume!(start < mid && mid < end);

        let (s, m, e) = (minutes_to_time(start), minutes_to_time(mid), minutes_to_time(end));
        prop_assert!(!intervals_overlap(s, m, m, e));
    }

    /// Property: whatever is attempted, accepted events never overlap
    #[test]
    fn prop_store_never_holds_overlapping_events(attempts in prop::collection::vec(interval(), 1..30)) {
        let mut storage = MemoryStore::new();
        let mut store = EventStore::open(&mut storage, "2024-03-15".parse().unwrap()).unwrap();

        for (index, (start, end)) in attempts.into_iter().enumerate() {
            let draft = EventDraft::new(format!("event {}", index), minutes_to_time(start), minutes_to_time(end));
            let _ = store.add(draft);
        }

        let events = store.events();
        for (i, a) in events.iter().enumerate() {
            prop_assert!(a.start_time < a.end_time);
            for b in &events[i + 1..] {
                prop_assert!(!a.overlaps(b.start_time, b.end_time));
            }
        }
    }

    /// Property: serialized collections read back unchanged
    #[test]
    fn prop_round_trip(attempts in prop::collection::vec(interval(), 0..20)) {
        let mut storage = MemoryStore::new();
        let mut store = EventStore::open(&mut storage, "2024-03-15".parse().unwrap()).unwrap();
        for (start, end) in attempts {
            let _ = store.add(EventDraft::new("x", minutes_to_time(start), minutes_to_time(end)).with_description("d"));
        }

        let payload = persistence::serialize_events(store.events()).unwrap();
        let decoded = persistence::deserialize_events(&payload).unwrap();
        prop_assert_eq!(decoded.as_slice(), store.events());
    }
}
