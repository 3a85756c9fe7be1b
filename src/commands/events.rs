use anyhow::{bail, Result};
use day_planner::models::date_key::DateKey;
use day_planner::models::event::{Event, EventDraft, EventId, EventPatch};
use day_planner::models::settings::Settings;
use day_planner::models::time_of_day::TimeOfDay;
use day_planner::services::database::Database;
use day_planner::services::event::{EventRules, EventStore};
use day_planner::services::storage::SqliteStore;

pub fn list(
    database: &Database,
    settings: &Settings,
    date: DateKey,
    search: Option<&str>,
) -> Result<()> {
    let mut storage = SqliteStore::new(database);
    let store = EventStore::open(&mut storage, date)?.with_rules(EventRules::from(settings));

    println!("Events for {}", date);
    let found = store.search(search.unwrap_or(""));
    if found.is_empty() {
        println!("No events found for this search.");
    }
    for event in found {
        println!("{}", format_event(event));
    }

    Ok(())
}

pub fn add(
    database: &Database,
    settings: &Settings,
    date: DateKey,
    name: String,
    start: TimeOfDay,
    end: TimeOfDay,
    description: Option<String>,
) -> Result<()> {
    let mut storage = SqliteStore::new(database);
    let mut store = EventStore::open(&mut storage, date)?.with_rules(EventRules::from(settings));

    let draft = EventDraft::new(name, start, end).with_description(description.unwrap_or_default());
    let event = store.add(draft)?;

    println!("Added to {}:\n{}", date, format_event(&event));
    Ok(())
}

pub fn patch(
    name: Option<String>,
    start_time: Option<TimeOfDay>,
    end_time: Option<TimeOfDay>,
    description: Option<String>,
) -> EventPatch {
    EventPatch {
        name,
        start_time,
        end_time,
        description,
    }
}

pub fn edit(
    database: &Database,
    settings: &Settings,
    date: DateKey,
    id: String,
    patch: EventPatch,
) -> Result<()> {
    if patch.is_empty() {
        bail!("Nothing to change: pass at least one of --name, --start, --end, --description");
    }

    let mut storage = SqliteStore::new(database);
    let mut store = EventStore::open(&mut storage, date)?.with_rules(EventRules::from(settings));
    let event = store.apply_patch(&EventId::from(id), &patch)?;

    println!("Updated on {}:\n{}", date, format_event(&event));
    Ok(())
}

pub fn delete(database: &Database, settings: &Settings, date: DateKey, id: String) -> Result<()> {
    let mut storage = SqliteStore::new(database);
    let mut store = EventStore::open(&mut storage, date)?.with_rules(EventRules::from(settings));
    let removed = store.remove(&EventId::from(id))?;

    println!("Deleted '{}' from {}", removed.name, date);
    Ok(())
}

pub fn days(database: &Database) -> Result<()> {
    let keys = SqliteStore::new(database).keys()?;
    if keys.is_empty() {
        println!("No days have events yet.");
    }
    for key in keys {
        println!("{}", key);
    }
    Ok(())
}

fn format_event(event: &Event) -> String {
    let mut line = format!(
        "{}-{}  {}  ({} min)  [{}]",
        event.start_time,
        event.end_time,
        event.name,
        event.duration_minutes(),
        event.id
    );
    if !event.description.is_empty() {
        line.push_str("\n             ");
        line.push_str(&event.description);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(description: &str) -> Event {
        Event::from_draft(
            EventId::from("abc"),
            EventDraft::new("Lunch", "12:00".parse().unwrap(), "13:00".parse().unwrap())
                .with_description(description),
        )
    }

    #[test]
    fn test_format_event_without_description() {
        assert_eq!(format_event(&sample("")), "12:00-13:00  Lunch  (60 min)  [abc]");
    }

    #[test]
    fn test_format_event_with_description() {
        let text = format_event(&sample("Tacos"));
        assert_eq!(text.lines().count(), 2);
        assert_eq!(text.lines().nth(1).unwrap().trim(), "Tacos");
    }

    #[test]
    fn test_patch_from_flags() {
        assert!(patch(None, None, None, None).is_empty());
        assert!(!patch(Some("x".to_string()), None, None, None).is_empty());
    }
}
