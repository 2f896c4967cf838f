use chrono::{Months, NaiveDate, Utc};

use super::event::Event;

/// In-memory event list. Insertion order is kept; the query helpers return
/// copies sorted by start time for display.
#[derive(Debug, Default)]
pub struct Store {
    events: Vec<Event>,
    last_id: i64,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    /// Millisecond timestamp, bumped past the previous id when two
    /// allocations land in the same millisecond.
    pub fn allocate_id(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        self.last_id = now.max(self.last_id + 1);
        self.last_id
    }

    pub fn add(&mut self, event: Event) {
        self.last_id = self.last_id.max(event.id);
        self.events.push(event);
    }

    /// Drops every event with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: i64) -> bool {
        let before = self.events.len();
        self.events.retain(|e| e.id != id);
        self.events.len() != before
    }

    pub fn get(&self, id: i64) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn events_for_date(&self, date: NaiveDate) -> Vec<Event> {
        self.collect_sorted(|e| e.occurs_on(date))
    }

    /// Events touching any day of the month, including ones that started
    /// earlier and run into it.
    pub fn events_for_month(&self, year: i32, month: u32) -> Vec<Event> {
        let first = NaiveDate::from_ymd_opt(year, month, 1);
        match first.and_then(|f| Some((f, f.checked_add_months(Months::new(1))?))) {
            Some((first, next)) => self.events_in_range(first, next),
            None => Vec::new(),
        }
    }

    pub fn events_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<Event> {
        self.collect_sorted(|e| {
            let last = e.end.max(e.start).date();
            e.start_date() < end && last >= start
        })
    }

    fn collect_sorted(&self, keep: impl Fn(&Event) -> bool) -> Vec<Event> {
        let mut events: Vec<Event> = self.events.iter().filter(|e| keep(e)).cloned().collect();
        // stable: same-start events keep insertion order
        events.sort_by_key(|e| (!e.all_day, e.start));
        events
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::NaiveDateTime;

    use super::*;

    fn event(id: i64, title: &str, start: &str) -> Event {
        let start = NaiveDateTime::parse_from_str(start, "%Y-%m-%dT%H:%M").unwrap();
        Event {
            id,
            title: title.to_string(),
            trainer_name: "Sam".into(),
            customer_name: String::new(),
            exercise_name: String::new(),
            start,
            end: start,
            all_day: false,
            image_url: None,
        }
    }

    #[test]
    fn allocated_ids_are_unique_and_increasing() {
        let mut store = Store::new();
        let ids: Vec<i64> = (0..500).map(|_| store.allocate_id()).collect();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn n_adds_give_n_events_with_unique_ids() {
        let mut store = Store::new();
        for i in 0..25 {
            let id = store.allocate_id();
            store.add(event(id, &format!("session {}", i), "2024-01-01T09:00"));
        }
        assert_eq!(store.len(), 25);
        let unique: HashSet<_> = store.events().iter().map(|e| e.id).collect();
        assert_eq!(unique.len(), 25);
    }

    #[test]
    fn remove_present_and_absent_ids() {
        let mut store = Store::new();
        store.add(event(1, "a", "2024-01-01T09:00"));
        store.add(event(2, "b", "2024-01-01T10:00"));
        store.add(event(3, "c", "2024-01-01T11:00"));

        assert!(store.remove(2));
        assert_eq!(store.len(), 2);
        assert!(store.get(2).is_none());
        let titles: Vec<_> = store.events().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, ["a", "c"]);

        assert!(!store.remove(42));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn add_keeps_insertion_order_but_queries_sort() {
        let mut store = Store::new();
        store.add(event(1, "late", "2024-01-01T15:00"));
        store.add(event(2, "early", "2024-01-01T08:00"));

        let stored: Vec<_> = store.events().iter().map(|e| e.id).collect();
        assert_eq!(stored, [1, 2]);

        let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let shown: Vec<_> = store.events_for_date(day).iter().map(|e| e.id).collect();
        assert_eq!(shown, [2, 1]);
    }

    #[test]
    fn month_and_range_queries() {
        let mut store = Store::new();
        store.add(event(1, "jan", "2024-01-31T09:00"));
        store.add(event(2, "feb", "2024-02-01T09:00"));
        store.add(event(3, "mar", "2024-03-01T09:00"));

        assert_eq!(store.events_for_month(2024, 2).len(), 1);
        let from = NaiveDate::from_ymd_opt(2024, 1, 29).unwrap();
        let to = NaiveDate::from_ymd_opt(2024, 2, 5).unwrap();
        let ids: Vec<_> = store.events_in_range(from, to).iter().map(|e| e.id).collect();
        assert_eq!(ids, [1, 2]);
    }

    #[test]
    fn month_query_includes_events_running_into_it() {
        let mut store = Store::new();
        let mut ev = event(1, "overnight", "2024-01-31T22:00");
        ev.end = NaiveDateTime::parse_from_str("2024-02-02T10:00", "%Y-%m-%dT%H:%M").unwrap();
        store.add(ev);

        assert_eq!(store.events_for_month(2024, 1).len(), 1);
        assert_eq!(store.events_for_month(2024, 2).len(), 1);
        assert!(store.events_for_month(2024, 3).is_empty());
    }

    #[test]
    fn manual_ids_push_the_allocator_forward() {
        let mut store = Store::new();
        let far_future = Utc::now().timestamp_millis() + 1_000_000;
        store.add(event(far_future, "x", "2024-01-01T09:00"));
        assert!(store.allocate_id() > far_future);
    }
}
