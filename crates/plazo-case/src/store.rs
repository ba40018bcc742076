//! # Event Store
//!
//! The ordered collection of a case's procedural events. Identifiers are
//! unique within the set; insertion order is stable and meaningful (stage
//! listings preserve it). Mutation goes through [`EventStore::update`] with
//! an explicit field patch — only the fields present in the patch change,
//! mirroring how the source tool rewrote single fields in place.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use chrono::NaiveDate;
use plazo_core::{ProceduralEvent, ProcessStage, RecurseType};

use crate::error::CaseError;

// ── Patch ──────────────────────────────────────────────────────────────

/// A partial update to one event.
///
/// Outer `Option` = "does this patch touch the field at all"; inner value
/// = the new field content. `with_date(None)` therefore clears a date,
/// while an absent field leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventPatch {
    /// New occurrence date, if touched.
    pub date: Option<Option<NaiveDate>>,
    /// New span end, if touched.
    pub end_date: Option<Option<NaiveDate>>,
    /// New appeal kind, if touched.
    pub recurse_type: Option<Option<RecurseType>>,
    /// New tribunal label, if touched.
    pub tribunal: Option<Option<String>>,
}

impl EventPatch {
    /// An empty patch touching nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Touch the occurrence date.
    pub fn with_date(mut self, date: Option<NaiveDate>) -> Self {
        self.date = Some(date);
        self
    }

    /// Touch the span end date.
    pub fn with_end_date(mut self, end_date: Option<NaiveDate>) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Touch the appeal kind.
    pub fn with_recurse_type(mut self, recurse_type: Option<RecurseType>) -> Self {
        self.recurse_type = Some(recurse_type);
        self
    }

    /// Touch the tribunal label.
    pub fn with_tribunal(mut self, tribunal: Option<String>) -> Self {
        self.tribunal = Some(tribunal);
        self
    }

    /// Whether the patch touches any field.
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.end_date.is_none()
            && self.recurse_type.is_none()
            && self.tribunal.is_none()
    }
}

// ── The Store ──────────────────────────────────────────────────────────

/// Ordered set of procedural events with unique identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EventStore {
    events: Vec<ProceduralEvent>,
}

impl EventStore {
    /// Build a store from an event list, enforcing identifier uniqueness.
    ///
    /// # Errors
    ///
    /// Returns [`CaseError::DuplicateEventId`] naming the first repeated
    /// identifier.
    pub fn new(events: Vec<ProceduralEvent>) -> Result<Self, CaseError> {
        let mut seen = HashSet::new();
        for event in &events {
            if !seen.insert(event.id.as_str().to_string()) {
                return Err(CaseError::DuplicateEventId(event.id.as_str().to_string()));
            }
        }
        Ok(Self { events })
    }

    /// Look up an event by identifier.
    pub fn get(&self, id: &str) -> Option<&ProceduralEvent> {
        self.events.iter().find(|e| e.id.as_str() == id)
    }

    /// Apply a field patch to one event.
    ///
    /// Other events are untouched and set order is preserved. The span
    /// invariant (`end_date >= date`) is checked against the post-patch
    /// values.
    ///
    /// # Errors
    ///
    /// [`CaseError::EventNotFound`] for an unknown identifier,
    /// [`CaseError::EndDateWithoutStart`] for an end date on an event with
    /// no start, [`CaseError::SpanEndsBeforeStart`] for a misordered span.
    pub fn update(&mut self, id: &str, patch: EventPatch) -> Result<(), CaseError> {
        let event = self
            .events
            .iter_mut()
            .find(|e| e.id.as_str() == id)
            .ok_or_else(|| CaseError::EventNotFound(id.to_string()))?;

        let date = patch.date.unwrap_or(event.date);
        let end_date = patch.end_date.unwrap_or(event.end_date);
        if let Some(end) = end_date {
            match date {
                None => return Err(CaseError::EndDateWithoutStart(id.to_string())),
                Some(start) if end < start => {
                    return Err(CaseError::SpanEndsBeforeStart { start, end });
                }
                Some(_) => {}
            }
        }

        event.date = date;
        event.end_date = end_date;
        if let Some(recurse_type) = patch.recurse_type {
            event.recurse_type = recurse_type;
        }
        if let Some(tribunal) = patch.tribunal {
            event.tribunal = tribunal;
        }
        Ok(())
    }

    /// Events in one stage, in insertion order.
    pub fn in_stage(&self, stage: ProcessStage) -> impl Iterator<Item = &ProceduralEvent> {
        self.events.iter().filter(move |e| e.stage == stage)
    }

    /// All events in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ProceduralEvent> {
        self.events.iter()
    }

    /// Dated events across all stages, sorted ascending by date.
    pub fn dated_sorted(&self) -> Vec<&ProceduralEvent> {
        let mut dated: Vec<&ProceduralEvent> =
            self.events.iter().filter(|e| e.is_dated()).collect();
        dated.sort_by_key(|e| e.date);
        dated
    }

    /// Number of events in the set.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<'de> Deserialize<'de> for EventStore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let events = Vec::<ProceduralEvent>::deserialize(deserializer)?;
        Self::new(events).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plazo_core::{well_known, EventId};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn event(id: &str, stage: ProcessStage) -> ProceduralEvent {
        ProceduralEvent::new(EventId::new(id).unwrap(), "Evento", stage, false).unwrap()
    }

    fn store() -> EventStore {
        EventStore::new(vec![
            event("a", ProcessStage::Instruction),
            event("b", ProcessStage::Instruction),
            event("c", ProcessStage::Trial),
        ])
        .unwrap()
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let result = EventStore::new(vec![
            event("a", ProcessStage::Instruction),
            event("a", ProcessStage::Trial),
        ]);
        assert_eq!(result.unwrap_err(), CaseError::DuplicateEventId("a".into()));
    }

    #[test]
    fn get_finds_by_id() {
        let s = store();
        assert!(s.get("b").is_some());
        assert!(s.get("zz").is_none());
    }

    #[test]
    fn update_unknown_id_is_an_error() {
        let mut s = store();
        let result = s.update("zz", EventPatch::new().with_date(Some(d(2022, 1, 1))));
        assert_eq!(result.unwrap_err(), CaseError::EventNotFound("zz".into()));
    }

    #[test]
    fn update_touches_only_patched_fields() {
        let mut s = store();
        s.update(
            "a",
            EventPatch::new()
                .with_date(Some(d(2022, 1, 1)))
                .with_tribunal(Some("Cámara".into())),
        )
        .unwrap();

        let a = s.get("a").unwrap();
        assert_eq!(a.date, Some(d(2022, 1, 1)));
        assert_eq!(a.tribunal.as_deref(), Some("Cámara"));
        assert!(a.end_date.is_none());
        // Untouched events keep their state.
        assert!(s.get("b").unwrap().date.is_none());
    }

    #[test]
    fn update_clears_a_date() {
        let mut s = store();
        s.update("a", EventPatch::new().with_date(Some(d(2022, 1, 1))))
            .unwrap();
        s.update("a", EventPatch::new().with_date(None)).unwrap();
        assert!(s.get("a").unwrap().date.is_none());
    }

    #[test]
    fn update_rejects_span_ending_before_start() {
        let mut s = store();
        let result = s.update(
            "a",
            EventPatch::new()
                .with_date(Some(d(2022, 6, 1)))
                .with_end_date(Some(d(2022, 5, 1))),
        );
        assert_eq!(
            result.unwrap_err(),
            CaseError::SpanEndsBeforeStart {
                start: d(2022, 6, 1),
                end: d(2022, 5, 1),
            }
        );
        // Rejected patches leave the event untouched.
        assert!(s.get("a").unwrap().date.is_none());
    }

    #[test]
    fn update_allows_same_day_span() {
        let mut s = store();
        s.update(
            "a",
            EventPatch::new()
                .with_date(Some(d(2022, 6, 1)))
                .with_end_date(Some(d(2022, 6, 1))),
        )
        .unwrap();
        assert_eq!(s.get("a").unwrap().end_date, Some(d(2022, 6, 1)));
    }

    #[test]
    fn update_rejects_end_date_without_start() {
        let mut s = store();
        let result = s.update("a", EventPatch::new().with_end_date(Some(d(2022, 5, 1))));
        assert_eq!(
            result.unwrap_err(),
            CaseError::EndDateWithoutStart("a".into())
        );
    }

    #[test]
    fn in_stage_preserves_insertion_order() {
        let s = store();
        let ids: Vec<&str> = s
            .in_stage(ProcessStage::Instruction)
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn dated_sorted_orders_by_date_across_stages() {
        let mut s = store();
        s.update("c", EventPatch::new().with_date(Some(d(2021, 1, 1))))
            .unwrap();
        s.update("a", EventPatch::new().with_date(Some(d(2022, 1, 1))))
            .unwrap();
        let ids: Vec<&str> = s.dated_sorted().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a"]);
    }

    #[test]
    fn deserialize_enforces_uniqueness() {
        let mut a = event("x", ProcessStage::Trial);
        a.date = Some(d(2020, 1, 1));
        let json = serde_json::to_string(&vec![a.clone(), a]).unwrap();
        let result: Result<EventStore, _> = serde_json::from_str(&json);
        assert!(result.is_err());
    }

    #[test]
    fn serde_roundtrip_preserves_order() {
        let s = store();
        let json = serde_json::to_string(&s).unwrap();
        let back: EventStore = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn patch_is_empty() {
        assert!(EventPatch::new().is_empty());
        assert!(!EventPatch::new().with_date(None).is_empty());
    }

    #[test]
    fn well_known_lookup_against_starter_shape() {
        let s = EventStore::new(vec![
            event(well_known::INDICTMENT, ProcessStage::Instruction),
            event(well_known::SENTENCE, ProcessStage::Trial),
        ])
        .unwrap();
        assert!(s.get(well_known::INDICTMENT).is_some());
    }
}
