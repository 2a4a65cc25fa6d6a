//! Filter state: the current year-range/jurisdiction/drug-type selection,
//! with synchronous change notification.
//!
//! A cell of filter values rather than a state machine. Mutation goes
//! through [`FilterState::set`]/[`FilterState::reset`], which validate
//! (inverted year bounds are swapped) and then invoke every subscribed
//! listener exactly once with the new snapshot. Jurisdiction and drug type
//! are typed enums, so out-of-enumeration values are unrepresentable;
//! filter values matching nothing in the data select nothing downstream
//! rather than erroring.

use crate::aggregate::numeric;
use crate::Record;
use rdt_core::{DrugType, Jurisdiction};
use serde_json::Value;

/// Jurisdiction selection: everything, or one state/territory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JurisdictionFilter {
    #[default]
    All,
    One(Jurisdiction),
}

impl JurisdictionFilter {
    pub fn matches(&self, code: &str) -> bool {
        match self {
            JurisdictionFilter::All => true,
            JurisdictionFilter::One(j) => code == j.code(),
        }
    }
}

/// An immutable snapshot of the filter selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Filters {
    pub year_start: i32,
    pub year_end: i32,
    pub jurisdiction: JurisdictionFilter,
    pub drug_types: Vec<DrugType>,
}

impl Filters {
    /// The startup defaults: full 2008-2024 span, all jurisdictions, every
    /// drug type selected.
    pub fn defaults() -> Self {
        Filters {
            year_start: 2008,
            year_end: 2024,
            jurisdiction: JurisdictionFilter::All,
            drug_types: DrugType::ALL.to_vec(),
        }
    }

    pub fn year_in_range(&self, year: i32) -> bool {
        year >= self.year_start && year <= self.year_end
    }

    /// Whether a canonical drug-type name passes the drug selection.
    /// An empty selection means "no drug filter" (everything passes);
    /// names outside the known enumeration never match.
    pub fn matches_drug(&self, name: &str) -> bool {
        if self.drug_types.is_empty() {
            return true;
        }
        name.parse::<DrugType>()
            .map(|d| self.drug_types.contains(&d))
            .unwrap_or(false)
    }
}

/// A partial update; `None` fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct FilterUpdate {
    pub year_start: Option<i32>,
    pub year_end: Option<i32>,
    pub jurisdiction: Option<JurisdictionFilter>,
    pub drug_types: Option<Vec<DrugType>>,
}

type Listener = Box<dyn FnMut(&Filters)>;

/// The mutable filter cell. Single-threaded by design: all mutation happens
/// between discrete UI event callbacks.
pub struct FilterState {
    current: Filters,
    defaults: Filters,
    listeners: Vec<Listener>,
}

impl FilterState {
    pub fn new(defaults: Filters) -> Self {
        FilterState {
            current: defaults.clone(),
            defaults,
            listeners: Vec::new(),
        }
    }

    /// Current selection snapshot.
    pub fn get(&self) -> Filters {
        self.current.clone()
    }

    /// Register a change listener, invoked synchronously on every
    /// `set`/`reset`.
    pub fn subscribe(&mut self, listener: impl FnMut(&Filters) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Merge a partial update, swap inverted year bounds, notify listeners
    /// once.
    pub fn set(&mut self, update: FilterUpdate) {
        if let Some(y) = update.year_start {
            self.current.year_start = y;
        }
        if let Some(y) = update.year_end {
            self.current.year_end = y;
        }
        if self.current.year_start > self.current.year_end {
            std::mem::swap(&mut self.current.year_start, &mut self.current.year_end);
        }
        if let Some(j) = update.jurisdiction {
            self.current.jurisdiction = j;
        }
        if let Some(d) = update.drug_types {
            self.current.drug_types = d;
        }
        self.notify();
    }

    /// Restore the built-in defaults and notify listeners.
    pub fn reset(&mut self) {
        self.current = self.defaults.clone();
        self.notify();
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener(&self.current);
        }
    }
}

/// Record's `year` field as an i32 (0 when absent).
pub fn record_year(record: &Record) -> i32 {
    numeric(record, "year") as i32
}

fn record_str<'a>(record: &'a Record, field: &str) -> &'a str {
    record.get(field).and_then(Value::as_str).unwrap_or("")
}

/// Keep the records inside the year range and jurisdiction selection.
pub fn apply(records: &[Record], filters: &Filters) -> Vec<Record> {
    records
        .iter()
        .filter(|r| {
            filters.year_in_range(record_year(r))
                && filters.jurisdiction.matches(record_str(r, "jurisdiction"))
        })
        .cloned()
        .collect()
}

/// Like [`apply`], additionally filtering by the drug-type selection.
pub fn apply_with_drugs(records: &[Record], filters: &Filters) -> Vec<Record> {
    apply(records, filters)
        .into_iter()
        .filter(|r| filters.matches_drug(record_str(r, "drug_type")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn records(v: serde_json::Value) -> Vec<Record> {
        v.as_array()
            .unwrap()
            .iter()
            .map(|r| r.as_object().unwrap().clone())
            .collect()
    }

    #[test]
    fn test_inverted_year_range_swaps_and_notifies_once() {
        // Scenario D
        let mut state = FilterState::new(Filters::defaults());
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = calls.clone();
        state.subscribe(move |f| sink.borrow_mut().push((f.year_start, f.year_end)));

        state.set(FilterUpdate {
            year_start: Some(2025),
            year_end: Some(2020),
            ..FilterUpdate::default()
        });

        assert_eq!(*calls.borrow(), vec![(2020, 2025)]);
    }

    #[test]
    fn test_reset_restores_defaults_and_notifies() {
        let mut state = FilterState::new(Filters::defaults());
        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        state.subscribe(move |_| *sink.borrow_mut() += 1);

        state.set(FilterUpdate {
            jurisdiction: Some(JurisdictionFilter::One(Jurisdiction::QLD)),
            drug_types: Some(vec![DrugType::Cannabis]),
            ..FilterUpdate::default()
        });
        state.reset();

        assert_eq!(*count.borrow(), 2);
        assert_eq!(state.get(), Filters::defaults());
    }

    #[test]
    fn test_partial_update_keeps_other_fields() {
        let mut state = FilterState::new(Filters::defaults());
        state.set(FilterUpdate {
            year_end: Some(2015),
            ..FilterUpdate::default()
        });
        let f = state.get();
        assert_eq!(f.year_start, 2008);
        assert_eq!(f.year_end, 2015);
        assert_eq!(f.jurisdiction, JurisdictionFilter::All);
    }

    #[test]
    fn test_apply_filters_year_and_jurisdiction() {
        let recs = records(json!([
            {"year": 2019, "jurisdiction": "NSW", "total": 1},
            {"year": 2022, "jurisdiction": "NSW", "total": 2},
            {"year": 2022, "jurisdiction": "VIC", "total": 3}
        ]));
        let filters = Filters {
            year_start: 2020,
            year_end: 2024,
            jurisdiction: JurisdictionFilter::One(Jurisdiction::NSW),
            drug_types: DrugType::ALL.to_vec(),
        };
        let out = apply(&recs, &filters);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0]["total"], json!(2));
    }

    #[test]
    fn test_apply_with_drugs() {
        let recs = records(json!([
            {"year": 2022, "jurisdiction": "NSW", "drug_type": "Cannabis", "count": 1},
            {"year": 2022, "jurisdiction": "NSW", "drug_type": "Cocaine", "count": 2},
            {"year": 2022, "jurisdiction": "NSW", "drug_type": "Opioid", "count": 3}
        ]));
        let filters = Filters {
            drug_types: vec![DrugType::Cannabis],
            ..Filters::defaults()
        };
        let out = apply_with_drugs(&recs, &filters);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0]["drug_type"], json!("Cannabis"));

        // Empty drug selection lets everything through, including names
        // outside the enumeration.
        let no_drug_filter = Filters {
            drug_types: Vec::new(),
            ..Filters::defaults()
        };
        assert_eq!(apply_with_drugs(&recs, &no_drug_filter).len(), 3);
    }

    #[test]
    fn test_unmatched_selection_selects_nothing() {
        let recs = records(json!([
            {"year": 2022, "jurisdiction": "NSW", "total": 2}
        ]));
        let filters = Filters {
            jurisdiction: JurisdictionFilter::One(Jurisdiction::ACT),
            ..Filters::defaults()
        };
        assert!(apply(&recs, &filters).is_empty());
    }
}
