//! The global filter panel: year range, jurisdiction, drug types, reset.
//!
//! Writes straight into the AppState filter signals; every chart effect
//! reads them, so a change here re-renders the whole dashboard.

use crate::state::AppState;
use dioxus::prelude::*;
use rdt_core::{DrugType, Jurisdiction};
use rdt_data::filter::JurisdictionFilter;

/// Year range + jurisdiction + drug type controls with a reset button.
#[component]
pub fn FilterPanel() -> Element {
    rsx! {
        div {
            style: "display: flex; flex-wrap: wrap; gap: 16px; align-items: flex-end; padding: 12px; background: #FAFAFA; border: 1px solid #E0E0E0; border-radius: 4px; margin-bottom: 16px;",
            YearRangePicker {}
            JurisdictionSelector {}
            DrugTypePicker {}
            ResetButton {}
        }
    }
}

/// Start/end year number inputs. Inverted ranges are tolerated here and
/// swapped when the filter snapshot is taken.
#[component]
fn YearRangePicker() -> Element {
    let mut state = use_context::<AppState>();
    let start = (state.year_start)();
    let end = (state.year_end)();
    let min = (state.min_year)();
    let max = (state.max_year)();

    let on_start_change = move |evt: Event<FormData>| {
        if let Ok(year) = evt.value().parse::<i32>() {
            state.year_start.set(year);
        }
    };

    let on_end_change = move |evt: Event<FormData>| {
        if let Ok(year) = evt.value().parse::<i32>() {
            state.year_end.set(year);
        }
    };

    rsx! {
        div {
            style: "display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "From: "
                input {
                    r#type: "number",
                    value: "{start}",
                    min: "{min}",
                    max: "{max}",
                    style: "width: 80px;",
                    onchange: on_start_change,
                }
            }
            label {
                style: "font-weight: bold;",
                "To: "
                input {
                    r#type: "number",
                    value: "{end}",
                    min: "{min}",
                    max: "{max}",
                    style: "width: 80px;",
                    onchange: on_end_change,
                }
            }
        }
    }
}

/// Jurisdiction dropdown: "all" plus the eight state/territory codes.
#[component]
fn JurisdictionSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.jurisdiction)();

    let on_change = move |evt: Event<FormData>| {
        let filter = match evt.value().parse::<Jurisdiction>() {
            Ok(j) => JurisdictionFilter::One(j),
            Err(_) => JurisdictionFilter::All,
        };
        state.jurisdiction.set(filter);
    };

    rsx! {
        label {
            style: "font-weight: bold;",
            "Jurisdiction: "
            select {
                onchange: on_change,
                option {
                    value: "all",
                    selected: selected == JurisdictionFilter::All,
                    "All of Australia"
                }
                for j in Jurisdiction::ALL.iter() {
                    option {
                        value: "{j.code()}",
                        selected: selected == JurisdictionFilter::One(*j),
                        "{j.full_name()}"
                    }
                }
            }
        }
    }
}

/// One checkbox per drug type.
#[component]
fn DrugTypePicker() -> Element {
    let mut state = use_context::<AppState>();
    let selected = state.drug_types.read().clone();

    rsx! {
        div {
            style: "display: flex; gap: 10px; align-items: center;",
            span { style: "font-weight: bold;", "Drugs: " }
            for drug in DrugType::ALL.iter() {
                label {
                    style: "font-weight: normal; display: flex; gap: 4px; align-items: center;",
                    input {
                        r#type: "checkbox",
                        checked: selected.contains(drug),
                        onchange: {
                            let drug = *drug;
                            move |evt: Event<FormData>| {
                                let mut drugs = state.drug_types.read().clone();
                                if evt.checked() {
                                    if !drugs.contains(&drug) {
                                        drugs.push(drug);
                                    }
                                } else {
                                    drugs.retain(|d| *d != drug);
                                }
                                state.drug_types.set(drugs);
                            }
                        },
                    }
                    "{drug.label()}"
                }
            }
        }
    }
}

/// Restore the default filter selection.
#[component]
fn ResetButton() -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        button {
            style: "padding: 6px 14px; cursor: pointer;",
            onclick: move |_| state.reset_filters(),
            "Reset Filters"
        }
    }
}
