//! Conservation check between the per-state and national exports.
//!
//! The per-state detections, summed across every jurisdiction and year,
//! must equal the national trend total over the same span. A mismatch
//! points at a broken export pipeline upstream.

use log::info;
use rdt_data::aggregate::{numeric, sum_by};

use crate::validate::load_bundle;

/// Allowed absolute drift between the two totals. The exports carry whole
/// counts, so anything past float noise is a real discrepancy.
const TOLERANCE: f64 = 0.5;

pub fn run_check_sums(data_dir: &str) -> anyhow::Result<()> {
    let bundle = load_bundle(data_dir)?;

    if bundle.trend.is_empty() || bundle.jurisdiction.is_empty() {
        anyhow::bail!("both trend and jurisdiction exports are required for the check");
    }

    let national: f64 = bundle.trend.iter().map(|r| numeric(r, "total")).sum();
    let per_state = sum_by(&bundle.jurisdiction, &["jurisdiction"], "total");
    let state_total: f64 = per_state.iter().map(|g| g.sum).sum();

    for group in &per_state {
        info!("{}: {}", group.key_str(0), group.sum);
    }

    let drift = (national - state_total).abs();
    if drift > TOLERANCE {
        anyhow::bail!(
            "totals diverge: national trend {national} vs per-state sum {state_total} (drift {drift})"
        );
    }

    println!("OK: national {national} matches per-state sum {state_total}");
    Ok(())
}
