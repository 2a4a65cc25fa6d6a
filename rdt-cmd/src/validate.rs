//! Validation of the dashboard's JSON data exports.

use anyhow::Context;
use log::{info, warn};
use rdt_charts::{DataBundle, Source};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Resolve where a source's export lives under the data directory. The
/// deployment paths carry a `data/` prefix; on disk the files sit directly
/// in the given directory.
pub(crate) fn source_path(data_dir: &str, source: Source) -> PathBuf {
    let name = Path::new(source.path())
        .file_name()
        .unwrap_or_default()
        .to_os_string();
    Path::new(data_dir).join(name)
}

/// Load every export from `data_dir` into a normalized bundle. A missing
/// file is logged and skipped; a present-but-unparseable file is an error.
pub(crate) fn load_bundle(data_dir: &str) -> anyhow::Result<DataBundle> {
    let mut bundle = DataBundle::new();
    for source in Source::ALL {
        let path = source_path(data_dir, source);
        if !path.exists() {
            warn!("{} not found, skipping", path.display());
            continue;
        }
        let body = std::fs::read_to_string(&path)
            .with_context(|| format!("reading {}", path.display()))?;
        let raw: Value = serde_json::from_str(&body)
            .with_context(|| format!("parsing {}", path.display()))?;
        bundle.insert_raw(source, Some(raw));
    }
    Ok(bundle)
}

/// Parse and normalize every export, reporting per-source row counts.
pub fn run_validate(data_dir: &str) -> anyhow::Result<()> {
    let bundle = load_bundle(data_dir)?;

    let counts = [
        ("trend", bundle.trend.len()),
        ("jurisdiction", bundle.jurisdiction.len()),
        ("drug_by_jurisdiction", bundle.drug_composition.len()),
        ("drug_trend", bundle.drug_trend.len()),
        ("tests_conducted", bundle.tests_conducted.len()),
        ("tests_summary", bundle.tests_summary.len()),
        ("population", bundle.population.len()),
    ];
    for (name, count) in counts {
        info!("{name}: {count} rows");
    }
    if bundle.geo_json.is_some() {
        info!("geojson: present");
    }

    if bundle.trend.is_empty() {
        anyhow::bail!("trend export is empty or missing; the dashboard cannot start without it");
    }

    let span = bundle
        .year_span()
        .ok_or_else(|| anyhow::anyhow!("trend export has no usable year values"))?;
    info!("year span: {}..{}", span.0, span.1);
    println!("OK: {} trend rows, years {}..{}", bundle.trend.len(), span.0, span.1);
    Ok(())
}
