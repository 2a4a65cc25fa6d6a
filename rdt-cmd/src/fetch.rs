//! Downloading the data exports from a hosted dashboard deployment.

use anyhow::Context;
use log::{info, warn};
use rdt_charts::Source;
use std::path::Path;
use std::time::Duration;

/// Download every export under `base_url` into `out_dir`, preserving the
/// deployment's relative paths. A single failed file is logged and skipped
/// so a partial mirror is still usable.
pub async fn run_fetch(base_url: &str, out_dir: &str) -> anyhow::Result<()> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(60))
        .build()?;
    let base = base_url.trim_end_matches('/');

    let mut fetched = 0usize;
    for source in Source::ALL {
        let url = format!("{}/{}", base, source.path());
        info!("fetching {url}");

        let response = match client.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("skipping {url}: {e}");
                continue;
            }
        };
        if !response.status().is_success() {
            warn!("skipping {url}: HTTP {}", response.status());
            continue;
        }
        let body = response.bytes().await?;

        let dest = Path::new(out_dir).join(source.path());
        if let Some(parent) = dest.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        std::fs::write(&dest, &body).with_context(|| format!("writing {}", dest.display()))?;
        fetched += 1;
    }

    if fetched == 0 {
        anyhow::bail!("no files could be fetched from {base_url}");
    }
    println!("Fetched {fetched} of {} files into {out_dir}", Source::ALL.len());
    Ok(())
}
