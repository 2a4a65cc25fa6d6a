//! Data source loading with an in-memory cache keyed by URL.
//!
//! The cache is never evicted automatically; `clear_cache` is the only way
//! to drop entries. All requests for the initial load fire concurrently and
//! are joined when all complete, so one slow or failed source does not
//! block the others; a failed source simply yields `None`.

use futures::future::join_all;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Fetches and caches the dashboard's JSON/GeoJSON sources.
#[derive(Clone, Default)]
pub struct DataService {
    cache: Rc<RefCell<HashMap<String, Value>>>,
}

impl DataService {
    pub fn new() -> Self {
        DataService::default()
    }

    /// Load a JSON document, hitting the cache first.
    pub async fn load(&self, url: &str) -> Result<Value, String> {
        if let Some(cached) = self.cache.borrow().get(url) {
            return Ok(cached.clone());
        }

        let body = fetch_text(url).await?;
        let value: Value =
            serde_json::from_str(&body).map_err(|e| format!("invalid JSON from {url}: {e}"))?;
        self.cache.borrow_mut().insert(url.to_string(), value.clone());
        Ok(value)
    }

    /// Load several URLs concurrently. Each failure is logged and reported
    /// as `None` in its slot; the rest still load.
    pub async fn load_all(&self, urls: &[String]) -> Vec<Option<Value>> {
        let results = join_all(urls.iter().map(|url| self.load(url))).await;
        results
            .into_iter()
            .zip(urls)
            .map(|(result, url)| match result {
                Ok(value) => Some(value),
                Err(e) => {
                    log::warn!("could not load {url}: {e}");
                    None
                }
            })
            .collect()
    }

    /// Drop every cached document.
    pub fn clear_cache(&self) {
        self.cache.borrow_mut().clear();
    }
}

async fn fetch_text(url: &str) -> Result<String, String> {
    let window = web_sys::window().ok_or("no window")?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|_| format!("bad request for {url}"))?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|_| format!("fetch failed for {url}"))?;

    let response: Response = response_value
        .dyn_into()
        .map_err(|_| format!("unexpected response for {url}"))?;

    if !response.ok() {
        return Err(format!("HTTP {} for {url}", response.status()));
    }

    let text_promise = response
        .text()
        .map_err(|_| format!("unreadable body for {url}"))?;
    let text_value = JsFuture::from(text_promise)
        .await
        .map_err(|_| format!("body read failed for {url}"))?;

    text_value
        .as_string()
        .ok_or_else(|| format!("non-text body for {url}"))
}
