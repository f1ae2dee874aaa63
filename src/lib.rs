use anyhow::{Context, Result};
use serde_json::Value;

pub mod util;

/// Single blocking GET against the Stats API. A transport error is fatal for
/// the refresh cycle that issued it; the next cycle retries on its own.
pub fn get(url: &str) -> Result<Value> {
    ureq::get(url)
        .call()
        .with_context(|| format!("Request to {url} failed"))?
        .into_json::<Value>()
        .context("Response was not a valid json")
}
