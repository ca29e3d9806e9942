//! Backend health check

use anyhow::Result;
use std::time::Duration;

use crate::source::RestSource;
use crate::Blogcat;

/// Probe the configured backend and print its status payload
pub async fn run(app: &Blogcat) -> Result<()> {
    let Some(url) = &app.config.api_url else {
        println!("offline (no API URL configured; serving fallback data)");
        return Ok(());
    };

    let rest = RestSource::new(url, Duration::from_secs(app.config.request_timeout_secs))?;
    let status = rest.status().await;
    println!("{}", serde_json::to_string_pretty(&status)?);

    Ok(())
}
