// src/core/net.rs

// Blocking HTTPS via ureq; one shared agent with timeouts and a browser UA.

use std::{error::Error, fs, io, path::Path, sync::OnceLock, time::Duration};

use crate::config::consts::{HTTP_TIMEOUT_SECS, USER_AGENT};

pub type NetError = Box<dyn Error + Send + Sync>;

fn agent() -> &'static ureq::Agent {
    static AGENT: OnceLock<ureq::Agent> = OnceLock::new();
    AGENT.get_or_init(|| {
        ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
    })
}

pub fn get_html(url: &str) -> Result<String, NetError> {
    Ok(agent().get(url).call()?.into_string()?)
}

pub fn get_json(url: &str) -> Result<serde_json::Value, NetError> {
    let body = agent().get(url).call()?.into_string()?;
    Ok(serde_json::from_str(&body)?)
}

/// Reachability probe. Some CDNs 404 on the full-resolution variant.
pub fn url_ok(url: &str) -> bool {
    agent().head(url).call().is_ok()
}

/// Stream `url` to `dest`. A failed transfer removes the partial file.
pub fn download(url: &str, dest: &Path) -> Result<(), NetError> {
    let resp = agent().get(url).call()?;
    let mut reader = resp.into_reader();
    let mut file = fs::File::create(dest)?;
    if let Err(e) = io::copy(&mut reader, &mut file) {
        drop(file);
        let _ = fs::remove_file(dest);
        return Err(e.into());
    }
    Ok(())
}
