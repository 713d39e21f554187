//! `travelai config show|set`.

use std::path::Path;

use anyhow::Result;

use super::output;
use crate::config::ClientConfig;

pub fn show(path: &Path, json: bool) -> Result<()> {
    let config = ClientConfig::load(path)?;
    if json {
        return output::json(&config);
    }
    println!("Config:    {}", path.display());
    println!("Server:    {}", config.server);
    println!("Variant:   {}", config.variant.as_str());
    println!("Fallback:  {} ms", config.fallback_delay().as_millis());
    match &config.session {
        Some(s) => println!("Session:   {}", s.user.handle),
        None => println!("Session:   -"),
    }
    Ok(())
}

pub fn set(path: &Path, key: &str, value: &str) -> Result<()> {
    let mut config = ClientConfig::load(path)?;
    let variant = config.variant;
    config.set(key, value)?;
    // A session from one backend means nothing to the other.
    if config.variant != variant && config.session.take().is_some() {
        println!("Variant changed; saved session cleared.");
    }
    config.save(path)?;
    println!("Set {} = {}.", key, value);
    Ok(())
}
