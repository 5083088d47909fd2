//! `intent-router agents`.

use std::path::Path;

use serde_json::json;

use super::output;
use crate::error::Result;
use crate::infrastructure::config::settings::Config;

/// List the agents in the configuration file.
pub fn execute<P: AsRef<Path>>(config_path: P) -> Result<()> {
    let config = Config::load(config_path.as_ref())?;
    let agents = config.agents();

    if output::is_json() {
        output::json_payload("agents", json!(agents));
        return Ok(());
    }

    output::section("Agents");
    if agents.is_empty() {
        output::warning("No agents configured");
        return Ok(());
    }
    for agent in &agents {
        output::field(agent.id.as_str(), &agent.description);
    }

    Ok(())
}
