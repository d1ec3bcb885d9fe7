use std::path::PathBuf;

use anyhow::Result;
use terramena::application::render_host_list;
use terramena::presentation::create_list_use_case;
use terramena::{Config, TagFilter};

use super::or_configured;

pub fn cmd_list(config: &Config, tags: Vec<String>, state: Option<PathBuf>, json: bool) -> Result<()> {
    let state = or_configured(state, &config.state.path);
    tracing::debug!("terraform state: {}", state.display());

    let hosts = create_list_use_case(&state).execute(&TagFilter::new(tags))?;

    if json {
        let output = serde_json::json!({
            "event": "list",
            "command": "list",
            "count": hosts.len(),
            "hosts": hosts,
        });
        crate::ui::json::emit(output)?;
    } else {
        println!("{}", render_host_list(&hosts));
    }

    Ok(())
}
