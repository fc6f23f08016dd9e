use std::path::Path;

use sprig_core::config::default_config_path;
use sprig_core::Configs;

use crate::error::CliError;

/// Configuration from `explicit`, else the default config file, else the
/// built-in shortcuts.
pub fn resolve_configs(explicit: Option<&Path>) -> Result<Configs, CliError> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(CliError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        return Ok(Configs::load(path)?);
    }

    match default_config_path() {
        Some(path) => Ok(Configs::load(&path)?),
        None => Ok(Configs::default()),
    }
}

pub fn format_config_lines(configs: &Configs) -> Vec<String> {
    vec![
        format!("actionsEdit       = {}", configs.actions_edit),
        format!("actionsRemove     = {}", configs.actions_remove),
        format!("actionsRotateStar = {}", configs.actions_rotate_star),
        format!("navigateTop       = {}", configs.navigate_top),
        format!("navigateBottom    = {}", configs.navigate_bottom),
    ]
}

pub fn run_config(configs: &Configs, json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", configs.to_json_pretty()?);
    } else {
        for line in format_config_lines(configs) {
            println!("{line}");
        }
    }
    Ok(())
}
