//! Detect command handler

use anyhow::Result;
use serde_json::json;

use ansifade::{Config, TerminalInfo};

/// Print what the fader would use for the current terminal.
#[cfg(not(tarpaulin_include))]
pub fn handle(json: bool) -> Result<()> {
    let config = Config::load()?;
    let info = TerminalInfo::detect_with(&config.terminal);

    if json {
        let value = json!({
            "profile": info.profile,
            "truecolor": info.profile.supports_truecolor(),
            "background": info.background.to_string(),
            "foreground": info.foreground.to_string(),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        println!("profile:    {}", info.profile);
        println!("background: {}", info.background);
        println!("foreground: {}", info.foreground);
    }
    Ok(())
}
