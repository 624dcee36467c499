//! Fade command handler

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};

use ansifade::cli::FadeArgs;
use ansifade::fade::{Interpolator, Linear};
use ansifade::terminal::{self, ColorProfile};
use ansifade::{ColorCache, ColorMode, Config, FadeRequest};

/// Read the input, fade it and write it to stdout.
///
/// When the terminal cannot show `--mode` colors the input is written back
/// unchanged with a warning on stderr.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: FadeArgs) -> Result<()> {
    let config = Config::load()?;
    let content = read_input(args.file.as_deref())?;
    let mode = ColorMode::from(args.mode);

    let profile = if args.force || config.terminal.force_truecolor {
        ColorProfile::TrueColor
    } else {
        terminal::profile_from_env(|name| std::env::var(name).ok(), atty::is(atty::Stream::Stdout))
    };

    if !profile.supports(mode) {
        eprintln!(
            "warning: terminal does not support {} colors (detected: {}), printing input unchanged",
            mode, profile
        );
        return write_output(&content);
    }

    let background = args.background.or(config.fade.background);
    let foreground = args.foreground.or(config.fade.foreground);
    let (background, foreground) = match (background, foreground) {
        (Some(bg), Some(fg)) => (bg, fg),
        (bg, fg) => {
            let timeout = Duration::from_millis(config.terminal.query_timeout_ms);
            let (default_fg, default_bg, source) = terminal::default_colors(timeout);
            tracing::debug!(?source, "Using detected terminal colors");
            (
                bg.unwrap_or_else(|| default_bg.to_string()),
                fg.unwrap_or_else(|| default_fg.to_string()),
            )
        }
    };

    let factor = args.factor.unwrap_or(config.fade.factor);
    let request = FadeRequest::new(background, foreground)
        .color_mode(mode)
        .factor(factor);

    let cache;
    let interpolator: &dyn Interpolator = if config.cache.enabled {
        cache = ColorCache::new(config.cache.max_entries);
        &cache
    } else {
        &Linear
    };

    let faded = request
        .apply_with(&content, interpolator)
        .context("Failed to fade input")?;
    tracing::info!(
        bytes_in = content.len(),
        bytes_out = faded.len(),
        factor,
        %mode,
        "Faded input"
    );
    write_output(&faded)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read stdin")?;
            Ok(content)
        }
    }
}

fn write_output(content: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(content.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
