//! Interpolate command handler

use anyhow::Result;

use ansifade::cli::InterpolateArgs;
use ansifade::color::interpolate_color;

/// Blend the two colors and print the hex, or the full descriptor as JSON.
pub fn handle(args: InterpolateArgs) -> Result<()> {
    let color = interpolate_color(&args.background, &args.foreground, args.factor)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&color)?);
    } else {
        println!("{}", color.hex());
    }
    Ok(())
}
