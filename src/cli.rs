//! Command line definition.
//!
//! Lives in the library so `xtask` can render the man page from it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use crate::ansi::ColorMode;

#[derive(Debug, Parser)]
#[command(
    name = "ansifade",
    version,
    about = "Fade ANSI-colored text toward the terminal's background",
    long_about = "Fade ANSI-colored text toward the terminal's background.\n\n\
        Every colored run of text is blended with the terminal's default colors. \
        Backgrounds are faded first and text is then faded against its new \
        background, so output stays readable while looking dimmed."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fade ANSI-colored text from a file or stdin
    #[command(long_about = "Fade ANSI-colored text from a file or stdin.\n\n\
        Reference colors come from --background/--foreground, then the config \
        file, then the terminal itself. If the terminal cannot show the requested \
        color mode the input is printed unchanged, unless --force is given.\n\n\
        EXAMPLES:\n    \
        ls --color=always | ansifade fade -f 0.4\n    \
        ansifade fade log.txt --background '#1e1e2e' --foreground '#cdd6f4' --force")]
    Fade(FadeArgs),

    /// Blend two colors and print the result
    #[command(long_about = "Blend two #RRGGBB colors.\n\n\
        A factor of 0 gives the background, 1 gives the foreground.\n\n\
        EXAMPLES:\n    \
        ansifade interpolate '#ff0000' '#0000ff'\n    \
        ansifade interpolate '#000000' '#ffffff' -f 0.25 --json")]
    Interpolate(InterpolateArgs),

    /// Show the detected terminal color support and default colors
    Detect {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Debug, Args)]
pub struct FadeArgs {
    /// Input file (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Weight of the original colors, 0.0 to 1.0 [default: from config, 0.5]
    #[arg(short, long, allow_negative_numbers = true)]
    pub factor: Option<f64>,

    /// Reference background color (#RRGGBB)
    #[arg(long, value_name = "HEX")]
    pub background: Option<String>,

    /// Reference foreground color (#RRGGBB)
    #[arg(long, value_name = "HEX")]
    pub foreground: Option<String>,

    /// Output color encoding
    #[arg(long, value_enum, default_value_t = ModeArg::Truecolor)]
    pub mode: ModeArg,

    /// Fade even if the terminal does not report support for the mode
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct InterpolateArgs {
    /// Background color (#RRGGBB)
    pub background: String,

    /// Foreground color (#RRGGBB)
    pub foreground: String,

    /// Weight of the foreground, 0.0 to 1.0
    #[arg(short, long, default_value_t = 0.5, allow_negative_numbers = true)]
    pub factor: f64,

    /// Print hex, RGB and HSL as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration as TOML
    Show,
    /// Print the config file location
    Path,
    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// `--mode` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// 24-bit RGB
    Truecolor,
    /// xterm 256-color palette
    #[value(name = "256")]
    Palette256,
    /// Basic 16 colors
    Default,
}

impl From<ModeArg> for ColorMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Truecolor => ColorMode::TrueColor,
            ModeArg::Palette256 => ColorMode::Palette256,
            ModeArg::Default => ColorMode::Default,
        }
    }
}
