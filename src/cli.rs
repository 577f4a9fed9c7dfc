use clap::{Args, Parser, Subcommand};

use crate::config::OutputFormat;
use crate::space::ColorFormat;

#[derive(Parser)]
#[command(
    name = "hue-picker",
    version,
    about = "Pick colors on a hue slider and gradient canvas, convert between RGB, Hex, HSL, HSV and HSI"
)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Canvas width (overrides the config file)
    #[arg(long, global = true)]
    pub width: Option<f64>,

    /// Canvas height (overrides the config file)
    #[arg(long, global = true)]
    pub height: Option<f64>,

    /// Print reports as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Color at a hue slider position (0-1529)
    Slider {
        position: u16,
        /// Cursor x on the canvas (default: right edge)
        #[arg(long, allow_negative_numbers = true)]
        x: Option<f64>,
        /// Cursor y on the canvas (default: top edge)
        #[arg(long, allow_negative_numbers = true)]
        y: Option<f64>,
    },
    /// Color under a point on the canvas
    Pick {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        /// Hue slider position (default: 0, red)
        #[arg(long, default_value_t = 0)]
        slider: u16,
    },
    /// Parse a color and print it in every format
    Convert {
        text: String,
        /// Input format (detected when omitted)
        #[arg(long, value_enum)]
        from: Option<ColorFormat>,
    },
    /// Convert a hexadecimal number to decimal
    Hex2dec { text: String },
    /// Convert a decimal number to hexadecimal
    Dec2hex {
        #[arg(allow_negative_numbers = true)]
        text: String,
    },
    /// Interactive session reading commands from stdin (default)
    Session,
    /// Show or change the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the effective config
    Show,
    /// Print the config file location
    Path,
    /// Update and save config values
    Set(ConfigSetArgs),
}

#[derive(Args)]
pub struct ConfigSetArgs {
    /// Canvas width
    #[arg(long = "canvas-width")]
    pub canvas_width: Option<f64>,
    /// Canvas height
    #[arg(long = "canvas-height")]
    pub canvas_height: Option<f64>,
    /// Report output format
    #[arg(long, value_enum)]
    pub output: Option<OutputFormat>,
}
