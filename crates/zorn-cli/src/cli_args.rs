//! CLI argument definitions for the zorn command-line interface.
//!
//! All `#[derive(Parser)]`, `#[derive(Args)]` and `#[derive(Subcommand)]`
//! types are defined here, keeping `main.rs` focused on dispatch logic.

use clap::{Args, Parser, Subcommand};
use zorn_cli::input::ConfigOverrides;
use zorn_spec::BrushModel;

/// Zorn - paint note sequences as animated canvases
#[derive(Parser)]
#[command(name = "zorn")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Note list, config file and per-field overrides shared by every command.
#[derive(Args, Debug, Clone)]
pub(crate) struct InputArgs {
    /// Path to the note list (JSON array of notes)
    #[arg(short, long)]
    pub notes: String,

    /// Path to a render config file (JSON)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override frames per second
    #[arg(long)]
    pub fps: Option<u32>,

    /// Override frame width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Override frame height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Override the random seed
    #[arg(long)]
    pub seed: Option<u32>,

    /// Override the brush model (simple, bristle)
    #[arg(long)]
    pub brush: Option<BrushModel>,
}

impl InputArgs {
    pub fn to_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            fps: self.fps,
            width: self.width,
            height: self.height,
            seed: self.seed,
            brush: self.brush,
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render every frame of a piece to numbered PNG files
    Render {
        #[command(flatten)]
        input: InputArgs,

        /// Output directory for frame_NNNNN.png files
        #[arg(short, long)]
        out: String,

        /// First frame to render
        #[arg(long, default_value_t = 0)]
        start: usize,

        /// One past the last frame to render (default: end of piece)
        #[arg(long)]
        end: Option<usize>,

        /// Number of worker threads (default: all cores)
        #[arg(short, long)]
        jobs: Option<usize>,
    },

    /// Render a single frame to a PNG file
    Frame {
        #[command(flatten)]
        input: InputArgs,

        /// Frame number to render
        #[arg(long)]
        index: usize,

        /// Output PNG path
        #[arg(long)]
        out: String,
    },

    /// Print the draw intents of one frame as JSON
    Intents {
        #[command(flatten)]
        input: InputArgs,

        /// Frame number to render
        #[arg(long)]
        index: usize,

        /// Output file path (default: stdout)
        #[arg(long)]
        output: Option<String>,

        /// Pretty-print the output JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Print the musical analysis of a note list
    Analyze {
        #[command(flatten)]
        input: InputArgs,

        /// Output file path (default: stdout)
        #[arg(long)]
        output: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Validate a note list and config without rendering
    Validate {
        #[command(flatten)]
        input: InputArgs,
    },
}
