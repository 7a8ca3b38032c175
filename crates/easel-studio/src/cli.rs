use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::scenes::formation::Formation;

/// Render calendars, formation sheets and drawings to PNG.
#[derive(Parser, Debug)]
#[command(name = "easel-studio")]
#[command(version)]
pub struct Cli {
    /// Log filter in env_logger syntax (falls back to RUST_LOG, then "info")
    #[arg(long, global = true)]
    pub log: Option<String>,

    /// TrueType/OpenType font used for labels; labels are skipped without it
    #[arg(long, global = true)]
    pub font: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Month calendar grid
    Calendar {
        /// Month (1-12), defaults to the current month
        #[arg(long)]
        month: Option<u32>,

        /// Year, defaults to the current year
        #[arg(long, allow_negative_numbers = true)]
        year: Option<i32>,

        #[arg(short, long, default_value = "calendar.png")]
        out: PathBuf,
    },

    /// Soccer formation sheets from a CSV roster on stdin (header row first)
    Formation {
        /// Length of the game in minutes
        #[arg(short = 't', long = "time", default_value_t = 52)]
        minutes: u32,

        /// Formation
        #[arg(short, long, value_enum, default_value = "322")]
        formation: Formation,

        #[arg(short, long, default_value = "soccer_fields.png")]
        out: PathBuf,
    },

    /// Eight-petal flower drawn from polar curves
    Flower {
        #[arg(short, long, default_value = "simple_flower_no_lib.png")]
        out: PathBuf,
    },

    /// Square contact sheet of the PNG/JPEG images in a directory
    Stitch {
        /// Directory to read images from
        dir: PathBuf,

        /// Padding around each image in pixels
        #[arg(long, default_value_t = 5)]
        border: u32,

        #[arg(short, long, default_value = "stitched_images.png")]
        out: PathBuf,
    },

    /// New Jersey border outline
    Outline {
        /// Pixels per degree of latitude/longitude
        #[arg(long, default_value_t = 200.0)]
        scale: f64,

        #[arg(short, long, default_value = "new_jersey_outline.png")]
        out: PathBuf,
    },
}
