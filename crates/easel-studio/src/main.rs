mod cli;
mod labels;
mod scenes;

use std::io::Read;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use easel_engine::{init_logging, save_png, LoggingConfig};

use cli::{Cli, Commands};
use labels::Labeler;
use scenes::{calendar, flower, formation, outline, stitch};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(LoggingConfig { env_filter: cli.log.clone(), ..LoggingConfig::default() });

    let font = cli.font.as_deref();

    match cli.command {
        Commands::Calendar { month, year, out } => {
            let today = chrono::Local::now().date_naive();
            let info = calendar::MonthInfo::new(
                year.unwrap_or_else(|| today.year()),
                month.unwrap_or_else(|| today.month()),
            )?;
            let mut labels = Labeler::from_font_path(font)?;
            save_png(&calendar::render(&info, &mut labels), &out)?;
        }

        Commands::Formation { minutes, formation: kind, out } => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input).context("failed to read roster from stdin")?;
            let rows = formation::parse_roster(&input);
            if rows.len() < 2 {
                anyhow::bail!("roster needs a header row and at least one period");
            }
            let mut labels = Labeler::from_font_path(font)?;
            let canvas = formation::render(&rows, kind, minutes, &mut labels)?;
            save_png(&canvas, &out)?;
        }

        Commands::Flower { out } => {
            save_png(&flower::render()?, &out)?;
        }

        Commands::Stitch { dir, border, out } => {
            if let Some(sheet) = stitch::render(&dir, border)? {
                save_png(&sheet, &out)?;
            }
        }

        Commands::Outline { scale, out } => {
            save_png(&outline::render(scale), &out)?;
        }
    }

    Ok(())
}
