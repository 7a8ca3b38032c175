use anyhow::{bail, Context, Result};
use chrono::{Datelike, NaiveDate};
use easel_raster::{Color, Grid, LineAlgorithm, PixelCanvas, Point, Stroke};

use crate::labels::Labeler;

const MARGIN: i32 = 40;
const TOP_OFFSET: i32 = 10;
const CAL_WIDTH: u32 = 400;
const CAL_HEIGHT: u32 = 300;
const COLS: u32 = 7;
const ROWS: u32 = 5;
const LABEL_SIZE: f32 = 14.0;

const DAY_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// First day and length of a month.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MonthInfo {
    pub first: NaiveDate,
    /// Weekday of the 1st, 0 = Sunday.
    pub start_weekday: u32,
    pub num_days: u32,
}

impl MonthInfo {
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            bail!("invalid month {month}, expected 1-12");
        }
        if year < 0 {
            bail!("invalid year {year}, expected a non-negative year");
        }

        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .with_context(|| format!("{year}-{month:02} is out of range"))?;
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .with_context(|| format!("month after {year}-{month:02} is out of range"))?;

        Ok(Self {
            first,
            start_weekday: first.weekday().num_days_from_sunday(),
            num_days: (next - first).num_days() as u32,
        })
    }

    /// "March 2024", with the year unpadded ("May 5").
    pub fn title(&self) -> String {
        format!("{} {}", self.first.format("%B"), self.first.year())
    }

    /// `(day, col, row)` for every day that fits the 5-row grid.
    pub fn day_cells(&self) -> Vec<(u32, u32, u32)> {
        (1..=self.num_days)
            .map(|day| {
                let slot = self.start_weekday + day - 1;
                (day, slot % COLS, slot / COLS)
            })
            .take_while(|&(_, _, row)| row < ROWS)
            .collect()
    }
}

fn grid() -> Grid {
    Grid::new(
        Point::new(MARGIN, MARGIN + TOP_OFFSET),
        COLS,
        ROWS,
        CAL_WIDTH / COLS,
        CAL_HEIGHT / ROWS,
    )
}

/// Renders the month grid with its title, weekday header and day numbers.
pub fn render(info: &MonthInfo, labels: &mut Labeler) -> PixelCanvas {
    let width = CAL_WIDTH + 2 * MARGIN as u32;
    let height = CAL_HEIGHT + 2 * MARGIN as u32;
    let mut canvas = PixelCanvas::new(width, height, Color::WHITE);

    let grid = grid();
    canvas.draw_grid(&grid, &Stroke::new(Color::BLACK).algorithm(LineAlgorithm::Parametric));

    labels.label(&mut canvas, &info.title(), Point::new(MARGIN + 5, 20), LABEL_SIZE);

    for (col, name) in (0..).zip(DAY_NAMES) {
        let cell = grid.cell_origin(col, 0);
        labels.label(&mut canvas, name, cell.offset(5, -5), LABEL_SIZE);
    }

    for (day, col, row) in info.day_cells() {
        let cell = grid.cell_origin(col, row);
        labels.label(&mut canvas, &day.to_string(), cell.offset(5, 15), LABEL_SIZE);
    }

    log::debug!("calendar: {} with {} days", info.title(), info.num_days);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── month info ────────────────────────────────────────────────────────

    #[test]
    fn march_2024() {
        let info = MonthInfo::new(2024, 3).unwrap();
        assert_eq!(info.start_weekday, 5); // Friday
        assert_eq!(info.num_days, 31);
        assert_eq!(info.title(), "March 2024");
    }

    #[test]
    fn early_years_are_not_zero_padded() {
        assert_eq!(MonthInfo::new(5, 5).unwrap().title(), "May 5");
        assert_eq!(MonthInfo::new(999, 1).unwrap().title(), "January 999");
    }

    #[test]
    fn leap_february() {
        assert_eq!(MonthInfo::new(2024, 2).unwrap().num_days, 29);
        assert_eq!(MonthInfo::new(2023, 2).unwrap().num_days, 28);
    }

    #[test]
    fn december_rolls_into_next_year() {
        assert_eq!(MonthInfo::new(2023, 12).unwrap().num_days, 31);
    }

    #[test]
    fn rejects_bad_month_and_year() {
        assert!(MonthInfo::new(2024, 0).is_err());
        assert!(MonthInfo::new(2024, 13).is_err());
        assert!(MonthInfo::new(-1, 5).is_err());
    }

    // ── cells ─────────────────────────────────────────────────────────────

    #[test]
    fn day_cells_start_at_weekday() {
        let cells = MonthInfo::new(2024, 3).unwrap().day_cells();
        assert_eq!(cells[0], (1, 5, 0));
        assert_eq!(cells[2], (3, 0, 1));
    }

    #[test]
    fn overflowing_days_are_dropped() {
        // March 2024 needs six rows; the 31st (and 30th) fall off the grid.
        let cells = MonthInfo::new(2024, 3).unwrap().day_cells();
        assert_eq!(cells.len(), 30);
        assert_eq!(cells.last(), Some(&(30, 6, 4)));
    }

    // ── render ────────────────────────────────────────────────────────────

    #[test]
    fn render_draws_grid_lines() {
        let info = MonthInfo::new(2024, 3).unwrap();
        let canvas = render(&info, &mut Labeler::disabled());

        assert_eq!((canvas.width(), canvas.height()), (480, 380));
        // Top-left corner of the grid and a vertical line at the third column.
        assert_eq!(canvas.get(40, 50), Some(Color::BLACK));
        assert_eq!(canvas.get(40 + 2 * 57, 200), Some(Color::BLACK));
        // Horizontal line under the first row.
        assert_eq!(canvas.get(100, 110), Some(Color::BLACK));
        // Cell interior and margin stay white.
        assert_eq!(canvas.get(70, 80), Some(Color::WHITE));
        assert_eq!(canvas.get(10, 10), Some(Color::WHITE));
    }
}
