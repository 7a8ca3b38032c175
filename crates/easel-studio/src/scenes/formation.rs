use anyhow::Result;
use easel_raster::{Circle, Color, LineAlgorithm, PixelCanvas, Point, Rect, Stroke, ThickMode};

use crate::labels::Labeler;

const FIELD_WIDTH: i32 = 400;
const FIELD_HEIGHT: i32 = 300;
const TEXT_COLUMN: i32 = 300;
const LINE_THICKNESS: u32 = 3;
const GOAL_BOX: i32 = 60;
const PLAYER_RADIUS: i32 = 10;
const MAX_PERIODS: usize = 8;
const PERIODS_PER_COLUMN: usize = 4;
const COLUMNS: usize = 2;

const NAME_SIZE: f32 = 14.0;
const CHANGES_SIZE: f32 = 18.0;

/// Supported player arrangements (defenders, midfielders, forwards).
#[derive(Debug, Copy, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum Formation {
    #[value(name = "322")]
    ThreeTwoTwo,
    #[value(name = "331")]
    ThreeThreeOne,
}

/// A player slot on the field.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Position {
    pub symbol: &'static str,
    pub at: Point,
}

impl Formation {
    /// Slots for a field whose top-left corner is `origin`, goalkeeper first.
    pub fn positions(self, origin: Point) -> Vec<Position> {
        let (w, h) = (FIELD_WIDTH, FIELD_HEIGHT);
        let slots: [(&'static str, i32, i32); 8] = match self {
            Formation::ThreeTwoTwo => [
                ("GK", w / 20, h / 2),
                ("LB", w / 4, h / 4),
                ("CB", w / 4, h / 2),
                ("RB", w / 4, h * 3 / 4),
                ("LM", w * 4 / 8, h * 3 / 8),
                ("RM", w * 4 / 8, h * 5 / 8),
                ("LF", w * 6 / 8, h * 3 / 8),
                ("RF", w * 6 / 8, h * 5 / 8),
            ],
            Formation::ThreeThreeOne => [
                ("GK", w / 20, h / 2),
                ("LB", w / 4, h / 2),
                ("CB", w / 4, h / 4),
                ("RB", w / 4, h * 3 / 4),
                ("LM", w * 4 / 8, h / 2),
                ("CM", w * 4 / 8, h / 4),
                ("RM", w * 4 / 8, h * 3 / 4),
                ("ST", w * 6 / 8, h / 2),
            ],
        };
        slots
            .into_iter()
            .map(|(symbol, x, y)| Position { symbol, at: origin.offset(x, y) })
            .collect()
    }
}

/// Splits CSV text into rows of trimmed cells, skipping blank lines.
pub fn parse_roster(input: &str) -> Vec<Vec<String>> {
    input
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split(',').map(|cell| cell.trim().to_string()).collect())
        .collect()
}

/// Elapsed game time at the end of `period` as `MM:SS`, carrying whole
/// minutes out of the seconds.
pub fn game_clock(period: usize, total_periods: usize, total_minutes: u32) -> String {
    let fraction = if period == 0 || total_periods == 0 {
        0.0
    } else {
        period as f64 / total_periods as f64
    };
    let seconds = (fraction * f64::from(total_minutes) * 60.0).round() as u64;
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Substitution lines for period `i` (1-based; row 0 is the header).
///
/// The first period lists players who will be replaced in the second.
/// Later periods list `"POS name for previous"` for every changed slot,
/// with names padded to a common width.
pub fn substitutions(rows: &[Vec<String>], i: usize, positions: &[Position]) -> Vec<String> {
    let Some(row) = rows.get(i) else { return Vec::new() };

    if i == 1 {
        let Some(next) = rows.get(2) else { return Vec::new() };
        return row
            .iter()
            .zip(next)
            .filter(|(now, later)| now != later)
            .map(|(now, _)| now.clone())
            .collect();
    }

    if i == 0 {
        return Vec::new();
    }
    let prev = &rows[i - 1];

    let changed: Vec<(usize, &String, &String)> = row
        .iter()
        .zip(prev)
        .enumerate()
        .filter(|(_, (now, before))| now != before)
        .map(|(idx, (now, before))| (idx, now, before))
        .collect();
    let width = changed.iter().map(|(_, now, _)| now.chars().count()).max().unwrap_or(0);

    changed
        .into_iter()
        .map(|(idx, now, before)| {
            let pos = positions.get(idx).map_or("", |p| p.symbol);
            format!("{pos} {now:<width$} for {before}")
        })
        .collect()
}

fn draw_field(canvas: &mut PixelCanvas, origin: Point) -> Result<()> {
    let (w, h) = (FIELD_WIDTH, FIELD_HEIGHT);
    let thin = Stroke::new(Color::BLACK).algorithm(LineAlgorithm::Parametric);
    let outline = thin.width(LINE_THICKNESS).mode(ThickMode::DiagonalOffset);

    canvas.stroke_rect(Rect::from_origin_size(origin, w as u32, h as u32), &outline);
    canvas.draw_circle(Circle::ring(origin.offset(w / 2, h / 2), h / 5), Color::BLACK)?;

    let line = |canvas: &mut PixelCanvas, x0: i32, y0: i32, x1: i32, y1: i32| {
        canvas.draw_thick_line(origin.offset(x0, y0), origin.offset(x1, y1), &thin);
    };

    // Center line.
    line(canvas, w / 2, 0, w / 2, h);

    // Goal boxes.
    for (goal_x, box_x) in [(0, GOAL_BOX), (w, w - GOAL_BOX)] {
        line(canvas, goal_x, GOAL_BOX, box_x, GOAL_BOX);
        line(canvas, box_x, GOAL_BOX, box_x, h - GOAL_BOX);
        line(canvas, goal_x, h - GOAL_BOX, box_x, h - GOAL_BOX);
    }
    Ok(())
}

/// Renders up to eight periods, four per column, each with a field, the
/// players of that period, and the clock and substitutions beside it.
pub fn render(
    rows: &[Vec<String>],
    formation: Formation,
    game_minutes: u32,
    labels: &mut Labeler,
) -> Result<PixelCanvas> {
    let block_w = FIELD_WIDTH + TEXT_COLUMN;
    let width = (block_w * COLUMNS as i32) as u32;
    let height = (FIELD_HEIGHT * PERIODS_PER_COLUMN as i32) as u32;
    let mut canvas = PixelCanvas::new(width, height, Color::WHITE);

    let total_periods = rows.len().saturating_sub(1);
    let player_color = Color::gray(128);

    for i in 1..=total_periods.min(MAX_PERIODS) {
        let col = ((i - 1) / PERIODS_PER_COLUMN) as i32;
        let row = ((i - 1) % PERIODS_PER_COLUMN) as i32;
        let origin = Point::new(col * block_w, row * FIELD_HEIGHT);

        draw_field(&mut canvas, origin)?;

        let positions = formation.positions(origin);
        for (slot, name) in positions.iter().zip(&rows[i]) {
            canvas.draw_circle(Circle::filled(slot.at, PLAYER_RADIUS), player_color)?;
            labels.label(&mut canvas, name, slot.at, NAME_SIZE);
        }

        labels.label(&mut canvas, &i.to_string(), origin.offset(10, FIELD_HEIGHT - 10), NAME_SIZE);

        let text_x = FIELD_WIDTH + 10;
        let clock = [game_clock(i, total_periods, game_minutes)];
        labels.lines(&mut canvas, &clock, origin.offset(text_x, FIELD_HEIGHT - 10), CHANGES_SIZE);

        let subs = substitutions(rows, i, &positions);
        if !subs.is_empty() {
            labels.lines(&mut canvas, &subs, origin.offset(text_x, 20), CHANGES_SIZE);
        }
        log::debug!("formation: period {i}, {} substitutions", subs.len());
    }

    Ok(canvas)
}
