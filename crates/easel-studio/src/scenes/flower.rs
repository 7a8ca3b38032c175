use anyhow::Result;
use easel_raster::curve::polar;
use easel_raster::{Circle, Color, CurveSampler, LineAlgorithm, PixelCanvas, Point};

const SIZE: u32 = 500;
const CENTER_RADIUS: i32 = 20;
const PETALS: u32 = 8;
const PETAL_WIDTH: f64 = 30.0;
const PETAL_HEIGHT: f64 = 50.0;
/// Petals are centered this far above the flower center.
const PETAL_RISE: i32 = 60;
const PETAL_SAMPLES: usize = 100;

/// Filled center disc with eight elliptical petals rotated in 45° steps.
pub fn render() -> Result<PixelCanvas> {
    let mut canvas = PixelCanvas::new(SIZE, SIZE, Color::WHITE);
    let center = Point::new(SIZE as i32 / 2, SIZE as i32 / 2);

    canvas.draw_circle(Circle::filled(center, CENTER_RADIUS), Color::BLACK)?;

    let petal_center = center.offset(0, -PETAL_RISE);
    for i in 0..PETALS {
        let rotation = f64::from(i * 360 / PETALS).to_radians();
        let outline = CurveSampler::new(polar::ellipse(PETAL_WIDTH, PETAL_HEIGHT))
            .sample_count(PETAL_SAMPLES)
            .rotation(rotation)
            .center(petal_center)
            .sample()?;
        canvas.draw_closed_polyline(outline.points(), Color::BLACK, LineAlgorithm::Parametric);
    }

    log::debug!("flower: {PETALS} petals around {center:?}");
    Ok(canvas)
}
