use easel_raster::{Color, LineAlgorithm, PixelCanvas, Point};

const SIZE: u32 = 500;

/// Degrees north and east.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

const fn ll(lat: f64, lon: f64) -> LatLon {
    LatLon { lat, lon }
}

/// Coarse New Jersey border, clockwise from the northern tip.
pub const NEW_JERSEY: [LatLon; 20] = [
    ll(41.3571, -74.6957),
    ll(41.1851, -74.7918),
    ll(40.9975, -75.1419),
    ll(40.8391, -75.0800),
    ll(40.6255, -75.2047),
    ll(40.4637, -74.9855),
    ll(40.2223, -74.7733),
    ll(39.9639, -75.1348),
    ll(39.8465, -75.1405),
    ll(39.7211, -75.3866),
    ll(39.4022, -75.5641),
    ll(38.9398, -74.9067),
    ll(39.2276, -74.5861),
    ll(39.4501, -74.3176),
    ll(39.6394, -74.0454),
    ll(40.0363, -74.1182),
    ll(40.2231, -73.9884),
    ll(40.4698, -73.9951),
    ll(40.5438, -74.1454),
    ll(40.8351, -74.3802),
];

/// Shifts coordinates so the southernmost latitude and westernmost longitude
/// become zero, scales by `scale` pixels per degree and flips y so north is up.
/// Fractions are truncated.
pub fn project(coords: &[LatLon], scale: f64, height: u32) -> Vec<Point> {
    let min_lat = coords.iter().map(|c| c.lat).fold(f64::INFINITY, f64::min);
    let min_lon = coords.iter().map(|c| c.lon).fold(f64::INFINITY, f64::min);

    coords
        .iter()
        .map(|c| {
            let x = ((c.lon - min_lon) * scale) as i32;
            let y = ((c.lat - min_lat) * scale) as i32;
            Point::new(x, height as i32 - y)
        })
        .collect()
}

/// Closed outline of [`NEW_JERSEY`] on a white 500×500 canvas.
pub fn render(scale: f64) -> PixelCanvas {
    let mut canvas = PixelCanvas::new(SIZE, SIZE, Color::WHITE);
    let points = project(&NEW_JERSEY, scale, SIZE);
    for p in &points {
        log::debug!("outline: vertex {p:?}");
    }
    canvas.draw_closed_polyline(points, Color::BLACK, LineAlgorithm::Incremental);
    canvas
}
