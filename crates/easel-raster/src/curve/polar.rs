//! Ready-made radius functions for [`CurveSampler`](super::CurveSampler).

/// Constant radius: a circle.
pub fn circle(radius: f64) -> impl Fn(f64) -> f64 + Copy {
    move |_| radius
}

/// Axis-aligned ellipse with semi-axes `semi_x` (at θ = 0) and `semi_y`
/// (at θ = π/2), in polar form around its center.
pub fn ellipse(semi_x: f64, semi_y: f64) -> impl Fn(f64) -> f64 + Copy {
    move |theta: f64| {
        let denom = (semi_y * theta.cos()).hypot(semi_x * theta.sin());
        if denom == 0.0 { 0.0 } else { semi_x * semi_y / denom }
    }
}
