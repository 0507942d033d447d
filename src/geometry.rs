//! Decision-line geometry for two-feature models.
//!
//! The line `w1*x + w2*y + bias = 0` is clipped to a rectangular window and
//! returned as two endpoints, ready to be drawn.
//!
//! ```rust
//! use linear_units::geometry::{boundary_points, Bounds};
//!
//! let (p1, p2) = boundary_points(1.0, 1.0, -1.5, &Bounds::default()).unwrap();
//! assert_eq!((p1.x, p1.y), (-10.0, 11.5));
//! assert_eq!((p2.x, p2.y), (10.0, -8.5));
//! ```

use crate::error::{LearnError, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The visible window. `x_min`/`x_max` bound sloped lines, `y_min`/`y_max`
/// bound vertical ones.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }

    fn validate(&self) -> Result<()> {
        let all_finite = [self.x_min, self.x_max, self.y_min, self.y_max]
            .iter()
            .all(|v| v.is_finite());
        if !all_finite {
            return Err(LearnError::invalid(format!("bounds must be finite, got {:?}", self)));
        }
        Ok(())
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new(-10.0, 10.0, -10.0, 10.0)
    }
}

/// Two endpoints of the line `w1*x + w2*y + bias = 0`.
///
/// With `w2 != 0` the line is evaluated at `x_min` and `x_max`. With `w2 == 0`
/// it is vertical at `x = -bias / w1` and spans `y_min..y_max`. Both
/// coefficients at zero is an error.
pub fn boundary_points(w1: f64, w2: f64, bias: f64, bounds: &Bounds) -> Result<(Point, Point)> {
    if !w1.is_finite() || !w2.is_finite() || !bias.is_finite() {
        return Err(LearnError::invalid(format!(
            "line coefficients must be finite, got w1={}, w2={}, bias={}",
            w1, w2, bias
        )));
    }
    bounds.validate()?;

    if w2 != 0.0 {
        let line_y = |x: f64| -(w1 / w2) * x - bias / w2;
        Ok((
            Point::new(bounds.x_min, line_y(bounds.x_min)),
            Point::new(bounds.x_max, line_y(bounds.x_max)),
        ))
    } else if w1 != 0.0 {
        let x = -bias / w1;
        Ok((Point::new(x, bounds.y_min), Point::new(x, bounds.y_max)))
    } else {
        Err(LearnError::DegenerateBoundary)
    }
}
