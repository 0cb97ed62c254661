use crate::core::{Area, AreaReport, Shape};
use crate::utils::error::{AreaError, Result};
use std::ops::Mul;

/// Fixed approximation of π used for circle areas.
///
/// Kept at five decimals; swapping in `std::f64::consts::PI` changes results.
pub const PI_APPROX: f64 = 3.14159;

/// Area of a square of side `x`. Stays in the input's numeric type.
pub fn square_area<T>(x: T) -> T
where
    T: Mul<Output = T> + Copy,
{
    x * x
}

/// Area of a circle of radius `r`.
pub fn circle_area<T: Into<f64>>(r: T) -> f64 {
    let r = r.into();
    PI_APPROX * (r * r)
}

pub fn checked_square_area(width: i64) -> Result<i64> {
    width
        .checked_mul(width)
        .ok_or(AreaError::Overflow { width })
}

impl Area for Shape {
    fn area(&self) -> f64 {
        match *self {
            Shape::Square { width } => square_area(width),
            Shape::Circle { radius } => circle_area(radius),
        }
    }
}

impl From<Shape> for AreaReport {
    fn from(shape: Shape) -> Self {
        Self {
            area: shape.area(),
            shape,
        }
    }
}
