//! Bounding boxes, points and directions supplied by the harness.
//!
//! Boxes are fractional (0.0–1.0 of the page); points are CSS pixels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_ANCHOR_OFFSET;
use crate::error::MarkError;
use crate::scroll::Axis;

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

/// A point in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Build a point from an `[x, y]` slice, rejecting other lengths and non-finite values.
    ///
    /// # Errors
    ///
    /// [`MarkError::InvalidLength`] or [`MarkError::InvalidCoordinate`].
    pub fn from_slice(values: &[f64]) -> Result<Self, MarkError> {
        let [x, y] = values else {
            return Err(MarkError::InvalidLength { expected: 2, found: values.len() });
        };
        Ok(Self { x: finite("x", *x)?, y: finite("y", *y)? })
    }
}

/// A rectangle given as fractions of the page: `(x1, y1)` top-left, `(x2, y2)` bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl BBox {
    /// # Errors
    ///
    /// [`MarkError::InvalidCoordinate`] if any value is NaN or infinite.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<Self, MarkError> {
        Ok(Self {
            x1: finite("x1", x1)?,
            y1: finite("y1", y1)?,
            x2: finite("x2", x2)?,
            y2: finite("y2", y2)?,
        })
    }

    /// Build a box from an `[x1, y1, x2, y2]` slice.
    ///
    /// # Errors
    ///
    /// [`MarkError::InvalidLength`] or [`MarkError::InvalidCoordinate`].
    pub fn from_slice(values: &[f64]) -> Result<Self, MarkError> {
        let [x1, y1, x2, y2] = values else {
            return Err(MarkError::InvalidLength { expected: 4, found: values.len() });
        };
        Self::new(*x1, *y1, *x2, *y2)
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Resolve the pixel point to act on inside this box.
    ///
    /// With no anchor the box center is used. An anchor moves the point toward
    /// that edge, `offset` (default 0.25) of the way in from it along one axis.
    /// The result is truncated toward zero like an integer cast.
    ///
    /// # Errors
    ///
    /// [`MarkError::InvalidCoordinate`] if `offset` is NaN or infinite.
    #[allow(clippy::cast_possible_truncation)]
    pub fn coordinate(
        &self,
        device: DeviceSize,
        anchor: Option<Direction>,
        offset: Option<f64>,
    ) -> Result<(i32, i32), MarkError> {
        let offset = finite("offset", offset.unwrap_or(DEFAULT_ANCHOR_OFFSET))?;
        let mut x = (self.x1 + self.x2) / 2.0;
        let mut y = (self.y1 + self.y2) / 2.0;
        match anchor {
            Some(Direction::Left) => x = self.x1 + self.width() * offset,
            Some(Direction::Right) => x = self.x2 - self.width() * offset,
            Some(Direction::Top) => y = self.y1 + self.height() * offset,
            Some(Direction::Bottom) => y = self.y2 - self.height() * offset,
            None => {}
        }
        Ok(((x * f64::from(device.width)) as i32, (y * f64::from(device.height)) as i32))
    }
}

/// Viewport size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSize {
    pub width: u32,
    pub height: u32,
}

impl DeviceSize {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// A side of the page: swipe direction, scroll edge or click anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Top,
    Bottom,
    Left,
    Right,
}

impl Direction {
    /// The scroll axis travelled when moving toward this side.
    #[must_use]
    pub fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = MarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(MarkError::InvalidDirection(s.to_owned())),
        }
    }
}

fn finite(field: &'static str, value: f64) -> Result<f64, MarkError> {
    if value.is_finite() { Ok(value) } else { Err(MarkError::InvalidCoordinate { field, value }) }
}
