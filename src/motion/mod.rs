pub mod carousel;
pub mod count_up;
pub mod parallax;
pub mod proximity;
pub mod scroll;
pub mod smooth_scroll;
pub mod visibility;

use std::ops::{Add, Mul, Sub};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MotionError {
    #[error("a range map needs at least two stops, got {0}")]
    TooFewStops(usize),
    #[error("range map input and output stop counts differ ({inputs} vs {outputs})")]
    StopCountMismatch { inputs: usize, outputs: usize },
    #[error("range map inputs must be strictly increasing")]
    InputsNotIncreasing,
    #[error("a carousel needs at least one item")]
    EmptyCarousel,
    #[error("unknown scroll offset `{0}`")]
    UnknownOffset(String),
}

/// Reduced-motion signal, read once at the app root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MotionPreference {
    reduced: bool,
}

impl MotionPreference {
    pub fn new(reduced: bool) -> Self {
        Self { reduced }
    }

    pub fn reduced(self) -> bool {
        self.reduced
    }

    pub fn allows_motion(self) -> bool {
        !self.reduced
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

pub fn lerp(start: f64, end: f64, factor: f64) -> f64 {
    start + (end - start) * factor
}
