/*
 * Vector Module
 *
 * This module defines Vector2, the small 2-D value type used for boid
 * positions, velocities and steering forces. It is Copy, so every operation
 * returns a new value and nothing is mutated behind a caller's back.
 *
 * Division by zero never panics or produces NaN:
 * - Dividing by a zero scalar yields the zero vector
 * - Normalizing the zero vector yields the zero vector
 */

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        // hypot stays finite where x * x + y * y would overflow
        self.x.hypot(self.y)
    }

    #[inline]
    pub fn distance_squared(self, other: Self) -> f32 {
        (self - other).length_squared()
    }

    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (self - other).length()
    }

    /// Returns `None` when `divisor` is zero instead of the zero vector.
    #[inline]
    pub fn checked_div(self, divisor: f32) -> Option<Self> {
        if divisor == 0.0 {
            None
        } else {
            Some(Self::new(self.x / divisor, self.y / divisor))
        }
    }

    // Unit vector in the same direction; a stationary boid has no heading
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    /// Rescales the vector to exactly `max` when it is longer than `max`.
    #[inline]
    pub fn clamp_length(self, max: f32) -> Self {
        let length = self.length();
        if length > max {
            self / length * max
        } else {
            self
        }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vector2 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector2 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vector2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for Vector2 {
    type Output = Self;

    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(self.x * scalar, self.y * scalar)
    }
}

impl Div<f32> for Vector2 {
    type Output = Self;

    #[inline]
    fn div(self, divisor: f32) -> Self {
        self.checked_div(divisor).unwrap_or(Self::ZERO)
    }
}

impl Neg for Vector2 {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}
