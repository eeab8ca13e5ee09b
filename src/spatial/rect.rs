use crate::vector::Vector2;

/// Axis-aligned rectangle with closed edges, `min` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vector2,
    pub max: Vector2,
}

impl Rect {
    pub fn new(min: Vector2, max: Vector2) -> Self {
        Self { min, max }
    }

    // World rectangle anchored at the origin
    pub fn from_size(width: f32, height: f32) -> Self {
        Self::new(Vector2::ZERO, Vector2::new(width, height))
    }

    /// Square of side `2 * half_extent` centered on `center`.
    pub fn around(center: Vector2, half_extent: f32) -> Self {
        let offset = Vector2::new(half_extent, half_extent);
        Self::new(center - offset, center + offset)
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vector2 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn contains(&self, point: Vector2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// False only when `other` lies entirely to one side of `self` on either axis.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        !(other.max.x < self.min.x
            || other.min.x > self.max.x
            || other.max.y < self.min.y
            || other.min.y > self.max.y)
    }

    /// Splits at the midpoint of both axes: top-left, top-right, bottom-left, bottom-right.
    pub fn quadrants(&self) -> [Rect; 4] {
        let mid = self.center();
        [
            Rect::new(self.min, mid),
            Rect::new(Vector2::new(mid.x, self.min.y), Vector2::new(self.max.x, mid.y)),
            Rect::new(Vector2::new(self.min.x, mid.y), Vector2::new(mid.x, self.max.y)),
            Rect::new(mid, self.max),
        ]
    }
}
