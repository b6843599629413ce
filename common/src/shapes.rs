use rand::Rng;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Vector2 {
    pub x: i32,
    pub y: i32,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Size2 {
    pub width: i32,
    pub height: i32,
}

impl Size2 {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned integer rectangle stored as a lower-left origin and a size.
///
/// `right()` and `top()` are exclusive edges: a rectangle at `(0, 0)` with
/// size `10 x 10` covers `x` in `0..10`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub vector: Vector2,
    pub size: Size2,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            vector: Vector2 { x, y },
            size: Size2 { width, height },
        }
    }

    pub const fn from_parts(vector: Vector2, size: Size2) -> Self {
        Self { vector, size }
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    pub fn left(&self) -> i32 {
        self.vector.x
    }

    /// Saturates instead of overflowing for rectangles reaching past `i32::MAX`.
    pub fn right(&self) -> i32 {
        self.vector.x.saturating_add(self.size.width)
    }

    pub fn bottom(&self) -> i32 {
        self.vector.y
    }

    pub fn top(&self) -> i32 {
        self.vector.y.saturating_add(self.size.height)
    }

    /// Corners in lower-left, lower-right, upper-left, upper-right order.
    ///
    /// Widened to `i64` so the far edges never overflow.
    pub fn corners(&self) -> [(i64, i64); 4] {
        let left = self.vector.x as i64;
        let bottom = self.vector.y as i64;
        let right = left + self.size.width as i64;
        let top = bottom + self.size.height as i64;
        [(left, bottom), (right, bottom), (left, top), (right, top)]
    }

    /// Random rectangle of `size` placed fully inside `self`.
    pub fn random_inside<R: Rng>(&self, size: Size2, rng: &mut R) -> Rect {
        Rect::from_parts(
            Vector2::new(
                safe_rand_i32(rng, self.left(), self.right().saturating_sub(size.width)),
                safe_rand_i32(rng, self.bottom(), self.top().saturating_sub(size.height)),
            ),
            size,
        )
    }
}

fn safe_rand_i32<R: Rng>(rng: &mut R, min: i32, max: i32) -> i32 {
    if min >= max {
        return min;
    }
    rng.gen_range(min..max)
}
