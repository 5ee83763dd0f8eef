use rand::Rng;

/// Axis-aligned box in screen coordinates: `(x, y)` is the top-left corner and
/// `y` grows downward.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }

    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }

    pub fn diagonal(&self) -> f32 {
        (self.width * self.width + self.height * self.height).sqrt()
    }

    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.left() && x <= self.right() && y >= self.top() && y <= self.bottom()
    }

    // Check that `inner` is fully contained in `self`, touching edges allowed
    pub fn contains_rectangle(&self, inner: &Rectangle) -> bool {
        self.left() <= inner.left()
            && self.right() >= inner.right()
            && self.top() <= inner.top()
            && self.bottom() >= inner.bottom()
    }

    pub fn overlaps_interior(&self, other: &Rectangle) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Index of the quadrant holding `(x, y)`.
    ///
    /// ```text
    /// +---+---+
    /// | 0 | 1 |
    /// +---+---+
    /// | 2 | 3 |
    /// +---+---+
    /// ```
    ///
    /// Points on the vertical split line go left, points on the horizontal
    /// split line go up, so ties always land in the lower index.
    pub fn quadrant_of(&self, x: f32, y: f32) -> usize {
        let right = (x > self.center_x()) as usize;
        let bottom = (y > self.center_y()) as usize;
        right | (bottom << 1)
    }

    /// Child box for quadrant `index` (see [`Rectangle::quadrant_of`]).
    ///
    /// The right and bottom halves take whatever is left after the split so
    /// the four quadrants tile `self` with no gap.
    pub fn quadrant(&self, index: usize) -> Rectangle {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        let mid_x = self.x + half_w;
        let mid_y = self.y + half_h;
        match index {
            0 => Rectangle::new(self.x, self.y, half_w, half_h),
            1 => Rectangle::new(mid_x, self.y, self.right() - mid_x, half_h),
            2 => Rectangle::new(self.x, mid_y, half_w, self.bottom() - mid_y),
            _ => Rectangle::new(
                mid_x,
                mid_y,
                self.right() - mid_x,
                self.bottom() - mid_y,
            ),
        }
    }

    pub fn quadrants(&self) -> [Rectangle; 4] {
        [
            self.quadrant(0),
            self.quadrant(1),
            self.quadrant(2),
            self.quadrant(3),
        ]
    }

    pub fn get_random_point_inside<R: Rng>(&self, rng: &mut R) -> (f32, f32) {
        (
            self._safe_randf32(rng, self.left(), self.right()),
            self._safe_randf32(rng, self.top(), self.bottom()),
        )
    }

    fn _safe_randf32<R: Rng>(&self, rng: &mut R, min: f32, max: f32) -> f32 {
        if min >= max {
            return min;
        }
        rng.gen_range(min..max)
    }
}

impl Default for Rectangle {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointMass {
    pub x: f32,
    pub y: f32,
    pub mass: f32,
}

impl PointMass {
    pub fn new(x: f32, y: f32, mass: f32) -> Self {
        Self { x, y, mass }
    }

    pub fn distance_sq(&self, x: f32, y: f32) -> f32 {
        let dx = self.x - x;
        let dy = self.y - y;
        dx * dx + dy * dy
    }
}
