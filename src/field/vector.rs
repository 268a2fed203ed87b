//! Two-component vectors sampled from a flow field

/// A 2D vector stored at one pixel center of a flow field
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vec2 {
    /// Horizontal component
    pub x: f32,
    /// Vertical component (grows downward, matching row order)
    pub y: f32,
}

impl Vec2 {
    /// The zero vector, used as the singularity marker
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a vector from its components
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean length
    pub fn length(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// True only when both components are exactly zero
    pub const fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Scale to unit length
    ///
    /// Zero vectors carry no direction and are returned unchanged.
    #[must_use]
    pub fn normalized(self) -> Self {
        let length = self.length();
        if length == 0.0 {
            return self;
        }
        Self {
            x: self.x / length,
            y: self.y / length,
        }
    }

    /// Both components negated
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}
