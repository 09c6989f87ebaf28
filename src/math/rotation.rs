//! Quarter-turn rotations and axis mirroring for tile sprites
//!
//! Rotations are counter-clockwise in world space, where y points up. Pixel
//! helpers work in image space (y pointing down) so a counter-clockwise turn
//! on screen moves the top-right pixel of a sprite to its top-left.

use serde::Serialize;

/// Rotation of a tile sprite in quarter turns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "u16")]
pub enum Rotation {
    /// No rotation
    #[default]
    Deg0,
    /// Quarter turn counter-clockwise
    Deg90,
    /// Half turn
    Deg180,
    /// Three quarter turns counter-clockwise
    Deg270,
}

impl Rotation {
    /// Angle in degrees
    pub const fn degrees(self) -> u16 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// Number of counter-clockwise quarter turns
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 1,
            Self::Deg180 => 2,
            Self::Deg270 => 3,
        }
    }

    /// Rotation for an angle in degrees, `None` unless it is a multiple of 90
    pub const fn from_degrees(degrees: u16) -> Option<Self> {
        match degrees % 360 {
            0 => Some(Self::Deg0),
            90 => Some(Self::Deg90),
            180 => Some(Self::Deg180),
            270 => Some(Self::Deg270),
            _ => None,
        }
    }

    /// Map a pixel of the rotated sprite back to the unrotated sprite
    ///
    /// `size` is the side length of the square sprite; coordinates outside it
    /// are not meaningful.
    pub const fn source_pixel(self, x: u32, y: u32, size: u32) -> (u32, u32) {
        let last = size.saturating_sub(1);
        match self {
            Self::Deg0 => (x, y),
            Self::Deg90 => (last.saturating_sub(y), x),
            Self::Deg180 => (last.saturating_sub(x), last.saturating_sub(y)),
            Self::Deg270 => (y, last.saturating_sub(x)),
        }
    }
}

impl From<Rotation> for u16 {
    fn from(rotation: Rotation) -> Self {
        rotation.degrees()
    }
}

/// Per-axis mirror signs applied as a sprite scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Mirror {
    x: i8,
    y: i8,
}

impl Mirror {
    /// No mirroring, `(+1, +1)`
    pub const IDENTITY: Self = Self { x: 1, y: 1 };
    /// Mirrored left to right, `(-1, +1)`
    pub const FLIP_X: Self = Self { x: -1, y: 1 };
    /// Mirrored on both axes, `(-1, -1)`
    pub const FLIP_XY: Self = Self { x: -1, y: -1 };
    /// Mirrored top to bottom, `(+1, -1)`
    pub const FLIP_Y: Self = Self { x: 1, y: -1 };

    /// Sign applied along the horizontal axis
    pub const fn x(self) -> i8 {
        self.x
    }

    /// Sign applied along the vertical axis
    pub const fn y(self) -> i8 {
        self.y
    }

    /// Signs as a `(x, y)` pair
    pub const fn signs(self) -> (i8, i8) {
        (self.x, self.y)
    }

    /// Whether both signs are positive
    pub const fn is_identity(self) -> bool {
        self.x > 0 && self.y > 0
    }

    /// Map a pixel of the mirrored sprite back to the unmirrored sprite
    ///
    /// The world y axis points up while image rows point down, but a
    /// reflection is its own inverse, so the flip is the same in both spaces.
    pub const fn source_pixel(self, x: u32, y: u32, size: u32) -> (u32, u32) {
        let last = size.saturating_sub(1);
        let x = if self.x < 0 { last.saturating_sub(x) } else { x };
        let y = if self.y < 0 { last.saturating_sub(y) } else { y };
        (x, y)
    }
}

impl Default for Mirror {
    fn default() -> Self {
        Self::IDENTITY
    }
}
