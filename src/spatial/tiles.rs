//! Tile catalog: the closed set of maze tile categories and their properties
//!
//! Authored level data stores categories as small integers (0-8). Everything
//! past the decoding boundary works with [`TileCategory`] so an unknown
//! category cannot reach the classification or resolution stages.

use serde::Serialize;
use std::fmt;

/// Maze tile category, in authored-code order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TileCategory {
    /// Open space with nothing drawn (code 0)
    Empty,
    /// Corner piece of the outer boundary wall (code 1)
    OutsideCorner,
    /// Straight piece of the outer boundary wall (code 2)
    OutsideWall,
    /// Corner piece of an interior wall block (code 3)
    InsideCorner,
    /// Straight piece of an interior wall block (code 4)
    InsideWall,
    /// Regular pellet (code 5)
    StandardPellet,
    /// Power pellet (code 6)
    PowerPellet,
    /// Junction where an interior wall meets the outer wall (code 7)
    TJunction,
    /// Gate of the ghost house (code 8)
    GhostWall,
}

/// Coarse shape family of a category, used to pick decision tables and sprites
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileShape {
    /// Nothing to draw
    Open,
    /// Rotationally symmetric pickup
    Pellet,
    /// Quarter-turn corner joining two perpendicular wall runs
    Corner,
    /// Straight wall run
    Wall,
    /// Three-way wall junction, oriented by mirroring
    Junction,
    /// Straight gate whose sprite is transposed relative to walls
    Gate,
}

impl TileCategory {
    /// Every category in code order
    pub const ALL: [Self; 9] = [
        Self::Empty,
        Self::OutsideCorner,
        Self::OutsideWall,
        Self::InsideCorner,
        Self::InsideWall,
        Self::StandardPellet,
        Self::PowerPellet,
        Self::TJunction,
        Self::GhostWall,
    ];

    /// Authored integer code of this category
    pub const fn code(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::OutsideCorner => 1,
            Self::OutsideWall => 2,
            Self::InsideCorner => 3,
            Self::InsideWall => 4,
            Self::StandardPellet => 5,
            Self::PowerPellet => 6,
            Self::TJunction => 7,
            Self::GhostWall => 8,
        }
    }

    /// Decode an authored integer code, `None` when it maps to no category
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Empty),
            1 => Some(Self::OutsideCorner),
            2 => Some(Self::OutsideWall),
            3 => Some(Self::InsideCorner),
            4 => Some(Self::InsideWall),
            5 => Some(Self::StandardPellet),
            6 => Some(Self::PowerPellet),
            7 => Some(Self::TJunction),
            8 => Some(Self::GhostWall),
            _ => None,
        }
    }

    /// Shape family of this category
    pub const fn shape(self) -> TileShape {
        match self {
            Self::Empty => TileShape::Open,
            Self::StandardPellet | Self::PowerPellet => TileShape::Pellet,
            Self::OutsideCorner | Self::InsideCorner => TileShape::Corner,
            Self::OutsideWall | Self::InsideWall => TileShape::Wall,
            Self::TJunction => TileShape::Junction,
            Self::GhostWall => TileShape::Gate,
        }
    }

    /// Whether characters can move through this cell
    pub const fn is_walkable(self) -> bool {
        matches!(
            self,
            Self::Empty | Self::StandardPellet | Self::PowerPellet
        )
    }

    /// Whether the drawn tile needs a rotation derived from its neighbors
    pub const fn needs_orientation(self) -> bool {
        matches!(
            self.shape(),
            TileShape::Corner | TileShape::Wall | TileShape::Gate
        )
    }

    /// Whether the drawn tile is oriented by mirroring instead of rotation
    pub const fn needs_mirroring(self) -> bool {
        matches!(self, Self::TJunction)
    }

    /// Whether this category anchors wall runs during classification
    ///
    /// Corners and junctions are fixed points that straight walls connect into.
    pub const fn is_anchor(self) -> bool {
        matches!(
            self,
            Self::OutsideCorner | Self::InsideCorner | Self::TJunction
        )
    }

    /// Whether this category is a straight wall whose run direction is inferred
    pub const fn is_wall_run(self) -> bool {
        matches!(self.shape(), TileShape::Wall)
    }

    /// Single character used in text dumps of a grid
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => ' ',
            Self::OutsideCorner => '+',
            Self::OutsideWall => '=',
            Self::InsideCorner => 'o',
            Self::InsideWall => '-',
            Self::StandardPellet => '.',
            Self::PowerPellet => '*',
            Self::TJunction => 'T',
            Self::GhostWall => '~',
        }
    }
}

impl TryFrom<u8> for TileCategory {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or(code)
    }
}

impl From<TileCategory> for u8 {
    fn from(category: TileCategory) -> Self {
        category.code()
    }
}

impl fmt::Display for TileCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Run direction inferred for a quadrant cell
///
/// Only corners, junctions and straight walls carry a tag other than
/// [`OrientationTag::NotApplicable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrientationTag {
    /// Pellets, empty space and gates
    #[default]
    NotApplicable,
    /// Corner or junction anchoring one or more wall runs
    Corner,
    /// Wall running top to bottom
    Vertical,
    /// Wall running left to right
    Horizontal,
}

impl OrientationTag {
    /// Whether a wall below this cell continues a vertical run through it
    pub const fn continues_vertical_run(self) -> bool {
        matches!(self, Self::Corner | Self::Vertical)
    }

    /// Single character used in the orientation map dump
    pub const fn glyph(self) -> char {
        match self {
            Self::NotApplicable => '.',
            Self::Corner => 'C',
            Self::Vertical => 'V',
            Self::Horizontal => 'H',
        }
    }
}

impl fmt::Display for OrientationTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
