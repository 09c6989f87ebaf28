//! Per-tile rotation and mirror resolution
//!
//! Each drawable cell looks at the orientation tags of its four neighbors in
//! the mirrored level and picks a sprite transform from a decision table.
//! Tables are evaluated as a two-stage cascade: a default stage that mostly
//! reacts to neighboring corners, then an override stage keyed on the actual
//! connecting wall runs. An override that matches always replaces the
//! default. Each stage is first-match-wins, and a cascade whose stages both
//! miss yields its fallback, so every cell resolves to some transform.
//!
//! Some default rules can never survive for a corner with wall runs on two
//! sides, since an override matches first. They still decide corners that sit
//! against other corners or the grid edge and are kept as written.

use serde::Serialize;

use crate::algorithm::mirror::MirroredLevel;
use crate::math::rotation::{Mirror, Rotation};
use crate::spatial::grid::{OrientationGrid, Probe, QuadrantGrid, Side, TileGrid};
use crate::spatial::tiles::{OrientationTag, TileCategory, TileShape};

use crate::spatial::tiles::OrientationTag::{Corner, Horizontal, Vertical};

/// Sprite transform of one level cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct TileTransform {
    /// Counter-clockwise rotation
    pub rotation: Rotation,
    /// Axis mirror signs, identity for everything but junctions
    pub mirror: Mirror,
}

impl TileTransform {
    /// No rotation and no mirroring
    pub const IDENTITY: Self = Self {
        rotation: Rotation::Deg0,
        mirror: Mirror::IDENTITY,
    };

    /// Pure rotation
    pub const fn rotated(rotation: Rotation) -> Self {
        Self {
            rotation,
            mirror: Mirror::IDENTITY,
        }
    }

    /// Pure mirroring
    pub const fn mirrored(mirror: Mirror) -> Self {
        Self {
            rotation: Rotation::Deg0,
            mirror,
        }
    }
}

/// Orientation tags around one level cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Neighborhood {
    /// Neighbor in the previous row
    pub up: Probe<OrientationTag>,
    /// Neighbor in the next row
    pub down: Probe<OrientationTag>,
    /// Neighbor in the previous column
    pub left: Probe<OrientationTag>,
    /// Neighbor in the next column
    pub right: Probe<OrientationTag>,
}

impl Neighborhood {
    /// A cell with the boundary on every side
    pub const ISOLATED: Self = Self {
        up: Probe::Boundary,
        down: Probe::Boundary,
        left: Probe::Boundary,
        right: Probe::Boundary,
    };

    /// Collect the four neighbors of `(row, col)`
    pub fn of(orientation: &OrientationGrid, row: usize, col: usize) -> Self {
        Self {
            up: orientation.neighbor(row, col, Side::Up),
            down: orientation.neighbor(row, col, Side::Down),
            left: orientation.neighbor(row, col, Side::Left),
            right: orientation.neighbor(row, col, Side::Right),
        }
    }

    /// Copy with one side replaced by a tagged cell
    #[must_use]
    pub const fn with(mut self, side: Side, tag: OrientationTag) -> Self {
        let probe = Probe::Cell(tag);
        match side {
            Side::Up => self.up = probe,
            Side::Down => self.down = probe,
            Side::Left => self.left = probe,
            Side::Right => self.right = probe,
        }
        self
    }

    /// Neighbor on the given side
    pub const fn side(&self, side: Side) -> Probe<OrientationTag> {
        match side {
            Side::Up => self.up,
            Side::Down => self.down,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    fn satisfies(&self, clause: &[Condition]) -> bool {
        clause
            .iter()
            .all(|condition| self.side(condition.side) == Probe::Cell(condition.tag))
    }
}

/// The neighbor on `side` carries `tag`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition {
    /// Side to inspect
    pub side: Side,
    /// Required tag; the boundary never satisfies a condition
    pub tag: OrientationTag,
}

/// Conjunction of conditions
pub type Clause = &'static [Condition];

/// Outcome chosen when any of its clauses holds
#[derive(Debug, Clone, Copy)]
pub struct Rule<O: 'static> {
    /// Alternative clauses, any of which selects the outcome
    pub any_of: &'static [Clause],
    /// Selected outcome
    pub outcome: O,
}

/// Ordered rules evaluated first-match-wins
#[derive(Debug, Clone, Copy)]
pub struct DecisionTable<O: 'static> {
    /// Rules in priority order
    pub rules: &'static [Rule<O>],
}

impl<O: Copy + 'static> DecisionTable<O> {
    /// A table that never matches
    pub const EMPTY: Self = Self { rules: &[] };

    /// Outcome of the first rule with a satisfied clause
    pub fn first_match(&self, neighborhood: &Neighborhood) -> Option<O> {
        self.rules
            .iter()
            .find(|rule| {
                rule.any_of
                    .iter()
                    .any(|clause| neighborhood.satisfies(clause))
            })
            .map(|rule| rule.outcome)
    }
}

/// Default table refined by an override table
#[derive(Debug, Clone, Copy)]
pub struct Cascade<O: 'static> {
    /// First-pass rules
    pub defaults: DecisionTable<O>,
    /// Second-pass rules; a match replaces any default
    pub overrides: DecisionTable<O>,
    /// Outcome when neither stage matches
    pub fallback: O,
}

impl<O: Copy + 'static> Cascade<O> {
    /// Resolve an outcome for a neighborhood
    pub fn resolve(&self, neighborhood: &Neighborhood) -> O {
        self.overrides
            .first_match(neighborhood)
            .or_else(|| self.defaults.first_match(neighborhood))
            .unwrap_or(self.fallback)
    }
}

const fn when(side: Side, tag: OrientationTag) -> Condition {
    Condition { side, tag }
}

/// Corner rotations: 0 top-left, 270 top-right, 180 bottom-right, 90 bottom-left
pub const CORNER_CASCADE: Cascade<Rotation> = Cascade {
    defaults: DecisionTable {
        rules: &[
            Rule {
                any_of: &[
                    &[when(Side::Down, Corner), when(Side::Right, Horizontal)],
                    &[when(Side::Down, Vertical), when(Side::Right, Corner)],
                    &[when(Side::Down, Corner), when(Side::Right, Corner)],
                ],
                outcome: Rotation::Deg0,
            },
            Rule {
                any_of: &[
                    &[when(Side::Down, Corner), when(Side::Left, Horizontal)],
                    &[when(Side::Down, Vertical), when(Side::Left, Corner)],
                    &[when(Side::Down, Corner), when(Side::Left, Corner)],
                ],
                outcome: Rotation::Deg270,
            },
            Rule {
                any_of: &[
                    &[when(Side::Up, Corner), when(Side::Left, Horizontal)],
                    &[when(Side::Up, Vertical), when(Side::Left, Corner)],
                    &[when(Side::Up, Corner), when(Side::Left, Corner)],
                ],
                outcome: Rotation::Deg180,
            },
        ],
    },
    overrides: DecisionTable {
        rules: &[
            Rule {
                any_of: &[&[when(Side::Right, Horizontal), when(Side::Down, Vertical)]],
                outcome: Rotation::Deg0,
            },
            Rule {
                any_of: &[&[when(Side::Left, Horizontal), when(Side::Down, Vertical)]],
                outcome: Rotation::Deg270,
            },
            Rule {
                any_of: &[&[when(Side::Up, Vertical), when(Side::Left, Horizontal)]],
                outcome: Rotation::Deg180,
            },
            Rule {
                any_of: &[&[when(Side::Up, Vertical), when(Side::Right, Horizontal)]],
                outcome: Rotation::Deg90,
            },
        ],
    },
    fallback: Rotation::Deg90,
};

/// Straight wall rotations: 0 runs vertically, 90 runs horizontally
pub const WALL_CASCADE: Cascade<Rotation> = Cascade {
    defaults: DecisionTable {
        rules: &[
            Rule {
                any_of: &[&[when(Side::Left, Corner)], &[when(Side::Right, Corner)]],
                outcome: Rotation::Deg90,
            },
            Rule {
                any_of: &[&[when(Side::Up, Corner)], &[when(Side::Down, Corner)]],
                outcome: Rotation::Deg0,
            },
        ],
    },
    overrides: DecisionTable {
        rules: &[
            Rule {
                any_of: &[&[when(Side::Left, Horizontal)], &[when(Side::Right, Horizontal)]],
                outcome: Rotation::Deg90,
            },
            Rule {
                any_of: &[&[when(Side::Up, Vertical)], &[when(Side::Down, Vertical)]],
                outcome: Rotation::Deg0,
            },
        ],
    },
    fallback: Rotation::Deg0,
};

/// Ghost gate rotations; the gate sprite is transposed relative to walls
pub const GHOST_WALL_CASCADE: Cascade<Rotation> = Cascade {
    defaults: DecisionTable {
        rules: &[
            Rule {
                any_of: &[&[when(Side::Left, Corner)], &[when(Side::Right, Corner)]],
                outcome: Rotation::Deg0,
            },
            Rule {
                any_of: &[&[when(Side::Up, Corner)], &[when(Side::Down, Corner)]],
                outcome: Rotation::Deg90,
            },
        ],
    },
    overrides: DecisionTable {
        rules: &[
            Rule {
                any_of: &[&[when(Side::Left, Horizontal)], &[when(Side::Right, Horizontal)]],
                outcome: Rotation::Deg0,
            },
            Rule {
                any_of: &[&[when(Side::Up, Vertical)], &[when(Side::Down, Vertical)]],
                outcome: Rotation::Deg90,
            },
        ],
    },
    fallback: Rotation::Deg0,
};

/// Junction mirror signs chosen from the wall runs meeting it
pub const JUNCTION_CASCADE: Cascade<Mirror> = Cascade {
    defaults: DecisionTable {
        rules: &[
            Rule {
                any_of: &[&[when(Side::Left, Horizontal), when(Side::Down, Vertical)]],
                outcome: Mirror::IDENTITY,
            },
            Rule {
                any_of: &[&[when(Side::Right, Horizontal), when(Side::Down, Vertical)]],
                outcome: Mirror::FLIP_X,
            },
            Rule {
                any_of: &[&[when(Side::Right, Horizontal), when(Side::Up, Vertical)]],
                outcome: Mirror::FLIP_XY,
            },
            Rule {
                any_of: &[&[when(Side::Left, Horizontal), when(Side::Up, Vertical)]],
                outcome: Mirror::FLIP_Y,
            },
        ],
    },
    overrides: DecisionTable::EMPTY,
    fallback: Mirror::IDENTITY,
};

/// Transform of a cell of the given category in the given neighborhood
pub fn transform_for(category: TileCategory, neighborhood: &Neighborhood) -> TileTransform {
    match category.shape() {
        TileShape::Open | TileShape::Pellet => TileTransform::IDENTITY,
        TileShape::Corner => TileTransform::rotated(CORNER_CASCADE.resolve(neighborhood)),
        TileShape::Wall => TileTransform::rotated(WALL_CASCADE.resolve(neighborhood)),
        TileShape::Gate => TileTransform::rotated(GHOST_WALL_CASCADE.resolve(neighborhood)),
        TileShape::Junction => TileTransform::mirrored(JUNCTION_CASCADE.resolve(neighborhood)),
    }
}

/// Transform of level cell `(row, col)`
///
/// Coordinates outside the level resolve to the identity transform.
pub fn resolve(
    tiles: &QuadrantGrid,
    orientation: &OrientationGrid,
    row: usize,
    col: usize,
) -> TileTransform {
    tiles.get(row, col).map_or(TileTransform::IDENTITY, |category| {
        transform_for(category, &Neighborhood::of(orientation, row, col))
    })
}

/// Transforms of every cell of a mirrored level
///
/// Each cell depends only on the finished level grids, never on another
/// cell's transform.
pub fn resolve_all(level: &MirroredLevel) -> TileGrid<TileTransform> {
    let orientation = level.orientation();
    let mut transforms = level.tiles().map(|_| TileTransform::IDENTITY);
    for ((row, col), category) in level.tiles().iter() {
        transforms.set(
            row,
            col,
            transform_for(category, &Neighborhood::of(orientation, row, col)),
        );
    }
    transforms
}
