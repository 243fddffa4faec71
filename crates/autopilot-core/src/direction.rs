//! The fixed catalog of candidate movement directions.

use core::fmt;

/// Ground-plane movement vector handed back to the host.
///
/// Components are in `[-1, 1]`; diagonals are normalised so every non-zero
/// heading has unit length. The host multiplies by its own movement speed and
/// timestep.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Heading {
    pub dx: f64,
    pub dz: f64,
}

impl Heading {
    pub const ZERO: Self = Self { dx: 0.0, dz: 0.0 };

    pub fn new(dx: f64, dz: f64) -> Self {
        Self { dx, dz }
    }

    pub fn is_zero(self) -> bool {
        self.dx == 0.0 && self.dz == 0.0
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.dx, self.dz)
    }
}

/// The nine candidate directions evaluated for every plan: stay plus the
/// eight compass moves.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Stay,
    Left,
    Right,
    Forward,
    Backward,
    LeftForward,
    RightForward,
    LeftBackward,
    RightBackward,
}

impl Direction {
    /// Catalog order. Path selection keeps the earliest entry on exact score
    /// ties, so `Stay` beats any equally-scored move and cardinals beat
    /// diagonals.
    pub const CATALOG: [Direction; 9] = [
        Direction::Stay,
        Direction::Left,
        Direction::Right,
        Direction::Forward,
        Direction::Backward,
        Direction::LeftForward,
        Direction::RightForward,
        Direction::LeftBackward,
        Direction::RightBackward,
    ];

    /// Unit (or zero) heading for this direction. Forward is negative z.
    pub fn heading(self) -> Heading {
        const DIAG: f64 = core::f64::consts::FRAC_1_SQRT_2;
        match self {
            Direction::Stay => Heading::ZERO,
            Direction::Left => Heading::new(-1.0, 0.0),
            Direction::Right => Heading::new(1.0, 0.0),
            Direction::Forward => Heading::new(0.0, -1.0),
            Direction::Backward => Heading::new(0.0, 1.0),
            Direction::LeftForward => Heading::new(-DIAG, -DIAG),
            Direction::RightForward => Heading::new(DIAG, -DIAG),
            Direction::LeftBackward => Heading::new(-DIAG, DIAG),
            Direction::RightBackward => Heading::new(DIAG, DIAG),
        }
    }

    pub fn is_stay(self) -> bool {
        matches!(self, Direction::Stay)
    }
}
