//! Board tile tags.

/// The content of one board cell, decoded from the environment's integer tag.
///
/// | Tag | Tile        |
/// |-----|-------------|
/// | 0   | `Empty`     |
/// | 1   | `Wall`      |
/// | 3   | `Goal`      |
/// | 5   | `BonusGoal` |
///
/// Any other tag is kept verbatim as `Other` and treated as open floor.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tile {
    #[default]
    Empty,
    Wall,
    Goal,
    BonusGoal,
    Other(i32),
}

impl Tile {
    pub const EMPTY_TAG: i32 = 0;
    pub const WALL_TAG: i32 = 1;
    pub const GOAL_TAG: i32 = 3;
    pub const BONUS_GOAL_TAG: i32 = 5;

    #[inline]
    pub fn from_tag(tag: i32) -> Tile {
        match tag {
            Self::EMPTY_TAG      => Tile::Empty,
            Self::WALL_TAG       => Tile::Wall,
            Self::GOAL_TAG       => Tile::Goal,
            Self::BONUS_GOAL_TAG => Tile::BonusGoal,
            other                => Tile::Other(other),
        }
    }

    #[inline]
    pub fn tag(self) -> i32 {
        match self {
            Tile::Empty     => Self::EMPTY_TAG,
            Tile::Wall      => Self::WALL_TAG,
            Tile::Goal      => Self::GOAL_TAG,
            Tile::BonusGoal => Self::BONUS_GOAL_TAG,
            Tile::Other(t)  => t,
        }
    }

    #[inline]
    pub fn is_wall(self) -> bool {
        matches!(self, Tile::Wall)
    }

    /// `true` for both goal kinds.
    #[inline]
    pub fn is_goal(self) -> bool {
        matches!(self, Tile::Goal | Tile::BonusGoal)
    }
}

impl From<i32> for Tile {
    #[inline]
    fn from(tag: i32) -> Tile {
        Tile::from_tag(tag)
    }
}
