//! Avatars and Sprite Geometry
//!
//! Closed set of playable avatars with their walk-sheet geometry, resolved
//! at compile time. Unknown numeric identifiers from the character-creation
//! screen fall back to [`AvatarKind::Villager`].

use serde::{Serialize, Deserialize};

/// Walk-cycle sprite sheet geometry for one avatar.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpriteSheet {
    /// Asset path relative to the static root
    pub path: &'static str,
    /// Single frame width (pixels)
    pub frame_width: u32,
    /// Single frame height (pixels)
    pub frame_height: u32,
    /// Frames per walk row
    pub frame_count: u32,
    /// Direction rows in the sheet
    pub row_count: u32,
    /// Render scale factor
    pub scale: f32,
}

/// The playable avatar roster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum AvatarKind {
    /// Unarmed villager (default)
    #[default]
    Villager = 1,
    /// Office suit
    Suit = 2,
    /// Orc
    Orc = 3,
    /// Vampire
    Vampire = 4,
    /// Orc scout
    OrcScout = 5,
    /// Vampire elder
    VampireElder = 6,
    /// Orc warden
    OrcWarden = 7,
}

impl AvatarKind {
    /// Resolve a numeric avatar id from the character-creation screen.
    ///
    /// Unknown ids fall back to the default villager rather than failing.
    pub fn from_id(id: u8) -> Self {
        match id {
            2 => AvatarKind::Suit,
            3 => AvatarKind::Orc,
            4 => AvatarKind::Vampire,
            5 => AvatarKind::OrcScout,
            6 => AvatarKind::VampireElder,
            7 => AvatarKind::OrcWarden,
            _ => AvatarKind::Villager,
        }
    }

    /// Sprite sheet geometry for this avatar.
    pub fn sheet(self) -> SpriteSheet {
        match self {
            AvatarKind::Villager => SpriteSheet {
                path: "/Unarmed_Walk_full.png",
                frame_width: 64,
                frame_height: 64,
                frame_count: 6,
                row_count: 4,
                scale: 2.0,
            },
            AvatarKind::Suit => SpriteSheet {
                path: "/suittie_walk_full.png",
                frame_width: 120,
                frame_height: 160,
                frame_count: 4,
                row_count: 3,
                scale: 0.5,
            },
            AvatarKind::Orc => SpriteSheet {
                path: "/orc1_walk_full.png",
                frame_width: 64,
                frame_height: 64,
                frame_count: 6,
                row_count: 4,
                scale: 2.0,
            },
            AvatarKind::Vampire => SpriteSheet {
                path: "/Vampires1_Walk_full.png",
                frame_width: 64,
                frame_height: 64,
                frame_count: 6,
                row_count: 4,
                scale: 2.0,
            },
            AvatarKind::OrcScout => SpriteSheet {
                path: "/orc2_walk_full.png",
                frame_width: 64,
                frame_height: 64,
                frame_count: 6,
                row_count: 4,
                scale: 2.0,
            },
            AvatarKind::VampireElder => SpriteSheet {
                path: "/Vampires2_Walk_full.png",
                frame_width: 64,
                frame_height: 64,
                frame_count: 6,
                row_count: 4,
                scale: 2.0,
            },
            AvatarKind::OrcWarden => SpriteSheet {
                path: "/orc3_walk_full.png",
                frame_width: 64,
                frame_height: 64,
                frame_count: 6,
                row_count: 4,
                scale: 2.0,
            },
        }
    }
}

/// Facing direction of the actor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Facing the camera (idle default)
    #[default]
    Down,
    /// Facing left
    Left,
    /// Facing right
    Right,
    /// Facing away
    Up,
}

impl Direction {
    /// Row index in a walk sheet for this direction.
    #[inline]
    pub fn sprite_row(self) -> u32 {
        match self {
            Direction::Down => 0,
            Direction::Left => 1,
            Direction::Right => 2,
            Direction::Up => 3,
        }
    }
}
