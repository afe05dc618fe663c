// color.rs - Cell background colors and their semantic classification

use serde::{Deserialize, Serialize};

/// RGB background color as reported by the sheet service.
///
/// Channels are fractions in [0, 1]. The service omits channels that are
/// zero, so every field defaults to 0 on deserialization, and zero
/// channels are dropped again when a snapshot is written back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Color {
    #[serde(default, skip_serializing_if = "is_zero")]
    pub red: f32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub green: f32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub blue: f32,
}

fn is_zero(channel: &f32) -> bool {
    *channel == 0.0
}

impl Color {
    pub const WHITE: Color = Color { red: 1.0, green: 1.0, blue: 1.0 };
    pub const BLACK: Color = Color { red: 0.0, green: 0.0, blue: 0.0 };
    pub const GREEN: Color = Color { red: 0.0, green: 1.0, blue: 0.0 };
    pub const RED: Color = Color { red: 1.0, green: 0.0, blue: 0.0 };
    /// Default path highlight (full red plus full green).
    pub const YELLOW: Color = Color { red: 1.0, green: 1.0, blue: 0.0 };

    pub fn new(red: f32, green: f32, blue: f32) -> Self {
        Self { red, green, blue }
    }
}

/// Semantic meaning assigned to a cell from its background color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellRole {
    Wall,
    Walkable,
    Start,
    End,
    Unknown,
}

impl CellRole {
    /// Roles that appear as graph vertices.
    pub fn is_traversable(self) -> bool {
        matches!(self, CellRole::Walkable | CellRole::Start | CellRole::End)
    }
}

/// Map a color sample to its cell role. Total function; unrecognized
/// colors resolve to a non-traversable role rather than an error.
///
/// Precedence matters: the all-on white sample satisfies the green and
/// red channel checks too, so it must be tested first or a walkable cell
/// would be read as a marker.
pub fn classify(color: Color) -> CellRole {
    if color.red == 1.0 && color.green == 1.0 && color.blue == 1.0 {
        CellRole::Walkable
    } else if color.green == 1.0 && color.red == 0.0 && color.blue == 0.0 {
        CellRole::Start
    } else if color.red == 1.0 && color.green == 0.0 && color.blue == 0.0 {
        CellRole::End
    } else if color.red == 0.0 && color.green == 0.0 && color.blue == 0.0 {
        CellRole::Wall
    } else {
        CellRole::Unknown
    }
}
