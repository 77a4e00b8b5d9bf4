//! Game colours. Update here only.

use serde::{Deserialize, Serialize};

/// An opaque sRGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS `rgb(...)` form for canvas fill styles
    pub fn to_css(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Undestructible bricks
pub const BRICK_STEEL: Color = Color::rgb(0x00, 0xcc, 0xff);
/// Multi-hit bricks at full strength
pub const BRICK_TOUGH: Color = Color::rgb(0xff, 0x00, 0xcc);
/// Single-hit bricks
pub const BRICK_PLAIN: Color = Color::rgb(0xff, 0xcc, 0x00);

pub const BALL: Color = Color::rgb(0xd3, 0x05, 0xf2);
pub const PAD: Color = Color::rgb(0xe6, 0x46, 0x0b);
pub const ITEM_LABEL: Color = Color::rgb(0x00, 0xff, 0x0f);

/// Burst colours for the boundary and pad bounces
pub const BURST_TOP: Color = Color::rgb(0x0c, 0x3e, 0xb3);
pub const BURST_LEFT: Color = Color::rgb(0x00, 0xcc, 0xff);
pub const BURST_RIGHT: Color = Color::rgb(0x25, 0x16, 0x8a);
pub const BURST_PAD: Color = Color::rgb(0x36, 0x01, 0x27);

pub const BORDER_LEFT: Color = Color::rgb(0x67, 0x91, 0x73);
pub const BORDER_RIGHT: Color = Color::rgb(0x70, 0x0c, 0x15);
pub const SCREEN_FILL: Color = Color::rgb(0x6d, 0x7e, 0x86);
pub const LIVES_TEXT: Color = BALL;
pub const BANNER_TEXT: Color = Color::rgb(0x4a, 0x56, 0x12);
pub const PROMPT_TEXT: Color = Color::rgb(0x07, 0x45, 0xbb);
pub const COUNTDOWN_TEXT: Color = Color::rgb(0xff, 0xff, 0xff);
pub const DEBUG_TEXT: Color = Color::rgb(0x07, 0xed, 0x50);

/// Rotating three-stripe title background
pub const TITLE_STRIPES: [Color; 3] = [
    Color::rgb(0x00, 0xcc, 0xff),
    Color::rgb(0x06, 0xbd, 0x80),
    Color::rgb(0xff, 0x00, 0xcc),
];
