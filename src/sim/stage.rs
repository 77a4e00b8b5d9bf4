//! Playfield bounds derived from the current surface size

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{BRICK_WIDTH, PLAYFIELD_HALF_COLUMNS};

/// The logical playfield. Everything is derived from the surface size, so a
/// resize only has to replace `width`/`height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub width: f32,
    pub height: f32,
}

impl Stage {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn min(&self) -> f32 {
        self.width.min(self.height)
    }

    pub fn max(&self) -> f32 {
        self.width.max(self.height)
    }

    pub fn center_x(&self) -> f32 {
        self.width * 0.5
    }

    pub fn center_y(&self) -> f32 {
        self.height * 0.5
    }

    /// Left wall. The playfield is always 18 brick columns wide and
    /// recentres with the surface.
    pub fn left_border(&self) -> f32 {
        self.center_x() - (BRICK_WIDTH + 1.0) * PLAYFIELD_HALF_COLUMNS
    }

    pub fn right_border(&self) -> f32 {
        self.center_x() + (BRICK_WIDTH + 1.0) * PLAYFIELD_HALF_COLUMNS
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x > 0.0 && y > 0.0 && x < self.width && y < self.height
    }

    pub fn contains_point(&self, p: Vec2) -> bool {
        self.contains(p.x, p.y)
    }
}
