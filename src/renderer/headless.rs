//! Renderer with no surface, for the native runner and tests

use super::Renderer;
use crate::palette::Color;
use crate::sim::{Ball, Brick, Item, Pad, Particle, Stage};

/// Counts draw calls and remembers the last banner
#[derive(Debug, Clone, Default)]
pub struct HeadlessRenderer {
    pub frames: u64,
    pub draw_calls: u64,
    pub last_banner: Option<String>,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Renderer for HeadlessRenderer {
    fn clear(&mut self, _stage: &Stage, _fill: Option<Color>) {
        self.frames += 1;
        self.draw_calls += 1;
    }

    fn title_background(&mut self, _stage: &Stage, _now: f64) {
        self.draw_calls += 1;
    }

    fn banner(&mut self, _stage: &Stage, text: &str, _now: f64) {
        self.draw_calls += 1;
        if self.last_banner.as_deref() != Some(text) {
            self.last_banner = Some(text.to_string());
        }
    }

    fn pad(&mut self, _pad: &Pad, _now: f64) {
        self.draw_calls += 1;
    }

    fn ball(&mut self, _ball: &Ball, _now: f64) {
        self.draw_calls += 1;
    }

    fn brick(&mut self, _brick: &Brick, _now: f64) {
        self.draw_calls += 1;
    }

    fn item(&mut self, _item: &Item, _now: f64) {
        self.draw_calls += 1;
    }

    fn particle(&mut self, _particle: &Particle, _now: f64) {
        self.draw_calls += 1;
    }

    fn borders(&mut self, _stage: &Stage) {
        self.draw_calls += 1;
    }

    fn lives(&mut self, _stage: &Stage, _lives: u8) {
        self.draw_calls += 1;
    }

    fn countdown(&mut self, _stage: &Stage, _count: i32, _fade: f32) {
        self.draw_calls += 1;
    }
}
