//! Canvas 2D renderer for the browser build

use std::f64::consts::PI;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{PROMPT_TEXT, Renderer};
use crate::consts::*;
use crate::palette::{self, Color};
use crate::sim::{Ball, Brick, Item, Pad, PadSize, Particle, Rect, Stage};

const HEADLINE_FONT: &str = "bold 100px Orbitron, sans-serif";
const TEXT_FONT: &str = "bold 20px Orbitron, sans-serif";
const DEBUG_FONT: &str = "normal 10px monospace";

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    fn fill(&self, color: Color) {
        self.ctx.set_fill_style_str(&color.to_css());
    }

    fn fill_rect(&self, rect: &Rect, color: Color) {
        self.fill(color);
        self.ctx.fill_rect(
            rect.left() as f64,
            rect.top() as f64,
            rect.width as f64,
            rect.height as f64,
        );
    }

    fn text_style(&self, font: &str, align: &str, baseline: &str, color: Color) {
        self.ctx.set_font(font);
        self.ctx.set_text_align(align);
        self.ctx.set_text_baseline(baseline);
        self.fill(color);
    }

    fn try_title_background(&self, stage: &Stage, now: f64) -> Result<(), JsValue> {
        let (cx, cy) = (stage.center_x() as f64, stage.center_y() as f64);
        let stripe = stage.max() as f64 / 3.0;

        self.ctx.save();
        self.ctx.translate(cx, cy)?;
        self.ctx.scale(2.0, 2.0)?;
        self.ctx.rotate(now * 0.001)?;
        self.ctx.translate(-cx, -cy)?;
        for (i, color) in palette::TITLE_STRIPES.iter().enumerate() {
            self.fill(*color);
            self.ctx.fill_rect(stripe * i as f64, 0.0, stripe, stage.max() as f64);
        }
        self.ctx.restore();
        Ok(())
    }

    fn try_banner(&self, stage: &Stage, text: &str, now: f64) -> Result<(), JsValue> {
        let wave = (now / 1000.0).sin();
        let scale = wave.abs() + 0.5;

        self.ctx.save();
        self.ctx.translate(stage.center_x() as f64, stage.center_y() as f64)?;
        self.ctx.scale(scale, scale)?;
        self.ctx.rotate(wave * PI * 0.125)?;
        self.text_style(HEADLINE_FONT, "center", "middle", palette::BANNER_TEXT);
        self.ctx.fill_text(text, 0.0, 0.0)?;
        self.ctx.restore();

        // Prompt letters ripple one by one
        self.ctx.save();
        self.text_style(TEXT_FONT, "center", "middle", palette::PROMPT_TEXT);
        let full = self.ctx.measure_text(PROMPT_TEXT)?.width();
        let y = stage.height as f64 * 0.9;
        for (index, (offset, ch)) in PROMPT_TEXT.char_indices().enumerate() {
            let prefix = self.ctx.measure_text(&PROMPT_TEXT[..offset])?.width();
            let x = stage.center_x() as f64 + prefix - full * 0.5;
            let letter = &PROMPT_TEXT[offset..offset + ch.len_utf8()];
            self.ctx.fill_text(letter, x, y + (now / 100.0 + index as f64).sin())?;
        }
        self.ctx.restore();
        Ok(())
    }

    fn try_item(&self, item: &Item) -> Result<(), JsValue> {
        let half = ITEM_SIZE as f64 * 0.5;
        self.ctx.save();
        self.ctx.translate(item.pos.x as f64, item.pos.y as f64)?;
        self.fill(item.color);
        self.ctx.fill_rect(-half, -half, ITEM_SIZE as f64, ITEM_SIZE as f64);
        self.text_style(TEXT_FONT, "center", "middle", palette::ITEM_LABEL);
        self.ctx.fill_text(&item.kind.label().to_string(), 0.0, 3.0)?;
        self.ctx.restore();
        Ok(())
    }

    fn try_countdown(&self, stage: &Stage, count: i32, fade: f32) -> Result<(), JsValue> {
        let fade = fade as f64;
        self.ctx.save();
        self.ctx.set_global_alpha(fade);
        self.ctx.translate(stage.center_x() as f64, stage.center_y() as f64)?;
        self.ctx.scale(fade, fade)?;
        self.text_style(HEADLINE_FONT, "center", "middle", palette::COUNTDOWN_TEXT);
        self.ctx.fill_text(&count.to_string(), 0.0, 0.0)?;
        self.ctx.restore();
        Ok(())
    }

    fn try_debug(&self, stage: &Stage, pad_size: PadSize, powerful: bool) -> Result<(), JsValue> {
        let x = stage.left_border() as f64 + 20.0;
        let y = stage.height as f64;
        self.text_style(DEBUG_FONT, "left", "top", palette::DEBUG_TEXT);
        let lines = [
            format!("LARGE: {} (Use 1 to toggle)", pad_size == PadSize::Large),
            format!("SMALL: {} (Use 2 to toggle)", pad_size == PadSize::Small),
            format!("POWER BALL: {} (Use 3 to toggle)", powerful),
        ];
        for (i, line) in lines.iter().enumerate() {
            self.ctx.fill_text(line, x, y - 100.0 + 10.0 * i as f64)?;
        }
        Ok(())
    }
}

fn report(result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::warn!("Canvas draw failed: {:?}", err);
    }
}

impl Renderer for CanvasRenderer {
    fn clear(&mut self, stage: &Stage, fill: Option<Color>) {
        let (w, h) = (stage.width as f64, stage.height as f64);
        match fill {
            Some(color) => {
                self.fill(color);
                self.ctx.fill_rect(0.0, 0.0, w, h);
            }
            None => self.ctx.clear_rect(0.0, 0.0, w, h),
        }
    }

    fn title_background(&mut self, stage: &Stage, now: f64) {
        report(self.try_title_background(stage, now));
    }

    fn banner(&mut self, stage: &Stage, text: &str, now: f64) {
        report(self.try_banner(stage, text, now));
    }

    fn pad(&mut self, pad: &Pad, _now: f64) {
        self.fill_rect(&pad.rect, palette::PAD);
    }

    fn ball(&mut self, ball: &Ball, _now: f64) {
        self.fill_rect(&ball.rect, palette::BALL);
    }

    fn brick(&mut self, brick: &Brick, _now: f64) {
        self.fill_rect(&brick.rect, brick.color());
    }

    fn item(&mut self, item: &Item, _now: f64) {
        report(self.try_item(item));
    }

    fn particle(&mut self, particle: &Particle, _now: f64) {
        let half = PARTICLE_SIZE * 0.5;
        let rect = Rect::new(
            particle.pos.x - half,
            particle.pos.y - half,
            PARTICLE_SIZE,
            PARTICLE_SIZE,
        );
        self.ctx.save();
        self.ctx.set_global_alpha(particle.life.max(0.0) as f64);
        self.fill_rect(&rect, particle.color);
        self.ctx.restore();
    }

    fn borders(&mut self, stage: &Stage) {
        let h = stage.height as f64;
        self.fill(palette::BORDER_LEFT);
        self.ctx.fill_rect(0.0, 0.0, stage.left_border() as f64, h);
        self.fill(palette::BORDER_RIGHT);
        self.ctx.fill_rect(
            stage.right_border() as f64,
            0.0,
            (stage.width - stage.right_border()) as f64,
            h,
        );
    }

    fn lives(&mut self, stage: &Stage, lives: u8) {
        self.text_style(TEXT_FONT, "left", "top", palette::LIVES_TEXT);
        report(self.ctx.fill_text(
            &format!("LIVES: {lives}"),
            stage.left_border() as f64 + 20.0,
            stage.height as f64 - 30.0,
        ));
    }

    fn countdown(&mut self, stage: &Stage, count: i32, fade: f32) {
        report(self.try_countdown(stage, count, fade));
    }

    fn debug_overlay(&mut self, stage: &Stage, pad_size: PadSize, powerful: bool) {
        report(self.try_debug(stage, pad_size, powerful));
    }
}
