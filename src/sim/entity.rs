//! Ball, pad, bricks, falling items and particles
//!
//! Each entity owns a `Rect` (or a bare `Vec2` position) plus its own
//! per-frame movement rules. Collision policy lives in `tick`.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::{PointExt, Rect};
use super::stage::Stage;
use crate::consts::*;
use crate::palette::{self, Color};

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    pub velocity: Vec2,
    /// Powerful mode: clears destructible bricks without bouncing off them
    pub powerful: bool,
}

impl Ball {
    pub const DEFAULT_VELOCITY: Vec2 = Vec2::new(0.0, BALL_SPEED);

    pub fn new(stage: &Stage) -> Self {
        let mut ball = Self {
            rect: Rect::new(0.0, 0.0, BALL_SIZE, BALL_SIZE),
            velocity: Self::DEFAULT_VELOCITY,
            powerful: false,
        };
        ball.set_initial_position(stage);
        ball
    }

    /// Translate by one frame of velocity
    pub fn advance(&mut self) -> &mut Self {
        self.rect.pos += self.velocity;
        self
    }

    /// Undo one frame of movement
    pub fn rewind(&mut self) -> &mut Self {
        self.rect.pos -= self.velocity;
        self
    }

    pub fn bounce_x(&mut self) -> &mut Self {
        self.velocity.invert_x();
        self
    }

    pub fn bounce_y(&mut self) -> &mut Self {
        self.velocity.invert_y();
        self
    }

    pub fn bounce(&mut self) -> &mut Self {
        self.bounce_x().bounce_y()
    }

    /// Bounce off a brick the ball has just moved into.
    ///
    /// Rewinds one frame, then picks the axis from where the ball centre
    /// sits: inside the brick's vertical span means a side hit (flip X),
    /// otherwise a top/bottom hit (flip Y). This is an approximation, not a
    /// swept test; a corner hit can pick the wrong axis.
    pub fn bounce_brick(&mut self, brick: &Rect) -> &mut Self {
        self.rewind();
        let cy = self.rect.center_y();
        if cy >= brick.top() && cy <= brick.bottom() {
            self.bounce_x()
        } else {
            self.bounce_y()
        }
    }

    /// Bounce off the pad, steering by the hit offset from the pad centre.
    /// The horizontal speed is not clamped.
    pub fn bounce_pad(&mut self, pad: &Rect) -> &mut Self {
        self.velocity.x = (self.rect.center_x() - pad.center_x()) / self.rect.half_width();
        self.bounce_y()
    }

    /// Pin the ball on top of the pad, horizontally centred
    pub fn rest_on(&mut self, pad: &Rect) -> &mut Self {
        self.rect.pos.y = pad.top() - self.rect.height;
        self.rect.pos.x = pad.center_x() - self.rect.half_width();
        self
    }

    /// Launch upward with a small random rightward drift
    pub fn throw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &mut Self {
        let drift = rng.random::<f32>() * self.rect.half_width();
        self.velocity.set(drift, -BALL_SPEED);
        self
    }

    pub fn set_initial_velocity(&mut self) -> &mut Self {
        self.velocity = Self::DEFAULT_VELOCITY;
        self
    }

    /// Centre on the stage and reset velocity
    pub fn set_initial_position(&mut self, stage: &Stage) -> &mut Self {
        self.rect.pos.x = stage.center_x() - self.rect.half_width();
        self.rect.pos.y = stage.center_y() - self.rect.half_height();
        self.set_initial_velocity()
    }
}

/// Pad size mode. Only one can be active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PadSize {
    #[default]
    Normal,
    Small,
    Large,
}

impl PadSize {
    /// Width the pad eases toward in this mode
    pub fn target_width(self) -> f32 {
        match self {
            PadSize::Normal => PAD_WIDTH,
            PadSize::Small => PAD_WIDTH_SMALL,
            PadSize::Large => PAD_WIDTH_LARGE,
        }
    }
}

/// The player's pad
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pad {
    pub rect: Rect,
    pub velocity: Vec2,
    pub size: PadSize,
    pub friction: f32,
}

impl Pad {
    pub fn new(stage: &Stage) -> Self {
        let mut pad = Self {
            rect: Rect::new(0.0, 0.0, PAD_WIDTH, PAD_HEIGHT),
            velocity: Vec2::ZERO,
            size: PadSize::Normal,
            friction: PAD_FRICTION,
        };
        pad.set_initial_position(stage);
        pad
    }

    pub fn push_left(&mut self) -> &mut Self {
        self.velocity.x -= PAD_IMPULSE;
        self
    }

    pub fn push_right(&mut self) -> &mut Self {
        self.velocity.x += PAD_IMPULSE;
        self
    }

    /// Ease width toward the active size, move, then apply friction.
    ///
    /// The width closes a fixed fraction of the gap each frame, so it
    /// approaches the target without overshooting.
    pub fn advance(&mut self) -> &mut Self {
        let target = self.size.target_width();
        if self.rect.width != target {
            self.rect.width += (target - self.rect.width) * PAD_RESIZE_RATE;
        }

        self.rect.pos += self.velocity;
        self.velocity *= self.friction;
        self
    }

    /// Keep the pad between the playfield borders
    pub fn clamp_to(&mut self, stage: &Stage) -> &mut Self {
        if self.rect.pos.x < stage.left_border() {
            self.rect.pos.x = stage.left_border();
        } else if self.rect.pos.x > stage.right_border() - self.rect.width {
            self.rect.pos.x = stage.right_border() - self.rect.width;
        }
        self
    }

    /// Switch to `size`, or back to normal if it is already active
    pub fn toggle_size(&mut self, size: PadSize) {
        self.size = if self.size == size {
            PadSize::Normal
        } else {
            size
        };
    }

    pub fn set_initial_position(&mut self, stage: &Stage) -> &mut Self {
        self.rect.pos.x = stage.center_x() - self.rect.half_width();
        self.rect.pos.y = stage.height * PAD_POS_Y - self.rect.half_height();
        self
    }
}

/// A brick in the wall
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub grid_x: u32,
    pub grid_y: u32,
    pub initial_hits_to_destroy: u8,
    pub hits_to_destroy: u8,
    pub undestructible: bool,
    pub destroyed: bool,
}

impl Brick {
    pub fn new(grid_x: u32, grid_y: u32, undestructible: bool, hits_to_destroy: u8) -> Self {
        Self {
            rect: Rect::new(
                grid_x as f32 * BRICK_WIDTH,
                grid_y as f32 * BRICK_HEIGHT,
                BRICK_WIDTH,
                BRICK_HEIGHT,
            ),
            grid_x,
            grid_y,
            initial_hits_to_destroy: hits_to_destroy,
            hits_to_destroy,
            undestructible,
            destroyed: false,
        }
    }

    /// Take a hit. `force` clears the brick outright.
    /// Undestructible bricks ignore every hit.
    pub fn destroy(&mut self, force: bool) -> &mut Self {
        if self.undestructible {
            return self;
        }
        if force {
            self.hits_to_destroy = 0;
            self.destroyed = true;
        } else {
            self.hits_to_destroy = self.hits_to_destroy.saturating_sub(1);
            if self.hits_to_destroy == 0 {
                self.destroyed = true;
            }
        }
        self
    }

    pub fn restore(&mut self) -> &mut Self {
        self.hits_to_destroy = self.initial_hits_to_destroy;
        self.destroyed = false;
        self
    }

    /// Colour at full strength. Dropped items take this colour.
    pub fn initial_color(&self) -> Color {
        if self.undestructible {
            palette::BRICK_STEEL
        } else if self.initial_hits_to_destroy > 1 {
            palette::BRICK_TOUGH
        } else {
            palette::BRICK_PLAIN
        }
    }

    /// Current colour; multi-hit bricks darken as they take damage
    pub fn color(&self) -> Color {
        if self.undestructible || self.initial_hits_to_destroy <= 1 {
            return self.initial_color();
        }
        let strength = self.hits_to_destroy as f32 / self.initial_hits_to_destroy as f32;
        let v = (strength * 255.0).round();
        Color::rgb(v as u8, 0, (v * 0.5).round() as u8)
    }

    /// Position from grid coordinates, centred on the stage.
    /// Column 0 is the rightmost column.
    pub fn set_initial_position(&mut self, stage: &Stage) -> &mut Self {
        let cell_w = self.rect.width + 1.0;
        let cell_h = self.rect.height + 1.0;
        self.rect.pos.x = stage.center_x()
            - (self.grid_x as f32 * cell_w - cell_w * BRICK_CENTER_COLUMN)
            - self.rect.half_width();
        self.rect.pos.y =
            BRICK_TOP_MARGIN + self.grid_y as f32 * cell_h - self.rect.half_height();
        self
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemKind {
    Large,
    Small,
    PowerBall,
}

impl ItemKind {
    pub const ALL: [ItemKind; 3] = [ItemKind::Large, ItemKind::Small, ItemKind::PowerBall];

    pub fn label(self) -> char {
        match self {
            ItemKind::Large => 'L',
            ItemKind::Small => 'S',
            ItemKind::PowerBall => 'P',
        }
    }
}

/// A falling power-up. `pos` is its centre.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub pos: Vec2,
    pub color: Color,
    pub kind: ItemKind,
}

impl Item {
    pub fn new(pos: Vec2, color: Color, kind: ItemKind) -> Self {
        Self { pos, color, kind }
    }

    /// Item with a uniformly chosen kind
    pub fn random<R: Rng + ?Sized>(pos: Vec2, color: Color, rng: &mut R) -> Self {
        let kind = ItemKind::ALL[rng.random_range(0..ItemKind::ALL.len())];
        Self::new(pos, color, kind)
    }

    pub fn advance(&mut self) -> &mut Self {
        self.pos.y += ITEM_FALL_SPEED;
        self
    }
}

/// A short-lived visual spark
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub velocity: Vec2,
    pub color: Color,
    /// 1.0 at spawn, dead at or below 0.0
    pub life: f32,
}

impl Particle {
    pub fn new(pos: Vec2, velocity: Vec2, color: Color) -> Self {
        Self {
            pos,
            velocity,
            color,
            life: 1.0,
        }
    }

    /// Particle with a random velocity in [-2.5, 2.5] per axis
    pub fn spawn<R: Rng + ?Sized>(pos: Vec2, color: Color, rng: &mut R) -> Self {
        let vx = (rng.random::<f32>() - 0.5) * PARTICLE_SPREAD;
        let vy = (rng.random::<f32>() - 0.5) * PARTICLE_SPREAD;
        Self::new(pos, Vec2::new(vx, vy), color)
    }

    pub fn update(&mut self) -> &mut Self {
        self.pos += self.velocity;
        self.life -= PARTICLE_DECAY;
        self
    }

    pub fn is_dead(&self) -> bool {
        self.life <= 0.0
    }
}
