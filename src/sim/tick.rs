//! Per-frame simulation step
//!
//! One call advances the game by one display frame. Only PREPARE and GAME
//! move anything; every other phase is frozen until a key-release command
//! changes it.

use rand::{Rng, RngCore};

use super::entity::{Item, ItemKind, PadSize};
use super::state::{GamePhase, GameState, burst};
use crate::palette;

/// Held keys for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

/// Advance the game state by one frame. `now` is the frame timestamp in
/// milliseconds and only drives the PREPARE countdown.
pub fn tick<R: RngCore>(state: &mut GameState<R>, input: &TickInput, now: f64) {
    if !state.phase.is_running() {
        return;
    }

    if input.left {
        state.pad.push_left();
    } else if input.right {
        state.pad.push_right();
    }
    state.pad.advance().clamp_to(&state.stage);

    match state.phase {
        GamePhase::Prepare => {
            update_countdown(state, now);
            state.ball.rest_on(&state.pad.rect);
        }
        GamePhase::Game => step_game(state),
        _ => {}
    }

    update_particles(state);
}

/// Count down whole seconds from the first PREPARE frame, then throw
fn update_countdown<R: RngCore>(state: &mut GameState<R>, now: f64) {
    let Some(started) = state.countdown_started else {
        state.countdown_started = Some(now);
        return;
    };

    let elapsed_secs = ((now - started) / 1000.0).floor() as i32;
    state.countdown = state.rules.countdown_secs as i32 - elapsed_secs;
    if state.countdown <= 0 {
        state.countdown_started = None;
        state.phase = GamePhase::Game;
        state.ball.throw(&mut state.rng);
        log::info!("Ball thrown, velocity {:?}", state.ball.velocity);
    }
}

/// Ball movement and every collision, in a fixed order
fn step_game<R: RngCore>(state: &mut GameState<R>) {
    let stage = state.stage;
    state.ball.advance();

    // Bottom, top, left, right: at most one per frame
    let ball = state.ball.rect;
    if ball.top() > stage.height {
        state.lose_life();
    } else if ball.top() < 0.0 {
        state.ball.bounce_y();
        state.burst(ball.pos, palette::BURST_TOP);
    } else if ball.left() < stage.left_border() + ball.half_width() {
        state.ball.bounce_x();
        state.burst(ball.pos, palette::BURST_LEFT);
    } else if ball.left() > stage.right_border() - ball.width {
        state.ball.bounce_x();
        state.burst(ball.pos, palette::BURST_RIGHT);
    }

    // Independent of the wall bounces
    if state.pad.rect.collides(&state.ball.rect) {
        state.ball.bounce_pad(&state.pad.rect);
        state.burst(state.ball.rect.pos, palette::BURST_PAD);
    }

    sweep_bricks(state);
    sweep_items(state);
}

/// Hit every live brick the ball overlaps and recount destroyed bricks in
/// the same pass. WON is set as soon as the count reaches the total.
fn sweep_bricks<R: RngCore>(state: &mut GameState<R>) {
    let drop_chance = state.rules.item_drop_chance;
    state.destroyed_bricks = 0;

    for brick in &mut state.bricks {
        if !brick.destroyed && brick.rect.collides(&state.ball.rect) {
            if !brick.undestructible {
                brick.destroy(state.ball.powerful);
                if brick.destroyed && state.rng.random::<f32>() < drop_chance {
                    let item =
                        Item::random(brick.rect.center(), brick.initial_color(), &mut state.rng);
                    log::debug!("Item {:?} dropped at {:?}", item.kind, item.pos);
                    state.items.push(item);
                }
            }

            // A powerful ball ploughs through anything it can destroy
            if !state.ball.powerful || brick.undestructible {
                state.ball.bounce_brick(&brick.rect);
            }

            burst(&mut state.particles, &mut state.rng, state.ball.rect.pos, brick.color());
        }

        if brick.destroyed {
            state.destroyed_bricks += 1;
            if state.destroyed_bricks == state.destructible_bricks {
                log::info!("All {} bricks cleared", state.destructible_bricks);
                state.phase = GamePhase::Won;
            }
        }
    }
}

/// Move falling items; apply the ones the pad catches, drop the ones that
/// leave the stage
fn sweep_items<R: RngCore>(state: &mut GameState<R>) {
    for index in (0..state.items.len()).rev() {
        state.items[index].advance();
        let pos = state.items[index].pos;

        if state.pad.rect.contains_point(pos) {
            let item = state.items.remove(index);
            log::debug!("Picked up {:?}", item.kind);
            match item.kind {
                ItemKind::Large => state.pad.size = PadSize::Large,
                ItemKind::Small => state.pad.size = PadSize::Small,
                ItemKind::PowerBall => state.ball.powerful = true,
            }
            state.burst(item.pos, item.color);
        } else if pos.y > state.stage.height {
            state.items.remove(index);
        }
    }
}

fn update_particles<R: RngCore>(state: &mut GameState<R>) {
    state.particles.retain_mut(|p| {
        p.update();
        !p.is_dead()
    });
}
