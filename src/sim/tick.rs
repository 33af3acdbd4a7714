//! Fixed timestep simulation tick
//!
//! Scene machine: Title -> Playing -> GameOver -> Playing. Each call advances
//! exactly one frame in the order player, items, collisions, refill, clock.

use super::state::{GameEvent, GameState, Scene};

/// Input commands for a single tick (sampled once, before the tick runs)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Horizontal direction; only the sign is used
    pub axis: i8,
    /// Start/restart, true only on the frame the key went down
    pub start: bool,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.scene {
        Scene::Title => tick_title(state, input),
        Scene::Playing => tick_playing(state, input),
        Scene::GameOver => tick_game_over(state, input),
    }
}

fn tick_title(state: &mut GameState, input: &TickInput) {
    if input.start {
        state.set_scene(Scene::Playing);
    }
}

fn tick_playing(state: &mut GameState, input: &TickInput) {
    state.player.update(input.axis, &state.tuning);

    let hits = state
        .items
        .update(&state.player, &mut state.rng, &state.tuning, state.time_ticks);
    for event in hits {
        match event {
            GameEvent::AppleCaught { points } => state.score += points,
            GameEvent::BombHit => state.game_over = true,
            GameEvent::SceneChanged { .. } => {}
        }
        state.events.push(event);
    }

    state.time_ticks += 1;

    // The fatal frame still renders as Playing; the switch lands after it
    if state.game_over {
        state.set_scene(Scene::GameOver);
    }
}

fn tick_game_over(state: &mut GameState, input: &TickInput) {
    if input.start {
        state.reset_run();
        log::info!("Run restarted");
        state.set_scene(Scene::Playing);
    }
}
