//! End-to-end session tests against recording collaborators.

use std::collections::VecDeque;

use glam::Vec2;

use apple_catcher::GameSession;
use apple_catcher::audio::{AudioSink, SoundEffect};
use apple_catcher::input::{EdgeTrigger, InputSource};
use apple_catcher::renderer::{
    RESTART_PROMPT, Rect, Renderer, Rgb, START_PROMPT, Sprite, TextStyle, Visual,
};
use apple_catcher::sim::{self, GameState, Item, ItemKind, Scene, TickInput};

/// Replays a script of (start held, axis) levels, one per frame
#[derive(Default)]
struct ScriptedInput {
    frames: VecDeque<(bool, i8)>,
    current: (bool, i8),
    start: EdgeTrigger,
}

impl ScriptedInput {
    fn hold_start(&mut self, frames: usize) {
        self.frames.extend(std::iter::repeat_n((true, 0), frames));
    }

    fn release(&mut self, frames: usize) {
        self.frames.extend(std::iter::repeat_n((false, 0), frames));
    }
}

impl InputSource for ScriptedInput {
    // sample() reads the axis first, so that is where a frame is consumed
    fn horizontal_axis(&mut self) -> i8 {
        self.current = self.frames.pop_front().unwrap_or((false, 0));
        self.current.1
    }

    fn start_pressed(&mut self) -> bool {
        self.start.update(self.current.0)
    }
}

#[derive(Default)]
struct RecordingAudio {
    played: Vec<SoundEffect>,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, effect: SoundEffect) {
        self.played.push(effect);
    }
}

#[derive(Default)]
struct RecordingRenderer {
    frames: usize,
    sprites: Vec<(Visual, Vec2)>,
    texts: Vec<String>,
}

impl Renderer for RecordingRenderer {
    fn begin_frame(&mut self) {
        self.frames += 1;
        self.sprites.clear();
        self.texts.clear();
    }

    fn draw_box(&mut self, _rect: Rect, _color: Rgb) {}

    fn draw_sprite(&mut self, sprite: Sprite, pos: Vec2) {
        self.sprites.push((sprite.visual, pos));
    }

    fn draw_text(&mut self, _pos: Vec2, text: &str, _style: TextStyle) {
        self.texts.push(text.to_string());
    }
}

type TestSession = GameSession<RecordingRenderer, ScriptedInput, RecordingAudio>;

fn session(seed: u64) -> TestSession {
    session_with(GameState::new(seed), ScriptedInput::default())
}

fn session_with(state: GameState, input: ScriptedInput) -> TestSession {
    GameSession::new(
        state,
        RecordingRenderer::default(),
        input,
        RecordingAudio::default(),
    )
}

/// A state that has just left the title screen
fn playing_state(seed: u64) -> GameState {
    let mut state = GameState::new(seed);
    sim::tick(&mut state, &TickInput { axis: 0, start: true });
    assert_eq!(state.scene, Scene::Playing);
    state
}

fn start(session: &mut TestSession) {
    session.input_mut().hold_start(1);
    session.tick();
    assert_eq!(session.state().scene, Scene::Playing);
}

/// Replace the pool with `item` plus slow fillers parked far to the right
fn stage(state: &mut GameState, kind: ItemKind, pos: Vec2, speed: f32) -> u32 {
    state.items.clear();
    let id = state.items.next_item_id();
    let item = Item::new(id, kind, pos, speed, &state.tuning);
    state.items.push(item);
    while state.items.len() < state.items.capacity() {
        let filler_id = state.items.next_item_id();
        let filler = Item::new(
            filler_id,
            ItemKind::Bomb,
            Vec2::new(540.0, -100.0),
            1.0,
            &state.tuning,
        );
        state.items.push(filler);
    }
    id
}

#[test]
fn title_is_inert_without_start() {
    let mut s = session(1);
    for _ in 0..1000 {
        s.tick();
    }
    assert_eq!(s.state().scene, Scene::Title);
    assert_eq!(s.state().score, 0);
    assert_eq!(s.state().time_ticks, 0);
    assert!(s.audio().played.is_empty());
    assert_eq!(s.renderer().frames, 1000);
    assert_eq!(s.renderer().texts, vec!["SCORE: 0", START_PROMPT]);
}

#[test]
fn held_start_triggers_once() {
    let mut s = session(2);
    s.input_mut().hold_start(30);
    for _ in 0..30 {
        s.tick();
    }
    assert_eq!(s.state().scene, Scene::Playing);
    assert_eq!(s.state().time_ticks, 29);
}

#[test]
fn apple_falls_onto_stationary_player() {
    let mut state = playing_state(3);
    state.player.pos.x = 100.0;
    let apple = stage(&mut state, ItemKind::Apple, Vec2::new(100.0, -100.0), 5.0);
    let mut s = session_with(state, ScriptedInput::default());

    // Hitbox bottom (y + 80) first passes the player's head (368) at y = 290
    for _ in 0..77 {
        s.tick();
    }
    assert_eq!(s.state().score, 0);
    assert!(s.state().items.items().iter().any(|i| i.id == apple));

    s.tick();
    assert_eq!(s.state().score, 10);
    assert!(s.state().items.items().iter().all(|i| i.id != apple));
    assert_eq!(s.state().items.len(), 5);
    assert_eq!(s.state().scene, Scene::Playing);
    assert_eq!(s.audio().played, vec![SoundEffect::Collect]);
}

#[test]
fn bomb_ends_run_and_restart_resets() {
    let mut state = playing_state(4);
    let (x, y) = (state.player.pos.x, state.player.pos.y);
    stage(&mut state, ItemKind::Bomb, Vec2::new(x, y - 70.0), 1.0);
    let mut s = session_with(state, ScriptedInput::default());

    s.tick();
    assert_eq!(s.state().scene, Scene::GameOver);
    assert_eq!(s.audio().played, vec![SoundEffect::Explosion]);
    // Frozen frame is still drawn, with the restart prompt on top
    assert_eq!(s.renderer().sprites.len(), 6);
    assert_eq!(s.renderer().texts, vec!["SCORE: 0", RESTART_PROMPT]);

    let frozen = s.state().items.items().to_vec();
    s.input_mut().release(50);
    for _ in 0..50 {
        s.tick();
    }
    assert_eq!(s.state().scene, Scene::GameOver);
    assert_eq!(s.state().items.items(), &frozen[..]);

    s.input_mut().hold_start(1);
    s.tick();
    assert_eq!(s.state().scene, Scene::Playing);
    assert_eq!(s.state().score, 0);
    assert_eq!(s.state().time_ticks, 0);
    assert_eq!(s.state().player.pos, Vec2::new(240.0, 368.0));
    assert!(s.state().items.is_empty());

    s.tick();
    assert_eq!(s.state().items.len(), 5);
    assert_eq!(s.state().time_ticks, 1);
}

#[test]
fn held_restart_does_not_skip_game_over() {
    let mut state = playing_state(5);
    let (x, y) = (state.player.pos.x, state.player.pos.y);
    stage(&mut state, ItemKind::Bomb, Vec2::new(x, y - 70.0), 1.0);

    // Start is still held from the title screen when the bomb lands
    let mut input = ScriptedInput::default();
    input.start.update(true);
    input.hold_start(10);
    let mut s = session_with(state, input);
    for _ in 0..10 {
        s.tick();
    }
    assert_eq!(s.state().scene, Scene::GameOver);
}

#[test]
fn long_run_keeps_invariants() {
    let mut s = session(6);
    start(&mut s);
    let mut last_score = 0;
    let mut restarts = 0;
    for step in 0..20_000u32 {
        if s.state().scene == Scene::GameOver {
            // Release a frame first so the restart is a fresh press
            s.input_mut().release(1);
            s.input_mut().hold_start(1);
            s.tick();
            s.tick();
            last_score = 0;
            restarts += 1;
            continue;
        }
        let axis = match (step / 45) % 3 {
            0 => -1,
            1 => 1,
            _ => 0,
        };
        s.input_mut().frames.push_back((false, axis));
        s.tick();

        let state = s.state();
        assert!(state.score >= last_score);
        last_score = state.score;
        assert!(state.items.len() <= state.items.capacity());
        let (min_x, max_x) = state.tuning.player_x_bounds();
        assert!((min_x..=max_x).contains(&state.player.pos.x));
    }
    assert!(restarts > 0, "an 80% bomb rain should end at least one run");
}

#[test]
fn overlay_text_is_drawn_after_the_frame() {
    let mut s = session(7);
    s.tick();
    s.draw_overlay(Vec2::ZERO, "PAUSED", TextStyle::default());
    assert_eq!(s.renderer().texts, vec!["SCORE: 0", START_PROMPT, "PAUSED"]);
    assert_eq!(s.state().scene, Scene::Title);
}
