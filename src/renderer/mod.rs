//! Rendering interface
//!
//! The core describes each frame through three primitives on [`Renderer`];
//! [`draw_frame`] decides what is visible in each scene. The terminal
//! implementation lives in [`terminal`].

pub mod terminal;

use glam::Vec2;

use crate::sim::{GameState, ItemKind, Scene};

pub use terminal::TerminalRenderer;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

pub const SKY: Rgb = Rgb::new(128, 255, 255);
pub const GRASS: Rgb = Rgb::new(0, 128, 0);
pub const TEXT: Rgb = Rgb::new(255, 255, 255);
pub const TEXT_SHADOW: Rgb = Rgb::new(0, 0, 0);

/// Axis-aligned rectangle in playfield pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + w, y + h),
        }
    }
}

/// What an entity looks like
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visual {
    /// Walk-cycle frame `0..4`
    Player { frame: usize },
    Apple,
    Bomb,
}

impl From<ItemKind> for Visual {
    fn from(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Apple => Visual::Apple,
            ItemKind::Bomb => Visual::Bomb,
        }
    }
}

/// A visual with its on-screen size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sprite {
    pub visual: Visual,
    pub size: Vec2,
}

/// Text appearance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStyle {
    pub color: Rgb,
    pub bold: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: TEXT,
            bold: false,
        }
    }
}

/// Drawing primitives the core relies on
pub trait Renderer {
    /// Called once before a frame is described
    fn begin_frame(&mut self) {}

    fn draw_box(&mut self, rect: Rect, color: Rgb);

    fn draw_sprite(&mut self, sprite: Sprite, pos: Vec2);

    fn draw_text(&mut self, pos: Vec2, text: &str, style: TextStyle);
}

pub const START_PROMPT: &str = "PRESS SPACE TO START";
pub const RESTART_PROMPT: &str = "PRESS SPACE TO RESTART";

/// Describe the current frame
///
/// Title shows the field, score and start prompt. Playing adds the items and
/// player. GameOver draws the frozen field with the restart prompt on top.
pub fn draw_frame<R: Renderer + ?Sized>(state: &GameState, renderer: &mut R) {
    renderer.begin_frame();
    draw_background(state, renderer);

    match state.scene {
        Scene::Title => {
            draw_score(state, renderer);
            draw_prompt(renderer, START_PROMPT);
        }
        Scene::Playing => {
            draw_entities(state, renderer);
            draw_score(state, renderer);
        }
        Scene::GameOver => {
            draw_entities(state, renderer);
            draw_score(state, renderer);
            draw_prompt(renderer, RESTART_PROMPT);
        }
    }
}

fn draw_background<R: Renderer + ?Sized>(state: &GameState, renderer: &mut R) {
    let t = &state.tuning;
    renderer.draw_box(Rect::new(0.0, 0.0, t.width, t.height), SKY);
    renderer.draw_box(
        Rect::new(0.0, t.ground_y, t.width, t.height - t.ground_y),
        GRASS,
    );
}

fn draw_entities<R: Renderer + ?Sized>(state: &GameState, renderer: &mut R) {
    let item_size = Vec2::splat(state.tuning.item_size);
    for item in state.items.items() {
        let sprite = Sprite {
            visual: item.kind.into(),
            size: item_size,
        };
        renderer.draw_sprite(sprite, item.pos);
    }

    let player = &state.player;
    let sprite = Sprite {
        visual: Visual::Player {
            frame: player.anim_frame(),
        },
        size: Vec2::splat(player.size),
    };
    renderer.draw_sprite(sprite, player.pos);
}

fn draw_score<R: Renderer + ?Sized>(state: &GameState, renderer: &mut R) {
    let text = format!("SCORE: {}", state.score);
    renderer.draw_text(Vec2::ZERO, &text, TextStyle::default());
}

fn draw_prompt<R: Renderer + ?Sized>(renderer: &mut R, prompt: &str) {
    let style = TextStyle {
        color: TEXT,
        bold: true,
    };
    renderer.draw_text(Vec2::new(0.0, 30.0), prompt, style);
}
