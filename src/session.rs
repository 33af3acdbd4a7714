//! Game session
//!
//! Binds the simulation to its collaborators. The host calls
//! [`GameSession::tick`] once per frame: sample input, advance the
//! simulation, play the cues it raised, describe the frame. The simulation
//! state is only changed through `tick`.

use glam::Vec2;

use crate::audio::{AudioSink, SoundEffect};
use crate::input::{self, InputSource};
use crate::renderer::{Renderer, TextStyle, draw_frame};
use crate::sim::{self, GameEvent, GameState};

pub struct GameSession<R, I, A> {
    state: GameState,
    renderer: R,
    input: I,
    audio: A,
}

impl<R: Renderer, I: InputSource, A: AudioSink> GameSession<R, I, A> {
    pub fn new(state: GameState, renderer: R, input: I, audio: A) -> Self {
        Self {
            state,
            renderer,
            input,
            audio,
        }
    }

    /// Run one frame
    pub fn tick(&mut self) {
        let input = input::sample(&mut self.input);
        sim::tick(&mut self.state, &input);

        for event in self.state.take_events() {
            match event {
                GameEvent::AppleCaught { .. } => self.audio.play(SoundEffect::Collect),
                GameEvent::BombHit => self.audio.play(SoundEffect::Explosion),
                GameEvent::SceneChanged { .. } => {}
            }
        }

        draw_frame(&self.state, &mut self.renderer);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Draw host text (pause banner, FPS) over the last frame
    pub fn draw_overlay(&mut self, pos: Vec2, text: &str, style: TextStyle) {
        self.renderer.draw_text(pos, text, style);
    }

    /// The input device, for host-side polling between ticks
    pub fn input_mut(&mut self) -> &mut I {
        &mut self.input
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }
}
