//! Apple Catcher entry point
//!
//! Sets up the terminal and runs the fixed-rate frame loop.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Context;
use crossterm::{
    ExecutableCommand, QueueableCommand, cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    terminal,
};
use glam::Vec2;

use apple_catcher::audio::AudioManager;
use apple_catcher::consts::SIM_HZ;
use apple_catcher::platform::{KeyboardInput, spawn_event_reader};
use apple_catcher::renderer::terminal::CELL_WIDTH;
use apple_catcher::renderer::{TerminalRenderer, TextStyle};
use apple_catcher::sim::GameState;
use apple_catcher::{GameSession, Settings};

const PAUSED_TEXT: &str = "PAUSED - P TO RESUME";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = Settings::load_or_default(path.as_deref())?;
    let seed = settings.seed.unwrap_or_else(clock_seed);
    let state = GameState::with_tuning(settings.tuning.clone(), seed)?;
    log::info!("Apple Catcher starting (seed {})", seed);

    let mut out = BufWriter::new(io::stdout());
    let guard = TerminalGuard::enter(&mut out)?;

    let keyboard_enhanced = guard.keyboard_enhanced;
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal(keyboard_enhanced);
        default_hook(info);
    }));

    let result = run(&mut out, state, &settings);
    drop(guard);

    if let Ok(score) = &result {
        println!("Final score: {}", score);
    }
    result.map(|_| ())
}

/// Raw mode and alternate screen, restored on drop
struct TerminalGuard {
    keyboard_enhanced: bool,
}

impl TerminalGuard {
    fn enter<W: Write>(out: &mut W) -> anyhow::Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        let mut guard = Self {
            keyboard_enhanced: false,
        };
        out.execute(terminal::EnterAlternateScreen)?;
        out.execute(cursor::Hide)?;

        // Release events let held keys stop immediately; other terminals fall back to repeats
        guard.keyboard_enhanced = out
            .execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))
            .is_ok();
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal(self.keyboard_enhanced);
    }
}

/// Best-effort terminal reset; safe to call more than once
fn restore_terminal(keyboard_enhanced: bool) {
    let mut out = io::stdout();
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();
}

/// Seed for runs without a fixed one
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Frame loop; returns the score shown when the player quit
fn run<W: Write>(out: &mut W, state: GameState, settings: &Settings) -> anyhow::Result<u64> {
    let frame = Duration::from_secs(1) / SIM_HZ;

    let mut renderer = TerminalRenderer::new(state.tuning.width, state.tuning.height);
    let (term_cols, term_rows) = terminal::size()?;
    if term_cols < renderer.cols() || term_rows < renderer.rows() {
        log::warn!(
            "Terminal is {}x{}, playfield needs {}x{}; output will be clipped",
            term_cols,
            term_rows,
            renderer.cols(),
            renderer.rows()
        );
    }
    renderer.set_origin(
        term_cols.saturating_sub(renderer.cols()) / 2,
        term_rows.saturating_sub(renderer.rows()) / 2,
    );

    let mut audio = AudioManager::new(io::stdout());
    audio.set_master_volume(settings.master_volume);
    audio.set_sfx_volume(settings.sfx_volume);
    audio.set_muted(settings.muted);

    let input = KeyboardInput::new(spawn_event_reader());
    let mut session = GameSession::new(state, renderer, input, audio);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut paused = false;
    let mut fps = 0u32;
    let mut frames_this_second = 0u32;
    let mut second_start = Instant::now();

    loop {
        let frame_start = Instant::now();

        session.input_mut().poll();
        if session.input_mut().quit_requested() {
            break;
        }
        if session.input_mut().take_pause_toggle() {
            paused = !paused;
            log::info!("{}", if paused { "Paused" } else { "Resumed" });
        }

        if paused {
            let pos = Vec2::new(0.0, session.state().tuning.height / 2.0);
            session.draw_overlay(pos, PAUSED_TEXT, TextStyle::default());
        } else {
            session.tick();
        }

        frames_this_second += 1;
        if second_start.elapsed() >= Duration::from_secs(1) {
            fps = frames_this_second;
            frames_this_second = 0;
            second_start = Instant::now();
        }
        if settings.show_fps {
            let text = format!("FPS: {:>3}", fps);
            let x = session.state().tuning.width - CELL_WIDTH * text.len() as f32;
            session.draw_overlay(Vec2::new(x, 0.0), &text, TextStyle::default());
        }

        session.renderer().present(out)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            std::thread::sleep(frame - elapsed);
        }
    }

    Ok(session.state().score)
}
