//! Audio cues
//!
//! The simulation never plays sound itself; the session maps events to
//! [`SoundEffect`]s and hands them to an [`AudioSink`]. The native sink rings
//! the terminal bell.

use std::io::Write;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Apple caught
    Collect,
    /// Bomb hit the player
    Explosion,
}

impl SoundEffect {
    /// Bell pulses used to tell the cues apart
    fn bells(&self) -> usize {
        match self {
            SoundEffect::Collect => 1,
            SoundEffect::Explosion => 2,
        }
    }
}

/// Fire-and-forget cue player
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Audio manager for the terminal host
pub struct AudioManager<W: Write> {
    out: W,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<W: Write> AudioManager<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AudioSink for AudioManager<W> {
    fn play(&mut self, effect: SoundEffect) {
        if self.effective_volume() <= 0.0 {
            return;
        }

        // The terminal bell has no volume control; a lost bell is harmless
        let bells = "\x07".repeat(effect.bells());
        if let Err(e) = self.out.write_all(bells.as_bytes()).and_then(|_| self.out.flush()) {
            log::warn!("Failed to play {:?}: {}", effect, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cues_ring_bell() {
        let mut audio = AudioManager::new(Vec::new());
        audio.play(SoundEffect::Collect);
        audio.play(SoundEffect::Explosion);
        assert_eq!(audio.into_inner(), b"\x07\x07\x07".to_vec());
    }

    #[test]
    fn test_muted_is_silent() {
        let mut audio = AudioManager::new(Vec::new());
        audio.set_muted(true);
        audio.play(SoundEffect::Explosion);
        assert_eq!(audio.effective_volume(), 0.0);
        assert!(audio.into_inner().is_empty());
    }

    #[test]
    fn test_zero_volume_is_silent() {
        let mut audio = AudioManager::new(Vec::new());
        audio.set_sfx_volume(-3.0);
        audio.play(SoundEffect::Collect);
        assert!(audio.into_inner().is_empty());
    }
}
