use std::io::Write;

use common::debug_log;
use common::games::EffectsBackend;
use common::games::effects::{sound_notes, total_duration_secs};

const BELL: &str = "\x07";
const BANNER: &str = "  ♥ ★ ♥ ★ ♥ ★  VICTORY  ★ ♥ ★ ♥ ★ ♥";

/// Terminal stand-ins for the confetti and the chime.
pub struct ConsoleEffects<W: Write> {
    out: W,
    sound_enabled: bool,
    celebration_enabled: bool,
}

impl<W: Write> ConsoleEffects<W> {
    pub fn new(out: W, sound_enabled: bool, celebration_enabled: bool) -> Self {
        Self {
            out,
            sound_enabled,
            celebration_enabled,
        }
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.out
    }
}

impl<W: Write> EffectsBackend for ConsoleEffects<W> {
    fn celebrate(&mut self) -> Result<(), String> {
        if !self.celebration_enabled {
            return Ok(());
        }
        writeln!(self.out, "{}", BANNER).map_err(|e| format!("Console unavailable: {}", e))
    }

    fn stop_celebration(&mut self) -> Result<(), String> {
        Ok(())
    }

    fn play_sound(&mut self, name: &str) -> Result<(), String> {
        let notes = sound_notes(name).ok_or_else(|| format!("Unknown sound '{}'", name))?;
        if !self.sound_enabled {
            return Ok(());
        }

        debug_log!(
            "Playing {} ({} notes, {:.1}s)",
            name,
            notes.len(),
            total_duration_secs(notes)
        );
        write!(self.out, "{}", BELL)
            .and_then(|_| self.out.flush())
            .map_err(|e| format!("Console unavailable: {}", e))
    }
}
