pub const VICTORY_SOUND: &str = "victory";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Note {
    pub frequency_hz: f32,
    pub duration_secs: f32,
}

impl Note {
    const fn new(frequency_hz: f32, duration_secs: f32) -> Self {
        Self {
            frequency_hz,
            duration_secs,
        }
    }
}

/// C5 E5 G5 then a held C6, sine voiced, played back to back.
pub const VICTORY_CHIME: [Note; 4] = [
    Note::new(523.25, 0.2),
    Note::new(659.25, 0.2),
    Note::new(783.99, 0.2),
    Note::new(1046.50, 0.5),
];

pub fn sound_notes(name: &str) -> Option<&'static [Note]> {
    match name {
        VICTORY_SOUND => Some(&VICTORY_CHIME),
        _ => None,
    }
}

pub fn total_duration_secs(notes: &[Note]) -> f32 {
    notes.iter().map(|note| note.duration_secs).sum()
}

/// Decorative output. Failures are reported to the caller, which logs and
/// drops them.
pub trait EffectsBackend {
    fn celebrate(&mut self) -> Result<(), String>;
    fn stop_celebration(&mut self) -> Result<(), String>;
    fn play_sound(&mut self, name: &str) -> Result<(), String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct NoEffects;

impl EffectsBackend for NoEffects {
    fn celebrate(&mut self) -> Result<(), String> {
        Ok(())
    }

    fn stop_celebration(&mut self) -> Result<(), String> {
        Ok(())
    }

    fn play_sound(&mut self, _name: &str) -> Result<(), String> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_victory_chime_lookup() {
        let notes = sound_notes(VICTORY_SOUND).unwrap();
        assert_eq!(notes.len(), 4);
        assert_eq!(notes[0].frequency_hz, 523.25);
        assert_eq!(notes[3].duration_secs, 0.5);
        assert!((total_duration_secs(notes) - 1.1).abs() < 1e-5);
    }

    #[test]
    fn test_unknown_sound() {
        assert!(sound_notes("fanfare").is_none());
    }
}
