use thiserror::Error;

use super::profile::SoundKind;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("audio output unavailable: {0}")]
    Unavailable(String),
    #[error("failed to build tone graph: {0}")]
    Graph(String),
}

/// A short sine blip: linear attack to `peak_gain`, exponential decay to
/// `floor_gain` at `duration_secs`, then silence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub peak_gain: f32,
    pub attack_secs: f64,
    pub floor_gain: f32,
    pub duration_secs: f64,
}

impl Tone {
    pub fn for_sound(sound: SoundKind) -> Self {
        Self::at(sound.frequency_hz())
    }

    pub fn at(frequency_hz: f32) -> Self {
        Self {
            frequency_hz,
            peak_gain: 0.1,
            attack_secs: 0.01,
            floor_gain: 0.01,
            duration_secs: 0.2,
        }
    }

    /// Envelope value `t` seconds after the tone starts.
    #[cfg(test)]
    pub fn gain_at(&self, t: f64) -> f32 {
        if t <= 0.0 || t > self.duration_secs {
            return 0.0;
        }
        let peak = self.peak_gain as f64;
        if t < self.attack_secs {
            return (peak * t / self.attack_secs) as f32;
        }
        let decay_span = self.duration_secs - self.attack_secs;
        if decay_span <= 0.0 {
            return self.floor_gain;
        }
        let progress = (t - self.attack_secs) / decay_span;
        let ratio = self.floor_gain as f64 / peak;
        (peak * ratio.powf(progress)) as f32
    }
}

/// Somewhere tones can be played. Fire-and-forget.
pub trait ToneSink {
    fn play(&mut self, tone: &Tone) -> Result<(), AudioError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn envelope_rises_then_decays() {
        let tone = Tone::for_sound(SoundKind::SoftBeep);
        assert_eq!(tone.frequency_hz, 800.0);
        assert_eq!(tone.gain_at(0.0), 0.0);
        assert!(close(tone.gain_at(0.005), 0.05));
        assert!(close(tone.gain_at(0.01), 0.1));
        assert!(close(tone.gain_at(0.2), 0.01));
        assert_eq!(tone.gain_at(0.25), 0.0);
    }

    #[test]
    fn decay_is_monotonic() {
        let tone = Tone::at(500.0);
        let mut last = tone.gain_at(0.01);
        let mut t = 0.02;
        while t <= 0.2 {
            let g = tone.gain_at(t);
            assert!(g < last);
            last = g;
            t += 0.01;
        }
    }
}
