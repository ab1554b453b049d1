use wasm_bindgen::JsValue;
use web_sys::{AudioContext, AudioContextState, OscillatorType};

use super::tone::{AudioError, Tone, ToneSink};

/// Plays tones through Web Audio. The context is opened on the first tone
/// and kept for the widget's lifetime; every tone gets fresh nodes.
#[derive(Default)]
pub struct WebAudioSink {
    context: Option<AudioContext>,
}

fn describe(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl WebAudioSink {
    pub fn new() -> Self {
        Self::default()
    }

    fn context(&mut self) -> Result<&AudioContext, AudioError> {
        if self.context.is_none() {
            let ctx = AudioContext::new().map_err(|e| AudioError::Unavailable(describe(e)))?;
            self.context = Some(ctx);
        }
        let Some(ctx) = self.context.as_ref() else {
            return Err(AudioError::Unavailable("no audio context".into()));
        };
        // Contexts start suspended until the page has seen a user gesture.
        // A closed context refuses to resume and can't play anything.
        if ctx.state() == AudioContextState::Suspended {
            ctx.resume().map_err(|e| AudioError::Unavailable(describe(e)))?;
        }
        Ok(ctx)
    }
}

impl ToneSink for WebAudioSink {
    fn play(&mut self, tone: &Tone) -> Result<(), AudioError> {
        let ctx = self.context()?;
        let graph = |e: JsValue| AudioError::Graph(describe(e));

        let oscillator = ctx.create_oscillator().map_err(graph)?;
        let gain = ctx.create_gain().map_err(graph)?;
        oscillator.connect_with_audio_node(&gain).map_err(graph)?;
        gain.connect_with_audio_node(&ctx.destination()).map_err(graph)?;

        let now = ctx.current_time();
        oscillator.set_type(OscillatorType::Sine);
        oscillator
            .frequency()
            .set_value_at_time(tone.frequency_hz, now)
            .map_err(graph)?;

        let level = gain.gain();
        level.set_value_at_time(0.0, now).map_err(graph)?;
        level
            .linear_ramp_to_value_at_time(tone.peak_gain, now + tone.attack_secs)
            .map_err(graph)?;
        level
            .exponential_ramp_to_value_at_time(tone.floor_gain, now + tone.duration_secs)
            .map_err(graph)?;

        oscillator.start_with_when(now).map_err(graph)?;
        oscillator.stop_with_when(now + tone.duration_secs).map_err(graph)?;
        Ok(())
    }
}
