//! Gate, schedule and clear robot reactions.
//!
//! The controller never touches a clock or a timer itself. Callers pass the
//! current time in, and every scheduled callback is handed back as a
//! [`ScheduledTimer`] for the host to run. A timer's token carries the cycle
//! it was created in; firing a token that is no longer current is a no-op,
//! which is what keeps late callbacks from clobbering fresher state.

use log::{debug, info};

use super::body_part::BodyPart;
use super::config::{CooldownAnchor, ReactionConfig};
use super::profile::ReactionProfile;
use super::tone::{Tone, ToneSink};

/// Milliseconds on whatever monotonic-enough clock the host uses.
pub type Millis = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    ReactionEnd,
    CooldownEnd,
    MessageClear,
}

impl TimerKind {
    const COUNT: usize = 3;

    fn slot(self) -> usize {
        match self {
            TimerKind::ReactionEnd => 0,
            TimerKind::CooldownEnd => 1,
            TimerKind::MessageClear => 2,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TimerToken {
    kind: TimerKind,
    cycle: u64,
}

impl TimerToken {
    pub fn kind(&self) -> TimerKind {
        self.kind
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledTimer {
    pub token: TimerToken,
    pub delay_ms: Millis,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReactionState {
    pub active: Option<BodyPart>,
    pub cooldown_until: Option<Millis>,
    pub started_at: Millis,
    pub message: Option<String>,
}

/// What the visual layer gets to see.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReactionView {
    pub active: Option<BodyPart>,
    pub message: Option<String>,
    pub started_at: Millis,
    pub intensity: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ignored {
    Disabled,
    Reacting(BodyPart),
    CoolingDown { remaining_ms: Millis },
    TornDown,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Started {
    pub part: BodyPart,
    pub started_at: Millis,
    pub timers: Vec<ScheduledTimer>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TriggerOutcome {
    Started(Started),
    Ignored(Ignored),
}

impl TriggerOutcome {
    #[cfg(test)]
    pub fn is_started(&self) -> bool {
        matches!(self, TriggerOutcome::Started(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerOutcome {
    Stale,
    Applied { follow_up: Option<ScheduledTimer> },
}

pub struct ReactionController {
    config: ReactionConfig,
    state: ReactionState,
    pending: [Option<u64>; TimerKind::COUNT],
    cycle: u64,
    revision: u64,
    torn_down: bool,
    audio_enabled: bool,
    sink: Box<dyn ToneSink>,
}

impl ReactionController {
    pub fn new(config: ReactionConfig, sink: Box<dyn ToneSink>) -> Self {
        Self {
            config,
            state: ReactionState::default(),
            pending: [None; TimerKind::COUNT],
            cycle: 0,
            revision: 0,
            torn_down: false,
            audio_enabled: true,
            sink,
        }
    }

    pub fn config(&self) -> &ReactionConfig {
        &self.config
    }

    #[cfg(test)]
    pub fn state(&self) -> &ReactionState {
        &self.state
    }

    pub fn view(&self) -> ReactionView {
        ReactionView {
            active: self.state.active,
            message: self.state.message.clone(),
            started_at: self.state.started_at,
            intensity: self.config.intensity,
        }
    }

    /// Bumped on every state mutation.
    #[cfg(test)]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_cooling_down(&self, now: Millis) -> bool {
        self.state.cooldown_until.map_or(false, |until| now < until)
    }

    #[cfg(test)]
    pub fn audio_enabled(&self) -> bool {
        self.audio_enabled
    }

    pub fn set_audio_enabled(&mut self, enabled: bool) {
        self.audio_enabled = enabled;
    }

    pub fn trigger_reaction(&mut self, part: BodyPart, now: Millis) -> TriggerOutcome {
        if let Some(reason) = self.gate(now) {
            debug!("Ignoring {} trigger: {:?}", part, reason);
            return TriggerOutcome::Ignored(reason);
        }

        self.cycle += 1;
        let cycle = self.cycle;
        let profile = self.config.profiles.get(part).clone();
        let mut timers = Vec::with_capacity(TimerKind::COUNT);

        self.state.active = Some(part);
        self.state.started_at = now;
        timers.push(self.arm(TimerKind::ReactionEnd, profile.duration_ms));

        if self.config.cooldown_anchor == CooldownAnchor::Trigger {
            self.state.cooldown_until = Some(now + self.config.cooldown_ms);
            timers.push(self.arm(TimerKind::CooldownEnd, self.config.cooldown_ms));
        }

        if let Some(message) = profile.message_for(cycle - 1) {
            self.state.message = Some(message.to_string());
            if let Some(display_ms) = self.config.message_display_ms {
                timers.push(self.arm(TimerKind::MessageClear, display_ms));
            }
        }
        self.touch();

        self.play(&profile);
        info!(
            "Robot reacting: {} ({:?}, {}ms)",
            part.label(self.config.classifier.taxonomy),
            profile.animation,
            profile.duration_ms
        );

        TriggerOutcome::Started(Started {
            part,
            started_at: now,
            timers,
        })
    }

    pub fn fire(&mut self, token: TimerToken, now: Millis) -> TimerOutcome {
        if self.torn_down || self.pending[token.kind.slot()] != Some(token.cycle) {
            debug!("Dropping stale {:?} timer", token.kind);
            return TimerOutcome::Stale;
        }
        self.pending[token.kind.slot()] = None;

        let mut follow_up = None;
        match token.kind {
            TimerKind::ReactionEnd => {
                self.state.active = None;
                if self.config.message_display_ms.is_none() {
                    self.state.message = None;
                }
                if self.config.cooldown_anchor == CooldownAnchor::ReactionEnd {
                    self.state.cooldown_until = Some(now + self.config.cooldown_ms);
                    follow_up = Some(self.arm(TimerKind::CooldownEnd, self.config.cooldown_ms));
                }
            }
            TimerKind::CooldownEnd => {
                self.state.cooldown_until = None;
            }
            TimerKind::MessageClear => {
                self.state.message = None;
            }
        }
        self.touch();
        TimerOutcome::Applied { follow_up }
    }

    /// Invalidates every outstanding timer. Nothing mutates state afterwards.
    pub fn teardown(&mut self) {
        self.torn_down = true;
        self.pending = [None; TimerKind::COUNT];
    }

    fn gate(&self, now: Millis) -> Option<Ignored> {
        if self.torn_down {
            return Some(Ignored::TornDown);
        }
        if !self.config.enabled {
            return Some(Ignored::Disabled);
        }
        if let Some(part) = self.state.active {
            return Some(Ignored::Reacting(part));
        }
        match self.state.cooldown_until {
            Some(until) if now < until => Some(Ignored::CoolingDown {
                remaining_ms: until - now,
            }),
            _ => None,
        }
    }

    fn arm(&mut self, kind: TimerKind, delay_ms: Millis) -> ScheduledTimer {
        self.pending[kind.slot()] = Some(self.cycle);
        ScheduledTimer {
            token: TimerToken {
                kind,
                cycle: self.cycle,
            },
            delay_ms,
        }
    }

    fn touch(&mut self) {
        self.revision += 1;
    }

    fn play(&mut self, profile: &ReactionProfile) {
        if !self.audio_enabled {
            return;
        }
        let Some(sound) = profile.sound else {
            return;
        };
        if let Err(e) = self.sink.play(&Tone::for_sound(sound)) {
            debug!("Audio not available: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::profile::AnimationKind;
    use crate::robot::tone::AudioError;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct RecordingSink {
        played: Rc<RefCell<Vec<Tone>>>,
    }

    impl ToneSink for RecordingSink {
        fn play(&mut self, tone: &Tone) -> Result<(), AudioError> {
            self.played.borrow_mut().push(*tone);
            Ok(())
        }
    }

    struct BrokenSink;

    impl ToneSink for BrokenSink {
        fn play(&mut self, _tone: &Tone) -> Result<(), AudioError> {
            Err(AudioError::Unavailable("no device".into()))
        }
    }

    /// Virtual clock plus a queue of due timers, run in due order.
    struct Harness {
        controller: ReactionController,
        now: Millis,
        queue: Vec<(Millis, TimerToken)>,
    }

    impl Harness {
        fn new(config: ReactionConfig) -> Self {
            Self::with_sink(config, Box::new(RecordingSink::default()))
        }

        fn with_sink(config: ReactionConfig, sink: Box<dyn ToneSink>) -> Self {
            Self {
                controller: ReactionController::new(config, sink),
                now: 0,
                queue: Vec::new(),
            }
        }

        fn schedule(&mut self, timer: ScheduledTimer) {
            // A newer timer of the same kind replaces the old handle.
            self.queue.retain(|(_, t)| t.kind() != timer.token.kind());
            self.queue.push((self.now + timer.delay_ms, timer.token));
        }

        fn trigger(&mut self, part: BodyPart) -> TriggerOutcome {
            let outcome = self.controller.trigger_reaction(part, self.now);
            if let TriggerOutcome::Started(started) = &outcome {
                for timer in started.timers.clone() {
                    self.schedule(timer);
                }
            }
            outcome
        }

        fn advance_to(&mut self, until: Millis) {
            loop {
                self.queue.sort_by_key(|(due, _)| *due);
                match self.queue.first().copied() {
                    Some((due, token)) if due <= until => {
                        self.queue.remove(0);
                        self.now = due;
                        if let TimerOutcome::Applied { follow_up: Some(next) } =
                            self.controller.fire(token, due)
                        {
                            self.schedule(next);
                        }
                    }
                    _ => break,
                }
            }
            self.now = until;
        }

        fn active(&self) -> Option<BodyPart> {
            self.controller.state().active
        }

        fn message(&self) -> Option<String> {
            self.controller.state().message.clone()
        }
    }

    fn config_with(head_ms: Millis, cooldown_ms: Millis) -> ReactionConfig {
        let mut config = ReactionConfig::hero();
        config.profiles.get_mut(BodyPart::Head).duration_ms = head_ms;
        config.cooldown_ms = cooldown_ms;
        config
    }

    #[test]
    fn second_trigger_in_same_tick_is_ignored() {
        let mut h = Harness::new(ReactionConfig::hero());
        assert!(h.trigger(BodyPart::Head).is_started());
        let revision = h.controller.revision();

        let second = h.trigger(BodyPart::Torso);
        assert_eq!(second, TriggerOutcome::Ignored(Ignored::Reacting(BodyPart::Head)));
        assert_eq!(h.controller.revision(), revision);
        assert_eq!(h.active(), Some(BodyPart::Head));
    }

    #[test]
    fn head_reaction_blocks_then_releases() {
        let mut h = Harness::new(config_with(800, 500));
        assert!(h.trigger(BodyPart::Head).is_started());

        h.advance_to(400);
        assert!(!h.trigger(BodyPart::Head).is_started());
        assert_eq!(h.active(), Some(BodyPart::Head));

        h.advance_to(900);
        assert_eq!(h.active(), None);
        assert!(h.trigger(BodyPart::Head).is_started());
    }

    #[test]
    fn trigger_before_cooldown_expires_leaves_state_alone() {
        let mut h = Harness::new(config_with(400, 1000));
        h.trigger(BodyPart::Head);

        h.advance_to(600);
        assert_eq!(h.active(), None);
        let before = h.controller.state().clone();
        let revision = h.controller.revision();

        let outcome = h.trigger(BodyPart::Torso);
        assert_eq!(
            outcome,
            TriggerOutcome::Ignored(Ignored::CoolingDown { remaining_ms: 400 })
        );
        assert_eq!(h.controller.state(), &before);
        assert_eq!(h.controller.revision(), revision);
    }

    #[test]
    fn trigger_exactly_at_cooldown_deadline_succeeds() {
        let mut h = Harness::new(config_with(400, 1000));
        h.trigger(BodyPart::Head);
        h.advance_to(600);

        // Deadline reached even if the host has not run the cooldown timer yet.
        h.now = 1000;
        assert!(h.trigger(BodyPart::Torso).is_started());
        assert_eq!(h.active(), Some(BodyPart::Torso));
    }

    #[test]
    fn message_outlives_reaction() {
        let mut config = config_with(800, 500);
        config.profiles.head.messages = vec!["Ouch!".into()];
        let mut h = Harness::new(config);
        h.trigger(BodyPart::Head);
        assert_eq!(h.message().as_deref(), Some("Ouch!"));

        h.advance_to(800);
        assert_eq!(h.active(), None);
        assert_eq!(h.message().as_deref(), Some("Ouch!"));

        h.advance_to(1999);
        assert_eq!(h.message().as_deref(), Some("Ouch!"));
        h.advance_to(2000);
        assert_eq!(h.message(), None);
    }

    #[test]
    fn message_can_be_cut_short_before_reaction_ends() {
        let mut config = config_with(800, 500);
        config.message_display_ms = Some(300);
        let mut h = Harness::new(config);
        h.trigger(BodyPart::Head);

        h.advance_to(300);
        assert_eq!(h.message(), None);
        assert_eq!(h.active(), Some(BodyPart::Head));
    }

    #[test]
    fn stale_message_timer_does_not_clear_newer_message() {
        let mut config = config_with(400, 500);
        config.profiles.torso.messages = vec!["Hey!".into()];
        let mut h = Harness::new(config);

        h.trigger(BodyPart::Head);
        let first = h.queue.iter().find(|(_, t)| t.kind() == TimerKind::MessageClear).copied();
        h.advance_to(600);
        assert!(h.trigger(BodyPart::Torso).is_started());
        assert_eq!(h.message().as_deref(), Some("Hey!"));

        // The host failed to cancel the first message timer; it still fires.
        let (_, stale) = first.expect("first reaction scheduled a message clear");
        assert_eq!(h.controller.fire(stale, 2000), TimerOutcome::Stale);
        assert_eq!(h.message().as_deref(), Some("Hey!"));

        h.advance_to(2600);
        assert_eq!(h.message(), None);
    }

    #[test]
    fn reaction_bound_message_clears_with_reaction() {
        let mut h = Harness::new(ReactionConfig::hurt());
        h.trigger(BodyPart::LeftArm);
        assert_eq!(h.message().as_deref(), Some("Stop hitting my arm!"));

        h.advance_to(800);
        assert_eq!(h.active(), None);
        assert_eq!(h.message(), None);
    }

    #[test]
    fn hurt_messages_rotate_between_reactions() {
        let mut h = Harness::new(ReactionConfig::hurt());
        h.trigger(BodyPart::Head);
        h.advance_to(1000);
        h.trigger(BodyPart::Head);
        assert_eq!(h.message().as_deref(), Some("Stop hitting my head!"));
    }

    #[test]
    fn reaction_end_anchor_starts_cooldown_late() {
        let mut config = config_with(800, 500);
        config.cooldown_anchor = CooldownAnchor::ReactionEnd;
        let mut h = Harness::new(config);
        h.trigger(BodyPart::Head);
        assert_eq!(h.controller.state().cooldown_until, None);

        h.advance_to(900);
        assert_eq!(h.active(), None);
        assert_eq!(h.controller.state().cooldown_until, Some(1300));
        assert!(!h.trigger(BodyPart::Head).is_started());

        h.advance_to(1300);
        assert_eq!(h.controller.state().cooldown_until, None);
        assert!(h.trigger(BodyPart::Head).is_started());
    }

    #[test]
    fn reaction_end_and_cooldown_release_are_independent() {
        let mut h = Harness::new(config_with(800, 500));
        h.trigger(BodyPart::Head);

        h.advance_to(500);
        assert_eq!(h.controller.state().cooldown_until, None);
        assert_eq!(h.active(), Some(BodyPart::Head));
        assert!(!h.trigger(BodyPart::Torso).is_started());
    }

    #[test]
    fn teardown_stops_all_mutation() {
        let mut h = Harness::new(ReactionConfig::hero());
        h.trigger(BodyPart::Head);
        assert_eq!(h.queue.len(), 3);
        let revision = h.controller.revision();

        h.controller.teardown();
        let tokens: Vec<_> = h.queue.iter().map(|(_, t)| *t).collect();
        for token in tokens {
            assert_eq!(h.controller.fire(token, 5000), TimerOutcome::Stale);
        }
        assert_eq!(
            h.controller.trigger_reaction(BodyPart::Torso, 5000),
            TriggerOutcome::Ignored(Ignored::TornDown)
        );
        assert_eq!(h.controller.revision(), revision);
        assert_eq!(h.active(), Some(BodyPart::Head));
    }

    #[test]
    fn disabled_controller_ignores_everything() {
        let mut config = ReactionConfig::hero();
        config.enabled = false;
        let mut h = Harness::new(config);
        assert_eq!(h.trigger(BodyPart::Head), TriggerOutcome::Ignored(Ignored::Disabled));
        assert!(h.queue.is_empty());
    }

    #[test]
    fn plays_profile_sound_unless_muted() {
        let sink = RecordingSink::default();
        let played = sink.played.clone();
        let mut h = Harness::with_sink(ReactionConfig::quiet(), Box::new(sink));

        h.trigger(BodyPart::LeftArm);
        assert_eq!(played.borrow().len(), 1);
        assert_eq!(played.borrow()[0].frequency_hz, 1000.0);

        h.advance_to(1000);
        h.controller.set_audio_enabled(false);
        assert!(h.trigger(BodyPart::Head).is_started());
        assert_eq!(played.borrow().len(), 1);
    }

    #[test]
    fn silent_profile_plays_nothing() {
        let sink = RecordingSink::default();
        let played = sink.played.clone();
        let mut config = ReactionConfig::quiet();
        config.profiles.torso = ReactionProfile::new(AnimationKind::LeanBack, None, 600);
        let mut h = Harness::with_sink(config, Box::new(sink));

        h.trigger(BodyPart::Torso);
        assert!(played.borrow().is_empty());
    }

    #[test]
    fn audio_failure_does_not_block_reaction() {
        let mut h = Harness::with_sink(ReactionConfig::hero(), Box::new(BrokenSink));
        assert!(h.trigger(BodyPart::Head).is_started());
        assert_eq!(h.active(), Some(BodyPart::Head));
        assert!(h.message().is_some());
    }

    #[test]
    fn test_button_goes_through_the_gate() {
        let mut h = Harness::new(ReactionConfig::quiet());
        h.trigger(BodyPart::Torso);
        assert!(!h.trigger(BodyPart::Head).is_started());
    }

    #[test]
    fn view_carries_configured_intensity() {
        let config = ReactionConfig::quiet().with_sensitivity(crate::robot::config::Sensitivity::Low);
        let mut h = Harness::new(config);
        h.trigger(BodyPart::LeftArm);
        let view = h.controller.view();
        assert_eq!(view.active, Some(BodyPart::LeftArm));
        assert_eq!(view.intensity, 0.5);
    }
}
