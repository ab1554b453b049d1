use serde::{Deserialize, Serialize};

use super::body_part::BodyPart;

/// CSS animation a part plays while reacting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationKind {
    Startle,
    LeanBack,
    RecoilLeft,
    RecoilRight,
    StepAdjust,
    Wobble,
}

impl AnimationKind {
    pub fn css_class(self) -> &'static str {
        match self {
            AnimationKind::Startle => "robot-anim-startle",
            AnimationKind::LeanBack => "robot-anim-lean-back",
            AnimationKind::RecoilLeft => "robot-anim-recoil-left",
            AnimationKind::RecoilRight => "robot-anim-recoil-right",
            AnimationKind::StepAdjust => "robot-anim-step-adjust",
            AnimationKind::Wobble => "robot-anim-wobble",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SoundKind {
    SoftBeep,
    GentleChime,
    QuickTone,
    SoftClick,
    /// Any sound name this build doesn't know.
    #[serde(other)]
    Plain,
}

impl SoundKind {
    pub fn frequency_hz(self) -> f32 {
        match self {
            SoundKind::SoftBeep => 800.0,
            SoundKind::GentleChime => 600.0,
            SoundKind::QuickTone => 1000.0,
            SoundKind::SoftClick => 400.0,
            SoundKind::Plain => 500.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionProfile {
    pub animation: AnimationKind,
    #[serde(default)]
    pub sound: Option<SoundKind>,
    pub duration_ms: u64,
    /// Lines the robot says. Successive reactions rotate through them.
    #[serde(default)]
    pub messages: Vec<String>,
}

impl ReactionProfile {
    pub fn new(animation: AnimationKind, sound: Option<SoundKind>, duration_ms: u64) -> Self {
        Self {
            animation,
            sound,
            duration_ms,
            messages: Vec::new(),
        }
    }

    pub fn saying<I, S>(mut self, messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.messages = messages.into_iter().map(Into::into).collect();
        self
    }

    pub fn message_for(&self, cycle: u64) -> Option<&str> {
        if self.messages.is_empty() {
            return None;
        }
        let idx = (cycle % self.messages.len() as u64) as usize;
        self.messages.get(idx).map(String::as_str)
    }
}

/// One profile per body part. Complete by construction, so lookups never fail.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileTable {
    pub head: ReactionProfile,
    pub torso: ReactionProfile,
    pub left_arm: ReactionProfile,
    pub right_arm: ReactionProfile,
    pub left_leg: ReactionProfile,
    pub right_leg: ReactionProfile,
}

impl ProfileTable {
    /// Four-part robots: both sides share the arm and leg profiles.
    pub fn symmetric(
        head: ReactionProfile,
        torso: ReactionProfile,
        arm: ReactionProfile,
        leg: ReactionProfile,
    ) -> Self {
        Self {
            head,
            torso,
            left_arm: arm.clone(),
            right_arm: arm,
            left_leg: leg.clone(),
            right_leg: leg,
        }
    }

    pub fn get(&self, part: BodyPart) -> &ReactionProfile {
        match part {
            BodyPart::Head => &self.head,
            BodyPart::Torso => &self.torso,
            BodyPart::LeftArm => &self.left_arm,
            BodyPart::RightArm => &self.right_arm,
            BodyPart::LeftLeg => &self.left_leg,
            BodyPart::RightLeg => &self.right_leg,
        }
    }

    #[cfg(test)]
    pub fn get_mut(&mut self, part: BodyPart) -> &mut ReactionProfile {
        match part {
            BodyPart::Head => &mut self.head,
            BodyPart::Torso => &mut self.torso,
            BodyPart::LeftArm => &mut self.left_arm,
            BodyPart::RightArm => &mut self.right_arm,
            BodyPart::LeftLeg => &mut self.left_leg,
            BodyPart::RightLeg => &mut self.right_leg,
        }
    }

    /// The robot's stock reactions, without speech.
    pub fn standard() -> Self {
        Self {
            head: ReactionProfile::new(AnimationKind::Startle, Some(SoundKind::SoftBeep), 800),
            torso: ReactionProfile::new(AnimationKind::LeanBack, Some(SoundKind::GentleChime), 600),
            left_arm: ReactionProfile::new(AnimationKind::RecoilLeft, Some(SoundKind::QuickTone), 500),
            right_arm: ReactionProfile::new(AnimationKind::RecoilRight, Some(SoundKind::QuickTone), 500),
            left_leg: ReactionProfile::new(AnimationKind::StepAdjust, Some(SoundKind::SoftClick), 400),
            right_leg: ReactionProfile::new(AnimationKind::StepAdjust, Some(SoundKind::SoftClick), 400),
        }
    }

    pub fn talkative() -> Self {
        let mut table = Self::standard();
        table.head.messages = vec!["😮 Ouch! That tickles!".into()];
        table.torso.messages = vec!["💫 Hey! Be gentle!".into()];
        table.left_arm.messages = vec!["🤖 Careful there!".into()];
        table.right_arm.messages = vec!["🤖 Careful there!".into()];
        table.left_leg.messages = vec!["⚡ Oops! That's sensitive!".into()];
        table.right_leg.messages = vec!["⚡ Oops! That's sensitive!".into()];
        table
    }

    pub fn hurt() -> Self {
        let head = ReactionProfile::new(AnimationKind::Startle, Some(SoundKind::GentleChime), 800).saying([
            "Ouch! My head hurts!",
            "Stop hitting my head!",
            "My brain is rattling!",
            "That's my head, be careful!",
            "Oww! My head is sensitive!",
        ]);
        let arm = ReactionProfile::new(AnimationKind::RecoilLeft, Some(SoundKind::GentleChime), 800).saying([
            "Stop hitting my arm!",
            "Ouch! My arm is sore!",
            "That's my arm, it hurts!",
            "My arm is getting bruised!",
            "Please don't hit my arm!",
        ]);
        let torso = ReactionProfile::new(AnimationKind::Wobble, Some(SoundKind::GentleChime), 800).saying([
            "You're hurting me!",
            "Ouch! That's my body!",
            "Stop hitting my chest!",
            "My body is sensitive!",
            "That really hurts!",
        ]);
        let leg = ReactionProfile::new(AnimationKind::StepAdjust, Some(SoundKind::GentleChime), 800).saying([
            "My leg! That stings!",
            "Ouch! My leg is sore!",
            "Stop kicking my leg!",
            "My leg is getting hurt!",
            "That's my leg, it's sensitive!",
        ]);
        Self::symmetric(head, torso, arm, leg)
    }
}

impl Default for ProfileTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_durations_span_400_to_800() {
        let table = ProfileTable::standard();
        for part in BodyPart::ALL {
            let ms = table.get(part).duration_ms;
            assert!((400..=800).contains(&ms), "{part} lasts {ms}ms");
        }
        assert_eq!(table.get(BodyPart::Head).duration_ms, 800);
    }

    #[test]
    fn sound_frequencies() {
        assert_eq!(SoundKind::SoftBeep.frequency_hz(), 800.0);
        assert_eq!(SoundKind::GentleChime.frequency_hz(), 600.0);
        assert_eq!(SoundKind::QuickTone.frequency_hz(), 1000.0);
        assert_eq!(SoundKind::SoftClick.frequency_hz(), 400.0);
        assert_eq!(SoundKind::Plain.frequency_hz(), 500.0);
    }

    #[test]
    fn unknown_sound_names_fall_back_to_plain() {
        let sound: SoundKind = serde_json::from_str("\"air-horn\"").unwrap();
        assert_eq!(sound, SoundKind::Plain);
        let chime: SoundKind = serde_json::from_str("\"gentle-chime\"").unwrap();
        assert_eq!(chime, SoundKind::GentleChime);
    }

    #[test]
    fn messages_rotate_per_cycle() {
        let profile = ReactionProfile::new(AnimationKind::Startle, None, 100).saying(["a", "b"]);
        assert_eq!(profile.message_for(0), Some("a"));
        assert_eq!(profile.message_for(1), Some("b"));
        assert_eq!(profile.message_for(2), Some("a"));
        assert_eq!(ProfileTable::standard().head.message_for(0), None);
    }

    #[test]
    fn symmetric_table_shares_limb_profiles() {
        let table = ProfileTable::hurt();
        assert_eq!(table.get(BodyPart::LeftArm), table.get(BodyPart::RightArm));
        assert_eq!(table.get(BodyPart::LeftLeg), table.get(BodyPart::RightLeg));
    }
}
