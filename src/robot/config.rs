use serde::{Deserialize, Serialize};

use super::body_part::Taxonomy;
use super::classifier::ClassifierPolicy;
use super::profile::ProfileTable;

pub const DEFAULT_COOLDOWN_MS: u64 = 500;
pub const DEFAULT_MESSAGE_DISPLAY_MS: u64 = 2000;
/// Full motion amplitude, as the fixed-strength widgets animate.
pub const FULL_INTENSITY: f64 = 1.0;

/// Moment the cooldown window is measured from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CooldownAnchor {
    #[default]
    Trigger,
    ReactionEnd,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Sensitivity {
    Low,
    Medium,
    High,
}

impl Sensitivity {
    pub fn cooldown_ms(self) -> u64 {
        match self {
            Sensitivity::Low => 1000,
            Sensitivity::Medium => DEFAULT_COOLDOWN_MS,
            Sensitivity::High => 300,
        }
    }

    /// Multiplier on the reaction's motion amplitude.
    pub fn intensity(self) -> f64 {
        match self {
            Sensitivity::Low => 0.5,
            Sensitivity::Medium => 0.7,
            Sensitivity::High => FULL_INTENSITY,
        }
    }
}

/// Everything that differs between robot widgets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReactionConfig {
    pub classifier: ClassifierPolicy,
    pub profiles: ProfileTable,
    pub cooldown_ms: u64,
    pub cooldown_anchor: CooldownAnchor,
    /// `None` ties the message to the reaction and clears it when the
    /// reaction ends.
    pub message_display_ms: Option<u64>,
    /// Scales the scale, rotate and translate amplitudes of every animation.
    pub intensity: f64,
    pub enabled: bool,
}

impl Default for ReactionConfig {
    fn default() -> Self {
        Self::hero()
    }
}

impl ReactionConfig {
    /// Six-part robot that talks back. Used on the landing hero.
    pub fn hero() -> Self {
        Self {
            classifier: ClassifierPolicy::default(),
            profiles: ProfileTable::talkative(),
            cooldown_ms: DEFAULT_COOLDOWN_MS,
            cooldown_anchor: CooldownAnchor::Trigger,
            message_display_ms: Some(DEFAULT_MESSAGE_DISPLAY_MS),
            intensity: FULL_INTENSITY,
            enabled: true,
        }
    }

    /// Six-part robot with sound and motion only.
    pub fn quiet() -> Self {
        Self {
            profiles: ProfileTable::standard(),
            message_display_ms: None,
            ..Self::hero()
        }
    }

    /// Four-part robot that complains for as long as it reacts. Its bands
    /// are wider: head and legs take the outer 30% of the height, arms the
    /// outer 30% of the width.
    pub fn hurt() -> Self {
        Self {
            classifier: ClassifierPolicy {
                head_above: 0.4,
                torso_floor: -0.4,
                arm_reach: 0.4,
                taxonomy: Taxonomy::FourPart,
                ..ClassifierPolicy::default()
            },
            profiles: ProfileTable::hurt(),
            message_display_ms: None,
            ..Self::hero()
        }
    }

    pub fn with_sensitivity(mut self, sensitivity: Sensitivity) -> Self {
        self.cooldown_ms = sensitivity.cooldown_ms();
        self.intensity = sensitivity.intensity();
        self
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::robot::body_part::BodyPart;

    #[test]
    fn hero_defaults() {
        let config = ReactionConfig::hero();
        assert_eq!(config.cooldown_ms, 500);
        assert_eq!(config.message_display_ms, Some(2000));
        assert_eq!(config.classifier.taxonomy, Taxonomy::SixPart);
        assert!(config.enabled);
    }

    #[test]
    fn sensitivity_sets_cooldown() {
        assert_eq!(ReactionConfig::quiet().with_sensitivity(Sensitivity::Low).cooldown_ms, 1000);
        assert_eq!(ReactionConfig::quiet().with_sensitivity(Sensitivity::High).cooldown_ms, 300);
    }

    #[test]
    fn sensitivity_scales_intensity() {
        assert_eq!(ReactionConfig::hero().intensity, 1.0);
        let cases = [
            (Sensitivity::Low, 0.5),
            (Sensitivity::Medium, 0.7),
            (Sensitivity::High, 1.0),
        ];
        for (sensitivity, intensity) in cases {
            assert_eq!(ReactionConfig::quiet().with_sensitivity(sensitivity).intensity, intensity);
        }
    }

    #[test]
    fn hurt_preset_uses_wide_bands() {
        let policy = ReactionConfig::hurt().classifier;
        let part = |x, y| policy.classify_offset(x, y, 100.0, 100.0).part;

        // Inside the central 40% the hurt robot only knows its torso.
        assert_eq!(part(50.0, 32.0), BodyPart::Torso);
        assert_eq!(part(50.0, 65.0), BodyPart::Torso);
        assert_eq!(part(67.0, 50.0), BodyPart::Torso);
        assert_eq!(part(33.0, 50.0), BodyPart::Torso);

        assert_eq!(part(50.0, 28.0), BodyPart::Head);
        assert_eq!(part(90.0, 10.0), BodyPart::Head);
        assert_eq!(part(72.0, 50.0), BodyPart::RightArm);
        assert_eq!(part(28.0, 50.0), BodyPart::LeftArm);
        assert_eq!(part(50.0, 72.0), BodyPart::RightLeg);
        // Legs take the bottom band even at the far sides.
        assert_eq!(part(10.0, 90.0), BodyPart::LeftLeg);
    }

    #[test]
    fn hero_keeps_narrow_bands() {
        let policy = ReactionConfig::hero().classifier;
        assert_eq!(policy.classify_offset(50.0, 32.0, 100.0, 100.0).part, BodyPart::Head);
        assert_eq!(policy.classify_offset(67.0, 50.0, 100.0, 100.0).part, BodyPart::RightArm);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config = ReactionConfig::from_json(
            r#"{ "cooldownMs": 750, "cooldownAnchor": "reactionEnd", "classifier": { "headAbove": 0.5 } }"#,
        )
        .unwrap();
        assert_eq!(config.cooldown_ms, 750);
        assert_eq!(config.cooldown_anchor, CooldownAnchor::ReactionEnd);
        assert_eq!(config.classifier.head_above, 0.5);
        assert_eq!(config.classifier.torso_floor, -0.2);
        assert_eq!(config.profiles, ProfileTable::talkative());
    }

    #[test]
    fn presets_survive_json() {
        for preset in [ReactionConfig::hero(), ReactionConfig::quiet(), ReactionConfig::hurt()] {
            let json = serde_json::to_string(&preset).unwrap();
            assert_eq!(ReactionConfig::from_json(&json).unwrap(), preset);
        }
    }

    #[test]
    fn hurt_preset_is_four_part() {
        let config = ReactionConfig::hurt();
        assert_eq!(config.classifier.taxonomy, Taxonomy::FourPart);
        assert_eq!(BodyPart::RightArm.label(config.classifier.taxonomy), "arm");
        assert!(config.profiles.get(BodyPart::Head).messages.len() > 1);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(ReactionConfig::from_json(r#"{ "cooldownMs": "soon" }"#).is_err());
    }
}
