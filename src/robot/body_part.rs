use serde::{Deserialize, Serialize};
use std::fmt;

/// Region of the robot that a pointer landed on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BodyPart {
    Head,
    Torso,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Left,
    Right,
}

/// Side-less family of a part. Four-part robots only ever talk in zones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Zone {
    Head,
    Torso,
    Arm,
    Leg,
}

/// How many distinct parts a robot widget reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Taxonomy {
    FourPart,
    #[default]
    SixPart,
}

impl BodyPart {
    pub const ALL: [BodyPart; 6] = [
        BodyPart::Head,
        BodyPart::Torso,
        BodyPart::LeftArm,
        BodyPart::RightArm,
        BodyPart::LeftLeg,
        BodyPart::RightLeg,
    ];

    pub fn arm(side: Side) -> Self {
        match side {
            Side::Left => BodyPart::LeftArm,
            Side::Right => BodyPart::RightArm,
        }
    }

    pub fn leg(side: Side) -> Self {
        match side {
            Side::Left => BodyPart::LeftLeg,
            Side::Right => BodyPart::RightLeg,
        }
    }

    pub fn zone(self) -> Zone {
        match self {
            BodyPart::Head => Zone::Head,
            BodyPart::Torso => Zone::Torso,
            BodyPart::LeftArm | BodyPart::RightArm => Zone::Arm,
            BodyPart::LeftLeg | BodyPart::RightLeg => Zone::Leg,
        }
    }

    pub fn side(self) -> Option<Side> {
        match self {
            BodyPart::LeftArm | BodyPart::LeftLeg => Some(Side::Left),
            BodyPart::RightArm | BodyPart::RightLeg => Some(Side::Right),
            BodyPart::Head | BodyPart::Torso => None,
        }
    }

    /// Tag shown to the visual layer and in logs.
    pub fn label(self, taxonomy: Taxonomy) -> &'static str {
        match taxonomy {
            Taxonomy::FourPart => self.zone().label(),
            Taxonomy::SixPart => match self {
                BodyPart::Head => "head",
                BodyPart::Torso => "torso",
                BodyPart::LeftArm => "leftArm",
                BodyPart::RightArm => "rightArm",
                BodyPart::LeftLeg => "leftLeg",
                BodyPart::RightLeg => "rightLeg",
            },
        }
    }
}

impl Zone {
    pub fn label(self) -> &'static str {
        match self {
            Zone::Head => "head",
            Zone::Torso => "torso",
            Zone::Arm => "arm",
            Zone::Leg => "leg",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Zone::Head => "😲",
            Zone::Torso => "💫",
            Zone::Arm => "🤚",
            Zone::Leg => "🦵",
        }
    }
}

impl fmt::Display for BodyPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label(Taxonomy::SixPart))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_part_labels_collapse_sides() {
        assert_eq!(BodyPart::LeftArm.label(Taxonomy::FourPart), "arm");
        assert_eq!(BodyPart::RightLeg.label(Taxonomy::FourPart), "leg");
        assert_eq!(BodyPart::RightLeg.label(Taxonomy::SixPart), "rightLeg");
    }

    #[test]
    fn sides_only_exist_for_limbs() {
        assert_eq!(BodyPart::Head.side(), None);
        assert_eq!(BodyPart::arm(Side::Left).side(), Some(Side::Left));
        assert_eq!(BodyPart::leg(Side::Right), BodyPart::RightLeg);
    }

    #[test]
    fn serializes_with_camel_case_tags() {
        let json = serde_json::to_string(&BodyPart::LeftArm).unwrap();
        assert_eq!(json, "\"leftArm\"");
    }
}
