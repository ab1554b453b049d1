use serde::{Deserialize, Serialize};

use super::body_part::{BodyPart, Side, Taxonomy};

/// Bounding box of the clickable surface, in client pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Surface {
    #[cfg(test)]
    pub fn sized(width: f64, height: f64) -> Self {
        Self { left: 0.0, top: 0.0, width, height }
    }
}

/// Pointer position rescaled to `[-1, 1]` on both axes, `+y` pointing up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
}

impl NormalizedPoint {
    /// `offset` is measured from the surface's top-left corner. An axis with
    /// an unusable extent or a non-finite offset collapses to the centre.
    pub fn from_offset(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: scale(x, width),
            y: -scale(y, height),
        }
    }
}

fn scale(offset: f64, extent: f64) -> f64 {
    if !offset.is_finite() || !extent.is_finite() || extent <= 0.0 {
        return 0.0;
    }
    (offset / extent) * 2.0 - 1.0
}

/// Where the arm band sits relative to the torso band.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ArmBand {
    /// Arms flank the torso: the middle band splits on `|x|`.
    #[default]
    BesideTorso,
    /// Arms live below the torso band next to the legs.
    BelowTorso,
}

/// Thresholds for turning a normalized point into a body part.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassifierPolicy {
    /// Anything strictly above this `y` is the head.
    pub head_above: f64,
    /// Lowest `y` (inclusive) still counted as torso height.
    pub torso_floor: f64,
    /// `|x|` strictly beyond this is an arm.
    pub arm_reach: f64,
    pub arm_band: ArmBand,
    pub taxonomy: Taxonomy,
}

impl Default for ClassifierPolicy {
    fn default() -> Self {
        Self {
            head_above: 0.3,
            torso_floor: -0.2,
            arm_reach: 0.3,
            arm_band: ArmBand::default(),
            taxonomy: Taxonomy::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Classification {
    pub part: BodyPart,
    pub point: NormalizedPoint,
}

impl ClassifierPolicy {
    pub fn classify(&self, point: NormalizedPoint) -> BodyPart {
        let side = if point.x < 0.0 { Side::Left } else { Side::Right };
        let reaches_arm = point.x.abs() > self.arm_reach;

        if point.y > self.head_above {
            return BodyPart::Head;
        }
        if point.y >= self.torso_floor {
            return match self.arm_band {
                ArmBand::BesideTorso if reaches_arm => BodyPart::arm(side),
                _ => BodyPart::Torso,
            };
        }
        match self.arm_band {
            ArmBand::BelowTorso if reaches_arm => BodyPart::arm(side),
            _ => BodyPart::leg(side),
        }
    }

    pub fn classify_offset(&self, x: f64, y: f64, width: f64, height: f64) -> Classification {
        let point = NormalizedPoint::from_offset(x, y, width, height);
        Classification {
            part: self.classify(point),
            point,
        }
    }

    pub fn classify_client(&self, client_x: f64, client_y: f64, surface: &Surface) -> Classification {
        self.classify_offset(
            client_x - surface.left,
            client_y - surface.top,
            surface.width,
            surface.height,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f64, y: f64) -> BodyPart {
        ClassifierPolicy::default().classify(NormalizedPoint { x, y })
    }

    #[test]
    fn click_near_top_centre_is_head() {
        let c = ClassifierPolicy::default().classify_offset(50.0, 10.0, 100.0, 100.0);
        assert_eq!(c.point.x, 0.0);
        assert!((c.point.y - 0.8).abs() < 1e-9);
        assert_eq!(c.part, BodyPart::Head);
    }

    #[test]
    fn click_at_right_edge_of_middle_band_is_right_arm() {
        let c = ClassifierPolicy::default().classify_offset(90.0, 50.0, 100.0, 100.0);
        assert!((c.point.x - 0.8).abs() < 1e-9);
        assert_eq!(c.point.y, 0.0);
        assert_eq!(c.part, BodyPart::RightArm);
    }

    #[test]
    fn head_wins_regardless_of_x() {
        for x in [-5.0, -1.0, -0.31, 0.0, 0.31, 1.0, 5.0] {
            assert_eq!(at(x, 0.30001), BodyPart::Head);
            assert_eq!(at(x, 2.0), BodyPart::Head);
        }
    }

    #[test]
    fn middle_band_splits_into_torso_and_arms() {
        for y in [-0.2, 0.0, 0.3] {
            assert_eq!(at(0.0, y), BodyPart::Torso);
            assert_eq!(at(0.3, y), BodyPart::Torso);
            assert_eq!(at(-0.3, y), BodyPart::Torso);
            assert_eq!(at(0.31, y), BodyPart::RightArm);
            assert_eq!(at(-0.31, y), BodyPart::LeftArm);
        }
    }

    #[test]
    fn below_torso_is_always_leg() {
        for x in [-3.0, -0.9, -0.1, 0.1, 0.9, 3.0] {
            let expected = if x < 0.0 { BodyPart::LeftLeg } else { BodyPart::RightLeg };
            assert_eq!(at(x, -0.21), expected);
            assert_eq!(at(x, -4.0), expected);
        }
        assert_eq!(at(0.0, -0.5), BodyPart::RightLeg);
    }

    #[test]
    fn below_torso_arm_band_matches_legacy_order() {
        let policy = ClassifierPolicy {
            arm_band: ArmBand::BelowTorso,
            ..ClassifierPolicy::default()
        };
        let classify = |x, y| policy.classify(NormalizedPoint { x, y });
        assert_eq!(classify(0.8, 0.0), BodyPart::Torso);
        assert_eq!(classify(-0.8, -0.5), BodyPart::LeftArm);
        assert_eq!(classify(0.1, -0.5), BodyPart::RightLeg);
    }

    #[test]
    fn points_outside_the_surface_still_classify() {
        let policy = ClassifierPolicy::default();
        assert_eq!(policy.classify_offset(50.0, -400.0, 100.0, 100.0).part, BodyPart::Head);
        assert_eq!(policy.classify_offset(-20.0, 500.0, 100.0, 100.0).part, BodyPart::LeftLeg);
    }

    #[test]
    fn degenerate_surface_collapses_to_centre() {
        let c = ClassifierPolicy::default().classify_offset(10.0, 10.0, 0.0, f64::NAN);
        assert_eq!(c.point, NormalizedPoint { x: 0.0, y: 0.0 });
        assert_eq!(c.part, BodyPart::Torso);
    }

    #[test]
    fn client_coordinates_are_offset_by_surface_origin() {
        let surface = Surface { left: 200.0, top: 100.0, width: 100.0, height: 100.0 };
        let c = ClassifierPolicy::default().classify_client(250.0, 110.0, &surface);
        assert_eq!(c.part, BodyPart::Head);
    }

    #[test]
    fn thresholds_are_configurable() {
        let policy = ClassifierPolicy {
            head_above: 0.9,
            ..ClassifierPolicy::default()
        };
        assert_eq!(policy.classify(NormalizedPoint { x: 0.0, y: 0.8 }), BodyPart::Torso);
    }
}
