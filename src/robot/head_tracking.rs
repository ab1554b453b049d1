use super::classifier::Surface;

const MAX_YAW_DEG: f64 = 8.0;
const MAX_PITCH_DEG: f64 = 5.0;

/// How far the robot leans towards the pointer, each axis in `[-1, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub x: f64,
    pub y: f64,
}

impl Tilt {
    /// The pointer saturates the tilt a third of the surface away from its centre.
    pub fn towards(client_x: f64, client_y: f64, surface: &Surface) -> Self {
        let centre_x = surface.left + surface.width / 2.0;
        let centre_y = surface.top + surface.height / 2.0;
        Self {
            x: lean(client_x - centre_x, surface.width),
            y: lean(client_y - centre_y, surface.height),
        }
    }

    pub fn css_transform(&self) -> String {
        format!(
            "perspective(1000px) rotateY({:.2}deg) rotateX({:.2}deg)",
            self.x * MAX_YAW_DEG,
            self.y * -MAX_PITCH_DEG
        )
    }
}

fn lean(delta: f64, extent: f64) -> f64 {
    if !delta.is_finite() || !extent.is_finite() || extent <= 0.0 {
        return 0.0;
    }
    (delta / (extent / 3.0)).clamp(-1.0, 1.0)
}
