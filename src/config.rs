use log::Level;

pub const SITE_NAME: &str = "IntelliCraft Solutions";
pub const CONTACT_EMAIL: &str = "hello@intellicraft.solutions";
pub const ROBOT_SCENE_URL: &str = "https://prod.spline.design/kZDDjO5HuC9GJUM2/scene.splinecode";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Show ignored clicks and stale timers while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(debug_assertions)]
pub fn show_robot_debug() -> bool {
    true
}

#[cfg(not(debug_assertions))]
pub fn show_robot_debug() -> bool {
    false
}
