use log::info;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::components::interactive_robot::InteractiveRobot;
use crate::robot::body_part::{BodyPart, Side, Taxonomy};
use crate::robot::config::{ReactionConfig, Sensitivity};

#[derive(Clone, Copy, PartialEq)]
enum Preset {
    Hero,
    Quiet,
    Hurt,
}

impl Preset {
    const ALL: [Preset; 3] = [Preset::Hero, Preset::Quiet, Preset::Hurt];

    fn label(self) -> &'static str {
        match self {
            Preset::Hero => "Talkative",
            Preset::Quiet => "Quiet",
            Preset::Hurt => "Four-part",
        }
    }

    fn config(self) -> ReactionConfig {
        match self {
            Preset::Hero => ReactionConfig::hero(),
            Preset::Quiet => ReactionConfig::quiet(),
            Preset::Hurt => ReactionConfig::hurt(),
        }
    }
}

const SENSITIVITIES: [(Sensitivity, &str); 3] = [
    (Sensitivity::Low, "Low"),
    (Sensitivity::Medium, "Medium"),
    (Sensitivity::High, "High"),
];

/// One legend line per part. Four-part robots share a label between sides,
/// so the side is spelled out.
pub fn zone_legend(config: &ReactionConfig) -> Vec<String> {
    let taxonomy = config.classifier.taxonomy;
    BodyPart::ALL
        .iter()
        .map(|&part| {
            let side = match (taxonomy, part.side()) {
                (Taxonomy::FourPart, Some(Side::Left)) => " (left)",
                (Taxonomy::FourPart, Some(Side::Right)) => " (right)",
                _ => "",
            };
            format!(
                "{} {}{}: {}ms",
                part.zone().emoji(),
                part.label(taxonomy),
                side,
                config.profiles.get(part).duration_ms
            )
        })
        .collect()
}

/// Playground for every robot variant, with controls and the debug overlay on.
#[function_component(RobotLab)]
pub fn robot_lab() -> Html {
    let preset = use_state(|| Preset::Hero);
    let sensitivity = use_state(|| Sensitivity::Medium);
    let draft = use_state(String::new);
    let custom = use_state(|| None::<ReactionConfig>);
    let custom_error = use_state(|| None::<String>);
    let custom_revision = use_state(|| 0u32);

    let config = match &*custom {
        Some(config) => config.clone(),
        None => preset.config().with_sensitivity(*sensitivity),
    };
    // Config is read at mount, so a new key remounts the robot.
    let robot_key = match &*custom {
        Some(_) => format!("custom-{}", *custom_revision),
        None => format!("{}-{}", preset.label(), sensitivity.cooldown_ms()),
    };

    let on_draft = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            draft.set(area.value());
        })
    };

    let apply_custom = {
        let draft = draft.clone();
        let custom = custom.clone();
        let custom_error = custom_error.clone();
        let custom_revision = custom_revision.clone();
        Callback::from(move |_: MouseEvent| match ReactionConfig::from_json(&draft) {
            Ok(config) => {
                info!("Applying custom robot config");
                custom.set(Some(config));
                custom_error.set(None);
                custom_revision.set(*custom_revision + 1);
            }
            Err(e) => custom_error.set(Some(e.to_string())),
        })
    };

    let clear_custom = {
        let custom = custom.clone();
        let custom_error = custom_error.clone();
        Callback::from(move |_: MouseEvent| {
            custom.set(None);
            custom_error.set(None);
        })
    };

    let pick_preset = |value: Preset| {
        let preset = preset.clone();
        let custom = custom.clone();
        Callback::from(move |_: MouseEvent| {
            custom.set(None);
            preset.set(value);
        })
    };

    html! {
        <div class="robot-lab-page">
            <section class="page-hero">
                <h1>{"Interactive "}<span class="text-gradient">{"Robot"}</span></h1>
                <p>{"Click the head, torso, arms or legs. Each zone has its own motion, tone and line."}</p>
            </section>

            <section class="robot-lab-grid">
                <div class="robot-lab-stage">
                    <InteractiveRobot key={robot_key} config={config.clone()} show_debug={true} />
                </div>
                <div class="card robot-lab-panel">
                    <h3>{"Variant"}</h3>
                    <div class="blog-filters">
                        { for Preset::ALL.iter().map(|p| {
                            let value = *p;
                            let selected = custom.is_none() && *preset == value;
                            html! {
                                <button
                                    class={classes!("filter", selected.then(|| "active"))}
                                    onclick={pick_preset(value)}
                                >
                                    {value.label()}
                                </button>
                            }
                        }) }
                    </div>
                    <h3>{"Sensitivity"}</h3>
                    <div class="blog-filters">
                        { for SENSITIVITIES.iter().map(|(s, label)| {
                            let sensitivity = sensitivity.clone();
                            let value = *s;
                            html! {
                                <button
                                    class={classes!("filter", (*sensitivity == value).then(|| "active"))}
                                    onclick={Callback::from(move |_: MouseEvent| sensitivity.set(value))}
                                >
                                    {format!("{} ({}ms)", label, value.cooldown_ms())}
                                </button>
                            }
                        }) }
                    </div>
                    <h3>{"What happens on click"}</h3>
                    <ul>
                        <li>{"The clicked zone animates and an emoji pops over the robot."}</li>
                        <li>{"A short tone plays, pitched per zone. Use 🔊 to mute."}</li>
                        <li>{"Talkative robots say something; the line fades on its own timer."}</li>
                        <li>{"Clicks during a reaction or the cooldown are ignored."}</li>
                    </ul>
                    <h3>{"Zones"}</h3>
                    <ul>
                        { for zone_legend(&config).into_iter().map(|line| html! { <li>{line}</li> }) }
                    </ul>
                    <h3>{"Custom config"}</h3>
                    <p>{"Paste a JSON config; missing fields keep the talkative defaults."}</p>
                    <textarea
                        class="robot-lab-json"
                        rows="6"
                        placeholder={r#"{ "cooldownMs": 800, "intensity": 0.5 }"#}
                        value={(*draft).clone()}
                        oninput={on_draft}
                    />
                    <div class="hero-actions">
                        <button class="button-primary" onclick={apply_custom}>{"Apply"}</button>
                        <button class="button-outline" disabled={custom.is_none()} onclick={clear_custom}>
                            {"Reset"}
                        </button>
                    </div>
                    {
                        if let Some(error) = &*custom_error {
                            html! { <p class="robot-lab-error">{format!("Invalid config: {}", error)}</p> }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </section>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legend_lists_every_part_with_its_duration() {
        let legend = zone_legend(&ReactionConfig::quiet());
        assert_eq!(legend.len(), 6);
        assert_eq!(legend[0], "😲 head: 800ms");
        assert_eq!(legend[3], "🤚 rightArm: 500ms");
    }

    #[test]
    fn four_part_legend_spells_out_sides() {
        let legend = zone_legend(&ReactionConfig::hurt());
        assert_eq!(legend[2], "🤚 arm (left): 800ms");
        assert_eq!(legend[5], "🦵 leg (right): 800ms");
        assert_eq!(legend[1], "💫 torso: 800ms");
    }
}
