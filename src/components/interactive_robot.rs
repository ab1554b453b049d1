use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use chrono::Utc;
use gloo_timers::callback::Timeout;
use log::info;
use web_sys::{Element, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::config;
use crate::robot::body_part::{BodyPart, Taxonomy};
use crate::robot::classifier::{Classification, NormalizedPoint, Surface};
use crate::robot::config::ReactionConfig;
use crate::robot::controller::{
    Millis, ReactionController, ReactionView, ScheduledTimer, TimerKind, TimerOutcome, TimerToken,
    TriggerOutcome,
};
use crate::robot::head_tracking::Tilt;
use crate::robot::web_audio::WebAudioSink;

fn now_ms() -> Millis {
    Utc::now().timestamp_millis().max(0) as Millis
}

fn surface_of(element: &Element) -> Surface {
    let rect = element.get_bounding_client_rect();
    Surface {
        left: rect.left(),
        top: rect.top(),
        width: rect.width(),
        height: rect.height(),
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct RobotSnapshot {
    pub view: ReactionView,
    pub cooling_down: bool,
}

/// Runs a controller's timers on the browser event loop and pushes every
/// state change out through `on_change`.
struct RobotRuntime {
    controller: RefCell<ReactionController>,
    timers: RefCell<HashMap<TimerKind, Timeout>>,
    on_change: Callback<RobotSnapshot>,
}

impl RobotRuntime {
    fn new(config: ReactionConfig, on_change: Callback<RobotSnapshot>) -> Rc<Self> {
        Rc::new(Self {
            controller: RefCell::new(ReactionController::new(config, Box::new(WebAudioSink::new()))),
            timers: RefCell::new(HashMap::new()),
            on_change,
        })
    }

    fn taxonomy(&self) -> Taxonomy {
        self.controller.borrow().config().classifier.taxonomy
    }

    fn classify(&self, client_x: f64, client_y: f64, surface: &Surface) -> Classification {
        self.controller
            .borrow()
            .config()
            .classifier
            .classify_client(client_x, client_y, surface)
    }

    fn animation_class(&self, part: BodyPart) -> &'static str {
        self.controller.borrow().config().profiles.get(part).animation.css_class()
    }

    fn set_audio_enabled(&self, enabled: bool) {
        self.controller.borrow_mut().set_audio_enabled(enabled);
    }

    fn trigger(self: &Rc<Self>, part: BodyPart) {
        let outcome = self.controller.borrow_mut().trigger_reaction(part, now_ms());
        if let TriggerOutcome::Started(started) = outcome {
            for timer in started.timers {
                self.schedule(timer);
            }
            self.publish();
        }
    }

    fn schedule(self: &Rc<Self>, timer: ScheduledTimer) {
        let runtime = Rc::downgrade(self);
        let token = timer.token;
        let delay = u32::try_from(timer.delay_ms).unwrap_or(u32::MAX);
        let handle = Timeout::new(delay, move || {
            if let Some(runtime) = runtime.upgrade() {
                runtime.fire(token);
            }
        });
        // Dropping the previous handle of the same kind cancels it.
        self.timers.borrow_mut().insert(token.kind(), handle);
    }

    fn fire(self: &Rc<Self>, token: TimerToken) {
        let outcome = self.controller.borrow_mut().fire(token, now_ms());
        if let TimerOutcome::Applied { follow_up } = outcome {
            if let Some(next) = follow_up {
                self.schedule(next);
            }
            self.publish();
        }
    }

    fn publish(&self) {
        let snapshot = {
            let controller = self.controller.borrow();
            RobotSnapshot {
                view: controller.view(),
                cooling_down: controller.is_cooling_down(now_ms()),
            }
        };
        self.on_change.emit(snapshot);
    }

    fn teardown(&self) {
        self.controller.borrow_mut().teardown();
        self.timers.borrow_mut().clear();
    }
}

#[derive(Properties, PartialEq)]
pub struct InteractiveRobotProps {
    /// Read once at mount.
    #[prop_or_else(ReactionConfig::hero)]
    pub config: ReactionConfig,
    #[prop_or(AttrValue::from(config::ROBOT_SCENE_URL))]
    pub scene: AttrValue,
    #[prop_or_else(config::show_robot_debug)]
    pub show_debug: bool,
    #[prop_or(true)]
    pub show_controls: bool,
    #[prop_or(true)]
    pub track_pointer: bool,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(InteractiveRobot)]
pub fn interactive_robot(props: &InteractiveRobotProps) -> Html {
    let snapshot = use_state(RobotSnapshot::default);
    let clicks = use_state(|| 0u32);
    let last_point = use_state(|| None::<NormalizedPoint>);
    let audio_on = use_state(|| true);
    let tilt = use_state(Tilt::default);
    let stage_ref = use_node_ref();

    let runtime = {
        let setter = snapshot.setter();
        let config = props.config.clone();
        use_memo(
            move |_| RobotRuntime::new(config, Callback::from(move |s| setter.set(s))),
            (),
        )
    };

    {
        let runtime = (*runtime).clone();
        use_effect_with_deps(move |_| move || runtime.teardown(), ());
    }

    {
        let tilt = tilt.clone();
        let stage_ref = stage_ref.clone();
        let track = props.track_pointer;
        use_event_with_window("mousemove", move |e: MouseEvent| {
            if !track {
                return;
            }
            if let Some(stage) = stage_ref.cast::<Element>() {
                tilt.set(Tilt::towards(e.client_x() as f64, e.client_y() as f64, &surface_of(&stage)));
            }
        });
    }

    {
        let tilt = tilt.clone();
        use_event_with_window("mouseout", move |e: MouseEvent| {
            // No related target means the pointer left the window.
            if e.related_target().is_none() {
                tilt.set(Tilt::default());
            }
        });
    }

    let onclick = {
        let runtime = (*runtime).clone();
        let clicks = clicks.clone();
        let last_point = last_point.clone();
        let stage_ref = stage_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(stage) = stage_ref.cast::<Element>() else {
                return;
            };
            let hit = runtime.classify(e.client_x() as f64, e.client_y() as f64, &surface_of(&stage));
            info!(
                "Robot clicked at ({:.2}, {:.2}) - detected: {}",
                hit.point.x,
                hit.point.y,
                hit.part.label(runtime.taxonomy())
            );
            clicks.set(*clicks + 1);
            last_point.set(Some(hit.point));
            runtime.trigger(hit.part);
        })
    };

    let force = |part: BodyPart| {
        let runtime = (*runtime).clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            runtime.trigger(part);
        })
    };

    let toggle_audio = {
        let runtime = (*runtime).clone();
        let audio_on = audio_on.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            let enabled = !*audio_on;
            runtime.set_audio_enabled(enabled);
            audio_on.set(enabled);
        })
    };

    let view = &snapshot.view;
    let taxonomy = runtime.taxonomy();
    let busy = view.active.is_some() || snapshot.cooling_down;
    let stage_style = format!(
        "transform: {}; transition: {};",
        tilt.css_transform(),
        if view.active.is_some() { "none" } else { "transform 0.15s ease-out" }
    );

    html! {
        <div class={classes!("robot-widget", props.class.clone())}>
            <div
                ref={stage_ref}
                class={classes!(
                    "robot-stage",
                    view.active.map(|p| format!("reacting-{}", p.label(taxonomy)))
                )}
                style={stage_style}
                {onclick}
            >
                <div
                    key={view.started_at.to_string()}
                    class={classes!("robot-body", view.active.map(|p| runtime.animation_class(p)))}
                    style={format!("--robot-intensity: {:.2};", view.intensity)}
                >
                    <spline-viewer url={props.scene.clone()} class="robot-scene"></spline-viewer>
                </div>
                {
                    if let Some(part) = view.active {
                        html! { <div class="robot-reaction-emoji">{part.zone().emoji()}</div> }
                    } else {
                        html! {}
                    }
                }
                {
                    if view.active.is_some() {
                        html! { <div class="robot-glow"></div> }
                    } else {
                        html! {}
                    }
                }
            </div>

            {
                if let Some(message) = &view.message {
                    html! {
                        <div class="robot-speech">
                            <span>{message}</span>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            {
                if props.show_controls {
                    html! {
                        <div class="robot-controls">
                            <button
                                class={classes!("robot-control", if *audio_on { "on" } else { "off" })}
                                onclick={toggle_audio}
                            >
                                { if *audio_on { "🔊" } else { "🔇" } }
                            </button>
                            <button class="robot-control" disabled={busy} onclick={force(BodyPart::Head)}>
                                {"Test"}
                            </button>
                            <button class="robot-control" disabled={busy} onclick={force(BodyPart::Torso)}>
                                {"Torso"}
                            </button>
                        </div>
                    }
                } else {
                    html! {
                        <div class="robot-hint">{"🤖 Click me!"}</div>
                    }
                }
            }

            {
                if props.show_debug {
                    html! {
                        <div class="robot-debug">
                            <div>{format!("Clicks: {}", *clicks)}</div>
                            {
                                if let Some(point) = *last_point {
                                    html! { <div>{format!("Last: ({:.2}, {:.2})", point.x, point.y)}</div> }
                                } else {
                                    html! {}
                                }
                            }
                            <div>{format!("Cooldown: {}", if snapshot.cooling_down { "Yes" } else { "No" })}</div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .robot-widget {
                    position: relative;
                    width: 100%;
                    height: 100%;
                    min-height: 360px;
                }
                .robot-stage {
                    position: relative;
                    width: 100%;
                    height: 100%;
                    cursor: pointer;
                    user-select: none;
                }
                .robot-body {
                    width: 100%;
                    height: 100%;
                }
                .robot-scene {
                    display: block;
                    width: 100%;
                    height: 100%;
                    pointer-events: none;
                }
                .robot-reaction-emoji {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2.5rem;
                    pointer-events: none;
                    animation: robotPop 0.2s ease-out;
                }
                .robot-glow {
                    position: absolute;
                    inset: 0;
                    border-radius: 50%;
                    background: radial-gradient(circle, rgba(168, 85, 247, 0.35), rgba(236, 72, 153, 0.2), transparent 70%);
                    filter: blur(30px);
                    pointer-events: none;
                    animation: robotPulse 0.8s ease-in-out infinite;
                }
                .robot-speech {
                    position: absolute;
                    top: 20%;
                    left: 50%;
                    transform: translateX(-50%);
                    background: rgba(0, 0, 0, 0.35);
                    backdrop-filter: blur(6px);
                    border: 1px solid rgba(244, 114, 182, 0.3);
                    border-radius: 8px;
                    padding: 0.4rem 0.8rem;
                    color: #f472b6;
                    font-size: 0.9rem;
                    white-space: nowrap;
                    pointer-events: none;
                    z-index: 20;
                    animation: robotPop 0.3s ease-out;
                }
                .robot-controls {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .robot-control {
                    padding: 0.25rem 0.75rem;
                    font-size: 0.75rem;
                    border-radius: 999px;
                    background: rgba(59, 130, 246, 0.2);
                    color: #60a5fa;
                    border: 1px solid rgba(59, 130, 246, 0.3);
                    cursor: pointer;
                }
                .robot-control.off {
                    background: rgba(239, 68, 68, 0.2);
                    color: #f87171;
                    border-color: rgba(239, 68, 68, 0.3);
                }
                .robot-control:disabled {
                    opacity: 0.5;
                    cursor: default;
                }
                .robot-hint {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    background: rgba(34, 197, 94, 0.2);
                    color: #4ade80;
                    border: 1px solid rgba(34, 197, 94, 0.3);
                    border-radius: 999px;
                    padding: 0.25rem 0.75rem;
                    font-size: 0.75rem;
                }
                .robot-debug {
                    position: absolute;
                    bottom: 1rem;
                    left: 1rem;
                    background: rgba(0, 0, 0, 0.5);
                    color: #fff;
                    font-size: 0.75rem;
                    padding: 0.5rem;
                    border-radius: 4px;
                    border: 1px solid rgba(255, 255, 255, 0.2);
                }
                .robot-anim-startle { animation: robotStartle 0.8s ease-out; }
                .robot-anim-lean-back { animation: robotLeanBack 0.6s ease-out; }
                .robot-anim-recoil-left { animation: robotRecoilLeft 0.5s ease-out; }
                .robot-anim-recoil-right { animation: robotRecoilRight 0.5s ease-out; }
                .robot-anim-step-adjust { animation: robotStep 0.4s ease-out; }
                .robot-anim-wobble { animation: robotWobble 0.8s ease-out; }
                @keyframes robotStartle {
                    0% { transform: scale(1) rotate(0deg); }
                    30% { transform: scale(calc(1 + 0.05 * var(--robot-intensity, 1))) rotate(calc(-5deg * var(--robot-intensity, 1))); }
                    60% { transform: scale(calc(1 + 0.02 * var(--robot-intensity, 1))) rotate(calc(5deg * var(--robot-intensity, 1))); }
                    100% { transform: scale(1) rotate(0deg); }
                }
                @keyframes robotLeanBack {
                    0%, 100% { transform: translateY(0) scale(1); }
                    50% { transform: translateY(calc(-5px * var(--robot-intensity, 1))) scale(calc(1 - 0.02 * var(--robot-intensity, 1))); }
                }
                @keyframes robotRecoilLeft {
                    0%, 100% { transform: translateX(0) rotate(0deg); }
                    50% { transform: translateX(calc(-10px * var(--robot-intensity, 1))) rotate(calc(-10deg * var(--robot-intensity, 1))); }
                }
                @keyframes robotRecoilRight {
                    0%, 100% { transform: translateX(0) rotate(0deg); }
                    50% { transform: translateX(calc(10px * var(--robot-intensity, 1))) rotate(calc(10deg * var(--robot-intensity, 1))); }
                }
                @keyframes robotStep {
                    0%, 100% { transform: translateY(0) rotate(0deg); }
                    50% { transform: translateY(calc(5px * var(--robot-intensity, 1))) rotate(calc(2deg * var(--robot-intensity, 1))); }
                }
                @keyframes robotWobble {
                    0%, 100% { transform: translateY(0) scale(1) rotate(0deg); }
                    30% { transform: translateY(calc(-15px * var(--robot-intensity, 1))) scale(calc(1 - 0.15 * var(--robot-intensity, 1))) rotate(calc(-5deg * var(--robot-intensity, 1))); }
                    60% { transform: translateY(0) scale(calc(1 - 0.05 * var(--robot-intensity, 1))) rotate(calc(5deg * var(--robot-intensity, 1))); }
                }
                @keyframes robotPop {
                    from { opacity: 0; transform: scale(0.8); }
                    to { opacity: 1; transform: scale(1); }
                }
                @keyframes robotPulse {
                    0%, 100% { opacity: 0.2; }
                    50% { opacity: 0.45; }
                }
                "#}
            </style>
        </div>
    }
}
