use yew::prelude::*;

use crate::components::interactive_robot::InteractiveRobot;
use crate::robot::config::{ReactionConfig, Sensitivity};

const VALUES: &[(&str, &str, &str)] = &[
    ("🎨", "Premium UI", "Interfaces that look sharp and convert, designed alongside the code."),
    ("⚡", "Performance first", "Fast pages and lean backends, measured before and after launch."),
    ("📊", "Measurable outcomes", "We agree on the numbers up front and report against them."),
    ("☁️", "Cloud native", "Deployments that scale with you, without surprise bills."),
    ("🤝", "Partnership", "Small team, direct access, no account-manager relay."),
    ("🔒", "Secure by default", "Payments, auth and data handling done properly from day one."),
];

const TEAM: &[(&str, &str)] = &[
    ("Sophia Mesabhi", "Founder & Lead Engineer"),
    ("Frankie Sullivan", "Product Designer"),
    ("Demi Wilkinson", "AI Engineer"),
    ("Candice Wu", "Finance Systems Specialist"),
];

#[function_component(About)]
pub fn about() -> Html {
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="about-page">
            <section class="about-hero">
                <div class="hero-grid">
                    <div class="hero-copy">
                        <h1>{"We craft "}<span class="text-gradient">{"products that pay off"}</span></h1>
                        <p>
                            {"IntelliCraft is a small product studio building e-commerce, finance and AI tooling for businesses that want results, not slide decks."}
                        </p>
                    </div>
                    <div class="hero-robot">
                        <InteractiveRobot
                            config={ReactionConfig::quiet().with_sensitivity(Sensitivity::Low)}
                            show_controls={false}
                            track_pointer={false}
                        />
                    </div>
                </div>
            </section>

            <section class="values-section">
                <h2>{"How we work"}</h2>
                <div class="card-grid">
                    { for VALUES.iter().map(|(icon, title, text)| html! {
                        <div class="card">
                            <div class="card-icon">{*icon}</div>
                            <h3>{*title}</h3>
                            <p>{*text}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="team-section">
                <h2>{"The team"}</h2>
                <div class="card-grid">
                    { for TEAM.iter().map(|(name, role)| html! {
                        <div class="card team-card">
                            <img src="/assets/placeholder-user.jpg" alt={*name} loading="lazy" />
                            <h3>{*name}</h3>
                            <p>{*role}</p>
                        </div>
                    }) }
                </div>
            </section>
        </div>
    }
}
