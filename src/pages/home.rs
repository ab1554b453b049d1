use yew::prelude::*;
use yew_router::components::Link;

use crate::components::interactive_robot::InteractiveRobot;
use crate::robot::config::ReactionConfig;
use crate::Route;

struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const SERVICES: &[Service] = &[
    Service {
        icon: "🛒",
        title: "E-commerce Solutions",
        description: "Complete e-commerce platforms with payment gateways, inventory management, and admin dashboards.",
    },
    Service {
        icon: "🏦",
        title: "Finance Management",
        description: "Comprehensive finance and bill management tools with inventory tracking for small businesses.",
    },
    Service {
        icon: "🤖",
        title: "AI Agent Solutions",
        description: "Custom AI agents and agentic solutions to automate and enhance your business processes.",
    },
    Service {
        icon: "🧩",
        title: "Custom Development",
        description: "Full-stack custom development services tailored to your specific business requirements.",
    },
    Service {
        icon: "🚀",
        title: "Rapid Deployment",
        description: "Quick deployment of ready-to-use solutions with minimal setup time and maximum efficiency.",
    },
    Service {
        icon: "🛡️",
        title: "Ongoing Support",
        description: "Comprehensive support and maintenance services to keep your solutions running smoothly.",
    },
];

const STATS: &[(&str, &str)] = &[
    ("50+", "Projects delivered"),
    ("+30%", "Average conversion lift"),
    ("40%", "Faster financial reporting"),
    ("24h", "Response time"),
];

#[function_component(Home)]
pub fn home() -> Html {
    // Scroll to top only on initial mount
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
        <div class="home-page">
            <section class="hero-section">
                <div class="hero-grid">
                    <div class="hero-copy">
                        <span class="hero-badge">{"Freelance product studio"}</span>
                        <h1>
                            {"E-commerce, Finance & "}
                            <span class="text-gradient">{"AI that ships"}</span>
                        </h1>
                        <p>
                            {"High-conversion storefronts, billing tools and AI agent automations. Premium UI, fast delivery, measurable outcomes."}
                        </p>
                        <div class="hero-actions">
                            <Link<Route> to={Route::Contact} classes="button-primary">
                                {"Get a free consultation"}
                            </Link<Route>>
                            <Link<Route> to={Route::Products} classes="button-outline">
                                {"See our products"}
                            </Link<Route>>
                        </div>
                    </div>
                    <div class="hero-robot">
                        <InteractiveRobot config={ReactionConfig::hero()} show_controls={false} />
                    </div>
                </div>
            </section>

            <section class="stats-section">
                { for STATS.iter().map(|(value, label)| html! {
                    <div class="stat">
                        <div class="stat-value">{*value}</div>
                        <div class="stat-label">{*label}</div>
                    </div>
                }) }
            </section>

            <section class="services-section">
                <h2>{"What we "}<span class="text-gradient">{"build"}</span></h2>
                <div class="card-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <div class="card">
                            <div class="card-icon">{service.icon}</div>
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                        </div>
                    }) }
                </div>
            </section>

            <section class="cta-section">
                <h2>{"Ready to transform your business?"}</h2>
                <p>{"Tell us what you're building and we'll get back to you within 24 hours."}</p>
                <Link<Route> to={Route::Contact} classes="button-primary">
                    {"Start your project"}
                </Link<Route>>
            </section>
        </div>
    }
}
