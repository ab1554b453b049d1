use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[derive(Clone, Copy, PartialEq)]
enum Status {
    ProductionReady,
    Beta,
    InDevelopment,
}

impl Status {
    fn label(self) -> &'static str {
        match self {
            Status::ProductionReady => "Production Ready",
            Status::Beta => "Beta Testing",
            Status::InDevelopment => "In Development",
        }
    }
}

struct Product {
    title: &'static str,
    description: &'static str,
    image: &'static str,
    features: &'static [&'static str],
    status: Status,
    rating: f32,
    clients: &'static str,
}

const PRODUCTS: &[Product] = &[
    Product {
        title: "E-commerce Pro",
        description: "Enterprise-ready e-commerce platform with advanced features and integrations.",
        image: "/assets/modern-ecommerce-dashboard.png",
        features: &["Payment Gateway", "Inventory Management", "Admin Dashboard", "Analytics", "Multi-vendor Support"],
        status: Status::ProductionReady,
        rating: 4.9,
        clients: "25+ businesses",
    },
    Product {
        title: "FinanceFlow",
        description: "Comprehensive finance and bill management solution for small to medium businesses.",
        image: "/assets/finance-management-dashboard-with-charts.jpg",
        features: &["Bill Tracking", "Payment Management", "Financial Reports", "Inventory Control", "Tax Management"],
        status: Status::Beta,
        rating: 4.8,
        clients: "15+ businesses",
    },
    Product {
        title: "AI Agent Suite",
        description: "Custom AI agents and automation tools to streamline your business processes.",
        image: "/assets/ai-agent-interface-with-automation-workflows.jpg",
        features: &["Custom AI Agents", "Process Automation", "Data Analysis", "Integration APIs", "Real-time Monitoring"],
        status: Status::InDevelopment,
        rating: 4.7,
        clients: "10+ early adopters",
    },
];

#[function_component(Products)]
pub fn products() -> Html {
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
        <div class="products-page">
            <section class="page-hero">
                <h1>{"Our "}<span class="text-gradient">{"Products"}</span></h1>
                <p>{"Ready-to-deploy solutions that have been battle-tested in production environments."}</p>
            </section>
            <section class="card-grid products-grid">
                { for PRODUCTS.iter().map(|product| html! {
                    <div class="card product-card">
                        <div class="product-image">
                            <img src={product.image} alt={product.title} loading="lazy" />
                            <span class={classes!("product-status", (product.status == Status::ProductionReady).then(|| "ready"))}>
                                {product.status.label()}
                            </span>
                        </div>
                        <div class="product-header">
                            <h3>{product.title}</h3>
                            <span class="product-rating">{format!("★ {:.1}", product.rating)}</span>
                        </div>
                        <p>{product.description}</p>
                        <ul class="product-features">
                            { for product.features.iter().map(|f| html! { <li>{*f}</li> }) }
                        </ul>
                        <div class="product-footer">
                            <span class="product-clients">{product.clients}</span>
                            <Link<Route> to={Route::Contact} classes="button-outline">
                                {"Request a demo"}
                            </Link<Route>>
                        </div>
                    </div>
                }) }
            </section>
        </div>
    }
}
