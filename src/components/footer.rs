use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::components::Link;

use crate::config;
use crate::Route;

const SERVICES: &[&str] = &[
    "E-commerce Solutions",
    "Finance Management",
    "AI Agent Solutions",
    "Custom Development",
    "Consulting",
];

const PRODUCTS: &[&str] = &["E-commerce Pro", "FinanceFlow", "AI Agent Suite"];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-content">
                <div class="footer-brand">
                    <div class="footer-title">{config::SITE_NAME}</div>
                    <p>{"Premium e-commerce, finance, and AI solutions for modern businesses. Built for scale, designed for success."}</p>
                    <a class="footer-mail" href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                </div>
                <div class="footer-column">
                    <h3>{"Services"}</h3>
                    <ul>
                        { for SERVICES.iter().map(|s| html! { <li>{*s}</li> }) }
                    </ul>
                </div>
                <div class="footer-column">
                    <h3>{"Products"}</h3>
                    <ul>
                        { for PRODUCTS.iter().map(|p| html! {
                            <li><Link<Route> to={Route::Products}>{*p}</Link<Route>></li>
                        }) }
                    </ul>
                </div>
                <div class="footer-column">
                    <h3>{"Company"}</h3>
                    <ul>
                        <li><Link<Route> to={Route::About}>{"About Us"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Blog}>{"Blog"}</Link<Route>></li>
                        <li><Link<Route> to={Route::Contact}>{"Contact"}</Link<Route>></li>
                    </ul>
                </div>
            </div>
            <div class="footer-bottom">
                {format!("© {} {}. All rights reserved.", year, config::SITE_NAME)}
            </div>
        </footer>
    }
}
