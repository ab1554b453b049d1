use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::interactive_robot::InteractiveRobot;
use crate::robot::config::ReactionConfig;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let navigator = use_navigator();

    let go_back = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = &navigator {
            navigator.back();
        }
    });

    html! {
        <section class="not-found-page">
            <div class="hero-grid">
                <div class="hero-copy">
                    <h1 class="not-found-code">{"404"}</h1>
                    <h2>{"Oops! You're off the map."}</h2>
                    <p>{"The page you're looking for doesn't exist or may have moved. Let's get you back on course."}</p>
                    <div class="hero-actions">
                        <Link<Route> to={Route::Home} classes="button-primary">
                            {"🏠 Go Home"}
                        </Link<Route>>
                        <button class="button-outline" onclick={go_back}>
                            {"← Go Back"}
                        </button>
                    </div>
                </div>
                <div class="hero-robot">
                    <InteractiveRobot config={ReactionConfig::hurt()} show_controls={false} show_debug={false} />
                </div>
            </div>
        </section>
    }
}
