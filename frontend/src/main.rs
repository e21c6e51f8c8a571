use yew::prelude::*;
use yew_router::prelude::*;

mod candidate_card;
mod config;
mod home;
mod leaderboard;
mod ledger;
mod styles;
mod tally;

use crate::{home::Home, leaderboard::LeaderboardPage};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")] Home,
    #[at("/leaderboard")] Leaderboard,
}

#[function_component(Navigation)]
fn navigation() -> Html {
    let current_route = use_route::<Route>();
    let link_classes = |route: Route| classes!(
        "text-base", "md:text-lg", "font-medium", "px-4", "py-2", "rounded-md",
        "transition-colors", "duration-200", "ease-in-out",
        "text-gray-200", "border", "border-transparent", "hover:border-blue-400", "hover:text-blue-400",
        if current_route == Some(route) {
            "text-blue-400 border-blue-400 ring-2 ring-blue-500 ring-offset-1 ring-offset-gray-900"
        } else {
            ""
        }
    );

    html! {
        <nav class="bg-gray-900 shadow-lg fixed top-0 w-full z-50">
            <div class="container mx-auto px-6 py-4 flex justify-center space-x-8">
                <Link<Route> to={Route::Home} classes={link_classes(Route::Home)}>
                    {"Vote"}
                </Link<Route>>
                <Link<Route> to={Route::Leaderboard} classes={link_classes(Route::Leaderboard)}>
                    {"Leaderboard"}
                </Link<Route>>
            </div>
        </nav>
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen bg-gray-900">
                <Navigation />
                <div class="pt-16">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::Leaderboard => html! { <LeaderboardPage /> },
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
