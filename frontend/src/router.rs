use crate::feed::components::{HomePage, ProgrammingPage};
use crate::library::history::HistoryPage;
use crate::library::liked::LikedPage;
use crate::library::watch_later::WatchLaterPage;
use crate::search::components::SearchPage;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/programming")]
    Programming,
    #[at("/search")]
    Search,
    #[at("/history")]
    History,
    #[at("/liked")]
    Liked,
    #[at("/watch-later")]
    WatchLater,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <HomePage /> },
        Route::Programming => html! { <ProgrammingPage /> },
        Route::Search => html! { <SearchPage /> },
        Route::History => html! { <HistoryPage /> },
        Route::Liked => html! { <LikedPage /> },
        Route::WatchLater => html! { <WatchLaterPage /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center">
                <div class="bg-white p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                        {"Go back home"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}
