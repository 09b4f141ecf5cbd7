use crate::router::Route;
use crate::storage::preferences;
use yew::prelude::*;
use yew_router::prelude::*;

fn nav_link(to: Route, icon: &str, label: &str, collapsed: bool) -> Html {
    html! {
        <Link<Route> {to} classes="flex items-center gap-2 px-3 py-2 rounded hover:bg-gray-200">
            <span>{ icon }</span>
            if !collapsed {
                <span>{ label }</span>
            }
        </Link<Route>>
    }
}

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let collapsed = use_state(preferences::sidebar_collapsed);

    let on_toggle = {
        let collapsed = collapsed.clone();
        Callback::from(move |_: MouseEvent| {
            let next = !*collapsed;
            preferences::set_sidebar_collapsed(next);
            collapsed.set(next);
        })
    };

    html! {
        <aside class={classes!("border-r", "p-2", if *collapsed { "w-14" } else { "w-48" })}>
            <button class="px-3 py-2 text-gray-500" onclick={on_toggle}>
                { if *collapsed { "»" } else { "«" } }
            </button>
            { nav_link(Route::Home, "🏠", "Home", *collapsed) }
            { nav_link(Route::Programming, "💻", "Programming", *collapsed) }
            { nav_link(Route::History, "🕘", "History", *collapsed) }
            { nav_link(Route::Liked, "❤", "Liked", *collapsed) }
            { nav_link(Route::WatchLater, "⏰", "Watch Later", *collapsed) }
        </aside>
    }
}
