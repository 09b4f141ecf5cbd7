use crate::env_variable_utils::get_app_name;
use crate::router::Route;
use serde::Serialize;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Serialize)]
struct SearchQuery {
    q: String,
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let navigator = use_navigator().expect("navbar must be rendered inside a router");
    let current_input = use_state(String::default);

    let on_input = {
        let current_input = current_input.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            current_input.set(input_value);
        })
    };

    let on_submit = {
        let navigator = navigator.clone();
        let current_input = current_input.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let query = current_input.trim().to_string();
            if query.is_empty() {
                return;
            }
            let _ = navigator.push_with_query(&Route::Search, &SearchQuery { q: query });
        })
    };

    html! {
        <nav class="flex items-center justify-between bg-gray-900 text-white px-4 py-2">
            <Link<Route> to={Route::Home} classes="text-xl font-bold">
                { get_app_name() }
            </Link<Route>>
            <form onsubmit={on_submit} class="flex">
                <input
                    type="text"
                    class="p-2 rounded-l-lg text-gray-900"
                    placeholder="Search videos..."
                    value={(*current_input).clone()}
                    oninput={on_input}
                />
                <button type="submit" class="bg-blue-600 p-2 rounded-r-lg hover:bg-blue-700">
                    {"Search"}
                </button>
            </form>
        </nav>
    }
}
