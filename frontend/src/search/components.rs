use crate::components::video_card::VideoCard;
use crate::data::LOCAL_VIDEOS;
use crate::models::Video;
use crate::search::api::{fetch_peertube_results, fetch_youtube_results};
use crate::search::merger::{combine_results, filter_local, should_fetch_remote, sort_videos};
use crate::search::search_options::SortOption;
use crate::storage::preferences;
use serde::Deserialize;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub sort: Option<String>,
}

// Mirror the chosen sort into the URL without a reload, so the page
// state survives a refresh or a shared link.
fn update_sort_param(sort: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(href) = window.location().href() {
            if let Ok(url) = web_sys::Url::new(&href) {
                url.search_params().set("sort", sort);
                if let Ok(history) = window.history() {
                    let _ = history.push_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&url.href()),
                    );
                }
            }
        }
    }
}

#[function_component(SearchPage)]
pub fn search_page() -> Html {
    let location = use_location();
    let params = location
        .as_ref()
        .and_then(|location| location.query::<SearchParams>().ok())
        .unwrap_or_default();
    let query = params.q.clone().unwrap_or_default();

    let sort = use_state(|| SortOption::from_param(params.sort.as_deref().unwrap_or_default()));
    let local_results = use_state(Vec::<Video>::default);
    let youtube_results = use_state(Vec::<Video>::default);
    let peertube_results = use_state(Vec::<Video>::default);
    let show_youtube = use_state(|| false);
    let show_peertube = use_state(|| false);
    let loading_youtube = use_state(|| false);
    let loading_peertube = use_state(|| false);
    let error_message = use_state(Option::<String>::default);
    let instance_input = use_state(|| preferences::peertube_instance().unwrap_or_default());
    let hidden_bump = use_state(|| 0u32);

    // Local matches are synchronous; remote sources join in eagerly
    // only when the catalog has next to nothing for this query.
    {
        let local_results = local_results.clone();
        let youtube_results = youtube_results.clone();
        let peertube_results = peertube_results.clone();
        let show_youtube = show_youtube.clone();
        let show_peertube = show_peertube.clone();
        let loading_youtube = loading_youtube.clone();
        let loading_peertube = loading_peertube.clone();
        let error_message = error_message.clone();

        use_effect_with(query.clone(), move |query: &String| {
            let local = filter_local(&LOCAL_VIDEOS, query);
            let auto_fetch = !query.is_empty() && should_fetch_remote(local.len(), query);
            local_results.set(local);
            youtube_results.set(Vec::new());
            peertube_results.set(Vec::new());
            error_message.set(None);

            if auto_fetch {
                show_youtube.set(true);
                show_peertube.set(true);
                loading_youtube.set(true);
                loading_peertube.set(true);
                wasm_bindgen_futures::spawn_local(fetch_youtube_results(
                    query.clone(),
                    youtube_results.clone(),
                    error_message.clone(),
                    show_youtube.clone(),
                    loading_youtube.clone(),
                ));
                wasm_bindgen_futures::spawn_local(fetch_peertube_results(
                    query.clone(),
                    peertube_results.clone(),
                    error_message.clone(),
                    show_peertube.clone(),
                    loading_peertube.clone(),
                ));
            }

            || ()
        });
    }

    let on_toggle_youtube = {
        let query = query.clone();
        let youtube_results = youtube_results.clone();
        let show_youtube = show_youtube.clone();
        let loading_youtube = loading_youtube.clone();
        let error_message = error_message.clone();

        Callback::from(move |_: MouseEvent| {
            let enabled = !*show_youtube;
            show_youtube.set(enabled);
            // Refetch only when the cache for this source is empty.
            if enabled && youtube_results.is_empty() && !query.is_empty() {
                loading_youtube.set(true);
                wasm_bindgen_futures::spawn_local(fetch_youtube_results(
                    query.clone(),
                    youtube_results.clone(),
                    error_message.clone(),
                    show_youtube.clone(),
                    loading_youtube.clone(),
                ));
            }
        })
    };

    let on_toggle_peertube = {
        let query = query.clone();
        let peertube_results = peertube_results.clone();
        let show_peertube = show_peertube.clone();
        let loading_peertube = loading_peertube.clone();
        let error_message = error_message.clone();

        Callback::from(move |_: MouseEvent| {
            let enabled = !*show_peertube;
            show_peertube.set(enabled);
            if enabled && peertube_results.is_empty() && !query.is_empty() {
                loading_peertube.set(true);
                wasm_bindgen_futures::spawn_local(fetch_peertube_results(
                    query.clone(),
                    peertube_results.clone(),
                    error_message.clone(),
                    show_peertube.clone(),
                    loading_peertube.clone(),
                ));
            }
        })
    };

    let on_sort_change = {
        let sort = sort.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            let option = SortOption::from_param(&value);
            update_sort_param(option.as_str());
            sort.set(option);
        })
    };

    let on_instance_input = {
        let instance_input = instance_input.clone();
        Callback::from(move |e: InputEvent| {
            instance_input.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_instance_save = {
        let instance_input = instance_input.clone();
        let peertube_results = peertube_results.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            preferences::set_peertube_instance(&instance_input);
            // Drop the cache so the next fetch includes the new server.
            peertube_results.set(Vec::new());
        })
    };

    let on_hidden = {
        let hidden_bump = hidden_bump.clone();
        Callback::from(move |_: String| hidden_bump.set(*hidden_bump + 1))
    };

    let combined = sort_videos(
        combine_results(
            &local_results,
            &peertube_results,
            &youtube_results,
            *show_peertube,
            *show_youtube,
        ),
        &sort,
    );
    let visible: Vec<Video> = combined
        .into_iter()
        .filter(|video| !preferences::is_hidden(&video.id))
        .collect();

    let heading = if query.is_empty() {
        "All Videos".to_string()
    } else {
        format!("Search results for \"{query}\"")
    };

    html! {
        <div class="container mx-auto px-4 py-6">
            <div class="flex flex-col sm:flex-row justify-between items-start sm:items-center mb-6 gap-4">
                <div class="flex items-center gap-4">
                    <h1 class="text-2xl font-bold">{ heading }</h1>
                    if !query.is_empty() {
                        <div class="flex flex-wrap items-center gap-2">
                            <button
                                class={classes!("px-3", "py-1", "rounded", "border", (*show_youtube).then_some("bg-red-600 text-white"))}
                                onclick={on_toggle_youtube}
                                disabled={*loading_youtube}
                            >
                                { if *show_youtube { "Hide YouTube" } else { "Show YouTube" } }
                            </button>
                            <button
                                class={classes!("px-3", "py-1", "rounded", "border", (*show_peertube).then_some("bg-orange-500 text-white"))}
                                onclick={on_toggle_peertube}
                                disabled={*loading_peertube}
                            >
                                { if *show_peertube { "Hide PeerTube" } else { "Show PeerTube" } }
                            </button>
                        </div>
                    }
                </div>
                <div class="flex items-center">
                    <span class="mr-2">{"Sort by:"}</span>
                    <select class="border rounded-md p-2" onchange={on_sort_change} value={sort.as_str()}>
                        <option value="relevance">{"Relevance"}</option>
                        <option value="date">{"Upload Date"}</option>
                        <option value="views">{"View Count"}</option>
                        <option value="rating">{"Rating"}</option>
                    </select>
                </div>
            </div>

            <form class="flex items-center gap-2 mb-4" onsubmit={on_instance_save}>
                <label class="text-sm text-gray-600">{"Custom PeerTube instance:"}</label>
                <input
                    type="text"
                    class="border rounded p-1 text-sm"
                    placeholder="https://tube.example.org"
                    value={(*instance_input).clone()}
                    oninput={on_instance_input}
                />
                <button type="submit" class="px-2 py-1 text-sm border rounded">{"Save"}</button>
            </form>

            if let Some(message) = &*error_message {
                <div class="bg-red-100 text-red-700 px-4 py-2 rounded-md mb-4">{ message }</div>
            }

            if visible.is_empty() && !*loading_youtube && !*loading_peertube {
                <p class="text-center text-gray-500 py-8">{"No results found."}</p>
            } else {
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                    { for visible.into_iter().map(|video| html! {
                        <VideoCard key={video.id.clone()} video={video.clone()} on_hidden={on_hidden.clone()} />
                    }) }
                </div>
            }

            if *loading_youtube {
                <p class="text-center text-gray-500 py-2">{"Loading YouTube results..."}</p>
            }
            if *loading_peertube {
                <p class="text-center text-gray-500 py-2">{"Loading PeerTube results..."}</p>
            }
        </div>
    }
}
