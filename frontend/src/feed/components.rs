use crate::components::video_card::VideoCard;
use crate::feed::api::fetch_feed_page;
use crate::models::Video;
use crate::storage::preferences;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct FeedViewProps {
    pub endpoint: &'static str,
    pub title: &'static str,
    #[prop_or_default]
    pub show_current_query: bool,
}

/// A paged feed over one of the rotating-keyword YouTube endpoints.
/// Each "Load more" carries the previous page's token and query index
/// forward, so keyword rotation is driven entirely by the server.
#[function_component(FeedView)]
pub fn feed_view(props: &FeedViewProps) -> Html {
    let videos = use_state(Vec::<Video>::default);
    let next_page_token = use_state(Option::<String>::default);
    let next_query_index = use_state(|| 0usize);
    let current_query = use_state(Option::<String>::default);
    let loading = use_state(|| false);
    let error_message = use_state(Option::<String>::default);

    let load_more = {
        let endpoint = props.endpoint;
        let videos = videos.clone();
        let next_page_token = next_page_token.clone();
        let next_query_index = next_query_index.clone();
        let current_query = current_query.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();

        Callback::from(move |_: ()| {
            if *loading {
                return;
            }
            loading.set(true);

            let videos = videos.clone();
            let next_page_token = next_page_token.clone();
            let next_query_index = next_query_index.clone();
            let current_query = current_query.clone();
            let loading = loading.clone();
            let error_message = error_message.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match fetch_feed_page(endpoint, (*next_page_token).clone(), *next_query_index).await
                {
                    Ok(page) => {
                        if let Some(error) = page.error {
                            error_message.set(Some(error));
                        } else {
                            let mut all = (*videos).clone();
                            all.extend(page.videos.into_iter().map(Video::from));
                            videos.set(all);
                            next_page_token.set(page.next_page_token);
                            if let Some(index) = page.next_query_index {
                                next_query_index.set(index);
                            }
                            current_query.set(page.current_query);
                            error_message.set(None);
                        }
                    }
                    Err(e) => error_message.set(Some(e)),
                }
                loading.set(false);
            });
        })
    };

    {
        let load_more = load_more.clone();
        use_effect_with((), move |_| {
            load_more.emit(());
            || ()
        });
    }

    let visible: Vec<Video> = videos
        .iter()
        .filter(|video| !preferences::is_hidden(&video.id))
        .cloned()
        .collect();

    html! {
        <div class="container mx-auto px-4 py-6">
            <div class="flex items-center gap-4 mb-4">
                <h1 class="text-2xl font-bold">{ props.title }</h1>
                if props.show_current_query {
                    if let Some(query) = &*current_query {
                        <span class="text-sm text-gray-500">{ format!("Topic: {query}") }</span>
                    }
                }
            </div>

            if let Some(message) = &*error_message {
                <div class="bg-red-100 text-red-700 px-4 py-2 rounded-md mb-4">{ message }</div>
            }

            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                { for visible.into_iter().map(|video| html! {
                    <VideoCard key={video.id.clone()} video={video.clone()} />
                }) }
            </div>

            <div class="flex justify-center mt-6">
                <button
                    class="px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700 disabled:opacity-50"
                    onclick={load_more.reform(|_: MouseEvent| ())}
                    disabled={*loading}
                >
                    { if *loading { "Loading..." } else { "Load more" } }
                </button>
            </div>
        </div>
    }
}

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! { <FeedView endpoint="home" title="Home" /> }
}

#[function_component(ProgrammingPage)]
pub fn programming_page() -> Html {
    html! { <FeedView endpoint="programming" title="Programming" show_current_query=true /> }
}
