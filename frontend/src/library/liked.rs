use crate::components::video_card::VideoCard;
use crate::models::Video;
use crate::storage::liked::{liked_videos, remove_liked, reorder_liked};
use yew::prelude::*;

#[function_component(LikedPage)]
pub fn liked_page() -> Html {
    let videos = use_state(Vec::<Video>::default);

    {
        let videos = videos.clone();
        use_effect_with((), move |_| {
            videos.set(liked_videos());
            || ()
        });
    }

    let on_move = {
        let videos = videos.clone();
        Callback::from(move |(index, up): (usize, bool)| {
            videos.set(reorder_liked(index, up));
        })
    };

    let on_remove = {
        let videos = videos.clone();
        Callback::from(move |video_id: String| {
            remove_liked(&video_id);
            videos.set(liked_videos());
        })
    };

    let count = videos.len();

    html! {
        <div class="container mx-auto px-4 py-6">
            <h1 class="text-2xl font-bold mb-4">{ format!("Liked videos ({count})") }</h1>

            if videos.is_empty() {
                <p class="text-center text-gray-500 py-8">{"Videos you like will show up here."}</p>
            } else {
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                    { for videos.iter().cloned().enumerate().map(|(index, video)| {
                        let video_id = video.id.clone();
                        let on_move_up = {
                            let on_move = on_move.clone();
                            Callback::from(move |_: MouseEvent| on_move.emit((index, true)))
                        };
                        let on_move_down = {
                            let on_move = on_move.clone();
                            Callback::from(move |_: MouseEvent| on_move.emit((index, false)))
                        };
                        let on_remove_click = {
                            let on_remove = on_remove.clone();
                            let video_id = video_id.clone();
                            Callback::from(move |_: MouseEvent| on_remove.emit(video_id.clone()))
                        };

                        let actions = html! {
                            <>
                                <button onclick={on_move_up} disabled={index == 0} title="Move up">{"↑"}</button>
                                <button onclick={on_move_down} disabled={index + 1 == count} title="Move down">{"↓"}</button>
                                <button onclick={on_remove_click} class="text-red-500" title="Remove">{"Remove"}</button>
                            </>
                        };

                        html! { <VideoCard key={video.id.clone()} video={video.clone()} {actions} /> }
                    }) }
                </div>
            }
        </div>
    }
}
