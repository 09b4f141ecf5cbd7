use crate::models::Video;
use crate::storage::history::record_watch;
use crate::storage::liked::{is_liked, toggle_like};
use crate::storage::preferences::{hide_video, report_video};
use crate::storage::watch_later::{add_to_watch_later, is_in_watch_later, remove_from_watch_later};
use crate::utils::{format_iso8601_date, format_view_count};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct VideoCardProps {
    pub video: Video,
    /// Extra controls the owning page wants on this card (reorder,
    /// remove-from-list, watch metadata).
    #[prop_or_default]
    pub actions: Html,
    /// Emitted with the video id after the card hides or reports it.
    #[prop_or_default]
    pub on_hidden: Option<Callback<String>>,
}

#[function_component(VideoCard)]
pub fn video_card(props: &VideoCardProps) -> Html {
    let liked = use_state(|| is_liked(&props.video.id));
    let queued = use_state(|| is_in_watch_later(&props.video.id));

    let on_like = {
        let video = props.video.clone();
        let liked = liked.clone();
        Callback::from(move |_: MouseEvent| {
            liked.set(toggle_like(&video));
        })
    };

    let on_queue = {
        let video = props.video.clone();
        let queued = queued.clone();
        Callback::from(move |_: MouseEvent| {
            if *queued {
                remove_from_watch_later(&video.id);
                queued.set(false);
            } else {
                add_to_watch_later(&video);
                queued.set(true);
            }
        })
    };

    let on_hide = {
        let video_id = props.video.id.clone();
        let on_hidden = props.on_hidden.clone();
        Callback::from(move |_: MouseEvent| {
            hide_video(&video_id);
            if let Some(callback) = &on_hidden {
                callback.emit(video_id.clone());
            }
        })
    };

    let on_report = {
        let video_id = props.video.id.clone();
        let on_hidden = props.on_hidden.clone();
        Callback::from(move |_: MouseEvent| {
            report_video(&video_id);
            if let Some(callback) = &on_hidden {
                callback.emit(video_id.clone());
            }
        })
    };

    // Opening a video counts as a watch no matter where it plays.
    let on_open = {
        let video = props.video.clone();
        Callback::from(move |_: MouseEvent| record_watch(&video))
    };

    let external = props.video.url.starts_with("http");

    html! {
        <div class="rounded-lg border overflow-hidden bg-white">
            <a
                href={props.video.url.clone()}
                target={external.then_some("_blank")}
                onclick={on_open}
                class="relative block"
            >
                <img src={props.video.thumbnail.clone()} alt={props.video.title.clone()} class="w-full aspect-video object-cover" />
                if !props.video.duration.is_empty() {
                    <span class="absolute bottom-1 right-1 bg-black/80 text-white text-xs px-1 rounded">
                        { &props.video.duration }
                    </span>
                }
            </a>
            <div class="p-3">
                <h3 class="font-semibold line-clamp-2">{ &props.video.title }</h3>
                <p class="text-sm text-gray-600">{ &props.video.uploader }</p>
                <p class="text-sm text-gray-500">
                    { format_view_count(&props.video.views) }
                    { " · " }
                    { format_iso8601_date(&props.video.upload_date) }
                </p>
                <span class="inline-block text-xs bg-gray-100 rounded px-2 py-0.5 mt-1">
                    { &props.video.platform }
                </span>
                <div class="flex items-center gap-2 mt-2 text-sm">
                    <button onclick={on_like} title="Like">
                        { if *liked { "♥" } else { "♡" } }
                    </button>
                    <button onclick={on_queue} title="Watch later">
                        { if *queued { "✓ Later" } else { "+ Later" } }
                    </button>
                    <button onclick={on_hide} title="Hide" class="text-gray-400">{"Hide"}</button>
                    <button onclick={on_report} title="Report" class="text-gray-400">{"Report"}</button>
                    { props.actions.clone() }
                </div>
            </div>
        </div>
    }
}
