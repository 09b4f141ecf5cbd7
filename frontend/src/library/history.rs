use crate::components::video_card::VideoCard;
use crate::models::HistoryEntry;
use crate::storage::history::{clear_history, history_entries, remove_entry};
use crate::utils::format_iso8601_date;
use yew::prelude::*;

#[function_component(HistoryPage)]
pub fn history_page() -> Html {
    let entries = use_state(Vec::<HistoryEntry>::default);

    {
        let entries = entries.clone();
        use_effect_with((), move |_| {
            entries.set(history_entries());
            || ()
        });
    }

    let on_clear = {
        let entries = entries.clone();
        Callback::from(move |_: MouseEvent| {
            clear_history();
            entries.set(Vec::new());
        })
    };

    let on_remove = {
        let entries = entries.clone();
        Callback::from(move |video_id: String| {
            entries.set(remove_entry(&video_id));
        })
    };

    html! {
        <div class="container mx-auto px-4 py-6">
            <div class="flex items-center justify-between mb-4">
                <h1 class="text-2xl font-bold">{"Watch history"}</h1>
                if !entries.is_empty() {
                    <button class="px-3 py-1 border rounded text-red-500" onclick={on_clear}>
                        {"Clear history"}
                    </button>
                }
            </div>

            if entries.is_empty() {
                <p class="text-center text-gray-500 py-8">{"Videos you watch will show up here."}</p>
            } else {
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-4">
                    { for entries.iter().cloned().map(|entry| {
                        let video_id = entry.video.id.clone();
                        let on_remove_click = {
                            let on_remove = on_remove.clone();
                            Callback::from(move |_: MouseEvent| on_remove.emit(video_id.clone()))
                        };

                        let watched = format!(
                            "Watched {} · {}×",
                            format_iso8601_date(&entry.watched_at),
                            entry.watch_count
                        );
                        let completion = entry
                            .completion_rate
                            .map(|rate| format!(" · {rate:.0}%"))
                            .unwrap_or_default();

                        let actions = html! {
                            <>
                                <span class="text-gray-400">{ watched }{ completion }</span>
                                <button onclick={on_remove_click} class="text-red-500" title="Remove">{"Remove"}</button>
                            </>
                        };

                        html! { <VideoCard key={entry.video.id.clone()} video={entry.video.clone()} {actions} /> }
                    }) }
                </div>
            }
        </div>
    }
}
