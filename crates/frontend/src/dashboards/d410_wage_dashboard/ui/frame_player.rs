use gloo_timers::callback::Interval;
use leptos::prelude::*;

const FRAME_MS: u32 = 700;

/// Playback control for the animated charts: play/pause button, step
/// buttons and the current frame label. Advancing past the last frame
/// wraps to the first.
#[component]
pub fn FramePlayer(
    /// One label per animation frame, in frame order
    labels: Vec<String>,
    /// Index of the frame currently shown
    frame: RwSignal<usize>,
) -> impl IntoView {
    let frame_count = labels.len().max(1);
    let playing = RwSignal::new(false);
    // Interval is not Send; keep it in a local slot. Dropping it stops the clock.
    let timer = StoredValue::new_local(None::<Interval>);

    let advance = move || frame.update(|f| *f = (*f + 1) % frame_count);

    let toggle_play = move |_| {
        if playing.get_untracked() {
            timer.set_value(None);
            playing.set(false);
        } else {
            timer.set_value(Some(Interval::new(FRAME_MS, advance)));
            playing.set(true);
        }
    };

    let step_back = move |_| {
        frame.update(|f| *f = (*f + frame_count - 1) % frame_count);
    };
    let step_forward = move |_| advance();

    let label = move || {
        labels
            .get(frame.get().min(frame_count - 1))
            .cloned()
            .unwrap_or_default()
    };

    view! {
        <div class="frame-player">
            <button class="frame-player__button" on:click=toggle_play>
                {move || if playing.get() { "停止" } else { "再生" }}
            </button>
            <button class="frame-player__button" on:click=step_back>"◀"</button>
            <button class="frame-player__button" on:click=step_forward>"▶"</button>
            <span class="frame-player__label">{label}</span>
        </div>
    }
}
