use leptos::prelude::*;

/// Labelled single-choice control over (value, label) pairs.
///
/// Options are read reactively; the change handler receives the selected
/// option's value string.
#[component]
pub fn Select(
    /// Label rendered above the control
    #[prop(into)]
    label: String,
    /// Currently selected value
    #[prop(into)]
    value: Signal<String>,
    /// Options as (value, label) pairs
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Called with the newly selected value
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <select
                class="form__select"
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <For
                    each=move || options.get()
                    key=|(val, _)| val.clone()
                    children=move |(val, label)| {
                        let val_clone = val.clone();
                        let is_selected = move || value.get() == val_clone;
                        view! {
                            <option value=val selected=is_selected>
                                {label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}
