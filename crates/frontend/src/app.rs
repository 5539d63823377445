use crate::dashboards::WageDashboard;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <WageDashboard />
    }
}
