use contracts::dashboards::d410_wage_dashboard::GeoSnapshot;
use leptos::prelude::*;
use thaw::Checkbox;

use super::chart_geometry::{heat_color, project};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 520.0;

/// Geo heatmap over the fixed Japan viewpoint: one marker per prefecture
/// capital, ramp intensity driven by the min-max scaled wage. A checkbox
/// reveals the raw joined table.
#[component]
pub fn HeatmapView(snapshot: GeoSnapshot) -> impl IntoView {
    let show_table = RwSignal::new(false);

    if snapshot.rows.is_empty() {
        return view! {
            <div class="chart chart--empty">"データがありません"</div>
        }
        .into_any();
    }

    let markers = snapshot
        .rows
        .iter()
        .map(|row| {
            let (x, y) = project(row.lat, row.lon, WIDTH, HEIGHT);
            let radius = 10.0 + 16.0 * row.relative_wage;
            let tooltip = format!("{}: {}万円", row.prefecture, row.wage);
            view! {
                <circle
                    cx=format!("{:.1}", x)
                    cy=format!("{:.1}", y)
                    r=format!("{:.1}", radius)
                    fill=heat_color(row.relative_wage)
                >
                    <title>{tooltip}</title>
                </circle>
            }
        })
        .collect_view();

    let table_rows = snapshot.rows.clone();

    view! {
        <div class="chart chart--heatmap">
            <svg
                width=format!("{WIDTH}")
                height=format!("{HEIGHT}")
                viewBox=format!("0 0 {WIDTH} {HEIGHT}")
                role="img"
            >
                <rect width=format!("{WIDTH}") height=format!("{HEIGHT}") fill="#0b111a" />
                {markers}
            </svg>

            <Checkbox checked=show_table label="Show DataFrame" />

            {move || {
                if !show_table.get() {
                    return None;
                }
                let rows = table_rows.clone();
                Some(view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"都道府県名"</th>
                                <th>"lat"</th>
                                <th>"lon"</th>
                                <th>"一人当たり賃金（万円）"</th>
                                <th>"一人当たり賃金（相対値）"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {rows
                                .into_iter()
                                .map(|row| view! {
                                    <tr>
                                        <td>{row.prefecture}</td>
                                        <td>{format!("{:.6}", row.lat)}</td>
                                        <td>{format!("{:.6}", row.lon)}</td>
                                        <td>{format!("{:.1}", row.wage)}</td>
                                        <td>{format!("{:.3}", row.relative_wage)}</td>
                                    </tr>
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                })
            }}
        </div>
    }
    .into_any()
}
