use contracts::dashboards::d410_wage_dashboard::TrendSeries;
use leptos::prelude::*;

use super::chart_geometry::{palette_color, polyline_points, LinearScale};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 360.0;
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_BOTTOM: f64 = 32.0;
const MARGIN_TOP: f64 = 12.0;

/// Two-series line chart: national average vs the selected prefecture,
/// indexed by year.
#[component]
pub fn TrendView(series: TrendSeries) -> impl IntoView {
    if series.points.is_empty() {
        return view! {
            <div class="chart chart--empty">"データがありません"</div>
        }
        .into_any();
    }

    let years: Vec<i32> = series.points.iter().map(|p| p.year).collect();
    let year_min = *years.iter().min().unwrap_or(&0) as f64;
    let year_max = *years.iter().max().unwrap_or(&0) as f64;
    let wage_max = series
        .points
        .iter()
        .map(|p| p.national.max(p.prefecture))
        .fold(0.0, f64::max);

    let x = LinearScale::new((year_min, year_max), (MARGIN_LEFT, WIDTH - 16.0));
    let y = LinearScale::new((0.0, wage_max * 1.1), (HEIGHT - MARGIN_BOTTOM, MARGIN_TOP));

    let national: Vec<(f64, f64)> = series
        .points
        .iter()
        .map(|p| (p.year as f64, p.national))
        .collect();
    let prefecture: Vec<(f64, f64)> = series
        .points
        .iter()
        .map(|p| (p.year as f64, p.prefecture))
        .collect();

    let year_labels = years
        .iter()
        .map(|year| {
            let tx = x.apply(*year as f64);
            view! {
                <text
                    x=format!("{:.1}", tx)
                    y=format!("{:.1}", HEIGHT - 10.0)
                    text-anchor="middle"
                    class="chart__tick"
                >
                    {year.to_string()}
                </text>
            }
        })
        .collect_view();

    let wage_labels = y
        .ticks(5)
        .into_iter()
        .map(|v| {
            let ty = y.apply(v);
            view! {
                <text
                    x=format!("{:.1}", MARGIN_LEFT - 8.0)
                    y=format!("{:.1}", ty + 4.0)
                    text-anchor="end"
                    class="chart__tick"
                >
                    {format!("{:.0}", v)}
                </text>
            }
        })
        .collect_view();

    view! {
        <div class="chart chart--trend">
            <svg
                width=format!("{WIDTH}")
                height=format!("{HEIGHT}")
                viewBox=format!("0 0 {WIDTH} {HEIGHT}")
                role="img"
            >
                <line
                    x1=format!("{MARGIN_LEFT}")
                    y1=format!("{MARGIN_TOP}")
                    x2=format!("{MARGIN_LEFT}")
                    y2=format!("{:.1}", HEIGHT - MARGIN_BOTTOM)
                    stroke="#7f8ba0"
                />
                <line
                    x1=format!("{MARGIN_LEFT}")
                    y1=format!("{:.1}", HEIGHT - MARGIN_BOTTOM)
                    x2=format!("{:.1}", WIDTH - 16.0)
                    y2=format!("{:.1}", HEIGHT - MARGIN_BOTTOM)
                    stroke="#7f8ba0"
                />
                <polyline
                    points=polyline_points(&national, &x, &y)
                    fill="none"
                    stroke=palette_color(0)
                    stroke-width="2"
                />
                <polyline
                    points=polyline_points(&prefecture, &x, &y)
                    fill="none"
                    stroke=palette_color(1)
                    stroke-width="2"
                />
                {year_labels}
                {wage_labels}
            </svg>
            <div class="chart__legend">
                <span class="chart__legend-swatch" style=format!("background:{}", palette_color(0))></span>
                <span>"全国一人当たり賃金（万円）"</span>
                <span class="chart__legend-swatch" style=format!("background:{}", palette_color(1))></span>
                <span>{format!("{}の一人当たり賃金（万円）", series.prefecture)}</span>
            </div>
        </div>
    }
    .into_any()
}
