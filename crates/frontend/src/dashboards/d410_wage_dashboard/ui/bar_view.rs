use contracts::dashboards::d410_wage_dashboard::IndustryBars;
use leptos::prelude::*;

use super::chart_geometry::{palette_color, LinearScale};
use super::frame_player::FramePlayer;

const WIDTH: f64 = 800.0;
const BAR_HEIGHT: f64 = 22.0;
const BAR_GAP: f64 = 8.0;
const MARGIN_LEFT: f64 = 220.0;
const MARGIN_TOP: f64 = 8.0;
const MARGIN_BOTTOM: f64 = 28.0;

/// Animated horizontal bar chart of the selected metric per industry
/// category, one frame per age bracket. The x axis is fixed to the
/// transform's year-independent maximum.
#[component]
pub fn BarView(bars: IndustryBars) -> impl IntoView {
    if bars.rows.is_empty() {
        return view! {
            <div class="chart chart--empty">"データがありません"</div>
        }
        .into_any();
    }

    let frame = RwSignal::new(0usize);
    let labels = bars.age_brackets.clone();

    // Stable industry order and colors across frames
    let mut industries: Vec<String> = Vec::new();
    for row in &bars.rows {
        if !industries.contains(&row.industry) {
            industries.push(row.industry.clone());
        }
    }

    let height = MARGIN_TOP + industries.len() as f64 * (BAR_HEIGHT + BAR_GAP) + MARGIN_BOTTOM;
    let x = LinearScale::new((0.0, bars.axis_max), (MARGIN_LEFT, WIDTH - 24.0));

    let x_labels = x
        .ticks(5)
        .into_iter()
        .map(|v| {
            view! {
                <text
                    x=format!("{:.1}", x.apply(v))
                    y=format!("{:.1}", height - 8.0)
                    text-anchor="middle"
                    class="chart__tick"
                >
                    {format!("{:.0}", v)}
                </text>
            }
        })
        .collect_view();

    let industry_labels = industries
        .iter()
        .enumerate()
        .map(|(i, industry)| {
            let ty = MARGIN_TOP + i as f64 * (BAR_HEIGHT + BAR_GAP) + BAR_HEIGHT * 0.7;
            view! {
                <text
                    x=format!("{:.1}", MARGIN_LEFT - 8.0)
                    y=format!("{:.1}", ty)
                    text-anchor="end"
                    class="chart__tick"
                >
                    {industry.clone()}
                </text>
            }
        })
        .collect_view();

    let rows = bars.rows.clone();
    let brackets = bars.age_brackets.clone();
    let industry_index = industries.clone();

    let bar_rects = move || {
        let Some(bracket) = brackets.get(frame.get()).cloned() else {
            return view! { <></> }.into_any();
        };
        rows.iter()
            .filter(|r| r.age_bracket == bracket)
            .map(|r| {
                let slot = industry_index
                    .iter()
                    .position(|name| *name == r.industry)
                    .unwrap_or(0);
                let by = MARGIN_TOP + slot as f64 * (BAR_HEIGHT + BAR_GAP);
                let bar_end = x.apply(r.value.max(0.0));
                let tooltip = format!("{} ({}): {}万円", r.industry, r.age_bracket, r.value);
                view! {
                    <rect
                        x=format!("{MARGIN_LEFT}")
                        y=format!("{:.1}", by)
                        width=format!("{:.1}", (bar_end - MARGIN_LEFT).max(0.0))
                        height=format!("{BAR_HEIGHT}")
                        fill=palette_color(slot)
                    >
                        <title>{tooltip}</title>
                    </rect>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="chart chart--bars">
            <FramePlayer labels=labels frame=frame />
            <svg
                width=format!("{WIDTH}")
                height=format!("{:.0}", height)
                viewBox=format!("0 0 {WIDTH} {:.0}", height)
                role="img"
            >
                <line
                    x1=format!("{MARGIN_LEFT}")
                    y1=format!("{MARGIN_TOP}")
                    x2=format!("{MARGIN_LEFT}")
                    y2=format!("{:.1}", height - MARGIN_BOTTOM)
                    stroke="#7f8ba0"
                />
                {bar_rects}
                {industry_labels}
                {x_labels}
            </svg>
        </div>
    }
    .into_any()
}
