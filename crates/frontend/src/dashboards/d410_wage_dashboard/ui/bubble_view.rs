use contracts::dashboards::d410_wage_dashboard::AgeBubbleSeries;
use leptos::prelude::*;

use super::chart_geometry::{bubble_radius, palette_color, LinearScale};
use super::frame_player::FramePlayer;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 420.0;
const MARGIN_LEFT: f64 = 56.0;
const MARGIN_BOTTOM: f64 = 32.0;
const MARGIN_TOP: f64 = 12.0;

/// Fixed axis ranges (the original chart's range_x / range_y)
const WAGE_RANGE: (f64, f64) = (150.0, 700.0);
const BONUS_RANGE: (f64, f64) = (0.0, 150.0);

/// Animated scatter of the national wage by age bracket: x = per-capita
/// wage, y = bonus, bubble area = base salary, one frame per year.
#[component]
pub fn BubbleView(series: AgeBubbleSeries) -> impl IntoView {
    if series.rows.is_empty() {
        return view! {
            <div class="chart chart--empty">"データがありません"</div>
        }
        .into_any();
    }

    let frame = RwSignal::new(0usize);
    let labels: Vec<String> = series.years.iter().map(|y| format!("{}年", y)).collect();

    let x = LinearScale::new(WAGE_RANGE, (MARGIN_LEFT, WIDTH - 16.0));
    let y = LinearScale::new(BONUS_RANGE, (HEIGHT - MARGIN_BOTTOM, MARGIN_TOP));

    // Bubble scale and bracket colors stay fixed across frames
    let size_max = series.rows.iter().map(|r| r.base_salary).fold(0.0, f64::max);
    let mut brackets: Vec<String> = Vec::new();
    for row in &series.rows {
        if !brackets.contains(&row.age_bracket) {
            brackets.push(row.age_bracket.clone());
        }
    }

    let legend = brackets
        .iter()
        .enumerate()
        .map(|(i, bracket)| {
            view! {
                <span class="chart__legend-swatch" style=format!("background:{}", palette_color(i))></span>
                <span>{bracket.clone()}</span>
            }
        })
        .collect_view();

    let rows = series.rows.clone();
    let years = series.years.clone();
    let bracket_index = brackets.clone();

    let bubbles = move || {
        let Some(year) = years.get(frame.get()).copied() else {
            return view! { <></> }.into_any();
        };
        rows.iter()
            .filter(|r| r.year == year)
            .map(|r| {
                let color_index = bracket_index
                    .iter()
                    .position(|b| *b == r.age_bracket)
                    .unwrap_or(0);
                let tooltip = format!(
                    "{} {}: 賃金{}万円 / 賞与{}万円",
                    year, r.age_bracket, r.wage_per_capita, r.bonus
                );
                view! {
                    <circle
                        cx=format!("{:.1}", x.apply(r.wage_per_capita))
                        cy=format!("{:.1}", y.apply(r.bonus))
                        r=format!("{:.1}", bubble_radius(r.base_salary, size_max))
                        fill=palette_color(color_index)
                        fill-opacity="0.7"
                    >
                        <title>{tooltip}</title>
                    </circle>
                }
            })
            .collect_view()
            .into_any()
    };

    let x_labels = x
        .ticks(5)
        .into_iter()
        .map(|v| {
            view! {
                <text
                    x=format!("{:.1}", x.apply(v))
                    y=format!("{:.1}", HEIGHT - 10.0)
                    text-anchor="middle"
                    class="chart__tick"
                >
                    {format!("{:.0}", v)}
                </text>
            }
        })
        .collect_view();

    let y_labels = y
        .ticks(4)
        .into_iter()
        .map(|v| {
            view! {
                <text
                    x=format!("{:.1}", MARGIN_LEFT - 8.0)
                    y=format!("{:.1}", y.apply(v) + 4.0)
                    text-anchor="end"
                    class="chart__tick"
                >
                    {format!("{:.0}", v)}
                </text>
            }
        })
        .collect_view();

    view! {
        <div class="chart chart--bubble">
            <FramePlayer labels=labels frame=frame />
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
                {bubbles}
                {x_labels}
                {y_labels}
            </svg>
            <div class="chart__legend">{legend}</div>
        </div>
    }
    .into_any()
}
