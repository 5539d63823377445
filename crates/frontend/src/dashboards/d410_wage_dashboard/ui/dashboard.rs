use contracts::dashboards::d410_wage_dashboard::{
    AgeBubbleSeries, DashboardMeta, GeoSnapshot, IndustryBars, TrendSeries,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::bar_view::BarView;
use super::bubble_view::BubbleView;
use super::heatmap_view::HeatmapView;
use super::trend_view::TrendView;
use crate::dashboards::d410_wage_dashboard::api;
use crate::shared::components::Select;

/// The wage dashboard page.
///
/// Holds the three selections (prefecture, year, wage metric) as signals;
/// each selection change re-runs the affected fetch + render through an
/// `Effect`, in a fixed order. Defaults are the first entries of the
/// selector catalog; a reload resets them.
#[component]
pub fn WageDashboard() -> impl IntoView {
    let meta = RwSignal::new(None::<DashboardMeta>);
    let prefecture = RwSignal::new(String::new());
    let year = RwSignal::new(None::<i32>);
    let metric = RwSignal::new(String::new());

    let geo = RwSignal::new(None::<GeoSnapshot>);
    let trend = RwSignal::new(None::<TrendSeries>);
    let bubbles = RwSignal::new(None::<AgeBubbleSeries>);
    let bars = RwSignal::new(None::<IndustryBars>);
    let error_msg = RwSignal::new(None::<String>);

    // Selector catalog and the year-independent bubble data load once on mount
    spawn_local(async move {
        match api::get_meta().await {
            Ok(catalog) => {
                if let Some(first) = catalog.prefectures.first() {
                    prefecture.set(first.clone());
                }
                if let Some(first) = catalog.years.first() {
                    year.set(Some(*first));
                }
                if let Some(first) = catalog.metrics.first() {
                    metric.set(first.id.clone());
                }
                meta.set(Some(catalog));
            }
            Err(e) => error_msg.set(Some(format!("カタログの取得に失敗しました: {}", e))),
        }

        match api::get_age_bubbles().await {
            Ok(series) => bubbles.set(Some(series)),
            Err(e) => {
                log::error!("Failed to load bubble series: {}", e);
                error_msg.set(Some(e));
            }
        }
    });

    // Geo heatmap follows the year selection
    Effect::new(move |_| {
        let Some(selected_year) = year.get() else {
            return;
        };
        spawn_local(async move {
            match api::get_geo_snapshot(selected_year).await {
                Ok(snapshot) => geo.set(Some(snapshot)),
                Err(e) => error_msg.set(Some(e)),
            }
        });
    });

    // Trend follows the prefecture selection
    Effect::new(move |_| {
        let selected = prefecture.get();
        if selected.is_empty() {
            return;
        }
        spawn_local(async move {
            match api::get_trend_series(&selected).await {
                Ok(series) => trend.set(Some(series)),
                Err(e) => error_msg.set(Some(e)),
            }
        });
    });

    // Bars follow year and metric
    Effect::new(move |_| {
        let Some(selected_year) = year.get() else {
            return;
        };
        let selected_metric = metric.get();
        if selected_metric.is_empty() {
            return;
        }
        spawn_local(async move {
            match api::get_industry_bars(selected_year, &selected_metric).await {
                Ok(response) => bars.set(Some(response)),
                Err(e) => error_msg.set(Some(e)),
            }
        });
    });

    let prefecture_options = Signal::derive(move || {
        meta.get()
            .map(|m| {
                m.prefectures
                    .into_iter()
                    .map(|p| (p.clone(), p))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    });
    let year_options = Signal::derive(move || {
        meta.get()
            .map(|m| {
                m.years
                    .into_iter()
                    .map(|y| (y.to_string(), format!("{}年", y)))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    });
    let metric_options = Signal::derive(move || {
        meta.get()
            .map(|m| {
                m.metrics
                    .into_iter()
                    .map(|metric| (metric.id, metric.label))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default()
    });

    let on_prefecture = Callback::new(move |value: String| prefecture.set(value));
    let on_year = Callback::new(move |value: String| {
        if let Ok(parsed) = value.parse::<i32>() {
            year.set(Some(parsed));
        }
    });
    let on_metric = Callback::new(move |value: String| metric.set(value));

    let year_value = Signal::derive(move || {
        year.get().map(|y| y.to_string()).unwrap_or_default()
    });

    view! {
        <div id="d410_wage_dashboard--page" class="page page--dashboard">
            <h1 class="page__title">"日本の賃金データダッシュボード"</h1>

            {move || error_msg.get().map(|msg| view! {
                <div class="alert alert--error">
                    <strong>"⚠ "</strong>
                    {msg}
                </div>
            })}

            <section class="dashboard__section">
                <h2>
                    {move || match year.get() {
                        Some(y) => format!("{}年 : 一人当たり平均賃金のヒートマップ", y),
                        None => "一人当たり平均賃金のヒートマップ".to_string(),
                    }}
                </h2>
                {move || geo.get().map(|snapshot| view! { <HeatmapView snapshot=snapshot /> })}
            </section>

            <section class="dashboard__section">
                <h2>"集計年別の一人当たり賃金（万円）の推移"</h2>
                <Select
                    label="都道府県"
                    value=Signal::derive(move || prefecture.get())
                    options=prefecture_options
                    on_change=on_prefecture
                />
                {move || trend.get().map(|series| view! { <TrendView series=series /> })}
            </section>

            <section class="dashboard__section">
                <h2>"年齢階層別の全国一人当たり平均賃金（万円）"</h2>
                {move || bubbles.get().map(|series| view! { <BubbleView series=series /> })}
            </section>

            <section class="dashboard__section">
                <h2>"産業別の賃金推移"</h2>
                <Select
                    label="集計年"
                    value=year_value
                    options=year_options
                    on_change=on_year
                />
                <Select
                    label="賃金種別"
                    value=Signal::derive(move || metric.get())
                    options=metric_options
                    on_change=on_metric
                />
                {move || bars.get().map(|response| view! { <BarView bars=response /> })}
            </section>

            <footer class="dashboard__footer">
                <p>"出典: RESAS(地域経済分析システム)"</p>
                <p>"本結果はRESAS(地域経済分析システム)を加工して作成"</p>
            </footer>
        </div>
    }
}
