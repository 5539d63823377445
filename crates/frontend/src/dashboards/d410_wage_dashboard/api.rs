use contracts::dashboards::d410_wage_dashboard::{
    AgeBubbleSeries, DashboardMeta, GeoSnapshot, IndustryBars, TrendSeries,
};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::shared::api_utils::api_url;

const API_BASE: &str = "/api/wages";

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Selector catalog (prefectures, years, wage metrics)
pub async fn get_meta() -> Result<DashboardMeta, String> {
    get_json(&api_url(&format!("{}/meta", API_BASE))).await
}

/// Geo heatmap rows for one year
pub async fn get_geo_snapshot(year: i32) -> Result<GeoSnapshot, String> {
    get_json(&api_url(&format!("{}/geo?year={}", API_BASE, year))).await
}

/// National-vs-prefecture trend series
pub async fn get_trend_series(prefecture: &str) -> Result<TrendSeries, String> {
    get_json(&api_url(&format!(
        "{}/trend?prefecture={}",
        API_BASE,
        urlencoding::encode(prefecture)
    )))
    .await
}

/// Animated age-bracket bubble data
pub async fn get_age_bubbles() -> Result<AgeBubbleSeries, String> {
    get_json(&api_url(&format!("{}/bubbles", API_BASE))).await
}

/// Animated industry bar data for one year and metric
pub async fn get_industry_bars(year: i32, metric_id: &str) -> Result<IndustryBars, String> {
    get_json(&api_url(&format!(
        "{}/bars?year={}&metric={}",
        API_BASE, year, metric_id
    )))
    .await
}
