use axum::extract::Query;
use axum::Json;
use contracts::dashboards::d410_wage_dashboard::{
    AgeBubbleSeries, DashboardMeta, GeoSnapshot, GeoSnapshotRequest, IndustryBars,
    IndustryBarsRequest, TrendSeries, TrendSeriesRequest,
};

use super::service;
use crate::datasets::store::get_datasets;

/// GET /api/wages/meta
pub async fn meta() -> Json<DashboardMeta> {
    Json(service::meta(get_datasets()))
}

/// GET /api/wages/geo?year=Y
pub async fn geo_snapshot(Query(req): Query<GeoSnapshotRequest>) -> Json<GeoSnapshot> {
    Json(service::geo_snapshot(get_datasets(), req.year))
}

/// GET /api/wages/trend?prefecture=P
pub async fn trend_series(Query(req): Query<TrendSeriesRequest>) -> Json<TrendSeries> {
    Json(service::trend_series(get_datasets(), &req.prefecture))
}

/// GET /api/wages/bubbles
pub async fn age_bubble_series() -> Json<AgeBubbleSeries> {
    Json(service::age_bubble_series(get_datasets()))
}

/// GET /api/wages/bars?year=Y&metric=M
///
/// An unknown metric id is rejected by the `Query` extractor with 400.
pub async fn industry_bars(Query(req): Query<IndustryBarsRequest>) -> Json<IndustryBars> {
    Json(service::industry_bars(get_datasets(), req.year, req.metric))
}
