//! Transform layer of the wage dashboard.
//!
//! Four pure operations over the loaded tables plus the selector catalog.
//! Every function is deterministic and side-effect free; an empty filter
//! result is an empty output, never an error.

use contracts::dashboards::d410_wage_dashboard::{
    AgeBubbleSeries, BubbleRow, DashboardMeta, GeoRow, GeoSnapshot, IndustryBarRow, IndustryBars,
    TrendPoint, TrendSeries, WageMetric,
};

use crate::datasets::schema::AGGREGATE_AGE_BRACKET;
use crate::datasets::{IndustryWageRecord, WageDatasets};

/// Margin added above the global metric maximum when fixing the bar axis
const BAR_AXIS_MARGIN: f64 = 50.0;

/// Selector catalog: unique prefecture names (aggregate-bracket rows, source
/// order), unique industry-table years, and the three fixed metrics. The
/// first entry of each list is the UI default.
pub fn meta(data: &WageDatasets) -> DashboardMeta {
    let prefectures = unique_in_order(
        data.prefecture_by_age
            .iter()
            .filter(|r| r.age_bracket == AGGREGATE_AGE_BRACKET)
            .map(|r| r.prefecture.clone()),
    );
    let years = unique_in_order(data.national_by_industry.iter().map(|r| r.year));

    DashboardMeta {
        prefectures,
        years,
        metrics: WageMetric::ALL.into_iter().map(Into::into).collect(),
    }
}

/// Aggregate-bracket prefecture wages for one year, inner-joined with the
/// coordinate lookup on prefecture name. Rows without coordinates are
/// silently dropped. Output keeps source row order and carries the wage
/// min-max scaled over the joined set.
pub fn geo_snapshot(data: &WageDatasets, year: i32) -> GeoSnapshot {
    let joined: Vec<(&str, f64, f64, f64)> = data
        .prefecture_by_age
        .iter()
        .filter(|r| r.age_bracket == AGGREGATE_AGE_BRACKET && r.year == year)
        .filter_map(|r| {
            data.locations
                .iter()
                .find(|loc| loc.prefecture == r.prefecture)
                .map(|loc| (r.prefecture.as_str(), loc.lat, loc.lon, r.wage_per_capita))
        })
        .collect();

    let wages: Vec<f64> = joined.iter().map(|(_, _, _, w)| *w).collect();
    let relative = min_max_normalize(&wages);

    let rows = joined
        .into_iter()
        .zip(relative)
        .map(|((prefecture, lat, lon, wage), relative_wage)| GeoRow {
            prefecture: prefecture.to_string(),
            lat,
            lon,
            wage,
            relative_wage,
        })
        .collect();

    GeoSnapshot { year, rows }
}

/// National vs. one prefecture, aggregate bracket, inner-joined on year.
/// A year present in only one of the two tables does not appear.
pub fn trend_series(data: &WageDatasets, prefecture: &str) -> TrendSeries {
    let points = data
        .national_by_age
        .iter()
        .filter(|n| n.age_bracket == AGGREGATE_AGE_BRACKET)
        .filter_map(|n| {
            data.prefecture_by_age
                .iter()
                .find(|p| {
                    p.age_bracket == AGGREGATE_AGE_BRACKET
                        && p.prefecture == prefecture
                        && p.year == n.year
                })
                .map(|p| TrendPoint {
                    year: n.year,
                    national: n.wage_per_capita,
                    prefecture: p.wage_per_capita,
                })
        })
        .collect();

    TrendSeries {
        prefecture: prefecture.to_string(),
        points,
    }
}

/// National wage rows for the individual age brackets, frame-sequenced by
/// year. The aggregate bracket is excluded.
pub fn age_bubble_series(data: &WageDatasets) -> AgeBubbleSeries {
    let rows: Vec<BubbleRow> = data
        .national_by_age
        .iter()
        .filter(|r| r.age_bracket != AGGREGATE_AGE_BRACKET)
        .map(|r| BubbleRow {
            year: r.year,
            age_bracket: r.age_bracket.clone(),
            wage_per_capita: r.wage_per_capita,
            base_salary: r.base_salary,
            bonus: r.bonus,
        })
        .collect();

    let mut years: Vec<i32> = unique_in_order(rows.iter().map(|r| r.year));
    years.sort_unstable();

    AgeBubbleSeries { years, rows }
}

/// Industry-table rows for one year and one metric. The axis maximum is
/// computed over the entire unfiltered table, so it stays identical across
/// year selections.
pub fn industry_bars(data: &WageDatasets, year: i32, metric: WageMetric) -> IndustryBars {
    let axis_max = data
        .national_by_industry
        .iter()
        .map(|r| metric_value(r, metric))
        .fold(None, |acc: Option<f64>, v| {
            Some(acc.map_or(v, |m| m.max(v)))
        })
        .unwrap_or(0.0)
        + BAR_AXIS_MARGIN;

    let filtered: Vec<&IndustryWageRecord> = data
        .national_by_industry
        .iter()
        .filter(|r| r.year == year)
        .collect();

    let age_brackets = unique_in_order(filtered.iter().map(|r| r.age_bracket.clone()));

    let rows = filtered
        .into_iter()
        .map(|r| IndustryBarRow {
            industry: r.industry.clone(),
            age_bracket: r.age_bracket.clone(),
            value: metric_value(r, metric),
        })
        .collect();

    IndustryBars {
        year,
        metric,
        axis_max,
        age_brackets,
        rows,
    }
}

fn metric_value(record: &IndustryWageRecord, metric: WageMetric) -> f64 {
    match metric {
        WageMetric::PerCapita => record.wage_per_capita,
        WageMetric::BaseSalary => record.base_salary,
        WageMetric::Bonus => record.bonus,
    }
}

/// Min-max scale into [0, 1]. A constant column (max == min) maps every
/// value to 0.0 instead of propagating NaN.
pub(crate) fn min_max_normalize(values: &[f64]) -> Vec<f64> {
    let Some(min) = values.iter().copied().reduce(f64::min) else {
        return Vec::new();
    };
    let max = values.iter().copied().fold(min, f64::max);

    if max == min {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| (v - min) / (max - min)).collect()
}

/// First occurrence order, duplicates dropped.
fn unique_in_order<T: PartialEq>(items: impl Iterator<Item = T>) -> Vec<T> {
    let mut out = Vec::new();
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::{
        NationalWageRecord, PrefectureLocation, PrefectureWageRecord, WageDatasets,
    };

    fn national(year: i32, age: &str, wage: f64, base: f64, bonus: f64) -> NationalWageRecord {
        NationalWageRecord {
            year,
            age_bracket: age.to_string(),
            wage_per_capita: wage,
            base_salary: base,
            bonus,
        }
    }

    fn industry(year: i32, age: &str, name: &str, wage: f64, base: f64, bonus: f64) -> IndustryWageRecord {
        IndustryWageRecord {
            year,
            age_bracket: age.to_string(),
            industry: name.to_string(),
            wage_per_capita: wage,
            base_salary: base,
            bonus,
        }
    }

    fn prefecture(year: i32, name: &str, age: &str, wage: f64) -> PrefectureWageRecord {
        PrefectureWageRecord {
            year,
            prefecture: name.to_string(),
            age_bracket: age.to_string(),
            wage_per_capita: wage,
        }
    }

    fn location(name: &str, lat: f64, lon: f64) -> PrefectureLocation {
        PrefectureLocation {
            prefecture: name.to_string(),
            lat,
            lon,
        }
    }

    fn fixture() -> WageDatasets {
        WageDatasets {
            national_by_age: vec![
                national(2018, "年齢計", 400.0, 290.0, 75.0),
                national(2018, "20〜24歳", 250.0, 225.0, 25.0),
                national(2018, "25〜29歳", 310.0, 260.0, 45.0),
                national(2019, "年齢計", 410.0, 295.0, 78.0),
                national(2019, "20〜24歳", 255.0, 228.0, 27.0),
                national(2019, "25〜29歳", 315.0, 262.0, 47.0),
                national(2020, "年齢計", 405.0, 293.0, 76.0),
            ],
            national_by_industry: vec![
                industry(2018, "年齢計", "製造業", 430.0, 300.0, 90.0),
                industry(2018, "年齢計", "建設業", 410.0, 310.0, 70.0),
                industry(2019, "年齢計", "製造業", 450.0, 305.0, 95.0),
                industry(2019, "年齢計", "建設業", 420.0, 315.0, 72.0),
                industry(2019, "20〜24歳", "製造業", 260.0, 230.0, 28.0),
            ],
            prefecture_by_age: vec![
                prefecture(2018, "東京都", "年齢計", 560.0),
                prefecture(2018, "大阪府", "年齢計", 520.0),
                prefecture(2019, "東京都", "年齢計", 570.0),
                prefecture(2019, "東京都", "20〜24歳", 290.0),
                prefecture(2019, "大阪府", "年齢計", 600.0),
                prefecture(2019, "北海道", "年齢計", 430.0),
            ],
            locations: vec![
                location("東京都", 35.689185, 139.691648),
                location("大阪府", 34.686492, 135.518992),
                // 北海道 deliberately absent from the lookup
            ],
        }
    }

    #[test]
    fn geo_snapshot_drops_rows_without_coordinates_and_never_duplicates() {
        let data = fixture();
        let snapshot = geo_snapshot(&data, 2019);

        let names: Vec<&str> = snapshot.rows.iter().map(|r| r.prefecture.as_str()).collect();
        assert_eq!(names, vec!["東京都", "大阪府"]);
        for row in &snapshot.rows {
            assert!(data.locations.iter().any(|l| l.prefecture == row.prefecture));
        }
    }

    #[test]
    fn geo_snapshot_normalization_spans_zero_to_one() {
        let snapshot = geo_snapshot(&fixture(), 2019);
        assert!(snapshot.rows.len() > 1);

        for row in &snapshot.rows {
            assert!((0.0..=1.0).contains(&row.relative_wage));
        }
        let ones = snapshot.rows.iter().filter(|r| r.relative_wage == 1.0).count();
        let zeros = snapshot.rows.iter().filter(|r| r.relative_wage == 0.0).count();
        assert_eq!(ones, 1);
        assert_eq!(zeros, 1);
    }

    #[test]
    fn geo_snapshot_two_prefecture_scenario() {
        // Tokyo 570.0 < Osaka 600.0 in 2019
        let snapshot = geo_snapshot(&fixture(), 2019);
        assert_eq!(snapshot.rows.len(), 2);

        let tokyo = &snapshot.rows[0];
        assert_eq!(tokyo.prefecture, "東京都");
        assert!((tokyo.lat - 35.689185).abs() < 1e-9);
        assert!((tokyo.lon - 139.691648).abs() < 1e-9);
        assert_eq!(tokyo.relative_wage, 0.0);

        let osaka = &snapshot.rows[1];
        assert_eq!(osaka.prefecture, "大阪府");
        assert!((osaka.lat - 34.686492).abs() < 1e-9);
        assert!((osaka.lon - 135.518992).abs() < 1e-9);
        assert_eq!(osaka.relative_wage, 1.0);
    }

    #[test]
    fn geo_snapshot_ignores_non_aggregate_brackets() {
        // The 20〜24歳 Tokyo row for 2019 must not leak into the snapshot
        let snapshot = geo_snapshot(&fixture(), 2019);
        let tokyo_rows = snapshot.rows.iter().filter(|r| r.prefecture == "東京都").count();
        assert_eq!(tokyo_rows, 1);
        assert_eq!(snapshot.rows[0].wage, 570.0);
    }

    #[test]
    fn geo_snapshot_unknown_year_is_empty_not_error() {
        let snapshot = geo_snapshot(&fixture(), 1999);
        assert!(snapshot.rows.is_empty());
    }

    #[test]
    fn trend_series_keeps_year_intersection_only() {
        // National has {2018, 2019, 2020}; Osaka has {2018, 2019}
        let series = trend_series(&fixture(), "大阪府");
        let years: Vec<i32> = series.points.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2018, 2019]);

        assert_eq!(series.points[0].national, 400.0);
        assert_eq!(series.points[0].prefecture, 520.0);
        assert_eq!(series.points[1].national, 410.0);
        assert_eq!(series.points[1].prefecture, 600.0);
    }

    #[test]
    fn trend_series_unknown_prefecture_is_empty() {
        let series = trend_series(&fixture(), "沖縄県");
        assert!(series.points.is_empty());
    }

    #[test]
    fn age_bubble_series_excludes_aggregate_bracket() {
        let series = age_bubble_series(&fixture());
        assert!(series.rows.iter().all(|r| r.age_bracket != "年齢計"));
        assert_eq!(series.rows.len(), 4);
        assert_eq!(series.years, vec![2018, 2019]);
    }

    #[test]
    fn industry_bars_axis_max_is_year_independent() {
        let data = fixture();
        for metric in WageMetric::ALL {
            let a = industry_bars(&data, 2018, metric);
            let b = industry_bars(&data, 2019, metric);
            let c = industry_bars(&data, 1999, metric);
            assert_eq!(a.axis_max, b.axis_max);
            assert_eq!(b.axis_max, c.axis_max);
        }
        // Global per-capita maximum is 450.0, plus the fixed margin
        assert_eq!(industry_bars(&data, 2018, WageMetric::PerCapita).axis_max, 500.0);
    }

    #[test]
    fn industry_bars_filters_to_year_and_lists_frames() {
        let bars = industry_bars(&fixture(), 2019, WageMetric::Bonus);
        assert_eq!(bars.rows.len(), 3);
        assert!(bars.rows.iter().all(|r| [95.0, 72.0, 28.0].contains(&r.value)));
        assert_eq!(bars.age_brackets, vec!["年齢計", "20〜24歳"]);
    }

    #[test]
    fn transforms_are_idempotent() {
        let data = fixture();
        let geo = |d: &WageDatasets| serde_json::to_string(&geo_snapshot(d, 2019)).unwrap();
        let trend = |d: &WageDatasets| serde_json::to_string(&trend_series(d, "東京都")).unwrap();
        let bubbles = |d: &WageDatasets| serde_json::to_string(&age_bubble_series(d)).unwrap();
        let bars =
            |d: &WageDatasets| serde_json::to_string(&industry_bars(d, 2019, WageMetric::PerCapita)).unwrap();

        assert_eq!(geo(&data), geo(&data));
        assert_eq!(trend(&data), trend(&data));
        assert_eq!(bubbles(&data), bubbles(&data));
        assert_eq!(bars(&data), bars(&data));
    }

    #[test]
    fn meta_lists_are_unique_and_source_ordered() {
        let meta = meta(&fixture());
        assert_eq!(meta.prefectures, vec!["東京都", "大阪府", "北海道"]);
        assert_eq!(meta.years, vec![2018, 2019]);
        assert_eq!(meta.metrics.len(), 3);
        assert_eq!(meta.metrics[0].id, "per_capita");
    }

    #[test]
    fn normalize_constant_column_maps_to_zero() {
        assert_eq!(min_max_normalize(&[7.0, 7.0, 7.0]), vec![0.0, 0.0, 0.0]);
        assert_eq!(min_max_normalize(&[42.0]), vec![0.0]);
        assert!(min_max_normalize(&[]).is_empty());
    }

    #[test]
    fn normalize_orders_values_proportionally() {
        let scaled = min_max_normalize(&[100.0, 150.0, 200.0]);
        assert_eq!(scaled, vec![0.0, 0.5, 1.0]);
    }
}
