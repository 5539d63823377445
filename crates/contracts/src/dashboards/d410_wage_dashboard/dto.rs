use serde::{Deserialize, Serialize};

/// Selectable wage metric columns of the industry table.
///
/// The serialized id is what travels in query strings; `label()` is the
/// verbatim source column header used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WageMetric {
    /// 一人当たり賃金（万円）
    PerCapita,
    /// 所定内給与額（万円）
    BaseSalary,
    /// 年間賞与その他特別給与額（万円）
    Bonus,
}

impl WageMetric {
    /// All metrics in selector order; the first one is the default.
    pub const ALL: [WageMetric; 3] =
        [WageMetric::PerCapita, WageMetric::BaseSalary, WageMetric::Bonus];

    pub fn id(&self) -> &'static str {
        match self {
            WageMetric::PerCapita => "per_capita",
            WageMetric::BaseSalary => "base_salary",
            WageMetric::Bonus => "bonus",
        }
    }

    /// Display label, identical to the source CSV column header.
    pub fn label(&self) -> &'static str {
        match self {
            WageMetric::PerCapita => "一人当たり賃金（万円）",
            WageMetric::BaseSalary => "所定内給与額（万円）",
            WageMetric::Bonus => "年間賞与その他特別給与額（万円）",
        }
    }

    pub fn parse_id(id: &str) -> Option<WageMetric> {
        WageMetric::ALL.into_iter().find(|m| m.id() == id)
    }
}

/// One wage metric entry of the selector catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WageMetricMeta {
    /// Stable id used in query strings (e.g. "per_capita")
    pub id: String,
    /// Display label (source column header)
    pub label: String,
}

impl From<WageMetric> for WageMetricMeta {
    fn from(metric: WageMetric) -> Self {
        Self {
            id: metric.id().to_string(),
            label: metric.label().to_string(),
        }
    }
}

/// Selector catalog for the dashboard controls.
///
/// The frontend defaults every selector to the first entry of its list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardMeta {
    /// Unique prefecture names in source order
    pub prefectures: Vec<String>,
    /// Unique years of the industry table in source order
    pub years: Vec<i32>,
    /// The three fixed wage metrics
    pub metrics: Vec<WageMetricMeta>,
}

/// Request for the geo heatmap snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoSnapshotRequest {
    pub year: i32,
}

/// One prefecture of the geo heatmap: wage joined with capital coordinates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoRow {
    pub prefecture: String,
    pub lat: f64,
    pub lon: f64,
    /// Per-capita wage, aggregate age bracket (万円)
    pub wage: f64,
    /// Min-max scaled wage over the rows of this snapshot, in [0, 1]
    pub relative_wage: f64,
}

/// Geo heatmap data for one year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoSnapshot {
    pub year: i32,
    pub rows: Vec<GeoRow>,
}

/// Request for the national-vs-prefecture trend series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendSeriesRequest {
    pub prefecture: String,
}

/// One year of the trend line chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendPoint {
    pub year: i32,
    /// National average per-capita wage (万円)
    pub national: f64,
    /// Selected prefecture's per-capita wage (万円)
    pub prefecture: f64,
}

/// Two-series trend data; years present in both source tables only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendSeries {
    pub prefecture: String,
    pub points: Vec<TrendPoint>,
}

/// One bubble of the animated age-bracket chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BubbleRow {
    pub year: i32,
    pub age_bracket: String,
    pub wage_per_capita: f64,
    pub base_salary: f64,
    pub bonus: f64,
}

/// Animated bubble chart data, frame-sequenced by year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgeBubbleSeries {
    /// Distinct years in ascending order (animation frames)
    pub years: Vec<i32>,
    /// Individual age brackets only (aggregate excluded)
    pub rows: Vec<BubbleRow>,
}

/// Request for the animated industry bar chart
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryBarsRequest {
    pub year: i32,
    pub metric: WageMetric,
}

/// One bar: a metric value for an industry category and age bracket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryBarRow {
    pub industry: String,
    pub age_bracket: String,
    pub value: f64,
}

/// Animated horizontal bar chart data for one year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryBars {
    pub year: i32,
    pub metric: WageMetric,
    /// Fixed x-axis maximum: global metric maximum over all years plus a
    /// margin, so the axis does not jump between year selections
    pub axis_max: f64,
    /// Distinct age brackets in source order (animation frames)
    pub age_brackets: Vec<String>,
    pub rows: Vec<IndustryBarRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_ids_round_trip() {
        for metric in WageMetric::ALL {
            assert_eq!(WageMetric::parse_id(metric.id()), Some(metric));
        }
        assert_eq!(WageMetric::parse_id("weekly_overtime"), None);
    }

    #[test]
    fn metric_serializes_as_snake_case_id() {
        let json = serde_json::to_string(&WageMetric::BaseSalary).unwrap();
        assert_eq!(json, "\"base_salary\"");
        let back: WageMetric = serde_json::from_str(&json).unwrap();
        assert_eq!(back, WageMetric::BaseSalary);
    }
}
