//! Column contract of the source CSV files.
//!
//! Headers are display-language names and must match verbatim; the loader
//! validates each file against its expected header set before parsing.

/// 集計年
pub const COL_YEAR: &str = "集計年";
/// 年齢 (age bracket)
pub const COL_AGE: &str = "年齢";
/// 都道府県名
pub const COL_PREFECTURE: &str = "都道府県名";
/// 産業大分類名 (industry category)
pub const COL_INDUSTRY: &str = "産業大分類名";
/// 一人当たり賃金（万円）
pub const COL_WAGE_PER_CAPITA: &str = "一人当たり賃金（万円）";
/// 所定内給与額（万円）
pub const COL_BASE_SALARY: &str = "所定内給与額（万円）";
/// 年間賞与その他特別給与額（万円）
pub const COL_BONUS: &str = "年間賞与その他特別給与額（万円）";

/// Coordinate lookup headers (ASCII, UTF-8 file)
pub const COL_PREF_NAME: &str = "pref_name";
pub const COL_LAT: &str = "lat";
pub const COL_LON: &str = "lon";

/// The "all ages combined" bracket used by the geo and trend views
pub const AGGREGATE_AGE_BRACKET: &str = "年齢計";

/// File names expected inside the configured data directory
pub const FILE_NATIONAL_BY_AGE: &str = "national_wage_by_age.csv";
pub const FILE_NATIONAL_BY_INDUSTRY: &str = "national_wage_by_industry.csv";
pub const FILE_PREFECTURE_BY_AGE: &str = "prefecture_wage_by_age.csv";
pub const FILE_PREF_LAT_LON: &str = "pref_lat_lon.csv";
