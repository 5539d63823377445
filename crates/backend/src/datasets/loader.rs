//! Startup loader for the four source tables.
//!
//! All four files are read unconditionally; any failure (missing file,
//! undecodable bytes, missing column, unparsable cell) is fatal for
//! startup. There is no retry and no partial load.

use std::path::{Path, PathBuf};

use encoding_rs::SHIFT_JIS;

use super::schema::*;
use crate::shared::config::WageEncoding;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not valid {encoding} text")]
    Encoding { path: PathBuf, encoding: &'static str },
    #[error("{path}: malformed CSV: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("{path}: missing expected column {column:?}")]
    MissingColumn { path: PathBuf, column: String },
    #[error("{path} record {record}: cannot parse {column:?} value {value:?} as a number")]
    BadNumber {
        path: PathBuf,
        record: u64,
        column: String,
        value: String,
    },
}

/// National wage by age bracket, all industries. Key: (year, age_bracket).
#[derive(Debug, Clone, PartialEq)]
pub struct NationalWageRecord {
    pub year: i32,
    pub age_bracket: String,
    pub wage_per_capita: f64,
    pub base_salary: f64,
    pub bonus: f64,
}

/// National wage by age bracket and industry category.
/// Key: (year, age_bracket, industry).
#[derive(Debug, Clone, PartialEq)]
pub struct IndustryWageRecord {
    pub year: i32,
    pub age_bracket: String,
    pub industry: String,
    pub wage_per_capita: f64,
    pub base_salary: f64,
    pub bonus: f64,
}

/// Per-prefecture wage by age bracket. Key: (year, prefecture, age_bracket).
#[derive(Debug, Clone, PartialEq)]
pub struct PrefectureWageRecord {
    pub year: i32,
    pub prefecture: String,
    pub age_bracket: String,
    pub wage_per_capita: f64,
}

/// Prefecture capital coordinates. Static reference data.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefectureLocation {
    pub prefecture: String,
    pub lat: f64,
    pub lon: f64,
}

/// The four immutable in-memory tables, in source row order.
#[derive(Debug)]
pub struct WageDatasets {
    pub national_by_age: Vec<NationalWageRecord>,
    pub national_by_industry: Vec<IndustryWageRecord>,
    pub prefecture_by_age: Vec<PrefectureWageRecord>,
    pub locations: Vec<PrefectureLocation>,
}

impl WageDatasets {
    /// Load all four tables from `dir`. Wage files use `wage_encoding`;
    /// the coordinate lookup is always UTF-8.
    pub fn load(dir: &Path, wage_encoding: WageEncoding) -> Result<Self, DatasetError> {
        let national_path = dir.join(FILE_NATIONAL_BY_AGE);
        let industry_path = dir.join(FILE_NATIONAL_BY_INDUSTRY);
        let prefecture_path = dir.join(FILE_PREFECTURE_BY_AGE);
        let locations_path = dir.join(FILE_PREF_LAT_LON);

        let datasets = Self {
            national_by_age: parse_national_by_age(
                &read_decoded(&national_path, wage_encoding)?,
                &national_path,
            )?,
            national_by_industry: parse_national_by_industry(
                &read_decoded(&industry_path, wage_encoding)?,
                &industry_path,
            )?,
            prefecture_by_age: parse_prefecture_by_age(
                &read_decoded(&prefecture_path, wage_encoding)?,
                &prefecture_path,
            )?,
            locations: parse_locations(
                &read_decoded(&locations_path, WageEncoding::Utf8)?,
                &locations_path,
            )?,
        };

        tracing::info!(
            "Loaded wage datasets: {} national-by-age rows, {} industry rows, \
             {} prefecture rows, {} locations",
            datasets.national_by_age.len(),
            datasets.national_by_industry.len(),
            datasets.prefecture_by_age.len(),
            datasets.locations.len()
        );

        Ok(datasets)
    }
}

/// Read a file and decode it with the declared encoding.
/// Fails if any byte sequence is invalid for that encoding.
fn read_decoded(path: &Path, encoding: WageEncoding) -> Result<String, DatasetError> {
    let bytes = std::fs::read(path).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match encoding {
        WageEncoding::ShiftJis => {
            let (text, _, had_errors) = SHIFT_JIS.decode(&bytes);
            if had_errors {
                return Err(DatasetError::Encoding {
                    path: path.to_path_buf(),
                    encoding: "Shift_JIS",
                });
            }
            Ok(text.into_owned())
        }
        WageEncoding::Utf8 => match String::from_utf8(bytes) {
            Ok(text) => Ok(text.trim_start_matches('\u{FEFF}').to_string()),
            Err(_) => Err(DatasetError::Encoding {
                path: path.to_path_buf(),
                encoding: "UTF-8",
            }),
        },
    }
}

/// Position of a required column, by verbatim header name.
fn find_column(
    headers: &csv::StringRecord,
    column: &str,
    path: &Path,
) -> Result<usize, DatasetError> {
    headers
        .iter()
        .position(|h| h == column)
        .ok_or_else(|| DatasetError::MissingColumn {
            path: path.to_path_buf(),
            column: column.to_string(),
        })
}

struct RowReader<'a> {
    record: &'a csv::StringRecord,
    index: u64,
    path: &'a Path,
}

impl RowReader<'_> {
    fn text(&self, position: usize) -> String {
        self.record.get(position).unwrap_or_default().trim().to_string()
    }

    fn number(&self, position: usize, column: &str) -> Result<f64, DatasetError> {
        let raw = self.record.get(position).unwrap_or_default().trim();
        raw.parse::<f64>().map_err(|_| DatasetError::BadNumber {
            path: self.path.to_path_buf(),
            record: self.index,
            column: column.to_string(),
            value: raw.to_string(),
        })
    }

    fn year(&self, position: usize, column: &str) -> Result<i32, DatasetError> {
        let raw = self.record.get(position).unwrap_or_default().trim();
        raw.parse::<i32>().map_err(|_| DatasetError::BadNumber {
            path: self.path.to_path_buf(),
            record: self.index,
            column: column.to_string(),
            value: raw.to_string(),
        })
    }
}

fn for_each_record<F>(text: &str, path: &Path, mut handle: F) -> Result<(), DatasetError>
where
    F: FnMut(RowReader<'_>) -> Result<(), DatasetError>,
{
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let mut index = 0u64;
    for result in reader.records() {
        let record = result.map_err(|source| DatasetError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        index += 1;
        handle(RowReader {
            record: &record,
            index,
            path,
        })?;
    }
    Ok(())
}

fn headers_of(text: &str, path: &Path) -> Result<csv::StringRecord, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());
    reader
        .headers()
        .map(|h| h.clone())
        .map_err(|source| DatasetError::Csv {
            path: path.to_path_buf(),
            source,
        })
}

pub(crate) fn parse_national_by_age(
    text: &str,
    path: &Path,
) -> Result<Vec<NationalWageRecord>, DatasetError> {
    let headers = headers_of(text, path)?;
    let year = find_column(&headers, COL_YEAR, path)?;
    let age = find_column(&headers, COL_AGE, path)?;
    let wage = find_column(&headers, COL_WAGE_PER_CAPITA, path)?;
    let base = find_column(&headers, COL_BASE_SALARY, path)?;
    let bonus = find_column(&headers, COL_BONUS, path)?;

    let mut rows = Vec::new();
    for_each_record(text, path, |row| {
        rows.push(NationalWageRecord {
            year: row.year(year, COL_YEAR)?,
            age_bracket: row.text(age),
            wage_per_capita: row.number(wage, COL_WAGE_PER_CAPITA)?,
            base_salary: row.number(base, COL_BASE_SALARY)?,
            bonus: row.number(bonus, COL_BONUS)?,
        });
        Ok(())
    })?;
    Ok(rows)
}

pub(crate) fn parse_national_by_industry(
    text: &str,
    path: &Path,
) -> Result<Vec<IndustryWageRecord>, DatasetError> {
    let headers = headers_of(text, path)?;
    let year = find_column(&headers, COL_YEAR, path)?;
    let age = find_column(&headers, COL_AGE, path)?;
    let industry = find_column(&headers, COL_INDUSTRY, path)?;
    let wage = find_column(&headers, COL_WAGE_PER_CAPITA, path)?;
    let base = find_column(&headers, COL_BASE_SALARY, path)?;
    let bonus = find_column(&headers, COL_BONUS, path)?;

    let mut rows = Vec::new();
    for_each_record(text, path, |row| {
        rows.push(IndustryWageRecord {
            year: row.year(year, COL_YEAR)?,
            age_bracket: row.text(age),
            industry: row.text(industry),
            wage_per_capita: row.number(wage, COL_WAGE_PER_CAPITA)?,
            base_salary: row.number(base, COL_BASE_SALARY)?,
            bonus: row.number(bonus, COL_BONUS)?,
        });
        Ok(())
    })?;
    Ok(rows)
}

pub(crate) fn parse_prefecture_by_age(
    text: &str,
    path: &Path,
) -> Result<Vec<PrefectureWageRecord>, DatasetError> {
    let headers = headers_of(text, path)?;
    let year = find_column(&headers, COL_YEAR, path)?;
    let prefecture = find_column(&headers, COL_PREFECTURE, path)?;
    let age = find_column(&headers, COL_AGE, path)?;
    let wage = find_column(&headers, COL_WAGE_PER_CAPITA, path)?;

    let mut rows = Vec::new();
    for_each_record(text, path, |row| {
        rows.push(PrefectureWageRecord {
            year: row.year(year, COL_YEAR)?,
            prefecture: row.text(prefecture),
            age_bracket: row.text(age),
            wage_per_capita: row.number(wage, COL_WAGE_PER_CAPITA)?,
        });
        Ok(())
    })?;
    Ok(rows)
}

pub(crate) fn parse_locations(
    text: &str,
    path: &Path,
) -> Result<Vec<PrefectureLocation>, DatasetError> {
    let headers = headers_of(text, path)?;
    let prefecture = find_column(&headers, COL_PREF_NAME, path)?;
    let lat = find_column(&headers, COL_LAT, path)?;
    let lon = find_column(&headers, COL_LON, path)?;

    let mut rows = Vec::new();
    for_each_record(text, path, |row| {
        rows.push(PrefectureLocation {
            prefecture: row.text(prefecture),
            lat: row.number(lat, COL_LAT)?,
            lon: row.number(lon, COL_LON)?,
        });
        Ok(())
    })?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path() -> PathBuf {
        PathBuf::from("test.csv")
    }

    #[test]
    fn parses_national_by_age() {
        let text = "集計年,年齢,一人当たり賃金（万円）,所定内給与額（万円）,年間賞与その他特別給与額（万円）\n\
                    2019,年齢計,420.5,300.1,80.2\n\
                    2019,20〜24歳,250.0,220.0,30.0\n";
        let rows = parse_national_by_age(text, &path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].year, 2019);
        assert_eq!(rows[0].age_bracket, "年齢計");
        assert_eq!(rows[1].wage_per_capita, 250.0);
    }

    #[test]
    fn missing_column_is_reported() {
        let text = "集計年,年齢\n2019,年齢計\n";
        let err = parse_national_by_age(text, &path()).unwrap_err();
        match err {
            DatasetError::MissingColumn { column, .. } => {
                assert_eq!(column, COL_WAGE_PER_CAPITA);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_number_carries_record_and_column() {
        let text = "集計年,都道府県名,年齢,一人当たり賃金（万円）\n\
                    2019,東京都,年齢計,n/a\n";
        let err = parse_prefecture_by_age(text, &path()).unwrap_err();
        match err {
            DatasetError::BadNumber {
                record,
                column,
                value,
                ..
            } => {
                assert_eq!(record, 1);
                assert_eq!(column, COL_WAGE_PER_CAPITA);
                assert_eq!(value, "n/a");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parses_locations_utf8() {
        let text = "pref_name,lat,lon\n東京都,35.689185,139.691648\n大阪府,34.686492,135.518992\n";
        let rows = parse_locations(text, &path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].prefecture, "東京都");
        assert!((rows[1].lon - 135.518992).abs() < 1e-9);
    }

    #[test]
    fn shift_jis_decoding_round_trips() {
        let dir = std::env::temp_dir().join("wage-loader-sjis-test");
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("pref.csv");

        let text = "集計年,都道府県名,年齢,一人当たり賃金（万円）\n2019,東京都,年齢計,620.5\n";
        let (encoded, _, _) = SHIFT_JIS.encode(text);
        std::fs::write(&file, &encoded).unwrap();

        let decoded = read_decoded(&file, WageEncoding::ShiftJis).unwrap();
        assert_eq!(decoded, text);

        // The same bytes are not valid UTF-8, so a UTF-8 declaration must fail
        let err = read_decoded(&file, WageEncoding::Utf8).unwrap_err();
        assert!(matches!(err, DatasetError::Encoding { .. }));

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_decoded(Path::new("does-not-exist.csv"), WageEncoding::Utf8).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }
}
