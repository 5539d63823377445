pub mod loader;
pub mod schema;
pub mod store;

pub use loader::{
    DatasetError, IndustryWageRecord, NationalWageRecord, PrefectureLocation,
    PrefectureWageRecord, WageDatasets,
};
