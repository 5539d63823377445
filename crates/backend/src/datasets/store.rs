use once_cell::sync::OnceCell;

use super::loader::WageDatasets;

static DATASETS: OnceCell<WageDatasets> = OnceCell::new();

/// Install the tables loaded at startup. May only happen once.
pub fn initialize_datasets(datasets: WageDatasets) -> anyhow::Result<()> {
    DATASETS
        .set(datasets)
        .map_err(|_| anyhow::anyhow!("wage datasets already initialized"))
}

pub fn get_datasets() -> &'static WageDatasets {
    DATASETS
        .get()
        .expect("Wage datasets have not been initialized")
}
