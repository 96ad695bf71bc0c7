//! Regions command implementation

use crate::config::Config;
use crate::data::{SeriesSource, SeriesStore};
use clap::Args;

#[derive(Args, Debug)]
pub struct RegionsArgs {
    /// Print at most this many regions
    #[arg(short, long)]
    pub limit: Option<usize>,
}

impl RegionsArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let store = SeriesStore::load(&config.data.path)?;
        let regions = store.available_regions()?;

        println!("{} regions in {}", regions.len(), config.data.path.display());
        for region in regions.iter().take(self.limit.unwrap_or(usize::MAX)) {
            println!("  {region}");
        }
        Ok(())
    }
}
