use std::path::Path;

use anyhow::Context;
use log::info;

use hydroglyph::{data, report};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let table = data::load_table(Path::new(report::INPUT_PATH))
        .context("loading the climate dataset")?;
    info!(
        "loaded {} observation rows spanning {} year columns",
        table.len(),
        table.years.len()
    );

    report::write_report(&table, Path::new(report::OUTPUT_PATH))
        .context("rendering the infographic")?;
    info!("wrote {}", report::OUTPUT_PATH);
    Ok(())
}
