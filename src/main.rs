//! Render the whole gallery into `plots/`.

use std::{error::Error, path::Path};
use tracing::info;
use perfect_plots::gallery;

fn main() -> Result<(), Box<dyn Error>> {
    gallery::init_logging();
    let dir = Path::new(gallery::OUTPUT_DIR);
    let files = gallery::render_all(dir)?;
    info!(count = files.len(), dir = %dir.display(), "gallery rendered");
    Ok(())
}
