/// Examples of good plotting practice, with the preferences set once
/// through the runtime configuration (`rcParams`):
/// 1. single axes with error bars;
/// 2. two stacked axes, the second one with left and right y-axes;
/// 3. several lines whose colors come from a colormap.

use std::{error::Error, path::Path};
use perfect_plots::gallery::{self, rc_styled};

fn main() -> Result<(), Box<dyn Error>> {
    gallery::init_logging();
    let dir = Path::new(gallery::OUTPUT_DIR);
    gallery::prepare_dir(dir)?;
    rc_styled::render(dir)?;
    Ok(())
}
