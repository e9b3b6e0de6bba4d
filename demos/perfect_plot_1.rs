/// Examples of good plotting practice, with the preferences set
/// inside the calls:
/// 1. single axes with error bars;
/// 2. two stacked axes, the second one with left and right y-axes;
/// 3. several lines whose colors come from a colormap;
/// 4. 3D curve;
/// 5. 2D surface color plot;
/// 6. inset axes.

use std::{error::Error, path::Path};
use perfect_plots::gallery::{self, explicit};

fn main() -> Result<(), Box<dyn Error>> {
    gallery::init_logging();
    let dir = Path::new(gallery::OUTPUT_DIR);
    gallery::prepare_dir(dir)?;
    explicit::render(dir)?;
    Ok(())
}
