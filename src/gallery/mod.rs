//! Publication-style figures.
//!
//! The same set of figures is drawn in two ways:
//! - [`explicit`] passes the fonts, sizes and colors to every call;
//! - [`rc_styled`] sets them once through the runtime configuration
//!   and then relies on the defaults.
//!
//! Figures are written as `PerfectPlot_matplotlib_<n>.png`.

use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};
use crate::{rc, Error, Figure, Rc};

pub mod explicit;
pub mod rc_styled;

/// Directory, relative to the working directory, receiving the figures.
pub const OUTPUT_DIR: &str = "plots";

/// Resolution of the saved images.
pub const DPI: f64 = 200.;

pub fn file_name(n: usize) -> String {
    format!("PerfectPlot_matplotlib_{}.png", n)
}

/// Create `dir` (and its parents) if it does not exist.
pub fn prepare_dir(dir: &Path) -> Result<(), Error> {
    fs::create_dir_all(dir)?;
    Ok(())
}

/// Default directory of the interactive "save" dialog.
pub fn save_dialog_dir(dir: &Path) -> Rc {
    rc("savefig").set("directory", dir.display().to_string())
}

/// Render the figures of both styles into `dir`.
pub fn render_all(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    prepare_dir(dir)?;
    let mut files = explicit::render(dir)?;
    files.extend(rc_styled::render(dir)?);
    Ok(files)
}

/// Save `fig` as the figure number `n` of the gallery and release it,
/// whether the saving succeeded or not.
fn finish(fig: Figure, dir: &Path, n: usize) -> Result<PathBuf, Error> {
    let path = dir.join(file_name(n));
    let saved = fig.save().dpi(DPI).to_file(&path);
    fig.close()?;
    saved?;
    info!(path = %path.display(), "figure saved");
    Ok(path)
}

/// Initialize logging with a default filter.
///
/// Use `RUST_LOG` environment variable to override the default `info`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}


#[cfg(test)]
mod tests {
    use super::*;
    use pyo3::prelude::*;
    use crate::PYPLOT;

    #[test]
    fn file_names() {
        assert_eq!(file_name(1), "PerfectPlot_matplotlib_1.png");
        assert_eq!(file_name(9), "PerfectPlot_matplotlib_9.png");
    }

    #[test]
    fn prepare_nested_dir() -> Result<(), Error> {
        let dir = Path::new("target/gallery-test/a/b");
        prepare_dir(dir)?;
        prepare_dir(dir)?;
        assert!(dir.is_dir());
        Ok(())
    }

    #[test]
    fn save_dialog_dir_param() {
        let r = save_dialog_dir(Path::new("plots"));
        let params: Vec<_> = r.params().collect();
        assert_eq!(params, [("savefig.directory", &crate::Value::Str("plots".into()))]);
    }

    #[test]
    fn failed_save_closes_the_figure() -> Result<(), Error> {
        let r = crate::use_backend("agg").and_then(|()| {
            let pyplot = pymod!(PYPLOT)?;
            let fig = crate::figure()?;
            let num: i64 = Python::with_gil(|py| -> PyResult<i64> {
                fig.fig.bind(py).getattr("number")?.extract()
            })?;
            let dir = Path::new("target/gallery-test/missing/dir");
            let r = finish(fig, dir, 1);
            assert!(matches!(r, Err(Error::FileNotFoundError)), "{:?}", r);
            let open: bool = Python::with_gil(|py| -> PyResult<bool> {
                pyplot.bind(py).call_method1("fignum_exists", (num,))?
                    .extract()
            })?;
            assert!(!open, "figure {} still open", num);
            Ok(())
        });
        match r {
            Err(Error::NoMatplotlib) => Ok(()),
            r => r,
        }
    }
}
