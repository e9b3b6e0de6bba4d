use std::{fs, path::Path, sync::Mutex};
use pyo3::prelude::*;
use perfect_plots::{self as plt, gallery, Error};

/// The runtime configuration is global: tests rendering figures take
/// turns.
static PYPLOT: Mutex<()> = Mutex::new(());

fn skip_missing(r: Result<(), Error>) -> Result<(), Error> {
    match r {
        Err(Error::NoMatplotlib) => Ok(()),
        r => r,
    }
}

#[test]
fn render_the_gallery() -> Result<(), Error> {
    let _lock = PYPLOT.lock().unwrap_or_else(|e| e.into_inner());
    let dir = Path::new("target/gallery");
    let files = match plt::use_backend("agg")
        .and_then(|_| gallery::render_all(dir)) {
        Err(Error::NoMatplotlib) => return Ok(()),
        r => r?,
    };
    assert_eq!(files.len(), 9);
    for (n, f) in files.iter().enumerate() {
        assert_eq!(f, &dir.join(gallery::file_name(n + 1)));
        let len = f.metadata()?.len();
        assert!(len > 1000, "{} is only {} bytes", f.display(), len);
    }
    Ok(())
}

#[test]
fn same_inputs_same_image() -> Result<(), Error> {
    let _lock = PYPLOT.lock().unwrap_or_else(|e| e.into_inner());
    skip_missing(plt::use_backend("agg").and_then(|()| {
        let m = gallery::explicit::mesh();
        let mut images = vec![];
        for run in ["a", "b"] {
            let dir = Path::new("target/gallery-repeat").join(run);
            gallery::prepare_dir(&dir)?;
            let f = gallery::explicit::color_mesh(&dir, &m)?;
            images.push(fs::read(f)?);
        }
        assert!(!images[0].is_empty());
        assert!(images[0] == images[1], "the two renderings differ");
        Ok(())
    }))
}

#[test]
fn missing_output_dir() {
    let _lock = PYPLOT.lock().unwrap_or_else(|e| e.into_inner());
    let dir = Path::new("target/gallery-missing/none");
    let _ = fs::remove_dir_all(dir);
    let r = plt::use_backend("agg")
        .and_then(|_| gallery::explicit::helix(dir));
    assert!(matches!(r, Err(Error::FileNotFoundError | Error::NoMatplotlib)),
            "{:?}", r);
}

#[test]
fn failed_styled_render_restores_defaults() -> Result<(), Error> {
    let _lock = PYPLOT.lock().unwrap_or_else(|e| e.into_inner());
    let dir = Path::new("target/gallery-missing/styled");
    let _ = fs::remove_dir_all(dir);
    skip_missing(plt::use_backend("agg").and_then(|()| {
        let r = gallery::rc_styled::render(dir);
        assert!(matches!(r, Err(Error::FileNotFoundError)), "{:?}", r);
        let capsize: f64 = Python::with_gil(|py| -> PyResult<f64> {
            py.import_bound("matplotlib")?.getattr("rcParams")?
                .get_item("errorbar.capsize")?.extract()
        })?;
        assert_eq!(capsize, 0.);
        Ok(())
    }))
}
