//! [Rust][] bindings to the [Matplotlib][] Python visualization
//! library, tuned for publication-style figures, together with a
//! gallery of such figures.
//!
//! Usage
//! -----
//!
//! These bindings provide an interface close to [Matplotlib][]'s explicit
//! one while keeping a Rust flavor: options are collected by builders
//! and every call into Python returns a `Result`.
//!
//! ```no_run
//! use perfect_plots as plt;
//! use plt::Font;
//! let (fig, [[mut ax]]) = plt::subplots()?;
//! ax.xy(&[1., 2., 3., 4.], &[1., 4., 2., 3.]).fmt("g-o").label("data").plot()?;
//! ax.set_xlabel_with("x", &Font::new().size(20.).bold())?
//!   .legend()?;
//! fig.save().dpi(200.).to_file("target/README.png")?;
//! # Ok::<(), plt::Error>(())
//! ```
//!
//! [Rust]: https://www.rust-lang.org/
//! [Matplotlib]: https://matplotlib.org/

use std::{
    array,
    path::Path,
};
use lazy_static::lazy_static;
use pyo3::{
    prelude::*,
    exceptions::{PyFileNotFoundError, PyPermissionError},
};
use ndarray::{ArrayBase, Ix2};
use numpy::{PyArray1, ToPyArray};
use tracing::debug;

/// Call the method `$m` of the Python object `$obj`, converting the
/// Python exceptions to [`Error`].
macro_rules! meth {
    ($obj: expr, $m: ident, $py: ident -> $args: expr, $kwargs: expr) => {
        Python::with_gil(|$py| -> Result<PyObject, Error> {
            let kwargs = $kwargs.to_dict($py)?;
            let r = $obj.bind($py)
                .call_method(stringify!($m), $args, Some(&kwargs))?;
            Ok(r.unbind())
        })
    };
    ($obj: expr, $m: ident, $py: ident -> $args: expr) => {
        Python::with_gil(|$py| -> Result<PyObject, Error> {
            let r = $obj.bind($py).call_method1(stringify!($m), $args)?;
            Ok(r.unbind())
        })
    };
    ($obj: expr, $m: ident, $args: expr, $kwargs: expr) => {
        meth!($obj, $m, py -> $args, $kwargs)
    };
    ($obj: expr, $m: ident, $args: expr) => {
        meth!($obj, $m, py -> $args)
    };
}

/// Import and return a handle to the module `$m`.
macro_rules! pyimport { ($m: literal) => {
    Python::with_gil(|py|
        PyModule::import_bound(py, $m).map(Bound::unbind))
}}

/// Return a handle to the module `$m`.
/// ⚠ This may try to lock Python's GIL.  Make sure it is executed
/// outside a call to `Python::with_gil`.
macro_rules! pymod { ($m: ident) => {
    $m.as_ref().map_err(|_| Error::NoMatplotlib)
}}

mod options;
mod axes;
mod colors;
mod rc;
pub mod data;
pub mod gallery;

pub use options::{
    Adjust, BBox, Color, Font, Kwargs, Legend, Rgba, Slant, TickFormat,
    Value, Weight,
};
pub use axes::{Axes, Axes3D, ErrorBar, PColorMesh, RefLine, Text, XY, XYZ};
pub use colors::{
    colormap, Colorbar, Colormap, Mappable, QuadMesh, ScalarMappable,
};
pub use rc::{rc, rcdefaults, Rc};

/// Possible errors of matplotlib functions.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The Python library "matplotlib" was not found.
    #[error("The matplotlib library has not been found.\n\
             Please install it.  See https://matplotlib.org/\n\
             If you use Anaconda, see https://github.com/PyO3/pyo3/issues/1554")]
    NoMatplotlib,
    /// The path contains an elelement that is not a directory or does
    /// not exist.
    #[error("A path contains an element that is not a directory or does \
             not exist")]
    FileNotFoundError,
    /// Permission denied to access or create the filesystem path.
    #[error("Permission denied to access or create the filesystem path")]
    PermissionError,
    /// No colormap is registered under this name.
    #[error("Unknown colormap {0:?}")]
    UnknownColormap(String),
    /// Matplotlib rejected a runtime configuration parameter.
    #[error("Invalid rc parameter {key:?}: {source}")]
    RcParam { key: String, source: PyErr },
    /// Other Python errors.
    #[error("Python error: {0}")]
    Python(#[from] PyErr),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

lazy_static! {
    // Import matplotlib modules.
    static ref MATPLOTLIB: Result<Py<PyModule>, PyErr> = {
        pyimport!("matplotlib")
    };
    static ref FIGURE: Result<Py<PyModule>, PyErr> = {
        pyimport!("matplotlib.figure")
    };
    static ref PYPLOT: Result<Py<PyModule>, PyErr> = {
        pyimport!("matplotlib.pyplot")
    };
    static ref CM: Result<Py<PyModule>, PyErr> = {
        pyimport!("matplotlib.cm")
    };
}

/// Trait expressing that `Self` can be converted to a 1D numpy.ndarray.
pub trait Data {
    fn to_numpy(&self, py: Python) -> PyObject;
}

impl<T> Data for T where T: AsRef<[f64]> + ?Sized {
    fn to_numpy(&self, py: Python) -> PyObject {
        PyArray1::from_slice_bound(py, self.as_ref()).into_any().unbind()
    }
}

/// Trait expressing that `Self` can be converted to a 2D
/// numpy.ndarray (e.g. the coordinates and values of a mesh).
pub trait Data2 {
    fn to_numpy2(&self, py: Python) -> PyObject;
}

impl<S> Data2 for ArrayBase<S, Ix2>
where S: ndarray::Data<Elem = f64> {
    fn to_numpy2(&self, py: Python) -> PyObject {
        self.to_pyarray_bound(py).into_any().unbind()
    }
}

/// The top level container for all the plot elements.
#[derive(Debug)]
pub struct Figure {
    fig: PyObject, // instance of matplotlib.figure.Figure
}

impl Figure {
    /// Return a new `Figure`, not managed by pyplot.
    pub fn new() -> Result<Figure, Error> {
        let figure = pymod!(FIGURE)?;
        Python::with_gil(|py| {
            let fig = figure.bind(py).getattr("Figure")?.call0()?;
            Ok(Self { fig: fig.unbind() })
        })
    }

    /// Add a grid of `R` × `C` axes to the figure.  The axes are
    /// indexed `[row][column]` whatever the shape of the grid.
    ///
    /// Return an error if Matplotlib is not present on the system.
    pub fn subplots<const R: usize, const C: usize>(
        &self) -> Result<[[Axes; C]; R], Error> {
        let kwargs = {
            let mut kw = Kwargs::new();
            kw.set("squeeze", false);
            kw
        };
        let axs = meth!(self.fig, subplots, (R, C), kwargs)?;
        let flat = Python::with_gil(|py| {
            let axs = axs.bind(py);
            (0 .. R * C).map(|i| -> Result<Axes, Error> {
                let ax = axs.get_item((i / C, i % C))?;
                Ok(Axes::from(ax.unbind()))
            }).collect::<Result<Vec<_>, Error>>()
        })?;
        Ok(array::from_fn(|r| array::from_fn(|c| flat[r * C + c].clone())))
    }

    /// Add axes with a 3D projection filling the figure.
    pub fn add_subplot_3d(&self) -> Result<Axes3D, Error> {
        let mut kwargs = Kwargs::new();
        kwargs.set("projection", "3d");
        let ax = meth!(self.fig, add_subplot, (), kwargs)?;
        Ok(Axes3D::from(ax))
    }

    /// Add axes at `rect` = \[left, bottom, width, height\] in figure
    /// coordinates, for example an inset.
    pub fn add_axes(&self, rect: [f64; 4]) -> Result<Axes, Error> {
        let ax = meth!(self.fig, add_axes, (rect.to_vec(),))?;
        Ok(Axes::from(ax))
    }

    pub fn set_size_inches(&self, w: f64, h: f64) -> Result<&Self, Error> {
        meth!(self.fig, set_size_inches, (w, h))?;
        Ok(self)
    }

    pub fn set_dpi(&self, dpi: f64) -> Result<&Self, Error> {
        meth!(self.fig, set_dpi, (dpi,))?;
        Ok(self)
    }

    /// Set the margins around the subplots.
    pub fn subplots_adjust(&self, adjust: &Adjust) -> Result<&Self, Error> {
        meth!(self.fig, subplots_adjust, (), adjust.kwargs())?;
        Ok(self)
    }

    /// Add a colorbar for `mappable`, taking the space from `ax`.
    pub fn colorbar(
        &self, mappable: &impl Mappable, ax: &Axes
    ) -> Result<Colorbar, Error> {
        let cb = Python::with_gil(|py| -> Result<PyObject, Error> {
            let kwargs = pyo3::types::PyDict::new_bound(py);
            kwargs.set_item("ax", ax.ax.clone_ref(py))?;
            let cb = self.fig.bind(py).call_method(
                "colorbar", (mappable.mappable().clone_ref(py),),
                Some(&kwargs))?;
            Ok(cb.unbind())
        })?;
        Ok(Colorbar::from(cb))
    }

    /// If using a GUI backend with pyplot, display the figure window.
    ///
    /// ⚠ [This does not manage an GUI event loop][GUI]. Consequently,
    /// the figure may only be shown briefly or not shown at all if
    /// you or your environment are not managing an event loop.  Use
    /// [`show()`] for that.
    ///
    /// [GUI]: https://matplotlib.org/stable/api/figure_api.html#matplotlib.figure.Figure.show
    pub fn show(self) -> Result<(), Error> {
        Python::with_gil(|py| {
            self.fig.call_method0(py, "show")?;
            Ok(())
        })
    }

    /// Release the figure from pyplot's figure manager.
    pub fn close(self) -> Result<(), Error> {
        let pyplot = pymod!(PYPLOT)?;
        Python::with_gil(|py| {
            pyplot.bind(py).call_method1("close", (self.fig.clone_ref(py),))?;
            Ok(())
        })
    }

    pub fn save(&self) -> Savefig {
        Savefig { fig: Python::with_gil(|py| self.fig.clone_ref(py)),
                  dpi: None }
    }
}

pub struct Savefig {
    fig: PyObject,
    dpi: Option<f64>,
}

impl Savefig {
    /// Resolution of the saved image.  A non-positive value restores
    /// the figure's own resolution.
    pub fn dpi(&mut self, dpi: f64) -> &mut Self {
        if dpi > 0. {
            self.dpi = Some(dpi);
        } else {
            self.dpi = None;
        }
        self
    }

    /// Save the figure to `path`.  The format is deduced from the
    /// extension.
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        debug!(path = %path.display(), dpi = ?self.dpi, "savefig");
        Python::with_gil(|py| {
            let kwargs = pyo3::types::PyDict::new_bound(py);
            if let Some(dpi) = self.dpi {
                kwargs.set_item("dpi", dpi)?;
            }
            self.fig.bind(py).call_method("savefig", (path,), Some(&kwargs))
                .map_err(|e| {
                    if e.is_instance_of::<PyFileNotFoundError>(py) {
                        Error::FileNotFoundError
                    } else if e.is_instance_of::<PyPermissionError>(py) {
                        Error::PermissionError
                    } else {
                        Error::Python(e)
                    }
                })?;
            Ok(())
        })
    }
}


/// Create a new figure managed by pyplot.
pub fn figure() -> Result<Figure, Error> {
    let pyplot = pymod!(PYPLOT)?;
    Python::with_gil(|py| {
        let fig = pyplot.bind(py).getattr("figure")?.call0()?;
        Ok(Figure { fig: fig.unbind() })
    })
}

/// Create a pyplot figure with a grid of `R` × `C` axes.
pub fn subplots<const R: usize, const C: usize>(
) -> Result<(Figure, [[Axes; C]; R]), Error> {
    let fig = figure()?;
    let ax = fig.subplots()?;
    Ok((fig, ax))
}

/// Display all open figures.
pub fn show() -> Result<(), Error> {
    let pyplot = pymod!(PYPLOT)?;
    Python::with_gil(|py| {
        pyplot.bind(py).call_method0("show")?;
        Ok(())
    })
}

/// Select the rendering backend ("agg", "pdf", "svg", "tkagg",...).
/// Non-interactive backends do not need a display.
pub fn use_backend(name: &str) -> Result<(), Error> {
    let mpl = pymod!(MATPLOTLIB)?;
    Python::with_gil(|py| {
        mpl.bind(py).call_method1("use", (name,))?;
        Ok(())
    })
}

#[cfg(doctest)]
doc_comment::doctest!("../README.md");


#[cfg(test)]
mod tests {
    use super::*;

    /// Run `f` with a non-interactive backend.  Missing Matplotlib is
    /// not a failure of the bindings.
    fn with_agg(f: impl FnOnce() -> Result<(), Error>) -> Result<(), Error> {
        match use_backend("agg").and_then(|_| f()) {
            Err(Error::NoMatplotlib) => Ok(()),
            r => r,
        }
    }

    #[test]
    fn a_basic_pdf() -> Result<(), Error> {
        with_agg(|| {
            let (fig, [[mut ax]]) = subplots()?;
            dbg!(&fig);
            ax.xy(&[1., 2., 3., 4.], &[1., 4., 2., 3.]).plot()?;
            fig.save().to_file("target/a_basic.pdf")?;
            fig.close()
        })
    }

    #[test]
    fn a_basic_col() -> Result<(), Error> {
        with_agg(|| {
            let fig = Figure::new()?;
            let [[mut ax0], [mut ax1]] = fig.subplots()?;
            ax0.xy(&[1., 2., 3., 4.], &[1., 4., 2., 3.]).plot()?;
            ax1.xy(&[1., 2., 3., 4.], &[1., 4., 2., 3.]).fmt(".").plot()?;
            fig.save().to_file("target/a_basic_col.pdf")
        })
    }

    #[test]
    fn a_basic_grid() -> Result<(), Error> {
        with_agg(|| {
            let fig = Figure::new()?;
            let [[mut ax0, mut ax1],
                 [mut ax2, mut ax3]] = fig.subplots()?;
            ax0.xy(&[1., 2., 3., 4.], &[1., 4., 2., 3.]).plot()?;
            ax1.xy(&[1., 2., 3., 4.], &[1., 4., 2., 3.]).fmt(".").plot()?;
            ax2.xy(&[1., 2., 3., 4.], &[1., 4., 2., 3.]).fmt("r").plot()?;
            ax3.xy(&[1., 2., 3., 4.], &[1., 4., 2., 3.]).fmt("r.").plot()?;
            fig.save().to_file("target/a_basic_grid.pdf")
        })
    }

    #[test]
    fn inset_and_3d() -> Result<(), Error> {
        with_agg(|| {
            let fig = Figure::new()?;
            fig.set_size_inches(6., 4.)?.set_dpi(50.)?;
            let mut ax = fig.add_axes([0.1, 0.1, 0.8, 0.8])?;
            ax.set_xlim(-1., 1.)?;
            let mut inset = fig.add_axes([0.6, 0.6, 0.25, 0.25])?;
            inset.xy(&[0., 1.], &[1., 0.]).plot()?;
            fig.save().to_file("target/inset.png")?;
            let fig = Figure::new()?;
            let mut ax3 = fig.add_subplot_3d()?;
            ax3.xyz(&[0., 1.], &[0., 1.], &[0., 1.]).plot()?;
            ax3.set_zlim(-1., 1.)?;
            fig.save().to_file("target/axes3d.png")
        })
    }

    #[test]
    fn scatter_log_scale() -> Result<(), Error> {
        with_agg(|| {
            let (fig, [[mut ax]]) = subplots()?;
            ax.scatter(&[1., 2., 3.], &[10., 100., 1000.])?
                .set_yscale("log")?
                .grid()?
                .set_title("scatter")?;
            fig.save().to_file("target/scatter.png")?;
            // Non-interactive backends only warn.
            show()?;
            fig.show()
        })
    }

    #[test]
    fn missing_directory() {
        let r = with_agg(|| {
            let fig = Figure::new()?;
            fig.save().to_file("target/no/such/dir/fig.png")
        });
        assert!(matches!(r, Ok(()) | Err(Error::FileNotFoundError)),
                "{:?}", r);
    }

    #[cfg(unix)]
    #[test]
    fn read_only_directory() -> Result<(), Error> {
        use std::{fs, os::unix::fs::PermissionsExt};
        let dir = Path::new("target/read-only");
        fs::create_dir_all(dir)?;
        fs::set_permissions(dir, fs::Permissions::from_mode(0o555))?;
        // Privileged users write anyway.
        let writable = fs::write(dir.join("write-check"), b"").is_ok();
        let r = with_agg(|| {
            let fig = Figure::new()?;
            fig.save().to_file(dir.join("fig.png"))
        });
        fs::set_permissions(dir, fs::Permissions::from_mode(0o755))?;
        if writable {
            assert!(r.is_ok(), "{:?}", r);
        } else {
            assert!(matches!(r, Ok(()) | Err(Error::PermissionError)),
                    "{:?}", r);
        }
        Ok(())
    }

    #[test]
    fn savefig_dpi() {
        let mut s = Savefig { fig: Python::with_gil(|py| py.None()),
                              dpi: None };
        assert_eq!(s.dpi(200.).dpi, Some(200.));
        assert_eq!(s.dpi(0.).dpi, None);
    }
}
