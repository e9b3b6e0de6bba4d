//! Colormaps and the objects mapping scalar data to colors.

use pyo3::{
    prelude::*,
    exceptions::PyKeyError,
};
use crate::{
    CM, MATPLOTLIB,
    Data, Error,
    data::linspace,
    options::{Font, Kwargs, Rgba},
};

/// A colormap registered in Matplotlib.
#[derive(Debug, Clone)]
pub struct Colormap {
    name: String,
    cmap: PyObject,
}

/// Look up the colormap `name` ("viridis", "hot_r", "rainbow",...).
/// The suffix "_r" selects the reversed colormap.
pub fn colormap(name: &str) -> Result<Colormap, Error> {
    let mpl = pymod!(MATPLOTLIB)?;
    Python::with_gil(|py| {
        let cmap = mpl.bind(py).getattr("colormaps")?.get_item(name)
            .map_err(|e| {
                if e.is_instance_of::<PyKeyError>(py) {
                    Error::UnknownColormap(name.to_owned())
                } else {
                    Error::Python(e)
                }
            })?;
        Ok(Colormap { name: name.to_owned(), cmap: cmap.unbind() })
    })
}

impl Colormap {
    pub fn name(&self) -> &str { &self.name }

    /// The color associated to `v`.  Values outside \[0, 1\] get the
    /// colormap's under/over colors.
    pub fn at(&self, v: f64) -> Result<Rgba, Error> {
        Python::with_gil(|py| {
            let (r, g, b, a): (f64, f64, f64, f64) =
                self.cmap.bind(py).call1((v,))?.extract()?;
            Ok(Rgba::new(r, g, b, a))
        })
    }

    /// `n` colors evenly spread over the whole colormap.
    pub fn sample(&self, n: usize) -> Result<Vec<Rgba>, Error> {
        linspace(0., 1., n).into_iter().map(|v| self.at(v)).collect()
    }
}

/// Objects whose colors are derived from scalar data through a
/// colormap and a normalization.  They can be given a colorbar.
pub trait Mappable {
    fn mappable(&self) -> &PyObject;

    /// Set the data values mapped to the ends of the colormap.
    fn set_clim(&self, vmin: f64, vmax: f64) -> Result<(), Error> {
        Python::with_gil(|py| {
            self.mappable().bind(py).call_method1("set_clim", (vmin, vmax))?;
            Ok(())
        })
    }
}

/// A mappable not attached to any plot, e.g. to describe with a
/// colorbar the colors given to a family of curves.
#[derive(Debug)]
pub struct ScalarMappable {
    sm: PyObject,
}

impl ScalarMappable {
    pub fn new(cmap: &Colormap) -> Result<Self, Error> {
        let cm = pymod!(CM)?;
        Python::with_gil(|py| {
            let kwargs = pyo3::types::PyDict::new_bound(py);
            kwargs.set_item("cmap", cmap.cmap.clone_ref(py))?;
            let sm = cm.bind(py).getattr("ScalarMappable")?
                .call((), Some(&kwargs))?;
            Ok(ScalarMappable { sm: sm.unbind() })
        })
    }

    /// Set the values whose range the colors span.
    pub fn set_array<D>(&self, data: &D) -> Result<&Self, Error>
    where D: Data + ?Sized {
        meth!(self.sm, set_array, py -> (data.to_numpy(py),))?;
        Ok(self)
    }
}

impl Mappable for ScalarMappable {
    fn mappable(&self) -> &PyObject { &self.sm }
}

/// The result of [`crate::Axes::pcolormesh`].
#[derive(Debug)]
pub struct QuadMesh {
    mesh: PyObject,
}

impl From<PyObject> for QuadMesh {
    fn from(mesh: PyObject) -> Self { QuadMesh { mesh } }
}

impl Mappable for QuadMesh {
    fn mappable(&self) -> &PyObject { &self.mesh }
}

/// See [`crate::Figure::colorbar`].
#[derive(Debug)]
pub struct Colorbar {
    cb: PyObject,
}

impl From<PyObject> for Colorbar {
    fn from(cb: PyObject) -> Self { Colorbar { cb } }
}

impl Colorbar {
    pub fn set_label(&self, label: &str) -> Result<&Self, Error> {
        meth!(self.cb, set_label, (label,))?;
        Ok(self)
    }

    pub fn set_label_with(
        &self, label: &str, font: &Font) -> Result<&Self, Error> {
        let kw: Kwargs = font.text_kwargs();
        meth!(self.cb, set_label, (label,), kw)?;
        Ok(self)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn or_skip(r: Result<(), Error>) -> Result<(), Error> {
        match r {
            Err(Error::NoMatplotlib) => Ok(()),
            r => r,
        }
    }

    #[test]
    fn hot_r_goes_from_white_to_black() -> Result<(), Error> {
        or_skip((|| -> Result<(), Error> {
            let cm = colormap("hot_r")?;
            assert_eq!(cm.name(), "hot_r");
            let lo = cm.at(0.)?;
            let hi = cm.at(1.)?;
            assert!(lo.r > 0.99 && lo.g > 0.99 && lo.b > 0.99, "{}", lo);
            assert!(hi.r < 0.1 && hi.g < 0.1 && hi.b < 0.1, "{}", hi);
            assert_eq!(hi.a, 1.);
            Ok(())
        })())
    }

    #[test]
    fn sample_spans_the_colormap() -> Result<(), Error> {
        or_skip((|| -> Result<(), Error> {
            let cm = colormap("rainbow")?;
            let cols = cm.sample(6)?;
            assert_eq!(cols.len(), 6);
            assert_eq!(cols[0], cm.at(0.)?);
            assert_eq!(cols[5], cm.at(1.)?);
            Ok(())
        })())
    }

    #[test]
    fn unknown_colormap() {
        match colormap("no_such_colormap") {
            Err(Error::UnknownColormap(n)) => assert_eq!(n, "no_such_colormap"),
            Err(Error::NoMatplotlib) => (),
            r => panic!("unexpected {:?}", r),
        }
    }
}
