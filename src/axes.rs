//! Axes and the builders of the elements drawn on them.

use std::mem::swap;
use pyo3::prelude::*;
use crate::{
    Data, Data2, Error,
    colors::QuadMesh,
    options::{BBox, Color, Font, Kwargs, Legend, TickFormat},
};

#[derive(Debug, Clone)]
pub struct Axes {
    pub(crate) ax: PyObject,
}

impl From<PyObject> for Axes {
    fn from(ax: PyObject) -> Self { Axes { ax } }
}

/// 3D axes, as created by [`crate::Figure::add_subplot_3d`].
#[derive(Debug, Clone)]
pub struct Axes3D {
    ax: PyObject,
}

impl From<PyObject> for Axes3D {
    fn from(ax: PyObject) -> Self { Axes3D { ax } }
}

/// Methods shared by 2D and 3D axes, assuming `self.ax` exists.
macro_rules! decorations { () => {
    pub fn set_title(&mut self, v: &str) -> Result<&mut Self, Error> {
        meth!(self.ax, set_title, (v,))?;
        Ok(self)
    }

    pub fn set_title_with(
        &mut self, v: &str, font: &Font) -> Result<&mut Self, Error> {
        meth!(self.ax, set_title, (v,), font.text_kwargs())?;
        Ok(self)
    }

    pub fn set_xlabel(&mut self, label: &str) -> Result<&mut Self, Error> {
        meth!(self.ax, set_xlabel, (label,))?;
        Ok(self)
    }

    pub fn set_xlabel_with(
        &mut self, label: &str, font: &Font) -> Result<&mut Self, Error> {
        meth!(self.ax, set_xlabel, (label,), font.text_kwargs())?;
        Ok(self)
    }

    pub fn set_ylabel(&mut self, label: &str) -> Result<&mut Self, Error> {
        meth!(self.ax, set_ylabel, (label,))?;
        Ok(self)
    }

    pub fn set_ylabel_with(
        &mut self, label: &str, font: &Font) -> Result<&mut Self, Error> {
        meth!(self.ax, set_ylabel, (label,), font.text_kwargs())?;
        Ok(self)
    }

    pub fn set_xlim(&mut self, a: f64, b: f64) -> Result<&mut Self, Error> {
        meth!(self.ax, set_xlim, (a, b))?;
        Ok(self)
    }

    pub fn set_ylim(&mut self, a: f64, b: f64) -> Result<&mut Self, Error> {
        meth!(self.ax, set_ylim, (a, b))?;
        Ok(self)
    }

    pub fn legend(&mut self) -> Result<&mut Self, Error> {
        meth!(self.ax, legend, ())?;
        Ok(self)
    }

    pub fn legend_with(&mut self, l: &Legend) -> Result<&mut Self, Error> {
        meth!(self.ax, legend, (), l.kwargs())?;
        Ok(self)
    }
}}

impl Axes {
    /// Plot `y` versus `x` as lines and/or markers.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use perfect_plots as plt;
    /// let (fig, [[mut ax]]) = plt::subplots()?;
    /// ax.xy(&[1., 2., 3., 4.], &[1., 4., 2., 3.]).fmt("g-o").plot()?;
    /// fig.save().to_file("target/XY_plot.pdf")?;
    /// # Ok::<(), plt::Error>(())
    /// ```
    // FIXME: Do we want to check that `x` and `y` have the same
    // dimension?  Better error message?
    #[must_use]
    pub fn xy<'a, D>(&'a mut self, x: &'a D, y: &'a D) -> XY<'a, D>
    where D: Data + ?Sized {
        // The chain leading to plot starts with the data (using this
        // function) so that additional data may be added, sharing
        // common options.  We also mutably borrow `self` to reflect that
        // the final `.plot()` will mutate the underlying Python object.
        XY { axes: self,
             options: PlotOptions::new(),
             data: (x, y),
             prev_data: vec![] }
    }

    /// Plot `y` versus `x` with vertical error bars of half-length
    /// `yerr`.
    #[must_use]
    pub fn errorbar<'a, D>(
        &'a mut self, x: &'a D, y: &'a D, yerr: &'a D) -> ErrorBar<'a, D>
    where D: Data + ?Sized {
        ErrorBar { axes: self,
                   options: PlotOptions::new(),
                   x, y, yerr }
    }

    /// Horizontal line spanning the axes at height `y`.
    #[must_use]
    pub fn axhline(&mut self, y: f64) -> RefLine<'_> {
        RefLine { axes: self, method: "axhline", pos: y, kw: Kwargs::new() }
    }

    /// Vertical line spanning the axes at abscissa `x`.
    #[must_use]
    pub fn axvline(&mut self, x: f64) -> RefLine<'_> {
        RefLine { axes: self, method: "axvline", pos: x, kw: Kwargs::new() }
    }

    /// Pseudocolor plot of `z` on the non-regular grid (`x`, `y`).
    /// All three arrays share the same shape.
    #[must_use]
    pub fn pcolormesh<'a, M>(
        &'a mut self, x: &'a M, y: &'a M, z: &'a M) -> PColorMesh<'a, M>
    where M: Data2 + ?Sized {
        PColorMesh { axes: self, x, y, z, kw: Kwargs::new() }
    }

    /// Add the text `s` at the point (`x`, `y`) in data coordinates
    /// (see [`Text::axes_coords`] for the other option).
    #[must_use]
    pub fn text<'a>(&'a mut self, x: f64, y: f64, s: &'a str) -> Text<'a> {
        Text { axes: self, x, y, s, kw: Kwargs::new(), axes_coords: false }
    }

    pub fn scatter<D>(&mut self, x: &D, y: &D) -> Result<&mut Self, Error>
    where D: Data + ?Sized {
        // FIXME: Do we want to check that `x` and `y` have the same
        // dimension?  Better error message?
        meth!(self.ax, scatter, py -> {
            let xn = x.to_numpy(py);
            let yn = y.to_numpy(py);
            (xn, yn) })?;
        Ok(self)
    }

    /// Create axes sharing the x-axis, with their y-axis on the right.
    pub fn twinx(&self) -> Result<Axes, Error> {
        let ax = meth!(self.ax, twinx, ())?;
        Ok(Axes { ax })
    }

    decorations!();

    /// Set the yaxis' scale.  Possible values for `v` are "linear",
    /// "log", "symlog", "logit",...
    pub fn set_yscale(&mut self, v: &str) -> Result<&mut Self, Error> {
        meth!(self.ax, set_yscale, (v,))?;
        Ok(self)
    }

    pub fn grid(&mut self) -> Result<&mut Self, Error> {
        meth!(self.ax, grid, (true,))?;
        Ok(self)
    }

    /// Place the y label at (`x`, `y`) in axes coordinates, so that
    /// the labels of stacked axes line up.
    pub fn set_ylabel_coords(
        &mut self, x: f64, y: f64) -> Result<&mut Self, Error> {
        Python::with_gil(|py| -> Result<(), Error> {
            self.ax.bind(py).getattr("yaxis")?
                .call_method1("set_label_coords", (x, y))?;
            Ok(())
        })?;
        Ok(self)
    }

    /// Set the tick locations of the x-axis.  An empty slice removes
    /// the ticks.
    pub fn set_xticks(&mut self, ticks: &[f64]) -> Result<&mut Self, Error> {
        meth!(self.ax, set_xticks, (ticks.to_vec(),))?;
        Ok(self)
    }

    pub fn set_yticks(&mut self, ticks: &[f64]) -> Result<&mut Self, Error> {
        meth!(self.ax, set_yticks, (ticks.to_vec(),))?;
        Ok(self)
    }

    /// Apply `font` to the current x tick labels.
    pub fn set_xticklabels_font(
        &mut self, font: &Font) -> Result<&mut Self, Error> {
        self.ticklabels_font("get_xticklabels", font)?;
        Ok(self)
    }

    /// Apply `font` to the current y tick labels.
    pub fn set_yticklabels_font(
        &mut self, font: &Font) -> Result<&mut Self, Error> {
        self.ticklabels_font("get_yticklabels", font)?;
        Ok(self)
    }

    fn ticklabels_font(&self, getter: &str, font: &Font) -> Result<(), Error> {
        Python::with_gil(|py| {
            let kwargs = font.text_kwargs().to_dict(py)?;
            let labels = self.ax.bind(py).call_method0(getter)?;
            for l in labels.iter()? {
                l?.call_method("set", (), Some(&kwargs))?;
            }
            Ok(())
        })
    }

    pub fn ticklabel_format(
        &mut self, fmt: &TickFormat) -> Result<&mut Self, Error> {
        meth!(self.ax, ticklabel_format, (), fmt.kwargs())?;
        Ok(self)
    }

    /// Width of the four borders of the axes.
    pub fn set_spines_linewidth(&mut self, w: f64) -> Result<&mut Self, Error> {
        Python::with_gil(|py| -> Result<(), Error> {
            let spines = self.ax.bind(py).getattr("spines")?
                .call_method0("values")?;
            for s in spines.iter()? {
                s?.call_method1("set_linewidth", (w,))?;
            }
            Ok(())
        })?;
        Ok(self)
    }

    /// Background color of the axes.
    pub fn set_facecolor(
        &mut self, c: impl Into<Color>) -> Result<&mut Self, Error> {
        let mut kw = Kwargs::new();
        kw.set("color", c.into());
        meth!(self.ax, set_facecolor, (), kw)?;
        Ok(self)
    }

    /// Axis limits and aspect: "on", "off", "equal", "scaled",
    /// "tight", "auto", "image" or "square".
    pub fn axis(&mut self, mode: &str) -> Result<&mut Self, Error> {
        meth!(self.ax, axis, (mode,))?;
        Ok(self)
    }
}

impl Axes3D {
    /// Plot the curve through the points (`x`, `y`, `z`).
    #[must_use]
    pub fn xyz<'a, D>(
        &'a mut self, x: &'a D, y: &'a D, z: &'a D) -> XYZ<'a, D>
    where D: Data + ?Sized {
        XYZ { axes: self, options: PlotOptions::new(), x, y, z }
    }

    /// Set the viewing angles, in degrees.  `None` keeps the current
    /// value.
    pub fn view_init(
        &mut self, elev: Option<f64>, azim: Option<f64>
    ) -> Result<&mut Self, Error> {
        let mut kw = Kwargs::new();
        if let Some(e) = elev { kw.set("elev", e); }
        if let Some(a) = azim { kw.set("azim", a); }
        meth!(self.ax, view_init, (), kw)?;
        Ok(self)
    }

    decorations!();

    pub fn set_zlim(&mut self, a: f64, b: f64) -> Result<&mut Self, Error> {
        meth!(self.ax, set_zlim, (a, b))?;
        Ok(self)
    }

    pub fn set_zlabel(&mut self, label: &str) -> Result<&mut Self, Error> {
        meth!(self.ax, set_zlabel, (label,))?;
        Ok(self)
    }

    pub fn set_zlabel_with(
        &mut self, label: &str, font: &Font) -> Result<&mut Self, Error> {
        meth!(self.ax, set_zlabel, (label,), font.text_kwargs())?;
        Ok(self)
    }
}

#[derive(Clone)]
struct PlotOptions<'a> {
    fmt: &'a str,
    kw: Kwargs,
}

impl<'a> PlotOptions<'a> {
    fn new() -> PlotOptions<'static> {
        PlotOptions { fmt: "", kw: Kwargs::new() }
    }

    fn plot_xy<D>(&self, py: Python<'_>, axes: &Axes, x: &D, y: &D
    ) -> Result<(), Error>
    where D: Data + ?Sized {
        let xn = x.to_numpy(py);
        let yn = y.to_numpy(py);
        let kwargs = self.kw.to_dict(py)?;
        axes.ax.bind(py).call_method(
            "plot", (xn, yn, self.fmt), Some(&kwargs))?;
        Ok(())
    }
}

/// Declare methods to set the options assuming `self.options` exists.
macro_rules! set_plotoptions { () => {
    /// Format string, e.g. "g-o" for a green line with circle markers.
    #[must_use]
    pub fn fmt(mut self, fmt: &'a str) -> Self {
        self.options.fmt = fmt;
        self
    }

    #[must_use]
    pub fn antialiased(mut self, b: bool) -> Self {
        self.options.kw.set("antialiased", b);
        self
    }

    #[must_use]
    pub fn label(mut self, label: &str) -> Self {
        self.options.kw.set("label", label);
        self
    }

    #[must_use]
    pub fn linewidth(mut self, w: f64) -> Self {
        self.options.kw.set("linewidth", w);
        self
    }

    #[must_use]
    pub fn markersize(mut self, s: f64) -> Self {
        self.options.kw.set("markersize", s);
        self
    }

    #[must_use]
    pub fn marker(mut self, m: &str) -> Self {
        self.options.kw.set("marker", m);
        self
    }

    #[must_use]
    pub fn color(mut self, c: impl Into<Color>) -> Self {
        self.options.kw.set("color", c.into());
        self
    }
}}

pub struct XY<'a, D>
where D: ?Sized {
    axes: &'a Axes,
    // Latest data and its setting.
    options: PlotOptions<'a>,
    data: (&'a D, &'a D),
    // Previous data with their settings.
    prev_data: Vec<(PlotOptions<'a>, (&'a D, &'a D))>,
}

impl<'a, D> XY<'a, D>
where D: Data + ?Sized {
    set_plotoptions!();

    /// Plot the data with the options specified in [`XY`].
    pub fn plot(self) -> Result<(), Error> {
        Python::with_gil(|py| {
            for (opt, (x, y)) in self.prev_data.iter() {
                opt.plot_xy(py, self.axes, *x, *y)?;
            }
            let (x, y) = self.data;
            self.options.plot_xy(py, self.axes, x, y)
        })
    }

    /// Add the dataset (`x`, `y`).  It starts with the options of the
    /// previous dataset, the following setters only affect it.
    #[must_use]
    pub fn xy(mut self, x: &'a D, y: &'a D) -> Self {
        let mut data = (x, y);
        swap(&mut data, &mut self.data);
        self.prev_data.push((self.options.clone(), data));
        self
    }
}

/// Options of [`Axes::errorbar`].
pub struct ErrorBar<'a, D>
where D: ?Sized {
    axes: &'a Axes,
    options: PlotOptions<'a>,
    x: &'a D,
    y: &'a D,
    yerr: &'a D,
}

impl<'a, D> ErrorBar<'a, D>
where D: Data + ?Sized {
    set_plotoptions!();

    /// Length of the error bar caps, in points.
    #[must_use]
    pub fn capsize(mut self, s: f64) -> Self {
        self.options.kw.set("capsize", s);
        self
    }

    pub fn plot(self) -> Result<(), Error> {
        Python::with_gil(|py| {
            let kwargs = self.options.kw.to_dict(py)?;
            if !self.options.fmt.is_empty() {
                kwargs.set_item("fmt", self.options.fmt)?;
            }
            let args = (self.x.to_numpy(py), self.y.to_numpy(py),
                        self.yerr.to_numpy(py));
            self.axes.ax.bind(py).call_method("errorbar", args, Some(&kwargs))?;
            Ok(())
        })
    }
}

/// Horizontal or vertical reference line.
pub struct RefLine<'a> {
    axes: &'a Axes,
    method: &'static str,
    pos: f64,
    kw: Kwargs,
}

impl<'a> RefLine<'a> {
    #[must_use]
    pub fn color(mut self, c: impl Into<Color>) -> Self {
        self.kw.set("color", c.into());
        self
    }

    #[must_use]
    pub fn linewidth(mut self, w: f64) -> Self {
        self.kw.set("linewidth", w);
        self
    }

    pub fn draw(self) -> Result<(), Error> {
        Python::with_gil(|py| {
            let kwargs = self.kw.to_dict(py)?;
            self.axes.ax.bind(py)
                .call_method(self.method, (self.pos,), Some(&kwargs))?;
            Ok(())
        })
    }
}

/// Options of [`Axes::pcolormesh`].
pub struct PColorMesh<'a, M>
where M: ?Sized {
    axes: &'a Axes,
    x: &'a M,
    y: &'a M,
    z: &'a M,
    kw: Kwargs,
}

impl<'a, M> PColorMesh<'a, M>
where M: Data2 + ?Sized {
    /// Name of the colormap, e.g. "hot_r" or "viridis".
    #[must_use]
    pub fn cmap(mut self, name: &str) -> Self {
        self.kw.set("cmap", name);
        self
    }

    /// Draw the mesh.  The returned handle sets the color limits and
    /// feeds a colorbar.
    pub fn plot(self) -> Result<QuadMesh, Error> {
        let mesh = meth!(self.axes.ax, pcolormesh, py -> (
            self.x.to_numpy2(py),
            self.y.to_numpy2(py),
            self.z.to_numpy2(py)), self.kw)?;
        Ok(QuadMesh::from(mesh))
    }
}

/// Options of [`Axes::text`].
pub struct Text<'a> {
    axes: &'a Axes,
    x: f64,
    y: f64,
    s: &'a str,
    kw: Kwargs,
    axes_coords: bool,
}

impl<'a> Text<'a> {
    #[must_use]
    pub fn font(mut self, font: &Font) -> Self {
        self.kw.extend(&font.text_kwargs());
        self
    }

    /// Horizontal alignment: "left", "center" or "right".
    #[must_use]
    pub fn ha(mut self, align: &str) -> Self {
        self.kw.set("ha", align);
        self
    }

    #[must_use]
    pub fn bbox(mut self, bbox: &BBox) -> Self {
        self.kw.set("bbox", bbox.kwargs().clone());
        self
    }

    /// Interpret the position in axes coordinates: (0, 0) is the
    /// lower left corner of the axes and (1, 1) the upper right one.
    #[must_use]
    pub fn axes_coords(mut self) -> Self {
        self.axes_coords = true;
        self
    }

    pub fn draw(self) -> Result<(), Error> {
        Python::with_gil(|py| {
            let ax = self.axes.ax.bind(py);
            let kwargs = self.kw.to_dict(py)?;
            if self.axes_coords {
                kwargs.set_item("transform", ax.getattr("transAxes")?.unbind())?;
            }
            ax.call_method("text", (self.x, self.y, self.s), Some(&kwargs))?;
            Ok(())
        })
    }
}

/// Options of [`Axes3D::xyz`].
pub struct XYZ<'a, D>
where D: ?Sized {
    axes: &'a Axes3D,
    options: PlotOptions<'a>,
    x: &'a D,
    y: &'a D,
    z: &'a D,
}

impl<'a, D> XYZ<'a, D>
where D: Data + ?Sized {
    set_plotoptions!();

    pub fn plot(self) -> Result<(), Error> {
        Python::with_gil(|py| {
            let kwargs = self.options.kw.to_dict(py)?;
            let args = (self.x.to_numpy(py), self.y.to_numpy(py),
                        self.z.to_numpy(py), self.options.fmt);
            self.axes.ax.bind(py).call_method("plot", args, Some(&kwargs))?;
            Ok(())
        })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chained_datasets_inherit_options() {
        let mut ax = Axes::from(Python::with_gil(|py| py.None()));
        let (x, y1, y2) = ([0., 1.], [1., 2.], [2., 3.]);
        let xy = ax.xy(&x, &y1).fmt("s-").linewidth(4.).label("first")
            .antialiased(true)
            .xy(&x, &y2).label("second").color("k");
        let (first, _) = &xy.prev_data[0];
        assert_eq!(first.fmt, "s-");
        assert_eq!(first.kw.keys().collect::<Vec<_>>(),
                   ["linewidth", "label", "antialiased"]);
        assert_eq!(xy.options.fmt, "s-");
        assert_eq!(xy.options.kw.keys().collect::<Vec<_>>(),
                   ["linewidth", "label", "antialiased", "color"]);
        assert_eq!(xy.options.kw.get("label"), Some(&crate::Value::from("second")));
    }
}
