//! Keyword options handed over to Matplotlib.
//!
//! Matplotlib is configured almost entirely through keyword
//! arguments.  The builders of this module collect them in a plain
//! Rust [`Kwargs`] so that they can be composed (and inspected)
//! without holding Python's GIL.  The conversion to a Python `dict`
//! only happens when the call is made.

use std::{
    borrow::Cow,
    fmt::{self, Display, Formatter},
};
use pyo3::{
    prelude::*,
    types::PyDict,
};

/// A value that Matplotlib accepts as a keyword argument or as a
/// runtime configuration parameter.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Pair(f64, f64),
    IntPair(i64, i64),
    Floats(Vec<f64>),
    Strs(Vec<String>),
    Color(Color),
    /// Nested keyword arguments, passed as a Python `dict`.
    Dict(Kwargs),
}

impl Value {
    pub(crate) fn to_py(&self, py: Python<'_>) -> PyResult<PyObject> {
        let obj = match self {
            Value::Bool(b) => (*b).into_py(py),
            Value::Int(i) => (*i).into_py(py),
            Value::Float(x) => (*x).into_py(py),
            Value::Str(s) => s.as_str().into_py(py),
            Value::Pair(a, b) => (*a, *b).into_py(py),
            Value::IntPair(a, b) => (*a, *b).into_py(py),
            Value::Floats(v) => v.clone().into_py(py),
            Value::Strs(v) => v.clone().into_py(py),
            Value::Color(c) => c.to_py(py),
            Value::Dict(kw) => kw.to_dict(py)?.into_any().unbind(),
        };
        Ok(obj)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self { Value::Bool(b) }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self { Value::Int(i as i64) }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self { Value::Int(i) }
}

impl From<usize> for Value {
    fn from(i: usize) -> Self { Value::Int(i as i64) }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self { Value::Float(x) }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self { Value::Str(s.to_owned()) }
}

impl From<String> for Value {
    fn from(s: String) -> Self { Value::Str(s) }
}

impl From<(f64, f64)> for Value {
    fn from((a, b): (f64, f64)) -> Self { Value::Pair(a, b) }
}

impl From<(i32, i32)> for Value {
    fn from((a, b): (i32, i32)) -> Self { Value::IntPair(a as i64, b as i64) }
}

impl From<&[f64]> for Value {
    fn from(v: &[f64]) -> Self { Value::Floats(v.to_vec()) }
}

impl From<&[&str]> for Value {
    fn from(v: &[&str]) -> Self {
        Value::Strs(v.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Value {
    fn from(v: [&str; N]) -> Self { Value::from(&v[..]) }
}

impl From<Color> for Value {
    fn from(c: Color) -> Self { Value::Color(c) }
}

impl From<Rgba> for Value {
    fn from(c: Rgba) -> Self { Value::Color(Color::Rgba(c)) }
}

impl From<Kwargs> for Value {
    fn from(kw: Kwargs) -> Self { Value::Dict(kw) }
}

/// Ordered keyword arguments.  Setting a key twice keeps its first
/// position but the latest value, like a Python `dict`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Kwargs {
    items: Vec<(Cow<'static, str>, Value)>,
}

impl Kwargs {
    pub fn new() -> Self { Self::default() }

    pub fn set(&mut self, key: impl Into<Cow<'static, str>>,
               v: impl Into<Value>) -> &mut Self {
        let key = key.into();
        let v = v.into();
        match self.items.iter_mut().find(|(k, _)| *k == key) {
            Some((_, old)) => *old = v,
            None => self.items.push((key, v)),
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.items.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Add all entries of `other`, overriding the common keys.
    pub fn extend(&mut self, other: &Kwargs) -> &mut Self {
        for (k, v) in &other.items {
            self.set(k.clone(), v.clone());
        }
        self
    }

    pub fn len(&self) -> usize { self.items.len() }

    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|(k, _)| &**k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.items.iter().map(|(k, v)| (&**k, v))
    }

    pub(crate) fn to_dict<'py>(
        &self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let d = PyDict::new_bound(py);
        for (k, v) in &self.items {
            d.set_item(&**k, v.to_py(py)?)?;
        }
        Ok(d)
    }
}

/// A color with red, green, blue and alpha components in \[0, 1\].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Rgba { r, g, b, a }
    }
}

/// Formatted as `(%5.2f,%5.2f,%5.2f,%5.2f)`.
impl Display for Rgba {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({:5.2},{:5.2},{:5.2},{:5.2})",
               self.r, self.g, self.b, self.a)
    }
}

/// Any color specification Matplotlib understands.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    /// Single letter (`"k"`), CSS name (`"lightblue"`), cycle entry
    /// (`"C1"`) or hex string.
    Name(Cow<'static, str>),
    Rgba(Rgba),
}

impl Color {
    fn to_py(&self, py: Python<'_>) -> PyObject {
        match self {
            Color::Name(n) => (&**n).into_py(py),
            Color::Rgba(c) => (c.r, c.g, c.b, c.a).into_py(py),
        }
    }
}

impl From<&'static str> for Color {
    fn from(n: &'static str) -> Self { Color::Name(Cow::Borrowed(n)) }
}

impl From<String> for Color {
    fn from(n: String) -> Self { Color::Name(Cow::Owned(n)) }
}

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self { Color::Rgba(c) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weight { Normal, Bold }

impl Weight {
    fn as_str(self) -> &'static str {
        match self {
            Weight::Normal => "normal",
            Weight::Bold => "bold",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slant { Normal, Italic, Oblique }

impl Slant {
    fn as_str(self) -> &'static str {
        match self {
            Slant::Normal => "normal",
            Slant::Italic => "italic",
            Slant::Oblique => "oblique",
        }
    }
}

/// Font settings of a piece of text.  Unset fields keep Matplotlib's
/// current defaults.
///
/// ```
/// use perfect_plots::Font;
/// let title = Font::new().size(32.).bold().name("Times New Roman");
/// let ylabel = title.clone().italic();
/// # assert_ne!(title, ylabel);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Font {
    size: Option<f64>,
    weight: Option<Weight>,
    slant: Option<Slant>,
    name: Option<String>,
    family: Option<String>,
}

impl Font {
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn size(mut self, pt: f64) -> Self {
        self.size = Some(pt);
        self
    }

    #[must_use]
    pub fn weight(mut self, w: Weight) -> Self {
        self.weight = Some(w);
        self
    }

    #[must_use]
    pub fn bold(self) -> Self { self.weight(Weight::Bold) }

    #[must_use]
    pub fn slant(mut self, s: Slant) -> Self {
        self.slant = Some(s);
        self
    }

    #[must_use]
    pub fn italic(self) -> Self { self.slant(Slant::Italic) }

    /// Use the font named `name` (e.g. "Times New Roman").
    #[must_use]
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_owned());
        self
    }

    /// Use a generic family ("serif", "sans-serif", "monospace",...).
    #[must_use]
    pub fn family(mut self, family: &str) -> Self {
        self.family = Some(family.to_owned());
        self
    }

    /// Keyword arguments of text-producing calls (`set_xlabel`,
    /// `text`, tick labels,...).
    pub fn text_kwargs(&self) -> Kwargs {
        let mut kw = Kwargs::new();
        if let Some(s) = self.size { kw.set("fontsize", s); }
        if let Some(w) = self.weight { kw.set("fontweight", w.as_str()); }
        if let Some(s) = self.slant { kw.set("fontstyle", s.as_str()); }
        if let Some(n) = &self.name { kw.set("fontname", n.as_str()); }
        if let Some(f) = &self.family { kw.set("family", f.as_str()); }
        kw
    }

    /// The same settings as a `FontProperties` dictionary (used as the
    /// `prop` of legends).  A font name stands in for the family.
    pub fn properties(&self) -> Kwargs {
        let mut kw = Kwargs::new();
        if let Some(s) = self.size { kw.set("size", s); }
        if let Some(w) = self.weight { kw.set("weight", w.as_str()); }
        if let Some(s) = self.slant { kw.set("style", s.as_str()); }
        match (&self.name, &self.family) {
            (Some(n), _) => { kw.set("family", n.as_str()); }
            (None, Some(f)) => { kw.set("family", f.as_str()); }
            (None, None) => (),
        }
        kw
    }
}

/// Legend options.
#[derive(Debug, Clone, Default)]
pub struct Legend {
    kw: Kwargs,
}

impl Legend {
    pub fn new() -> Self { Self::default() }

    /// Location: "best", "upper right", "lower left", "center",...
    #[must_use]
    pub fn loc(mut self, loc: &str) -> Self {
        self.kw.set("loc", loc);
        self
    }

    #[must_use]
    pub fn frameon(mut self, b: bool) -> Self {
        self.kw.set("frameon", b);
        self
    }

    /// Font of the entries.  Takes precedence over [`Legend::fontsize`].
    #[must_use]
    pub fn font(mut self, font: &Font) -> Self {
        self.kw.set("prop", font.properties());
        self
    }

    #[must_use]
    pub fn fontsize(mut self, pt: f64) -> Self {
        self.kw.set("fontsize", pt);
        self
    }

    #[must_use]
    pub fn ncol(mut self, n: usize) -> Self {
        self.kw.set("ncol", n);
        self
    }

    #[must_use]
    pub fn title(mut self, title: &str) -> Self {
        self.kw.set("title", title);
        self
    }

    #[must_use]
    pub fn title_fontsize(mut self, pt: f64) -> Self {
        self.kw.set("title_fontsize", pt);
        self
    }

    pub fn kwargs(&self) -> &Kwargs { &self.kw }
}

/// Formatting of the tick labels of linear axes.
#[derive(Debug, Clone, Default)]
pub struct TickFormat {
    kw: Kwargs,
}

impl TickFormat {
    pub fn new() -> Self { Self::default() }

    /// Whether an offset may be factored out of the tick values.
    #[must_use]
    pub fn use_offset(mut self, b: bool) -> Self {
        self.kw.set("useOffset", b);
        self
    }

    /// Scientific notation outside of \[10^`lo`, 10^`hi`\].
    #[must_use]
    pub fn sci(mut self, lo: i32, hi: i32) -> Self {
        self.kw.set("style", "sci");
        self.kw.set("scilimits", (lo, hi));
        self
    }

    #[must_use]
    pub fn plain(mut self) -> Self {
        self.kw.set("style", "plain");
        self
    }

    pub fn kwargs(&self) -> &Kwargs { &self.kw }
}

/// Subplot margins, as fractions of the figure size.
#[derive(Debug, Clone, Default)]
pub struct Adjust {
    kw: Kwargs,
}

macro_rules! adjust_fields { ($($f: ident),*) => {
    $(
        #[must_use]
        pub fn $f(mut self, v: f64) -> Self {
            self.kw.set(stringify!($f), v);
            self
        }
    )*
}}

impl Adjust {
    pub fn new() -> Self { Self::default() }

    adjust_fields!(left, right, bottom, top, wspace, hspace);

    pub fn kwargs(&self) -> &Kwargs { &self.kw }
}

/// Box drawn around a text.
#[derive(Debug, Clone, Default)]
pub struct BBox {
    kw: Kwargs,
}

impl BBox {
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn facecolor(mut self, c: impl Into<Color>) -> Self {
        self.kw.set("facecolor", c.into());
        self
    }

    /// Edge color.  "none" removes the border.
    #[must_use]
    pub fn edgecolor(mut self, c: impl Into<Color>) -> Self {
        self.kw.set("edgecolor", c.into());
        self
    }

    #[must_use]
    pub fn alpha(mut self, a: f64) -> Self {
        self.kw.set("alpha", a);
        self
    }

    #[must_use]
    pub fn pad(mut self, pad: f64) -> Self {
        self.kw.set("pad", pad);
        self
    }

    /// "square", "round", "round4", "sawtooth",...
    #[must_use]
    pub fn boxstyle(mut self, style: &str) -> Self {
        self.kw.set("boxstyle", style);
        self
    }

    pub fn kwargs(&self) -> &Kwargs { &self.kw }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kwargs_replace_in_place() {
        let mut kw = Kwargs::new();
        kw.set("a", 1).set("b", true).set("a", 2.5)
            .set("ticks", &[1., 2.][..]);
        assert_eq!(kw.len(), 3);
        assert_eq!(kw.keys().collect::<Vec<_>>(), ["a", "b", "ticks"]);
        assert_eq!(kw.get("ticks"), Some(&Value::Floats(vec![1., 2.])));
        assert_eq!(kw.get("a"), Some(&Value::Float(2.5)));
        assert_eq!(kw.get("c"), None);
    }

    #[test]
    fn kwargs_extend_overrides() {
        let mut kw = Kwargs::new();
        kw.set("fontsize", 10.).set("label", "sin");
        let mut other = Kwargs::new();
        other.set("fontsize", 25.).set("fontname", "Times New Roman");
        kw.extend(&other);
        assert_eq!(kw.keys().collect::<Vec<_>>(),
                   ["fontsize", "label", "fontname"]);
        assert_eq!(kw.get("fontsize"), Some(&Value::Float(25.)));
    }

    #[test]
    fn font_text_kwargs() {
        let kw = Font::new().size(32.).bold().italic()
            .name("Times New Roman").text_kwargs();
        assert_eq!(kw.keys().collect::<Vec<_>>(),
                   ["fontsize", "fontweight", "fontstyle", "fontname"]);
        assert_eq!(kw.get("fontweight"), Some(&Value::from("bold")));
        assert_eq!(kw.get("fontstyle"), Some(&Value::from("italic")));
        assert!(Font::new().text_kwargs().is_empty());
    }

    #[test]
    fn font_properties_use_name_as_family() {
        let p = Font::new().size(30.).family("serif").properties();
        assert_eq!(p.get("size"), Some(&Value::Float(30.)));
        assert_eq!(p.get("family"), Some(&Value::from("serif")));
        let p = Font::new().family("serif").name("Times").properties();
        assert_eq!(p.get("family"), Some(&Value::from("Times")));
    }

    #[test]
    fn legend_prop_is_a_dict() {
        let l = Legend::new().loc("best").frameon(false)
            .font(&Font::new().size(30.).family("serif"));
        match l.kwargs().get("prop") {
            Some(Value::Dict(d)) => assert_eq!(d.len(), 2),
            v => panic!("unexpected prop {:?}", v),
        }
        assert_eq!(l.kwargs().get("frameon"), Some(&Value::Bool(false)));
    }

    #[test]
    fn tick_format_sci() {
        let t = TickFormat::new().use_offset(false).sci(-3, 3);
        assert_eq!(t.kwargs().get("scilimits"), Some(&Value::IntPair(-3, 3)));
        assert_eq!(t.kwargs().get("style"), Some(&Value::from("sci")));
    }

    #[test]
    fn adjust_margins() {
        let a = Adjust::new().left(0.15).bottom(0.12);
        assert_eq!(a.kwargs().keys().collect::<Vec<_>>(), ["left", "bottom"]);
    }

    #[test]
    fn rgba_display() {
        let c = Rgba::new(1., 0.5, 0.0416, 1.);
        assert_eq!(c.to_string(), "( 1.00, 0.50, 0.04, 1.00)");
    }
}
