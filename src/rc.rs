//! Runtime configuration (`rcParams`).
//!
//! Parameters are grouped as in a `matplotlibrc` file: the group
//! "lines" holds "lines.linewidth", "lines.color",...  They affect the
//! figures created after [`Rc::apply`].

use pyo3::prelude::*;
use tracing::debug;
use crate::{
    MATPLOTLIB,
    Error,
    options::{Kwargs, Value},
};

/// Parameters of one configuration group, see [`rc`].
#[derive(Debug, Clone)]
pub struct Rc {
    group: String,
    params: Kwargs,
}

/// Start setting parameters of the configuration `group`.
///
/// ```no_run
/// use perfect_plots as plt;
/// plt::rc("lines").set("linewidth", 2.).set("color", "r").apply()?;
/// plt::rc("axes.formatter").set("limits", (-3, 3)).apply()?;
/// # Ok::<(), plt::Error>(())
/// ```
pub fn rc(group: &str) -> Rc {
    Rc { group: group.to_owned(), params: Kwargs::new() }
}

impl Rc {
    /// Set `group.key` to `v`.
    #[must_use]
    pub fn set(mut self, key: &str, v: impl Into<Value>) -> Self {
        self.params.set(format!("{}.{}", self.group, key), v);
        self
    }

    pub fn group(&self) -> &str { &self.group }

    /// The full names of the parameters and their values.
    pub fn params(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.params.iter()
    }

    /// Write the parameters to Matplotlib's `rcParams`.  The first
    /// rejected parameter is reported by [`Error::RcParam`]; the
    /// previous ones remain set.
    pub fn apply(&self) -> Result<(), Error> {
        let mpl = pymod!(MATPLOTLIB)?;
        Python::with_gil(|py| {
            let rc_params = mpl.bind(py).getattr("rcParams")?;
            for (key, v) in self.params.iter() {
                debug!(key, value = ?v, "rcParams");
                rc_params.set_item(key, v.to_py(py)?)
                    .map_err(|source| Error::RcParam {
                        key: key.to_owned(), source })?;
            }
            Ok(())
        })
    }
}

/// Restore Matplotlib's default configuration.
pub fn rcdefaults() -> Result<(), Error> {
    let mpl = pymod!(MATPLOTLIB)?;
    Python::with_gil(|py| {
        mpl.bind(py).call_method0("rcdefaults")?;
        Ok(())
    })
}
