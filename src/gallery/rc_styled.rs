//! Figures 7 to 9: the styling is set once in the runtime
//! configuration and the figures use Matplotlib's defaults.

use std::path::{Path, PathBuf};
use tracing::info;
use crate as plt;
use crate::{
    Error,
    data::{scaled, Samples},
};
use super::{explicit::colormapped_series, finish, save_dialog_dir};

/// The configuration shared by the figures of this module.
pub fn style(dir: &Path) -> Vec<plt::Rc> {
    vec![
        plt::rc("figure").set("figsize", (8., 6.)).set("dpi", 100.)
            .set("autolayout", true),
        plt::rc("lines").set("marker", "o").set("color", "r")
            .set("linewidth", 2.).set("markersize", 6.),
        plt::rc("errorbar").set("capsize", 2.),
        plt::rc("legend").set("loc", "best").set("frameon", false)
            .set("fontsize", 16.),
        plt::rc("axes").set("linewidth", 2.).set("titleweight", "bold")
            .set("labelsize", "large"),
        plt::rc("xtick").set("labelsize", "large"),
        plt::rc("ytick").set("labelsize", "large"),
        plt::rc("axes.formatter").set("limits", (-3, 3))
            .set("offset_threshold", 6),
        plt::rc("font").set("family", "serif").set("style", "normal")
            .set("weight", "bold").set("size", 16.)
            .set("serif", ["Times New Roman", "Times", "DejaVu Serif"]),
        save_dialog_dir(dir),
    ]
}

/// Apply [`style`].
pub fn apply(dir: &Path) -> Result<(), Error> {
    for rc in style(dir) {
        rc.apply()?;
    }
    info!(dir = %dir.display(), "runtime configuration set");
    Ok(())
}

/// Figure 7: single axes with error bars.
pub fn errorbars(dir: &Path, s: &Samples) -> Result<PathBuf, Error> {
    let (fig, [[mut ax]]) = plt::subplots()?;
    ax.errorbar(&s.angle, &s.sin, &s.error).label("sin").plot()?;
    ax.errorbar(&s.angle, &s.cos, &s.error).label("cos").plot()?;
    ax.axhline(0.).color("k").draw()?;
    ax.set_xlim(-180., 180.)?
        .set_ylim(-1.5, 1.5)?
        .legend()?
        .set_xlabel("Angle [Deg]")?
        .set_ylabel("Value")?
        .set_title("A Perfect Plot\n $y = \\sin(x)$")?;
    finish(fig, dir, 7)
}

/// Figure 8: two stacked axes, the lower one with a second y-axis.
pub fn stacked(dir: &Path, s: &Samples) -> Result<PathBuf, Error> {
    let (fig, [[mut ax1], [mut ax2]]) = plt::subplots()?;

    ax1.text(-0.15, 1.07, "(a)").axes_coords().draw()?;
    ax1.errorbar(&s.angle, &s.sin, &s.error).label("sin").plot()?;
    ax1.errorbar(&s.angle, &s.cos, &s.error).label("cos").plot()?;
    ax1.set_xlim(-180., 180.)?
        .set_ylim(-1.5, 1.5)?
        .legend()?
        .set_ylabel("Value")?
        .set_ylabel_coords(-0.10, 0.5)?
        .set_xticks(&[])?;

    ax2.text(-0.15, 1.07, "(b)").axes_coords().draw()?;
    ax2.xy(&s.angle, &s.sin).fmt("y-").label("sin").plot()?;
    ax2.set_xlim(-180., 180.)?
        .set_ylim(-1.5, 1.5)?
        .set_xlabel("Angle [Deg]")?
        .set_ylabel("sin")?
        .set_ylabel_coords(-0.10, 0.5)?;

    let mut ax2b = ax2.twinx()?;
    let cos10 = scaled(&s.cos, 10.);
    ax2b.xy(&s.angle, &cos10)
        .fmt("-").markersize(12.).linewidth(4.).label("10*cos").plot()?;
    ax2b.set_xlim(-180., 180.)?
        .set_ylim(-15., 15.)?
        .set_ylabel("10*cos")?;
    finish(fig, dir, 8)
}

/// Figure 9: a family of curves colored by a colormap.
pub fn colormapped(dir: &Path, s: &Samples) -> Result<PathBuf, Error> {
    let cmap_name = "viridis";
    let (fig, [[mut ax]]) = plt::subplots()?;
    let sm = colormapped_series(&mut ax, s, cmap_name)?;
    fig.colorbar(&sm, &ax)?.set_label("variation [unit]")?;
    ax.set_xlabel("Angle [Deg]")?
        .set_ylabel("Value")?
        .set_title(cmap_name)?;
    finish(fig, dir, 9)
}

/// Apply the configuration, render figures 7 to 9 into `dir` and
/// restore Matplotlib's defaults, also when rendering fails.
pub fn render(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    let files = apply(dir).and_then(|()| {
        let s = Samples::new();
        Ok(vec![
            errorbars(dir, &s)?,
            stacked(dir, &s)?,
            colormapped(dir, &s)?,
        ])
    });
    let restored = plt::rcdefaults();
    let files = files?;
    restored?;
    Ok(files)
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn style_keys() {
        let style = style(Path::new("plots"));
        let keys: Vec<String> = style.iter()
            .flat_map(|rc| rc.params().map(|(k, _)| k.to_owned()))
            .collect();
        assert!(keys.contains(&"axes.formatter.offset_threshold".to_owned()));
        assert!(keys.contains(&"errorbar.capsize".to_owned()));
        assert_eq!(keys.len(), 24);
        let font = style.iter().find(|rc| rc.group() == "font").unwrap();
        let serif = font.params().find(|(k, _)| *k == "font.serif").unwrap();
        assert_eq!(serif.1, &Value::Strs(vec![
            "Times New Roman".into(), "Times".into(), "DejaVu Serif".into()]));
    }
}
