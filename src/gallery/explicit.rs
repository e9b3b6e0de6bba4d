//! Figures 1 to 6: every call states its own styling, so the result
//! does not depend on the runtime configuration (apart from the
//! colors of unstyled lines).

use std::path::{Path, PathBuf};
use ndarray::Array2;
use tracing::info;
use crate as plt;
use crate::{
    Adjust, Axes, BBox, Error, Font, Legend, Mappable, ScalarMappable,
    TickFormat,
    data::{arange, normalize, scaled, Curve3, Mesh, Samples},
};
use super::{finish, save_dialog_dir};

const TIMES: &str = "Times New Roman";
const FRACTION: &str = r"$\frac{I_{(013)} - I_{(103)}}{I_{(013)} + I_{(103)}}$";

fn label_font() -> Font {
    Font::new().size(32.).bold().name(TIMES)
}

fn tick_font() -> Font {
    Font::new().size(25.).name(TIMES)
}

fn legend() -> Legend {
    Legend::new().loc("best").frameon(false)
        .font(&Font::new().size(30.).family("serif"))
}

fn tick_format() -> TickFormat {
    TickFormat::new().use_offset(false).sci(-3, 3)
}

fn margins() -> Adjust {
    Adjust::new().left(0.15).bottom(0.12)
}

/// Draw the sine and cosine with their error bars.
fn sin_cos_errorbars(ax: &mut Axes, s: &Samples) -> Result<(), Error> {
    ax.errorbar(&s.angle, &s.sin, &s.error)
        .fmt("g-o").markersize(12.).linewidth(2.).label("sin").plot()?;
    ax.errorbar(&s.angle, &s.cos, &s.error)
        .fmt("m-s").markersize(12.).linewidth(2.).label("cos").plot()
}

/// Panel letter above the upper left corner of `ax`.
fn panel_letter(ax: &mut Axes, letter: &str) -> Result<(), Error> {
    ax.text(-0.15, 1.07, letter).axes_coords().font(&label_font()).draw()
}

/// Figure 1: single axes with error bars.
pub fn errorbars(dir: &Path, s: &Samples) -> Result<PathBuf, Error> {
    let (fig, [[mut ax]]) = plt::subplots()?;
    fig.set_size_inches(12., 10.)?.set_dpi(60.)?;
    sin_cos_errorbars(&mut ax, s)?;
    ax.axhline(0.).color("k").draw()?;
    ax.set_xlim(-180., 180.)?
        .set_ylim(-1.5, 1.5)?
        .set_spines_linewidth(2.)?
        .legend_with(&legend())?
        .set_xlabel_with("Angle [Deg]", &label_font())?
        .set_ylabel_with("Value", &label_font().italic())?
        .set_title_with("A Perfect Plot\n $y = \\sin(x)$", &label_font())?
        .set_xticklabels_font(&tick_font())?
        .set_yticklabels_font(&tick_font())?
        .ticklabel_format(&tick_format())?;
    fig.subplots_adjust(&margins())?;
    finish(fig, dir, 1)
}

/// Figure 2: two stacked axes, the lower one with a second y-axis.
pub fn stacked(dir: &Path, s: &Samples) -> Result<PathBuf, Error> {
    let (fig, [[mut ax1], [mut ax2]]) = plt::subplots()?;
    fig.set_size_inches(16., 12.)?.set_dpi(60.)?;

    panel_letter(&mut ax1, "(a)")?;
    sin_cos_errorbars(&mut ax1, s)?;
    ax1.set_xlim(-180., 180.)?
        .set_ylim(-1.5, 1.5)?
        .legend_with(&legend())?
        .set_ylabel_with("Value", &label_font())?
        .set_ylabel_coords(-0.10, 0.5)?
        .set_xticks(&[])?
        .set_yticklabels_font(&tick_font())?;

    panel_letter(&mut ax2, "(b)")?;
    ax2.xy(&s.angle, &s.sin)
        .fmt("y-").markersize(12.).linewidth(4.).label("sin").plot()?;
    ax2.set_xlim(-180., 180.)?
        .set_ylim(-1.5, 1.5)?
        .set_xlabel_with("Angle [Deg]", &label_font())?
        .set_ylabel_with("sin", &label_font())?
        .set_ylabel_coords(-0.10, 0.5)?
        .set_xticklabels_font(&tick_font())?
        .set_yticklabels_font(&tick_font())?;

    let mut ax2b = ax2.twinx()?;
    let cos10 = scaled(&s.cos, 10.);
    ax2b.xy(&s.angle, &cos10)
        .fmt("-").markersize(12.).linewidth(4.).label("10*cos").plot()?;
    ax2b.set_xlim(-180., 180.)?
        .set_ylim(-15., 15.)?
        .set_ylabel_with("10*cos", &label_font())?
        .set_yticklabels_font(&tick_font())?;
    finish(fig, dir, 2)
}

/// Multiples of the sine, colored along the colormap `cmap_name`,
/// with a colorbar for the multipliers.
pub(super) fn colormapped_series(
    ax: &mut Axes, s: &Samples, cmap_name: &str
) -> Result<ScalarMappable, Error> {
    let cmap = plt::colormap(cmap_name)?;
    let factors = arange(10., 101., 5.);
    for (k, v) in factors.iter().zip(normalize(&factors)) {
        let col = cmap.at(v)?;
        let y = scaled(&s.sin, *k);
        ax.xy(&s.angle, &y).fmt("-").linewidth(2.).color(col)
            .label(&format!("{:3.0} {}", k, col)).plot()?;
    }
    let sm = ScalarMappable::new(&cmap)?;
    sm.set_array(&factors)?;
    Ok(sm)
}

/// Figure 3: a family of curves colored by a colormap.
pub fn colormapped(dir: &Path, s: &Samples) -> Result<PathBuf, Error> {
    let cmap_name = "hot_r";
    let (fig, [[mut ax]]) = plt::subplots()?;
    fig.set_size_inches(12., 10.)?.set_dpi(60.)?;
    let sm = colormapped_series(&mut ax, s, cmap_name)?;
    ax.set_facecolor("lightblue")?;
    fig.colorbar(&sm, &ax)?
        .set_label_with("variation [unit]",
                        &Font::new().size(24.).bold().name(TIMES))?;
    ax.set_xlabel_with("Angle [Deg]", &label_font())?
        .set_ylabel_with("Value", &label_font().italic())?
        .set_title_with(cmap_name, &label_font())?
        .set_spines_linewidth(2.)?
        .set_xticklabels_font(&tick_font())?
        .set_yticklabels_font(&tick_font())?
        .ticklabel_format(&tick_format())?;
    fig.subplots_adjust(&margins())?;
    finish(fig, dir, 3)
}

/// Figure 4: a 3D parametric curve.
pub fn helix(dir: &Path) -> Result<PathBuf, Error> {
    let fig = plt::figure()?;
    fig.set_size_inches(12., 10.)?.set_dpi(60.)?;
    let mut ax = fig.add_subplot_3d()?;
    let c = Curve3::conical_helix(100);
    ax.xyz(&c.x, &c.y, &c.z).label("parametric curve").plot()?;
    let font = Font::new().size(22.);
    ax.view_init(None, Some(220.))?
        .set_xlim(-5., 5.)?
        .set_ylim(-5., 5.)?
        .set_zlim(-5., 5.)?
        .set_xlabel_with("x", &font)?
        .set_ylabel_with("y", &font)?
        .set_zlabel_with("z", &font)?
        .set_title_with("Oh how lovely", &font)?
        .legend_with(&Legend::new().loc("best").fontsize(30.).frameon(false))?;
    finish(fig, dir, 4)
}

/// The grid of figures 5 and 6.
pub fn mesh() -> Mesh {
    Mesh::new(&arange(-2., 2., 0.01), &arange(-3., 3., 0.05))
}

/// Log how the coordinate matrices of `m` are laid out.
fn report_mesh(m: &Mesh) {
    let flat = |a: &Array2<f64>| a.iter().take(30).copied().collect::<Vec<_>>();
    info!("Meshgrid:");
    info!("X[:,0]: {}", m.x.column(0));
    info!("X[0,:]: {}", m.x.row(0));
    info!("X.flatten()[:30] = {:?}", flat(&m.x));
    info!("Y.flatten()[:30] = {:?}", flat(&m.y));
}

/// Figure 5: a scalar field drawn with `pcolormesh`.
pub fn color_mesh(dir: &Path, m: &Mesh) -> Result<PathBuf, Error> {
    report_mesh(m);
    let z = m.inverse_square();
    let (fig, [[mut ax]]) = plt::subplots()?;
    fig.set_size_inches(12., 10.)?.set_dpi(60.)?;
    let qm = ax.pcolormesh(&m.x, &m.y, &z).cmap("hot_r").plot()?;
    ax.axis("image")?;
    qm.set_clim(0., 10.)?;
    let cb = fig.colorbar(&qm, &ax)?;
    ax.set_xlabel_with("Xdata", &label_font())?
        .set_ylabel_with("Ydata", &label_font())?
        .set_title_with("pcolormesh", &label_font())?;
    cb.set_label_with("Zdata", &label_font())?;
    finish(fig, dir, 5)
}

/// Figure 6: curves with a color mesh in an inset.
pub fn inset(dir: &Path, s: &Samples, m: &Mesh) -> Result<PathBuf, Error> {
    let (fig, [[mut ax]]) = plt::subplots()?;
    fig.set_size_inches(10., 8.)?.set_dpi(60.)?;
    let cols = plt::colormap("rainbow")?.sample(6)?;
    ax.xy(&s.angle, &s.sin)
        .fmt("s-").markersize(12.).linewidth(4.).color(cols[0]).label("ydata")
        .xy(&s.angle, &s.cos).color(cols[1]).label("ydata2")
        .plot()?;
    ax.axvline(s.angle[4]).color("k").linewidth(1.).draw()?;
    let legend = Legend::new().loc("upper right").frameon(false)
        .fontsize(16.).ncol(2)
        .title("Ca$_2$Ru$_{1-x}$Mn$_{x}$O$_2$").title_fontsize(20.);
    ax.legend_with(&legend)?
        .set_xlabel_with("T [K]", &label_font())?
        .set_ylabel_with("Intensity [a. u.]", &label_font())?
        .set_ylabel_coords(-0.10, 0.5)?
        .set_yticks(&[])?
        .set_xticklabels_font(&tick_font())?
        .set_yticklabels_font(&tick_font())?;

    let mut inset = fig.add_axes([0.57, 0.42, 0.3, 0.3])?;
    let z = m.inverse_square();
    let qm = inset.pcolormesh(&m.x, &m.y, &z).plot()?;
    inset.axis("image")?;
    qm.set_clim(-1., 1.)?;
    let bbox = BBox::new().facecolor("white").alpha(0.4).edgecolor("none")
        .pad(0.2).boxstyle("round");
    inset.text(0.75, 0.8, FRACTION).axes_coords().ha("center")
        .font(&Font::new().size(18.).name(TIMES)).bbox(&bbox).draw()?;
    let small = Font::new().size(14.).bold().name(TIMES);
    inset.set_xlabel_with("x || b* [\u{b5}m]", &small)?
        .set_ylabel_with("y || a* [\u{b5}m]", &small)?
        .set_xticklabels_font(&Font::new().size(10.).name(TIMES))?
        .set_yticklabels_font(&Font::new().size(10.).name(TIMES))?;
    finish(fig, dir, 6)
}

/// Render figures 1 to 6 into `dir`.
pub fn render(dir: &Path) -> Result<Vec<PathBuf>, Error> {
    save_dialog_dir(dir).apply()?;
    let s = Samples::new();
    let m = mesh();
    Ok(vec![
        errorbars(dir, &s)?,
        stacked(dir, &s)?,
        colormapped(dir, &s)?,
        helix(dir)?,
        color_mesh(dir, &m)?,
        inset(dir, &s, &m)?,
    ])
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_field_is_finite() {
        let m = mesh();
        assert_eq!(m.shape(), (120, 400));
        let z = m.inverse_square();
        assert!(z.iter().all(|v| v.is_finite()));
        assert!(z.iter().cloned().fold(0., f64::max) > 1e27);
    }
}
