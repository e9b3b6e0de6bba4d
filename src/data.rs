//! Synthetic data of the gallery figures.

use ndarray::{Array2, Zip};

/// `n` evenly spaced samples of \[`a`, `b`\].  The last sample is
/// exactly `b`.
pub fn linspace(a: f64, b: f64, n: usize) -> Vec<f64> {
    match n {
        0 => vec![],
        1 => vec![a],
        _ => {
            let step = (b - a) / (n - 1) as f64;
            let mut v: Vec<f64> = (0 .. n).map(|i| a + i as f64 * step).collect();
            v[n - 1] = b;
            v
        }
    }
}

/// Evenly spaced samples of the half-open interval \[`start`, `stop`).
///
/// The spacing is the rounded difference `(start + step) - start`, and
/// the samples are `start + i * spacing`, as numpy fills its ranges.
/// Samples landing near zero thus keep the rounding error instead of
/// being exactly `0.0`.
pub fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    let n = ((stop - start) / step).ceil();
    if !(n.is_finite() && n > 0.) {
        return vec![];
    }
    let second = start + step;
    let delta = second - start;
    (0 .. n as usize).map(|i| match i {
        0 => start,
        1 => second,
        _ => start + i as f64 * delta,
    }).collect()
}

pub fn radians(deg: &[f64]) -> Vec<f64> {
    deg.iter().map(|d| d.to_radians()).collect()
}

pub fn scaled(v: &[f64], k: f64) -> Vec<f64> {
    v.iter().map(|x| k * x).collect()
}

/// Affine rescaling sending the first value to 0 and the last one
/// to 1.
pub fn normalize(v: &[f64]) -> Vec<f64> {
    match (v.first(), v.last()) {
        (Some(&first), Some(&last)) => {
            v.iter().map(|x| (x - first) / (last - first)).collect()
        }
        _ => vec![],
    }
}

/// Angles (in degrees) and the values plotted against them.
#[derive(Debug, Clone)]
pub struct Samples {
    pub angle: Vec<f64>,
    pub sin: Vec<f64>,
    pub cos: Vec<f64>,
    /// Error bar half-length of each value.
    pub error: Vec<f64>,
}

impl Samples {
    /// 100 angles on \[-180°, 180°\].
    pub fn new() -> Self {
        let angle = linspace(-180., 180., 100);
        let rad = radians(&angle);
        let sin = rad.iter().map(|x| x.sin()).collect();
        let cos = rad.iter().map(|x| x.cos()).collect();
        let error = vec![0.1; angle.len()];
        Samples { angle, sin, cos, error }
    }
}

impl Default for Samples {
    fn default() -> Self { Self::new() }
}

/// Coordinate matrices of a rectangular grid (`xy` indexing): rows
/// follow `y` and columns follow `x`.
#[derive(Debug, Clone)]
pub struct Mesh {
    pub x: Array2<f64>,
    pub y: Array2<f64>,
}

impl Mesh {
    pub fn new(x: &[f64], y: &[f64]) -> Self {
        let shape = (y.len(), x.len());
        Mesh {
            x: Array2::from_shape_fn(shape, |(_, j)| x[j]),
            y: Array2::from_shape_fn(shape, |(i, _)| y[i]),
        }
    }

    pub fn shape(&self) -> (usize, usize) { self.x.dim() }

    /// Evaluate `f(x, y)` on every node.
    pub fn map(&self, f: impl Fn(f64, f64) -> f64) -> Array2<f64> {
        Zip::from(&self.x).and(&self.y).map_collect(|&x, &y| f(x, y))
    }

    /// `1 / (x² + y²)`, infinite on a node at the origin.
    pub fn inverse_square(&self) -> Array2<f64> {
        self.map(|x, y| 1. / (x * x + y * y))
    }
}

/// A curve in space.
#[derive(Debug, Clone)]
pub struct Curve3 {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
}

impl Curve3 {
    /// Helix of `n` points winding 4 times around the z-axis for
    /// z ∈ \[-2, 2\], at distance `z² + 1` from it.
    pub fn conical_helix(n: usize) -> Self {
        use std::f64::consts::PI;
        let theta = linspace(-4. * PI, 4. * PI, n);
        let z = linspace(-2., 2., n);
        let r: Vec<f64> = z.iter().map(|z| z * z + 1.).collect();
        let x = r.iter().zip(&theta).map(|(r, t)| r * t.sin()).collect();
        let y = r.iter().zip(&theta).map(|(r, t)| r * t.cos()).collect();
        Curve3 { x, y, z }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_endpoints() {
        let v = linspace(-180., 180., 100);
        assert_eq!(v.len(), 100);
        assert_eq!(v[0], -180.);
        assert_eq!(v[99], 180.);
        assert!((v[1] - v[0] - 360. / 99.).abs() < 1e-12);
        assert_eq!(linspace(1., 2., 1), [1.]);
        assert!(linspace(1., 2., 0).is_empty());
    }

    #[test]
    fn arange_lengths() {
        let d = arange(10., 101., 5.);
        assert_eq!(d.len(), 19);
        assert_eq!(d[0], 10.);
        assert_eq!(d[18], 100.);
        assert_eq!(arange(-2., 2., 0.01).len(), 400);
        assert_eq!(arange(-3., 3., 0.05).len(), 120);
        assert!(arange(1., 0., 0.5).is_empty());
        assert!(arange(0., 1., 0.).is_empty());
    }

    #[test]
    fn arange_keeps_rounding_near_zero() {
        let x = arange(-2., 2., 0.01);
        assert_eq!(x[1], -2. + 0.01);
        assert_eq!(x[200], 1.7763568394002505e-15);
        let y = arange(-3., 3., 0.05);
        assert_eq!(y[60], -1.0658141036401503e-14);
        let m = Mesh::new(&x, &y);
        assert!(m.inverse_square().iter().all(|z| z.is_finite()));
    }

    #[test]
    fn normalize_first_and_last() {
        let n = normalize(&arange(10., 101., 5.));
        assert_eq!(n[0], 0.);
        assert_eq!(n[n.len() - 1], 1.);
        assert!((n[1] - 5. / 90.).abs() < 1e-15);
        assert!(normalize(&[]).is_empty());
    }

    #[test]
    fn samples() {
        let s = Samples::new();
        assert_eq!(s.sin.len(), 100);
        assert!(s.sin[0].abs() < 1e-12);
        assert!((s.cos[0] + 1.).abs() < 1e-12);
        assert!(s.error.iter().all(|&e| e == 0.1));
        assert_eq!(scaled(&s.cos, 10.)[0], 10. * s.cos[0]);
    }

    #[test]
    fn meshgrid_xy_indexing() {
        let m = Mesh::new(&[1., 2., 3.], &[10., 20.]);
        assert_eq!(m.shape(), (2, 3));
        assert_eq!(m.x.row(1).to_vec(), [1., 2., 3.]);
        assert_eq!(m.y.column(2).to_vec(), [10., 20.]);
        let z = m.map(|x, y| x + y);
        assert_eq!(z[[1, 0]], 21.);
    }

    #[test]
    fn inverse_square_field() {
        let m = Mesh::new(&[-1., 0., 1.], &[0., 2.]);
        let z = m.inverse_square();
        assert_eq!(z[[0, 0]], 1.);
        assert!(z[[0, 1]].is_infinite());
        assert_eq!(z[[1, 1]], 0.25);
    }

    #[test]
    fn helix_radius() {
        let c = Curve3::conical_helix(100);
        assert_eq!(c.x.len(), 100);
        for i in [0, 37, 99] {
            let r = (c.x[i].powi(2) + c.y[i].powi(2)).sqrt();
            assert!((r - (c.z[i].powi(2) + 1.)).abs() < 1e-12);
        }
        assert_eq!(c.z[99], 2.);
    }
}
