use super::header::Header;

/// Parallelepiped spanned by a LAMMPS box.
///
/// LAMMPS restricts triclinic boxes to edge vectors of the form
/// `a = (lx, 0, 0)`, `b = (xy, ly, 0)`, `c = (xz, yz, lz)` anchored at
/// `(xlo, ylo, zlo)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationCell {
    pub origin: [f32; 3],
    pub a: [f32; 3],
    pub b: [f32; 3],
    pub c: [f32; 3],
}

impl SimulationCell {
    pub fn from_header(header: &Header) -> Self {
        Self {
            origin: [header.xlo, header.ylo, header.zlo],
            a: [header.xhi - header.xlo, 0.0, 0.0],
            b: [header.xy, header.yhi - header.ylo, 0.0],
            c: [header.xz, header.yz, header.zhi - header.zlo],
        }
    }

    #[inline]
    pub fn vectors(&self) -> [[f32; 3]; 3] {
        [self.a, self.b, self.c]
    }

    pub fn center(&self) -> [f32; 3] {
        std::array::from_fn(|k| self.origin[k] + 0.5 * (self.a[k] + self.b[k] + self.c[k]))
    }

    /// Edge lengths `|a|`, `|b|`, `|c|`.
    pub fn lengths(&self) -> [f64; 3] {
        [norm(&self.a), norm(&self.b), norm(&self.c)]
    }

    /// Cell angles `(α, β, γ)` in degrees: α between b and c, β between a
    /// and c, γ between a and b. A degenerate (zero-length) edge yields NaN.
    pub fn angles(&self) -> [f64; 3] {
        [
            angle_between(&self.b, &self.c),
            angle_between(&self.a, &self.c),
            angle_between(&self.a, &self.b),
        ]
    }

    #[inline]
    pub fn is_orthogonal(&self) -> bool {
        self.b[0] == 0.0 && self.c[0] == 0.0 && self.c[1] == 0.0
    }

    pub fn volume(&self) -> f64 {
        // Triangular edge matrix: the determinant is the diagonal product.
        f64::from(self.a[0]) * f64::from(self.b[1]) * f64::from(self.c[2])
    }

    /// Axis-aligned `(min, max)` corners enclosing all eight cell vertices.
    pub fn bounding_box(&self) -> ([f32; 3], [f32; 3]) {
        let mut min = self.origin;
        let mut max = self.origin;
        for mask in 1u8..8 {
            for k in 0..3 {
                let mut v = self.origin[k];
                if mask & 1 != 0 {
                    v += self.a[k];
                }
                if mask & 2 != 0 {
                    v += self.b[k];
                }
                if mask & 4 != 0 {
                    v += self.c[k];
                }
                min[k] = min[k].min(v);
                max[k] = max[k].max(v);
            }
        }
        (min, max)
    }
}

fn dot(u: &[f32; 3], v: &[f32; 3]) -> f64 {
    (0..3).map(|k| f64::from(u[k]) * f64::from(v[k])).sum()
}

fn norm(v: &[f32; 3]) -> f64 {
    dot(v, v).sqrt()
}

fn angle_between(u: &[f32; 3], v: &[f32; 3]) -> f64 {
    (dot(u, v) / (norm(u) * norm(v)))
        .clamp(-1.0, 1.0)
        .acos()
        .to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn header(bounds: [f32; 6], tilt: [f32; 3]) -> Header {
        Header {
            num_atoms: 0,
            num_atom_types: 0,
            xlo: bounds[0],
            xhi: bounds[1],
            ylo: bounds[2],
            yhi: bounds[3],
            zlo: bounds[4],
            zhi: bounds[5],
            xy: tilt[0],
            xz: tilt[1],
            yz: tilt[2],
        }
    }

    #[test]
    fn orthogonal_cell_from_bounds() {
        let cell = SimulationCell::from_header(&header([1.0, 3.0, 2.0, 4.0, 5.0, 10.0], [0.0; 3]));

        assert_eq!(cell.origin, [1.0, 2.0, 5.0]);
        assert_eq!(cell.a, [2.0, 0.0, 0.0]);
        assert_eq!(cell.b, [0.0, 2.0, 0.0]);
        assert_eq!(cell.c, [0.0, 0.0, 5.0]);
        assert!(cell.is_orthogonal());
        assert!(approx_eq(cell.volume(), 20.0, 1e-9));
        assert_eq!(cell.center(), [2.0, 3.0, 7.5]);
        for angle in cell.angles() {
            assert!(approx_eq(angle, 90.0, 1e-9));
        }
    }

    #[test]
    fn triclinic_cell_places_tilts_in_edge_vectors() {
        let cell = SimulationCell::from_header(&header(
            [0.0, 10.0, 0.0, 10.0, 0.0, 10.0],
            [1.0, 2.0, 3.0],
        ));

        assert_eq!(cell.b, [1.0, 10.0, 0.0]);
        assert_eq!(cell.c, [2.0, 3.0, 10.0]);
        assert!(!cell.is_orthogonal());

        let [la, lb, lc] = cell.lengths();
        assert!(approx_eq(la, 10.0, 1e-9));
        assert!(approx_eq(lb, 101.0f64.sqrt(), 1e-9));
        assert!(approx_eq(lc, 113.0f64.sqrt(), 1e-9));

        let [_, _, gamma] = cell.angles();
        assert!(gamma < 90.0);
    }

    #[test]
    fn bounding_box_covers_skewed_vertices() {
        let cell = SimulationCell::from_header(&header(
            [0.0, 10.0, 0.0, 10.0, 0.0, 10.0],
            [-2.0, 3.0, 0.0],
        ));
        let (min, max) = cell.bounding_box();

        assert_eq!(min, [-2.0, 0.0, 0.0]);
        assert_eq!(max, [13.0, 10.0, 10.0]);
    }
}
