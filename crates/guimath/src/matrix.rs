//! 3D affine transformation matrices.

use std::fmt;
use std::ops::Mul;

use approx::AbsDiffEq;

use crate::{EPSILON, Float, VectorF};

/// Number of rows stored. The implicit fourth row is always `[0, 0, 0, 1]`.
const ROWS: usize = 3;
/// Number of columns stored. The fourth column is the translation.
const COLS: usize = 4;

/// 3D affine transformation, stored as the top three rows of a 4x4 matrix.
/// Indexing the implicit bottom row returns the corresponding element of the
/// identity matrix.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Matrix {
    /// Elements stored in **column-major** order.
    elems: [Float; ROWS * COLS],
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENT
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS as u8 {
            let [a, b, c, d] = [0, 1, 2, 3].map(|col| self.get(col, row));
            writeln!(f, "[{a}, {b}, {c}, {d}]")?;
        }
        Ok(())
    }
}

impl Matrix {
    /// Identity transformation.
    pub const IDENT: Self = Self::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
    ]);

    /// Constructs a matrix from three rows of four elements. Each row computes
    /// one output coordinate as `row[0]*x + row[1]*y + row[2]*z + row[3]`.
    ///
    /// ```
    /// # use guimath::prelude::*;
    /// let m = Matrix::from_rows([
    ///     [1.0, 0.0, 0.0, 5.0],
    ///     [0.0, 1.0, 0.0, 0.0],
    ///     [0.0, 0.0, 1.0, 0.0],
    /// ]);
    /// assert_eq!(m.apply(VectorF::ZERO), VectorF::new(5.0, 0.0, 0.0));
    /// ```
    pub const fn from_rows(rows: [[Float; COLS]; ROWS]) -> Self {
        let mut elems = [0.0; ROWS * COLS];
        let mut col = 0;
        while col < COLS {
            let mut row = 0;
            while row < ROWS {
                elems[col * ROWS + row] = rows[row][col];
                row += 1;
            }
            col += 1;
        }
        Self { elems }
    }

    /// Constructs a translation.
    pub fn translate(v: VectorF) -> Self {
        Self::from_rows([
            [1.0, 0.0, 0.0, v.x],
            [0.0, 1.0, 0.0, v.y],
            [0.0, 0.0, 1.0, v.z],
        ])
    }
    /// Constructs a uniform scaling.
    pub fn scale(s: Float) -> Self {
        Self::scale_xyz(VectorF::splat(s))
    }
    /// Constructs a nonuniform scaling.
    pub fn scale_xyz(v: VectorF) -> Self {
        Self::from_rows([
            [v.x, 0.0, 0.0, 0.0],
            [0.0, v.y, 0.0, 0.0],
            [0.0, 0.0, v.z, 0.0],
        ])
    }
    /// Constructs a counterclockwise rotation around the X axis (from +Y
    /// toward +Z).
    pub fn rotate_x(angle: Float) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, -s, 0.0],
            [0.0, s, c, 0.0],
        ])
    }
    /// Constructs a counterclockwise rotation around the Y axis (from +Z
    /// toward +X).
    pub fn rotate_y(angle: Float) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
        ])
    }
    /// Constructs a counterclockwise rotation around the Z axis (from +X
    /// toward +Y).
    pub fn rotate_z(angle: Float) -> Self {
        let (s, c) = angle.sin_cos();
        Self::from_rows([
            [c, -s, 0.0, 0.0],
            [s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
        ])
    }

    /// Returns an element from the matrix. Elements of the implicit bottom row
    /// are taken from the identity matrix.
    ///
    /// # Panics
    ///
    /// Panics if `col >= 4` or `row >= 4`.
    pub fn get(&self, col: u8, row: u8) -> Float {
        assert!((col as usize) < COLS, "column {col} out of range");
        match row as usize {
            r if r < ROWS => self.elems[col as usize * ROWS + r],
            ROWS => (col as usize == COLS - 1) as u8 as Float,
            _ => panic!("row {row} out of range"),
        }
    }

    /// Returns the transformation that applies `self` first and then `rhs`.
    ///
    /// This reads left to right: `a.concat(&b).concat(&c)` applies `a`, then
    /// `b`, then `c`.
    #[must_use]
    pub fn concat(&self, rhs: &Matrix) -> Matrix {
        rhs * self
    }

    /// Applies the transformation to a point.
    pub fn apply(&self, p: VectorF) -> VectorF {
        let [x, y, z] = [0, 1, 2].map(|row| {
            self.get(0, row) * p.x
                + self.get(1, row) * p.y
                + self.get(2, row) * p.z
                + self.get(3, row)
        });
        VectorF::new(x, y, z)
    }
}

impl Mul for &Matrix {
    type Output = Matrix;

    /// Composes two transformations. `a * b` applies `b` first.
    fn mul(self, rhs: Self) -> Self::Output {
        let mut elems = [0.0; ROWS * COLS];
        for col in 0..COLS as u8 {
            for row in 0..ROWS as u8 {
                elems[col as usize * ROWS + row as usize] =
                    (0..COLS as u8).map(|k| self.get(k, row) * rhs.get(col, k)).sum();
            }
        }
        Matrix { elems }
    }
}
impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Self::Output {
        &self * &rhs
    }
}
impl Mul<VectorF> for &Matrix {
    type Output = VectorF;

    fn mul(self, rhs: VectorF) -> Self::Output {
        self.apply(rhs)
    }
}
impl Mul<VectorF> for Matrix {
    type Output = VectorF;

    fn mul(self, rhs: VectorF) -> Self::Output {
        self.apply(rhs)
    }
}

impl AbsDiffEq for Matrix {
    type Epsilon = Float;

    fn default_epsilon() -> Self::Epsilon {
        EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        std::iter::zip(&self.elems, &other.elems).all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}
