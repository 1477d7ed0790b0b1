//! Dense row-major matrix.
//!
//! `Matrix` is the only numeric container used by the network. It stores `rows * cols` `f64`
//! values contiguously and exposes the handful of linear-algebra operations backpropagation
//! needs.
//!
//! Two flavours of operation exist:
//!
//! - in place (`add`, `hadamard`, `scale`, `map`, `randomize`): mutate `self`
//! - by value (`subtract`, `transpose`, `multiply`): return a freshly allocated matrix
//!
//! Binary operations validate shapes and return [`Error::DimensionMismatch`] instead of
//! truncating or broadcasting. Every matrix owns its buffer; `clone` copies the values.

use std::ops::{Index, IndexMut};

use rand::Rng;

use crate::error::Shape;
use crate::matmul::gemm_f64;
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    /// Row-major, `data.len() == rows * cols`.
    data: Vec<f64>,
}

impl Matrix {
    /// Zero-filled `rows x cols` matrix.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        Ok(Self {
            rows,
            cols,
            data: vec![0.0; len],
        })
    }

    /// Build a matrix from a flat row-major buffer.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        if data.len() != len {
            return Err(Error::InvalidShape(format!(
                "data length {} does not match {rows}x{cols}",
                data.len()
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a matrix from per-row vectors (copied into contiguous storage).
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let len = checked_len(rows.len(), cols)?;

        let mut data = Vec::with_capacity(len);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(Error::InvalidShape(format!(
                    "row {i} has len {}, expected {cols}",
                    row.len()
                )));
            }
            data.extend_from_slice(row);
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Lift a vector into an `n x 1` column matrix.
    pub fn from_column(values: &[f64]) -> Result<Self> {
        Self::from_vec(values.len(), 1, values.to_vec())
    }

    /// `n x n` identity.
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::new(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        Ok(m)
    }

    /// `rows x cols` matrix with every cell drawn uniformly from `[-1, 1]`.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Result<Self> {
        let mut m = Self::new(rows, cols)?;
        m.randomize(rng);
        Ok(m)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn shape(&self) -> Shape {
        Shape::new(self.rows, self.cols)
    }

    /// Row-major view of the values.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        if row < self.rows && col < self.cols {
            Some(self.data[row * self.cols + col])
        } else {
            None
        }
    }

    /// Flatten to a row-major vector of length `rows * cols`.
    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Overwrite every cell with a uniform sample from `[-1, 1]`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for v in &mut self.data {
            *v = rng.gen_range(-1.0..=1.0);
        }
    }

    /// `self[i][j] += other[i][j]`.
    pub fn add(&mut self, other: &Matrix) -> Result<()> {
        self.ensure_same_shape(other, "add")?;
        for (a, &b) in self.data.iter_mut().zip(&other.data) {
            *a += b;
        }
        Ok(())
    }

    /// Elementwise `a - b` into a new matrix.
    pub fn subtract(a: &Matrix, b: &Matrix) -> Result<Matrix> {
        a.ensure_same_shape(b, "subtract")?;
        let data = a.data.iter().zip(&b.data).map(|(x, y)| x - y).collect();
        Ok(Matrix {
            rows: a.rows,
            cols: a.cols,
            data,
        })
    }

    /// New matrix with rows and columns swapped.
    pub fn transpose(&self) -> Matrix {
        let mut data = vec![0.0; self.data.len()];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Matrix {
            rows: self.cols,
            cols: self.rows,
            data,
        }
    }

    /// Matrix product `a * b`.
    ///
    /// Requires `a.cols() == b.rows()`; the result is `a.rows() x b.cols()`.
    pub fn multiply(a: &Matrix, b: &Matrix) -> Result<Matrix> {
        if a.cols != b.rows {
            return Err(Error::mismatch("multiply", a.shape(), b.shape()));
        }

        let mut out = vec![0.0; a.rows * b.cols];
        gemm_f64(a.rows, b.cols, a.cols, &a.data, &b.data, &mut out);

        Ok(Matrix {
            rows: a.rows,
            cols: b.cols,
            data: out,
        })
    }

    /// Hadamard (elementwise) product in place: `self[i][j] *= other[i][j]`.
    pub fn hadamard(&mut self, other: &Matrix) -> Result<()> {
        self.ensure_same_shape(other, "hadamard")?;
        for (a, &b) in self.data.iter_mut().zip(&other.data) {
            *a *= b;
        }
        Ok(())
    }

    /// `self[i][j] *= s`.
    pub fn scale(&mut self, s: f64) {
        for v in &mut self.data {
            *v *= s;
        }
    }

    /// `self[i][j] = f(self[i][j])`.
    pub fn map<F>(&mut self, f: F)
    where
        F: Fn(f64) -> f64,
    {
        for v in &mut self.data {
            *v = f(*v);
        }
    }

    #[inline]
    fn ensure_same_shape(&self, other: &Matrix, op: &'static str) -> Result<()> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(Error::mismatch(op, self.shape(), other.shape()));
        }
        Ok(())
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        assert!(
            row < self.rows && col < self.cols,
            "index ({row}, {col}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[row * self.cols + col]
    }
}

fn checked_len(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(Error::InvalidShape(format!(
            "matrix dims must be > 0, got {rows}x{cols}"
        )));
    }
    rows.checked_mul(cols)
        .ok_or_else(|| Error::InvalidShape(format!("matrix shape {rows}x{cols} overflows")))
}
