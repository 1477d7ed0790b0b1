//! Contiguous training-pair storage.
//!
//! A [`Dataset`] holds `(input, target)` pairs in two row-major buffers. It is what an
//! external corpus source fills and what [`Network::fit`](crate::Network::fit) iterates.

use crate::{Error, Result};

/// A supervised dataset: inputs (X) and targets (Y).
///
/// Stored as contiguous buffers with row-major layout:
/// - `inputs.len() == len * input_dim`
/// - `targets.len() == len * target_dim`
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    inputs: Vec<f64>,
    targets: Vec<f64>,
    input_dim: usize,
    target_dim: usize,
}

impl Dataset {
    /// Empty dataset with fixed per-sample dimensions, to be filled with [`Dataset::push`].
    pub fn new(input_dim: usize, target_dim: usize) -> Result<Self> {
        validate_dims(input_dim, target_dim)?;
        Ok(Self {
            inputs: Vec::new(),
            targets: Vec::new(),
            input_dim,
            target_dim,
        })
    }

    /// Build a dataset from flat buffers.
    ///
    /// `inputs` is `(len, input_dim)` and `targets` is `(len, target_dim)`.
    pub fn from_flat(
        inputs: Vec<f64>,
        targets: Vec<f64>,
        input_dim: usize,
        target_dim: usize,
    ) -> Result<Self> {
        validate_dims(input_dim, target_dim)?;
        if inputs.len() % input_dim != 0 {
            return Err(Error::InvalidData(format!(
                "inputs length {} is not divisible by input_dim {input_dim}",
                inputs.len()
            )));
        }

        let len = inputs.len() / input_dim;
        if targets.len() != len * target_dim {
            return Err(Error::InvalidData(format!(
                "targets length {} does not match len * target_dim ({len} * {target_dim})",
                targets.len()
            )));
        }

        Ok(Self {
            inputs,
            targets,
            input_dim,
            target_dim,
        })
    }

    /// Build a dataset from per-sample rows.
    ///
    /// This is a convenience constructor (it copies into contiguous storage).
    pub fn from_rows(inputs: &[Vec<f64>], targets: &[Vec<f64>]) -> Result<Self> {
        if inputs.len() != targets.len() {
            return Err(Error::InvalidData(format!(
                "inputs/targets length mismatch: {} vs {}",
                inputs.len(),
                targets.len()
            )));
        }
        if inputs.is_empty() {
            return Err(Error::InvalidData("dataset must not be empty".to_owned()));
        }

        let mut data = Self::new(inputs[0].len(), targets[0].len())?;
        for (input, target) in inputs.iter().zip(targets) {
            data.push(input, target)?;
        }
        Ok(data)
    }

    /// Append one `(input, target)` pair.
    pub fn push(&mut self, input: &[f64], target: &[f64]) -> Result<()> {
        if input.len() != self.input_dim {
            return Err(Error::InvalidData(format!(
                "input row {} has len {}, expected {}",
                self.len(),
                input.len(),
                self.input_dim
            )));
        }
        if target.len() != self.target_dim {
            return Err(Error::InvalidData(format!(
                "target row {} has len {}, expected {}",
                self.len(),
                target.len(),
                self.target_dim
            )));
        }
        self.inputs.extend_from_slice(input);
        self.targets.extend_from_slice(target);
        Ok(())
    }

    #[inline]
    /// Returns the number of samples.
    pub fn len(&self) -> usize {
        self.inputs.len() / self.input_dim
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }

    #[inline]
    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    #[inline]
    pub fn target_dim(&self) -> usize {
        self.target_dim
    }

    #[inline]
    /// Returns the `idx`-th input row.
    ///
    /// Panics if `idx >= len`.
    pub fn input(&self, idx: usize) -> &[f64] {
        let start = idx * self.input_dim;
        &self.inputs[start..start + self.input_dim]
    }

    #[inline]
    /// Returns the `idx`-th target row.
    ///
    /// Panics if `idx >= len`.
    pub fn target(&self, idx: usize) -> &[f64] {
        let start = idx * self.target_dim;
        &self.targets[start..start + self.target_dim]
    }

    /// Iterate `(input, target)` pairs in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (&[f64], &[f64])> + '_ {
        self.inputs
            .chunks_exact(self.input_dim)
            .zip(self.targets.chunks_exact(self.target_dim))
    }
}

fn validate_dims(input_dim: usize, target_dim: usize) -> Result<()> {
    if input_dim == 0 {
        return Err(Error::InvalidData("input_dim must be > 0".to_owned()));
    }
    if target_dim == 0 {
        return Err(Error::InvalidData("target_dim must be > 0".to_owned()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_from_flat_validates_shapes() {
        let ok = Dataset::from_flat(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0], 2, 1);
        assert!(ok.is_ok());

        let err = Dataset::from_flat(vec![0.0, 1.0, 2.0], vec![0.0], 2, 1);
        assert!(err.is_err());
        let err = Dataset::from_flat(vec![0.0, 1.0], vec![0.0, 1.0], 2, 1);
        assert!(err.is_err());
    }

    #[test]
    fn from_rows_keeps_pairs_aligned() {
        let xs = vec![vec![0.0, 1.0], vec![1.0, 0.0], vec![1.0, 1.0]];
        let ys = vec![vec![1.0], vec![1.0], vec![0.0]];
        let data = Dataset::from_rows(&xs, &ys).unwrap();

        assert_eq!(data.len(), 3);
        assert_eq!((data.input_dim(), data.target_dim()), (2, 1));
        assert_eq!(data.input(2), &[1.0, 1.0]);
        assert_eq!(data.target(2), &[0.0]);

        let pairs: Vec<_> = data.iter().collect();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[1], (&[1.0, 0.0][..], &[1.0][..]));
    }

    #[test]
    fn from_rows_rejects_ragged_or_empty_rows() {
        assert!(Dataset::from_rows(&[], &[]).is_err());
        assert!(Dataset::from_rows(&[vec![1.0]], &[]).is_err());

        let xs = vec![vec![0.0, 1.0], vec![1.0]];
        let ys = vec![vec![1.0], vec![0.0]];
        assert!(Dataset::from_rows(&xs, &ys).is_err());
    }

    #[test]
    fn push_rejects_wrong_lengths_without_mutating() {
        let mut data = Dataset::new(2, 1).unwrap();
        data.push(&[0.5, 0.5], &[1.0]).unwrap();
        assert!(data.push(&[0.5], &[1.0]).is_err());
        assert!(data.push(&[0.5, 0.5], &[1.0, 0.0]).is_err());
        assert_eq!(data.len(), 1);
        assert!(Dataset::new(0, 1).is_err());
    }
}
