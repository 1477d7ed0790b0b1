//! One-hot label encoding and arg-max decoding.
//!
//! These helpers sit between categorical data and the network's plain `f64` vectors:
//! targets are one-hot encoded before [`Network::train`](crate::Network::train), and a
//! prediction is decoded back into a category by taking its arg-max.

use crate::error::Shape;
use crate::{Error, Result};

/// Zero vector of length `len` with a `1.0` at `index`.
pub fn one_hot(index: usize, len: usize) -> Result<Vec<f64>> {
    if index >= len {
        return Err(Error::InvalidData(format!(
            "one-hot index {index} out of range for {len} categories"
        )));
    }
    let mut v = vec![0.0; len];
    v[index] = 1.0;
    Ok(v)
}

/// One-hot encode `value` against `categories`.
///
/// A value that is not one of the categories encodes as the all-zero vector.
pub fn one_hot_of<T: PartialEq>(value: &T, categories: &[T]) -> Vec<f64> {
    let mut v = vec![0.0; categories.len()];
    if let Some(index) = categories.iter().position(|c| c == value) {
        v[index] = 1.0;
    }
    v
}

/// Index of the largest value (first one on ties). `None` for an empty slice.
///
/// NaN entries never win.
pub fn argmax(values: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in values.iter().enumerate() {
        if v.is_nan() {
            continue;
        }
        if best.is_none_or(|(_, b)| v > b) {
            best = Some((i, v));
        }
    }
    best.map(|(i, _)| i)
}

/// Category at the arg-max of `prediction`.
pub fn decode<'a, T>(prediction: &[f64], categories: &'a [T]) -> Result<&'a T> {
    if prediction.len() != categories.len() {
        return Err(Error::mismatch(
            "decode",
            Shape::column(categories.len()),
            Shape::column(prediction.len()),
        ));
    }
    argmax(prediction)
        .map(|i| &categories[i])
        .ok_or_else(|| Error::InvalidData("prediction has no finite maximum".to_owned()))
}

/// Concatenate encoded feature blocks into one input vector.
pub fn concat_features(parts: &[&[f64]]) -> Vec<f64> {
    parts.concat()
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERDICTS: [&str; 3] = ["priority_complaint", "positive_feedback", "spam_to_delete"];

    #[test]
    fn one_hot_sets_a_single_position() {
        assert_eq!(one_hot(1, 3).unwrap(), vec![0.0, 1.0, 0.0]);
        assert!(one_hot(3, 3).is_err());
    }

    #[test]
    fn one_hot_of_unknown_value_is_all_zero() {
        assert_eq!(
            one_hot_of(&"positive_feedback", &VERDICTS),
            vec![0.0, 1.0, 0.0]
        );
        assert_eq!(one_hot_of(&"unknown", &VERDICTS), vec![0.0; 3]);
    }

    #[test]
    fn argmax_prefers_first_maximum_and_skips_nan() {
        assert_eq!(argmax(&[]), None);
        assert_eq!(argmax(&[0.2, 0.7, 0.7, 0.1]), Some(1));
        assert_eq!(argmax(&[f64::NAN, 0.3, 0.1]), Some(1));
        assert_eq!(argmax(&[f64::NAN]), None);
    }

    #[test]
    fn decode_maps_prediction_back_to_category() {
        assert_eq!(
            *decode(&[0.1, 0.2, 0.9], &VERDICTS).unwrap(),
            "spam_to_delete"
        );
        assert!(matches!(
            decode(&[0.1, 0.9], &VERDICTS),
            Err(Error::DimensionMismatch { op: "decode", .. })
        ));
    }

    #[test]
    fn concat_features_preserves_block_order() {
        let topic = one_hot_of(&"quality", &["price", "quality", "delivery", "other"]);
        let input = concat_features(&[&[0.9][..], &topic[..], &[0.0][..]]);
        assert_eq!(input, vec![0.9, 0.0, 1.0, 0.0, 0.0, 0.0]);
    }
}
