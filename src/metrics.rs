//! Metrics.
//!
//! Metrics are evaluation helpers (they do not participate in backprop).

use crate::encoding::argmax;

/// Whether a single prediction counts as correct.
///
/// - For `output_dim == 1`: binary accuracy, both sides thresholded at `0.5`.
/// - For `output_dim > 1`: multiclass accuracy (arg-max of prediction equals arg-max of
///   target).
pub fn is_correct(pred: &[f64], target: &[f64]) -> bool {
    assert_eq!(
        pred.len(),
        target.len(),
        "pred len {} does not match target len {}",
        pred.len(),
        target.len()
    );

    match pred.len() {
        0 => false,
        1 => (pred[0] >= 0.5) == (target[0] >= 0.5),
        _ => argmax(pred).is_some() && argmax(pred) == argmax(target),
    }
}

/// Fraction of correct predictions over `(pred, target)` pairs. Zero when empty.
pub fn accuracy<'a, I>(pairs: I) -> f64
where
    I: IntoIterator<Item = (&'a [f64], &'a [f64])>,
{
    let mut total = 0_usize;
    let mut correct = 0_usize;
    for (pred, target) in pairs {
        total += 1;
        if is_correct(pred, target) {
            correct += 1;
        }
    }
    if total == 0 {
        0.0
    } else {
        correct as f64 / total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_accuracy_thresholds_at_one_half() {
        assert!(is_correct(&[0.8], &[1.0]));
        assert!(is_correct(&[0.2], &[0.0]));
        assert!(!is_correct(&[0.4], &[1.0]));
    }

    #[test]
    fn multiclass_accuracy_uses_argmax() {
        assert!(is_correct(&[0.1, 0.7, 0.2], &[0.0, 1.0, 0.0]));
        assert!(!is_correct(&[0.6, 0.3, 0.1], &[0.0, 1.0, 0.0]));
    }

    #[test]
    fn accuracy_averages_over_pairs() {
        let preds = [vec![0.9], vec![0.1], vec![0.6], vec![0.2]];
        let targets = [vec![1.0], vec![0.0], vec![0.0], vec![0.0]];
        let acc = accuracy(
            preds
                .iter()
                .zip(&targets)
                .map(|(p, t)| (p.as_slice(), t.as_slice())),
        );
        assert_eq!(acc, 0.75);
        assert_eq!(accuracy(std::iter::empty()), 0.0);
    }
}
