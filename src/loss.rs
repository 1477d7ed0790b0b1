//! Loss functions.
//!
//! `Network::train` minimises `0.5 * sum((target - output)^2)` implicitly; these helpers only
//! report the error, they do not take part in the update.

/// Sum of squared differences `sum((target - pred)^2)`.
///
/// Shape contract: `pred.len() == target.len()`.
#[inline]
pub fn squared_error(pred: &[f64], target: &[f64]) -> f64 {
    assert_eq!(
        pred.len(),
        target.len(),
        "pred len {} does not match target len {}",
        pred.len(),
        target.len()
    );

    pred.iter()
        .zip(target)
        .map(|(&p, &t)| {
            let d = t - p;
            d * d
        })
        .sum()
}

/// Mean squared error `mean((target - pred)^2)`. Zero for empty inputs.
#[inline]
pub fn mse(pred: &[f64], target: &[f64]) -> f64 {
    if pred.is_empty() && target.is_empty() {
        return 0.0;
    }
    squared_error(pred, target) / pred.len() as f64
}
