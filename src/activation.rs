//! Sigmoid activation.
//!
//! Both layers compute a pre-activation `z = W x + b` and then apply the sigmoid
//! element-wise: `y = sigmoid(z)`.
//!
//! Only the *post-activation* values `y` are kept around for backprop. The derivative is
//! recovered from `y` alone via `sigmoid'(z) = y * (1 - y)`, so no separate `z` buffer is
//! needed.

/// Pre-activations are clamped to `[-SATURATION, SATURATION]`. Above `+SATURATION` the `f64`
/// result rounds to exactly `1.0`.
pub const SATURATION: f64 = 36.0;

/// Logistic sigmoid `1 / (1 + e^-x)`, strictly inside `(0, 1)` for every non-NaN `x`.
///
/// Branches on the sign of `x` so the exponential is only ever taken of a non-positive
/// number and cannot overflow.
#[inline]
pub fn sigmoid(x: f64) -> f64 {
    let x = x.clamp(-SATURATION, SATURATION);
    if x >= 0.0 {
        let z = (-x).exp();
        1.0 / (1.0 + z)
    } else {
        let z = x.exp();
        z / (1.0 + z)
    }
}

/// Sigmoid derivative expressed in terms of the already activated output `y`.
#[inline]
pub fn dsigmoid(y: f64) -> f64 {
    y * (1.0 - y)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    #[test]
    fn sigmoid_basic_values() {
        assert_abs_diff_eq!(sigmoid(0.0), 0.5);
        assert!(sigmoid(10.0) > 0.9999);
        assert!(sigmoid(-10.0) < 0.0001);
        assert_abs_diff_eq!(sigmoid(2.0) + sigmoid(-2.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn sigmoid_stays_inside_open_unit_interval_for_extreme_inputs() {
        for x in [
            -1e6,
            -750.0,
            -50.0,
            50.0,
            750.0,
            1e6,
            f64::MAX,
            f64::MIN,
            f64::INFINITY,
            f64::NEG_INFINITY,
        ] {
            let y = sigmoid(x);
            assert!(y > 0.0 && y < 1.0, "sigmoid({x}) = {y}");
            assert!(dsigmoid(y) > 0.0, "dsigmoid(sigmoid({x})) collapsed to zero");
        }
        assert_eq!(sigmoid(1e6), sigmoid(SATURATION));
        assert_eq!(sigmoid(-1e6), sigmoid(-SATURATION));
    }

    #[test]
    fn dsigmoid_matches_numeric_derivative() {
        let eps = 1e-6;
        for x in [-3.0, -0.5, 0.0, 0.7, 4.0] {
            let numeric = (sigmoid(x + eps) - sigmoid(x - eps)) / (2.0 * eps);
            assert_abs_diff_eq!(dsigmoid(sigmoid(x)), numeric, epsilon = 1e-8);
        }
        assert_abs_diff_eq!(dsigmoid(0.5), 0.25);
    }
}
