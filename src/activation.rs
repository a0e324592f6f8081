//! Activation functions.

/// Logistic sigmoid: `1 / (1 + e^-x)`.
///
/// Range is (0, 1), though rounding saturates to 0.0 or 1.0 at extreme inputs.
#[inline]
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Derivative of the sigmoid, expressed through the sigmoid itself.
#[inline]
pub fn sigmoid_prime(x: f64) -> f64 {
    let s = sigmoid(x);
    s * (1.0 - s)
}
