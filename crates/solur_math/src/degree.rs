//! Trigonometric functions operating on and returning degrees.
//!
//! Pure wrappers over the `f64` radian primitives. Inverse functions
//! inherit the domain of the underlying primitive: `asin_deg`/`acos_deg`
//! require inputs in [-1, 1] and return NaN outside it, so callers must
//! range-check first where out-of-domain inputs can occur.

/// Sine of an angle in degrees.
pub fn sin_deg(deg: f64) -> f64 {
    deg.to_radians().sin()
}

/// Cosine of an angle in degrees.
pub fn cos_deg(deg: f64) -> f64 {
    deg.to_radians().cos()
}

/// Tangent of an angle in degrees.
pub fn tan_deg(deg: f64) -> f64 {
    deg.to_radians().tan()
}

/// Arcsine in degrees. Input must be in [-1, 1].
pub fn asin_deg(x: f64) -> f64 {
    x.asin().to_degrees()
}

/// Arccosine in degrees. Input must be in [-1, 1].
pub fn acos_deg(x: f64) -> f64 {
    x.acos().to_degrees()
}

/// Arctangent in degrees. Returns a value in (-90, 90).
pub fn atan_deg(x: f64) -> f64 {
    x.atan().to_degrees()
}
