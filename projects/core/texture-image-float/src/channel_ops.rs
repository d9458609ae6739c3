//! # Channel Operations
//!
//! Straight-line loops over a single channel of a [`FloatImage`](crate::FloatImage).
//!
//! These are the hot loops of every per-pixel colour operation. They are written as plain
//! slice iteration and compiled for multiple x86 feature levels through the [`mod@multiversion`]
//! crate, so the auto-vectorizer can use wider registers where the CPU has them.
//!
//! AVX512 targets are only enabled with the `nightly` feature.

use multiversion::multiversion;

/// `v = v * scale + bias` for every value.
#[cfg_attr(
    not(feature = "nightly"),
    multiversion(targets(
        // x86-64-v3 without lahfsahf
        "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
        // x86-64-v2 without lahfsahf
        "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
    ))
)]
#[cfg_attr(
    feature = "nightly",
    multiversion(targets(
        // x86-64-v4 without lahfsahf
        "x86_64+avx+avx2+avx512bw+avx512cd+avx512dq+avx512f+avx512vl+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
        // x86-64-v3 without lahfsahf
        "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
        // x86-64-v2 without lahfsahf
        "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
    ))
)]
pub(crate) fn scale_bias(values: &mut [f32], scale: f32, bias: f32) {
    for v in values {
        *v = *v * scale + bias;
    }
}

/// Moves every value towards `target` by fraction `t`.
#[cfg_attr(
    not(feature = "nightly"),
    multiversion(targets(
        // x86-64-v3 without lahfsahf
        "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
        // x86-64-v2 without lahfsahf
        "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
    ))
)]
#[cfg_attr(
    feature = "nightly",
    multiversion(targets(
        // x86-64-v4 without lahfsahf
        "x86_64+avx+avx2+avx512bw+avx512cd+avx512dq+avx512f+avx512vl+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
        // x86-64-v3 without lahfsahf
        "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
        // x86-64-v2 without lahfsahf
        "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
    ))
)]
pub(crate) fn lerp_towards(values: &mut [f32], target: f32, t: f32) {
    for v in values {
        *v += (target - *v) * t;
    }
}

/// `colour *= alpha`, element-wise.
#[cfg_attr(
    not(feature = "nightly"),
    multiversion(targets(
        // x86-64-v3 without lahfsahf
        "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
        // x86-64-v2 without lahfsahf
        "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
    ))
)]
#[cfg_attr(
    feature = "nightly",
    multiversion(targets(
        // x86-64-v4 without lahfsahf
        "x86_64+avx+avx2+avx512bw+avx512cd+avx512dq+avx512f+avx512vl+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
        // x86-64-v3 without lahfsahf
        "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
        // x86-64-v2 without lahfsahf
        "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
    ))
)]
pub(crate) fn multiply(colour: &mut [f32], alpha: &[f32]) {
    debug_assert_eq!(colour.len(), alpha.len());
    for (c, a) in colour.iter_mut().zip(alpha) {
        *c *= *a;
    }
}

/// Clamps every value into `[min, max]`.
#[cfg_attr(
    not(feature = "nightly"),
    multiversion(targets(
        // x86-64-v3 without lahfsahf
        "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
        // x86-64-v2 without lahfsahf
        "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
    ))
)]
#[cfg_attr(
    feature = "nightly",
    multiversion(targets(
        // x86-64-v4 without lahfsahf
        "x86_64+avx+avx2+avx512bw+avx512cd+avx512dq+avx512f+avx512vl+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
        // x86-64-v3 without lahfsahf
        "x86_64+avx+avx2+bmi1+bmi2+cmpxchg16b+f16c+fma+fxsr+lzcnt+movbe+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3+xsave",
        // x86-64-v2 without lahfsahf
        "x86_64+cmpxchg16b+fxsr+popcnt+sse+sse2+sse3+sse4.1+sse4.2+ssse3",
    ))
)]
pub(crate) fn clamp(values: &mut [f32], min: f32, max: f32) {
    // `max` wins when the bounds are inverted. A NaN bound is ignored.
    for v in values {
        *v = v.max(min).min(max);
    }
}

/// Raises every value to `exponent`. Negative inputs are treated as 0.
pub(crate) fn power(values: &mut [f32], exponent: f32) {
    for v in values {
        *v = v.max(0.0).powf(exponent);
    }
}
