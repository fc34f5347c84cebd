//! Peak normalization and saturation.

/// Peak level the raw mix is normalized to before saturation.
pub const TARGET_PEAK: f64 = 0.7;

/// Input gain of the saturation stage.
pub const SATURATION_DRIVE: f64 = 1.2;

/// Output gain of the saturation stage; also the hard bound on the result.
pub const SATURATION_OUTPUT: f64 = 0.8;

/// Returns the peak absolute amplitude.
pub fn peak(samples: &[f64]) -> f64 {
    samples
        .iter()
        .map(|s| s.abs())
        .fold(0.0_f64, |a, b| a.max(b))
}

/// Scales `samples` so the peak absolute value equals `target_peak`.
///
/// Silent buffers are left untouched.
pub fn normalize_peak(samples: &mut [f64], target_peak: f64) {
    let current_peak = peak(samples);

    if current_peak > 0.0 {
        let gain = target_peak / current_peak;
        for sample in samples.iter_mut() {
            *sample *= gain;
        }
    }
}

/// Saturates one sample: `tanh(x · 1.2) · 0.8`.
#[inline]
pub fn saturate_sample(sample: f64) -> f64 {
    (sample * SATURATION_DRIVE).tanh() * SATURATION_OUTPUT
}

/// Applies saturation to a buffer.
pub fn saturate(samples: &mut [f64]) {
    for sample in samples.iter_mut() {
        *sample = saturate_sample(*sample);
    }
}

/// Runs the post-processing pipeline shared by every profile.
pub fn finalize(samples: &mut [f64]) {
    normalize_peak(samples, TARGET_PEAK);
    saturate(samples);
}
