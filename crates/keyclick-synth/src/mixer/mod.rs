//! Weighted component mixing and the shared post-processing pipeline.
//!
//! Every recipe sums its components through a [`Mixer`], and every raw sum
//! goes through [`finalize`]: peak normalization to [`TARGET_PEAK`] followed
//! by tanh saturation. No profile is special-cased here.

#[allow(clippy::module_inception)]
mod mixer;
mod processing;

#[cfg(test)]
mod tests_mixer;
#[cfg(test)]
mod tests_normalization;
#[cfg(test)]
mod tests_saturation;

// Re-export public API
pub use mixer::Mixer;
pub use processing::{
    finalize, normalize_peak, peak, saturate, saturate_sample, SATURATION_DRIVE,
    SATURATION_OUTPUT, TARGET_PEAK,
};
