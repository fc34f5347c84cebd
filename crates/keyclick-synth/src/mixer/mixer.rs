//! Weighted sum of recipe components.

/// Accumulates weighted components into a fixed-length buffer.
#[derive(Debug, Clone)]
pub struct Mixer {
    output: Vec<f64>,
    num_components: usize,
}

impl Mixer {
    /// Creates a silent mix of `num_samples` samples.
    pub fn new(num_samples: usize) -> Self {
        Self {
            output: vec![0.0; num_samples],
            num_components: 0,
        }
    }

    /// Adds `weight * component` to the mix.
    ///
    /// Components shorter than the mix only contribute to its head; samples
    /// past the end of the mix are dropped.
    pub fn add(&mut self, weight: f64, component: &[f64]) -> &mut Self {
        for (out, &sample) in self.output.iter_mut().zip(component) {
            *out += weight * sample;
        }
        self.num_components += 1;
        self
    }

    /// Multiplies the whole mix by `gain`.
    pub fn gain(&mut self, gain: f64) -> &mut Self {
        for sample in self.output.iter_mut() {
            *sample *= gain;
        }
        self
    }

    /// Applies `f` to every mixed sample.
    pub fn map(&mut self, f: impl Fn(f64) -> f64) -> &mut Self {
        for sample in self.output.iter_mut() {
            *sample = f(*sample);
        }
        self
    }

    /// Number of components added so far.
    pub fn num_components(&self) -> usize {
        self.num_components
    }

    /// Number of output samples.
    pub fn num_samples(&self) -> usize {
        self.output.len()
    }

    /// Consumes the mixer and returns the raw sum.
    pub fn into_samples(self) -> Vec<f64> {
        self.output
    }
}
