//! Amplitude envelopes and time gates.

use super::TimeGrid;

/// Exponential decay `exp(-t·rate)`.
pub fn exp_decay(grid: &TimeGrid, rate: f64) -> Vec<f64> {
    grid.map(|t| (-t * rate).exp())
}

/// Attack/release envelope `(1 - exp(-t·attack)) · exp(-t·release)`.
///
/// `attack` sets how quickly the event rises, `release` how quickly it falls.
pub fn attack_release(grid: &TimeGrid, attack: f64, release: f64) -> Vec<f64> {
    grid.map(|t| (1.0 - (-t * attack).exp()) * (-t * release).exp())
}

/// Binary mask: 1.0 where `start <= t < end`, 0.0 elsewhere.
pub fn gate(grid: &TimeGrid, start: f64, end: f64) -> Vec<f64> {
    grid.map(|t| if t >= start && t < end { 1.0 } else { 0.0 })
}

/// Gain curve `1 + depth · exp(-((t - center) / width)²)`.
pub fn gaussian_bump(grid: &TimeGrid, center: f64, width: f64, depth: f64) -> Vec<f64> {
    grid.map(|t| {
        let x = (t - center) / width;
        1.0 + depth * (-x * x).exp()
    })
}
