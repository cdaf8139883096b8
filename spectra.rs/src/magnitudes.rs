use rustfft::{num_complex::Complex, FftPlanner};

/// Computes discrete Fourier transforms of arbitrary-length signals,
/// reusing the planner (and therefore the cached FFT instances) across
/// calls.
///
/// No normalization is applied: the DC coefficient equals the sum of the
/// inputs, so magnitudes follow the plain-DFT convention that the
/// equivalence checks rely on.
pub struct SpectrumAnalyzer {
	planner: FftPlanner<f64>,
}

impl SpectrumAnalyzer {
	#[must_use]
	pub fn new() -> Self {
		Self {
			planner: FftPlanner::new(),
		}
	}

	/// The complex DFT of `signal`, same length as the input.
	#[must_use]
	pub fn transform(&mut self, signal: &[f64]) -> Vec<Complex<f64>> {
		let mut buffer: Vec<Complex<f64>> =
			signal.iter().map(|&x| Complex::new(x, 0.)).collect();
		if !buffer.is_empty() {
			self.planner.plan_fft_forward(buffer.len()).process(&mut buffer);
		}
		buffer
	}

	/// The elementwise absolute value of the DFT of `signal`.
	#[must_use]
	pub fn magnitudes(&mut self, signal: &[f64]) -> Vec<f64> {
		self.transform(signal).iter().map(|x| x.norm()).collect()
	}

	/// [`Self::magnitudes`] for integer count vectors.
	#[must_use]
	pub fn magnitudes_of_counts(&mut self, vector: &[usize]) -> Vec<f64> {
		#[allow(clippy::cast_precision_loss)]
		let signal: Vec<f64> = vector.iter().map(|&x| x as f64).collect();
		self.magnitudes(&signal)
	}
}

impl Default for SpectrumAnalyzer {
	fn default() -> Self {
		Self::new()
	}
}

/// One-shot convenience to ensure consistent handling of Fourier magnitude.
/// Prefer a [`SpectrumAnalyzer`] when transforming repeatedly.
#[must_use]
pub fn fourier_magnitudes(signal: &[f64]) -> Vec<f64> {
	SpectrumAnalyzer::new().magnitudes(signal)
}

/// Approximate equality of two floats with numpy-style tolerance:
/// `|a - b| <= atol + rtol * |b|`.
#[must_use]
pub fn approx_eq(a: f64, b: f64) -> bool {
	const ATOL: f64 = 1e-8;
	const RTOL: f64 = 1e-5;
	(a - b).abs() <= ATOL + RTOL * b.abs()
}

/// Elementwise approximate equality of two sequences of the same length.
#[must_use]
pub fn all_close(a: &[f64], b: &[f64]) -> bool {
	a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| approx_eq(x, y))
}

#[cfg(test)]
mod tests {
	use super::*;
	use vectors_sets::profiles::MAJOR_SCALE;

	#[test]
	fn dc_component_is_the_sum_of_the_inputs() {
		let magnitudes = fourier_magnitudes(&[1., 2., 3., 4.]);
		assert_eq!(magnitudes.len(), 4);
		assert!(approx_eq(magnitudes[0], 10.));
	}

	#[test]
	fn spectrum_of_the_major_scale_profile() {
		let mut analyzer = SpectrumAnalyzer::new();
		let magnitudes = analyzer.magnitudes_of_counts(&MAJOR_SCALE);
		assert_eq!(magnitudes.len(), 12);
		// 7 onsets in the profile
		assert!(approx_eq(magnitudes[0], 7.));
		// real input: the spectrum is mirror-symmetric around the Nyquist bin
		for i in 1..12 {
			assert!(approx_eq(magnitudes[i], magnitudes[12 - i]));
		}
	}

	#[test]
	fn empty_signal_yields_empty_spectrum() {
		assert!(fourier_magnitudes(&[]).is_empty());
	}

	#[test]
	fn planner_reuse_matches_one_shot() {
		let mut analyzer = SpectrumAnalyzer::new();
		for len in 1..=32 {
			let signal: Vec<f64> = (0..len).map(|i| (i % 5) as f64).collect();
			assert_eq!(analyzer.magnitudes(&signal), fourier_magnitudes(&signal));
		}
	}

	#[test]
	fn all_close_tolerates_tiny_differences() {
		assert!(all_close(&[1., 2.], &[1. + 1e-9, 2. - 1e-9]));
		assert!(!all_close(&[1., 2.], &[1., 2.1]));
		assert!(!all_close(&[1., 2.], &[1.]));
	}
}
