use rustfft::num_complex::Complex;

/// Convert a DFT to polar coordinates: one `(magnitude, phase)` pair per
/// coefficient, with the phase in radians in `(-π, π]`.
#[must_use]
pub fn to_polar(transform: &[Complex<f64>]) -> Vec<(f64, f64)> {
	transform.iter().map(|x| x.to_polar()).collect()
}

/// Convert the real and imaginary parts of one complex number in Cartesian
/// form to its magnitude and phase in polar form, from scratch.
#[must_use]
pub fn cartesian_to_polar(real_part: f64, imaginary_part: f64) -> (f64, f64) {
	(
		real_part.hypot(imaginary_part),
		imaginary_part.atan2(real_part),
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{approx_eq, SpectrumAnalyzer};

	#[test]
	fn dc_coefficient_in_polar_form() {
		let transform = SpectrumAnalyzer::new().transform(&[1., 2., 3., 4.]);
		assert!(approx_eq(transform[0].re, 10.));
		assert!(approx_eq(transform[0].im, 0.));

		let (magnitude, phase) = to_polar(&transform)[0];
		assert!(approx_eq(magnitude, 10.));
		assert!(approx_eq(phase, 0.));
	}

	#[test]
	fn three_four_five_triangle() {
		let (magnitude, phase) = cartesian_to_polar(3., 4.);
		assert!(approx_eq(magnitude, 5.));
		assert!(approx_eq(phase, 0.927_295_218_001_612_2));
	}

	#[test]
	fn zero_imaginary_part_means_zero_phase() {
		assert_eq!(cartesian_to_polar(3., 0.), (3., 0.));
	}

	#[test]
	fn matches_the_complex_implementation() {
		for (re, im) in [(1., -1.), (-2.5, 0.5), (0., 4.), (-3., -4.)] {
			let (magnitude, phase) = cartesian_to_polar(re, im);
			let (expected_magnitude, expected_phase) = Complex::new(re, im).to_polar();
			assert!(approx_eq(magnitude, expected_magnitude));
			assert!(approx_eq(phase, expected_phase));
		}
	}
}
