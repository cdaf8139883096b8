use std::{fmt, str::FromStr};

use vectors_sets::{complement, mirror, rotate, scalar_multiply, DomainError};

use crate::{all_close, SpectrumAnalyzer};

/// The profile transforms whose effect on the magnitude spectrum is a
/// simple, known correspondence. Repetition is handled separately by
/// [`check_repeat_equivalence`], since its correspondence is strided rather
/// than bin-for-bin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
	/// Cyclic rotation of the profile (transposition).
	Rotate,
	/// Reversal of the profile (inversion).
	Mirror,
	/// Uniform amplitude scaling by a factor of 2.
	Multiply,
	/// Binary complement (onsets become rests and vice versa).
	Complement,
}

impl Operation {
	pub const ALL: [Operation; 4] = [
		Operation::Rotate,
		Operation::Mirror,
		Operation::Multiply,
		Operation::Complement,
	];

	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Operation::Rotate => "rotate",
			Operation::Mirror => "mirror",
			Operation::Multiply => "multiply",
			Operation::Complement => "complement",
		}
	}
}

impl fmt::Display for Operation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Operation {
	type Err = DomainError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Operation::ALL
			.into_iter()
			.find(|operation| operation.name() == s)
			.ok_or_else(|| DomainError::UnknownOperation {
				name: s.to_string(),
			})
	}
}

/// Apply `operation` to `vector` and report whether the Fourier magnitude
/// spectrum survives it.
///
/// Rotation and mirroring must leave every magnitude untouched. Uniform
/// scaling multiplies every coefficient by the factor, so the check divides
/// the factor back out. The complement only displaces the DC coefficient
/// (`FFT(1 - v) = FFT(1) - FFT(v)`, and `FFT(1)` is zero away from DC), so
/// that one bin is exempt and every other magnitude must match.
///
/// # Errors
/// - whatever the underlying transform rejects (degenerate rotation,
///   non-binary input to the complement)
pub fn check_equivalence(vector: &[usize], operation: Operation) -> Result<bool, DomainError> {
	const SCALE_FACTOR: usize = 2;

	let mut analyzer = SpectrumAnalyzer::new();
	let before = analyzer.magnitudes_of_counts(vector);

	let transformed = match operation {
		Operation::Rotate => rotate(vector, None)?,
		Operation::Mirror => mirror(vector, None),
		Operation::Multiply => scalar_multiply(vector, SCALE_FACTOR),
		Operation::Complement => complement(vector)?,
	};
	let after = analyzer.magnitudes_of_counts(&transformed);

	Ok(match operation {
		Operation::Rotate | Operation::Mirror => all_close(&before, &after),
		Operation::Multiply => {
			#[allow(clippy::cast_precision_loss)]
			let descaled: Vec<f64> = after.iter().map(|&x| x / SCALE_FACTOR as f64).collect();
			all_close(&before, &descaled)
		}
		Operation::Complement => {
			before.len() == after.len()
				&& all_close(
					before.get(1..).unwrap_or_default(),
					after.get(1..).unwrap_or_default(),
				)
		}
	})
}

/// The slightly different case of repetition: tiling `vector`
/// `num_repeats` times stretches the spectrum by the same factor, so every
/// `num_repeats`-th bin of the long spectrum, divided by `num_repeats`,
/// must reproduce the short spectrum (the remaining bins are zero).
///
/// # Errors
/// - [`DomainError::ZeroRepeats`] when `num_repeats` is 0
pub fn check_repeat_equivalence(
	vector: &[usize],
	num_repeats: usize,
) -> Result<bool, DomainError> {
	if num_repeats == 0 {
		return Err(DomainError::ZeroRepeats);
	}

	let mut analyzer = SpectrumAnalyzer::new();
	let before = analyzer.magnitudes_of_counts(vector);

	let tiled: Vec<usize> = vector
		.iter()
		.copied()
		.cycle()
		.take(vector.len() * num_repeats)
		.collect();
	let after = analyzer.magnitudes_of_counts(&tiled);

	#[allow(clippy::cast_precision_loss)]
	let strided: Vec<f64> = after
		.iter()
		.step_by(num_repeats)
		.map(|&x| x / num_repeats as f64)
		.collect();
	Ok(all_close(&before, &strided))
}
