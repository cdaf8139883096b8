use crate::DomainError;

/// Circular convolution of two equal-length vectors: a scalar product of
/// corresponding entries where the second vector is rotated relative to the
/// first by `k` steps.
///
/// `out[k] = Σ_i a[i] * b[(k - i) mod n]`, with the wraparound taken as an
/// explicit modulo. Convolving two indicator vectors yields, at each
/// position, the number of ways that position arises as a sum of one onset
/// from each input; `eliminate_doubling` collapses those multiplicities back
/// to an indicator vector.
///
/// # Errors
/// - [`DomainError::LengthMismatch`] when the inputs differ in length
pub fn convolve(
	a: &[usize],
	b: &[usize],
	eliminate_doubling: bool,
) -> Result<Vec<usize>, DomainError> {
	let n = a.len();
	if b.len() != n {
		return Err(DomainError::LengthMismatch {
			expected: n,
			actual: b.len(),
		});
	}

	let mut combined = Vec::with_capacity(n);
	for k in 0..n {
		combined.push((0..n).map(|i| a[i] * b[(k + n - i) % n]).sum());
	}

	if eliminate_doubling {
		for x in &mut combined {
			*x = usize::from(*x > 0);
		}
	}
	Ok(combined)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::profiles::{MAJOR_TRIAD, MINOR_SEVENTH_DYAD};

	#[test]
	fn triad_with_dyad() {
		assert_eq!(
			convolve(&MAJOR_TRIAD, &MINOR_SEVENTH_DYAD, false).unwrap(),
			vec![1, 0, 1, 0, 1, 1, 0, 1, 0, 0, 1, 0]
		);
	}

	#[test]
	fn unit_impulse_is_identity() {
		for len in 1..=16 {
			let mut impulse = vec![0; len];
			impulse[0] = 1;
			let vector: Vec<usize> = (0..len).map(|i| (i * 7 + 1) % 3).collect();
			assert_eq!(convolve(&vector, &impulse, false).unwrap(), vector);
		}
	}

	#[test]
	fn eliminate_doubling_binarizes() {
		let doubled = convolve(&[1, 1, 0, 0], &[1, 1, 0, 0], false).unwrap();
		assert_eq!(doubled, vec![1, 2, 1, 0]);
		assert_eq!(
			convolve(&[1, 1, 0, 0], &[1, 1, 0, 0], true).unwrap(),
			vec![1, 1, 1, 0]
		);
	}

	#[test]
	fn length_mismatch_is_rejected() {
		assert_eq!(
			convolve(&[1, 0], &[1, 0, 0], false),
			Err(DomainError::LengthMismatch {
				expected: 2,
				actual: 3
			})
		);
	}
}
