use crate::DomainError;

/// Cyclic left rotation by `n` positions: elements `0..n` move to the end.
/// In pitch-class terms this is transposition of the profile.
///
/// When `n` is `None` the half cycle `len / 2` is used, which must be
/// greater than 1. An explicit `n` is taken modulo the length.
///
/// # Errors
/// - [`DomainError::DegenerateRotation`] when the computed half cycle is 0 or 1
pub fn rotate(vector: &[usize], n: Option<usize>) -> Result<Vec<usize>, DomainError> {
	let n = match n {
		Some(_) if vector.is_empty() => 0,
		Some(n) => n % vector.len(),
		None => {
			let half = vector.len() / 2;
			if half <= 1 {
				return Err(DomainError::DegenerateRotation { n: half });
			}
			half
		}
	};

	let mut rotated = Vec::with_capacity(vector.len());
	rotated.extend_from_slice(&vector[n..]);
	rotated.extend_from_slice(&vector[..n]);
	Ok(rotated)
}

/// Mirror a vector. With no `index_of_symmetry` this is a plain reversal
/// (inversion of the profile).
///
/// With a pivot `s`, the head `0..=s` is reversed in place and the tail is
/// reversed in place, so the element at the pivot keeps its position while
/// its neighbors swap around it:
///
/// - `mirror(&[0, 1, 2], None)` is `[2, 1, 0]`
/// - `mirror(&[0, 1, 2, 3], Some(0))` is `[0, 3, 2, 1]`
/// - `mirror(&[0, 1, 2, 3], Some(1))` is `[1, 0, 3, 2]`
#[must_use]
pub fn mirror(vector: &[usize], index_of_symmetry: Option<usize>) -> Vec<usize> {
	match index_of_symmetry {
		None => vector.iter().rev().copied().collect(),
		Some(s) => {
			let pivot = (s + 1).min(vector.len());
			let mut mirrored: Vec<usize> = vector[..pivot].iter().rev().copied().collect();
			mirrored.extend(vector[pivot..].iter().rev());
			mirrored
		}
	}
}

/// Element-wise multiplication, e.g. doubling all amplitudes.
#[must_use]
pub fn scalar_multiply(vector: &[usize], scale_factor: usize) -> Vec<usize> {
	vector.iter().map(|&x| x * scale_factor).collect()
}

/// Complement of an indicator vector: onsets become rests and vice versa.
///
/// # Errors
/// - [`DomainError::NonBinaryElement`] when any element is not 0 or 1
pub fn complement(indicator: &[usize]) -> Result<Vec<usize>, DomainError> {
	indicator
		.iter()
		.map(|&x| match x {
			0 => Ok(1),
			1 => Ok(0),
			value => Err(DomainError::NonBinaryElement { value }),
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn rotate_defaults_to_half_cycle() {
		assert_eq!(rotate(&[0, 1, 2, 3], None).unwrap(), vec![2, 3, 0, 1]);
	}

	#[test]
	fn rotate_by_explicit_steps() {
		assert_eq!(rotate(&[0, 1, 2, 3], Some(1)).unwrap(), vec![1, 2, 3, 0]);
		assert_eq!(rotate(&[0, 1, 2, 3], Some(5)).unwrap(), vec![1, 2, 3, 0]);
		assert_eq!(rotate(&[0, 1, 2, 3], Some(0)).unwrap(), vec![0, 1, 2, 3]);
	}

	#[test]
	fn rotate_rejects_degenerate_half_cycle() {
		assert_eq!(
			rotate(&[0, 1], None),
			Err(DomainError::DegenerateRotation { n: 1 })
		);
		assert_eq!(
			rotate(&[0], None),
			Err(DomainError::DegenerateRotation { n: 0 })
		);
	}

	#[test]
	fn mirror_without_pivot_reverses() {
		assert_eq!(mirror(&[0, 1, 2], None), vec![2, 1, 0]);
	}

	#[test]
	fn mirror_with_pivot() {
		assert_eq!(mirror(&[0, 1, 2, 3], Some(0)), vec![0, 3, 2, 1]);
		assert_eq!(mirror(&[0, 1, 2, 3], Some(1)), vec![1, 0, 3, 2]);
		// pivot on the last index degenerates to a plain reversal of the head
		assert_eq!(mirror(&[0, 1, 2, 3], Some(3)), vec![3, 2, 1, 0]);
	}

	#[test]
	fn mirror_pivot_contract() {
		let vector = [5, 8, 1, 9, 4, 7];
		for s in 0..vector.len() {
			let mirrored = mirror(&vector, Some(s));
			for j in 0..=s {
				assert_eq!(mirrored[j], vector[s - j]);
			}
			for k in 0..vector.len() - s - 1 {
				assert_eq!(mirrored[s + 1 + k], vector[vector.len() - 1 - k]);
			}
		}
	}

	#[test]
	fn multiply_scales_every_entry() {
		assert_eq!(scalar_multiply(&[0, 1, 2], 2), vec![0, 2, 4]);
	}

	#[test]
	fn complement_flips_binary_entries() {
		assert_eq!(complement(&[1, 0, 1, 0]).unwrap(), vec![0, 1, 0, 1]);
	}

	#[test]
	fn complement_rejects_non_binary_input() {
		assert_eq!(
			complement(&[1, 0, 2]),
			Err(DomainError::NonBinaryElement { value: 2 })
		);
	}
}
