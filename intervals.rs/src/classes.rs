use vectors_sets::DomainError;

/// Map any integer interval to its interval class, the canonical
/// representative in 0..=6 of the interval and its complement mod 12.
#[must_use]
pub fn interval_to_interval_class(interval: i64) -> usize {
	let d = (interval.abs() % 12) as usize;
	if d <= 6 {
		d
	} else {
		12 - d
	}
}

/// Fold a length-12 interval vector (indices 0..=11) into the length-6
/// interval-class vector: complementary intervals `i` and `12 - i` are
/// summed, and the tritone at index 6 is self-paired, not doubled.
///
/// # Errors
/// - [`DomainError::WrongIntervalVectorLength`] when the input length is not 12
pub fn interval_vector_to_interval_class_vector(
	interval_vector: &[usize],
) -> Result<[usize; 6], DomainError> {
	if interval_vector.len() != 12 {
		return Err(DomainError::WrongIntervalVectorLength {
			len: interval_vector.len(),
		});
	}

	let mut interval_class_vector = [0; 6];
	for i in 1..6 {
		interval_class_vector[i - 1] = interval_vector[i] + interval_vector[12 - i];
	}
	interval_class_vector[5] = interval_vector[6];
	Ok(interval_class_vector)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn interval_classes_fold_complements_together() {
		assert_eq!(interval_to_interval_class(0), 0);
		assert_eq!(interval_to_interval_class(-1), 1);
		assert_eq!(interval_to_interval_class(-2), 2);
		assert_eq!(interval_to_interval_class(11), 1);
		assert_eq!(interval_to_interval_class(7), 5);
		assert_eq!(interval_to_interval_class(6), 6);
		assert_eq!(interval_to_interval_class(18), 6);
	}

	#[test]
	fn class_vector_folding() {
		assert_eq!(
			interval_vector_to_interval_class_vector(&[1, 0, 5, 7, 2, 2, 0, 3, 5, 0, 8, 4])
				.unwrap(),
			[4, 13, 7, 7, 5, 0]
		);
	}

	#[test]
	fn class_vector_requires_twelve_entries() {
		assert_eq!(
			interval_vector_to_interval_class_vector(&[1, 2, 3]),
			Err(DomainError::WrongIntervalVectorLength { len: 3 })
		);
	}
}
