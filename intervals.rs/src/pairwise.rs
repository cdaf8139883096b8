use vectors_sets::{to_vector, DomainError};

/// The conventional upper bound of an interval vector: intervals 0..=6.
const INTERVAL_VECTOR_MAX: usize = 6;

/// The interval vector within a single set: the complete collection of
/// absolute differences between items of that set, taken over every pair of
/// positions `i < j`.
///
/// With `return_counts` (the standard music-theory representation) the
/// differences are folded into a histogram over 0..=6 via
/// [`vectors_sets::to_vector`]. Differences are plain absolute values, not
/// reduced modulo anything, so a set spanning more than 6 makes the counts
/// mode fail; callers are expected to pre-reduce into a bounded pitch-class
/// range first.
///
/// # Errors
/// - [`DomainError::ValueOutOfRange`] in counts mode when a difference exceeds 6
pub fn interval_vector(set: &[usize], return_counts: bool) -> Result<Vec<usize>, DomainError> {
	let mut differences = Vec::new();
	for i in 0..set.len() {
		for j in i + 1..set.len() {
			differences.push(set[j].abs_diff(set[i]));
		}
	}

	if return_counts {
		to_vector(&differences, 0, Some(INTERVAL_VECTOR_MAX))
	} else {
		Ok(differences)
	}
}

/// The interval function between two sets: every difference `end - start`
/// with `start` drawn from `start_set` and `end` from `end_set`, restricted
/// to the pairs where `start <= end`.
///
/// The restriction to non-negative directed intervals is deliberate and
/// order-dependent: swapping the arguments changes which pairs survive. For
/// the unrestricted variant see [`pairwise_differences_modulo`].
///
/// # Errors
/// - [`DomainError::ValueOutOfRange`] in counts mode when a difference exceeds 6
pub fn interval_function(
	start_set: &[usize],
	end_set: &[usize],
	return_counts: bool,
) -> Result<Vec<usize>, DomainError> {
	let mut differences = Vec::new();
	for &start in start_set {
		for &end in end_set {
			if start <= end {
				differences.push(end - start);
			}
		}
	}

	if return_counts {
		to_vector(&differences, 0, Some(INTERVAL_VECTOR_MAX))
	} else {
		Ok(differences)
	}
}

/// Differences between integers, reduced modulo `modulus` (12 by default in
/// 12-TET, where -1 and 11 name the same interval).
///
/// With `more_items` this is the interval function in its general form:
/// every ordered pair from `items` to `more_items`, diagonal included.
/// Without it, only position pairs `i < j` within `items` are taken, the
/// interval-vector flavor that avoids duplicates. Calling the two-set form
/// with the same set twice therefore yields everything twice (both
/// directions of every pair) plus the zero diagonal.
///
/// # Errors
/// - [`DomainError::ZeroModulus`] when `modulus` is 0
pub fn pairwise_differences_modulo(
	items: &[usize],
	more_items: Option<&[usize]>,
	modulus: usize,
) -> Result<Vec<usize>, DomainError> {
	if modulus == 0 {
		return Err(DomainError::ZeroModulus);
	}

	let mut differences = Vec::new();
	match more_items {
		Some(more_items) => {
			for &start in items {
				for &end in more_items {
					differences.push((end % modulus + modulus - start % modulus) % modulus);
				}
			}
		}
		None => {
			for i in 0..items.len() {
				for j in i + 1..items.len() {
					differences
						.push((items[j] % modulus + modulus - items[i] % modulus) % modulus);
				}
			}
		}
	}
	Ok(differences)
}
