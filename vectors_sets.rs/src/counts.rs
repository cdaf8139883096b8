use crate::DomainError;

/// Convert a set of integers into its occurrence-count vector.
///
/// Counts are accumulated over the full `0..=max_index` range first; only
/// then is the head below `min_index` sliced off, so elements smaller than
/// `min_index` are counted and silently discarded rather than rejected.
/// With `min_index == 1` this yields the interval-vector convention where
/// the trivial self-interval at 0 is dropped.
///
/// When `max_index` is `None` it is inferred as the maximum of the set.
///
/// # Errors
/// - [`DomainError::EmptySet`] when `max_index` is `None` and the set is empty
/// - [`DomainError::ValueOutOfRange`] when an element exceeds `max_index`
pub fn to_vector(
	set: &[usize],
	min_index: usize,
	max_index: Option<usize>,
) -> Result<Vec<usize>, DomainError> {
	let max_index = match max_index {
		Some(max) => max,
		None => set.iter().copied().max().ok_or(DomainError::EmptySet)?,
	};

	let mut counts = vec![0; max_index + 1];
	for &value in set {
		if value > max_index {
			return Err(DomainError::ValueOutOfRange { value, max_index });
		}
		counts[value] += 1;
	}

	Ok(counts.split_off(min_index.min(counts.len())))
}

/// Expand a count vector back into the set it describes: index `i` appears
/// exactly `vector[i]` times, in ascending index order.
///
/// Inverse of [`to_vector`] with `min_index == 0` and
/// `max_index == Some(vector.len() - 1)`.
#[must_use]
pub fn to_set(vector: &[usize]) -> Vec<usize> {
	vector
		.iter()
		.enumerate()
		.flat_map(|(i, &count)| std::iter::repeat(i).take(count))
		.collect()
}
