/// Convert a position-oriented pattern (how many events fall on each of the
/// equally spaced positions of a measure) into a list of onset times as
/// fractions of that measure.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn events_by_position_to_onsets(pattern: &[usize]) -> Vec<f64> {
	let positions = pattern.len();
	pattern
		.iter()
		.enumerate()
		.flat_map(|(index, &count)| {
			std::iter::repeat(index as f64 / positions as f64).take(count)
		})
		.collect()
}

/// Synthetic start-time data for experimentation: the per-measure pattern
/// tiled over `measures` consecutive measures, numbered from 1.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn make_fake_starts(measures: usize, pattern: &[usize]) -> Vec<f64> {
	let onsets_by_bar = events_by_position_to_onsets(pattern);
	let mut all_onsets = Vec::with_capacity(onsets_by_bar.len() * measures);
	for measure in 0..measures {
		// count from 1
		let offset = (measure + 1) as f64;
		all_onsets.extend(onsets_by_bar.iter().map(|onset| onset + offset));
	}
	all_onsets
}

#[cfg(test)]
mod tests {
	use super::*;

	const PATTERN: [usize; 8] = [4, 1, 2, 1, 3, 1, 2, 1];

	#[test]
	fn pattern_to_onset_fractions() {
		assert_eq!(
			events_by_position_to_onsets(&PATTERN),
			vec![
				0.0, 0.0, 0.0, 0.0, 0.125, 0.25, 0.25, 0.375, 0.5, 0.5, 0.5, 0.625, 0.75, 0.75,
				0.875
			]
		);
	}

	#[test]
	fn fake_starts_tile_the_pattern_per_measure() {
		let starts = make_fake_starts(40, &PATTERN);
		assert_eq!(starts.len(), 600);
		assert_eq!(&starts[..5], &[1., 1., 1., 1., 1.125]);
		assert!((starts[starts.len() - 1] - 40.875).abs() < f64::EPSILON);
	}
}
