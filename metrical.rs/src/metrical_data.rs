use vectors_sets::DomainError;

use crate::BinGrid;

/// Metrical information derived from note start times, measured in
/// fractional measure numbers (e.g. 3.25 is a quarter of the way through
/// measure 3).
///
/// The histograms this produces are plain count vectors; rendering them is
/// the caller's concern.
#[derive(Debug, Clone)]
pub struct MetricalData {
	start_times: Vec<f64>,
	bins_per_measure: usize,
	measure_floor: i64,
	measure_ceiling: i64,
	measure_positions: Vec<f64>,
}

impl MetricalData {
	/// `bins_per_measure` picks the resolution of the per-measure grid,
	/// e.g. 1 for a coarse look at density, 24 for every 5th in 12/8.
	///
	/// The measure range is taken from the extremes of the data, so every
	/// event is counted (with at most a small buffer at either end).
	///
	/// # Errors
	/// - [`DomainError::NoStartTimes`] on empty input
	/// - [`DomainError::ZeroBins`] when `bins_per_measure` is 0
	pub fn new(start_times: Vec<f64>, bins_per_measure: usize) -> Result<Self, DomainError> {
		if start_times.is_empty() {
			return Err(DomainError::NoStartTimes);
		}
		if bins_per_measure == 0 {
			return Err(DomainError::ZeroBins);
		}

		let min = start_times.iter().copied().fold(f64::INFINITY, f64::min);
		let max = start_times
			.iter()
			.copied()
			.fold(f64::NEG_INFINITY, f64::max);

		#[allow(clippy::cast_possible_truncation)]
		let (measure_floor, mut measure_ceiling) = (min.floor() as i64, max.ceil() as i64);
		// events sitting exactly on one integral measure still span that measure
		if measure_ceiling == measure_floor {
			measure_ceiling += 1;
		}

		let measure_positions = start_times
			.iter()
			.map(|x| (x.fract() * 1e5).round() / 1e5)
			.collect();

		Ok(Self {
			start_times,
			bins_per_measure,
			measure_floor,
			measure_ceiling,
			measure_positions,
		})
	}

	#[must_use]
	pub fn start_times(&self) -> &[f64] {
		&self.start_times
	}

	/// Each start time reduced to its position within its own measure,
	/// in `0..1` (rounded to 5 decimals).
	#[must_use]
	pub fn measure_positions(&self) -> &[f64] {
		&self.measure_positions
	}

	#[must_use]
	pub fn bins_per_measure(&self) -> usize {
		self.bins_per_measure
	}

	#[must_use]
	pub fn measure_floor(&self) -> i64 {
		self.measure_floor
	}

	#[must_use]
	pub fn measure_ceiling(&self) -> i64 {
		self.measure_ceiling
	}

	#[must_use]
	#[allow(clippy::cast_sign_loss)]
	pub fn num_measures(&self) -> usize {
		(self.measure_ceiling - self.measure_floor) as usize
	}

	#[must_use]
	pub fn num_increments(&self) -> usize {
		self.num_measures() * self.bins_per_measure
	}

	/// The grid of one abstract measure.
	#[must_use]
	pub fn measure_grid(&self) -> BinGrid {
		BinGrid::new((0., 1.), self.bins_per_measure)
	}

	/// The grid covering the whole piece at `num_increments` resolution.
	#[must_use]
	#[allow(clippy::cast_precision_loss)]
	pub fn whole_piece_grid(&self) -> BinGrid {
		BinGrid::new(
			(self.measure_floor as f64, self.measure_ceiling as f64),
			self.num_increments(),
		)
	}

	/// Events per time increment, aggregated into one abstract measure.
	#[must_use]
	pub fn measure_histogram(&self) -> Vec<usize> {
		self.measure_grid().histogram(&self.measure_positions)
	}

	/// Events per time increment across the whole piece.
	#[must_use]
	pub fn whole_piece_histogram(&self) -> Vec<usize> {
		self.whole_piece_grid().histogram(&self.start_times)
	}
}
