/// A continuous interval split into equal-width bins, with utilities to map
/// values to bins and back to bin boundaries.
#[derive(Debug, Clone, Copy)]
pub struct BinGrid {
	interval: (f64, f64),
	n_of_bins: usize,
}

impl BinGrid {
	#[must_use]
	pub fn new(interval: (f64, f64), n_of_bins: usize) -> Self {
		debug_assert!(n_of_bins > 0, "a grid needs at least one bin");
		Self {
			interval,
			n_of_bins,
		}
	}

	#[must_use]
	pub fn value_to_bin(&self, value: f64) -> usize {
		debug_assert!(
			value >= self.interval.0 && value <= self.interval.1,
			"value {} is out of range {}..={}",
			value,
			self.interval.0,
			self.interval.1
		);
		#[allow(clippy::cast_possible_truncation)]
		#[allow(clippy::cast_sign_loss)]
		let bin = ((value - self.interval.0) / self.bin_width()).trunc() as usize;
		bin.min(self.n_of_bins - 1)
	}

	#[must_use]
	#[allow(clippy::cast_precision_loss)]
	pub fn bin_width(&self) -> f64 {
		(self.interval.1 - self.interval.0) / self.n_of_bins as f64
	}

	#[must_use]
	#[allow(clippy::cast_precision_loss)]
	pub fn bin_to_range_start(&self, bin: usize) -> f64 {
		debug_assert!(
			bin < self.n_of_bins,
			"index {} is out of range. n_of_bins is {}",
			bin,
			self.n_of_bins
		);
		self.interval.0 + self.bin_width() * bin as f64
	}

	#[must_use]
	pub fn bin_midpoint(&self, bin: usize) -> f64 {
		self.bin_to_range_start(bin) + self.bin_width() / 2.
	}

	#[must_use]
	pub fn bin_range(&self, bin: usize) -> (f64, f64) {
		let start = self.bin_to_range_start(bin);
		(start, start + self.bin_width())
	}

	#[must_use]
	pub fn n_of_bins(&self) -> usize {
		self.n_of_bins
	}

	#[must_use]
	pub fn interval(&self) -> (f64, f64) {
		self.interval
	}

	#[must_use]
	pub fn partitions(&self) -> Vec<(f64, f64)> {
		(0..self.n_of_bins).map(|i| self.bin_range(i)).collect()
	}

	/// The `n_of_bins + 1` boundaries of the grid, first to last.
	#[must_use]
	#[allow(clippy::cast_precision_loss)]
	pub fn edges(&self) -> Vec<f64> {
		(0..=self.n_of_bins)
			.map(|i| self.interval.0 + self.bin_width() * i as f64)
			.collect()
	}

	/// Count how many of `values` land in each bin.
	#[must_use]
	pub fn histogram(&self, values: &[f64]) -> Vec<usize> {
		let mut counts = vec![0; self.n_of_bins];
		for &value in values {
			counts[self.value_to_bin(value)] += 1;
		}
		counts
	}
}
