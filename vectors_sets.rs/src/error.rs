/// The single failure taxonomy shared across the workspace.
///
/// Every operation either returns a fully valid result or fails with one of
/// these variants before producing anything; there is no partial completion
/// and no recovery inside the core.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
	#[error("the lengths of the two vectors must match (expected {expected}, got {actual})")]
	LengthMismatch { expected: usize, actual: usize },
	#[error("value {value} is out of range 0..={max_index}")]
	ValueOutOfRange { value: usize, max_index: usize },
	#[error("cannot infer a max index from an empty set")]
	EmptySet,
	#[error("element {value} is not binary: this is to be called only on indicator vectors")]
	NonBinaryElement { value: usize },
	#[error("degenerate rotation: the computed half cycle {n} must be greater than 1")]
	DegenerateRotation { n: usize },
	#[error("modulus must be a positive integer")]
	ZeroModulus,
	#[error("an interval vector must have exactly 12 entries, got {len}")]
	WrongIntervalVectorLength { len: usize },
	#[error("invalid operation {name:?}: must be one of rotate, mirror, multiply, complement")]
	UnknownOperation { name: String },
	#[error("number of repeats must be at least 1")]
	ZeroRepeats,
	#[error("metrical data requires at least one start time")]
	NoStartTimes,
	#[error("bins per measure must be at least 1")]
	ZeroBins,
}
