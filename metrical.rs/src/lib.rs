//! Metrical-position histograms: bin note start times into equal divisions
//! of a measure (or of a whole piece) to expose the rhythmic profile that
//! the Fourier tools then analyze. Rendering the histograms is left to the
//! caller.

mod bins;
pub use bins::*;

mod onsets;
pub use onsets::*;

mod metrical_data;
pub use metrical_data::*;
