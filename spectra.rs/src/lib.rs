//! Fourier-magnitude spectra of pitch and rhythm profiles, polar form of
//! the complex coefficients, and the equivalence checks showing which
//! profile transforms leave the magnitude spectrum untouched.

mod magnitudes;
pub use magnitudes::*;

mod polar;
pub use polar::*;

mod equivalence;
pub use equivalence::*;

pub use rustfft::num_complex;
