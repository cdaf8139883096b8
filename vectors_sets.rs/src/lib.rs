//! Sets of integers (pitch classes, onset positions) and their vector
//! representations, plus the structure-preserving transforms and the circular
//! convolution that Fourier methods in music theory are built on.

mod error;
pub use error::*;

mod counts;
pub use counts::*;

mod transforms;
pub use transforms::*;

mod convolution;
pub use convolution::*;

pub mod profiles;
