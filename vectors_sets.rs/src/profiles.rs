//! Reference indicator vectors: a small selection of scale, chord, and
//! rhythm profiles that recur throughout the literature on Fourier methods,
//! shared here for tests, benches, and demos.

/// The major scale on pitch classes 0..=11 (here rooted on C).
pub const MAJOR_SCALE: [usize; 12] = [1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0, 1];

/// The major triad on pitch classes 0..=11.
pub const MAJOR_TRIAD: [usize; 12] = [1, 0, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0];

/// A dyad at the interval of a minor seventh (10 semitones).
pub const MINOR_SEVENTH_DYAD: [usize; 12] = [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0];

/// Bossa nova: 5 onsets in 16 slots.
pub const BOSSA_NOVA_5_IN_16: [usize; 16] = [1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 0];

/// The cinquillo pattern augmented to 16 slots.
pub const CINQUILLO_AUGMENTED: [usize; 16] = [1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0];

/// Son clave in 16 slots.
pub const SON_CLAVE: [usize; 16] = [1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 1, 0, 1, 0, 0, 0];

/// Tresillo: 3 onsets in 8 slots. Cf. [`PROTOTYPE_3_8_X3`].
pub const TRESILLO: [usize; 8] = [1, 0, 0, 1, 0, 0, 1, 0];

/// The four prototypes for 3 onsets in 8 slots.
pub const PROTOTYPE_3_8_X1: [usize; 8] = [1, 0, 0, 0, 0, 0, 1, 1];
pub const PROTOTYPE_3_8_X2: [usize; 8] = [1, 0, 0, 1, 1, 0, 0, 0];
/// Cf. [`TRESILLO`].
pub const PROTOTYPE_3_8_X3: [usize; 8] = [1, 0, 0, 1, 0, 0, 1, 0];
pub const PROTOTYPE_3_8_X4: [usize; 8] = [1, 0, 0, 0, 1, 0, 1, 0];
