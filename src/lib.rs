//! A library for converting single Hangul characters between the three
//! Unicode blocks that encode the Korean script: precomposed syllables,
//! conjoining jamo, and compatibility jamo.
//!
//! Every function is a pure mapping between characters and the component
//! values (initial consonant, medial vowel, final consonant) that index a
//! syllable block, so the whole crate is safely callable from any number
//! of threads.

/// A module for working with the Hangul Compatibility Jamo block.
pub mod compat;

/// A module for working with the conjoining Hangul Jamo block.
pub mod jamo;

/// A module for working with the Hangul Syllables block.
pub mod syllable;

mod error;
mod types;

pub use error::{Block, Error};
pub use types::JamoType;

pub use compat::is_hangul_compatibility_jamo;
pub use jamo::is_hangul_jamo;
pub use syllable::is_hangul_syllable;
