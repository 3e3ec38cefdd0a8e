//! The Hangul Syllables block: recognition and arithmetic decomposition of
//! precomposed syllable blocks, and their assembly from component values.

use crate::error::{Block, Error};
use crate::types::{JamoType, bmp_char};

// Syllable arithmetic. The block is one contiguous run of
// 19 initials x 21 medials x 28 finals starting at '가'.
const S_BASE: u32 = 0xAC00;
const L_COUNT: u32 = 19;
const V_COUNT: u32 = 21;
const T_COUNT: u32 = 28;
const N_COUNT: u32 = V_COUNT * T_COUNT;
const S_COUNT: u32 = L_COUNT * N_COUNT;

/// Returns true iff `c` is a precomposed Hangul syllable (U+AC00..=U+D7A3).
pub fn is_hangul_syllable(c: char) -> bool {
    (S_BASE..S_BASE + S_COUNT).contains(&(c as u32))
}

/// Splits a precomposed syllable into its (initial, medial, final)
/// component values.
///
/// The offset from the block start is a combinatorial index in base
/// (19, 21, 28); the final value 0 means the syllable has no final
/// consonant.
pub fn decompose(c: char) -> Result<(u8, u8, u8), Error> {
    if !is_hangul_syllable(c) {
        return Err(Error::OutOfRange {
            ch: c,
            block: Block::Syllables,
        });
    }
    let offset = c as u32 - S_BASE;
    let initial = offset / N_COUNT;
    let medial = offset % N_COUNT / T_COUNT;
    let final_ = offset % T_COUNT;
    Ok((initial as u8, medial as u8, final_ as u8))
}

/// The initial-consonant value of a precomposed syllable (0..=18).
pub fn initial_value(c: char) -> Result<u8, Error> {
    decompose(c).map(|(initial, _, _)| initial)
}

/// The medial-vowel value of a precomposed syllable (0..=20).
pub fn medial_value(c: char) -> Result<u8, Error> {
    decompose(c).map(|(_, medial, _)| medial)
}

/// The final-consonant value of a precomposed syllable (0..=27, 0 meaning
/// no final consonant).
pub fn final_value(c: char) -> Result<u8, Error> {
    decompose(c).map(|(_, _, final_)| final_)
}

/// One component value of a precomposed syllable, selected by role.
pub fn component_value(c: char, role: JamoType) -> Result<u8, Error> {
    match role {
        JamoType::InitialConsonant => initial_value(c),
        JamoType::MedialVowel => medial_value(c),
        JamoType::FinalConsonant => final_value(c),
    }
}

/// Assembles a precomposed syllable from its component values; the exact
/// inverse of [`decompose`].
///
/// A `final_` of 0 produces a syllable with no final consonant. Values
/// outside their role's range fail with `InvalidValue` and are never
/// clamped.
pub fn compose(initial: u8, medial: u8, final_: u8) -> Result<char, Error> {
    JamoType::InitialConsonant.check_value(initial)?;
    JamoType::MedialVowel.check_value(medial)?;
    JamoType::FinalConsonant.check_value(final_)?;

    let code = S_BASE
        + u32::from(initial) * N_COUNT
        + u32::from(medial) * T_COUNT
        + u32::from(final_);
    Ok(bmp_char(code))
}
