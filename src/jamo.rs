//! The conjoining Hangul Jamo block: recognition, classification of a
//! character's role within a syllable, and projection onto the
//! Compatibility Jamo block.

use crate::compat;
use crate::error::{Block, Error};
use crate::syllable;
use crate::types::{JamoType, bmp_char};

// Block layout. The three sub-ranges are contiguous and ordered: initial
// consonants end with the choseong filler U+115F, medial vowels start at
// the jungseong filler U+1160 and run through U+11A7, final consonants
// fill the rest.
const JAMO_FIRST: u32 = 0x1100;
const JAMO_LAST: u32 = 0x11FF;
const INITIAL_LAST: u32 = 0x115F;
const MEDIAL_LAST: u32 = 0x11A7;

// Bases for component-value arithmetic. T_BASE sits one below the first
// final consonant so that final value 1 lands on U+11A8.
const L_BASE: u32 = 0x1100;
const V_BASE: u32 = 0x1161;
const T_BASE: u32 = 0x11A7;

// Last code point of the modern subset in each sub-range; everything past
// these is archaic and has no compatibility equivalent.
const L_MODERN_LAST: u32 = 0x1112; // ᄒ
const V_MODERN_LAST: u32 = 0x1175; // ᅵ
const T_MODERN_LAST: u32 = 0x11C2; // ᇂ

/// Returns true iff `c` is a conjoining jamo (U+1100..=U+11FF).
pub fn is_hangul_jamo(c: char) -> bool {
    (JAMO_FIRST..=JAMO_LAST).contains(&(c as u32))
}

/// Classifies a conjoining jamo by the role it plays in a syllable.
///
/// The sub-ranges are tested in order, so the choseong filler U+115F
/// classifies as an initial consonant and the jungseong filler U+1160
/// opens the medial sub-range, matching the Unicode block chart.
pub fn jamo_type(c: char) -> Result<JamoType, Error> {
    if !is_hangul_jamo(c) {
        return Err(Error::OutOfRange {
            ch: c,
            block: Block::Jamo,
        });
    }
    let code = c as u32;
    if code <= INITIAL_LAST {
        Ok(JamoType::InitialConsonant)
    } else if code <= MEDIAL_LAST {
        Ok(JamoType::MedialVowel)
    } else {
        Ok(JamoType::FinalConsonant)
    }
}

/// Converts a conjoining jamo to the equivalent compatibility jamo.
///
/// Only the modern subset converts: 19 initials, 21 vowels and 27 finals.
/// Archaic jamo and the two fillers fail with `Unconvertible`.
pub fn to_compatibility_jamo(c: char) -> Result<char, Error> {
    let code = c as u32;
    match jamo_type(c)? {
        JamoType::InitialConsonant => {
            if code > L_MODERN_LAST {
                return Err(Error::Unconvertible(c));
            }
            Ok(compat::INITIALS[(code - L_BASE) as usize])
        }
        JamoType::MedialVowel => {
            if !(V_BASE..=V_MODERN_LAST).contains(&code) {
                return Err(Error::Unconvertible(c));
            }
            // Compatibility vowels are contiguous and share the conjoining
            // order, so no table is needed.
            Ok(bmp_char(compat::V_FIRST + code - V_BASE))
        }
        JamoType::FinalConsonant => {
            if code > T_MODERN_LAST {
                return Err(Error::Unconvertible(c));
            }
            Ok(compat::FINALS[(code - T_BASE - 1) as usize])
        }
    }
}

/// The conjoining initial consonant for a component value (0..=18).
pub fn from_initial(value: u8) -> Result<char, Error> {
    JamoType::InitialConsonant.check_value(value)?;
    Ok(bmp_char(L_BASE + u32::from(value)))
}

/// The conjoining medial vowel for a component value (0..=20).
pub fn from_medial(value: u8) -> Result<char, Error> {
    JamoType::MedialVowel.check_value(value)?;
    Ok(bmp_char(V_BASE + u32::from(value)))
}

/// The conjoining final consonant for a component value (0..=27).
///
/// Value 0 means "no final consonant" and yields `Ok(None)` rather than a
/// character.
pub fn from_final(value: u8) -> Result<Option<char>, Error> {
    JamoType::FinalConsonant.check_value(value)?;
    if value == 0 {
        return Ok(None);
    }
    Ok(Some(bmp_char(T_BASE + u32::from(value))))
}

/// The conjoining jamo for a component value, selected by role.
///
/// `Ok(None)` only occurs for the absent final consonant (value 0 in the
/// final-consonant role).
pub fn from_value(value: u8, role: JamoType) -> Result<Option<char>, Error> {
    match role {
        JamoType::InitialConsonant => from_initial(value).map(Some),
        JamoType::MedialVowel => from_medial(value).map(Some),
        JamoType::FinalConsonant => from_final(value),
    }
}

/// Expands a precomposed syllable into its conjoining jamo sequence.
///
/// The result holds two characters (initial, medial) or three when the
/// syllable has a final consonant; the absent final is omitted entirely.
pub fn expand_syllable(c: char) -> Result<String, Error> {
    let (initial, medial, final_) = syllable::decompose(c)?;
    let mut jamo = String::with_capacity(9);
    jamo.push(from_initial(initial)?);
    jamo.push(from_medial(medial)?);
    if let Some(trailing) = from_final(final_)? {
        jamo.push(trailing);
    }
    Ok(jamo)
}

/// One role of a precomposed syllable as a conjoining jamo.
///
/// `Ok(None)` when the final-consonant role is requested for a syllable
/// without one.
pub fn of_syllable(c: char, role: JamoType) -> Result<Option<char>, Error> {
    from_value(syllable::component_value(c, role)?, role)
}
