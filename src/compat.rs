//! The Hangul Compatibility Jamo block: standalone jamo and their mapping
//! to and from the component values used by syllable arithmetic.

use crate::error::{Block, Error};
use crate::syllable;
use crate::types::{JamoType, bmp_char};

const COMPAT_FIRST: u32 = 0x3130;
const COMPAT_LAST: u32 = 0x318F;

// Vowel sub-range, ㅏ..=ㅣ. Contiguous and in the same order as the
// conjoining vowels, so both directions are plain offsets.
pub(crate) const V_FIRST: u32 = 0x314F;
const V_LAST: u32 = 0x3163;

/// Compatibility consonants in initial-consonant value order.
pub(crate) const INITIALS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ',
    'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// Compatibility consonants in final-consonant value order, starting at
/// value 1. Value 0 means "no final consonant" and has no character.
pub(crate) const FINALS: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ',
    'ㅁ', 'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// Returns true iff `c` is a compatibility jamo (U+3130..=U+318F).
pub fn is_hangul_compatibility_jamo(c: char) -> bool {
    (COMPAT_FIRST..=COMPAT_LAST).contains(&(c as u32))
}

fn ensure_in_block(c: char) -> Result<(), Error> {
    if is_hangul_compatibility_jamo(c) {
        Ok(())
    } else {
        Err(Error::OutOfRange {
            ch: c,
            block: Block::CompatibilityJamo,
        })
    }
}

/// The initial-consonant value of a compatibility consonant.
///
/// Consonant clusters, vowels, obsolete letters and the fillers have no
/// initial role and fail with `Unmapped`.
pub fn initial_value(c: char) -> Result<u8, Error> {
    ensure_in_block(c)?;
    INITIALS
        .iter()
        .position(|&jamo| jamo == c)
        .map(|index| index as u8)
        .ok_or(Error::Unmapped {
            ch: c,
            role: JamoType::InitialConsonant,
        })
}

/// The medial-vowel value of a compatibility vowel (ㅏ..=ㅣ).
pub fn medial_value(c: char) -> Result<u8, Error> {
    ensure_in_block(c)?;
    let code = c as u32;
    if !(V_FIRST..=V_LAST).contains(&code) {
        return Err(Error::Unmapped {
            ch: c,
            role: JamoType::MedialVowel,
        });
    }
    Ok((code - V_FIRST) as u8)
}

/// The final-consonant value of a compatibility consonant (1..=27).
///
/// Value 0 (no final consonant) is never produced from this direction;
/// characters with no final role fail with `Unmapped`.
pub fn final_value(c: char) -> Result<u8, Error> {
    ensure_in_block(c)?;
    FINALS
        .iter()
        .position(|&jamo| jamo == c)
        .map(|index| index as u8 + 1)
        .ok_or(Error::Unmapped {
            ch: c,
            role: JamoType::FinalConsonant,
        })
}

/// The component value of a compatibility jamo, selected by role.
pub fn component_value(c: char, role: JamoType) -> Result<u8, Error> {
    match role {
        JamoType::InitialConsonant => initial_value(c),
        JamoType::MedialVowel => medial_value(c),
        JamoType::FinalConsonant => final_value(c),
    }
}

/// The compatibility consonant for an initial-consonant value (0..=18).
pub fn from_initial(value: u8) -> Result<char, Error> {
    JamoType::InitialConsonant.check_value(value)?;
    Ok(INITIALS[usize::from(value)])
}

/// The compatibility vowel for a medial-vowel value (0..=20).
pub fn from_medial(value: u8) -> Result<char, Error> {
    JamoType::MedialVowel.check_value(value)?;
    Ok(bmp_char(V_FIRST + u32::from(value)))
}

/// The compatibility consonant for a final-consonant value (0..=27).
///
/// Value 0 means "no final consonant" and yields `Ok(None)`.
pub fn from_final(value: u8) -> Result<Option<char>, Error> {
    JamoType::FinalConsonant.check_value(value)?;
    if value == 0 {
        return Ok(None);
    }
    Ok(Some(FINALS[usize::from(value) - 1]))
}

/// The compatibility jamo for a component value, selected by role.
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

/// One role of a precomposed syllable as a compatibility jamo.
///
/// `Ok(None)` when the final-consonant role is requested for a syllable
/// without one.
pub fn of_syllable(c: char, role: JamoType) -> Result<Option<char>, Error> {
    from_value(syllable::component_value(c, role)?, role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_block_bounds() {
        assert!(is_hangul_compatibility_jamo('\u{3130}'));
        assert!(is_hangul_compatibility_jamo('ㄱ'));
        assert!(is_hangul_compatibility_jamo('\u{318F}'));
        assert!(!is_hangul_compatibility_jamo('\u{312F}'));
        assert!(!is_hangul_compatibility_jamo('\u{3190}'));
        assert!(!is_hangul_compatibility_jamo('가'));
    }

    #[test]
    fn maps_consonants_to_initial_values() {
        assert_eq!(initial_value('ㄱ'), Ok(0));
        assert_eq!(initial_value('ㄸ'), Ok(4));
        assert_eq!(initial_value('ㅆ'), Ok(10));
        assert_eq!(initial_value('ㅎ'), Ok(18));
    }

    #[test]
    fn characters_without_an_initial_role_are_unmapped() {
        // A cluster, a vowel and an obsolete letter (ㅥ).
        for c in ['ㄳ', 'ㅏ', '\u{3165}'] {
            assert_eq!(
                initial_value(c),
                Err(Error::Unmapped {
                    ch: c,
                    role: JamoType::InitialConsonant
                })
            );
        }
    }

    #[test]
    fn maps_vowels_to_medial_values() {
        assert_eq!(medial_value('ㅏ'), Ok(0));
        assert_eq!(medial_value('ㅛ'), Ok(12));
        assert_eq!(medial_value('ㅣ'), Ok(20));
        assert_eq!(
            medial_value('ㄱ'),
            Err(Error::Unmapped {
                ch: 'ㄱ',
                role: JamoType::MedialVowel
            })
        );
        assert_eq!(
            medial_value('A'),
            Err(Error::OutOfRange {
                ch: 'A',
                block: Block::CompatibilityJamo
            })
        );
    }

    #[test]
    fn maps_consonants_to_final_values() {
        assert_eq!(final_value('ㄱ'), Ok(1));
        assert_eq!(final_value('ㄳ'), Ok(3));
        assert_eq!(final_value('ㄴ'), Ok(4));
        assert_eq!(final_value('ㅆ'), Ok(20));
        assert_eq!(final_value('ㅇ'), Ok(21));
        assert_eq!(final_value('ㅈ'), Ok(22));
        assert_eq!(final_value('ㅎ'), Ok(27));
    }

    #[test]
    fn characters_without_a_final_role_are_unmapped() {
        // ㄸ, ㅃ and ㅉ never close a syllable; vowels have no final role.
        for c in ['ㄸ', 'ㅃ', 'ㅉ', 'ㅏ'] {
            assert_eq!(
                final_value(c),
                Err(Error::Unmapped {
                    ch: c,
                    role: JamoType::FinalConsonant
                })
            );
        }
    }

    #[test]
    fn builds_compatibility_jamo_from_values() {
        assert_eq!(from_initial(0), Ok('ㄱ'));
        assert_eq!(from_initial(13), Ok('ㅉ'));
        assert_eq!(from_medial(0), Ok('ㅏ'));
        assert_eq!(from_medial(20), Ok('ㅣ'));
        assert_eq!(from_final(0), Ok(None));
        assert_eq!(from_final(3), Ok(Some('ㄳ')));
        assert_eq!(from_final(27), Ok(Some('ㅎ')));
    }

    #[test]
    fn rejects_values_past_each_role_range() {
        assert_eq!(
            from_initial(19),
            Err(Error::InvalidValue {
                value: 19,
                role: JamoType::InitialConsonant
            })
        );
        assert_eq!(
            from_medial(21),
            Err(Error::InvalidValue {
                value: 21,
                role: JamoType::MedialVowel
            })
        );
        assert_eq!(
            from_final(28),
            Err(Error::InvalidValue {
                value: 28,
                role: JamoType::FinalConsonant
            })
        );
    }

    #[test]
    fn projects_one_role_of_a_syllable() {
        assert_eq!(of_syllable('한', JamoType::InitialConsonant), Ok(Some('ㅎ')));
        assert_eq!(of_syllable('한', JamoType::MedialVowel), Ok(Some('ㅏ')));
        assert_eq!(of_syllable('한', JamoType::FinalConsonant), Ok(Some('ㄴ')));
        assert_eq!(of_syllable('가', JamoType::FinalConsonant), Ok(None));
        assert_eq!(
            of_syllable('ㄱ', JamoType::InitialConsonant),
            Err(Error::OutOfRange {
                ch: 'ㄱ',
                block: Block::Syllables
            })
        );
    }
}
