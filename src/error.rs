use std::fmt;

use thiserror::Error;

use crate::types::JamoType;

/// The three Unicode blocks this crate converts between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block {
    /// Hangul Syllables, U+AC00..=U+D7A3.
    Syllables,
    /// Hangul Jamo (conjoining), U+1100..=U+11FF.
    Jamo,
    /// Hangul Compatibility Jamo, U+3130..=U+318F.
    CompatibilityJamo,
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Block::Syllables => "Hangul Syllables",
            Block::Jamo => "Hangul Jamo",
            Block::CompatibilityJamo => "Hangul Compatibility Jamo",
        };
        f.write_str(name)
    }
}

/// Errors produced by the conversion functions.
///
/// Every error is deterministic for a given input. Callers that want to
/// avoid the fallible paths can pre-validate with the range predicates and
/// `jamo::jamo_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// The character is not in the block the function operates on.
    #[error("character '{ch}' is not in the {block} block")]
    OutOfRange { ch: char, block: Block },

    /// The character is in the Hangul Jamo block but has no Hangul
    /// Compatibility Jamo equivalent (archaic jamo and the fillers).
    #[error("character '{0}' is not convertible to Hangul Compatibility Jamo")]
    Unconvertible(char),

    /// The character carries no component value in the requested role.
    #[error("character '{ch}' has no {role} value")]
    Unmapped { ch: char, role: JamoType },

    /// A component value outside the valid range for its role.
    #[error("{value} is not a valid {role} value")]
    InvalidValue { value: u8, role: JamoType },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_block_and_role() {
        let err = Error::OutOfRange {
            ch: 'a',
            block: Block::Syllables,
        };
        assert_eq!(
            err.to_string(),
            "character 'a' is not in the Hangul Syllables block"
        );

        let err = Error::Unmapped {
            ch: 'ㅏ',
            role: JamoType::FinalConsonant,
        };
        assert_eq!(err.to_string(), "character 'ㅏ' has no final consonant value");
    }
}
