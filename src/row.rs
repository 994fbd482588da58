use crate::bits::BitAccumulator;
use crate::format::{guess_format, FieldTally, InsnFormat};

/// One decoder table entry: what the generated C line carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    pub mnemonic: String,
    pub format: InsnFormat,
    pub match_value: u32,
    pub mask_value: u32,
}

#[derive(thiserror::Error, Debug)]
pub enum RowError {
    #[error("malformed row (more than 32 instruction bits): {row}")]
    TooManyBits { row: String },
}

/// Parse one layout row into a [`Matcher`].
///
/// Field fragments are consumed until exactly 32 bits have been collected;
/// the next fragment is the mnemonic and anything after it is a trailing
/// comment. Overshooting 32 bits before the mnemonic is the one fatal
/// condition; everything else degrades to wildcard bits or an UNK tag.
pub fn parse_row(line: &str) -> Result<Matcher, RowError> {
    let mut acc = BitAccumulator::new();
    let mut tally = FieldTally::default();
    let mut mnemonic = String::new();

    for frag in line.split_whitespace() {
        if acc.len() > 32 {
            return Err(RowError::TooManyBits {
                row: line.to_string(),
            });
        }
        if acc.len() == 32 {
            // mnemonics never contain spaces
            mnemonic = frag.to_string();
            break;
        }

        for ch in frag.chars() {
            acc.push_char(ch);
        }
        tally.observe(frag);
    }

    Ok(Matcher {
        mnemonic,
        format: guess_format(&tally),
        match_value: acc.match_value(),
        mask_value: acc.mask_value(),
    })
}
