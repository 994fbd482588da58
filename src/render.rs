use crate::row::Matcher;

/// Render one matcher as a C struct-initializer line for the decoder table.
///
/// The mnemonic and tag columns are padded to fixed minimum widths purely so
/// the generated table reads as a table; long mnemonics just widen the row.
/// The trailing 0 is the render-flags field, left for manual adjustment.
pub fn to_c_initializer(m: &Matcher) -> String {
    let mnemonic = format!("\"{}\", ", m.mnemonic);
    let tag = format!("{}, ", m.format);
    format!(
        "    {{ {mnemonic:<14}{tag:<8}0x{:08x}, 0x{:08x}, 0 }},",
        m.match_value, m.mask_value
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::InsnFormat;

    #[test]
    fn exact_layout() {
        let m = Matcher {
            mnemonic: "sext.h".into(),
            format: InsnFormat::Rr,
            match_value: 0x0000_5800,
            mask_value: 0xffff_fc00,
        };
        assert_eq!(
            to_c_initializer(&m),
            "    { \"sext.h\",     RR,     0x00005800, 0xfffffc00, 0 },"
        );
    }

    #[test]
    fn long_mnemonic_widens_column() {
        let m = Matcher {
            mnemonic: "amswap_db.wu".into(),
            format: InsnFormat::Rrr,
            match_value: 0,
            mask_value: 0,
        };
        assert_eq!(
            to_c_initializer(&m),
            "    { \"amswap_db.wu\", RRR,    0x00000000, 0x00000000, 0 },"
        );
    }
}
