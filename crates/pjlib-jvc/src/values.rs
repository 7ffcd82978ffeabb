//! Value types and the codec between typed values and wire bytes.
//!
//! Every catalog entry that carries a value declares a [`ValueType`]. The
//! type owns the decode direction (wire bytes to [`Value`]) and the parse
//! direction (a caller-supplied argument string to [`Value`]); the value owns
//! the encode direction.
//!
//! # Wire forms
//!
//! | Type             | Wire form                                            |
//! |------------------|------------------------------------------------------|
//! | Symbolic         | fixed ASCII code per symbol (`0`, `0C`, `7305`, ...) |
//! | Numeric          | 4 ASCII hex digits, 16-bit two's complement          |
//! | CustomGammaTable | 256 x 16-bit little-endian, raw bytes (512 bytes)    |
//! | PanelAlignment   | 256 x signed byte, raw bytes (256 bytes)             |
//! | Decoded          | ASCII code looked up in a fixed label table          |

use std::fmt;

use serde::ser::{Serialize, SerializeSeq, Serializer};

use pjlib_core::error::{Error, Result};

/// Number of entries in a gamma or panel alignment table.
pub const TABLE_ENTRIES: usize = 256;

/// Wire length of a custom gamma table.
pub const GAMMA_TABLE_BYTES: usize = TABLE_ENTRIES * 2;

/// Wire length of a panel alignment table.
pub const PANEL_ALIGNMENT_BYTES: usize = TABLE_ENTRIES;

/// What a command's value type allows.
///
/// `write_only` always implies `no_verify`: a value that cannot be read
/// cannot be read back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub read_only: bool,
    pub write_only: bool,
    pub no_verify: bool,
    pub binary: bool,
}

impl Capabilities {
    pub const NONE: Capabilities = Capabilities {
        read_only: false,
        write_only: false,
        no_verify: false,
        binary: false,
    };
    pub const READ_ONLY: Capabilities = Capabilities {
        read_only: true,
        ..Capabilities::NONE
    };
    pub const WRITE_ONLY: Capabilities = Capabilities {
        write_only: true,
        no_verify: true,
        ..Capabilities::NONE
    };
    pub const NO_VERIFY: Capabilities = Capabilities {
        no_verify: true,
        ..Capabilities::NONE
    };
    pub const BINARY: Capabilities = Capabilities {
        binary: true,
        ..Capabilities::NONE
    };

    /// Whether a write can be confirmed by reading the value back.
    pub fn verifiable(&self) -> bool {
        !self.no_verify && !self.write_only
    }
}

/// One named member of a [`SymbolSet`].
#[derive(Debug)]
pub struct Symbol {
    pub name: &'static str,
    pub code: &'static [u8],
}

impl Symbol {
    pub const fn new(name: &'static str, code: &'static [u8]) -> Self {
        Symbol { name, code }
    }
}

/// A closed enumeration of named symbols, each with a fixed wire code.
#[derive(Debug)]
pub struct SymbolSet {
    pub name: &'static str,
    pub caps: Capabilities,
    pub symbols: &'static [Symbol],
}

impl SymbolSet {
    pub fn by_name(&self, name: &str) -> Option<&'static Symbol> {
        self.symbols.iter().find(|s| s.name == name)
    }

    pub fn by_code(&self, code: &[u8]) -> Option<&'static Symbol> {
        self.symbols.iter().find(|s| s.code == code)
    }
}

/// A one-way lookup from device codes to human-readable labels.
#[derive(Debug)]
pub struct DecodeTable {
    pub name: &'static str,
    pub entries: &'static [(&'static str, &'static str)],
}

impl DecodeTable {
    pub fn label(&self, code: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, label)| *label)
    }
}

/// The declared value type of a catalog entry.
#[derive(Debug, Clone, Copy)]
pub enum ValueType {
    Symbolic(&'static SymbolSet),
    Numeric,
    NumericReadOnly,
    GammaTable,
    PanelAlignment,
    Decoded(&'static DecodeTable),
}

impl PartialEq for ValueType {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for ValueType {}

impl ValueType {
    /// The type's name as used in dotted commands (`Power.PowerState.LampOn`).
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::Symbolic(set) => set.name,
            ValueType::Numeric => "Numeric",
            ValueType::NumericReadOnly => "NumericReadOnly",
            ValueType::GammaTable => "CustomGammaTable",
            ValueType::PanelAlignment => "PanelAlignment",
            ValueType::Decoded(table) => table.name,
        }
    }

    pub fn capabilities(&self) -> Capabilities {
        match self {
            ValueType::Symbolic(set) => set.caps,
            ValueType::Numeric => Capabilities::NONE,
            ValueType::NumericReadOnly | ValueType::Decoded(_) => Capabilities::READ_ONLY,
            ValueType::GammaTable | ValueType::PanelAlignment => Capabilities::BINARY,
        }
    }

    /// Fixed wire length for binary types.
    pub fn binary_len(&self) -> Option<usize> {
        match self {
            ValueType::GammaTable => Some(GAMMA_TABLE_BYTES),
            ValueType::PanelAlignment => Some(PANEL_ALIGNMENT_BYTES),
            _ => None,
        }
    }

    /// Decode a response payload (framing already stripped) into a value.
    pub fn decode(&self, raw: &[u8]) -> Result<Value> {
        match *self {
            ValueType::Symbolic(set) => set
                .by_code(raw)
                .map(|symbol| Value::Symbolic(set, symbol))
                .ok_or_else(|| {
                    Error::BadValue(format!("unknown {} code {}", set.name, raw.escape_ascii()))
                }),
            ValueType::Numeric | ValueType::NumericReadOnly => decode_numeric(raw).map(Value::Numeric),
            ValueType::GammaTable => decode_le16_table(raw).map(Value::GammaTable),
            ValueType::PanelAlignment => decode_s8_table(raw).map(Value::PanelAlignment),
            ValueType::Decoded(table) => {
                let code = String::from_utf8_lossy(raw);
                let code = code.trim().trim_matches('"');
                table
                    .label(code)
                    .map(|label| Value::Decoded(table, label))
                    .ok_or_else(|| Error::BadValue(format!("unknown {} code {}", table.name, code)))
            }
        }
    }

    /// Build a value from a caller-supplied argument string.
    ///
    /// Symbolic types take a symbol name, numerics a decimal integer, and
    /// tables a comma-separated list of integers.
    pub fn parse(&self, arg: &str) -> Result<Value> {
        match *self {
            ValueType::Symbolic(set) => set
                .by_name(arg)
                .map(|symbol| Value::Symbolic(set, symbol))
                .ok_or_else(|| Error::BadValue(format!("{} has no symbol {}", set.name, arg))),
            ValueType::Numeric | ValueType::NumericReadOnly => {
                let n: i64 = arg
                    .trim()
                    .parse()
                    .map_err(|_| Error::BadValue(format!("{} is not an integer", arg)))?;
                Value::numeric(n)
            }
            ValueType::GammaTable => parse_list(arg)?
                .into_iter()
                .map(|n| {
                    i16::try_from(n).map_err(|_| Error::BadValue(format!("{} out of range", n)))
                })
                .collect::<Result<Vec<_>>>()
                .and_then(Value::gamma_table),
            ValueType::PanelAlignment => parse_list(arg)?
                .into_iter()
                .map(|n| {
                    i8::try_from(n).map_err(|_| Error::BadValue(format!("{} out of range", n)))
                })
                .collect::<Result<Vec<_>>>()
                .and_then(Value::panel_alignment),
            ValueType::Decoded(table) => Err(Error::BadValue(format!(
                "{} values are decoded from the device, not written",
                table.name
            ))),
        }
    }
}

/// A typed command payload.
#[derive(Debug, Clone)]
pub enum Value {
    Symbolic(&'static SymbolSet, &'static Symbol),
    Numeric(i16),
    GammaTable(Vec<i16>),
    PanelAlignment(Vec<i8>),
    Decoded(&'static DecodeTable, &'static str),
}

impl Value {
    /// A numeric value; fails with [`Error::BadValue`] outside the signed 16-bit range.
    pub fn numeric(n: i64) -> Result<Value> {
        i16::try_from(n)
            .map(Value::Numeric)
            .map_err(|_| Error::BadValue(format!("{} out of range", n)))
    }

    /// A gamma table; must have exactly 256 entries.
    pub fn gamma_table(entries: Vec<i16>) -> Result<Value> {
        check_entries(entries.len())?;
        Ok(Value::GammaTable(entries))
    }

    /// A panel alignment table; must have exactly 256 entries.
    pub fn panel_alignment(entries: Vec<i8>) -> Result<Value> {
        check_entries(entries.len())?;
        Ok(Value::PanelAlignment(entries))
    }

    /// A symbolic value looked up by set and symbol name.
    pub fn symbol(set: &'static SymbolSet, name: &str) -> Result<Value> {
        ValueType::Symbolic(set).parse(name)
    }

    /// Name of the variant's type, comparable with [`ValueType::name`].
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Symbolic(set, _) => set.name,
            Value::Numeric(_) => "Numeric",
            Value::GammaTable(_) => "CustomGammaTable",
            Value::PanelAlignment(_) => "PanelAlignment",
            Value::Decoded(table, _) => table.name,
        }
    }

    /// Whether this value may be sent for a command declared as `ty`.
    pub fn matches(&self, ty: &ValueType) -> bool {
        match (self, ty) {
            (Value::Symbolic(set, _), ValueType::Symbolic(expected)) => set.name == expected.name,
            (Value::Numeric(_), ValueType::Numeric | ValueType::NumericReadOnly) => true,
            (Value::GammaTable(_), ValueType::GammaTable) => true,
            (Value::PanelAlignment(_), ValueType::PanelAlignment) => true,
            (Value::Decoded(table, _), ValueType::Decoded(expected)) => table.name == expected.name,
            _ => false,
        }
    }

    /// The symbol name, for symbolic values.
    pub fn symbol_name(&self) -> Option<&'static str> {
        match self {
            Value::Symbolic(_, symbol) => Some(symbol.name),
            _ => None,
        }
    }

    /// Wire encoding of this value.
    pub fn encode(&self) -> Result<Vec<u8>> {
        match self {
            Value::Symbolic(_, symbol) => Ok(symbol.code.to_vec()),
            Value::Numeric(n) => Ok(encode_numeric(*n)),
            Value::GammaTable(entries) => {
                check_entries(entries.len())?;
                Ok(entries.iter().flat_map(|v| v.to_le_bytes()).collect())
            }
            Value::PanelAlignment(entries) => {
                check_entries(entries.len())?;
                Ok(entries.iter().map(|v| *v as u8).collect())
            }
            Value::Decoded(table, _) => Err(Error::BadValue(format!(
                "{} values cannot be encoded",
                table.name
            ))),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Symbolic(a_set, a), Value::Symbolic(b_set, b)) => {
                a_set.name == b_set.name && a.name == b.name
            }
            (Value::Numeric(a), Value::Numeric(b)) => a == b,
            (Value::GammaTable(a), Value::GammaTable(b)) => a == b,
            (Value::PanelAlignment(a), Value::PanelAlignment(b)) => a == b,
            (Value::Decoded(a_table, a), Value::Decoded(b_table, b)) => {
                a_table.name == b_table.name && a == b
            }
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Symbolic(_, symbol) => f.write_str(symbol.name),
            Value::Numeric(n) => write!(f, "{}", n),
            Value::GammaTable(entries) => write_list(f, entries),
            Value::PanelAlignment(entries) => write_list(f, entries),
            Value::Decoded(_, label) => f.write_str(label),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Value::Symbolic(_, symbol) => serializer.serialize_str(symbol.name),
            Value::Numeric(n) => serializer.serialize_i16(*n),
            Value::GammaTable(entries) => {
                let mut seq = serializer.serialize_seq(Some(entries.len()))?;
                for v in entries {
                    seq.serialize_element(v)?;
                }
                seq.end()
            }
            Value::PanelAlignment(entries) => {
                let mut seq = serializer.serialize_seq(Some(entries.len()))?;
                for v in entries {
                    seq.serialize_element(v)?;
                }
                seq.end()
            }
            Value::Decoded(_, label) => serializer.serialize_str(label),
        }
    }
}

/// Encode a signed 16-bit value as 4 uppercase ASCII hex digits.
pub fn encode_numeric(n: i16) -> Vec<u8> {
    format!("{:04X}", n as u16).into_bytes()
}

/// Decode 4 ASCII hex digits as a signed 16-bit value.
pub fn decode_numeric(raw: &[u8]) -> Result<i16> {
    if raw.len() != 4 {
        return Err(Error::BadValue(format!(
            "{} is not 4 bytes",
            raw.escape_ascii()
        )));
    }
    if !raw.iter().all(u8::is_ascii_hexdigit) {
        return Err(Error::BadValue(format!(
            "{} is not ASCII hex",
            raw.escape_ascii()
        )));
    }
    let text = std::str::from_utf8(raw)
        .map_err(|_| Error::BadValue(format!("{} is not ASCII hex", raw.escape_ascii())))?;
    u16::from_str_radix(text, 16)
        .map(|v| v as i16)
        .map_err(|_| Error::BadValue(format!("{} is not ASCII hex", text)))
}

fn decode_le16_table(raw: &[u8]) -> Result<Vec<i16>> {
    if raw.len() != GAMMA_TABLE_BYTES {
        return Err(Error::BadValue(format!(
            "gamma table is {} bytes, expected {}",
            raw.len(),
            GAMMA_TABLE_BYTES
        )));
    }
    Ok(raw
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
        .collect())
}

fn decode_s8_table(raw: &[u8]) -> Result<Vec<i8>> {
    if raw.len() != PANEL_ALIGNMENT_BYTES {
        return Err(Error::BadValue(format!(
            "panel alignment is {} bytes, expected {}",
            raw.len(),
            PANEL_ALIGNMENT_BYTES
        )));
    }
    Ok(raw.iter().map(|b| *b as i8).collect())
}

fn check_entries(len: usize) -> Result<()> {
    if len == TABLE_ENTRIES {
        Ok(())
    } else {
        Err(Error::BadValue(format!(
            "table has {} entries, expected {}",
            len, TABLE_ENTRIES
        )))
    }
}

fn parse_list(arg: &str) -> Result<Vec<i64>> {
    arg.split(',')
        .map(|item| {
            item.trim()
                .parse::<i64>()
                .map_err(|_| Error::BadValue(format!("{} is not an integer", item)))
        })
        .collect()
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, entries: &[T]) -> fmt::Result {
    for (i, v) in entries.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{}", v)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ANAMORPHIC, HDR_DATA, PICTURE_MODE, POWER_STATE, SOURCE_DATA};

    // ---------------------------------------------------------------
    // Numeric
    // ---------------------------------------------------------------

    #[test]
    fn numeric_encodes_twos_complement_hex() {
        assert_eq!(encode_numeric(0), b"0000");
        assert_eq!(encode_numeric(10), b"000A");
        assert_eq!(encode_numeric(-1), b"FFFF");
        assert_eq!(encode_numeric(-32768), b"8000");
        assert_eq!(encode_numeric(32767), b"7FFF");
    }

    #[test]
    fn numeric_decodes_signed() {
        assert_eq!(decode_numeric(b"0000").unwrap(), 0);
        assert_eq!(decode_numeric(b"FFF6").unwrap(), -10);
        assert_eq!(decode_numeric(b"8000").unwrap(), -32768);
        assert_eq!(decode_numeric(b"7fff").unwrap(), 32767);
    }

    #[test]
    fn numeric_codec_is_lossless() {
        for v in i16::MIN..=i16::MAX {
            assert_eq!(decode_numeric(&encode_numeric(v)).unwrap(), v, "{}", v);
        }
    }

    #[test]
    fn numeric_rejects_wrong_length_and_junk() {
        assert!(matches!(decode_numeric(b"000"), Err(Error::BadValue(_))));
        assert!(matches!(decode_numeric(b"00000"), Err(Error::BadValue(_))));
        assert!(matches!(decode_numeric(b"00G0"), Err(Error::BadValue(_))));
        assert!(matches!(decode_numeric(b"+FFF"), Err(Error::BadValue(_))));
        assert!(matches!(decode_numeric(b"-001"), Err(Error::BadValue(_))));
    }

    #[test]
    fn numeric_construction_is_range_checked() {
        assert_eq!(Value::numeric(-32768).unwrap(), Value::Numeric(i16::MIN));
        assert!(matches!(Value::numeric(32768), Err(Error::BadValue(_))));
        assert!(matches!(Value::numeric(-32769), Err(Error::BadValue(_))));
        assert!(matches!(
            ValueType::Numeric.parse("40000"),
            Err(Error::BadValue(_))
        ));
        assert_eq!(ValueType::Numeric.parse("-5").unwrap(), Value::Numeric(-5));
    }

    // ---------------------------------------------------------------
    // Symbolic
    // ---------------------------------------------------------------

    #[test]
    fn symbolic_round_trips() {
        let ty = ValueType::Symbolic(&PICTURE_MODE);
        for symbol in PICTURE_MODE.symbols {
            let value = ty.parse(symbol.name).unwrap();
            assert_eq!(value.encode().unwrap(), symbol.code);
            assert_eq!(ty.decode(symbol.code).unwrap(), value);
        }
    }

    #[test]
    fn symbolic_unknown_code_is_bad_value() {
        let ty = ValueType::Symbolic(&POWER_STATE);
        assert!(matches!(ty.decode(b"9"), Err(Error::BadValue(_))));
        assert!(matches!(ty.parse("Sleeping"), Err(Error::BadValue(_))));
    }

    #[test]
    fn symbolic_equality_is_by_symbol() {
        let a = Value::symbol(&ANAMORPHIC, "A").unwrap();
        let b = ValueType::Symbolic(&ANAMORPHIC).decode(b"1").unwrap();
        let off = Value::symbol(&ANAMORPHIC, "Off").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, off);
        assert_eq!(a.symbol_name(), Some("A"));
    }

    // ---------------------------------------------------------------
    // Tables
    // ---------------------------------------------------------------

    #[test]
    fn gamma_table_is_le16() {
        let mut entries = vec![0i16; TABLE_ENTRIES];
        entries[0] = 0x0102;
        entries[255] = -2;
        let value = Value::gamma_table(entries.clone()).unwrap();
        let wire = value.encode().unwrap();
        assert_eq!(wire.len(), GAMMA_TABLE_BYTES);
        assert_eq!(&wire[..2], &[0x02, 0x01]);
        assert_eq!(&wire[510..], &[0xFE, 0xFF]);
        assert_eq!(ValueType::GammaTable.decode(&wire).unwrap(), value);
    }

    #[test]
    fn panel_alignment_is_signed_bytes() {
        let mut entries = vec![0i8; TABLE_ENTRIES];
        entries[1] = -1;
        entries[2] = 127;
        let wire = Value::panel_alignment(entries.clone()).unwrap().encode().unwrap();
        assert_eq!(&wire[..3], &[0x00, 0xFF, 0x7F]);
        assert_eq!(
            ValueType::PanelAlignment.decode(&wire).unwrap(),
            Value::PanelAlignment(entries)
        );
    }

    #[test]
    fn table_lengths_are_enforced() {
        assert!(matches!(Value::gamma_table(vec![0; 255]), Err(Error::BadValue(_))));
        assert!(matches!(Value::panel_alignment(vec![0; 257]), Err(Error::BadValue(_))));
        assert!(matches!(
            ValueType::GammaTable.decode(&[0u8; 256]),
            Err(Error::BadValue(_))
        ));
        assert!(matches!(
            ValueType::PanelAlignment.decode(&[0u8; 512]),
            Err(Error::BadValue(_))
        ));
    }

    #[test]
    fn panel_alignment_parse_rejects_out_of_range_entries() {
        let mut arg = vec!["0"; TABLE_ENTRIES];
        arg[0] = "200";
        assert!(matches!(
            ValueType::PanelAlignment.parse(&arg.join(",")),
            Err(Error::BadValue(_))
        ));
    }

    // ---------------------------------------------------------------
    // Decoded
    // ---------------------------------------------------------------

    #[test]
    fn decoded_looks_up_label() {
        let ty = ValueType::Decoded(&SOURCE_DATA);
        assert_eq!(ty.decode(b"0A").unwrap().to_string(), "1080p60");
        assert_eq!(
            ValueType::Decoded(&HDR_DATA).decode(b"2").unwrap().to_string(),
            "SMPTE ST 2084"
        );
    }

    #[test]
    fn decoded_unknown_code_is_bad_value() {
        let ty = ValueType::Decoded(&SOURCE_DATA);
        assert!(matches!(ty.decode(b"FF"), Err(Error::BadValue(_))));
    }

    #[test]
    fn decoded_cannot_be_written() {
        let value = ValueType::Decoded(&HDR_DATA).decode(b"0").unwrap();
        assert!(matches!(value.encode(), Err(Error::BadValue(_))));
        assert!(matches!(
            ValueType::Decoded(&HDR_DATA).parse("SDR"),
            Err(Error::BadValue(_))
        ));
    }

    // ---------------------------------------------------------------
    // Presentation
    // ---------------------------------------------------------------

    #[test]
    fn values_serialize_by_variant() {
        let power = Value::symbol(&POWER_STATE, "LampOn").unwrap();
        assert_eq!(serde_json::to_string(&power).unwrap(), "\"LampOn\"");
        assert_eq!(serde_json::to_string(&Value::Numeric(-3)).unwrap(), "-3");
        let hdr = ValueType::Decoded(&HDR_DATA).decode(b"1").unwrap();
        assert_eq!(serde_json::to_string(&hdr).unwrap(), "\"HDR\"");
    }

    #[test]
    fn matches_checks_declared_type() {
        let power = Value::symbol(&POWER_STATE, "Standby").unwrap();
        assert!(power.matches(&ValueType::Symbolic(&POWER_STATE)));
        assert!(!power.matches(&ValueType::Symbolic(&PICTURE_MODE)));
        assert!(!power.matches(&ValueType::Numeric));
        assert!(Value::Numeric(1).matches(&ValueType::NumericReadOnly));
    }
}
