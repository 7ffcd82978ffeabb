//! Command registry: lookup by name and introspection.
//!
//! The catalog itself is static data in [`crate::catalog`]; this module
//! indexes it once on first use and exposes a serialisable description of
//! every entry so that presentation layers can discover valid arguments.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use serde::Serialize;

use pjlib_core::error::{Error, Result};

use crate::catalog;
use crate::values::{Capabilities, Value, ValueType};

/// Name of the power command polled by the controller.
pub const POWER: &str = "Power";
/// Name of the anamorphic mode command.
pub const ANAMORPHIC: &str = "Anamorphic";
/// Name of the picture mode command.
pub const PICTURE_MODE: &str = "PictureMode";
/// Name of the installation mode command.
pub const INSTALLATION_MODE: &str = "InstallationMode";
/// Name of the remote-control passthrough command.
pub const REMOTE: &str = "Remote";

/// An immutable catalog entry.
#[derive(Debug)]
pub struct Command {
    /// Unique symbolic name.
    pub name: &'static str,
    /// 2-4 byte wire code. The first two bytes are echoed in acks.
    pub code: &'static [u8],
    /// `None` for raw action codes that carry no value.
    pub value_type: Option<ValueType>,
}

impl Command {
    pub const fn new(name: &'static str, code: &'static [u8], value_type: Option<ValueType>) -> Self {
        Command {
            name,
            code,
            value_type,
        }
    }

    /// Capabilities of this entry. Raw codes are write-only.
    pub fn capabilities(&self) -> Capabilities {
        self.value_type
            .map(|ty| ty.capabilities())
            .unwrap_or(Capabilities::WRITE_ONLY)
    }
}

static BY_NAME: LazyLock<HashMap<&'static str, &'static Command>> =
    LazyLock::new(|| catalog::all().iter().map(|c| (c.name, c)).collect());

/// Find a command by name.
pub fn find(name: &str) -> Option<&'static Command> {
    BY_NAME.get(name).copied()
}

/// Find a command by name, failing with [`Error::UnknownCommand`].
pub fn lookup(name: &str) -> Result<&'static Command> {
    find(name).ok_or_else(|| Error::UnknownCommand(name.to_string()))
}

/// Every catalog entry, in command-list order.
pub fn all() -> &'static [Command] {
    catalog::all()
}

/// Resolve a dotted `Name.Type.Value` string to a command and its value.
///
/// The type segment must name the command's declared type exactly, so a
/// macro written against an older catalog fails here rather than on the wire.
pub fn parse_dotted(entry: &str) -> Result<(&'static Command, Value)> {
    let mut parts = entry.splitn(3, '.');
    let (Some(name), Some(type_name), Some(arg)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(Error::BadValue(format!("{} is not Name.Type.Value", entry)));
    };
    let command = lookup(name)?;
    let ty = command
        .value_type
        .ok_or_else(|| Error::NotImplemented(command.name.to_string()))?;
    if ty.name() != type_name {
        return Err(Error::TypeMismatch {
            command: command.name.to_string(),
            expected: ty.name().to_string(),
            actual: type_name.to_string(),
        });
    }
    Ok((command, ty.parse(arg)?))
}

/// Permitted arguments for a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AllowedValues {
    /// Symbol names of a symbolic type.
    Symbols(Vec<&'static str>),
    /// Code to label map of a decoded type.
    Labels(BTreeMap<&'static str, &'static str>),
}

/// Serialisable description of one catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandInfo {
    pub command_name: &'static str,
    pub net_code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<&'static str>,
    pub readonly: bool,
    pub writeonly: bool,
    pub noverify: bool,
    pub binarydata: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<AllowedValues>,
}

impl From<&Command> for CommandInfo {
    fn from(command: &Command) -> Self {
        let caps = command.capabilities();
        let values = match command.value_type {
            Some(ValueType::Symbolic(set)) => Some(AllowedValues::Symbols(
                set.symbols.iter().map(|s| s.name).collect(),
            )),
            Some(ValueType::Decoded(table)) => Some(AllowedValues::Labels(
                table.entries.iter().copied().collect(),
            )),
            _ => None,
        };
        CommandInfo {
            command_name: command.name,
            net_code: command.code.escape_ascii().to_string(),
            value_type: command.value_type.map(|ty| ty.name()),
            readonly: caps.read_only,
            writeonly: caps.write_only,
            noverify: caps.no_verify,
            binarydata: caps.binary,
            values,
        }
    }
}

/// Describe every catalog entry.
pub fn describe_all() -> Vec<CommandInfo> {
    all().iter().map(CommandInfo::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let mut seen = HashSet::new();
        for command in all() {
            assert!(seen.insert(command.name), "duplicate name {}", command.name);
        }
        assert_eq!(BY_NAME.len(), all().len());
    }

    #[test]
    fn codes_are_two_to_four_bytes() {
        for command in all() {
            assert!(
                (2..=4).contains(&command.code.len()),
                "{} has code {:?}",
                command.name,
                command.code
            );
        }
    }

    #[test]
    fn lookup_hits_and_misses() {
        let power = lookup(POWER).unwrap();
        assert_eq!(power.code, b"PW");
        assert!(power.capabilities().no_verify);
        assert!(matches!(lookup("Teleport"), Err(Error::UnknownCommand(_))));
    }

    #[test]
    fn shared_wire_code_keeps_distinct_names() {
        let install = lookup(INSTALLATION_MODE).unwrap();
        let load = lookup("LoadLensmemory").unwrap();
        assert_eq!(install.code, load.code);
        assert!(install.value_type.is_some());
        assert!(load.value_type.is_none());
    }

    #[test]
    fn symbol_codes_are_unique_within_each_set() {
        for command in all() {
            if let Some(ValueType::Symbolic(set)) = command.value_type {
                let codes: HashSet<_> = set.symbols.iter().map(|s| s.code).collect();
                assert_eq!(codes.len(), set.symbols.len(), "{}", set.name);
            }
        }
    }

    #[test]
    fn every_symbol_decodes_from_its_own_code() {
        for command in all() {
            if let Some(ty @ ValueType::Symbolic(set)) = command.value_type {
                for symbol in set.symbols {
                    let value = ty.parse(symbol.name).unwrap();
                    assert_eq!(ty.decode(symbol.code).unwrap(), value, "{}", command.name);
                }
            }
        }
    }

    #[test]
    fn capability_flags_by_type() {
        assert!(lookup(REMOTE).unwrap().capabilities().write_only);
        assert!(lookup("Model").unwrap().capabilities().read_only);
        assert!(lookup("InfoLampTime").unwrap().capabilities().read_only);
        assert!(lookup("InfoSource").unwrap().capabilities().read_only);
        assert!(lookup("GammaRed").unwrap().capabilities().binary);
        assert!(lookup("PanelAlignRed").unwrap().capabilities().binary);
        assert_eq!(lookup("Contrast").unwrap().capabilities(), Capabilities::NONE);
        assert!(lookup("Logo").unwrap().capabilities().write_only);
    }

    #[test]
    fn describe_symbolic_entry() {
        let info = CommandInfo::from(lookup(ANAMORPHIC).unwrap());
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["command_name"], "Anamorphic");
        assert_eq!(json["net_code"], "INVS");
        assert_eq!(json["value_type"], "Anamorphic");
        assert_eq!(json["readonly"], false);
        assert_eq!(json["values"], serde_json::json!(["Off", "A", "B", "C", "D"]));
    }

    #[test]
    fn describe_decoded_entry() {
        let info = CommandInfo::from(lookup("InfoHDR").unwrap());
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["readonly"], true);
        assert_eq!(json["values"]["F"], "None");
    }

    #[test]
    fn describe_raw_entry_omits_type() {
        let info = CommandInfo::from(lookup("LanSetup").unwrap());
        let json = serde_json::to_value(&info).unwrap();
        assert!(json.get("value_type").is_none());
        assert!(json.get("values").is_none());
        assert_eq!(json["writeonly"], true);
    }

    #[test]
    fn describe_all_covers_catalog() {
        assert_eq!(describe_all().len(), all().len());
    }

    #[test]
    fn dotted_entries_resolve() {
        let (command, value) = parse_dotted("Anamorphic.Anamorphic.A").unwrap();
        assert_eq!(command.name, ANAMORPHIC);
        assert_eq!(value.encode().unwrap(), b"1");

        let (command, value) = parse_dotted("Contrast.Numeric.-10").unwrap();
        assert_eq!(command.code, b"PMCN");
        assert_eq!(value, Value::Numeric(-10));
    }

    #[test]
    fn dotted_entries_reject_bad_input() {
        assert!(matches!(parse_dotted("Anamorphic.A"), Err(Error::BadValue(_))));
        assert!(matches!(parse_dotted("Warp.Numeric.9"), Err(Error::UnknownCommand(_))));
        assert!(matches!(
            parse_dotted("Anamorphic.PictureMode.Natural"),
            Err(Error::TypeMismatch { .. })
        ));
        assert!(matches!(parse_dotted("Anamorphic.Anamorphic.Z"), Err(Error::BadValue(_))));
        assert!(matches!(parse_dotted("LanSetup.Null.x"), Err(Error::NotImplemented(_))));
    }
}
