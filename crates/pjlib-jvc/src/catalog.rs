//! The static JVC D-ILA command catalog.
//!
//! Codes follow JVC's external command list for the 2018 and later
//! D-ILA range (N5/N7/NX9 and their RS equivalents) and the matching
//! remote control code table. Commands without a value type are raw codes:
//! they are listed for discovery but cannot be read.

use crate::commands::Command;
use crate::values::{Capabilities, DecodeTable, Symbol, SymbolSet, ValueType};

pub static MODEL: SymbolSet = SymbolSet {
    name: "Model",
    caps: Capabilities::READ_ONLY,
    symbols: &[
        Symbol::new("DLA_N7", b"ILAFPJ -- B2A2"),
    ],
};

pub static SOURCE_ASK: SymbolSet = SymbolSet {
    name: "SourceAsk",
    caps: Capabilities::READ_ONLY,
    symbols: &[
        Symbol::new("NoSignalOrOutOfRange", b"0"),
        Symbol::new("SignalAvailable", b"1"),
    ],
};

pub static NULL: SymbolSet = SymbolSet {
    name: "Null",
    caps: Capabilities::WRITE_ONLY,
    symbols: &[
        Symbol::new("Null", b""),
    ],
};

pub static REMOTE_CODE: SymbolSet = SymbolSet {
    name: "RemoteCode",
    caps: Capabilities::WRITE_ONLY,
    symbols: &[
        Symbol::new("Up", b"7301"),
        Symbol::new("Down", b"7302"),
        Symbol::new("Back", b"7303"),
        Symbol::new("On", b"7305"),
        Symbol::new("Standby", b"7306"),
        Symbol::new("Input", b"7308"),
        Symbol::new("Hide", b"731D"),
        Symbol::new("Anamorphic_A", b"7323"),
        Symbol::new("Anamorphic_Off", b"7324"),
        Symbol::new("Aspect_Zoom", b"7327"),
        Symbol::new("Anamorphic_B", b"732B"),
        Symbol::new("Menu", b"732E"),
        Symbol::new("OK", b"732F"),
        Symbol::new("LensMenu", b"7330"),
        Symbol::new("Anamorphic_C", b"7333"),
        Symbol::new("Right", b"7334"),
        Symbol::new("Left", b"7336"),
        Symbol::new("CMD_Off", b"7347"),
        Symbol::new("CMD_Low", b"7348"),
        Symbol::new("CMD_High", b"7349"),
        Symbol::new("CMD_IT", b"734A"),
        Symbol::new("PictureMode_Cinema", b"7368"),
        Symbol::new("PictureMode_Film", b"7369"),
        Symbol::new("PictureMode_Natural", b"736A"),
        Symbol::new("PictureMode_User1", b"736C"),
        Symbol::new("PictureMode_User2", b"736D"),
        Symbol::new("PictureMode_User3", b"736E"),
        Symbol::new("PictureMode_THX", b"736F"),
        Symbol::new("HDMI1", b"7370"),
        Symbol::new("HDMI2", b"7371"),
        Symbol::new("Info_PictureAdjust", b"7372"),
        Symbol::new("Menu_Advanced", b"7373"),
        Symbol::new("Menu_Info", b"7374"),
        Symbol::new("Gamma_Toggle", b"7375"),
        Symbol::new("ColourTemp_Toggle", b"7376"),
        Symbol::new("ColourProfile_Toggle", b"7388"),
        Symbol::new("CMD_Toggle", b"738A"),
        Symbol::new("Aspect_Auto", b"73AE"),
        Symbol::new("Aspect_Native", b"73AF"),
        Symbol::new("Anamorphic_Toggle", b"73C5"),
        Symbol::new("PictureMode_User4", b"73CA"),
        Symbol::new("PictureMode_User5", b"73CB"),
        Symbol::new("PictureMode_User6", b"73CC"),
        Symbol::new("Hide_On", b"73D0"),
        Symbol::new("Hide_Off", b"73D1"),
        Symbol::new("Solenoid_Normal", b"73D2"),
        Symbol::new("Solenoid_Wide", b"73D3"),
        Symbol::new("Menu_SettingMemory", b"73D4"),
        Symbol::new("ThreeD_Setting_Toggle", b"73D5"),
        Symbol::new("ThreeD_Formal_Toggle", b"73D6"),
        Symbol::new("PictureMode_User_Toggle", b"73D7"),
        Symbol::new("InstallationMode1", b"73D8"),
        Symbol::new("InstallationMode2", b"73D9"),
        Symbol::new("InstallationMode3", b"73DA"),
        Symbol::new("ThreeD_Format_Auto", b"73DB"),
        Symbol::new("ThreeD_Format_SideBySide", b"73DC"),
        Symbol::new("ThreeD_Format_TopAndBottom", b"73DD"),
        Symbol::new("ThreeD_Format_Off", b"73DE"),
        Symbol::new("PictureMode_HLG", b"73E1"),
        Symbol::new("InstallationMode4", b"73E5"),
        Symbol::new("InstallationMode5", b"73E6"),
        Symbol::new("InstallationMode6", b"73E7"),
        Symbol::new("InstallationMode7", b"73E8"),
        Symbol::new("InstallationMode8", b"73E9"),
        Symbol::new("InstallationMode9", b"73EA"),
        Symbol::new("InstallationMode10", b"73EB"),
        Symbol::new("PictureMode_HDR10", b"73ED"),
        Symbol::new("Menu_MPC", b"73F0"),
        Symbol::new("Menu_PictureMode", b"73F4"),
        Symbol::new("Menu_Gamma", b"73F5"),
        Symbol::new("Menu_NameEdit", b"73F7"),
        Symbol::new("LowLatency_Toggle", b"73F8"),
    ],
};

pub static POWER_STATE: SymbolSet = SymbolSet {
    name: "PowerState",
    caps: Capabilities::NO_VERIFY,
    symbols: &[
        Symbol::new("Standby", b"0"),
        Symbol::new("LampOn", b"1"),
        Symbol::new("Cooling", b"2"),
        Symbol::new("Starting", b"3"),
        Symbol::new("Error", b"4"),
    ],
};

pub static PICTURE_MODE: SymbolSet = SymbolSet {
    name: "PictureMode",
    caps: Capabilities::NONE,
    symbols: &[
        Symbol::new("Film", b"00"),
        Symbol::new("Cinema", b"01"),
        Symbol::new("Natural", b"03"),
        Symbol::new("HDR10", b"04"),
        Symbol::new("THX", b"06"),
        Symbol::new("User1", b"0C"),
        Symbol::new("User2", b"0D"),
        Symbol::new("User3", b"0E"),
        Symbol::new("User4", b"0F"),
        Symbol::new("User5", b"10"),
        Symbol::new("User6", b"11"),
        Symbol::new("HLG", b"14"),
    ],
};

pub static INSTALLATION_MODE: SymbolSet = SymbolSet {
    name: "InstallationMode",
    caps: Capabilities::NONE,
    symbols: &[
        Symbol::new("ONE", b"0"),
        Symbol::new("TWO", b"1"),
        Symbol::new("THREE", b"2"),
        Symbol::new("FOUR", b"3"),
        Symbol::new("FIVE", b"4"),
        Symbol::new("SIX", b"5"),
        Symbol::new("SEVEN", b"6"),
        Symbol::new("EIGHT", b"7"),
        Symbol::new("NINE", b"8"),
        Symbol::new("TEN", b"9"),
    ],
};

pub static INTELLIGENT_LENS_APERTURE: SymbolSet = SymbolSet {
    name: "IntelligentLensAperture",
    caps: Capabilities::NONE,
    symbols: &[
        Symbol::new("Off", b"0"),
        Symbol::new("Auto1", b"1"),
        Symbol::new("Auto2", b"2"),
    ],
};

pub static COLOR_PROFILE: SymbolSet = SymbolSet {
    name: "ColorProfile",
    caps: Capabilities::NONE,
    symbols: &[
        Symbol::new("Off", b"00"),
        Symbol::new("Film1", b"01"),
        Symbol::new("Film2", b"02"),
        Symbol::new("BT709", b"03"),
        Symbol::new("Cinema", b"04"),
        Symbol::new("Anime", b"06"),
        Symbol::new("Video", b"08"),
        Symbol::new("HDR", b"0A"),
        Symbol::new("BT2020", b"0B"),
        Symbol::new("THX", b"0D"),
        Symbol::new("Custom1", b"0E"),
        Symbol::new("Custom2", b"0F"),
        Symbol::new("Custom3", b"10"),
        Symbol::new("Custom4", b"11"),
        Symbol::new("Custom5", b"12"),
        Symbol::new("DCI", b"21"),
        Symbol::new("Custom6", b"22"),
    ],
};

pub static COLOR_TEMPERATURE: SymbolSet = SymbolSet {
    name: "ColorTemperature",
    caps: Capabilities::NONE,
    symbols: &[
        Symbol::new("Temp5500K", b"00"),
        Symbol::new("Temp6500K", b"02"),
        Symbol::new("Temp7500K", b"04"),
        Symbol::new("Temp9300K", b"08"),
        Symbol::new("HighBright", b"09"),
        Symbol::new("Custom1", b"0A"),
        Symbol::new("Custom2", b"0B"),
        Symbol::new("HDR10", b"0C"),
        Symbol::new("Xenon1", b"0D"),
        Symbol::new("Xenon2", b"0E"),
        Symbol::new("HLG", b"14"),
    ],
};

pub static COLOR_TEMPERATURE_CORRECTION: SymbolSet = SymbolSet {
    name: "ColorTemperatureCorrection",
    caps: Capabilities::NONE,
    symbols: &[
        Symbol::new("Temp5500K", b"0"),
        Symbol::new("Temp6500K", b"2"),
        Symbol::new("Temp7500K", b"4"),
        Symbol::new("Temp9300K", b"8"),
        Symbol::new("HighBright", b"9"),
        Symbol::new("Xenon1", b"D"),
        Symbol::new("Xenon2", b"E"),
    ],
};

pub static GAMMA_TABLE: SymbolSet = SymbolSet {
    name: "GammaTable",
    caps: Capabilities::NONE,
    symbols: &[
        Symbol::new("TwoTwo", b"0"),
        Symbol::new("Cinema1", b"1"),
        Symbol::new("Cinema2", b"2"),
        Symbol::new("Custom1", b"4"),
        Symbol::new("Custom2", b"5"),
        Symbol::new("Custom3", b"6"),
        Symbol::new("HDR_HLG", b"7"),
        Symbol::new("TwoFour", b"8"),
        Symbol::new("TwoSix", b"9"),
        Symbol::new("Film1", b"A"),
        Symbol::new("Film2", b"B"),
        Symbol::new("HDR_PQ", b"C"),
        Symbol::new("THX", b"10"),
    ],
};

pub static GAMMA_CORRECTION: SymbolSet = SymbolSet {
    name: "GammaCorrection",
    caps: Capabilities::NONE,
    symbols: &[
        Symbol::new("Cinema1", b"01"),
        Symbol::new("Cinema2", b"02"),
        Symbol::new("Import", b"04"),
        Symbol::new("Gamma1_8", b"05"),
        Symbol::new("Gamma1_9", b"06"),
        Symbol::new("Gamma2_0", b"07"),
        Symbol::new("Gamma2_1", b"08"),
        Symbol::new("Gamma2_2", b"09"),
        Symbol::new("Gamma2_3", b"0A"),
        Symbol::new("Gamma2_4", b"0B"),
        Symbol::new("Gamma2_5", b"0C"),
        Symbol::new("Gamma2_6", b"0D"),
        Symbol::new("Film1", b"0E"),
        Symbol::new("Film2", b"0F"),
        Symbol::new("HDR_HLQ", b"14"),
        Symbol::new("HDR_PQ", b"15"),
    ],
};

pub static COLOR_MANAGEMENT: SymbolSet = SymbolSet {
    name: "ColorManagement",
    caps: Capabilities::NONE,
    symbols: &[
        Symbol::new("Off", b"0"),
        Symbol::new("On", b"1"),
    ],
};

pub static LOW_LATENCY: SymbolSet = SymbolSet {
    name: "LowLatency",
    caps: Capabilities::NONE,
    symbols: &[
        Symbol::new("Off", b"0"),
        Symbol::new("On", b"1"),
    ],
};

pub static CLEAR_MOTION_DRIVE: SymbolSet = SymbolSet {
    name: "ClearMotionDrive",
    caps: Capabilities::NONE,
    symbols: &[
        Symbol::new("Off", b"0"),
        Symbol::new("Low", b"3"),
        Symbol::new("High", b"4"),
        Symbol::new("InverseTelecine", b"5"),
    ],
};

pub static MOTION_ENHANCE: SymbolSet = SymbolSet {
    name: "MotionEnhance",
    caps: Capabilities::NONE,
    symbols: &[
        Symbol::new("Off", b"0"),
        Symbol::new("Low", b"1"),
        Symbol::new("High", b"2"),
    ],
};

pub static LAMP_POWER: SymbolSet = SymbolSet {
    name: "LampPower",
    caps: Capabilities::NONE,
    symbols: &[
        Symbol::new("Normal", b"0"),
        Symbol::new("High", b"1"),
    ],
};

pub static E_SHIFT_8K: SymbolSet = SymbolSet {
    name: "EShift8K",
    caps: Capabilities::NONE,
    symbols: &[
        Symbol::new("Off", b"0"),
        Symbol::new("On", b"1"),
    ],
};

pub static GRAPHIC_MODE: SymbolSet = SymbolSet {
    name: "GraphicMode",
    caps: Capabilities::NONE,
    symbols: &[
        Symbol::new("Standard", b"0"),
        Symbol::new("HighRes", b"1"),
    ],
};

pub static HDMI_INPUT_LEVEL: SymbolSet = SymbolSet {
    name: "HDMIInputLevel",
    caps: Capabilities::NONE,
    symbols: &[
        Symbol::new("Standard", b"0"),
        Symbol::new("Enhanced", b"1"),
        Symbol::new("SuperWhite", b"2"),
        Symbol::new("Auto", b"3"),
    ],
};

pub static HDMI_COLOR_SPACE: SymbolSet = SymbolSet {
    name: "HDMIColorSpace",
    caps: Capabilities::NONE,
    symbols: &[
        Symbol::new("Auto", b"0"),
        Symbol::new("YCbCr444", b"1"),
        Symbol::new("YCbCr422", b"2"),
        Symbol::new("RGB", b"3"),
    ],
};

pub static HDMI_2D_3D: SymbolSet = SymbolSet {
    name: "HDMI2D3D",
    caps: Capabilities::NONE,
    symbols: &[
        Symbol::new("TwoD", b"0"),
        Symbol::new("Auto", b"1"),
        Symbol::new("SideBySide", b"3"),
        Symbol::new("TopAndBottom", b"4"),
    ],
};

pub static ASPECT: SymbolSet = SymbolSet {
    name: "Aspect",
    caps: Capabilities::NONE,
    symbols: &[
        Symbol::new("Zoom", b"2"),
        Symbol::new("Auto", b"3"),
        Symbol::new("Native", b"4"),
    ],
};

pub static MASK_DATA: SymbolSet = SymbolSet {
    name: "MaskData",
    caps: Capabilities::NONE,
    symbols: &[
        Symbol::new("On", b"1"),
        Symbol::new("Off", b"2"),
    ],
};

pub static INSTALLATION_STYLE: SymbolSet = SymbolSet {
    name: "InstallationStyle",
    caps: Capabilities::NONE,
    symbols: &[
        Symbol::new("Front", b"0"),
        Symbol::new("CeilingMountF", b"1"),
        Symbol::new("Rear", b"2"),
        Symbol::new("CeilingMountR", b"3"),
    ],
};

pub static ANAMORPHIC: SymbolSet = SymbolSet {
    name: "Anamorphic",
    caps: Capabilities::NONE,
    symbols: &[
        Symbol::new("Off", b"0"),
        Symbol::new("A", b"1"),
        Symbol::new("B", b"2"),
        Symbol::new("C", b"3"),
        Symbol::new("D", b"4"),
    ],
};

pub static PANEL_ALIGNMENT_SWITCH: SymbolSet = SymbolSet {
    name: "PanelAlignmentSwitch",
    caps: Capabilities::NONE,
    symbols: &[
        Symbol::new("Off", b"0"),
        Symbol::new("On", b"1"),
    ],
};

pub static HIGH_ALTITUDE_MODE: SymbolSet = SymbolSet {
    name: "HighAltitudeMode",
    caps: Capabilities::NONE,
    symbols: &[
        Symbol::new("Off", b"0"),
        Symbol::new("On", b"1"),
    ],
};

pub static BACK_COLOUR: SymbolSet = SymbolSet {
    name: "BackColour",
    caps: Capabilities::NONE,
    symbols: &[
        Symbol::new("Blue", b"0"),
        Symbol::new("Black", b"1"),
    ],
};

pub static MENU_POSITION: SymbolSet = SymbolSet {
    name: "MenuPosition",
    caps: Capabilities::NONE,
    symbols: &[
        Symbol::new("LeftTop", b"0"),
        Symbol::new("RightTop", b"1"),
        Symbol::new("Centre", b"2"),
        Symbol::new("LeftBottom", b"3"),
        Symbol::new("RightBottom", b"4"),
        Symbol::new("Left", b"5"),
        Symbol::new("Right", b"6"),
    ],
};

pub static SOURCE_DISPLAY: SymbolSet = SymbolSet {
    name: "SourceDisplay",
    caps: Capabilities::NONE,
    symbols: &[
        Symbol::new("Off", b"0"),
        Symbol::new("On", b"1"),
    ],
};

pub static TRIGGER: SymbolSet = SymbolSet {
    name: "Trigger",
    caps: Capabilities::NONE,
    symbols: &[
        Symbol::new("Off", b"0"),
        Symbol::new("Power", b"1"),
        Symbol::new("Anamo", b"2"),
        Symbol::new("Inst1", b"3"),
        Symbol::new("Inst2", b"4"),
        Symbol::new("Inst3", b"5"),
        Symbol::new("Inst4", b"6"),
        Symbol::new("Inst5", b"7"),
        Symbol::new("Inst6", b"8"),
        Symbol::new("Inst7", b"9"),
        Symbol::new("Inst8", b"A"),
        Symbol::new("Inst9", b"B"),
        Symbol::new("Inst10", b"C"),
    ],
};

pub static INPUT_STATE: SymbolSet = SymbolSet {
    name: "InputState",
    caps: Capabilities::NONE,
    symbols: &[
        Symbol::new("HDMI1", b"6"),
        Symbol::new("HDMI2", b"7"),
    ],
};

pub static SOURCE_DATA: DecodeTable = DecodeTable {
    name: "SourceData",
    entries: &[
        ("02", "480p"),
        ("03", "576p"),
        ("04", "720p50"),
        ("05", "720p60"),
        ("06", "1080i50"),
        ("07", "1080i60"),
        ("08", "1080p24"),
        ("09", "1080p50"),
        ("0A", "1080p60"),
        ("0B", "No Signal"),
        ("0C", "720p 3D"),
        ("0D", "1080i 3D"),
        ("0E", "1080p 3D"),
        ("0F", "Out of Range"),
        ("10", "4K(4096)60"),
        ("11", "4K(4096)50"),
        ("12", "4K(4096)30"),
        ("13", "4K(4096)25"),
        ("14", "4K(4096)24"),
        ("15", "4K(3840)60"),
        ("16", "4K(3840)50"),
        ("17", "4K(3840)30"),
        ("18", "4K(3840)25"),
        ("19", "4K(3840)24"),
        ("1C", "1080p25"),
        ("1D", "1080p30"),
        ("1E", "2048x1080 p24"),
        ("1F", "2048x1080 p25"),
        ("20", "2048x1080 p30"),
        ("21", "2048x1080 p50"),
        ("22", "2048x1080 p60"),
        ("23", "3840x2160 p120"),
        ("24", "4096x2160 p120"),
        ("25", "VGA(640x480)"),
        ("26", "VGA(640x480)"),
        ("27", "SVGA(800x600)"),
        ("28", "XGA(1024x768)"),
        ("29", "SXGA(1280x1024)"),
        ("2A", "WXGA(1280x768)"),
        ("2B", "WXGA+(1440x900)"),
        ("2C", "WSXGA+(1680x1050"),
        ("2D", "WUXGA(1920x1200)"),
        ("2E", "WXGA(1280x800)"),
        ("2F", "FWXGA(1366x768)"),
        ("30", "WXGA++(1600x900)"),
        ("31", "UXGA(1600x1200)"),
        ("32", "QXGA"),
    ],
};

pub static DEEP_COLOR_DATA: DecodeTable = DecodeTable {
    name: "DeepColorData",
    entries: &[
        ("0", "8 bit"),
        ("1", "10 bit"),
        ("2", "12 bit"),
    ],
};

pub static COLOR_SPACE_DATA: DecodeTable = DecodeTable {
    name: "ColorSpaceData",
    entries: &[
        ("0", "RGB"),
        ("1", "YUV"),
    ],
};

pub static COLORIMETRY_DATA: DecodeTable = DecodeTable {
    name: "ColorimetryData",
    entries: &[
        ("0", "No Data"),
        ("1", "BT.601"),
        ("2", "BT.709"),
        ("3", "xvYCC601"),
        ("4", "xvYCC709"),
        ("5", "sYCC601"),
        ("6", "Adobe YCC601"),
        ("7", "Adobe RGB"),
        ("8", "BT.2020 Constant Luminence"),
        ("9", "BT.2020 Non-Constant Luminence"),
        ("A", "Reserved (Other)"),
    ],
};

pub static HDR_DATA: DecodeTable = DecodeTable {
    name: "HDRData",
    entries: &[
        ("0", "SDR"),
        ("1", "HDR"),
        ("2", "SMPTE ST 2084"),
        ("F", "None"),
    ],
};

pub static AUTO_TONE_MAPPING_DATA: DecodeTable = DecodeTable {
    name: "AutoToneMappingData",
    entries: &[
        ("0", "Off"),
        ("1", "On"),
    ],
};

static COMMANDS: &[Command] = &[
    Command::new("Null", b"\0\0", Some(ValueType::Symbolic(&NULL))),
    Command::new("Power", b"PW", Some(ValueType::Symbolic(&POWER_STATE))),
    Command::new("Input", b"IP", Some(ValueType::Symbolic(&INPUT_STATE))),
    Command::new("Remote", b"RC", Some(ValueType::Symbolic(&REMOTE_CODE))),
    Command::new("GammaRed", b"GR", Some(ValueType::GammaTable)),
    Command::new("GammaGreen", b"GG", Some(ValueType::GammaTable)),
    Command::new("GammaBlue", b"GB", Some(ValueType::GammaTable)),
    Command::new("PanelAlignRed", b"PR", Some(ValueType::PanelAlignment)),
    Command::new("PanelAlignBlue", b"PB", Some(ValueType::PanelAlignment)),
    Command::new("SourceAsk", b"SC", Some(ValueType::Symbolic(&SOURCE_ASK))),
    Command::new("Model", b"MD", Some(ValueType::Symbolic(&MODEL))),
    Command::new("InstallationMode", b"INML", Some(ValueType::Symbolic(&INSTALLATION_MODE))),

    // Picture adjust
    Command::new("PictureMode", b"PMPM", Some(ValueType::Symbolic(&PICTURE_MODE))),
    Command::new("IntelligentLensAperture", b"PMDI", Some(ValueType::Symbolic(&INTELLIGENT_LENS_APERTURE))),
    Command::new("ColorProfile", b"PMPR", Some(ValueType::Symbolic(&COLOR_PROFILE))),
    Command::new("ColorTemperatureTable", b"PMCL", Some(ValueType::Symbolic(&COLOR_TEMPERATURE))),
    Command::new("ColorTemperatureCorrection", b"PMCC", Some(ValueType::Symbolic(&COLOR_TEMPERATURE_CORRECTION))),
    Command::new("ColorTemperatureGainRed", b"PMGR", Some(ValueType::Numeric)),
    Command::new("ColorTemperatureGainGreen", b"PMGG", Some(ValueType::Numeric)),
    Command::new("ColorTemperatureGainBlue", b"PMGB", Some(ValueType::Numeric)),
    Command::new("ColorTemperatureOffsetRed", b"PMOR", Some(ValueType::Numeric)),
    Command::new("ColorTemperatureOffsetGreen", b"PMOG", Some(ValueType::Numeric)),
    Command::new("ColorTemperatureOffsetBlue", b"PMOB", Some(ValueType::Numeric)),
    Command::new("GammaTable", b"PMGT", Some(ValueType::Symbolic(&GAMMA_TABLE))),
    Command::new("PictureToneWhite", b"PMFW", Some(ValueType::Numeric)),
    Command::new("PictureToneRed", b"PMFR", Some(ValueType::Numeric)),
    Command::new("PictureToneGreen", b"PMFG", Some(ValueType::Numeric)),
    Command::new("PictureToneBlue", b"PMFB", Some(ValueType::Numeric)),
    Command::new("Contrast", b"PMCN", Some(ValueType::Numeric)),
    Command::new("Brightness", b"PMBR", Some(ValueType::Numeric)),
    Command::new("Color", b"PMCO", Some(ValueType::Numeric)),
    Command::new("Tint", b"PMTI", Some(ValueType::Numeric)),
    Command::new("NoiseReduction", b"PMRN", Some(ValueType::Numeric)),
    Command::new("GammaCorrection", b"PMGC", Some(ValueType::Symbolic(&GAMMA_CORRECTION))),
    Command::new("PMGammaRed", b"PMDR", Some(ValueType::GammaTable)),
    Command::new("PMGammaGreen", b"PMDG", Some(ValueType::GammaTable)),
    Command::new("PMGammaBlue", b"PMDB", Some(ValueType::GammaTable)),
    Command::new("BrightLevelWhite", b"PMRW", Some(ValueType::Numeric)),
    Command::new("BrightLevelRed", b"PMRR", Some(ValueType::Numeric)),
    Command::new("BrightLevelGreen", b"PMRG", Some(ValueType::Numeric)),
    Command::new("BrightLevelBlue", b"PMRB", Some(ValueType::Numeric)),
    Command::new("DarkLevelWhite", b"PMKW", Some(ValueType::Numeric)),
    Command::new("DarkLevelRed", b"PMKR", Some(ValueType::Numeric)),
    Command::new("DarkLevelGreen", b"PMKG", Some(ValueType::Numeric)),
    Command::new("DarkLevelBlue", b"PMKB", Some(ValueType::Numeric)),
    Command::new("ColorManagementTable", b"PMCB", Some(ValueType::Symbolic(&COLOR_MANAGEMENT))),
    Command::new("AxisPositionRed", b"PMAR", Some(ValueType::Numeric)),
    Command::new("AxisPositionYellow", b"PMAY", Some(ValueType::Numeric)),
    Command::new("AxisPositionGreen", b"PMAG", Some(ValueType::Numeric)),
    Command::new("AxisPositionCyan", b"PMAC", Some(ValueType::Numeric)),
    Command::new("AxisPositionBlue", b"PMAB", Some(ValueType::Numeric)),
    Command::new("AxisPositionMagenta", b"PMAM", Some(ValueType::Numeric)),
    Command::new("HUERed", b"PMHR", Some(ValueType::Numeric)),
    Command::new("HUEYellow", b"PMHY", Some(ValueType::Numeric)),
    Command::new("HUEGreen", b"PMHG", Some(ValueType::Numeric)),
    Command::new("HUECyan", b"PMHC", Some(ValueType::Numeric)),
    Command::new("HUEBlue", b"PMHB", Some(ValueType::Numeric)),
    Command::new("HUEMagenta", b"PMHM", Some(ValueType::Numeric)),
    Command::new("SaturationRed", b"PMSR", Some(ValueType::Numeric)),
    Command::new("SaturationYellow", b"PMSY", Some(ValueType::Numeric)),
    Command::new("SaturationGreen", b"PMSG", Some(ValueType::Numeric)),
    Command::new("SaturationCyan", b"PMSC", Some(ValueType::Numeric)),
    Command::new("SaturationBlue", b"PMSB", Some(ValueType::Numeric)),
    Command::new("SaturationMagenta", b"PMSM", Some(ValueType::Numeric)),
    Command::new("BrightnessRed", b"PMLR", Some(ValueType::Numeric)),
    Command::new("BrightnessYellow", b"PMLY", Some(ValueType::Numeric)),
    Command::new("BrightnessGreen", b"PMLG", Some(ValueType::Numeric)),
    Command::new("BrightnessCyan", b"PMLC", Some(ValueType::Numeric)),
    Command::new("BrightnessBlue", b"PMLB", Some(ValueType::Numeric)),
    Command::new("BrightnessMagenta", b"PMLM", Some(ValueType::Numeric)),
    Command::new("LowLatency", b"PMLL", Some(ValueType::Symbolic(&LOW_LATENCY))),
    Command::new("ClearMotionDrive", b"PMCM", Some(ValueType::Symbolic(&CLEAR_MOTION_DRIVE))),
    Command::new("MotionEnhance", b"PMME", Some(ValueType::Symbolic(&MOTION_ENHANCE))),
    Command::new("LensAperture", b"PMLA", Some(ValueType::Numeric)),
    Command::new("LampPower", b"PMLP", Some(ValueType::Symbolic(&LAMP_POWER))),
    Command::new("EShift8K", b"PMUS", Some(ValueType::Symbolic(&E_SHIFT_8K))),
    Command::new("GraphicMode", b"PMGM", Some(ValueType::Symbolic(&GRAPHIC_MODE))),
    Command::new("Enhance", b"PMEN", Some(ValueType::Numeric)),
    Command::new("Smoothing", b"PMST", Some(ValueType::Numeric)),
    Command::new("NameEditofPictureModeUser1", b"PMU1", None),
    Command::new("NameEditofPictureModeUser2", b"PMU2", None),
    Command::new("NameEditofPictureModeUser3", b"PMU3", None),
    Command::new("NameEditofPictureModeUser4", b"PMU4", None),
    Command::new("NameEditofPictureModeUser5", b"PMU5", None),
    Command::new("NameEditofPictureModeUser6", b"PMU6", None),

    // Input signal
    Command::new("HDMIInputLevel", b"ISIL", Some(ValueType::Symbolic(&HDMI_INPUT_LEVEL))),
    Command::new("HDMIColorSpace", b"ISHS", Some(ValueType::Symbolic(&HDMI_COLOR_SPACE))),
    Command::new("HDMI2D3D", b"IS3D", Some(ValueType::Symbolic(&HDMI_2D_3D))),
    Command::new("HDMI3DPhase", b"IS3P", None),
    Command::new("PicturePositionHorizontal", b"ISPH", Some(ValueType::Numeric)),
    Command::new("PicturePositionVertical", b"ISPV", Some(ValueType::Numeric)),
    Command::new("Aspect", b"ISAS", Some(ValueType::Symbolic(&ASPECT))),
    Command::new("Mask", b"ISMA", Some(ValueType::Symbolic(&MASK_DATA))),
    Command::new("MaskLeft", b"ISML", Some(ValueType::Numeric)),
    Command::new("MaskRight", b"ISMR", Some(ValueType::Numeric)),
    Command::new("MaskTop", b"ISMT", Some(ValueType::Numeric)),
    Command::new("MaskBottom", b"ISMB", Some(ValueType::Numeric)),
    Command::new("Parallaxof3Dconversion", b"ISLV", Some(ValueType::Numeric)),
    Command::new("CrosstalkCancelWhite", b"ISCA", Some(ValueType::Numeric)),

    // Installation
    Command::new("FocusNear", b"INFN", None),
    Command::new("FocusFar", b"INFF", None),
    Command::new("ZoomTele", b"INZT", None),
    Command::new("ZoomWide", b"INZW", None),
    Command::new("ShiftLeft", b"INSL", None),
    Command::new("ShiftRight", b"INSR", None),
    Command::new("ShiftUp", b"INSU", None),
    Command::new("ShiftDown", b"INSD", None),
    Command::new("ImagePattern", b"INIP", None),
    Command::new("LensLock", b"INLL", None),
    Command::new("PixelAdjustHorizontalRed", b"INXR", Some(ValueType::Numeric)),
    Command::new("PixelAdjustHorizontalBlue", b"INXB", Some(ValueType::Numeric)),
    Command::new("PixelAdjustVerticalRed", b"INYR", Some(ValueType::Numeric)),
    Command::new("PixelAdjustVerticalBlue", b"INYB", Some(ValueType::Numeric)),
    Command::new("InstallationStyle", b"INIS", Some(ValueType::Symbolic(&INSTALLATION_STYLE))),
    Command::new("KeystoneVertical", b"INKV", Some(ValueType::Numeric)),
    Command::new("Anamorphic", b"INVS", Some(ValueType::Symbolic(&ANAMORPHIC))),
    Command::new("ScreenAdjustData", b"INSA", Some(ValueType::Numeric)),
    Command::new("ScreenAdjust", b"INSC", None),
    Command::new("PanelAlignment", b"INPA", Some(ValueType::Symbolic(&PANEL_ALIGNMENT_SWITCH))),
    Command::new("LoadLensmemory", b"INML", None),
    Command::new("NameEditofLensMemory1", b"INM1", None),
    Command::new("NameEditofLensMemory2", b"INM2", None),
    Command::new("NameEditofLensMemory3", b"INM3", None),
    Command::new("NameEditofLensMemory4", b"INM4", None),
    Command::new("NameEditofLensMemory5", b"INM5", None),
    Command::new("NameEditofLensMemory6", b"INM6", None),
    Command::new("NameEditofLensMemory7", b"INM7", None),
    Command::new("NameEditofLensMemory8", b"INM8", None),
    Command::new("NameEditofLensMemory9", b"INM9", None),
    Command::new("NameEditofLensMemory10", b"INMA", None),
    Command::new("FocusNear1Shot", b"IN1N", None),
    Command::new("FocusFar1Shot", b"IN1F", None),
    Command::new("ZoomTele1Shot", b"IN1T", None),
    Command::new("ZoomWide1Shot", b"IN1W", None),
    Command::new("ShiftLeft1Shot", b"IN1L", None),
    Command::new("ShiftRight1Shot", b"IN1R", None),
    Command::new("ShiftUp1Shot", b"IN1U", None),
    Command::new("ShiftDown1Shot", b"IN1D", None),
    Command::new("HighAltitudeMode", b"INHA", Some(ValueType::Symbolic(&HIGH_ALTITUDE_MODE))),

    // Display setup
    Command::new("BackColor", b"DSBC", Some(ValueType::Symbolic(&BACK_COLOUR))),
    Command::new("MenuPosition", b"DSMP", Some(ValueType::Symbolic(&MENU_POSITION))),
    Command::new("SourceDisplay", b"DSSD", Some(ValueType::Symbolic(&SOURCE_DISPLAY))),
    Command::new("Logo", b"DSLO", None),
    Command::new("Language", b"DSLA", None),

    // Function
    Command::new("Trigger", b"FUTR", Some(ValueType::Symbolic(&TRIGGER))),
    Command::new("OffTimer", b"FUOT", None),
    Command::new("EcoMode", b"FUEM", None),
    Command::new("Control4", b"FUCF", None),

    // Information
    Command::new("InfoInput", b"IFIN", Some(ValueType::Symbolic(&INPUT_STATE))),
    Command::new("InfoSource", b"IFIS", Some(ValueType::Decoded(&SOURCE_DATA))),
    Command::new("InfoHorizontalResolution", b"IFRH", Some(ValueType::NumericReadOnly)),
    Command::new("InfoVerticalResolution", b"IFRV", Some(ValueType::NumericReadOnly)),
    Command::new("InfoHorizontalFrequency", b"IFFH", Some(ValueType::NumericReadOnly)),
    Command::new("InfoVerticalFrequency", b"IFFV", Some(ValueType::NumericReadOnly)),
    Command::new("InfoDeepColor", b"IFDC", Some(ValueType::Decoded(&DEEP_COLOR_DATA))),
    Command::new("InfoColorSpace", b"IFXV", Some(ValueType::Decoded(&COLOR_SPACE_DATA))),
    Command::new("InfoLampTime", b"IFLT", Some(ValueType::NumericReadOnly)),
    Command::new("InfoSoftVersion", b"IFSV", None),
    Command::new("InfoColorimetry", b"IFCM", Some(ValueType::Decoded(&COLORIMETRY_DATA))),
    Command::new("InfoHDR", b"IFHR", Some(ValueType::Decoded(&HDR_DATA))),
    Command::new("InfoMaxCLL", b"IFMC", Some(ValueType::Numeric)),
    Command::new("InfoMaxFALL", b"IFMF", Some(ValueType::Numeric)),
    Command::new("PMAutoToneMapping", b"PMTM", Some(ValueType::Decoded(&AUTO_TONE_MAPPING_DATA))),
    Command::new("PMMappingLevel", b"PMTL", Some(ValueType::Numeric)),

    // LAN
    Command::new("LanSetup", b"LS", None),
];

/// Every catalog entry, in command-list order.
pub(crate) fn all() -> &'static [Command] {
    COMMANDS
}
