//! SPI Commands and register layouts of the SSD1680

use crate::traits;

use bit_field::BitField;

/// SSD1680 commands
///
/// For more infos about the addresses and what they are doing look into the datasheet
#[allow(dead_code)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    DriverOutputControl = 0x01,
    GateDrivingVoltageCtrl = 0x03,
    SourceDrivingVoltageCtrl = 0x04,
    InitialCodeSettingOtpProgram = 0x08,
    WriteRegisterForInitialCodeSetting = 0x09,
    ReadRegisterForInitialCodeSetting = 0x0A,
    BoosterSoftStartControl = 0x0C,
    DeepSleepMode = 0x10,
    DataEntryModeSetting = 0x11,
    SwReset = 0x12,
    HvReadyDetection = 0x14,
    VciDetection = 0x15,
    TemperatureSensorSelection = 0x18,
    TemperatureSensorControlWrite = 0x1A,
    TemperatureSensorControlRead = 0x1B,
    TemperatureSensorExtControlWrite = 0x1C,
    MasterActivation = 0x20,
    DisplayUpdateControl1 = 0x21,
    DisplayUpdateControl2 = 0x22,
    WriteRamBlackWhite = 0x24,
    WriteRamRed = 0x26,
    ReadRam = 0x27,
    VcomSense = 0x28,
    VcomSenseDuration = 0x29,
    ProgramVcomOtp = 0x2A,
    WriteVcomControl = 0x2B,
    WriteVcomRegister = 0x2C,
    OtpRegisterRead = 0x2D,
    UserIdRead = 0x2E,
    StatusBitRead = 0x2F,
    ProgramWsOtp = 0x30,
    LoadWsOtp = 0x31,
    WriteLutRegister = 0x32,
    CrcCalculation = 0x34,
    CrcStatusRead = 0x35,
    ProgramOtpSelection = 0x36,
    WriteOtpSelection = 0x37,
    WriteUserId = 0x38,
    OtpProgramMode = 0x39,
    BorderWaveformControl = 0x3C,
    EndOption = 0x3F,
    ReadRamOption = 0x41,
    SetRamXAddressStartEndPosition = 0x44,
    SetRamYAddressStartEndPosition = 0x45,
    AutoWriteRedRamRegularPattern = 0x46,
    AutoWriteBwRamRegularPattern = 0x47,
    SetRamXAddressCounter = 0x4E,
    SetRamYAddressCounter = 0x4F,

    Nop = 0x7F,
}

impl traits::Command for Command {
    /// Returns the address of the command
    fn address(self) -> u8 {
        self as u8
    }
}

/// Driver output control (0x01)
///
/// [A7..A0] [0000000|A8] [00000|TB|SM|GD]
pub(crate) struct DriverOutput {
    /// number of gate lines minus one, 9 bit
    pub mux: u16,
    /// GD: first output gate is G1 instead of G0
    pub gate_g1_first: bool,
    /// SM: interlaced gate scanning
    pub interlaced: bool,
    /// TB: scan from G295 to G0
    pub scan_bottom_up: bool,
}

impl DriverOutput {
    pub fn to_bytes(&self) -> [u8; 3] {
        [
            self.mux.get_bits(0..8) as u8,
            self.mux.get_bits(8..9) as u8,
            *0u8.set_bit(0, self.gate_g1_first)
                .set_bit(1, self.interlaced)
                .set_bit(2, self.scan_bottom_up),
        ]
    }
}

/// One phase of the booster soft start
///
/// [1|strength:3|min off time:4]
#[derive(Copy, Clone)]
pub(crate) struct BoosterPhase {
    pub driving_strength: u8,
    pub min_off_time: u8,
}

impl BoosterPhase {
    pub fn to_u8(self) -> u8 {
        *0u8.set_bit(7, true)
            .set_bits(4..7, self.driving_strength & 0b111)
            .set_bits(0..4, self.min_off_time & 0b1111)
    }
}

/// Booster soft start control (0x0C): three phases plus the phase duration byte
pub(crate) struct BoosterSoftStart {
    pub phases: [BoosterPhase; 3],
    pub duration: u8,
}

impl BoosterSoftStart {
    pub fn to_bytes(&self) -> [u8; 4] {
        [
            self.phases[0].to_u8(),
            self.phases[1].to_u8(),
            self.phases[2].to_u8(),
            self.duration,
        ]
    }
}

#[allow(clippy::enum_variant_names)]
#[derive(Copy, Clone)]
pub(crate) enum DataEntryModeIncr {
    XDecrYDecr = 0x0,
    XIncrYDecr = 0x1,
    XDecrYIncr = 0x2,
    XIncrYIncr = 0x3,
}

#[derive(Copy, Clone)]
pub(crate) enum DataEntryModeDir {
    XDir = 0x0,
    YDir = 0x4,
}

/// Data entry mode setting (0x11): counter direction and which counter moves first
#[derive(Copy, Clone)]
pub(crate) struct DataEntryMode {
    pub incr: DataEntryModeIncr,
    pub dir: DataEntryModeDir,
}

impl DataEntryMode {
    pub fn to_u8(self) -> u8 {
        self.incr as u8 | self.dir as u8
    }
}

#[allow(dead_code)]
#[derive(Copy, Clone)]
pub(crate) enum BorderWaveFormVbd {
    Gs = 0x0,
    FixLevel = 0x1,
    Vcom = 0x2,
    HiZ = 0x3,
}

#[allow(dead_code)]
#[derive(Copy, Clone)]
pub(crate) enum BorderWaveFormFixLevel {
    Vss = 0x0,
    Vsh1 = 0x1,
    Vsl = 0x2,
    Vsh2 = 0x3,
}

#[allow(dead_code)]
#[derive(Copy, Clone)]
pub(crate) enum BorderWaveFormGs {
    Lut0 = 0x0,
    Lut1 = 0x1,
    Lut2 = 0x2,
    Lut3 = 0x3,
}

/// Border waveform control (0x3C)
///
/// [VBD:2|fix level:2|0|follow LUT|GS transition:2]
pub(crate) struct BorderWaveForm {
    pub vbd: BorderWaveFormVbd,
    pub fix_level: BorderWaveFormFixLevel,
    pub follow_lut: bool,
    pub gs_trans: BorderWaveFormGs,
}

impl BorderWaveForm {
    pub fn to_u8(&self) -> u8 {
        *0u8.set_bits(6..8, self.vbd as u8)
            .set_bits(4..6, self.fix_level as u8)
            .set_bit(2, self.follow_lut)
            .set_bits(0..2, self.gs_trans as u8)
    }
}

#[allow(dead_code)]
#[derive(Copy, Clone)]
pub(crate) enum RamOption {
    Normal = 0x0,
    BypassAsZero = 0x4,
    Inverse = 0x8,
}

/// Display update control 1 (0x21)
///
/// [red RAM option:4|b/w RAM option:4] [S8-S167 source output:1|0000000]
pub(crate) struct DisplayUpdateControl1 {
    pub red_ram: RamOption,
    pub bw_ram: RamOption,
    pub source_s8_to_s167: bool,
}

impl DisplayUpdateControl1 {
    pub fn to_bytes(&self) -> [u8; 2] {
        [
            *0u8.set_bits(4..8, self.red_ram as u8)
                .set_bits(0..4, self.bw_ram as u8),
            *0u8.set_bit(7, self.source_s8_to_s167),
        ]
    }
}

/// These are not directly documented, but the bitfield is easily reversed from
/// documentation and sample code
/// [7|6|5|4|3|2|1|0]
///  | | | | | | | `--- disable clock
///  | | | | | | `----- disable analog
///  | | | | | `------- display
///  | | | | `--------- display mode 2 (window refresh)
///  | | | `----------- load LUT
///  | | `------------- load temp
///  | `--------------- enable clock
///  `----------------- enable analog
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct DisplayUpdateControl2(pub u8);

#[allow(dead_code)]
impl DisplayUpdateControl2 {
    pub const fn new() -> DisplayUpdateControl2 {
        DisplayUpdateControl2(0x00)
    }

    /// Full refresh sequence: 0xF7
    pub fn full() -> DisplayUpdateControl2 {
        DisplayUpdateControl2::new()
            .enable_analog()
            .enable_clock()
            .load_temp()
            .load_lut()
            .display()
            .disable_analog()
            .disable_clock()
    }

    /// Refresh of the active RAM window: 0xCC
    pub fn window() -> DisplayUpdateControl2 {
        DisplayUpdateControl2::new()
            .enable_analog()
            .enable_clock()
            .display_mode_2()
            .display()
    }

    pub fn disable_clock(mut self) -> Self {
        self.0.set_bit(0, true);
        self
    }

    pub fn disable_analog(mut self) -> Self {
        self.0.set_bit(1, true);
        self
    }

    pub fn display(mut self) -> Self {
        self.0.set_bit(2, true);
        self
    }

    pub fn display_mode_2(mut self) -> Self {
        self.0.set_bit(3, true);
        self
    }

    pub fn load_lut(mut self) -> Self {
        self.0.set_bit(4, true);
        self
    }

    pub fn load_temp(mut self) -> Self {
        self.0.set_bit(5, true);
        self
    }

    pub fn enable_clock(mut self) -> Self {
        self.0.set_bit(6, true);
        self
    }

    pub fn enable_analog(mut self) -> Self {
        self.0.set_bit(7, true);
        self
    }
}

/// Deep sleep mode (0x10)
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DeepSleepMode {
    /// Sleeps and keeps the RAM content
    #[default]
    RetainRam = 0x01,

    /// Same as `RetainRam` but RAM content is not kept
    DiscardRam = 0x03,
}
