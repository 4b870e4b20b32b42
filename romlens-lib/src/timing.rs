//! Video timing hints for launching an N64 emulator core.

use romlens_core::VideoStandard;

use crate::rom_info::RomInfo;

/// Core option key for the vertical refresh rate.
pub const VI_REFRESH_KEY: &str = "mupen64plus-virefresh";
/// Core option key for the video mode.
pub const VI_MODE_KEY: &str = "mupen64plus-vimode";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoTiming {
    pub standard: VideoStandard,
}

impl VideoTiming {
    /// PAL ROMs run at 50 Hz; everything else, including no ROM at all,
    /// falls back to NTSC at 60 Hz.
    pub fn for_rom(info: Option<&RomInfo>) -> Self {
        let standard = match info {
            Some(info) if info.region.is_pal() => VideoStandard::Pal,
            _ => VideoStandard::Ntsc,
        };
        Self { standard }
    }

    pub fn mode(&self) -> &'static str {
        self.standard.mode_id()
    }

    pub fn refresh_hz(&self) -> u8 {
        self.standard.refresh_hz()
    }

    /// Lines for an emulator core options file.
    pub fn core_option_lines(&self) -> [String; 2] {
        [
            format!("{} = \"{}\"", VI_REFRESH_KEY, self.refresh_hz()),
            format!("{} = \"{}\"", VI_MODE_KEY, self.mode()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use romlens_n64::classify_region;

    fn rom_with_region(code: u8) -> RomInfo {
        let mut info = RomInfo::invalid("game.z64", 0);
        info.region = classify_region(code);
        info.valid = true;
        info
    }

    #[test]
    fn pal_rom_runs_at_50hz() {
        let timing = VideoTiming::for_rom(Some(&rom_with_region(0x50)));
        assert_eq!(timing.mode(), "pal");
        assert_eq!(timing.refresh_hz(), 50);
    }

    #[test]
    fn ntsc_rom_runs_at_60hz() {
        let timing = VideoTiming::for_rom(Some(&rom_with_region(0x4A)));
        assert_eq!(timing.mode(), "ntsc");
        assert_eq!(timing.refresh_hz(), 60);
    }

    #[test]
    fn no_rom_defaults_to_ntsc() {
        assert_eq!(VideoTiming::for_rom(None).standard, VideoStandard::Ntsc);
    }

    #[test]
    fn option_lines() {
        let lines = VideoTiming::for_rom(Some(&rom_with_region(0x44))).core_option_lines();
        assert_eq!(lines[0], "mupen64plus-virefresh = \"50\"");
        assert_eq!(lines[1], "mupen64plus-vimode = \"pal\"");
    }
}
