use serde::{Deserialize, Serialize};

/// Television video standard a cartridge was mastered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VideoStandard {
    /// 525 lines, 60 Hz field rate
    #[default]
    Ntsc,
    /// 625 lines, 50 Hz field rate
    Pal,
}

impl VideoStandard {
    /// Vertical refresh rate in Hz.
    pub fn refresh_hz(&self) -> u8 {
        match self {
            Self::Ntsc => 60,
            Self::Pal => 50,
        }
    }

    /// Upper-case display name ("NTSC" / "PAL").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ntsc => "NTSC",
            Self::Pal => "PAL",
        }
    }

    /// Lower-case identifier used by emulator core options.
    pub fn mode_id(&self) -> &'static str {
        match self {
            Self::Ntsc => "ntsc",
            Self::Pal => "pal",
        }
    }
}

impl std::fmt::Display for VideoStandard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refresh_rates() {
        assert_eq!(VideoStandard::Ntsc.refresh_hz(), 60);
        assert_eq!(VideoStandard::Pal.refresh_hz(), 50);
    }

    #[test]
    fn default_is_ntsc() {
        assert_eq!(VideoStandard::default(), VideoStandard::Ntsc);
        assert_eq!(VideoStandard::default().to_string(), "NTSC");
    }
}
