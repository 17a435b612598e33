//! Filter run configuration

use crate::filters::{FilterError, PassbandSpec};
use crate::spectrum::{SpectrumAnalyzer, WindowType};

/// Default lower cutoff (telephone voice band)
pub const DEFAULT_LOWER_CUTOFF_HZ: u32 = 300;

/// Default upper cutoff (telephone voice band)
pub const DEFAULT_UPPER_CUTOFF_HZ: u32 = 3400;

/// Settings for one filtering run
#[derive(Debug, Clone)]
pub struct BandpassConfig {
    /// Passband to keep
    pub passband: PassbandSpec,

    /// Report spectrum energy before and after filtering
    pub analyze: bool,

    /// Window used for the analysis spectrum
    pub window_type: WindowType,
}

impl Default for BandpassConfig {
    fn default() -> Self {
        Self {
            passband: PassbandSpec {
                lower_cutoff_hz: DEFAULT_LOWER_CUTOFF_HZ,
                upper_cutoff_hz: DEFAULT_UPPER_CUTOFF_HZ,
            },
            analyze: false,
            window_type: WindowType::Hann,
        }
    }
}

impl BandpassConfig {
    /// Config with a validated passband and default analysis settings
    pub fn new(lower_cutoff_hz: u32, upper_cutoff_hz: u32) -> Result<Self, FilterError> {
        Ok(Self {
            passband: PassbandSpec::new(lower_cutoff_hz, upper_cutoff_hz)?,
            ..Self::default()
        })
    }

    /// Enable spectrum analysis with the given window
    pub fn with_analysis(mut self, window_type: WindowType) -> Self {
        self.analyze = true;
        self.window_type = window_type;
        self
    }

    /// Analyzer for this run, if analysis is enabled
    pub fn analyzer(&self) -> Option<SpectrumAnalyzer> {
        self.analyze.then(|| SpectrumAnalyzer::new(self.window_type))
    }
}
