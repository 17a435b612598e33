//! Optional observability for the filtering pipeline
//!
//! The pipeline reports what it is doing through `DiagnosticHook`; callers
//! that don't care pass `NoopHook`.

use crate::wav::WavHeader;

/// Progress events emitted by the pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum FilterEvent {
    /// Container header was parsed
    HeaderParsed {
        channels: u16,
        sample_rate: u32,
        bits_per_sample: u16,
        data_size: usize,
    },

    /// Passband was mapped onto transform bins
    BinsResolved {
        lower_bin: usize,
        upper_bin: usize,
        num_bins: usize,
    },

    /// Passband lies above Nyquist; output is silence
    Silenced,

    /// Samples were clamped while re-encoding
    Clipped { count: usize },

    /// Filtering finished
    Finished { samples: usize },
}

impl FilterEvent {
    /// Event describing a parsed header
    pub fn header_parsed(header: &WavHeader) -> Self {
        FilterEvent::HeaderParsed {
            channels: header.num_channels,
            sample_rate: header.sample_rate,
            bits_per_sample: header.bits_per_sample,
            data_size: header.data_size(),
        }
    }
}

/// Receiver for pipeline events
pub trait DiagnosticHook {
    fn on_event(&mut self, event: &FilterEvent);
}

/// Discards every event
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHook;

impl DiagnosticHook for NoopHook {
    fn on_event(&mut self, _event: &FilterEvent) {}
}

/// Forwards events to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogHook;

impl DiagnosticHook for LogHook {
    fn on_event(&mut self, event: &FilterEvent) {
        match event {
            FilterEvent::HeaderParsed {
                channels,
                sample_rate,
                bits_per_sample,
                data_size,
            } => {
                log::info!("Number of channels: {}", channels);
                log::info!("Sample rate: {} Hz", sample_rate);
                log::info!("Bits per sample: {} bits", bits_per_sample);
                log::info!("Data size: {} bytes", data_size);
            }
            FilterEvent::BinsResolved {
                lower_bin,
                upper_bin,
                num_bins,
            } => log::debug!("Keeping bins {}..={} of {}", lower_bin, upper_bin, num_bins),
            FilterEvent::Silenced => log::warn!("Passband is above Nyquist, output is silence"),
            FilterEvent::Clipped { count } => log::warn!("{} samples clamped", count),
            FilterEvent::Finished { samples } => log::info!("Filtered {} samples", samples),
        }
    }
}

/// Records events, handy for tests and batch reports
impl DiagnosticHook for Vec<FilterEvent> {
    fn on_event(&mut self, event: &FilterEvent) {
        self.push(event.clone());
    }
}
