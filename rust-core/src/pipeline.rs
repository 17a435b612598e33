//! Bytes in, filtered bytes out
//!
//! Parser → filter → writer, with no file or console I/O of its own.

use crate::audio::SampleBuffer;
use crate::diagnostics::{DiagnosticHook, FilterEvent, NoopHook};
use crate::filters::{BandpassFilter, FilterError, FilterReport, PassbandSpec};
use crate::spectrum::SpectralTransform;
use crate::wav::{read_wav, write_wav, WavError, WavFile, WavHeader};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Wav(#[from] WavError),

    #[error(transparent)]
    Filter(#[from] FilterError),
}

/// Result of filtering one WAV file
#[derive(Debug, Clone)]
pub struct ProcessedWav {
    /// Header with sizes matching `samples`
    pub header: WavHeader,

    /// Filtered payload
    pub samples: SampleBuffer,

    /// What the filter did
    pub report: FilterReport,
}

impl ProcessedWav {
    /// Serialize as a complete WAV file
    pub fn to_wav_bytes(&self) -> Vec<u8> {
        write_wav(&self.header, &self.samples)
    }

    /// Header and filtered payload bytes
    pub fn into_parts(self) -> (WavHeader, Vec<u8>) {
        (self.header, self.samples.into_bytes())
    }
}

/// Filter an already-parsed WAV file with the default FFT backend
pub fn filter_wav(
    wav: WavFile,
    passband: &PassbandSpec,
    hook: &mut dyn DiagnosticHook,
) -> Result<ProcessedWav, FilterError> {
    filter_wav_with(&BandpassFilter::new(), wav, passband, hook)
}

/// Filter an already-parsed WAV file with a specific filter backend
pub fn filter_wav_with<T: SpectralTransform>(
    filter: &BandpassFilter<T>,
    wav: WavFile,
    passband: &PassbandSpec,
    hook: &mut dyn DiagnosticHook,
) -> Result<ProcessedWav, FilterError> {
    let (mut header, mut samples) = wav.into_parts();

    let report = filter.apply(&mut samples, header.sample_rate, passband)?;

    hook.on_event(&FilterEvent::BinsResolved {
        lower_bin: report.bins.lower,
        upper_bin: report.bins.upper,
        num_bins: report.bins.num_bins,
    });
    if report.silenced() && report.samples > 0 {
        hook.on_event(&FilterEvent::Silenced);
    }
    if report.clipped > 0 {
        hook.on_event(&FilterEvent::Clipped {
            count: report.clipped,
        });
    }
    hook.on_event(&FilterEvent::Finished {
        samples: report.samples,
    });

    header.set_data_size(samples.len());

    Ok(ProcessedWav {
        header,
        samples,
        report,
    })
}

/// Parse, filter and return the result, reporting progress to `hook`
pub fn process_wav_with_hook(
    raw: &[u8],
    passband: &PassbandSpec,
    hook: &mut dyn DiagnosticHook,
) -> Result<ProcessedWav, PipelineError> {
    let wav = read_wav(raw)?;
    hook.on_event(&FilterEvent::header_parsed(&wav.header));

    Ok(filter_wav(wav, passband, hook)?)
}

/// Parse and filter an in-memory WAV file
pub fn process_wav(raw: &[u8], passband: &PassbandSpec) -> Result<ProcessedWav, PipelineError> {
    process_wav_with_hook(raw, passband, &mut NoopHook)
}

/// Parse, filter and re-serialize an in-memory WAV file
pub fn filter_wav_bytes(raw: &[u8], passband: &PassbandSpec) -> Result<Vec<u8>, PipelineError> {
    Ok(process_wav(raw, passband)?.to_wav_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wav::{write_wav, HEADER_LEN};

    fn wav_from_i16(sample_rate: u32, samples: &[i16]) -> Vec<u8> {
        let buffer = SampleBuffer::from_i16(samples);
        let header = WavHeader::pcm(1, sample_rate, 16, buffer.len() as u32);
        write_wav(&header, &buffer)
    }

    #[test]
    fn test_alternating_dc_only_scenario() {
        let raw = wav_from_i16(4, &[100, -100, 100, -100]);

        let processed = process_wav(&raw, &PassbandSpec::new(0, 0).unwrap()).unwrap();
        let (header, bytes) = processed.into_parts();

        assert_eq!(header.sample_rate, 4);
        assert_eq!(bytes, vec![0u8; 8]);
    }

    #[test]
    fn test_output_preserves_header_and_length() {
        let input: Vec<i16> = (0..500).map(|n| (n % 50) as i16 * 100).collect();
        let raw = wav_from_i16(8000, &input);

        let out = filter_wav_bytes(&raw, &PassbandSpec::new(300, 3400).unwrap()).unwrap();

        assert_eq!(out.len(), raw.len());
        assert_eq!(&out[..HEADER_LEN], &raw[..HEADER_LEN]);
    }

    #[test]
    fn test_format_error_surfaces() {
        let mut raw = wav_from_i16(8000, &[1, 2, 3]);
        raw[0..4].copy_from_slice(b"RIFX");

        let result = process_wav(&raw, &PassbandSpec::lowpass(1000));

        assert!(matches!(result, Err(PipelineError::Wav(WavError::InvalidTag { .. }))));
    }

    #[test]
    fn test_truncated_error_surfaces() {
        let mut raw = wav_from_i16(8000, &[1, 2, 3, 4]);
        raw.truncate(raw.len() - 3);

        let result = process_wav(&raw, &PassbandSpec::lowpass(1000));

        assert!(matches!(
            result,
            Err(PipelineError::Wav(WavError::Truncated { needed: 8, available: 5 }))
        ));
    }

    #[test]
    fn test_unsupported_width_surfaces() {
        let buffer = SampleBuffer::new(vec![0; 12], 24);
        let header = WavHeader::pcm(1, 8000, 24, 12);
        let raw = write_wav(&header, &buffer);

        let result = process_wav(&raw, &PassbandSpec::lowpass(1000));

        assert!(matches!(
            result,
            Err(PipelineError::Filter(FilterError::UnsupportedFormat(24)))
        ));
    }

    #[test]
    fn test_events_reported_to_hook() {
        let raw = wav_from_i16(8, &[1, 2, 3, 4, 5, 6, 7, 8]);
        let mut events: Vec<FilterEvent> = Vec::new();

        process_wav_with_hook(&raw, &PassbandSpec::new(6, 8).unwrap(), &mut events).unwrap();

        assert_eq!(
            events,
            vec![
                FilterEvent::HeaderParsed {
                    channels: 1,
                    sample_rate: 8,
                    bits_per_sample: 16,
                    data_size: 16,
                },
                FilterEvent::BinsResolved {
                    lower_bin: 6,
                    upper_bin: 7,
                    num_bins: 8,
                },
                FilterEvent::Silenced,
                FilterEvent::Finished { samples: 8 },
            ]
        );
    }
}
