//! Command-line front end: filter a WAV file on disk

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::{Path, PathBuf};
use wav_bandpass::audio::SampleBuffer;
use wav_bandpass::config::{BandpassConfig, DEFAULT_LOWER_CUTOFF_HZ, DEFAULT_UPPER_CUTOFF_HZ};
use wav_bandpass::diagnostics::{DiagnosticHook, FilterEvent, LogHook};
use wav_bandpass::fileio::{dump_raw, read_file, resolve_path, write_binary_file};
use wav_bandpass::filters::PassbandSpec;
use wav_bandpass::pipeline::filter_wav;
use wav_bandpass::spectrum::{SpectrumAnalyzer, WindowType};
use wav_bandpass::wav::read_wav;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum WindowArg {
    Hann,
    Hamming,
    Blackman,
    Rectangular,
}

impl From<WindowArg> for WindowType {
    fn from(arg: WindowArg) -> Self {
        match arg {
            WindowArg::Hann => WindowType::Hann,
            WindowArg::Hamming => WindowType::Hamming,
            WindowArg::Blackman => WindowType::Blackman,
            WindowArg::Rectangular => WindowType::Rectangular,
        }
    }
}

/// Apply an ideal (brick-wall) bandpass filter to an 8 or 16-bit PCM WAV file
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Opts {
    /// Input WAV file, relative to the working directory
    input: PathBuf,

    /// Output WAV file [default: <input>_filtered.wav]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Lower cutoff in Hz
    #[arg(short, long, default_value_t = DEFAULT_LOWER_CUTOFF_HZ)]
    lower: u32,

    /// Upper cutoff in Hz
    #[arg(short, long, default_value_t = DEFAULT_UPPER_CUTOFF_HZ)]
    upper: u32,

    /// Write header_data.dat and audio_data.dat into this directory
    #[arg(long, value_name = "DIR")]
    dump_dir: Option<PathBuf>,

    /// Log the first N input samples
    #[arg(long, value_name = "N")]
    print_samples: Option<usize>,

    /// Report passband energy before and after filtering
    #[arg(short, long)]
    analyze: bool,

    /// Window for the analysis spectrum
    #[arg(long, value_enum, default_value_t = WindowArg::Hann)]
    window: WindowArg,
}

fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{}_filtered.wav", stem))
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn print_samples(samples: &SampleBuffer, limit: usize) -> Result<()> {
    let values = samples
        .raw_values()
        .context("Failed to decode samples for printing")?;
    for (i, value) in values.iter().take(limit).enumerate() {
        log::info!("Sample {}: {}", i, value);
    }
    Ok(())
}

fn report_spectrum(
    analyzer: &SpectrumAnalyzer,
    label: &str,
    samples: &SampleBuffer,
    sample_rate: u32,
    passband: &PassbandSpec,
) -> Result<()> {
    let amplitudes = samples.decode()?;
    let summary = analyzer.summarize(&amplitudes, sample_rate, passband)?;
    log::info!(
        "{}: peak {:.1} Hz, {:.1}% of energy in passband ({} window)",
        label,
        summary.peak_hz,
        summary.passband_ratio() * 100.0,
        analyzer.window_type().name()
    );
    Ok(())
}

fn main() -> Result<()> {
    init_logging();
    let opts = Opts::parse();

    let mut config = BandpassConfig::new(opts.lower, opts.upper)
        .context("Invalid cutoff frequencies")?;
    if opts.analyze {
        config = config.with_analysis(opts.window.into());
    }

    let input = resolve_path(&opts.input)?;
    let output = match &opts.output {
        Some(path) => resolve_path(path)?,
        None => default_output(&input),
    };

    let raw = read_file(&input)?;
    let wav = read_wav(&raw).with_context(|| format!("Failed to parse {}", input.display()))?;

    let mut hook = LogHook;
    hook.on_event(&FilterEvent::header_parsed(&wav.header));

    if let Some(dir) = &opts.dump_dir {
        let (header_path, audio_path) = dump_raw(&resolve_path(dir)?, &wav)?;
        log::info!(
            "Dumped raw data to {} and {}",
            header_path.display(),
            audio_path.display()
        );
    }

    if let Some(limit) = opts.print_samples {
        print_samples(&wav.samples, limit)?;
    }

    let analyzer = config.analyzer();
    if let Some(analyzer) = &analyzer {
        report_spectrum(analyzer, "Input", &wav.samples, wav.header.sample_rate, &config.passband)?;
    }

    let processed = filter_wav(wav, &config.passband, &mut hook)
        .with_context(|| format!("Failed to filter {}", input.display()))?;

    if let Some(analyzer) = &analyzer {
        report_spectrum(
            analyzer,
            "Output",
            &processed.samples,
            processed.header.sample_rate,
            &config.passband,
        )?;
    }

    write_binary_file(&output, &processed.to_wav_bytes())?;
    log::info!("Wrote {}", output.display());

    Ok(())
}
