use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use std::f64::consts::PI;
use wav_bandpass::audio::SampleBuffer;
use wav_bandpass::filters::{apply_bandpass, BandpassFilter, PassbandSpec};
use wav_bandpass::spectrum::NaiveDft;

fn test_signal(len: usize) -> SampleBuffer {
    let samples: Vec<i16> = (0..len)
        .map(|n| {
            let t = n as f64 / 44100.0;
            (8000.0 * (2.0 * PI * 440.0 * t).sin() + 4000.0 * (2.0 * PI * 6000.0 * t).sin()) as i16
        })
        .collect();
    SampleBuffer::from_i16(&samples)
}

fn bench_fft_bandpass(c: &mut Criterion) {
    let passband = PassbandSpec::new(300, 3400).unwrap();
    let mut group = c.benchmark_group("fft_bandpass");

    // Powers of two plus one second at 44.1 kHz (mixed radix)
    for len in [4096usize, 44100, 65536] {
        let signal = test_signal(len);
        group.bench_with_input(BenchmarkId::from_parameter(len), &signal, |b, signal| {
            b.iter_batched(
                || signal.clone(),
                |mut buffer| apply_bandpass(black_box(&mut buffer), 44100, &passband),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_naive_bandpass(c: &mut Criterion) {
    let passband = PassbandSpec::new(300, 3400).unwrap();
    let filter = BandpassFilter::with_transform(NaiveDft);
    let signal = test_signal(512);

    c.bench_function("naive_bandpass_512", |b| {
        b.iter_batched(
            || signal.clone(),
            |mut buffer| filter.apply(black_box(&mut buffer), 44100, &passband),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_fft_bandpass, bench_naive_bandpass);
criterion_main!(benches);
