use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dlpmenu::command::{build_command, DownloadMode};
use dlpmenu::extractor::parse_formats;
use dlpmenu::utils::DlpConfig;

const LISTING_LINES: [&str; 4] = [
    "140 m4a   audio only      2 |    3.27MiB  129k https | audio only          mp4a.40.2  129k 44k medium, m4a_dash",
    "137 mp4   1920x1080   30    |   80.12MiB 4400k https | avc1.640028   4400k video only          1080p, mp4_dash",
    "248 webm  1920x1080   30    |   60.02MiB 2600k https | vp9           2600k video only          1080p, webm_dash",
    "18  mp4   640x360     30  2 |    9.10MiB  360k https | avc1.42001E        mp4a.40.2       44k 360p",
];

fn benchmark_parse_formats(c: &mut Criterion) {
    let mut group = c.benchmark_group("Format Listing Parse");

    let small = LISTING_LINES.join("\n");
    group.bench_function("small", |b| b.iter(|| parse_formats(black_box(&small))));

    let large = LISTING_LINES.repeat(250).join("\n");
    group.bench_function("large", |b| b.iter(|| parse_formats(black_box(&large))));

    group.finish();
}

fn benchmark_build_command(c: &mut Criterion) {
    let mut group = c.benchmark_group("Command Build");
    let config = DlpConfig::default();
    let modes = [
        DownloadMode::Standard,
        DownloadMode::WithSubtitles,
        DownloadMode::VideoOnly,
        DownloadMode::AudioOnly,
    ];

    for mode in modes {
        group.bench_function(mode.to_string(), |b| {
            b.iter(|| build_command(black_box(&config), black_box("https://example/v"), &mode))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_parse_formats, benchmark_build_command);
criterion_main!(benches);
