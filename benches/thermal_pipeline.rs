use criterion::{black_box, criterion_group, criterion_main, Criterion, BenchmarkId};
use thermal_risk_rs::image_pipeline::{
    AnalysisConfig, Raster, RiskClassifier, ThermalRiskPipeline, OutputConfig,
    scan_brightness_range,
};

fn generate_raster(width: usize, height: usize) -> Raster {
    let mut data = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            data.push(((x * 7 + y * 13) % 256) as u8);
        }
    }
    Raster::new(width, height, data).unwrap()
}

fn benchmark_analysis_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis_by_size");

    let sizes = vec![
        (100, 100, "100x100"),
        (500, 500, "500x500"),
        (1000, 1000, "1000x1000"),
    ];

    for (width, height, label) in sizes {
        let raster = generate_raster(width, height);

        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &raster,
            |b, raster| {
                let pipeline = ThermalRiskPipeline::new(
                    AnalysisConfig::default(),
                    OutputConfig::default(),
                ).unwrap();

                b.iter(|| {
                    let _ = pipeline.analyze_raster(black_box(raster));
                });
            },
        );
    }

    group.finish();
}

fn benchmark_range_scan(c: &mut Criterion) {
    let raster = generate_raster(1000, 1000);

    c.bench_function("scan_brightness_range_1000x1000", |b| {
        b.iter(|| scan_brightness_range(black_box(&raster)))
    });
}

fn benchmark_threshold_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("threshold_density");
    let raster = generate_raster(500, 500);
    let range = scan_brightness_range(&raster).unwrap();

    let settings = vec![
        (0.0, 0, "flag_everything"),
        (80.0, 180, "reference"),
        (100.0, 255, "flag_almost_nothing"),
    ];

    for (min_temp, min_bright, label) in settings {
        let classifier = RiskClassifier::new(min_temp, min_bright, [255, 10, 0]);
        group.bench_function(label, |b| {
            b.iter(|| classifier.classify(black_box(&raster), range));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_analysis_sizes,
    benchmark_range_scan,
    benchmark_threshold_density
);
criterion_main!(benches);
