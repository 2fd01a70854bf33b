use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use thesis_timeline_renderer::config::ViewportConfig;
use thesis_timeline_renderer::layout::compute_layout;
use thesis_timeline_renderer::parse_dataset;
use thesis_timeline_renderer::render_svg;
use thesis_timeline_renderer::theme::Theme;

const ONE_DAY_MS: i64 = 86_400_000;

fn synthetic_dataset_source(events: usize) -> String {
    let kinds = [
        "thesis_milestone",
        "student_update",
        "supervisor_feedback",
        "todo_pending",
        "todo_completed",
        "status_change",
    ];
    let categories = ["Milestones", "Updates", "Feedback", "To-dos"];
    let mut out = String::from(
        r#"{"thesis": {"id": 1, "title": "Synthetic"}, "categories": ["Milestones", "Updates", "Feedback", "To-dos"], "events": ["#,
    );
    for i in 0..events {
        if i > 0 {
            out.push(',');
        }
        let start = i as i64 * ONE_DAY_MS;
        let end = start + (i % 5) as i64 * ONE_DAY_MS;
        out.push_str(&format!(
            r#"{{"start": {start}, "end": {end}, "type": "{}", "category": "{}", "title": "Event {i}"}}"#,
            kinds[i % kinds.len()],
            categories[i % categories.len()],
        ));
    }
    out.push_str("]}");
    out
}

fn fixture_basic() -> &'static str {
    include_str!(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/basic.json"
    ))
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.bench_function("fixture_basic", |b| {
        b.iter(|| {
            let dataset = parse_dataset(black_box(fixture_basic())).expect("parse failed");
            black_box(dataset.events.len());
        });
    });
    for size in [10usize, 100, 1000] {
        let input = synthetic_dataset_source(size);
        group.bench_with_input(BenchmarkId::new("synthetic", size), &input, |b, data| {
            b.iter(|| {
                let dataset = parse_dataset(black_box(data)).expect("parse failed");
                black_box(dataset.events.len());
            });
        });
    }
    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    let theme = Theme::supervise_default();
    let viewport = ViewportConfig::default();
    for size in [10usize, 100, 1000] {
        let dataset = parse_dataset(&synthetic_dataset_source(size)).expect("parse failed");
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &dataset,
            |b, dataset| {
                b.iter(|| {
                    let layout = compute_layout(black_box(dataset), &theme, &viewport, 1200.0)
                        .expect("layout failed");
                    black_box(layout.primitives.len());
                });
            },
        );
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_svg");
    let theme = Theme::supervise_default();
    let viewport = ViewportConfig::default();
    for size in [10usize, 100, 1000] {
        let dataset = parse_dataset(&synthetic_dataset_source(size)).expect("parse failed");
        let layout =
            compute_layout(&dataset, &theme, &viewport, 1200.0).expect("layout failed");
        group.bench_with_input(BenchmarkId::from_parameter(size), &layout, |b, layout| {
            b.iter(|| {
                let svg = render_svg(black_box(layout), &theme);
                black_box(svg.len());
            });
        });
    }
    group.finish();
}

fn bench_end_to_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("end_to_end");
    let theme = Theme::supervise_default();
    let viewport = ViewportConfig::default();
    for size in [10usize, 100, 1000] {
        let input = synthetic_dataset_source(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, data| {
            b.iter(|| {
                let dataset = parse_dataset(black_box(data)).expect("parse failed");
                let layout = compute_layout(&dataset, &theme, &viewport, 1200.0)
                    .expect("layout failed");
                let svg = render_svg(&layout, &theme);
                black_box(svg.len());
            });
        });
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_parse, bench_layout, bench_render, bench_end_to_end
);
criterion_main!(benches);
