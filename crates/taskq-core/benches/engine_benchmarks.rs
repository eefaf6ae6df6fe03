use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use taskq_core::dashboard::{Dashboard, DashboardConfig};
use taskq_core::engine::{apply, compute_stats};
use taskq_core::models::{Task, TaskPriority, Timestamp};
use taskq_core::query::{FilterSpec, SortKey, SortOrder};

const TAGS: &[&str] = &["work", "home", "urgent", "errand", "finance"];
const PRIORITIES: &[TaskPriority] = &[
    TaskPriority::Low,
    TaskPriority::Medium,
    TaskPriority::High,
    TaskPriority::Urgent,
];

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
}

fn create_test_tasks(count: usize) -> Vec<Task> {
    let mut rng = fastrand::Rng::with_seed(42);
    (0..count)
        .map(|i| {
            let created = base() + Duration::minutes(rng.i64(0..100_000));
            let mut task = Task::new(i as i64, format!("Benchmark task {}", rng.u32(..)), created);
            task.completed = rng.bool();
            if rng.u8(0..5) > 0 {
                task.priority = Some(PRIORITIES[rng.usize(..PRIORITIES.len())]);
            }
            if rng.bool() {
                task.due_date = Some(Timestamp::Valid(base() + Duration::days(rng.i64(-60..60))));
            }
            task.tags = (0..rng.usize(0..3))
                .map(|_| TAGS[rng.usize(..TAGS.len())].to_string())
                .collect();
            task
        })
        .collect()
}

fn bench_apply(c: &mut Criterion) {
    let spec = FilterSpec::new()
        .with_completed(false)
        .with_tags(["work", "urgent"])
        .with_search("task 1")
        .sorted_by(SortKey::Priority, SortOrder::Desc);
    let now = base() + Duration::days(10);

    let mut group = c.benchmark_group("apply");
    for size in [100usize, 1_000, 10_000] {
        let tasks = create_test_tasks(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &tasks, |b, tasks| {
            b.iter(|| apply(black_box(tasks), black_box(&spec), black_box(now)))
        });
    }
    group.finish();
}

fn bench_sort_due_date(c: &mut Criterion) {
    let tasks = create_test_tasks(10_000);
    let spec = FilterSpec::new().sorted_by(SortKey::DueDate, SortOrder::Asc);
    let now = base();

    c.bench_function("sort_due_date_10k", |b| {
        b.iter(|| apply(black_box(&tasks), black_box(&spec), black_box(now)))
    });
}

fn bench_stats_and_dashboard(c: &mut Criterion) {
    let tasks = create_test_tasks(10_000);
    let now = base();
    let config = DashboardConfig::default();

    c.bench_function("compute_stats_10k", |b| {
        b.iter(|| compute_stats(black_box(&tasks), black_box(now)))
    });
    c.bench_function("dashboard_10k", |b| {
        b.iter(|| Dashboard::build(black_box(&tasks), black_box(now), black_box(&config)))
    });
}

criterion_group!(benches, bench_apply, bench_sort_due_date, bench_stats_and_dashboard);
criterion_main!(benches);
