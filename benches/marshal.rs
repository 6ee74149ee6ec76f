use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde::Serialize;
use serde_args::{impl_record, marshal, to_args};

#[derive(Serialize, Clone)]
struct Credentials {
    user: String,
    password: String,
}

#[derive(Serialize, Clone)]
struct SyncOptions {
    #[serde(flatten)]
    credentials: Credentials,
    #[serde(rename = "a")]
    archive: bool,
    bwlimit: u32,
    exclude: Vec<String>,
    #[serde(rename = "0")]
    source: String,
    #[serde(rename = "1")]
    dest: String,
}

struct CredentialsRecord {
    user: String,
    password: String,
}

impl_record!(CredentialsRecord { user => "user", password => "password" });

struct SyncOptionsRecord {
    credentials: CredentialsRecord,
    archive: bool,
    bwlimit: u32,
    exclude: Vec<String>,
    source: String,
    dest: String,
}

impl_record!(SyncOptionsRecord {
    ..credentials,
    archive => "a",
    bwlimit => "bwlimit",
    exclude => "exclude",
    source => "0",
    dest => "1",
});

fn excludes(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("*.tmp{}", i)).collect()
}

fn sync(n: usize) -> SyncOptions {
    SyncOptions {
        credentials: Credentials {
            user: "backup".to_string(),
            password: String::new(),
        },
        archive: true,
        bwlimit: 1000,
        exclude: excludes(n),
        source: "/srv/data/".to_string(),
        dest: "backup@host:/data/".to_string(),
    }
}

fn sync_record(n: usize) -> SyncOptionsRecord {
    SyncOptionsRecord {
        credentials: CredentialsRecord {
            user: "backup".to_string(),
            password: String::new(),
        },
        archive: true,
        bwlimit: 1000,
        exclude: excludes(n),
        source: "/srv/data/".to_string(),
        dest: "backup@host:/data/".to_string(),
    }
}

fn benchmark_serde_simple(c: &mut Criterion) {
    let opts = sync(2);

    c.bench_function("to_args_simple_struct", |b| {
        b.iter(|| to_args(black_box(&opts)))
    });
}

fn benchmark_record_simple(c: &mut Criterion) {
    let opts = sync_record(2);

    c.bench_function("marshal_simple_record", |b| {
        b.iter(|| marshal(black_box(&opts)))
    });
}

fn benchmark_list_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("exclude_list");

    for size in [10, 100, 1000].iter() {
        let opts = sync(*size);
        let record = sync_record(*size);

        group.bench_with_input(BenchmarkId::new("to_args", size), size, |b, _| {
            b.iter(|| to_args(black_box(&opts)))
        });
        group.bench_with_input(BenchmarkId::new("marshal", size), size, |b, _| {
            b.iter(|| marshal(black_box(&record)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_serde_simple,
    benchmark_record_simple,
    benchmark_list_sizes
);
criterion_main!(benches);
