use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use folio::path::{normalize, PathRelationship, PathResolver};
use std::path::Path;

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("absolute_path", |b| {
        b.iter(|| normalize::normalize(black_box(Path::new("/data/wiki/docs/intro"))));
    });

    group.bench_function("with_dots", |b| {
        b.iter(|| normalize::normalize(black_box(Path::new("/a/b/../c/./d"))));
    });

    group.bench_function("resolve_components", |b| {
        b.iter(|| normalize::resolve_components(black_box(Path::new("/a/b/c/d/../../e/f"))));
    });

    group.bench_function("tilde_expansion", |b| {
        b.iter(|| normalize::expand_tilde(black_box(Path::new("~/wiki"))));
    });

    group.finish();
}

fn bench_relationship(c: &mut Criterion) {
    let mut group = c.benchmark_group("relationship");

    let root = Path::new("/data/wiki");
    let inside = Path::new("/data/wiki/docs/intro");
    let sibling = Path::new("/data/wiki-evil/docs");

    group.bench_function("between_descendant", |b| {
        b.iter(|| PathRelationship::between(black_box(inside), black_box(root)));
    });

    group.bench_function("between_unrelated", |b| {
        b.iter(|| PathRelationship::between(black_box(sibling), black_box(root)));
    });

    group.bench_function("is_strictly_within", |b| {
        b.iter(|| PathRelationship::is_strictly_within(black_box(inside), black_box(root)));
    });

    group.finish();
}

fn bench_resolver(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolver");
    let resolver = PathResolver::new("/data/wiki");

    for (name, request) in [
        ("empty", ""),
        ("flat", "/intro"),
        ("nested", "/docs/setup/linux/"),
        ("with_dots", "/docs/./setup/../intro"),
        ("escape", "/../../etc/passwd"),
    ] {
        group.bench_with_input(BenchmarkId::new("resolve", name), &request, |b, &path| {
            b.iter(|| resolver.resolve(black_box(path)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_relationship, bench_resolver);
criterion_main!(benches);
