use criterion::{black_box, criterion_group, criterion_main, Criterion};
use formula_rs::{Formula, Variables};

/// Benchmark simple arithmetic expressions
fn benchmark_simple_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Simple arithmetic Expression Evaluation");

    let expr = "2 + 3 * 4";
    let formula = Formula::new(expr);

    group.bench_function("formula_arithmetic", |b| {
        b.iter(|| Formula::new(black_box(expr)).evaluate().unwrap())
    });

    group.bench_function("reused_formula_arithmetic", |b| {
        b.iter(|| black_box(&formula).evaluate().unwrap())
    });

    group.bench_function("native_rust_arithmetic", |b| {
        b.iter(|| black_box(2.0) + black_box(3.0) * black_box(4.0))
    });

    group.bench_function("meval_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });
}

/// Benchmark complex arithmetic expressions
fn benchmark_complex_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("Complex arithmetic Expression Evaluation");

    let expr = "(10 + 20) * 3 / (4 - 1) + 5 % 3";
    let formula = Formula::new(expr);

    group.bench_function("formula_complex_arithmetic", |b| {
        b.iter(|| black_box(&formula).evaluate().unwrap())
    });

    group.bench_function("meval_complex_arithmetic", |b| {
        b.iter(|| meval::eval_str(black_box(expr)).unwrap())
    });

    group.bench_function("evalexpr_complex_arithmetic", |b| {
        b.iter(|| evalexpr::eval(black_box(expr)).unwrap())
    });
}

/// Benchmark variable lookups
fn benchmark_variables(c: &mut Criterion) {
    let mut group = c.benchmark_group("Variable Evaluation");

    let mut formula = Formula::new("30*n - 2*(50+55) + a%3 + 2^3");
    formula.define("n", 20.0).unwrap();
    formula.define("a", 10.0).unwrap();

    group.bench_function("formula_variables", |b| {
        b.iter(|| black_box(&formula).evaluate().unwrap())
    });
}

/// Benchmark batch evaluation
fn benchmark_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("Batch Evaluation");

    let formula = Formula::new("price * volume / (price + volume)");
    let contexts: Vec<Variables> = (1..=10_000)
        .map(|i| {
            let mut variables = Variables::new();
            variables.define("price", i as f64).unwrap();
            variables.define("volume", (i % 97 + 1) as f64).unwrap();
            variables
        })
        .collect();

    group.bench_function("parallel_batch", |b| {
        b.iter(|| formula.evaluate_batch(black_box(&contexts)))
    });

    group.bench_function("sequential_batch", |b| {
        b.iter(|| {
            black_box(&contexts)
                .iter()
                .map(|variables| formula.evaluate_with(variables))
                .collect::<Vec<_>>()
        })
    });
}

criterion_group!(
    benches,
    benchmark_simple_arithmetic,
    benchmark_complex_arithmetic,
    benchmark_variables,
    benchmark_batch,
);
criterion_main!(benches);
