use calculator::interpreter::logger::NullLogger;
use calculator::interpreter::Calculator;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate");
    let calculator = Calculator::with_logger(NullLogger);
    let long_expression = (1..=200).map(|n| n.to_string()).collect::<Vec<_>>().join("*2-");
    let expressions = [
        "2+2".to_string(),
        "10-2*3".to_string(),
        "-5+3*-2/4-1.25".to_string(),
        "1.5*2-3/4+5*6-7/8+9".to_string(),
        long_expression,
    ];
    for expression in expressions {
        group.throughput(Throughput::Bytes(expression.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(expression.len()),
            &expression,
            |bencher, expression| {
                bencher.iter(|| calculator.calculate(expression));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
