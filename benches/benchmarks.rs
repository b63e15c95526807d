use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

/// Benchmark parsing performance across different expression complexities
fn bench_parsing_by_complexity(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing_by_complexity");

    let test_cases = [
        ("simple_unit", "m"),
        ("prefixed_unit", "kg"),
        ("unicode_micro", "\u{b5}s"),
        ("basic_product", "kg.m"),
        ("simple_quotient", "m/s"),
        ("complex_expression", "kg.m/s2"),
        ("medical_units", "mg/dL"),
        ("multiple_powers", "m2.kg/s3/A"),
        ("nested_quotient", "J/mol/K"),
        ("leading_division", "/min"),
        ("annotation", "m{length}"),
        ("ten_power", "10*3.mol"),
        ("parentheses", "(kg.m)/s2"),
        ("bracket_atom", "[in_i]"),
        ("celsius", "Cel"),
    ];

    for (name, expr) in &test_cases {
        group.bench_with_input(BenchmarkId::new("parse", name), expr, |b, &expr| {
            b.iter(|| ucum::parse(black_box(expr)))
        });
    }

    group.finish();
}

/// Benchmark parsing performance for various unit categories
fn bench_parsing_categories(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing_categories");

    let base_units = ["m", "g", "s", "rad", "K", "C", "cd"];
    for unit in &base_units {
        group.bench_with_input(BenchmarkId::new("base_units", unit), unit, |b, &unit| {
            b.iter(|| ucum::parse(black_box(unit)))
        });
    }

    let prefixed_units = ["km", "mg", "\u{b5}s", "kPa", "mL", "cm", "mm", "ng"];
    for unit in &prefixed_units {
        group.bench_with_input(BenchmarkId::new("prefixed", unit), unit, |b, &unit| {
            b.iter(|| ucum::parse(black_box(unit)))
        });
    }

    let medical_units = ["mg/dL", "mmol/L", "eq/L", "kg/m2", "U/L"];
    for unit in &medical_units {
        group.bench_with_input(BenchmarkId::new("medical", unit), unit, |b, &unit| {
            b.iter(|| ucum::parse(black_box(unit)))
        });
    }

    let engineering_units = ["N", "Pa", "J", "W", "V", "Ohm", "Hz", "kPa"];
    for unit in &engineering_units {
        group.bench_with_input(
            BenchmarkId::new("engineering", unit),
            unit,
            |b, &unit| b.iter(|| ucum::parse(black_box(unit))),
        );
    }

    group.finish();
}

/// Benchmark canonicalization (the parse + dimension-reduction hot path)
fn bench_canonicalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonicalize");

    let expressions = ["kg", "mg", "kg.m/s2", "mg/dL", "N", "Cel", "10*6/uL"];
    for expr in expressions {
        group.bench_function(expr, |b| b.iter(|| ucum::canonicalize(black_box(expr))));
    }

    group.finish();
}

/// Benchmark the high-level validate/convert/info API
fn bench_api_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("api");

    group.bench_function("validate", |b| b.iter(|| ucum::validate(black_box("kg.m/s2"))));
    group.bench_function("info", |b| b.iter(|| ucum::info(black_box("kg.m/s2"))));
    group.bench_function("convert_km_to_m", |b| {
        b.iter(|| ucum::convert(black_box(1.0), black_box("km"), black_box("m")))
    });
    group.bench_function("convert_celsius_to_fahrenheit", |b| {
        b.iter(|| ucum::convert(black_box(37.0), black_box("Cel"), black_box("[degF]")))
    });
    group.bench_function("is_convertible", |b| {
        b.iter(|| ucum::is_convertible(black_box("mg/dL"), black_box("g/L")))
    });

    group.finish();
}

/// Benchmark parser-specific features: unicode normalization and ten-powers
fn bench_parser_features(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser_features");

    let unicode_cases = ["\u{b5}g", "\u{b5}L", "\u{b5}mol", "\u{b5}s"];
    for unit in &unicode_cases {
        group.bench_with_input(BenchmarkId::new("unicode", unit), unit, |b, &unit| {
            b.iter(|| ucum::parse(black_box(unit)))
        });
    }

    let ten_power_cases = ["10*3", "10^-2", "10*6.mol", "10^-12.kg"];
    for expr in &ten_power_cases {
        group.bench_with_input(
            BenchmarkId::new("ten_power", expr),
            expr,
            |b, &expr| b.iter(|| ucum::parse(black_box(expr))),
        );
    }

    let annotation_cases = ["m{length}", "kg{mass}", "s{time}", "K{temperature}"];
    for expr in &annotation_cases {
        group.bench_with_input(
            BenchmarkId::new("annotations", expr),
            expr,
            |b, &expr| b.iter(|| ucum::parse(black_box(expr))),
        );
    }

    group.finish();
}

/// Benchmark edge cases and error conditions
fn bench_edge_cases(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_cases");

    group.bench_function("empty", |b| b.iter(|| ucum::parse(black_box(""))));
    group.bench_function("single_char", |b| b.iter(|| ucum::parse(black_box("m"))));
    group.bench_function("leading_division", |b| {
        b.iter(|| ucum::parse(black_box("/min")))
    });
    group.bench_function("nested_parens", |b| {
        b.iter(|| ucum::parse(black_box("((kg.m)/s)/mol")))
    });

    let long_expr = "kg.m.s.A.K.mol.cd/kg.m.s.A.K.mol.cd";
    group.bench_function("long_expression", |b| {
        b.iter(|| ucum::parse(black_box(long_expr)))
    });

    group.finish();
}

/// End-to-end benchmarks simulating real usage patterns
fn bench_real_world_usage(c: &mut Criterion) {
    let mut group = c.benchmark_group("real_world_usage");

    group.bench_function("validate_then_convert", |b| {
        b.iter(|| {
            let expr = "mg/dL";
            let _ = ucum::validate(black_box(expr));
            let _ = ucum::convert(black_box(1.0), black_box(expr), black_box("g/L"));
        })
    });

    group.bench_function("medical_dosing", |b| {
        b.iter(|| {
            let dose_unit = "mg/kg";
            let time_unit = "/d";
            let _ = ucum::validate(black_box(dose_unit));
            let _ = ucum::validate(black_box(time_unit));
        })
    });

    group.bench_function("engineering_calc", |b| {
        b.iter(|| {
            let pressure = "kPa";
            let area = "m2";
            let force_expr = "kPa.m2";
            let _ = ucum::validate(black_box(pressure));
            let _ = ucum::validate(black_box(area));
            let _ = ucum::canonicalize(black_box(force_expr));
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parsing_by_complexity,
    bench_parsing_categories,
    bench_canonicalize,
    bench_api_operations,
    bench_parser_features,
    bench_edge_cases,
    bench_real_world_usage
);
criterion_main!(benches);
