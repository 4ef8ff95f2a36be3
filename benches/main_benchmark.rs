use scalefloat::{Float, Magnitude, Precision, Sign};

fn test_sqrt() {
    let two = Float::from_u64(2);
    black_box(two.sqrt_with_precision(Precision::new(150)));
}

fn test_div() {
    let a = Float::new(Sign::Positive, 3, Magnitude::pseudorandom(400, 123));
    let b = Float::new(Sign::Negative, -7, Magnitude::pseudorandom(200, 456));
    black_box(Float::div_with_precision(&a, &b, Precision::new(100)));
}

fn test_add_sub_aligned() {
    let a = Float::new(Sign::Positive, 40, Magnitude::pseudorandom(300, 1));
    let b = Float::new(Sign::Positive, -40, Magnitude::pseudorandom(300, 2));
    let sum = &a + &b;
    black_box(&sum - &a);
}

fn test_mul_karatsuba() {
    let a = Float::new(Sign::Positive, 1, Magnitude::pseudorandom(1000, 3));
    let b = Float::new(Sign::Negative, 2, Magnitude::pseudorandom(1000, 4));
    black_box(&a * &b);
}

fn test_powi() {
    let a = Magnitude::from_u64(1275563424);
    black_box(a.powi(11000));
}

fn test_to_string() {
    let third = Float::div_with_precision(
        &Float::from_u64(1),
        &Float::from_u64(3),
        Precision::new(20),
    );
    black_box(third.to_string());
}

fn test_magnitude_div() {
    let a = Magnitude::pseudorandom(1000, 12345);
    let b = Magnitude::pseudorandom(500, 67890);
    black_box(a / b);
}

use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("test_sqrt", |b| b.iter(test_sqrt));
    c.bench_function("test_div", |b| b.iter(test_div));
    c.bench_function("test_add_sub_aligned", |b| b.iter(test_add_sub_aligned));
    c.bench_function("test_mul_karatsuba", |b| b.iter(test_mul_karatsuba));
    c.bench_function("test_powi", |b| b.iter(test_powi));
    c.bench_function("test_to_string", |b| b.iter(test_to_string));
    c.bench_function("test_magnitude_div", |b| b.iter(test_magnitude_div));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
