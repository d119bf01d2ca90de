use surveybits::codec::Schedule;
use surveybits::Arbitrary;

criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        encoding_survey_row,
        encoding_survey_row_reversed,
        decoding_survey_row,
        packing_survey_row,
        encoding_random_schedule,
}

fn encoding_survey_row(c: &mut criterion::Criterion) {
    c.bench_function("encode a 17-field survey row", |b| {
        let schedule = Schedule::survey();
        let values = schedule.sample();
        b.iter(|| schedule.encode(&values, false))
    });
}

fn encoding_survey_row_reversed(c: &mut criterion::Criterion) {
    c.bench_function("encode a 17-field survey row back-to-front", |b| {
        let schedule = Schedule::survey().reversed();
        let values = schedule.sample();
        b.iter(|| schedule.encode(&values, true))
    });
}

fn decoding_survey_row(c: &mut criterion::Criterion) {
    c.bench_function("decode a 17-field survey row", |b| {
        let schedule = Schedule::survey();
        let rep = schedule.encode(&schedule.sample(), false).unwrap();
        b.iter(|| schedule.decode(&rep))
    });
}

fn packing_survey_row(c: &mut criterion::Criterion) {
    c.bench_function("pack a 40-bit record into bytes", |b| {
        let schedule = Schedule::survey();
        let rep = schedule.encode(&schedule.sample(), false).unwrap();
        b.iter(|| rep.packed())
    });
}

fn encoding_random_schedule(c: &mut criterion::Criterion) {
    c.bench_function("encode under an arbitrary schedule", |b| {
        let schedule = Schedule::random();
        let values = schedule.sample();
        b.iter(|| schedule.encode(&values, false))
    });
}
