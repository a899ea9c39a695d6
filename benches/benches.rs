use criterion::{Criterion, criterion_group, criterion_main};
use melt_rs::SaltConditions;
use std::hint::black_box;

const PRIMER: &[u8] = b"AGTCTGGTCTGGATCTGAGAACTTCAGGCT".as_slice();
const SEQ: &[u8] = b"GAAATAGACGCCAAGTTCAATCCGTACTCCGACGTACGATGGAACAGTGTGGATGTGACGAGCTTCATTTATACCCTTCGCGCGCCGGACCGGGGTCCGCAAGGCGCGGCGGTGCACAAGCAATTGACAACTAACCACCGTGTATTCGTTATGGCACCAGGGAGTTTAAGCCGAGTCAATGGAGCTCGCAATACAGAGTT".as_slice();

fn criterion_benchmark(c: &mut Criterion) {
    let conditions = SaltConditions::qpcr();

    c.bench_function("tm primer", |b| {
        b.iter(|| melt_rs::compute_tm(black_box(PRIMER), black_box(&conditions)))
    });
    c.bench_function("tm long", |b| {
        b.iter(|| melt_rs::compute_tm(black_box(SEQ), black_box(&conditions)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
