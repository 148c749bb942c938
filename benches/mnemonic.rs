use criterion::{black_box, criterion_group, criterion_main, Criterion};

use seedphrase::mnemonic::{derive, encode_entropy, validate, Wordlist};

const PHRASE: &str = "legal winner thank year wave sausage worth useful legal winner thank yellow";

fn bench_mnemonic(c: &mut Criterion) {
    let list = Wordlist::english();

    c.bench_function("encode_256", |b| {
        b.iter(|| encode_entropy(black_box(&[0x7f; 32]), &list))
    });
    c.bench_function("validate_12", |b| b.iter(|| validate(black_box(PHRASE), &list)));
    c.bench_function("derive_seed", |b| b.iter(|| derive(black_box(PHRASE), "")));
}

criterion_group!(benches, bench_mnemonic);
criterion_main!(benches);
