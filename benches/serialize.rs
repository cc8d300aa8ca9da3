use baconv::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// A ring of `states` states in which every state has an edge on each of `symbols` letters.
fn ring(states: usize, symbols: usize) -> BuchiAutomaton {
    let mut aut = BuchiAutomaton::new();
    aut.add_initial("q0");
    for q in 0..states {
        for a in 0..symbols {
            aut.add_transition((
                format!("q{q}"),
                format!("a{a}"),
                format!("q{}", (q + a + 1) % states),
            ));
        }
    }
    for q in (0..states).step_by(3) {
        aut.add_final(format!("q{q}"));
    }
    aut
}

fn serialize(c: &mut Criterion) {
    let aut = ring(200, 8);
    let ba = aut.to_ba();

    c.bench_function("parse ba", |b| b.iter(|| parse_ba(black_box(&ba))));
    c.bench_function("write hoa", |b| b.iter(|| black_box(&aut).to_hoa()));
    c.bench_function("write gff", |b| b.iter(|| black_box(&aut).to_gff()));
}

criterion_group!(benches, serialize);
criterion_main!(benches);
