//! Performance benchmarks for prompt rendering

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use snail::{Formatter, Turn};

/// Build a transcript of `pairs` question/answer pairs plus one open question
fn create_transcript(pairs: usize) -> Vec<Turn> {
    let mut turns = Vec::with_capacity(pairs * 2 + 1);
    for i in 0..pairs {
        turns.push(Turn::user(format!("Question number {}?", i)));
        turns.push(Turn::bot(format!("Answer number {}.", i)));
    }
    turns.push(Turn::user("And the last one?"));
    turns
}

fn benchmark_render_prompt(c: &mut Criterion) {
    let formatter = Formatter::default();

    for pairs in [1, 10, 100] {
        let transcript = create_transcript(pairs);
        c.bench_function(&format!("render_prompt_{}_pairs", pairs), |b| {
            b.iter(|| formatter.render_prompt(black_box(&transcript), Some("</s>")))
        });
    }
}

fn benchmark_template_parse(c: &mut Criterion) {
    c.bench_function("formatter_build", |b| {
        b.iter(|| {
            Formatter::builder()
                .turn_template(black_box("<|user|>{question}<|bot|>{answer}{suffix}\n"))
                .build()
                .unwrap()
        })
    });
}

criterion_group!(benches, benchmark_render_prompt, benchmark_template_parse);
criterion_main!(benches);
