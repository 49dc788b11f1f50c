use criterion::{Criterion, criterion_group, criterion_main};
use marklex_engine::{Grammar, Lexer, preprocess};

/// A document mixing every block construct, repeated `sections` times.
fn generate_markdown_content(sections: usize) -> String {
    let mut out = String::new();
    for i in 0..sections {
        out.push_str(&format!("## Section {i}\n\n"));
        out.push_str("Some *emphasis*, **strong** text and `code` with a [link](/u \"t\").\n");
        out.push_str("A second line with a [reference] and <https://example.com>.\n\n");
        out.push_str("- item one\n- item *two*\n  - nested\n\n");
        out.push_str("> quoted\n> > deeper\n\n");
        out.push_str("```rust\nfn main() {}\n```\n\n");
    }
    out.push_str("[reference]: /ref \"Reference\"\n");
    out
}

fn bench_lexing(c: &mut Criterion) {
    let grammar = Grammar::compile().unwrap();
    let lexer = Lexer::new(&grammar);

    let mut group = c.benchmark_group("lexing");
    group.sample_size(10);

    let content = preprocess(&generate_markdown_content(100));
    group.bench_function("document", |b| {
        b.iter(|| std::hint::black_box(lexer.lex(std::hint::black_box(&content)).unwrap()));
    });

    let stars = "*a ".repeat(2_000);
    group.bench_function("unmatched_delimiters", |b| {
        b.iter(|| std::hint::black_box(lexer.lex(std::hint::black_box(&stars)).unwrap()));
    });

    let brackets = "[".repeat(2_000);
    group.bench_function("open_brackets", |b| {
        b.iter(|| std::hint::black_box(lexer.lex(std::hint::black_box(&brackets)).unwrap()));
    });

    group.finish();
}

fn bench_grammar_compile(c: &mut Criterion) {
    c.bench_function("grammar_compile", |b| {
        b.iter(|| std::hint::black_box(Grammar::compile().unwrap()));
    });
}

criterion_group!(benches, bench_lexing, bench_grammar_compile);
criterion_main!(benches);
