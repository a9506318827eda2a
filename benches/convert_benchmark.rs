//! Benchmarks for mdhtml conversion performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks convert synthetic documents mixing every paragraph kind.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

/// Creates a synthetic document with the given number of sections.
fn create_test_document(sections: usize) -> String {
    let mut content = String::new();

    for i in 0..sections {
        content.push_str(&format!("## Section {}\n\n", i + 1));
        content.push_str("Some **bold** text, some *italic* text\n");
        content.push_str("and a ~~struck~~ word spanning two lines.\n\n");
        content.push_str("* first\n  * nested\n  * nested again\n* second\n\n");
        content.push_str("1. one\n2. two\n3. three\n\n");
    }

    content
}

/// Benchmark line classification.
fn bench_classify(c: &mut Criterion) {
    let lines = [
        "### Header line",
        "* list item",
        "12. ordered item",
        "plain text that matches nothing in particular",
    ];

    c.bench_function("classify_lines", |b| {
        b.iter(|| {
            for line in &lines {
                black_box(mdhtml::classify(black_box(line)));
            }
        });
    });
}

/// Benchmark full conversion at various sizes.
fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert_str");

    for sections in [10, 100, 1000].iter() {
        let text = create_test_document(*sections);

        group.bench_function(format!("{}_sections", sections), |b| {
            b.iter(|| mdhtml::convert_str(black_box(&text)));
        });
    }

    group.finish();
}

/// Benchmark inline formatting of a paragraph with many spans.
fn bench_inline(c: &mut Criterion) {
    let line = "*a* **b** ~~c~~ ".repeat(50);
    let paragraph = mdhtml::Paragraph::new(mdhtml::ParagraphKind::SimpleText, line);

    c.bench_function("format_inline_many_spans", |b| {
        b.iter(|| mdhtml::render::format_inline(black_box(paragraph.clone())));
    });
}

criterion_group!(benches, bench_classify, bench_convert, bench_inline);
criterion_main!(benches);
