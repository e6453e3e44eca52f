use criterion::{black_box, criterion_group, criterion_main, Criterion};
use prettypaint::colour::Colour;
use prettypaint::paint::Spans;
use prettypaint::style::{Difference, Style};

pub fn run_benchmarks(c: &mut Criterion) {
    let plain = Style::new();
    let bold = plain.bold();
    let loud = bold
        .italic()
        .underline()
        .fg(Colour::rgb(215, 40, 39))
        .on(Colour::fixed(236));

    let mut group = c.benchmark_group("style");

    group.bench_function("prefix", |b| {
        b.iter(|| black_box(loud).prefix().to_string())
    });

    group.bench_function("difference", |b| {
        b.iter(|| {
            (
                Difference::between(black_box(&bold), black_box(&loud)),
                Difference::between(black_box(&loud), black_box(&bold)),
                Difference::between(black_box(&loud), black_box(&loud)),
            )
        })
    });

    group.finish();

    let spans = (0..64)
        .map(|index| match index % 4 {
            0 => plain.paint("plain "),
            1 => bold.paint("bold "),
            2 => loud.paint("loud "),
            _ => bold.italic().paint("bold italic "),
        })
        .collect::<Vec<_>>();

    let mut group = c.benchmark_group("spans");
    group.bench_function("64-spans", |b| {
        b.iter(|| Spans(black_box(&spans)).to_string())
    });
    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
