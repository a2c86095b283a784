use criterion::{Criterion, black_box, criterion_group, criterion_main};

use boxflow::{
    Alignment, AnsiStyle, Annot, Attr, Block, RenderOptions, RenderStyle, hcat, line, para,
    positions, reactive, render, styled, vcat,
};

const LOREM: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do \
eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, \
quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.";

fn build_dashboard() -> Block<Annot> {
    let header = styled(
        line("status dashboard"),
        AnsiStyle::of(Attr::text("bold", "1")),
    );
    let body = hcat(Alignment::First, vec![
        reactive("sidebar", para(Alignment::First, 24, LOREM)),
        para(Alignment::First, 56, LOREM),
    ]);
    let footer = reactive("input", line("> _"));
    vcat(Alignment::First, vec![header, body, footer])
}

fn render_plain_paragraph(c: &mut Criterion) {
    let block: Block<()> = para(Alignment::First, 60, LOREM);
    let options = RenderOptions {
        style: RenderStyle::Plain,
        ..RenderOptions::default()
    };
    c.bench_function("render_plain_paragraph", |b| {
        b.iter(|| render(black_box(&block), options));
    });
}

fn render_styled_dashboard(c: &mut Criterion) {
    let block = build_dashboard();
    c.bench_function("render_styled_dashboard", |b| {
        b.iter(|| render(black_box(&block), RenderOptions::default()));
    });
}

fn track_dashboard_positions(c: &mut Criterion) {
    let block = build_dashboard();
    c.bench_function("track_dashboard_positions", |b| {
        b.iter(|| positions(black_box(&block)));
    });
}

criterion_group!(
    benches,
    render_plain_paragraph,
    render_styled_dashboard,
    track_dashboard_positions
);
criterion_main!(benches);
