use criterion::{Criterion, criterion_group, criterion_main};
use sitewright::{PageAst, Pipeline, PipelineOptions, SiteInput};
use std::hint::black_box;

fn site_compilation(c: &mut Criterion) {
    let pipeline = Pipeline::new();
    let opts = PipelineOptions::new("technology", "modern")
        .with_pages(&["home", "about", "pricing", "contact"]);
    let input = SiteInput::default();

    c.bench_function("compile_site/technology_4_pages", |b| {
        b.iter(|| {
            let site = pipeline
                .compile_site(black_box(&input), black_box(&opts))
                .expect("compilation succeeds");
            black_box(site.styles.len())
        })
    });
}

fn ast_compilation(c: &mut Criterion) {
    let pipeline = Pipeline::new();
    let opts = PipelineOptions::new("technology", "modern");
    let ast = PageAst::from_json(include_str!("fixtures/landing_ast.json"))
        .expect("bench AST parses");

    c.bench_function("compile_ast/landing_page", |b| {
        b.iter(|| {
            let site = pipeline
                .compile_ast(black_box(&ast), "home", black_box(&opts))
                .expect("compilation succeeds");
            black_box(site.assigned.path_map.len())
        })
    });
}

criterion_group!(benches, site_compilation, ast_compilation);
criterion_main!(benches);
