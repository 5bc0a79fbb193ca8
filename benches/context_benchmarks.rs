//! Criterion benchmarks for the extraction engine.
//!
//! Run with: `cargo bench`
//!
//! Synthetic source files keep the numbers reproducible across machines.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use blamescope::context::{TextBlockState, code_context, scrub_line};

// ─── Helpers ─────────────────────────────────────────────────────────

/// Build a synthetic Java-like file with `num_methods` annotated methods of
/// `body_lines` lines each. Returns the text and a target line that sits in
/// the middle of the middle method.
fn build_synthetic_source(num_methods: usize, body_lines: usize) -> (String, u32) {
    let mut lines: Vec<String> = vec!["package bench.generated;".to_string(), String::new()];
    lines.push("public class Workload {".to_string());

    let mut target = 0u32;
    for m in 0..num_methods {
        lines.push(String::new());
        lines.push("    @Override".to_string());
        lines.push(format!("    public int method{}(int input) {{", m));
        for b in 0..body_lines {
            lines.push(format!(
                "        total += step{}(input); // adjust {}",
                b, b
            ));
        }
        lines.push("        return total;".to_string());
        lines.push("    }".to_string());

        if m == num_methods / 2 {
            // midpoint of this method's body
            target = (lines.len() - body_lines / 2 - 2) as u32;
        }
    }
    lines.push("}".to_string());
    (lines.join("\n"), target)
}

// ─── Benchmarks ─────────────────────────────────────────────────────

fn bench_code_context(c: &mut Criterion) {
    let mut group = c.benchmark_group("code_context");
    for (num_methods, body_lines) in [(5, 10), (50, 20), (200, 40)] {
        let (text, target) = build_synthetic_source(num_methods, body_lines);
        let total_lines = text.lines().count();
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_lines", total_lines)),
            &(text, target),
            |b, (text, target)| {
                b.iter(|| code_context(black_box(text), black_box(*target)).unwrap());
            },
        );
    }
    group.finish();
}

fn bench_scrub_line(c: &mut Criterion) {
    let samples = [
        ("plain", "        total += step(input) * factor;"),
        ("string", r#"        log.info("request {} failed: {}", id, cause);"#),
        ("comment", "        advance(); // matches closing brace }"),
        ("mixed", r#"        emit("{"); /* { */ tick(); // }"#),
    ];
    let mut group = c.benchmark_group("scrub_line");
    for (name, line) in samples {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut state = TextBlockState::default();
                scrub_line(black_box(line), black_box(&mut state))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_code_context, bench_scrub_line);
criterion_main!(benches);
