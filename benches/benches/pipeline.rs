//! Benchmark suite for the script to GIF pipeline
//!
//! Run with: cargo bench --manifest-path benches/Cargo.toml

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use gifmaker_benches::{generate_script, sizes};
use gifmaker_types::file::{EncodeOptions, Script};
use std::hint::black_box;

const CASES: [(&str, (usize, usize, usize)); 3] =
	[("icon", sizes::ICON), ("sprite", sizes::SPRITE), ("scene", sizes::SCENE)];

/// Benchmark parsing the text format
fn bench_parse(c: &mut Criterion) {
	let mut group = c.benchmark_group("parse");

	for (name, (width, height, frames)) in CASES {
		let text = generate_script(width, height, frames, 16, 1);
		group.throughput(Throughput::Bytes(text.len() as u64));
		group.bench_with_input(BenchmarkId::new("script", name), &text, |b, text| {
			b.iter(|| black_box(Script::parse(black_box(text))));
		});
	}

	group.finish();
}

/// Benchmark rasterization at several scales
fn bench_rasterize(c: &mut Criterion) {
	let mut group = c.benchmark_group("rasterize");
	let (width, height, frames) = sizes::SPRITE;

	for scale in [1u32, 4, 8] {
		let script = Script::parse(&generate_script(width, height, frames, 16, scale)).unwrap();
		let pixels = (width * height * frames) as u64 * u64::from(scale * scale);
		group.throughput(Throughput::Elements(pixels));
		group.bench_with_input(BenchmarkId::new("scale", scale), &script, |b, script| {
			b.iter(|| black_box(script.render()));
		});
	}

	group.finish();
}

/// Benchmark GIF encoding of rendered animations
fn bench_encode(c: &mut Criterion) {
	let mut group = c.benchmark_group("encode");

	for (name, (width, height, frames)) in CASES {
		let script = Script::parse(&generate_script(width, height, frames, 64, 2)).unwrap();
		let animation = script.render().unwrap();
		group.bench_with_input(BenchmarkId::new("gif", name), &animation, |b, animation| {
			b.iter(|| black_box(animation.encode(EncodeOptions::default())));
		});
	}

	group.finish();
}

criterion_group!(benches, bench_parse, bench_rasterize, bench_encode);
criterion_main!(benches);
