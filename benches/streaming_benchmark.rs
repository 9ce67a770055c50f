use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::io::{self, Write};
use tempfile::NamedTempFile;
use xmlstream::{create_xml_file, LineSeparator, Result, StreamingXmlWriter, WriterOptions};

fn options() -> WriterOptions {
    WriterOptions::new()
        .with_line_separator(LineSeparator::Lf)
        .with_top_level_attribute("xmlns", "http://relaxng.org/ns/structure/1.0")
}

fn write_records<W: Write>(writer: &mut StreamingXmlWriter<W>, size: usize) -> Result<()> {
    writer.open("records")?;
    for i in 0..size {
        writer.open("record")?;
        writer.attribute("id", &i.to_string())?;
        writer.open("name")?;
        writer.text(&format!("Name_{} <{}> & co", i, i * 100))?;
        writer.close()?;
        writer.open("flag")?;
        writer.close()?;
        writer.close()?;
    }
    writer.close()
}

fn benchmark_write_sink(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_sink");

    for size in [100, 1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let mut writer = StreamingXmlWriter::new(io::sink(), options());
                write_records(&mut writer, black_box(size)).unwrap();
                writer.finalize().unwrap();
            });
        });
    }

    group.finish();
}

fn benchmark_write_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_file");
    group.sample_size(10); // Reduce samples for large benchmarks

    for size in [1000, 10000, 100000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            b.iter(|| {
                let temp = NamedTempFile::new().unwrap();
                let mut writer = create_xml_file(temp.path(), options()).unwrap();
                write_records(&mut writer, size).unwrap();
                writer.finalize().unwrap();
            });
        });
    }

    group.finish();
}

fn benchmark_escape(c: &mut Criterion) {
    let plain = "The quick brown fox jumps over the lazy dog. ".repeat(64);
    let markup = "<a href=\"x\">R&D</a>\r\n".repeat(64);

    c.bench_function("escape_plain", |b| {
        b.iter(|| xmlstream::escape(black_box(&plain), "\n"))
    });
    c.bench_function("escape_markup", |b| {
        b.iter(|| xmlstream::escape(black_box(&markup), "\n"))
    });
}

criterion_group!(
    benches,
    benchmark_write_sink,
    benchmark_write_file,
    benchmark_escape
);
criterion_main!(benches);
