// benches/decode_benchmark.rs
use bndl_rs::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use flate2::write::DeflateEncoder;
use flate2::Compression;
use std::io::Write;

const RECORD_STRIDE: usize = 0x48;

/// Container with `count` entries of `size`-byte first segments.
fn synthetic_container(flag: i32, count: usize, size: usize) -> Vec<u8> {
    let payloads: Vec<Vec<u8>> = (0..count)
        .map(|i| {
            let plain: Vec<u8> = (0..size).map(|b| ((b + i) % 251) as u8).collect();
            if flag == 1 {
                let mut encoder = DeflateEncoder::new(Vec::new(), Compression::fast());
                encoder.write_all(&plain).unwrap();
                let mut out = vec![0x78, 0x9C];
                out.extend(encoder.finish().unwrap());
                out.extend_from_slice(&[0; 4]);
                out
            } else {
                plain
            }
        })
        .collect();

    let ids_table_start = 0x28usize;
    let block1_start = ids_table_start + count * RECORD_STRIDE;
    let block1_len: usize = payloads.iter().map(Vec::len).sum();
    let block2_start = block1_start + block1_len;

    let mut buf = Vec::with_capacity(block2_start);
    buf.extend_from_slice(b"bnd2\0\0\x01\0\0\0\0\0");
    for field in [
        count as i32,
        ids_table_start as i32,
        block1_start as i32,
        block2_start as i32,
        block2_start as i32,
        block2_start as i32,
        flag,
    ] {
        buf.extend_from_slice(&field.to_le_bytes());
    }

    let mut position = 0usize;
    for (i, payload) in payloads.iter().enumerate() {
        let mut record = [0u8; RECORD_STRIDE];
        record[0..4].copy_from_slice(&(i as u32).to_be_bytes());
        record[0x08..0x0C].copy_from_slice(&((1 << 28) + size as i32).to_le_bytes());
        record[0x18..0x1C].copy_from_slice(&(payload.len() as i32).to_le_bytes());
        record[0x28..0x2C].copy_from_slice(&(position as i32).to_le_bytes());
        record[0x3C] = 0x01;
        buf.extend_from_slice(&record);
        position += payload.len();
    }
    for payload in &payloads {
        buf.extend_from_slice(payload);
    }
    buf
}

fn benchmark_decode_stored(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_stored");

    for count in [10, 100, 1000].iter() {
        let data = synthetic_container(2, *count, 4096);
        group.throughput(Throughput::Bytes(data.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &data, |b, data| {
            b.iter(|| {
                let container = Container::from_bytes(data).unwrap();
                assert_eq!(container.len(), *count);
            });
        });
    }

    group.finish();
}

fn benchmark_decode_deflate(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_deflate");

    for size in [1024, 16384, 131072].iter() {
        let data = synthetic_container(1, 32, *size);
        group.throughput(Throughput::Bytes((*size * 32) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| Container::from_bytes(data).unwrap());
        });
    }

    group.finish();
}

fn benchmark_first_entry_lazy(c: &mut Criterion) {
    let data = synthetic_container(2, 5000, 256);

    c.bench_function("first_entry_lazy", |b| {
        b.iter(|| {
            let mut cursor = std::io::Cursor::new(&data[..]);
            let mut table = EntryTable::open(&mut cursor, &DecodeOptions::default()).unwrap();
            table.next().unwrap().unwrap()
        });
    });
}

fn benchmark_nested_walk(c: &mut Criterion) {
    let mut blob = Vec::new();
    for i in 0..512 {
        blob.extend_from_slice(b"DAT");
        blob.extend((0..61).map(|b| (b ^ i) as u8 | 0x80));
    }
    let blob = bytes::Bytes::from(blob);

    c.bench_function("nested_walk_512", |b| {
        b.iter(|| nested::walk(&blob).count());
    });
}

criterion_group!(
    benches,
    benchmark_decode_stored,
    benchmark_decode_deflate,
    benchmark_first_entry_lazy,
    benchmark_nested_walk
);
criterion_main!(benches);
