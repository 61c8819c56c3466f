use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use holdall::RingBuffer;

fn bench_ring_buffer(c: &mut Criterion) {
    let mut group = c.benchmark_group("ring_buffer");
    group.throughput(Throughput::Elements(1));

    group.bench_function("write_read_cycle", |b| {
        let rb = RingBuffer::new(1024).unwrap();
        let mut i = 0u64;
        b.iter(|| {
            let _ = rb.try_write(black_box(i));
            let _ = rb.try_read();
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("split_write_read_cycle", |b| {
        let (writer, reader) = RingBuffer::new(1024).unwrap().split();
        let mut i = 0u64;
        b.iter(|| {
            let _ = writer.try_write(black_box(i));
            let _ = reader.try_read();
            i = i.wrapping_add(1);
        });
    });

    group.bench_function("write_until_full", |b| {
        b.iter(|| {
            let rb = RingBuffer::new(1024).unwrap();
            for i in 0u64..1024 {
                let _ = rb.try_write(black_box(i));
            }
            rb
        });
    });

    group.finish();
}

criterion_group!(benches, bench_ring_buffer);
criterion_main!(benches);
