use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use wrapflow_layout::prelude::*;
use wrapflow_testing::TestItem;

const ITEM_COUNTS: &[usize] = &[64, 512, 4096];
const ROOT_SIZE: Size = Size {
    width: 1080.0,
    height: 1920.0,
};

fn items(count: usize) -> Vec<TestItem> {
    (0..count)
        .map(|index| {
            let width = 20.0 + (index % 7) as f32 * 13.0;
            let height = 16.0 + (index % 3) as f32 * 8.0;
            TestItem::flexible(Size::new(width, height), Size::new(width * 2.0, height))
                .with_priority((index % 5) as f32)
        })
        .collect()
}

fn bench_measure_and_place(c: &mut Criterion, name: &str, flow: FlowLayout) {
    let mut group = c.benchmark_group(name);
    for &count in ITEM_COUNTS {
        let items = items(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &items, |b, items| {
            b.iter(|| {
                let proposal = ProposedSize::from(ROOT_SIZE);
                let size = flow.measure(proposal, black_box(items));
                flow.place(Rect::from_size(size), proposal, items);
                black_box(size)
            });
        });
    }
    group.finish();
}

fn flow_benches(c: &mut Criterion) {
    let packed = FlowLayout::horizontal(VerticalAlignment::CenterVertically)
        .item_spacing(8.0)
        .line_spacing(8.0);
    bench_measure_and_place(c, "flow_packed", packed);
    bench_measure_and_place(
        c,
        "flow_justified",
        packed.justified(Justification::StretchItemsAndSpaces),
    );
}

criterion_group!(benches, flow_benches);
criterion_main!(benches);
