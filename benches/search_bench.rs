use criterion::{criterion_group, criterion_main, black_box, Criterion};
use noughtbot::board::Board;
use noughtbot::search::Strategy;

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("empty_board");
    for strat in [Strategy::Minimax, Strategy::Negamax, Strategy::AlphaBeta] {
        group.bench_function(format!("{strat:?}"), |ben| {
            ben.iter(|| {
                let mut board = Board::new();
                black_box(strat.search(&mut board))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
