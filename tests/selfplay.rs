use noughtbot::board::Board;
use noughtbot::search::Strategy;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn play_out(x: Strategy, o: Strategy) -> Board {
    let mut board = Board::new();
    while board.winner().is_none() && !board.is_drawn() {
        let strat = if board.first_player_to_move() { x } else { o };
        let (_, best) = strat.search(&mut board);
        board.apply(best.expect("live position must yield a move"));
    }
    board
}

#[test]
fn perfect_play_always_draws() {
    let pairings = [
        (Strategy::AlphaBeta, Strategy::AlphaBeta),
        (Strategy::Negamax, Strategy::Minimax),
        (Strategy::Minimax, Strategy::AlphaBeta),
        (Strategy::AlphaBeta, Strategy::Negamax),
    ];
    for (x, o) in pairings {
        let board = play_out(x, o);
        assert!(
            board.is_drawn(),
            "{x:?} vs {o:?} ended decisively:\n{board}"
        );
        assert_eq!(board.ply(), 9);
    }
}

#[test]
fn engine_never_loses_to_a_random_opponent() {
    let mut rng = SmallRng::seed_from_u64(0xDA7A);

    for game in 0..40 {
        let engine_is_x = game % 2 == 0;
        let mut board = Board::new();

        while board.winner().is_none() && !board.is_drawn() {
            if board.first_player_to_move() == engine_is_x {
                let (_, best) = Strategy::AlphaBeta.search(&mut board);
                board.apply(best.expect("live position must yield a move"));
            } else {
                let moves = board.available_moves();
                board.apply(moves[rng.gen_range(0..moves.len())]);
            }
        }

        if let Some(winner) = board.winner() {
            let engine_won = (winner == noughtbot::board::Player::X) == engine_is_x;
            assert!(
                engine_won,
                "engine lost game {game} as {}:\n{board}",
                if engine_is_x { "X" } else { "O" }
            );
        }
    }
}
