//! Perft throughput with full move-category checks.
//!
//! Every measured depth is first verified against the published perft
//! breakdown (nodes, captures, en passant, castles, promotions, checks), so a
//! generator regression fails the bench instead of timing a wrong tree.
//! `SABLE_PERFT_DEEP=1` adds one more ply per position.

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use sable_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use sable_chess::game_state::game_state::GameState;
use sable_chess::move_generation::perft::{perft, PerftCounts};

const fn counts(
    nodes: usize,
    captures: usize,
    en_passant: usize,
    castles: usize,
    checks: usize,
) -> PerftCounts {
    PerftCounts {
        nodes,
        captures,
        en_passant,
        castles,
        promotions: 0,
        checks,
    }
}

struct PerftPosition {
    label: &'static str,
    fen: &'static str,
    /// Breakdown at depth 1, 2, ...; the last entry is only run in deep mode.
    by_depth: &'static [PerftCounts],
}

// Only positions whose published breakdowns have no underpromotions; the
// generator promotes to a queen only.
const POSITIONS: &[PerftPosition] = &[
    PerftPosition {
        label: "startpos",
        fen: STARTING_POSITION_FEN,
        by_depth: &[
            counts(20, 0, 0, 0, 0),
            counts(400, 0, 0, 0, 0),
            counts(8_902, 34, 0, 0, 12),
            counts(197_281, 1_576, 0, 0, 469),
        ],
    },
    PerftPosition {
        label: "kiwipete",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        by_depth: &[
            counts(48, 8, 0, 2, 0),
            counts(2_039, 351, 1, 91, 3),
            counts(97_862, 17_102, 45, 3_162, 993),
        ],
    },
    PerftPosition {
        label: "rook_endgame",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
        by_depth: &[
            counts(14, 1, 0, 0, 2),
            counts(191, 14, 0, 0, 10),
            counts(2_812, 209, 2, 0, 267),
            counts(43_238, 3_348, 123, 0, 1_680),
        ],
    },
];

fn deep_mode() -> bool {
    std::env::var("SABLE_PERFT_DEEP").is_ok_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

fn bench_perft(c: &mut Criterion) {
    let deep = deep_mode();

    for position in POSITIONS {
        let mut game = GameState::from_fen(position.fen).expect("benchmark FEN should parse");
        let depths = if deep {
            position.by_depth.len()
        } else {
            position.by_depth.len() - 1
        };

        let mut group = c.benchmark_group(format!("perft/{}", position.label));
        group.warm_up_time(Duration::from_millis(500));
        group.measurement_time(Duration::from_secs(3));
        group.sample_size(15);

        for (index, expected) in position.by_depth[..depths].iter().enumerate() {
            let depth = index as u8 + 1;
            let measured = perft(&mut game, depth);
            assert_eq!(
                measured, *expected,
                "{} depth {depth}: perft breakdown differs",
                position.label
            );

            group.throughput(Throughput::Elements(expected.nodes as u64));
            group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
                b.iter(|| black_box(perft(black_box(&mut game), depth)));
            });
        }

        group.finish();
    }
}

criterion_group!(perft_benches, bench_perft);
criterion_main!(perft_benches);
