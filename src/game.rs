//! Game driver
//!
//! Owns the live board, asks Gold then Silver for a turn each round, and
//! stops on a decided position or when two consecutive players pass.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

use log::info;

use crate::board::{Board, Color, Outcome};
use crate::engine::MoveResult;
use crate::search::SearchStats;
use crate::players::Player;

/// Receives the progress of a game.
pub trait Presenter {
    /// Called with a copy of the board at the start and after every turn.
    fn present_board(&mut self, board: Board);

    /// Called once with the final outcome.
    fn present_result(&mut self, outcome: Outcome);

    /// Accumulated think time of the measured player.
    fn present_think_time(&mut self, _total: Duration) {}
}

/// Totals for one search depth across a game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DepthTotals {
    /// Time from search start to completion of this depth, summed
    pub elapsed: Duration,
    pub nodes: u64,
    /// Number of searches that completed this depth
    pub count: u64,
}

/// Per-depth search statistics aggregated over all AI turns of a game.
#[derive(Debug, Clone, Default)]
pub struct ThinkStats {
    depths: BTreeMap<i8, DepthTotals>,
    searches: u64,
    search: SearchStats,
}

impl ThinkStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every completed iteration of one search.
    pub fn record(&mut self, report: &MoveResult) {
        self.searches += 1;
        self.search.merge(&report.stats);
        for it in &report.iterations {
            let totals = self.depths.entry(it.depth).or_default();
            totals.elapsed += it.elapsed;
            totals.nodes += it.nodes;
            totals.count += 1;
        }
    }

    /// Depths in increasing order
    pub fn iter(&self) -> impl Iterator<Item = (i8, &DepthTotals)> + '_ {
        self.depths.iter().map(|(d, t)| (*d, t))
    }

    pub fn searches(&self) -> u64 {
        self.searches
    }

    /// Cutoff and transposition table counters summed over all searches
    pub fn search_stats(&self) -> &SearchStats {
        &self.search
    }

    pub fn is_empty(&self) -> bool {
        self.searches == 0
    }
}

/// What a finished game reports back.
#[derive(Debug, Clone)]
pub struct GameSummary {
    pub outcome: Outcome,
    /// Rounds started, a round being one chance for each color
    pub rounds: u32,
    /// Turns actually played, passes excluded
    pub plies: u32,
    /// Accumulated think time of the measured player
    pub think_time: Duration,
    pub stats: ThinkStats,
}

/// One game between two players.
pub struct Game<P: Presenter> {
    board: Board,
    /// Indexed Gold, Silver
    players: [Box<dyn Player>; 2],
    /// Color whose think time is reported
    measured: Option<Color>,
    presenter: P,
    previous_passed: bool,
    plies: u32,
    think_time: Duration,
    stats: ThinkStats,
}

impl<P: Presenter> Game<P> {
    /// Game from the opening position.
    pub fn new(gold: Box<dyn Player>, silver: Box<dyn Player>, presenter: P) -> Self {
        Self::from_position(Board::new(), gold, silver, presenter)
    }

    /// Game from an arbitrary position, Gold to move.
    pub fn from_position(
        board: Board,
        gold: Box<dyn Player>,
        silver: Box<dyn Player>,
        presenter: P,
    ) -> Self {
        debug_assert_eq!(gold.color(), Color::Gold);
        debug_assert_eq!(silver.color(), Color::Silver);
        Self {
            board,
            players: [gold, silver],
            measured: None,
            presenter,
            previous_passed: false,
            plies: 0,
            think_time: Duration::ZERO,
            stats: ThinkStats::new(),
        }
    }

    /// Report the think time of `color` to the presenter.
    #[must_use]
    pub fn with_measured(mut self, color: Option<Color>) -> Self {
        self.measured = color;
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Play until the game is decided or both players passed in a row.
    pub fn play(&mut self) -> GameSummary {
        self.presenter.present_board(self.board.clone());

        let mut rounds = 0;
        let outcome = loop {
            rounds += 1;
            if let Some(outcome) = self.play_round() {
                break outcome;
            }
        };

        info!("{outcome}");
        for (depth, totals) in self.stats.iter() {
            info!(
                "depth {depth}: {} searches, {} nodes, {:.1}s",
                totals.count,
                totals.nodes,
                totals.elapsed.as_secs_f64()
            );
        }
        if !self.stats.is_empty() {
            let search = self.stats.search_stats();
            info!(
                "{} searches: {} cutoffs ({:.1}% on first turn), TT score hits {:.1}%, TT turn hints {}",
                self.stats.searches(),
                search.beta_cutoffs,
                search.first_move_rate(),
                search.tt_score_rate(),
                search.tt_move_hits
            );
        }
        self.presenter.present_result(outcome);

        GameSummary {
            outcome,
            rounds,
            plies: self.plies,
            think_time: self.think_time,
            stats: self.stats.clone(),
        }
    }

    /// One chance for each color. Returns the outcome once the game ends.
    fn play_round(&mut self) -> Option<Outcome> {
        for (idx, color) in Color::ALL.into_iter().enumerate() {
            let start = Instant::now();
            let decision = self.players[idx].next_turn(&self.board);
            let elapsed = start.elapsed();

            if let Some(report) = &decision.report {
                self.stats.record(report);
            }

            let Some(turn) = decision.turn else {
                info!("{color} passes");
                if self.previous_passed {
                    return Some(Outcome::Tie);
                }
                self.previous_passed = true;
                continue;
            };
            self.previous_passed = false;

            info!("{color}: {turn}");
            self.board.apply_turn(&turn);
            self.plies += 1;
            self.presenter.present_board(self.board.clone());

            if self.measured == Some(color) {
                self.think_time += elapsed;
                self.presenter.present_think_time(self.think_time);
            }

            let outcome = self.board.result();
            if outcome.is_decided() {
                return Some(outcome);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, Pos};
    use crate::engine::AIEngine;
    use crate::eval::EvalVariant;
    use crate::players::RandomPlayer;

    /// Records everything it is shown.
    #[derive(Default)]
    struct Recorder {
        boards: Vec<Board>,
        results: Vec<Outcome>,
        think_times: Vec<Duration>,
    }

    impl Presenter for Recorder {
        fn present_board(&mut self, board: Board) {
            self.boards.push(board);
        }

        fn present_result(&mut self, outcome: Outcome) {
            self.results.push(outcome);
        }

        fn present_think_time(&mut self, total: Duration) {
            self.think_times.push(total);
        }
    }

    /// Every tile occupied, so neither side has a legal turn.
    fn gridlocked_board() -> Board {
        let mut board = Board::empty();
        for pos in Pos::all() {
            let color = if (pos.row + pos.col) % 2 == 0 {
                Color::Gold
            } else {
                Color::Silver
            };
            board.put(pos, Piece::Fleetship(color));
        }
        board.put(Pos::new(5, 5), Piece::Flagship);
        board
    }

    #[test]
    fn test_double_pass_is_tie() {
        let board = gridlocked_board();
        let mut game = Game::from_position(
            board.clone(),
            Box::new(RandomPlayer::with_seed(Color::Gold, 1)),
            Box::new(RandomPlayer::with_seed(Color::Silver, 2)),
            Recorder::default(),
        );

        let summary = game.play();
        assert_eq!(summary.outcome, Outcome::Tie);
        assert_eq!(summary.rounds, 1);
        assert_eq!(summary.plies, 0);
        assert_eq!(game.presenter().results, vec![Outcome::Tie]);
        assert_eq!(game.presenter().boards, vec![board]);
    }

    #[test]
    fn test_gold_breaks_out() {
        let mut board = Board::empty();
        board.put(Pos::new(1, 4), Piece::Flagship);
        board.put(Pos::new(8, 8), Piece::Fleetship(Color::Silver));
        board.put(Pos::new(9, 9), Piece::Fleetship(Color::Silver));

        let mut gold = AIEngine::with_config(Color::Gold, 1, EvalVariant::Balanced)
            .with_tt_bits(12)
            .with_time_budget(Duration::from_secs(10));
        gold.set_max_depth(Some(1));

        let mut game = Game::from_position(
            board,
            Box::new(gold),
            Box::new(RandomPlayer::with_seed(Color::Silver, 3)),
            Recorder::default(),
        )
        .with_measured(Some(Color::Gold));

        let summary = game.play();
        assert_eq!(summary.outcome, Outcome::GoldWon);
        assert_eq!(summary.plies, 1);
        assert_eq!(game.presenter().boards.len(), 2);
        assert_eq!(game.presenter().think_times.len(), 1);
        assert_eq!(summary.stats.searches(), 1);
        let depths: Vec<(i8, u64)> = summary.stats.iter().map(|(d, t)| (d, t.count)).collect();
        assert_eq!(depths, vec![(1, 1)]);
        assert!(summary.stats.search_stats().tt_probes > 0);
    }

    #[test]
    fn test_random_game_terminates() {
        let mut board = Board::empty();
        board.put(Pos::new(5, 5), Piece::Flagship);
        board.put(Pos::new(5, 4), Piece::Fleetship(Color::Gold));
        board.put(Pos::new(4, 5), Piece::Fleetship(Color::Gold));
        board.put(Pos::new(3, 3), Piece::Fleetship(Color::Silver));
        board.put(Pos::new(7, 7), Piece::Fleetship(Color::Silver));

        let mut game = Game::from_position(
            board,
            Box::new(RandomPlayer::with_seed(Color::Gold, 11)),
            Box::new(RandomPlayer::with_seed(Color::Silver, 12)),
            Recorder::default(),
        );

        let summary = game.play();
        assert!(summary.outcome != Outcome::Undecided);
        assert_eq!(game.board().result() == summary.outcome, summary.outcome != Outcome::Tie);
        assert_eq!(game.presenter().boards.len() as u32, summary.plies + 1);
        assert!(game.presenter().think_times.is_empty());
        assert!(summary.stats.is_empty());
    }
}
