#[cfg(test)]
pub mod test {
    use anyhow::{anyhow, Result};
    use std::time::Instant;

    use crate::{
        board::{Board, Player},
        detector::{self, GameState},
        search::{Searcher, WIN_SCORE},
        HEIGHT, WIDTH,
    };

    #[test]
    pub fn bottom_row_win() -> Result<()> {
        let mut board = Board::new();
        for column in 0..4 {
            let row = board.play_checked(column, Player::PlayerOne)?;
            assert_eq!(row, 0);
        }

        assert!(detector::has_won(&board, Player::PlayerOne));
        assert!(detector::is_terminal(&board));
        assert_eq!(detector::state(&board), GameState::PlayerOneWin);
        Ok(())
    }

    // PlayerTwo holds columns 3-5 of the bottom row, column 2 is blocked and
    // column 6 completes the line
    fn completion_board() -> Board {
        let mut board = Board::new();
        for &(row, column) in &[(0, 3), (0, 4), (0, 5)] {
            board.drop_piece(row, column, Player::PlayerTwo);
        }
        for &(row, column) in &[(0, 2), (1, 3), (1, 4)] {
            board.drop_piece(row, column, Player::PlayerOne);
        }
        board
    }

    #[test]
    pub fn completes_own_line() -> Result<()> {
        let board = completion_board();
        let mut searcher = Searcher::new(Player::PlayerTwo);

        // deeper searches may also find slower forced wins in lower columns
        for depth in 2..=3 {
            let (column, value) = searcher.best_move(&board, depth, i64::MIN, i64::MAX, true);
            assert_eq!(column, Some(6), "depth {}", depth);
            assert_eq!(value, WIN_SCORE, "depth {}", depth);
        }
        Ok(())
    }

    #[test]
    pub fn search_is_deterministic() -> Result<()> {
        let board = Board::from_moves("3324")?;

        let first = Searcher::new(Player::PlayerTwo).choose_move(&board);
        for _ in 0..3 {
            assert_eq!(Searcher::new(Player::PlayerTwo).choose_move(&board), first);
        }
        Ok(())
    }

    #[test]
    pub fn invalid_human_move_keeps_board() -> Result<()> {
        let mut board = Board::from_moves("222222")?;
        let before = board;

        assert!(board.play_checked(2, Player::PlayerOne).is_err());
        assert!(board.play_checked(WIDTH, Player::PlayerOne).is_err());
        assert_eq!(board, before);
        Ok(())
    }

    #[test]
    pub fn self_play_finishes() -> Result<()> {
        let mut board = Board::new();
        let mut players = [
            Searcher::new(Player::PlayerOne),
            Searcher::new(Player::PlayerTwo),
        ];
        let mut plies = 0;
        let start_time = Instant::now();

        while detector::state(&board) == GameState::Playing {
            let searcher = &mut players[plies % 2];
            let (column, _) = searcher
                .choose_move(&board)
                .ok_or_else(|| anyhow!("no move on a live board"))?;
            board.play_checked(column, searcher.computer())?;
            plies += 1;
        }

        assert!(plies <= WIDTH * HEIGHT);
        assert!(detector::is_terminal(&board));
        println!(
            "Self-play: {} plies, {} nodes, {:.3}s\n{}",
            plies,
            players[0].node_count + players[1].node_count,
            start_time.elapsed().as_secs_f64(),
            board
        );
        Ok(())
    }

    #[test]
    pub fn computer_beats_edge_player() -> Result<()> {
        // a human who only ever plays the leftmost open column
        let mut board = Board::new();
        let mut searcher = Searcher::new(Player::PlayerTwo);

        while detector::state(&board) == GameState::Playing {
            let column = board.valid_moves()[0];
            board.play_checked(column, Player::PlayerOne)?;
            if detector::is_terminal(&board) {
                break;
            }
            let (column, _) = searcher
                .choose_move(&board)
                .ok_or_else(|| anyhow!("no move on a live board"))?;
            board.play_checked(column, Player::PlayerTwo)?;
        }

        assert_eq!(detector::state(&board), GameState::PlayerTwoWin);
        Ok(())
    }
}
