use super::GameState;
use crate::error::GameResult;
use crate::types::*;

impl GameState {
    /// Award the round to `winner` and move on to the summary, or to the
    /// final standings once the round limit is reached
    pub(super) fn finish_round(&mut self, winner: Winner) -> GameResult<()> {
        for player in self.players.iter_mut() {
            if player.is_on_side(winner) {
                player.points += 1;
            }
        }

        // Stable: tied players keep their previous relative order
        self.players.sort_by(|a, b| b.points.cmp(&a.points));
        self.session.current_round_winner = Some(winner);

        tracing::info!(
            "Round {} won by {:?}",
            self.session.current_round,
            winner
        );

        if self.is_last_round() {
            self.transition(Phase::Finished)
        } else {
            self.transition(Phase::Summary)
        }
    }

    /// Zero the scores and go back to the roster, keeping the names
    pub(super) fn reset_for_new_game(&mut self) -> GameResult<()> {
        self.transition(Phase::Waiting)?;
        for player in self.players.iter_mut() {
            player.points = 0;
            player.fake_artist = false;
        }
        self.session = Session::default();
        self.subject = None;
        self.reveal = Reveal::default();
        Ok(())
    }

    /// Overall leader; the roster is kept sorted by points
    pub fn leader(&self) -> Option<&Player> {
        self.players.first()
    }
}

#[cfg(test)]
mod tests {
    use super::super::game::tests::{game_with, play_to_voting, step};
    use super::super::Action;
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn in_voting(names: &[&str], fake: usize, round: u32) -> GameState {
        let mut game = game_with(names);
        game.players[fake].fake_artist = true;
        game.phase = Phase::Voting;
        game.session.current_round = round;
        game.subject = Some(Subject::new("fiol", "musik"));
        game
    }

    fn points(game: &GameState) -> Vec<(&str, u32)> {
        game.players
            .iter()
            .map(|p| (p.name.as_str(), p.points))
            .collect()
    }

    #[test]
    fn test_real_artists_win_scenario() {
        let mut rng = StdRng::seed_from_u64(1);
        let game = in_voting(&["A", "B", "C"], 1, 1);
        let game = step(&game, Action::Vote { identified: true }, &mut rng);
        let game = step(&game, Action::Guess { correct: false }, &mut rng);

        assert_eq!(points(&game), vec![("A", 1), ("C", 1), ("B", 0)]);
        assert_eq!(game.session.current_round_winner, Some(Winner::RealArtists));
        assert_eq!(game.phase, Phase::Summary);
    }

    #[test]
    fn test_fake_artist_gains_one_point() {
        let mut rng = StdRng::seed_from_u64(1);
        let game = in_voting(&["A", "B", "C", "D"], 2, 1);
        let game = step(&game, Action::Vote { identified: false }, &mut rng);

        assert_eq!(points(&game), vec![("C", 1), ("A", 0), ("B", 0), ("D", 0)]);
    }

    #[test]
    fn test_points_gained_per_round() {
        let mut rng = StdRng::seed_from_u64(1);
        for count in 3..=10 {
            let names: Vec<String> = (0..count).map(|i| format!("P{i}")).collect();
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let game = in_voting(&refs, 0, 1);

            let guessing = step(&game, Action::Vote { identified: true }, &mut rng);
            let real = step(&guessing, Action::Guess { correct: false }, &mut rng);
            let total: u32 = real.players.iter().map(|p| p.points).sum();
            assert_eq!(total as usize, count - 1);

            let fake = step(&guessing, Action::Guess { correct: true }, &mut rng);
            let total: u32 = fake.players.iter().map(|p| p.points).sum();
            assert_eq!(total, 1);
        }
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let mut game = in_voting(&["A", "B", "C", "D"], 3, 1);
        game.players[1].points = 2;
        game.players[2].points = 2;

        let mut first = game.clone();
        first.finish_round(Winner::FakeArtist).unwrap();
        assert_eq!(
            points(&first),
            vec![("B", 2), ("C", 2), ("D", 1), ("A", 0)]
        );

        let mut second = game.clone();
        second.finish_round(Winner::FakeArtist).unwrap();
        assert_eq!(first.players, second.players);
    }

    #[test]
    fn test_finish_on_last_round() {
        let mut rng = StdRng::seed_from_u64(1);
        let game = in_voting(&["A", "B", "C"], 0, 3);
        let game = step(&game, Action::Vote { identified: false }, &mut rng);

        assert_eq!(game.phase, Phase::Finished);
        assert_eq!(game.leader().unwrap().name, "A");
    }

    #[test]
    fn test_new_game_resets_scores() {
        let mut rng = StdRng::seed_from_u64(6);
        let mut game = step(&game_with(&["A", "B", "C"]), Action::StartGame, &mut rng);
        for _ in 0..3 {
            game = play_to_voting(game, &mut rng);
            game = step(&game, Action::Vote { identified: false }, &mut rng);
            if game.phase == Phase::Summary {
                game = step(&game, Action::NextRound, &mut rng);
            }
        }
        assert_eq!(game.phase, Phase::Finished);

        let game = step(&game, Action::NewGame, &mut rng);
        assert_eq!(game.phase, Phase::Waiting);
        assert_eq!(game.session, Session::default());
        assert!(game.subject.is_none());
        assert!(game.players.iter().all(|p| p.points == 0 && !p.fake_artist));

        let mut names: Vec<_> = game.players.iter().map(|p| p.name.as_str()).collect();
        names.sort();
        assert_eq!(names, vec!["A", "B", "C"]);
    }
}
