use skirmish::{play_out, AiPlayer, GameConfig, GameEngine, Outcome};

#[test]
fn test_ai_vs_computer_game() {
    for seed in 0..20 {
        let mut engine = GameEngine::new(GameConfig::default().with_seed(seed)).unwrap();
        let mut ai = AiPlayer::new();

        let outcome = play_out(&mut engine, &mut ai).unwrap();

        assert!(matches!(outcome, Outcome::PlayerWins | Outcome::ComputerWins));
        let state = engine.state();
        assert_eq!(ai.shots(), state.player_guesses().len());
        assert_eq!(ai.sunk(), 3 - state.computer_ships().len());
        assert!(state.player_guesses().len() <= 25);
        match outcome {
            Outcome::PlayerWins => assert!(state.computer_ships().is_empty()),
            Outcome::ComputerWins => assert!(state.player_ships().is_empty()),
            Outcome::InProgress => unreachable!(),
        }
    }
}

#[test]
fn test_ai_on_larger_board() {
    let config = GameConfig::default()
        .with_board_size(11)
        .with_ship_count(10)
        .with_seed(2024);
    let mut engine = GameEngine::new(config).unwrap();
    let mut ai = AiPlayer::new();

    let outcome = play_out(&mut engine, &mut ai).unwrap();

    assert!(outcome.is_over());
    assert!(engine.state().computer_guesses().len() <= 121);
}
