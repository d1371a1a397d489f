//! Table changes while the house is rolling.
//!
//! A house roll must either settle the table it rolled against or settle
//! nobody. These tests change the table mid-roll, from an observer and from
//! another thread, and check that no bet is half-applied.

use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;

use dice_wager::callbacks::GameEngineCallback;
use dice_wager::core::{DicePair, EngineConfig, Player, ResolutionError, SharedPlayer};
use dice_wager::engine::{GameEngine, HouseRound, NoPause};

fn rolled_player(id: &str, bet: i64) -> SharedPlayer {
    let mut player = Player::new(id, id, 100);
    assert!(player.place_bet(bet));
    player.set_roll_result(DicePair::new(6, 6, 6).unwrap());
    SharedPlayer::new(player)
}

#[derive(Default)]
struct HouseResults(Mutex<usize>);

impl GameEngineCallback for HouseResults {
    fn house_result(&self, _result: &DicePair, _engine: &GameEngine) {
        *self.0.lock() += 1;
    }
}

/// An observer seats a new player during the house animation.
#[test]
fn test_player_added_mid_roll_abandons_round() {
    struct SeatsLatecomer(Mutex<Option<SharedPlayer>>);
    impl GameEngineCallback for SeatsLatecomer {
        fn intermediate_house_result(&self, _result: &DicePair, engine: &GameEngine) {
            if let Some(latecomer) = self.0.lock().take() {
                engine.add_player(latecomer);
            }
        }
    }

    let engine = GameEngine::with_pause(EngineConfig::new().with_seed(3), NoPause);
    let early = rolled_player("early", 10);
    engine.add_player(early.clone());

    let house_results = Arc::new(HouseResults::default());
    engine.add_game_engine_callback(house_results.clone());
    engine.add_game_engine_callback(Arc::new(SeatsLatecomer(Mutex::new(Some(rolled_player("late", 10))))));

    let round = engine.roll_house(0, 30, 10).unwrap();

    assert!(matches!(
        round,
        HouseRound::Abandoned {
            reason: ResolutionError::RegistryModified { .. },
            ..
        }
    ));
    assert_eq!(early.read().points(), 100);
    assert_eq!(*house_results.0.lock(), 0);
    assert_eq!(engine.player_count(), 2);
}

/// An observer removes a player during the house animation.
#[test]
fn test_player_removed_mid_roll_abandons_round() {
    struct Unseats(SharedPlayer);
    impl GameEngineCallback for Unseats {
        fn intermediate_house_result(&self, _result: &DicePair, engine: &GameEngine) {
            engine.remove_player(&self.0);
        }
    }

    let engine = GameEngine::with_pause(EngineConfig::new().with_seed(3), NoPause);
    let stays = rolled_player("stays", 10);
    let leaves = rolled_player("leaves", 10);
    engine.add_player(stays.clone());
    engine.add_player(leaves.clone());
    engine.add_game_engine_callback(Arc::new(Unseats(leaves.clone())));

    let round = engine.roll_house(0, 10, 10).unwrap();

    assert!(!round.is_resolved());
    assert_eq!(stays.read().points(), 100);
    assert_eq!(leaves.read().points(), 100);
}

/// The next round after an abandoned one resolves normally.
#[test]
fn test_round_after_abandoned_round_resolves() {
    let engine = GameEngine::with_pause(EngineConfig::new().with_seed(9), NoPause);
    let player = rolled_player("p", 10);
    engine.add_player(player.clone());

    engine.add_player(SharedPlayer::new(Player::new("no-roll", "no-roll", 100)));
    assert!(!engine.roll_house(0, 0, 1).unwrap().is_resolved());

    let no_roll = engine.get_player(1).unwrap();
    assert!(engine.remove_player(&no_roll));
    engine.clear_house_result();

    let round = engine.roll_house(0, 0, 1).unwrap();
    assert!(round.is_resolved());
    assert_eq!(round.settlements().len(), 1);
}

/// Another thread seats a player while the rolling thread is paused.
#[test]
fn test_player_added_from_another_thread() {
    let (paused_tx, paused_rx) = mpsc::channel::<()>();
    let (resume_tx, resume_rx) = mpsc::channel::<()>();
    let paused_tx = Mutex::new(paused_tx);
    let resume_rx = Mutex::new(resume_rx);

    // First pause hands control to the test thread and waits for it.
    let first = Mutex::new(true);
    let pause = move |_delay: Duration| {
        let mut first = first.lock();
        if *first {
            *first = false;
            let _ = paused_tx.lock().send(());
            let _ = resume_rx.lock().recv();
        }
    };

    let engine = Arc::new(GameEngine::with_pause(EngineConfig::new().with_seed(21), pause));
    let seated = rolled_player("seated", 25);
    engine.add_player(seated.clone());

    let roller = {
        let engine = Arc::clone(&engine);
        thread::spawn(move || engine.roll_house(0, 3, 1))
    };

    paused_rx.recv().unwrap();
    engine.add_player(rolled_player("intruder", 25));
    resume_tx.send(()).unwrap();

    let round = roller.join().unwrap().unwrap();

    assert!(matches!(
        round,
        HouseRound::Abandoned {
            reason: ResolutionError::RegistryModified { .. },
            ..
        }
    ));
    assert_eq!(seated.read().points(), 100);
    assert_eq!(engine.get_house_result(), Some(round.house()));
}

/// Player rolls on several threads at once all land on their players.
#[test]
fn test_parallel_player_rolls() {
    let engine = Arc::new(GameEngine::with_pause(EngineConfig::new().with_seed(1), NoPause));
    let players: Vec<_> = (0..8)
        .map(|n| {
            let player = SharedPlayer::new(Player::new(n.to_string(), n.to_string(), 100));
            engine.add_player(player.clone());
            player
        })
        .collect();

    let handles: Vec<_> = players
        .iter()
        .cloned()
        .map(|player| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || engine.roll_player(&player, 0, 20, 1).unwrap())
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    for (player, result) in players.iter().zip(results) {
        assert_eq!(player.read().roll_result(), Some(result));
    }
    assert!(engine.roll_house(0, 0, 1).unwrap().is_resolved());
}
