//! Play a few rounds at a simulated dice table and log every roll.
//!
//! ```text
//! dice-table --players 3 --rounds 5 --seed 42
//! RUST_LOG=debug dice-table --fast
//! ```

use std::sync::Arc;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use dice_wager::{
    EngineConfig, EngineError, GameEngine, HouseRound, NoPause, Player, SharedPlayer, TracingCallback,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of players at the table
    #[arg(short, long, default_value_t = 3)]
    players: usize,

    /// Rounds to play
    #[arg(short, long, default_value_t = 3)]
    rounds: usize,

    /// Starting points per player
    #[arg(long, default_value_t = 100)]
    points: i64,

    /// Bet each player places every round
    #[arg(short, long, default_value_t = 10)]
    bet: i64,

    /// RNG seed; random if omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// Faces per die
    #[arg(long, default_value_t = dice_wager::NUM_FACES)]
    faces: u8,

    /// First animation delay, in milliseconds
    #[arg(long, default_value_t = 1)]
    initial_delay: u64,

    /// Animation stops once the delay reaches this, in milliseconds
    #[arg(long, default_value_t = 100)]
    final_delay: u64,

    /// Delay growth per animation step, in milliseconds
    #[arg(long, default_value_t = 20)]
    delay_increment: u64,

    /// Skip the animation pauses
    #[arg(long)]
    fast: bool,
}

fn main() -> Result<(), EngineError> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut config = EngineConfig::new().try_with_faces(args.faces)?;
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    let engine = if args.fast {
        GameEngine::with_pause(config, NoPause)
    } else {
        GameEngine::new(config)
    };
    info!(seed = engine.seed(), players = args.players, rounds = args.rounds, "table open");

    engine.add_game_engine_callback(Arc::new(TracingCallback::new()));
    for n in 1..=args.players {
        let player = Player::new(n.to_string(), format!("Player {}", n), args.points);
        engine.add_player(SharedPlayer::new(player));
    }

    for round in 1..=args.rounds {
        info!(round, "new round");
        engine.clear_house_result();

        for player in engine.get_all_players().iter() {
            player.write().reset_bet();
            if !engine.place_bet(player, args.bet) {
                warn!(player = %player.id(), bet = args.bet, "bet rejected, rolling without a stake");
            }
            engine.roll_player(player, args.initial_delay, args.final_delay, args.delay_increment)?;
        }

        match engine.roll_house(args.initial_delay, args.final_delay, args.delay_increment)? {
            HouseRound::Resolved { settlements, .. } => {
                for settlement in &settlements {
                    info!(player = %settlement.player, outcome = ?settlement.outcome, delta = settlement.delta, "settled");
                }
            }
            HouseRound::Abandoned { reason, .. } => warn!(%reason, round, "round abandoned"),
        }
    }

    info!("final standings");
    for player in engine.get_all_players().iter() {
        info!("{}", *player.read());
    }

    Ok(())
}
