//! Demo driver: plays one full game of War and records it.
//!
//! The loop here is presentation only; all rules live in the library.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use war_engine::core::{GameRng, Player};
use war_engine::deck::build_deck;
use war_engine::error::GameError;
use war_engine::game::GameState;
use war_engine::history::{AsyncRecorder, MemoryStore};

#[derive(Debug, Parser)]
#[command(name = "war_cli", about = "Play one game of War and record it")]
struct Args {
    /// Number of cards in the deck (must be positive and even).
    #[arg(long, default_value_t = 52)]
    deck_size: usize,

    /// Shuffle seed; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// First player's name.
    #[arg(long, default_value = "Ryan")]
    player_a: String,

    /// Second player's name.
    #[arg(long, default_value = "Hugh")]
    player_b: String,

    /// Pause between rounds, in milliseconds.
    #[arg(long, default_value_t = 0)]
    round_delay_ms: u64,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(err) = run(Args::parse()).await {
        tracing::error!(%err, "game terminated");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), GameError> {
    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, deck_size = args.deck_size, "game initialized");

    let mut rng = GameRng::new(seed);
    let deck = build_deck(args.deck_size, &mut rng)?;

    let mut game = GameState::new(Player::new(args.player_a), Player::new(args.player_b));
    game.deal(deck)?;

    while !game.is_game_over() {
        let mut round = game.play_round()?;
        tracing::info!("{round}");
        let winner_id = game.apply_round(&mut round)?;

        let round_winner = if winner_id == game.player_a().id() {
            game.player_a()
        } else {
            game.player_b()
        };
        tracing::info!(round = game.rounds_played(), "{} has won this round", round_winner.name());

        if args.round_delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(args.round_delay_ms)).await;
        }
    }

    let winner = game.select_winner()?;
    tracing::info!(
        winner = %winner.name(),
        score = winner.score(),
        tied = game.is_tied(),
        "end game winner selected"
    );

    let recorder = AsyncRecorder::new(Arc::new(MemoryStore::new()));
    recorder.record(&game).await?;

    let games = recorder.list_records().await?;
    tracing::info!("{} games found in history:", games.len());
    for record in games {
        tracing::info!(
            "Game {}: {} vs {}, winner {} ({} - {}{})",
            record.id,
            record.player_a.name,
            record.player_b.name,
            record.winner.name,
            record.context.player_a_score,
            record.context.player_b_score,
            if record.context.decided_by_tie_break {
                ", by tie-break"
            } else {
                ""
            },
        );
    }
    Ok(())
}
