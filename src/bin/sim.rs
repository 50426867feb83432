use clap::Parser;
use gridhunt::{Board, GameRules, Opponent};
use rand::{rngs::SmallRng, SeedableRng};
use serde::Serialize;

/// Seeded engine-vs-engine battleship simulator.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of games to play.
    #[arg(long, default_value_t = 1)]
    games: u32,
    /// Fix RNG seed for player A (per-game seeds derive from it).
    #[arg(long)]
    seed_a: Option<u64>,
    /// Fix RNG seed for player B.
    #[arg(long)]
    seed_b: Option<u64>,
}

#[derive(Serialize)]
struct GameReport {
    game: u32,
    winner: &'static str,
    strikes_a: usize,
    strikes_b: usize,
}

fn rng_for(seed: Option<u64>, game: u32) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(game as u64)),
        None => SmallRng::from_rng(&mut rand::rng()),
    }
}

fn main() -> anyhow::Result<()> {
    gridhunt::init_logging();
    let cli = Cli::parse();

    for game in 0..cli.games {
        let mut rng_a = rng_for(cli.seed_a, game);
        let mut rng_b = rng_for(cli.seed_b, game);
        let report = play(game, &mut rng_a, &mut rng_b)?;
        println!("{}", serde_json::to_string(&report)?);
    }
    Ok(())
}

fn play(game: u32, rng_a: &mut SmallRng, rng_b: &mut SmallRng) -> anyhow::Result<GameReport> {
    let rules = GameRules::classic();
    let mut board_a = Board::new(rules.clone())?;
    let mut board_b = Board::new(rules.clone())?;
    let mut opp_a = Opponent::new(rules.clone());
    let mut opp_b = Opponent::new(rules.clone());

    for (i, &size) in rules.ship_sizes().iter().enumerate() {
        let p = opp_a.propose_placement(rng_a, size, &board_a)?;
        board_a.place(i, p)?;
        let p = opp_b.propose_placement(rng_b, size, &board_b)?;
        board_b.place(i, p)?;
    }

    let mut strikes_a = 0usize;
    let mut strikes_b = 0usize;
    let max_turns = rules.board_size() * rules.board_size();

    for _ in 0..max_turns {
        // player A fires at board B
        let coord = opp_a.select_strike(rng_a, &board_b, &board_b.fleet_status())?;
        let outcome = board_b.strike(coord)?;
        opp_a.react_to_outcome(&board_b, coord, outcome);
        strikes_a += 1;
        if board_b.all_sunk() {
            return Ok(GameReport {
                game,
                winner: "player_a",
                strikes_a,
                strikes_b,
            });
        }

        // player B fires at board A
        let coord = opp_b.select_strike(rng_b, &board_a, &board_a.fleet_status())?;
        let outcome = board_a.strike(coord)?;
        opp_b.react_to_outcome(&board_a, coord, outcome);
        strikes_b += 1;
        if board_a.all_sunk() {
            return Ok(GameReport {
                game,
                winner: "player_b",
                strikes_a,
                strikes_b,
            });
        }
    }
    anyhow::bail!("game {} exceeded {} turns without a winner", game, max_turns)
}
