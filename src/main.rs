//! Console front end for the pokeminmax battle engine.
//!
//! Run with: `pokeminmax [PLAYER] [AI] [--depth N] [--greedy] [--auto]`
//! Set `RUST_LOG=debug` to see the engine's search decisions on stderr.

use anyhow::{bail, Context, Result};
use clap::Parser;
use pokeminmax::battle::runner::STALL_LIMIT;
use pokeminmax::{
    AttackChoice, BattleConfig, BattleRunner, Participant, Pokedex, Side, StrategyKind,
};
use rand::Rng;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Two-creature turn-based battle against a minimax AI
#[derive(Parser)]
#[command(name = "pokeminmax")]
#[command(about = "Battle a minimax AI with type-effective attacks", long_about = None)]
#[command(version)]
struct Cli {
    /// Creature for the player side (prompted when omitted)
    player: Option<String>,

    /// Creature for the AI side (prompted when omitted)
    ai: Option<String>,

    /// RON config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// RON creature roster, overriding the config and the bundled roster
    #[arg(long)]
    data: Option<PathBuf>,

    /// Minimax search depth in plies
    #[arg(long)]
    depth: Option<i64>,

    /// Use the one-ply greedy AI instead of minimax
    #[arg(long)]
    greedy: bool,

    /// Print the roster and exit
    #[arg(long)]
    list: bool,

    /// Let the AI play the player side too
    #[arg(long)]
    auto: bool,

    /// Print a JSON snapshot of the battle after every move
    #[arg(long)]
    json: bool,

    /// Pick any creature not named on the command line at random
    #[arg(long)]
    random: bool,
}

impl Cli {
    fn battle_config(&self) -> Result<BattleConfig> {
        let mut config = match &self.config {
            Some(path) => BattleConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => BattleConfig::default(),
        };
        if let Some(path) = &self.data {
            config.data_path = Some(path.clone());
        }
        if let Some(depth) = self.depth {
            config.search_depth = depth;
        }
        if self.greedy {
            config.ai_strategy = StrategyKind::Greedy;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.battle_config()?;
    let pokedex = config.pokedex().context("loading creature data")?;

    if cli.list {
        for template in pokedex.iter() {
            println!("{}", template);
        }
        return Ok(());
    }

    let mut input = io::stdin().lock();
    let player_name = pick_creature(
        &pokedex,
        cli.player.as_deref(),
        cli.random,
        "your",
        &mut input,
    )?;
    let ai_name = pick_creature(
        &pokedex,
        cli.ai.as_deref(),
        cli.random,
        "the AI's",
        &mut input,
    )?;

    let ai = config.ai_participant();
    let player = if cli.auto { ai } else { Participant::Human };
    let mut runner = BattleRunner::from_pokedex(&pokedex, &player_name, &ai_name, player, ai)?;

    println!("{}", runner.state().combatant(Side::Player));
    println!("  vs");
    println!("{} ({})", runner.state().combatant(Side::Ai), ai);

    if runner.is_stalemate() {
        println!("\nNeither creature can hurt the other. The battle is a draw.");
        return Ok(());
    }

    while let Some(side) = runner.active_side() {
        if runner.is_stalled() {
            break;
        }
        print_status(&runner);

        let choice = if runner.participant(side).is_human() {
            AttackChoice::Index(prompt_attack(&runner, side, &mut input)?)
        } else {
            AttackChoice::Strategy
        };
        runner.apply_attack(choice);

        if let Some(description) = runner.last_move_description() {
            println!("{}", description);
        }
        if cli.json {
            println!("{}", serde_json::to_string(&runner.snapshot())?);
        }
    }

    print_status(&runner);
    match runner.winner() {
        Some(winner) => {
            let fainted = runner.state().combatant(winner.opponent());
            let victor = runner.state().combatant(winner);
            println!("\n{} fainted! {} wins.", fainted.name(), victor.name());
        }
        None => println!(
            "\nNo damage dealt in the last {} attacks. The battle is a draw.",
            STALL_LIMIT
        ),
    }
    Ok(())
}

fn print_status(runner: &BattleRunner) {
    println!();
    for side in [Side::Player, Side::Ai] {
        let combatant = runner.state().combatant(side);
        println!(
            "{:>6}: {} HP {}/{}",
            side.to_string(),
            combatant.name(),
            combatant.current_hp().max(0),
            combatant.max_hp()
        );
    }
}

/// Resolve one side's creature from the command line, at random, or by prompting.
fn pick_creature(
    pokedex: &Pokedex,
    given: Option<&str>,
    random: bool,
    whose: &str,
    input: &mut impl BufRead,
) -> Result<String> {
    if let Some(name) = given {
        return Ok(pokedex.get(name)?.name.clone());
    }
    if random {
        let names: Vec<&str> = pokedex.names().collect();
        if names.is_empty() {
            bail!("the creature roster is empty");
        }
        let index = rand::rng().random_range(0..names.len());
        return Ok(names[index].to_string());
    }

    println!(
        "Available creatures: {}",
        pokedex.names().collect::<Vec<_>>().join(", ")
    );
    loop {
        let line = prompt(&format!("Choose {} creature: ", whose), input)?;
        match pokedex.get(&line) {
            Ok(template) => return Ok(template.name.clone()),
            Err(_) => println!("Unknown creature '{}'.", line.trim()),
        }
    }
}

/// Ask for a 1-based attack number until a valid one is entered.
fn prompt_attack(runner: &BattleRunner, side: Side, input: &mut impl BufRead) -> Result<usize> {
    let attacks = runner.available_attacks(side);
    println!();
    for (i, attack) in attacks.iter().enumerate() {
        println!("  {}. {}", i + 1, attack);
    }
    loop {
        let line = prompt(&format!("Choose an attack (1-{}): ", attacks.len()), input)?;
        match line.trim().parse::<usize>() {
            Ok(n) if (1..=attacks.len()).contains(&n) => return Ok(n - 1),
            _ => println!("Invalid choice."),
        }
    }
}

fn prompt(message: &str, input: &mut impl BufRead) -> Result<String> {
    print!("{}", message);
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input closed before the battle finished");
    }
    Ok(line)
}
