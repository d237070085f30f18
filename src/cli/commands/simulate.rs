//! Simulate command - Play every catalog item against an oracle player

use std::{
    collections::BTreeMap,
    fs::File,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use crate::{
    answer::Answer,
    app::{App, SessionConfig},
    catalog::Item,
    cli::{
        config::SessionArgs,
        output::{create_simulation_progress, format_percent, print_kv, print_section},
    },
    identifiers::ItemId,
    session::Step,
    strategy::Difficulty,
    verdict::Verdict,
};

#[derive(Parser, Debug)]
#[command(about = "Simulate games with an oracle player")]
pub struct SimulateArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    /// Number of passes over the catalog
    #[arg(long, short = 'r', default_value_t = 1)]
    pub rounds: usize,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Export results to file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Outcome of one simulated game.
#[derive(Debug, Clone, Serialize)]
pub struct GameRecord {
    pub secret: ItemId,
    pub guess: Option<ItemId>,
    pub correct: bool,
    pub decided: bool,
    pub questions: usize,
}

/// Aggregated results of a simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationSummary {
    pub strategy: String,
    pub difficulty: String,
    pub rounds: usize,
    pub total_games: usize,
    pub correct: usize,
    pub accuracy: f64,
    pub mean_questions: f64,
    /// Secret items the guesser named wrongly at least once, with miss counts
    pub misses: BTreeMap<String, usize>,
    #[serde(skip)]
    pub games: Vec<GameRecord>,
}

impl SimulationSummary {
    fn from_games(args: &SimulateArgs, difficulty: Difficulty, games: Vec<GameRecord>) -> Self {
        let total_games = games.len();
        let correct = games.iter().filter(|game| game.correct).count();
        let total_questions: usize = games.iter().map(|game| game.questions).sum();
        let mut misses = BTreeMap::new();
        for game in games.iter().filter(|game| !game.correct) {
            *misses.entry(game.secret.to_string()).or_insert(0) += 1;
        }
        let ratio = |n: usize| {
            if total_games == 0 {
                0.0
            } else {
                n as f64 / total_games as f64
            }
        };

        Self {
            strategy: args.session.strategy.to_string(),
            difficulty: difficulty.to_string(),
            rounds: args.rounds,
            total_games,
            correct,
            accuracy: ratio(correct),
            mean_questions: ratio(total_questions),
            misses,
            games,
        }
    }
}

/// Answer truthfully about `attribute` for `secret`.
pub fn oracle_answer(secret: &Item, attribute: &str) -> Answer {
    if secret.value(attribute).unwrap_or(false) {
        Answer::Yes
    } else {
        Answer::No
    }
}

pub fn execute(args: SimulateArgs) -> Result<()> {
    let app = args.session.load_app()?;
    let difficulty = args.session.difficulty.unwrap_or_default();

    print_section("Simulation");
    print_kv("Strategy", &args.session.strategy.to_string());
    print_kv("Difficulty", &difficulty.to_string());
    print_kv("Items", &app.catalog().len().to_string());
    print_kv("Rounds", &args.rounds.to_string());
    if let Some(seed) = args.session.seed {
        print_kv("Seed", &seed.to_string());
    }

    let summary = run(&app, &args, difficulty)?;

    print_section("Results");
    print_kv("Games", &summary.total_games.to_string());
    print_kv(
        "Correct",
        &format!("{} ({})", summary.correct, format_percent(summary.accuracy)),
    );
    print_kv("Mean questions", &format!("{:.2}", summary.mean_questions));
    for (item, count) in &summary.misses {
        print_kv(&format!("Missed {item}"), &count.to_string());
    }

    if let Some(export_path) = &args.export {
        export_summary(&summary, export_path)?;
        println!("\n✓ Results exported to: {}", export_path.display());
    }
    Ok(())
}

/// Play every catalog item `args.rounds` times.
///
/// A fixed seed is offset per game so runs are reproducible without every
/// game sharing one random stream.
pub fn run(app: &App, args: &SimulateArgs, difficulty: Difficulty) -> Result<SimulationSummary> {
    let catalog = app.catalog();
    let total = (catalog.len() * args.rounds) as u64;
    let progress = (!args.no_progress).then(|| create_simulation_progress(total));

    let mut games = Vec::with_capacity(total as usize);
    for round in 0..args.rounds {
        for (index, secret) in catalog.items().iter().enumerate() {
            let game_index = (round * catalog.len() + index) as u64;
            let mut config = args.session.session_config(difficulty);
            config.seed = args.session.seed.map(|seed| seed.wrapping_add(game_index));
            games.push(play_one(app, secret, config)?);

            if let Some(pb) = &progress {
                pb.inc(1);
                pb.set_message(format!("round {}", round + 1));
            }
        }
    }
    if let Some(pb) = progress {
        pb.finish_with_message("done");
    }

    Ok(SimulationSummary::from_games(args, difficulty, games))
}

fn play_one(app: &App, secret: &Item, config: SessionConfig) -> Result<GameRecord> {
    let mut session = app.start_session(config)?;
    // Terminates: no attribute is asked twice.
    let verdict = loop {
        match session.next_question() {
            Step::Ask(question) => {
                session.submit_answer(oracle_answer(secret, question.attribute.as_str()));
            }
            Step::Finished(verdict) => break verdict,
        }
    };

    let guess = verdict.best_guess().cloned();
    Ok(GameRecord {
        correct: guess.as_ref() == Some(&secret.name),
        decided: matches!(verdict, Verdict::Decided(_)),
        guess,
        secret: secret.name.clone(),
        questions: session.questions_asked(),
    })
}

fn export_summary(summary: &SimulationSummary, path: &Path) -> Result<()> {
    #[derive(Serialize)]
    struct SimulationExport<'a> {
        summary: &'a SimulationSummary,
        games: &'a [GameRecord],
    }

    let file =
        File::create(path).with_context(|| format!("creating export file {}", path.display()))?;
    serde_json::to_writer_pretty(
        file,
        &SimulationExport {
            summary,
            games: &summary.games,
        },
    )?;
    Ok(())
}
