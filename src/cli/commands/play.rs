//! Play command - Interactive game on stdin/stdout

use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};
use clap::Parser;

use crate::{
    answer::Answer,
    cli::config::SessionArgs,
    questions::Phrasebook,
    session::{Session, Step},
    strategy::{Difficulty, StrategyKind},
    verdict::Verdict,
};

#[derive(Parser, Debug, Default)]
#[command(about = "Play an interactive guessing game")]
pub struct PlayArgs {
    #[command(flatten)]
    pub session: SessionArgs,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&args, stdin.lock(), stdout.lock())?;
    Ok(())
}

/// Drive one game over arbitrary line-oriented input and output.
pub fn run<R: BufRead, W: Write>(args: &PlayArgs, mut input: R, mut output: W) -> Result<Verdict> {
    let app = args.session.load_app()?;
    let phrasebook = Phrasebook::for_language(args.session.language);

    writeln!(output, "Think of a food and answer my questions.")?;
    let difficulty = match (args.session.strategy, args.session.difficulty) {
        (_, Some(difficulty)) => difficulty,
        (StrategyKind::Reward, None) => {
            write!(output, "Choose difficulty (Easy/Hard): ")?;
            output.flush()?;
            Difficulty::parse_or_default(&read_line(&mut input)?)
        }
        (StrategyKind::Entropy, None) => Difficulty::default(),
    };

    let mut session = app.start_session(args.session.session_config(difficulty))?;
    let verdict = loop {
        match session.next_question() {
            Step::Ask(question) => {
                write!(
                    output,
                    "{} [{}/{}/{}] ",
                    question.prompt, phrasebook.yes, phrasebook.no, phrasebook.maybe
                )?;
                output.flush()?;
                match read_line(&mut input)?.parse::<Answer>() {
                    Ok(answer) => session.submit_answer(answer),
                    Err(err) => writeln!(output, "{err}")?,
                }
            }
            Step::Finished(verdict) => break verdict,
        }
    };

    writeln!(output, "{}", describe(&session, &phrasebook, &verdict))?;
    Ok(verdict)
}

fn describe(session: &Session, phrasebook: &Phrasebook, verdict: &Verdict) -> String {
    match (session.strategy_kind(), verdict) {
        (StrategyKind::Reward, Verdict::Decided(item)) => phrasebook.announce_prediction(item),
        _ => phrasebook.describe(verdict),
    }
}

fn read_line<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("input closed before the game finished");
    }
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{beliefs::BeliefEngine, catalog::Catalog};

    fn play(args: PlayArgs, input: &str) -> (Result<Verdict>, String) {
        let mut output = Vec::new();
        let verdict = run(&args, input.as_bytes(), &mut output);
        (verdict, String::from_utf8(output).unwrap())
    }

    /// Typed answers for `item`, in the order the entropy engine asks.
    fn scripted_answers(item: &str) -> String {
        let catalog = Arc::new(Catalog::food());
        let secret = catalog.item(item).cloned().unwrap();
        let mut engine = BeliefEngine::new(catalog);
        let mut input = String::new();
        while !engine.verdict().is_terminal() {
            let attribute = engine.pick_attribute().unwrap();
            let answer = if secret.value(attribute.as_str()).unwrap() {
                Answer::Yes
            } else {
                Answer::No
            };
            engine.record_answer(answer, &attribute);
            input.push_str(answer.token());
            input.push('\n');
        }
        input
    }

    #[test]
    fn guesses_pizza_from_typed_answers() {
        let input = scripted_answers("pizza");
        let (verdict, output) = play(PlayArgs::default(), &input);
        assert_eq!(verdict.unwrap(), Verdict::Decided("pizza".into()));
        assert!(output.starts_with("Think of a food"));
        assert!(output.contains("Is it vegetarian? [Yes/No/Maybe]"));
        assert!(output.trim_end().ends_with("I guess your food is pizza!"));
    }

    #[test]
    fn repeats_question_after_bad_answer() {
        let (verdict, output) = play(PlayArgs::default(), "perhaps\n");
        assert!(verdict.is_err());
        assert!(output.contains("invalid answer 'perhaps'"));
        assert_eq!(output.matches("Is it vegetarian?").count(), 2);
    }

    #[test]
    fn reward_game_prompts_for_difficulty() {
        let args = PlayArgs {
            session: SessionArgs {
                strategy: StrategyKind::Reward,
                seed: Some(3),
                ..SessionArgs::default()
            },
        };
        let input = format!("nightmare\n{}", "no\n".repeat(6));
        let (verdict, output) = play(args, &input);
        assert!(matches!(verdict.unwrap(), Verdict::Decided(_)));
        assert!(output.contains("Choose difficulty (Easy/Hard):"));
        assert!(output.contains("I think the food is"));
    }
}
