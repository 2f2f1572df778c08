pub mod commands;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use quiz_core::{CardStore, QuizError, QuizSettings, SessionEngine, SessionSnapshot};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::{parse_line, Command, HELP};

/// Runtime configuration read from the environment.
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub sets_path: String,
    pub settings: QuizSettings,
}

impl CliConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let sets_path = lookup("QUIZ_SETS_PATH").unwrap_or_else(|| "sets.json".to_string());

        let mut settings = QuizSettings::default();
        if let Some(value) = lookup("QUIZ_THRESHOLD") {
            let threshold = value
                .parse::<f64>()
                .with_context(|| format!("QUIZ_THRESHOLD is not a number: {}", value))?;
            settings = settings.with_threshold(threshold);
        }
        if let Some(value) = lookup("QUIZ_RESET_ON_WRAP") {
            let reset = value
                .parse::<bool>()
                .with_context(|| format!("QUIZ_RESET_ON_WRAP is not true/false: {}", value))?;
            settings = settings.with_reset_on_wrap(reset);
        }

        Ok(Self {
            sets_path,
            settings,
        })
    }
}

/// Text shown after every engine update.
pub fn render(snapshot: &SessionSnapshot) -> String {
    let mut out = String::new();
    if let Some(correct) = snapshot.previous_guess_correct {
        let verdict = if correct { "correct" } else { "incorrect" };
        match snapshot.last_score {
            Some(score) => out.push_str(&format!("{} (score {:.2})\n", verdict, score)),
            None => out.push_str(&format!("{}\n", verdict)),
        }
    }
    out.push_str(&format!(
        "[{}] card {}/{} | streak {} | correct {}\n",
        snapshot.selected_set_name,
        snapshot.card_index + 1,
        snapshot.card_count,
        snapshot.correct_streak,
        snapshot.num_correct,
    ));
    out.push_str(&format!(
        "{}: {}",
        snapshot.current_card.asset_type.as_str().to_lowercase(),
        snapshot.current_card.asset_path
    ));
    out
}

pub fn run() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = CliConfig::from_env()?;

    tracing::info!("Loading sets from {}", config.sets_path);
    let file = std::fs::File::open(&config.sets_path)
        .with_context(|| format!("failed to open {}", config.sets_path))?;
    let sets = quiz_core::loader::read_sets(io::BufReader::new(file))?;
    let store = CardStore::new(sets)?;

    let mut engine = SessionEngine::new(store, &config.settings)?;
    engine.register_sink(|snapshot: SessionSnapshot| println!("{}", render(&snapshot)));
    tracing::info!("Loaded sets: {}", engine.set_names().join(", "));

    println!("{}", HELP);
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read input")?;
        let Some(command) = parse_line(&line) else {
            continue;
        };
        if command == Command::Quit {
            break;
        }
        if let Err(err) = dispatch(&mut engine, command) {
            println!("{}", describe(&err));
        }
        io::stdout().flush().ok();
    }

    Ok(())
}

fn dispatch(engine: &mut SessionEngine, command: Command) -> quiz_core::Result<()> {
    match command {
        Command::Sets => println!("{}", engine.set_names().join("\n")),
        Command::Select(name) => engine.select_set(&name)?,
        Command::Hint => match &engine.current_card()?.hint {
            Some(hint) => println!("hint: {}", hint),
            None => println!("no hint for this card"),
        },
        Command::Guess(text) => {
            engine.submit_guess(&text)?;
        }
        Command::Help | Command::Quit => println!("{}", HELP),
    }
    Ok(())
}

/// User-facing message for an engine error.
fn describe(err: &QuizError) -> String {
    match err {
        QuizError::NoSetSelected => "select a set first with :select <name>".to_string(),
        QuizError::SetNotFound(name) => format!("no set named {} (try :sets)", name),
        other => other.to_string(),
    }
}
