use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use collection::PlayerCount;
use colored::Colorize;
use picker::{
    DEFAULT_PLAYER_COUNT, DEFAULT_TARGET_COUNT, GamePicker, JsonFileSource, NO_GAMES_REPLY,
    PickConfig, RequestError,
};
use pipeline::{Selection, SelectionStrategy};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use tracing::info;

/// game-picker - What should we play tonight?
#[derive(Parser)]
#[command(name = "game-picker")]
#[command(about = "Pick board games to play from a BoardGameGeek collection", long_about = None)]
struct Cli {
    /// Directory holding <user>.json collection documents
    #[arg(short, long, default_value = ".")]
    data_dir: PathBuf,

    /// Seed the random generator for reproducible picks
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pick games for a user
    Pick {
        /// User whose collection to pick from
        #[arg(long)]
        user: String,

        #[command(flatten)]
        options: PickOptions,
    },

    /// Pick games for a text request such as "thealmostkid 4"
    Message {
        /// Request body: USER [PLAYERS]
        body: String,

        #[command(flatten)]
        options: PickOptions,
    },

    /// Show the playable part of a collection with selection weights
    List {
        /// User whose collection to show
        #[arg(long)]
        user: String,

        /// Number of players
        #[arg(long, default_value_t = DEFAULT_PLAYER_COUNT, allow_negative_numbers = true)]
        players: PlayerCount,
    },
}

#[derive(Args)]
struct PickOptions {
    /// Number of players (a player count in a message takes precedence)
    #[arg(long, default_value_t = DEFAULT_PLAYER_COUNT, allow_negative_numbers = true)]
    players: PlayerCount,

    /// Number of games to pick
    #[arg(long, default_value_t = DEFAULT_TARGET_COUNT)]
    count: usize,

    /// Selection algorithm
    #[arg(long, value_enum, default_value_t = Strategy::Weighted)]
    strategy: Strategy,

    /// Print the picks as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Strategy {
    /// Weighted draws favouring well-ranked, rarely played games
    Weighted,
    /// Uniform draws, ordered by weight
    Ranked,
}

impl From<Strategy> for SelectionStrategy {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Weighted => SelectionStrategy::Weighted,
            Strategy::Ranked => SelectionStrategy::RankedRandom,
        }
    }
}

impl PickOptions {
    fn config(&self) -> PickConfig {
        PickConfig::default()
            .with_player_count(self.players)
            .with_target_count(self.count)
            .with_strategy(self.strategy.into())
    }
}

fn main() -> Result<()> {
    // Initialize tracing (stderr, so --json output stays clean)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut rng = match cli.seed {
        Some(seed) => {
            info!("Seeding random generator with {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };
    info!("Reading collections from {}", cli.data_dir.display());
    let picker = GamePicker::new(JsonFileSource::new(&cli.data_dir));

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Pick { user, options } => handle_pick(&picker, &user, &options, &mut rng)?,
        Commands::Message { body, options } => {
            handle_message(&picker, &body, &options, &mut rng)?
        }
        Commands::List { user, players } => handle_list(&picker, &user, players)?,
    }

    Ok(())
}

/// Handle the 'pick' command
fn handle_pick(
    picker: &GamePicker<JsonFileSource>,
    user: &str,
    options: &PickOptions,
    rng: &mut StdRng,
) -> Result<()> {
    info!("Picking {} games for {} ({} players)", options.count, user, options.players);
    let selections = picker
        .pick(user, &options.config(), rng)
        .with_context(|| format!("Could not pick games for {}", user))?;
    print_selections(&selections, options.json)
}

/// Handle the 'message' command
///
/// A malformed request is answered with the usage hint rather than failing.
fn handle_message(
    picker: &GamePicker<JsonFileSource>,
    body: &str,
    options: &PickOptions,
    rng: &mut StdRng,
) -> Result<()> {
    info!("Handling request {:?}", body);
    match picker.pick_message(body, &options.config(), rng) {
        Ok(selections) => print_selections(&selections, options.json),
        Err(err) => match err.downcast_ref::<RequestError>() {
            Some(request_err) => {
                info!("Rejected request: {}", request_err);
                println!("{}", request_err.to_string().yellow());
                Ok(())
            }
            None => Err(err),
        },
    }
}

/// Handle the 'list' command
fn handle_list(
    picker: &GamePicker<JsonFileSource>,
    user: &str,
    players: PlayerCount,
) -> Result<()> {
    info!("Listing playable games for {} ({} players)", user, players);
    let playable = picker.playable(user, players)?;

    println!(
        "{}",
        format!("{} games playable by {} for {}:", playable.len(), user, players)
            .bold()
            .blue()
    );
    for (game, weight) in &playable {
        let rank = if game.is_ranked() {
            game.rank.to_string()
        } else {
            "-".to_string()
        };
        println!(
            "{} {} (rank {}, {} plays, {}-{} players) weight {}",
            "•".green(),
            game.name,
            rank,
            game.num_plays,
            game.min_players,
            game.max_players,
            weight.to_string().cyan()
        );
    }
    Ok(())
}

/// Helper function to format and print selections
fn print_selections(selections: &[Selection], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(selections)?);
        return Ok(());
    }

    if selections.is_empty() {
        println!("{}", NO_GAMES_REPLY.yellow());
        return Ok(());
    }

    println!("{}", "Tonight's picks:".bold().blue());
    for (i, selection) in selections.iter().enumerate() {
        println!(
            "{}. {} {}",
            (i + 1).to_string().green(),
            selection.name,
            selection.thumbnail.dimmed()
        );
    }
    Ok(())
}
