//! King Catch CLI
//!
//! Run engine matches or play against the engine in the terminal.

use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use alphabeta_engine::AlphaBetaAgent;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use king_core::{
    mobility, Agent, AgentStatus, BackgroundAgent, GameConfig, GameState, MoveChoice,
    PlayOutcome, Side,
};
use random_engine::RandomAgent;
use rand::SeedableRng;
use simulator::{random_kings, HumanAgent, MatchConfig, MatchRunner, SimulationReport};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "king_catch")]
#[command(about = "Two kings on a fogged grid: catch the other or box it in", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a match between two engines
    Simulate(SimulateArgs),
    /// Play against the engine
    Play(PlayArgs),
}

#[derive(Args)]
struct BoardArgs {
    /// TOML game config; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    rows: Option<i32>,

    #[arg(long)]
    cols: Option<i32>,

    /// Search depth in plies
    #[arg(short, long)]
    depth: Option<u8>,
}

impl BoardArgs {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => GameConfig::default(),
        };
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(depth) = self.depth {
            config.search.depth = depth;
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Args)]
struct SimulateArgs {
    #[command(flatten)]
    board: BoardArgs,

    /// Number of games
    #[arg(short, long, default_value_t = 10)]
    games: u32,

    /// Seed for start positions and random agents
    #[arg(long)]
    seed: Option<u64>,

    /// Moves per game before it is abandoned
    #[arg(long, default_value_t = 200)]
    max_moves: u32,

    /// Agent that plays red in the first game
    #[arg(long, value_enum, default_value_t = AgentKind::Alphabeta)]
    red: AgentKind,

    #[arg(long, value_enum, default_value_t = AgentKind::Alphabeta)]
    black: AgentKind,

    /// Keep both agents on their sides instead of swapping each game
    #[arg(long)]
    fixed_sides: bool,

    /// Write the JSON report here
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(Args)]
struct PlayArgs {
    #[command(flatten)]
    board: BoardArgs,

    /// Side you play
    #[arg(long, value_enum, default_value_t = SideArg::Red)]
    human: SideArg,

    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum AgentKind {
    Alphabeta,
    Random,
}

#[derive(Clone, Copy, ValueEnum)]
enum SideArg {
    Red,
    Black,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Side {
        match side {
            SideArg::Red => Side::Red,
            SideArg::Black => Side::Black,
        }
    }
}

fn create_agent(kind: AgentKind, config: &GameConfig, seed: Option<u64>) -> Box<dyn Agent> {
    match kind {
        AgentKind::Alphabeta => Box::new(AlphaBetaAgent::new(config.search)),
        AgentKind::Random => match seed {
            Some(seed) => Box::new(RandomAgent::with_seed(seed)),
            None => Box::new(RandomAgent::new()),
        },
    }
}

fn run_simulation(args: SimulateArgs) -> Result<()> {
    let game = args.board.game_config()?;
    let config = MatchConfig {
        num_games: args.games,
        game,
        max_moves: args.max_moves,
        alternate_sides: !args.fixed_sides,
        seed: args.seed,
        verbose: true,
    };

    // Distinct seeds so two random agents do not mirror each other
    let mut a = create_agent(args.red, &game, args.seed);
    let mut b = create_agent(args.black, &game, args.seed.map(|s| s.wrapping_add(1)));
    let participants = vec![a.name().to_string(), b.name().to_string()];

    info!(
        a = %participants[0],
        b = %participants[1],
        games = config.num_games,
        rows = game.rows,
        cols = game.cols,
        depth = game.search.depth,
        "starting match"
    );

    let runner = MatchRunner::new(config.clone())?;
    let result = runner.run_match(a.as_mut(), b.as_mut())?;

    let report = SimulationReport::new(
        &format!("{} vs {}", participants[0], participants[1]),
        participants,
        config,
        result,
    );
    report.print_report();

    if let Some(path) = args.out {
        report
            .save(&path)
            .with_context(|| format!("writing report {}", path.display()))?;
        info!(path = %path.display(), "report saved");
    }
    Ok(())
}

fn run_play(args: PlayArgs) -> Result<()> {
    let config = args.board.game_config()?;
    let human_side = Side::from(args.human);

    let mut rng = match args.seed {
        Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
        None => rand::rngs::StdRng::from_entropy(),
    };
    let (red, black) = random_kings(config.rows, config.cols, &mut rng);
    let mut state = GameState::new(config.rows, config.cols, red, black, Side::Red)?;

    let mut human = HumanAgent::new(BufReader::new(io::stdin()), io::stdout(), config.visibility);
    let mut engine = BackgroundAgent::new(Box::new(AlphaBetaAgent::new(config.search)));

    println!("You are {human_side}. Enter moves as: row col");

    let (winner, how) = loop {
        let mover = state.side_to_move;
        if mobility(&state.grid, state.us()) == 0 {
            break (mover.other(), "boxed in");
        }

        let choice = if mover == human_side {
            human.choose_move(&state)?
        } else {
            engine.request(&state)?;
            print!("{} is thinking", engine.name());
            while engine.poll() == AgentStatus::Pending {
                print!(".");
                io::stdout().flush()?;
                thread::sleep(Duration::from_millis(250));
            }
            println!();
            engine.take()?
        };

        let mv = match choice {
            MoveChoice::Play(mv) => mv,
            MoveChoice::NoMoveAvailable => break (mover.other(), "resignation"),
        };
        if mover != human_side {
            println!("{} plays {}", engine.name(), mv.to);
        }

        match state.play(mv)? {
            PlayOutcome::Continue => {}
            PlayOutcome::Capture => break (mover, "capture"),
            PlayOutcome::Boxed => break (mover, "boxed in"),
        }
    };

    println!("\n{state}");
    if winner == human_side {
        println!("You win by {how}!");
    } else {
        println!("{} wins by {how}.", engine.name());
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    match Cli::parse().command {
        Command::Simulate(args) => run_simulation(args),
        Command::Play(args) => run_play(args),
    }
}
