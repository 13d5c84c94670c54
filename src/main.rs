//! Twisty Cube
//!
//! Models a 3x3x3 twisty cube: applies rotation notation, shuffles and
//! rewinds it headless, prints text views of its state, and plays it in an
//! interactive 3D viewer.

mod visualization;

use std::time::Duration;

use clap::{Parser, Subcommand};

use cuber::{animator, cube, cubelet, direction, geometry, presets, scheduler, solver};
use cuber::{Cube, CubeConfig, ShuffleMethod};

/// Upper bound on dispatch steps for a headless run.
const MAX_TICKS: usize = 100_000;

/// Twists, shuffles, and inspects a 3x3x3 twisty cube.
#[derive(Parser)]
#[command(name = "cuber")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Animation time of a quarter turn, in milliseconds.
    #[arg(long, global = true, default_value_t = 1000)]
    twist_duration_ms: u64,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Apply notation such as "RUr90" and print the cube.
    Twist { notation: String },
    /// Apply random twists and print them with the cube.
    Shuffle {
        #[arg(long, default_value_t = 20)]
        count: usize,
        #[arg(long, value_enum, default_value_t = ShuffleMethod::PreserveLogo)]
        method: ShuffleMethod,
        /// Repeat a previous shuffle.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Apply notation, then undo it twist by twist.
    Solve { notation: String },
    /// Print the slot layout and faces, a single slice, or a single cubelet.
    Inspect {
        #[arg(long)]
        slice: Option<String>,
        #[arg(long)]
        cubelet: Option<usize>,
    },
    /// Open the interactive 3D viewer.
    Display {
        notation: Option<String>,
        /// Loop the presentation demo.
        #[arg(long)]
        demo: bool,
        /// Keep shuffling until told otherwise.
        #[arg(long)]
        shuffle: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    let config = CubeConfig {
        twist_duration: Duration::from_millis(cli.twist_duration_ms),
        ..CubeConfig::default()
    };

    match cli.command {
        Some(Command::Twist { notation }) => run_twist(&config, &notation),
        Some(Command::Shuffle {
            count,
            method,
            seed,
        }) => run_shuffle(
            &CubeConfig {
                shuffle_method: method,
                seed,
                ..config
            },
            count,
        ),
        Some(Command::Solve { notation }) => run_solve(&config, &notation),
        Some(Command::Inspect { slice, cubelet }) => run_inspect(slice.as_deref(), cubelet),
        Some(Command::Display {
            notation,
            demo,
            shuffle,
        }) => run_display(config, notation, demo, shuffle),
        None => run_display(config, None, false, false),
    }
}

/// Dispatched twists, solved state, and the six faces.
fn describe(cube: &Cube) -> String {
    let twists: Vec<String> = cube.dispatched().iter().map(|t| t.to_string()).collect();
    let twists = if twists.is_empty() {
        "none".to_string()
    } else {
        twists.join(" ")
    };
    format!(
        "Twists     {}\nSolved     {}\n\n{}",
        twists,
        cube.is_solved(),
        cube.inspect()
    )
}

fn run_twist(config: &CubeConfig, notation: &str) {
    let mut cube = Cube::new(config);
    cube.queue(notation);
    cube.run(MAX_TICKS);
    print!("{}", describe(&cube));
}

fn run_shuffle(config: &CubeConfig, count: usize) {
    let mut cube = Cube::new(config);
    let commands = cube.shuffle(count);
    println!("Shuffled with {commands}");
    cube.run(MAX_TICKS);
    print!("{}", describe(&cube));
}

fn run_solve(config: &CubeConfig, notation: &str) {
    let mut cube = Cube::new(config);
    cube.queue(notation);
    cube.run(MAX_TICKS);
    let applied = cube.dispatched().len();
    print!("{}", describe(&cube));

    cube.set_solver(Box::new(solver::Rewind::new()));
    cube.is_solving = true;
    cube.run(MAX_TICKS);
    let rewound = cube.dispatched().len() - applied;
    if cube.is_solved() {
        println!("\nSolved after rewinding {rewound} twists");
    } else {
        eprintln!("\nStill unsolved after rewinding {rewound} twists");
    }
}

fn run_inspect(slice: Option<&str>, id: Option<usize>) {
    let cube = Cube::default();
    if let Some(id) = id {
        match cube.cubelet(id) {
            Some(cubelet) => print!("{}", cubelet.inspect()),
            None => eprintln!("No cubelet {id}; ids run from 0 to 26"),
        }
        return;
    }
    if let Some(name) = slice {
        match cube.slice(name) {
            Some(slice) => print!("{}", slice.inspect(None)),
            None => eprintln!(
                "No slice named {name:?}; try one of: {}",
                cube::SLICES.map(|(name, _)| name).join(", ")
            ),
        }
        return;
    }
    print!("{}\n{}", cube.layout(), cube.inspect());
}

fn run_display(config: CubeConfig, notation: Option<String>, demo: bool, shuffle: bool) {
    println!("Controls: command letters twist, I inverts the next one, Space shuffles, Q solves");
    visualization::display(config, notation, demo, shuffle);
}
