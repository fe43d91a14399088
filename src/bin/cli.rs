use std::thread;
use anyhow::{Result, Context};
use clap::{Parser, Subcommand};
use rustyline::error::ReadlineError;
use rustyline::Editor;
use rustyline::history::DefaultHistory;

use pagesim::common::types::PageId;
use pagesim::input::{self, InputConfig, DEFAULT_FRAME_COUNT, DEFAULT_REFERENCE_STRING};
use pagesim::playback::{PlaybackConfig, ReferenceMark, Session};
use pagesim::simulator::{self, Comparison, Outcome, Policy, Step, StepTrace};

const HISTORY_FILE: &str = ".pagesim_history";

#[derive(Parser)]
#[command(author, version, about = "pagesim - step through FIFO, LRU and Optimal page replacement")]
struct Cli {
    /// Number of frames (1-10)
    #[arg(short, long, default_value_t = DEFAULT_FRAME_COUNT, global = true)]
    frames: usize,

    /// Comma-separated reference string
    #[arg(short, long, default_value = DEFAULT_REFERENCE_STRING, global = true)]
    refs: String,

    /// Auto-play speed (1-10)
    #[arg(short, long, default_value_t = 5, global = true)]
    speed: u32,

    /// Command to execute
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every step of one policy's trace
    Run {
        /// Replacement policy: fifo, lru or optimal
        #[arg(short, long, default_value = "fifo")]
        policy: Policy,

        /// Print the trace as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare the totals of all three policies
    Compare {
        /// Print the comparison as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print a random reference string
    Random,

    /// Start an interactive stepping shell
    Shell,
}

fn load_input(refs: &str, frames: usize, config: &InputConfig) -> Result<Vec<PageId>> {
    let references = input::parse_reference_string(refs);
    input::validate_reference_string(&references)?;
    input::validate_frame_count(frames, config)?;
    Ok(references)
}

fn format_page(page: Option<PageId>) -> String {
    page.map_or_else(|| "-".to_string(), |p| p.to_string())
}

fn print_trace(trace: &StepTrace) {
    println!("| {:<4} | {:<4} | {:<24} | {:<13} | {:<7} | {:<6} | {:<4} |",
        "step", "page", "frames", "result", "evicted", "faults", "hits");
    println!("+{:-<6}+{:-<6}+{:-<26}+{:-<15}+{:-<9}+{:-<8}+{:-<6}+", "", "", "", "", "", "", "");
    for (index, step) in trace.iter().enumerate() {
        println!("| {:<4} | {:<4} | {:<24} | {:<13} | {:<7} | {:<6} | {:<4} |",
            index,
            format_page(step.page),
            step.frames.to_string(),
            step.describe(),
            format_page(step.evicted),
            step.faults,
            step.hits);
    }
    println!("({} steps)", trace.reference_count());
}

fn format_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(ratio) => format!("{:.1}%", ratio * 100.0),
        None => "0%".to_string(),
    }
}

fn print_comparison(comparison: &Comparison) {
    for (policy, step) in comparison.iter() {
        println!("{}", policy.label());
        println!("  Page Faults: {}", step.faults);
        println!("  Page Hits:   {}", step.hits);
        println!("  Fault Ratio: {}", format_ratio(step.fault_ratio()));
        println!("  Hit Ratio:   {}", format_ratio(step.hit_ratio()));
    }
    println!();
    print_chart(comparison);
}

// Horizontal bar chart, one bar per policy and counter
fn print_chart(comparison: &Comparison) {
    for (policy, step) in comparison.iter() {
        println!("{:<8} faults |{} {}", policy.to_string(), "#".repeat(step.faults), step.faults);
        println!("{:<8} hits   |{} {}", "", "=".repeat(step.hits), step.hits);
    }
}

fn render_frames(step: &Step) -> String {
    step.frames
        .slots()
        .iter()
        .enumerate()
        .map(|(index, slot)| {
            let touched = step.slot.is_some_and(|frame_id| frame_id.index() == index);
            match (slot, touched, step.outcome) {
                (None, _, _) => " - ".to_string(),
                (Some(page), true, Some(Outcome::Hit)) => format!("+{}+", page),
                (Some(page), true, Some(Outcome::Fault)) => format!("*{}*", page),
                (Some(page), _, _) => format!(" {} ", page),
            }
        })
        .collect::<Vec<_>>()
        .join("|")
}

fn render_references(session: &Session) -> String {
    session
        .references()
        .iter()
        .zip(session.reference_marks())
        .map(|(page, mark)| {
            let tag = |outcome: Outcome| if outcome == Outcome::Hit { "h" } else { "f" };
            match mark {
                ReferenceMark::Past(outcome) => format!(" {}{}", page, tag(outcome)),
                ReferenceMark::Current(outcome) => format!("[{}{}]", page, tag(outcome)),
                ReferenceMark::Pending => format!(" {} ", page),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn print_session(session: &Session) -> Result<()> {
    let step = session.current()?;
    let summary = session.summary();

    println!("{} | step {}/{} | page {} | {}",
        session.policy(),
        session.current_index(),
        session.total_steps(),
        format_page(step.page),
        step.describe());
    println!("  Frames:     {}", render_frames(step));
    if let Some(evicted) = step.evicted {
        println!("  Evicted:    {}", evicted);
    }
    println!("  References: {}", render_references(session));
    println!("  Faults: {}  Hits: {}  Fault ratio: {:.1}%  Hit ratio: {:.1}%",
        summary.faults,
        summary.hits,
        summary.fault_ratio * 100.0,
        summary.hit_ratio * 100.0);
    Ok(())
}

fn play(session: &mut Session) -> Result<()> {
    let interval = session.begin_playback()?;
    print_session(session)?;
    while session.next() {
        thread::sleep(interval);
        print_session(session)?;
    }
    Ok(())
}

fn print_help() {
    println!("Available commands:");
    println!("  next | n               - Advance one step");
    println!("  prev | p               - Go back one step");
    println!("  goto <step>            - Jump to a step");
    println!("  play                   - Auto-play to the end of the trace");
    println!("  show                   - Show the current step");
    println!("  policy <fifo|lru|optimal> - Switch policy and restart");
    println!("  load <refs>            - Load a comma-separated reference string");
    println!("  frames <n>             - Change the number of frames and restart");
    println!("  speed <n>              - Set auto-play speed (1-10)");
    println!("  random                 - Load a random reference string");
    println!("  compare                - Compare all policies on the current input");
    println!("  reset                  - Clear the simulation");
    println!("  help                   - Display this help message");
    println!("  exit                   - Exit the shell");
}

fn handle_command(session: &mut Session, config: &InputConfig, line: &str) -> Result<()> {
    let (command, argument) = match line.split_once(char::is_whitespace) {
        Some((command, argument)) => (command, argument.trim()),
        None => (line, ""),
    };

    match command.to_lowercase().as_str() {
        "next" | "n" => {
            if !session.next() {
                println!("Already at the last step");
            }
            print_session(session)?;
        }
        "prev" | "p" => {
            if !session.previous() {
                println!("Already at the initial step");
            }
            print_session(session)?;
        }
        "goto" => {
            let step = argument.parse::<usize>().context("goto expects a step number")?;
            session.seek(step)?;
            print_session(session)?;
        }
        "play" => play(session)?,
        "show" => print_session(session)?,
        "policy" => {
            let policy = argument.parse::<Policy>().map_err(anyhow::Error::msg)?;
            session.select_policy(policy)?;
            println!("Policy set to {}", policy.label());
            if session.is_running() {
                print_session(session)?;
            }
        }
        "load" => {
            let references = input::parse_reference_string(argument);
            session.start(references, session.frame_count(), session.policy())?;
            print_session(session)?;
        }
        "frames" => {
            let frames = input::parse_frame_count(argument, config)?;
            session.start(session.references().to_vec(), frames, session.policy())?;
            print_session(session)?;
        }
        "speed" => {
            let speed = argument.parse::<u32>().context("speed expects a number")?;
            session.set_speed(speed)?;
        }
        "random" => {
            let references = input::random_reference_string(&mut rand::thread_rng(), config);
            println!("Reference string: {}", input::format_reference_string(&references));
            session.start(references, session.frame_count(), session.policy())?;
            print_session(session)?;
        }
        "compare" => {
            let comparison = simulator::compare(session.references(), session.frame_count())?;
            print_comparison(&comparison);
        }
        "reset" => {
            session.reset();
            println!("Simulation cleared");
        }
        "help" => print_help(),
        other => println!("Unknown command '{}'. Type 'help' for assistance.", other),
    }
    Ok(())
}

fn run_shell(session: &mut Session, config: &InputConfig) -> Result<()> {
    println!("Welcome to pagesim. Type 'help' for assistance or 'exit' to quit.");
    print_session(session)?;

    let mut rl = Editor::<(), DefaultHistory>::new()?;
    if let Err(err) = rl.load_history(HISTORY_FILE) {
        if !err.to_string().contains("No such file or directory") {
            println!("Error loading history: {}", err);
        }
    }

    loop {
        let readline = rl.readline("pagesim> ");
        match readline {
            Ok(line) => {
                let _ = rl.add_history_entry(&line);

                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                if matches!(line.to_lowercase().as_str(), "exit" | "quit") {
                    println!("Goodbye!");
                    break;
                }

                if let Err(err) = handle_command(session, config, line) {
                    println!("Error: {}", err);
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {}", err);
                break;
            }
        }
    }

    if let Err(err) = rl.save_history(HISTORY_FILE) {
        println!("Error saving history: {}", err);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = InputConfig::default();

    match &cli.command {
        Some(Commands::Run { policy, json }) => {
            let references = load_input(&cli.refs, cli.frames, &config)?;
            let trace = simulator::simulate(*policy, &references, cli.frames)
                .context("Simulation failed")?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&trace)?);
            } else {
                println!("{}", policy.label());
                print_trace(&trace);
            }
        }
        Some(Commands::Compare { json }) => {
            let references = load_input(&cli.refs, cli.frames, &config)?;
            let comparison = simulator::compare_parallel(&references, cli.frames)
                .context("Comparison failed")?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&comparison)?);
            } else {
                print_comparison(&comparison);
            }
        }
        Some(Commands::Random) => {
            let references = input::random_reference_string(&mut rand::thread_rng(), &config);
            println!("{}", input::format_reference_string(&references));
        }
        Some(Commands::Shell) | None => {
            let playback = PlaybackConfig::with_speed(cli.speed)?;
            let mut session = Session::new(config.clone(), playback);
            let references = load_input(&cli.refs, cli.frames, &config)?;
            session.start(references, cli.frames, Policy::default())
                .context("Failed to start simulation")?;
            run_shell(&mut session, &config)?;
        }
    }

    Ok(())
}
