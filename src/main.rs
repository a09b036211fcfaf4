use anyhow::Result;
use clap::Parser;
use log::info;

use elevator_sim::console;
use elevator_sim::simulation::{Dispatcher, Floor, TrafficGenerator, MAX_FLOOR};
use elevator_sim::stats::SimulationStats;

#[derive(Parser)]
#[command(name = "elevator_sim")]
#[command(about = "Elevator bank simulation with an interactive console")]
struct Cli {
    /// Number of elevators in the bank (clamped into [1, 16])
    #[arg(short = 'n', long, default_value = "5", allow_negative_numbers = true)]
    elevators: i64,

    /// Run generated traffic instead of reading commands from stdin
    #[arg(long)]
    headless: bool,

    /// Number of simulation ticks with new calls in headless mode
    #[arg(long, default_value = "100")]
    ticks: u32,

    /// Building height used for generated calls
    #[arg(long, default_value = "20")]
    floors: Floor,

    /// Probability of a new call on each tick
    #[arg(long, default_value = "0.3")]
    call_rate: f64,

    /// Seed for reproducible generated traffic
    #[arg(long)]
    seed: Option<u64>,

    /// Print the bank status every N ticks in headless mode (0 disables)
    #[arg(long, default_value = "10")]
    report_every: u32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut dispatcher = Dispatcher::new(usize::try_from(cli.elevators).unwrap_or(0));
    info!("Created bank of {} elevators", dispatcher.elevator_count());

    if cli.headless {
        run_headless(&mut dispatcher, &cli);
        Ok(())
    } else {
        run_console(&mut dispatcher)
    }
}

/// Run the simulation with generated traffic (no console input)
fn run_headless(dispatcher: &mut Dispatcher, cli: &Cli) {
    let mut traffic = TrafficGenerator::new(cli.floors, cli.call_rate, cli.seed);
    let mut stats = SimulationStats::default();

    println!("Running elevator simulation in headless mode...");
    println!(
        "Ticks: {}, Floors: {}, Call rate: {}",
        cli.ticks,
        traffic.floors(),
        cli.call_rate
    );
    println!();

    for tick in 1..=cli.ticks {
        if let Some(call) = traffic.next_call() {
            let outcome = dispatcher.pickup(call.origin, call.direction, call.destination);
            stats.record_pickup(&outcome);
        }

        let report = dispatcher.step();
        stats.record_step(&report);

        if cli.report_every > 0 && tick % cli.report_every == 0 {
            println!("--- After tick {} ---", tick);
            dispatcher.print_summary();
            println!();
        }
    }

    // Every call left in the system finishes within a few sweeps of the building
    let drain_limit = 4 * MAX_FLOOR as u64 * (dispatcher.deferred_count() as u64 + 1);
    let mut drained = 0;
    while !dispatcher.is_quiescent() && drained < drain_limit {
        let report = dispatcher.step();
        stats.record_step(&report);
        drained += 1;
    }
    info!("Drained remaining calls in {} steps", drained);

    println!("=== Final State ===");
    dispatcher.print_summary();
    stats.log_summary();
}

fn run_console(dispatcher: &mut Dispatcher) -> Result<()> {
    println!("Elevator simulation console. Type 'help' for commands.");
    let mut stats = SimulationStats::default();
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    console::run_session(dispatcher, &mut stats, stdin.lock(), &mut stdout)?;
    stats.log_summary();
    Ok(())
}
