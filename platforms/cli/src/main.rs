use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use tursim::{ConfigLoader, Halt, ProgramManager, RunConfig};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(after_help = "EXAMPLES:
  tursim-cli --list
  tursim-cli \"Busy Beaver 3\" --trace
  RUST_LOG=trace tursim-cli \"Two State Toy\"")]
struct Cli {
    /// Name of the built-in program to run
    #[clap(default_value = "Two State Toy")]
    program: String,

    /// List the built-in programs and exit
    #[clap(short, long)]
    list: bool,

    /// Stop with an error after this many steps
    #[clap(short, long)]
    max_steps: Option<usize>,

    /// Print the tape before each step
    #[clap(short = 'd', long)]
    trace: bool,

    /// Read run options from a JSON file; flags override it
    #[clap(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.list {
        for program in tursim::PROGRAMS.iter() {
            println!("{:<16} {}", program.name, program.description);
        }
        return Ok(());
    }

    let config = run_config(&cli)?;
    let program = ProgramManager::get_program_by_name(&cli.program)?;
    log::info!("Running '{}'", program.name);

    let mut machine = program.machine()?;
    let halt = machine.run_observed(&config, |machine| {
        if config.trace {
            println!(
                "Step: {}, State: {}, Head: {}, Tape: {}",
                machine.step_count(),
                machine.state(),
                machine.head(),
                machine.tape()
            );
        }
    })?;

    match halt {
        Halt::FinalState(state) => println!("\nMachine halted in final state {}.", state),
        Halt::NoTransition { state, symbol } => {
            println!("\nMachine halted: no rule for {} reading '{}'.", state, symbol)
        }
    }
    println!("Steps: {}", machine.step_count());
    println!("Final Tape Content: {}", machine.tape());

    Ok(())
}

/// Builds the run options from the config file, if any, then applies command-line flags.
fn run_config(cli: &Cli) -> Result<RunConfig, Box<dyn Error>> {
    let mut config = match &cli.config {
        Some(path) => ConfigLoader::load_config(path)?,
        None => RunConfig::default(),
    };

    if cli.max_steps.is_some() {
        config.max_steps = cli.max_steps;
    }
    config.trace |= cli.trace;

    Ok(config)
}
