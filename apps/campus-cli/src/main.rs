//! campus - student verification console
//!
//! Command-line front end over campus-id and campus-domain.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use campus_id::{FixedYear, IdentifierValidator, SystemClock, ValidatorConfig, YearSource};
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "campus", version, about = "Student card verification for campus-match")]
struct Cli {
    /// Pin the current year instead of reading the clock
    #[arg(long, global = true, value_name = "YEAR")]
    year: Option<i32>,

    /// Validator config file (defaults to the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Extract and validate a student number from scan text
    Check {
        /// Raw scan text
        text: String,
    },

    /// Print the masked form of a student number
    Mask {
        student_number: String,
    },

    /// Print admission year and year of study
    Standing {
        student_number: String,
    },

    /// Acquire scans and validate them
    Scan {
        /// Read one scan per line from stdin instead of the test-mode stub
        #[arg(long)]
        stdin: bool,
    },

    /// Walk the onboarding flow and print the resulting profile as JSON
    Onboard(OnboardArgs),
}

#[derive(Args, Debug)]
struct OnboardArgs {
    #[arg(long)]
    name: String,

    #[arg(long)]
    major: String,

    /// Year of study; derived from the student number when omitted
    #[arg(long)]
    grade: Option<String>,

    #[arg(long)]
    bio: Option<String>,

    /// Comma separated interests
    #[arg(long, default_value = "")]
    interests: String,

    #[arg(long)]
    phone: Option<String>,

    /// Read scans from stdin instead of the test-mode stub
    #[arg(long)]
    stdin: bool,
}

/// Clock selected on the command line
#[derive(Debug, Clone, Copy)]
enum Clock {
    System(SystemClock),
    Fixed(FixedYear),
}

impl YearSource for Clock {
    fn current_year(&self) -> i32 {
        match self {
            Clock::System(clock) => clock.current_year(),
            Clock::Fixed(clock) => clock.current_year(),
        }
    }
}

type Validator = IdentifierValidator<Clock>;

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_validator(cli: &Cli) -> Result<Validator, Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => ValidatorConfig::load(path)?,
        None => ValidatorConfig::load_or_default()?,
    };
    let clock = match cli.year {
        Some(year) => Clock::Fixed(FixedYear(year)),
        None => Clock::System(SystemClock),
    };
    Ok(IdentifierValidator::with_clock(clock).with_config(config)?)
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging
    init_logging(cli.verbose);

    let validator = build_validator(&cli)?;

    match cli.command {
        Commands::Check { text } => Ok(commands::check(&validator, &text)),
        Commands::Mask { student_number } => {
            println!("{}", validator.mask(&student_number));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Standing { student_number } => commands::standing(&validator, &student_number),
        Commands::Scan { stdin } => commands::scan(&validator, stdin),
        Commands::Onboard(args) => commands::onboard(&validator, args),
    }
}
