use crate::infra::build_engine;
use crate::present::{render_programs, render_response, OutputFormat};
use crate::server;
use clap::{Args, Parser, Subcommand};
use parcel_rules::classification::router::ProgramSummary;
use parcel_rules::classification::{ClassifyOptions, Destination, RawMeasurement, RawQuantity};
use parcel_rules::config::AppConfig;
use parcel_rules::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Parcel Channel Classifier",
    about = "Classify parcels against carrier channel catalogs from the command line or over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Classify one parcel and print every channel's verdict
    Classify(ClassifyArgs),
    /// List the registered programs and their channels
    Programs,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
pub(crate) struct ClassifyArgs {
    /// Program code such as US-FBM or DE-FBA (defaults to APP_DEFAULT_PROGRAM)
    #[arg(long, short)]
    pub(crate) program: Option<String>,
    /// Length, optionally suffixed with cm or in
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) length: String,
    /// Width, optionally suffixed with cm or in
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) width: String,
    /// Height, optionally suffixed with cm or in
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) height: String,
    /// Actual weight, optionally suffixed with kg or lb
    #[arg(long, allow_hyphen_values = true)]
    pub(crate) weight: String,
    /// Destination region for destination-priced channels (other, at, hr)
    #[arg(long, default_value = "other", value_parser = str::parse::<Destination>)]
    pub(crate) destination: Destination,
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub(crate) format: OutputFormat,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Classify(args) => run_classify(args),
        Command::Programs => run_programs(),
    }
}

fn run_classify(args: ClassifyArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = build_engine(&config.classifier);

    let program = args
        .program
        .unwrap_or_else(|| engine.default_program().code().to_string());
    let raw = RawMeasurement::new(
        RawQuantity::Text(args.length),
        RawQuantity::Text(args.width),
        RawQuantity::Text(args.height),
        RawQuantity::Text(args.weight),
    );
    let options = ClassifyOptions {
        destination: args.destination,
    };

    let response = engine.classify_raw(&program, &raw, &options)?;
    render_response(&response, args.format, &mut std::io::stdout().lock())
}

fn run_programs() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = build_engine(&config.classifier);
    let programs: Vec<ProgramSummary> = engine
        .catalog()
        .profiles()
        .map(ProgramSummary::from)
        .collect();

    render_programs(
        engine.default_program().code(),
        &programs,
        &mut std::io::stdout().lock(),
    )
}
