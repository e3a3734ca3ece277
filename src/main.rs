use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand, ValueEnum};
use school_evaluator::comparison::{compare, ComparisonResult};
use school_evaluator::config::{Config, ConfigOverrides};
use school_evaluator::i18n::{text, Locale, MessageKey};
use school_evaluator::output::csv::{comparison_to_csv, validation_to_csv};
use school_evaluator::output::json::render_json;
use school_evaluator::output::table::{
    render_comparison_table, render_schools_table, render_validation_table,
};
use school_evaluator::school::{validate_pair, SchoolInput, SchoolOverrides, SchoolSlot};
use school_evaluator::server::run_server;
use school_evaluator::store::{SchoolSession, SqliteStore};
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Debug, Parser)]
#[command(
    name = "school-evaluator",
    about = "Compare two schools on cost, ROI and fit"
)]
struct Cli {
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(long)]
    db: Option<String>,
    #[arg(short, long)]
    locale: Option<String>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, clap::Args, Clone, Default)]
struct SchoolArgs {
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    tuition: Option<f64>,
    #[arg(long)]
    scholarship: Option<f64>,
    #[arg(long = "living-cost")]
    living_cost: Option<f64>,
    #[arg(long = "program-length")]
    program_length: Option<f64>,
    #[arg(long = "salary")]
    post_grad_salary: Option<f64>,
    #[arg(long)]
    reputation: Option<f64>,
    #[arg(long)]
    location: Option<f64>,
    #[arg(long = "program-fit")]
    program_fit: Option<f64>,
}

impl From<SchoolArgs> for SchoolOverrides {
    fn from(value: SchoolArgs) -> Self {
        Self {
            name: value.name,
            tuition: value.tuition,
            scholarship: value.scholarship,
            living_cost: value.living_cost,
            program_length: value.program_length,
            post_grad_salary: value.post_grad_salary,
            reputation: value.reputation,
            location: value.location,
            program_fit: value.program_fit,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    Compare {
        #[arg(long)]
        school1: Option<PathBuf>,
        #[arg(long)]
        school2: Option<PathBuf>,
    },
    Set {
        #[arg(value_parser = SchoolSlot::from_str)]
        slot: SchoolSlot,
        #[command(flatten)]
        fields: SchoolArgs,
    },
    Show,
    Validate,
    Reset,
    Export {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    Import {
        file: PathBuf,
    },
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
    },
    Config {
        #[arg(long)]
        init: bool,
        #[arg(long)]
        show: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let mut config = Config::load(Some(&config_path))?;
    config.apply_overrides(ConfigOverrides {
        db_path: cli.db.clone(),
        locale: cli.locale.clone(),
    });

    if matches!(cli.command, Commands::Config { .. }) {
        return handle_config_command(&cli.command, &config, &config_path);
    }
    if let Commands::Serve { host, port } = &cli.command {
        let host = host.clone().unwrap_or_else(|| config.server.host.clone());
        let port = port.unwrap_or(config.server.port);
        let bind = format!("{host}:{port}");
        let addr: SocketAddr = bind
            .parse()
            .map_err(|e| anyhow!("invalid bind address {bind}: {e}"))?;
        return run_server(config, addr).await;
    }

    let locale = config.locale()?;
    let db_path = config.resolved_db_path();
    let mut session = SchoolSession::open(SqliteStore::open(&db_path)?);

    match &cli.command {
        Commands::Compare { school1, school2 } => {
            let school1 = match school1 {
                Some(path) => read_school_file(path)?,
                None => session.school(SchoolSlot::School1).clone(),
            };
            let school2 = match school2 {
                Some(path) => read_school_file(path)?,
                None => session.school(SchoolSlot::School2).clone(),
            };
            warn_field_errors(&school1, &school2, locale);
            match compare(&school1, &school2, locale) {
                Some(result) => print_comparison(&result, locale, cli.output)?,
                None => println!("{}", text(locale, MessageKey::NotReady)),
            }
        }
        Commands::Set { slot, fields } => {
            let overrides: SchoolOverrides = fields.clone().into();
            if overrides.is_empty() {
                warn!("no fields given for {slot}, nothing to update");
            }
            let updated = session.apply(*slot, &overrides)?.clone();
            info!("updated {slot}");
            warn_field_errors(
                session.school(SchoolSlot::School1),
                session.school(SchoolSlot::School2),
                locale,
            );
            match cli.output {
                OutputFormat::Table => {
                    let (school1, school2) = session.schools();
                    println!("{}", render_schools_table(school1, school2, locale));
                }
                OutputFormat::Json => println!("{}", render_json(&updated)?),
                OutputFormat::Csv => {
                    warn!("CSV output for set not implemented, using JSON");
                    println!("{}", render_json(&updated)?);
                }
            }
        }
        Commands::Show => {
            let (school1, school2) = session.schools();
            print_schools(school1, school2, locale, cli.output)?;
        }
        Commands::Validate => {
            let (school1, school2) = session.schools();
            let errors = validate_pair(school1, school2);
            match cli.output {
                OutputFormat::Table if errors.is_empty() => println!("No problems found"),
                OutputFormat::Table => println!("{}", render_validation_table(&errors, locale)),
                OutputFormat::Json => println!("{}", render_json(&errors)?),
                OutputFormat::Csv => println!("{}", validation_to_csv(&errors, locale)?),
            }
        }
        Commands::Reset => {
            session.reset()?;
            println!("Cleared both schools in {}", db_path.display());
        }
        Commands::Export { out } => {
            let rendered = render_json(&session.export(Utc::now()))?;
            match out {
                Some(path) => {
                    fs::write(path, rendered)
                        .with_context(|| format!("failed writing export: {}", path.display()))?;
                    println!("Exported both schools to {}", path.display());
                }
                None => println!("{rendered}"),
            }
        }
        Commands::Import { file } => {
            let raw = fs::read_to_string(file)
                .with_context(|| format!("failed reading import: {}", file.display()))?;
            let document = serde_json::from_str(&raw)
                .with_context(|| format!("import file is not valid JSON: {}", file.display()))?;
            session.import(&document)?;
            println!("Imported both schools from {}", file.display());
        }
        Commands::Serve { .. } | Commands::Config { .. } => {}
    }

    Ok(())
}

fn handle_config_command(command: &Commands, config: &Config, config_path: &Path) -> Result<()> {
    let Commands::Config { init, show } = command else {
        return Ok(());
    };
    if *init {
        Config::write_template(config_path)?;
        println!("Wrote config template to {}", config_path.display());
    }
    if *show || !*init {
        println!("{}", render_json(config)?);
    }
    Ok(())
}

fn read_school_file(path: &Path) -> Result<SchoolInput> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed reading school file: {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("failed parsing school file: {}", path.display()))
}

/// Field problems are advisory; they are reported but never stop a command.
fn warn_field_errors(school1: &SchoolInput, school2: &SchoolInput, locale: Locale) {
    for item in validate_pair(school1, school2) {
        warn!(
            "{} {}: {}",
            item.slot,
            item.error.field,
            item.error.render(locale)
        );
    }
}

fn print_comparison(result: &ComparisonResult, locale: Locale, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", render_comparison_table(result, locale)),
        OutputFormat::Json => println!("{}", render_json(result)?),
        OutputFormat::Csv => println!("{}", comparison_to_csv(result)?),
    }
    Ok(())
}

fn print_schools(
    school1: &SchoolInput,
    school2: &SchoolInput,
    locale: Locale,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Table => println!("{}", render_schools_table(school1, school2, locale)),
        OutputFormat::Json => println!(
            "{}",
            render_json(&json!({ "school1": school1, "school2": school2 }))?
        ),
        OutputFormat::Csv => {
            warn!("CSV output for show not implemented, using JSON");
            println!(
                "{}",
                render_json(&json!({ "school1": school1, "school2": school2 }))?
            );
        }
    }
    Ok(())
}
