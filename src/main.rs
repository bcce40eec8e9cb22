use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use futures::TryStreamExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

// Use library instead of local modules
use employee_service::config::DEFAULT_DATABASE;
use employee_service::{
    load_csv, logging, EmployeeDto, EmployeeService, SqliteEmployeeRepository,
};

/// Administration tool for the employee store
#[derive(Parser, Debug)]
#[command(name = "employee-service", version)]
struct Cli {
    /// Database file
    #[arg(long, env = "EMPLOYEE_DB", default_value = DEFAULT_DATABASE, global = true)]
    database: PathBuf,

    /// Debug level logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the database and schema
    Init,
    /// Import employees from a CSV file (header: firstName,lastName,email)
    Import {
        /// CSV file to read
        csv: PathBuf,
    },
    /// Print every stored employee as one JSON document per line
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    match cli.command {
        Command::Init => run_init(&cli.database).await,
        Command::Import { csv } => run_import(&cli.database, &csv).await,
        Command::List => run_list(&cli.database).await,
    }
}

fn open_service(database: &Path) -> Result<(EmployeeService, SqliteEmployeeRepository)> {
    let repository = SqliteEmployeeRepository::open(database)
        .with_context(|| format!("Failed to open database {}", database.display()))?;
    let service = EmployeeService::new(Arc::new(repository.clone()));
    Ok((service, repository))
}

async fn run_init(database: &Path) -> Result<()> {
    let (_, repository) = open_service(database)?;
    let count = repository.count().await?;

    println!("✓ Database initialized with WAL mode: {}", database.display());
    println!("✓ Employees stored: {}", count);
    Ok(())
}

async fn run_import(database: &Path, csv_path: &Path) -> Result<()> {
    println!("📂 Loading CSV...");
    let employees: Vec<EmployeeDto> = load_csv(csv_path)
        .with_context(|| format!("Failed to read {}", csv_path.display()))?;
    println!("✓ Loaded {} employees from CSV", employees.len());

    let (service, repository) = open_service(database)?;

    println!("💾 Inserting employees...");
    let inserted = service.import_employees(employees).await?;
    let count = repository.count().await?;

    println!("✓ Inserted: {} employees", inserted);
    println!("✓ Database contains {} employees", count);
    Ok(())
}

async fn run_list(database: &Path) -> Result<()> {
    let (service, _) = open_service(database)?;

    let employees: Vec<EmployeeDto> = service.get_all_employees().try_collect().await?;
    for employee in &employees {
        println!("{}", serde_json::to_string(employee)?);
    }

    tracing::debug!(count = employees.len(), "listed employees");
    Ok(())
}
