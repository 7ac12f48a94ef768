use finance_tracker::{Ledger, Transaction, Amount,
    auth::{self, Authenticator},
    config::TrackerConfig,
    logging,
    report::{CategorySummary, MonthlySummary}};

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use anyhow::Context;
use chrono::NaiveDate;
use colored::Colorize;
use clap::{ArgAction, Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[clap(version, about, propagate_version = true)]
struct Cli {
    /// TOML configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Ledger file to operate on, overrides the configuration
    #[clap(short, long, value_parser)]
    file: Option<PathBuf>,

    /// More output; repeat for more detail
    #[clap(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Action to perform
    #[clap(subcommand)]
    action: Subcommands,
}

#[derive(Debug, Subcommand)]
enum Subcommands {
    /// Record a new transaction
    Add(AddTransaction),
    /// List transactions, optionally filtered
    List(ListTransactions),
    /// Summarise transactions per category or per month
    Report {
        #[clap(short, long)]
        monthly: bool
    },
    /// List the categories in use
    Categories,
    /// Record a sample salary, save and reload it
    Demo,
    /// Prompt for credentials and try to authenticate
    Login,
}

impl Subcommands {
    /// Whether the stored transactions are needed before running.
    fn reads_ledger(&self) -> bool {
        !matches!(self, Subcommands::Login)
    }
}

#[derive(Args, Debug)]
struct AddTransaction {
    #[clap(short='a', long, value_parser, allow_hyphen_values = true)]
    amount: Amount,

    /// Date as YYYY-MM-DD
    #[clap(short='d', long, value_parser)]
    date: NaiveDate,

    #[clap(short='c', long, value_parser)]
    category: String,
}

#[derive(Args, Debug)]
struct ListTransactions {
    /// Only transactions in exactly this category
    #[clap(short, long, value_parser)]
    category: Option<String>,

    /// Earliest date to include
    #[clap(long, value_parser)]
    from: Option<NaiveDate>,

    /// Latest date to include
    #[clap(long, value_parser)]
    to: Option<NaiveDate>,
}

impl ListTransactions {
    fn select<'a>(&self, ledger: &'a Ledger) -> Vec<&'a Transaction> {
        match &self.category {
            Some(category) => ledger.filter_by_category(category)
                .into_iter()
                .filter(|t| t.dated_within(self.from, self.to))
                .collect(),
            None => ledger.filter_by_date_range(self.from, self.to),
        }
    }
}

fn print_transactions<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) {
    for t in transactions {
        println!("{}", t);
    }
}

fn load_config(args: &Cli) -> anyhow::Result<TrackerConfig> {
    let mut config = match &args.config {
        Some(path) => TrackerConfig::read(path)?,
        None => TrackerConfig::default(),
    };
    if let Some(file) = &args.file {
        config.data_file = file.clone();
    }
    Ok(config)
}

fn login() -> anyhow::Result<ExitCode> {
    let credentials = auth::prompt_credentials(&mut io::stdin().lock(), &mut io::stdout())?;
    if let Err(err) = auth::Unimplemented.authenticate(&credentials) {
        eprintln!("{}", err.to_string().bright_red());
        return Ok(ExitCode::FAILURE);
    }
    println!("Welcome, {}.", credentials.username);
    Ok(ExitCode::SUCCESS)
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Cli::parse();
    logging::init(args.verbose);

    let config = load_config(&args)?;
    let data_file = config.data_file.display().to_string();
    let mut ledger = config.ledger();
    if args.action.reads_ledger() {
        ledger.load()
            .with_context(|| format!("failed to load {}", data_file))?;
    }

    match args.action {
        Subcommands::Add(add) => {
            if let Err(err) = ledger.add(add.amount, add.date, &add.category) {
                eprintln!("{}", err.to_string().bright_red());
                return Ok(ExitCode::FAILURE);
            }
            ledger.save()
                .with_context(|| format!("failed to save {}", data_file))?;
            println!("Transaction added.");
        },
        Subcommands::List(list) => {
            print_transactions(list.select(&ledger));
        },
        Subcommands::Report { monthly } => {
            if monthly {
                for month in ledger.generate_report(&MonthlySummary) {
                    println!("{}", month);
                }
            } else {
                println!("{}", ledger.generate_report(&CategorySummary));
            }
        },
        Subcommands::Categories => {
            for category in ledger.categories() {
                println!("{}", category);
            }
        },
        Subcommands::Demo => {
            let date = NaiveDate::from_ymd_opt(2024, 1, 1)
                .context("invalid demo date")?;
            ledger.add(1000.0, date, "Salary")?;
            ledger.save()
                .with_context(|| format!("failed to save {}", data_file))?;
            ledger.load()
                .with_context(|| format!("failed to reload {}", data_file))?;
            print_transactions(ledger.transactions());
        },
        Subcommands::Login => return login(),
    }

    Ok(ExitCode::SUCCESS)
}
