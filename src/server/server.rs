mod error;
mod server_config;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use clap::Parser;
use serde::Deserialize;
use tokio::sync::Mutex;

use finance_tracker::{logging, Ledger, Transaction, report::{CategoryReport, CategorySummary}};

use error::ServerError;
use server_config::AppConfig;

const SERVER_CONFIG: &str = "resources/server.toml";

type SharedLedger = Arc<Mutex<Ledger>>;

#[derive(Parser, Debug)]
#[clap(version, about = "Serve a transaction ledger over HTTP")]
struct Cli {
    /// Server configuration file
    #[clap(short, long, value_parser, default_value = SERVER_CONFIG)]
    config: PathBuf,

    /// More output; repeat for more detail
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Deserialize)]
struct CategoryQuery {
    category: Option<String>
}

async fn list_transactions(
    State(ledger): State<SharedLedger>,
    Query(query): Query<CategoryQuery>
) -> Json<Vec<Transaction>> {
    let ledger = ledger.lock().await;
    let selected = match &query.category {
        Some(category) => ledger.filter_by_category(category).into_iter().cloned().collect(),
        None => ledger.transactions().to_vec()
    };
    Json(selected)
}

async fn get_transaction(
    State(ledger): State<SharedLedger>,
    Path(index): Path<usize>
) -> Result<Json<Transaction>, ServerError> {
    let ledger = ledger.lock().await;
    ledger.get(index)
        .cloned()
        .map(Json)
        .ok_or_else(|| ServerError::NotFound(format!("transaction {}", index)))
}

async fn add_transaction(
    State(ledger): State<SharedLedger>,
    Json(transaction): Json<Transaction>
) -> Result<(StatusCode, Json<Transaction>), ServerError> {
    let mut ledger = ledger.lock().await;
    ledger.add(transaction.amount, transaction.date, &transaction.category)
        .map_err(ServerError::Rejected)?;
    if let Err(err) = ledger.save() {
        ledger.discard_last();
        return Err(err.into());
    }
    Ok((StatusCode::CREATED, Json(transaction)))
}

async fn reload(State(ledger): State<SharedLedger>) -> Result<Json<serde_json::Value>, ServerError> {
    let mut ledger = ledger.lock().await;
    ledger.load()?;
    Ok(Json(serde_json::json!({ "transactions": ledger.len() })))
}

async fn report(State(ledger): State<SharedLedger>) -> Json<CategoryReport> {
    let ledger = ledger.lock().await;
    Json(ledger.generate_report(&CategorySummary))
}

fn router(ledger: SharedLedger) -> Router {
    Router::new()
        .route("/transactions", get(list_transactions).post(add_transaction))
        .route("/transactions/:index", get(get_transaction))
        .route("/reload", post(reload))
        .route("/report", get(report))
        .with_state(ledger)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    logging::init(args.verbose);

    let config = AppConfig::read(&args.config)?;

    let mut ledger = config.tracker.ledger();
    ledger.load()
        .with_context(|| format!("failed to load {}", config.tracker.data_file.display()))?;

    let listener = tokio::net::TcpListener::bind(&config.listen).await
        .with_context(|| format!("failed to bind {}", config.listen))?;
    log::info!("serving {} transactions on {}", ledger.len(), config.listen);

    axum::serve(listener, router(Arc::new(Mutex::new(ledger)))).await?;
    Ok(())
}
