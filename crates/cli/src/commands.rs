//! Subcommand handlers.

use anyhow::{Context, Result};
use tokio::sync::broadcast;

use jobtrack_client::{ClientConfig, JobsApi};
use jobtrack_core::{FilterSpec, JobId, JobRecord, JobStatus};
use jobtrack_store::{JobForm, RecordStore, StoreEvent};

use crate::args::{Cli, Command};
use crate::render;

type Store = RecordStore<JobsApi>;

/// Dispatch the parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    let config = match cli.api_url.as_deref().filter(|url| !url.trim().is_empty()) {
        Some(url) => ClientConfig::new(url),
        None => ClientConfig::from_env(),
    };
    tracing::debug!(api_url = %config.api_url, "Using jobs API");

    let mut store = RecordStore::new(JobsApi::from_config(&config));
    let json = cli.json;

    match cli.command {
        Command::List { status, date } => list(&mut store, &status, &date, json).await,
        Command::Add {
            company,
            role,
            date,
            status,
            link,
        } => {
            let status = if status.trim().is_empty() {
                JobStatus::default()
            } else {
                status.parse()?
            };
            let form = JobForm {
                company,
                role,
                status,
                date,
                link,
            };
            add(&mut store, form, json).await
        }
        Command::Status { id, status } => {
            let status: JobStatus = status.parse()?;
            set_status(&mut store, &JobId::from(id), status, json).await
        }
        Command::Delete { id } => delete(&mut store, &JobId::from(id), json).await,
    }
}

async fn list(store: &mut Store, status: &str, date: &str, json: bool) -> Result<()> {
    let spec = FilterSpec::parse(status, date)?;
    store
        .load()
        .await
        .context("Failed to fetch job applications")?;

    let visible = store.visible(&spec);
    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
    } else {
        print!("{}", render::listing(&visible));
    }
    Ok(())
}

async fn add(store: &mut Store, mut form: JobForm, json: bool) -> Result<()> {
    let records = form
        .submit(store)
        .await
        .context("Failed to add job application")?;
    let created = records
        .last()
        .context("Jobs API confirmed the application but returned no record")?;

    print_record(created, json)
}

async fn set_status(store: &mut Store, id: &JobId, status: JobStatus, json: bool) -> Result<()> {
    load_best_effort(store).await;
    let mut events = store.subscribe();

    store
        .set_status(id, status)
        .await
        .with_context(|| format!("Failed to update status of {id}"))?;

    match store.get(id) {
        Some(record) => print_record(record, json),
        None => {
            if json {
                print_events(&mut events)
            } else {
                println!("Status of {id} set to {status}");
                Ok(())
            }
        }
    }
}

async fn delete(store: &mut Store, id: &JobId, json: bool) -> Result<()> {
    load_best_effort(store).await;
    let mut events = store.subscribe();

    store
        .remove(id)
        .await
        .with_context(|| format!("Failed to delete {id}"))?;

    if json {
        print_events(&mut events)
    } else {
        println!("Deleted {id}");
        Ok(())
    }
}

/// Populate the local collection before a mutation. A failure here only
/// means the record will not be found locally; the mutation still goes
/// to the API.
async fn load_best_effort(store: &mut Store) {
    if let Err(e) = store.load().await {
        tracing::warn!(error = %e, "Continuing without a local copy of the applications");
    }
}

fn print_record(record: &JobRecord, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
    } else {
        print!("{}", render::record_block(record));
    }
    Ok(())
}

/// Print every event published since `events` subscribed, as a JSON array.
fn print_events(events: &mut broadcast::Receiver<StoreEvent>) -> Result<()> {
    let mut drained = Vec::new();
    while let Ok(event) = events.try_recv() {
        drained.push(event);
    }
    println!("{}", serde_json::to_string_pretty(&drained)?);
    Ok(())
}
