//! Toolshare command-line front end.
//!
//! Browses the community tool catalog and submits borrow requests:
//! - list / featured: catalog listing
//! - show: one tool's details
//! - borrow: submit a borrow request
//! - health: catalog service health probe

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::process::ExitCode;
use toolshare::catalog::{
    featured_tools, is_simulated, BorrowRequest, CatalogApi, CatalogClient, Fetched,
    OfflineCatalog, Tool, ToolFilter, FEATURED_COUNT,
};
use toolshare::types::{ToolId, API_BASE_URL_ENV};
use toolshare::{Config, Result};

#[derive(Debug, Parser)]
#[command(name = "toolshare", version, about = "Browse and borrow from the community tool library")]
struct Cli {
    /// Catalog service base URL.
    #[arg(long, global = true, env = API_BASE_URL_ENV)]
    base_url: Option<String>,

    /// Use the built-in offline table instead of the catalog service.
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List tools in the catalog.
    List {
        /// Only show tools that can be borrowed now.
        #[arg(long)]
        available: bool,
        /// Only show tools in this category.
        #[arg(long)]
        category: Option<String>,
        /// Print JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Show one tool.
    Show {
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Show the featured tools.
    Featured,
    /// Request to borrow a tool.
    Borrow {
        #[arg(long)]
        tool: String,
        #[arg(long)]
        requester: String,
        /// First day (YYYY-MM-DD).
        #[arg(long)]
        from: NaiveDate,
        /// Last day (YYYY-MM-DD).
        #[arg(long)]
        to: NaiveDate,
        #[arg(long)]
        note: Option<String>,
    },
    /// Check catalog service health.
    Health,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::from(err.exit_code());
        }
    };
    if let Some(base_url) = cli.base_url {
        config.catalog.base_url = base_url;
    }

    toolshare::observability::init_tracing(&config.observability);

    let result = if cli.offline {
        tracing::info!("running against the offline table");
        run(&OfflineCatalog, cli.command).await
    } else {
        match CatalogClient::new(&config.catalog) {
            Ok(client) => {
                tracing::info!(base_url = client.base_url(), "using catalog service");
                run(&client, cli.command).await
            }
            Err(err) => Err(err),
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

async fn run(catalog: &dyn CatalogApi, command: Command) -> Result<()> {
    match command {
        Command::List {
            available,
            category,
            json,
        } => {
            let fetched = catalog.list_tools().await;
            let filter = ToolFilter {
                available_only: available,
                category,
            };
            let tools: Vec<&Tool> = filter.apply(fetched.value());
            if json {
                println!("{}", serde_json::to_string_pretty(&tools)?);
            } else {
                print_provenance(&fetched);
                for tool in tools {
                    print_row(tool);
                }
            }
        }
        Command::Show { id, json } => {
            let fetched = catalog.get_tool(ToolId::from(id)).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(fetched.value())?);
            } else {
                print_provenance(&fetched);
                let tool = fetched.value();
                println!("{}", tool.name);
                println!("  Category:  {}", tool.category);
                println!("  Condition: {}", tool.condition);
                println!("  Status:    {}", tool.status_label());
            }
        }
        Command::Featured => {
            let fetched = catalog.list_tools().await;
            print_provenance(&fetched);
            for tool in featured_tools(fetched.value(), FEATURED_COUNT) {
                print_row(tool);
            }
        }
        Command::Borrow {
            tool,
            requester,
            from,
            to,
            note,
        } => {
            let mut request = BorrowRequest::new(tool, requester, from, to);
            request.note = note;
            request.validate()?;

            let target = catalog.get_tool(request.tool_id.clone()).await?;
            if !target.value().is_borrowable() {
                tracing::warn!(tool_id = %request.tool_id, "tool is currently unavailable");
            }

            let payload = serde_json::to_value(&request)?;
            let ack = catalog.submit_borrow_request(&payload).await;
            print_ack(&ack);
        }
        Command::Health => {
            let report = catalog.health().await?;
            println!("status:   {:?}", report.status);
            println!("database: {}", report.database);
            if let Some(error) = &report.error {
                println!("error:    {error}");
            }
        }
    }
    Ok(())
}

fn print_row(tool: &Tool) {
    println!(
        "{:>4}  {:<20} {:<24} {}",
        tool.id.as_str(),
        tool.name,
        tool.summary_line(),
        tool.status_label()
    );
}

fn print_provenance<T>(fetched: &Fetched<T>) {
    if let Some(reason) = fetched.fallback_reason() {
        println!("(offline data: {reason})");
    }
}

fn print_ack(ack: &Fetched<Value>) {
    if is_simulated(ack.value()) {
        match ack.fallback_reason() {
            Some(reason) => println!("request accepted (simulated: {reason})"),
            None => println!("request accepted (simulated by the service)"),
        }
    } else {
        println!("request submitted: {}", ack.value());
    }
}
