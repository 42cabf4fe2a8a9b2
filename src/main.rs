//! County Atlas CLI
//!
//! Terminal front end for the county API:
//! - Dashboard (county table plus ranked indicator chart)
//! - County listing and detail
//! - Indicator series and indicator catalogue
//! - Config file generation

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use county_atlas::config::{generate_default_config, Config, LoggingConfig};
use county_atlas::model::chart_title;
use county_atlas::view::text::{render_chart, render_table};
use county_atlas::{
    ApiClient, ChartModel, CountiesSource, Dashboard, IndicatorSource, LoadError, Presentation,
    RemoteStore, TableModel,
};

#[derive(Parser)]
#[command(name = "county-atlas")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Kenyan county reference data and indicator statistics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API base URL, including the /api/v1 prefix
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Config file (default: platform config dir, then ./county-atlas.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the county table and the ranked indicator chart
    Dashboard {
        /// Filter counties by name, code or former province
        #[arg(short, long, default_value = "")]
        search: String,
        /// Number of chart bars
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// List counties
    Counties {
        /// Filter counties by name, code or former province
        #[arg(short, long, default_value = "")]
        search: String,
    },

    /// Show one county
    County {
        /// County id
        id: i64,
    },

    /// Show a ranked indicator series
    Series {
        /// Indicator code (default from config, POP_TOTAL)
        #[arg(short, long)]
        indicator: Option<String>,
        /// Year (default from config, 2019)
        #[arg(short, long)]
        year: Option<i32>,
        /// Number of points
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// List available indicators
    Indicators,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("loading config from {:?}", path))?,
        None => Config::load_default().context("loading default config")?,
    };
    if let Some(url) = &cli.api_url {
        config.api.base_url = url.clone();
    }

    init_logging(&config.logging);
    tracing::debug!(api = %config.api.base_url, "County Atlas v{}", env!("CARGO_PKG_VERSION"));

    if let Commands::Config { output } = &cli.command {
        let content = generate_default_config();
        match output {
            Some(path) => {
                std::fs::write(path, content)
                    .with_context(|| format!("writing config to {:?}", path))?;
                println!("Config written to {:?}", path);
            }
            None => print!("{}", content),
        }
        return Ok(ExitCode::SUCCESS);
    }

    let client = Arc::new(ApiClient::new(&config.api).context("building HTTP client")?);

    let outcome = match cli.command {
        Commands::Dashboard { search, top } => {
            let mut indicator = config.indicator.clone();
            if let Some(top) = top {
                indicator.top_n = top;
            }
            let dashboard = Dashboard::new(client, &indicator);
            dashboard.load_all().await;

            let snapshot = dashboard.snapshot();
            match snapshot.presentation() {
                Presentation::Loading => {
                    println!("Loading...");
                    Ok(())
                }
                Presentation::Error(e) => Err(e.clone()),
                Presentation::Ready => {
                    let table = snapshot.table(&search);
                    let chart = snapshot.chart();
                    print_dashboard(cli.format, &table, &chart)?;
                    Ok(())
                }
            }
        }

        Commands::Counties { search } => {
            let store = RemoteStore::new(CountiesSource::new(client));
            store.load().await;

            let slice = store.snapshot();
            match slice.error {
                Some(e) => Err(e),
                None => {
                    let table = TableModel::build(&slice.items, &search);
                    match cli.format {
                        OutputFormat::Table => print!("{}", render_table(&table)),
                        OutputFormat::Json => {
                            println!("{}", serde_json::to_string_pretty(&table.rows)?)
                        }
                        OutputFormat::Csv => print_csv(&table.rows)?,
                    }
                    Ok(())
                }
            }
        }

        Commands::County { id } => match client.fetch_county(id).await {
            Ok(county) => {
                match cli.format {
                    OutputFormat::Table => {
                        println!("{} ({})", county.name, county.code);
                        println!();
                        println!("  Id:               {}", county.id);
                        println!("  Former province:  {}", county.province_label());
                        println!("  Area (km²):       {}", county.area_label());
                    }
                    OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&county)?),
                    OutputFormat::Csv => print_csv(std::slice::from_ref(&county))?,
                }
                Ok(())
            }
            Err(e) => Err(LoadError::from(e)),
        },

        Commands::Series {
            indicator,
            year,
            top,
        } => {
            let code = indicator.unwrap_or(config.indicator.code);
            let year = year.unwrap_or(config.indicator.year);
            let top_n = top.unwrap_or(config.indicator.top_n);

            let store = RemoteStore::new(IndicatorSource::new(client, code.clone(), year, top_n));
            store.load().await;

            let slice = store.snapshot();
            match slice.error {
                Some(e) => Err(e),
                None => {
                    let chart =
                        ChartModel::from_points(chart_title(&code, year), &slice.items, top_n);
                    match cli.format {
                        OutputFormat::Table => print!("{}", render_chart(&chart)),
                        OutputFormat::Json => {
                            println!("{}", serde_json::to_string_pretty(&slice.items)?)
                        }
                        OutputFormat::Csv => print_csv(&chart.bars)?,
                    }
                    Ok(())
                }
            }
        }

        Commands::Indicators => match client.fetch_indicators().await {
            Ok(indicators) => {
                match cli.format {
                    OutputFormat::Table => {
                        if indicators.is_empty() {
                            println!("No indicators available.");
                        } else {
                            println!("{:<16} {:<32} {}", "Code", "Name", "Unit");
                            println!("{}", "-".repeat(60));
                            for indicator in &indicators {
                                println!(
                                    "{:<16} {:<32} {}",
                                    indicator.code,
                                    indicator.name,
                                    indicator.unit.as_deref().unwrap_or("-")
                                );
                            }
                        }
                    }
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&indicators)?)
                    }
                    OutputFormat::Csv => print_csv(&indicators)?,
                }
                Ok(())
            }
            Err(e) => Err(LoadError::from(e)),
        },

        Commands::Config { .. } => Ok(()),
    };

    match outcome {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

fn init_logging(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| format!("county_atlas={}", config.level)),
    );
    let registry = tracing_subscriber::registry().with(filter);

    // stdout carries command output, so logs go to stderr
    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn print_dashboard(format: OutputFormat, table: &TableModel, chart: &ChartModel) -> anyhow::Result<()> {
    match format {
        OutputFormat::Table => {
            print!("{}", render_table(table));
            println!();
            print!("{}", render_chart(chart));
        }
        OutputFormat::Json => {
            let body = serde_json::json!({
                "counties": table.rows,
                "summary": table.summary(),
                "chart": chart,
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputFormat::Csv => {
            print_csv(&table.rows)?;
            println!();
            print_csv(&chart.bars)?;
        }
    }
    Ok(())
}

fn print_csv<T: Serialize>(rows: &[T]) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}
