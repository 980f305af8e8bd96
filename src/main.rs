use clap::{Parser, Subcommand};
use customer_report::ReportService;
use customer_report::engine::schema::AttributeRegistry;
use customer_report::logging;
use customer_report::shared::config::{load_settings, load_settings_from};
use customer_report::shared::path::absolutize;
use tracing::info;

#[derive(Parser)]
#[command(name = "customer_report")]
#[command(about = "Sum-by-group CSV reports over the customer table", long_about = None)]
struct Args {
    /// Settings file (TOML). Defaults to $CUSTOMER_REPORT_CONFIG or ./config.toml
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sum every numeric attribute grouped by FIELD and write the report
    Summary {
        /// Grouping attribute, with or without the F_CU_ prefix
        field: Option<String>,
    },
    /// List the attributes a report can group by or sum
    Attributes {
        /// Only attributes that are summed
        #[arg(long)]
        numeric: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Attributes { numeric } => {
            let registry = AttributeRegistry::customer();
            for attribute in registry.attributes() {
                if numeric && !attribute.is_numeric {
                    continue;
                }
                let kind = if attribute.is_numeric {
                    "numeric"
                } else {
                    "text"
                };
                println!("{}\t{}", attribute.name, kind);
            }
        }
        Command::Summary { field } => {
            let settings = match &args.config {
                Some(path) => load_settings_from(path)?,
                None => load_settings()?,
            };
            logging::init(&settings.logging)?;
            info!("Starting customer report");

            let path = ReportService::from_settings(&settings)
                .and_then(|service| service.summary(field.as_deref().unwrap_or_default()))
                .inspect_err(|e| e.log_error())?;
            println!("{}", absolutize(&path).display());
        }
    }

    Ok(())
}
