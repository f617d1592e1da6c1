use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::*;
use librassetdesk::{
    ApiError, AssetDeskClient, AssetListView, AssetReportView, DateFormatter, ExportFormat,
    FetchOutcome, FilterField,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "assetdesk")]
#[command(about = "AssetDesk CLI - asset list, filtered reports and exports")]
#[command(version)]
#[command(
    long_about = "Command line front end for the AssetDesk IT asset admin panel.
Examples:
  assetdesk assets                              # All assets as cards
  assetdesk report --status live --type Laptop  # Filtered report table
  assetdesk export csv --department IT          # Save assets_report.csv
  assetdesk token set <TOKEN>                   # Store bearer token
  assetdesk debug                               # Config and session info"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List every asset
    Assets,
    /// Show the filtered asset report
    Report(FilterArgs),
    /// Download the filtered report as CSV or PDF
    Export {
        format: FormatArg,
        #[command(flatten)]
        filters: FilterArgs,
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Manage the stored bearer token
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },
    Debug,
}

#[derive(Subcommand)]
enum TokenAction {
    Set { token: String },
    Clear,
    Status,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Csv,
    Pdf,
}

impl From<FormatArg> for ExportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Csv => ExportFormat::Csv,
            FormatArg::Pdf => ExportFormat::Pdf,
        }
    }
}

#[derive(Args)]
struct FilterArgs {
    #[arg(long)]
    department: Option<String>,
    #[arg(long = "type")]
    asset_type: Option<String>,
    #[arg(long)]
    status: Option<String>,
    /// YYYY-MM-DD
    #[arg(long = "from")]
    from_date: Option<String>,
    /// YYYY-MM-DD
    #[arg(long = "to")]
    to_date: Option<String>,
}

impl FilterArgs {
    fn apply(&self, view: &mut AssetReportView) -> Result<(), ApiError> {
        let fields = [
            (FilterField::Department, &self.department),
            (FilterField::AssetType, &self.asset_type),
            (FilterField::Status, &self.status),
            (FilterField::FromDate, &self.from_date),
            (FilterField::ToDate, &self.to_date),
        ];
        for (field, value) in fields {
            if let Some(value) = value {
                view.set_filter(field, value)?;
            }
        }
        Ok(())
    }
}

fn init_logger(verbose: bool) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

fn run(cli: Cli) -> Result<(), ApiError> {
    let client = AssetDeskClient::new()?;
    match cli.command {
        Command::Assets => {
            let token = client.optional_credential()?;
            let mut view = AssetListView::new();
            view.load(&client.asset_list_client()?, token.as_ref());
            println!("{}", "Asset List".bold());
            println!("{}", view.render());
            if let Some(err) = view.last_error() {
                return Err(ApiError::RequestFailed(err.to_string().into()));
            }
        }
        Command::Report(filters) => {
            let token = client.credential()?;
            let mut view = AssetReportView::new();
            filters.apply(&mut view)?;
            let outcome = view.apply_filters(&client.report_client()?, &token);
            println!("{}", "Asset Report".bold());
            println!("{}", view.render(&DateFormatter::local()));
            if outcome == FetchOutcome::Failed {
                let err = view.last_error().unwrap_or("request failed").to_string();
                return Err(ApiError::RequestFailed(err.into()));
            }
        }
        Command::Export {
            format,
            filters,
            out_dir,
        } => {
            let token = client.credential()?;
            let mut view = AssetReportView::new();
            filters.apply(&mut view)?;
            let downloads = client.download_dir(out_dir);
            let path = view.export(&client.report_client()?, &token, format.into(), &downloads)?;
            println!("{} {}", "✓ Saved".green(), path.display());
        }
        Command::Token { action } => match action {
            TokenAction::Set { token } => {
                client.save_token(&token)?;
                println!("{} {:?}", "✓ Token saved to".green(), client.cache_file_path());
            }
            TokenAction::Clear => {
                client.clear_session()?;
                println!("{}", "✓ Session cleared".green());
            }
            TokenAction::Status => match client.check_session()? {
                Some(session) => {
                    let token = session.bearer()?;
                    println!("{}", "✓ SESSION STORED".green().bold());
                    println!("  Token: {}", token.masked());
                    println!("  Saved at: {}", session.timestamp);
                }
                None => {
                    println!("{}", "✗ NO STORED SESSION".red());
                    println!("  Run: assetdesk token set <TOKEN>");
                }
            },
        },
        Command::Debug => {
            println!("{}", librassetdesk::build_info());
            println!("  OS: {}", std::env::consts::OS);
            println!("  Assets URL: {}", client.config.full_assets_url());
            println!("  Report URL: {}", client.config.full_report_url());
            println!("  Export URL: {}", client.config.full_export_url("{format}"));
            println!("  Timeout: {:?}", client.config.request_timeout);
            println!("  Download dir: {:?}", client.download_dir(None).path());
            println!("  Session dir: {:?}", client.session_manager.cache_dir_path());
            println!("  Session file: {:?}", client.cache_file_path());
            println!(
                "  API_TOKEN: {}",
                if client.config.api_token.is_some() { "set" } else { "not set" }
            );
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);
    if let Err(e) = run(cli) {
        eprintln!("{} {}", "❌ Error:".red().bold(), e);
        std::process::exit(1);
    }
}
