use ch_core::DEFAULT_API_URL;
use clap::{ArgAction, Parser, Subcommand};

pub use crate::modules::auth::args::*;
pub use crate::modules::charges::args::*;
pub use crate::modules::company::args::*;
pub use crate::modules::filing::args::*;
pub use crate::modules::history::args::*;
pub use crate::modules::insolvency::args::*;
pub use crate::modules::officers::args::*;
pub use crate::modules::psc::args::*;
pub use crate::modules::search::args::*;

#[derive(Parser)]
#[command(name = "ch")]
#[command(about = "Companies House CLI")]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "CH_JSON",
        conflicts_with = "plain",
        help = "Output JSON to stdout (best for scripting)"
    )]
    pub json: bool,
    #[arg(
        long,
        global = true,
        env = "CH_PLAIN",
        help = "Output stable, parseable text to stdout"
    )]
    pub plain: bool,
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
    #[arg(long, global = true, env = "CH_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,
    #[arg(long, global = true, env = "CH_IDENTITY_URL")]
    pub identity_url: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Manage API key and filing authentication")]
    Auth(AuthArgs),
    #[command(about = "Set up a default company (interactive guided flow)")]
    Setup,
    #[command(about = "Company profile and registered office")]
    Company(CompanyArgs),
    #[command(about = "Search companies and officers")]
    Search(SearchArgs),
    #[command(about = "List company officers")]
    Officers(OfficersArgs),
    #[command(about = "Filing history")]
    Filing(FilingHistoryArgs),
    #[command(about = "Persons with significant control")]
    Psc(PscArgs),
    #[command(about = "Company charges (mortgages and securities)")]
    Charges(ChargesArgs),
    #[command(about = "Insolvency information")]
    Insolvency(InsolvencyArgs),
    #[command(about = "File changes (registered address, email); requires ch auth login")]
    File(FileArgs),
    #[command(about = "Print version")]
    Version,
}
