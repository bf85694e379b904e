use clap::{Args, Subcommand};

#[derive(Args)]
pub struct InsolvencyArgs {
    #[command(subcommand)]
    pub command: InsolvencyCommand,
}

#[derive(Subcommand)]
pub enum InsolvencyCommand {
    #[command(about = "Get insolvency information for a company")]
    Get(InsolvencyGetArgs),
}

#[derive(Args)]
pub struct InsolvencyGetArgs {
    #[arg(help = "Company number (uses default if omitted)")]
    pub company_number: Option<String>,
}
