use clap::{Args, Subcommand};

#[derive(Args)]
pub struct CompanyArgs {
    #[command(subcommand)]
    pub command: CompanyCommand,
}

#[derive(Subcommand)]
pub enum CompanyCommand {
    #[command(about = "Get company profile")]
    Get(CompanyNumberArgs),
    #[command(about = "Get registered office address")]
    Address(CompanyNumberArgs),
}

#[derive(Args)]
pub struct CompanyNumberArgs {
    #[arg(help = "Company number (uses default if omitted)")]
    pub company_number: Option<String>,
}
