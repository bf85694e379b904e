use clap::{Args, Subcommand};

#[derive(Args)]
pub struct OfficersArgs {
    #[command(subcommand)]
    pub command: OfficersCommand,
}

#[derive(Subcommand)]
pub enum OfficersCommand {
    #[command(about = "List officers for a company")]
    List(OfficersListArgs),
}

#[derive(Args)]
pub struct OfficersListArgs {
    #[arg(help = "Company number (uses default if omitted)")]
    pub company_number: Option<String>,
    #[arg(long, default_value_t = 50, help = "Results per page")]
    pub items_per_page: i64,
    #[arg(long, default_value_t = 0, help = "Start index for pagination")]
    pub start_index: i64,
}
