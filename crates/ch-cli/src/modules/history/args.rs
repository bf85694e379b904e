use clap::{Args, Subcommand};

#[derive(Args)]
pub struct FilingHistoryArgs {
    #[command(subcommand)]
    pub command: FilingHistoryCommand,
}

#[derive(Subcommand)]
pub enum FilingHistoryCommand {
    #[command(about = "List filing history for a company")]
    List(FilingListArgs),
    #[command(about = "Get a specific filing")]
    Get(FilingGetArgs),
}

#[derive(Args)]
pub struct FilingListArgs {
    #[arg(help = "Company number (uses default if omitted)")]
    pub company_number: Option<String>,
    #[arg(long, help = "Filter by category (e.g. accounts, confirmation-statement)")]
    pub category: Option<String>,
    #[arg(long, default_value_t = 25, help = "Results per page")]
    pub items_per_page: i64,
    #[arg(long, default_value_t = 0, help = "Start index for pagination")]
    pub start_index: i64,
}

#[derive(Args)]
pub struct FilingGetArgs {
    #[arg(help = "Filing transaction id")]
    pub transaction_id: String,
    #[arg(long, help = "Company number (uses default if omitted)")]
    pub company: Option<String>,
}
