use clap::{Args, Subcommand};

#[derive(Args)]
pub struct ChargesArgs {
    #[command(subcommand)]
    pub command: ChargesCommand,
}

#[derive(Subcommand)]
pub enum ChargesCommand {
    #[command(about = "List charges for a company")]
    List(ChargesListArgs),
}

#[derive(Args)]
pub struct ChargesListArgs {
    #[arg(help = "Company number (uses default if omitted)")]
    pub company_number: Option<String>,
    #[arg(long, default_value_t = 25, help = "Results per page")]
    pub items_per_page: i64,
    #[arg(long, default_value_t = 0, help = "Start index for pagination")]
    pub start_index: i64,
}
