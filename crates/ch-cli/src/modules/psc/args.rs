use clap::{Args, Subcommand};

#[derive(Args)]
pub struct PscArgs {
    #[command(subcommand)]
    pub command: PscCommand,
}

#[derive(Subcommand)]
pub enum PscCommand {
    #[command(about = "List persons with significant control")]
    List(PscListArgs),
}

#[derive(Args)]
pub struct PscListArgs {
    #[arg(help = "Company number (uses default if omitted)")]
    pub company_number: Option<String>,
    #[arg(long, default_value_t = 25, help = "Results per page")]
    pub items_per_page: i64,
    #[arg(long, default_value_t = 0, help = "Start index for pagination")]
    pub start_index: i64,
}
