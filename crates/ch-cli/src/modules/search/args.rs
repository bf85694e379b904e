use clap::{Args, Subcommand};

#[derive(Args)]
pub struct SearchArgs {
    #[command(subcommand)]
    pub command: SearchCommand,
}

#[derive(Subcommand)]
pub enum SearchCommand {
    #[command(about = "Search for companies")]
    Companies(SearchQueryArgs),
    #[command(about = "Search for officers")]
    Officers(SearchQueryArgs),
}

#[derive(Args)]
pub struct SearchQueryArgs {
    #[arg(help = "Search query")]
    pub query: String,
    #[arg(long, default_value_t = 20, help = "Results per page")]
    pub items_per_page: i64,
    #[arg(long, default_value_t = 0, help = "Start index for pagination")]
    pub start_index: i64,
}
