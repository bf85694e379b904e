use clap::{Args, Subcommand};

#[derive(Args)]
pub struct FileArgs {
    #[command(subcommand)]
    pub command: FileCommand,
}

#[derive(Subcommand)]
pub enum FileCommand {
    #[command(about = "File a change of registered office address")]
    Address(FileAddressArgs),
    #[command(about = "File a change of registered email address")]
    Email(FileEmailArgs),
    #[command(about = "Show a filing transaction")]
    Status(FileStatusArgs),
}

#[derive(Args)]
pub struct FileAddressArgs {
    #[arg(help = "Company number (uses default if omitted)")]
    pub company_number: Option<String>,
    #[arg(long = "address-line1", help = "Address line 1")]
    pub address_line1: String,
    #[arg(long = "address-line2", help = "Address line 2")]
    pub address_line2: Option<String>,
    #[arg(long, help = "Town or city")]
    pub locality: String,
    #[arg(long, help = "County or region")]
    pub region: Option<String>,
    #[arg(long, help = "Postal code")]
    pub postal_code: String,
    #[arg(long, help = "Country")]
    pub country: Option<String>,
}

#[derive(Args)]
pub struct FileEmailArgs {
    #[arg(help = "Company number (uses default if omitted)")]
    pub company_number: Option<String>,
    #[arg(long, help = "New registered email address")]
    pub email: String,
}

#[derive(Args)]
pub struct FileStatusArgs {
    #[arg(help = "Transaction id")]
    pub transaction_id: String,
}
