use clap::{Args, Subcommand};

#[derive(Args)]
pub struct AuthArgs {
    #[command(subcommand)]
    pub command: AuthCommand,
}

#[derive(Subcommand)]
pub enum AuthCommand {
    #[command(about = "Store your Companies House API key")]
    SetKey(SetKeyArgs),
    #[command(about = "Show current auth status")]
    Status,
    #[command(about = "Log in with OAuth2 for filing (opens a browser)")]
    Login(LoginArgs),
    #[command(about = "Forget the stored OAuth2 tokens")]
    Logout,
}

#[derive(Args)]
pub struct SetKeyArgs {
    #[arg(help = "Your Companies House API key")]
    pub key: String,
}

#[derive(Args)]
pub struct LoginArgs {
    #[arg(long, env = "CH_OAUTH_CLIENT_ID", help = "OAuth2 client id (stored for refresh)")]
    pub client_id: Option<String>,
    #[arg(
        long,
        env = "CH_OAUTH_CLIENT_SECRET",
        help = "OAuth2 client secret (stored for refresh)"
    )]
    pub client_secret: Option<String>,
}
