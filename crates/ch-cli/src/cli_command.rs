use crate::cli_args::*;
use crate::modules::auth::handle_auth;
use crate::modules::charges::handle_charges;
use crate::modules::company::handle_company;
use crate::modules::filing::handle_file;
use crate::modules::history::handle_filing_history;
use crate::modules::insolvency::handle_insolvency;
use crate::modules::officers::handle_officers;
use crate::modules::psc::handle_psc;
use crate::modules::search::handle_search;
use crate::modules::setup::handle_setup;
use crate::modules::system::{handle_version, CommandContext};

pub(crate) async fn handle_command(
    command: Command,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    match command {
        Command::Auth(args) => handle_auth(args, ctx).await?,
        Command::Setup => handle_setup(ctx).await?,
        Command::Company(args) => handle_company(args, ctx).await?,
        Command::Search(args) => handle_search(args, ctx).await?,
        Command::Officers(args) => handle_officers(args, ctx).await?,
        Command::Filing(args) => handle_filing_history(args, ctx).await?,
        Command::Psc(args) => handle_psc(args, ctx).await?,
        Command::Charges(args) => handle_charges(args, ctx).await?,
        Command::Insolvency(args) => handle_insolvency(args, ctx).await?,
        Command::File(args) => handle_file(args, ctx).await?,
        Command::Version => handle_version(ctx)?,
    }

    Ok(())
}
