use ch_core::CompanyProfile;

use super::http::{get_company, get_registered_office};
use crate::cli_args::*;
use crate::modules::system::{print_field, print_json, resolve_company_number, CommandContext};

pub(crate) async fn handle_company(
    args: CompanyArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    match args.command {
        CompanyCommand::Get(args) => {
            let company_number = resolve_company_number(ctx.store, args.company_number)?;
            let api = ctx.api()?;
            let profile = get_company(&api, &company_number).await?;
            if ctx.output.json {
                return print_json(&profile);
            }
            print_profile(&profile);
        }
        CompanyCommand::Address(args) => {
            let company_number = resolve_company_number(ctx.store, args.company_number)?;
            let api = ctx.api()?;
            let address = get_registered_office(&api, &company_number).await?;
            if ctx.output.json {
                return print_json(&address);
            }
            println!("{}", address.full_line());
        }
    }
    Ok(())
}

fn print_profile(profile: &CompanyProfile) {
    print_field("Company Name:", &profile.company_name);
    print_field("Company Number:", &profile.company_number);
    print_field("Status:", &profile.company_status);
    print_field("Type:", &profile.company_type);
    print_field("Incorporated:", &profile.date_of_creation);
    if !profile.date_of_cessation.is_empty() {
        print_field("Ceased:", &profile.date_of_cessation);
    }
    print_field("Jurisdiction:", &profile.jurisdiction);
    print_field("Address:", &profile.registered_office.summary_line());
    if !profile.sic_codes.is_empty() {
        print_field("SIC Codes:", &profile.sic_codes.join(", "));
    }
    if let Some(due) = profile
        .accounts
        .as_ref()
        .and_then(|accounts| accounts.next_due.as_deref())
    {
        print_field("Accounts Due:", due);
    }
    if let Some(due) = profile
        .confirmation_statement
        .as_ref()
        .and_then(|statement| statement.next_due.as_deref())
    {
        print_field("Confirmation Due:", due);
    }
}
