use ch_core::{RegisteredEmailAddressFiling, RegisteredOfficeAddressFiling};
use serde_json::json;

use super::http::{FilingApi, FilingClient};
use super::orchestrator::{file_address, file_email};
use crate::cli_args::*;
use crate::modules::auth::ensure_access_token;
use crate::modules::system::{print_field, print_json, resolve_company_number, CommandContext};

pub(crate) async fn handle_file(args: FileArgs, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    match args.command {
        FileCommand::Address(args) => handle_address(args, ctx).await,
        FileCommand::Email(args) => handle_email(args, ctx).await,
        FileCommand::Status(args) => handle_status(args, ctx).await,
    }
}

async fn filing_client<'a>(ctx: &CommandContext<'a>) -> anyhow::Result<FilingClient<'a>> {
    let access_token = ensure_access_token(ctx.client, &ctx.endpoints.token_url, ctx.store).await?;
    Ok(FilingClient::new(ctx.client, ctx.api_url, access_token))
}

fn address_payload(args: FileAddressArgs) -> RegisteredOfficeAddressFiling {
    RegisteredOfficeAddressFiling {
        address_line_1: args.address_line1,
        address_line_2: args.address_line2.unwrap_or_default(),
        locality: args.locality,
        region: args.region.unwrap_or_default(),
        postal_code: args.postal_code,
        country: args.country.unwrap_or_default(),
    }
}

async fn handle_address(args: FileAddressArgs, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    let company_number = resolve_company_number(ctx.store, args.company_number.clone())?;
    let address = address_payload(args);
    let api = filing_client(ctx).await?;
    let outcome = file_address(&api, ctx.reporter, &company_number, &address).await?;

    if ctx.output.json {
        return print_json(&json!({
            "transaction_id": outcome.transaction_id,
            "status": outcome.status,
            "company_number": company_number,
            "address": address,
        }));
    }

    ctx.reporter.success(&format!(
        "Address change filed successfully (transaction: {})",
        outcome.transaction_id
    ));
    print_field("Transaction:", &outcome.transaction_id);
    print_field("Status:", &outcome.status);
    print_field("Company:", &company_number);
    print_field("New Address:", &address.address_line_1);
    if !address.address_line_2.is_empty() {
        print_field("", &address.address_line_2);
    }
    print_field("", &format!("{} {}", address.locality, address.postal_code));
    Ok(())
}

async fn handle_email(args: FileEmailArgs, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    let company_number = resolve_company_number(ctx.store, args.company_number)?;
    let email = args.email.trim().to_string();
    if email.is_empty() {
        anyhow::bail!("email address is required");
    }
    let payload = RegisteredEmailAddressFiling {
        registered_email_address: email,
    };
    let api = filing_client(ctx).await?;
    let outcome = file_email(&api, ctx.reporter, &company_number, &payload).await?;

    if ctx.output.json {
        return print_json(&json!({
            "transaction_id": outcome.transaction_id,
            "status": outcome.status,
            "company_number": company_number,
            "email": payload.registered_email_address,
        }));
    }

    ctx.reporter.success(&format!(
        "Email change filed successfully (transaction: {})",
        outcome.transaction_id
    ));
    print_field("Transaction:", &outcome.transaction_id);
    print_field("Status:", &outcome.status);
    print_field("Company:", &company_number);
    print_field("New Email:", &payload.registered_email_address);
    Ok(())
}

async fn handle_status(args: FileStatusArgs, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    let api = filing_client(ctx).await?;
    let transaction = api
        .get_transaction(&args.transaction_id)
        .await
        .map_err(|err| err.context("get transaction"))?;

    if ctx.output.json {
        return print_json(&transaction);
    }
    print_field("Transaction:", &transaction.id);
    print_field("Status:", &transaction.status);
    print_field("Company:", &transaction.company_number);
    print_field("Description:", &transaction.description);
    if !transaction.reference.is_empty() {
        print_field("Reference:", &transaction.reference);
    }
    Ok(())
}
