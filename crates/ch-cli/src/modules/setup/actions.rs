use std::io::{self, BufRead, Write};

use anyhow::Context;
use ch_core::CompanyProfile;
use serde_json::json;

use crate::modules::company::http::get_company;
use crate::modules::search::search_companies;
use crate::modules::system::{api_key, print_field, print_json, ApiClient, CommandContext};

const SETUP_SEARCH_RESULTS: i64 = 10;

pub(crate) async fn handle_setup(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let profile = run_setup(ctx, &mut input).await?;
    print_summary(ctx, &profile)
}

/// Guided flow: make sure an API key exists, find the company by number or
/// name, and store it as the default.
pub(crate) async fn run_setup(
    ctx: &CommandContext<'_>,
    input: &mut dyn BufRead,
) -> anyhow::Result<CompanyProfile> {
    let key = match api_key(ctx.store) {
        Ok(key) => {
            ctx.reporter.success("API key found.");
            key
        }
        Err(_) => {
            ctx.reporter.info(
                "No API key found. Get one free at https://developer.company-information.service.gov.uk/",
            );
            let key = prompt_line(input, "Enter your Companies House API key: ")?;
            if key.is_empty() {
                anyhow::bail!("API key is required");
            }
            let mut config = ctx.store.read_config()?;
            config.api_key = key.clone();
            ctx.store.write_config(&config).context("save API key")?;
            ctx.reporter.success("API key saved.");
            key
        }
    };

    ctx.reporter.info("Now let's find your company.");
    let query = prompt_line(input, "Enter a company name or number: ")?;
    if query.is_empty() {
        anyhow::bail!("company name or number is required");
    }

    let api = ApiClient::new(ctx.client, ctx.api_url, key);
    let profile = match get_company(&api, &query).await {
        Ok(profile) => profile,
        Err(err) => {
            tracing::debug!("direct lookup failed: {err:#}");
            pick_from_search(ctx, &api, input, &query).await?
        }
    };

    let mut config = ctx.store.read_config()?;
    config.default_company = profile.company_number.clone();
    config.company_name = profile.company_name.clone();
    ctx.store.write_config(&config).context("save config")?;
    Ok(profile)
}

async fn pick_from_search(
    ctx: &CommandContext<'_>,
    api: &ApiClient<'_>,
    input: &mut dyn BufRead,
    query: &str,
) -> anyhow::Result<CompanyProfile> {
    ctx.reporter.info(&format!("Searching for {query:?}..."));
    let results = search_companies(api, query, SETUP_SEARCH_RESULTS, 0).await?;
    if results.items.is_empty() {
        anyhow::bail!("no companies found matching {query:?}");
    }

    let mut stderr = io::stderr().lock();
    writeln!(stderr)?;
    for (index, item) in results.items.iter().enumerate() {
        let status = if item.company_status.is_empty() {
            "unknown"
        } else {
            item.company_status.as_str()
        };
        writeln!(
            stderr,
            "  [{}] {:<10}  {:<45}  {}",
            index + 1,
            item.company_number,
            item.company_name,
            status
        )?;
    }
    drop(stderr);

    let answer = prompt_line(
        input,
        &format!("\nSelect a company (1-{}): ", results.items.len()),
    )?;
    let selected = parse_selection(&answer, results.items.len())?;
    let company_number = &results.items[selected].company_number;
    get_company(api, company_number).await
}

fn parse_selection(answer: &str, count: usize) -> anyhow::Result<usize> {
    match answer.trim().parse::<usize>() {
        Ok(choice) if (1..=count).contains(&choice) => Ok(choice - 1),
        _ => anyhow::bail!("invalid selection"),
    }
}

fn prompt_line(input: &mut dyn BufRead, prompt: &str) -> anyhow::Result<String> {
    let mut stderr = io::stderr();
    write!(stderr, "{prompt}")?;
    stderr.flush()?;
    let mut line = String::new();
    input.read_line(&mut line).context("read input")?;
    Ok(line.trim().to_string())
}

fn print_summary(ctx: &CommandContext<'_>, profile: &CompanyProfile) -> anyhow::Result<()> {
    let address = profile.registered_office.summary_line();
    if ctx.output.json {
        return print_json(&json!({
            "company_number": profile.company_number,
            "company_name": profile.company_name,
            "status": profile.company_status,
            "type": profile.company_type,
            "incorporated": profile.date_of_creation,
            "jurisdiction": profile.jurisdiction,
            "address": address,
            "configured": true,
        }));
    }

    ctx.reporter.success(&format!(
        "Company configured: {} ({})",
        profile.company_name, profile.company_number
    ));
    println!();
    print_field("Company Name:", &profile.company_name);
    print_field("Company Number:", &profile.company_number);
    print_field("Status:", &profile.company_status);
    print_field("Type:", &profile.company_type);
    print_field("Incorporated:", &profile.date_of_creation);
    print_field("Jurisdiction:", &profile.jurisdiction);
    print_field("Address:", &address);
    if !profile.sic_codes.is_empty() {
        print_field("SIC Codes:", &profile.sic_codes.join(", "));
    }
    println!();
    ctx.reporter
        .info("You can now run commands without specifying a company number:");
    ctx.reporter.info("  ch company get");
    ctx.reporter.info("  ch officers list");
    ctx.reporter.info("  ch filing list");
    Ok(())
}
