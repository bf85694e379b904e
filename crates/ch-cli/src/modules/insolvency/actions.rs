use super::http::get_insolvency;
use crate::cli_args::*;
use crate::modules::system::{print_json, resolve_company_number, CommandContext};

pub(crate) async fn handle_insolvency(
    args: InsolvencyArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    match args.command {
        InsolvencyCommand::Get(args) => {
            let company_number = resolve_company_number(ctx.store, args.company_number)?;
            let api = ctx.api()?;
            let result = get_insolvency(&api, &company_number).await?;
            if ctx.output.json {
                return print_json(&result);
            }
            println!("Insolvency Status: {}\n", result.status);
            for case in &result.cases {
                println!("  Case {} ({})", case.number, case.case_type);
                for date in &case.dates {
                    println!("    {:<20} {}", format!("{}:", date.date_type), date.date);
                }
                for practitioner in &case.practitioners {
                    println!(
                        "    Practitioner: {} ({})",
                        practitioner.name, practitioner.role
                    );
                }
                println!();
            }
        }
    }
    Ok(())
}
