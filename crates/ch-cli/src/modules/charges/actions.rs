use super::http::list_charges;
use crate::cli_args::*;
use crate::modules::system::{print_json, print_table, resolve_company_number, CommandContext};

pub(crate) async fn handle_charges(
    args: ChargesArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    match args.command {
        ChargesCommand::List(args) => {
            let company_number = resolve_company_number(ctx.store, args.company_number)?;
            let api = ctx.api()?;
            let result =
                list_charges(&api, &company_number, args.items_per_page, args.start_index)
                    .await?;
            if ctx.output.json {
                return print_json(&result);
            }
            if !ctx.output.plain {
                println!(
                    "Charges ({} total, {} satisfied):\n",
                    result.total_count, result.satisfied_count
                );
            }
            let rows: Vec<Vec<String>> = result
                .items
                .iter()
                .map(|charge| {
                    vec![
                        charge.charge_code.clone(),
                        charge.status.clone(),
                        charge.delivered_on.clone(),
                        charge.classification_description().to_string(),
                    ]
                })
                .collect();
            print_table(
                ctx.output,
                &["CODE", "STATUS", "DELIVERED", "CLASSIFICATION"],
                &rows,
            );
        }
    }
    Ok(())
}
