use super::http::list_officers;
use crate::cli_args::*;
use crate::modules::system::{print_json, print_table, resolve_company_number, CommandContext};

pub(crate) async fn handle_officers(
    args: OfficersArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    match args.command {
        OfficersCommand::List(args) => {
            let company_number = resolve_company_number(ctx.store, args.company_number)?;
            let api = ctx.api()?;
            let result =
                list_officers(&api, &company_number, args.items_per_page, args.start_index)
                    .await?;
            if ctx.output.json {
                return print_json(&result);
            }
            if !ctx.output.plain {
                println!(
                    "Officers ({} active, {} resigned):\n",
                    result.active_count, result.resigned_count
                );
            }
            let rows: Vec<Vec<String>> = result
                .items
                .iter()
                .map(|officer| {
                    vec![
                        officer.name.clone(),
                        officer.officer_role.clone(),
                        officer.appointed_on.clone(),
                        officer.resigned_on.clone(),
                    ]
                })
                .collect();
            print_table(
                ctx.output,
                &["NAME", "ROLE", "APPOINTED", "RESIGNED"],
                &rows,
            );
        }
    }
    Ok(())
}
