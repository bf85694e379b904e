use super::http::{get_filing_history_item, list_filing_history};
use crate::cli_args::*;
use crate::modules::system::{
    print_field, print_json, print_table, resolve_company_number, CommandContext,
};

pub(crate) async fn handle_filing_history(
    args: FilingHistoryArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    match args.command {
        FilingHistoryCommand::List(args) => {
            let company_number = resolve_company_number(ctx.store, args.company_number)?;
            let api = ctx.api()?;
            let result = list_filing_history(
                &api,
                &company_number,
                args.category,
                args.items_per_page,
                args.start_index,
            )
            .await?;
            if ctx.output.json {
                return print_json(&result);
            }
            if !ctx.output.plain {
                println!("Filing History ({} total):\n", result.total_count);
            }
            let rows: Vec<Vec<String>> = result
                .items
                .iter()
                .map(|item| {
                    vec![
                        item.date.clone(),
                        item.category.clone(),
                        item.transaction_id.clone(),
                        item.description.clone(),
                    ]
                })
                .collect();
            print_table(
                ctx.output,
                &["DATE", "CATEGORY", "TRANSACTION", "DESCRIPTION"],
                &rows,
            );
        }
        FilingHistoryCommand::Get(args) => {
            let company_number = resolve_company_number(ctx.store, args.company)?;
            let api = ctx.api()?;
            let item = get_filing_history_item(&api, &company_number, &args.transaction_id).await?;
            if ctx.output.json {
                return print_json(&item);
            }
            print_field("Transaction:", &item.transaction_id);
            print_field("Date:", &item.date);
            print_field("Category:", &item.category);
            print_field("Type:", &item.filing_type);
            print_field("Description:", &item.description);
        }
    }
    Ok(())
}
