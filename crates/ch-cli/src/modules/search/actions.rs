use super::http::{search_companies, search_officers};
use crate::cli_args::*;
use crate::modules::system::{print_json, print_table, CommandContext};

pub(crate) async fn handle_search(args: SearchArgs, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    let api = ctx.api()?;
    match args.command {
        SearchCommand::Companies(args) => {
            let result =
                search_companies(&api, &args.query, args.items_per_page, args.start_index).await?;
            if ctx.output.json {
                return print_json(&result);
            }
            if !ctx.output.plain {
                println!("Found {} results:\n", result.total_results);
            }
            let rows: Vec<Vec<String>> = result
                .items
                .iter()
                .map(|item| {
                    vec![
                        item.company_number.clone(),
                        item.company_name.clone(),
                        or_unknown(&item.company_status),
                    ]
                })
                .collect();
            print_table(ctx.output, &["NUMBER", "NAME", "STATUS"], &rows);
        }
        SearchCommand::Officers(args) => {
            let result =
                search_officers(&api, &args.query, args.items_per_page, args.start_index).await?;
            if ctx.output.json {
                return print_json(&result);
            }
            if !ctx.output.plain {
                println!("Found {} results:\n", result.total_results);
            }
            let rows: Vec<Vec<String>> = result
                .items
                .iter()
                .map(|item| vec![item.name.clone(), or_unknown(&item.officer_role)])
                .collect();
            print_table(ctx.output, &["NAME", "ROLE"], &rows);
        }
    }
    Ok(())
}

fn or_unknown(value: &str) -> String {
    if value.is_empty() {
        "unknown".to_string()
    } else {
        value.to_string()
    }
}
