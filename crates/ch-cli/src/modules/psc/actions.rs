use super::http::list_pscs;
use crate::cli_args::*;
use crate::modules::system::{print_json, resolve_company_number, CommandContext};

pub(crate) async fn handle_psc(args: PscArgs, ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    match args.command {
        PscCommand::List(args) => {
            let company_number = resolve_company_number(ctx.store, args.company_number)?;
            let api = ctx.api()?;
            let result =
                list_pscs(&api, &company_number, args.items_per_page, args.start_index).await?;
            if ctx.output.json {
                return print_json(&result);
            }
            if ctx.output.plain {
                for psc in &result.items {
                    println!(
                        "{}\t{}\t{}\t{}",
                        psc.name,
                        psc.notified_on,
                        psc.ceased_on,
                        psc.natures_of_control.join(";")
                    );
                }
                return Ok(());
            }
            println!(
                "Persons with Significant Control ({} active, {} ceased):\n",
                result.active_count, result.ceased_count
            );
            for psc in &result.items {
                let ceased = if psc.ceased_on.is_empty() {
                    String::new()
                } else {
                    format!(" (ceased {})", psc.ceased_on)
                };
                println!("  {:<40}  notified {}{}", psc.name, psc.notified_on, ceased);
                if !psc.natures_of_control.is_empty() {
                    println!("    Controls: {}", psc.natures_of_control.join("; "));
                }
            }
        }
    }
    Ok(())
}
