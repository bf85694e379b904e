use serde_json::json;

use super::output::print_json;
use super::types::CommandContext;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const BUILD_COMMIT: Option<&str> = option_env!("CH_BUILD_COMMIT");
const BUILD_DATE: Option<&str> = option_env!("CH_BUILD_DATE");

pub(crate) fn handle_version(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    if ctx.output.json {
        return print_json(&json!({
            "version": VERSION,
            "commit": BUILD_COMMIT.unwrap_or_default().trim(),
            "date": BUILD_DATE.unwrap_or_default().trim(),
        }));
    }
    println!(
        "{}",
        version_string(
            VERSION,
            BUILD_COMMIT.unwrap_or_default(),
            BUILD_DATE.unwrap_or_default()
        )
    );
    Ok(())
}

pub(crate) fn version_string(version: &str, commit: &str, date: &str) -> String {
    let version = match version.trim() {
        "" => "dev",
        value => value,
    };
    match (commit.trim(), date.trim()) {
        ("", "") => version.to_string(),
        ("", date) => format!("{version} ({date})"),
        (commit, "") => format!("{version} ({commit})"),
        (commit, date) => format!("{version} ({commit} {date})"),
    }
}
