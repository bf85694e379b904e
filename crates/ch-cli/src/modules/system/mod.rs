pub(crate) mod actions;
pub(crate) mod config;
pub(crate) mod http;
pub(crate) mod output;
pub(crate) mod types;

pub(crate) use actions::handle_version;
pub(crate) use config::{
    api_key, mask_secret, resolve_company_number, ConfigStore, FileConfigStore,
};
#[cfg(test)]
pub(crate) use config::MemoryConfigStore;
pub(crate) use http::{build_params, opt_param, page_param, parse_rfc3339, ApiClient, ApiError};
pub(crate) use output::{
    print_field, print_json, print_table, ConsoleReporter, OutputMode, Reporter,
};
#[cfg(test)]
pub(crate) use output::{RecordingReporter, ReportLevel};
pub(crate) use types::{CliConfig, CommandContext};
