mod actions;
pub(crate) mod args;
mod http;
mod orchestrator;
mod types;

pub(crate) use actions::handle_file;
#[cfg(test)]
pub(crate) use http::FilingClient;
#[cfg(test)]
pub(crate) use orchestrator::file_address;
#[cfg(test)]
pub(crate) use types::ValidationFailed;
