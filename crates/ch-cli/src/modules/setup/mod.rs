mod actions;

pub(crate) use actions::handle_setup;
#[cfg(test)]
pub(crate) use actions::run_setup;
