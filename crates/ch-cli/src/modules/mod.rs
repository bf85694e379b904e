pub(crate) mod auth;
pub(crate) mod charges;
pub(crate) mod company;
pub(crate) mod filing;
pub(crate) mod history;
pub(crate) mod insolvency;
pub(crate) mod officers;
pub(crate) mod psc;
pub(crate) mod search;
pub(crate) mod setup;
pub(crate) mod system;
