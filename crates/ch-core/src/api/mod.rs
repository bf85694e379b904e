pub mod charges;
pub mod company;
pub mod filing_history;
pub mod insolvency;
pub mod oauth;
pub mod officers;
pub mod psc;
pub mod transactions;

pub use charges::*;
pub use company::*;
pub use filing_history::*;
pub use insolvency::*;
pub use oauth::*;
pub use officers::*;
pub use psc::*;
pub use transactions::*;
