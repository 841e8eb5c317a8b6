pub mod ledger;
pub mod payout;
pub mod pda;
pub mod token;

pub use ledger::*;
pub use payout::*;
pub use pda::*;
pub use token::*;
