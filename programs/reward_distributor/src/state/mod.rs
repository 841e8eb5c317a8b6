pub mod distributor_state;
pub mod claim_state;
pub mod round_state;
pub mod vault_authority;

pub use distributor_state::*;
pub use claim_state::*;
pub use round_state::*;
pub use vault_authority::*;
