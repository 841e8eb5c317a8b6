pub mod initialize;
pub mod fund_vault;
pub mod distribute_rewards;
pub mod close_round;
pub mod update_config;

pub use initialize::*;
pub use fund_vault::*;
pub use distribute_rewards::*;
pub use close_round::*;
pub use update_config::*;
