// Instructions Module
//
// Exports all instruction handlers for the KP AMM program

pub mod initialize_engine;
pub mod add_liquidity;
pub mod remove_liquidity;
pub mod swap_tokens;
pub mod update_fee;
pub mod update_engine_config;
pub mod update_pool_settings;
pub mod update_whitelist;
pub mod update_whitelist_batch;
pub mod set_paused;
pub mod queries;

pub use initialize_engine::*;
pub use add_liquidity::*;
pub use remove_liquidity::*;
pub use swap_tokens::*;
pub use update_fee::*;
pub use update_engine_config::*;
pub use update_pool_settings::*;
pub use update_whitelist::*;
pub use update_whitelist_batch::*;
pub use set_paused::*;
pub use queries::*;
