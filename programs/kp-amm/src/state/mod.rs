pub mod engine_config;
pub mod pool;
pub mod liquidity_position;
pub mod whitelist_entry;
pub mod nonce_account;

pub use engine_config::*;
pub use pool::*;
pub use liquidity_position::*;
pub use whitelist_entry::*;
pub use nonce_account::*;
