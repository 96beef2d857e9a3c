// Program Events

use anchor_lang::prelude::*;

use crate::constants::ETH_ADDRESS_LEN;

#[event]
pub struct LiquidityAdded {
    pub provider: Pubkey,
    pub token0: Pubkey,
    pub token1: Pubkey,
    pub amount0: u64,
    pub amount1: u64,
    pub shares: u64,
}

#[event]
pub struct LiquidityRemoved {
    pub provider: Pubkey,
    pub token0: Pubkey,
    pub token1: Pubkey,
    pub amount0: u64,
    pub amount1: u64,
    pub shares: u64,
}

#[event]
pub struct Swap {
    pub swapper: Pubkey,
    pub token_in: Pubkey,
    pub token_out: Pubkey,
    pub amount_in: u64,
    pub amount_out: u64,
}

#[event]
pub struct WhitelistUpdated {
    pub user: Pubkey,
    pub token_a: Pubkey,
    pub token_b: Pubkey,
    pub status: bool,
}

// Administrative events

#[event]
pub struct EngineInitialized {
    pub owner: Pubkey,
    pub fee_token: Pubkey,
    pub kp_token: Pubkey,
    pub trusted_caller: [u8; ETH_ADDRESS_LEN],
}

#[event]
pub struct FeeUpdated {
    pub fee_numerator: u64,
    pub fee_denominator: u64,
}

#[event]
pub struct FeeTokenUpdated {
    pub fee_token: Pubkey,
}

#[event]
pub struct KpTokenUpdated {
    pub kp_token: Pubkey,
}

#[event]
pub struct TrustedCallerUpdated {
    pub trusted_caller: [u8; ETH_ADDRESS_LEN],
}

#[event]
pub struct MinReservesUpdated {
    pub pool_id: [u8; 32],
    pub min_reserve0: u64,
    pub min_reserve1: u64,
}

#[event]
pub struct PoolVisibilityUpdated {
    pub pool_id: [u8; 32],
    pub public_pool: bool,
}

#[event]
pub struct PausedStateChanged {
    pub paused: bool,
}
