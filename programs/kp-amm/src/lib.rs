// KP AMM Program
//
// Constant product AMM (x * y = k) over arbitrary token pairs, with
// owner-created pools, per-pool whitelists and minimum deposits, a global
// fee ratio charged on the fee-bearing token's side, and a privileged KP
// token that is minted into custody against a trusted signature and burned
// on the way out.
//
// Instructions:
// - initialize_engine: Create the global configuration
// - add_liquidity / remove_liquidity: Provide or withdraw liquidity shares
// - swap_exact_input / swap_exact_output: Trade against a pool
// - update_fee, update_fee_token, update_kp_token, update_trusted_caller
// - update_min_reserves, set_pool_public, update_whitelist(_batch)
// - set_paused: Emergency stop
// - get_amount_out, get_amount_in, get_pool_id, get_nonce: Read-only queries

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod math;
pub mod settlement;
pub mod state;

use constants::{ETH_ADDRESS_LEN, SIGNATURE_LEN};
use instructions::*;

declare_id!("5B39eNrTt71636zfJQmKReb6mDrp3ZWBgkfQvoz7hrbP");

#[program]
pub mod kp_amm {
    use super::*;

    pub fn initialize_engine(
        ctx: Context<InitializeEngine>,
        fee_token: Pubkey,
        kp_token: Pubkey,
        trusted_caller: [u8; ETH_ADDRESS_LEN],
    ) -> Result<()> {
        ctx.accounts
            .initialize_engine(fee_token, kp_token, trusted_caller, &ctx.bumps)
    }

    pub fn add_liquidity(ctx: Context<AddLiquidity>, amount_a: u64, amount_b: u64) -> Result<()> {
        ctx.accounts.add_liquidity(amount_a, amount_b, &ctx.bumps)
    }

    pub fn remove_liquidity(ctx: Context<RemoveLiquidity>, shares: u64) -> Result<()> {
        ctx.accounts.remove_liquidity(shares)
    }

    pub fn swap_exact_input(
        ctx: Context<SwapTokens>,
        amount_in: u64,
        deadline: i64,
        signature: Option<[u8; SIGNATURE_LEN]>,
    ) -> Result<()> {
        ctx.accounts
            .swap_exact_input(amount_in, deadline, signature, &ctx.bumps)
    }

    pub fn swap_exact_output(
        ctx: Context<SwapTokens>,
        amount_out: u64,
        deadline: i64,
        signature: Option<[u8; SIGNATURE_LEN]>,
    ) -> Result<()> {
        ctx.accounts
            .swap_exact_output(amount_out, deadline, signature, &ctx.bumps)
    }

    // Administration

    pub fn update_fee(
        ctx: Context<UpdateFee>,
        fee_numerator: u64,
        fee_denominator: u64,
    ) -> Result<()> {
        ctx.accounts.update_fee(fee_numerator, fee_denominator)
    }

    pub fn update_fee_token(ctx: Context<UpdateEngineConfig>, fee_token: Pubkey) -> Result<()> {
        ctx.accounts.update_fee_token(fee_token)
    }

    pub fn update_kp_token(ctx: Context<UpdateEngineConfig>, kp_token: Pubkey) -> Result<()> {
        ctx.accounts.update_kp_token(kp_token)
    }

    pub fn update_trusted_caller(
        ctx: Context<UpdateEngineConfig>,
        trusted_caller: [u8; ETH_ADDRESS_LEN],
    ) -> Result<()> {
        ctx.accounts.update_trusted_caller(trusted_caller)
    }

    pub fn update_min_reserves(
        ctx: Context<UpdatePoolSettings>,
        min_reserve0: u64,
        min_reserve1: u64,
    ) -> Result<()> {
        ctx.accounts.update_min_reserves(min_reserve0, min_reserve1)
    }

    pub fn set_pool_public(ctx: Context<UpdatePoolSettings>, public_pool: bool) -> Result<()> {
        ctx.accounts.set_pool_public(public_pool)
    }

    pub fn update_whitelist(
        ctx: Context<UpdateWhitelist>,
        user: Pubkey,
        status: bool,
    ) -> Result<()> {
        ctx.accounts.update_whitelist(user, status, &ctx.bumps)
    }

    pub fn update_whitelist_batch<'info>(
        ctx: Context<'_, '_, 'info, 'info, UpdateWhitelistBatch<'info>>,
        users: Vec<Pubkey>,
        statuses: Vec<bool>,
    ) -> Result<()> {
        ctx.accounts
            .update_whitelist_batch(users, statuses, ctx.remaining_accounts)
    }

    pub fn set_paused(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
        ctx.accounts.set_paused(paused)
    }

    // Queries

    pub fn get_amount_out(ctx: Context<QuoteSwap>, amount_in: u64) -> Result<u64> {
        ctx.accounts.get_amount_out(amount_in)
    }

    pub fn get_amount_in(ctx: Context<QuoteSwap>, amount_out: u64) -> Result<u64> {
        ctx.accounts.get_amount_in(amount_out)
    }

    pub fn get_pool_id(_ctx: Context<GetPoolId>, token_a: Pubkey, token_b: Pubkey) -> Result<[u8; 32]> {
        Ok(state::pool_id(&token_a, &token_b))
    }

    pub fn get_nonce(ctx: Context<GetNonce>, _account: Pubkey) -> Result<u64> {
        ctx.accounts.get_nonce()
    }
}
