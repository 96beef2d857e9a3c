// Read-only Queries
//
// Results are returned through Anchor return data; nothing is written.

use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::{constants::*, errors::*, math, state::*};

#[derive(Accounts)]
pub struct QuoteSwap<'info> {
    #[account(
        seeds = [ENGINE_CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, EngineConfig>,

    #[account(
        seeds = [POOL_SEED, pool.token0.as_ref(), pool.token1.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,

    pub token_in_mint: Account<'info, Mint>,
    pub token_out_mint: Account<'info, Mint>,
}

impl<'info> QuoteSwap<'info> {
    pub fn get_amount_out(&self, amount_in: u64) -> Result<u64> {
        self.pool.assert_exists()?;

        let token_in = self.token_in_mint.key();
        let (reserve_in, reserve_out) = self
            .pool
            .reserves_for(&token_in, &self.token_out_mint.key())?;

        math::quote_output_for_exact_input(
            amount_in,
            reserve_in,
            reserve_out,
            self.config.fee_numerator,
            self.config.fee_denominator,
            self.config.is_fee_token(&token_in),
        )
    }

    pub fn get_amount_in(&self, amount_out: u64) -> Result<u64> {
        self.pool.assert_exists()?;

        let token_out = self.token_out_mint.key();
        let (reserve_in, reserve_out) = self
            .pool
            .reserves_for(&self.token_in_mint.key(), &token_out)?;

        math::quote_input_for_exact_output(
            amount_out,
            reserve_in,
            reserve_out,
            self.config.fee_numerator,
            self.config.fee_denominator,
            self.config.is_fee_token(&token_out),
        )
    }
}

#[derive(Accounts)]
pub struct GetPoolId {}

#[derive(Accounts)]
#[instruction(account: Pubkey)]
pub struct GetNonce<'info> {
    /// CHECK: may not exist yet, address pinned by seeds
    #[account(
        seeds = [NONCE_SEED, account.as_ref()],
        bump
    )]
    pub nonce_account: UncheckedAccount<'info>,
}

impl<'info> GetNonce<'info> {
    // Accounts that never settled a KP swap have no nonce account yet
    pub fn get_nonce(&self) -> Result<u64> {
        let info = self.nonce_account.to_account_info();
        if info.data_is_empty() {
            return Ok(0);
        }

        require_keys_eq!(*info.owner, crate::ID, AmmError::InvalidAccount);
        let data = info.try_borrow_data()?;
        let nonce_account = NonceAccount::try_deserialize(&mut &data[..])?;

        Ok(nonce_account.nonce)
    }
}
