// Update Pool Settings Instructions
//
// Owner-only per-pool settings: minimum deposit floors and public access.
// The pool must already exist.

use anchor_lang::prelude::*;

use crate::{constants::*, events::*, state::*};

#[derive(Accounts)]
pub struct UpdatePoolSettings<'info> {
    pub owner: Signer<'info>,

    #[account(
        seeds = [ENGINE_CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, EngineConfig>,

    #[account(
        mut,
        seeds = [POOL_SEED, pool.token0.as_ref(), pool.token1.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,
}

impl<'info> UpdatePoolSettings<'info> {
    pub fn update_min_reserves(&mut self, min_reserve0: u64, min_reserve1: u64) -> Result<()> {
        self.config.assert_owner(&self.owner.key())?;
        self.pool.assert_exists()?;

        self.pool.min_reserve0 = min_reserve0;
        self.pool.min_reserve1 = min_reserve1;

        emit!(MinReservesUpdated {
            pool_id: self.pool.pool_id,
            min_reserve0,
            min_reserve1,
        });
        msg!("Minimum reserves set to {} / {}", min_reserve0, min_reserve1);

        Ok(())
    }

    pub fn set_pool_public(&mut self, public_pool: bool) -> Result<()> {
        self.config.assert_owner(&self.owner.key())?;
        self.pool.assert_exists()?;

        self.pool.public_pool = public_pool;

        emit!(PoolVisibilityUpdated {
            pool_id: self.pool.pool_id,
            public_pool,
        });
        msg!("Pool public: {}", public_pool);

        Ok(())
    }
}
