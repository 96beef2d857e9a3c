// Update Whitelist Instruction
//
// Sets the access flag of one account on one pool. The entry is created on
// first use and paid for by the owner.

use anchor_lang::prelude::*;

use crate::{constants::*, events::*, state::*};

#[derive(Accounts)]
#[instruction(user: Pubkey)]
pub struct UpdateWhitelist<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

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

    #[account(
        init_if_needed,
        payer = owner,
        space = ANCHOR_DISCRIMINATOR + WhitelistEntry::INIT_SPACE,
        seeds = [WHITELIST_SEED, pool.key().as_ref(), user.as_ref()],
        bump
    )]
    pub whitelist_entry: Account<'info, WhitelistEntry>,

    pub system_program: Program<'info, System>,
}

impl<'info> UpdateWhitelist<'info> {
    pub fn update_whitelist(
        &mut self,
        user: Pubkey,
        status: bool,
        bumps: &UpdateWhitelistBumps,
    ) -> Result<()> {
        self.config.assert_owner(&self.owner.key())?;
        self.pool.assert_exists()?;

        self.whitelist_entry.set_inner(WhitelistEntry {
            pool: self.pool.key(),
            user,
            status,
            bump: bumps.whitelist_entry,
        });

        emit!(WhitelistUpdated {
            user,
            token_a: self.pool.token0,
            token_b: self.pool.token1,
            status,
        });
        msg!("Whitelist {} -> {}", user, status);

        Ok(())
    }
}
