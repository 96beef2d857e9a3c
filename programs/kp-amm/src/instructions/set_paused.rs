// Set Paused Instruction
//
// Emergency stop for liquidity and swap operations.
// Administrative instructions keep working while paused.

use anchor_lang::prelude::*;

use crate::{constants::*, events::*, state::*};

#[derive(Accounts)]
pub struct SetPaused<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [ENGINE_CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, EngineConfig>,
}

impl<'info> SetPaused<'info> {
    pub fn set_paused(&mut self, paused: bool) -> Result<()> {
        self.config.assert_owner(&self.owner.key())?;
        self.config.paused = paused;

        emit!(PausedStateChanged { paused });
        msg!("Engine paused: {}", paused);

        Ok(())
    }
}
