// Update Fee Instruction
//
// Changes the global fee ratio. Only the owner can call this.
// numerator <= denominator, denominator > 0

use anchor_lang::prelude::*;

use crate::{constants::*, events::*, state::*};

#[derive(Accounts)]
pub struct UpdateFee<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [ENGINE_CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, EngineConfig>,
}

impl<'info> UpdateFee<'info> {
    pub fn update_fee(&mut self, fee_numerator: u64, fee_denominator: u64) -> Result<()> {
        self.config.assert_owner(&self.owner.key())?;
        self.config.set_fee(fee_numerator, fee_denominator)?;

        emit!(FeeUpdated {
            fee_numerator,
            fee_denominator,
        });

        msg!("Fee updated: {} / {}", fee_numerator, fee_denominator);

        Ok(())
    }
}
