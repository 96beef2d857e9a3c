// Update Engine Config Instructions
//
// Owner-only setters for the fee-bearing token, the KP token and the
// trusted settlement signer.

use anchor_lang::prelude::*;

use crate::{constants::*, events::*, state::*};

#[derive(Accounts)]
pub struct UpdateEngineConfig<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [ENGINE_CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, EngineConfig>,
}

impl<'info> UpdateEngineConfig<'info> {
    pub fn update_fee_token(&mut self, fee_token: Pubkey) -> Result<()> {
        self.config.assert_owner(&self.owner.key())?;
        self.config.fee_token = fee_token;

        emit!(FeeTokenUpdated { fee_token });
        msg!("Fee token set to {}", fee_token);

        Ok(())
    }

    pub fn update_kp_token(&mut self, kp_token: Pubkey) -> Result<()> {
        self.config.assert_owner(&self.owner.key())?;
        self.config.kp_token = kp_token;

        emit!(KpTokenUpdated { kp_token });
        msg!("KP token set to {}", kp_token);

        Ok(())
    }

    pub fn update_trusted_caller(&mut self, trusted_caller: [u8; ETH_ADDRESS_LEN]) -> Result<()> {
        self.config.assert_owner(&self.owner.key())?;
        self.config.trusted_caller = trusted_caller;

        emit!(TrustedCallerUpdated { trusted_caller });
        msg!("Trusted caller updated");

        Ok(())
    }
}
