// Initialize Engine Instruction
//
// One-time bootstrap of the global configuration. The signer becomes the
// owner and the fee starts at 9970 / 10000 (0.30%).

use anchor_lang::prelude::*;

use crate::{constants::*, events::*, state::*};

#[derive(Accounts)]
pub struct InitializeEngine<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = ANCHOR_DISCRIMINATOR + EngineConfig::INIT_SPACE,
        seeds = [ENGINE_CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, EngineConfig>,

    /// CHECK: PDA signer for pool custody and KP minting
    #[account(
        seeds = [ENGINE_AUTHORITY_SEED],
        bump
    )]
    pub engine_authority: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeEngine<'info> {
    pub fn initialize_engine(
        &mut self,
        fee_token: Pubkey,
        kp_token: Pubkey,
        trusted_caller: [u8; ETH_ADDRESS_LEN],
        bumps: &InitializeEngineBumps,
    ) -> Result<()> {
        self.config.set_inner(EngineConfig {
            owner: self.owner.key(),
            fee_numerator: DEFAULT_FEE_NUMERATOR,
            fee_denominator: DEFAULT_FEE_DENOMINATOR,
            fee_token,
            kp_token,
            trusted_caller,
            paused: false,
            locked: false,
            bump: bumps.config,
            authority_bump: bumps.engine_authority,
        });

        emit!(EngineInitialized {
            owner: self.owner.key(),
            fee_token,
            kp_token,
            trusted_caller,
        });

        msg!("Engine initialized, owner {}", self.owner.key());
        msg!("Engine authority: {}", self.engine_authority.key());

        Ok(())
    }
}
