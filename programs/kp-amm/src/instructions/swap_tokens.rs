// Swap Tokens Instructions
//
// swap_exact_input:  caller fixes amount_in, the pool quotes amount_out
// swap_exact_output: caller fixes amount_out, the pool quotes amount_in
//
// Swaps touching the KP token skip the normal transfer on that side:
// - KP in:  a trusted-signer authorization is verified and a nonce consumed,
//           then amount_in KP is minted straight into custody
// - KP out: the output is delivered as usual and the same amount of KP is
//           burned from the caller

use anchor_lang::prelude::*;
use anchor_lang::AccountsExit;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{
    constants::*, errors::*, events::*, helpers::*, math, settlement::*, state::*,
};

#[derive(Accounts)]
pub struct SwapTokens<'info> {
    #[account(mut)]
    pub swapper: Signer<'info>,

    #[account(
        mut,
        seeds = [ENGINE_CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Box<Account<'info, EngineConfig>>,

    /// CHECK: PDA signer
    #[account(
        seeds = [ENGINE_AUTHORITY_SEED],
        bump = config.authority_bump,
    )]
    pub engine_authority: UncheckedAccount<'info>,

    #[account(mut)]
    pub token_in_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        constraint = token_out_mint.key() != token_in_mint.key() @ AmmError::IdenticalTokenMints,
    )]
    pub token_out_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        seeds = [POOL_SEED, pool.token0.as_ref(), pool.token1.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        init_if_needed,
        payer = swapper,
        space = ANCHOR_DISCRIMINATOR + NonceAccount::INIT_SPACE,
        seeds = [NONCE_SEED, swapper.key().as_ref()],
        bump
    )]
    pub nonce_account: Box<Account<'info, NonceAccount>>,

    #[account(
        init_if_needed,
        payer = swapper,
        associated_token::mint = token_in_mint,
        associated_token::authority = swapper,
    )]
    pub swapper_token_in: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = swapper,
        associated_token::mint = token_out_mint,
        associated_token::authority = swapper,
    )]
    pub swapper_token_out: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = token_in_mint,
        associated_token::authority = engine_authority,
    )]
    pub vault_in: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = token_out_mint,
        associated_token::authority = engine_authority,
    )]
    pub vault_out: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> SwapTokens<'info> {
    pub fn swap_exact_input(
        &mut self,
        amount_in: u64,
        deadline: i64,
        signature: Option<[u8; SIGNATURE_LEN]>,
        bumps: &SwapTokensBumps,
    ) -> Result<()> {
        let now = self.begin(deadline, bumps)?;
        require!(amount_in > 0, AmmError::ZeroAmount);

        let token_in = self.token_in_mint.key();
        let token_out = self.token_out_mint.key();
        let (reserve_in, reserve_out) = self.pool.reserves_for(&token_in, &token_out)?;

        let amount_out = math::quote_output_for_exact_input(
            amount_in,
            reserve_in,
            reserve_out,
            self.config.fee_numerator,
            self.config.fee_denominator,
            self.config.is_fee_token(&token_in),
        )?;
        require!(amount_out > 0, AmmError::ZeroOutputAmount);

        self.execute(amount_in, amount_out, amount_in, deadline, signature.as_ref(), now)
    }

    pub fn swap_exact_output(
        &mut self,
        amount_out: u64,
        deadline: i64,
        signature: Option<[u8; SIGNATURE_LEN]>,
        bumps: &SwapTokensBumps,
    ) -> Result<()> {
        let now = self.begin(deadline, bumps)?;
        require!(amount_out > 0, AmmError::ZeroAmount);

        let token_in = self.token_in_mint.key();
        let token_out = self.token_out_mint.key();
        let (reserve_in, reserve_out) = self.pool.reserves_for(&token_in, &token_out)?;

        let amount_in = math::quote_input_for_exact_output(
            amount_out,
            reserve_in,
            reserve_out,
            self.config.fee_numerator,
            self.config.fee_denominator,
            self.config.is_fee_token(&token_out),
        )?;
        require!(amount_in > 0, AmmError::ZeroAmount);

        self.execute(amount_in, amount_out, amount_out, deadline, signature.as_ref(), now)
    }

    // Common preconditions; returns the current timestamp
    fn begin(&mut self, deadline: i64, bumps: &SwapTokensBumps) -> Result<i64> {
        self.config.assert_not_paused()?;

        self.config.enter()?;
        self.config.exit(&crate::ID)?;

        let now = current_timestamp()?;
        validate_deadline(deadline, now)?;

        self.pool.assert_exists()?;
        self.nonce_account.bind(self.swapper.key(), bumps.nonce_account);

        Ok(now)
    }

    // Update reserves, settle both legs, emit
    fn execute(
        &mut self,
        amount_in: u64,
        amount_out: u64,
        signed_amount: u64,
        deadline: i64,
        signature: Option<&[u8; SIGNATURE_LEN]>,
        now: i64,
    ) -> Result<()> {
        let swapper = self.swapper.key();
        let token_in = self.token_in_mint.key();
        let token_out = self.token_out_mint.key();

        // Effects
        self.pool.update_reserves(&token_in, amount_in, amount_out)?;

        // Interactions
        if self.config.is_kp_token(&token_in) {
            let terms = SettlementTerms {
                token_in,
                token_out,
                amount: signed_amount,
                caller: swapper,
                deadline,
            };
            let nonce = authorize(
                &terms,
                &mut self.nonce_account,
                signature,
                &self.config.trusted_caller,
                now,
            )?;
            msg!("KP settlement authorized, nonce {}", nonce);

            self.mint_kp_into_vault(amount_in)?;
            self.pay_out(amount_out)?;
        } else {
            transfer_tokens(
                amount_in,
                &self.token_program.to_account_info(),
                &self.swapper_token_in.to_account_info(),
                &self.vault_in.to_account_info(),
                &self.swapper.to_account_info(),
            )?;
            self.pay_out(amount_out)?;

            if self.config.is_kp_token(&token_out) {
                self.burn_kp_from_swapper(amount_out)?;
            }
        }

        emit!(Swap {
            swapper,
            token_in,
            token_out,
            amount_in,
            amount_out,
        });

        msg!("Swapped {} {} -> {} {}", amount_in, token_in, amount_out, token_out);

        self.config.leave();
        Ok(())
    }

    fn pay_out(&self, amount: u64) -> Result<()> {
        let authority_seeds = self.config.authority_seeds();

        transfer_from_vault(
            amount,
            &self.token_program.to_account_info(),
            &self.vault_out.to_account_info(),
            &self.swapper_token_out.to_account_info(),
            &self.engine_authority.to_account_info(),
            &authority_seeds,
        )
    }

    fn mint_kp_into_vault(&self, amount: u64) -> Result<()> {
        let authority_seeds = self.config.authority_seeds();

        mint_to_vault(
            amount,
            &self.token_program.to_account_info(),
            &self.token_in_mint.to_account_info(),
            &self.vault_in.to_account_info(),
            &self.engine_authority.to_account_info(),
            &authority_seeds,
        )
    }

    fn burn_kp_from_swapper(&self, amount: u64) -> Result<()> {
        burn_from_user(
            amount,
            &self.token_program.to_account_info(),
            &self.token_out_mint.to_account_info(),
            &self.swapper_token_out.to_account_info(),
            &self.swapper.to_account_info(),
        )
    }
}
