// Remove Liquidity Instruction
//
// Burns liquidity shares and returns the proportional share of both reserves.
// amount = shares * reserve / total_liquidity

use anchor_lang::prelude::*;
use anchor_lang::AccountsExit;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct RemoveLiquidity<'info> {
    #[account(mut)]
    pub provider: Signer<'info>,

    #[account(
        mut,
        seeds = [ENGINE_CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, EngineConfig>,

    /// CHECK: PDA signer
    #[account(
        seeds = [ENGINE_AUTHORITY_SEED],
        bump = config.authority_bump,
    )]
    pub engine_authority: UncheckedAccount<'info>,

    pub token_a_mint: Box<Account<'info, Mint>>,

    #[account(
        constraint = token_b_mint.key() != token_a_mint.key() @ AmmError::IdenticalTokenMints,
    )]
    pub token_b_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        seeds = [
            POOL_SEED,
            token_a_mint.key().min(token_b_mint.key()).as_ref(),
            token_a_mint.key().max(token_b_mint.key()).as_ref(),
        ],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        mut,
        seeds = [POSITION_SEED, pool.key().as_ref(), provider.key().as_ref()],
        bump = position.bump,
        constraint = position.owner == provider.key() @ AmmError::InvalidAccount,
    )]
    pub position: Box<Account<'info, LiquidityPosition>>,

    #[account(
        seeds = [WHITELIST_SEED, pool.key().as_ref(), provider.key().as_ref()],
        bump
    )]
    pub whitelist_entry: Option<Account<'info, WhitelistEntry>>,

    #[account(
        init_if_needed,
        payer = provider,
        associated_token::mint = token_a_mint,
        associated_token::authority = provider,
    )]
    pub provider_token_a: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = provider,
        associated_token::mint = token_b_mint,
        associated_token::authority = provider,
    )]
    pub provider_token_b: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = token_a_mint,
        associated_token::authority = engine_authority,
    )]
    pub vault_a: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = token_b_mint,
        associated_token::authority = engine_authority,
    )]
    pub vault_b: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> RemoveLiquidity<'info> {
    pub fn remove_liquidity(&mut self, shares: u64) -> Result<()> {
        self.config.assert_not_paused()?;

        self.config.enter()?;
        self.config.exit(&crate::ID)?;

        self.pool.assert_exists()?;

        let provider = self.provider.key();
        let pool_key = self.pool.key();
        let is_owner = self.config.is_owner(&provider);
        let is_whitelisted = self
            .whitelist_entry
            .as_ref()
            .map(|entry| entry.is_allowed(&pool_key, &provider))
            .unwrap_or(false);
        require!(
            self.pool.can_provide_liquidity(is_owner, is_whitelisted),
            AmmError::NotWhitelisted
        );

        // Effects
        self.position.debit(shares)?;
        let (amount0, amount1) = self.pool.withdraw(shares)?;

        let token_a = self.token_a_mint.key();
        let (amount_a, amount_b) = if token_a == self.pool.token0 {
            (amount0, amount1)
        } else {
            (amount1, amount0)
        };

        // Interactions
        let authority_seeds = self.config.authority_seeds();

        transfer_from_vault(
            amount_a,
            &self.token_program.to_account_info(),
            &self.vault_a.to_account_info(),
            &self.provider_token_a.to_account_info(),
            &self.engine_authority.to_account_info(),
            &authority_seeds,
        )?;
        transfer_from_vault(
            amount_b,
            &self.token_program.to_account_info(),
            &self.vault_b.to_account_info(),
            &self.provider_token_b.to_account_info(),
            &self.engine_authority.to_account_info(),
            &authority_seeds,
        )?;

        emit!(LiquidityRemoved {
            provider,
            token0: self.pool.token0,
            token1: self.pool.token1,
            amount0,
            amount1,
            shares,
        });

        msg!("Withdrawn: {} shares -> {} token0, {} token1", shares, amount0, amount1);

        self.config.leave();
        Ok(())
    }
}
