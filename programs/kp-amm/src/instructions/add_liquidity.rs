// Add Liquidity Instruction
//
// Deposits both tokens of a pair and mints liquidity shares.
// The first deposit for a pair creates the pool and is reserved to the owner.
// Empty pool: shares = sqrt(a * b)
// Otherwise:  shares = min(a * total / reserve0, b * total / reserve1)

use anchor_lang::prelude::*;
use anchor_lang::AccountsExit;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct AddLiquidity<'info> {
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
        init_if_needed,
        payer = provider,
        space = ANCHOR_DISCRIMINATOR + Pool::INIT_SPACE,
        seeds = [
            POOL_SEED,
            token_a_mint.key().min(token_b_mint.key()).as_ref(),
            token_a_mint.key().max(token_b_mint.key()).as_ref(),
        ],
        bump
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        init_if_needed,
        payer = provider,
        space = ANCHOR_DISCRIMINATOR + LiquidityPosition::INIT_SPACE,
        seeds = [POSITION_SEED, pool.key().as_ref(), provider.key().as_ref()],
        bump
    )]
    pub position: Box<Account<'info, LiquidityPosition>>,

    #[account(
        seeds = [WHITELIST_SEED, pool.key().as_ref(), provider.key().as_ref()],
        bump
    )]
    pub whitelist_entry: Option<Account<'info, WhitelistEntry>>,

    #[account(
        mut,
        token::mint = token_a_mint,
        token::authority = provider,
    )]
    pub provider_token_a: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = token_b_mint,
        token::authority = provider,
    )]
    pub provider_token_b: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = provider,
        associated_token::mint = token_a_mint,
        associated_token::authority = engine_authority,
    )]
    pub vault_a: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = provider,
        associated_token::mint = token_b_mint,
        associated_token::authority = engine_authority,
    )]
    pub vault_b: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> AddLiquidity<'info> {
    pub fn add_liquidity(
        &mut self,
        amount_a: u64,
        amount_b: u64,
        bumps: &AddLiquidityBumps,
    ) -> Result<()> {
        self.config.assert_not_paused()?;

        // Hold the lock on-chain for the rest of the instruction
        self.config.enter()?;
        self.config.exit(&crate::ID)?;

        require!(amount_a > 0 && amount_b > 0, AmmError::ZeroAmount);

        let provider = self.provider.key();
        let token_a = self.token_a_mint.key();
        let token_b = self.token_b_mint.key();
        let is_owner = self.config.is_owner(&provider);

        // Pool creation is reserved to the owner
        if !self.pool.exists {
            require!(is_owner, AmmError::UnauthorizedAccess);
            self.pool.initialize(&token_a, &token_b, bumps.pool)?;
            msg!("Pool created: {} / {}", self.pool.token0, self.pool.token1);
        }

        let pool_key = self.pool.key();
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
        let (amount0, amount1) = self.pool.ordered_amounts(&token_a, amount_a, amount_b);
        let shares = self.pool.deposit(amount0, amount1)?;

        self.position.bind(pool_key, provider, bumps.position);
        self.position.credit(shares)?;

        // Interactions
        transfer_tokens(
            amount_a,
            &self.token_program.to_account_info(),
            &self.provider_token_a.to_account_info(),
            &self.vault_a.to_account_info(),
            &self.provider.to_account_info(),
        )?;
        transfer_tokens(
            amount_b,
            &self.token_program.to_account_info(),
            &self.provider_token_b.to_account_info(),
            &self.vault_b.to_account_info(),
            &self.provider.to_account_info(),
        )?;

        emit!(LiquidityAdded {
            provider,
            token0: self.pool.token0,
            token1: self.pool.token1,
            amount0,
            amount1,
            shares,
        });

        msg!("Deposited: {} token0, {} token1 -> {} shares", amount0, amount1, shares);

        self.config.leave();
        Ok(())
    }
}
