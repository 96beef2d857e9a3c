// Liquidity Position State
//
// Share balance of one account in one pool, PDA ["position", pool, owner].

use anchor_lang::prelude::*;
use crate::errors::*;

#[account]
#[derive(InitSpace, Default)]
pub struct LiquidityPosition {
    pub pool: Pubkey,
    pub owner: Pubkey,
    pub shares: u64,
    pub bump: u8,
}

impl LiquidityPosition {
    // Bind a freshly created position to its pool and owner
    pub fn bind(&mut self, pool: Pubkey, owner: Pubkey, bump: u8) {
        if self.owner == Pubkey::default() {
            self.pool = pool;
            self.owner = owner;
            self.bump = bump;
        }
    }

    pub fn credit(&mut self, shares: u64) -> Result<()> {
        self.shares = self.shares.checked_add(shares).ok_or(AmmError::Overflow)?;
        Ok(())
    }

    pub fn debit(&mut self, shares: u64) -> Result<()> {
        require!(shares > 0, AmmError::ZeroAmount);
        require!(shares <= self.shares, AmmError::InsufficientShares);
        self.shares -= shares;
        Ok(())
    }
}
