// Pool State
//
// One constant-product market per unordered token pair. The account lives at
// PDA ["pool", token0, token1] with token0 < token1, so both argument orders
// resolve to the same registry slot.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::keccak;

use crate::{errors::*, math};

#[account]
#[derive(InitSpace, Default)]
pub struct Pool {
    pub pool_id: [u8; 32],     // keccak256(token0 || token1)
    pub token0: Pubkey,        // Lower mint by byte order
    pub token1: Pubkey,        // Higher mint by byte order
    pub reserve0: u64,
    pub reserve1: u64,
    pub total_liquidity: u64,  // Sum of every LiquidityPosition.shares
    pub min_reserve0: u64,     // Deposits of token0 below this are rejected
    pub min_reserve1: u64,
    pub public_pool: bool,     // Anyone may provide liquidity when true
    pub exists: bool,          // Set on first deposit, never cleared
    pub bump: u8,
}

// Sort two mints canonically (ascending byte order)
pub fn canonical_pair(token_a: &Pubkey, token_b: &Pubkey) -> (Pubkey, Pubkey) {
    if token_a <= token_b {
        (*token_a, *token_b)
    } else {
        (*token_b, *token_a)
    }
}

// Order-independent fingerprint of a token pair
pub fn pool_id(token_a: &Pubkey, token_b: &Pubkey) -> [u8; 32] {
    let (token0, token1) = canonical_pair(token_a, token_b);
    keccak::hashv(&[token0.as_ref(), token1.as_ref()]).to_bytes()
}

impl Pool {
    pub fn initialize(&mut self, token_a: &Pubkey, token_b: &Pubkey, bump: u8) -> Result<()> {
        require_keys_neq!(*token_a, *token_b, AmmError::IdenticalTokenMints);

        let (token0, token1) = canonical_pair(token_a, token_b);
        *self = Pool {
            pool_id: pool_id(&token0, &token1),
            token0,
            token1,
            reserve0: 0,
            reserve1: 0,
            total_liquidity: 0,
            min_reserve0: 0,
            min_reserve1: 0,
            public_pool: false,
            exists: true,
            bump,
        };

        Ok(())
    }

    pub fn assert_exists(&self) -> Result<()> {
        require!(self.exists, AmmError::PoolNotFound);
        Ok(())
    }

    pub fn contains(&self, mint: &Pubkey) -> bool {
        self.token0 == *mint || self.token1 == *mint
    }

    // Resolve (reserve_in, reserve_out) for a swap direction
    pub fn reserves_for(&self, token_in: &Pubkey, token_out: &Pubkey) -> Result<(u64, u64)> {
        require_keys_neq!(*token_in, *token_out, AmmError::IdenticalTokenMints);
        require!(
            self.contains(token_in) && self.contains(token_out),
            AmmError::TokenNotInPool
        );

        if *token_in == self.token0 {
            Ok((self.reserve0, self.reserve1))
        } else {
            Ok((self.reserve1, self.reserve0))
        }
    }

    // Map caller-ordered amounts onto (amount0, amount1)
    pub fn ordered_amounts(&self, token_a: &Pubkey, amount_a: u64, amount_b: u64) -> (u64, u64) {
        if *token_a == self.token0 {
            (amount_a, amount_b)
        } else {
            (amount_b, amount_a)
        }
    }

    // Public pools admit anyone, otherwise owner or whitelisted accounts
    pub fn can_provide_liquidity(&self, is_owner: bool, is_whitelisted: bool) -> bool {
        self.public_pool || is_owner || is_whitelisted
    }

    // Apply a deposit and return the minted shares
    pub fn deposit(&mut self, amount0: u64, amount1: u64) -> Result<u64> {
        require!(amount0 >= self.min_reserve0, AmmError::BelowMinimumReserve);
        require!(amount1 >= self.min_reserve1, AmmError::BelowMinimumReserve);

        let shares = math::shares_for_deposit(
            amount0,
            amount1,
            self.reserve0,
            self.reserve1,
            self.total_liquidity,
        )?;
        require!(shares > 0, AmmError::ZeroSharesMinted);

        self.reserve0 = self.reserve0.checked_add(amount0).ok_or(AmmError::Overflow)?;
        self.reserve1 = self.reserve1.checked_add(amount1).ok_or(AmmError::Overflow)?;
        self.total_liquidity = self
            .total_liquidity
            .checked_add(shares)
            .ok_or(AmmError::Overflow)?;

        Ok(shares)
    }

    // Burn shares and return (amount0, amount1) owed to the holder
    pub fn withdraw(&mut self, shares: u64) -> Result<(u64, u64)> {
        require!(shares > 0, AmmError::ZeroAmount);
        require!(
            shares <= self.total_liquidity,
            AmmError::InsufficientLiquidity
        );

        let (amount0, amount1) = math::amounts_for_withdrawal(
            shares,
            self.reserve0,
            self.reserve1,
            self.total_liquidity,
        )?;
        require!(amount0 > 0 && amount1 > 0, AmmError::ZeroWithdrawAmount);

        self.reserve0 = self.reserve0.checked_sub(amount0).ok_or(AmmError::Underflow)?;
        self.reserve1 = self.reserve1.checked_sub(amount1).ok_or(AmmError::Underflow)?;
        self.total_liquidity = self
            .total_liquidity
            .checked_sub(shares)
            .ok_or(AmmError::Underflow)?;

        Ok((amount0, amount1))
    }

    // Credit amount_in to the token_in side, debit amount_out from the other
    pub fn update_reserves(&mut self, token_in: &Pubkey, amount_in: u64, amount_out: u64) -> Result<()> {
        if *token_in == self.token0 {
            self.reserve0 = self.reserve0.checked_add(amount_in).ok_or(AmmError::Overflow)?;
            self.reserve1 = self.reserve1.checked_sub(amount_out).ok_or(AmmError::Underflow)?;
        } else {
            self.reserve1 = self.reserve1.checked_add(amount_in).ok_or(AmmError::Overflow)?;
            self.reserve0 = self.reserve0.checked_sub(amount_out).ok_or(AmmError::Underflow)?;
        }
        Ok(())
    }
}
