// Nonce State
//
// Per-account settlement counter, PDA ["nonce", owner].
// Starts at zero and only ever moves forward by one.

use anchor_lang::prelude::*;
use crate::errors::*;

#[account]
#[derive(InitSpace, Default)]
pub struct NonceAccount {
    pub owner: Pubkey,
    pub nonce: u64,
    pub bump: u8,
}

impl NonceAccount {
    pub fn bind(&mut self, owner: Pubkey, bump: u8) {
        if self.owner == Pubkey::default() {
            self.owner = owner;
            self.bump = bump;
        }
    }

    // Return the current value and advance the counter
    pub fn consume(&mut self) -> Result<u64> {
        let current = self.nonce;
        self.nonce = current.checked_add(1).ok_or(AmmError::Overflow)?;
        Ok(current)
    }
}
