// Engine Configuration State
//
// Global settings shared by every pool: owner, fee, fee-bearing token,
// privileged (KP) token, trusted settlement signer, pause flag and the
// reentrancy lock.

use anchor_lang::prelude::*;
use crate::{constants::*, errors::*};

#[account]
#[derive(InitSpace, Default)]
pub struct EngineConfig {
    pub owner: Pubkey,                          // Only account allowed to administer
    pub fee_numerator: u64,                     // e.g. 9970
    pub fee_denominator: u64,                   // e.g. 10000
    pub fee_token: Pubkey,                      // Fee is charged on this token's side
    pub kp_token: Pubkey,                       // Privileged token, settled by mint/burn
    pub trusted_caller: [u8; ETH_ADDRESS_LEN],  // Ethereum address of the settlement signer
    pub paused: bool,                           // Blocks liquidity and swaps
    pub locked: bool,                           // Reentrancy guard
    pub bump: u8,                               // PDA bump for config
    pub authority_bump: u8,                     // PDA bump for engine authority
}

impl EngineConfig {
    pub fn assert_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(self.owner, *caller, AmmError::UnauthorizedAccess);
        Ok(())
    }

    pub fn assert_not_paused(&self) -> Result<()> {
        require!(!self.paused, AmmError::EnginePaused);
        Ok(())
    }

    pub fn is_owner(&self, key: &Pubkey) -> bool {
        self.owner == *key
    }

    pub fn is_fee_token(&self, mint: &Pubkey) -> bool {
        self.fee_token == *mint
    }

    pub fn is_kp_token(&self, mint: &Pubkey) -> bool {
        self.kp_token == *mint
    }

    pub fn set_fee(&mut self, numerator: u64, denominator: u64) -> Result<()> {
        require!(denominator > 0, AmmError::InvalidFee);
        require!(numerator <= denominator, AmmError::InvalidFee);
        self.fee_numerator = numerator;
        self.fee_denominator = denominator;
        Ok(())
    }

    // Acquire the reentrancy lock for the rest of the instruction
    pub fn enter(&mut self) -> Result<()> {
        require!(!self.locked, AmmError::ReentrantCall);
        self.locked = true;
        Ok(())
    }

    pub fn leave(&mut self) {
        self.locked = false;
    }

    pub fn authority_seeds(&self) -> [&[u8]; 2] {
        [ENGINE_AUTHORITY_SEED, std::slice::from_ref(&self.authority_bump)]
    }
}
