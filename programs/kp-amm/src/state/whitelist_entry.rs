// Whitelist Entry State
//
// Per (pool, account) access flag, PDA ["whitelist", pool, user].
// Only consulted when the pool is not public.

use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace, Default)]
pub struct WhitelistEntry {
    pub pool: Pubkey,
    pub user: Pubkey,
    pub status: bool,
    pub bump: u8,
}

impl WhitelistEntry {
    pub fn is_allowed(&self, pool: &Pubkey, user: &Pubkey) -> bool {
        self.status && self.pool == *pool && self.user == *user
    }
}
