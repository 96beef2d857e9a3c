// Update Whitelist Batch Instruction
//
// Sets many whitelist flags on one pool in a single call.
// remaining_accounts[i] must be the entry PDA of users[i]; missing entries
// are created here with the owner as payer. An address that already holds
// lamports is topped up to rent exemption, then allocated and assigned.

use std::io::Cursor;

use anchor_lang::prelude::*;
use anchor_lang::system_program::{
    Allocate, Assign, CreateAccount, Transfer, allocate, assign, create_account, transfer,
};

use crate::{constants::*, errors::*, events::*, state::*};

#[derive(Accounts)]
pub struct UpdateWhitelistBatch<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        seeds = [ENGINE_CONFIG_SEED],
        bump = config.bump,
    )]
    pub config: Account<'info, EngineConfig>,

    #[account(
        seeds = [POOL_SEED, pool.token0.as_ref(), pool.token1.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Account<'info, Pool>,

    pub system_program: Program<'info, System>,
}

impl<'info> UpdateWhitelistBatch<'info> {
    pub fn update_whitelist_batch(
        &mut self,
        users: Vec<Pubkey>,
        statuses: Vec<bool>,
        entries: &[AccountInfo<'info>],
    ) -> Result<()> {
        self.config.assert_owner(&self.owner.key())?;
        self.pool.assert_exists()?;

        require!(users.len() == statuses.len(), AmmError::LengthMismatch);
        require!(users.len() == entries.len(), AmmError::LengthMismatch);

        let pool_key = self.pool.key();

        for ((user, status), entry_info) in users.iter().zip(statuses.iter()).zip(entries.iter()) {
            let (expected, bump) = Pubkey::find_program_address(
                &[WHITELIST_SEED, pool_key.as_ref(), user.as_ref()],
                &crate::ID,
            );
            require_keys_eq!(entry_info.key(), expected, AmmError::InvalidAccount);

            if entry_info.data_is_empty() {
                self.create_entry(entry_info, &pool_key, user, bump)?;
            } else {
                require_keys_eq!(*entry_info.owner, crate::ID, AmmError::InvalidAccount);
            }

            let entry = WhitelistEntry {
                pool: pool_key,
                user: *user,
                status: *status,
                bump,
            };
            let mut data = entry_info.try_borrow_mut_data()?;
            let dst: &mut [u8] = &mut data;
            entry.try_serialize(&mut Cursor::new(dst))?;

            emit!(WhitelistUpdated {
                user: *user,
                token_a: self.pool.token0,
                token_b: self.pool.token1,
                status: *status,
            });
        }

        msg!("Whitelist batch applied: {} entries", users.len());

        Ok(())
    }

    fn create_entry(
        &self,
        entry_info: &AccountInfo<'info>,
        pool_key: &Pubkey,
        user: &Pubkey,
        bump: u8,
    ) -> Result<()> {
        let space = ANCHOR_DISCRIMINATOR + WhitelistEntry::INIT_SPACE;
        let lamports = Rent::get()?.minimum_balance(space);

        let bump_seed = [bump];
        let entry_seeds: &[&[u8]] = &[WHITELIST_SEED, pool_key.as_ref(), user.as_ref(), &bump_seed];
        let signer_seeds = &[entry_seeds];

        let current_lamports = entry_info.lamports();
        if current_lamports == 0 {
            return create_account(
                CpiContext::new_with_signer(
                    self.system_program.to_account_info(),
                    CreateAccount {
                        from: self.owner.to_account_info(),
                        to: entry_info.clone(),
                    },
                    signer_seeds,
                ),
                lamports,
                space as u64,
                &crate::ID,
            );
        }

        // create_account rejects funded addresses
        let shortfall = lamports.saturating_sub(current_lamports);
        if shortfall > 0 {
            transfer(
                CpiContext::new(
                    self.system_program.to_account_info(),
                    Transfer {
                        from: self.owner.to_account_info(),
                        to: entry_info.clone(),
                    },
                ),
                shortfall,
            )?;
        }

        allocate(
            CpiContext::new_with_signer(
                self.system_program.to_account_info(),
                Allocate {
                    account_to_allocate: entry_info.clone(),
                },
                signer_seeds,
            ),
            space as u64,
        )?;

        assign(
            CpiContext::new_with_signer(
                self.system_program.to_account_info(),
                Assign {
                    account_to_assign: entry_info.clone(),
                },
                signer_seeds,
            ),
            &crate::ID,
        )
    }
}
