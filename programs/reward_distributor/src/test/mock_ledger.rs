use std::collections::HashMap;

use anchor_lang::prelude::*;
use crate::error::RewardDistributorError;
use crate::instructions::*;
use crate::state::*;
use crate::utils::RewardLedger;

/// In-memory single-mint token ledger: holder balances, a vault and the mint supply
#[derive(Debug, Default)]
pub struct TokenWorld {
    pub supply: u64,
    pub vault: u64,
    pub balances: HashMap<Pubkey, u64>,
    /// Every vault payout, in order
    pub payouts: Vec<(Pubkey, u64)>,
    /// Makes the next vault transfers fail as if the token program rejected them
    pub reject_transfers: bool,
}

impl TokenWorld {
    pub fn mint_to(&mut self, holder: Pubkey, amount: u64) {
        *self.balances.entry(holder).or_default() += amount;
        self.supply += amount;
    }

    pub fn mint_to_vault(&mut self, amount: u64) {
        self.vault += amount;
        self.supply += amount;
    }

    pub fn move_tokens(&mut self, from: Pubkey, to: Pubkey, amount: u64) {
        let source = self.balances.entry(from).or_default();
        assert!(*source >= amount, "test setup moves more than {} holds", from);
        *source -= amount;
        *self.balances.entry(to).or_default() += amount;
    }

    pub fn balance_of(&self, holder: &Pubkey) -> u64 {
        self.balances.get(holder).copied().unwrap_or(0)
    }

    pub fn total_paid(&self) -> u64 {
        self.payouts.iter().map(|(_, amount)| amount).sum()
    }

    pub fn ledger_for(&mut self, holder: Pubkey) -> HolderLedger<'_> {
        HolderLedger { world: self, holder }
    }
}

/// The world as seen by one distribution request
pub struct HolderLedger<'a> {
    world: &'a mut TokenWorld,
    holder: Pubkey,
}

impl RewardLedger for HolderLedger<'_> {
    fn holder_balance(&self) -> Result<u64> {
        Ok(self.world.balance_of(&self.holder))
    }

    fn vault_balance(&self) -> Result<u64> {
        Ok(self.world.vault)
    }

    fn total_supply(&self) -> Result<u64> {
        Ok(self.world.supply)
    }

    fn transfer_to_holder(&mut self, amount: u64) -> Result<()> {
        require!(
            !self.world.reject_transfers && self.world.vault >= amount,
            RewardDistributorError::InsufficientVaultBalance
        );
        self.world.vault -= amount;
        *self.world.balances.entry(self.holder).or_default() += amount;
        self.world.payouts.push((self.holder, amount));
        Ok(())
    }
}

/// A distributor with its claim records, driven against a TokenWorld
pub struct Harness {
    pub distributor: DistributorState,
    pub claims: HashMap<Pubkey, ClaimStatus>,
    pub world: TokenWorld,
}

impl Harness {
    pub fn new(distribution_interval: Option<i64>) -> Self {
        let mut distributor = DistributorState::default();
        distributor
            .initialize(
                255,
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                distribution_interval,
                None,
            )
            .unwrap();

        Harness {
            distributor,
            claims: HashMap::new(),
            world: TokenWorld::default(),
        }
    }

    pub fn distribute(&mut self, holder: Pubkey, now: i64) -> Result<DistributionOutcome> {
        let claim_status = self.claims.entry(holder).or_default();
        let mut ledger = self.world.ledger_for(holder);
        process_distribution(&mut self.distributor, claim_status, &mut ledger, holder, now)
    }

    pub fn claim_of(&self, holder: &Pubkey) -> ClaimStatus {
        self.claims.get(holder).cloned().unwrap_or_default()
    }
}
