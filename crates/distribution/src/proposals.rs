// Copyright 2025 Govsim Maintainers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::{
    content::{CommunityPoolSpendProposal, Content, SecretFoundationTaxProposal},
    params::{AppParams, ParamsError},
    random::{random_account, random_dec_amount, random_positive_int, random_string_of_length},
    state::HasCommunityPool,
};
use govsim_kernel::{Account, Coin, Coins, Dec, DecCoins};
use num::BigUint;
use rand::{rngs::StdRng, Rng};
use std::fmt;
use tracing::{instrument, trace, warn, Level};

const EVENT_TARGET: &str = "govsim::distribution::proposals";

pub const OP_WEIGHT_SUBMIT_COMMUNITY_SPEND_PROPOSAL: &str =
    "op_weight_submit_community_spend_proposal";
pub const OP_WEIGHT_SUBMIT_SECRET_FOUNDATION_TAX_PROPOSAL: &str =
    "op_weight_submit_secret_foundation_tax_proposal";

pub const DEFAULT_WEIGHT_COMMUNITY_SPEND_PROPOSAL: u32 = 5;
pub const DEFAULT_WEIGHT_SECRET_FOUNDATION_TAX_PROPOSAL: u32 = 5;

/// Length of generated proposal titles.
pub const TITLE_LENGTH: usize = 10;

/// Length of generated proposal descriptions.
pub const DESCRIPTION_LENGTH: usize = 100;

/// Upper bound of generated foundation tax rates: 0.20.
pub fn secret_foundation_tax_baseline() -> Dec {
    Dec::new(BigUint::from(1u8), BigUint::from(5u8))
}

/// Generates the content of a proposal out of a random stream, a context to read chain state
/// from and a pool of accounts. `None` means no proposal this round.
pub type ContentSimulatorFn<C> =
    Box<dyn Fn(&mut StdRng, &C, &[Account]) -> Option<Content> + Send + Sync>;

// WeightedProposalContent
// ----------------------------------------------------------------------------

/// A proposal content generator, along with the weight a harness should pick it with. The
/// weight may be overridden by the parameters file, under `app_params_key`.
pub struct WeightedProposalContent<C> {
    app_params_key: &'static str,
    default_weight: u32,
    content_simulator: ContentSimulatorFn<C>,
}

impl<C> WeightedProposalContent<C> {
    pub fn new(
        app_params_key: &'static str,
        default_weight: u32,
        content_simulator: ContentSimulatorFn<C>,
    ) -> Self {
        Self {
            app_params_key,
            default_weight,
            content_simulator,
        }
    }

    pub fn app_params_key(&self) -> &'static str {
        self.app_params_key
    }

    pub fn default_weight(&self) -> u32 {
        self.default_weight
    }

    /// The weight configured in `params` for this generator, or its default weight.
    pub fn weight(&self, params: &AppParams) -> Result<u32, ParamsError> {
        params.weight(self.app_params_key, self.default_weight)
    }

    pub fn simulate(&self, rng: &mut StdRng, ctx: &C, accounts: &[Account]) -> Option<Content> {
        (self.content_simulator)(rng, ctx, accounts)
    }
}

impl<C> fmt::Debug for WeightedProposalContent<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeightedProposalContent")
            .field("app_params_key", &self.app_params_key)
            .field("default_weight", &self.default_weight)
            .finish_non_exhaustive()
    }
}

// Registry
// ----------------------------------------------------------------------------

/// All proposal content generators of the distribution module, in a fixed order: community
/// pool spends first, then foundation tax changes.
pub fn proposal_contents<C, K>(keeper: K) -> Vec<WeightedProposalContent<C>>
where
    C: 'static,
    K: HasCommunityPool<C> + 'static,
{
    vec![
        WeightedProposalContent::new(
            OP_WEIGHT_SUBMIT_COMMUNITY_SPEND_PROPOSAL,
            DEFAULT_WEIGHT_COMMUNITY_SPEND_PROPOSAL,
            simulate_community_pool_spend_proposal_content(keeper),
        ),
        WeightedProposalContent::new(
            OP_WEIGHT_SUBMIT_SECRET_FOUNDATION_TAX_PROPOSAL,
            DEFAULT_WEIGHT_SECRET_FOUNDATION_TAX_PROPOSAL,
            simulate_secret_foundation_tax_proposal_content(),
        ),
    ]
}

// Community pool spend
// ----------------------------------------------------------------------------

pub fn simulate_community_pool_spend_proposal_content<C, K>(keeper: K) -> ContentSimulatorFn<C>
where
    C: 'static,
    K: HasCommunityPool<C> + 'static,
{
    Box::new(move |rng: &mut StdRng, ctx: &C, accounts: &[Account]| {
        community_pool_spend_content(rng, &keeper.community_pool(ctx), accounts)
    })
}

/// A proposal spending a random, positive amount of one of the denominations held in the
/// community pool. Skips when the pool holds no whole unit of the chosen denomination.
#[instrument(
    level = Level::TRACE,
    skip_all,
    name = "simulate.community_pool_spend",
    fields(accounts = accounts.len(), denominations = community_pool.len())
)]
pub fn community_pool_spend_content<R: Rng>(
    rng: &mut R,
    community_pool: &DecCoins,
    accounts: &[Account],
) -> Option<Content> {
    let Some(recipient) = random_account(rng, accounts) else {
        warn!(target: EVENT_TARGET, "no account to pick a recipient from");
        return None;
    };

    if community_pool.is_empty() {
        trace!(target: EVENT_TARGET, reason = "empty community pool", "skip");
        return None;
    }

    let balance = &community_pool[rng.random_range(0..community_pool.len())];

    let amount = match random_positive_int(rng, &balance.truncate_amount()) {
        Ok(amount) => amount,
        Err(e) => {
            trace!(target: EVENT_TARGET, denom = %balance.denom, reason = %e, "skip");
            return None;
        }
    };

    let amount = match Coin::new(balance.denom.clone(), amount).and_then(Coins::single) {
        Ok(coins) => coins,
        Err(e) => {
            warn!(target: EVENT_TARGET, denom = %balance.denom, reason = %e, "skip");
            return None;
        }
    };

    trace!(target: EVENT_TARGET, %amount, recipient = %recipient.address, "community_pool_spend");

    Some(
        CommunityPoolSpendProposal::new(
            random_string_of_length(rng, TITLE_LENGTH),
            random_string_of_length(rng, DESCRIPTION_LENGTH),
            recipient.address,
            amount,
        )
        .into(),
    )
}

// Secret foundation tax
// ----------------------------------------------------------------------------

pub fn simulate_secret_foundation_tax_proposal_content<C>() -> ContentSimulatorFn<C>
where
    C: 'static,
{
    Box::new(|rng: &mut StdRng, _ctx: &C, accounts: &[Account]| {
        secret_foundation_tax_content(rng, accounts)
    })
}

/// A proposal setting the foundation tax to a random rate within [0, 0.20], paid to a random
/// account. Only depends on the random stream.
#[instrument(
    level = Level::TRACE,
    skip_all,
    name = "simulate.secret_foundation_tax",
    fields(accounts = accounts.len())
)]
pub fn secret_foundation_tax_content<R: Rng>(rng: &mut R, accounts: &[Account]) -> Option<Content> {
    let Some(proposer) = random_account(rng, accounts) else {
        warn!(target: EVENT_TARGET, "no account to pick a proposer from");
        return None;
    };

    let title = random_string_of_length(rng, TITLE_LENGTH);
    let description = random_string_of_length(rng, DESCRIPTION_LENGTH);
    let tax = random_dec_amount(rng, &secret_foundation_tax_baseline());

    Some(SecretFoundationTaxProposal::new(title, description, tax, proposer.address).into())
}
