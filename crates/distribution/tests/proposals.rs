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

use govsim_distribution::{
    proposal_contents,
    proposals::{
        secret_foundation_tax_baseline, simulate_community_pool_spend_proposal_content,
        simulate_secret_foundation_tax_proposal_content, DESCRIPTION_LENGTH, TITLE_LENGTH,
    },
    state::mock::MockFeePool,
    Content,
};
use govsim_kernel::{
    dec_from_str,
    testing::{any_accounts, any_dec_coins},
    Account, Address, DecCoin, DecCoins,
};
use num::BigUint;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn uscrt_pool(amount: &str) -> DecCoins {
    DecCoins::new(vec![DecCoin::new("uscrt", dec_from_str(amount).unwrap()).unwrap()]).unwrap()
}

proptest! {
    #[test]
    fn spend_amount_within_chosen_balance(
        seed in any::<u64>(),
        community_pool in any_dec_coins(),
        accounts in any_accounts(1..10)
    ) {
        let keeper = MockFeePool::new(community_pool.clone());
        let simulate = simulate_community_pool_spend_proposal_content::<(), _>(keeper);
        let mut rng = StdRng::seed_from_u64(seed);

        match simulate(&mut rng, &(), &accounts) {
            None => {}
            Some(Content::CommunityPoolSpend(proposal)) => {
                prop_assert_eq!(proposal.amount.len(), 1);
                let coin = &proposal.amount[0];
                let balance = community_pool.amount_of(&coin.denom).to_integer();
                prop_assert!(coin.amount >= 1);
                prop_assert!(BigUint::from(coin.amount) <= balance);
                prop_assert!(accounts.iter().any(|account| account.address == proposal.recipient));
                prop_assert_eq!(proposal.title.len(), TITLE_LENGTH);
                prop_assert_eq!(proposal.description.len(), DESCRIPTION_LENGTH);
            }
            Some(other) => prop_assert!(false, "unexpected content: {other:?}"),
        }
    }

    #[test]
    fn spend_always_skips_on_empty_pool(seed in any::<u64>(), accounts in any_accounts(1..10)) {
        let simulate = simulate_community_pool_spend_proposal_content::<(), _>(MockFeePool::default());
        let mut rng = StdRng::seed_from_u64(seed);
        prop_assert_eq!(simulate(&mut rng, &(), &accounts), None);
    }

    #[test]
    fn spend_produces_content_with_whole_units(
        seed in any::<u64>(),
        community_pool in any_dec_coins(),
        accounts in any_accounts(1..10)
    ) {
        prop_assume!(community_pool
            .iter()
            .all(|coin| coin.truncate_amount() >= BigUint::from(1u8)));
        let keeper = MockFeePool::new(community_pool.clone());
        let simulate = simulate_community_pool_spend_proposal_content::<(), _>(keeper);
        let mut rng = StdRng::seed_from_u64(seed);
        let content = simulate(&mut rng, &(), &accounts);
        prop_assert_eq!(content.is_some(), !community_pool.is_empty());
        if let Some(content) = content {
            prop_assert_eq!(content.validate_basic(), Ok(()));
        }
    }

    #[test]
    fn tax_always_produces_valid_content(seed in any::<u64>(), accounts in any_accounts(1..10)) {
        let simulate = simulate_secret_foundation_tax_proposal_content::<()>();
        let mut rng = StdRng::seed_from_u64(seed);

        match simulate(&mut rng, &(), &accounts) {
            Some(Content::SecretFoundationTax(proposal)) => {
                prop_assert!(proposal.tax <= secret_foundation_tax_baseline());
                prop_assert!(accounts
                    .iter()
                    .any(|account| account.address == proposal.tax_source_address));
                prop_assert_eq!(proposal.title.len(), TITLE_LENGTH);
                prop_assert_eq!(proposal.description.len(), DESCRIPTION_LENGTH);
            }
            other => prop_assert!(false, "unexpected content: {other:?}"),
        }
    }

    #[test]
    fn generators_are_deterministic(
        seed in any::<u64>(),
        community_pool in any_dec_coins(),
        accounts in any_accounts(1..10)
    ) {
        let registry = proposal_contents::<(), _>(MockFeePool::new(community_pool));
        for entry in &registry {
            let first = entry.simulate(&mut StdRng::seed_from_u64(seed), &(), &accounts);
            let second = entry.simulate(&mut StdRng::seed_from_u64(seed), &(), &accounts);
            prop_assert_eq!(first, second);
        }
    }
}

#[test]
fn spend_from_uscrt_pool() {
    let accounts = (1..=3)
        .map(|i| Account::new(Address::new([i; 20])))
        .collect::<Vec<_>>();
    let keeper = MockFeePool::new(uscrt_pool("1000"));
    let simulate = simulate_community_pool_spend_proposal_content::<(), _>(keeper);

    for seed in 0..50 {
        let mut rng = StdRng::seed_from_u64(seed);
        match simulate(&mut rng, &(), &accounts) {
            Some(Content::CommunityPoolSpend(proposal)) => {
                assert_eq!(proposal.amount.len(), 1);
                assert_eq!(proposal.amount[0].denom, "uscrt");
                assert!((1..=1000).contains(&proposal.amount[0].amount));
                assert!(accounts.iter().any(|a| a.address == proposal.recipient));
                assert_eq!(proposal.title.len(), 10);
                assert_eq!(proposal.description.len(), 100);
            }
            other => panic!("unexpected content: {other:?}"),
        }
    }
}

#[test]
fn spend_from_balance_beyond_u64() {
    let accounts = vec![Account::new(Address::new([1; 20]))];
    let community_pool = uscrt_pool("1000000000000000000000000000000");
    let balance = community_pool.amount_of("uscrt").to_integer();
    let simulate =
        simulate_community_pool_spend_proposal_content::<(), _>(MockFeePool::new(community_pool));

    for seed in 0..50 {
        let content = simulate(&mut StdRng::seed_from_u64(seed), &(), &accounts);
        assert_eq!(content.as_ref().map(Content::validate_basic), Some(Ok(())));
        match content {
            Some(Content::CommunityPoolSpend(proposal)) => {
                assert_eq!(proposal.amount.len(), 1);
                assert_eq!(proposal.amount[0].denom, "uscrt");
                assert!(proposal.amount[0].amount >= 1);
                assert!(BigUint::from(proposal.amount[0].amount) <= balance);
            }
            other => panic!("unexpected content: {other:?}"),
        }
    }
}

#[test]
fn spend_from_empty_pool() {
    let accounts = vec![Account::new(Address::new([1; 20]))];
    let simulate = simulate_community_pool_spend_proposal_content::<(), _>(MockFeePool::default());
    for seed in 0..50 {
        assert_eq!(simulate(&mut StdRng::seed_from_u64(seed), &(), &accounts), None);
    }
}

#[test]
fn spend_from_zero_balance() {
    let accounts = vec![Account::new(Address::new([1; 20]))];
    let keeper = MockFeePool::new(uscrt_pool("0"));
    let simulate = simulate_community_pool_spend_proposal_content::<(), _>(keeper);
    for seed in 0..50 {
        assert_eq!(simulate(&mut StdRng::seed_from_u64(seed), &(), &accounts), None);
    }
}

#[test]
fn shared_stream_advances_across_generators() {
    let accounts = vec![Account::new(Address::new([1; 20]))];
    let registry = proposal_contents::<(), _>(MockFeePool::new(uscrt_pool("1000000")));
    let mut rng = StdRng::seed_from_u64(42);

    let first = registry[1].simulate(&mut rng, &(), &accounts);
    let second = registry[1].simulate(&mut rng, &(), &accounts);
    assert_ne!(
        first.map(|c| c.title().to_string()),
        second.map(|c| c.title().to_string())
    );
}
