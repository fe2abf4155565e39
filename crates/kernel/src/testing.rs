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

use crate::{Account, Address, Dec, DecCoin, DecCoins, ADDRESS_LENGTH};
use num::BigUint;
use proptest::{
    collection::{self, SizeRange},
    prelude::*,
};

pub fn any_address() -> impl Strategy<Value = Address> {
    any::<[u8; ADDRESS_LENGTH]>().prop_map(Address::new)
}

pub fn any_account() -> impl Strategy<Value = Account> {
    any_address().prop_map(Account::new)
}

pub fn any_accounts(size: impl Into<SizeRange>) -> impl Strategy<Value = Vec<Account>> {
    collection::vec(any_account(), size)
}

pub fn any_denom() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{2,15}"
}

prop_compose! {
    /// A decimal amount with up to six fractional digits, zero included.
    pub fn any_dec_amount()(
        integer in 0u64..1_000_000_000_000,
        fraction in 0u32..1_000_000,
    ) -> Dec {
        Dec::from_integer(BigUint::from(integer))
            + Dec::new(BigUint::from(fraction), BigUint::from(1_000_000u32))
    }
}

/// A well-formed balance pool of up to five denominations; possibly empty.
pub fn any_dec_coins() -> impl Strategy<Value = DecCoins> {
    collection::btree_map(any_denom(), any_dec_amount(), 0..5).prop_filter_map(
        "well-formed balance pool",
        |balances| {
            DecCoins::new(
                balances
                    .into_iter()
                    .map(|(denom, amount)| DecCoin { denom, amount })
                    .collect(),
            )
            .ok()
        },
    )
}
