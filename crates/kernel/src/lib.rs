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

//! Plain ledger data shared by simulation components: exact decimals, coins, balance pools,
//! addresses and simulated accounts.

pub mod address;
pub mod coin;
pub mod decimal;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use address::{Account, Address, AddressError, ADDRESS_HRP, ADDRESS_LENGTH};
pub use coin::{validate_denom, Coin, CoinError, Coins, DecCoin, DecCoins};
pub use decimal::{
    dec_from_atomics, dec_from_str, dec_to_atomics, format_dec, Dec, DecimalError, PRECISION,
};
