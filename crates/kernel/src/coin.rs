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

use crate::decimal::{self, Dec};
use num::{BigUint, Zero};
use serde::ser::SerializeStruct;
use std::{fmt, ops::Deref};

const MIN_DENOM_LENGTH: usize = 3;
const MAX_DENOM_LENGTH: usize = 128;

/// A denomination starts with a letter, followed by 2 to 127 letters, digits or one of `/:._-`.
pub fn validate_denom(denom: &str) -> Result<(), CoinError> {
    let mut chars = denom.chars();

    let well_formed = (MIN_DENOM_LENGTH..=MAX_DENOM_LENGTH).contains(&denom.len())
        && chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || "/:._-".contains(c));

    if !well_formed {
        return Err(CoinError::InvalidDenom(denom.to_string()));
    }

    Ok(())
}

// ------------------------------------------------------------------------ Coin

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Coin {
    pub denom: String,
    pub amount: u64,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: u64) -> Result<Self, CoinError> {
        let denom = denom.into();
        validate_denom(&denom)?;
        Ok(Self { denom, amount })
    }
}

impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

// ----------------------------------------------------------------------- Coins

/// A set of coins, sorted by denomination, with unique denominations and positive amounts.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Coins(Vec<Coin>);

impl Coins {
    pub fn new(mut coins: Vec<Coin>) -> Result<Self, CoinError> {
        coins.sort_by(|a, b| a.denom.cmp(&b.denom));

        for coin in &coins {
            validate_denom(&coin.denom)?;
            if coin.amount == 0 {
                return Err(CoinError::ZeroAmount(coin.denom.clone()));
            }
        }

        if let Some(pair) = coins.windows(2).find(|pair| pair[0].denom == pair[1].denom) {
            return Err(CoinError::DuplicateDenom(pair[0].denom.clone()));
        }

        Ok(Self(coins))
    }

    pub fn single(coin: Coin) -> Result<Self, CoinError> {
        Self::new(vec![coin])
    }

    /// Re-check the invariants; coins are public and may have been altered after construction.
    pub fn is_valid(&self) -> bool {
        Self::new(self.0.clone()).is_ok_and(|coins| coins == *self)
    }

    pub fn amount_of(&self, denom: &str) -> u64 {
        self.0
            .iter()
            .find(|coin| coin.denom == denom)
            .map(|coin| coin.amount)
            .unwrap_or_default()
    }
}

impl Deref for Coins {
    type Target = [Coin];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

impl fmt::Display for Coins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut need_separator = false;
        for coin in self.iter() {
            if need_separator {
                write!(f, ",")?;
            }
            write!(f, "{coin}")?;
            need_separator = true;
        }
        Ok(())
    }
}

// --------------------------------------------------------------------- DecCoin

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecCoin {
    pub denom: String,
    pub amount: Dec,
}

impl DecCoin {
    pub fn new(denom: impl Into<String>, amount: Dec) -> Result<Self, CoinError> {
        let denom = denom.into();
        validate_denom(&denom)?;
        Ok(Self { denom, amount })
    }

    /// The integer part of the amount; sub-unit remainders are dropped.
    pub fn truncate_amount(&self) -> BigUint {
        decimal::truncate(&self.amount)
    }
}

impl fmt::Display for DecCoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", decimal::format_dec(&self.amount), self.denom)
    }
}

impl serde::Serialize for DecCoin {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("DecCoin", 2)?;
        s.serialize_field("denom", &self.denom)?;
        s.serialize_field("amount", &decimal::format_dec(&self.amount))?;
        s.end()
    }
}

// -------------------------------------------------------------------- DecCoins

/// A pool of decimal balances, sorted by denomination with unique denominations. Entries with
/// a zero amount are dropped on construction, so an empty pool is one holding nothing at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct DecCoins(Vec<DecCoin>);

impl DecCoins {
    pub fn new(coins: Vec<DecCoin>) -> Result<Self, CoinError> {
        let mut coins = coins
            .into_iter()
            .filter(|coin| !coin.amount.is_zero())
            .collect::<Vec<_>>();

        coins.sort_by(|a, b| a.denom.cmp(&b.denom));

        for coin in &coins {
            validate_denom(&coin.denom)?;
        }

        if let Some(pair) = coins.windows(2).find(|pair| pair[0].denom == pair[1].denom) {
            return Err(CoinError::DuplicateDenom(pair[0].denom.clone()));
        }

        Ok(Self(coins))
    }

    pub fn amount_of(&self, denom: &str) -> Dec {
        self.0
            .iter()
            .find(|coin| coin.denom == denom)
            .map(|coin| coin.amount.clone())
            .unwrap_or_else(decimal::zero)
    }
}

impl Deref for DecCoins {
    type Target = [DecCoin];

    fn deref(&self) -> &Self::Target {
        self.0.as_slice()
    }
}

impl fmt::Display for DecCoins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut need_separator = false;
        for coin in self.iter() {
            if need_separator {
                write!(f, ",")?;
            }
            write!(f, "{coin}")?;
            need_separator = true;
        }
        Ok(())
    }
}

// ------------------------------------------------------------------- CoinError

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CoinError {
    #[error("invalid denomination: {0:?}")]
    InvalidDenom(String),
    #[error("duplicate denomination: {0}")]
    DuplicateDenom(String),
    #[error("coin amount must be positive: {0}")]
    ZeroAmount(String),
}
