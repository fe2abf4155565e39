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

use govsim_kernel::{decimal::precision_multiplier, dec_to_atomics, Account, Dec};
use num::{BigUint, ToPrimitive, Zero};
use rand::{distr::Alphanumeric, Rng};

/// Pick an account uniformly at random. Only returns `None` when the pool is empty.
pub fn random_account<'a, R: Rng>(rng: &mut R, accounts: &'a [Account]) -> Option<&'a Account> {
    if accounts.is_empty() {
        return None;
    }
    accounts.get(rng.random_range(0..accounts.len()))
}

/// A string of exactly `length` ASCII alphanumeric characters.
pub fn random_string_of_length<R: Rng>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}

/// An integer in [1, max]. Bounds beyond `u64::MAX` are capped to `u64::MAX`.
pub fn random_positive_int<R: Rng>(rng: &mut R, max: &BigUint) -> Result<u64, RandomError> {
    let max = max.to_u64().unwrap_or(u64::MAX);

    if max < 1 {
        return Err(RandomError::MaxTooSmall);
    }

    Ok(rng.random_range(1..=max))
}

/// A decimal in [0, max]; draws strictly inside the interval carry 18 fractional digits.
///
/// One draw in ten yields exactly `0` and another one in ten yields exactly `max`, so that
/// boundaries get exercised often; the rest is uniform over the atomics of the interval, however
/// large `max` is.
pub fn random_dec_amount<R: Rng>(rng: &mut R, max: &Dec) -> Dec {
    match rng.random_range(0..10) {
        0 => Dec::zero(),
        1 => max.clone(),
        _ => Dec::new(
            random_biguint_up_to(rng, &dec_to_atomics(max)),
            precision_multiplier(),
        ),
    }
}

/// A uniform integer in [0, max], drawn 32 bits at a time and rejected until it fits.
fn random_biguint_up_to<R: Rng>(rng: &mut R, max: &BigUint) -> BigUint {
    let bits = max.bits();
    let digits = bits.div_ceil(32);
    let excess = (digits * 32 - bits) as u32;

    loop {
        let mut limbs = (0..digits).map(|_| rng.random::<u32>()).collect::<Vec<_>>();
        if let Some(top) = limbs.last_mut() {
            *top >>= excess;
        }
        let candidate = BigUint::new(limbs);
        if &candidate <= max {
            return candidate;
        }
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum RandomError {
    #[error("upper bound must be at least 1")]
    MaxTooSmall,
}
