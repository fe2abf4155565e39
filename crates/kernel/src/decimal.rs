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

use num::{rational::Ratio, BigUint, One, Zero};

/// An exact, non-negative decimal number. Amounts held in pools and rates carried by proposals
/// are both expressed as `Dec`; arithmetic never rounds until explicitly truncated.
pub type Dec = Ratio<BigUint>;

/// Number of fractional digits carried by decimals when parsed, printed or converted to atomics.
pub const PRECISION: u32 = 18;

/// The scaling factor between a decimal and its atomic (integer) representation: 10^18.
pub fn precision_multiplier() -> BigUint {
    BigUint::from(10u8).pow(PRECISION)
}

pub fn zero() -> Dec {
    Dec::zero()
}

pub fn one() -> Dec {
    Dec::one()
}

/// Build a decimal out of its atomic representation, i.e. `units / 10^18`.
pub fn dec_from_atomics(units: u64) -> Dec {
    Dec::new(BigUint::from(units), precision_multiplier())
}

/// The atomic representation of a decimal. Digits beyond the 18th decimal place are dropped.
pub fn dec_to_atomics(dec: &Dec) -> BigUint {
    (dec * Dec::from_integer(precision_multiplier())).to_integer()
}

/// The integer part of a decimal.
pub fn truncate(dec: &Dec) -> BigUint {
    dec.to_integer()
}

/// Parse a plain decimal string such as `0.20`, `12` or `3.000001`.
pub fn dec_from_str(s: &str) -> Result<Dec, DecimalError> {
    if s.is_empty() {
        return Err(DecimalError::Empty);
    }

    let (integer, fraction) = match s.split_once('.') {
        None => (s, ""),
        Some(("", _)) | Some((_, "")) => return Err(DecimalError::Malformed(s.to_string())),
        Some(parts) => parts,
    };

    if !integer
        .bytes()
        .chain(fraction.bytes())
        .all(|b| b.is_ascii_digit())
    {
        return Err(DecimalError::Malformed(s.to_string()));
    }

    if fraction.len() > PRECISION as usize {
        return Err(DecimalError::TooPrecise {
            input: s.to_string(),
            digits: fraction.len(),
        });
    }

    let digits = format!("{integer}{fraction}");
    let numerator = BigUint::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| DecimalError::Malformed(s.to_string()))?;

    Ok(Dec::new(
        numerator,
        BigUint::from(10u8).pow(fraction.len() as u32),
    ))
}

/// Render a decimal with exactly 18 fractional digits (truncating any further digits).
pub fn format_dec(dec: &Dec) -> String {
    let atomics = dec_to_atomics(dec);
    let multiplier = precision_multiplier();
    let integer = &atomics / &multiplier;
    let fraction = (&atomics % &multiplier).to_string();
    format!(
        "{integer}.{}{fraction}",
        "0".repeat((PRECISION as usize).saturating_sub(fraction.len()))
    )
}

pub fn serialize_dec<S: serde::Serializer>(dec: &Dec, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format_dec(dec))
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecimalError {
    #[error("empty decimal string")]
    Empty,
    #[error("malformed decimal string: {0:?}")]
    Malformed(String),
    #[error("decimal {input:?} has {digits} fractional digits, at most {PRECISION} are supported")]
    TooPrecise { input: String, digits: usize },
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("0.20", 1, 5; "fraction")]
    #[test_case("1", 1, 1; "integer")]
    #[test_case("12.5", 25, 2; "mixed")]
    #[test_case("000.000001", 1, 1_000_000; "leading zeros")]
    #[test_case("0", 0, 1; "zero")]
    fn parse_decimals(s: &str, numerator: u64, denominator: u64) {
        assert_eq!(
            dec_from_str(s),
            Ok(Dec::new(BigUint::from(numerator), BigUint::from(denominator)))
        );
    }

    #[test_case("" => DecimalError::Empty; "empty")]
    #[test_case("-0.5" => DecimalError::Malformed("-0.5".to_string()); "negative")]
    #[test_case("+1" => DecimalError::Malformed("+1".to_string()); "explicit sign")]
    #[test_case("1.2.3" => DecimalError::Malformed("1.2.3".to_string()); "two dots")]
    #[test_case(".5" => DecimalError::Malformed(".5".to_string()); "no integer part")]
    #[test_case("5." => DecimalError::Malformed("5.".to_string()); "no fractional part")]
    #[test_case("1e5" => DecimalError::Malformed("1e5".to_string()); "exponent")]
    #[test_case("0.0000000000000000001" => DecimalError::TooPrecise { input: "0.0000000000000000001".to_string(), digits: 19 }; "too precise")]
    fn reject_decimals(s: &str) -> DecimalError {
        match dec_from_str(s) {
            Err(e) => e,
            Ok(dec) => panic!("unexpectedly parsed {s:?} as {dec}"),
        }
    }

    #[test_case("0.20" => "0.200000000000000000")]
    #[test_case("1000" => "1000.000000000000000000")]
    #[test_case("0.000000000000000001" => "0.000000000000000001")]
    #[test_case("0" => "0.000000000000000000")]
    fn format_decimals(s: &str) -> String {
        format_dec(&dec_from_str(s).unwrap())
    }

    #[test]
    fn format_truncates_beyond_precision() {
        let third = Dec::new(BigUint::from(1u8), BigUint::from(3u8));
        assert_eq!(format_dec(&third), "0.333333333333333333");
    }

    #[test]
    fn atomics_conversions() {
        let rate = dec_from_str("0.20").unwrap();
        assert_eq!(dec_to_atomics(&rate), BigUint::from(200_000_000_000_000_000u64));
        assert_eq!(dec_from_atomics(200_000_000_000_000_000), rate);
    }

    #[test]
    fn truncate_floors() {
        assert_eq!(truncate(&dec_from_str("999.999").unwrap()), BigUint::from(999u32));
        assert_eq!(truncate(&dec_from_str("0.5").unwrap()), BigUint::zero());
    }
}
