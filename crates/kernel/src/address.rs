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

use bech32::{Bech32, Hrp};
use std::{fmt, str::FromStr};

/// Human-readable part of account addresses.
pub const ADDRESS_HRP: Hrp = Hrp::parse_unchecked("secret");

pub const ADDRESS_LENGTH: usize = 20;

/// An account address; rendered and parsed as bech32 with the `secret` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; ADDRESS_LENGTH]);

impl Address {
    pub fn new(bytes: [u8; ADDRESS_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AddressError> {
        <[u8; ADDRESS_LENGTH]>::try_from(bytes)
            .map(Self)
            .map_err(|_| AddressError::InvalidLength(bytes.len()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = bech32::encode::<Bech32>(ADDRESS_HRP, &self.0).map_err(|_| fmt::Error)?;
        f.write_str(&encoded)
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hrp, bytes) = bech32::decode(s)?;

        if hrp != ADDRESS_HRP {
            return Err(AddressError::UnexpectedPrefix(hrp.to_string()));
        }

        Self::from_bytes(&bytes)
    }
}

impl serde::Serialize for Address {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Address {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AddressError {
    #[error("malformed bech32 address: {0}")]
    Bech32(#[from] bech32::DecodeError),
    #[error("unexpected address prefix {0:?}, expected \"secret\"")]
    UnexpectedPrefix(String),
    #[error("addresses are {ADDRESS_LENGTH} bytes long, got {0}")]
    InvalidLength(usize),
}

// --------------------------------------------------------------------- Account

/// A simulated account, as handed out by the account pool of a simulation harness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
pub struct Account {
    pub address: Address,
}

impl Account {
    pub fn new(address: Address) -> Self {
        Self { address }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    proptest! {
        #[test]
        fn display_then_parse(bytes in any::<[u8; ADDRESS_LENGTH]>()) {
            let address = Address::new(bytes);
            let rendered = address.to_string();
            prop_assert!(rendered.starts_with("secret1"));
            prop_assert_eq!(rendered.parse::<Address>().unwrap(), address);
        }
    }

    #[test]
    fn serialize_as_bech32() {
        let address = Address::new([0; ADDRESS_LENGTH]);
        assert_eq!(
            serde_json::to_string(&address).unwrap(),
            format!("\"{address}\"")
        );
    }

    #[test]
    fn deserialize_from_bech32() {
        let address = Address::new([7; ADDRESS_LENGTH]);
        let json = format!("\"{address}\"");
        assert_eq!(serde_json::from_str::<Address>(&json).unwrap(), address);
        assert!(serde_json::from_str::<Address>("\"secret1\"").is_err());
    }

    #[test]
    fn reject_foreign_prefix() {
        let cosmos = bech32::encode::<Bech32>(Hrp::parse("cosmos").unwrap(), &[0; 20]).unwrap();
        assert!(matches!(
            cosmos.parse::<Address>(),
            Err(AddressError::UnexpectedPrefix(prefix)) if prefix == "cosmos"
        ));
    }

    #[test_case(&[]; "empty")]
    #[test_case(&[0; 19]; "too short")]
    #[test_case(&[0; 32]; "too long")]
    fn reject_invalid_lengths(bytes: &[u8]) {
        assert!(matches!(
            Address::from_bytes(bytes),
            Err(AddressError::InvalidLength(len)) if len == bytes.len()
        ));
    }

    #[test]
    fn reject_garbage() {
        assert!(matches!(
            "not-an-address".parse::<Address>(),
            Err(AddressError::Bech32(..))
        ));
    }

    #[test]
    fn from_hex_bytes() {
        let bytes = hex::decode("0123456789abcdef0123456789abcdef01234567").unwrap();
        let address = Address::from_bytes(&bytes).unwrap();
        assert_eq!(address.as_bytes(), bytes.as_slice());
    }
}
