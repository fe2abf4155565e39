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

use govsim_kernel::{
    decimal::{self, serialize_dec},
    format_dec, Address, Coins, Dec,
};
use std::fmt;

/// Route under which governance hands distribution proposals over for execution.
pub const ROUTER_KEY: &str = "distribution";

pub const PROPOSAL_TYPE_COMMUNITY_POOL_SPEND: &str = "CommunityPoolSpend";
pub const PROPOSAL_TYPE_SECRET_FOUNDATION_TAX: &str = "SecretFoundationTax";

pub const MAX_TITLE_LENGTH: usize = 140;
pub const MAX_DESCRIPTION_LENGTH: usize = 5000;

// Content
// ----------------------------------------------------------------------------

/// The payload of a governance proposal handled by the distribution module. One variant per
/// kind of proposal.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "type", content = "value")]
pub enum Content {
    #[serde(rename = "CommunityPoolSpend")]
    CommunityPoolSpend(CommunityPoolSpendProposal),
    #[serde(rename = "SecretFoundationTax")]
    SecretFoundationTax(SecretFoundationTaxProposal),
}

impl Content {
    pub fn title(&self) -> &str {
        match self {
            Self::CommunityPoolSpend(p) => &p.title,
            Self::SecretFoundationTax(p) => &p.title,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            Self::CommunityPoolSpend(p) => &p.description,
            Self::SecretFoundationTax(p) => &p.description,
        }
    }

    pub fn proposal_route(&self) -> &'static str {
        ROUTER_KEY
    }

    pub fn proposal_type(&self) -> &'static str {
        match self {
            Self::CommunityPoolSpend(..) => PROPOSAL_TYPE_COMMUNITY_POOL_SPEND,
            Self::SecretFoundationTax(..) => PROPOSAL_TYPE_SECRET_FOUNDATION_TAX,
        }
    }

    /// Stateless well-formedness checks, as performed before a proposal is submitted.
    pub fn validate_basic(&self) -> Result<(), ContentError> {
        validate_text(self.title(), self.description())?;

        match self {
            Self::CommunityPoolSpend(p) => {
                if p.amount.is_empty() {
                    return Err(ContentError::EmptyAmount);
                }
                if !p.amount.is_valid() {
                    return Err(ContentError::InvalidAmount(p.amount.to_string()));
                }
            }
            Self::SecretFoundationTax(p) => {
                if p.tax > decimal::one() {
                    return Err(ContentError::TaxOutOfRange(format_dec(&p.tax)));
                }
            }
        }

        Ok(())
    }
}

impl From<CommunityPoolSpendProposal> for Content {
    fn from(proposal: CommunityPoolSpendProposal) -> Self {
        Self::CommunityPoolSpend(proposal)
    }
}

impl From<SecretFoundationTaxProposal> for Content {
    fn from(proposal: SecretFoundationTaxProposal) -> Self {
        Self::SecretFoundationTax(proposal)
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CommunityPoolSpend(p) => fmt::Display::fmt(p, f),
            Self::SecretFoundationTax(p) => fmt::Display::fmt(p, f),
        }
    }
}

fn validate_text(title: &str, description: &str) -> Result<(), ContentError> {
    if title.trim().is_empty() {
        return Err(ContentError::BlankTitle);
    }
    if title.len() > MAX_TITLE_LENGTH {
        return Err(ContentError::TitleTooLong(title.len()));
    }
    if description.trim().is_empty() {
        return Err(ContentError::BlankDescription);
    }
    if description.len() > MAX_DESCRIPTION_LENGTH {
        return Err(ContentError::DescriptionTooLong(description.len()));
    }
    Ok(())
}

// CommunityPoolSpendProposal
// ----------------------------------------------------------------------------

/// Spend funds from the community pool, in favor of a recipient.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CommunityPoolSpendProposal {
    pub title: String,
    pub description: String,
    pub recipient: Address,
    pub amount: Coins,
}

impl CommunityPoolSpendProposal {
    pub fn new(title: String, description: String, recipient: Address, amount: Coins) -> Self {
        Self {
            title,
            description,
            recipient,
            amount,
        }
    }
}

impl fmt::Display for CommunityPoolSpendProposal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Community Pool Spend Proposal:")?;
        writeln!(f, "  Title:       {}", self.title)?;
        writeln!(f, "  Description: {}", self.description)?;
        writeln!(f, "  Recipient:   {}", self.recipient)?;
        write!(f, "  Amount:      {}", self.amount)
    }
}

// SecretFoundationTaxProposal
// ----------------------------------------------------------------------------

/// Change the share of rewards redirected to the foundation, and the address it is paid to.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SecretFoundationTaxProposal {
    pub title: String,
    pub description: String,
    #[serde(serialize_with = "serialize_dec")]
    pub tax: Dec,
    pub tax_source_address: Address,
}

impl SecretFoundationTaxProposal {
    pub fn new(title: String, description: String, tax: Dec, tax_source_address: Address) -> Self {
        Self {
            title,
            description,
            tax,
            tax_source_address,
        }
    }
}

impl fmt::Display for SecretFoundationTaxProposal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Secret Foundation Tax Proposal:")?;
        writeln!(f, "  Title:       {}", self.title)?;
        writeln!(f, "  Description: {}", self.description)?;
        writeln!(f, "  Tax:         {}", format_dec(&self.tax))?;
        write!(f, "  Address:     {}", self.tax_source_address)
    }
}

// ContentError
// ----------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error("proposal title cannot be blank")]
    BlankTitle,
    #[error("proposal title is {0} bytes long, at most {MAX_TITLE_LENGTH} are allowed")]
    TitleTooLong(usize),
    #[error("proposal description cannot be blank")]
    BlankDescription,
    #[error("proposal description is {0} bytes long, at most {MAX_DESCRIPTION_LENGTH} are allowed")]
    DescriptionTooLong(usize),
    #[error("spend amount cannot be empty")]
    EmptyAmount,
    #[error("invalid spend amount: {0}")]
    InvalidAmount(String),
    #[error("foundation tax must lie within [0, 1], got {0}")]
    TaxOutOfRange(String),
}
