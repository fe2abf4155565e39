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

//! Random governance proposal contents for the distribution module, to be fed into a
//! simulation of the proposal pipeline.
//!
//! A harness obtains the weighted generators through [`proposals::proposal_contents`], picks
//! one according to its weight, and calls it with its random stream, the current chain context
//! and its pool of simulated accounts. Generators either produce a [`content::Content`] or
//! `None`, when chain state does not allow for a meaningful proposal.

pub mod content;
pub mod params;
pub mod proposals;
pub mod random;
pub mod state;

pub use content::{
    CommunityPoolSpendProposal, Content, ContentError, SecretFoundationTaxProposal,
};
pub use params::{AppParams, ParamsError};
pub use proposals::{proposal_contents, ContentSimulatorFn, WeightedProposalContent};
pub use state::{FeePool, HasCommunityPool};
