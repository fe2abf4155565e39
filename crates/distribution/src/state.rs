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

use govsim_kernel::DecCoins;

/// Funds held by the distribution module.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct FeePool {
    /// Balances set aside for the community, spendable through governance.
    pub community_pool: DecCoins,
}

/// Read-only access to the community pool, as seen from a context `C` (typically the state
/// of the simulated chain at the current block).
pub trait HasCommunityPool<C>: Send + Sync {
    fn community_pool(&self, ctx: &C) -> DecCoins;
}

impl<C, F> HasCommunityPool<C> for F
where
    F: Fn(&C) -> DecCoins + Send + Sync,
{
    fn community_pool(&self, ctx: &C) -> DecCoins {
        self(ctx)
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    use super::{FeePool, HasCommunityPool};
    use govsim_kernel::DecCoins;

    /// A keeper holding a fixed fee pool, whatever the context.
    #[derive(Debug, Clone, Default)]
    pub struct MockFeePool(pub FeePool);

    impl MockFeePool {
        pub fn new(community_pool: DecCoins) -> Self {
            Self(FeePool { community_pool })
        }
    }

    impl<C> HasCommunityPool<C> for MockFeePool {
        fn community_pool(&self, _ctx: &C) -> DecCoins {
            self.0.community_pool.clone()
        }
    }
}
