// SPDX-FileCopyrightText: 2026 ArcheBase
//
// SPDX-License-Identifier: MulanPSL-2.0

//! Round-robin routing strategy.

use crate::core::Lane;

use super::BitRouter;

/// Alternating routing strategy: even bit indices to A, odd to B.
///
/// Ignores the current stream lengths entirely. On the default pipeline this
/// produces the same routing as [`BalancedRouter`](super::BalancedRouter),
/// since the balanced rule alternates strictly when both streams receive
/// every bit; it exists as the simplest second conforming strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobinRouter;

impl BitRouter for RoundRobinRouter {
    fn route(&self, bit_index: u64, _len_a: usize, _len_b: usize) -> Lane {
        if bit_index % 2 == 0 {
            Lane::A
        } else {
            Lane::B
        }
    }

    fn name(&self) -> &'static str {
        "round-robin"
    }

    fn box_clone(&self) -> Box<dyn BitRouter> {
        Box::new(*self)
    }
}
