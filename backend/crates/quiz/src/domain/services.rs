//! Domain Services
//!
//! Pure domain logic for the leaderboard.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::domain::entities::User;

/// Heap entry: greater means better ranked.
///
/// Higher score wins; on equal score the lower id wins.
struct Ranked(User);

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .score()
            .cmp(&other.0.score())
            .then_with(|| other.0.id.cmp(&self.0.id))
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

/// Select the `k` best users, best first.
///
/// Keeps a min-heap of at most `k` candidates and evicts the worst whenever
/// it grows past `k`: O(n log k) time, O(k) extra space.
pub fn top_k<I>(users: I, k: usize) -> Vec<User>
where
    I: IntoIterator<Item = User>,
{
    if k == 0 {
        return Vec::new();
    }

    // Capacity follows the population, not `k`
    let users = users.into_iter();
    let capacity = k.min(users.size_hint().0).saturating_add(1);
    let mut heap: BinaryHeap<Reverse<Ranked>> = BinaryHeap::with_capacity(capacity);
    for user in users {
        heap.push(Reverse(Ranked(user)));
        if heap.len() > k {
            heap.pop();
        }
    }

    // Pops worst first
    let mut ranked = Vec::with_capacity(heap.len());
    while let Some(Reverse(Ranked(user))) = heap.pop() {
        ranked.push(user);
    }
    ranked.reverse();
    ranked
}
