use std::collections::{btree_map, BTreeMap};

use rand::{seq::IteratorRandom, Rng};

use crate::poly::Point;

/// A secret share, a point on the secret-sharing polynomial.
pub type Share = Point;

/// Identifier of a shareholder.
pub type HolderId = u32;

/// Shares assigned to shareholders.
///
/// Shares can be taken out of the set, but never modified in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShareSet {
    shares: BTreeMap<HolderId, Share>,
}

impl ShareSet {
    /// Creates a new set, assigning the shares to holders `0, 1, ...`
    /// in order.
    pub fn new(shares: Vec<Share>) -> Self {
        let shares = (0..).zip(shares).collect();
        Self { shares }
    }

    /// Returns the number of shares in the set.
    pub fn len(&self) -> usize {
        self.shares.len()
    }

    /// Returns true if the set holds no shares.
    pub fn is_empty(&self) -> bool {
        self.shares.is_empty()
    }

    /// Returns the share of the given holder.
    pub fn get(&self, id: HolderId) -> Option<&Share> {
        self.shares.get(&id)
    }

    /// Returns the identifiers of the holders in ascending order.
    pub fn holders(&self) -> impl Iterator<Item = HolderId> + '_ {
        self.shares.keys().copied()
    }

    /// Returns an iterator over the holders and their shares.
    pub fn iter(&self) -> btree_map::Iter<'_, HolderId, Share> {
        self.shares.iter()
    }

    /// Removes the share of the given holder from the set.
    pub fn remove(&mut self, id: HolderId) -> Option<Share> {
        self.shares.remove(&id)
    }

    /// Removes `count` randomly chosen shares from the set and returns
    /// the identifiers of their holders.
    ///
    /// If the set holds fewer shares, all of them are removed.
    pub fn discard_random<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> Vec<HolderId> {
        let mut ids = self.holders().choose_multiple(rng, count);
        ids.sort_unstable();
        for id in &ids {
            self.shares.remove(id);
        }
        ids
    }

    /// Returns copies of the remaining shares.
    pub fn shares(&self) -> Vec<Share> {
        self.shares.values().cloned().collect()
    }

    /// Consumes the set and returns the remaining shares.
    pub fn into_shares(self) -> Vec<Share> {
        self.shares.into_values().collect()
    }
}

impl IntoIterator for ShareSet {
    type Item = (HolderId, Share);
    type IntoIter = btree_map::IntoIter<HolderId, Share>;

    fn into_iter(self) -> Self::IntoIter {
        self.shares.into_iter()
    }
}
