use crate::cards::Rank;

/// Equal-rank windows over the five ranks sorted ascending.
///
/// Each test assumes that any stronger pattern has already been ruled out,
/// e.g. a full house also satisfies [`RankPattern::is_two_pair`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankPattern {
    ranks: [Rank; 5],
}

impl RankPattern {
    /// `ranks` must be sorted ascending.
    pub fn new(ranks: [Rank; 5]) -> Self {
        debug_assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
        Self { ranks }
    }

    fn same(&self, a: usize, b: usize) -> bool {
        self.ranks[a] == self.ranks[b]
    }

    pub fn is_four_of_a_kind(&self) -> bool {
        self.same(0, 3) || self.same(1, 4)
    }

    pub fn is_full_house(&self) -> bool {
        (self.same(0, 1) && self.same(2, 4)) || (self.same(0, 2) && self.same(3, 4))
    }

    pub fn is_three_of_a_kind(&self) -> bool {
        self.same(0, 2) || self.same(1, 3) || self.same(2, 4)
    }

    pub fn is_two_pair(&self) -> bool {
        (self.same(0, 1) && self.same(2, 3))
            || (self.same(0, 1) && self.same(3, 4))
            || (self.same(1, 2) && self.same(3, 4))
    }

    pub fn is_pair(&self) -> bool {
        (0..4).any(|i| self.same(i, i + 1))
    }

    /// Number of cards holding `rank`.
    pub fn count(&self, rank: Rank) -> usize {
        self.ranks.iter().filter(|&&r| r == rank).count()
    }

    /// Distinct ranks held by two or more cards, highest first.
    pub fn paired_ranks(&self) -> Vec<Rank> {
        let mut out: Vec<Rank> = Vec::with_capacity(2);
        for w in self.ranks.windows(2).rev() {
            if w[0] == w[1] && out.last() != Some(&w[0]) {
                out.push(w[0]);
            }
        }
        out
    }
}
