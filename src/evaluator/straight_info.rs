use crate::cards::Rank;

/// Whether five ranks form a run, and how.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    /// The Ace was counted as 1 (A-2-3-4-5).
    pub ace_low: bool,
    /// The un-substituted ranks run 10 through Ace.
    pub is_royal_run: bool,
}

impl StraightInfo {
    /// Detect a straight from five ranks sorted ascending.
    ///
    /// When both an Ace and a Two are present the Ace is re-valued as 1
    /// before checking for consecutive values.
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let mut values = ranks.map(Rank::value);
        values.sort_unstable();

        let ace_low = values.contains(&Rank::Ace.value()) && values.contains(&Rank::Two.value());
        if ace_low {
            values[4] = 1;
            values.sort_unstable();
        }

        let is_straight = values.windows(2).all(|w| w[1] == w[0] + 1);
        let is_royal_run =
            is_straight && !ace_low && values[0] == Rank::Ten.value() && values[4] == Rank::Ace.value();

        StraightInfo { is_straight, ace_low: is_straight && ace_low, is_royal_run }
    }
}
