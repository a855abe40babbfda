use rust_decimal::Decimal;

use crate::domain::{CategoryDirectory, CategoryTotals, TopCategory};

pub const TOP_CATEGORY_LIMIT: usize = 5;

/// Reduces category totals to the biggest contributors.
pub struct RankingService;

impl RankingService {
    pub fn top_categories(
        totals: &CategoryTotals,
        total_expenses: Decimal,
        directory: &CategoryDirectory,
    ) -> Vec<TopCategory> {
        Self::top_n(totals, total_expenses, directory, TOP_CATEGORY_LIMIT)
    }

    /// Ranks descending by amount. The sort is stable, so equal amounts keep the
    /// order in which their categories were first seen.
    pub fn top_n(
        totals: &CategoryTotals,
        total_expenses: Decimal,
        directory: &CategoryDirectory,
        limit: usize,
    ) -> Vec<TopCategory> {
        let mut ranked: Vec<TopCategory> = totals
            .iter()
            .map(|entry| TopCategory {
                name: directory.label(&entry.category).to_string(),
                amount: entry.total,
                percentage: Self::share(entry.total, total_expenses),
            })
            .collect();
        ranked.sort_by(|a, b| b.amount.cmp(&a.amount));
        ranked.truncate(limit);
        ranked
    }

    /// `part` as a percentage of `whole`; zero when `whole` is not positive or the
    /// ratio is not representable.
    pub fn share(part: Decimal, whole: Decimal) -> Decimal {
        if whole > Decimal::ZERO {
            percent_of(part, whole).unwrap_or(Decimal::ZERO)
        } else {
            Decimal::ZERO
        }
    }
}

/// `part * 100 / whole`, falling back to dividing first when the product overflows.
/// `None` only when the percentage itself is outside `Decimal` range.
pub fn percent_of(part: Decimal, whole: Decimal) -> Option<Decimal> {
    part.checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|scaled| scaled.checked_div(whole))
        .or_else(|| {
            part.checked_div(whole)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        })
}
