//! Totals over a filtered view

use std::collections::BTreeMap;

use crate::models::{Category, Expense, Money};

/// Per-category totals, keyed in display order
pub type CategoryTotals = BTreeMap<Category, Money>;

/// Sum of every amount in `expenses`
pub fn total(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Total per category, with every category present (zero when unused)
pub fn category_totals(expenses: &[Expense]) -> CategoryTotals {
    let mut totals: CategoryTotals = Category::ALL.iter().map(|c| (*c, Money::zero())).collect();
    for expense in expenses {
        if let Some(sum) = totals.get_mut(&expense.category) {
            *sum += expense.amount;
        }
    }
    totals
}

/// The `n` categories with the largest totals, largest first
///
/// Always `n` entries when there are that many categories; unused ones
/// rank as zero. Ties keep display order.
pub fn top_categories(totals: &CategoryTotals, n: usize) -> Vec<(Category, Money)> {
    let mut ranked: Vec<(Category, Money)> = totals.iter().map(|(c, a)| (*c, *a)).collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(n);
    ranked
}

/// `spent` as a whole percentage of `budget`, rounded half up
///
/// Returns 0 when the budget is zero.
pub fn calculate_percentage(spent: Money, budget: Money) -> i64 {
    if budget.is_zero() {
        return 0;
    }
    let numerator = i128::from(spent.cents()) * 200 + i128::from(budget.cents());
    let denominator = i128::from(budget.cents()) * 2;
    let rounded = if denominator > 0 {
        numerator.div_euclid(denominator)
    } else {
        (-numerator).div_euclid(-denominator)
    };
    i64::try_from(rounded).unwrap_or(if rounded > 0 { i64::MAX } else { i64::MIN })
}

/// Share of `part` in `whole` as a percentage, for category breakdowns
pub fn share_of(part: Money, whole: Money) -> f64 {
    if whole.is_zero() {
        0.0
    } else {
        part.to_f64() / whole.to_f64() * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewExpense;
    use chrono::NaiveDate;

    fn expense(cents: i64, category: Category) -> Expense {
        NewExpense::new(
            "x",
            Money::from_cents(cents),
            category,
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        )
        .into_expense()
    }

    #[test]
    fn test_total() {
        let expenses = vec![expense(10000, Category::Transport), expense(2550, Category::Divers)];
        assert_eq!(total(&expenses), Money::from_cents(12550));
        assert_eq!(total(&[]), Money::zero());
    }

    #[test]
    fn test_category_totals_cover_every_category() {
        let expenses = vec![
            expense(10000, Category::Transport),
            expense(500, Category::Transport),
            expense(2550, Category::Divers),
        ];
        let totals = category_totals(&expenses);

        assert_eq!(totals.len(), 10);
        assert_eq!(totals[&Category::Transport], Money::from_cents(10500));
        assert_eq!(totals[&Category::Sante], Money::zero());
        assert_eq!(totals.keys().copied().collect::<Vec<_>>(), Category::ALL.to_vec());
    }

    #[test]
    fn test_category_totals_sum_to_total() {
        let expenses = vec![
            expense(1399, Category::Divertissement),
            expense(75000, Category::Logement),
            expense(6575, Category::ChargesFixes),
            expense(1, Category::Epargne),
        ];
        let sum: Money = category_totals(&expenses).values().sum();
        assert_eq!(sum, total(&expenses));
    }

    #[test]
    fn test_top_categories() {
        let expenses = vec![
            expense(100, Category::Transport),
            expense(900, Category::Logement),
            expense(500, Category::Divers),
            expense(500, Category::Sante),
        ];
        let top = top_categories(&category_totals(&expenses), 3);
        let cats: Vec<_> = top.iter().map(|(c, _)| *c).collect();
        assert_eq!(cats, vec![Category::Logement, Category::Sante, Category::Divers]);
    }

    #[test]
    fn test_top_categories_pads_with_zero_totals() {
        let top = top_categories(&category_totals(&[]), 3);
        assert_eq!(
            top,
            vec![
                (Category::Alimentation, Money::zero()),
                (Category::Transport, Money::zero()),
                (Category::Logement, Money::zero()),
            ]
        );

        let top = top_categories(&category_totals(&[expense(100, Category::Divers)]), 3);
        let cats: Vec<_> = top.iter().map(|(c, _)| *c).collect();
        assert_eq!(cats, vec![Category::Divers, Category::Alimentation, Category::Transport]);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(calculate_percentage(Money::from_cents(5000), Money::zero()), 0);
        assert_eq!(calculate_percentage(Money::from_cents(7500), Money::from_cents(15000)), 50);
        assert_eq!(calculate_percentage(Money::from_cents(100), Money::from_cents(300)), 33);
        assert_eq!(calculate_percentage(Money::from_cents(200), Money::from_cents(300)), 67);
        assert_eq!(calculate_percentage(Money::from_cents(1), Money::from_cents(200)), 1);
        assert_eq!(calculate_percentage(Money::from_cents(30000), Money::from_cents(15000)), 200);
    }

    #[test]
    fn test_share_of() {
        assert_eq!(share_of(Money::from_cents(50), Money::zero()), 0.0);
        assert!((share_of(Money::from_cents(25), Money::from_cents(100)) - 25.0).abs() < f64::EPSILON);
    }
}
