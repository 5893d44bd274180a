//! Sort options and the expense comparator

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::models::{fold_accents, Expense};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Title,
    Amount,
    Category,
    Date,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Amount => "amount",
            Self::Category => "category",
            Self::Date => "date",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match fold_accents(s.trim()).as_str() {
            "title" | "titre" => Ok(Self::Title),
            "amount" | "montant" => Ok(Self::Amount),
            "category" | "categorie" => Ok(Self::Category),
            "date" => Ok(Self::Date),
            _ => Err(format!(
                "Unknown sort field '{}'. Valid: title, amount, category, date",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn reversed(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Sort field and direction; defaults to newest first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOptions {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            field: SortField::Date,
            direction: SortDirection::Desc,
        }
    }
}

impl SortOptions {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Column-header behavior: the active field flips direction, any other
    /// field becomes active in ascending order.
    pub fn toggle(self, field: SortField) -> Self {
        if self.field == field {
            Self::new(field, self.direction.reversed())
        } else {
            Self::new(field, SortDirection::Asc)
        }
    }

    /// Compare two expenses under these options
    pub fn compare(&self, a: &Expense, b: &Expense) -> Ordering {
        let ordering = match self.field {
            SortField::Amount => a.amount.cmp(&b.amount),
            SortField::Date => a.date.cmp(&b.date),
            SortField::Title => collate(&a.title, &b.title),
            SortField::Category => collate(a.category.label(), b.category.label()),
        };
        match self.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    }
}

/// Case-insensitive text ordering with French accents folded
fn collate(a: &str, b: &str) -> Ordering {
    fold_accents(a)
        .cmp(&fold_accents(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money, NewExpense};
    use chrono::NaiveDate;

    fn expense(title: &str, category: Category) -> Expense {
        NewExpense::new(
            title,
            Money::from_cents(100),
            category,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        )
        .into_expense()
    }

    #[test]
    fn test_default_is_date_desc() {
        let sort = SortOptions::default();
        assert_eq!(sort.field, SortField::Date);
        assert_eq!(sort.direction, SortDirection::Desc);
    }

    #[test]
    fn test_toggle() {
        let sort = SortOptions::default().toggle(SortField::Date);
        assert_eq!(sort, SortOptions::new(SortField::Date, SortDirection::Asc));

        let sort = sort.toggle(SortField::Amount);
        assert_eq!(sort, SortOptions::new(SortField::Amount, SortDirection::Asc));

        let sort = sort.toggle(SortField::Amount);
        assert_eq!(sort, SortOptions::new(SortField::Amount, SortDirection::Desc));
    }

    #[test]
    fn test_field_parse() {
        assert_eq!("Montant".parse::<SortField>().unwrap(), SortField::Amount);
        assert_eq!("catégorie".parse::<SortField>().unwrap(), SortField::Category);
        assert!("payee".parse::<SortField>().is_err());
    }

    #[test]
    fn test_category_collation_folds_accents() {
        let sort = SortOptions::new(SortField::Category, SortDirection::Asc);
        let edu = expense("a", Category::Education);
        let transport = expense("b", Category::Transport);
        let divers = expense("c", Category::Divers);

        assert_eq!(sort.compare(&edu, &transport), Ordering::Less);
        assert_eq!(sort.compare(&divers, &edu), Ordering::Less);
    }

    #[test]
    fn test_title_case_insensitive() {
        let sort = SortOptions::new(SortField::Title, SortDirection::Asc);
        let lower = expense("abonnement", Category::Divers);
        let upper = expense("Loyer", Category::Divers);
        assert_eq!(sort.compare(&lower, &upper), Ordering::Less);
    }
}
