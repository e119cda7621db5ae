//! Income/expense roll-ups grouped by category or by person.
//!
//! Every group appears in the output, including groups without transactions
//! (all columns zero). Grand totals are the column sums over the groups.

use std::collections::HashMap;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{Category, EngineError, Person, ResultEngine, Transaction, TransactionType};

/// Column sums, kept as exact decimals with two fractional digits.
///
/// Sums are wider than any single stored amount, so many large amounts add
/// up past [`crate::MoneyCents::MAX`] without losing a cent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
    /// `income - expense`
    pub balance: Decimal,
}

impl Default for Totals {
    fn default() -> Self {
        let zero = Decimal::new(0, 2);
        Self {
            income: zero,
            expense: zero,
            balance: zero,
        }
    }
}

impl Totals {
    fn record(&mut self, tx: &Transaction) -> ResultEngine<()> {
        let column = match tx.kind {
            TransactionType::Income => &mut self.income,
            TransactionType::Expense => &mut self.expense,
        };
        *column = column
            .checked_add(tx.amount.to_decimal())
            .ok_or_else(overflow)?;
        self.balance = self
            .income
            .checked_sub(self.expense)
            .ok_or_else(overflow)?;
        Ok(())
    }

    fn add(&mut self, other: &Totals) -> ResultEngine<()> {
        self.income = self.income.checked_add(other.income).ok_or_else(overflow)?;
        self.expense = self
            .expense
            .checked_add(other.expense)
            .ok_or_else(overflow)?;
        self.balance = self
            .balance
            .checked_add(other.balance)
            .ok_or_else(overflow)?;
        Ok(())
    }
}

fn overflow() -> EngineError {
    EngineError::Overflow("summary total".to_string())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryTotals {
    pub category: Category,
    pub totals: Totals,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PersonTotals {
    pub person: Person,
    pub totals: Totals,
}

/// Per-group rows plus the grand total.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Summary<T> {
    pub rows: Vec<T>,
    pub total: Totals,
}

pub type CategorySummary = Summary<CategoryTotals>;
pub type PersonSummary = Summary<PersonTotals>;

fn totals_by(
    transactions: &[Transaction],
    key: impl Fn(&Transaction) -> Uuid,
) -> ResultEngine<HashMap<Uuid, Totals>> {
    let mut groups: HashMap<Uuid, Totals> = HashMap::new();
    for tx in transactions {
        groups.entry(key(tx)).or_default().record(tx)?;
    }
    Ok(groups)
}

fn summarize<G, R>(
    groups: Vec<G>,
    id: impl Fn(&G) -> Uuid,
    by_group: &HashMap<Uuid, Totals>,
    row: impl Fn(G, Totals) -> R,
) -> ResultEngine<Summary<R>> {
    let mut total = Totals::default();
    let mut rows = Vec::with_capacity(groups.len());
    for group in groups {
        let totals = by_group.get(&id(&group)).copied().unwrap_or_default();
        total.add(&totals)?;
        rows.push(row(group, totals));
    }
    Ok(Summary { rows, total })
}

/// Roll `transactions` up per category. Rows keep the order of `categories`.
pub fn summarize_by_category(
    categories: Vec<Category>,
    transactions: &[Transaction],
) -> ResultEngine<CategorySummary> {
    let by_category = totals_by(transactions, |tx| tx.category_id)?;
    summarize(
        categories,
        |category| category.id,
        &by_category,
        |category, totals| CategoryTotals { category, totals },
    )
}

/// Roll `transactions` up per person. Rows keep the order of `people`.
pub fn summarize_by_person(
    people: Vec<Person>,
    transactions: &[Transaction],
) -> ResultEngine<PersonSummary> {
    let by_person = totals_by(transactions, |tx| tx.person_id)?;
    summarize(
        people,
        |person| person.id,
        &by_person,
        |person, totals| PersonTotals { person, totals },
    )
}
