use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;
use crate::format::CurrencyCode;

/// Classifies a movement as money entering or leaving the account.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MovementKind {
    Deposit,
    Withdrawal,
}

/// A single balance change recorded against an account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movement {
    pub amount: f64,
    pub date: DateTime<Utc>,
}

impl Movement {
    pub fn new(amount: f64, date: DateTime<Utc>) -> Self {
        Self { amount, date }
    }

    /// Deposits carry a positive amount, withdrawals a negative one.
    pub fn kind(&self) -> MovementKind {
        if self.amount >= 0.0 {
            MovementKind::Deposit
        } else {
            MovementKind::Withdrawal
        }
    }
}

/// Represents a customer account tracked by the bank.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: Uuid,
    pub owner: String,
    pub username: String,
    pub movements: Vec<Movement>,
    pub interest_rate: f64,
    pub pin: u32,
    pub currency: CurrencyCode,
    pub locale: String,
}

impl Account {
    /// Creates a new account, deriving the login username from the owner name.
    pub fn new(
        owner: impl Into<String>,
        pin: u32,
        interest_rate: f64,
        currency: CurrencyCode,
        locale: impl Into<String>,
    ) -> Self {
        let owner = owner.into();
        let username = derive_username(&owner);
        Self {
            id: Uuid::new_v4(),
            owner,
            username,
            movements: Vec::new(),
            interest_rate,
            pin,
            currency,
            locale: locale.into(),
        }
    }

    /// Appends a movement, keeping amount and date paired.
    pub fn record(&mut self, amount: f64, date: DateTime<Utc>) {
        self.movements.push(Movement::new(amount, date));
    }

    /// First name of the owner, used for greetings.
    pub fn first_name(&self) -> &str {
        self.owner.split_whitespace().next().unwrap_or(&self.owner)
    }

    pub fn amounts(&self) -> impl Iterator<Item = f64> + '_ {
        self.movements.iter().map(|m| m.amount)
    }

    pub fn dates(&self) -> impl Iterator<Item = DateTime<Utc>> + '_ {
        self.movements.iter().map(|m| m.date)
    }
}

impl Identifiable for Account {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Account {
    fn name(&self) -> &str {
        &self.owner
    }
}

impl Displayable for Account {
    fn display_label(&self) -> String {
        format!("{} ({})", self.owner, self.username)
    }
}

/// Lowercased initials of every word in the owner name.
pub fn derive_username(owner: &str) -> String {
    let lowered = owner.to_lowercase();
    lowered
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}
