//! Transaction categories
//!
//! Categories form an open set: any label is accepted so that entries coming
//! from other sources are never rejected. The constants below are the labels
//! the screens offer by default.

use std::fmt;

/// Category label attached to a transaction
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Category(String);

impl Category {
    /// Sentinel used by filters to mean "every category"
    pub const ALL: &'static str = "Todas";

    pub const FOOD: &'static str = "Alimentação";
    pub const TRANSPORT: &'static str = "Transporte";
    pub const ENTERTAINMENT: &'static str = "Entretenimento";
    pub const HEALTH: &'static str = "Saúde";
    pub const SALARY: &'static str = "Salário";
    pub const TRANSFER: &'static str = "Transferência";
    pub const CASHBACK: &'static str = "Cashback";
    pub const PIX: &'static str = "PIX";
    /// Mobile and service top-ups
    pub const RECHARGE: &'static str = "Recarga";

    /// Create a category from any label
    pub fn new(label: impl Into<String>) -> Self {
        Category(label.into())
    }

    /// Labels offered by the statement screen, in display order
    ///
    /// Does not include the [`Category::ALL`] sentinel.
    pub fn known() -> [&'static str; 8] {
        [
            Self::FOOD,
            Self::TRANSPORT,
            Self::ENTERTAINMENT,
            Self::HEALTH,
            Self::SALARY,
            Self::TRANSFER,
            Self::CASHBACK,
            Self::PIX,
        ]
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(label: &str) -> Self {
        Category::new(label)
    }
}

impl From<String> for Category {
    fn from(label: String) -> Self {
        Category(label)
    }
}

impl PartialEq<str> for Category {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Category {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
