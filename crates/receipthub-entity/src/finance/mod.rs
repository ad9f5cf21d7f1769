//! Finance entities: receipts, purchases, and reference data.

pub mod purchase;
pub mod receipt;
pub mod reference;

pub use purchase::{PurchaseInsert, PurchaseRow, PurchaseUpdate};
pub use receipt::{ReceiptInsert, ReceiptRow, ReceiptUpdate};
pub use reference::{CurrencyRow, ExpenseCategoryRow, ExpenseTypeRow};
