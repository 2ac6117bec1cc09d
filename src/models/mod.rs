//! Entity payloads. Field names follow the vendor's JSON keys; absent
//! optional fields are left out of `modify` requests.

mod contact;
mod invoice;
mod order;
mod product;
mod quote;
mod receipt;
mod relation;

pub use contact::{Address, Contact, MeansOfContact};
pub use invoice::{Invoice, InvoiceLine, Prepayment, PrepaymentLine};
pub use order::{Order, OrderLine};
pub use product::Product;
pub use quote::{Quote, QuoteLine};
pub use receipt::Receipt;
pub use relation::Relation;
