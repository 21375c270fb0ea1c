//! Domain models for PIX payment requests.

pub mod amount;
pub mod key;
pub mod merchant;
pub mod request;

pub use amount::Amount;
pub use key::{KeyKind, PixKey};
pub use merchant::{MerchantCity, MerchantName};
pub use request::PaymentRequest;
