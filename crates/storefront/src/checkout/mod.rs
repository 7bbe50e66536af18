//! Checkout: field validation, the structured form, and the controller that
//! assembles and submits a [`Purchase`](crate::model::Purchase).

mod controller;
mod form;
pub mod validators;

pub use controller::{CheckoutController, SubmitOutcome};
pub use form::{
    AddressSection, CheckoutField, CheckoutForm, CreditCardSection, CustomerSection, SelectField,
    TextField,
};
pub use validators::ValidationError;
