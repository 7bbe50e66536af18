//! The structured checkout form: three sections, per-field touched state,
//! and per-field validation.
//!
//! A field's error is only *visible* once the field has been touched; display
//! surfaces render [`CheckoutForm::visible_error`] next to each input.
//! Submission consults [`CheckoutForm::is_valid`], which ignores touched
//! state entirely.

use crate::checkout::validators::{self, ValidationError};
use crate::model::{Country, State};

/// A free-text input with touched tracking.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    value: String,
    touched: bool,
}

impl TextField {
    /// Set the value, marking the field touched.
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.touched = true;
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the user has interacted with the field.
    #[must_use]
    pub const fn is_touched(&self) -> bool {
        self.touched
    }

    fn touch(&mut self) {
        self.touched = true;
    }
}

/// A selection input holding a full selected object, with touched tracking.
#[derive(Debug, Clone)]
pub struct SelectField<T> {
    selected: Option<T>,
    touched: bool,
}

impl<T> SelectField<T> {
    /// Select a value, marking the field touched.
    pub fn select(&mut self, value: T) {
        self.selected = Some(value);
        self.touched = true;
    }

    /// The currently selected object, if any.
    #[must_use]
    pub const fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    /// Whether the user has interacted with the field.
    #[must_use]
    pub const fn is_touched(&self) -> bool {
        self.touched
    }

    fn touch(&mut self) {
        self.touched = true;
    }
}

impl<T> Default for SelectField<T> {
    fn default() -> Self {
        Self {
            selected: None,
            touched: false,
        }
    }
}

/// Customer section: name and email.
#[derive(Debug, Clone, Default)]
pub struct CustomerSection {
    pub first_name: TextField,
    pub last_name: TextField,
    pub email: TextField,
}

/// Address section; billing and shipping are captured as one.
#[derive(Debug, Clone, Default)]
pub struct AddressSection {
    pub street: TextField,
    pub city: TextField,
    pub state: SelectField<State>,
    pub country: SelectField<Country>,
    pub zip_code: TextField,
}

/// Credit card section.
///
/// Card details are collected for the order form but never validated against
/// or transmitted to a payment processor.
#[derive(Debug, Clone, Default)]
pub struct CreditCardSection {
    pub card_type: SelectField<String>,
    pub name_on_card: TextField,
    pub card_number: TextField,
    pub security_code: TextField,
    pub expiration_month: SelectField<u32>,
    pub expiration_year: SelectField<i32>,
}

/// Identifies a validated field of the checkout form.
///
/// Expiration month and year carry no validators, matching the form they
/// were lifted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutField {
    FirstName,
    LastName,
    Email,
    Street,
    City,
    State,
    Country,
    ZipCode,
    CardType,
    NameOnCard,
    CardNumber,
    SecurityCode,
}

impl CheckoutField {
    /// All validated fields, in form order.
    pub const ALL: [Self; 12] = [
        Self::FirstName,
        Self::LastName,
        Self::Email,
        Self::Street,
        Self::City,
        Self::State,
        Self::Country,
        Self::ZipCode,
        Self::CardType,
        Self::NameOnCard,
        Self::CardNumber,
        Self::SecurityCode,
    ];
}

/// The whole checkout form.
#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
    pub customer: CustomerSection,
    pub address: AddressSection,
    pub credit_card: CreditCardSection,
}

impl CheckoutForm {
    /// A pristine form: all fields empty and untouched.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The validation error for a field, independent of touched state.
    #[must_use]
    pub fn error(&self, field: CheckoutField) -> Option<ValidationError> {
        match field {
            CheckoutField::FirstName => {
                validators::required_text(self.customer.first_name.value()).err()
            }
            CheckoutField::LastName => {
                validators::required_text(self.customer.last_name.value()).err()
            }
            CheckoutField::Email => validators::email(self.customer.email.value()).err(),
            CheckoutField::Street => validators::required_text(self.address.street.value()).err(),
            CheckoutField::City => validators::required_text(self.address.city.value()).err(),
            CheckoutField::State => self
                .address
                .state
                .selected()
                .is_none()
                .then_some(ValidationError::Required),
            CheckoutField::Country => self
                .address
                .country
                .selected()
                .is_none()
                .then_some(ValidationError::Required),
            CheckoutField::ZipCode => {
                validators::required_text(self.address.zip_code.value()).err()
            }
            CheckoutField::CardType => self
                .credit_card
                .card_type
                .selected()
                .is_none()
                .then_some(ValidationError::Required),
            CheckoutField::NameOnCard => {
                validators::required_text(self.credit_card.name_on_card.value()).err()
            }
            CheckoutField::CardNumber => {
                validators::card_number(self.credit_card.card_number.value()).err()
            }
            CheckoutField::SecurityCode => {
                validators::security_code(self.credit_card.security_code.value()).err()
            }
        }
    }

    /// The error to render next to a field: present only once touched.
    #[must_use]
    pub fn visible_error(&self, field: CheckoutField) -> Option<ValidationError> {
        if self.is_touched(field) {
            self.error(field)
        } else {
            None
        }
    }

    /// Whether the user has interacted with a field.
    #[must_use]
    pub fn is_touched(&self, field: CheckoutField) -> bool {
        match field {
            CheckoutField::FirstName => self.customer.first_name.is_touched(),
            CheckoutField::LastName => self.customer.last_name.is_touched(),
            CheckoutField::Email => self.customer.email.is_touched(),
            CheckoutField::Street => self.address.street.is_touched(),
            CheckoutField::City => self.address.city.is_touched(),
            CheckoutField::State => self.address.state.is_touched(),
            CheckoutField::Country => self.address.country.is_touched(),
            CheckoutField::ZipCode => self.address.zip_code.is_touched(),
            CheckoutField::CardType => self.credit_card.card_type.is_touched(),
            CheckoutField::NameOnCard => self.credit_card.name_on_card.is_touched(),
            CheckoutField::CardNumber => self.credit_card.card_number.is_touched(),
            CheckoutField::SecurityCode => self.credit_card.security_code.is_touched(),
        }
    }

    /// Whether every validated field passes.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        CheckoutField::ALL
            .iter()
            .all(|&field| self.error(field).is_none())
    }

    /// Mark every field touched, forcing all errors to display.
    pub fn mark_all_touched(&mut self) {
        self.customer.first_name.touch();
        self.customer.last_name.touch();
        self.customer.email.touch();
        self.address.street.touch();
        self.address.city.touch();
        self.address.state.touch();
        self.address.country.touch();
        self.address.zip_code.touch();
        self.credit_card.card_type.touch();
        self.credit_card.name_on_card.touch();
        self.credit_card.card_number.touch();
        self.credit_card.security_code.touch();
    }

    /// Reset the form to its pristine state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
