//! The checkout controller: form state, cross-field refreshes, and the
//! submit pipeline.
//!
//! The controller subscribes to the cart's total streams for as long as it
//! lives; the watch receivers are dropped with it, so a torn-down controller
//! can never be written to by a later cart mutation.

use oakleaf_core::Email;
use rust_decimal::Decimal;
use tokio::sync::watch;
use tracing::instrument;

use crate::api::{ApiError, CheckoutClient, FormDataClient, reference};
use crate::cart::CartService;
use crate::checkout::form::CheckoutForm;
use crate::model::{
    Address, Country, Customer, Order, OrderConfirmation, OrderItem, Purchase, State,
};
use crate::routes::Route;

/// Result of a submit attempt that did not fail in transport.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// The form was invalid: every field was marked touched so its error
    /// renders, and no request was issued.
    Rejected,
    /// The order was accepted: the cart was cleared and the form reset.
    Confirmed {
        /// Backend confirmation, shown verbatim to the user.
        confirmation: OrderConfirmation,
        /// Where to navigate next.
        next: Route,
    },
}

/// Drives the checkout form for one visit to the checkout view.
pub struct CheckoutController {
    form: CheckoutForm,
    cart: CartService,
    checkout: CheckoutClient,
    form_data: FormDataClient,
    total_price: watch::Receiver<Decimal>,
    total_quantity: watch::Receiver<u32>,
    credit_card_months: Vec<u32>,
    credit_card_years: Vec<i32>,
    countries: Vec<Country>,
    states: Vec<State>,
}

impl CheckoutController {
    /// Open the checkout view: subscribe to cart totals and load the form's
    /// reference data (countries, the broad state list, month/year ranges).
    ///
    /// The initial month range starts at the current month.
    ///
    /// # Errors
    ///
    /// Returns an error if a reference data request fails.
    pub async fn open(
        cart: CartService,
        checkout: CheckoutClient,
        form_data: FormDataClient,
    ) -> Result<Self, ApiError> {
        let total_price = cart.subscribe_total_price();
        let total_quantity = cart.subscribe_total_quantity();

        let credit_card_months = form_data.credit_card_months(reference::current_month());
        let credit_card_years = form_data.credit_card_years();
        let countries = form_data.get_countries().await?;
        let states = form_data.get_states("").await?;

        Ok(Self {
            form: CheckoutForm::new(),
            cart,
            checkout,
            form_data,
            total_price,
            total_quantity,
            credit_card_months,
            credit_card_years,
            countries,
            states,
        })
    }

    /// The form, for reading field state and errors.
    #[must_use]
    pub const fn form(&self) -> &CheckoutForm {
        &self.form
    }

    /// The form, for editing fields.
    pub const fn form_mut(&mut self) -> &mut CheckoutForm {
        &mut self.form
    }

    /// Latest broadcast cart total price.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        *self.total_price.borrow()
    }

    /// Latest broadcast cart total quantity.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        *self.total_quantity.borrow()
    }

    /// Month options for the expiration select.
    #[must_use]
    pub fn credit_card_months(&self) -> &[u32] {
        &self.credit_card_months
    }

    /// Year options for the expiration select.
    #[must_use]
    pub fn credit_card_years(&self) -> &[i32] {
        &self.credit_card_years
    }

    /// Country options for the address select.
    #[must_use]
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// State options for the address select, scoped to the chosen country.
    #[must_use]
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Refresh the state list for the currently selected country.
    ///
    /// With no country selected this issues the same broad query the view
    /// opens with.
    ///
    /// # Errors
    ///
    /// Returns an error if the state list request fails.
    pub async fn on_country_change(&mut self) -> Result<(), ApiError> {
        let code = self
            .form
            .address
            .country
            .selected()
            .map_or_else(String::new, |country| country.code.clone());

        self.states = self.form_data.get_states(&code).await?;
        Ok(())
    }

    /// Re-derive the month range after the expiration year changed.
    ///
    /// Selecting the current year disallows already-past months; any other
    /// year offers the full range.
    pub fn on_year_change(&mut self) {
        let selected_year = self.form.credit_card.expiration_year.selected().copied();

        let start_month = if selected_year == Some(reference::current_year()) {
            reference::current_month()
        } else {
            1
        };

        self.credit_card_months = self.form_data.credit_card_months(start_month);
    }

    /// Validate, assemble, and submit the purchase.
    ///
    /// An invalid form marks every field touched and aborts with no side
    /// effects. On acceptance the cart is cleared, the form reset, and the
    /// returned outcome carries the confirmation plus the product listing
    /// route. A transport failure propagates with cart and form unchanged,
    /// so the user can retry manually.
    ///
    /// # Errors
    ///
    /// Returns the submission error untouched; no retry is attempted.
    #[instrument(skip(self))]
    pub async fn on_submit(&mut self) -> Result<SubmitOutcome, ApiError> {
        if !self.form.is_valid() {
            self.form.mark_all_touched();
            return Ok(SubmitOutcome::Rejected);
        }

        let Some(purchase) = self.build_purchase() else {
            self.form.mark_all_touched();
            return Ok(SubmitOutcome::Rejected);
        };

        let confirmation = self.checkout.place_order(&purchase).await?;

        tracing::info!(
            order_tracking_number = %confirmation.order_tracking_number,
            "Order received"
        );

        self.reset_cart();

        Ok(SubmitOutcome::Confirmed {
            confirmation,
            next: Route::Products { category: None },
        })
    }

    /// Assemble the purchase aggregate from the form and the current cart.
    ///
    /// Returns `None` when a selected-object or email field cannot be read
    /// back; `is_valid` makes that unreachable in practice.
    fn build_purchase(&self) -> Option<Purchase> {
        let email = Email::parse(self.form.customer.email.value()).ok()?;
        let state = self.form.address.state.selected()?;
        let country = self.form.address.country.selected()?;

        let customer = Customer {
            first_name: self.form.customer.first_name.value().to_string(),
            last_name: self.form.customer.last_name.value().to_string(),
            email,
        };

        // State and country submit the display name from the selected
        // record, not the code.
        let shipping_address = Address {
            street: self.form.address.street.value().to_string(),
            city: self.form.address.city.value().to_string(),
            state: state.name.clone(),
            country: country.name.clone(),
            zip_code: self.form.address.zip_code.value().to_string(),
        };

        // The billing address always mirrors shipping even though the form
        // section is labeled billing.
        // TODO: confirm with product whether billing should be captured
        // separately before changing this.
        let billing_address = shipping_address.clone();

        let order = Order {
            total_quantity: self.total_quantity(),
            total_price: self.total_price(),
        };

        let order_items: Vec<OrderItem> =
            self.cart.items().iter().map(OrderItem::from).collect();

        Some(Purchase {
            customer,
            shipping_address,
            billing_address,
            order,
            order_items,
        })
    }

    /// Post-confirmation reset: empty cart, zeroed totals, pristine form.
    fn reset_cart(&mut self) {
        self.cart.clear();
        self.form.reset();
    }
}
