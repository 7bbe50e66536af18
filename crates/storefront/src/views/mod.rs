//! Read-only display surfaces over the cart and catalog.
//!
//! Surfaces hold no business logic of their own: they subscribe to the cart's
//! total streams, invoke cart mutators as passthroughs, run catalog queries,
//! and issue [`Route`](crate::routes::Route) values as navigation requests
//! for the hosting shell to act on.

mod cart_details;
mod cart_status;
mod category_menu;
mod product_details;
mod product_list;
mod search;

pub use cart_details::{CartDetailsView, CartRow};
pub use cart_status::CartStatusView;
pub use category_menu::CategoryMenuView;
pub use product_details::ProductDetailsView;
pub use product_list::ProductListView;
pub use search::SearchBox;
