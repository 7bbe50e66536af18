//! End-to-end checkout flow against a canned backend.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use oakleaf_core::ProductId;
use oakleaf_storefront::api::ApiError;
use oakleaf_storefront::app::Shop;
use oakleaf_storefront::checkout::{CheckoutController, SubmitOutcome};
use oakleaf_storefront::config::StoreConfig;
use oakleaf_storefront::model::{CartItem, Country, State};
use oakleaf_storefront::routes::Route;
use rust_decimal::Decimal;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

const COUNTRIES_BODY: &str = r#"{"_embedded":{"countries":[
    {"id":1,"code":"BE","name":"Belgium"},
    {"id":2,"code":"US","name":"United States"}
]}}"#;

const STATES_BODY: &str = r#"{"_embedded":{"states":[
    {"id":1,"name":"Antwerpen"},
    {"id":2,"name":"Limburg"}
]}}"#;

/// A canned backend serving the checkout flow's three endpoints.
struct CannedBackend {
    base_url: String,
    purchase_hits: Arc<AtomicUsize>,
}

impl CannedBackend {
    /// Spawn the backend, answering purchases with `purchase_status` and
    /// `purchase_body`.
    async fn spawn(purchase_status: &'static str, purchase_body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}/api", listener.local_addr().unwrap());
        let purchase_hits = Arc::new(AtomicUsize::new(0));
        let hits = Arc::clone(&purchase_hits);

        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    return;
                };
                let hits = Arc::clone(&hits);

                tokio::spawn(async move {
                    let Some(request_line) = read_request(&mut socket).await else {
                        return;
                    };

                    let (status, body) = if request_line.contains("/api/countries") {
                        ("200 OK", COUNTRIES_BODY)
                    } else if request_line.contains("/api/states/search/findByCountryCode") {
                        ("200 OK", STATES_BODY)
                    } else if request_line.contains("/api/checkout/purchase") {
                        hits.fetch_add(1, Ordering::SeqCst);
                        (purchase_status, purchase_body)
                    } else {
                        ("404 Not Found", "{}")
                    };

                    let response = format!(
                        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\n\
                         Content-Length: {}\r\nConnection: close\r\n\r\n{body}",
                        body.len()
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                });
            }
        });

        Self {
            base_url,
            purchase_hits,
        }
    }

    fn purchase_hits(&self) -> usize {
        self.purchase_hits.load(Ordering::SeqCst)
    }
}

/// Read one HTTP request (headers plus any content-length body) and return
/// its request line.
async fn read_request(socket: &mut tokio::net::TcpStream) -> Option<String> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buffer.extend_from_slice(&chunk[..n]);
        if let Some(pos) = find_header_end(&buffer) {
            break pos;
        }
    };

    let headers = String::from_utf8_lossy(&buffer[..header_end]).to_string();
    let content_length = headers
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())?
        })
        .unwrap_or(0);

    let mut body_read = buffer.len() - (header_end + 4);
    while body_read < content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        body_read += n;
    }

    headers.lines().next().map(ToString::to_string)
}

fn find_header_end(buffer: &[u8]) -> Option<usize> {
    buffer.windows(4).position(|window| window == b"\r\n\r\n")
}

fn sample_item() -> CartItem {
    CartItem {
        id: ProductId::new(1),
        name: "Crash Course in Python".to_string(),
        image_url: "assets/images/products/book-1000.png".to_string(),
        unit_price: "14.99".parse().unwrap(),
        quantity: 2,
    }
}

fn fill_form(controller: &mut CheckoutController) {
    let form = controller.form_mut();
    form.customer.first_name.set("Ada");
    form.customer.last_name.set("Lovelace");
    form.customer.email.set("ada@example.com");
    form.address.street.set("1 Main St");
    form.address.city.set("Antwerp");
    form.address.state.select(State {
        id: oakleaf_core::StateId::new(1),
        name: "Antwerpen".to_string(),
    });
    form.address.country.select(Country {
        id: oakleaf_core::CountryId::new(1),
        code: "BE".to_string(),
        name: "Belgium".to_string(),
    });
    form.address.zip_code.set("2000");
    form.credit_card.card_type.select("Visa".to_string());
    form.credit_card.name_on_card.set("Ada Lovelace");
    form.credit_card.card_number.set("4111111111111111");
    form.credit_card.security_code.set("123");
}

async fn open_controller(shop: &Shop) -> CheckoutController {
    CheckoutController::open(shop.cart(), shop.checkout(), shop.form_data())
        .await
        .unwrap()
}

#[tokio::test]
async fn test_successful_submission_clears_cart_and_resets_form() {
    init_tracing();
    let backend = CannedBackend::spawn("200 OK", r#"{"orderTrackingNumber":"T123"}"#).await;
    let shop = Shop::new(StoreConfig {
        base_url: backend.base_url.clone(),
        page_size: 10,
    });
    shop.cart().add_to_cart(sample_item());

    let mut controller = open_controller(&shop).await;
    assert_eq!(controller.countries().len(), 2);
    assert_eq!(controller.states().len(), 2);
    assert_eq!(controller.total_quantity(), 2);

    fill_form(&mut controller);
    let outcome = controller.on_submit().await.unwrap();

    let SubmitOutcome::Confirmed { confirmation, next } = outcome else {
        panic!("expected a confirmed submission");
    };
    assert_eq!(confirmation.order_tracking_number, "T123");
    assert_eq!(next, Route::Products { category: None });
    assert_eq!(backend.purchase_hits(), 1);

    // Cart emptied, totals zeroed, form pristine.
    assert!(shop.cart().items().is_empty());
    assert_eq!(shop.cart().total_price(), Decimal::ZERO);
    assert_eq!(shop.cart().total_quantity(), 0);
    assert_eq!(controller.form().customer.first_name.value(), "");
    assert!(controller.form().address.country.selected().is_none());
}

#[tokio::test]
async fn test_invalid_email_blocks_submission_without_a_request() {
    init_tracing();
    let backend = CannedBackend::spawn("200 OK", r#"{"orderTrackingNumber":"T123"}"#).await;
    let shop = Shop::new(StoreConfig {
        base_url: backend.base_url.clone(),
        page_size: 10,
    });
    shop.cart().add_to_cart(sample_item());

    let mut controller = open_controller(&shop).await;
    fill_form(&mut controller);
    controller.form_mut().customer.email.set("not-an-email");

    let outcome = controller.on_submit().await.unwrap();
    assert!(matches!(outcome, SubmitOutcome::Rejected));
    assert_eq!(backend.purchase_hits(), 0);
    assert_eq!(shop.cart().total_quantity(), 2);
}

#[tokio::test]
async fn test_rejected_submission_leaves_cart_and_form_for_retry() {
    init_tracing();
    let backend = CannedBackend::spawn("500 Internal Server Error", "order processing failed").await;
    let shop = Shop::new(StoreConfig {
        base_url: backend.base_url.clone(),
        page_size: 10,
    });
    shop.cart().add_to_cart(sample_item());

    let mut controller = open_controller(&shop).await;
    fill_form(&mut controller);

    let error = controller.on_submit().await.unwrap_err();
    let ApiError::Api { status, message } = error else {
        panic!("expected an API error");
    };
    assert_eq!(status, 500);
    assert_eq!(message, "order processing failed");

    // Everything stays in place so the user can retry manually.
    assert_eq!(shop.cart().total_quantity(), 2);
    assert_eq!(controller.form().customer.first_name.value(), "Ada");
    assert!(controller.form().is_valid());
}

#[tokio::test]
async fn test_country_change_refreshes_state_list() {
    init_tracing();
    let backend = CannedBackend::spawn("200 OK", "{}").await;
    let shop = Shop::new(StoreConfig {
        base_url: backend.base_url.clone(),
        page_size: 10,
    });

    let mut controller = open_controller(&shop).await;
    controller.form_mut().address.country.select(Country {
        id: oakleaf_core::CountryId::new(2),
        code: "US".to_string(),
        name: "United States".to_string(),
    });

    controller.on_country_change().await.unwrap();
    assert_eq!(controller.states().len(), 2);
}
