//! Localization round-trips against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives the gateway over
//! real HTTP: table loading with fallback, localized failure resolution,
//! query-string building, and the strict non-JSON handling. The `Greeting`
//! DTO is defined here rather than imported so these tests also catch
//! schema drift against the server.

use serde::Deserialize;
use serde_json::json;

use strings_core::{RequestGateway, RequestOptions, HttpMethod, RequestError, UNKNOWN_ERROR};

#[derive(Debug, Deserialize)]
struct Greeting {
    data: String,
}

/// Start the mock server on a random port and return its address.
fn spawn_server() -> std::net::SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    addr
}

#[test]
fn localized_request_lifecycle() {
    let addr = spawn_server();
    let mut gateway = RequestGateway::new(&format!("http://{addr}"));

    // Step 1: load the Korean table.
    gateway.init_language("ko");
    assert!(gateway.table().is_loaded());
    assert_eq!(gateway.table().lang(), "ko");

    // Step 2: success round-trip.
    let greeting: Greeting = gateway.post("/welcome", &json!({"name": "person"})).unwrap();
    assert_eq!(greeting.data, "hello!");

    // Step 3: failures resolve to Korean messages.
    let err = gateway
        .post::<Greeting>("/welcome", &json!({"name": "smile"}))
        .unwrap_err();
    assert_eq!(err.kind, "SO_BEAUTIFUL_ERROR");
    assert_eq!(err.message, "너무 아름다워요!");

    let err = gateway
        .post::<Greeting>("/iq", &json!({"name": "smile"}))
        .unwrap_err();
    assert_eq!(err.kind, "I'M_FOOL_ERROR");
    assert_eq!(err.message, "바보 같아요!");

    // Step 4: GET data travels in the query string.
    let greeting: Greeting = gateway.get("/admin", &json!({"name": "root"})).unwrap();
    assert_eq!(greeting.data, "welcome back!");

    let err = gateway
        .get::<Greeting>("/admin", &json!({"name": "smile"}))
        .unwrap_err();
    assert_eq!(err.kind, "NOT_ADMIN_ERROR");
    assert_eq!(err.message, "관리자가 아닙니다.");

    // Step 5: the remaining methods carry JSON bodies.
    let greeting: Greeting = gateway.put("/profile", &json!({"name": "p"})).unwrap();
    assert_eq!(greeting.data, "replaced: p");
    let greeting: Greeting = gateway.patch("/profile", &json!({"name": "p"})).unwrap();
    assert_eq!(greeting.data, "renamed: p");
    let greeting: Greeting = gateway.delete("/profile", &json!({"name": "p"})).unwrap();
    assert_eq!(greeting.data, "removed: p");

    // Step 6: extra headers ride along untouched.
    let greeting: Greeting = gateway
        .issue(
            "/welcome",
            HttpMethod::Post,
            &json!({"name": "person"}),
            &RequestOptions::new().header("authorization", "Bearer token"),
        )
        .unwrap();
    assert_eq!(greeting.data, "hello!");

    // Step 7: a non-JSON response is an unknown failure, localized.
    let err = gateway
        .get::<serde_json::Value>("/plain", &json!({}))
        .unwrap_err();
    assert_eq!(err.kind, UNKNOWN_ERROR);
    assert_eq!(err.message, "알 수 없는 오류가 발생했습니다.");
}

#[test]
fn english_gateway_resolves_english_messages() {
    let addr = spawn_server();
    let mut gateway = RequestGateway::new(&format!("http://{addr}"));
    gateway.init_language("en");

    let err = gateway
        .post::<Greeting>("/welcome", &json!({"name": "smile"}))
        .unwrap_err();
    assert_eq!(err.kind, "SO_BEAUTIFUL_ERROR");
    assert_eq!(err.message, "Too beautiful!");
}

#[test]
fn unknown_language_falls_back_to_english() {
    let addr = spawn_server();
    let mut gateway = RequestGateway::new(&format!("http://{addr}"));
    gateway.init_language("xx");

    assert!(gateway.table().is_loaded());
    assert_eq!(gateway.table().lang(), "en");
    assert_eq!(
        gateway.table().resolve("SO_BEAUTIFUL_ERROR"),
        "Too beautiful!"
    );
}

#[test]
fn requests_work_before_any_table_is_loaded() {
    let addr = spawn_server();
    let gateway = RequestGateway::new(&format!("http://{addr}"));

    let greeting: Greeting = gateway.post("/welcome", &json!({"name": "person"})).unwrap();
    assert_eq!(greeting.data, "hello!");

    // The reason code is real but unresolvable without a loaded table.
    let err = gateway
        .post::<Greeting>("/welcome", &json!({"name": "smile"}))
        .unwrap_err();
    assert_eq!(err.kind, UNKNOWN_ERROR);
    assert_eq!(err.message, "An unknown error has occurred.");
}

/// Domain clients compose a gateway instead of extending one.
struct WelcomeApi {
    gateway: RequestGateway,
}

impl WelcomeApi {
    fn new(host: &str) -> Self {
        Self {
            gateway: RequestGateway::new(host),
        }
    }

    fn init(&mut self, lang: &str) {
        self.gateway.init_language(lang);
    }

    fn welcome(&self, name: &str) -> Result<Greeting, RequestError> {
        self.gateway.post("/welcome", &json!({"name": name}))
    }

    fn iq(&self, name: &str) -> Result<Greeting, RequestError> {
        self.gateway.post("/iq", &json!({"name": name}))
    }
}

#[test]
fn composed_api_client() {
    let addr = spawn_server();
    let mut api = WelcomeApi::new(&format!("http://{addr}"));
    api.init("en");

    assert_eq!(api.welcome("person").unwrap().data, "hello!");
    assert_eq!(api.iq("person").unwrap().data, "wow!");

    let err = api.welcome("smile").unwrap_err();
    assert_eq!(err.to_string(), "Too beautiful!");
    let err = api.iq("smile").unwrap_err();
    assert_eq!(err.message, "What a fool!");
}
