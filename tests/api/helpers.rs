use once_cell::sync::Lazy;
use reqwest::{Client, Response};
use serde_json::{json, Value};
use std::{net::SocketAddr, sync::Arc};
use subledger::{
    configuration::get_configuration,
    startup::Application,
    storage::InMemorySubscriptionStore,
    telemetry::{get_subscriber, init_subscriber},
};
use uuid::Uuid;

static TRACING: Lazy<()> = Lazy::new(|| {
    let name = "test";
    let default_env_filter = "info";
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(name.into(), default_env_filter.into(), std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(name.into(), default_env_filter.into(), std::io::sink);
        init_subscriber(subscriber);
    }
});

static FAILED_TO_EXECUTE_REQUEST: &str = "Failed to execute request";

pub fn init_tracing() {
    Lazy::force(&TRACING);
}

/// Postgres-backed tests only run when `DATABASE_TESTS` is set, e.g.
/// `DATABASE_TESTS=1 cargo test`, against the database in `configuration/`.
pub fn database_tests_enabled() -> bool {
    std::env::var_os("DATABASE_TESTS").is_some_and(|value| !value.is_empty() && value != "0")
}

pub struct TestApp {
    pub address: SocketAddr,
    client: Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        init_tracing();

        let mut config = get_configuration().expect("Failed to read configuration");
        config.application.port = 0;

        let store = Arc::new(InMemorySubscriptionStore::new());
        let app = Application::build_with_store(&config.application, store)
            .await
            .expect("Failed to build application");
        let address = app.local_addr();

        tokio::spawn(app.run_until_stopped());

        Self {
            address,
            client: Client::new(),
        }
    }

    pub async fn get_health_check(&self) -> Response {
        self.client
            .get(self.url("/health_check"))
            .send()
            .await
            .expect(FAILED_TO_EXECUTE_REQUEST)
    }

    pub async fn post_subscriptions(&self, body: &Value) -> Response {
        self.client
            .post(self.url("/subs"))
            .json(body)
            .send()
            .await
            .expect(FAILED_TO_EXECUTE_REQUEST)
    }

    pub async fn post_raw_subscriptions(&self, body: &'static str) -> Response {
        self.client
            .post(self.url("/subs"))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect(FAILED_TO_EXECUTE_REQUEST)
    }

    pub async fn post_untyped_subscriptions(&self, body: String) -> Response {
        self.client
            .post(self.url("/subs"))
            .body(body)
            .send()
            .await
            .expect(FAILED_TO_EXECUTE_REQUEST)
    }

    pub async fn put_raw_subscription(&self, id: &str, body: &'static str) -> Response {
        self.client
            .put(self.url(&format!("/subs/{id}")))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect(FAILED_TO_EXECUTE_REQUEST)
    }

    pub async fn get_subscriptions(&self) -> Response {
        self.client
            .get(self.url("/subs"))
            .send()
            .await
            .expect(FAILED_TO_EXECUTE_REQUEST)
    }

    pub async fn get_subscription(&self, id: &str) -> Response {
        self.client
            .get(self.url(&format!("/subs/{id}")))
            .send()
            .await
            .expect(FAILED_TO_EXECUTE_REQUEST)
    }

    pub async fn put_subscription(&self, id: &str, body: &Value) -> Response {
        self.client
            .put(self.url(&format!("/subs/{id}")))
            .json(body)
            .send()
            .await
            .expect(FAILED_TO_EXECUTE_REQUEST)
    }

    pub async fn delete_subscription(&self, id: &str) -> Response {
        self.client
            .delete(self.url(&format!("/subs/{id}")))
            .send()
            .await
            .expect(FAILED_TO_EXECUTE_REQUEST)
    }

    pub async fn get_sum(&self, query: &[(&str, &str)]) -> Response {
        self.client
            .get(self.url("/subs/sum"))
            .query(query)
            .send()
            .await
            .expect(FAILED_TO_EXECUTE_REQUEST)
    }

    /// Creates a subscription and returns its id, panicking on any non-201 answer.
    pub async fn create_subscription(&self, body: &Value) -> String {
        let response = self.post_subscriptions(body).await;
        assert_eq!(response.status(), 201);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["sub_id"]
            .as_str()
            .expect("Response is missing `sub_id`")
            .to_string()
    }

    pub async fn sum(&self, query: &[(&str, &str)]) -> i64 {
        let response = self.get_sum(query).await;
        assert_eq!(response.status(), 200);

        let body: Value = response.json().await.expect("Failed to parse response");
        body["sum"].as_i64().expect("Response is missing `sum`")
    }

    fn url(&self, endpoint: &str) -> String {
        format!("http://{}{endpoint}", self.address)
    }
}

pub fn subscription_body(service: &str, price: i64, start: &str, end: Option<&str>) -> Value {
    json!({
        "service_name": service,
        "price": price,
        "user_id": Uuid::new_v4().to_string(),
        "start_date": start,
        "end_date": end,
    })
}
