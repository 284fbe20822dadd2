use std::sync::Arc;

use account_service::config::SessionConfig;
use account_service::config::StoreBackend;
use account_service::domain::user::ports::UserRepository;
use account_service::domain::user::ports::UserServicePort;
use account_service::domain::user::service::UserService;
use account_service::inbound::http::router::create_router;
use account_service::inbound::http::views::Views;
use account_service::outbound::repositories::InMemoryUserRepository;
use account_service::outbound::repositories::SqliteUserRepository;
use reqwest::redirect::Policy;

/// Name of the session cookie the test server issues
pub const SESSION_COOKIE: &str = "sid";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application backed by an in-memory SQLite database
    pub async fn spawn() -> Self {
        Self::spawn_with(StoreBackend::Sqlite, 20 * 60).await
    }

    /// Spawn the application with a specific store and session idle timeout
    pub async fn spawn_with(backend: StoreBackend, idle_timeout_seconds: u32) -> Self {
        match backend {
            StoreBackend::Sqlite => {
                let repository = SqliteUserRepository::connect("sqlite::memory:")
                    .await
                    .expect("Failed to open in-memory database");
                Self::serve(repository, idle_timeout_seconds).await
            }
            StoreBackend::Memory => {
                Self::serve(InMemoryUserRepository::new(), idle_timeout_seconds).await
            }
        }
    }

    /// Spawn the application over any user repository
    pub async fn spawn_with_repository<R: UserRepository>(repository: R) -> Self {
        Self::serve(repository, 20 * 60).await
    }

    async fn serve<R: UserRepository>(repository: R, idle_timeout_seconds: u32) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let user_service: Arc<dyn UserServicePort> =
            Arc::new(UserService::new(Arc::new(repository)));

        let views = Arc::new(Views::new().expect("Failed to load templates"));
        let session_config = SessionConfig {
            idle_timeout_seconds,
            secure_cookie: false,
            cookie_name: SESSION_COOKIE.to_string(),
        };

        let router = create_router(user_service, views, &session_config);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            port,
            api_client: Self::browser(),
        }
    }

    /// Client with its own cookie jar that does not follow redirects
    pub fn browser() -> reqwest::Client {
        reqwest::Client::builder()
            .cookie_store(true)
            .redirect(Policy::none())
            .build()
            .expect("Failed to create reqwest client")
    }

    /// Client without a cookie jar; cookies must be sent by hand
    pub fn cookieless() -> reqwest::Client {
        reqwest::Client::builder()
            .redirect(Policy::none())
            .build()
            .expect("Failed to create reqwest client")
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Submit the registration form
    pub async fn register(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/register")
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Submit the login form
    pub async fn login(&self, username: &str, password: &str) -> reqwest::Response {
        self.post("/login")
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .expect("Failed to execute request")
    }

    /// Fetch a page
    pub async fn visit(&self, path: &str) -> reqwest::Response {
        self.get(path)
            .send()
            .await
            .expect("Failed to execute request")
    }
}

/// Location header of a redirect response
pub fn location(response: &reqwest::Response) -> &str {
    response
        .headers()
        .get(reqwest::header::LOCATION)
        .expect("Missing Location header")
        .to_str()
        .expect("Invalid Location header")
}

/// `name=value` pair of the session cookie set by a response
pub fn session_cookie(response: &reqwest::Response) -> String {
    response
        .headers()
        .get_all(reqwest::header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .filter_map(|value| value.split(';').next())
        .find(|pair| pair.starts_with(&format!("{}=", SESSION_COOKIE)))
        .expect("Missing session cookie")
        .to_string()
}
