use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use auth::Authenticator;
use auth::JwtHandler;
use order_service::customer::errors::CustomerError;
use order_service::customer::models::Customer;
use order_service::customer::models::CustomerId;
use order_service::customer::models::NewCustomer;
use order_service::customer::ports::CustomerRepository;
use order_service::customer::service::CustomerService;
use order_service::dashboard::aggregator::Aggregator;
use order_service::dashboard::service::DashboardService;
use order_service::domain::user::models::EmailAddress;
use order_service::domain::user::models::NewUser;
use order_service::domain::user::models::User;
use order_service::domain::user::models::UserId;
use order_service::domain::user::ports::UserRepository;
use order_service::inbound::http::router::create_router;
use order_service::inbound::http::router::AppState;
use order_service::order::errors::OrderError;
use order_service::order::models::CreateOrderCommand;
use order_service::order::models::MalformedOrder;
use order_service::order::models::Order;
use order_service::order::models::OrderId;
use order_service::order::models::OrderRecord;
use order_service::order::ports::OrderRepository;
use order_service::order::service::OrderService;
use order_service::user::errors::UserError;
use order_service::user::service::AuthService;
use serde_json::json;

pub const SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";
pub const ADMIN_EMAIL: &str = "admin@toystore.com";
pub const ADMIN_PASSWORD: &str = "admin123";

/// Rows shared by the in-memory repositories.
#[derive(Default)]
pub struct StoreState {
    pub users: Vec<User>,
    pub customers: Vec<Customer>,
    pub orders: Vec<Order>,
    /// Rows a real store would fail to decode.
    pub malformed_orders: Vec<MalformedOrder>,
    next_id: i64,
}

impl StoreState {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

pub type Store = Arc<Mutex<StoreState>>;

pub struct InMemoryUsers(Store);
pub struct InMemoryCustomers(Store);
pub struct InMemoryOrders(Store);

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create(&self, user: NewUser) -> Result<User, UserError> {
        let mut state = self.0.lock().unwrap();
        if state.users.iter().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists(user.email.to_string()));
        }

        let created = User {
            id: UserId(state.next_id()),
            email: user.email,
            name: user.name,
            telephone: user.telephone,
            role: user.role,
            password_hash: user.password_hash,
            is_admin: user.is_admin,
            is_active: user.is_active,
        };
        state.users.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let state = self.0.lock().unwrap();
        Ok(state.users.iter().find(|u| u.id == *id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let state = self.0.lock().unwrap();
        Ok(state.users.iter().find(|u| u.email.as_str() == email).cloned())
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomers {
    async fn create(&self, customer: NewCustomer) -> Result<Customer, CustomerError> {
        let mut state = self.0.lock().unwrap();
        if state.customers.iter().any(|c| c.email == customer.email) {
            return Err(CustomerError::EmailAlreadyExists(customer.email.to_string()));
        }

        let created = Customer {
            id: CustomerId(state.next_id()),
            name: customer.name,
            email: customer.email,
            phone: customer.phone,
            user_id: customer.user_id,
        };
        state.customers.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: &CustomerId) -> Result<Option<Customer>, CustomerError> {
        let state = self.0.lock().unwrap();
        Ok(state.customers.iter().find(|c| c.id == *id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Customer>, CustomerError> {
        Ok(self.0.lock().unwrap().customers.clone())
    }

    async fn count(&self) -> Result<u64, CustomerError> {
        Ok(self.0.lock().unwrap().customers.len() as u64)
    }

    async fn update(&self, customer: Customer) -> Result<Customer, CustomerError> {
        let mut state = self.0.lock().unwrap();
        if state
            .customers
            .iter()
            .any(|c| c.id != customer.id && c.email == customer.email)
        {
            return Err(CustomerError::EmailAlreadyExists(customer.email.to_string()));
        }

        let slot = state
            .customers
            .iter_mut()
            .find(|c| c.id == customer.id)
            .ok_or(CustomerError::NotFound(customer.id))?;
        *slot = customer.clone();
        Ok(customer)
    }

    async fn delete(&self, id: &CustomerId) -> Result<(), CustomerError> {
        let mut state = self.0.lock().unwrap();
        let before = state.customers.len();
        state.customers.retain(|c| c.id != *id);
        if state.customers.len() == before {
            return Err(CustomerError::NotFound(*id));
        }
        state.orders.retain(|o| o.customer_id != *id);
        Ok(())
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrders {
    async fn create(&self, command: CreateOrderCommand) -> Result<Order, OrderError> {
        let mut state = self.0.lock().unwrap();
        if !state.customers.iter().any(|c| c.id == command.customer_id) {
            return Err(OrderError::CustomerNotFound(command.customer_id));
        }

        let created = Order {
            id: OrderId(state.next_id()),
            items: command.items,
            delivery_address: command.delivery_address,
            order_date: command.order_date,
            delivery_date: command.delivery_date,
            status: command.status,
            customer_id: command.customer_id,
        };
        state.orders.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: &OrderId) -> Result<Option<Order>, OrderError> {
        let state = self.0.lock().unwrap();
        Ok(state.orders.iter().find(|o| o.id == *id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Order>, OrderError> {
        Ok(self.0.lock().unwrap().orders.clone())
    }

    async fn list_records(&self) -> Result<Vec<OrderRecord>, OrderError> {
        let state = self.0.lock().unwrap();
        let mut records: Vec<OrderRecord> = state
            .orders
            .iter()
            .cloned()
            .map(OrderRecord::Valid)
            .chain(state.malformed_orders.iter().cloned().map(OrderRecord::Malformed))
            .collect();
        records.sort_by_key(OrderRecord::id);
        Ok(records)
    }

    async fn update(&self, order: Order) -> Result<Order, OrderError> {
        let mut state = self.0.lock().unwrap();
        let slot = state
            .orders
            .iter_mut()
            .find(|o| o.id == order.id)
            .ok_or(OrderError::NotFound(order.id))?;
        *slot = order.clone();
        Ok(order)
    }

    async fn delete(&self, id: &OrderId) -> Result<(), OrderError> {
        let mut state = self.0.lock().unwrap();
        let before = state.orders.len();
        state.orders.retain(|o| o.id != *id);
        if state.orders.len() == before {
            return Err(OrderError::NotFound(*id));
        }
        Ok(())
    }
}

/// Test application that spawns a real server over in-memory storage
pub struct TestApp {
    pub address: String,
    pub store: Store,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
}

impl TestApp {
    /// Spawn the application in a background task with one seeded admin
    pub async fn spawn() -> Self {
        let store: Store = Arc::default();
        let authenticator = Arc::new(Authenticator::new(SECRET));

        seed_admin(&store, &authenticator);

        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let users = Arc::new(InMemoryUsers(Arc::clone(&store)));
        let customers = Arc::new(InMemoryCustomers(Arc::clone(&store)));
        let orders = Arc::new(InMemoryOrders(Arc::clone(&store)));

        let state = AppState {
            auth_service: Arc::new(AuthService::new(users, authenticator)),
            customer_service: Arc::new(CustomerService::new(Arc::clone(&customers))),
            order_service: Arc::new(OrderService::new(
                Arc::clone(&orders),
                Arc::clone(&customers),
            )),
            dashboard_service: Arc::new(DashboardService::new(
                orders,
                customers,
                Aggregator::default(),
            )),
        };

        let router = create_router(state, &[]);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            store,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(SECRET),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Helper to make POST request with Bearer token
    pub fn post_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.post(path).bearer_auth(token)
    }

    /// Helper to make PUT request with Bearer token
    pub fn put_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .put(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Helper to make DELETE request with Bearer token
    pub fn delete_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.api_client
            .delete(format!("{}{}", self.address, path))
            .bearer_auth(token)
    }

    /// Log in and return the access token
    pub async fn login(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/auth/login")
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::OK, "login failed");

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["access_token"]
            .as_str()
            .expect("Missing access token")
            .to_string()
    }

    pub async fn admin_token(&self) -> String {
        self.login(ADMIN_EMAIL, ADMIN_PASSWORD).await
    }

    /// Register a regular account and return its token
    pub async fn register_and_login(&self, email: &str, password: &str) -> String {
        let response = self
            .post("/auth/register")
            .json(&json!({
                "email": email,
                "name": "Test User",
                "telephone": "555-0100",
                "password": password
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        self.login(email, password).await
    }

    /// Create a customer and return its id
    pub async fn create_customer(&self, token: &str, email: &str) -> i64 {
        let response = self
            .post_authenticated("/api/customers", token)
            .json(&json!({
                "name": "Jane Doe",
                "email": email,
                "phone": "555-0199"
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["id"].as_i64().expect("Missing customer id")
    }

    /// Place an order and return its id
    pub async fn create_order(&self, token: &str, customer_id: i64, address: &str) -> i64 {
        let response = self
            .post_authenticated("/api/orders", token)
            .json(&json!({
                "customer_id": customer_id,
                "items": ["Teddy Bear", "Yo-yo"],
                "delivery_address": address
            }))
            .send()
            .await
            .expect("Failed to execute request");
        assert_eq!(response.status(), reqwest::StatusCode::CREATED);

        let body: serde_json::Value = response.json().await.expect("Failed to parse response");
        body["data"]["id"].as_i64().expect("Missing order id")
    }

    /// Flip a stored account's active flag
    pub fn set_active(&self, email: &str, active: bool) {
        let mut state = self.store.lock().unwrap();
        if let Some(user) = state.users.iter_mut().find(|u| u.email.as_str() == email) {
            user.is_active = active;
        }
    }
}

fn seed_admin(store: &Store, authenticator: &Authenticator) {
    let mut state = store.lock().unwrap();
    let id = state.next_id();
    state.users.push(User {
        id: UserId(id),
        email: EmailAddress::new(ADMIN_EMAIL.to_string()).unwrap(),
        name: "Admin".to_string(),
        telephone: String::new(),
        role: "admin".to_string(),
        password_hash: authenticator.hash_password(ADMIN_PASSWORD).unwrap(),
        is_admin: true,
        is_active: true,
    });
}
