//! In-process stand-in for the budget API with real state: accounts,
//! tokens, budgets and expenses, scoped per user.

#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch, post, put};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
struct Account {
    username: String,
    account: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone)]
struct StoredBudget {
    id: i64,
    owner: String,
    year: i32,
    month: u32,
    amount: f64,
}

#[derive(Debug, Clone)]
struct StoredExpense {
    id: i64,
    owner: String,
    description: String,
    amount: f64,
    budget_id: i64,
}

#[derive(Default)]
struct Inner {
    accounts: Vec<Account>,
    /// token -> account
    tokens: HashMap<String, String>,
    budgets: Vec<StoredBudget>,
    expenses: Vec<StoredExpense>,
    next_id: i64,
}

impl Inner {
    fn next_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    fn budget_json(&self, budget: &StoredBudget) -> Value {
        let spent: f64 = self
            .expenses
            .iter()
            .filter(|e| e.budget_id == budget.id)
            .map(|e| e.amount)
            .sum();
        json!({
            "id": budget.id,
            "year": budget.year,
            "month": budget.month,
            "amount": budget.amount,
            "total_spent": spent,
            "remaining": budget.amount - spent,
        })
    }
}

type Shared = Arc<Mutex<Inner>>;

/// Handle to a running fake API.
pub struct FakeApi {
    pub base_url: String,
    state: Shared,
    shutdown: tokio::sync::watch::Sender<bool>,
}

impl FakeApi {
    pub async fn start() -> Self {
        let state: Shared = Arc::new(Mutex::new(Inner::default()));

        let api = Router::new()
            .route("/auth/login", post(login))
            .route("/auth/register", post(register))
            .route("/budget/budget/", get(list_budgets).post(create_budget))
            .route("/expense/expenses/", get(list_expenses).post(create_expense))
            .route(
                "/expense/expenses/{id}",
                patch(update_expense).delete(delete_expense),
            )
            .route("/users/me", get(me))
            .route("/users/password", put(change_password))
            .with_state(state.clone());
        let app = Router::new().nest("/api/v1", api);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind fake API");
        let addr = listener.local_addr().unwrap();
        let (shutdown_tx, mut shutdown_rx) = tokio::sync::watch::channel(false);

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            base_url: format!("http://{}/api/v1", addr),
            state,
            shutdown: shutdown_tx,
        }
    }

    /// Create an account directly, bypassing the HTTP API.
    pub fn seed_user(&self, username: &str, account: &str, password: &str) {
        self.state.lock().unwrap().accounts.push(Account {
            username: username.to_string(),
            account: account.to_string(),
            email: format!("{}@example.com", account),
            password: password.to_string(),
        });
    }

    pub fn expense_count(&self) -> usize {
        self.state.lock().unwrap().expenses.len()
    }
}

impl Drop for FakeApi {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

fn detail(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "detail": message }))).into_response()
}

fn authenticate(state: &Inner, headers: &HeaderMap) -> Result<String, Response> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .and_then(|token| state.tokens.get(token).cloned())
        .ok_or_else(|| detail(StatusCode::UNAUTHORIZED, "Not authenticated"))
}

#[derive(Deserialize)]
struct LoginBody {
    account: String,
    password: String,
}

async fn login(State(state): State<Shared>, Json(body): Json<LoginBody>) -> Response {
    let mut inner = state.lock().unwrap();
    let valid = inner
        .accounts
        .iter()
        .any(|a| a.account == body.account && a.password == body.password);
    if !valid {
        return detail(StatusCode::UNAUTHORIZED, "Incorrect account or password");
    }
    let token = format!("token-{}-{}", body.account, inner.next_id());
    inner.tokens.insert(token.clone(), body.account);
    Json(json!({ "access_token": token, "token_type": "bearer" })).into_response()
}

#[derive(Deserialize)]
struct RegisterBody {
    username: String,
    account: String,
    email: String,
    password: String,
}

async fn register(State(state): State<Shared>, Json(body): Json<RegisterBody>) -> Response {
    let mut inner = state.lock().unwrap();
    if inner.accounts.iter().any(|a| a.account == body.account) {
        return detail(StatusCode::BAD_REQUEST, "Account already registered");
    }
    inner.accounts.push(Account {
        username: body.username,
        account: body.account.clone(),
        email: body.email,
        password: body.password,
    });
    (StatusCode::CREATED, Json(json!({ "account": body.account }))).into_response()
}

async fn list_budgets(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let inner = state.lock().unwrap();
    let owner = match authenticate(&inner, &headers) {
        Ok(owner) => owner,
        Err(resp) => return resp,
    };
    let budgets: Vec<Value> = inner
        .budgets
        .iter()
        .filter(|b| b.owner == owner)
        .map(|b| inner.budget_json(b))
        .collect();
    Json(Value::Array(budgets)).into_response()
}

#[derive(Deserialize)]
struct BudgetBody {
    amount: f64,
    year: i32,
    month: u32,
}

async fn create_budget(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<BudgetBody>,
) -> Response {
    let mut inner = state.lock().unwrap();
    let owner = match authenticate(&inner, &headers) {
        Ok(owner) => owner,
        Err(resp) => return resp,
    };
    if inner
        .budgets
        .iter()
        .any(|b| b.owner == owner && b.year == body.year && b.month == body.month)
    {
        return detail(StatusCode::BAD_REQUEST, "Budget already exists for this month");
    }
    let budget = StoredBudget {
        id: inner.next_id(),
        owner,
        year: body.year,
        month: body.month,
        amount: body.amount,
    };
    let json = inner.budget_json(&budget);
    inner.budgets.push(budget);
    (StatusCode::CREATED, Json(json)).into_response()
}

async fn list_expenses(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let inner = state.lock().unwrap();
    let owner = match authenticate(&inner, &headers) {
        Ok(owner) => owner,
        Err(resp) => return resp,
    };
    let expenses: Vec<Value> = inner
        .expenses
        .iter()
        .filter(|e| e.owner == owner)
        .map(|e| {
            let period = inner
                .budgets
                .iter()
                .find(|b| b.id == e.budget_id)
                .map(|b| json!({ "year": b.year, "month": b.month }));
            json!({
                "id": e.id,
                "description": e.description,
                "amount": e.amount,
                "budget_id": e.budget_id,
                "budget": period,
            })
        })
        .collect();
    Json(Value::Array(expenses)).into_response()
}

#[derive(Deserialize)]
struct ExpenseBody {
    description: String,
    amount: f64,
    budget_id: i64,
}

async fn create_expense(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<ExpenseBody>,
) -> Response {
    let mut inner = state.lock().unwrap();
    let owner = match authenticate(&inner, &headers) {
        Ok(owner) => owner,
        Err(resp) => return resp,
    };
    if !inner
        .budgets
        .iter()
        .any(|b| b.id == body.budget_id && b.owner == owner)
    {
        return detail(StatusCode::NOT_FOUND, "Budget not found");
    }
    let id = inner.next_id();
    inner.expenses.push(StoredExpense {
        id,
        owner,
        description: body.description,
        amount: body.amount,
        budget_id: body.budget_id,
    });
    (StatusCode::CREATED, Json(json!({ "id": id }))).into_response()
}

#[derive(Deserialize)]
struct ExpenseUpdateBody {
    description: String,
    amount: f64,
}

async fn update_expense(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    headers: HeaderMap,
    Json(body): Json<ExpenseUpdateBody>,
) -> Response {
    let mut inner = state.lock().unwrap();
    let owner = match authenticate(&inner, &headers) {
        Ok(owner) => owner,
        Err(resp) => return resp,
    };
    match inner
        .expenses
        .iter_mut()
        .find(|e| e.id == id && e.owner == owner)
    {
        Some(expense) => {
            expense.description = body.description;
            expense.amount = body.amount;
            Json(json!({ "id": id })).into_response()
        }
        None => detail(StatusCode::NOT_FOUND, "Expense not found"),
    }
}

async fn delete_expense(
    State(state): State<Shared>,
    Path(id): Path<i64>,
    headers: HeaderMap,
) -> Response {
    let mut inner = state.lock().unwrap();
    let owner = match authenticate(&inner, &headers) {
        Ok(owner) => owner,
        Err(resp) => return resp,
    };
    let before = inner.expenses.len();
    inner.expenses.retain(|e| !(e.id == id && e.owner == owner));
    if inner.expenses.len() == before {
        return detail(StatusCode::NOT_FOUND, "Expense not found");
    }
    StatusCode::OK.into_response()
}

async fn me(State(state): State<Shared>, headers: HeaderMap) -> Response {
    let inner = state.lock().unwrap();
    let owner = match authenticate(&inner, &headers) {
        Ok(owner) => owner,
        Err(resp) => return resp,
    };
    let account = inner
        .accounts
        .iter()
        .find(|a| a.account == owner)
        .cloned()
        .expect("token for unknown account");
    Json(json!({
        "account": account.account,
        "username": account.username,
        "email": account.email,
    }))
    .into_response()
}

#[derive(Deserialize)]
struct PasswordBody {
    old_password: String,
    new_password: String,
}

async fn change_password(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<PasswordBody>,
) -> Response {
    let mut inner = state.lock().unwrap();
    let owner = match authenticate(&inner, &headers) {
        Ok(owner) => owner,
        Err(resp) => return resp,
    };
    let Some(account) = inner.accounts.iter_mut().find(|a| a.account == owner) else {
        return detail(StatusCode::NOT_FOUND, "User not found");
    };
    if account.password != body.old_password {
        return detail(StatusCode::BAD_REQUEST, "Old password incorrect");
    }
    account.password = body.new_password;
    inner.tokens.retain(|_, a| a != &owner);
    Json(json!({ "message": "Password updated" })).into_response()
}
