#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, OnceLock};
use std::time::Duration;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Request, Response},
    Router,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tower::ServiceExt;

use patocash_core::backend::{
    BackendClientTrait, Card, CategorySpending, PendingSpending, SurveyAnswer, SurveyResponse,
    Transaction, TransactionFilter, UserId, UserProfile,
};
use patocash_core::export::{
    BrowserEngine, BrowserError, BrowserSession, ExportSettings, PdfOptions, Viewport,
};
use patocash_core::reports::ReportGate;
use patocash_server::{api::app_router, config::Config, AppState};

pub const TOKEN: &str = "test-report-token";

pub fn tx(establishment: &str, category: &str, amount: Decimal, date: &str) -> Transaction {
    Transaction {
        establishment: establishment.to_string(),
        category: category.to_string(),
        amount,
        date: date.to_string(),
    }
}

/// In-memory data service that counts every call.
#[derive(Default)]
pub struct StubBackend {
    pub transactions: Vec<Transaction>,
    pub cards: Vec<Card>,
    pub survey_goal: Option<&'static str>,
    pub fail: bool,
    pub calls: AtomicUsize,
    pub goal_updates: Mutex<Vec<(String, Decimal)>>,
}

impl StubBackend {
    pub fn with_transactions(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions,
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn hit(&self) -> patocash_core::Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(patocash_core::Error::backend("connection refused"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl BackendClientTrait for StubBackend {
    async fn get_transactions(
        &self,
        _user: &UserId,
        filter: &TransactionFilter,
    ) -> patocash_core::Result<Vec<Transaction>> {
        self.hit()?;
        Ok(self
            .transactions
            .iter()
            .filter(|t| filter.category.as_ref().map_or(true, |c| &t.category == c))
            .cloned()
            .collect())
    }

    async fn get_cards(&self, _user: &UserId) -> patocash_core::Result<Vec<Card>> {
        self.hit()?;
        Ok(self.cards.clone())
    }

    async fn get_survey_responses(
        &self,
        _user: &UserId,
    ) -> patocash_core::Result<Vec<SurveyResponse>> {
        self.hit()?;
        Ok(self
            .survey_goal
            .map(|goal| {
                vec![SurveyResponse {
                    answers: vec![SurveyAnswer {
                        question: serde_json::json!(1),
                        answer: serde_json::json!(goal),
                    }],
                }]
            })
            .unwrap_or_default())
    }

    async fn get_user_profile(&self, _user: &UserId) -> patocash_core::Result<UserProfile> {
        self.hit()?;
        Ok(UserProfile {
            first_name: "Ana".into(),
            last_name: "Souza".into(),
        })
    }

    async fn get_category_spending(
        &self,
        _user: &UserId,
    ) -> patocash_core::Result<BTreeMap<String, CategorySpending>> {
        self.hit()?;
        let mut totals = BTreeMap::new();
        for t in &self.transactions {
            totals
                .entry(t.category.clone())
                .or_insert(CategorySpending {
                    total: Decimal::ZERO,
                })
                .total += t.amount;
        }
        Ok(totals)
    }

    async fn get_pending_spending(&self, _user: &UserId) -> patocash_core::Result<PendingSpending> {
        self.hit()?;
        Ok(PendingSpending { pending: dec!(25) })
    }

    async fn get_categories(&self, _user: &UserId) -> patocash_core::Result<Vec<String>> {
        self.hit()?;
        Ok(vec!["Lazer".into(), "Mercado".into()])
    }

    async fn get_transaction_months(&self, _user: &UserId) -> patocash_core::Result<Vec<String>> {
        self.hit()?;
        Ok(vec!["01".into(), "02".into()])
    }

    async fn update_card_goal(&self, card_id: &str, goal: Decimal) -> patocash_core::Result<()> {
        self.hit()?;
        self.goal_updates
            .lock()
            .unwrap()
            .push((format!("card:{card_id}"), goal));
        Ok(())
    }

    async fn update_survey_goal(&self, _user: &UserId, goal: Decimal) -> patocash_core::Result<()> {
        self.hit()?;
        self.goal_updates
            .lock()
            .unwrap()
            .push(("survey".to_string(), goal));
        Ok(())
    }
}

/// How the fake browser behaves once it reaches the navigation step.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Requests the URL from the app router itself.
    Loopback,
    /// Rotates the gate secret, then requests the (now stale) URL.
    RotateFirst,
    /// Never finishes loading.
    Hang,
}

/// Browser engine that "renders" by calling the app router in-process.
pub struct LoopbackEngine {
    pub router: Arc<OnceLock<Router>>,
    pub gate: Arc<ReportGate>,
    pub navigation: Navigation,
    pub launches: AtomicUsize,
    pub closed: Arc<AtomicBool>,
    pub visited: Arc<Mutex<Vec<String>>>,
}

impl LoopbackEngine {
    pub fn new(gate: Arc<ReportGate>, navigation: Navigation) -> Self {
        Self {
            router: Arc::new(OnceLock::new()),
            gate,
            navigation,
            launches: AtomicUsize::new(0),
            closed: Arc::new(AtomicBool::new(false)),
            visited: Arc::default(),
        }
    }

    pub fn was_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }
}

struct LoopbackSession {
    router: Router,
    gate: Arc<ReportGate>,
    navigation: Navigation,
    closed: Arc<AtomicBool>,
    visited: Arc<Mutex<Vec<String>>>,
    body_len: usize,
}

#[async_trait]
impl BrowserEngine for LoopbackEngine {
    async fn launch(&self) -> Result<Box<dyn BrowserSession>, BrowserError> {
        self.launches.fetch_add(1, Ordering::SeqCst);
        let router = self
            .router
            .get()
            .cloned()
            .ok_or_else(|| BrowserError::Launch("router not attached".into()))?;
        Ok(Box::new(LoopbackSession {
            router,
            gate: self.gate.clone(),
            navigation: self.navigation,
            closed: self.closed.clone(),
            visited: self.visited.clone(),
            body_len: 0,
        }))
    }
}

#[async_trait]
impl BrowserSession for LoopbackSession {
    async fn open_page(&mut self, _viewport: Viewport) -> Result<(), BrowserError> {
        Ok(())
    }

    async fn navigate(&mut self, url: &str) -> Result<Option<u16>, BrowserError> {
        self.visited.lock().unwrap().push(url.to_string());
        match self.navigation {
            Navigation::Hang => {
                tokio::time::sleep(Duration::from_secs(30)).await;
                return Ok(None);
            }
            Navigation::RotateFirst => self.gate.rotate("rotated-secret"),
            Navigation::Loopback => {}
        }
        let path = url
            .find("/relatorio")
            .map(|i| &url[i..])
            .ok_or_else(|| BrowserError::Navigation(format!("unexpected url {url}")))?;
        let response = self
            .router
            .clone()
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .map_err(|e| BrowserError::Navigation(e.to_string()))?;
        let status = response.status().as_u16();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| BrowserError::Navigation(e.to_string()))?;
        self.body_len = body.len();
        Ok(Some(status))
    }

    async fn content_height(&mut self) -> Result<f64, BrowserError> {
        Ok(1100.0)
    }

    async fn print_pdf(&mut self, _options: &PdfOptions) -> Result<Vec<u8>, BrowserError> {
        Ok(format!("%PDF-1.7 fake ({} bytes of html)", self.body_len).into_bytes())
    }

    async fn close(&mut self) -> Result<(), BrowserError> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

pub fn test_config() -> Config {
    Config::from_env()
}

pub struct TestApp {
    pub router: Router,
    pub backend: Arc<StubBackend>,
    pub engine: Arc<LoopbackEngine>,
    pub gate: Arc<ReportGate>,
}

pub fn build_app(backend: StubBackend, navigation: Navigation, export_timeout: Duration) -> TestApp {
    let backend = Arc::new(backend);
    let gate = Arc::new(ReportGate::new(TOKEN));
    let engine = Arc::new(LoopbackEngine::new(gate.clone(), navigation));
    let settings = ExportSettings::new("http://127.0.0.1:3000")
        .unwrap()
        .with_timeout(export_timeout);
    let state = Arc::new(AppState::new(
        backend.clone(),
        engine.clone(),
        gate.clone(),
        settings,
    ));
    let router = app_router(state, &test_config());
    let _ = engine.router.set(router.clone());
    TestApp {
        router,
        backend,
        engine,
        gate,
    }
}

pub fn app(backend: StubBackend) -> TestApp {
    build_app(backend, Navigation::Loopback, Duration::from_secs(5))
}

pub async fn get(router: &Router, uri: &str, user: Option<&str>) -> Response<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(user) = user {
        builder = builder.header(header::COOKIE, format!("idUser={user}; username=ana"));
    }
    router
        .clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
