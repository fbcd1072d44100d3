//! App state definition and basic state management
//!
//! 视图状态使用显式的 tagged union，结果与错误不会同时存在

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::errors::LookupError;
use crate::interfaces::tui::constants::map;
use crate::services::{GeoLookup, LookupQuery, LookupResult};

/// 视图状态
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    /// 没有结果也没有错误（例如编辑输入后错误被清除）
    #[default]
    Idle,
    /// 有请求尚未返回
    Loading,
    Success(LookupResult),
    Error(LookupError),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn result(&self) -> Option<&LookupResult> {
        match self {
            ViewState::Success(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<LookupError> {
        match self {
            ViewState::Error(e) => Some(*e),
            _ => None,
        }
    }
}

/// 一次查询完成后发回 UI 循环的消息
#[derive(Debug, Clone)]
pub struct LookupOutcome {
    pub request_id: u64,
    pub query: LookupQuery,
    pub result: Result<LookupResult, LookupError>,
}

pub struct App {
    pub provider: Arc<dyn GeoLookup>,

    // Search bar
    pub search_input: String,

    // View state
    pub view: ViewState,
    /// 已发出但还未返回的请求数
    pub in_flight: usize,
    /// 最近一次发出的查询
    pub last_query: Option<LookupQuery>,

    // Map
    pub map_zoom: u8,

    // UI state
    pub spinner_tick: usize,
    pub status_message: String,
    pub error_message: String,

    pub(super) next_request_id: u64,
    pub(super) outcome_tx: mpsc::UnboundedSender<LookupOutcome>,
    pub(super) outcome_rx: mpsc::UnboundedReceiver<LookupOutcome>,
}

impl App {
    /// 创建 App 并立即发起一次调用方自身 IP 的查询
    ///
    /// 必须在 tokio runtime 内调用
    pub fn new(provider: Arc<dyn GeoLookup>) -> App {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();

        let mut app = App {
            provider,
            search_input: String::new(),
            view: ViewState::Loading,
            in_flight: 0,
            last_query: None,
            map_zoom: map::DEFAULT_ZOOM,
            spinner_tick: 0,
            status_message: String::new(),
            error_message: String::new(),
            next_request_id: 0,
            outcome_tx,
            outcome_rx,
        };

        app.dispatch(LookupQuery::Caller);
        app
    }

    pub fn current_result(&self) -> Option<&LookupResult> {
        self.view.result()
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = message;
        self.error_message.clear();
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = message;
        self.status_message.clear();
    }

    pub fn clear_messages(&mut self) {
        self.status_message.clear();
        self.error_message.clear();
    }

    /// 推进加载动画
    pub fn tick(&mut self) {
        if self.view.is_loading() {
            self.spinner_tick = self.spinner_tick.wrapping_add(1);
        }
    }
}
