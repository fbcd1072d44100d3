//! Lookup dispatch and outcome handling

use tracing::{debug, info};

use super::state::{App, LookupOutcome, ViewState};
use crate::services::LookupQuery;

impl App {
    /// 发起一次查询，结果通过 channel 送回
    ///
    /// 不取消之前的请求：多个请求并发时，最后返回的那个决定最终状态
    pub fn dispatch(&mut self, query: LookupQuery) -> u64 {
        self.next_request_id += 1;
        let request_id = self.next_request_id;

        self.view = ViewState::Loading;
        self.in_flight += 1;
        self.last_query = Some(query.clone());
        debug!("Dispatching lookup #{} for {}", request_id, query);

        let provider = self.provider.clone();
        let tx = self.outcome_tx.clone();
        tokio::spawn(async move {
            let result = provider.lookup(&query).await;
            // 接收端已关闭说明 UI 已退出，直接丢弃
            let _ = tx.send(LookupOutcome {
                request_id,
                query,
                result,
            });
        });

        request_id
    }

    /// 提交搜索框内容
    ///
    /// 空输入和格式错误直接进入错误状态，不发请求
    pub fn submit(&mut self) -> Option<u64> {
        self.clear_messages();
        match LookupQuery::parse(&self.search_input) {
            Ok(query) => Some(self.dispatch(query)),
            Err(e) => {
                debug!("Rejected input {:?}: {}", self.search_input, e.error_type());
                self.view = ViewState::Error(e);
                None
            }
        }
    }

    /// 应用一次查询结果，整体替换当前状态
    pub fn apply_outcome(&mut self, outcome: LookupOutcome) {
        self.in_flight = self.in_flight.saturating_sub(1);

        match outcome.result {
            Ok(result) => {
                info!(
                    "Lookup #{} for {} resolved to {}",
                    outcome.request_id, outcome.query, result.ip
                );
                self.view = ViewState::Success(result);
            }
            Err(e) => {
                info!(
                    "Lookup #{} for {} failed: {}",
                    outcome.request_id,
                    outcome.query,
                    e.error_type()
                );
                self.view = ViewState::Error(e);
            }
        }
    }

    /// 处理所有已返回的结果，返回处理数量
    pub fn drain_outcomes(&mut self) -> usize {
        let mut count = 0;
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.apply_outcome(outcome);
            count += 1;
        }
        count
    }

    /// 等待下一个结果并应用
    pub async fn wait_for_outcome(&mut self) -> Option<u64> {
        let outcome = self.outcome_rx.recv().await?;
        let request_id = outcome.request_id;
        self.apply_outcome(outcome);
        Some(request_id)
    }
}
