//! ipify Geolocation API 实现
//!
//! 每次查询都是独立的一次 HTTP GET，没有缓存和重试

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, trace, warn};
use ureq::Agent;

use super::provider::GeoLookup;
use super::types::{LookupResult, interpret_response};
use crate::config::GeoApiConfig;
use crate::errors::LookupError;
use crate::services::validator::LookupQuery;

/// ipify 客户端
///
/// endpoint 与 API Key 在构造时注入，不读取全局配置
pub struct IpifyClient {
    endpoint: String,
    api_key: String,
    agent: Agent,
}

impl IpifyClient {
    pub fn new(config: &GeoApiConfig) -> Self {
        if config.api_key.is_empty() {
            warn!("GeoIP: No API key configured, requests will be rejected by the server");
        }

        // 非 2xx 响应也要读取 body，由响应内容决定结果
        let agent: Agent = Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(config.timeout_secs)))
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            agent,
        }
    }

    /// 构造请求 URL
    ///
    /// IP 使用 `ipAddress` 参数，域名使用 `domain` 参数，Caller 不带地址参数
    pub fn build_url(&self, query: &LookupQuery) -> String {
        let mut url = format!(
            "{}?apiKey={}",
            self.endpoint,
            urlencoding::encode(&self.api_key)
        );

        match query {
            LookupQuery::Caller => {}
            LookupQuery::IpAddress(ip) => {
                url.push_str("&ipAddress=");
                url.push_str(&urlencoding::encode(ip));
            }
            LookupQuery::Domain(domain) => {
                url.push_str("&domain=");
                url.push_str(&urlencoding::encode(domain));
            }
        }

        url
    }

    /// 同步请求（在 spawn_blocking 中调用）
    fn fetch_sync(agent: Agent, url: String, query: String) -> Result<LookupResult, LookupError> {
        let resp = match agent.get(&url).call() {
            Ok(r) => r,
            Err(e) => {
                warn!("GeoIP request for \"{}\" failed: {}", query, e);
                return Err(LookupError::NetworkFailure);
            }
        };

        let status = resp.status();
        let body = match resp.into_body().read_to_string() {
            Ok(b) => b,
            Err(e) => {
                warn!("GeoIP response body for \"{}\" unreadable: {}", query, e);
                return Err(LookupError::NetworkFailure);
            }
        };

        trace!("GeoIP response for \"{}\": status={}", query, status);

        let result = interpret_response(&body);
        match &result {
            Ok(r) => debug!(
                "GeoIP lookup for \"{}\": ip={}, city={:?}, country={:?}",
                query, r.ip, r.location.city, r.location.country
            ),
            Err(e) => debug!(
                "GeoIP lookup for \"{}\" returned {} (HTTP {})",
                query,
                e.error_type(),
                status
            ),
        }
        result
    }
}

#[async_trait]
impl GeoLookup for IpifyClient {
    async fn lookup(&self, query: &LookupQuery) -> Result<LookupResult, LookupError> {
        let url = self.build_url(query);
        let agent = self.agent.clone();
        let label = query.to_string();

        // ureq 是同步客户端，放到阻塞线程池执行
        tokio::task::spawn_blocking(move || Self::fetch_sync(agent, url, label))
            .await
            .unwrap_or_else(|e| {
                warn!("GeoIP spawn_blocking failed: {}", e);
                Err(LookupError::NetworkFailure)
            })
    }

    fn name(&self) -> &'static str {
        "ipify"
    }
}
