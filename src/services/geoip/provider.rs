//! GeoIP 查询抽象层
//!
//! 视图控制器只依赖 `GeoLookup`，具体实现在启动时注入

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use super::ipify::IpifyClient;
use super::types::LookupResult;
use crate::config::GeoApiConfig;
use crate::errors::LookupError;
use crate::services::validator::LookupQuery;

/// GeoIP 查询 trait
#[async_trait]
pub trait GeoLookup: Send + Sync {
    /// 查询地理位置；`LookupQuery::Caller` 表示查询调用方自身
    async fn lookup(&self, query: &LookupQuery) -> Result<LookupResult, LookupError>;

    /// 获取 provider 名称（用于日志）
    fn name(&self) -> &'static str;
}

/// 根据配置创建查询实现
pub fn create_provider(config: &GeoApiConfig) -> Arc<dyn GeoLookup> {
    let provider: Arc<dyn GeoLookup> = Arc::new(IpifyClient::new(config));
    info!("GeoIP: Initialized with {} provider", provider.name());
    provider
}
