//! GeoIP 服务模块
//!
//! 提供 IP 地址 / 域名的地理位置查询：
//! - ipify Geolocation API 客户端
//! - 响应归一化为 `LookupResult` 或 `LookupError`

mod ipify;
mod provider;
mod types;

pub use ipify::IpifyClient;
pub use provider::{GeoLookup, create_provider};
pub use types::{AsInfo, Location, LookupResult, interpret_response};
