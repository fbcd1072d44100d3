//! Service layer
//!
//! 查询逻辑由 TUI 和 CLI 共享：输入校验 + 地理位置查询

pub mod geoip;
pub mod validator;

pub use geoip::{GeoLookup, IpifyClient, LookupResult, create_provider};
pub use validator::{AddressKind, LookupQuery, classify};
