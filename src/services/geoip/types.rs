//! 地理位置查询结果及响应解析

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::errors::LookupError;

/// 一次成功查询的结果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupResult {
    pub ip: String,
    pub location: Location,
    #[serde(default, deserialize_with = "null_as_default")]
    pub isp: String,
    /// 自治系统信息（部分套餐才会返回）
    #[serde(
        rename = "as",
        default,
        deserialize_with = "lenient_as_info",
        skip_serializing_if = "Option::is_none"
    )]
    pub as_info: Option<AsInfo>,
    /// 解析到该 IP 的域名
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub domains: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// UTC 偏移，例如 "-07:00"
    #[serde(default, deserialize_with = "null_as_default")]
    pub timezone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geoname_id: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsInfo {
    pub asn: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub route: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub domain: String,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub kind: String,
}

/// 字段为 null 时与缺失一样取默认值
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// `as` 为 null、缺少 asn 或结构不对时视为 None
fn lenient_as_info<'de, D>(deserializer: D) -> Result<Option<AsInfo>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

impl LookupResult {
    /// "city, region, country"
    pub fn location_text(&self) -> String {
        format!(
            "{}, {}, {}",
            self.location.city, self.location.region, self.location.country
        )
    }

    /// "UTC -07:00"，时区为空时返回 None
    pub fn timezone_text(&self) -> Option<String> {
        if self.location.timezone.is_empty() {
            None
        } else {
            Some(format!("UTC {}", self.location.timezone))
        }
    }

    pub fn coordinates(&self) -> (f64, f64) {
        (self.location.lat, self.location.lng)
    }
}

/// 将响应体归一化为查询结果
///
/// - 不是 JSON：NetworkFailure
/// - 带 `code` / `messages` 字段，或 `location` 为空/缺失/结构不对：NoResults
///
/// 与 HTTP 状态码无关
pub fn interpret_response(body: &str) -> Result<LookupResult, LookupError> {
    let json: Value = serde_json::from_str(body).map_err(|_| LookupError::NetworkFailure)?;

    let has_field = |key: &str| json.get(key).is_some_and(|v| !v.is_null());

    if has_field("code") || has_field("messages") {
        return Err(LookupError::NoResults);
    }

    if !has_field("location") {
        return Err(LookupError::NoResults);
    }

    serde_json::from_value(json).map_err(|_| LookupError::NoResults)
}
