//! 输入格式校验
//!
//! 纯函数，只做格式分类，不检查 IPv4 数值范围，也不校验 IPv6 的 `::` 压缩规则

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::errors::LookupError;

/// 四组 1-3 位数字
static IPV4_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[0-9]{1,3}\.){3}[0-9]{1,3}$").unwrap());

/// 3-8 组，每组 0-4 位十六进制
static IPV6_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[0-9a-fA-F]{0,4}:){2,7}[0-9a-fA-F]{0,4}$").unwrap());

/// label(.label)*.tld，label 不能以连字符开头或结尾
static DOMAIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,}$").unwrap()
});

/// 输入分类结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressKind {
    Ipv4,
    Ipv6,
    Domain,
    Invalid,
}

/// 按 IPv4、IPv6、域名的顺序匹配
pub fn classify(input: &str) -> AddressKind {
    if IPV4_PATTERN.is_match(input) {
        AddressKind::Ipv4
    } else if IPV6_PATTERN.is_match(input) {
        AddressKind::Ipv6
    } else if DOMAIN_PATTERN.is_match(input) {
        AddressKind::Domain
    } else {
        AddressKind::Invalid
    }
}

/// 一次查询的目标
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupQuery {
    /// 不带地址参数，由服务端识别调用方 IP
    Caller,
    IpAddress(String),
    Domain(String),
}

impl LookupQuery {
    /// 解析用户提交的文本
    ///
    /// 空白输入返回 `EmptyInput`，格式不符返回 `InvalidFormat`
    pub fn parse(input: &str) -> Result<Self, LookupError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(LookupError::EmptyInput);
        }

        match classify(trimmed) {
            AddressKind::Ipv4 | AddressKind::Ipv6 => Ok(Self::IpAddress(trimmed.to_string())),
            AddressKind::Domain => Ok(Self::Domain(trimmed.to_string())),
            AddressKind::Invalid => Err(LookupError::InvalidFormat),
        }
    }
}

impl fmt::Display for LookupQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Caller => write!(f, "<caller>"),
            Self::IpAddress(ip) => write!(f, "{}", ip),
            Self::Domain(domain) => write!(f, "{}", domain),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ipv4_accepted() {
        for input in ["8.8.8.8", "192.168.1.1", "0.0.0.0", "1.22.103.4"] {
            assert_eq!(classify(input), AddressKind::Ipv4, "{}", input);
        }
    }

    #[test]
    fn test_ipv4_range_not_checked() {
        assert_eq!(classify("999.999.999.999"), AddressKind::Ipv4);
        assert_eq!(classify("256.1.1.1"), AddressKind::Ipv4);
    }

    #[test]
    fn test_ipv4_wrong_shape_rejected() {
        for input in ["1.2.3", "1.2.3.4.5", "1234.1.1.1", "1.2.3.", "a.b.c.d", " 1.2.3.4"] {
            assert_ne!(classify(input), AddressKind::Ipv4, "{}", input);
        }
    }

    #[test]
    fn test_ipv6_accepted() {
        for input in [
            "2001:4860:4860::8888",
            "2001:0db8:85a3:0000:0000:8a2e:0370:7334",
            "::1",
            "fe80::",
            "::",
        ] {
            assert_eq!(classify(input), AddressKind::Ipv6, "{}", input);
        }
    }

    #[test]
    fn test_ipv6_simplified_pattern_leniency() {
        // 多个 "::" 不符合 RFC 4291，但简化规则接受
        assert_eq!(classify("1::2::3"), AddressKind::Ipv6);
        assert_eq!(classify(":::"), AddressKind::Ipv6);
    }

    #[test]
    fn test_ipv6_rejected() {
        for input in ["1:2", "1:2:3:4:5:6:7:8:9", "12345::1", "gggg::1"] {
            assert_ne!(classify(input), AddressKind::Ipv6, "{}", input);
        }
    }

    #[test]
    fn test_domain_accepted() {
        for input in [
            "example.com",
            "google.co",
            "sub.example.org",
            "a-b.example.museum",
            "x.io",
            "123.example.com",
        ] {
            assert_eq!(classify(input), AddressKind::Domain, "{}", input);
        }
    }

    #[test]
    fn test_domain_label_rules() {
        let long_label = "a".repeat(63);
        assert_eq!(classify(&format!("{}.com", long_label)), AddressKind::Domain);

        let too_long = "a".repeat(64);
        assert_eq!(classify(&format!("{}.com", too_long)), AddressKind::Invalid);

        for input in ["-example.com", "example-.com", "exa_mple.com", "example..com"] {
            assert_eq!(classify(input), AddressKind::Invalid, "{}", input);
        }
    }

    #[test]
    fn test_domain_tld_rules() {
        for input in ["example.c", "example.c0m", "example", "example.123"] {
            assert_eq!(classify(input), AddressKind::Invalid, "{}", input);
        }
    }

    #[test]
    fn test_invalid_inputs() {
        for input in ["", " ", "hello world", "http://example.com", "example.com/path"] {
            assert_eq!(classify(input), AddressKind::Invalid, "{:?}", input);
        }
    }

    #[test]
    fn test_parse_trims_and_routes() {
        assert_eq!(
            LookupQuery::parse("  8.8.8.8 "),
            Ok(LookupQuery::IpAddress("8.8.8.8".to_string()))
        );
        assert_eq!(
            LookupQuery::parse("::1"),
            Ok(LookupQuery::IpAddress("::1".to_string()))
        );
        assert_eq!(
            LookupQuery::parse("example.com\t"),
            Ok(LookupQuery::Domain("example.com".to_string()))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(LookupQuery::parse(""), Err(LookupError::EmptyInput));
        assert_eq!(LookupQuery::parse("   \t"), Err(LookupError::EmptyInput));
        assert_eq!(LookupQuery::parse("not a host"), Err(LookupError::InvalidFormat));
    }
}
