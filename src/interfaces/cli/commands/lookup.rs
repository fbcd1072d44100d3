//! One-shot lookup command

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::{GeoLookup, LookupQuery, LookupResult};

/// 解析查询并调用 provider；不带参数时查询调用方自身 IP
pub async fn lookup_once(
    provider: &dyn GeoLookup,
    query: Option<&str>,
) -> Result<LookupResult, CliError> {
    let query = match query {
        Some(raw) => LookupQuery::parse(raw)?,
        None => LookupQuery::Caller,
    };

    Ok(provider.lookup(&query).await?)
}

pub async fn run_lookup(
    provider: &dyn GeoLookup,
    query: Option<String>,
    json: bool,
) -> Result<(), CliError> {
    let result = lookup_once(provider, query.as_deref()).await?;

    if json {
        let out = serde_json::to_string_pretty(&result)
            .map_err(|e| CliError::CommandError(format!("Failed to encode result: {}", e)))?;
        println!("{}", out);
        return Ok(());
    }

    print_result(&result);
    Ok(())
}

fn print_result(result: &LookupResult) {
    let (lat, lng) = result.coordinates();

    println!("{}", "Lookup result:".bold().green());
    println!();
    println!("  {:<12} {}", "IP ADDRESS".dimmed(), result.ip.cyan().bold());
    println!("  {:<12} {}", "LOCATION".dimmed(), result.location_text());
    println!(
        "  {:<12} {}",
        "TIMEZONE".dimmed(),
        result.timezone_text().unwrap_or_else(|| "-".to_string())
    );
    println!(
        "  {:<12} {}",
        "ISP".dimmed(),
        if result.isp.is_empty() { "-" } else { result.isp.as_str() }
    );
    println!(
        "  {:<12} {}",
        "COORDS".dimmed(),
        format!("{:.4}, {:.4}", lat, lng).yellow()
    );

    if let Some(as_info) = &result.as_info {
        println!(
            "  {:<12} {}",
            "AS".dimmed(),
            format!("AS{} {}", as_info.asn, as_info.name).blue()
        );
    }

    if !result.domains.is_empty() {
        println!("  {:<12} {}", "DOMAINS".dimmed(), result.domains.join(", "));
    }
}
