//! Rendering of catalog replies as text, JSON or YAML.

use backstage_catalog::ApiResponse;
use colored::Colorize;
use serde::Serialize;

use crate::commands::OutputFormat;

/// Print the body of a successful reply, or fail with the server's error.
///
/// `text` renders the body for [`OutputFormat::Text`]; the structured
/// formats serialize it as-is.
pub fn emit<T: Serialize>(
    format: OutputFormat,
    resp: ApiResponse<T>,
    text: impl FnOnce(&T),
) -> anyhow::Result<()> {
    let resp = ensure_success(resp)?;
    match resp.body {
        Some(ref body) => print!("{}", render(format, body, text)?),
        None if format == OutputFormat::Text => println!("  {}", "(empty reply)".dimmed()),
        None => {}
    }
    Ok(())
}

/// Fail with a readable message when the reply is not 2xx.
pub fn ensure_success<T>(resp: ApiResponse<T>) -> anyhow::Result<ApiResponse<T>> {
    if resp.is_success() {
        return Ok(resp);
    }
    match resp.error {
        Some(ref err) => anyhow::bail!("catalog returned {}: {}", resp.status, err),
        None => anyhow::bail!("catalog returned {}", resp.status),
    }
}

fn render<T: Serialize>(
    format: OutputFormat,
    body: &T,
    text: impl FnOnce(&T),
) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(body)?),
        OutputFormat::Yaml => serde_yaml::to_string(body)?,
        OutputFormat::Text => {
            text(body);
            String::new()
        }
    })
}

/// Print a `Label:  value` line, skipping empty values.
pub fn field(label: &str, value: &str) {
    if !value.is_empty() {
        println!("  {:<16} {}", format!("{label}:").bold(), value);
    }
}

/// Print a titled block of pretty-printed JSON, dimmed.
pub fn json_block<T: Serialize>(title: &str, value: &T) {
    let Ok(pretty) = serde_json::to_string_pretty(value) else {
        return;
    };
    println!("\n  {}:", title.bold());
    for line in pretty.lines() {
        println!("    {}", line.dimmed());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backstage_catalog::ErrorResponse;
    use pretty_assertions::assert_eq;
    use reqwest::StatusCode;

    fn response<T>(status: StatusCode, body: Option<T>) -> ApiResponse<T> {
        ApiResponse {
            status,
            headers: Default::default(),
            body,
            error: None,
        }
    }

    #[test]
    fn test_render_json_and_yaml() {
        let body = serde_json::json!({ "id": "abc", "type": "url" });

        let json = render(OutputFormat::Json, &body, |_| {}).unwrap();
        assert_eq!(json, "{\n  \"id\": \"abc\",\n  \"type\": \"url\"\n}\n");

        let yaml = render(OutputFormat::Yaml, &body, |_| {}).unwrap();
        assert_eq!(yaml, "id: abc\ntype: url\n");
    }

    #[test]
    fn test_render_text_uses_callback() {
        let mut called = false;
        let out = render(OutputFormat::Text, &1u8, |_| called = true).unwrap();
        assert!(called);
        assert!(out.is_empty());
    }

    #[test]
    fn test_ensure_success_passes_2xx() {
        let resp = ensure_success(response(StatusCode::NO_CONTENT, None::<()>)).unwrap();
        assert_eq!(resp.status, StatusCode::NO_CONTENT);
    }

    #[test]
    fn test_ensure_success_reports_server_error() {
        let mut resp = response(StatusCode::NOT_FOUND, None::<()>);
        resp.error = Some(
            serde_json::from_value::<ErrorResponse>(serde_json::json!({
                "error": { "name": "NotFoundError", "message": "no such entity" }
            }))
            .unwrap(),
        );

        let err = ensure_success(resp).unwrap_err();
        assert_eq!(
            err.to_string(),
            "catalog returned 404 Not Found: NotFoundError: no such entity"
        );
    }

    #[test]
    fn test_ensure_success_without_error_body() {
        let err = ensure_success(response(StatusCode::BAD_GATEWAY, None::<()>)).unwrap_err();
        assert_eq!(err.to_string(), "catalog returned 502 Bad Gateway");
    }
}
