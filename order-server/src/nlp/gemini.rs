//! Gemini text-to-SQL client

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use shared::error::{AppError, ErrorCode};

use super::SqlGenerator;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const MODEL: &str = "gemini-2.0-flash";

/// Calls the Gemini generateContent endpoint to turn a question into a
/// single SQLite SELECT statement.
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Deserialize)]
struct Content {
    parts: Option<Vec<Part>>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

impl GeminiClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different endpoint (used by tests).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    fn prompt(schema: &str, question: &str) -> String {
        format!(
            "You are a SQLite expert. Given the following database schema:\n\n\
             {schema}\n\n\
             Write a single SQLite SELECT statement that answers this question:\n\
             {question}\n\n\
             Respond with the SQL statement only, no explanation and no markdown."
        )
    }

    /// Model output often arrives wrapped in a markdown fence anyway.
    fn clean(text: &str) -> String {
        let trimmed = text.trim();
        let trimmed = trimmed
            .strip_prefix("```sql")
            .or_else(|| trimmed.strip_prefix("```"))
            .unwrap_or(trimmed);
        let trimmed = trimmed.strip_suffix("```").unwrap_or(trimmed);
        trimmed.trim().to_string()
    }
}

#[async_trait]
impl SqlGenerator for GeminiClient {
    async fn generate_sql(&self, schema: &str, question: &str) -> Result<String, AppError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, MODEL, self.api_key
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": Self::prompt(schema, question) }] }]
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                AppError::with_message(ErrorCode::NetworkError, format!("Gemini request failed: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::with_message(
                ErrorCode::SqlGenerationFailed,
                format!("Gemini returned HTTP {status}"),
            ));
        }

        let parsed: GenerateResponse = response.json().await.map_err(|e| {
            AppError::with_message(
                ErrorCode::SqlGenerationFailed,
                format!("Malformed Gemini response: {e}"),
            )
        })?;

        let text = parsed
            .candidates
            .and_then(|mut c| c.drain(..).next())
            .and_then(|c| c.content.parts)
            .and_then(|mut p| p.drain(..).next())
            .and_then(|p| p.text)
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::SqlGenerationFailed,
                    "Gemini response contained no text",
                )
            })?;

        let sql = Self::clean(&text);
        tracing::debug!(sql, "Generated SQL");
        Ok(sql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_strips_markdown_fences() {
        assert_eq!(
            GeminiClient::clean("```sql\nSELECT * FROM products\n```"),
            "SELECT * FROM products"
        );
        assert_eq!(
            GeminiClient::clean("```\nSELECT 1\n```"),
            "SELECT 1"
        );
        assert_eq!(GeminiClient::clean("  SELECT 1  "), "SELECT 1");
    }

    #[test]
    fn test_prompt_includes_schema_and_question() {
        let prompt = GeminiClient::prompt("products (id, name)", "how many products?");
        assert!(prompt.contains("products (id, name)"));
        assert!(prompt.contains("how many products?"));
    }
}
