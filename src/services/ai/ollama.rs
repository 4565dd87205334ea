use anyhow::Context;
use async_trait::async_trait;
use serde_json::json;

use super::{LlmProvider, Message};

/// A locally running Ollama server, for working without a cloud key.
pub struct OllamaProvider {
    url: String,
    model: String,
    client: reqwest::Client,
}

impl OllamaProvider {
    pub fn new(url: String, model: String) -> Self {
        Self {
            url: url.trim_end_matches('/').to_string(),
            model,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl LlmProvider for OllamaProvider {
    async fn chat(&self, system_prompt: &str, messages: &[Message]) -> anyhow::Result<String> {
        let mut chat = Vec::with_capacity(messages.len() + 1);
        chat.push(json!({ "role": "system", "content": system_prompt }));
        chat.extend(
            messages
                .iter()
                .map(|m| json!({ "role": m.role, "content": m.content })),
        );

        let body = json!({
            "model": self.model,
            "messages": chat,
            "format": "json",
            "stream": false,
        });

        let resp = self
            .client
            .post(format!("{}/api/chat", self.url))
            .json(&body)
            .send()
            .await
            .context("failed to call Ollama API")?;

        let status = resp.status();
        let data: serde_json::Value = resp
            .json()
            .await
            .context("failed to parse Ollama response")?;

        if !status.is_success() {
            anyhow::bail!("Ollama API error ({}): {}", status, data);
        }

        data["message"]["content"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| anyhow::anyhow!("missing content in Ollama response"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    use axum::http::{StatusCode, Uri};
    use axum::{Json, Router};

    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        format!("http://{addr}/")
    }

    #[tokio::test]
    async fn test_chat_sends_system_prompt_first() {
        let seen: Arc<Mutex<Option<(String, serde_json::Value)>>> = Arc::new(Mutex::new(None));
        let recorder = Arc::clone(&seen);
        let app = Router::new().fallback(move |uri: Uri, Json(body): Json<serde_json::Value>| {
            let recorder = Arc::clone(&recorder);
            async move {
                *recorder.lock().unwrap() = Some((uri.path().to_string(), body));
                Json(json!({ "message": { "role": "assistant", "content": "{}" } }))
            }
        });
        let url = serve(app).await;

        let provider = OllamaProvider::new(url, "llama3.2".to_string());
        let reply = provider.chat("be brief", &[Message::user("hello")]).await.unwrap();
        assert_eq!(reply, "{}");

        let (path, body) = seen.lock().unwrap().take().unwrap();
        assert_eq!(path, "/api/chat");
        assert_eq!(body["model"], "llama3.2");
        assert_eq!(body["format"], "json");
        assert_eq!(body["stream"], false);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][0]["content"], "be brief");
        assert_eq!(body["messages"][1]["content"], "hello");
    }

    #[tokio::test]
    async fn test_chat_reports_error_status() {
        let app = Router::new().fallback(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "model \"llama3.2\" not found" })),
            )
        });
        let url = serve(app).await;

        let provider = OllamaProvider::new(url, "llama3.2".to_string());
        let err = provider.chat("s", &[Message::user("hi")]).await.unwrap_err();
        assert!(err.to_string().contains("404"), "{err}");
    }
}
