use async_trait::async_trait;
use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::{CreateGrowthSessionRequest, ErrorResponse, GrowthSession, WeekGrowthSessions};
use week_engine::{FetchError, SessionApi, WeekViewConfig};

const CSRF_HEADER: &str = "X-CSRF-TOKEN";

/// HTTP client for the growth sessions server
#[derive(Clone)]
pub struct GrowthSessionApi {
    config: WeekViewConfig,
    csrf_token: Option<String>,
}

impl GrowthSessionApi {
    pub fn new(config: WeekViewConfig, csrf_token: Option<String>) -> Self {
        Self { config, csrf_token }
    }

    fn url(&self, path: &str) -> String {
        self.config.endpoint(path)
    }

    fn with_csrf(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("Accept", "application/json");
        match &self.csrf_token {
            Some(token) => builder.header(CSRF_HEADER, token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response, FetchError> {
        let response = builder
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        if response.ok() {
            Ok(response)
        } else {
            Err(status_error(response).await)
        }
    }

    async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, FetchError> {
        let response = self.send(builder).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }
}

/// Turn a non-2xx response into a `FetchError`, preferring the server's message
async fn status_error(response: Response) -> FetchError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|error| error.message)
        .unwrap_or_else(|_| {
            if body.trim().is_empty() {
                response.status_text()
            } else {
                body
            }
        });
    FetchError::Status { status, message }
}

#[async_trait(?Send)]
impl SessionApi for GrowthSessionApi {
    async fn fetch_week(&self, anchor_iso_date: &str) -> Result<Vec<GrowthSession>, FetchError> {
        let builder = Request::get(&self.url("growth_sessions/week"))
            .query([("date", anchor_iso_date)])
            .header("Accept", "application/json");
        let week: WeekGrowthSessions = self.send_json(builder).await?;
        Ok(week.into_sessions())
    }

    async fn create(&self, request: &CreateGrowthSessionRequest) -> Result<GrowthSession, FetchError> {
        let response = self
            .with_csrf(Request::post(&self.url("growth_sessions")))
            .json(request)
            .map_err(|e| FetchError::Decode(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        if !response.ok() {
            return Err(status_error(response).await);
        }
        response
            .json::<GrowthSession>()
            .await
            .map_err(|e| FetchError::Decode(e.to_string()))
    }

    async fn join(&self, session: &GrowthSession) -> Result<GrowthSession, FetchError> {
        let url = self.url(&format!("growth_sessions/{}/join", session.id));
        self.send_json(self.with_csrf(Request::post(&url))).await
    }

    async fn leave(&self, session: &GrowthSession) -> Result<GrowthSession, FetchError> {
        let url = self.url(&format!("growth_sessions/{}/leave", session.id));
        self.send_json(self.with_csrf(Request::post(&url))).await
    }

    async fn delete(&self, session: &GrowthSession) -> Result<(), FetchError> {
        let url = self.url(&format!("growth_sessions/{}", session.id));
        self.send(self.with_csrf(Request::delete(&url))).await?;
        Ok(())
    }
}
