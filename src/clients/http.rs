use async_trait::async_trait;
use rquest::Client;
use ::http::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::{debug, error};

use crate::clients::Transport;
use crate::config::Settings;
use crate::error::Result;
use crate::http::{HttpRequest, HttpResponse};

/// [`Transport`] over a pooled `rquest` client.
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    headers: HeaderMap, // extra headers sent with every request
}

impl HttpClient {
    pub fn new(settings: &Settings) -> Result<Self> {
        let mut headers = HeaderMap::new();

        for (key, value) in settings.http.headers.iter() {
            if let (Ok(header_name), Ok(header_value)) = (
                HeaderName::from_bytes(key.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                headers.insert(header_name, header_value);
                debug!(header_key = key, "Adding header");
            } else {
                error!(
                    header_key = key,
                    header_value = value,
                    "Invalid header value"
                );
            }
        }

        let client = Client::builder().build()?;

        Ok(Self { client, headers })
    }

    pub fn with_client(client: Client) -> Self {
        Self {
            client,
            headers: HeaderMap::new(),
        }
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let mut builder = self.client.post(&request.url);

        for (key, value) in self.headers.iter() {
            builder = builder.header(key, value);
        }
        for (key, value) in request.headers.iter() {
            builder = builder.header(key.as_str(), value.as_str());
        }

        debug!(url = %request.url, "Sending request");

        let response = builder.body(request.body).send().await?;
        let status = response.status();

        debug!(
            status = status.as_u16(),
            url = %request.url,
            "Response received"
        );

        let headers = response
            .headers()
            .iter()
            .map(|(k, v)| {
                (
                    k.as_str().to_string(),
                    v.to_str().unwrap_or("invalid").to_string(),
                )
            })
            .collect();
        let body = response.bytes().await?.to_vec();

        Ok(HttpResponse {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
            headers,
            body,
        })
    }
}
