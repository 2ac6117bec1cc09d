//! Stateless request builder and response parser.
//!
//! A [`Request`] is an immutable value: credentials, language and entity
//! path. Each action has a `build_*` method producing an [`HttpRequest`];
//! [`Request::parse`] turns the [`HttpResponse`] into the decoded `data`
//! payload or a classified [`Error`]. [`Request::send`] runs both around a
//! [`Transport`] call.

use ::http::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, error};

use crate::clients::Transport;
use crate::credentials::Credentials;
use crate::envelope::{make_url, Action, RequestBody, Response};
use crate::error::{Error, Result};
use crate::http::{is_json, HttpRequest, HttpResponse, JSON_CONTENT_TYPE};
use crate::types::DEFAULT_LANG;

/// How an entity's `delete` action addresses its target. The API is not
/// consistent about this, so every entity declares its own style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteStyle {
    /// `/{entity}/delete/{id}`
    PathId,
    /// `/{entity}/delete` with `{"request": {key: "{id}"}}`
    Filter(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    credentials: Credentials,
    lang: String,
    entity: String,
}

impl Request {
    /// `entity` is the path segment, e.g. `"products"`.
    pub fn new(credentials: Credentials, entity: impl Into<String>) -> Self {
        Self {
            credentials,
            lang: DEFAULT_LANG.to_string(),
            entity: entity.into(),
        }
    }

    pub fn with_lang(self, lang: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            ..self
        }
    }

    pub fn entity(&self) -> &str {
        &self.entity
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn build_view(&self, id: &str) -> Result<HttpRequest> {
        self.build(Action::View, &[id], self.body())
    }

    /// A filter serializing to `null` (`()`, `None`) is left out of the body.
    pub fn build_list(&self, filter: &impl Serialize, page: u32, per_page: u32) -> Result<HttpRequest> {
        let body = RequestBody {
            page: Some(page),
            per_page: Some(per_page),
            filter: to_payload(filter)?,
            ..self.body()
        };
        self.build(Action::List, &[], body)
    }

    pub fn build_modify(&self, payload: &impl Serialize) -> Result<HttpRequest> {
        let body = RequestBody {
            request: to_payload(payload)?,
            ..self.body()
        };
        self.build(Action::Modify, &[], body)
    }

    pub fn build_delete(&self, id: &str, style: DeleteStyle) -> Result<HttpRequest> {
        match style {
            DeleteStyle::PathId => self.build(Action::Delete, &[id], self.body()),
            DeleteStyle::Filter(key) => {
                let mut filter = Map::new();
                filter.insert(key.to_string(), Value::String(id.to_string()));
                let body = RequestBody {
                    request: Some(Value::Object(filter)),
                    ..self.body()
                };
                self.build(Action::Delete, &[], body)
            }
        }
    }

    /// Transport status first, then content type, then the envelope.
    pub fn parse<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<Option<T>> {
        if response.status != 200 {
            debug!(
                entity = %self.entity,
                status = response.status,
                "Non-success status received"
            );
            return Err(Error::Status {
                status: response.status,
                reason: response.reason,
            });
        }

        if let Some(content_type) = response.content_type() {
            if !is_json(content_type) {
                return Err(Error::ContentType(content_type.to_string()));
            }
        }

        let envelope: Response<T> = serde_json::from_slice(&response.body).map_err(|e| {
            let body_str = String::from_utf8_lossy(&response.body);
            error!(
                error = %e,
                entity = %self.entity,
                body = %body_str,
                "Failed to parse response envelope"
            );
            Error::Decode(e)
        })?;

        envelope.into_result()
    }

    pub async fn send<T: DeserializeOwned>(
        &self,
        transport: &dyn Transport,
        request: HttpRequest,
    ) -> Result<Option<T>> {
        let response = transport.execute(request).await?;
        self.parse(response)
    }

    fn body(&self) -> RequestBody<'_> {
        RequestBody::new(&self.credentials, &self.lang)
    }

    fn build(&self, action: Action, params: &[&str], body: RequestBody<'_>) -> Result<HttpRequest> {
        let url = make_url(&self.credentials, &self.entity, action, params);
        let body = serde_json::to_string(&body).map_err(Error::Encode)?;

        debug!(
            entity = %self.entity,
            action = %action,
            url = %url,
            "Built request"
        );

        Ok(HttpRequest {
            url,
            headers: vec![
                (CONTENT_TYPE.as_str().to_string(), JSON_CONTENT_TYPE.to_string()),
                (ACCEPT.as_str().to_string(), JSON_CONTENT_TYPE.to_string()),
            ],
            body,
        })
    }
}

fn to_payload(value: &impl Serialize) -> Result<Option<Value>> {
    match serde_json::to_value(value).map_err(Error::Encode)? {
        Value::Null => Ok(None),
        payload => Ok(Some(payload)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    fn request() -> Request {
        Request::new(Credentials::new("secret", "acme"), "products")
    }

    fn body(req: &HttpRequest) -> Value {
        serde_json::from_str(&req.body).unwrap()
    }

    #[derive(Debug, Deserialize, PartialEq)]
    struct Product {
        product_id: u64,
    }

    #[test]
    fn view_puts_id_in_path() {
        let req = request().build_view("42").unwrap();
        assert_eq!(req.url, "https://acme.scoro.com/api/v1/products/view/42");
        assert_eq!(
            body(&req),
            json!({"apiKey": "secret", "company_account_id": "acme", "lang": "eng"})
        );
        assert!(req
            .headers
            .contains(&("content-type".to_string(), "application/json".to_string())));
    }

    #[test]
    fn list_carries_filter_and_paging() {
        let req = request()
            .build_list(&json!({"is_active": "1"}), 2, 25)
            .unwrap();
        assert_eq!(req.url, "https://acme.scoro.com/api/v1/products/list");
        let body = body(&req);
        assert_eq!(body["filter"], json!({"is_active": "1"}));
        assert_eq!(body["page"], 2);
        assert_eq!(body["per_page"], 25);
        assert!(body.get("request").is_none());
    }

    #[test]
    fn list_without_filter_omits_it() {
        let req = request().build_list(&(), 0, 3).unwrap();
        let body = body(&req);
        assert!(body.get("filter").is_none());
        assert_eq!(body["per_page"], 3);
    }

    #[test]
    fn modify_wraps_payload_in_request() {
        let req = request()
            .with_lang("rus")
            .build_modify(&json!({"code": "X1"}))
            .unwrap();
        assert_eq!(req.url, "https://acme.scoro.com/api/v1/products/modify");
        let body = body(&req);
        assert_eq!(body["request"], json!({"code": "X1"}));
        assert_eq!(body["lang"], "rus");
        assert!(body.get("filter").is_none());
        assert!(body.get("page").is_none());
    }

    #[test]
    fn delete_styles() {
        let by_path = request().build_delete("7", DeleteStyle::PathId).unwrap();
        assert_eq!(by_path.url, "https://acme.scoro.com/api/v1/products/delete/7");
        assert!(body(&by_path).get("request").is_none());

        let by_filter = request()
            .build_delete("7", DeleteStyle::Filter("product_id"))
            .unwrap();
        assert_eq!(by_filter.url, "https://acme.scoro.com/api/v1/products/delete");
        assert_eq!(body(&by_filter)["request"], json!({"product_id": "7"}));
    }

    #[test]
    fn parse_success() {
        let response = HttpResponse::json(r#"{"status":"OK","data":{"product_id":42}}"#);
        let product: Option<Product> = request().parse(response).unwrap();
        assert_eq!(product, Some(Product { product_id: 42 }));
    }

    #[test]
    fn parse_transport_failure_ignores_body() {
        let response = HttpResponse {
            status: 502,
            reason: "Bad Gateway".to_string(),
            headers: Vec::new(),
            body: b"<html>not json</html>".to_vec(),
        };
        let err = request().parse::<Product>(response).unwrap_err();
        assert!(err.is_transport());
        assert_eq!(err.to_string(), "Error status: 502 Bad Gateway");
    }

    #[test]
    fn parse_rejects_wrong_content_type() {
        let mut response = HttpResponse::json(r#"{"status":"OK"}"#);
        response.headers = vec![("Content-Type".to_string(), "text/html".to_string())];
        let err = request().parse::<Product>(response).unwrap_err();
        assert!(matches!(err, Error::ContentType(_)));
        assert!(err.is_format());
    }

    #[test]
    fn parse_without_content_type_assumes_json() {
        let mut response = HttpResponse::json(r#"{"status":"OK","data":{"product_id":1}}"#);
        response.headers.clear();
        assert!(request().parse::<Product>(response).unwrap().is_some());
    }

    #[test]
    fn parse_non_json_body_is_format_error() {
        let response = HttpResponse::json("not json");
        let err = request().parse::<Product>(response).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn parse_vendor_rejection() {
        let response = HttpResponse::json(
            r#"{"status":"ERROR","statusCode":"4001","messages":{"error":["Invalid id","Not found"]}}"#,
        );
        let err = request().parse::<Product>(response).unwrap_err();
        assert!(err.is_semantic());
        assert_eq!(err.to_string(), "Invalid id; Not found");
    }
}
