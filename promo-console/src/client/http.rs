//! HTTP client for the back-office API

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use shared::models::{Product, Promotion, PromotionCreate, PromotionUpdate, Variant};
use shared::types::{AssociationId, PromotionId};
use shared::ApiResponse;

use super::{ClientConfig, ClientError, ClientResult, PromotionApi};

/// HTTP client for making network requests to the back-office API
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Make a GET request
    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> ClientResult<T> {
        let mut request = self.client.get(self.url(path)).query(query);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.post(self.url(path)).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a PATCH request with JSON body
    async fn patch<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let mut request = self.client.patch(self.url(path)).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Internal(text)),
            };
        }

        response.json().await.map_err(Into::into)
    }

    /// Unwrap the API envelope, mapping error envelopes and missing data
    fn unwrap_data<T>(envelope: ApiResponse<T>) -> ClientResult<T> {
        if !envelope.is_success() {
            return Err(ClientError::RemoteRejected {
                code: envelope.code,
                message: envelope.message,
            });
        }
        envelope
            .data
            .ok_or_else(|| ClientError::InvalidResponse("missing data field".to_string()))
    }

    /// Check an envelope for endpoints that return no data
    fn check_ok(envelope: ApiResponse<serde_json::Value>) -> ClientResult<()> {
        if !envelope.is_success() {
            return Err(ClientError::RemoteRejected {
                code: envelope.code,
                message: envelope.message,
            });
        }
        Ok(())
    }

    // ========== Promotion API ==========

    /// Fetch a promotion by id
    pub async fn get_promotion(&self, id: PromotionId) -> ClientResult<Promotion> {
        self.get::<ApiResponse<Promotion>>(&format!("api/promotions/{id}"), &[])
            .await
            .and_then(Self::unwrap_data)
    }

    /// Create a promotion
    pub async fn create_promotion(&self, payload: &PromotionCreate) -> ClientResult<Promotion> {
        self.post::<ApiResponse<Promotion>, _>("api/promotions", payload)
            .await
            .and_then(Self::unwrap_data)
    }

    /// Update a promotion
    pub async fn update_promotion(
        &self,
        id: PromotionId,
        payload: &PromotionUpdate,
    ) -> ClientResult<Promotion> {
        self.patch::<ApiResponse<Promotion>, _>(&format!("api/promotions/{id}"), payload)
            .await
            .and_then(Self::unwrap_data)
    }
}

#[derive(serde::Serialize)]
struct AssociationIdsRequest<'a> {
    ids: &'a [AssociationId],
}

#[async_trait]
impl PromotionApi for HttpClient {
    async fn fetch_product_page(
        &self,
        page: u32,
        page_size: u32,
        search: Option<&str>,
    ) -> ClientResult<Vec<Product>> {
        let mut query = vec![
            ("page", page.to_string()),
            ("page_size", page_size.to_string()),
        ];
        if let Some(term) = search {
            query.push(("search", term.to_string()));
        }

        self.get::<ApiResponse<Vec<Product>>>("api/catalog/products", &query)
            .await
            .and_then(Self::unwrap_data)
    }

    async fn fetch_variant_page(
        &self,
        product_id: &str,
        page: u32,
        page_size: u32,
    ) -> ClientResult<Vec<Variant>> {
        let query = [
            ("page", page.to_string()),
            ("page_size", page_size.to_string()),
        ];

        self.get::<ApiResponse<Vec<Variant>>>(
            &format!("api/catalog/products/{product_id}/variants"),
            &query,
        )
        .await
        .and_then(Self::unwrap_data)
    }

    async fn fetch_current_associations(
        &self,
        promotion_id: PromotionId,
    ) -> ClientResult<Vec<AssociationId>> {
        self.get::<ApiResponse<Vec<AssociationId>>>(
            &format!("api/promotions/{promotion_id}/associations"),
            &[],
        )
        .await
        .and_then(Self::unwrap_data)
    }

    async fn apply_associations(
        &self,
        promotion_id: PromotionId,
        ids: &[AssociationId],
    ) -> ClientResult<()> {
        self.post::<ApiResponse<serde_json::Value>, _>(
            &format!("api/promotions/{promotion_id}/associations"),
            &AssociationIdsRequest { ids },
        )
        .await
        .and_then(Self::check_ok)
    }

    async fn remove_associations(
        &self,
        promotion_id: PromotionId,
        ids: &[AssociationId],
    ) -> ClientResult<()> {
        self.post::<ApiResponse<serde_json::Value>, _>(
            &format!("api/promotions/{promotion_id}/associations/remove"),
            &AssociationIdsRequest { ids },
        )
        .await
        .and_then(Self::check_ok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_maps_to_remote_rejected() {
        let envelope: ApiResponse<Vec<String>> =
            ApiResponse::error("E4041", "promotion not found");

        let err = HttpClient::unwrap_data(envelope).unwrap_err();

        match err {
            ClientError::RemoteRejected { code, message } => {
                assert_eq!(code, "E4041");
                assert_eq!(message, "promotion not found");
            }
            other => panic!("expected RemoteRejected, got {other:?}"),
        }

        let empty: ApiResponse<serde_json::Value> = ApiResponse::error("E5000", "boom");
        assert!(matches!(
            HttpClient::check_ok(empty),
            Err(ClientError::RemoteRejected { .. })
        ));
    }

    #[test]
    fn success_envelope_without_data_is_invalid() {
        let envelope: ApiResponse<Vec<String>> = ApiResponse {
            code: shared::response::API_CODE_SUCCESS.to_string(),
            message: "Success".to_string(),
            data: None,
        };

        assert!(matches!(
            HttpClient::unwrap_data(envelope),
            Err(ClientError::InvalidResponse(_))
        ));
    }
}
