use crate::domain::plant::Plant;
use crate::transport::http::error::ApiError;
use crate::transport::http::types::{ApiResponse, AppState, CreatePlantRequest};
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use axum::Json;
use serde_json::{Map, Value as JsonValue};
use std::collections::HashMap;

#[utoipa::path(
    get,
    path = "/plants",
    responses(
        (status = 200, description = "All plants, ordered by id", body = Vec<Plant>),
        (status = 500, description = "Store failure", body = ApiResponse)
    )
)]
pub async fn list_plants_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Plant>>, ApiError> {
    let plants = state.plant_service.list().await?;
    Ok(Json(plants))
}

#[utoipa::path(
    get,
    path = "/plants/{id}",
    params(
        ("id" = String, Path, description = "Plant id")
    ),
    responses(
        (status = 200, description = "The plant, or `null` when no plant has this id", body = Plant),
        (status = 500, description = "Store failure", body = ApiResponse)
    )
)]
pub async fn show_plant_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Option<Plant>>, ApiError> {
    let plant = state.plant_service.fetch_by_id(&id).await?;
    Ok(Json(plant))
}

#[utoipa::path(
    post,
    path = "/plants",
    request_body = CreatePlantRequest,
    responses(
        (status = 200, description = "Plant created", body = Plant),
        (status = 422, description = "Body is not valid JSON or form data", body = ApiResponse),
        (status = 500, description = "Store failure (e.g. duplicate id)", body = ApiResponse)
    )
)]
pub async fn create_plant_handler(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Plant>, ApiError> {
    let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok());
    let fields = collect_create_fields(query, content_type, &body)?;
    let plant = state.plant_service.create(&fields).await?;
    Ok(Json(plant))
}

/// Merges query parameters and the request body into one field mapping; body keys win.
///
/// A `application/x-www-form-urlencoded` body is decoded as form fields. Any other body is read as
/// JSON: an empty body adds nothing, and so does a JSON body that is not an object.
pub fn collect_create_fields(
    query: HashMap<String, String>,
    content_type: Option<&str>,
    body: &[u8],
) -> Result<Map<String, JsonValue>, ApiError> {
    let mut fields: Map<String, JsonValue> = query
        .into_iter()
        .map(|(k, v)| (k, JsonValue::String(v)))
        .collect();

    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(fields);
    }
    if content_type.map_or(false, is_form_content_type) {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(body)?;
        fields.extend(pairs.into_iter().map(|(k, v)| (k, JsonValue::String(v))));
        return Ok(fields);
    }
    if let JsonValue::Object(obj) = serde_json::from_slice::<JsonValue>(body)? {
        fields.extend(obj);
    }
    Ok(fields)
}

fn is_form_content_type(content_type: &str) -> bool {
    let mime = content_type.split(';').next().unwrap_or_default();
    mime.trim()
        .eq_ignore_ascii_case("application/x-www-form-urlencoded")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn empty_body_uses_query_only() {
        let fields = collect_create_fields(query(&[("name", "Fern")]), None, b"  \n").unwrap();
        assert_eq!(fields.get("name"), Some(&json!("Fern")));
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn body_overrides_query() {
        let fields = collect_create_fields(
            query(&[("name", "Fern"), ("price", "3")]),
            Some("application/json"),
            br#"{"name": "Ivy"}"#,
        )
        .unwrap();
        assert_eq!(fields.get("name"), Some(&json!("Ivy")));
        assert_eq!(fields.get("price"), Some(&json!("3")));
    }

    #[test]
    fn non_object_body_adds_nothing() {
        let fields =
            collect_create_fields(HashMap::new(), None, br#"[{"name": "Fern"}]"#).unwrap();
        assert!(fields.is_empty());
    }

    #[test]
    fn malformed_body_is_an_error() {
        let err = collect_create_fields(HashMap::new(), None, b"{name: Fern").unwrap_err();
        assert!(matches!(err, ApiError::InvalidJson(_)));
    }

    #[test]
    fn form_body_is_decoded_and_overrides_query() {
        let fields = collect_create_fields(
            query(&[("name", "Fern"), ("image", "fern.png")]),
            Some("application/x-www-form-urlencoded; charset=UTF-8"),
            b"name=Boston+Fern&price=12.5&color=green",
        )
        .unwrap();
        assert_eq!(fields.get("name"), Some(&json!("Boston Fern")));
        assert_eq!(fields.get("price"), Some(&json!("12.5")));
        assert_eq!(fields.get("image"), Some(&json!("fern.png")));
        assert_eq!(fields.get("color"), Some(&json!("green")));
    }

    #[test]
    fn form_content_type_is_matched_loosely() {
        assert!(is_form_content_type("application/x-www-form-urlencoded"));
        assert!(is_form_content_type("Application/X-WWW-Form-Urlencoded;charset=utf-8"));
        assert!(!is_form_content_type("application/json"));
        assert!(!is_form_content_type("multipart/form-data; boundary=x"));
    }
}
