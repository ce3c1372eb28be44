use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Query, Request, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use http::header::CONTENT_TYPE;
use serde::Deserialize;
use serde_json::Value;

const ASK_FORM: &str = r#"
    <h1>Ask a Question</h1>
    <form action="/ask" method="post">
    <label for="question">Question:</label><br>
    <input type="text" id="question" name="question" value="What is the value of e?"><br>
    <label for="image">Image Path:</label><br>
    <input type="text" id="image" name="image" value="image2.jpg"><br>
    <input type="submit" value="Submit">
    </form>
    <p>Use the /ask endpoint to ask a question with an image.</p>
    <p>Use the /gpt-ask endpoint to ask a question using GPT-4o-mini.</p>
    <p>Example question: "What is the value of e?"</p>
    "#;

/// Optional inputs shared by both ask endpoints. `image` is a base64 payload;
/// anything else (such as the form's file name) is replaced by the default image.
#[derive(Debug, Default, Deserialize)]
pub struct AskRequest {
    question: Option<String>,
    image: Option<String>,
}

/// `POST /ask` body, read as JSON or, for the HTML form, as urlencoded fields.
/// A body sent without a content type is parsed as JSON.
pub struct AskBody(pub AskRequest);

#[async_trait]
impl<S> FromRequest<S> for AskBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);

        match content_type {
            Some(value) if value.starts_with("application/x-www-form-urlencoded") => {
                let Form(request) = Form::<AskRequest>::from_request(req, state)
                    .await
                    .map_err(IntoResponse::into_response)?;
                Ok(AskBody(request))
            }
            Some(_) => {
                let Json(request) = Json::<AskRequest>::from_request(req, state)
                    .await
                    .map_err(IntoResponse::into_response)?;
                Ok(AskBody(request))
            }
            None => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(IntoResponse::into_response)?;
                let request = serde_json::from_slice::<AskRequest>(&bytes).map_err(|err| {
                    (
                        StatusCode::UNPROCESSABLE_ENTITY,
                        format!("Failed to parse the request body as JSON: {}", err),
                    )
                        .into_response()
                })?;
                Ok(AskBody(request))
            }
        }
    }
}

async fn ask_form() -> Html<&'static str> {
    Html(ASK_FORM)
}

async fn ask_handler(
    State(state): State<AppState>,
    AskBody(request): AskBody,
) -> Result<Json<Value>, ApiError> {
    let messages = state
        .assembler
        .prepare(request.question.as_deref(), request.image.as_deref());

    tracing::info!(provider = state.primary.name(), "forwarding question");
    let response = state.primary.complete(&messages).await?;
    Ok(Json(response))
}

async fn gpt_ask_handler(
    State(state): State<AppState>,
    Query(params): Query<AskRequest>,
) -> Result<Json<Value>, ApiError> {
    let messages = state
        .assembler
        .prepare(params.question.as_deref(), params.image.as_deref());

    tracing::info!(provider = state.secondary.name(), "forwarding question");
    let response = state.secondary.complete(&messages).await?;
    Ok(Json(response))
}

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/ask", get(ask_form).post(ask_handler))
        .route("/gpt-ask", post(gpt_ask_handler))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::mock::{test_assembler, test_state, RecordingProvider, TEST_IMAGE_PAYLOAD};
    use askgate::{
        assembler::DEFAULT_QUESTION,
        image::DATA_URI_PREFIX,
        models::{message::Message, role::Role},
        providers::{
            configs::OpenRouterProviderConfig, openrouter::OpenRouterProvider,
            openrouter::OPENROUTER_PATH,
        },
    };
    use axum::{
        body::Body,
        http::{header, Method},
    };
    use serde_json::json;
    use std::sync::Arc;
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn send(router: Router, request: axum::http::Request<Body>) -> (StatusCode, Value) {
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
    }

    fn post_json(uri: &str, body: Value) -> axum::http::Request<Body> {
        axum::http::Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn post_empty(uri: &str) -> axum::http::Request<Body> {
        axum::http::Request::builder()
            .method(Method::POST)
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    /// Two messages, system then user, with one text part and one image part
    fn assert_assembled(messages: &[Message], question: &str, image_payload: &str) {
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, Role::System);
        assert_eq!(messages[1].role, Role::User);

        let parts = messages[1].parts();
        let texts: Vec<_> = parts.iter().filter_map(|p| p.as_text()).collect();
        let images: Vec<_> = parts.iter().filter_map(|p| p.as_image_url()).collect();
        assert_eq!(texts, vec![question]);
        assert_eq!(images.len(), 1);
        assert!(images[0].starts_with(DATA_URI_PREFIX));
        assert_eq!(&images[0][DATA_URI_PREFIX.len()..], image_payload);
    }

    #[tokio::test]
    async fn test_get_ask_serves_html_form() {
        let provider = RecordingProvider::replying(json!({}));
        let response = routes(test_state(provider.clone()))
            .oneshot(
                axum::http::Request::builder()
                    .uri("/ask")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains(r#"<form action="/ask" method="post">"#));
        assert!(html.contains("/gpt-ask"));
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_post_ask_relays_provider_json() {
        let upstream = json!({"choices": [{"message": {"content": "e is about 2.718"}}]});
        let provider = RecordingProvider::replying(upstream.clone());

        let (status, body) = send(
            routes(test_state(provider.clone())),
            post_json("/ask", json!({"question": "What is e?", "image": "U1VQUExJRUQ="})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, upstream);
        let calls = provider.calls();
        assert_eq!(calls.len(), 1);
        assert_assembled(&calls[0], "What is e?", "U1VQUExJRUQ=");
    }

    #[tokio::test]
    async fn test_post_ask_with_empty_object_uses_defaults() {
        let provider = RecordingProvider::replying(json!({}));
        send(routes(test_state(provider.clone())), post_json("/ask", json!({}))).await;

        assert_assembled(&provider.calls()[0], DEFAULT_QUESTION, TEST_IMAGE_PAYLOAD);
    }

    #[tokio::test]
    async fn test_post_ask_accepts_the_html_form() {
        let provider = RecordingProvider::replying(json!({"ok": true}));
        let request = axum::http::Request::builder()
            .method(Method::POST)
            .uri("/ask")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("question=Why%3F&image=Rk9STQ%3D%3D"))
            .unwrap();

        let (status, body) = send(routes(test_state(provider.clone())), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"ok": true}));
        assert_assembled(&provider.calls()[0], "Why?", "Rk9STQ==");
    }

    #[tokio::test]
    async fn test_post_ask_shipped_form_keeps_default_image() {
        let provider = RecordingProvider::replying(json!({}));
        let request = axum::http::Request::builder()
            .method(Method::POST)
            .uri("/ask")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(
                "question=What+is+the+value+of+e%3F&image=image2.jpg",
            ))
            .unwrap();

        let (status, _) = send(routes(test_state(provider.clone())), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_assembled(&provider.calls()[0], DEFAULT_QUESTION, TEST_IMAGE_PAYLOAD);
    }

    #[tokio::test]
    async fn test_post_ask_without_content_type_parses_json() {
        let provider = RecordingProvider::replying(json!({"ok": true}));
        let request = axum::http::Request::builder()
            .method(Method::POST)
            .uri("/ask")
            .body(Body::from(r#"{"question":"What is 2+2?"}"#))
            .unwrap();

        let (status, body) = send(routes(test_state(provider.clone())), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"ok": true}));
        assert_eq!(provider.calls().len(), 1);
        assert_assembled(&provider.calls()[0], "What is 2+2?", TEST_IMAGE_PAYLOAD);
    }

    #[tokio::test]
    async fn test_post_ask_without_content_type_rejects_garbage() {
        let provider = RecordingProvider::replying(json!({}));
        let request = axum::http::Request::builder()
            .method(Method::POST)
            .uri("/ask")
            .body(Body::from("question=hi"))
            .unwrap();

        let (status, _) = send(routes(test_state(provider.clone())), request).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_post_ask_rejects_non_string_fields() {
        let provider = RecordingProvider::replying(json!({}));
        let (status, _) = send(
            routes(test_state(provider.clone())),
            post_json("/ask", json!({"question": 4})),
        )
        .await;

        assert!(status.is_client_error());
        assert!(provider.calls().is_empty());
    }

    #[tokio::test]
    async fn test_gpt_ask_reads_query_params() {
        let upstream = json!({"error": {"message": "unauthorized"}});
        let provider = RecordingProvider::replying(upstream.clone());

        let (status, body) = send(
            routes(test_state(provider.clone())),
            post_empty("/gpt-ask?question=What%20is%202%2B2%3F"),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, upstream);
        assert_assembled(&provider.calls()[0], "What is 2+2?", TEST_IMAGE_PAYLOAD);
    }

    #[tokio::test]
    async fn test_gpt_ask_without_params_uses_defaults() {
        let provider = RecordingProvider::replying(json!({}));
        send(routes(test_state(provider.clone())), post_empty("/gpt-ask")).await;

        assert_assembled(&provider.calls()[0], DEFAULT_QUESTION, TEST_IMAGE_PAYLOAD);
    }

    #[tokio::test]
    async fn test_routes_use_their_own_provider() {
        let primary = RecordingProvider::replying(json!({"from": "primary"}));
        let secondary = RecordingProvider::replying(json!({"from": "secondary"}));
        let state = AppState::new(test_assembler(), primary.clone(), secondary.clone());

        let (_, body) = send(routes(state.clone()), post_json("/ask", json!({}))).await;
        assert_eq!(body["from"], "primary");
        let (_, body) = send(routes(state), post_empty("/gpt-ask")).await;
        assert_eq!(body["from"], "secondary");

        assert_eq!(primary.calls().len(), 1);
        assert_eq!(secondary.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_provider_error_becomes_500() {
        let provider = RecordingProvider::failing();
        let (status, body) = send(
            routes(test_state(provider)),
            post_json("/ask", json!({"question": "q"})),
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal Server Error");
    }

    async fn openrouter_state(server: &MockServer) -> AppState {
        let primary = OpenRouterProvider::new(OpenRouterProviderConfig {
            host: server.uri(),
            ..OpenRouterProviderConfig::new("test-key")
        })
        .unwrap();
        AppState::new(
            test_assembler(),
            Arc::new(primary),
            RecordingProvider::replying(json!({})),
        )
    }

    #[tokio::test]
    async fn test_ask_upstream_failure_returns_error_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(OPENROUTER_PATH))
            .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
            .expect(1)
            .mount(&server)
            .await;

        let (status, body) = send(
            routes(openrouter_state(&server).await),
            post_json("/ask", json!({"question": "q"})),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.get("error").is_some());
        assert_eq!(body["details"], "bad gateway");
    }

    #[tokio::test]
    async fn test_ask_end_to_end_with_default_image() {
        let server = MockServer::start().await;
        let upstream = json!({"id": "gen-1", "choices": []});
        Mock::given(method("POST"))
            .and(path(OPENROUTER_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(upstream.clone()))
            .expect(1)
            .mount(&server)
            .await;

        let (status, body) = send(
            routes(openrouter_state(&server).await),
            post_json("/ask", json!({"question": "What is 2+2?"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, upstream);

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);
        let sent: Value = serde_json::from_slice(&requests[0].body).unwrap();
        assert_eq!(sent["tool_choice"], "required");

        let messages: Vec<Message> = serde_json::from_value(sent["messages"].clone()).unwrap();
        assert_assembled(&messages, "What is 2+2?", TEST_IMAGE_PAYLOAD);
    }
}
