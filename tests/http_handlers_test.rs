use axum::body::to_bytes;
use axum::extract::{
    Query,
    State
};
use axum::http::{
    StatusCode,
    Uri
};
use axum::response::IntoResponse;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use activationplot::evaluation::evaluationerror::EvaluationError;
use activationplot::server::appstate::AppState;
use activationplot::server::handlers::{
    FunctionQuery,
    calculate,
    functions,
    index,
    plot
};

async fn into_json(response: axum::response::Response) -> (StatusCode, Value) {
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn query(function: &str, input_value: Option<&str>) -> Query<Vec<(String, String)>> {
    let mut pairs = vec![("function".to_owned(), function.to_owned())];
    if let Some(value) = input_value {
        pairs.push(("input_value".to_owned(), value.to_owned()));
    }
    Query(pairs)
}

fn query_from_uri(uri: &str) -> Query<Vec<(String, String)>> {
    Query::try_from_uri(&uri.parse::<Uri>().unwrap()).unwrap()
}

#[tokio::test]
async fn calculate_returns_input_output_and_name() {
    let response = calculate(State(AppState::default()), query("sigmoid", Some("0")))
        .await
        .into_response();
    let (status, body) = into_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["input"], 0.0);
    assert_eq!(body["output"], 0.5);
    assert_eq!(body["function_name"], "Sigmoid");
}

#[tokio::test]
async fn calculate_leaky_relu_negative_input() {
    let payload = calculate(State(AppState::default()), query("leaky_relu", Some("-10")))
        .await
        .unwrap()
        .0;
    assert_eq!(payload.output, -1.0);
    assert_eq!(payload.function_name, "Leaky ReLU");
}

#[tokio::test]
async fn calculate_rejects_unknown_function() {
    let error = calculate(State(AppState::default()), query("softplus", Some("1")))
        .await
        .unwrap_err();
    assert!(matches!(error.0, EvaluationError::UnknownFunction(_)));

    let response = calculate(State(AppState::default()), query("softplus", Some("1")))
        .await
        .into_response();
    let (status, body) = into_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Invalid function");
}

#[tokio::test]
async fn calculate_rejects_bad_or_missing_input() {
    for input in [Some("twelve"), None] {
        let response = calculate(State(AppState::default()), query("relu", input))
            .await
            .into_response();
        let (_, body) = into_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Invalid input value");
    }
}

#[tokio::test]
async fn missing_function_defaults_to_sigmoid() {
    let payload = calculate(State(AppState::default()), query_from_uri("/calculate?input_value=0"))
        .await
        .unwrap()
        .0;
    assert_eq!(payload.function_name, "Sigmoid");
}

#[tokio::test]
async fn repeated_parameters_keep_the_first_value() {
    let uri = "/calculate?function=relu&function=tanh&input_value=1&input_value=x";
    let payload = calculate(State(AppState::default()), query_from_uri(uri))
        .await
        .unwrap()
        .0;
    assert_eq!(payload.function_name, "ReLU");
    assert_eq!(payload.input, 1.0);

    let payload = plot(State(AppState::default()), query_from_uri("/plot?function=elu&function=nope"))
        .await
        .unwrap()
        .0;
    assert_eq!(payload.function_name, "ELU");
}

#[test]
fn unrelated_parameters_are_ignored() {
    let parsed = FunctionQuery::from_pairs(vec![
        ("colour".to_owned(), "red".to_owned()),
        ("input_value".to_owned(), "2".to_owned())
    ]);
    assert_eq!(parsed.function, None);
    assert_eq!(parsed.input_value.as_deref(), Some("2"));
}

#[tokio::test]
async fn calculate_accepts_digit_separators() {
    let payload = calculate(State(AppState::default()), query("relu", Some("1_000")))
        .await
        .unwrap()
        .0;
    assert_eq!(payload.output, 1000.0);
}

#[tokio::test]
async fn plot_returns_encoded_svg() {
    let response = plot(State(AppState::default()), query("gelu", None))
        .await
        .into_response();
    let (status, body) = into_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["function_name"], "GELU");
    assert_eq!(body["mime_type"], "image/svg+xml");
    let svg = STANDARD.decode(body["image"].as_str().unwrap()).unwrap();
    assert!(String::from_utf8(svg).unwrap().contains("GELU Activation Function"));
}

#[tokio::test]
async fn plot_ignores_unusable_marker_input() {
    for input in ["abc", "100"] {
        let payload = plot(State(AppState::default()), query("tanh", Some(input)))
            .await
            .unwrap()
            .0;
        let svg = String::from_utf8(STANDARD.decode(&payload.image).unwrap()).unwrap();
        assert!(!svg.contains("Input: "), "marker drawn for {}", input);
    }
}

#[tokio::test]
async fn plot_draws_marker_inside_domain() {
    let payload = plot(State(AppState::default()), query("relu", Some("2")))
        .await
        .unwrap()
        .0;
    let svg = String::from_utf8(STANDARD.decode(&payload.image).unwrap()).unwrap();
    assert!(svg.contains("Input: 2.00, Output: 2.0000"));
}

#[tokio::test]
async fn plot_rejects_unknown_function() {
    let response = plot(State(AppState::default()), query("softplus", None))
        .await
        .into_response();
    let (status, body) = into_json(response).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Invalid function");
}

#[tokio::test]
async fn functions_lists_catalog_in_order() {
    let listing = functions(State(AppState::default())).await.0;
    let ids: Vec<&str> = listing.iter().map(|entry| entry.id).collect();
    assert_eq!(ids, ["sigmoid", "tanh", "relu", "leaky_relu", "swish", "gelu", "elu"]);
    assert_eq!(listing[6].domain, (-3.0, 5.0));
}

#[tokio::test]
async fn index_enumerates_every_entry() {
    let page = index(State(AppState::default())).await.0;
    for name in ["Sigmoid", "Tanh", "ReLU", "Leaky ReLU", "Swish", "GELU", "ELU"] {
        assert!(page.contains(&format!(">{}</option>", name)), "missing {}", name);
    }
    assert!(!page.contains("{{options}}"));
}
