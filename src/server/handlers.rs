use axum::Json;
use axum::extract::{
    Query,
    State
};
use axum::response::Html;
use uuid::Uuid;

use crate::catalog::catalog::DEFAULT_FUNCTION_ID;
use crate::catalog::functionspec::FunctionSummary;
use crate::evaluation::evaluator::{
    calculate as calculate_output,
    plot_marker,
    sample_curve
};
use crate::server::appstate::AppState;
use crate::server::response::{
    ApiError,
    CalculatePayload,
    PlotPayload
};

const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

#[derive(Debug, Default)]
pub struct FunctionQuery {
    pub function: Option<String>,
    pub input_value: Option<String>
}

impl FunctionQuery {
    /// Builds the query from raw pairs. A repeated key keeps its first value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> FunctionQuery {
        let mut query = FunctionQuery::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "function" => &mut query.function,
                "input_value" => &mut query.input_value,
                _ => continue
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    fn function_id(&self) -> &str {
        self.function.as_deref().unwrap_or(DEFAULT_FUNCTION_ID)
    }
}

fn log_failure(request_id: &Uuid, endpoint: &str, error: &ApiError) {
    if error.0.is_client_error() {
        log::warn!("[{}] {} rejected: {:?}", request_id, endpoint, error.0);
    } else {
        log::error!("[{}] {} failed: {}", request_id, endpoint, error.0);
    }
}

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let options: String = state
        .catalog()
        .entries()
        .iter()
        .map(|spec| format!(
            "<option value=\"{}\">{}</option>\n",
            spec.id(),
            spec.display_name()
        ))
        .collect();
    Html(INDEX_TEMPLATE.replace("{{options}}", &options))
}

pub async fn functions(State(state): State<AppState>) -> Json<Vec<FunctionSummary>> {
    Json(state.catalog().summaries())
}

pub async fn plot(State(state): State<AppState>,
                  Query(pairs): Query<Vec<(String, String)>>) -> Result<Json<PlotPayload>, ApiError> {
    let query = FunctionQuery::from_pairs(pairs);
    let request_id = Uuid::new_v4();
    let id = query.function_id();
    log::info!("[{}] plot function={} input={:?}", request_id, id, query.input_value);

    let render = || -> Result<PlotPayload, ApiError> {
        let spec = state.catalog().lookup(id)?;
        let curve = sample_curve(spec, state.grid_size());
        let marker = plot_marker(spec, query.input_value.as_deref());
        if marker.is_none() && query.input_value.is_some() {
            log::debug!("[{}] input marker omitted", request_id);
        }
        let image = state.renderer().render(spec, &curve, marker.as_ref())?;
        Ok(PlotPayload {
            success: true,
            image: image.data().to_owned(),
            mime_type: image.mime_type(),
            function_name: spec.display_name()
        })
    };

    let payload = render().inspect_err(|error| log_failure(&request_id, "plot", error))?;
    log::info!("[{}] plot {} rendered ({} base64 bytes)", request_id, id, payload.image.len());
    Ok(Json(payload))
}

pub async fn calculate(State(state): State<AppState>,
                       Query(pairs): Query<Vec<(String, String)>>) -> Result<Json<CalculatePayload>, ApiError> {
    let query = FunctionQuery::from_pairs(pairs);
    let request_id = Uuid::new_v4();
    let id = query.function_id();

    let (spec, result) = calculate_output(state.catalog(), id, query.input_value.as_deref())
        .map_err(ApiError::from)
        .inspect_err(|error| log_failure(&request_id, "calculate", error))?;
    log::info!("[{}] calculate {}({}) = {}", request_id, id, result.input, result.output);

    Ok(Json(CalculatePayload {
        success: true,
        input: result.input,
        output: result.output,
        function_name: spec.display_name()
    }))
}
