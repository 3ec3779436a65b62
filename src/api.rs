use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::error::FetchError;
use crate::model::{parse_recommendation_set, EmployeeRecommendationSet};

/// GET the recommendations at `url`.
///
/// Any non-2xx status, transport failure or unparseable body comes back as
/// a [`FetchError`]. The returned set is already sorted by confidence.
pub async fn fetch_recommendations(url: &str) -> Result<EmployeeRecommendationSet, FetchError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Accept", "application/json")?;

    let window = web_sys::window()
        .ok_or_else(|| FetchError::Network("no browser window available".to_string()))?;

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = JsFuture::from(response.text()?)
        .await?
        .as_string()
        .ok_or_else(|| FetchError::Parse("response body is not text".to_string()))?;

    parse_recommendation_set(&body)
}
