//! Browser `fetch` with credentials and a timeout.
//!
//! Every request carries the browser's credentials for the pod origin and is
//! raced against [`FETCH_TIMEOUT_MS`].

use js_sys::{Array, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestCredentials, RequestInit, RequestMode, Response};

use crate::config::FETCH_TIMEOUT_MS;
use crate::core::error::FetchError;

/// Outcome of racing a promise against a timer.
#[derive(Debug)]
pub enum RaceResult {
    Completed(JsValue),
    TimedOut,
    Error(String),
}

/// Race a promise against a timeout that resolves to `undefined`.
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    let timer = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let contenders = Array::of2(&promise, &timer);
    match JsFuture::from(Promise::race(&contenders)).await {
        Ok(value) if value.is_undefined() => RaceResult::TimedOut,
        Ok(value) => RaceResult::Completed(value),
        Err(e) => RaceResult::Error(e.as_string().unwrap_or_else(|| "Unknown error".to_string())),
    }
}

/// An outgoing request.
pub struct Outgoing<'a> {
    pub method: &'a str,
    pub url: &'a str,
    pub headers: &'a [(&'a str, &'a str)],
    pub body: Option<&'a str>,
}

impl<'a> Outgoing<'a> {
    pub fn get(url: &'a str, accept: &'a [(&'a str, &'a str)]) -> Self {
        Self {
            method: "GET",
            url,
            headers: accept,
            body: None,
        }
    }

    pub fn put(url: &'a str, headers: &'a [(&'a str, &'a str)], body: &'a str) -> Self {
        Self {
            method: "PUT",
            url,
            headers,
            body: Some(body),
        }
    }
}

/// Send a request and return the response once it is known to be 2xx.
pub async fn send(outgoing: &Outgoing<'_>) -> Result<Response, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let headers = Headers::new().map_err(|_| FetchError::RequestCreationFailed)?;
    for (name, value) in outgoing.headers {
        headers
            .set(name, value)
            .map_err(|_| FetchError::RequestCreationFailed)?;
    }

    let opts = RequestInit::new();
    opts.set_method(outgoing.method);
    opts.set_mode(RequestMode::Cors);
    opts.set_credentials(RequestCredentials::Include);
    opts.set_headers(&headers);
    if let Some(body) = outgoing.body {
        opts.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(outgoing.url, &opts)
        .map_err(|_| FetchError::RequestCreationFailed)?;

    match race_with_timeout(window.fetch_with_request(&request), FETCH_TIMEOUT_MS).await {
        RaceResult::TimedOut => Err(FetchError::Timeout),
        RaceResult::Error(msg) => Err(FetchError::NetworkError(msg)),
        RaceResult::Completed(value) => {
            let response: Response = value.dyn_into().map_err(|_| FetchError::InvalidContent)?;
            if !response.ok() {
                return Err(FetchError::HttpError(response.status()));
            }
            Ok(response)
        }
    }
}

/// Read a response body as text.
pub async fn read_text(response: Response) -> Result<String, FetchError> {
    let promise = response
        .text()
        .map_err(|_| FetchError::ResponseReadFailed)?;
    let text = JsFuture::from(promise)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;
    text.as_string().ok_or(FetchError::InvalidContent)
}

/// GET a resource as text.
pub async fn fetch_text(url: &str, headers: &[(&str, &str)]) -> Result<String, FetchError> {
    let response = send(&Outgoing::get(url, headers)).await?;
    read_text(response).await
}
