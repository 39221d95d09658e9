//! HTTP plumbing for the prediction request.

use crate::PredictError;
use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// Status and body of an HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends a JSON body and hands back whatever came back.
///
/// Only fails when no response was received at all.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, PredictError>;
}

/// `window.fetch` based transport used in the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl Transport for FetchTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, PredictError> {
        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_body(&JsValue::from_str(&body));

        let headers = Headers::new().map_err(transport_error)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(transport_error)?;
        opts.set_headers(&headers);

        let request = Request::new_with_str_and_init(url, &opts).map_err(transport_error)?;

        debug!("POST {} ({} bytes)", url, body.len());
        let response_value = JsFuture::from(gloo_utils::window().fetch_with_request(&request))
            .await
            .map_err(transport_error)?;
        let response: Response = response_value.dyn_into().map_err(transport_error)?;

        let text_promise = response.text().map_err(transport_error)?;
        let text = JsFuture::from(text_promise)
            .await
            .map_err(transport_error)?
            .as_string()
            .unwrap_or_default();

        Ok(HttpReply {
            status: response.status(),
            body: text,
        })
    }
}

fn transport_error(err: JsValue) -> PredictError {
    PredictError::Transport(js_error_message(&err))
}

/// Best-effort human readable text for a thrown JS value.
pub fn js_error_message(err: &JsValue) -> String {
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_2xx_is_success() {
        let reply = |status| HttpReply {
            status,
            body: String::new(),
        };
        assert!(reply(200).is_success());
        assert!(reply(204).is_success());
        assert!(!reply(199).is_success());
        assert!(!reply(400).is_success());
        assert!(!reply(500).is_success());
    }
}
