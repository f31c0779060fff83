//! HTTP client for the IFS backend.
//!
//! Four operations against [`API_BASE_URL`], all parameterized by a path
//! in the server's namespace: list a directory, read a tabular file,
//! download raw bytes, and upload a file. Every call is a single
//! fire-and-forget request; nothing here retries, queues, or cancels.

use gloo_net::http::{Request, Response};
use js_sys::Promise;
use serde_json::{Map, Value};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, ProgressEvent, XmlHttpRequest};

use crate::config::API_BASE_URL;
use crate::core::ApiError;
use crate::models::FileEntry;

/// List the entries of a directory.
pub async fn list(path: &str) -> Result<Vec<FileEntry>, ApiError> {
    let response = get("files", path).await?;
    response.json::<Vec<FileEntry>>().await.map_err(decode_err)
}

/// Read a CSV/Excel file as a sequence of flat key-value records.
pub async fn read_tabular(path: &str) -> Result<Vec<Map<String, Value>>, ApiError> {
    let response = get("file/read", path).await?;
    response.json().await.map_err(decode_err)
}

/// Download raw file bytes plus the server-suggested file name, if any.
pub async fn download(path: &str) -> Result<(Vec<u8>, Option<String>), ApiError> {
    let response = get("download", path).await?;
    let suggested = response
        .headers()
        .get("content-disposition")
        .and_then(|header| parse_disposition_filename(&header));
    let bytes = response.binary().await.map_err(decode_err)?;
    Ok((bytes, suggested))
}

/// Upload a file into `dest_path` as multipart form data.
///
/// Uses XMLHttpRequest rather than fetch so upload progress is observable:
/// when the browser reports computable progress, `on_progress` receives a
/// 0-100 percentage. Progress is best-effort only.
pub async fn upload(
    file: &File,
    dest_path: &str,
    on_progress: impl Fn(u32) + 'static,
) -> Result<(), ApiError> {
    let xhr = XmlHttpRequest::new()
        .map_err(|_| ApiError::Network("Failed to create request".to_string()))?;
    xhr.open_with_async("POST", &format!("{}/upload", API_BASE_URL), true)
        .map_err(|_| ApiError::Network("Failed to open request".to_string()))?;

    let form =
        FormData::new().map_err(|_| ApiError::Network("Failed to build form data".to_string()))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| ApiError::Network("Failed to attach file".to_string()))?;
    form.append_with_str("path", dest_path)
        .map_err(|_| ApiError::Network("Failed to attach path".to_string()))?;

    if let Ok(upload_target) = xhr.upload() {
        let progress = Closure::<dyn FnMut(ProgressEvent)>::new(move |event: ProgressEvent| {
            if event.length_computable() && event.total() > 0.0 {
                let percent = (event.loaded() / event.total() * 100.0).round() as u32;
                on_progress(percent.min(100));
            }
        });
        upload_target.set_onprogress(Some(progress.as_ref().unchecked_ref()));
        progress.forget();
    }

    // Resolves once the request settles either way; status is read after.
    let settled = Promise::new(&mut |resolve: js_sys::Function, reject: js_sys::Function| {
        let onload = Closure::once_into_js(move |_: web_sys::Event| {
            let _ = resolve.call0(&JsValue::NULL);
        });
        xhr.set_onload(Some(onload.unchecked_ref()));
        let onerror = Closure::once_into_js(move |_: web_sys::Event| {
            let _ = reject.call0(&JsValue::NULL);
        });
        xhr.set_onerror(Some(onerror.unchecked_ref()));
    });

    xhr.send_with_opt_form_data(Some(&form))
        .map_err(|_| ApiError::Network("Failed to send request".to_string()))?;

    if JsFuture::from(settled).await.is_err() {
        return Err(ApiError::Network("Upload request failed".to_string()));
    }

    let status = xhr.status().unwrap_or(0);
    if (200..300).contains(&status) {
        Ok(())
    } else {
        let message = xhr
            .response_text()
            .ok()
            .flatten()
            .and_then(|text| extract_message(&text));
        Err(ApiError::Server { status, message })
    }
}

/// Issue a GET against one of the IFS endpoints with a `path` query param.
async fn get(endpoint: &str, path: &str) -> Result<Response, ApiError> {
    let url = format!("{}/{}", API_BASE_URL, endpoint);
    let response = Request::get(&url)
        .query([("path", path)])
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let message = server_message(&response).await;
        return Err(ApiError::Server {
            status: response.status(),
            message,
        });
    }
    Ok(response)
}

/// Best-effort extraction of an error message from a response body.
async fn server_message(response: &Response) -> Option<String> {
    let text = response.text().await.ok()?;
    extract_message(&text)
}

/// Pull a human-readable message out of an error body: a `message` field
/// when the body is a JSON object, else the trimmed body itself.
fn extract_message(text: &str) -> Option<String> {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(text)
        && let Some(msg) = map.get("message").and_then(Value::as_str)
    {
        return Some(msg.to_string());
    }
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Pull `filename="..."` (or the unquoted form) out of a
/// Content-Disposition header value.
fn parse_disposition_filename(header: &str) -> Option<String> {
    let (_, rest) = header.split_once("filename=")?;
    let rest = rest.trim();
    let name = if let Some(quoted) = rest.strip_prefix('"') {
        quoted.split('"').next()?
    } else {
        rest.split(';').next()?.trim()
    };
    (!name.is_empty()).then(|| name.to_string())
}

fn decode_err(err: gloo_net::Error) -> ApiError {
    ApiError::Decode(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_field_wins_over_the_raw_body() {
        assert_eq!(
            extract_message(r#"{"message": "File already exists", "code": 409}"#),
            Some("File already exists".to_string())
        );
    }

    #[test]
    fn non_json_bodies_pass_through_trimmed() {
        assert_eq!(
            extract_message("  Internal Server Error \n"),
            Some("Internal Server Error".to_string())
        );
        assert_eq!(extract_message("   "), None);
    }

    #[test]
    fn disposition_filename_parses_quoted_and_bare_forms() {
        assert_eq!(
            parse_disposition_filename(r#"attachment; filename="report.csv""#),
            Some("report.csv".to_string())
        );
        assert_eq!(
            parse_disposition_filename("attachment; filename=report.csv; size=10"),
            Some("report.csv".to_string())
        );
        assert_eq!(parse_disposition_filename("attachment"), None);
    }
}
