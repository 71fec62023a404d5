//! Multipart upload of PDF reports to the validation API.
//!
//! Browser `fetch` cannot report upload progress, so [`XhrTransport`]
//! drives an `XMLHttpRequest` and bridges its callbacks to a future.

use std::cell::RefCell;
use std::rc::Rc;

use futures::channel::oneshot;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{File, FormData, ProgressEvent, XmlHttpRequest};

use crate::error::{TransportError, UploadError};
use crate::types::{ErrorPayload, SessionReport, UploadProgress};
use crate::validation::SelectedFile;

/// Progress sink invoked on each transport tick.
pub type ProgressCallback = Rc<dyn Fn(UploadProgress)>;

/// One multipart request: every file under the same field name.
#[derive(Debug)]
pub struct UploadRequest<'a, F> {
    pub url: &'a str,
    pub field_name: &'a str,
    pub files: &'a [F],
}

/// Raw HTTP reply, before interpretation.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

/// Sends a multipart request and reports progress.
#[allow(async_fn_in_trait)]
pub trait UploadTransport {
    type File: SelectedFile;

    async fn send(
        &self,
        request: UploadRequest<'_, Self::File>,
        on_progress: ProgressCallback,
    ) -> Result<HttpReply, TransportError>;
}

/// Upload `files` once and interpret the server reply.
pub async fn upload_reports<T: UploadTransport>(
    transport: &T,
    url: &str,
    field_name: &str,
    files: &[T::File],
    on_progress: ProgressCallback,
) -> Result<SessionReport, UploadError> {
    log::info!("📤 POST {} ({} file(s))", url, files.len());

    let request = UploadRequest {
        url,
        field_name,
        files,
    };
    let reply = transport.send(request, on_progress).await?;

    log::debug!("Upload finished with status {}", reply.status);
    interpret_reply(&reply)
}

/// Map a raw reply onto the session report or an upload error.
///
/// The body must be JSON whatever the status; 2xx bodies must also have the
/// session report shape.
pub fn interpret_reply(reply: &HttpReply) -> Result<SessionReport, UploadError> {
    let value: serde_json::Value = serde_json::from_str(&reply.body).map_err(|e| {
        log::warn!("Unparseable response body (status {}): {}", reply.status, e);
        UploadError::MalformedResponse
    })?;

    if (200..300).contains(&reply.status) {
        serde_json::from_value::<SessionReport>(value).map_err(|e| {
            log::warn!("Unexpected session report shape: {}", e);
            UploadError::MalformedResponse
        })
    } else {
        let payload: ErrorPayload = serde_json::from_value(value).unwrap_or_default();
        Err(UploadError::Server {
            status: reply.status,
            detail: payload.message(),
        })
    }
}

// =============================================================================
// Browser transport
// =============================================================================

/// Terminal XHR events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum XhrCompletion {
    Load,
    Error,
    Abort,
    Timeout,
}

fn handler(closure: &Closure<dyn FnMut(ProgressEvent)>) -> &js_sys::Function {
    closure.as_ref().unchecked_ref()
}

/// `XMLHttpRequest`-backed transport for browser `File`s.
#[derive(Clone, Copy, Debug, Default)]
pub struct XhrTransport;

impl UploadTransport for XhrTransport {
    type File = File;

    async fn send(
        &self,
        request: UploadRequest<'_, File>,
        on_progress: ProgressCallback,
    ) -> Result<HttpReply, TransportError> {
        let form = FormData::new().map_err(|e| TransportError::Setup(format!("FormData: {:?}", e)))?;
        for file in request.files {
            form.append_with_blob_and_filename(request.field_name, file, &file.name())
                .map_err(|e| TransportError::Setup(format!("append '{}': {:?}", file.name(), e)))?;
        }

        let xhr = XmlHttpRequest::new()
            .map_err(|e| TransportError::Setup(format!("XMLHttpRequest: {:?}", e)))?;
        xhr.open("POST", request.url)
            .map_err(|e| TransportError::Setup(format!("open: {:?}", e)))?;

        // Closures must outlive the request; they are dropped at the end of
        // this function, after the completion signal.
        let on_upload_progress = Closure::<dyn FnMut(ProgressEvent)>::new(move |ev: ProgressEvent| {
            if ev.length_computable() {
                on_progress(UploadProgress {
                    loaded: ev.loaded(),
                    total: ev.total(),
                });
            }
        });
        xhr.upload()
            .map_err(|e| TransportError::Setup(format!("upload target: {:?}", e)))?
            .set_onprogress(Some(handler(&on_upload_progress)));

        let (tx, rx) = oneshot::channel::<XhrCompletion>();
        let tx = Rc::new(RefCell::new(Some(tx)));
        let completion = |kind: XhrCompletion| {
            let tx = Rc::clone(&tx);
            Closure::<dyn FnMut(ProgressEvent)>::new(move |_: ProgressEvent| {
                if let Some(sender) = tx.borrow_mut().take() {
                    let _ = sender.send(kind);
                }
            })
        };
        let on_load = completion(XhrCompletion::Load);
        let on_error = completion(XhrCompletion::Error);
        let on_abort = completion(XhrCompletion::Abort);
        let on_timeout = completion(XhrCompletion::Timeout);
        xhr.set_onload(Some(handler(&on_load)));
        xhr.set_onerror(Some(handler(&on_error)));
        xhr.set_onabort(Some(handler(&on_abort)));
        xhr.set_ontimeout(Some(handler(&on_timeout)));

        xhr.send_with_opt_form_data(Some(&form))
            .map_err(|e| TransportError::Failed(format!("send: {:?}", e)))?;

        let outcome = rx.await.map_err(|_| TransportError::Dropped)?;

        xhr.set_onload(None);
        xhr.set_onerror(None);
        xhr.set_onabort(None);
        xhr.set_ontimeout(None);
        if let Ok(upload) = xhr.upload() {
            upload.set_onprogress(None);
        }

        match outcome {
            XhrCompletion::Load => {
                let status = xhr
                    .status()
                    .map_err(|e| TransportError::Failed(format!("status: {:?}", e)))?;
                let body = xhr
                    .response_text()
                    .map_err(|e| TransportError::Failed(format!("response: {:?}", e)))?
                    .unwrap_or_default();
                Ok(HttpReply { status, body })
            }
            other => Err(TransportError::Failed(format!("{:?}", other))),
        }
    }
}
