//! REST API helpers for the enrollment backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, always with
//! `credentials: include` so the ambient session cookie rides along —
//! no tokens are held in client state.
//! Native (tests): stubs returning `ApiError::Network`, since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses classify through `ApiError::from_status` with the
//! body's `message`/`error` text when present; transport failures map to
//! `ApiError::Network`. Callers decide what is worth a toast.

#![allow(clippy::unused_async)]

use super::error::ApiError;
use super::types::{Credentials, EnrollmentStats, LoginResponse, Member, RequestStatus};
use crate::state::edit::EditDraft;

#[cfg(feature = "csr")]
use super::error::body_message;
#[cfg(feature = "csr")]
use super::types::{Envelope, VerifyResponse};

/// Compile-time API base, defaulting to a same-origin `/api` prefix.
pub fn api_base() -> &'static str {
    option_env!("ENROLL_API_BASE").unwrap_or("/api")
}

fn endpoint(path: &str) -> String {
    format!("{}{path}", api_base())
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> ApiError {
    ApiError::Network("not available outside the browser".to_owned())
}

#[cfg(feature = "csr")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(feature = "csr")]
async fn error_from(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let message = resp
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|v| body_message(&v));
    ApiError::from_status(status, message)
}

#[cfg(feature = "csr")]
async fn decode<T>(resp: gloo_net::http::Response) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    let status = resp.status();
    resp.json::<T>().await.map_err(|err| ApiError::Server {
        status,
        message: Some(format!("invalid response body: {err}")),
    })
}

/// Establish a session via `POST /login`. The server answers by setting
/// the session cookie; the body only carries a message.
pub async fn login(credentials: &Credentials) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/login"))
            .credentials(web_sys::RequestCredentials::Include)
            .json(credentials)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(error_from(resp).await);
        }
        decode(resp).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = credentials;
        Err(unavailable())
    }
}

/// Terminate the session via `POST /logout`.
pub async fn logout() -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&endpoint("/logout"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(error_from(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(unavailable())
    }
}

/// Check whether the session cookie is still valid (`GET /verify`).
pub async fn verify_session() -> Result<bool, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&endpoint("/verify"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(error_from(resp).await);
        }
        let body: VerifyResponse = decode(resp).await?;
        Ok(body.success)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(unavailable())
    }
}

/// List enrollments in one workflow status.
pub async fn fetch_members(status: RequestStatus) -> Result<Vec<Member>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = endpoint(&format!(
            "/enrollments/admin?requestStatus={}",
            status.as_str()
        ));
        let resp = gloo_net::http::Request::get(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(error_from(resp).await);
        }
        let body: Envelope<Vec<Member>> = decode(resp).await?;
        Ok(body.data)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = status;
        Err(unavailable())
    }
}

/// Fetch a single enrollment record.
pub async fn fetch_member(id: &str) -> Result<Member, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = endpoint(&format!("/enrollments/admin/{id}"));
        let resp = gloo_net::http::Request::get(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(error_from(resp).await);
        }
        let body: Envelope<Member> = decode(resp).await?;
        Ok(body.data)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err(unavailable())
    }
}

/// Fetch the dashboard counts.
pub async fn fetch_stats() -> Result<EnrollmentStats, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&endpoint("/enrollments/admin/stats"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(error_from(resp).await);
        }
        let body: Envelope<EnrollmentStats> = decode(resp).await?;
        Ok(body.data)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(unavailable())
    }
}

/// Approve or cancel an enrollment (`PUT …/{id}/status`).
pub async fn update_member_status(id: &str, status: RequestStatus) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = endpoint(&format!("/enrollments/admin/{id}/status"));
        let resp = gloo_net::http::Request::put(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .json(&serde_json::json!({ "status": status }))
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(error_from(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, status);
        Err(unavailable())
    }
}

/// Delete an enrollment record.
pub async fn delete_member(id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = endpoint(&format!("/enrollments/admin/{id}"));
        let resp = gloo_net::http::Request::delete(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(error_from(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        Err(unavailable())
    }
}

/// Full member update including file replacement, as multipart form data
/// (`PUT …/{id}`). No explicit Content-Type: the browser sets the
/// multipart boundary itself.
pub async fn update_member(id: &str, draft: &EditDraft) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        use crate::state::edit::{
            DocumentKind, ImageSlot, project_existing_images_field, project_field,
            project_uploads_field,
        };

        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::Network("failed to build form data".to_owned()))?;

        for (key, value) in draft.text_fields() {
            let _ = form.append_with_str(key, value);
        }
        let _ = form.append_with_str("interests", &draft.interests_json());

        for (kind, slot) in [
            (DocumentKind::Photo, &draft.photo),
            (DocumentKind::CitizenshipFront, &draft.cit_front),
            (DocumentKind::CitizenshipBack, &draft.cit_back),
        ] {
            if let Some(upload) = slot.upload() {
                if let Some(handle) = &upload.handle {
                    let _ = form.append_with_blob_and_filename(
                        kind.field_name(),
                        handle,
                        &upload.name,
                    );
                }
            }
        }

        for (i, project) in draft.projects.iter().enumerate() {
            let _ = form.append_with_str(&project_field(i, "name"), &project.name);
            let _ = form.append_with_str(&project_field(i, "link"), &project.link);
            let _ = form.append_with_str(&project_field(i, "description"), &project.description);

            for image in &project.images {
                match image {
                    ImageSlot::Url(url) => {
                        let _ = form.append_with_str(&project_existing_images_field(i), url);
                    }
                    ImageSlot::Upload(upload) => {
                        if let Some(handle) = &upload.handle {
                            let _ = form.append_with_blob_and_filename(
                                &project_uploads_field(i),
                                handle,
                                &upload.name,
                            );
                        }
                    }
                }
            }
        }

        let _ = form.append_with_str("agreement", if draft.agreement { "true" } else { "false" });

        let url = endpoint(&format!("/enrollments/admin/{id}"));
        let resp = gloo_net::http::Request::put(&url)
            .credentials(web_sys::RequestCredentials::Include)
            .body(form)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        if !resp.ok() {
            return Err(error_from(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, draft);
        Err(unavailable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_base_and_path() {
        assert!(endpoint("/verify").ends_with("/verify"));
        assert!(endpoint("/verify").starts_with(api_base()));
    }
}
