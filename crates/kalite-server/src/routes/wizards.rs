use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kalite_core::models::draft::FieldValue;
use kalite_wizard::controller::{StepOutcome, SubmitOutcome, WizardController};
use kalite_wizard::open_wizard;
use kalite_wizard::view::WizardView;

use crate::error::ApiError;
use crate::state::{AppState, Session};

#[derive(Deserialize)]
pub struct OpenWizard {
    form: String,
    /// An existing record to edit.
    #[serde(default)]
    draft: Option<serde_json::Value>,
}

/// One field assignment. Updates apply in request order, so a category
/// must come before the sub-category chosen under it.
#[derive(Deserialize)]
pub struct FieldUpdate {
    name: String,
    value: FieldValue,
}

#[derive(Serialize)]
pub struct SessionView {
    id: Uuid,
    #[serde(flatten)]
    wizard: WizardView,
}

#[derive(Serialize)]
pub struct StepResponse {
    #[serde(flatten)]
    outcome: StepOutcome,
    session: SessionView,
}

#[derive(Serialize)]
pub struct SubmitResponse {
    #[serde(flatten)]
    outcome: SubmitOutcome,
    /// Absent once the record is stored: the session is closed.
    #[serde(skip_serializing_if = "Option::is_none")]
    session: Option<SessionView>,
}

fn session_view(id: Uuid, wizard: &WizardController) -> Result<SessionView, ApiError> {
    Ok(SessionView {
        id,
        wizard: wizard.view()?,
    })
}

async fn session(state: &AppState, id: Uuid) -> Result<Session, ApiError> {
    state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("wizard session not found: {id}")))
}

pub async fn open(
    State(state): State<AppState>,
    Json(request): Json<OpenWizard>,
) -> Result<(StatusCode, Json<SessionView>), ApiError> {
    let wizard = open_wizard(&request.form, &state.taxonomies, request.draft)?;
    let view = wizard.view()?;
    let id = state.sessions.open(wizard).await;
    tracing::info!(session = %id, form = %view.form, "wizard session opened");
    Ok((StatusCode::CREATED, Json(SessionView { id, wizard: view })))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionView>, ApiError> {
    let session = session(&state, id).await?;
    let wizard = session.lock().await;
    Ok(Json(session_view(id, &wizard)?))
}

pub async fn update_fields(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(updates): Json<Vec<FieldUpdate>>,
) -> Result<Json<SessionView>, ApiError> {
    let session = session(&state, id).await?;
    let mut wizard = session.lock().await;
    for update in updates {
        wizard.update_field(&update.name, update.value);
    }
    Ok(Json(session_view(id, &wizard)?))
}

pub async fn next(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StepResponse>, ApiError> {
    let session = session(&state, id).await?;
    let mut wizard = session.lock().await;
    let outcome = wizard.next();
    Ok(Json(StepResponse {
        outcome,
        session: session_view(id, &wizard)?,
    }))
}

pub async fn previous(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<StepResponse>, ApiError> {
    let session = session(&state, id).await?;
    let mut wizard = session.lock().await;
    let outcome = wizard.previous();
    Ok(Json(StepResponse {
        outcome,
        session: session_view(id, &wizard)?,
    }))
}

/// Submit the record. A stored record ends the session and its draft is
/// discarded; any other outcome leaves the session open for correction.
pub async fn submit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(StatusCode, Json<SubmitResponse>), ApiError> {
    let session = session(&state, id).await?;
    let mut wizard = session.lock().await;
    let outcome = wizard.submit(state.submitter.as_ref()).await;

    let (status, view) = match &outcome {
        SubmitOutcome::Submitted { .. } => {
            state.sessions.close(id).await;
            tracing::info!(session = %id, "wizard session closed after submit");
            (StatusCode::OK, None)
        }
        SubmitOutcome::NotOnTerminalStep { .. } => {
            (StatusCode::CONFLICT, Some(session_view(id, &wizard)?))
        }
        SubmitOutcome::Invalid { .. } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Some(session_view(id, &wizard)?),
        ),
        SubmitOutcome::Failed { .. } => (StatusCode::BAD_GATEWAY, Some(session_view(id, &wizard)?)),
    };
    Ok((
        status,
        Json(SubmitResponse {
            outcome,
            session: view,
        }),
    ))
}

/// Cancel: the draft is discarded with the session.
pub async fn close(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.sessions.close(id).await {
        tracing::info!(session = %id, "wizard session closed");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("wizard session not found: {id}")))
    }
}
