use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::{Body, to_bytes};
use axum::http::{Method, Request, StatusCode, header};
use kalite_server::app_router;
use kalite_server::state::AppState;
use kalite_taxonomy::TaxonomySet;
use kalite_taxonomy::cache::BoxFuture;
use kalite_wizard::error::SubmitError;
use kalite_wizard::submit::{SubmitHandler, SubmitPayload, SubmitReceipt};
use serde_json::{Value, json};
use tower::ServiceExt;

#[derive(Default)]
struct RecordingSink {
    payloads: Mutex<Vec<SubmitPayload>>,
    fail: bool,
}

impl SubmitHandler for RecordingSink {
    fn submit<'a>(
        &'a self,
        payload: &'a SubmitPayload,
    ) -> BoxFuture<'a, Result<SubmitReceipt, SubmitError>> {
        Box::pin(async move {
            self.payloads.lock().unwrap().push(payload.clone());
            if self.fail {
                return Err(SubmitError::Unavailable("connection refused".to_string()));
            }
            Ok(SubmitReceipt {
                record_id: Some("acil-7".to_string()),
            })
        })
    }
}

fn router_with(sink: Arc<RecordingSink>) -> axum::Router {
    app_router(AppState::new(TaxonomySet::builtin(), sink))
}

fn router() -> axum::Router {
    router_with(Arc::new(RecordingSink::default()))
}

async fn call(app: &axum::Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => request.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn open(app: &axum::Router, form: &str) -> String {
    let (status, body) = call(app, Method::POST, "/wizards", Some(json!({ "form": form }))).await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

async fn fill_emergency(app: &axum::Router, id: &str) {
    let steps = [
        json!([
            { "name": "olay_tarihi", "value": "2025-05-20" },
            { "name": "olay_yeri", "value": "Dahiliye Servisi" },
        ]),
        json!([
            { "name": "acil_kod", "value": "mavi_kod" },
            { "name": "acil_kisa_aciklama", "value": "yatan_hasta_arrest" },
            { "name": "ekip_ulasma_suresi", "value": 3 },
        ]),
        json!([
            { "name": "mudahale_ozeti", "value": "Ekip 3 dakikada ulaştı, CPR uygulandı." },
            { "name": "sonuc", "value": "basarili" },
        ]),
    ];
    let count = steps.len();
    for (idx, updates) in steps.into_iter().enumerate() {
        let (status, _) = call(app, Method::PUT, &format!("/wizards/{id}/fields"), Some(updates)).await;
        assert_eq!(status, StatusCode::OK);
        if idx + 1 < count {
            let (_, body) = call(app, Method::POST, &format!("/wizards/{id}/next"), None).await;
            assert_eq!(body["outcome"], "moved");
        }
    }
}

#[tokio::test]
async fn health_reports_open_sessions() {
    let app = router();
    open(&app, "dof").await;

    let (status, body) = call(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["open_sessions"], 1);
}

#[tokio::test]
async fn lists_taxonomies_in_a_stable_order() {
    let (status, body) = call(&router(), Method::GET, "/taxonomies", None).await;
    assert_eq!(status, StatusCode::OK);

    let ids: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["dof", "hasta_guvenligi", "calisan_guvenligi", "acil_durum"]);
    assert_eq!(body[0]["depth"], 2);
    assert_eq!(body[1]["depth"], 3);
}

#[tokio::test]
async fn resolves_children() {
    let app = router();

    let (_, detail) = call(&app, Method::GET, "/taxonomies/dof", None).await;
    assert_eq!(detail["categories"].as_array().unwrap().len(), 8);

    let (_, waste) = call(&app, Method::GET, "/taxonomies/dof/children/atik_yonetimi", None).await;
    let waste = waste.as_array().unwrap();
    assert_eq!(waste.len(), 22);
    assert_eq!(waste[0]["code"], "tibbi_atik_ayristirma");

    let (_, descriptions) = call(
        &app,
        Method::GET,
        "/taxonomies/hasta_guvenligi/children/ilac_guvenligi/uygulama",
        None,
    )
    .await;
    assert_eq!(descriptions[0]["code"], "yanlis_hasta");

    let (status, unknown) = call(&app, Method::GET, "/taxonomies/dof/children/yok", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(unknown, json!([]));
}

#[tokio::test]
async fn unknown_taxonomy_is_not_found() {
    let (status, body) = call(&router(), Method::GET, "/taxonomies/kalite", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "taxonomy not found: kalite");
}

#[tokio::test]
async fn validates_paths() {
    let app = router();

    let (_, ok) = call(
        &app,
        Method::POST,
        "/taxonomies/hasta_guvenligi/validate",
        Some(json!({
            "category": "ilac_guvenligi",
            "sub_category": "receteleme",
            "description": "yanlis_doz",
        })),
    )
    .await;
    assert_eq!(ok["valid"], true);

    let (_, bad) = call(
        &app,
        Method::POST,
        "/taxonomies/dof/validate",
        Some(json!({ "category": "atik_yonetimi", "description": "skt_takibi" })),
    )
    .await;
    assert_eq!(bad["valid"], false);
}

#[tokio::test]
async fn opening_an_unknown_form_is_a_bad_request() {
    let (status, body) = call(&router(), Method::POST, "/wizards", Some(json!({ "form": "denetim" }))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("denetim"));
}

#[tokio::test]
async fn edit_flow_seeds_the_draft() {
    let app = router();
    let (status, body) = call(
        &app,
        Method::POST,
        "/wizards",
        Some(json!({ "form": "emergency", "draft": { "id": "acil-1", "olay_yeri": "Otopark" } })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["draft"]["olay_yeri"], "Otopark");
    assert_eq!(body["draft"]["id"], "acil-1");
    assert_eq!(body["draft"]["ekip_ulasma_suresi"], 0.0);
}

#[tokio::test]
async fn next_is_blocked_by_an_incomplete_step() {
    let app = router();
    let id = open(&app, "dof").await;

    let (status, body) = call(&app, Method::POST, &format!("/wizards/{id}/next"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "invalid");
    assert_eq!(body["step"], 1);
    assert_eq!(body["session"]["current_step"], 1);
    assert_eq!(body["session"]["errors"]["sorumlu_birim"], "Sorumlu birim zorunludur.");
}

#[tokio::test]
async fn category_change_clears_the_description() {
    let app = router();
    let id = open(&app, "emergency").await;
    let uri = format!("/wizards/{id}/fields");

    call(
        &app,
        Method::PUT,
        &uri,
        Some(json!([
            { "name": "acil_kod", "value": "mavi_kod" },
            { "name": "acil_kisa_aciklama", "value": "ekip_gecikmesi" },
        ])),
    )
    .await;
    let (_, body) = call(&app, Method::PUT, &uri, Some(json!([{ "name": "acil_kod", "value": "beyaz_kod" }]))).await;

    assert_eq!(body["draft"]["acil_kod"], "beyaz_kod");
    assert_eq!(body["draft"]["acil_kisa_aciklama"], "");
}

#[tokio::test]
async fn submit_before_the_last_step_conflicts() {
    let app = router();
    let id = open(&app, "emergency").await;

    let (status, body) = call(&app, Method::POST, &format!("/wizards/{id}/submit"), None).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["outcome"], "not_on_terminal_step");
    assert_eq!(body["terminal"], 3);
}

#[tokio::test]
async fn full_run_submits_and_resets() {
    let sink = Arc::new(RecordingSink::default());
    let app = router_with(sink.clone());
    let id = open(&app, "emergency").await;
    fill_emergency(&app, &id).await;

    let (status, body) = call(&app, Method::POST, &format!("/wizards/{id}/submit"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "submitted");
    assert_eq!(body["receipt"]["record_id"], "acil-7");
    assert!(body.get("session").is_none());

    // The stored draft is discarded with its session.
    let (status, _) = call(&app, Method::GET, &format!("/wizards/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, health) = call(&app, Method::GET, "/health", None).await;
    assert_eq!(health["open_sessions"], 0);

    let payloads = sink.payloads.lock().unwrap();
    assert_eq!(payloads.len(), 1);
    let record = &payloads[0].record;
    assert_eq!(record["olay_tarihi"], "2025-05-20");
    assert_eq!(record["ekip_ulasma_suresi"], 3);
    assert_eq!(record["form_turu"], "emergency");
}

#[tokio::test]
async fn failed_submit_keeps_the_draft() {
    let sink = Arc::new(RecordingSink {
        fail: true,
        ..Default::default()
    });
    let app = router_with(sink);
    let id = open(&app, "emergency").await;
    fill_emergency(&app, &id).await;

    let (status, body) = call(&app, Method::POST, &format!("/wizards/{id}/submit"), None).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["outcome"], "failed");
    assert_eq!(body["session"]["current_step"], 3);
    assert_eq!(body["session"]["draft"]["olay_yeri"], "Dahiliye Servisi");
    assert_eq!(
        body["session"]["submit_error"],
        "data store unavailable: connection refused"
    );
}

#[tokio::test]
async fn previous_walks_back_and_stops_at_one() {
    let app = router();
    let id = open(&app, "emergency").await;
    fill_emergency(&app, &id).await;

    let uri = format!("/wizards/{id}/previous");
    let (_, body) = call(&app, Method::POST, &uri, None).await;
    assert_eq!(body["outcome"], "moved");
    assert_eq!(body["to"], 2);

    call(&app, Method::POST, &uri, None).await;
    let (_, body) = call(&app, Method::POST, &uri, None).await;
    assert_eq!(body["outcome"], "at_boundary");
    assert_eq!(body["session"]["draft"]["sonuc"], "basarili");
}

#[tokio::test]
async fn cancel_discards_the_session() {
    let app = router();
    let id = open(&app, "dof").await;
    let uri = format!("/wizards/{id}");

    let (status, _) = call(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = call(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = call(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn rejected_submit_keeps_the_session_open() {
    let app = router();
    let id = open(&app, "emergency").await;
    fill_emergency(&app, &id).await;
    call(
        &app,
        Method::PUT,
        &format!("/wizards/{id}/fields"),
        Some(json!([{ "name": "olay_yeri", "value": " " }])),
    )
    .await;

    let (status, body) = call(&app, Method::POST, &format!("/wizards/{id}/submit"), None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["first_invalid_step"], 1);
    assert_eq!(body["session"]["current_step"], 3);

    let (_, health) = call(&app, Method::GET, "/health", None).await;
    assert_eq!(health["open_sessions"], 1);
}

#[tokio::test]
async fn idle_sessions_are_swept() {
    let state = AppState::new(TaxonomySet::builtin(), Arc::new(RecordingSink::default()));
    let app = app_router(state.clone());
    let id = open(&app, "dof").await;
    open(&app, "emergency").await;

    assert_eq!(state.sessions.sweep(Duration::from_secs(3600)).await, 0);
    assert_eq!(state.sessions.len().await, 2);

    assert_eq!(state.sessions.sweep(Duration::ZERO).await, 2);
    let (status, _) = call(&app, Method::GET, &format!("/wizards/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[test]
fn access_log_tags_wizard_paths_with_their_session() {
    use kalite_server::middleware::access_log::session_id;

    let id = uuid::Uuid::new_v4();
    assert_eq!(session_id(&format!("/wizards/{id}/next")), Some(id));
    assert_eq!(session_id(&format!("/wizards/{id}")), Some(id));
    assert_eq!(session_id("/wizards"), None);
    assert_eq!(session_id("/wizards/not-a-uuid"), None);
    assert_eq!(session_id("/taxonomies/dof"), None);
}
