//! View tests: live against an axum server, offline against an address
//! nobody listens on.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use travel::Role;
use travelai_bff::classic::{self, USER_NOT_FOUND};
use travelai_bff::companion;
use travelai_bff::state::{AuthPhase, Tab};
use travelai_bff::{Session, ViewError};
use travelai_client::classic::ClassicApi;
use travelai_client::companion::CompanionApi;
use travelai_client::{ApiClient, NoAuth, TokenSource};

const UNREACHABLE: &str = "http://127.0.0.1:1";

// =====================================================================
// Helpers
// =====================================================================

fn classic_api(base: &str) -> ClassicApi {
    ClassicApi::new(Arc::new(ApiClient::new(base, Arc::new(NoAuth)).unwrap()))
}

fn companion_api(base: &str, ts: Arc<dyn TokenSource>) -> CompanionApi {
    CompanionApi::new(Arc::new(ApiClient::new(base, ts).unwrap()))
}

fn ids<'a>(places: impl IntoIterator<Item = &'a travel::Place>) -> Vec<String> {
    places.into_iter().map(|p| p.id.clone()).collect()
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn place_json(id: &str, name: &str) -> serde_json::Value {
    json!({ "place_id": id, "place_name": name, "address": "", "thumb_url": "", "description": "", "content": "" })
}

async fn start_classic_server() -> String {
    async fn recommendations(Query(q): Query<std::collections::HashMap<String, String>>) -> impl IntoResponse {
        match q.get("query").map(String::as_str) {
            Some("slow") => {
                tokio::time::sleep(Duration::from_millis(300)).await;
                Json(json!([place_json("slow", "Slow Pick")]))
            }
            Some(other) => Json(json!([place_json(other, "Quick Pick")])),
            None => Json(json!([place_json("all", "Everything")])),
        }
    }

    let app = Router::new()
        .route(
            "/users",
            get(|| async {
                Json(json!([
                    { "user_id": "u1", "user_name": "user_a", "full_name": "A", "avatar_url": "", "role": "user" },
                    { "user_id": "u2", "user_name": "admin", "full_name": "Root", "avatar_url": "", "role": "admin" }
                ]))
            }),
        )
        .route("/comments", get(|| async { Json(json!([])) }))
        .route("/recommendations", get(recommendations));
    serve(app).await
}

async fn start_companion_server() -> String {
    async fn login(Json(body): Json<serde_json::Value>) -> impl IntoResponse {
        let name = body["username"].as_str().unwrap_or_default().to_string();
        Json(json!({
            "user": { "user_id": 5, "user_name": name, "full_name": "Live", "avatar_url": "" },
            "token": format!("tok-{}", name),
        }))
    }

    async fn profile(headers: HeaderMap) -> axum::response::Response {
        match headers.get("authorization").and_then(|v| v.to_str().ok()) {
            Some("Bearer tok-minh") => Json(json!({
                "user_id": 5, "user_name": "minh", "full_name": "Minh", "avatar_url": ""
            }))
            .into_response(),
            _ => StatusCode::UNAUTHORIZED.into_response(),
        }
    }

    let app = Router::new()
        .route("/login", post(login))
        .route("/user/profile", get(profile))
        .route("/user/visited-places", get(|| async { Json(json!([place_json("9", "Hue")])) }))
        .route("/places", get(|| async { Json(json!([place_json("9", "Hue"), place_json("8", "Vinh")])) }));
    serve(app).await
}

// =====================================================================
// Classic
// =====================================================================

#[tokio::test]
async fn classic_admin_login_sets_admin_session() {
    let base = start_classic_server().await;
    let session = Arc::new(Session::new());
    let view = classic::LoginView::new(classic_api(&base), session.clone());

    let user = view.submit("admin").await.unwrap().expect("admin exists");
    assert_eq!(user.role, Some(Role::Admin));
    assert!(session.is_admin());

    let state = view.state();
    assert_eq!(state.phase, AuthPhase::Authenticated);
    assert!(!state.offline);
    assert!(state.error.is_none());
}

#[tokio::test]
async fn classic_unknown_user_shows_message() {
    let base = start_classic_server().await;
    let session = Arc::new(Session::new());
    let view = classic::LoginView::new(classic_api(&base), session.clone());

    assert!(view.submit("ghost").await.unwrap().is_none());
    assert_eq!(view.state().error.as_deref(), Some(USER_NOT_FOUND));
    assert!(!session.is_logged_in());

    // Blank input does nothing.
    assert!(view.submit("   ").await.unwrap().is_none());
}

#[tokio::test]
async fn superseded_discovery_request_is_dropped() {
    let base = start_classic_server().await;
    let session = Arc::new(Session::new());
    classic::LoginView::new(classic_api(&base), session.clone())
        .submit("user_a")
        .await
        .unwrap();
    let view = classic::DiscoveryView::new(classic_api(&base), session);

    let (slow, fast) = tokio::join!(view.load(Some("slow")), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        view.load(Some("fast")).await
    });
    slow.unwrap();
    fast.unwrap();

    let state = view.state();
    assert_eq!(state.query, "fast");
    assert_eq!(ids(&state.places), vec!["fast"]);
    assert!(!state.loading);
}

#[tokio::test]
async fn classic_offline_profile() {
    let session = Arc::new(Session::new());
    let login = classic::LoginView::new(classic_api(UNREACHABLE), session.clone());
    login.submit("user_a").await.unwrap().expect("fixture user");
    assert!(login.state().offline);

    let view = classic::ProfileView::new(classic_api(UNREACHABLE), session);
    view.load().await.unwrap();
    let state = view.state();
    assert!(state.offline);
    assert_eq!(state.visited.len(), 1);
    assert_eq!(state.visited[0].place.id, "p1");
    assert_eq!(state.visited[0].rating.mean, 5.0);
    assert_eq!(state.visited[0].rating.count, 1);
}

#[tokio::test]
async fn profile_requires_login() {
    let view = classic::ProfileView::new(classic_api(UNREACHABLE), Arc::new(Session::new()));
    assert!(matches!(view.load().await, Err(ViewError::NotLoggedIn)));
}

#[tokio::test]
async fn classic_offline_discovery_filters_and_resets() {
    let session = Arc::new(Session::new());
    classic::LoginView::new(classic_api(UNREACHABLE), session.clone())
        .submit("user_a")
        .await
        .unwrap();
    let view = classic::DiscoveryView::new(classic_api(UNREACHABLE), session);

    view.load(None).await.unwrap();
    assert_eq!(ids(&view.state().places), vec!["p2", "p3"]);

    view.set_search("đà");
    let visible = view.state().visible();
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].place.name, "Đà Lạt");

    view.reset().await.unwrap();
    let state = view.state();
    assert!(state.search.is_empty());
    assert_eq!(state.visible().len(), 3);
    assert_eq!(state.visible()[1].rating.mean, 4.0);
}

#[tokio::test]
async fn classic_offline_place_detail() {
    let view = classic::PlaceDetailView::new(classic_api(UNREACHABLE));

    view.load("p2").await.unwrap();
    let state = view.state();
    assert_eq!(state.place.unwrap().name, "Phố Cổ Hội An");
    assert_eq!(state.comments.len(), 1);
    assert_eq!(state.rating.unwrap().to_string(), "4.0");
    assert!(!state.not_found);

    view.load("nope").await.unwrap();
    let state = view.state();
    assert!(state.not_found);
    assert!(state.comments.is_empty());
}

#[tokio::test]
async fn admin_places_filters_and_selection() {
    let session = Arc::new(Session::new());
    classic::LoginView::new(classic_api(UNREACHABLE), session.clone())
        .submit("admin")
        .await
        .unwrap();
    let view = classic::AdminPlacesView::new(classic_api(UNREACHABLE), session);
    view.load().await.unwrap();

    view.set_rating_range(4.0, 5.0);
    let rows: Vec<String> = view.state().visible().into_iter().map(|c| c.place.id).collect();
    assert_eq!(rows, vec!["p1", "p2"]);
    assert!(view.state().can_clear_rating());

    view.set_rating_range(5.0, 4.0);
    assert!(view.state().visible().is_empty());

    view.clear_rating_filter();
    view.set_name_filter("HỘI");
    let rows: Vec<String> = view.state().visible().into_iter().map(|c| c.place.id).collect();
    assert_eq!(rows, vec!["p2"]);

    view.set_name_filter("HOI");
    assert!(view.state().visible().is_empty());

    view.select(Some("p1"));
    let sel = view.state().selection().unwrap();
    assert_eq!(sel.comments.len(), 1);
    assert_eq!(sel.rating.mean, 5.0);
    view.select(None);
    assert!(view.state().selection().is_none());
}

#[tokio::test]
async fn admin_pages_reject_non_admins() {
    let session = Arc::new(Session::new());
    classic::LoginView::new(classic_api(UNREACHABLE), session.clone())
        .submit("user_a")
        .await
        .unwrap();

    let places = classic::AdminPlacesView::new(classic_api(UNREACHABLE), session.clone());
    assert!(matches!(places.load().await, Err(ViewError::Forbidden)));
    let users = classic::AdminUsersView::new(classic_api(UNREACHABLE), session);
    assert!(matches!(users.lookup("user_a").await, Err(ViewError::Forbidden)));
}

#[tokio::test]
async fn admin_user_lookup_offline() {
    let session = Arc::new(Session::new());
    classic::LoginView::new(classic_api(UNREACHABLE), session.clone())
        .submit("admin")
        .await
        .unwrap();
    let view = classic::AdminUsersView::new(classic_api(UNREACHABLE), session);

    view.lookup("user_a").await.unwrap();
    let state = view.state();
    assert!(state.searched);
    assert_eq!(state.comments.len(), 2);
    assert_eq!(state.visited_count, 1);

    view.lookup("admin").await.unwrap();
    let state = view.state();
    assert!(state.comments.is_empty());
    assert_eq!(state.visited_count, 0);
}

// =====================================================================
// Companion
// =====================================================================

#[tokio::test]
async fn companion_login_token_reaches_later_requests() {
    let base = start_companion_server().await;
    let session = Arc::new(Session::new());
    let api = companion_api(&base, session.clone());

    let login = companion::LoginView::new(api.clone(), session.clone());
    let user = login.submit("minh").await.unwrap().unwrap();
    assert_eq!(user.handle, "minh");
    assert_eq!(session.token().as_deref(), Some("tok-minh"));

    let dash = companion::DashboardView::new(api, session);
    dash.load().await.unwrap();
    let state = dash.state();
    assert!(!state.offline);
    assert_eq!(state.profile.unwrap().display_name, "Minh");
    assert_eq!(ids(&state.new_trip), vec!["9", "8"]);
}

#[tokio::test]
async fn companion_offline_dashboard_and_recommend() {
    let session = Arc::new(Session::new());
    let api = companion_api(UNREACHABLE, session.clone());

    companion::LoginView::new(api.clone(), session.clone())
        .submit("anyone")
        .await
        .unwrap();
    assert_eq!(session.token().as_deref(), Some("usera"));

    let dash = companion::DashboardView::new(api, session);
    dash.load().await.unwrap();
    let state = dash.state();
    assert!(state.offline);
    assert_eq!(state.tab, Tab::Visited);
    assert_eq!(ids(state.current()), vec!["1"]);

    dash.set_tab(Tab::NewTrip);
    assert_eq!(ids(dash.state().current()), vec!["1", "2"]);

    dash.recommend().await.unwrap();
    let state = dash.state();
    assert!(!state.recommending);
    assert_eq!(ids(state.current()), vec!["3"]);
}

#[tokio::test]
async fn companion_offline_place_detail_and_summary() {
    let session = Arc::new(Session::new());
    let api = companion_api(UNREACHABLE, session.clone());

    let detail = companion::PlaceDetailView::new(api.clone());
    detail.load("2").await.unwrap();
    let state = detail.state();
    assert_eq!(state.place.unwrap().name, "Hoi An Ancient Town");
    assert!(state.content.starts_with("# Hoi An"));
    assert_eq!(state.comments.len(), 2);
    assert_eq!(state.rating, None);

    let login = companion::LoginView::new(api, session);
    login.load_summary().await;
    let about = login.about();
    assert!(!about.loading);
    assert!(about.offline);
    assert!(about.content.contains("Smart Recommendations"));
}
