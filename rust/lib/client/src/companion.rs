//! Companion backend: token login, summary, AI recommendations and
//! per-place info/content/comments.
//!
//! Authenticated endpoints rely on the client's `TokenSource` for the
//! `Authorization: Bearer` header.

use std::sync::Arc;

use reqwest::Method;
use travel::{Comment, Content, LoginResponse, Place, User};

use crate::client::ApiClient;
use crate::endpoint::{Endpoint, Fetched};
use crate::error::FetchError;
use crate::fixtures::companion as fixtures;

/// `GET /summary`
pub struct Summary;

impl Endpoint for Summary {
    type Response = Content;

    fn method(&self) -> Method {
        Method::GET
    }

    fn segments(&self) -> Vec<String> {
        vec!["summary".into()]
    }

    fn fallback(&self) -> Option<Self::Response> {
        Some(fixtures::summary())
    }
}

/// `POST /login` with `{"username": ...}`.
///
/// Offline, every username logs in as the fixture user with its handle as
/// token.
pub struct Login {
    pub username: String,
}

impl Endpoint for Login {
    type Response = LoginResponse;

    fn method(&self) -> Method {
        Method::POST
    }

    fn segments(&self) -> Vec<String> {
        vec!["login".into()]
    }

    fn body(&self) -> Option<serde_json::Value> {
        Some(serde_json::json!({ "username": self.username }))
    }

    fn fallback(&self) -> Option<Self::Response> {
        let user = fixtures::user();
        let token = Some(user.handle.clone());
        Some(LoginResponse { user, token })
    }
}

/// `GET /user/profile`
pub struct Profile;

impl Endpoint for Profile {
    type Response = User;

    fn method(&self) -> Method {
        Method::GET
    }

    fn segments(&self) -> Vec<String> {
        vec!["user".into(), "profile".into()]
    }

    fn fallback(&self) -> Option<Self::Response> {
        Some(fixtures::user())
    }
}

/// `GET /user/visited-places`
pub struct VisitedPlaces;

impl Endpoint for VisitedPlaces {
    type Response = Vec<Place>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn segments(&self) -> Vec<String> {
        vec!["user".into(), "visited-places".into()]
    }

    fn fallback(&self) -> Option<Self::Response> {
        Some(fixtures::places().into_iter().take(1).collect())
    }
}

/// `GET /places`
pub struct ListPlaces;

impl Endpoint for ListPlaces {
    type Response = Vec<Place>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn segments(&self) -> Vec<String> {
        vec!["places".into()]
    }

    fn fallback(&self) -> Option<Self::Response> {
        Some(fixtures::places().into_iter().take(2).collect())
    }
}

/// `POST /ai/recommend`
pub struct AiRecommend;

impl Endpoint for AiRecommend {
    type Response = Vec<Place>;

    fn method(&self) -> Method {
        Method::POST
    }

    fn segments(&self) -> Vec<String> {
        vec!["ai".into(), "recommend".into()]
    }

    fn fallback(&self) -> Option<Self::Response> {
        Some(fixtures::places().into_iter().skip(2).take(1).collect())
    }
}

/// `GET /places/{id}/info`
pub struct PlaceInfo {
    pub id: String,
}

impl Endpoint for PlaceInfo {
    type Response = Place;

    fn method(&self) -> Method {
        Method::GET
    }

    fn segments(&self) -> Vec<String> {
        vec!["places".into(), self.id.clone(), "info".into()]
    }

    /// The matching fixture place, else the first one.
    fn fallback(&self) -> Option<Self::Response> {
        let mut places = fixtures::places();
        let idx = places.iter().position(|p| p.id == self.id).unwrap_or(0);
        Some(places.swap_remove(idx))
    }
}

/// `GET /places/{id}/content`
pub struct PlaceContent {
    pub id: String,
}

impl Endpoint for PlaceContent {
    type Response = Content;

    fn method(&self) -> Method {
        Method::GET
    }

    fn segments(&self) -> Vec<String> {
        vec!["places".into(), self.id.clone(), "content".into()]
    }

    /// The matching place's content, else the summary.
    fn fallback(&self) -> Option<Self::Response> {
        let content = fixtures::places()
            .into_iter()
            .find(|p| p.id == self.id)
            .map(|p| p.content)
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| fixtures::SUMMARY.to_string());
        Some(Content::new(content))
    }
}

/// `GET /places/{id}/comments`
///
/// Offline this returns every fixture comment regardless of `id`.
pub struct PlaceComments {
    pub id: String,
}

impl Endpoint for PlaceComments {
    type Response = Vec<Comment>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn segments(&self) -> Vec<String> {
        vec!["places".into(), self.id.clone(), "comments".into()]
    }

    fn fallback(&self) -> Option<Self::Response> {
        Some(fixtures::comments())
    }
}

/// `POST /places/search` with `{"query": ...}`. Not mocked.
pub struct SearchPlaces {
    pub query: String,
}

impl Endpoint for SearchPlaces {
    type Response = Vec<Place>;

    fn method(&self) -> Method {
        Method::POST
    }

    fn segments(&self) -> Vec<String> {
        vec!["places".into(), "search".into()]
    }

    fn body(&self) -> Option<serde_json::Value> {
        Some(serde_json::json!({ "query": self.query }))
    }

    fn fallback(&self) -> Option<Self::Response> {
        None
    }
}

// ── Service ─────────────────────────────────────────────────────────

/// Companion backend operations, each with fixture fallback.
#[derive(Clone)]
pub struct CompanionApi {
    client: Arc<ApiClient>,
}

impl CompanionApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn get_summary(&self) -> Result<Fetched<Content>, FetchError> {
        self.client.fetch_or_fallback(&Summary).await
    }

    /// Log in. The caller stores the returned token; this type holds no state.
    pub async fn login(&self, username: &str) -> Result<Fetched<LoginResponse>, FetchError> {
        self.client
            .fetch_or_fallback(&Login { username: username.to_string() })
            .await
    }

    pub async fn get_profile(&self) -> Result<Fetched<User>, FetchError> {
        self.client.fetch_or_fallback(&Profile).await
    }

    pub async fn get_visited_places(&self) -> Result<Fetched<Vec<Place>>, FetchError> {
        self.client.fetch_or_fallback(&VisitedPlaces).await
    }

    pub async fn get_places(&self) -> Result<Fetched<Vec<Place>>, FetchError> {
        self.client.fetch_or_fallback(&ListPlaces).await
    }

    pub async fn get_recommendations(&self) -> Result<Fetched<Vec<Place>>, FetchError> {
        self.client.fetch_or_fallback(&AiRecommend).await
    }

    pub async fn get_place_info(&self, id: &str) -> Result<Fetched<Place>, FetchError> {
        self.client.fetch_or_fallback(&PlaceInfo { id: id.to_string() }).await
    }

    pub async fn get_place_content(&self, id: &str) -> Result<Fetched<Content>, FetchError> {
        self.client.fetch_or_fallback(&PlaceContent { id: id.to_string() }).await
    }

    pub async fn get_place_comments(&self, id: &str) -> Result<Fetched<Vec<Comment>>, FetchError> {
        self.client.fetch_or_fallback(&PlaceComments { id: id.to_string() }).await
    }

    pub async fn search_places(&self, query: &str) -> Result<Fetched<Vec<Place>>, FetchError> {
        self.client
            .fetch_or_fallback(&SearchPlaces { query: query.to_string() })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(places: Vec<Place>) -> Vec<String> {
        places.into_iter().map(|p| p.id).collect()
    }

    #[test]
    fn list_shapes_differ_per_endpoint() {
        assert_eq!(ids(ListPlaces.fallback().unwrap()), vec!["1", "2"]);
        assert_eq!(ids(VisitedPlaces.fallback().unwrap()), vec!["1"]);
        assert_eq!(ids(AiRecommend.fallback().unwrap()), vec!["3"]);
    }

    #[test]
    fn place_info_falls_back_to_first_place() {
        assert_eq!(PlaceInfo { id: "2".into() }.fallback().unwrap().name, "Hoi An Ancient Town");
        assert_eq!(PlaceInfo { id: "99".into() }.fallback().unwrap().id, "1");
    }

    #[test]
    fn place_content_falls_back_to_summary() {
        let c = PlaceContent { id: "3".into() }.fallback().unwrap();
        assert!(c.content.starts_with("# Da Lat"));
        let c = PlaceContent { id: "99".into() }.fallback().unwrap();
        assert_eq!(c.content, fixtures::SUMMARY);
    }

    #[test]
    fn summary_text_is_kept_verbatim() {
        let c = Summary.fallback().unwrap();
        assert!(c.content.starts_with("\n# About TravelAI\n"));
        assert!(c.content.contains("discovering the world. \n\n## Features"));
        assert!(c.content.ends_with("*Start your journey today!*\n"));
    }

    #[test]
    fn place_comments_are_not_filtered_offline() {
        assert_eq!(PlaceComments { id: "3".into() }.fallback().unwrap().len(), 2);
    }

    #[test]
    fn login_fallback_uses_handle_as_token() {
        let r = Login { username: "someone".into() }.fallback().unwrap();
        assert_eq!(r.user.handle, "usera");
        assert_eq!(r.token.as_deref(), Some("usera"));
    }

    #[test]
    fn search_is_not_mocked() {
        assert!(SearchPlaces { query: "bay".into() }.fallback().is_none());
        assert_eq!(SearchPlaces { query: "bay".into() }.describe(), "POST /places/search");
    }

    #[test]
    fn request_bodies() {
        assert_eq!(
            Login { username: "usera".into() }.body().unwrap(),
            serde_json::json!({ "username": "usera" })
        );
        assert!(AiRecommend.body().is_none());
    }
}
