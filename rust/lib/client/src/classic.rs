//! Classic backend: user directory, catalogue, comments, recommendations.
//!
//! There is no login endpoint; "login" is a look-up in `/users`.

use std::sync::Arc;

use reqwest::Method;
use travel::{aggregate, Comment, Place, RatingMap, User, VisitedLink};

use crate::client::ApiClient;
use crate::endpoint::{Endpoint, Fetched};
use crate::error::FetchError;
use crate::fixtures::classic as fixtures;

/// `GET /users`
pub struct ListUsers;

impl Endpoint for ListUsers {
    type Response = Vec<User>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn segments(&self) -> Vec<String> {
        vec!["users".into()]
    }

    fn fallback(&self) -> Option<Self::Response> {
        Some(fixtures::users())
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
        Some(fixtures::places())
    }
}

/// `GET /user_place?user_id=`
pub struct ListUserPlaces {
    pub user_id: String,
}

impl Endpoint for ListUserPlaces {
    type Response = Vec<VisitedLink>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn segments(&self) -> Vec<String> {
        vec!["user_place".into()]
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        vec![("user_id", self.user_id.clone())]
    }

    fn fallback(&self) -> Option<Self::Response> {
        Some(
            fixtures::visited()
                .into_iter()
                .filter(|link| link.user_id == self.user_id)
                .collect(),
        )
    }
}

/// `GET /comments[?place_id=][&username=]`
#[derive(Default)]
pub struct ListComments {
    pub place_id: Option<String>,
    pub username: Option<String>,
}

impl ListComments {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_place(place_id: impl Into<String>) -> Self {
        Self { place_id: Some(place_id.into()), username: None }
    }

    pub fn by_user(username: impl Into<String>) -> Self {
        Self { place_id: None, username: Some(username.into()) }
    }
}

impl Endpoint for ListComments {
    type Response = Vec<Comment>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn segments(&self) -> Vec<String> {
        vec!["comments".into()]
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut q = Vec::new();
        if let Some(ref id) = self.place_id {
            q.push(("place_id", id.clone()));
        }
        if let Some(ref name) = self.username {
            q.push(("username", name.clone()));
        }
        q
    }

    fn fallback(&self) -> Option<Self::Response> {
        Some(
            fixtures::comments()
                .into_iter()
                .filter(|c| self.place_id.as_ref().map_or(true, |id| &c.place_id == id))
                .filter(|c| self.username.as_ref().map_or(true, |u| &c.author == u))
                .collect(),
        )
    }
}

/// `GET /recommendations?user_id=[&query=]`
///
/// Offline, the recommendation is "every fixture place the user has not
/// visited"; the query is ignored.
pub struct Recommendations {
    pub user_id: String,
    pub query: Option<String>,
}

impl Endpoint for Recommendations {
    type Response = Vec<Place>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn segments(&self) -> Vec<String> {
        vec!["recommendations".into()]
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        let mut q = vec![("user_id", self.user_id.clone())];
        if let Some(query) = self.query.as_deref().filter(|s| !s.is_empty()) {
            q.push(("query", query.to_string()));
        }
        q
    }

    fn fallback(&self) -> Option<Self::Response> {
        let visited: Vec<String> = fixtures::visited()
            .into_iter()
            .filter(|link| link.user_id == self.user_id)
            .map(|link| link.place_id)
            .collect();
        Some(
            fixtures::places()
                .into_iter()
                .filter(|p| !visited.contains(&p.id))
                .collect(),
        )
    }
}

// ── Service ─────────────────────────────────────────────────────────

/// Classic backend operations, each with fixture fallback.
#[derive(Clone)]
pub struct ClassicApi {
    client: Arc<ApiClient>,
}

impl ClassicApi {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn get_users(&self) -> Result<Fetched<Vec<User>>, FetchError> {
        self.client.fetch_or_fallback(&ListUsers).await
    }

    /// Find the user with this handle. `None` means "no such user".
    pub async fn login(&self, username: &str) -> Result<Fetched<Option<User>>, FetchError> {
        Ok(self
            .get_users()
            .await?
            .map(|users| users.into_iter().find(|u| u.handle == username)))
    }

    pub async fn get_places(&self) -> Result<Fetched<Vec<Place>>, FetchError> {
        self.client.fetch_or_fallback(&ListPlaces).await
    }

    /// Ids of the places this user has visited.
    pub async fn get_visited_place_ids(&self, user_id: &str) -> Result<Fetched<Vec<String>>, FetchError> {
        let links = self
            .client
            .fetch_or_fallback(&ListUserPlaces { user_id: user_id.to_string() })
            .await?;
        Ok(links.map(|ls| ls.into_iter().map(|l| l.place_id).collect()))
    }

    pub async fn get_recommendations(
        &self,
        user_id: &str,
        query: Option<&str>,
    ) -> Result<Fetched<Vec<Place>>, FetchError> {
        self.client
            .fetch_or_fallback(&Recommendations {
                user_id: user_id.to_string(),
                query: query.map(str::to_string),
            })
            .await
    }

    pub async fn get_comments_by_place(&self, place_id: &str) -> Result<Fetched<Vec<Comment>>, FetchError> {
        self.client.fetch_or_fallback(&ListComments::for_place(place_id)).await
    }

    pub async fn get_comments_by_user(&self, username: &str) -> Result<Fetched<Vec<Comment>>, FetchError> {
        self.client.fetch_or_fallback(&ListComments::by_user(username)).await
    }

    pub async fn get_all_comments(&self) -> Result<Fetched<Vec<Comment>>, FetchError> {
        self.client.fetch_or_fallback(&ListComments::all()).await
    }

    /// Place id → mean rating and count, computed from all comments.
    pub async fn get_place_ratings(&self) -> Result<Fetched<RatingMap>, FetchError> {
        Ok(self.get_all_comments().await?.map(|cs| aggregate(&cs)))
    }
}
