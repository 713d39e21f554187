//! Navigation gating.
//!
//! The UI asks for a route; [`resolve`] answers with the route actually
//! shown, given who is logged in. Redirects are followed until the answer
//! is stable.

use std::fmt;

use travel::User;
use travelai_client::Variant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    /// `/`: the landing page for the logged-in user.
    Home,
    Profile,
    Discovery,
    Place(String),
    /// The whole catalogue, open to every logged-in user.
    Places,
    /// Free-text place search (companion).
    Search,
    AdminUsers,
    AdminPlaces,
    Dashboard,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Login => f.write_str("/login"),
            Route::Home => f.write_str("/"),
            Route::Profile => f.write_str("/profile"),
            Route::Discovery => f.write_str("/discovery"),
            Route::Place(id) => write!(f, "/place/{}", id),
            Route::Places => f.write_str("/places"),
            Route::Search => f.write_str("/search"),
            Route::AdminUsers => f.write_str("/admin/users"),
            Route::AdminPlaces => f.write_str("/admin/places"),
            Route::Dashboard => f.write_str("/dashboard"),
        }
    }
}

/// One redirect step, or `None` when `route` can be shown as is.
fn step(variant: Variant, route: &Route, user: Option<&User>) -> Option<Route> {
    let admin = user.map_or(false, |u| u.is_admin());
    match (variant, route, user) {
        (_, Route::Login, None) => None,
        (_, Route::Login, Some(_)) => Some(Route::Home),
        (_, _, None) => Some(Route::Login),

        (Variant::Classic, Route::Home, Some(_)) if admin => Some(Route::AdminUsers),
        (Variant::Classic, Route::Home, Some(_)) => Some(Route::Profile),
        (Variant::Classic, Route::Profile | Route::Discovery, Some(_)) if admin => Some(Route::Login),
        (Variant::Classic, Route::AdminUsers | Route::AdminPlaces, Some(_)) if !admin => Some(Route::Login),
        (Variant::Classic, Route::Dashboard | Route::Search, Some(_)) => Some(Route::Home),

        (Variant::Companion, Route::Home, Some(_)) => Some(Route::Dashboard),
        (
            Variant::Companion,
            Route::Profile | Route::Discovery | Route::AdminUsers | Route::AdminPlaces,
            Some(_),
        ) => Some(Route::Dashboard),

        _ => None,
    }
}

/// The route shown when `requested` is asked for.
pub fn resolve(variant: Variant, requested: Route, user: Option<&User>) -> Route {
    let mut route = requested;
    // Every redirect chain above ends within four steps.
    for _ in 0..8 {
        match step(variant, &route, user) {
            Some(next) => route = next,
            None => break,
        }
    }
    route
}

#[cfg(test)]
mod tests {
    use super::*;
    use travel::Role;

    fn user(role: Option<Role>) -> User {
        User {
            id: "u".into(),
            handle: "h".into(),
            display_name: String::new(),
            avatar_url: String::new(),
            role,
        }
    }

    #[test]
    fn anonymous_goes_to_login() {
        for v in [Variant::Classic, Variant::Companion] {
            assert_eq!(resolve(v, Route::Home, None), Route::Login);
            assert_eq!(resolve(v, Route::Place("p1".into()), None), Route::Login);
            assert_eq!(resolve(v, Route::Login, None), Route::Login);
        }
    }

    #[test]
    fn classic_home_depends_on_role() {
        let admin = user(Some(Role::Admin));
        let plain = user(Some(Role::User));
        assert_eq!(resolve(Variant::Classic, Route::Home, Some(&admin)), Route::AdminUsers);
        assert_eq!(resolve(Variant::Classic, Route::Home, Some(&plain)), Route::Profile);
        assert_eq!(resolve(Variant::Classic, Route::Login, Some(&plain)), Route::Profile);
    }

    #[test]
    fn classic_pages_are_role_gated() {
        let admin = user(Some(Role::Admin));
        let plain = user(None);
        assert_eq!(resolve(Variant::Classic, Route::Discovery, Some(&admin)), Route::AdminUsers);
        assert_eq!(resolve(Variant::Classic, Route::AdminPlaces, Some(&plain)), Route::Profile);
        assert_eq!(resolve(Variant::Classic, Route::AdminPlaces, Some(&admin)), Route::AdminPlaces);
        assert_eq!(resolve(Variant::Classic, Route::Discovery, Some(&plain)), Route::Discovery);
        assert_eq!(
            resolve(Variant::Classic, Route::Place("p2".into()), Some(&admin)),
            Route::Place("p2".into())
        );
    }

    #[test]
    fn companion_has_dashboard_and_detail_only() {
        let u = user(None);
        assert_eq!(resolve(Variant::Companion, Route::Home, Some(&u)), Route::Dashboard);
        assert_eq!(resolve(Variant::Companion, Route::AdminUsers, Some(&u)), Route::Dashboard);
        assert_eq!(
            resolve(Variant::Companion, Route::Place("1".into()), Some(&u)),
            Route::Place("1".into())
        );
    }

    #[test]
    fn catalogue_and_search() {
        let admin = user(Some(Role::Admin));
        let plain = user(None);
        for v in [Variant::Classic, Variant::Companion] {
            assert_eq!(resolve(v, Route::Places, None), Route::Login);
            assert_eq!(resolve(v, Route::Places, Some(&plain)), Route::Places);
        }
        assert_eq!(resolve(Variant::Classic, Route::Places, Some(&admin)), Route::Places);
        assert_eq!(resolve(Variant::Classic, Route::Search, Some(&admin)), Route::AdminUsers);
        assert_eq!(resolve(Variant::Classic, Route::Search, Some(&plain)), Route::Profile);
        assert_eq!(resolve(Variant::Companion, Route::Search, Some(&plain)), Route::Search);
        assert_eq!(resolve(Variant::Companion, Route::Search, None), Route::Login);
    }

    #[test]
    fn display_paths() {
        assert_eq!(Route::Place("p1".into()).to_string(), "/place/p1");
        assert_eq!(Route::AdminUsers.to_string(), "/admin/users");
        assert_eq!(Route::Places.to_string(), "/places");
    }
}
