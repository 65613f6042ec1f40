//! Reverse URL generation from named routes.
//!
//! [`Routes`] collects named [`RouteUrl`]s; [`Generator`] freezes them and
//! produces concrete URLs by substituting parameter values for the
//! placeholders of a route's path. Query and fragment are never substituted.

use std::collections::HashMap;
use std::sync::Arc;

use urlgen_core::logging::route_span;
use urlgen_core::{Settings, UrlGenError, UrlGenResult};

use super::pattern;
use super::reference::RouteUrl;

/// Parameter values keyed by placeholder name. Values are not encoded.
pub type Params = HashMap<String, String>;

/// A table of named routes.
///
/// # Examples
///
/// ```
/// use urlgen_routes::Routes;
///
/// let routes = Routes::new()
///     .route("home", "/")
///     .unwrap()
///     .route("user", "/users/:id")
///     .unwrap();
/// assert_eq!(routes.len(), 2);
/// assert_eq!(routes.get("user").unwrap().path(), "/users/:id");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Routes {
    routes: HashMap<String, RouteUrl>,
}

impl Routes {
    /// Creates an empty route table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses `url` and adds it under `name`, replacing any route of that name.
    ///
    /// # Errors
    ///
    /// Returns [`UrlGenError::InvalidRoute`] if `url` is not a valid URL reference.
    pub fn route(mut self, name: impl Into<String>, url: &str) -> UrlGenResult<Self> {
        let name = name.into();
        match RouteUrl::parse(url) {
            Ok(url) => {
                self.routes.insert(name, url);
                Ok(self)
            }
            Err(source) => Err(UrlGenError::InvalidRoute { name, source }),
        }
    }

    /// Adds an already parsed route, returning the one it replaces.
    pub fn insert(&mut self, name: impl Into<String>, url: RouteUrl) -> Option<RouteUrl> {
        self.routes.insert(name.into(), url)
    }

    /// Builds a route table from the `routes` section of the settings.
    ///
    /// # Errors
    ///
    /// Returns [`UrlGenError::InvalidRoute`] naming the first route that fails
    /// to parse.
    pub fn from_settings(settings: &Settings) -> UrlGenResult<Self> {
        settings
            .routes
            .iter()
            .try_fold(Self::new(), |routes, (name, url)| routes.route(name.as_str(), url))
    }

    /// Returns the route registered under `name`.
    pub fn get(&self, name: &str) -> Option<&RouteUrl> {
        self.routes.get(name)
    }

    /// Returns the number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if no route is registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Returns all route names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.routes.keys().cloned().collect();
        names.sort_unstable();
        names
    }
}

impl FromIterator<(String, RouteUrl)> for Routes {
    fn from_iter<I: IntoIterator<Item = (String, RouteUrl)>>(iter: I) -> Self {
        Self {
            routes: iter.into_iter().collect(),
        }
    }
}

impl Extend<(String, RouteUrl)> for Routes {
    fn extend<I: IntoIterator<Item = (String, RouteUrl)>>(&mut self, iter: I) {
        self.routes.extend(iter);
    }
}

/// Something that turns a route name and parameters into a URL.
///
/// Implemented by [`Generator`], and by references and smart pointers to any
/// implementation, so adapters can hold whichever form the caller has.
pub trait UrlGenerator: Send + Sync {
    /// Generates the URL for the route `name` with `params` substituted.
    fn url(&self, name: &str, params: &Params) -> UrlGenResult<RouteUrl>;
}

impl<G: UrlGenerator + ?Sized> UrlGenerator for &G {
    fn url(&self, name: &str, params: &Params) -> UrlGenResult<RouteUrl> {
        (**self).url(name, params)
    }
}

impl<G: UrlGenerator + ?Sized> UrlGenerator for Arc<G> {
    fn url(&self, name: &str, params: &Params) -> UrlGenResult<RouteUrl> {
        (**self).url(name, params)
    }
}

impl<G: UrlGenerator + ?Sized> UrlGenerator for Box<G> {
    fn url(&self, name: &str, params: &Params) -> UrlGenResult<RouteUrl> {
        (**self).url(name, params)
    }
}

/// The URL generator.
///
/// The route table is frozen at construction and shared between clones, so
/// a generator can be used from many threads without locking.
#[derive(Debug, Clone)]
pub struct Generator {
    routes: Arc<Routes>,
}

impl Generator {
    /// Creates a generator for `routes`.
    pub fn new(routes: Routes) -> Self {
        tracing::debug!(routes = routes.len(), "route generator ready");
        Self {
            routes: Arc::new(routes),
        }
    }

    /// Creates a generator from the `routes` section of the settings.
    ///
    /// # Errors
    ///
    /// Returns [`UrlGenError::InvalidRoute`] if a configured route does not parse.
    pub fn from_settings(settings: &Settings) -> UrlGenResult<Self> {
        Routes::from_settings(settings).map(Self::new)
    }

    /// Returns the route registered under `name`.
    pub fn route(&self, name: &str) -> Option<&RouteUrl> {
        self.routes.get(name)
    }

    /// Returns all route names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.routes.names()
    }

    /// Returns the placeholder names of the route `name`, one per occurrence.
    pub fn param_names(&self, name: &str) -> Option<Vec<&str>> {
        self.route(name).map(|url| pattern::param_names(url.path()))
    }

    /// Generates the URL for the route `name`.
    ///
    /// `params` must hold a value for every placeholder of the route path and
    /// nothing else. Parameter counting is per placeholder occurrence, so a
    /// path that repeats a name (`/:foo/:foo`) can never be satisfied by a map.
    ///
    /// # Errors
    ///
    /// - [`UrlGenError::UnknownRoute`] if no route is named `name`
    /// - [`UrlGenError::ArityMismatch`] if the number of parameters is wrong
    /// - [`UrlGenError::MissingParam`] if a placeholder has no value
    /// - [`UrlGenError::ReassemblyError`] if the result does not parse
    pub fn url(&self, name: &str, params: &Params) -> UrlGenResult<RouteUrl> {
        let span = route_span(name);
        let _guard = span.enter();

        let route = self
            .routes
            .get(name)
            .ok_or_else(|| UrlGenError::UnknownRoute {
                name: name.to_string(),
                known: self.names(),
            })?;

        let path = route.path();
        let names = pattern::param_names(path);

        let (wanted, got) = (names.len(), params.len());
        if wanted == 0 && got == 0 {
            tracing::trace!("static route");
            return Ok(route.clone());
        }
        if wanted != got {
            return Err(UrlGenError::ArityMismatch {
                route: name.to_string(),
                wanted,
                got,
            });
        }
        if let Some(missing) = names.iter().find(|param| !params.contains_key(**param)) {
            return Err(UrlGenError::MissingParam {
                route: name.to_string(),
                param: (*missing).to_string(),
            });
        }

        let raw = route.with_path(&pattern::substitute(path, params));
        match RouteUrl::parse(&raw) {
            Ok(url) => {
                tracing::trace!(url = %url, "generated");
                Ok(url)
            }
            Err(source) => Err(UrlGenError::ReassemblyError { url: raw, source }),
        }
    }
}

impl UrlGenerator for Generator {
    fn url(&self, name: &str, params: &Params) -> UrlGenResult<RouteUrl> {
        Self::url(self, name, params)
    }
}
