//! Runtime registry of OpenAPI fragments.
//!
//! The host application registers the documents of its APIs here as it
//! wires them up. The explorer rebuilds the merged description from the
//! current fragments on every `swagger.json` request, so APIs registered
//! or removed after the explorer is mounted show up immediately.

use crate::url::normalize_mount_path;
use std::collections::BTreeMap;
use std::sync::RwLock;
use utoipa::openapi::info::{Info, InfoBuilder};
use utoipa::openapi::server::Server;
use utoipa::openapi::{OpenApi, OpenApiBuilder};

/// Registry of named OpenAPI fragments contributed by the host application.
///
/// Shared behind an `Arc`: registration takes `&self` so the application
/// can keep registering and deregistering APIs while the explorer serves
/// requests.
pub struct ApiRegistry {
    info: Info,
    base_path: RwLock<String>,
    fragments: RwLock<BTreeMap<String, OpenApi>>,
}

impl ApiRegistry {
    /// Creates a registry describing an API with the given title and
    /// version. The REST API root defaults to `/api`.
    pub fn new(title: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            info: InfoBuilder::new().title(title).version(version).build(),
            base_path: RwLock::new("/api".to_string()),
            fragments: RwLock::new(BTreeMap::new()),
        }
    }

    /// Sets the description carried in the document's `info` section.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.info.description = Some(description.into());
        self
    }

    /// Sets the REST API root the described paths are served under.
    ///
    /// The path is normalized; in particular a trailing slash is stripped
    /// so that `server.url + path` never produces a double slash.
    pub fn set_base_path(&self, path: &str) {
        *self.base_path.write().expect("registry lock poisoned") = normalize_mount_path(path);
    }

    /// Registers `T`'s document under `path`, replacing any fragment
    /// previously registered there.
    pub fn register<T: utoipa::OpenApi>(&self, path: &str) {
        self.register_doc(path, T::openapi());
    }

    /// Registers an already-built document under `path`.
    pub fn register_doc(&self, path: &str, doc: OpenApi) {
        let path = normalize_mount_path(path);
        tracing::debug!(%path, "registering API fragment");
        self.fragments
            .write()
            .expect("registry lock poisoned")
            .insert(path, doc);
    }

    /// Removes the fragment at `path`. Descriptions built afterwards no
    /// longer contain its operations.
    pub fn deregister(&self, path: &str) {
        let path = normalize_mount_path(path);
        tracing::debug!(%path, "deregistering API fragment");
        self.fragments
            .write()
            .expect("registry lock poisoned")
            .remove(&path);
    }

    /// Builds the merged description from the current fragments.
    ///
    /// Building never mutates the registry, and fragments are merged in
    /// path order so the output is deterministic.
    pub fn build(&self) -> OpenApi {
        let mut doc = OpenApiBuilder::new().info(self.info.clone()).build();

        let base_path = self.base_path.read().expect("registry lock poisoned").clone();
        if base_path != "/" {
            doc.servers = Some(vec![Server::new(base_path)]);
        }

        let fragments = self.fragments.read().expect("registry lock poisoned");
        for (path, fragment) in fragments.iter() {
            doc = doc.nest(path.clone(), fragment.clone());
        }

        doc
    }
}
