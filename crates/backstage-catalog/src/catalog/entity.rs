//! Untyped entity operations addressed by UID, and the list query encoding.

use std::sync::Arc;

use reqwest::Method;
use url::form_urlencoded;

use crate::entity::Entity;
use crate::error::{CatalogError, CatalogResult};
use crate::response::ApiResponse;
use crate::transport::Transport;

/// Order entities in ascending order.
pub const ORDER_ASCENDING: &str = "asc";

/// Order entities in descending order.
pub const ORDER_DESCENDING: &str = "desc";

/// Sub-path of the entities endpoints, relative to the catalog path.
pub(crate) const ENTITIES_PATH: &str = "/entities";

/// An ordering clause for [`EntityService::list`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntityOrder {
    /// Either [`ORDER_ASCENDING`] or [`ORDER_DESCENDING`].
    pub direction: String,

    /// Dotted field path to order by, e.g. `metadata.name`.
    pub field: String,
}

impl ListEntityOrder {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            direction: ORDER_ASCENDING.into(),
            field: field.into(),
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            direction: ORDER_DESCENDING.into(),
            field: field.into(),
        }
    }

    /// Encode as the `direction:field` value of an `order` query parameter.
    pub fn encode(&self) -> CatalogResult<String> {
        if self.direction != ORDER_ASCENDING && self.direction != ORDER_DESCENDING {
            return Err(CatalogError::InvalidOrderDirection(self.direction.clone()));
        }
        Ok(format!("{}:{}", self.direction, self.field))
    }
}

/// Optional parameters of [`EntityService::list`].
///
/// Filters are passed to the server verbatim, one `filter` parameter each:
/// `kind=component`, `metadata.namespace=default`, or a bare `spec.owner`
/// to match on presence. How several filters combine is up to the server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListEntityOptions {
    pub filters: Vec<String>,

    /// Fields to project the reply onto, e.g. `metadata.name`.
    pub fields: Vec<String>,

    pub order: Vec<ListEntityOrder>,
}

impl ListEntityOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pre-encoded filter predicate.
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filters.push(filter.into());
        self
    }

    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    pub fn order_by(mut self, order: ListEntityOrder) -> Self {
        self.order.push(order);
        self
    }

    /// Encode the options as a URL query string (without the leading `?`).
    ///
    /// Fails on the first order clause with an unknown direction.
    pub fn to_query(&self) -> CatalogResult<String> {
        let mut query = form_urlencoded::Serializer::new(String::new());

        for filter in &self.filters {
            query.append_pair("filter", filter);
        }

        if !self.fields.is_empty() {
            query.append_pair("fields", &self.fields.join(","));
        }

        for order in &self.order {
            query.append_pair("order", &order.encode()?);
        }

        Ok(query.finish())
    }
}

/// Entity operations that do not need to know the kind up front.
#[derive(Debug, Clone)]
pub struct EntityService {
    transport: Arc<Transport>,
    api_path: String,
}

impl EntityService {
    pub(crate) fn new(transport: Arc<Transport>, catalog_path: &str) -> Self {
        Self {
            transport,
            api_path: format!("{catalog_path}{ENTITIES_PATH}"),
        }
    }

    /// List entities, optionally filtered, projected and ordered.
    pub async fn list(
        &self,
        options: Option<&ListEntityOptions>,
    ) -> CatalogResult<ApiResponse<Vec<Entity>>> {
        let query = match options {
            Some(options) => options.to_query()?,
            None => String::new(),
        };

        let path = if query.is_empty() {
            self.api_path.clone()
        } else {
            format!("{}?{}", self.api_path, query)
        };

        let request = self.transport.new_request::<()>(Method::GET, &path, None)?;
        self.transport.execute(request).await
    }

    /// Get a single entity by its UID.
    pub async fn get(&self, uid: &str) -> CatalogResult<ApiResponse<Entity>> {
        let path = self.by_uid_path(uid)?;
        let request = self.transport.new_request::<()>(Method::GET, &path, None)?;
        self.transport.execute(request).await
    }

    /// Delete an entity by its UID.
    ///
    /// The server only deletes orphaned entities; a refusal comes back as a
    /// non-2xx [`ApiResponse`].
    pub async fn delete(&self, uid: &str) -> CatalogResult<ApiResponse<()>> {
        let path = self.by_uid_path(uid)?;
        tracing::info!(uid, "Deleting catalog entity");
        let request = self.transport.new_request::<()>(Method::DELETE, &path, None)?;
        self.transport.execute_discard(request).await
    }

    fn by_uid_path(&self, uid: &str) -> CatalogResult<String> {
        if uid.is_empty() {
            return Err(CatalogError::EmptyArgument("uid"));
        }
        Ok(format!("{}/by-uid/{}", self.api_path, uid))
    }
}
