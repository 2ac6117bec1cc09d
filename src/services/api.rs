use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Serialize;
use tracing::debug;

use crate::clients::Transport;
use crate::credentials::Credentials;
use crate::envelope::Action;
use crate::error::{Error, Result};
use crate::request::{DeleteStyle, Request};

/// Where an entity lives and how its endpoints behave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub path: &'static str,
    pub delete: DeleteStyle,
    pub supports_view: bool,
}

impl Endpoint {
    pub const PRODUCTS: Endpoint = Endpoint {
        path: "products",
        delete: DeleteStyle::Filter("product_id"),
        supports_view: true,
    };
    pub const QUOTES: Endpoint = Endpoint {
        path: "quotes",
        delete: DeleteStyle::Filter("id"),
        supports_view: true,
    };
    pub const CONTACTS: Endpoint = Endpoint::by_id("contacts");
    pub const INVOICES: Endpoint = Endpoint::by_id("invoices");
    pub const PREPAYMENTS: Endpoint = Endpoint::by_id("prepayments");
    pub const ORDERS: Endpoint = Endpoint::by_id("orders");
    pub const RECEIPTS: Endpoint = Endpoint::by_id("receipts");
    pub const RELATIONS: Endpoint = Endpoint {
        path: "relations",
        delete: DeleteStyle::PathId,
        supports_view: false,
    };

    const fn by_id(path: &'static str) -> Self {
        Endpoint {
            path,
            delete: DeleteStyle::PathId,
            supports_view: true,
        }
    }
}

/// Typed view/list/modify/delete for one entity kind.
pub struct EntityApi<T> {
    endpoint: Endpoint,
    request: Request,
    transport: Arc<dyn Transport>,
    _entity: PhantomData<fn() -> T>,
}

impl<T> Clone for EntityApi<T> {
    fn clone(&self) -> Self {
        Self {
            endpoint: self.endpoint,
            request: self.request.clone(),
            transport: Arc::clone(&self.transport),
            _entity: PhantomData,
        }
    }
}

impl<T> fmt::Debug for EntityApi<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityApi")
            .field("endpoint", &self.endpoint)
            .field("request", &self.request)
            .finish_non_exhaustive()
    }
}

impl<T> EntityApi<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    pub fn new(endpoint: Endpoint, credentials: Credentials, transport: Arc<dyn Transport>) -> Self {
        Self {
            endpoint,
            request: Request::new(credentials, endpoint.path),
            transport,
            _entity: PhantomData,
        }
    }

    pub fn with_lang(self, lang: impl Into<String>) -> Self {
        Self {
            request: self.request.with_lang(lang),
            ..self
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    /// Underlying builder, for actions not wrapped here.
    pub fn request(&self) -> &Request {
        &self.request
    }

    pub async fn view(&self, id: &str) -> Result<T> {
        if !self.endpoint.supports_view {
            return Err(Error::Unsupported {
                entity: self.endpoint.path,
                action: Action::View.as_str(),
            });
        }

        debug!(entity = self.endpoint.path, id = id, "Viewing entity");

        let http_request = self.request.build_view(id)?;
        self.request
            .send(self.transport.as_ref(), http_request)
            .await?
            .ok_or(Error::MissingData)
    }

    /// Pass `&()` for no filter.
    pub async fn list<F>(&self, filter: &F, page: u32, per_page: u32) -> Result<Vec<T>>
    where
        F: Serialize + Sync,
    {
        debug!(
            entity = self.endpoint.path,
            page = page,
            per_page = per_page,
            "Listing entities"
        );

        let http_request = self.request.build_list(filter, page, per_page)?;
        let entities: Option<Vec<T>> = self
            .request
            .send(self.transport.as_ref(), http_request)
            .await?;

        Ok(entities.unwrap_or_default())
    }

    /// Creates the entity when it has no id, updates it otherwise.
    pub async fn modify(&self, entity: &T) -> Result<T> {
        debug!(entity = self.endpoint.path, "Modifying entity");

        let http_request = self.request.build_modify(entity)?;
        self.request
            .send(self.transport.as_ref(), http_request)
            .await?
            .ok_or(Error::MissingData)
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        debug!(entity = self.endpoint.path, id = id, "Deleting entity");

        let http_request = self
            .request
            .build_delete(&id.to_string(), self.endpoint.delete)?;
        self.request
            .send::<IgnoredAny>(self.transport.as_ref(), http_request)
            .await?;

        Ok(())
    }
}
