use std::sync::Arc;

use crate::clients::{HttpClient, Transport};
use crate::config::Settings;
use crate::credentials::Credentials;
use crate::error::Result;
use crate::models::{Contact, Invoice, Order, Prepayment, Product, Quote, Receipt, Relation};
use crate::services::api::{Endpoint, EntityApi};
use crate::types::DEFAULT_LANG;

/// Entry point: one set of credentials, one transport, a service per entity.
#[derive(Clone)]
pub struct Scoro {
    credentials: Credentials,
    lang: String,
    transport: Arc<dyn Transport>,
}

impl Scoro {
    pub fn new(credentials: Credentials, transport: Arc<dyn Transport>) -> Self {
        Self {
            credentials,
            lang: DEFAULT_LANG.to_string(),
            transport,
        }
    }

    /// Credentials, language and headers from [`Settings`], sent over [`HttpClient`].
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let transport = Arc::new(HttpClient::new(settings)?);
        Ok(Self::new(settings.scoro.credentials(), transport).with_lang(&settings.scoro.lang))
    }

    pub fn with_lang(self, lang: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            ..self
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn entity<T>(&self, endpoint: Endpoint) -> EntityApi<T>
    where
        T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync,
    {
        EntityApi::new(endpoint, self.credentials.clone(), Arc::clone(&self.transport))
            .with_lang(self.lang.clone())
    }

    pub fn products(&self) -> EntityApi<Product> {
        self.entity(Endpoint::PRODUCTS)
    }

    pub fn contacts(&self) -> EntityApi<Contact> {
        self.entity(Endpoint::CONTACTS)
    }

    pub fn invoices(&self) -> EntityApi<Invoice> {
        self.entity(Endpoint::INVOICES)
    }

    pub fn prepayments(&self) -> EntityApi<Prepayment> {
        self.entity(Endpoint::PREPAYMENTS)
    }

    pub fn orders(&self) -> EntityApi<Order> {
        self.entity(Endpoint::ORDERS)
    }

    pub fn quotes(&self) -> EntityApi<Quote> {
        self.entity(Endpoint::QUOTES)
    }

    pub fn receipts(&self) -> EntityApi<Receipt> {
        self.entity(Endpoint::RECEIPTS)
    }

    pub fn relations(&self) -> EntityApi<Relation> {
        self.entity(Endpoint::RELATIONS)
    }
}
