//! Request-scoped storage.
//!
//! Handlers take a [`Storage`] argument to get a [`BookingStore`] bound to one
//! pooled connection. The connection goes back to the pool when the extractor
//! is dropped at the end of the request, on success and error paths alike.

use std::{
    ops::{Deref, DerefMut},
    sync::Arc,
};

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use roombooker_core::{errors::BookingError, store::BookingStore};
use tracing::debug;

use crate::{middleware::error_handling::AppError, ApiState};

pub struct Storage(pub Box<dyn BookingStore>);

#[async_trait]
impl FromRequestParts<Arc<ApiState>> for Storage {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        debug!("Acquiring storage for {} {}", parts.method, parts.uri.path());

        let store = state
            .storage
            .acquire()
            .await
            .map_err(BookingError::Database)?;

        Ok(Storage(store))
    }
}

impl Deref for Storage {
    type Target = dyn BookingStore;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl DerefMut for Storage {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.0.as_mut()
    }
}
