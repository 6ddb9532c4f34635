use crate::fields::types::{DynamicFieldPage, DynamicFieldsRequest};
use async_trait::async_trait;
use std::sync::Arc;

/// Transport capability that serves one page of a parent's dynamic fields.
///
/// Implementations own retries and backoff. Errors are handed back to the
/// caller of the collector unchanged, so `Error` is whatever the transport
/// naturally produces.
#[async_trait]
pub trait DynamicFieldSource: Send + Sync {
    type Error: Send;

    async fn list_dynamic_fields(
        &self,
        request: DynamicFieldsRequest,
    ) -> Result<DynamicFieldPage, Self::Error>;
}

#[async_trait]
impl<S> DynamicFieldSource for &S
where
    S: DynamicFieldSource + ?Sized,
{
    type Error = S::Error;

    async fn list_dynamic_fields(
        &self,
        request: DynamicFieldsRequest,
    ) -> Result<DynamicFieldPage, Self::Error> {
        (**self).list_dynamic_fields(request).await
    }
}

#[async_trait]
impl<S> DynamicFieldSource for Arc<S>
where
    S: DynamicFieldSource + ?Sized,
{
    type Error = S::Error;

    async fn list_dynamic_fields(
        &self,
        request: DynamicFieldsRequest,
    ) -> Result<DynamicFieldPage, Self::Error> {
        (**self).list_dynamic_fields(request).await
    }
}
