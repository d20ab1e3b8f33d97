//! Optional Prometheus request metrics.
//!
//! [`MetricsLayer`] type-erases the middleware so the app has the same type
//! with or without a registry attached.

use actix_service::{
    Service, ServiceExt as _, Transform,
    boxed::{self, BoxService},
};
use actix_web::body::BoxBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Compat;
use actix_web_prom::{PrometheusMetrics, PrometheusMetricsBuilder};
use futures_util::future::LocalBoxFuture;
use std::sync::Arc;

const METRICS_NAMESPACE: &str = "blog_api";
const METRICS_ENDPOINT: &str = "/metrics";

/// Build the request metrics middleware serving `/metrics`.
///
/// # Errors
/// Returns an [`std::io::Error`] when the collectors cannot be registered.
pub fn build_prometheus() -> std::io::Result<PrometheusMetrics> {
    PrometheusMetricsBuilder::new(METRICS_NAMESPACE)
        .endpoint(METRICS_ENDPOINT)
        .build()
        .map_err(|err| std::io::Error::other(format!("configure Prometheus metrics: {err}")))
}

#[derive(Clone)]
pub(crate) enum MetricsLayer {
    Enabled(Arc<PrometheusMetrics>),
    Disabled,
}

impl MetricsLayer {
    #[must_use]
    pub(crate) fn from_option(metrics: Option<PrometheusMetrics>) -> Self {
        metrics.map_or(Self::Disabled, |metrics| Self::Enabled(Arc::new(metrics)))
    }
}

impl<S, B> Transform<S, ServiceRequest> for MetricsLayer
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    B: actix_web::body::MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = BoxService<ServiceRequest, ServiceResponse<BoxBody>, actix_web::Error>;
    type Future = LocalBoxFuture<'static, Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        let Self::Enabled(metrics) = self.clone() else {
            let svc = service.map(|res: ServiceResponse<B>| res.map_into_boxed_body());
            return Box::pin(async move { Ok(boxed::service(svc)) });
        };
        let fut = Compat::new((*metrics).clone()).new_transform(service);
        Box::pin(async move { Ok(boxed::service(fut.await?)) })
    }
}
