//! Geolocation boundary
//!
//! The session never talks to a positioning stack directly; it sees this
//! trait. Acquisition is wrapped in a fixed timeout with zero cache
//! tolerance, and every failure path degrades to "no location" — a query
//! always proceeds.

use crate::error::LocationError;
use async_trait::async_trait;
use std::time::Duration;
use vq_model::GeoPoint;

/// Source of device location fixes
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Produce a fresh fix; implementations must not serve cached positions
    async fn current(&self) -> Result<GeoPoint, LocationError>;
}

/// Acquire a coarsened location within `timeout`
///
/// Returns `None` on provider failure or timeout; coordinates are rounded
/// to 3 decimal places before they leave this function.
pub async fn acquire_location(
    provider: &dyn LocationProvider,
    timeout: Duration,
) -> Option<GeoPoint> {
    match tokio::time::timeout(timeout, provider.current()).await {
        Ok(Ok(point)) => Some(point.rounded()),
        Ok(Err(err)) => {
            tracing::warn!("location acquisition failed: {err}");
            None
        }
        Err(_) => {
            tracing::warn!("location acquisition timed out after {timeout:?}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedLocation(GeoPoint);

    #[async_trait]
    impl LocationProvider for FixedLocation {
        async fn current(&self) -> Result<GeoPoint, LocationError> {
            Ok(self.0)
        }
    }

    struct NeverResolves;

    #[async_trait]
    impl LocationProvider for NeverResolves {
        async fn current(&self) -> Result<GeoPoint, LocationError> {
            std::future::pending().await
        }
    }

    struct AlwaysFails;

    #[async_trait]
    impl LocationProvider for AlwaysFails {
        async fn current(&self) -> Result<GeoPoint, LocationError> {
            Err(LocationError::PermissionDenied)
        }
    }

    #[tokio::test]
    async fn fix_is_rounded_to_three_decimals() {
        let provider = FixedLocation(GeoPoint::new(40.712_776, -74.005_974));
        let point = acquire_location(&provider, Duration::from_secs(1))
            .await
            .unwrap();
        assert_eq!(point.latitude, 40.713);
        assert_eq!(point.longitude, -74.006);
    }

    #[tokio::test]
    async fn timeout_degrades_to_none() {
        let point = acquire_location(&NeverResolves, Duration::from_millis(10)).await;
        assert!(point.is_none());
    }

    #[tokio::test]
    async fn provider_failure_degrades_to_none() {
        let point = acquire_location(&AlwaysFails, Duration::from_secs(1)).await;
        assert!(point.is_none());
    }
}
