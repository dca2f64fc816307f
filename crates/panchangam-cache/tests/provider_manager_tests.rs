//! Integration tests for the bounded ephemeris cache and fallback chain.

use std::sync::Arc;

use panchangam_cache::ProviderManager;
use panchangam_core::JulianDay;
use panchangam_ephemeris::{AnalyticProvider, StubProvider};

#[tokio::test]
async fn distinct_instants_each_compute_once_then_cache() {
    let stub = Arc::new(StubProvider::new(5.0, 15.0));
    let manager = ProviderManager::new(vec![stub.clone()], 1024);

    let a = JulianDay(2451545.0);
    let b = JulianDay(2451546.0);

    manager.positions(a).await.unwrap();
    manager.positions(b).await.unwrap();
    manager.positions(a).await.unwrap();
    manager.positions(b).await.unwrap();

    assert_eq!(stub.call_count(), 2);
}

#[tokio::test]
async fn analytic_provider_used_directly_when_alone() {
    let manager = ProviderManager::new(vec![Arc::new(AnalyticProvider::new(Default::default()))], 64);
    let (sample, cached) = manager.positions(JulianDay(2451545.0)).await.unwrap();
    assert!(!cached);
    assert!((0.0..360.0).contains(&sample.sun_longitude_deg));
}
