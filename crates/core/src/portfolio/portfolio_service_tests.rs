use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::errors::{Error, Result};
use crate::events::{MockStoreEventSink, NoOpStoreEventSink, StoreEvent};
use crate::portfolio::{
    seed_companies, CompanyStatus, KpiTicker, PortfolioCompany, PortfolioService,
    PortfolioServiceTrait, PortfolioSourceTrait,
};

fn seeded_service(sink: Arc<MockStoreEventSink>) -> PortfolioService {
    let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    PortfolioService::with_rng(seed_companies(today), StdRng::seed_from_u64(42), sink)
}

#[test]
fn seed_has_six_ascending_months() {
    let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let companies = seed_companies(today);
    assert_eq!(companies.len(), 2);
    for company in &companies {
        let dates: Vec<&str> = company.kpis.iter().map(|k| k.date.as_str()).collect();
        assert_eq!(
            dates,
            vec!["2023-10", "2023-11", "2023-12", "2024-01", "2024-02", "2024-03"]
        );
    }
    let values: Vec<f64> = companies[1].kpis.iter().map(|k| k.value).collect();
    assert_eq!(values, vec![15.0, 17.0, 19.0, 21.0, 23.0, 25.0]);
    assert_eq!(companies[1].status, CompanyStatus::Exited);
}

#[test]
fn ticks_preserve_shape_and_move_only_values() {
    let service = seeded_service(Arc::new(MockStoreEventSink::new()));
    let before = service.companies().unwrap();

    for _ in 0..200 {
        service.tick().unwrap();
    }

    let after = service.companies().unwrap();
    assert_eq!(before.len(), after.len());
    for (old, new) in before.iter().zip(&after) {
        assert_eq!(old.id, new.id);
        assert_eq!(old.name, new.name);
        assert_eq!(old.irr, new.irr);
        assert_eq!(old.mom, new.mom);
        assert_eq!(old.status, new.status);
        assert_eq!(old.kpis.len(), new.kpis.len());
        for (k_old, k_new) in old.kpis.iter().zip(&new.kpis) {
            assert_eq!(k_old.date, k_new.date);
        }
        assert!(new.revenue >= 0.0);
        for kpi in &new.kpis {
            assert_eq!((kpi.value * 100.0).round() / 100.0, kpi.value);
        }
    }
    assert_ne!(before, after);
}

#[test]
fn single_tick_moves_each_value_by_at_most_half() {
    let service = seeded_service(Arc::new(MockStoreEventSink::new()));
    let before = service.companies().unwrap();
    service.tick().unwrap();
    let after = service.companies().unwrap();

    for (old, new) in before.iter().zip(&after) {
        assert!((new.revenue - old.revenue).abs() <= 0.5 + 1e-9);
        for (k_old, k_new) in old.kpis.iter().zip(&new.kpis) {
            assert!((k_new.value - k_old.value).abs() <= 0.5 + 1e-9);
        }
    }
}

#[test]
fn revenue_never_goes_negative() {
    let mut company = seed_companies(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
        .remove(0);
    company.revenue = 0.0;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..100 {
        company.perturb(&mut rng);
        assert!(company.revenue >= 0.0);
    }
}

#[test]
fn selecting_unknown_company_is_allowed() {
    let sink = Arc::new(MockStoreEventSink::new());
    let service = seeded_service(sink.clone());

    service.select_company("c2").unwrap();
    assert_eq!(service.selected_company().unwrap().unwrap().name, "FinTechX");

    service.select_company("nope").unwrap();
    assert_eq!(service.state().unwrap().selected_company.as_deref(), Some("nope"));
    assert!(service.selected_company().unwrap().is_none());

    assert_eq!(
        sink.events(),
        vec![
            StoreEvent::CompanySelected { id: "c2".to_string() },
            StoreEvent::CompanySelected { id: "nope".to_string() },
        ]
    );
}

struct FixedSource(Vec<PortfolioCompany>);

#[async_trait]
impl PortfolioSourceTrait for FixedSource {
    async fn fetch_portfolio(&self) -> Result<Vec<PortfolioCompany>> {
        Ok(self.0.clone())
    }
}

struct BrokenSource;

#[async_trait]
impl PortfolioSourceTrait for BrokenSource {
    async fn fetch_portfolio(&self) -> Result<Vec<PortfolioCompany>> {
        Err(Error::Network("timed out".to_string()))
    }
}

#[tokio::test]
async fn load_replaces_companies() {
    let sink = Arc::new(MockStoreEventSink::new());
    let service = PortfolioService::new(Vec::new(), sink.clone());

    let companies = seed_companies(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    let count = service
        .load_from(&FixedSource(companies[..1].to_vec()))
        .await
        .unwrap();
    assert_eq!(count, 1);
    assert_eq!(service.companies().unwrap()[0].id, "c1");
    assert_eq!(sink.events(), vec![StoreEvent::PortfolioLoaded { count: 1 }]);

    assert!(service.load_from(&BrokenSource).await.is_err());
    assert_eq!(service.companies().unwrap().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn ticker_runs_until_stopped() {
    let sink = Arc::new(MockStoreEventSink::new());
    let service: Arc<dyn PortfolioServiceTrait> = Arc::new(seeded_service(sink.clone()));

    let handle = KpiTicker::start(service.clone(), Duration::from_secs(10));
    assert!(handle.is_running());

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(sink.len(), 0);

    tokio::time::sleep(Duration::from_secs(30)).await;
    assert_eq!(sink.len(), 3);

    handle.stop().await;
    tokio::time::sleep(Duration::from_secs(60)).await;
    assert_eq!(sink.len(), 3);
    assert!(sink
        .events()
        .iter()
        .all(|e| *e == StoreEvent::KpisTicked { companies: 2 }));
}

#[tokio::test(start_paused = true)]
async fn dropping_handle_stops_ticker() {
    let sink = Arc::new(MockStoreEventSink::new());
    let service: Arc<dyn PortfolioServiceTrait> = Arc::new(seeded_service(sink.clone()));

    let handle = KpiTicker::start(service, Duration::from_secs(1));
    tokio::time::sleep(Duration::from_millis(2500)).await;
    drop(handle);
    let seen = sink.len();
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(sink.len(), seen);
}

#[test]
fn default_store_starts_unselected() {
    let service = PortfolioService::with_seed(Arc::new(NoOpStoreEventSink));
    let state = service.state().unwrap();
    assert_eq!(state.companies.len(), 2);
    assert!(state.selected_company.is_none());
}
