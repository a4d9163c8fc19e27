//! Holiday sources and the per-(country, year) fetch cache.
//!
//! Official holidays come from an external collaborator implementing
//! [`HolidaySource`]. The grid builder never calls it directly: it goes through a
//! [`HolidayCache`], which shares one fetch per (country, year) between all
//! regions of a country and between concurrent callers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use tokio::sync::OnceCell;

use crate::error::{HoliplanError, HoliplanResult};
use crate::holiday::Holiday;

/// Something that can list the official holidays of a country for a year.
#[async_trait]
pub trait HolidaySource: Send + Sync {
    async fn fetch_holidays(&self, country_code: &str, year: i32) -> HoliplanResult<Vec<Holiday>>;
}

/// A fixed, in-memory holiday table. Unknown (country, year) pairs are an error.
#[derive(Debug, Clone, Default)]
pub struct StaticHolidaySource {
    holidays: HashMap<(String, i32), Vec<Holiday>>,
}

impl StaticHolidaySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_holidays(mut self, country_code: &str, year: i32, holidays: Vec<Holiday>) -> Self {
        self.holidays
            .insert((country_code.to_ascii_uppercase(), year), holidays);
        self
    }
}

#[async_trait]
impl HolidaySource for StaticHolidaySource {
    async fn fetch_holidays(&self, country_code: &str, year: i32) -> HoliplanResult<Vec<Holiday>> {
        self.holidays
            .get(&(country_code.to_ascii_uppercase(), year))
            .cloned()
            .ok_or_else(|| HoliplanError::HolidayFetch {
                country: country_code.to_string(),
                year,
                reason: "no holiday data".to_string(),
            })
    }
}

type CacheKey = (String, i32);
type CacheSlot = Arc<OnceCell<Arc<Vec<Holiday>>>>;

/// Fetch-coalescing holiday cache keyed by (country code, year).
///
/// Successful results are kept for the lifetime of the cache. Failures are
/// logged, reported as an empty list and not cached, so the next call retries.
pub struct HolidayCache {
    source: Arc<dyn HolidaySource>,
    slots: Mutex<HashMap<CacheKey, CacheSlot>>,
}

impl HolidayCache {
    pub fn new(source: Arc<dyn HolidaySource>) -> Self {
        HolidayCache {
            source,
            slots: Mutex::new(HashMap::new()),
        }
    }

    fn slot(&self, country_code: &str, year: i32) -> CacheSlot {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots
            .entry((country_code.to_ascii_uppercase(), year))
            .or_default()
            .clone()
    }

    /// Holidays of `country_code` in `year`; empty if the source failed.
    pub async fn holidays(&self, country_code: &str, year: i32) -> Arc<Vec<Holiday>> {
        let slot = self.slot(country_code, year);

        if let Some(holidays) = slot.get() {
            tracing::debug!(country = country_code, year, "holiday cache hit");
            return Arc::clone(holidays);
        }

        let result = slot
            .get_or_try_init(|| async {
                tracing::debug!(country = country_code, year, "fetching holidays");
                self.source
                    .fetch_holidays(country_code, year)
                    .await
                    .map(Arc::new)
            })
            .await;

        match result {
            Ok(holidays) => Arc::clone(holidays),
            Err(e) => {
                tracing::warn!(country = country_code, year, "{e}");
                Arc::new(Vec::new())
            }
        }
    }

    /// Whether a successful result for (country, year) is stored.
    pub fn is_cached(&self, country_code: &str, year: i32) -> bool {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots
            .get(&(country_code.to_ascii_uppercase(), year))
            .is_some_and(|slot| slot.initialized())
    }

    /// Number of stored (country, year) results.
    pub fn len(&self) -> usize {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots.values().filter(|slot| slot.initialized()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Counts fetches and answers slowly so concurrent callers overlap.
    struct CountingSource {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingSource {
        fn new(fail: bool) -> Self {
            CountingSource {
                calls: AtomicUsize::new(0),
                fail,
            }
        }
    }

    #[async_trait]
    impl HolidaySource for CountingSource {
        async fn fetch_holidays(&self, country_code: &str, year: i32) -> HoliplanResult<Vec<Holiday>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(Duration::from_millis(20)).await;

            if self.fail {
                return Err(HoliplanError::HolidayFetch {
                    country: country_code.to_string(),
                    year,
                    reason: "status 500".to_string(),
                });
            }

            Ok(vec![Holiday::official(
                NaiveDate::from_ymd_opt(year, 1, 1).unwrap(),
                "New Year's Day",
                "New Year's Day",
                country_code,
                None,
            )])
        }
    }

    #[tokio::test]
    async fn test_concurrent_requests_share_one_fetch() {
        let source = Arc::new(CountingSource::new(false));
        let cache = HolidayCache::new(source.clone());

        let (a, b, c) = tokio::join!(
            cache.holidays("DE", 2026),
            cache.holidays("DE", 2026),
            cache.holidays("de", 2026),
        );

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(a.len(), 1);
        assert!(Arc::ptr_eq(&a, &b));
        assert!(Arc::ptr_eq(&a, &c));
        assert!(cache.is_cached("DE", 2026));
    }

    #[tokio::test]
    async fn test_years_are_cached_separately() {
        let source = Arc::new(CountingSource::new(false));
        let cache = HolidayCache::new(source.clone());

        cache.holidays("FR", 2026).await;
        cache.holidays("FR", 2027).await;
        cache.holidays("FR", 2026).await;

        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
        assert_eq!(cache.len(), 2);
    }

    #[tokio::test]
    async fn test_failures_degrade_to_empty_and_are_retried() {
        let source = Arc::new(CountingSource::new(true));
        let cache = HolidayCache::new(source.clone());

        assert!(cache.holidays("CY", 2026).await.is_empty());
        assert!(!cache.is_cached("CY", 2026));
        assert!(cache.is_empty());

        assert!(cache.holidays("CY", 2026).await.is_empty());
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_static_source() {
        let date = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
        let source = StaticHolidaySource::new().with_holidays(
            "pl",
            2026,
            vec![Holiday::official(date, "Labour Day", "Święto Pracy", "PL", None)],
        );

        assert_eq!(source.fetch_holidays("PL", 2026).await.unwrap().len(), 1);
        assert!(source.fetch_holidays("PL", 2025).await.is_err());
    }
}
