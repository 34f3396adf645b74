use crate::error::AppError;
use domain::value::{WeekKey, WineId};
use model::search_count::WineSearchCountRepository;
use std::sync::Arc;

pub struct SelectionService {
    repository: Arc<dyn WineSearchCountRepository>,
}

impl SelectionService {
    pub fn new(repository: Arc<dyn WineSearchCountRepository>) -> Self {
        Self { repository }
    }

    /// 记录一次选酒事件，计入当前周的计数桶
    pub async fn record(&self, wine_id: WineId) -> Result<(), AppError> {
        self.record_at(wine_id, WeekKey::current()).await
    }

    /// 记录到指定周键（当前周之外只在测试里用到）
    pub async fn record_at(&self, wine_id: WineId, week: WeekKey) -> Result<(), AppError> {
        self.repository.increment(&wine_id, &week).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::ModelError;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemorySearchCountRepository {
        counts: Mutex<HashMap<(i64, i32, u32), i64>>,
    }

    impl InMemorySearchCountRepository {
        fn count_for(&self, wine_id: i64, week: &WeekKey) -> Option<i64> {
            self.counts
                .lock()
                .unwrap()
                .get(&(wine_id, week.year, week.week_of_year))
                .copied()
        }

        fn row_count(&self) -> usize {
            self.counts.lock().unwrap().len()
        }
    }

    #[async_trait::async_trait]
    impl WineSearchCountRepository for InMemorySearchCountRepository {
        async fn increment(&self, wine_id: &WineId, week: &WeekKey) -> Result<(), ModelError> {
            let mut counts = self.counts.lock().unwrap();
            *counts
                .entry((wine_id.as_i64(), week.year, week.week_of_year))
                .or_insert(0) += 1;
            Ok(())
        }
    }

    fn week(year: i32, week_of_year: u32) -> WeekKey {
        WeekKey { year, week_of_year }
    }

    #[tokio::test]
    async fn test_repeated_selections_accumulate_within_a_week() {
        let repo = Arc::new(InMemorySearchCountRepository::default());
        let service = SelectionService::new(repo.clone());

        for _ in 0..3 {
            service.record_at(WineId::from(1), week(2026, 32)).await.unwrap();
        }

        assert_eq!(repo.count_for(1, &week(2026, 32)), Some(3));
        assert_eq!(repo.row_count(), 1);
    }

    #[tokio::test]
    async fn test_each_week_gets_its_own_row() {
        let repo = Arc::new(InMemorySearchCountRepository::default());
        let service = SelectionService::new(repo.clone());

        service.record_at(WineId::from(1), week(2026, 32)).await.unwrap();
        service.record_at(WineId::from(1), week(2026, 33)).await.unwrap();

        assert_eq!(repo.count_for(1, &week(2026, 32)), Some(1));
        assert_eq!(repo.count_for(1, &week(2026, 33)), Some(1));
        assert_eq!(repo.row_count(), 2);
    }

    #[tokio::test]
    async fn test_record_lands_in_the_current_week() {
        let repo = Arc::new(InMemorySearchCountRepository::default());
        let service = SelectionService::new(repo.clone());

        service.record(WineId::from(9)).await.unwrap();

        assert_eq!(repo.count_for(9, &WeekKey::current()), Some(1));
    }

    #[tokio::test]
    async fn test_concurrent_selections_are_not_lost() {
        let repo = Arc::new(InMemorySearchCountRepository::default());
        let service = Arc::new(SelectionService::new(repo.clone()));

        // 50 个并发 record，同一支酒同一周，计数不得丢失
        let mut handles = Vec::new();
        for _ in 0..50 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service.record_at(WineId::from(7), week(2026, 32)).await
            }));
        }
        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(repo.count_for(7, &week(2026, 32)), Some(50));
    }
}
