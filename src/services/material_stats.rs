use std::sync::Arc;
use tracing::{debug, instrument};

use crate::{
    db::DbPool,
    dto::{MaterialStats, MaterialStatsByType},
    errors::ServiceError,
    repositories::MaterialRepository,
};

/// Computes availability statistics on demand; nothing is cached or stored.
#[derive(Clone)]
pub struct MaterialStatsService {
    repository: MaterialRepository,
}

impl MaterialStatsService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self {
            repository: MaterialRepository::new(db_pool),
        }
    }

    #[instrument(skip(self))]
    pub async fn compute_stats(&self) -> Result<MaterialStats, ServiceError> {
        let by_type = self.repository.aggregate_stats().await?;
        let stats = fold_stats(by_type);
        debug!(
            types = stats.by_type.len(),
            available_total = stats.available_total,
            "computed material stats"
        );
        Ok(stats)
    }
}

/// Keeps the per-type order and sums the available counts.
pub fn fold_stats(by_type: Vec<MaterialStatsByType>) -> MaterialStats {
    let available_total = by_type.iter().map(|row| row.available_count).sum();
    MaterialStats {
        by_type,
        available_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, total: i64, available: i64) -> MaterialStatsByType {
        MaterialStatsByType {
            material_type_id: id,
            material_type_name: format!("type-{}", id),
            total_count: total,
            available_count: available,
        }
    }

    #[test]
    fn available_total_is_sum_of_rows() {
        let stats = fold_stats(vec![row(1, 2, 1), row(2, 0, 0), row(3, 5, 4)]);
        assert_eq!(stats.available_total, 5);
        assert_eq!(
            stats.by_type.iter().map(|r| r.material_type_id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[test]
    fn empty_aggregation_gives_zero_total() {
        assert_eq!(fold_stats(Vec::new()), MaterialStats::default());
    }
}
