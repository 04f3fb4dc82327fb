use rand::rngs::SmallRng;
use rand::seq::index;

use crate::model::WasteItem;

/// Sample up to `count` distinct items from the pool, without replacement.
///
/// The returned order is the play order (already shuffled). A pool smaller
/// than `count` yields a short level with whatever is available (no padding,
/// no error); the minimum viable pool is a single item.
pub fn sample_level_items(
    pool: &[WasteItem],
    count: usize,
    rng: &mut SmallRng,
) -> Vec<WasteItem> {
    let amount = count.min(pool.len());
    index::sample(rng, pool.len(), amount)
        .into_iter()
        .map(|i| pool[i].clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;

    use super::*;
    use crate::model::{BinId, LocalizedText};

    fn pool(n: u64) -> Vec<WasteItem> {
        (1..=n)
            .map(|id| {
                WasteItem::new(
                    id,
                    LocalizedText::new(format!("item {id}"), format!("Ding {id}")),
                    LocalizedText::new("", ""),
                    BinId::Residual,
                )
            })
            .collect()
    }

    #[test]
    fn samples_are_distinct() {
        let mut rng = SmallRng::seed_from_u64(7);
        let items = sample_level_items(&pool(20), 5, &mut rng);
        assert_eq!(items.len(), 5);
        let mut ids: Vec<u64> = items.iter().map(|i| i.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn short_pool_yields_short_level() {
        let mut rng = SmallRng::seed_from_u64(7);
        assert_eq!(sample_level_items(&pool(3), 5, &mut rng).len(), 3);
        assert_eq!(sample_level_items(&pool(1), 5, &mut rng).len(), 1);
        assert!(sample_level_items(&[], 5, &mut rng).is_empty());
    }

    #[test]
    fn same_seed_same_sequence() {
        let source = pool(50);
        let a = sample_level_items(&source, 5, &mut SmallRng::seed_from_u64(42));
        let b = sample_level_items(&source, 5, &mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
