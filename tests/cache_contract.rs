//! Cross-policy behavioral contract for `BoundedCache`.
//!
//! Exercises every policy through the public facade: the capacity bound
//! under arbitrary operation sequences, each policy's characteristic
//! eviction behavior, refresh semantics, and snapshot ordering.

use citycache::cache::{BoundedCache, PolicyKind};
use citycache::entry::cache_key;
use citycache::policy::random::RandomPolicy;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

const ALL_POLICIES: [PolicyKind; 4] = [
    PolicyKind::Lru,
    PolicyKind::Lfu,
    PolicyKind::Fifo,
    PolicyKind::Random,
];

fn put_city(cache: &mut BoundedCache, country: &str, city: &str, population: f64) {
    cache.put(cache_key(country, city), city, country, population);
}

#[test]
fn capacity_bound_holds_under_random_workload() {
    for kind in ALL_POLICIES {
        let mut rng = SmallRng::seed_from_u64(42);
        let mut cache = BoundedCache::new(5, kind);

        for step in 0..1000 {
            let city = format!("City{}", rng.random_range(0..30u32));
            if rng.random::<f64>() < 0.6 {
                put_city(&mut cache, "XX", &city, step as f64);
            } else {
                cache.get(&cache_key("XX", &city));
            }
            assert!(cache.len() <= 5, "policy {kind} exceeded capacity");
        }

        assert_eq!(cache.len(), 5);
        let stats = cache.stats();
        assert_eq!(
            stats.insertions,
            stats.evictions + cache.len() as u64,
            "policy {kind}: entries must be inserted, evicted, or resident"
        );
    }
}

#[test]
fn refresh_never_changes_size_or_evicts() {
    for kind in ALL_POLICIES {
        let mut cache = BoundedCache::new(3, kind);
        put_city(&mut cache, "XX", "A", 1.0);
        put_city(&mut cache, "XX", "B", 2.0);
        put_city(&mut cache, "XX", "C", 3.0);

        for round in 0..10 {
            put_city(&mut cache, "XX", "B", 2.0 + round as f64);
            assert_eq!(cache.len(), 3, "policy {kind}");
        }

        assert!(cache.contains("xx|a"), "policy {kind}");
        assert!(cache.contains("xx|c"), "policy {kind}");
        assert_eq!(cache.get("xx|b"), Some(11.0), "policy {kind}");
        assert_eq!(cache.stats().evictions, 0, "policy {kind}");
        assert_eq!(cache.stats().refreshes, 10, "policy {kind}");
    }
}

#[test]
fn equivalent_case_variants_share_one_slot() {
    for kind in ALL_POLICIES {
        let mut cache = BoundedCache::new(4, kind);
        put_city(&mut cache, "JP", "Tokyo", 1.0);
        put_city(&mut cache, "jp", "TOKYO", 2.0);
        put_city(&mut cache, "Jp", "tokyo", 3.0);

        assert_eq!(cache.len(), 1, "policy {kind}");
        assert_eq!(cache.get("jp|tokyo"), Some(3.0), "policy {kind}");
    }
}

mod lru_behavior {
    use super::*;

    #[test]
    fn refresh_protects_against_eviction() {
        let mut cache = BoundedCache::new(2, PolicyKind::Lru);
        put_city(&mut cache, "XX", "A", 1.0);
        put_city(&mut cache, "XX", "B", 2.0);

        // Refreshing A makes B the least recently used.
        put_city(&mut cache, "XX", "A", 1.5);
        put_city(&mut cache, "XX", "C", 3.0);

        assert!(cache.contains("xx|a"));
        assert!(!cache.contains("xx|b"));
        assert!(cache.contains("xx|c"));
    }

    #[test]
    fn round_trip_snapshot_is_mru_first() {
        let mut cache = BoundedCache::new(2, PolicyKind::Lru);
        put_city(&mut cache, "XX", "A", 1.0);
        put_city(&mut cache, "XX", "B", 2.0);
        cache.get("xx|a");
        put_city(&mut cache, "XX", "C", 3.0); // evicts B

        let cities: Vec<_> = cache.snapshot().iter().map(|e| e.city.clone()).collect();
        assert_eq!(cities, vec!["C", "A"]);
    }
}

mod lfu_behavior {
    use super::*;

    #[test]
    fn frequency_minimum_picks_the_victim() {
        let mut cache = BoundedCache::new(3, PolicyKind::Lfu);
        put_city(&mut cache, "XX", "A", 1.0);
        put_city(&mut cache, "XX", "B", 2.0);
        put_city(&mut cache, "XX", "C", 3.0);

        cache.get("xx|a");
        cache.get("xx|a");
        cache.get("xx|b");

        // C is alone at frequency 1 and loses.
        put_city(&mut cache, "XX", "D", 4.0);
        assert!(!cache.contains("xx|c"));
        assert!(cache.contains("xx|a"));
        assert!(cache.contains("xx|b"));

        // The newcomer D is now the coldest and loses next.
        put_city(&mut cache, "XX", "E", 5.0);
        assert!(!cache.contains("xx|d"));
    }

    #[test]
    fn capacity_one_scenario() {
        let mut cache = BoundedCache::new(1, PolicyKind::Lfu);
        put_city(&mut cache, "XX", "A", 10.0);
        put_city(&mut cache, "XX", "B", 20.0);

        let snap = cache.snapshot();
        assert_eq!(snap.len(), 1);
        assert_eq!(snap[0].city, "B");
        assert_eq!(snap[0].population, 20.0);
        assert_eq!(snap[0].frequency, Some(1));
    }

    #[test]
    fn snapshot_is_frequency_descending() {
        let mut cache = BoundedCache::new(3, PolicyKind::Lfu);
        put_city(&mut cache, "XX", "A", 1.0);
        put_city(&mut cache, "XX", "B", 2.0);
        put_city(&mut cache, "XX", "C", 3.0);
        cache.get("xx|b");
        cache.get("xx|b");
        cache.get("xx|c");

        let order: Vec<_> = cache
            .snapshot()
            .iter()
            .map(|e| (e.city.clone(), e.frequency))
            .collect();
        assert_eq!(
            order,
            vec![
                ("B".to_string(), Some(3)),
                ("C".to_string(), Some(2)),
                ("A".to_string(), Some(1)),
            ]
        );
    }
}

mod fifo_behavior {
    use super::*;

    #[test]
    fn reads_never_affect_eviction_order() {
        let mut cache = BoundedCache::new(2, PolicyKind::Fifo);
        put_city(&mut cache, "XX", "A", 1.0);
        put_city(&mut cache, "XX", "B", 2.0);

        for _ in 0..100 {
            cache.get("xx|a");
        }
        put_city(&mut cache, "XX", "C", 3.0);

        // A arrived first, so A leaves first, reads notwithstanding.
        assert!(!cache.contains("xx|a"));
        assert!(cache.contains("xx|b"));
    }

    #[test]
    fn refresh_keeps_arrival_position() {
        let mut cache = BoundedCache::new(2, PolicyKind::Fifo);
        put_city(&mut cache, "XX", "A", 1.0);
        put_city(&mut cache, "XX", "B", 2.0);
        put_city(&mut cache, "XX", "A", 1.5);
        put_city(&mut cache, "XX", "C", 3.0);

        assert!(!cache.contains("xx|a"));
        assert!(cache.contains("xx|b"));
    }
}

mod random_behavior {
    use super::*;

    #[test]
    fn eviction_is_roughly_uniform_over_trials() {
        const TRIALS: u64 = 10_000;
        let mut victims = [0u32; 3];

        for trial in 0..TRIALS {
            let mut policy = RandomPolicy::with_seed(3, trial);
            policy.insert("a", ());
            policy.insert("b", ());
            policy.insert("c", ());
            policy.insert("d", ());

            for (slot, key) in ["a", "b", "c"].iter().enumerate() {
                if !policy.contains(key) {
                    victims[slot] += 1;
                }
            }
        }

        assert_eq!(victims.iter().sum::<u32>(), TRIALS as u32);
        for (slot, &count) in victims.iter().enumerate() {
            // Expected ~3333 per slot; allow a generous band.
            assert!(
                (2900..=3800).contains(&count),
                "victim slot {slot} chosen {count} times over {TRIALS} trials"
            );
        }
    }

    #[test]
    fn incoming_key_survives_its_own_insert() {
        for trial in 0..200u64 {
            let mut cache = BoundedCache::new(2, PolicyKind::Random);
            put_city(&mut cache, "XX", "A", 1.0);
            put_city(&mut cache, "XX", "B", 2.0);
            put_city(&mut cache, "XX", &format!("New{trial}"), 3.0);

            assert!(cache.contains(&cache_key("XX", &format!("New{trial}"))));
            assert_eq!(cache.len(), 2);
        }
    }
}

mod zero_capacity {
    use super::*;

    #[test]
    fn new_yields_a_noop_cache_for_every_policy() {
        for kind in ALL_POLICIES {
            let mut cache = BoundedCache::new(0, kind);
            put_city(&mut cache, "XX", "A", 1.0);

            assert!(cache.is_empty(), "policy {kind}");
            assert_eq!(cache.get("xx|a"), None, "policy {kind}");
            assert_eq!(cache.stats().insertions, 0, "policy {kind}");
        }
    }

    #[test]
    fn try_new_rejects_for_every_policy() {
        for kind in ALL_POLICIES {
            assert!(BoundedCache::try_new(0, kind).is_err(), "policy {kind}");
        }
    }
}
