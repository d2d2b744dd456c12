//! Statistics - Aggregates over a hero collection
//!
//! Pure computation over whatever slice the caller selected. Averages of
//! an empty selection are defined as zero; nothing here divides by zero
//! or yields NaN.

use std::collections::{BTreeMap, HashMap};

use crate::model::hero::Hero;
use crate::model::job_class::JobClass;
use crate::model::region::{Region, RegionId};
use crate::model::round_to;

/// Number of heroes per job class
#[derive(Debug, Clone, PartialEq)]
pub struct ClassShare {
    pub job_class: JobClass,
    pub count: usize,
}

/// Number of heroes and their mean level per region
#[derive(Debug, Clone, PartialEq)]
pub struct RegionShare {
    pub region_name: String,
    pub count: usize,
    pub average_level: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeroStatistics {
    pub total_heroes: usize,
    /// Mean level, 2 decimals
    pub average_level: f64,
    pub total_gold: u64,
    pub total_xp: u64,
    /// Mean gold, 2 decimals
    pub average_gold: f64,
    /// Count descending, then class name ascending
    pub class_distribution: Vec<ClassShare>,
    /// Count descending, then region name ascending; heroes without a
    /// region are left out
    pub region_distribution: Vec<RegionShare>,
}

fn mean(sum: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        round_to(sum / count as f64, 2)
    }
}

impl HeroStatistics {
    /// Statistics of an empty selection
    pub fn empty() -> Self {
        Self::compute(&[], &[])
    }

    /// Aggregate `heroes`; `regions` resolves region names.
    ///
    /// A hero pointing at a region missing from `regions` is counted in the
    /// totals but not in the region breakdown.
    pub fn compute(heroes: &[Hero], regions: &[Region]) -> Self {
        let total_heroes = heroes.len();
        let level_sum: u64 = heroes.iter().map(|h| u64::from(h.level())).sum();
        let total_gold = heroes.iter().fold(0u64, |acc, h| acc.saturating_add(h.gold()));
        let total_xp = heroes.iter().fold(0u64, |acc, h| acc.saturating_add(h.xp()));

        Self {
            total_heroes,
            average_level: mean(level_sum as f64, total_heroes),
            total_gold,
            total_xp,
            average_gold: mean(total_gold as f64, total_heroes),
            class_distribution: class_distribution(heroes),
            region_distribution: region_distribution(heroes, regions),
        }
    }
}

fn class_distribution(heroes: &[Hero]) -> Vec<ClassShare> {
    let mut counts: BTreeMap<JobClass, usize> = BTreeMap::new();
    for hero in heroes {
        *counts.entry(hero.job_class()).or_default() += 1;
    }

    let mut shares: Vec<ClassShare> = counts
        .into_iter()
        .map(|(job_class, count)| ClassShare { job_class, count })
        .collect();
    shares.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.job_class.as_str().cmp(b.job_class.as_str()))
    });
    shares
}

fn region_distribution(heroes: &[Hero], regions: &[Region]) -> Vec<RegionShare> {
    let names: HashMap<RegionId, &str> = regions.iter().map(|r| (r.id(), r.name())).collect();

    // region -> (count, level sum)
    let mut groups: HashMap<RegionId, (usize, u64)> = HashMap::new();
    for hero in heroes {
        let Some(region) = hero.region() else {
            continue;
        };
        if !names.contains_key(&region) {
            continue;
        }
        let entry = groups.entry(region).or_insert((0, 0));
        entry.0 += 1;
        entry.1 += u64::from(hero.level());
    }

    let mut shares: Vec<RegionShare> = groups
        .into_iter()
        .filter_map(|(region, (count, level_sum))| {
            names.get(&region).map(|name| RegionShare {
                region_name: (*name).to_string(),
                count,
                average_level: mean(level_sum as f64, count),
            })
        })
        .collect();
    shares.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.region_name.cmp(&b.region_name))
    });
    shares
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::hero::HeroId;
    use chrono::Utc;

    fn hero(id: u64, class: JobClass, level: u32, gold: u64, xp: u64) -> Hero {
        Hero::new(HeroId::new(id), format!("hero-{id}"), Utc::now())
            .with_job_class(class)
            .with_level(level)
            .with_gold(gold)
            .with_xp(xp)
    }

    fn regions() -> Vec<Region> {
        vec![
            Region::new(RegionId::new(1), "Iron Mountains", "mountain"),
            Region::new(RegionId::new(2), "Ashen Desert", "desert"),
            Region::new(RegionId::new(3), "Sunken Isles", "island"),
        ]
    }

    #[test]
    fn test_empty_collection_is_all_zero() {
        let stats = HeroStatistics::empty();
        assert_eq!(stats.total_heroes, 0);
        assert_eq!(stats.average_level, 0.0);
        assert_eq!(stats.total_gold, 0);
        assert_eq!(stats.total_xp, 0);
        assert_eq!(stats.average_gold, 0.0);
        assert!(stats.class_distribution.is_empty());
        assert!(stats.region_distribution.is_empty());
        assert!(!stats.average_level.is_nan());
    }

    #[test]
    fn test_totals_and_rounded_means() {
        let heroes = vec![
            hero(1, JobClass::Mage, 10, 100, 1000),
            hero(2, JobClass::Mage, 11, 50, 2000),
            hero(3, JobClass::Rogue, 11, 0, 500),
        ];
        let stats = HeroStatistics::compute(&heroes, &regions());

        assert_eq!(stats.total_heroes, 3);
        assert_eq!(stats.average_level, 10.67);
        assert_eq!(stats.total_gold, 150);
        assert_eq!(stats.total_xp, 3500);
        assert_eq!(stats.average_gold, 50.0);
    }

    #[test]
    fn test_mean_ties_round_to_even() {
        let mut heroes: Vec<Hero> = (1..=8).map(|id| hero(id, JobClass::Mage, 1, 0, 0)).collect();
        heroes[0] = hero(1, JobClass::Mage, 1, 1, 0);
        let stats = HeroStatistics::compute(&heroes, &[]);
        assert_eq!(stats.average_gold, 0.12);
    }

    #[test]
    fn test_class_distribution_sums_to_total_and_breaks_ties_by_name() {
        let heroes = vec![
            hero(1, JobClass::Warrior, 1, 0, 0),
            hero(2, JobClass::Mage, 1, 0, 0),
            hero(3, JobClass::Warrior, 1, 0, 0),
            hero(4, JobClass::Archer, 1, 0, 0),
            hero(5, JobClass::Mage, 1, 0, 0),
            hero(6, JobClass::Cleric, 1, 0, 0),
        ];
        let stats = HeroStatistics::compute(&heroes, &[]);

        let classes: Vec<(JobClass, usize)> = stats
            .class_distribution
            .iter()
            .map(|s| (s.job_class, s.count))
            .collect();
        assert_eq!(
            classes,
            vec![
                (JobClass::Mage, 2),
                (JobClass::Warrior, 2),
                (JobClass::Archer, 1),
                (JobClass::Cleric, 1),
            ]
        );

        let sum: usize = stats.class_distribution.iter().map(|s| s.count).sum();
        assert_eq!(sum, stats.total_heroes);
    }

    #[test]
    fn test_region_distribution_excludes_heroes_without_region() {
        let heroes = vec![
            hero(1, JobClass::Mage, 10, 0, 0).with_region(RegionId::new(1)),
            hero(2, JobClass::Mage, 21, 0, 0).with_region(RegionId::new(1)),
            hero(3, JobClass::Rogue, 5, 0, 0).with_region(RegionId::new(2)),
            hero(4, JobClass::Rogue, 99, 0, 0),
        ];
        let stats = HeroStatistics::compute(&heroes, &regions());

        assert_eq!(
            stats.region_distribution,
            vec![
                RegionShare {
                    region_name: "Iron Mountains".to_string(),
                    count: 2,
                    average_level: 15.5,
                },
                RegionShare {
                    region_name: "Ashen Desert".to_string(),
                    count: 1,
                    average_level: 5.0,
                },
            ]
        );

        let sum: usize = stats.region_distribution.iter().map(|s| s.count).sum();
        assert!(sum <= stats.total_heroes);
        assert_eq!(sum, 3);
    }

    #[test]
    fn test_region_ties_ordered_by_name() {
        let heroes = vec![
            hero(1, JobClass::Mage, 10, 0, 0).with_region(RegionId::new(3)),
            hero(2, JobClass::Mage, 10, 0, 0).with_region(RegionId::new(2)),
        ];
        let stats = HeroStatistics::compute(&heroes, &regions());
        let names: Vec<&str> = stats
            .region_distribution
            .iter()
            .map(|s| s.region_name.as_str())
            .collect();
        assert_eq!(names, vec!["Ashen Desert", "Sunken Isles"]);
    }
}
