//! Dataset Generator
//!
//! Fills a store with a fixed set of regions and skills plus any number
//! of random heroes. Levels skew low:
//!
//! ```text
//! 1-20  ██████████ 50%
//! 21-50 ██████     30%
//! 51-70 ███        15%
//! 71-99 █           5%
//! ```
//!
//! Seeded generators are reproducible.

use chrono::Utc;
use rand::prelude::*;
use rand::rngs::StdRng;
use thiserror::Error;
use tracing::{debug, info};

use atlas_domain::{DamageType, Hero, HeroId, JobClass, Region, RepositoryError, Skill};

use super::Repositories;

pub const MIN_HEROES: usize = 1;
pub const MAX_HEROES: usize = 10_000;

/// Nickname draws allowed per requested hero before giving up
const ATTEMPTS_PER_HERO: usize = 3;
/// Share of generated heroes that are inactive
const INACTIVE_RATE: f64 = 0.15;
const MAX_SKILLS_PER_HERO: usize = 5;

const REGION_DATA: &[(&str, &str)] = &[
    ("Kingdom of Eldoria", "forest"),
    ("Iron Mountains", "mountain"),
    ("Storm Coast", "coastal"),
    ("Red Sand Desert", "desert"),
    ("Frozen Northlands", "snowy"),
    ("Vale of Shadows", "swamp"),
    ("Plains of Dawn", "plains"),
    ("Mystic Forest", "forest"),
    ("Black Fire Volcano", "volcanic"),
    ("Lost Isles", "island"),
    ("Floating City", "sky"),
    ("Deep Abyss", "underwater"),
];

const SKILL_DATA: &[(&str, DamageType, u32)] = &[
    ("Power Strike", DamageType::Physical, 10),
    ("Fireball", DamageType::Magical, 25),
    ("Precise Shot", DamageType::Physical, 15),
    ("Assassinate", DamageType::Physical, 30),
    ("Sacred Shield", DamageType::Healing, 20),
    ("Greater Heal", DamageType::Healing, 15),
    ("Curse", DamageType::Magical, 35),
    ("War Cry", DamageType::Physical, 20),
    ("Lightning", DamageType::Magical, 30),
    ("Deadly Poison", DamageType::Mixed, 25),
    ("Blizzard", DamageType::Magical, 28),
    ("Divine Prayer", DamageType::Healing, 10),
    ("Wolf Hunger", DamageType::Physical, 22),
    ("Dark Tentacles", DamageType::Magical, 40),
    ("Holy Mace", DamageType::Physical, 45),
    ("Life Drain", DamageType::Mixed, 35),
    ("Teleport", DamageType::Magical, 50),
    ("Regeneration", DamageType::Healing, 30),
    ("Elemental Strike", DamageType::Mixed, 20),
    ("Summoning", DamageType::Magical, 60),
];

const FIRST_NAMES: &[&str] = &[
    "Aria", "Borin", "Celes", "Dorn", "Elara", "Fenn", "Gwen", "Hale", "Isolde", "Jarek",
    "Kira", "Lucan", "Mira", "Nolan", "Orla", "Piers", "Quinn", "Rowan", "Selene", "Tamsin",
];

const LAST_NAMES: &[&str] = &[
    "Ashdown", "Blackwood", "Crane", "Dunmore", "Everhart", "Fairweather", "Greaves",
    "Holloway", "Ironside", "Kestrel", "Larkin", "Mercer", "Northcott", "Ravenscroft",
    "Thorne",
];

const HANDLES: &[&str] = &[
    "nightowl", "pixelblade", "grimreaper", "lootgoblin", "critmaster", "manaburn",
    "tankyboi", "questlog", "aggroking", "speedrun",
];

const TITLE_PREFIXES: &[&str] = &["Dark", "Shadow", "Light", "Fire", "Ice", "Storm"];
const EPITHETS: &[&str] = &["Great", "Brave", "Wise", "Swift"];

const BIO_TEMPLATES: &[&str] = &[
    "Born in {origin}, {nickname} left home after a tragedy took everything. Since then, they roam the world seeking revenge and glory.",
    "{nickname} is a legendary hero whose deeds are sung in every tavern of the realm. Some say they slew the black dragon alone.",
    "Raised by warrior monks, {nickname} learned to fight before learning to read. Their wisdom and strength make them a precious ally.",
    "A former mercenary, {nickname} left a troubled past behind and now seeks redemption by protecting the weak.",
    "{nickname} was born under a red moon, which granted them strange powers. Villagers fear them, monsters fear them more.",
    "A knight without a lord, {nickname} wanders in search of honor and worthy opponents.",
    "Exiled from their tower for forbidden experiments, {nickname} travels the wilds looking for lost knowledge.",
    "{nickname} served in the royal guard until they uncovered the rot at court, and fled before the pyre was lit.",
    "Born in the deep mines, {nickname} forged their own destiny with hammer and sword.",
    "{nickname} is a fearless bounty hunter. Current target: the dark lord terrorizing {origin}.",
    "An orphan raised on the streets, {nickname} survives by wit and speed. Nobody has ever caught them.",
    "Heir to a fallen line of kings, {nickname} carries the burden of restoring their ancestors' glory.",
    "{nickname} took a vow of silence years ago and lets their actions speak.",
    "A mysterious healer, {nickname} appears wherever they are needed. Rumor says they can bring back the dead.",
    "{nickname} is a wandering swordsman bound by an unbending code of honor.",
];

const BIO_HOOKS: &[&str] = &[
    "Legend has it they",
    "Their fame rests on the fact that they",
    "The chronicles record that they",
    "Bards sing that they",
    "Rumors suggest they",
    "Survivors swear they",
    "The royal archives reveal they",
    "Old tales tell that they",
];

const BIO_DEEDS: &[&str] = &[
    "defeated an ancient demon in the depths",
    "held the village for three weeks without rest",
    "found the lost treasure of the cursed king",
    "cured the black plague ravaging the countryside",
    "challenged the emperor to single combat",
    "rescued the princess from the dragon's claws",
    "discovered a secret passage to the underworld",
    "tamed a wild beast as a mount",
    "solved the riddle of the haunted tower",
    "refused a bargain with the devil himself",
    "survived the trial of the seven seas",
    "destroyed the cursed artifact poisoning the land",
];

/// Errors from dataset generation
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("Hero count must be between 1 and 10000, got {0}")]
    InvalidCount(usize),

    #[error(transparent)]
    Store(#[from] RepositoryError),
}

/// What a generation run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub regions: usize,
    pub skills: usize,
    /// Heroes added by this run; may fall short of the request when
    /// nicknames keep colliding
    pub heroes_created: usize,
    pub total_heroes: usize,
}

/// Random dataset generator
pub struct DatasetGenerator {
    rng: StdRng,
}

impl DatasetGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a reproducible generator
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Ensure the fixed regions and skills exist, then add `hero_count`
    /// random heroes.
    pub fn generate(
        &mut self,
        repos: &Repositories,
        hero_count: usize,
    ) -> Result<GenerationReport, GeneratorError> {
        if !(MIN_HEROES..=MAX_HEROES).contains(&hero_count) {
            return Err(GeneratorError::InvalidCount(hero_count));
        }

        let regions = REGION_DATA
            .iter()
            .map(|(name, env)| repos.region_named(name, env))
            .collect::<Result<Vec<_>, _>>()?;
        let skills = SKILL_DATA
            .iter()
            .map(|(name, kind, mana)| repos.skill_named(name, *kind, *mana))
            .collect::<Result<Vec<_>, _>>()?;

        let heroes_created = self.create_heroes(repos, hero_count, &regions, &skills)?;
        let report = GenerationReport {
            regions: regions.len(),
            skills: skills.len(),
            heroes_created,
            total_heroes: repos.heroes.count()?,
        };

        info!(
            regions = report.regions,
            skills = report.skills,
            created = report.heroes_created,
            total = report.total_heroes,
            "dataset generated"
        );
        Ok(report)
    }

    fn create_heroes(
        &mut self,
        repos: &Repositories,
        count: usize,
        regions: &[Region],
        skills: &[Skill],
    ) -> Result<usize, GeneratorError> {
        let mut created = 0;
        let mut attempts = 0;

        while created < count && attempts < count * ATTEMPTS_PER_HERO {
            attempts += 1;

            let nickname = self.nickname();
            if repos.heroes.find_by_nickname(&nickname)?.is_some() {
                continue;
            }

            let hero = self.hero(repos.heroes.next_id()?, nickname, regions, skills);
            repos.heroes.save(hero)?;
            created += 1;

            if created % 25 == 0 {
                debug!(created, count, "generating heroes");
            }
        }

        Ok(created)
    }

    fn hero(
        &mut self,
        id: HeroId,
        nickname: String,
        regions: &[Region],
        skills: &[Skill],
    ) -> Hero {
        let job_class = *JobClass::all().choose(&mut self.rng).unwrap_or(&JobClass::Warrior);
        let level = self.level();
        let max_hp = level * 100;
        let hp = self.rng.gen_range(max_hp * 3 / 10..=max_hp);
        let xp = u64::from(level) * self.rng.gen_range(100..=500u64);
        let gold = self.rng.gen_range(0..=u64::from(level) * 100);
        let is_active = self.rng.gen::<f64>() > INACTIVE_RATE;

        let origin = regions
            .choose(&mut self.rng)
            .map(|r| r.name().to_string())
            .unwrap_or_else(|| "distant lands".to_string());
        let biography = self.biography(&nickname, &origin);

        let skill_count = self.rng.gen_range(1..=MAX_SKILLS_PER_HERO).min(skills.len());
        let picked: Vec<_> = skills
            .choose_multiple(&mut self.rng, skill_count)
            .map(|s| s.id())
            .collect();

        let mut hero = Hero::new(id, nickname, Utc::now())
            .with_job_class(job_class)
            .with_level(level)
            .with_hp(hp)
            .with_xp(xp)
            .with_gold(gold)
            .with_active(is_active)
            .with_biography(biography)
            .with_skills(picked);
        if let Some(region) = regions.choose(&mut self.rng) {
            hero = hero.with_region(region.id());
        }
        hero
    }

    fn level(&mut self) -> u32 {
        let roll = self.rng.gen::<f64>();
        if roll < 0.5 {
            self.rng.gen_range(1..=20)
        } else if roll < 0.8 {
            self.rng.gen_range(21..=50)
        } else if roll < 0.95 {
            self.rng.gen_range(51..=70)
        } else {
            self.rng.gen_range(71..=99)
        }
    }

    fn nickname(&mut self) -> String {
        let pick = |rng: &mut StdRng, words: &[&'static str]| *words.choose(rng).unwrap_or(&"Hero");

        match self.rng.gen_range(0..5) {
            0 => {
                let first = pick(&mut self.rng, FIRST_NAMES);
                let sep = pick(&mut self.rng, &["_", ""]);
                format!("{first}{sep}{}", self.rng.gen_range(1..=999))
            }
            1 => {
                let last = pick(&mut self.rng, LAST_NAMES);
                let tag = pick(&mut self.rng, &["X", "Z", "V", ""]);
                format!("{last}{tag}{}", self.rng.gen_range(1..=99))
            }
            2 => {
                let handle = pick(&mut self.rng, HANDLES);
                format!("{handle}{}", self.rng.gen_range(1..=999))
            }
            3 => {
                let prefix = pick(&mut self.rng, TITLE_PREFIXES);
                let first = pick(&mut self.rng, FIRST_NAMES);
                format!("{prefix}{first}")
            }
            _ => {
                let first = pick(&mut self.rng, FIRST_NAMES);
                let epithet = pick(&mut self.rng, EPITHETS);
                format!("{first}The{epithet}")
            }
        }
    }

    fn biography(&mut self, nickname: &str, origin: &str) -> String {
        let template = BIO_TEMPLATES.choose(&mut self.rng).unwrap_or(&BIO_TEMPLATES[0]);
        let hook = BIO_HOOKS.choose(&mut self.rng).unwrap_or(&BIO_HOOKS[0]);
        let deed = BIO_DEEDS.choose(&mut self.rng).unwrap_or(&BIO_DEEDS[0]);

        let story = template
            .replace("{nickname}", nickname)
            .replace("{origin}", origin);
        format!("{story} {hook} {deed}.")
    }
}

impl Default for DatasetGenerator {
    fn default() -> Self {
        Self::new()
    }
}
