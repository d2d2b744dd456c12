//! Field tables for each listing
//!
//! These tables are the whole configuration of the filter builder: adding
//! a filter means adding a row, never touching the evaluation code.

use crate::model::hero::Hero;
use crate::model::region::Region;
use crate::model::skill::Skill;
use crate::repository::Counted;

use super::filter::{Comparison, FieldValue, FilterSpec, ValueParser};
use super::list::{QuerySchema, Record};
use super::ordering::OrderKey;

fn clamp_i64(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

// ============================================================================
// Hero
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeroField {
    Nickname,
    JobClass,
    Level,
    HpCurrent,
    Xp,
    Gold,
    IsActive,
    Biography,
    CreatedAt,
    Region,
}

static HERO_SCHEMA: QuerySchema<HeroField> = QuerySchema {
    filters: &[
        FilterSpec {
            param: "job_class",
            field: HeroField::JobClass,
            op: Comparison::Eq,
            parser: ValueParser::JobClass,
        },
        FilterSpec {
            param: "is_active",
            field: HeroField::IsActive,
            op: Comparison::Eq,
            parser: ValueParser::Flag,
        },
        FilterSpec {
            param: "region",
            field: HeroField::Region,
            op: Comparison::Eq,
            parser: ValueParser::Id,
        },
        FilterSpec {
            param: "min_level",
            field: HeroField::Level,
            op: Comparison::Gte,
            parser: ValueParser::Integer,
        },
        FilterSpec {
            param: "max_level",
            field: HeroField::Level,
            op: Comparison::Lte,
            parser: ValueParser::Integer,
        },
    ],
    search_fields: &[HeroField::Nickname, HeroField::JobClass, HeroField::Biography],
    ordering_fields: &[
        ("level", HeroField::Level),
        ("created_at", HeroField::CreatedAt),
        ("gold", HeroField::Gold),
        ("xp", HeroField::Xp),
        ("hp_current", HeroField::HpCurrent),
    ],
    default_ordering: &[OrderKey::desc(HeroField::CreatedAt)],
};

impl Record for Hero {
    type Field = HeroField;

    fn schema() -> &'static QuerySchema<HeroField> {
        &HERO_SCHEMA
    }

    fn field(&self, field: HeroField) -> FieldValue<'_> {
        match field {
            HeroField::Nickname => FieldValue::Text(self.nickname()),
            HeroField::JobClass => FieldValue::Text(self.job_class().as_str()),
            HeroField::Level => FieldValue::Int(i64::from(self.level())),
            HeroField::HpCurrent => FieldValue::Int(i64::from(self.hp_current())),
            HeroField::Xp => FieldValue::Int(clamp_i64(self.xp())),
            HeroField::Gold => FieldValue::Int(clamp_i64(self.gold())),
            HeroField::IsActive => FieldValue::Bool(self.is_active()),
            HeroField::Biography => FieldValue::Text(self.biography()),
            HeroField::CreatedAt => FieldValue::Time(self.created_at()),
            HeroField::Region => FieldValue::Ref(self.region().map(|r| r.value())),
        }
    }

    fn identity(&self) -> u64 {
        self.id().value()
    }
}

// ============================================================================
// Region
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionField {
    Name,
    EnvironmentType,
    HeroesCount,
}

static REGION_SCHEMA: QuerySchema<RegionField> = QuerySchema {
    filters: &[],
    search_fields: &[RegionField::Name, RegionField::EnvironmentType],
    ordering_fields: &[
        ("name", RegionField::Name),
        ("heroes_count", RegionField::HeroesCount),
    ],
    default_ordering: &[OrderKey::asc(RegionField::Name)],
};

impl Record for Counted<Region> {
    type Field = RegionField;

    fn schema() -> &'static QuerySchema<RegionField> {
        &REGION_SCHEMA
    }

    fn field(&self, field: RegionField) -> FieldValue<'_> {
        match field {
            RegionField::Name => FieldValue::Text(self.entity.name()),
            RegionField::EnvironmentType => FieldValue::Text(self.entity.environment_type()),
            RegionField::HeroesCount => FieldValue::Int(clamp_i64(self.heroes_count as u64)),
        }
    }

    fn identity(&self) -> u64 {
        self.entity.id().value()
    }
}

// ============================================================================
// Skill
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillField {
    Name,
    DamageType,
    ManaCost,
    HeroesCount,
}

static SKILL_SCHEMA: QuerySchema<SkillField> = QuerySchema {
    filters: &[FilterSpec {
        param: "damage_type",
        field: SkillField::DamageType,
        op: Comparison::Eq,
        parser: ValueParser::DamageType,
    }],
    search_fields: &[SkillField::Name, SkillField::DamageType],
    ordering_fields: &[
        ("mana_cost", SkillField::ManaCost),
        ("name", SkillField::Name),
        ("heroes_count", SkillField::HeroesCount),
    ],
    default_ordering: &[OrderKey::asc(SkillField::Name)],
};

impl Record for Counted<Skill> {
    type Field = SkillField;

    fn schema() -> &'static QuerySchema<SkillField> {
        &SKILL_SCHEMA
    }

    fn field(&self, field: SkillField) -> FieldValue<'_> {
        match field {
            SkillField::Name => FieldValue::Text(self.entity.name()),
            SkillField::DamageType => FieldValue::Text(self.entity.damage_type().as_str()),
            SkillField::ManaCost => FieldValue::Int(i64::from(self.entity.mana_cost())),
            SkillField::HeroesCount => FieldValue::Int(clamp_i64(self.heroes_count as u64)),
        }
    }

    fn identity(&self) -> u64 {
        self.entity.id().value()
    }
}
