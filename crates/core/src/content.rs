use crate::types::{Element, StatusEffectKind, TowerClass};

pub mod keys {
    pub const TOWER_MOON: &str = "tower_moon";
    pub const TOWER_STEEL: &str = "tower_steel";
    pub const TOWER_EMBER: &str = "tower_ember";
    pub const TOWER_TIDE: &str = "tower_tide";
    pub const TOWER_GALE: &str = "tower_gale";
    pub const TOWER_TERRA: &str = "tower_terra";
    pub const TOWER_SUN: &str = "tower_sun";
    pub const TOWER_GLOOM: &str = "tower_gloom";
}

/// The two classes that amplify each other while the resonance effect is
/// active. Order carries no meaning; the bonus is symmetric.
pub const RESONANCE_PAIR: (TowerClass, TowerClass) = (TowerClass::Moon, TowerClass::Steel);

pub struct TowerSpec {
    pub id: &'static str,
    pub name: &'static str,
    pub element: Element,
    pub damage: f32,
    /// Attacks per second at multiplier 1.0.
    pub attack_speed: f32,
    /// Targeting radius in cells.
    pub range: f32,
    /// Whole-number percent, 0..=100 before buffs.
    pub crit_chance: f32,
    pub innate_status: Option<InnateStatus>,
}

pub struct InnateStatus {
    pub kind: StatusEffectKind,
    pub potency: f32,
    pub duration_ticks: u32,
}

pub fn tower_spec(class: TowerClass) -> TowerSpec {
    match class {
        TowerClass::Moon => TowerSpec {
            id: keys::TOWER_MOON,
            name: "Moon Spire",
            element: Element::Light,
            damage: 14.0,
            attack_speed: 0.8,
            range: 3.5,
            crit_chance: 15.0,
            innate_status: Some(InnateStatus {
                kind: StatusEffectKind::Fear,
                potency: 1.0,
                duration_ticks: 20,
            }),
        },
        TowerClass::Steel => TowerSpec {
            id: keys::TOWER_STEEL,
            name: "Steel Bastion",
            element: Element::Earth,
            damage: 22.0,
            attack_speed: 0.5,
            range: 2.5,
            crit_chance: 10.0,
            innate_status: Some(InnateStatus {
                kind: StatusEffectKind::Stun,
                potency: 1.0,
                duration_ticks: 8,
            }),
        },
        TowerClass::Ember => TowerSpec {
            id: keys::TOWER_EMBER,
            name: "Ember Pyre",
            element: Element::Fire,
            damage: 10.0,
            attack_speed: 1.2,
            range: 3.0,
            crit_chance: 5.0,
            innate_status: Some(InnateStatus {
                kind: StatusEffectKind::Burn,
                potency: 2.0,
                duration_ticks: 30,
            }),
        },
        TowerClass::Tide => TowerSpec {
            id: keys::TOWER_TIDE,
            name: "Tide Column",
            element: Element::Water,
            damage: 8.0,
            attack_speed: 1.0,
            range: 3.0,
            crit_chance: 5.0,
            innate_status: Some(InnateStatus {
                kind: StatusEffectKind::Slow,
                potency: 0.3,
                duration_ticks: 25,
            }),
        },
        TowerClass::Gale => TowerSpec {
            id: keys::TOWER_GALE,
            name: "Gale Perch",
            element: Element::Wind,
            damage: 6.0,
            attack_speed: 2.0,
            range: 4.0,
            crit_chance: 20.0,
            innate_status: None,
        },
        TowerClass::Terra => TowerSpec {
            id: keys::TOWER_TERRA,
            name: "Terra Mound",
            element: Element::Earth,
            damage: 12.0,
            attack_speed: 0.7,
            range: 2.0,
            crit_chance: 0.0,
            innate_status: Some(InnateStatus {
                kind: StatusEffectKind::Rot,
                potency: 1.5,
                duration_ticks: 40,
            }),
        },
        TowerClass::Sun => TowerSpec {
            id: keys::TOWER_SUN,
            name: "Sun Obelisk",
            element: Element::Light,
            damage: 18.0,
            attack_speed: 0.9,
            range: 3.5,
            crit_chance: 25.0,
            innate_status: None,
        },
        TowerClass::Gloom => TowerSpec {
            id: keys::TOWER_GLOOM,
            name: "Gloom Idol",
            element: Element::Dark,
            damage: 16.0,
            attack_speed: 0.6,
            range: 3.0,
            crit_chance: 10.0,
            innate_status: Some(InnateStatus {
                kind: StatusEffectKind::Bleed,
                potency: 2.5,
                duration_ticks: 35,
            }),
        },
    }
}

pub fn all_tower_classes() -> [TowerClass; 8] {
    [
        TowerClass::Moon,
        TowerClass::Steel,
        TowerClass::Ember,
        TowerClass::Tide,
        TowerClass::Gale,
        TowerClass::Terra,
        TowerClass::Sun,
        TowerClass::Gloom,
    ]
}
