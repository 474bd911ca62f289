//! Fighters and the roster they are picked from.
//!
//! A `Character` is immutable once built: its stats feed resolution and
//! never change during a match. Profession, portrait, magic and special
//! skills are descriptive data for the presentation layer only.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::{DuelError, DuelResult};

/// Roster key for a character.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterId(String);

impl CharacterId {
    /// Create a new character ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw id string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// What a special skill is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillKind {
    Attack,
    Defense,
}

/// A named special technique shown on the character card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialSkill {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub kind: SkillKind,
    pub value: i32,
    /// Effect sprite asset name.
    #[serde(default)]
    pub effect_sprite: String,
}

impl SpecialSkill {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: SkillKind, value: i32) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            kind,
            value,
            effect_sprite: String::new(),
        }
    }

    #[must_use]
    pub fn with_sprite(mut self, sprite: impl Into<String>) -> Self {
        self.effect_sprite = sprite.into();
        self
    }
}

/// A fighter's profile and combat stats.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawCharacter")]
pub struct Character {
    id: CharacterId,
    name: String,
    profession: String,
    portrait: String,
    max_health: i32,
    attack: i32,
    defense: i32,
    magic: i32,
    skills: Vec<SpecialSkill>,
}

/// Unvalidated character document, as written in roster JSON.
#[derive(Deserialize)]
struct RawCharacter {
    id: CharacterId,
    name: String,
    #[serde(default)]
    profession: String,
    #[serde(default)]
    portrait: String,
    max_health: i32,
    attack: i32,
    defense: i32,
    #[serde(default)]
    magic: i32,
    #[serde(default)]
    skills: Vec<SpecialSkill>,
}

impl TryFrom<RawCharacter> for Character {
    type Error = DuelError;

    fn try_from(raw: RawCharacter) -> Result<Self, Self::Error> {
        let mut character =
            Character::new(raw.id, raw.name, raw.max_health, raw.attack, raw.defense)?;
        character.profession = raw.profession;
        character.portrait = raw.portrait;
        character.magic = raw.magic;
        for skill in raw.skills {
            character = character.with_skill(skill)?;
        }
        Ok(character)
    }
}

impl Character {
    /// Most skills a character card can list.
    pub const MAX_SKILLS: usize = 3;

    /// Upper bound on attack and defense.
    pub const MAX_STAT: i32 = 10_000;

    /// Upper bound on max health.
    pub const MAX_HEALTH: i32 = 1_000_000;

    /// Create a character with validated combat stats.
    ///
    /// Attack and defense must lie in `0..=MAX_STAT` and max health in
    /// `1..=MAX_HEALTH`.
    pub fn new(
        id: CharacterId,
        name: impl Into<String>,
        max_health: i32,
        attack: i32,
        defense: i32,
    ) -> DuelResult<Self> {
        if !(1..=Self::MAX_HEALTH).contains(&max_health) {
            return Err(DuelError::InvalidCharacter(format!(
                "{id}: max health must be in 1..={}, got {max_health}",
                Self::MAX_HEALTH
            )));
        }
        let stats = 0..=Self::MAX_STAT;
        if !stats.contains(&attack) || !stats.contains(&defense) {
            return Err(DuelError::InvalidCharacter(format!(
                "{id}: attack and defense must be in 0..={}, got {attack}/{defense}",
                Self::MAX_STAT
            )));
        }

        Ok(Self {
            id,
            name: name.into(),
            profession: String::new(),
            portrait: String::new(),
            max_health,
            attack,
            defense,
            magic: 0,
            skills: Vec::new(),
        })
    }

    #[must_use]
    pub fn with_profession(mut self, profession: impl Into<String>) -> Self {
        self.profession = profession.into();
        self
    }

    #[must_use]
    pub fn with_portrait(mut self, portrait: impl Into<String>) -> Self {
        self.portrait = portrait.into();
        self
    }

    #[must_use]
    pub fn with_magic(mut self, magic: i32) -> Self {
        self.magic = magic;
        self
    }

    /// Add a special skill; at most `MAX_SKILLS` fit on a card.
    pub fn with_skill(mut self, skill: SpecialSkill) -> DuelResult<Self> {
        if self.skills.len() >= Self::MAX_SKILLS {
            return Err(DuelError::InvalidCharacter(format!(
                "{}: at most {} special skills",
                self.id,
                Self::MAX_SKILLS
            )));
        }
        self.skills.push(skill);
        Ok(self)
    }

    pub fn id(&self) -> &CharacterId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn profession(&self) -> &str {
        &self.profession
    }

    pub fn portrait(&self) -> &str {
        &self.portrait
    }

    pub fn max_health(&self) -> i32 {
        self.max_health
    }

    pub fn attack(&self) -> i32 {
        self.attack
    }

    pub fn defense(&self) -> i32 {
        self.defense
    }

    pub fn magic(&self) -> i32 {
        self.magic
    }

    pub fn skills(&self) -> &[SpecialSkill] {
        &self.skills
    }
}

/// Registry of selectable characters.
///
/// ## Example
///
/// ```
/// use dice_duel::core::{CharacterId, Roster};
///
/// let roster = Roster::builtin();
/// let p1 = roster.get(&CharacterId::new(Roster::HUANG_LINGHOU)).unwrap();
/// assert_eq!(p1.attack(), 4);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Roster {
    characters: FxHashMap<CharacterId, Character>,
}

impl Roster {
    /// Stock player-one fighter.
    pub const HUANG_LINGHOU: &'static str = "huang-linghou";
    /// Stock player-two fighter.
    pub const WEN_LIANG: &'static str = "wen-liang";

    /// Create a new empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The two stock fighters.
    #[must_use]
    pub fn builtin() -> Self {
        let characters = builtin_characters()
            .into_iter()
            .map(|c| (c.id.clone(), c))
            .collect();
        Self { characters }
    }

    /// Load characters from a JSON array, on top of an empty roster.
    pub fn from_json(json: &str) -> DuelResult<Self> {
        let characters: Vec<Character> = serde_json::from_str(json)?;
        let mut roster = Self::new();
        for character in characters {
            roster.register(character)?;
        }
        Ok(roster)
    }

    /// Register a character. Ids must be unique.
    pub fn register(&mut self, character: Character) -> DuelResult<()> {
        if self.characters.contains_key(character.id()) {
            return Err(DuelError::InvalidCharacter(format!(
                "{} already registered",
                character.id()
            )));
        }
        self.characters.insert(character.id().clone(), character);
        Ok(())
    }

    /// Get a character by ID.
    #[must_use]
    pub fn get(&self, id: &CharacterId) -> Option<&Character> {
        self.characters.get(id)
    }

    /// Get a character by ID, failing with `UnknownCharacter`.
    pub fn require(&self, id: &CharacterId) -> DuelResult<&Character> {
        self.get(id)
            .ok_or_else(|| DuelError::UnknownCharacter(id.clone()))
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Iterate over all characters (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Character> {
        self.characters.values()
    }
}

fn builtin_characters() -> [Character; 2] {
    let stock = |id: &str,
                 name: &str,
                 profession: &str,
                 portrait: &str,
                 stats: [i32; 4],
                 skill: SpecialSkill| {
        let [max_health, attack, defense, magic] = stats;
        Character {
            id: CharacterId::new(id),
            name: name.to_string(),
            profession: profession.to_string(),
            portrait: portrait.to_string(),
            max_health,
            attack,
            defense,
            magic,
            skills: vec![skill],
        }
    };

    [
        stock(
            Roster::HUANG_LINGHOU,
            "黄凌侯",
            "仙修",
            "character1.webp",
            [100, 4, 1, 10],
            SpecialSkill::new("噬魂", SkillKind::Attack, 6).with_sprite("噬魂.png"),
        ),
        stock(
            Roster::WEN_LIANG,
            "文亮",
            "剑修",
            "character2.webp",
            [105, 2, 3, 5],
            SpecialSkill::new("万剑决", SkillKind::Attack, 6).with_sprite("万剑决.png"),
        ),
    ]
}
