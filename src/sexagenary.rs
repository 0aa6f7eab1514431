use std::fmt;

use num_integer::Integer;

use crate::div_rem::TableIndex;

#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub enum Animal {
    Rat,
    Ox,
    Tiger,
    Cat,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

// Index is (year - 3) mod 10. Stems 甲乙 are wood, 丙丁 fire, 戊己 earth,
// 庚辛 metal and 壬癸 water; index 0 is 癸.
const STEM_ELEMENTS: [Element; 10] = [
    Element::Water,
    Element::Wood,
    Element::Wood,
    Element::Fire,
    Element::Fire,
    Element::Earth,
    Element::Earth,
    Element::Metal,
    Element::Metal,
    Element::Water,
];

// Index is (year - 3) mod 12; index 0 is 亥.
const BRANCH_ANIMALS: [Animal; 12] = [
    Animal::Pig,
    Animal::Rat,
    Animal::Ox,
    Animal::Tiger,
    Animal::Cat,
    Animal::Dragon,
    Animal::Snake,
    Animal::Horse,
    Animal::Goat,
    Animal::Monkey,
    Animal::Rooster,
    Animal::Dog,
];

impl Element {
    pub fn name(&self) -> &'static str {
        match self {
            Element::Wood => "Wood",
            Element::Fire => "Fire",
            Element::Earth => "Earth",
            Element::Metal => "Metal",
            Element::Water => "Water",
        }
    }
}

impl Animal {
    pub fn name(&self) -> &'static str {
        match self {
            Animal::Cat => "Cat (Rabbit)",
            Animal::Goat => "Goat (Sheep)",
            Animal::Pig => "Pig (Boar)",
            _ => self.vietnamese_name(),
        }
    }

    pub fn vietnamese_name(&self) -> &'static str {
        match self {
            Animal::Rat => "Rat",
            Animal::Ox => "Ox",
            Animal::Tiger => "Tiger",
            Animal::Cat => "Cat",
            Animal::Dragon => "Dragon",
            Animal::Snake => "Snake",
            Animal::Horse => "Horse",
            Animal::Goat => "Goat",
            Animal::Monkey => "Monkey",
            Animal::Rooster => "Rooster",
            Animal::Dog => "Dog",
            Animal::Pig => "Pig",
        }
    }

    pub fn chinese_name(&self) -> &'static str {
        match self {
            Animal::Cat => "Rabbit",
            _ => self.vietnamese_name(),
        }
    }

    pub fn japanese_name(&self) -> &'static str {
        match self {
            Animal::Goat => "Sheep",
            Animal::Pig => "Boar",
            _ => self.chinese_name(),
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct SexagenaryYear {
    pub stem: Element,
    pub branch: Animal,
}

pub fn sexagenary(year: i64) -> SexagenaryYear {
    // 60 is a multiple of both table lengths.
    let offset = year.mod_floor(&60) - 3;
    SexagenaryYear {
        stem: STEM_ELEMENTS[offset.table_index(STEM_ELEMENTS.len())],
        branch: BRANCH_ANIMALS[offset.table_index(BRANCH_ANIMALS.len())],
    }
}

impl fmt::Display for SexagenaryYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.stem, self.branch)
    }
}
