use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::birthday;
use crate::error::Result;
use crate::plural::{Unit, suffix};
use crate::zodiac::{ZodiacSign, zodiac_for};

pub const ADULT_AGE: u32 = 18;
pub const DATE_FORMAT: &str = "%d.%m.%Y";

#[derive(Debug, Clone, Serialize)]
pub struct Human {
    name: String,
    age: u32,
    birth_date: NaiveDate,
}

impl Human {
    pub fn new(name: impl Into<String>, age: u32, birth_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            age,
            birth_date,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    pub fn say_hello(&self) -> String {
        format!("Привет, меня зовут {}!", self.name)
    }

    pub fn introduce(&self) -> String {
        format!(
            "Я {}, мне {} {}. Родился {}.",
            self.name,
            self.age,
            suffix(self.age.into(), Unit::Years),
            self.birth_date.format(DATE_FORMAT)
        )
    }

    /// Goes by the stated age only; the birth date is not consulted.
    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }

    pub fn days_until_birthday(&self, today: NaiveDate) -> Result<u32> {
        let birth = self.birth_date();
        birthday::days_until(birth.month(), birth.day(), today)
    }

    pub fn birthday_info(&self, today: NaiveDate) -> Result<String> {
        let days = self.days_until_birthday(today)?;
        if days == 0 {
            return Ok("🎂 Сегодня ваш день рождения! Поздравляем!".to_string());
        }

        let next_age = u64::from(self.age) + 1;
        Ok(format!(
            "До вашего {}-{} осталось {} {}",
            next_age,
            suffix(next_age, Unit::Years),
            days,
            suffix(days.into(), Unit::Days)
        ))
    }

    pub fn zodiac_sign(&self) -> Option<ZodiacSign> {
        zodiac_for(self.birth_date.month(), self.birth_date.day())
    }
}

/// A [`Human`] together with their working life.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    human: Human,
    occupation: String,
    skills: Vec<String>,
    is_active: bool,
}

impl Profile {
    pub fn new(
        human: Human,
        occupation: impl Into<String>,
        skills: Vec<String>,
        is_active: bool,
    ) -> Self {
        Self {
            human,
            occupation: occupation.into(),
            skills,
            is_active,
        }
    }

    pub fn human(&self) -> &Human {
        &self.human
    }

    pub fn occupation(&self) -> &str {
        &self.occupation
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn work(&self) -> String {
        if self.is_active {
            format!("{} работает {}", self.human.name(), self.occupation)
        } else {
            format!("{} сейчас не работает", self.human.name())
        }
    }

    pub fn display_skills(&self) -> String {
        if self.skills.is_empty() {
            return format!("{} пока не имеет навыков", self.human.name());
        }
        format!("Навыки {}: {}", self.human.name(), self.skills.join(", "))
    }

    pub fn special_introduce(&self) -> String {
        format!(
            "{} Я работаю {}. {}",
            self.human.introduce(),
            self.occupation,
            self.display_skills()
        )
    }
}
