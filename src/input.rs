use chrono::NaiveDate;
use std::io::{BufRead, Write};
use tracing::debug;

use crate::error::{ProfileError, Result};
use crate::person::{DATE_FORMAT, Human, Profile};

const SKILLS_DONE: &str = "готово";

pub fn parse_age(input: &str) -> Result<u32> {
    input.parse().map_err(|_| ProfileError::InvalidAge {
        input: input.to_string(),
    })
}

/// Accepts exactly `DD.MM.YYYY` naming a real calendar day.
pub fn parse_birth_date(input: &str) -> Result<NaiveDate> {
    let invalid = || ProfileError::InvalidDate {
        input: input.to_string(),
    };

    let bytes = input.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'.',
            _ => b.is_ascii_digit(),
        });
    if !shape_ok {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| invalid())
}

pub fn parse_yes_no(input: &str) -> Result<bool> {
    match input.to_lowercase().as_str() {
        "да" | "д" => Ok(true),
        "нет" | "н" => Ok(false),
        _ => Err(ProfileError::InvalidAnswer {
            input: input.to_string(),
        }),
    }
}

/// Line-oriented console dialogue over any reader/writer pair.
pub struct Prompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.writer, "{text}")?;
        Ok(())
    }

    /// Prints `prompt` and returns the next line, trimmed.
    pub fn read_line(&mut self, prompt: &str) -> Result<String> {
        write!(self.writer, "{prompt}")?;
        self.writer.flush()?;

        // Raw bytes: a line that is not UTF-8 is bad input to reprompt on, not an IO failure.
        let mut raw = Vec::new();
        if self.reader.read_until(b'\n', &mut raw)? == 0 {
            return Err(ProfileError::InputClosed);
        }
        Ok(String::from_utf8_lossy(&raw).trim().to_string())
    }

    /// Keeps asking until `parse` accepts the answer.
    fn read_until<T>(
        &mut self,
        prompt: &str,
        hint: &str,
        parse: impl Fn(&str) -> Result<T>,
    ) -> Result<T> {
        loop {
            let line = self.read_line(prompt)?;
            match parse(&line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    debug!(error = %e, "rejected input");
                    self.say(hint)?;
                }
            }
        }
    }

    pub fn read_age(&mut self, prompt: &str) -> Result<u32> {
        self.read_until(prompt, "❌ Ошибка! Введите целое число.", parse_age)
    }

    pub fn read_birth_date(&mut self, prompt: &str) -> Result<NaiveDate> {
        let prompt = format!("{prompt} (формат: ДД.ММ.ГГГГ): ");
        self.read_until(
            &prompt,
            "❌ Ошибка! Используйте формат ДД.ММ.ГГГГ (например: 15.03.1990)",
            parse_birth_date,
        )
    }

    pub fn read_yes_no(&mut self, prompt: &str) -> Result<bool> {
        let prompt = format!("{prompt} (да/нет): ");
        self.read_until(&prompt, "❌ Ошибка! Введите 'да' или 'нет'.", parse_yes_no)
    }

    pub fn read_skills(&mut self) -> Result<Vec<String>> {
        self.say(&format!(
            "\n💡 Введите навыки (для завершения введите '{SKILLS_DONE}'):"
        ))?;

        let mut skills = Vec::new();
        loop {
            let skill = self.read_line("Навык: ")?;
            if skill.to_lowercase() == SKILLS_DONE {
                break;
            }
            if !skill.is_empty() {
                skills.push(skill);
            }
        }
        Ok(skills)
    }

    /// Runs the full questionnaire in its fixed order.
    pub fn collect(&mut self) -> Result<Profile> {
        self.say("👤 Введите ваши данные:")?;
        self.say("========================")?;

        let name = self.read_line("Имя: ")?;
        let age = self.read_age("Возраст: ")?;
        let birth_date = self.read_birth_date("Дата рождения")?;

        self.say("\n💼 Введите профессиональные данные:")?;
        self.say("========================")?;

        let occupation = self.read_line("Кем Вы работаете? ")?;
        let skills = self.read_skills()?;
        let is_active = self.read_yes_no("Сейчас работаете?")?;

        Ok(Profile::new(
            Human::new(name, age, birth_date),
            occupation,
            skills,
            is_active,
        ))
    }
}
