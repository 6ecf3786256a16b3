use chrono::NaiveDate;

use crate::error::Result;
use crate::person::Profile;
use crate::plural::{Unit, count};

const BANNER_WIDTH: usize = 50;
const UNKNOWN_SIGN: &str = "Неизвестно";

fn banner() -> String {
    "=".repeat(BANNER_WIDTH)
}

/// Renders the numbered results followed by the closing summary.
pub fn render(profile: &Profile, today: NaiveDate) -> Result<String> {
    let human = profile.human();
    let birthday_info = human.birthday_info(today)?;
    let zodiac = human
        .zodiac_sign()
        .map_or_else(|| UNKNOWN_SIGN.to_string(), |sign| sign.to_string());
    let adult = if human.is_adult() {
        "✅ Совершеннолетний"
    } else {
        "❌ Несовершеннолетний"
    };

    let results = [
        human.say_hello(),
        human.introduce(),
        birthday_info.clone(),
        format!("Знак зодиака: {zodiac}"),
        adult.to_string(),
        profile.work(),
        profile.display_skills(),
        profile.special_introduce(),
    ];

    let mut lines = vec![
        String::new(),
        banner(),
        "🎯 РЕЗУЛЬТАТЫ:".to_string(),
        banner(),
    ];
    lines.extend(
        results
            .iter()
            .enumerate()
            .map(|(i, line)| format!("{}. {line}", i + 1)),
    );

    lines.extend([
        String::new(),
        banner(),
        "🎉 ПРОГРАММА ЗАВЕРШЕНА!".to_string(),
        "📊 Финальные данные:".to_string(),
        banner(),
        profile.special_introduce(),
        format!("🎂 Возраст: {}", count(human.age().into(), Unit::Years)),
        format!("📅 {birthday_info}"),
        format!("♈ Знак зодиака: {zodiac}"),
    ]);

    let mut out = lines.join("\n");
    out.push('\n');
    Ok(out)
}
