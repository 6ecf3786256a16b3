use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

use ZodiacSign::*;

/// Per month: (cutover day, sign before it, sign from it on).
const CUTOVERS: [(u32, ZodiacSign, ZodiacSign); 12] = [
    (20, Capricorn, Aquarius),
    (19, Aquarius, Pisces),
    (21, Pisces, Aries),
    (20, Aries, Taurus),
    (21, Taurus, Gemini),
    (21, Gemini, Cancer),
    (23, Cancer, Leo),
    (23, Leo, Virgo),
    (23, Virgo, Libra),
    (23, Libra, Scorpio),
    (22, Scorpio, Sagittarius),
    (22, Sagittarius, Capricorn),
];

fn pick((cutover, before, after): (u32, ZodiacSign, ZodiacSign), day: u32) -> ZodiacSign {
    if day < cutover { before } else { after }
}

/// Sign for a 1-based month and day. `None` if `month` is not 1..=12.
pub fn zodiac_for(month: u32, day: u32) -> Option<ZodiacSign> {
    let index = month.checked_sub(1)? as usize;
    CUTOVERS.get(index).map(|&entry| pick(entry, day))
}

impl ZodiacSign {
    pub fn name(self) -> &'static str {
        match self {
            Aries => "Овен",
            Taurus => "Телец",
            Gemini => "Близнецы",
            Cancer => "Рак",
            Leo => "Лев",
            Virgo => "Дева",
            Libra => "Весы",
            Scorpio => "Скорпион",
            Sagittarius => "Стрелец",
            Capricorn => "Козерог",
            Aquarius => "Водолей",
            Pisces => "Рыбы",
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Aries => '♈',
            Taurus => '♉',
            Gemini => '♊',
            Cancer => '♋',
            Leo => '♌',
            Virgo => '♍',
            Libra => '♎',
            Scorpio => '♏',
            Sagittarius => '♐',
            Capricorn => '♑',
            Aquarius => '♒',
            Pisces => '♓',
        }
    }
}

impl fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.glyph())
    }
}
