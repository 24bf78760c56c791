//! Hebrew month names.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CalendarError;

/// A month of the Hebrew year, in civil-year order starting at Tishrei.
///
/// In a leap year [`HebrewMonth::Adar`] is Adar I (30 days) and
/// [`HebrewMonth::AdarII`] follows it. A common year has only `Adar` (29 days).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HebrewMonth {
    Tishrei,
    Heshvan,
    Kislev,
    Tevet,
    Shevat,
    Adar,
    #[serde(rename = "Adar II")]
    AdarII,
    Nisan,
    Iyar,
    Sivan,
    Tammuz,
    Av,
    Elul,
}

impl HebrewMonth {
    /// All months in order, including Adar II.
    pub const ALL: [HebrewMonth; 13] = [
        HebrewMonth::Tishrei,
        HebrewMonth::Heshvan,
        HebrewMonth::Kislev,
        HebrewMonth::Tevet,
        HebrewMonth::Shevat,
        HebrewMonth::Adar,
        HebrewMonth::AdarII,
        HebrewMonth::Nisan,
        HebrewMonth::Iyar,
        HebrewMonth::Sivan,
        HebrewMonth::Tammuz,
        HebrewMonth::Av,
        HebrewMonth::Elul,
    ];

    pub fn name(self) -> &'static str {
        match self {
            HebrewMonth::Tishrei => "Tishrei",
            HebrewMonth::Heshvan => "Heshvan",
            HebrewMonth::Kislev => "Kislev",
            HebrewMonth::Tevet => "Tevet",
            HebrewMonth::Shevat => "Shevat",
            HebrewMonth::Adar => "Adar",
            HebrewMonth::AdarII => "Adar II",
            HebrewMonth::Nisan => "Nisan",
            HebrewMonth::Iyar => "Iyar",
            HebrewMonth::Sivan => "Sivan",
            HebrewMonth::Tammuz => "Tammuz",
            HebrewMonth::Av => "Av",
            HebrewMonth::Elul => "Elul",
        }
    }
}

impl fmt::Display for HebrewMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HebrewMonth {
    type Err = CalendarError;

    /// Case-insensitive; accepts the common transliterations.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        let month = match key.as_str() {
            "tishrei" | "tishrey" | "tishri" => HebrewMonth::Tishrei,
            "heshvan" | "cheshvan" | "marcheshvan" | "marheshvan" | "heshwan" => {
                HebrewMonth::Heshvan
            }
            "kislev" | "kislew" => HebrewMonth::Kislev,
            "tevet" | "teves" | "tebeth" => HebrewMonth::Tevet,
            "shevat" | "shvat" | "shebat" => HebrewMonth::Shevat,
            "adar" | "adari" | "adar1" => HebrewMonth::Adar,
            "adarii" | "adar2" | "adarbet" | "veadar" => HebrewMonth::AdarII,
            "nisan" | "nissan" => HebrewMonth::Nisan,
            "iyar" | "iyyar" => HebrewMonth::Iyar,
            "sivan" => HebrewMonth::Sivan,
            "tammuz" | "tamuz" => HebrewMonth::Tammuz,
            "av" | "menachemav" => HebrewMonth::Av,
            "elul" => HebrewMonth::Elul,
            _ => return Err(CalendarError::UnknownMonth(s.to_string())),
        };
        Ok(month)
    }
}
