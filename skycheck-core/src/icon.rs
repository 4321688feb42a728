use serde::Serialize;

/// Picture shown next to the conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
    Windy,
    Clear,
}

// Checked in order, first hit wins.
const KEYWORDS: &[(&str, IconKind)] = &[
    ("sun", IconKind::Sunny),
    ("cloud", IconKind::Cloudy),
    ("rain", IconKind::Rainy),
    ("snow", IconKind::Snowy),
    ("wind", IconKind::Windy),
];

impl IconKind {
    /// Pick an icon from a free-text condition description.
    pub fn select(conditions: &str) -> Self {
        let lower = conditions.to_lowercase();

        KEYWORDS
            .iter()
            .find(|(keyword, _)| lower.contains(keyword))
            .map(|(_, kind)| *kind)
            .unwrap_or(IconKind::Clear)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IconKind::Sunny => "sunny",
            IconKind::Cloudy => "cloudy",
            IconKind::Rainy => "rainy",
            IconKind::Snowy => "snowy",
            IconKind::Windy => "windy",
            IconKind::Clear => "clear",
        }
    }

    /// Asset file name used by graphical front ends.
    pub fn file_name(&self) -> &'static str {
        match self {
            IconKind::Sunny => "sunny.png",
            IconKind::Cloudy => "cloudy.png",
            IconKind::Rainy => "rainy.png",
            IconKind::Snowy => "snowy.png",
            IconKind::Windy => "windy.png",
            IconKind::Clear => "clear.png",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            IconKind::Sunny => "☀",
            IconKind::Cloudy => "☁",
            IconKind::Rainy => "☂",
            IconKind::Snowy => "❄",
            IconKind::Windy => "༄",
            IconKind::Clear => "✧",
        }
    }
}

impl std::fmt::Display for IconKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Free-function form of [`IconKind::select`].
pub fn select_icon(conditions: &str) -> IconKind {
    IconKind::select(conditions)
}
