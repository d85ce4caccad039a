use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
    str::FromStr,
};

/// The CSS4 named colors, alphabetical.
pub const CSS4_COLORS: [&str; 148] = [
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue",
    "darkcyan", "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki",
    "darkmagenta", "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon",
    "darkseagreen", "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise",
    "darkviolet", "deeppink", "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick",
    "floralwhite", "forestgreen", "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod",
    "gray", "green", "greenyellow", "grey", "honeydew", "hotpink", "indianred", "indigo",
    "ivory", "khaki", "lavender", "lavenderblush", "lawngreen", "lemonchiffon", "lightblue",
    "lightcoral", "lightcyan", "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey",
    "lightpink", "lightsalmon", "lightseagreen", "lightskyblue", "lightslategray",
    "lightslategrey", "lightsteelblue", "lightyellow", "lime", "limegreen", "linen", "magenta",
    "maroon", "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple",
    "mediumseagreen", "mediumslateblue", "mediumspringgreen", "mediumturquoise",
    "mediumvioletred", "midnightblue", "mintcream", "mistyrose", "moccasin", "navajowhite",
    "navy", "oldlace", "olive", "olivedrab", "orange", "orangered", "orchid", "palegoldenrod",
    "palegreen", "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru", "pink",
    "plum", "powderblue", "purple", "rebeccapurple", "red", "rosybrown", "royalblue",
    "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell", "sienna", "silver", "skyblue",
    "slateblue", "slategray", "slategrey", "snow", "springgreen", "steelblue", "tan", "teal",
    "thistle", "tomato", "turquoise", "violet", "wheat", "white", "whitesmoke", "yellow",
    "yellowgreen",
];

const DARK_COLORS: [&str; 18] = [
    "darkmagenta",
    "darkred",
    "darkslategrey",
    "darkblue",
    "darkgreen",
    "darkcyan",
    "black",
    "darkorange",
    "darkviolet",
    "darkslateblue",
    "darkorchid",
    "darkkhaki",
    "darkgoldenrod",
    "mediumblue",
    "midnightblue",
    "maroon",
    "firebrick",
    "dimgrey",
];

/// How a course gets its fill color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorStrategy {
    /// Row `i` takes `CSS4_COLORS[(i + 7i) % len]`, which keeps neighbouring
    /// rows away from neighbouring (similar) names.
    #[default]
    Spread,
    /// Hash of the course name into a dark palette. Survives row reordering.
    ByName,
}

impl ColorStrategy {
    pub fn choose(self, index: usize, name: &str) -> &'static str {
        match self {
            ColorStrategy::Spread => spread_color(index),
            ColorStrategy::ByName => choose_color(name),
        }
    }
}

impl FromStr for ColorStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "spread" => Ok(ColorStrategy::Spread),
            "by-name" => Ok(ColorStrategy::ByName),
            other => Err(format!(
                "unknown color strategy '{}', expected 'spread' or 'by-name'",
                other
            )),
        }
    }
}

pub fn spread_color(index: usize) -> &'static str {
    CSS4_COLORS[(index + index * 7) % CSS4_COLORS.len()]
}

pub fn choose_color(s: &str) -> &'static str {
    let mut hasher = DefaultHasher::new();
    s.hash(&mut hasher);
    let hash = hasher.finish();
    DARK_COLORS[hash as usize % DARK_COLORS.len()]
}

const LIGHT_TEXT_ON: [&str; 9] = [
    "blue", "brown", "green", "indigo", "navy", "olive", "purple", "rebeccapurple", "teal",
];

/// Text color that stays readable on top of `fill`.
pub fn label_color(fill: &str) -> &'static str {
    if fill.starts_with("dark") || DARK_COLORS.contains(&fill) || LIGHT_TEXT_ON.contains(&fill) {
        "white"
    } else {
        "black"
    }
}

/// `HH:MM` for a minute offset, wrapping past midnight.
pub fn format_minutes(minutes: u32) -> String {
    format!("{:02}:{:02}", (minutes / 60) % 24, minutes % 60)
}

/// First `max` characters of `s`.
pub fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spread_skips_eight_entries_per_row() {
        assert_eq!(spread_color(0), "aliceblue");
        assert_eq!(spread_color(1), "blanchedalmond");
        assert_eq!(spread_color(2), "coral");
        // 19 * 8 = 152 wraps to 4
        assert_eq!(spread_color(19), CSS4_COLORS[4]);
    }

    #[test]
    fn name_hash_is_stable() {
        assert_eq!(choose_color("Algorithms"), choose_color("Algorithms"));
        assert!(DARK_COLORS.contains(&choose_color("Algorithms")));
    }

    #[test]
    fn strategy_parses_from_flag_values() {
        assert_eq!("spread".parse::<ColorStrategy>(), Ok(ColorStrategy::Spread));
        assert_eq!("by-name".parse::<ColorStrategy>(), Ok(ColorStrategy::ByName));
        assert!("random".parse::<ColorStrategy>().is_err());
    }

    #[test]
    fn label_color_contrasts_with_fill() {
        assert_eq!(label_color("darkred"), "white");
        assert_eq!(label_color("navy"), "white");
        assert_eq!(label_color("aliceblue"), "black");
        assert_eq!(label_color("skyblue"), "black");
    }

    #[test]
    fn formats_minutes_as_clock_time() {
        assert_eq!(format_minutes(540), "09:00");
        assert_eq!(format_minutes(630), "10:30");
        assert_eq!(format_minutes(1440 + 75), "01:15");
    }

    #[test]
    fn truncates_by_character() {
        assert_eq!(truncate("Algorithms", 6), "Algori");
        assert_eq!(truncate("Bio", 6), "Bio");
        assert_eq!(truncate("Ökonomie", 6), "Ökonom");
    }
}
