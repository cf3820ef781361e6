use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    Red = 0,
    Brown = 1,
    Green = 2,
    Blue = 3,
}

impl Color {
    /// Enumeration order; ties in trump selection resolve to the first
    /// color encountered in this order.
    pub const ALL: [Color; 4] = [Color::Red, Color::Brown, Color::Green, Color::Blue];

    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Color::Red),
            1 => Some(Color::Brown),
            2 => Some(Color::Green),
            3 => Some(Color::Blue),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Brown => "brown",
            Color::Green => "green",
            Color::Blue => "blue",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::Color;

    #[test]
    fn from_index_maps_valid_values() {
        assert_eq!(Color::from_index(2), Some(Color::Green));
        assert_eq!(Color::from_index(4), None);
    }

    #[test]
    fn display_uses_lowercase_names() {
        assert_eq!(Color::Brown.to_string(), "brown");
        assert_eq!(Color::Blue.to_string(), "blue");
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Color::Red).unwrap(), "\"red\"");
        let parsed: Color = serde_json::from_str("\"green\"").unwrap();
        assert_eq!(parsed, Color::Green);
    }
}
