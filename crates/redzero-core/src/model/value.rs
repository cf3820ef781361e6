use core::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum Value {
    Zero = 0,
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
}

impl Value {
    pub const ORDERED: [Value; 8] = [
        Value::Zero,
        Value::One,
        Value::Two,
        Value::Three,
        Value::Four,
        Value::Five,
        Value::Six,
        Value::Seven,
    ];

    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(Value::Zero),
            1 => Some(Value::One),
            2 => Some(Value::Two),
            3 => Some(Value::Three),
            4 => Some(Value::Four),
            5 => Some(Value::Five),
            6 => Some(Value::Six),
            7 => Some(Value::Seven),
            _ => None,
        }
    }

    pub const fn raw(self) -> u8 {
        self as u8
    }

    /// High cards (6 and 7) anchor the hand evaluation.
    pub const fn is_high(self) -> bool {
        matches!(self, Value::Six | Value::Seven)
    }
}

impl From<Value> for u8 {
    fn from(value: Value) -> Self {
        value.raw()
    }
}

impl TryFrom<u8> for Value {
    type Error = &'static str;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Value::from_raw(raw).ok_or("card value out of range 0-7")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw())
    }
}
