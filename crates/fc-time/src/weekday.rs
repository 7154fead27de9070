//! `Weekday` — day-of-week enum.

/// Day of the week.
///
/// Variants are numbered 1–7 (Monday = 1, Sunday = 7), ISO-8601 style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

impl Weekday {
    /// Construct from the ISO ordinal (1 = Monday … 7 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        match n {
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            7 => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Construct from a full English name, case-insensitively.
    ///
    /// Used by the shorthand-notation parser (`3MONDAY/NOVEMBER`).
    /// Returns `None` if the name is not a weekday.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "MONDAY" => Some(Weekday::Monday),
            "TUESDAY" => Some(Weekday::Tuesday),
            "WEDNESDAY" => Some(Weekday::Wednesday),
            "THURSDAY" => Some(Weekday::Thursday),
            "FRIDAY" => Some(Weekday::Friday),
            "SATURDAY" => Some(Weekday::Saturday),
            "SUNDAY" => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Return `true` if this is Saturday or Sunday.
    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    /// Return the ISO ordinal (1 = Monday … 7 = Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_roundtrip() {
        for n in 1..=7u8 {
            assert_eq!(Weekday::from_ordinal(n).unwrap().ordinal(), n);
        }
        assert!(Weekday::from_ordinal(0).is_none());
        assert!(Weekday::from_ordinal(8).is_none());
    }

    #[test]
    fn from_name_any_case() {
        assert_eq!(Weekday::from_name("MONDAY"), Some(Weekday::Monday));
        assert_eq!(Weekday::from_name("thursday"), Some(Weekday::Thursday));
        assert_eq!(Weekday::from_name("Sunday"), Some(Weekday::Sunday));
        assert_eq!(Weekday::from_name("MONTAG"), None);
    }

    #[test]
    fn weekend() {
        assert!(Weekday::Saturday.is_weekend());
        assert!(Weekday::Sunday.is_weekend());
        assert!(!Weekday::Friday.is_weekend());
    }
}
