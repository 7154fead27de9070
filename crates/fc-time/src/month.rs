//! `Month` — month-of-year enum.

/// Month of the year.
///
/// Variants are numbered 1–12 (January = 1, December = 12).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Month {
    /// January (1).
    January = 1,
    /// February (2).
    February = 2,
    /// March (3).
    March = 3,
    /// April (4).
    April = 4,
    /// May (5).
    May = 5,
    /// June (6).
    June = 6,
    /// July (7).
    July = 7,
    /// August (8).
    August = 8,
    /// September (9).
    September = 9,
    /// October (10).
    October = 10,
    /// November (11).
    November = 11,
    /// December (12).
    December = 12,
}

impl Month {
    /// Construct from a number (1 = January … 12 = December).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Month::January),
            2 => Some(Month::February),
            3 => Some(Month::March),
            4 => Some(Month::April),
            5 => Some(Month::May),
            6 => Some(Month::June),
            7 => Some(Month::July),
            8 => Some(Month::August),
            9 => Some(Month::September),
            10 => Some(Month::October),
            11 => Some(Month::November),
            12 => Some(Month::December),
            _ => None,
        }
    }

    /// Construct from a full English name, case-insensitively.
    ///
    /// Used by the shorthand-notation parser (`DECEMBER/25`).
    /// Returns `None` if the name is not a month.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "JANUARY" => Some(Month::January),
            "FEBRUARY" => Some(Month::February),
            "MARCH" => Some(Month::March),
            "APRIL" => Some(Month::April),
            "MAY" => Some(Month::May),
            "JUNE" => Some(Month::June),
            "JULY" => Some(Month::July),
            "AUGUST" => Some(Month::August),
            "SEPTEMBER" => Some(Month::September),
            "OCTOBER" => Some(Month::October),
            "NOVEMBER" => Some(Month::November),
            "DECEMBER" => Some(Month::December),
            _ => None,
        }
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Return the full name (`"January"`, `"February"`, …).
    pub fn long_name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.long_name())
    }
}

impl From<Month> for u8 {
    fn from(m: Month) -> u8 {
        m as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_roundtrip() {
        for n in 1..=12u8 {
            assert_eq!(Month::from_number(n).unwrap().number(), n);
        }
        assert!(Month::from_number(0).is_none());
        assert!(Month::from_number(13).is_none());
    }

    #[test]
    fn from_name_any_case() {
        assert_eq!(Month::from_name("DECEMBER"), Some(Month::December));
        assert_eq!(Month::from_name("july"), Some(Month::July));
        assert_eq!(Month::from_name("November"), Some(Month::November));
        assert_eq!(Month::from_name("FEBTEMBER"), None);
    }
}
