//! Russian plural forms.

/// Grammatical number selected for a count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralForm {
    /// 1, 21, 101, ...
    One,
    /// 2-4, 22-24, ...
    Few,
    /// 0, 5-20, 25-30, 111-114, ...
    Many,
}

impl PluralForm {
    /// Teens are checked before the last digit so that 11 is `Many` while
    /// 21 is `One`.
    pub fn for_count(count: u64) -> Self {
        let last_two = count % 100;
        if (11..=19).contains(&last_two) {
            return Self::Many;
        }
        match count % 10 {
            1 => Self::One,
            2..=4 => Self::Few,
            _ => Self::Many,
        }
    }
}

/// The three spellings of one noun.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NounForms {
    pub one: &'static str,
    pub few: &'static str,
    pub many: &'static str,
}

impl NounForms {
    pub const fn new(one: &'static str, few: &'static str, many: &'static str) -> Self {
        Self { one, few, many }
    }

    pub fn pick(&self, count: u64) -> &'static str {
        match PluralForm::for_count(count) {
            PluralForm::One => self.one,
            PluralForm::Few => self.few,
            PluralForm::Many => self.many,
        }
    }

    /// `"<count> <noun>"`.
    pub fn with_count(&self, count: u64) -> String {
        format!("{} {}", count, self.pick(count))
    }
}

/// Line items in the list ("позиция").
pub const POSITIONS: NounForms = NounForms::new("позиция", "позиции", "позиций");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_forms() {
        assert_eq!(PluralForm::for_count(1), PluralForm::One);
        assert_eq!(PluralForm::for_count(2), PluralForm::Few);
        assert_eq!(PluralForm::for_count(5), PluralForm::Many);
        assert_eq!(PluralForm::for_count(0), PluralForm::Many);
    }

    #[test]
    fn teens_override_last_digit() {
        for n in 11..=19 {
            assert_eq!(PluralForm::for_count(n), PluralForm::Many, "{n}");
        }
        assert_eq!(PluralForm::for_count(111), PluralForm::Many);
        assert_eq!(PluralForm::for_count(1012), PluralForm::Many);
    }

    #[test]
    fn twenties_follow_last_digit() {
        assert_eq!(PluralForm::for_count(21), PluralForm::One);
        assert_eq!(PluralForm::for_count(24), PluralForm::Few);
        assert_eq!(PluralForm::for_count(25), PluralForm::Many);
        assert_eq!(PluralForm::for_count(101), PluralForm::One);
    }

    #[test]
    fn positions_noun() {
        assert_eq!(POSITIONS.with_count(1), "1 позиция");
        assert_eq!(POSITIONS.with_count(3), "3 позиции");
        assert_eq!(POSITIONS.with_count(11), "11 позиций");
        assert_eq!(POSITIONS.with_count(21), "21 позиция");
    }
}
