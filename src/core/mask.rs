//! Fixed-pattern input masks
//!
//! A mask filters raw keyboard input down to the characters its slots accept,
//! inserting literal separators as it goes. Masks never reject input; they
//! only drop what does not fit.

/// Letters never used in Canadian postal codes
const POSTAL_EXCLUDED: [char; 6] = ['D', 'F', 'I', 'O', 'Q', 'U'];

/// One position of a mask
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Any ASCII digit
    Digit,
    /// Any ASCII letter
    Letter,
    /// First letter of a postal code: A-V, X or Y, minus the excluded letters
    PostalFirstLetter,
    /// Any other postal code letter, minus the excluded letters
    PostalLetter,
    /// A separator inserted by the mask
    Literal(char),
}

impl Slot {
    fn accepts(&self, c: char) -> Option<char> {
        match self {
            Slot::Digit => c.is_ascii_digit().then_some(c),
            Slot::Letter => c.is_ascii_alphabetic().then_some(c),
            Slot::PostalFirstLetter => {
                let upper = c.to_ascii_uppercase();
                let in_range = matches!(upper, 'A'..='V' | 'X' | 'Y');
                (in_range && !POSTAL_EXCLUDED.contains(&upper)).then_some(upper)
            }
            Slot::PostalLetter => {
                let upper = c.to_ascii_uppercase();
                (upper.is_ascii_uppercase() && !POSTAL_EXCLUDED.contains(&upper)).then_some(upper)
            }
            Slot::Literal(_) => None,
        }
    }
}

/// Input mask built from a sequence of slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputMask {
    slots: Vec<Slot>,
}

impl InputMask {
    /// Parse a pattern: `9` is a digit, `a` a letter, anything else a literal
    pub fn from_pattern(pattern: &str) -> Self {
        let slots = pattern
            .chars()
            .map(|c| match c {
                '9' => Slot::Digit,
                'a' => Slot::Letter,
                other => Slot::Literal(other),
            })
            .collect();
        Self { slots }
    }

    pub fn from_slots(slots: Vec<Slot>) -> Self {
        Self { slots }
    }

    /// `999-999-9999`
    pub fn phone() -> Self {
        Self::from_pattern("999-999-9999")
    }

    /// Two-letter province code
    pub fn province() -> Self {
        Self::from_pattern("aa")
    }

    /// Canadian postal code, `A9A 9A9`
    pub fn postal_code() -> Self {
        Self::from_slots(vec![
            Slot::PostalFirstLetter,
            Slot::Digit,
            Slot::PostalLetter,
            Slot::Literal(' '),
            Slot::Digit,
            Slot::PostalLetter,
            Slot::Digit,
        ])
    }

    pub fn card_number() -> Self {
        Self::from_pattern("9999 9999 9999 9999")
    }

    /// Card expiry as `mm/yy`
    pub fn expiration() -> Self {
        Self::from_pattern("99/99")
    }

    pub fn csc() -> Self {
        Self::from_pattern("9999")
    }

    pub fn institution_number() -> Self {
        Self::from_pattern("999")
    }

    pub fn transit_number() -> Self {
        Self::from_pattern("99999")
    }

    pub fn account_number() -> Self {
        Self::from_pattern("999999999999")
    }

    /// Number of input characters the mask accepts, separators excluded
    pub fn capacity(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| !matches!(slot, Slot::Literal(_)))
            .count()
    }

    /// Format raw input through the mask.
    ///
    /// Characters that do not fit the next open slot are dropped. Literals are
    /// only written once a later slot has been filled, so a partial value
    /// never ends with a dangling separator.
    pub fn apply(&self, raw: &str) -> String {
        let mut out = String::with_capacity(self.slots.len());
        let mut pending = String::new();
        let mut input = raw.chars().peekable();

        for slot in &self.slots {
            if let Slot::Literal(literal) = slot {
                if input.peek() == Some(literal) {
                    input.next();
                }
                pending.push(*literal);
                continue;
            }

            let accepted = loop {
                match input.next() {
                    Some(c) => {
                        if let Some(accepted) = slot.accepts(c) {
                            break Some(accepted);
                        }
                    }
                    None => break None,
                }
            };

            match accepted {
                Some(c) => {
                    out.push_str(&pending);
                    pending.clear();
                    out.push(c);
                }
                None => break,
            }
        }

        out
    }

    /// Whether a formatted value fills every slot of the mask
    pub fn is_complete(&self, value: &str) -> bool {
        let formatted = self.apply(value);
        formatted.chars().count() == self.slots.len()
    }
}
