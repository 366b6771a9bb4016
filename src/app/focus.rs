use crate::form::Field;

/// Focusable items of the form, in tab order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    SampleSize,
    SampleMean,
    StandardDev,
    Checkbox,
    HypMean,
    Ok,
    Reset,
}

impl Focus {
    pub const ORDER: [Focus; 7] = [
        Focus::SampleSize,
        Focus::SampleMean,
        Focus::StandardDev,
        Focus::Checkbox,
        Focus::HypMean,
        Focus::Ok,
        Focus::Reset,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Focus {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Focus {
        let n = Self::ORDER.len();
        Self::ORDER[(self.position() + n - 1) % n]
    }

    /// The text field behind this item, if it is one.
    pub fn field(self) -> Option<Field> {
        match self {
            Focus::SampleSize => Some(Field::SampleSize),
            Focus::SampleMean => Some(Field::SampleMean),
            Focus::StandardDev => Some(Field::StandardDev),
            Focus::HypMean => Some(Field::HypMean),
            Focus::Checkbox | Focus::Ok | Focus::Reset => None,
        }
    }
}
