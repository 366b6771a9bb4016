use super::validate::{validate, Constraint};
use serde::Serialize;

/// Shown in the summary table for the hypothesized mean while the test is off.
pub const NOT_APPLICABLE: &str = "N/A";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    SampleSize,
    SampleMean,
    StandardDev,
    HypMean,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::SampleSize,
        Field::SampleMean,
        Field::StandardDev,
        Field::HypMean,
    ];

    pub fn index(self) -> usize {
        match self {
            Field::SampleSize => 0,
            Field::SampleMean => 1,
            Field::StandardDev => 2,
            Field::HypMean => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::SampleSize => "Sample size",
            Field::SampleMean => "Sample mean",
            Field::StandardDev => "Standard deviation",
            Field::HypMean => "Hypothesized mean",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Field::SampleSize => "sample_size",
            Field::SampleMean => "sample_mean",
            Field::StandardDev => "standard_dev",
            Field::HypMean => "hyp_mean",
        }
    }

    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.key() == key)
    }

    pub fn constraint(self) -> Option<Constraint> {
        match self {
            Field::SampleSize => Some(Constraint::at_least(2.0)),
            Field::StandardDev => Some(Constraint::above(0.0)),
            Field::SampleMean | Field::HypMean => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Hidden,
    Visible,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
}

/// Values being edited, the last committed values, and what the summary
/// table may show.
///
/// Edits only touch `temporary`. `commit` recomputes errors and visibility
/// from a single snapshot of `temporary`, so no partially validated state is
/// ever observable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormState {
    temporary: [String; 4],
    committed: [String; 4],
    errors: [String; 4],
    hypothesis_test_enabled: bool,
    table_visible: bool,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.temporary[field.index()] = value.into();
    }

    pub fn toggle_hypothesis_test(&mut self) {
        self.hypothesis_test_enabled = !self.hypothesis_test_enabled;
        self.errors[Field::HypMean.index()].clear();
        if !self.hypothesis_test_enabled && self.temporary(Field::HypMean).is_empty() {
            self.table_visible = false;
        }
    }

    pub fn commit(&mut self) {
        let errors = Field::ALL.map(|f| {
            if self.is_applicable(f) {
                validate(self.temporary(f), f.constraint())
            } else {
                String::new()
            }
        });
        let table_visible = errors.iter().all(|e| e.is_empty());
        *self = FormState {
            temporary: self.temporary.clone(),
            committed: self.temporary.clone(),
            errors,
            hypothesis_test_enabled: self.hypothesis_test_enabled,
            table_visible,
        };
    }

    pub fn reset(&mut self) {
        *self = FormState::new();
    }

    pub fn is_applicable(&self, field: Field) -> bool {
        field != Field::HypMean || self.hypothesis_test_enabled
    }

    pub fn temporary(&self, field: Field) -> &str {
        &self.temporary[field.index()]
    }

    pub fn committed(&self, field: Field) -> &str {
        &self.committed[field.index()]
    }

    pub fn error(&self, field: Field) -> &str {
        &self.errors[field.index()]
    }

    pub fn hypothesis_test_enabled(&self) -> bool {
        self.hypothesis_test_enabled
    }

    pub fn table_visible(&self) -> bool {
        self.table_visible
    }

    pub fn visibility(&self) -> Visibility {
        if self.table_visible {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }

    /// Rows of the summary table, in field order.
    pub fn summary(&self) -> Vec<SummaryRow> {
        Field::ALL
            .into_iter()
            .map(|f| {
                let value = if f == Field::HypMean && !self.hypothesis_test_enabled {
                    NOT_APPLICABLE.to_string()
                } else {
                    self.committed(f).to_string()
                };
                SummaryRow {
                    label: f.label(),
                    value,
                }
            })
            .collect()
    }

    /// Tab-separated rendering of the summary table.
    pub fn summary_text(&self) -> String {
        self.summary()
            .iter()
            .map(|r| format!("{}\t{}", r.label, r.value))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(size: &str, mean: &str, sd: &str) -> FormState {
        let mut st = FormState::new();
        st.set_field(Field::SampleSize, size);
        st.set_field(Field::SampleMean, mean);
        st.set_field(Field::StandardDev, sd);
        st
    }

    #[test]
    fn new_state_is_empty_and_hidden() {
        let st = FormState::new();
        for f in Field::ALL {
            assert_eq!(st.temporary(f), "");
            assert_eq!(st.committed(f), "");
            assert_eq!(st.error(f), "");
        }
        assert!(!st.hypothesis_test_enabled());
        assert_eq!(st.visibility(), Visibility::Hidden);
    }

    #[test]
    fn set_field_only_touches_in_progress_value() {
        let mut st = filled("30", "5", "1");
        st.commit();
        let before = st.clone();
        st.set_field(Field::SampleSize, "x");
        assert_eq!(st.temporary(Field::SampleSize), "x");
        assert_eq!(st.committed(Field::SampleSize), "30");
        assert_eq!(st.error(Field::SampleSize), "");
        assert_eq!(st.table_visible(), before.table_visible());
    }

    #[test]
    fn all_valid_without_hypothesis_shows_table() {
        let mut st = filled("30", "5", "1");
        st.commit();
        assert!(st.table_visible());
        let rows = st.summary();
        assert_eq!(rows[0].value, "30");
        assert_eq!(rows[1].value, "5");
        assert_eq!(rows[2].value, "1");
        assert_eq!(rows[3].label, "Hypothesized mean");
        assert_eq!(rows[3].value, NOT_APPLICABLE);
    }

    #[test]
    fn enabled_hypothesis_with_missing_mean_hides_table() {
        let mut st = FormState::new();
        st.toggle_hypothesis_test();
        st.set_field(Field::SampleSize, "30");
        st.set_field(Field::SampleMean, "5");
        st.set_field(Field::StandardDev, "1");
        st.commit();
        assert_eq!(st.error(Field::HypMean), "Please enter a value.");
        assert!(!st.table_visible());
    }

    #[test]
    fn zero_standard_deviation_is_rejected() {
        let mut st = filled("30", "5", "0");
        st.commit();
        assert_eq!(st.error(Field::StandardDev), "Value must be greater than 0.");
        assert!(!st.table_visible());
    }

    #[test]
    fn zero_standard_deviation_hides_a_visible_table() {
        let mut st = filled("30", "5", "1");
        st.commit();
        assert!(st.table_visible());
        st.set_field(Field::StandardDev, "-0");
        st.commit();
        assert_eq!(st.error(Field::StandardDev), "Value must be greater than 0.");
        assert_eq!(st.visibility(), Visibility::Hidden);
    }

    #[test]
    fn commit_copies_values_even_when_invalid() {
        let mut st = filled("1", "abc", "");
        st.commit();
        assert_eq!(st.committed(Field::SampleSize), "1");
        assert_eq!(st.committed(Field::SampleMean), "abc");
        assert_eq!(
            st.error(Field::SampleSize),
            "Value must be greater than or equal to 2."
        );
        assert_eq!(st.error(Field::SampleMean), "Value must be numeric.");
        assert_eq!(st.error(Field::StandardDev), "Please enter a value.");
    }

    #[test]
    fn commit_is_idempotent() {
        let mut st = filled("30", "5", "-2");
        st.toggle_hypothesis_test();
        st.set_field(Field::HypMean, "4");
        st.commit();
        let first = st.clone();
        st.commit();
        assert_eq!(st, first);
    }

    #[test]
    fn disabled_hypothesis_ignores_stored_text() {
        let mut st = filled("30", "5", "1");
        st.set_field(Field::HypMean, "not a number");
        st.commit();
        assert_eq!(st.error(Field::HypMean), "");
        assert!(st.table_visible());
        assert_eq!(st.committed(Field::HypMean), "not a number");
        assert_eq!(st.summary()[3].value, NOT_APPLICABLE);
    }

    #[test]
    fn enabled_hypothesis_shows_committed_mean() {
        let mut st = filled("30", "5", "1");
        st.toggle_hypothesis_test();
        st.set_field(Field::HypMean, "4.5");
        st.commit();
        assert!(st.table_visible());
        assert_eq!(st.summary()[3].value, "4.5");
    }

    #[test]
    fn toggle_clears_hypothesis_error() {
        let mut st = filled("30", "5", "1");
        st.toggle_hypothesis_test();
        st.commit();
        assert_eq!(st.error(Field::HypMean), "Please enter a value.");
        st.toggle_hypothesis_test();
        assert_eq!(st.error(Field::HypMean), "");
        assert!(!st.hypothesis_test_enabled());
    }

    #[test]
    fn disabling_with_empty_mean_hides_table() {
        let mut st = filled("30", "5", "1");
        st.toggle_hypothesis_test();
        st.set_field(Field::HypMean, "4");
        st.commit();
        assert!(st.table_visible());
        st.set_field(Field::HypMean, "");
        st.toggle_hypothesis_test();
        assert!(!st.table_visible());
    }

    #[test]
    fn disabling_with_filled_mean_keeps_table() {
        let mut st = filled("30", "5", "1");
        st.toggle_hypothesis_test();
        st.set_field(Field::HypMean, "4");
        st.commit();
        st.toggle_hypothesis_test();
        assert!(st.table_visible());
    }

    #[test]
    fn enabling_does_not_hide_visible_table() {
        let mut st = filled("30", "5", "1");
        st.commit();
        st.toggle_hypothesis_test();
        assert!(st.hypothesis_test_enabled());
        assert!(st.table_visible());
    }

    #[test]
    fn failing_commit_hides_visible_table() {
        let mut st = filled("30", "5", "1");
        st.commit();
        assert!(st.table_visible());
        st.set_field(Field::SampleSize, "");
        st.commit();
        assert!(!st.table_visible());
    }

    #[test]
    fn reset_restores_defaults() {
        let mut st = filled("30", "5", "1");
        st.toggle_hypothesis_test();
        st.set_field(Field::HypMean, "abc");
        st.commit();
        st.set_field(Field::SampleMean, "7");
        st.reset();
        assert_eq!(st, FormState::new());
    }

    #[test]
    fn field_keys_round_trip() {
        for f in Field::ALL {
            assert_eq!(Field::from_key(f.key()), Some(f));
        }
        assert_eq!(Field::from_key("nope"), None);
    }

    #[test]
    fn summary_text_is_tab_separated() {
        let mut st = filled("30", "5", "1");
        st.commit();
        assert_eq!(
            st.summary_text(),
            "Sample size\t30\nSample mean\t5\nStandard deviation\t1\nHypothesized mean\tN/A"
        );
    }
}
