//! The fixed feature schema and the two canned demo records.

/// Ordered feature names. Defines both the form layout and the request shape.
pub const FEATURE_COLUMNS: [&str; 36] = [
    "Marital Status",
    "Application mode",
    "Application order",
    "Course",
    "Daytime/evening attendance",
    "Previous qualification",
    "Previous qualification (grade)",
    "Nacionality",
    "Mother's qualification",
    "Father's qualification",
    "Mother's occupation",
    "Father's occupation",
    "Admission grade",
    "Displaced",
    "Educational special needs",
    "Debtor",
    "Tuition fees up to date",
    "Gender",
    "Scholarship holder",
    "Age at enrollment",
    "International",
    "Curricular units 1st sem (credited)",
    "Curricular units 1st sem (enrolled)",
    "Curricular units 1st sem (evaluations)",
    "Curricular units 1st sem (approved)",
    "Curricular units 1st sem (grade)",
    "Curricular units 1st sem (without evaluations)",
    "Curricular units 2nd sem (credited)",
    "Curricular units 2nd sem (enrolled)",
    "Curricular units 2nd sem (evaluations)",
    "Curricular units 2nd sem (approved)",
    "Curricular units 2nd sem (grade)",
    "Curricular units 2nd sem (without evaluations)",
    "Unemployment rate",
    "Inflation rate",
    "GDP",
];

const EXAMPLE_DROPOUT: &[(&str, f64)] = &[
    ("Marital Status", 1.0),
    ("Application mode", 17.0),
    ("Application order", 5.0),
    ("Course", 171.0),
    ("Daytime/evening attendance", 1.0),
    ("Previous qualification", 1.0),
    ("Previous qualification (grade)", 122.0),
    ("Nacionality", 1.0),
    ("Mother's qualification", 19.0),
    ("Father's qualification", 12.0),
    ("Mother's occupation", 10.0),
    ("Father's occupation", 5.0),
    ("Admission grade", 120.0),
    ("Displaced", 0.0),
    ("Educational special needs", 0.0),
    ("Debtor", 0.0),
    ("Tuition fees up to date", 1.0),
    ("Gender", 1.0),
    ("Scholarship holder", 0.0),
    ("Age at enrollment", 18.0),
    ("International", 0.0),
    ("Curricular units 1st sem (credited)", 0.0),
    ("Curricular units 1st sem (enrolled)", 0.0),
    ("Curricular units 1st sem (evaluations)", 0.0),
    ("Curricular units 1st sem (approved)", 0.0),
    ("Curricular units 1st sem (grade)", 0.0),
    ("Curricular units 1st sem (without evaluations)", 0.0),
    ("Curricular units 2nd sem (credited)", 0.0),
    ("Curricular units 2nd sem (enrolled)", 0.0),
    ("Curricular units 2nd sem (evaluations)", 0.0),
    ("Curricular units 2nd sem (approved)", 0.0),
    ("Curricular units 2nd sem (grade)", 0.0),
    ("Curricular units 2nd sem (without evaluations)", 0.0),
    ("Unemployment rate", 10.8),
    ("Inflation rate", 1.4),
    ("GDP", 1.74),
];

const EXAMPLE_GRADUATE: &[(&str, f64)] = &[
    ("Marital Status", 1.0),
    ("Application mode", 15.0),
    ("Application order", 1.0),
    ("Course", 9254.0),
    ("Daytime/evening attendance", 1.0),
    ("Previous qualification", 1.0),
    ("Previous qualification (grade)", 160.0),
    ("Nacionality", 1.0),
    ("Mother's qualification", 1.0),
    ("Father's qualification", 3.0),
    ("Mother's occupation", 5.0),
    ("Father's occupation", 8.0),
    ("Admission grade", 158.0),
    ("Displaced", 0.0),
    ("Educational special needs", 0.0),
    ("Debtor", 0.0),
    ("Tuition fees up to date", 1.0),
    ("Gender", 0.0),
    ("Scholarship holder", 1.0),
    ("Age at enrollment", 18.0),
    ("International", 0.0),
    ("Curricular units 1st sem (credited)", 6.0),
    ("Curricular units 1st sem (enrolled)", 6.0),
    ("Curricular units 1st sem (evaluations)", 6.0),
    ("Curricular units 1st sem (approved)", 6.0),
    ("Curricular units 1st sem (grade)", 13.7),
    ("Curricular units 1st sem (without evaluations)", 0.0),
    ("Curricular units 2nd sem (credited)", 6.0),
    ("Curricular units 2nd sem (enrolled)", 6.0),
    ("Curricular units 2nd sem (evaluations)", 6.0),
    ("Curricular units 2nd sem (approved)", 6.0),
    ("Curricular units 2nd sem (grade)", 13.7),
    ("Curricular units 2nd sem (without evaluations)", 0.0),
    ("Unemployment rate", 13.9),
    ("Inflation rate", -0.3),
    ("GDP", 0.79),
];

/// Demo records used to prefill the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExampleRecord {
    Dropout,
    Graduate,
}

impl ExampleRecord {
    pub fn values(self) -> &'static [(&'static str, f64)] {
        match self {
            ExampleRecord::Dropout => EXAMPLE_DROPOUT,
            ExampleRecord::Graduate => EXAMPLE_GRADUATE,
        }
    }

    /// Caption for the prefill button.
    pub fn caption(self) -> &'static str {
        match self {
            ExampleRecord::Dropout => "Example: Dropout",
            ExampleRecord::Graduate => "Example: Graduate",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn schema_names_are_unique() {
        let unique: HashSet<_> = FEATURE_COLUMNS.iter().collect();
        assert_eq!(unique.len(), FEATURE_COLUMNS.len());
    }

    #[test]
    fn examples_cover_the_schema_in_order() {
        for example in [ExampleRecord::Dropout, ExampleRecord::Graduate] {
            let names: Vec<&str> = example.values().iter().map(|(n, _)| *n).collect();
            assert_eq!(names, FEATURE_COLUMNS.to_vec(), "{:?}", example);
        }
    }
}
