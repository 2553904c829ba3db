/// Formats a value with `precision` digits after the decimal point, or with
/// the shortest round-trip representation when `precision` is `None`.
#[must_use]
pub fn format_value(value: f64, precision: Option<usize>) -> String {
    match precision {
        Some(digits) => format!("{value:.digits$}"),
        None => format!("{value}"),
    }
}

/// Formats a vector as space-separated values.
#[must_use]
pub fn format_vector(x: &[f64], precision: Option<usize>) -> String {
    x.iter()
        .map(|value| format_value(*value, precision))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortest_form_by_default() {
        assert_eq!(format_vector(&[1.0, 0.0, -0.5], None), "1 0 -0.5");
    }

    #[test]
    fn fixed_precision() {
        assert_eq!(format_vector(&[1.0, 2.0 / 3.0], Some(3)), "1.000 0.667");
        assert_eq!(format_value(f64::NAN, Some(2)), "NaN");
    }

    #[test]
    fn empty_vector_is_empty_string() {
        assert_eq!(format_vector(&[], None), "");
    }
}
