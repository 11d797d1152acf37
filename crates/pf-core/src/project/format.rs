/// Month abbreviations, indexed by `month - 1`.
pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic",
];

/// Render a `YYYY-MM` date as `"{abbreviated month} {year}"`.
///
/// Anything that does not parse (missing month, month outside 1..=12) is
/// returned unchanged rather than rejected.
pub fn format_project_date(date: &str) -> String {
    let mut parts = date.trim().splitn(3, '-');
    let (Some(year), Some(month)) = (parts.next(), parts.next()) else {
        return date.to_string();
    };

    match month.parse::<usize>() {
        Ok(m) if !year.is_empty() && (1..=12).contains(&m) => {
            format!("{} {}", MONTH_ABBREVIATIONS[m - 1], year)
        }
        _ => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_year_month() {
        assert_eq!(format_project_date("2023-06"), "Jun 2023");
        assert_eq!(format_project_date("2021-01"), "Ene 2021");
        assert_eq!(format_project_date("2022-12"), "Dic 2022");
    }

    #[test]
    fn ignores_day_component() {
        assert_eq!(format_project_date("2024-08-15"), "Ago 2024");
    }

    #[test]
    fn passes_malformed_input_through() {
        assert_eq!(format_project_date("2024"), "2024");
        assert_eq!(format_project_date("2024-13"), "2024-13");
        assert_eq!(format_project_date("2024-00"), "2024-00");
        assert_eq!(format_project_date(""), "");
    }
}
