use crate::domain::model::Patient;

pub const EMPTY_LISTING: &str = "Nenhum paciente cadastrado.";

const NAME_HEADER: &str = "Nome";
const AGE_HEADER: &str = "Idade";
const PHONE_HEADER: &str = "Telefone";
const AGE_WIDTH: usize = 5;
const NAME_WIDTH_CAP: usize = 40;
const PHONE_WIDTH_CAP: usize = 20;

/// Renders `records` as an aligned table. Values longer than the column caps
/// are printed whole and push the row out of alignment.
pub fn format_table(records: &[&Patient]) -> Vec<String> {
    if records.is_empty() {
        return vec![EMPTY_LISTING.to_string()];
    }

    let name_width = column_width(
        records.iter().map(|p| p.name.as_str()),
        NAME_HEADER,
        NAME_WIDTH_CAP,
    );
    let phone_width = column_width(
        records.iter().map(|p| p.phone.as_str()),
        PHONE_HEADER,
        PHONE_WIDTH_CAP,
    );

    let header = format!(
        "{:<name_width$}  {:>AGE_WIDTH$}  {:<phone_width$}",
        NAME_HEADER, AGE_HEADER, PHONE_HEADER
    );
    let separator = "-".repeat(header.chars().count());

    let mut lines = Vec::with_capacity(records.len() + 2);
    lines.push(header);
    lines.push(separator);
    for patient in records {
        lines.push(format!(
            "{:<name_width$}  {:>AGE_WIDTH$}  {:<phone_width$}",
            patient.name, patient.age, patient.phone
        ));
    }
    lines
}

/// max(header length, min(cap, longest value)), in characters.
fn column_width<'a>(values: impl Iterator<Item = &'a str>, header: &str, cap: usize) -> usize {
    let longest = values.map(|v| v.chars().count()).max().unwrap_or(0);
    longest.min(cap).max(header.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_records_single_line() {
        assert_eq!(format_table(&[]), vec![EMPTY_LISTING.to_string()]);
    }

    #[test]
    fn test_minimum_widths() {
        let ana = Patient::new("Ana", 7, "123");
        let lines = format_table(&[&ana]);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Nome  Idade  Telefone");
        assert_eq!(lines[1], "-".repeat(21));
        assert_eq!(lines[2], "Ana       7  123     ");
    }

    #[test]
    fn test_widths_follow_longest_value() {
        let a = Patient::new("Ana Silva", 30, "11999990000");
        let b = Patient::new("Mariana Costa", 105, "222");
        let lines = format_table(&[&a, &b]);
        assert_eq!(lines[0], "Nome           Idade  Telefone   ");
        assert_eq!(lines[1].len(), lines[0].len());
        assert_eq!(lines[2], "Ana Silva         30  11999990000");
        assert_eq!(lines[3], "Mariana Costa    105  222        ");
    }

    #[test]
    fn test_long_values_overflow_without_truncation() {
        let long_name = "N".repeat(45);
        let long_phone = "9".repeat(25);
        let short = Patient::new("Bia", 1, "1");
        let long = Patient::new(long_name.clone(), 2, long_phone.clone());
        let lines = format_table(&[&short, &long]);

        // header and separator are capped at 40 + 2 + 5 + 2 + 20
        assert_eq!(lines[0].chars().count(), 69);
        assert_eq!(lines[1].chars().count(), 69);
        assert!(lines[3].starts_with(&long_name));
        assert!(lines[3].ends_with(&long_phone));
        assert!(lines[3].chars().count() > 69);
    }

    #[test]
    fn test_width_counts_characters() {
        let joao = Patient::new("João Araújo", 50, "1");
        let lines = format_table(&[&joao]);
        assert_eq!(lines[0].chars().count(), lines[2].chars().count());
    }
}
