/// Output naming for rendered letters
use crate::constants::LETTER_TITLE;
use salary_types::LetterFields;
use std::path::{Path, PathBuf};

pub const PDF_EXTENSION: &str = "pdf";

/// File name of a rendered letter: `"<title> – <first> <last> – <identifier>.pdf"`.
///
/// Unique per record as long as identifiers are unique within the batch.
pub fn letter_file_name(fields: &LetterFields) -> String {
    format!(
        "{} – {} {} – {}.{}",
        LETTER_TITLE, fields.first_name, fields.last_name, fields.identifier, PDF_EXTENSION
    )
}

pub fn letter_path(output_dir: &Path, fields: &LetterFields) -> PathBuf {
    output_dir.join(letter_file_name(fields))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(first: &str, last: &str, identifier: &str) -> LetterFields {
        LetterFields {
            identifier: identifier.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            base_salary: "30000.00".to_string(),
            new_base_salary: "30750.00".to_string(),
            gross_salary: "36000.00".to_string(),
            new_gross_salary: "36900.00".to_string(),
            individual_adjustment: "750.00".to_string(),
            percentage_increase: "2.50".to_string(),
            effective_date: "1. marts 2025".to_string(),
            pension_increase: "1.00".to_string(),
            letter_type: None,
        }
    }

    #[test]
    fn test_letter_file_name() {
        assert_eq!(
            letter_file_name(&fields("Lærke", "Holm", "010185-1234")),
            "Lønregulering 2025 – Lærke Holm – 010185-1234.pdf"
        );
    }

    #[test]
    fn test_letter_path_is_inside_output_dir() {
        let dir = Path::new("/tmp/letters");
        let path = letter_path(dir, &fields("Anna", "Berg", "020290-2000"));
        assert!(path.starts_with(dir));
        assert_eq!(path.extension().and_then(|e| e.to_str()), Some(PDF_EXTENSION));
    }

    #[test]
    fn test_names_differ_by_identifier() {
        let a = letter_file_name(&fields("Anna", "Berg", "020290-2000"));
        let b = letter_file_name(&fields("Anna", "Berg", "020290-2001"));
        assert_ne!(a, b);
    }
}
