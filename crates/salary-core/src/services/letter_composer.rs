//! Letter body composition from fixed Danish templates
//!
//! One template per `LetterType`. Every interpolated amount is already the
//! two-decimal text stored in the spreadsheet, so a composed letter matches
//! the figures printed next to it cell for cell.

use crate::constants::{CONTENT_UNAVAILABLE, DEFAULT_SENDER};
use salary_types::{LetterFields, LetterType};

#[derive(Debug, Clone)]
pub struct LetterComposer {
    sender: String,
}

impl Default for LetterComposer {
    fn default() -> Self {
        Self::new(DEFAULT_SENDER)
    }
}

impl LetterComposer {
    pub fn new(sender: impl Into<String>) -> Self {
        Self { sender: sender.into() }
    }

    pub fn sender(&self) -> &str {
        &self.sender
    }

    /// Compose the letter for a letter-type label as stored in the sheet.
    ///
    /// Labels without a template yield `CONTENT_UNAVAILABLE` instead of an error.
    pub fn compose(&self, fields: &LetterFields, letter_type: &str) -> String {
        match LetterType::from_label(letter_type) {
            Some(letter_type) => self.compose_typed(fields, letter_type),
            None => {
                log::debug!("No template for letter type '{}' ({})", letter_type, fields.identifier);
                CONTENT_UNAVAILABLE.to_string()
            }
        }
    }

    pub fn compose_typed(&self, fields: &LetterFields, letter_type: LetterType) -> String {
        match letter_type {
            LetterType::SalaryRegulation2025 => self.salary_regulation(fields),
            LetterType::PensionChange => self.pension_change(fields),
            LetterType::ContractAmendment => self.contract_amendment(fields),
            LetterType::AnnualSalaryReview => self.annual_review(fields),
        }
    }

    /// One-line summary stored in the `ChangeDescription` column
    pub fn describe_change(&self, fields: &LetterFields, letter_type: LetterType) -> String {
        match letter_type {
            LetterType::SalaryRegulation2025 => format!(
                "Individual salary increase of {}% effective {}",
                fields.percentage_increase, fields.effective_date
            ),
            LetterType::PensionChange => {
                format!("Pension contribution increase to {}%", fields.pension_increase)
            }
            LetterType::ContractAmendment => {
                format!("Contract update with new salary terms from {}", fields.effective_date)
            }
            LetterType::AnnualSalaryReview => {
                format!("Annual review resulting in {}% increase", fields.percentage_increase)
            }
        }
    }

    fn salary_regulation(&self, f: &LetterFields) -> String {
        format!(
            "Lønregulering 2025\n\n\
             Kære {name}\n\n\
             Lønreguleringen 2025 for HK medarbejdere er nu afsluttet, og i dette brev kan du læse om hvad det betyder for dig.\n\n\
             Følgende regulering er fastlagt i overenskomsten med virkning 1. maj 2025:\n\
             • Forhøjelse af pensionsbidrag med {pension}%\n\n\
             Din nærmeste leder har besluttet, at du ud over den nævnte stigning i overenskomsten også skal have en individuel lønregulering gældende pr. {date}.\n\n\
             Din basisløn er blevet reguleret til {new_base} kr. og din nye bruttoløn udgør nu {new_gross} kr. \
             Den individuelle lønregulering på din bruttoløn er {adjustment} kr., svarende til en stigning på {percent}%.\n\n\
             Din nye løn er med tilbagevirkende kraft fra den {date}.\n\n\
             Denne individuelle regulering vil finde sted ved lønudbetalingen ultimo juni måned 2025.\n\n\
             Med venlig hilsen\n\
             {sender}",
            name = f.full_name(),
            pension = f.pension_increase,
            date = f.effective_date,
            new_base = f.new_base_salary,
            new_gross = f.new_gross_salary,
            adjustment = f.individual_adjustment,
            percent = f.percentage_increase,
            sender = self.sender,
        )
    }

    fn pension_change(&self, f: &LetterFields) -> String {
        format!(
            "Ændring af pensionsbidrag\n\n\
             Kære {name}\n\n\
             Vi ønsker at informere dig om en ændring i dit pensionsbidrag.\n\n\
             Med virkning fra {date} vil dit pensionsbidrag blive forhøjet med {pension}%.\n\n\
             Din nuværende bruttoløn på {gross} kr. forbliver uændret. Ændringen påvirker kun pensionsbidraget.\n\n\
             Ændringen er en del af den nye overenskomst og vil fremgå af din næste lønseddel.\n\n\
             Med venlig hilsen\n\
             {sender}",
            name = f.full_name(),
            date = f.effective_date,
            pension = f.pension_increase,
            gross = f.gross_salary,
            sender = self.sender,
        )
    }

    fn contract_amendment(&self, f: &LetterFields) -> String {
        format!(
            "Tillæg til ansættelseskontrakt\n\n\
             Kære {name}\n\n\
             Dette brev bekræfter ændringer til din ansættelseskontrakt med virkning fra {date}.\n\n\
             Dine lønvilkår opdateres som følger:\n\
             - Ny basisløn: {new_base} kr.\n\
             - Ny bruttoløn: {new_gross} kr.\n\n\
             Alle andre vilkår i din ansættelseskontrakt forbliver uændrede.\n\n\
             Med venlig hilsen\n\
             {sender}",
            name = f.full_name(),
            date = f.effective_date,
            new_base = f.new_base_salary,
            new_gross = f.new_gross_salary,
            sender = self.sender,
        )
    }

    fn annual_review(&self, f: &LetterFields) -> String {
        format!(
            "Årlig lønregulering\n\n\
             Kære {name}\n\n\
             Som en del af vores årlige lønregulering har vi glæden af at meddele dig følgende ændringer med virkning fra {date}.\n\n\
             Din basisløn forhøjes fra {base} kr. til {new_base} kr., hvilket svarer til en stigning på {percent}%.\n\n\
             Din nye bruttoløn vil udgøre {new_gross} kr.\n\n\
             Denne stigning er baseret på din præstation og udvikling i det forløbne år.\n\n\
             Med venlig hilsen\n\
             {sender}",
            name = f.full_name(),
            date = f.effective_date,
            base = f.base_salary,
            new_base = f.new_base_salary,
            percent = f.percentage_increase,
            new_gross = f.new_gross_salary,
            sender = self.sender,
        )
    }
}
