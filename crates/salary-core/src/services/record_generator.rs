//! Synthetic employee record generation
//!
//! The generator owns its random source, so a seeded `StdRng` reproduces a
//! batch exactly. Identifiers are unique within one `generate_batch` call.

use super::letter_composer::LetterComposer;
use super::pools::ValuePools;
use crate::constants::DEFAULT_MAX_IDENTIFIER_ATTEMPTS;
use crate::error::{Result, SalaryError};
use rand::seq::SliceRandom;
use rand::Rng;
use salary_types::identifier::{MAX_DAY, MAX_PSEUDO_YEAR, MAX_SEQUENCE, MIN_PSEUDO_YEAR, MIN_SEQUENCE};
use salary_types::{
    EffectiveDate, EmployeeRecord, Identifier, LetterType, Money, Percent, SalaryFigures,
};
use std::collections::HashSet;

/// Share of records whose pension increase differs from 1.00%
const PENSION_VARIATION_RATE: f64 = 0.1;

/// Share of records that carry an additional note
const ADDITIONAL_NOTES_RATE: f64 = 0.3;

pub struct RecordGenerator<R: Rng> {
    rng: R,
    pools: ValuePools,
    composer: LetterComposer,
    max_identifier_attempts: u32,
}

impl<R: Rng> RecordGenerator<R> {
    pub fn new(rng: R, composer: LetterComposer) -> Self {
        Self {
            rng,
            pools: ValuePools::danish(),
            composer,
            max_identifier_attempts: DEFAULT_MAX_IDENTIFIER_ATTEMPTS,
        }
    }

    pub fn with_pools(mut self, pools: ValuePools) -> Self {
        self.pools = pools;
        self
    }

    pub fn with_max_identifier_attempts(mut self, attempts: u32) -> Self {
        self.max_identifier_attempts = attempts.max(1);
        self
    }

    /// Generate exactly `count` records with pairwise distinct identifiers
    pub fn generate_batch(&mut self, count: usize) -> Result<Vec<EmployeeRecord>> {
        self.generate_batch_with_progress(count, |_| {})
    }

    /// Like `generate_batch`, calling `on_record` with the number of records
    /// produced so far after each one
    pub fn generate_batch_with_progress<F>(&mut self, count: usize, mut on_record: F) -> Result<Vec<EmployeeRecord>>
    where
        F: FnMut(usize),
    {
        let mut seen = HashSet::with_capacity(count);
        let mut records = Vec::with_capacity(count);

        for row_index in 0..count {
            let identifier = self.unique_identifier(&mut seen)?;
            records.push(self.generate_record(row_index, identifier)?);
            on_record(row_index + 1);
        }

        Ok(records)
    }

    /// Draw identifiers until one is not in `seen`, then claim it
    fn unique_identifier(&mut self, seen: &mut HashSet<Identifier>) -> Result<Identifier> {
        for _ in 0..self.max_identifier_attempts {
            let candidate = self.generate_identifier()?;
            if seen.insert(candidate.clone()) {
                return Ok(candidate);
            }
            log::debug!("Identifier {} already used, drawing again", candidate);
        }

        Err(SalaryError::IdentifierSpaceExhausted {
            attempts: self.max_identifier_attempts,
        })
    }

    /// One random identifier, with no uniqueness guarantee
    pub fn generate_identifier(&mut self) -> Result<Identifier> {
        let pseudo_year = self.rng.gen_range(MIN_PSEUDO_YEAR..=MAX_PSEUDO_YEAR);
        let month = self.rng.gen_range(1..=12);
        let day = self.rng.gen_range(1..=MAX_DAY);
        let sequence = self.rng.gen_range(MIN_SEQUENCE..=MAX_SEQUENCE);

        Ok(Identifier::from_parts(day, month, pseudo_year, sequence)?)
    }

    fn generate_record(&mut self, row_index: usize, identifier: Identifier) -> Result<EmployeeRecord> {
        let pools = self.pools;

        let first_name = pick(&mut self.rng, pools.first_names).to_string();
        let last_name = pick(&mut self.rng, pools.last_names).to_string();

        let salary = self.generate_salary();
        let pension_increase = self.generate_pension_increase();

        let (year, month, day) = pools
            .effective_dates
            .choose(&mut self.rng)
            .copied()
            .ok_or_else(|| SalaryError::Validation("effective date pool is empty".to_string()))?;
        let effective_date = EffectiveDate::from_ymd(year, month, day).ok_or_else(|| {
            SalaryError::Validation(format!("invalid effective date {}-{}-{}", year, month, day))
        })?;

        let department = pick(&mut self.rng, pools.departments).to_string();
        let letter_type = LetterType::ALL
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(LetterType::SalaryRegulation2025);
        let manager_name = format!(
            "{} {}",
            pick(&mut self.rng, pools.first_names),
            pick(&mut self.rng, pools.last_names)
        );
        let document_type = pick(&mut self.rng, pools.document_types).to_string();
        let case_number = format!("2025-{:05}", self.rng.gen_range(1..=99_999));
        let security_level = pick(&mut self.rng, pools.security_levels).to_string();

        let additional_notes = if self.rng.gen_bool(ADDITIONAL_NOTES_RATE) {
            pick(&mut self.rng, pools.additional_notes).to_string()
        } else {
            String::new()
        };

        let mut record = EmployeeRecord {
            identifier,
            first_name,
            last_name,
            employee_number: format!("EMP{:05}", row_index + 1),
            department,
            salary,
            effective_date,
            pension_increase,
            letter_type,
            change_description: String::new(),
            manager_name,
            additional_notes,
            document_type,
            case_number,
            security_level,
            letter_content: String::new(),
        };

        let fields = record.letter_fields();
        record.change_description = self.composer.describe_change(&fields, letter_type);
        record.letter_content = self.composer.compose_typed(&fields, letter_type);

        Ok(record)
    }

    /// Base salary 25 000-75 000 kr. plus up to 1 000 kr. of jitter, a 0.50-4.99%
    /// raise and a 1.10-1.25 gross compensation factor
    fn generate_salary(&mut self) -> SalaryFigures {
        let whole = f64::from(self.rng.gen_range(25_000u32..75_000));
        let base_salary = Money::from_f64(whole + self.rng.gen::<f64>() * 1000.0);
        let percentage_increase = Percent::truncated(0.5 + self.rng.gen::<f64>() * 4.5);
        let additional_comp_factor = 1.1 + self.rng.gen::<f64>() * 0.15;

        SalaryFigures::compute(base_salary, percentage_increase, additional_comp_factor)
    }

    fn generate_pension_increase(&mut self) -> Percent {
        if self.rng.gen_bool(PENSION_VARIATION_RATE) {
            Percent::truncated(0.5 + self.rng.gen::<f64>() * 1.5)
        } else {
            Percent::from_hundredths(100)
        }
    }
}

fn pick<R: Rng>(rng: &mut R, pool: &'static [&'static str]) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}
