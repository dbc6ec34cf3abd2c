//! Reference data the record generator draws from
//!
//! Every pool is drawn uniformly; weighting is expressed by repeating an
//! entry, as the effective dates do.

/// (year, month, day) labels; 1 March appears four times out of seven
pub const EFFECTIVE_DATES: [(i32, u32, u32); 7] = [
    (2025, 3, 1),
    (2025, 3, 1),
    (2025, 3, 1),
    (2025, 3, 1),
    (2025, 4, 1),
    (2025, 5, 1),
    (2025, 2, 1),
];

pub const FIRST_NAMES: [&str; 94] = [
    "Anders", "Anne", "Bent", "Birthe", "Carl", "Charlotte", "Christian", "Christine",
    "Emma", "Erik", "Finn", "Freja", "Hans", "Hanne", "Henrik", "Ida", "Jens", "Julie",
    "Karen", "Kasper", "Lars", "Laura", "Lone", "Mads", "Maria", "Martin", "Mette",
    "Michael", "Morten", "Niels", "Ole", "Peter", "Pia", "Rasmus", "Sofie", "Søren",
    "Susanne", "Thomas", "Tina", "Torben", "William", "Sofia", "Noah", "Oliver", "Ella",
    "Lucas", "Victor", "Alma", "Clara", "Alfred", "Oscar", "Agnes", "Karl", "Viggo",
    "Anna", "Jakob", "Mathilde", "Magnus", "Isabella", "Alexander", "Josefine", "Sebastian",
    "Caroline", "Frederik", "Emilie", "Mikkel", "Katrine", "Tobias", "Louise", "Jonas",
    "Camilla", "Andreas", "Cecilie", "Nikolaj", "Sara", "Kristian", "Maja", "Simon",
    "Nanna", "Daniel", "Signe", "Jesper", "Lærke", "Mathias", "Astrid", "Philip",
    "Ellen", "Benjamin", "Liv", "Anton", "Marie", "Gustav", "Johanne", "Valdemar",
];

pub const LAST_NAMES: [&str; 53] = [
    "Jensen", "Nielsen", "Hansen", "Pedersen", "Andersen", "Christensen", "Larsen",
    "Sørensen", "Rasmussen", "Jørgensen", "Petersen", "Madsen", "Kristensen",
    "Olsen", "Thomsen", "Christiansen", "Poulsen", "Johansen", "Møller", "Mortensen",
    "Knudsen", "Jacobsen", "Frederiksen", "Lund", "Eriksen", "Schmidt", "Holm",
    "Bertelsen", "Andreasen", "Iversen", "Laursen", "Berg", "Christoffersen",
    "Clausen", "Simonsen", "Henriksen", "Svendsen", "Vestergaard", "Østergaard",
    "Dahl", "Mogensen", "Villadsen", "Frandsen", "Mikkelsen", "Lorentzen", "Bruun",
    "Kofoed", "Danielsen", "Thygesen", "Nygaard", "Winther", "Holst", "Rosendahl",
];

pub const DEPARTMENTS: [&str; 10] = [
    "Operations", "Finance", "HR", "IT", "Customer Service",
    "Marketing", "Sales", "Logistics", "Administration", "Legal",
];

pub const DOCUMENT_TYPES: [&str; 4] = [
    "Salary Letter", "Contract Amendment", "Pension Notice", "HR Communication",
];

pub const SECURITY_LEVELS: [&str; 3] = ["Internal", "Confidential", "Strictly Confidential"];

pub const ADDITIONAL_NOTES: [&str; 5] = [
    "Please confirm receipt by signing and returning this letter",
    "Questions? Contact HR at hr@company.dk",
    "This change was approved by your department manager",
    "No action required from your side",
    "Tax implications will be detailed in your next payslip",
];

/// The set of pools one generator draws from
#[derive(Debug, Clone, Copy)]
pub struct ValuePools {
    pub first_names: &'static [&'static str],
    pub last_names: &'static [&'static str],
    pub departments: &'static [&'static str],
    pub document_types: &'static [&'static str],
    pub security_levels: &'static [&'static str],
    pub additional_notes: &'static [&'static str],
    pub effective_dates: &'static [(i32, u32, u32)],
}

impl ValuePools {
    /// Danish names and the fixed HR vocabulary
    pub const fn danish() -> Self {
        Self {
            first_names: &FIRST_NAMES,
            last_names: &LAST_NAMES,
            departments: &DEPARTMENTS,
            document_types: &DOCUMENT_TYPES,
            security_levels: &SECURITY_LEVELS,
            additional_notes: &ADDITIONAL_NOTES,
            effective_dates: &EFFECTIVE_DATES,
        }
    }
}

impl Default for ValuePools {
    fn default() -> Self {
        Self::danish()
    }
}
