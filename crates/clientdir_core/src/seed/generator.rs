//! Synthetic name and phone-number generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const FIRST_NAMES: &[&str] = &[
    "Aaliyah", "Abigail", "Adam", "Alice", "Amy", "Andrew", "Angela", "Anthony", "Barbara",
    "Benjamin", "Bob", "Brenda", "Carlos", "Carol", "Charles", "Chloe", "Christopher", "Daniel",
    "David", "Deborah", "Dorothy", "Edward", "Elena", "Elizabeth", "Emily", "Emma", "Ethan",
    "Frank", "Gabriel", "George", "Grace", "Hannah", "Henry", "Isabella", "Jack", "James", "Jane",
    "Jennifer", "Jessica", "John", "Joseph", "Karen", "Kevin", "Laura", "Liam", "Linda", "Lucas",
    "Margaret", "Maria", "Mark", "Mary", "Matthew", "Mia", "Michael", "Nancy", "Noah", "Olivia",
    "Oscar", "Patricia", "Paul", "Quentin", "Rachel", "Richard", "Robert", "Sandra", "Sarah",
    "Sophia", "Steven", "Susan", "Thomas", "Uma", "Victor", "Victoria", "William", "Xavier",
    "Yvonne", "Zachary", "Zoe",
];

const LAST_NAMES: &[&str] = &[
    "Adams", "Allen", "Anderson", "Baker", "Bergstrom", "Brown", "Campbell", "Carter", "Clark",
    "Collins", "Davis", "Edwards", "Evans", "Fisher", "Garcia", "Gonzalez", "Green", "Hall",
    "Harris", "Hernandez", "Hill", "Jackson", "Johnson", "Jones", "King", "Kuhn", "Lee", "Lewis",
    "Lopez", "Martin", "Martinez", "Miller", "Mitchell", "Moore", "Nelson", "Nguyen", "O'Connell",
    "Parker", "Perez", "Phillips", "Quigley", "Roberts", "Robinson", "Rodriguez", "Sanchez",
    "Scott", "Smith", "Taylor", "Thomas", "Thompson", "Turner", "Walker", "White", "Williams",
    "Wilson", "Wright", "Young", "Zieme",
];

const TITLES: &[&str] = &["Mr.", "Mrs.", "Ms.", "Miss", "Dr.", "Prof."];
const SUFFIXES: &[&str] = &["Jr.", "Sr.", "I", "II", "III", "IV", "V", "MD", "DDS", "PhD", "DVM"];

const PHONE_FORMATS: &[&str] = &[
    "###-###-####",
    "(###) ###-####",
    "+1-###-###-####",
    "###.###.####",
    "+1.###.###.####",
];

/// Probability that a generated name carries a title prefix.
const TITLE_PROBABILITY: f64 = 0.1;
/// Probability that a generated name carries a suffix.
const SUFFIX_PROBABILITY: f64 = 0.05;
const EXTENSION_PROBABILITY: f64 = 0.2;

/// Source of synthetic client fields used by the seeder.
pub trait ClientGenerator {
    /// Returns a human-readable full name with single-space separators.
    fn name(&mut self) -> String;
    /// Returns a phone-number-formatted string.
    fn phone_number(&mut self) -> String;
}

/// Random generator shaped after common en_US sample data.
pub struct FakeClientGenerator {
    rng: StdRng,
}

impl FakeClientGenerator {
    /// Creates a generator whose output is fully determined by `seed`.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    fn pick(&mut self, values: &[&'static str]) -> &'static str {
        values[self.rng.gen_range(0..values.len())]
    }
}

impl ClientGenerator for FakeClientGenerator {
    fn name(&mut self) -> String {
        let mut parts = Vec::with_capacity(4);
        if self.rng.gen_bool(TITLE_PROBABILITY) {
            parts.push(self.pick(TITLES));
        }
        parts.push(self.pick(FIRST_NAMES));
        parts.push(self.pick(LAST_NAMES));
        if self.rng.gen_bool(SUFFIX_PROBABILITY) {
            parts.push(self.pick(SUFFIXES));
        }
        parts.join(" ")
    }

    fn phone_number(&mut self) -> String {
        let format = self.pick(PHONE_FORMATS);
        let mut number: String = format
            .chars()
            .map(|ch| {
                if ch == '#' {
                    char::from(b'0' + self.rng.gen_range(0..10u8))
                } else {
                    ch
                }
            })
            .collect();

        if self.rng.gen_bool(EXTENSION_PROBABILITY) {
            number.push_str(&format!(" x{}", self.rng.gen_range(100..1000)));
        }
        number
    }
}
