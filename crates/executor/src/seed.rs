//! Fixed records written by `initLedger`.

use hapit_core::{Habit, Person};

/// Key prefix for seeded habits (`HABIT0`, `HABIT1`, ...).
pub const HABIT_KEY_PREFIX: &str = "HABIT";

/// Key prefix for seeded people (`PERSON0`, `PERSON1`, ...).
pub const PERSON_KEY_PREFIX: &str = "PERSON";

/// Key of the `index`-th seeded habit.
pub fn habit_key(index: usize) -> String {
    format!("{}{}", HABIT_KEY_PREFIX, index)
}

/// Key of the `index`-th seeded person.
pub fn person_key(index: usize) -> String {
    format!("{}{}", PERSON_KEY_PREFIX, index)
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// The seeded habits, in key order.
pub fn seed_habits() -> Vec<Habit> {
    vec![
        Habit::new("Running", "Health", names(&["Ruby", "Kathy"]), "Kathy"),
        Habit::new("English", "Learning", names(&["Kathy"]), "Kathy"),
        Habit::new("Workout", "Health", names(&["Kimi", "Rocky"]), "Kimi"),
        Habit::new("bark", "Nature", names(&["Ruby", "Rocky"]), "Rocky"),
        Habit::new(
            "Blockchain",
            "Learning",
            names(&["Kimi", "Ruby", "Rocky"]),
            "Kimi",
        ),
    ]
}

/// The seeded people, in key order.
pub fn seed_people() -> Vec<Person> {
    vec![
        Person::new("Kimi", 29),
        Person::new("Kathy", 28),
        Person::new("Ruby", 5),
        Person::new("Rocky", 3),
    ]
}
