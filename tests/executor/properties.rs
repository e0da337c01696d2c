//! Property tests for the invocation-level guarantees.

use crate::common::*;
use hapit::{Habit, MemoryStore, StateStore};
use proptest::prelude::*;

fn field() -> impl Strategy<Value = String> {
    "[ -~]{0,16}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn create_then_query_returns_inputs(
        key in "[A-Za-z0-9]{1,12}",
        name in field(),
        habit_type in field(),
        attendee in field(),
        owner in field(),
    ) {
        let contract = create_contract();
        let store = MemoryStore::new();

        invoke_ok(&contract, &store, "createHabit", &[&key, &name, &habit_type, &attendee, &owner]);
        let payload = invoke_ok(&contract, &store, "queryHabit", &[&key]);
        let habit = Habit::from_bytes(&payload).unwrap();

        prop_assert_eq!(habit.name, name);
        prop_assert_eq!(habit.habit_type, habit_type);
        prop_assert_eq!(habit.owner, owner);
        prop_assert_eq!(habit.attendees, vec![attendee]);
    }

    #[test]
    fn attendee_appends_preserve_order(extra in proptest::collection::vec(field(), 0..6)) {
        let contract = create_contract();
        let store = MemoryStore::new();
        invoke_ok(&contract, &store, "createHabit", &["H", "n", "t", "first", "o"]);

        for name in &extra {
            invoke_ok(&contract, &store, "changeHabitAttendees", &["H", name]);
        }

        let habit = Habit::from_bytes(&store.get_state("H").unwrap().unwrap()).unwrap();
        let mut expected = vec!["first".to_string()];
        expected.extend(extra);
        prop_assert_eq!(habit.attendees, expected);
        prop_assert_eq!(habit.owner, "o");
    }

    #[test]
    fn mismatched_arity_never_writes(
        function in prop::sample::select(vec!["createHabit", "changeHabitOwner", "changeHabitAttendees", "queryHabit"]),
        argc in 0usize..8,
    ) {
        let expected = match function {
            "createHabit" => 5,
            "queryHabit" => 1,
            _ => 2,
        };
        prop_assume!(argc != expected);

        let contract = create_contract();
        let store = MemoryStore::new();
        let args: Vec<String> = (0..argc).map(|i| format!("a{}", i)).collect();
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();

        let response = invoke(&contract, &store, function, &arg_refs);

        prop_assert!(!response.is_success());
        prop_assert!(response.message.contains("Incorrect number of arguments"));
        prop_assert_eq!(store.write_count(), 0);
    }
}
