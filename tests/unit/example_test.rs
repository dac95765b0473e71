// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use example_api::domain::models::example::{Example, ValidationError};
use proptest::prelude::*;

proptest! {
    #[test]
    fn rename_accepts_any_non_blank_name(name in "[a-zA-Z0-9][a-zA-Z0-9 _-]{0,30}") {
        let mut example = Example::new("Old Name", None).unwrap();
        let before = example.updated_at();

        prop_assert!(example.rename(name.clone()).is_ok());
        prop_assert_eq!(example.name(), name.as_str());
        prop_assert!(example.updated_at() > before);
        prop_assert!(example.updated_at() >= example.created_at());
    }

    #[test]
    fn rename_rejects_blank_names(name in "[ \\t\\r\\n]{0,16}") {
        let mut example = Example::new("Old Name", Some("Description".to_string())).unwrap();
        let snapshot = example.clone();

        prop_assert_eq!(example.rename(name), Err(ValidationError::EmptyName));
        prop_assert_eq!(example, snapshot);
    }
}

#[test]
fn test_create_example_scenario() {
    // Given: 名称与描述
    let example = Example::new("Test", Some("Test Description".to_string())).unwrap();

    // Then: 尚未持久化且时间戳一致
    assert_eq!(example.id(), 0);
    assert_eq!(example.name(), "Test");
    assert_eq!(example.description(), Some("Test Description"));
    assert_eq!(example.created_at(), example.updated_at());
}
