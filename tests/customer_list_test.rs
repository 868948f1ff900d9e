use customer_form::{validate, Customer, CustomerList, Field, SubmitOutcome, ValidationError};

fn fill(list: &mut CustomerList, index: usize, name: &str, age: &str, address: &str) {
    list.update(index, Field::Name, name).unwrap();
    list.update(index, Field::Age, age).unwrap();
    list.update(index, Field::Address, address).unwrap();
}

/// 最後一筆無效時不得新增
#[test]
fn test_add_blocked_by_missing_name() {
    let mut list = CustomerList::new();
    fill(&mut list, 0, "", "5", "x");

    assert!(!list.add_record());
    assert_eq!(list.len(), 1);
    assert_eq!(
        list.get(0).unwrap().errors.message(Field::Name),
        Some("Name is required")
    );
}

#[test]
fn test_single_valid_customer_submits() {
    let mut list = CustomerList::new();
    fill(&mut list, 0, "Alice", "30", "Main St");

    let outcome = list.submit();
    let SubmitOutcome::Accepted(entries) = outcome else {
        panic!("submission should be accepted");
    };
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].name, "Alice");
    assert!(list.iter().all(|c| c.errors.is_empty()));
}

#[test]
fn test_submit_reports_all_three_errors() {
    let mut list = CustomerList::new();
    fill(&mut list, 0, "", "-1", "");

    assert_eq!(list.submit(), SubmitOutcome::Rejected { invalid: vec![0] });
    let errors = &list.get(0).unwrap().errors;
    assert_eq!(errors.message(Field::Name), Some("Name is required"));
    assert_eq!(errors.message(Field::Age), Some("Enter a valid positive age"));
    assert_eq!(errors.message(Field::Address), Some("Address is required"));
}

#[test]
fn test_edit_clears_error_until_next_validation() {
    let mut list = CustomerList::new();
    list.submit();
    assert_eq!(list.get(0).unwrap().errors.len(), 3);

    list.update(0, Field::Age, "abc").unwrap();
    let errors = &list.get(0).unwrap().errors;
    assert_eq!(errors.get(Field::Age), None);
    assert_eq!(errors.len(), 2);

    list.submit();
    assert_eq!(
        list.get(0).unwrap().errors.get(Field::Age),
        Some(&ValidationError::InvalidNumericValue(Field::Age))
    );
}

#[test]
fn test_list_never_empties() {
    let mut list = CustomerList::new();
    fill(&mut list, 0, "Alice", "30", "Main St");
    assert!(list.add_record());
    fill(&mut list, 1, "Bob", "25", "High St");
    assert!(list.add_record());

    for _ in 0..5 {
        let _ = list.remove_record(0).unwrap();
        assert!(list.len() >= 1);
    }
    assert_eq!(list.len(), 1);
    assert!(!list.remove_record(0).unwrap());
}

#[test]
fn test_failed_validation_keeps_values() {
    let mut list = CustomerList::new();
    fill(&mut list, 0, "  ", "007", " Main St ");
    let before = list.entries();

    assert!(!list.add_record());
    assert!(matches!(list.submit(), SubmitOutcome::Rejected { .. }));
    assert_eq!(list.entries(), before);
    assert_eq!(list.get(0).unwrap().age, "007");
}

#[test]
fn test_age_boundaries() {
    let age_message = |age: &str| {
        validate(&Customer::new("Alice", age, "Main St"))
            .errors
            .message(Field::Age)
    };

    assert_eq!(age_message("0"), Some("Enter a valid positive age"));
    assert_eq!(age_message("-3"), Some("Enter a valid positive age"));
    assert_eq!(age_message("abc"), Some("Enter a valid positive age"));
    assert_eq!(age_message(""), Some("Age is required"));
    assert_eq!(age_message("1"), None);
}
