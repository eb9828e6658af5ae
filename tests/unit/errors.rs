//! Out-of-range calls fail before anything changes.

use super::common::{assert_well_formed, list_of};
use slotchain::{IndexError, IndexedList, Op};

#[test]
fn empty_list_rejects_get_and_remove() {
    let mut list: IndexedList<i32> = IndexedList::new();

    let err = list.get(0).unwrap_err();
    assert_eq!(
        err,
        IndexError::OutOfRange {
            op: Op::Get,
            index: 0,
            len: 0
        }
    );
    assert_eq!(
        list.remove_at(0).unwrap_err().to_string(),
        "remove_at: index 0 out of range (list is empty)"
    );
    assert!(list.is_empty());
    assert_well_formed(&list);
}

#[test]
fn insert_past_append_position_is_rejected() {
    let mut list = list_of(&[1, 2]);
    let err = list.insert_at(3, 9).unwrap_err();

    assert_eq!(err.index(), 3);
    assert_eq!(err.list_len(), 2);
    assert_eq!(err.to_string(), "insert_at: index 3 out of range (valid: 0..=2)");
    assert_eq!(list.to_vec(), vec![1, 2]);
    assert_well_formed(&list);
}

#[test]
fn failed_calls_leave_chain_untouched() {
    let mut list = list_of(&['p', 'q', 'r']);
    let chain_before: Vec<char> = list.chain().copied().collect();

    assert!(list.get(3).is_err());
    assert!(list.remove_at(3).is_err());
    assert!(list.remove_at(usize::MAX).is_err());
    assert!(list.insert_at(4, 's').is_err());

    let chain_after: Vec<char> = list.chain().copied().collect();
    assert_eq!(chain_before, chain_after);
    assert_eq!(list.to_vec(), vec!['p', 'q', 'r']);
}

#[test]
fn retry_with_corrected_index_succeeds() {
    let mut list = list_of(&["only"]);
    assert!(list.insert_at(5, "next").is_err());
    list.insert_at(1, "next").unwrap();
    assert_eq!(list.to_vec(), vec!["only", "next"]);
}

#[test]
fn index_error_is_a_std_error() {
    fn takes_error(_: &dyn std::error::Error) {}
    let list: IndexedList<u8> = IndexedList::new();
    takes_error(&list.get(1).unwrap_err());
}
