use outcome_rail::ErrorList;

#[test]
fn try_from_iter_rejects_empty_input() {
    assert!(ErrorList::<u8>::try_from_iter(Vec::new()).is_none());

    let list = ErrorList::try_from_iter([1, 2, 3]).unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list.first(), &1);
    assert_eq!(list.last(), &3);
}

#[test]
fn single_element_list_has_the_same_first_and_last() {
    let list = ErrorList::new("only");
    assert_eq!(list.first(), list.last());
    assert_eq!(list.clone().into_first(), list.into_last());
}

#[test]
fn push_append_and_extend_preserve_order() {
    let mut list = ErrorList::new(1);
    list.push(2);
    list.append(ErrorList::try_from_iter([3, 4]).unwrap());
    list.extend([5]);

    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    assert_eq!((&list).into_iter().count(), 5);
    assert_eq!(list.into_vec(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn map_and_as_ref() {
    let list = ErrorList::try_from_iter(["a", "bb"]).unwrap();
    let lengths = list.as_ref().map(|s| s.len());
    assert_eq!(lengths.into_iter().collect::<Vec<_>>(), vec![1, 2]);
    assert_eq!(list.len(), 2);
}
