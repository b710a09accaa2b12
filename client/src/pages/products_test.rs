use super::*;

#[test]
fn page_label_is_one_based() {
    assert_eq!(page_label(0), "Page 1");
    assert_eq!(page_label(4), "Page 5");
}
