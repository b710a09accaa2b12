use super::*;

fn note(id: u32, read: bool) -> Notification {
    Notification { id, message: format!("note {id}"), time: "now".to_owned(), read }
}

fn feed() -> NotificationFeed {
    NotificationFeed::new(vec![note(1, false), note(2, false), note(3, true)])
}

#[test]
fn unread_count_ignores_read_items() {
    assert_eq!(feed().unread_count(), 2);
    assert_eq!(NotificationFeed::default().unread_count(), 0);
}

#[test]
fn mark_all_read_clears_badge() {
    let mut feed = feed();
    feed.mark_all_read();
    assert_eq!(feed.unread_count(), 0);
    assert_eq!(feed.items().len(), 3);
}

#[test]
fn mark_read_single_item() {
    let mut feed = feed();
    assert!(feed.mark_read(2));
    assert_eq!(feed.unread_count(), 1);
    assert!(!feed.mark_read(42));
}

#[test]
fn read_flag_defaults_to_unread() {
    let parsed: Notification = serde_json::from_str(r#"{"id":5,"message":"m","time":"t"}"#).unwrap();
    assert!(!parsed.read);
}
