use super::*;

#[test]
fn save_label_reports_pending_uploads_first() {
    assert_eq!(save_label(2, true), "Uploading 2 image(s)...");
    assert_eq!(save_label(0, true), "Saving...");
    assert_eq!(save_label(0, false), "Save");
}

#[test]
fn failed_uploads_message_lists_names() {
    assert_eq!(failed_uploads_message(&[]), None);
    assert_eq!(
        failed_uploads_message(&["a.png".to_owned(), "b.jpg".to_owned()]).as_deref(),
        Some("Could not upload: a.png, b.jpg")
    );
}
