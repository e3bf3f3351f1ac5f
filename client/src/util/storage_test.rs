#![cfg(not(feature = "hydrate"))]

use super::*;

#[test]
fn reads_are_empty_outside_the_browser() {
    assert_eq!(load_raw("anything"), None);
    assert_eq!(load_token(), None);
    assert_eq!(load_json::<Vec<u32>>("anything"), None);
}

#[test]
fn writes_are_noops_but_callable() {
    save_raw("k", "v");
    save_json("k", &vec![1, 2, 3]);
    save_token("abc");
    clear_token();
    remove("k");
}

#[test]
fn clean_token_rejects_blank_values() {
    assert_eq!(clean_token("  abc.def  "), Some("abc.def".to_owned()));
    assert_eq!(clean_token("   "), None);
    assert_eq!(clean_token(""), None);
}
