//! The fallback-lookup chain and the Global Dictionary's insert bound.

use dict_registry::{DictId, GLOBAL_DICT_ID, MAX_GLOBAL_DICT_SIZE, Registry};

fn fill_global(reg: &mut Registry) {
    for i in 0..MAX_GLOBAL_DICT_SIZE {
        let key = format!("k{i}");
        let value = format!("v{i}");
        reg.insert(GLOBAL_DICT_ID, Some(key.as_str()), Some(value.as_str()));
    }
    assert_eq!(reg.size(GLOBAL_DICT_ID), MAX_GLOBAL_DICT_SIZE);
}

#[test]
fn miss_in_a_regular_dictionary_falls_back_to_global() {
    let mut reg = Registry::new();
    reg.insert(GLOBAL_DICT_ID, Some("shared"), Some("g1"));
    let d = reg.create();
    assert_eq!(reg.find(d, Some("shared")), Some("g1"));
}

#[test]
fn local_value_shadows_the_global_one() {
    let mut reg = Registry::new();
    reg.insert(GLOBAL_DICT_ID, Some("k"), Some("global"));
    let d = reg.create();
    reg.insert(d, Some("k"), Some("local"));
    assert_eq!(reg.find(d, Some("k")), Some("local"));
}

#[test]
fn removing_the_local_key_re_exposes_the_global_value() {
    let mut reg = Registry::new();
    reg.insert(GLOBAL_DICT_ID, Some("k"), Some("global"));
    let d = reg.create();
    reg.insert(d, Some("k"), Some("local"));
    reg.remove(d, Some("k"));
    assert_eq!(reg.find(d, Some("k")), Some("global"));
}

#[test]
fn miss_in_the_global_dictionary_is_final() {
    let mut reg = Registry::new();
    let d = reg.create();
    assert_eq!(reg.find(d, Some("nowhere")), None);
    assert_eq!(reg.find(GLOBAL_DICT_ID, Some("nowhere")), None);
}

#[test]
fn missing_handle_behaves_like_a_direct_global_lookup() {
    let mut reg = Registry::new();
    reg.insert(GLOBAL_DICT_ID, Some("k"), Some("v"));
    let ghost = DictId(555);
    assert_eq!(reg.find(ghost, Some("k")), reg.find(GLOBAL_DICT_ID, Some("k")));
    assert_eq!(reg.find(ghost, Some("other")), None);
}

#[test]
fn destroyed_handle_still_resolves_through_global() {
    let mut reg = Registry::new();
    reg.insert(GLOBAL_DICT_ID, Some("k"), Some("v"));
    let d = reg.create();
    reg.destroy(d);
    assert_eq!(reg.find(d, Some("k")), Some("v"));
}

#[test]
fn clear_makes_previous_keys_fall_back_to_global() {
    let mut reg = Registry::new();
    reg.insert(GLOBAL_DICT_ID, Some("k"), Some("global"));
    let d = reg.create();
    reg.insert(d, Some("k"), Some("local"));
    reg.clear(d);
    assert_eq!(reg.size(d), 0);
    assert_eq!(reg.find(d, Some("k")), Some("global"));
}

#[test]
fn full_global_dictionary_rejects_new_keys() {
    let mut reg = Registry::new();
    fill_global(&mut reg);

    reg.insert(GLOBAL_DICT_ID, Some("extra"), Some("x"));
    assert_eq!(reg.find(GLOBAL_DICT_ID, Some("extra")), None);
    assert_eq!(reg.size(GLOBAL_DICT_ID), MAX_GLOBAL_DICT_SIZE);
}

#[test]
fn full_global_dictionary_still_accepts_overwrites() {
    let mut reg = Registry::new();
    fill_global(&mut reg);

    reg.insert(GLOBAL_DICT_ID, Some("k0"), Some("updated"));
    assert_eq!(reg.find(GLOBAL_DICT_ID, Some("k0")), Some("updated"));
    assert_eq!(reg.size(GLOBAL_DICT_ID), MAX_GLOBAL_DICT_SIZE);
}

#[test]
fn the_bound_applies_to_no_other_dictionary() {
    let mut reg = Registry::new();
    let d = reg.create();
    for i in 0..MAX_GLOBAL_DICT_SIZE * 2 {
        let key = format!("k{i}");
        reg.insert(d, Some(key.as_str()), Some("v"));
    }
    assert_eq!(reg.size(d), MAX_GLOBAL_DICT_SIZE * 2);
}

#[test]
fn removing_a_global_key_reopens_room_for_one_new_key() {
    let mut reg = Registry::new();
    fill_global(&mut reg);

    reg.remove(GLOBAL_DICT_ID, Some("k0"));
    reg.insert(GLOBAL_DICT_ID, Some("fresh"), Some("in"));
    assert_eq!(reg.find(GLOBAL_DICT_ID, Some("fresh")), Some("in"));
    // full again
    reg.insert(GLOBAL_DICT_ID, Some("fresh2"), Some("out"));
    assert_eq!(reg.find(GLOBAL_DICT_ID, Some("fresh2")), None);
}

#[test]
fn clearing_the_global_dictionary_resets_the_bound() {
    let mut reg = Registry::new();
    fill_global(&mut reg);

    reg.clear(GLOBAL_DICT_ID);
    assert_eq!(reg.size(GLOBAL_DICT_ID), 0);
    reg.insert(GLOBAL_DICT_ID, Some("fresh"), Some("in"));
    assert_eq!(reg.find(GLOBAL_DICT_ID, Some("fresh")), Some("in"));
}
