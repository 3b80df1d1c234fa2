use std::collections::BTreeMap;

use bst_store::{MapError, OrderedMap, TreeMap};
use rstest::rstest;

fn tree_map() -> Box<dyn OrderedMap<String, i32>> {
    Box::new(TreeMap::new())
}

fn std_map() -> Box<dyn OrderedMap<String, i32>> {
    Box::new(BTreeMap::new())
}

fn filled(mut map: Box<dyn OrderedMap<String, i32>>) -> Box<dyn OrderedMap<String, i32>> {
    for (i, name) in ["gamma", "phi", "beta", "alpha", "delta"].into_iter().enumerate() {
        assert_eq!(map.put(Some(name.to_string()), i as i32), Ok(None));
    }
    map
}

#[rstest]
#[case::tree(tree_map())]
#[case::std(std_map())]
fn absent_keys_are_rejected(#[case] map: Box<dyn OrderedMap<String, i32>>) {
    let mut map = filled(map);
    let before = map.render();

    assert_eq!(map.get(None), Err(MapError::InvalidKey));
    assert_eq!(map.put(None, 99), Err(MapError::InvalidKey));
    assert_eq!(map.remove(None), Err(MapError::InvalidKey));

    assert_eq!(map.len(), 5);
    assert_eq!(map.render(), before);
}

#[rstest]
#[case::tree(tree_map())]
#[case::std(std_map())]
fn missing_keys_are_not_errors(#[case] map: Box<dyn OrderedMap<String, i32>>) {
    let mut map = filled(map);
    let omega = "omega".to_string();
    assert_eq!(map.get(Some(&omega)), Ok(None));
    assert_eq!(map.remove(Some(&omega)), Ok(None));
    assert_eq!(map.len(), 5);
}

#[rstest]
#[case::tree(tree_map())]
#[case::std(std_map())]
fn put_get_remove(#[case] map: Box<dyn OrderedMap<String, i32>>) {
    let mut map = filled(map);
    let beta = "beta".to_string();

    assert_eq!(map.get(Some(&beta)), Ok(Some(&2)));
    assert_eq!(map.put(Some(beta.clone()), 20), Ok(Some(2)));
    assert_eq!(map.get(Some(&beta)), Ok(Some(&20)));
    assert_eq!(map.len(), 5);

    assert_eq!(map.remove(Some(&beta)), Ok(Some(20)));
    assert_eq!(map.get(Some(&beta)), Ok(None));
    assert_eq!(map.len(), 4);
}

#[rstest]
#[case::tree(tree_map())]
#[case::std(std_map())]
fn enumerations_are_ascending(#[case] map: Box<dyn OrderedMap<String, i32>>) {
    let map = filled(map);
    let keys: Vec<_> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, ["alpha", "beta", "delta", "gamma", "phi"]);
    let values: Vec<_> = map.values().copied().collect();
    assert_eq!(values, [3, 2, 4, 0, 1]);
    assert!(map.entries().map(|(k, _)| k).eq(map.keys()));
}

#[rstest]
#[case::tree(tree_map())]
#[case::std(std_map())]
fn render(#[case] mut map: Box<dyn OrderedMap<String, i32>>) {
    assert!(map.is_empty());
    assert_eq!(map.render(), "{}");
    map.put(Some("b".to_string()), 2).unwrap();
    map.put(Some("a".to_string()), 1).unwrap();
    assert_eq!(map.render(), "{(a, 1),(b, 2)}");
}

#[rstest]
#[case::empty(&[], "{}")]
#[case::one(&[(1, 1)], "{(1, 1)}")]
#[case::unsorted(&[(3, 30), (1, 10), (2, 20)], "{(1, 10),(2, 20),(3, 30)}")]
#[case::overwrite(&[(1, 10), (1, 11)], "{(1, 11)}")]
fn tree_and_std_render_alike(#[case] pairs: &[(u8, u8)], #[case] expected: &str) {
    let mut tree: TreeMap<u8, u8> = TreeMap::new();
    let mut reference: BTreeMap<u8, u8> = BTreeMap::new();
    for &(k, v) in pairs {
        OrderedMap::put(&mut tree, Some(k), v).unwrap();
        OrderedMap::put(&mut reference, Some(k), v).unwrap();
    }
    assert_eq!(OrderedMap::render(&tree), expected);
    assert_eq!(OrderedMap::render(&reference), expected);
}
