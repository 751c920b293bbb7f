#![cfg(feature = "serde")]

use pretty_assertions::assert_eq;

use cow_linked_map::CowLinkedMap;

#[test]
fn serializes_in_insertion_order() {
    let mut map = CowLinkedMap::new();
    map.insert_front("z".to_string(), 26).unwrap();
    map.insert_front("a".to_string(), 1).unwrap();
    map.insert_after("a", "m".to_string(), 13).unwrap();

    assert_eq!(serde_json::to_string(&map).unwrap(), r#"{"a":1,"m":13,"z":26}"#);
    assert_eq!(serde_json::to_string(&CowLinkedMap::<String, u8>::new()).unwrap(), "{}");
}

#[test]
fn deserializes_in_document_order() {
    let map: CowLinkedMap<String, u32> = serde_json::from_str(r#"{"z":26,"a":1,"m":13}"#).unwrap();
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
    assert_eq!(map.read("m"), Ok(&13));
}

#[test]
fn rejects_duplicate_keys() {
    let result: Result<CowLinkedMap<String, u32>, _> = serde_json::from_str(r#"{"a":1,"a":2}"#);
    let message = result.unwrap_err().to_string();
    assert!(message.contains("already contains"), "{message}");
}

#[test]
fn round_trips_through_json() {
    let map = CowLinkedMap::try_from([(3u8, vec![1, 2]), (1, vec![]), (2, vec![7])]).unwrap();
    let json = serde_json::to_string(&map).unwrap();
    let back: CowLinkedMap<u8, Vec<i32>> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, map);
}
