use herdbook::models::livestock::LivestockRecord;
use herdbook::store::{Collection, MemoryStore, next_id, next_in_sequence};

#[test]
fn test_first_id_in_empty_collection() {
    assert_eq!(next_in_sequence("S", None, 0), "S001");
    assert_eq!(next_in_sequence("H", None, 0), "H001");
}

#[test]
fn test_next_id_follows_last_record() {
    assert_eq!(next_in_sequence("S", Some("S003"), 3), "S004");
    assert_eq!(next_in_sequence("F", Some("F009"), 1), "F010");
}

#[test]
fn test_next_id_uses_last_not_largest() {
    // records S003, S001: the last one decides
    assert_eq!(next_in_sequence("S", Some("S001"), 2), "S002");
}

#[test]
fn test_unparseable_last_id_falls_back_to_count() {
    assert_eq!(next_in_sequence("S", Some("X9"), 1), "S002");
    assert_eq!(next_in_sequence("S", Some("Sabc"), 4), "S005");
}

#[test]
fn test_sequence_grows_past_three_digits() {
    assert_eq!(next_in_sequence("S", Some("S999"), 999), "S1000");
}

#[test]
fn test_next_id_reads_the_store() {
    let store = MemoryStore::new();
    store.set_raw(
        Collection::Livestock,
        "id,species,birth_date,current_weight,health_status,pen_id\n\
         S003,Bali,2022-01-01,200,Healthy,K1\n\
         S001,Bali,2022-01-01,200,Healthy,K1\n",
    );

    let id = next_id::<LivestockRecord, _>(&store, "S").expect("next id");
    assert_eq!(id, "S002");
}
