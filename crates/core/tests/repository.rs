use tempfile::tempdir;
use unitcost_core::db::{
    DbError, KeyValueStore, MemoryStore, ProductRepository, SqliteStore, DEFAULT_PRODUCTS_KEY,
};
use unitcost_core::model::{Material, Product};

fn sample_products() -> Vec<Product> {
    vec![
        Product::from_materials(
            "Chair",
            vec![Material::new("Wood", 100.0, 50.0), Material::new("Glue", 20.0, 10.0)],
        ),
        Product::from_materials("Shelf", vec![Material::new("Board", 45.5, 80.0)]),
    ]
}

#[test]
fn products_survive_a_store_reopen() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("store.db");
    let products = sample_products();

    {
        let mut repo = ProductRepository::new(SqliteStore::open(&path).expect("open"));
        repo.save(&products).expect("save");
    }

    let repo = ProductRepository::new(SqliteStore::open(&path).expect("re-open"));
    assert_eq!(repo.load_strict().expect("load"), products);
}

#[test]
fn blob_uses_camel_case_field_names() {
    let mut repo = ProductRepository::new(MemoryStore::new());
    repo.save(&sample_products()[..1]).expect("save");

    let raw = repo.store().get(DEFAULT_PRODUCTS_KEY).unwrap().expect("slot written");
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = &value[0];
    assert_eq!(first["name"], "Chair");
    assert_eq!(first["cost"], 52.0);
    assert_eq!(first["materials"][0]["unitCost"], 100.0);
    assert_eq!(first["materials"][1]["percentage"], 10.0);
    assert!(first["materials"][0]["id"].is_string());
}

#[test]
fn save_overwrites_the_whole_slot() {
    let mut repo = ProductRepository::with_key(MemoryStore::new(), "products");
    let products = sample_products();
    repo.save(&products).expect("save both");
    repo.save(&products[1..]).expect("save one");

    let loaded = repo.load().expect("load");
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].name, "Shelf");
    assert_eq!(repo.store().writes(), 2);
}

#[test]
fn missing_slot_loads_as_empty() {
    let repo = ProductRepository::new(MemoryStore::new());
    assert!(repo.load_strict().expect("load").is_empty());
}

#[test]
fn malformed_slot_is_lenient_by_default_and_fatal_when_strict() {
    let repo = ProductRepository::new(MemoryStore::with_value(DEFAULT_PRODUCTS_KEY, r#"{"a":1}"#));
    assert!(repo.load().expect("lenient load").is_empty());

    match repo.load_strict() {
        Err(DbError::Corrupt { key, .. }) => assert_eq!(key, DEFAULT_PRODUCTS_KEY),
        other => panic!("expected Corrupt error, got {other:?}"),
    }
}
