//! First-use materialization of a compressed snapshot, driven through
//! the public resolver entry point.

use std::fs;

use fourbyte::bundle::bundled_snapshot_path;
use fourbyte::{Resolver, Selector, SignatureStore, StoreError, StoredSignature};
use tempfile::TempDir;

/// Build a store, compress its file, and return the bundle path.
fn make_bundle(dir: &TempDir) -> std::path::PathBuf {
    let db_path = dir.path().join("source.db");
    {
        let store = SignatureStore::open(&db_path).unwrap();
        store
            .insert(&StoredSignature {
                hash: "0xa9059cbb".to_string(),
                name: "transfer".to_string(),
                folded_name: "transfer(address,uint256)".to_string(),
                params: r#"[{"type":"address","name":"_to"},{"type":"uint256","name":"_value"}]"#
                    .to_string(),
                cooccurs: "0xa9059cbb".to_string(),
            })
            .unwrap();
    }

    let bundle_path = dir.path().join("signatures.db.zst");
    let compressed = zstd::encode_all(fs::read(&db_path).unwrap().as_slice(), 0).unwrap();
    fs::write(&bundle_path, compressed).unwrap();
    fs::remove_file(&db_path).unwrap();
    bundle_path
}

#[test]
fn resolver_materializes_the_snapshot_on_first_open() {
    let dir = TempDir::new().unwrap();
    let bundle = make_bundle(&dir);
    let db_path = dir.path().join("cache").join("signatures.db");

    let resolver = Resolver::open_materialized(&db_path, &bundle).unwrap();
    let best = resolver
        .fetch_best("0xa9059cbb".parse::<Selector>().unwrap())
        .unwrap()
        .unwrap();

    assert_eq!(best.folded_name, "transfer(address,uint256)");
    assert!(db_path.is_file());
}

#[test]
fn second_open_reuses_the_materialized_store() {
    let dir = TempDir::new().unwrap();
    let bundle = make_bundle(&dir);
    let db_path = dir.path().join("signatures.db");

    Resolver::open_materialized(&db_path, &bundle).unwrap();
    // Bundle gone: the already-materialized store must be enough.
    fs::remove_file(&bundle).unwrap();

    let resolver = Resolver::open_materialized(&db_path, &bundle).unwrap();
    assert!(resolver
        .fetch_best("0xa9059cbb".parse::<Selector>().unwrap())
        .unwrap()
        .is_some());
}

#[test]
fn missing_store_and_bundle_is_a_storage_failure() {
    let dir = TempDir::new().unwrap();
    let err = Resolver::open_materialized(
        &dir.path().join("signatures.db"),
        &dir.path().join("never-shipped.zst"),
    )
    .unwrap_err();

    assert!(matches!(err, StoreError::SnapshotMissing(_)));
}

#[test]
fn shipped_bundle_resolves_the_erc20_basics() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("signatures.db");

    let resolver = Resolver::open_materialized(&db_path, &bundled_snapshot_path()).unwrap();

    let transfer = resolver
        .fetch_best("0xa9059cbb".parse::<Selector>().unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(transfer.folded_name, "transfer(address,uint256)");
    // Shipped rows carry the co-occurrence context of a full ERC20 ABI.
    assert_eq!(transfer.cooccurs.len(), 9);

    let balance_of = resolver
        .fetch_all("0x70a08231".parse::<Selector>().unwrap())
        .unwrap();
    assert_eq!(balance_of.len(), 1);
    assert_eq!(balance_of[0].name, "balanceOf");
}
