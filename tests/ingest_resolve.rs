//! End-to-end: crawl a directory of contract ABIs, then resolve
//! selectors against the stores the crawl produced.

use std::fs;

use fourbyte::{CompactStore, Ingestor, Resolver, Selector, SignatureStore};
use tempfile::TempDir;

const TOKEN_ABI: &str = r#"[
    {"type": "constructor", "inputs": [{"type": "uint256", "name": "supply"}]},
    {"type": "function", "name": "transfer", "inputs": [
        {"type": "address", "name": "to"}, {"type": "uint256", "name": "value"}
    ]},
    {"type": "function", "name": "balanceOf", "inputs": [
        {"type": "address", "name": "owner"}
    ]},
    {"type": "function", "name": "approve", "inputs": [
        {"type": "address", "name": "spender"}, {"type": "uint256", "name": "value"}
    ]},
    {"type": "function", "name": "allowance", "inputs": [
        {"type": "address", "name": "owner"}, {"type": "address", "name": "spender"}
    ]},
    {"type": "function", "name": "totalSupply", "inputs": []}
]"#;

const MINIMAL_ABI: &str = r#"[
    {"type": "function", "name": "transfer", "inputs": [
        {"type": "address", "name": "dst"}, {"type": "uint256", "name": "wad"}
    ]},
    {"type": "function", "name": "decimals", "inputs": []}
]"#;

fn crawl_fixtures(store_dir: &TempDir, abi_dir: &TempDir) -> (SignatureStore, Resolver) {
    fs::write(abi_dir.path().join("0xaaaa.json"), TOKEN_ABI).unwrap();
    fs::write(abi_dir.path().join("0xbbbb.json"), MINIMAL_ABI).unwrap();

    let db_path = store_dir.path().join("signatures.db");
    let primary = SignatureStore::open(&db_path).unwrap();
    let compact = CompactStore::open(&store_dir.path().join("compact.db")).unwrap();

    let ingestor = Ingestor::new(primary, compact);
    let summary = ingestor.crawl_dir(abi_dir.path()).unwrap();
    assert_eq!(summary.files, 2);
    assert_eq!(summary.skipped_files, 0);

    let store = SignatureStore::open(&db_path).unwrap();
    let resolver = Resolver::new(SignatureStore::open(&db_path).unwrap());
    (store, resolver)
}

#[test]
fn crawl_then_fetch_all_sees_every_observed_context() {
    let store_dir = TempDir::new().unwrap();
    let abi_dir = TempDir::new().unwrap();
    let (_, resolver) = crawl_fixtures(&store_dir, &abi_dir);

    // transfer appears in both contracts, in two different contexts.
    let transfer: Selector = "0xa9059cbb".parse().unwrap();
    let records = resolver.fetch_all(transfer).unwrap();
    assert_eq!(records.len(), 2);
    assert!(records
        .iter()
        .all(|r| r.folded_name == "transfer(address,uint256)"));
}

#[test]
fn crawl_then_fetch_best_prefers_the_richer_context() {
    let store_dir = TempDir::new().unwrap();
    let abi_dir = TempDir::new().unwrap();
    let (_, resolver) = crawl_fixtures(&store_dir, &abi_dir);

    let transfer: Selector = "0xa9059cbb".parse().unwrap();
    let best = resolver.fetch_best(transfer).unwrap().unwrap();

    // The 5-function token ABI outweighs the 2-function one.
    assert_eq!(best.cooccurs.len(), 5);
    // Its param names came from the first contract's declaration.
    assert_eq!(best.params[0].name, "_to");
}

#[test]
fn unknown_selector_stays_quietly_unknown() {
    let store_dir = TempDir::new().unwrap();
    let abi_dir = TempDir::new().unwrap();
    let (_, resolver) = crawl_fixtures(&store_dir, &abi_dir);

    let unknown = Selector::from_raw(0xdead_beef);
    assert!(resolver.fetch_all(unknown).unwrap().is_empty());
    assert!(resolver.fetch_best(unknown).unwrap().is_none());
}

#[test]
fn seed_table_answers_when_the_crawled_store_cannot() {
    let store_dir = TempDir::new().unwrap();
    let abi_dir = TempDir::new().unwrap();
    let (_, resolver) = crawl_fixtures(&store_dir, &abi_dir);

    let curated: Selector = "0x13c30ead".parse().unwrap();
    let best = resolver.fetch_best(curated).unwrap().unwrap();
    assert_eq!(best.name, "swapETHForMaxTransaction");
    assert_eq!(best.cooccurs, vec!["0x13c30ead".to_string()]);
}

#[test]
fn recrawl_leaves_the_store_unchanged() {
    let store_dir = TempDir::new().unwrap();
    let abi_dir = TempDir::new().unwrap();
    let (store, _) = crawl_fixtures(&store_dir, &abi_dir);
    let rows_after_first = store.len().unwrap();

    let primary = SignatureStore::open(&store_dir.path().join("signatures.db")).unwrap();
    let compact = CompactStore::open(&store_dir.path().join("compact.db")).unwrap();
    let summary = Ingestor::new(primary, compact)
        .crawl_dir(abi_dir.path())
        .unwrap();

    assert_eq!(summary.report.inserted, 0);
    assert_eq!(store.len().unwrap(), rows_after_first);
}
