use std::path::PathBuf;

use postcodes::PostalIndex;

pub fn testdata(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("testdata")
        .join(name)
}

pub fn valid_index() -> PostalIndex {
    PostalIndex::load_all(testdata("valid_dataset.txt")).expect("valid dataset loads")
}
