//! `file_exists`: the text names an existing path. Blocks on the filesystem.

use std::path::Path;

use super::{BuiltinTable, Check, insert};
use crate::error::CheckResult;
use crate::value::Value;

pub(super) fn register(table: &mut BuiltinTable) {
    insert(table, "file_exists", file_exists);
}

fn file_exists(value: &Value, check: &Check<'_>) -> CheckResult {
    let s = check.text(value)?;
    check.ensure(Path::new(s).exists())
}

#[cfg(test)]
mod tests {
    use crate::validators::testing::passes;

    #[test]
    fn checks_the_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("present.txt");
        std::fs::write(&path, b"x").unwrap();

        assert!(passes("file_exists", &[], path.to_str().unwrap()));
        let missing = dir.path().join("missing.txt");
        assert!(!passes("file_exists", &[], missing.to_str().unwrap()));
    }
}
