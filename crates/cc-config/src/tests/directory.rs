use crate::DirectoryConfig;

use cc_core::PAGE_SIZE_OPTIONS;
use googletest::assert_that;
use googletest::prelude::{anything, err, ok};

#[test]
fn given_each_offered_page_size_when_validate_then_ok() {
    for page_size in PAGE_SIZE_OPTIONS {
        let config = DirectoryConfig { page_size };
        assert_that!(config.validate(), ok(anything()));
    }
}

#[test]
fn given_unoffered_page_size_when_validate_then_error() {
    let config = DirectoryConfig { page_size: 7 };

    assert_that!(config.validate(), err(anything()));
}
