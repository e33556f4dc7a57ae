test_macros::integration_tests!();
