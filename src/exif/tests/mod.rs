mod test_utils;
mod reader_tests;
