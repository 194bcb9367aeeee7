mod class_test;
mod middleware_test;

#[path = "../test_utils.rs"]
mod test_utils;
