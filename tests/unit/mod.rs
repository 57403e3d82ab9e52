// Unit test modules

mod error_test;
