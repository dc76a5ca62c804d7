/// Entity shape and serialization tests
pub mod entity_tests;
