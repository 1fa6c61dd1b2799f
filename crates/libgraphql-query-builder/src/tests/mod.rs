mod argument_tests;
mod name_validator_tests;
