//! Multi-step gesture workflow tests.

mod double_click_tests;
