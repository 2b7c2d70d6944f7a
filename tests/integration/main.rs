//! Integration tests driving the menu loop end to end

mod menu_tests;
