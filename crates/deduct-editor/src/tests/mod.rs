mod interaction_tests;
mod layout_tests;
